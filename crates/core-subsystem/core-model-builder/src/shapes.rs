// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Capability predicates over declared types.
//!
//! The builder never compares types by identity. It asks whether a type *behaves like* an
//! output holder, a polling future and so on, so hosts with different marker types can plug in
//! their own answers.

use serde::{Deserialize, Serialize};

use core_model::type_ref::TypeRef;

pub trait TypeShapes {
    /// A mutable cell through which a method returns a value (makes the parameter OUT/INOUT).
    fn is_output_holder(&self, typ: &TypeRef) -> bool;

    /// A return type that the caller polls for the eventual response.
    fn is_polling_future(&self, typ: &TypeRef) -> bool;

    /// A handle to a result delivered later (the return type of callback-style async methods).
    fn is_deferred_result(&self, typ: &TypeRef) -> bool;

    /// A parameter that receives the eventual response.
    fn is_callback_handler(&self, typ: &TypeRef) -> bool;

    /// The base of the failures a method may declare as part of its contract. Other throwables
    /// are never modeled as faults.
    fn is_declared_failure(&self, typ: &TypeRef) -> bool;

    /// The failure every remote call may raise. Never modeled as a fault.
    fn is_remote_failure(&self, typ: &TypeRef) -> bool;

    /// Failures that are not declared as part of the contract. Never modeled as a fault.
    fn is_unchecked_failure(&self, typ: &TypeRef) -> bool;

    fn is_checked_failure(&self, typ: &TypeRef) -> bool {
        self.is_declared_failure(typ)
            && !self.is_remote_failure(typ)
            && !self.is_unchecked_failure(typ)
    }
}

/// Answers the capability questions by assignability to configured marker type names.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct MarkerTypes {
    pub output_holder: String,
    pub polling_future: String,
    pub deferred_result: String,
    pub callback_handler: String,
    pub checked_failure: String,
    pub remote_failure: String,
    pub unchecked_failures: Vec<String>,
}

impl Default for MarkerTypes {
    fn default() -> Self {
        Self {
            output_holder: "javax.xml.ws.Holder".to_string(),
            polling_future: "javax.xml.ws.Response".to_string(),
            deferred_result: "java.util.concurrent.Future".to_string(),
            callback_handler: "javax.xml.ws.AsyncHandler".to_string(),
            checked_failure: "java.lang.Exception".to_string(),
            remote_failure: "java.rmi.RemoteException".to_string(),
            unchecked_failures: vec![
                "java.lang.RuntimeException".to_string(),
                "java.lang.Error".to_string(),
            ],
        }
    }
}

impl TypeShapes for MarkerTypes {
    fn is_output_holder(&self, typ: &TypeRef) -> bool {
        typ.is_assignable_to(&self.output_holder)
    }

    fn is_polling_future(&self, typ: &TypeRef) -> bool {
        typ.is_assignable_to(&self.polling_future)
    }

    fn is_deferred_result(&self, typ: &TypeRef) -> bool {
        typ.is_assignable_to(&self.deferred_result)
    }

    fn is_callback_handler(&self, typ: &TypeRef) -> bool {
        typ.is_assignable_to(&self.callback_handler)
    }

    fn is_declared_failure(&self, typ: &TypeRef) -> bool {
        typ.is_assignable_to(&self.checked_failure)
    }

    fn is_remote_failure(&self, typ: &TypeRef) -> bool {
        typ.is_assignable_to(&self.remote_failure)
    }

    fn is_unchecked_failure(&self, typ: &TypeRef) -> bool {
        self.unchecked_failures
            .iter()
            .any(|name| typ.is_assignable_to(name))
    }
}
