// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::{qname::QName, type_ref::TypeRef};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FaultKind {
    /// Payload located through the fault bean naming convention.
    UserDefined,
    /// The exception was generated from a protocol description and exposes its payload.
    FromExternalDescription,
}

/// Wire representation of one declared exception of an operation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Fault {
    pub name: QName,
    pub payload: TypeRef,
    pub exception: TypeRef,
    pub kind: FaultKind,
    pub message_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}
