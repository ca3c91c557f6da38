// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use codemap_diagnostic::Diagnostic;
use thiserror::Error;

use core_model::{binding::UnsupportedBindingId, qname::QName};

use crate::resolver::TypeNotFound;

#[derive(Error, Debug)]
pub enum ModelBuildingError {
    #[error("Interface '{interface}' is missing required metadata: {missing}")]
    MissingRequiredMetadata { interface: String, missing: String },

    #[error("Port name '{port_name}' and service name '{service_name}' must share a namespace")]
    NamespaceMismatch {
        service_name: QName,
        port_name: QName,
    },

    #[error("Operation '{operation}' is not present in the external binding")]
    OperationNotInBinding { operation: String },

    #[error("One-way operation '{operation}' cannot have {reason} '{offender}'")]
    IllegalOneWayShape {
        operation: String,
        reason: &'static str,
        offender: String,
    },

    #[error(
        "Operation '{operation}' is not a valid bare operation: parameter '{parameter}' is a second {direction} body part"
    )]
    DuplicateBodyParameter {
        operation: String,
        parameter: String,
        direction: &'static str,
    },

    #[error(
        "Fault payload '{payload}' for exception '{exception}' of operation '{operation}' could not be found"
    )]
    FaultPayloadNotFound {
        operation: String,
        exception: String,
        payload: String,
    },

    #[error(transparent)]
    TypeNotFound(#[from] TypeNotFound),

    #[error("Interface '{interface}' does not define any operations")]
    EmptyOperationSet { interface: String },

    // Don't include the details, because they are emitted as diagnostics
    #[error("Interface '{interface}' declares colliding operation names")]
    DuplicateOperationName {
        interface: String,
        diagnostics: Vec<Diagnostic>,
    },

    #[error(transparent)]
    UnsupportedBindingId(#[from] UnsupportedBindingId),
}
