// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::{
    binding::BindingStyleDirective,
    fault::Fault,
    parameter::{OperationParameter, Parameter, WrapperKind, WrapperParameter},
    qname::QName,
    type_ref::TypeRef,
};

/// Message exchange pattern.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mep {
    RequestResponse,
    OneWay,
    AsyncPoll,
    AsyncCallback,
}

impl Mep {
    pub fn is_async(&self) -> bool {
        matches!(self, Mep::AsyncPoll | Mep::AsyncCallback)
    }

    pub fn is_one_way(&self) -> bool {
        matches!(self, Mep::OneWay)
    }
}

/// The method as declared, before asynchronous shapes are normalized. Used for dispatch.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MethodShape {
    pub name: String,
    pub return_type: Option<TypeRef>,
    pub parameter_types: Vec<TypeRef>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OperationModel {
    pub name: QName,
    pub method: MethodShape,
    pub mep: Mep,
    pub binding: BindingStyleDirective,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_payload_name: Option<QName>,
    pub parameters: Vec<OperationParameter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub faults: Vec<Fault>,
}

impl OperationModel {
    pub fn local_name(&self) -> &str {
        &self.name.local
    }

    pub fn wrapper(&self, kind: WrapperKind) -> Option<&WrapperParameter> {
        self.parameters
            .iter()
            .filter_map(OperationParameter::as_wrapper)
            .find(|wrapper| wrapper.kind == kind)
    }

    pub fn request_wrapper(&self) -> Option<&WrapperParameter> {
        self.wrapper(WrapperKind::Request)
    }

    pub fn response_wrapper(&self) -> Option<&WrapperParameter> {
        self.wrapper(WrapperKind::Response)
    }

    /// Direct members carried in the request message.
    pub fn request_parameters(&self) -> impl Iterator<Item = &OperationParameter> {
        self.parameters.iter().filter(|p| p.parameter().is_in())
    }

    /// Direct members carried in the response message.
    pub fn response_parameters(&self) -> impl Iterator<Item = &OperationParameter> {
        self.parameters.iter().filter(|p| p.parameter().is_out())
    }

    /// Every leaf parameter, whether standalone or nested in a wrapper. An INOUT parameter
    /// nested in both wrappers is visited twice.
    pub fn leaf_parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().flat_map(|member| match member {
            OperationParameter::Single(parameter) => std::slice::from_ref(parameter).iter(),
            OperationParameter::Wrapper(wrapper) => wrapper.children.iter(),
        })
    }

    pub fn return_parameter(&self) -> Option<&Parameter> {
        self.leaf_parameters().find(|p| p.is_return())
    }

    pub fn fault(&self, local: &str) -> Option<&Fault> {
        self.faults.iter().find(|fault| fault.name.local == local)
    }
}
