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

/// Direction of data flow relative to the caller.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    #[serde(rename = "IN")]
    In,
    #[serde(rename = "OUT")]
    Out,
    #[serde(rename = "INOUT")]
    InOut,
}

impl Mode {
    /// Carried in the request message.
    pub fn is_in(&self) -> bool {
        matches!(self, Mode::In | Mode::InOut)
    }

    /// Carried in the response message.
    pub fn is_out(&self) -> bool {
        matches!(self, Mode::Out | Mode::InOut)
    }
}

/// Transmission channel of a parameter within one message.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParameterBinding {
    #[default]
    Body,
    Header,
    Unbound,
}

impl ParameterBinding {
    pub fn is_body(&self) -> bool {
        matches!(self, ParameterBinding::Body)
    }

    pub fn is_header(&self) -> bool {
        matches!(self, ParameterBinding::Header)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WrapperKind {
    Request,
    Response,
}

/// One formal parameter or the return value of an operation.
///
/// `index` is the position of the formal parameter in the (normalized) method signature; the
/// return value has no index. An INOUT parameter may be bound differently in the request
/// (`in_binding`) and in the response (`out_binding`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: QName,
    pub typ: TypeRef,
    pub mode: Mode,
    pub index: Option<usize>,
    pub in_binding: ParameterBinding,
    pub out_binding: ParameterBinding,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_name: Option<String>,
    /// The wrapper this parameter is a child of, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<WrapperKind>,
}

impl Parameter {
    pub fn new(name: QName, typ: TypeRef, mode: Mode, index: Option<usize>) -> Self {
        Self {
            name,
            typ,
            mode,
            index,
            in_binding: ParameterBinding::Body,
            out_binding: ParameterBinding::Body,
            part_name: None,
            parent: None,
        }
    }

    /// Use the same binding for both directions.
    pub fn set_binding(&mut self, binding: ParameterBinding) {
        self.in_binding = binding;
        self.out_binding = binding;
    }

    /// The binding of the direction this parameter primarily travels in.
    pub fn binding(&self) -> ParameterBinding {
        match self.mode {
            Mode::Out => self.out_binding,
            Mode::In | Mode::InOut => self.in_binding,
        }
    }

    pub fn is_return(&self) -> bool {
        self.index.is_none()
    }

    pub fn is_in(&self) -> bool {
        self.mode.is_in()
    }

    pub fn is_out(&self) -> bool {
        self.mode.is_out()
    }
}

/// A synthetic element grouping body-bound parameters of one message.
///
/// Children are kept in wire order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WrapperParameter {
    pub kind: WrapperKind,
    pub parameter: Parameter,
    pub children: Vec<Parameter>,
}

impl WrapperParameter {
    pub fn new(kind: WrapperKind, name: QName, typ: TypeRef, part_name: Option<String>) -> Self {
        let mode = match kind {
            WrapperKind::Request => Mode::In,
            WrapperKind::Response => Mode::Out,
        };

        let mut parameter = Parameter::new(name, typ, mode, None);
        parameter.part_name = part_name;

        Self {
            kind,
            parameter,
            children: vec![],
        }
    }

    pub fn name(&self) -> &QName {
        &self.parameter.name
    }

    pub fn add_child(&mut self, mut child: Parameter) {
        child.parent = Some(self.kind);
        self.children.push(child);
    }

    pub fn child(&self, local: &str) -> Option<&Parameter> {
        self.children.iter().find(|child| child.name.local == local)
    }

    pub fn child_names(&self) -> Vec<&str> {
        self.children
            .iter()
            .map(|child| child.name.local.as_str())
            .collect()
    }
}

/// A direct member of an operation: either a standalone parameter or a wrapper.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "member", rename_all = "snake_case")]
pub enum OperationParameter {
    Single(Parameter),
    Wrapper(WrapperParameter),
}

impl OperationParameter {
    pub fn parameter(&self) -> &Parameter {
        match self {
            OperationParameter::Single(parameter) => parameter,
            OperationParameter::Wrapper(wrapper) => &wrapper.parameter,
        }
    }

    pub fn as_wrapper(&self) -> Option<&WrapperParameter> {
        match self {
            OperationParameter::Wrapper(wrapper) => Some(wrapper),
            OperationParameter::Single(_) => None,
        }
    }
}
