// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Already-extracted declarations of a service interface.
//!
//! Every directive field is optional: `None` (or an empty value in the serialized form) means
//! "not specified", and the builder applies its defaults.

use serde::{Deserialize, Serialize};

use core_model::{
    binding::{Style, WrapperStyle},
    parameter::Mode,
    type_ref::TypeRef,
};

use crate::shapes::TypeShapes;

/// Supplies the interface to model together with the capability predicates for its types.
pub trait DescriptorSource {
    fn interface(&self) -> &InterfaceDescriptor;

    fn shapes(&self) -> &dyn TypeShapes;
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct InterfaceDescriptor {
    /// Fully qualified name, e.g. `com.example.calc.Calculator`.
    pub name: String,
    #[serde(default)]
    pub service: Option<ServiceDirective>,
    #[serde(default)]
    pub binding: Option<StyleDirective>,
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
}

impl InterfaceDescriptor {
    pub fn simple_name(&self) -> &str {
        self.name
            .rsplit_once('.')
            .map(|(_, simple)| simple)
            .unwrap_or(&self.name)
    }

    pub fn package(&self) -> &str {
        self.name
            .rsplit_once('.')
            .map(|(package, _)| package)
            .unwrap_or("")
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ServiceDirective {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub service_name: Option<String>,
    #[serde(default)]
    pub port_name: Option<String>,
    #[serde(default)]
    pub target_namespace: Option<String>,
    #[serde(default)]
    pub wsdl_location: Option<String>,
}

/// Style directive on the interface or on a single method. Each field overrides independently.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct StyleDirective {
    #[serde(default)]
    pub style: Option<Style>,
    #[serde(default)]
    pub parameter_style: Option<WrapperStyle>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct OperationDirective {
    #[serde(default)]
    pub operation_name: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub exclude: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct MethodDescriptor {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
    /// `None` for methods that return nothing.
    #[serde(default)]
    pub return_type: Option<TypeRef>,
    #[serde(default)]
    pub exceptions: Vec<ExceptionDescriptor>,
    #[serde(default)]
    pub one_way: bool,
    #[serde(default)]
    pub operation: Option<OperationDirective>,
    #[serde(default)]
    pub binding: Option<StyleDirective>,
    #[serde(default)]
    pub result: Option<ResultDirective>,
    #[serde(default)]
    pub request_wrapper: Option<WrapperDirective>,
    #[serde(default)]
    pub response_wrapper: Option<WrapperDirective>,
    #[serde(default)]
    pub fault_actions: Vec<FaultActionDirective>,
}

impl MethodDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn is_excluded(&self) -> bool {
        self.operation.as_ref().is_some_and(|op| op.exclude)
    }

    pub fn operation_name(&self) -> &str {
        self.operation
            .as_ref()
            .and_then(|op| non_empty(&op.operation_name))
            .unwrap_or(&self.name)
    }

    /// Returns a non-void return type, if any.
    pub fn declared_return(&self) -> Option<&TypeRef> {
        self.return_type.as_ref().filter(|typ| !typ.is_void())
    }

    pub fn parameter_types(&self) -> Vec<TypeRef> {
        self.parameters.iter().map(|p| p.typ.clone()).collect()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ParameterDescriptor {
    #[serde(rename = "type")]
    pub typ: TypeRef,
    #[serde(default)]
    pub directive: Option<ParameterDirective>,
}

impl ParameterDescriptor {
    pub fn new(typ: TypeRef) -> Self {
        Self {
            typ,
            directive: None,
        }
    }

    pub fn with_directive(mut self, directive: ParameterDirective) -> Self {
        self.directive = Some(directive);
        self
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ParameterDirective {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub target_namespace: Option<String>,
    #[serde(default)]
    pub part_name: Option<String>,
    #[serde(default)]
    pub mode: Option<Mode>,
    #[serde(default)]
    pub header: bool,
}

impl ParameterDirective {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ResultDirective {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub target_namespace: Option<String>,
    #[serde(default)]
    pub part_name: Option<String>,
    #[serde(default)]
    pub header: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct WrapperDirective {
    #[serde(default)]
    pub local_name: Option<String>,
    #[serde(default)]
    pub target_namespace: Option<String>,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub part_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ExceptionDescriptor {
    #[serde(rename = "type")]
    pub typ: TypeRef,
    #[serde(default)]
    pub fault: Option<FaultDirective>,
    /// Return type of the no-argument payload accessor of exceptions generated from a
    /// protocol description.
    #[serde(default)]
    pub fault_info: Option<TypeRef>,
}

impl ExceptionDescriptor {
    pub fn new(typ: TypeRef) -> Self {
        Self {
            typ,
            fault: None,
            fault_info: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct FaultDirective {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub target_namespace: Option<String>,
    #[serde(default)]
    pub fault_bean: Option<String>,
    #[serde(default)]
    pub message_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FaultActionDirective {
    /// Fully qualified name of the exception type.
    pub exception: String,
    pub action: String,
}

/// Treat empty strings the same as absent values.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// A descriptor source over an in-memory interface, e.g. one deserialized from a file.
pub struct StaticDescriptorSource<S: TypeShapes> {
    interface: InterfaceDescriptor,
    shapes: S,
}

impl<S: TypeShapes> StaticDescriptorSource<S> {
    pub fn new(interface: InterfaceDescriptor, shapes: S) -> Self {
        Self { interface, shapes }
    }
}

impl<S: TypeShapes> DescriptorSource for StaticDescriptorSource<S> {
    fn interface(&self) -> &InterfaceDescriptor {
        &self.interface
    }

    fn shapes(&self) -> &dyn TypeShapes {
        &self.shapes
    }
}
