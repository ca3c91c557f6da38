// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Resolves the carried type, mode, qualified name and default binding location of every
//! parameter and of the return value.

use core_model::{
    parameter::{Mode, Parameter, ParameterBinding},
    qname::QName,
    type_ref::TypeRef,
};
use core_model_builder::{
    descriptor::{ParameterDescriptor, ResultDirective, non_empty},
    shapes::TypeShapes,
};

const RETURN: &str = "return";
const RESPONSE: &str = "Response";

/// A parameter together with the facts the later passes need.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedParameter {
    pub parameter: Parameter,
    pub holder_backed: bool,
    /// Position declared by an external binding for the request message.
    pub request_index: Option<usize>,
    /// Position declared by an external binding for the response message.
    pub response_index: Option<usize>,
}

impl ClassifiedParameter {
    fn new(parameter: Parameter, holder_backed: bool) -> Self {
        Self {
            parameter,
            holder_backed,
            request_index: None,
            response_index: None,
        }
    }

    pub fn part_name(&self) -> &str {
        self.parameter
            .part_name
            .as_deref()
            .unwrap_or(&self.parameter.name.local)
    }

    /// Declaration position. The return value sorts after every parameter.
    pub fn position(&self) -> usize {
        self.parameter.index.unwrap_or(usize::MAX)
    }
}

/// Naming rules, which differ per processing style.
#[derive(Debug, Clone, Copy)]
pub enum NamingScheme<'a> {
    DocumentWrapped {
        /// Namespaces used to qualify children without one, when so configured.
        qualify_request: Option<&'a str>,
        qualify_response: Option<&'a str>,
    },
    Rpc,
    Bare {
        operation_name: &'a str,
    },
}

pub struct ClassifierContext<'a> {
    pub target_namespace: &'a str,
    pub scheme: NamingScheme<'a>,
    pub shapes: &'a dyn TypeShapes,
}

pub fn classify_parameters(
    parameters: &[&ParameterDescriptor],
    context: &ClassifierContext,
) -> Vec<ClassifiedParameter> {
    parameters
        .iter()
        .enumerate()
        .map(|(position, descriptor)| classify_parameter(position, descriptor, context))
        .collect()
}

fn classify_parameter(
    position: usize,
    descriptor: &ParameterDescriptor,
    context: &ClassifierContext,
) -> ClassifiedParameter {
    let holder_backed = context.shapes.is_output_holder(&descriptor.typ);
    let carried_type = if holder_backed {
        descriptor
            .typ
            .single_arg()
            .cloned()
            .unwrap_or_else(|| descriptor.typ.clone())
    } else {
        descriptor.typ.clone()
    };

    let directive = descriptor.directive.as_ref();
    let explicit_name = directive.and_then(|d| non_empty(&d.name));
    let explicit_namespace = directive.and_then(|d| non_empty(&d.target_namespace));
    let explicit_part_name = directive.and_then(|d| non_empty(&d.part_name));
    let header = directive.is_some_and(|d| d.header);

    // A holder can always be read as well as written, so it is never plain IN
    let mode = match (directive.and_then(|d| d.mode), holder_backed) {
        (Some(Mode::In) | None, true) => Mode::InOut,
        (Some(mode), _) => mode,
        (None, false) => Mode::In,
    };

    let tns = context.target_namespace;
    let positional_name = || format!("arg{position}");

    let (name, part_name) = match context.scheme {
        NamingScheme::DocumentWrapped {
            qualify_request, ..
        } => {
            let local = explicit_name.map(str::to_string).unwrap_or_else(positional_name);
            let namespace = explicit_namespace
                .or(header.then_some(tns))
                .or(qualify_request)
                .unwrap_or("");
            let part_name = explicit_part_name.unwrap_or(&local).to_string();
            (QName::new(namespace, local), part_name)
        }
        NamingScheme::Rpc => {
            let mut local = explicit_name.map(str::to_string).unwrap_or_else(positional_name);
            let part_name = explicit_part_name.unwrap_or(&local).to_string();
            if explicit_part_name.is_some() && !header {
                local = part_name.clone();
            }
            // Body parts are unqualified, headers cannot be
            let namespace = if header {
                explicit_namespace.unwrap_or(tns)
            } else {
                ""
            };
            (QName::new(namespace, local), part_name)
        }
        NamingScheme::Bare { operation_name } => {
            let local = match explicit_name {
                Some(name) => name.to_string(),
                None if header => positional_name(),
                None if mode == Mode::Out => format!("{operation_name}{RESPONSE}"),
                None => operation_name.to_string(),
            };
            let namespace = explicit_namespace.unwrap_or(tns);
            let part_name = explicit_part_name.unwrap_or(&local).to_string();
            (QName::new(namespace, local), part_name)
        }
    };

    let mut parameter = Parameter::new(name, carried_type, mode, Some(position));
    parameter.part_name = Some(part_name);
    parameter.set_binding(default_binding(header));

    ClassifiedParameter::new(parameter, holder_backed)
}

pub fn classify_return(
    return_type: Option<&TypeRef>,
    result: Option<&ResultDirective>,
    is_async: bool,
    context: &ClassifierContext,
) -> Option<ClassifiedParameter> {
    let return_type = return_type?;

    let explicit_name = result.and_then(|r| non_empty(&r.name));
    let explicit_namespace = result.and_then(|r| non_empty(&r.target_namespace));
    let explicit_part_name = result.and_then(|r| non_empty(&r.part_name));
    let header = result.is_some_and(|r| r.header);

    let tns = context.target_namespace;

    let (name, part_name) = match context.scheme {
        NamingScheme::DocumentWrapped {
            qualify_response, ..
        } => {
            let name = if is_async {
                QName::unqualified(RETURN)
            } else {
                let namespace = explicit_namespace.or(header.then_some(tns)).unwrap_or("");
                QName::new(namespace, explicit_name.unwrap_or(RETURN))
            };
            let name = match qualify_response {
                Some(namespace) => name.qualified_or(namespace),
                None => name,
            };
            let part_name = explicit_part_name.unwrap_or(&name.local).to_string();
            (name, part_name)
        }
        NamingScheme::Rpc => {
            let mut local = explicit_name.unwrap_or(RETURN);
            let part_name = explicit_part_name.unwrap_or(local);
            if explicit_part_name.is_some() && !header {
                local = part_name;
            }
            let name = if header {
                QName::new(explicit_namespace.unwrap_or(tns), local)
            } else {
                QName::unqualified(local)
            };
            (name, part_name.to_string())
        }
        NamingScheme::Bare { operation_name } => {
            let local = explicit_name
                .map(str::to_string)
                .unwrap_or_else(|| format!("{operation_name}{RESPONSE}"));
            let part_name = explicit_part_name.unwrap_or(&local).to_string();
            (
                QName::new(explicit_namespace.unwrap_or(tns), local),
                part_name,
            )
        }
    };

    let mut parameter = Parameter::new(name, return_type.clone(), Mode::Out, None);
    parameter.part_name = Some(part_name);
    parameter.set_binding(default_binding(header));

    Some(ClassifiedParameter::new(parameter, false))
}

fn default_binding(header: bool) -> ParameterBinding {
    if header {
        ParameterBinding::Header
    } else {
        ParameterBinding::Body
    }
}
