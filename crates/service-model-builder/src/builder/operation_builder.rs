// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use core_model::{
    binding::{SoapVersion, Style},
    operation::{MethodShape, OperationModel},
    qname::QName,
    type_ref::TypeRef,
};
use core_model_builder::{
    binding_description::{BindingDescription, BoundOperation},
    descriptor::{InterfaceDescriptor, MethodDescriptor, non_empty},
    error::ModelBuildingError,
    resolver::TypeResolver,
    shapes::TypeShapes,
};

use crate::config::ModelerConfig;

use super::{
    async_builder, binding_overlay,
    fault_builder::{self, FaultContext},
    parameter_builder::{self, ClassifiedParameter, ClassifierContext, NamingScheme},
    style_builder::{self, Processing},
    wrapper_builder::{self, WrapperContext},
};

/// Everything shared by the operations of one interface.
pub struct OperationContext<'a> {
    pub interface: &'a InterfaceDescriptor,
    pub shapes: &'a dyn TypeShapes,
    pub resolver: &'a dyn TypeResolver,
    pub config: ModelerConfig,
    pub target_namespace: &'a str,
    pub soap_version: SoapVersion,
    pub binding: Option<&'a dyn BindingDescription>,
}

pub fn build_operation(
    method: &MethodDescriptor,
    context: &OperationContext,
) -> Result<OperationModel, ModelBuildingError> {
    let operation_name = method.operation_name();

    let bound = match context.binding {
        Some(binding) => Some(binding.operation(operation_name).ok_or_else(|| {
            ModelBuildingError::OperationNotInBinding {
                operation: operation_name.to_string(),
            }
        })?),
        None => None,
    };

    let directive = style_builder::resolve_style(
        context.interface.binding.as_ref(),
        method.binding.as_ref(),
        resolve_action(method, bound),
        context.soap_version,
    );
    if method.binding.is_some() {
        tracing::debug!(
            "Method '{}' overrides the interface style: {:?}/{:?}",
            method.name,
            directive.style,
            directive.wrapper_style
        );
    }
    let processing = Processing::from(&directive);

    let shape = async_builder::normalize(method, context.shapes);
    let one_way = shape.mep.is_one_way();

    let wrapper_context = WrapperContext {
        operation_name,
        target_namespace: context.target_namespace,
        package: context.interface.package(),
        resolver: context.resolver,
        suppress_lookup: context.config.suppress_wrapper_lookup,
    };
    let wrappers = match processing {
        Processing::DocumentWrapped => Some(wrapper_builder::document_wrappers(
            method,
            one_way,
            &wrapper_context,
        )?),
        Processing::Rpc => {
            let rpc_bound = bound.filter(|_| {
                context
                    .binding
                    .is_some_and(|binding| binding.style() == Some(Style::Rpc))
            });
            Some(wrapper_builder::rpc_wrappers(
                rpc_bound,
                one_way,
                &wrapper_context,
            ))
        }
        Processing::Bare => None,
    };

    let scheme = match (processing, &wrappers) {
        (Processing::DocumentWrapped, Some(wrappers))
            if context.config.qualify_wrapped_children =>
        {
            NamingScheme::DocumentWrapped {
                qualify_request: Some(wrappers.request.name.namespace.as_str()),
                qualify_response: wrappers
                    .response
                    .as_ref()
                    .map(|response| response.name.namespace.as_str()),
            }
        }
        (Processing::DocumentWrapped, _) => NamingScheme::DocumentWrapped {
            qualify_request: None,
            qualify_response: None,
        },
        (Processing::Rpc, _) => NamingScheme::Rpc,
        (Processing::Bare, _) => NamingScheme::Bare { operation_name },
    };
    let classifier = ClassifierContext {
        target_namespace: context.target_namespace,
        scheme,
        shapes: context.shapes,
    };

    let mut leaves = parameter_builder::classify_parameters(&shape.parameters, &classifier);

    if one_way {
        validate_one_way(
            operation_name,
            method,
            shape.return_type.as_ref(),
            &leaves,
            context,
        )?;
    } else {
        leaves.extend(parameter_builder::classify_return(
            shape.return_type.as_ref(),
            method.result.as_ref(),
            shape.mep.is_async(),
            &classifier,
        ));
    }

    if let Some(bound) = bound {
        binding_overlay::apply(&mut leaves, bound);
    }

    let (parameters, request_payload_name) = match wrappers {
        Some(wrappers) => wrapper_builder::assemble_wrapped(wrappers, &leaves),
        None => {
            wrapper_builder::validate_bare(operation_name, &leaves)?;
            wrapper_builder::assemble_bare(&leaves)
        }
    };

    let faults = fault_builder::build_faults(
        method,
        &FaultContext {
            operation_name,
            package: context.interface.package(),
            target_namespace: context.target_namespace,
            shapes: context.shapes,
            resolver: context.resolver,
        },
    )?;

    Ok(OperationModel {
        name: QName::new(context.target_namespace, operation_name),
        method: MethodShape {
            name: method.name.clone(),
            return_type: method.declared_return().cloned(),
            parameter_types: method.parameter_types(),
        },
        mep: shape.mep,
        binding: directive,
        request_payload_name,
        parameters,
        faults,
    })
}

/// An explicit input action in the binding wins, then the bound SOAP action, then the action
/// declared on the method.
fn resolve_action(method: &MethodDescriptor, bound: Option<&BoundOperation>) -> Option<String> {
    bound
        .and_then(|b| non_empty(&b.input_action).or(non_empty(&b.soap_action)))
        .or_else(|| method.operation.as_ref().and_then(|op| non_empty(&op.action)))
        .map(str::to_string)
}

fn validate_one_way(
    operation_name: &str,
    method: &MethodDescriptor,
    return_type: Option<&TypeRef>,
    leaves: &[ClassifiedParameter],
    context: &OperationContext,
) -> Result<(), ModelBuildingError> {
    let illegal = |reason: &'static str, offender: String| ModelBuildingError::IllegalOneWayShape {
        operation: operation_name.to_string(),
        reason,
        offender,
    };

    if let Some(return_type) = return_type {
        return Err(illegal("return type", return_type.to_string()));
    }

    if let Some(output) = leaves.iter().find(|c| c.parameter.is_out()) {
        return Err(illegal(
            "output parameter",
            output.parameter.name.local.clone(),
        ));
    }

    if let Some(exception) = method
        .exceptions
        .iter()
        .find(|e| context.shapes.is_checked_failure(&e.typ))
    {
        return Err(illegal("checked exception", exception.typ.name.clone()));
    }

    Ok(())
}
