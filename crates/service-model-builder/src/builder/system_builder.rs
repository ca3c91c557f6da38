// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use codemap_diagnostic::{Diagnostic, Level};
use indexmap::IndexMap;

use core_model::{
    binding::BindingId,
    operation::{MethodShape, OperationModel},
    service::ServiceModel,
};
use core_model_builder::{
    binding_description::BindingDescription,
    descriptor::{DescriptorSource, InterfaceDescriptor},
    error::ModelBuildingError,
    resolver::TypeResolver,
};

use crate::config::BuildOptions;

use super::{
    naming,
    operation_builder::{self, OperationContext},
};

/// Build the model of the interface supplied by `source`.
///
/// The binding id comes from `options`, defaulting to SOAP 1.1 over HTTP.
pub fn build_from_interface(
    source: &dyn DescriptorSource,
    resolver: &dyn TypeResolver,
    options: &BuildOptions,
) -> Result<ServiceModel, ModelBuildingError> {
    let binding_id: BindingId = match &options.binding_id {
        Some(binding_id) => binding_id.parse()?,
        None => BindingId::default(),
    };

    build(source, resolver, options, binding_id, None)
}

/// Build the model of the interface supplied by `source`, letting `binding` override binding
/// locations, wire order and actions. Every operation must be present in `binding`.
pub fn build_from_interface_with_binding(
    source: &dyn DescriptorSource,
    resolver: &dyn TypeResolver,
    options: &BuildOptions,
    binding: &mut dyn BindingDescription,
) -> Result<ServiceModel, ModelBuildingError> {
    binding.finalize();
    let binding_id: BindingId = binding.binding_id().parse()?;

    build(source, resolver, options, binding_id, Some(&*binding))
}

fn build(
    source: &dyn DescriptorSource,
    resolver: &dyn TypeResolver,
    options: &BuildOptions,
    binding_id: BindingId,
    binding: Option<&dyn BindingDescription>,
) -> Result<ServiceModel, ModelBuildingError> {
    let interface = source.interface();
    let names = naming::resolve_service_names(interface, options)?;

    let context = OperationContext {
        interface,
        shapes: source.shapes(),
        resolver,
        config: options.config,
        target_namespace: &names.target_namespace,
        soap_version: binding_id.soap_version(),
        binding,
    };

    let mut operations = vec![];
    for method in &interface.methods {
        if method.is_excluded() {
            tracing::debug!("Skipping excluded method '{}'", method.name);
            continue;
        }
        operations.push(operation_builder::build_operation(method, &context)?);
    }

    let operations = validate_operations(interface, operations)?;

    Ok(ServiceModel {
        service_name: names.service_name,
        port_name: names.port_name,
        port_type_name: names.port_type_name,
        target_namespace: names.target_namespace,
        binding_id,
        default_style: interface
            .binding
            .as_ref()
            .and_then(|b| b.style)
            .unwrap_or_default(),
        wsdl_location: names.wsdl_location,
        operations,
    })
}

/// Key the operations by name, reporting every name collision at once.
///
/// A method reached twice (same name and parameter types) is kept once.
fn validate_operations(
    interface: &InterfaceDescriptor,
    operations: Vec<OperationModel>,
) -> Result<IndexMap<String, OperationModel>, ModelBuildingError> {
    if operations.is_empty() {
        return Err(ModelBuildingError::EmptyOperationSet {
            interface: interface.name.clone(),
        });
    }

    let mut by_name: IndexMap<String, OperationModel> = IndexMap::new();
    let mut diagnostics = vec![];

    for operation in operations {
        match by_name.get(operation.local_name()) {
            None => {
                by_name.insert(operation.local_name().to_string(), operation);
            }
            Some(existing) if same_method(&existing.method, &operation.method) => {
                tracing::debug!(
                    "Method '{}' is reached more than once; keeping the first",
                    signature(&operation.method)
                );
            }
            Some(existing) => {
                diagnostics.push(Diagnostic {
                    level: Level::Error,
                    message: format!(
                        "Operation '{}' is declared by both '{}' and '{}'",
                        operation.local_name(),
                        signature(&existing.method),
                        signature(&operation.method)
                    ),
                    code: Some("C000".to_string()),
                    spans: vec![],
                });
            }
        }
    }

    if diagnostics.is_empty() {
        Ok(by_name)
    } else {
        Err(ModelBuildingError::DuplicateOperationName {
            interface: interface.name.clone(),
            diagnostics,
        })
    }
}

fn same_method(a: &MethodShape, b: &MethodShape) -> bool {
    a.name == b.name && a.parameter_types == b.parameter_types
}

fn signature(method: &MethodShape) -> String {
    let parameters: Vec<_> = method
        .parameter_types
        .iter()
        .map(|typ| typ.to_string())
        .collect();
    format!("{}({})", method.name, parameters.join(", "))
}
