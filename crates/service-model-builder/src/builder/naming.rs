// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use core_model::qname::QName;
use core_model_builder::{
    descriptor::{InterfaceDescriptor, non_empty},
    error::ModelBuildingError,
};

use crate::config::BuildOptions;

const JAXWS_PACKAGE: &str = "jaxws";
const SERVICE: &str = "Service";
const PORT: &str = "Port";

/// Package holding generated wrapper and fault beans, including the trailing dot.
pub fn bean_package(package: &str) -> String {
    if package.is_empty() {
        format!("{JAXWS_PACKAGE}.")
    } else {
        format!("{package}.{JAXWS_PACKAGE}.")
    }
}

pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `com.example.calc` becomes `http://calc.example.com/`.
pub fn namespace_from_package(package: &str) -> Option<String> {
    if package.is_empty() {
        return None;
    }

    let reversed: Vec<_> = package.split('.').rev().collect();
    Some(format!("http://{}/", reversed.join(".")))
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceNames {
    pub service_name: QName,
    pub port_name: QName,
    pub port_type_name: QName,
    pub target_namespace: String,
    pub wsdl_location: Option<String>,
}

pub fn resolve_service_names(
    interface: &InterfaceDescriptor,
    options: &BuildOptions,
) -> Result<ServiceNames, ModelBuildingError> {
    let directive =
        interface
            .service
            .as_ref()
            .ok_or_else(|| ModelBuildingError::MissingRequiredMetadata {
                interface: interface.name.clone(),
                missing: "service directive".to_string(),
            })?;

    let target_namespace = match non_empty(&directive.target_namespace) {
        Some(namespace) => namespace.to_string(),
        None => namespace_from_package(interface.package()).ok_or_else(|| {
            ModelBuildingError::MissingRequiredMetadata {
                interface: interface.name.clone(),
                missing: "target namespace (the interface has no package)".to_string(),
            }
        })?,
    };

    let simple_name = interface.simple_name();
    let explicit_name = non_empty(&directive.name);

    let port_type_name = QName::new(&target_namespace, explicit_name.unwrap_or(simple_name));

    let service_name = options.service_name.clone().unwrap_or_else(|| {
        let local = non_empty(&directive.service_name)
            .map(str::to_string)
            .unwrap_or_else(|| format!("{simple_name}{SERVICE}"));
        QName::new(&target_namespace, local)
    });

    let port_name = options.port_name.clone().unwrap_or_else(|| {
        let local = non_empty(&directive.port_name)
            .map(str::to_string)
            .unwrap_or_else(|| format!("{}{PORT}", explicit_name.unwrap_or(simple_name)));
        QName::new(&service_name.namespace, local)
    });

    if let (Some(service_name), Some(port_name)) = (&options.service_name, &options.port_name)
        && service_name.namespace != port_name.namespace
    {
        return Err(ModelBuildingError::NamespaceMismatch {
            service_name: service_name.clone(),
            port_name: port_name.clone(),
        });
    }

    Ok(ServiceNames {
        service_name,
        port_name,
        port_type_name,
        target_namespace,
        wsdl_location: non_empty(&directive.wsdl_location).map(str::to_string),
    })
}
