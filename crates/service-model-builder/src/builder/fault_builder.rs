// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use core_model::{
    fault::{Fault, FaultKind},
    qname::QName,
};
use core_model_builder::{
    descriptor::{ExceptionDescriptor, MethodDescriptor, non_empty},
    error::ModelBuildingError,
    resolver::TypeResolver,
    shapes::TypeShapes,
};

use super::naming::bean_package;

const BEAN: &str = "Bean";

pub struct FaultContext<'a> {
    pub operation_name: &'a str,
    /// Package of the service interface, used to locate fault beans by convention.
    pub package: &'a str,
    pub target_namespace: &'a str,
    pub shapes: &'a dyn TypeShapes,
    pub resolver: &'a dyn TypeResolver,
}

/// One fault per distinct declared checked exception.
pub fn build_faults(
    method: &MethodDescriptor,
    context: &FaultContext,
) -> Result<Vec<Fault>, ModelBuildingError> {
    let mut faults: Vec<Fault> = vec![];

    for exception in &method.exceptions {
        if !context.shapes.is_checked_failure(&exception.typ) {
            continue;
        }
        if faults.iter().any(|f| f.exception == exception.typ) {
            continue;
        }

        let mut fault = build_fault(exception, context)?;
        fault.action = method
            .fault_actions
            .iter()
            .find(|fa| fa.exception == exception.typ.name && !fa.action.is_empty())
            .map(|fa| fa.action.clone());

        faults.push(fault);
    }

    Ok(faults)
}

fn build_fault(
    exception: &ExceptionDescriptor,
    context: &FaultContext,
) -> Result<Fault, ModelBuildingError> {
    let simple_name = exception.typ.simple_name();
    let directive = exception.fault.as_ref();

    let name = QName::new(
        directive
            .and_then(|d| non_empty(&d.target_namespace))
            .unwrap_or(context.target_namespace),
        directive
            .and_then(|d| non_empty(&d.name))
            .unwrap_or(simple_name),
    );
    let message_name = directive
        .and_then(|d| non_empty(&d.message_name))
        .unwrap_or(simple_name)
        .to_string();

    let (payload, kind) = match &exception.fault_info {
        Some(payload) => (payload.clone(), FaultKind::FromExternalDescription),
        None => {
            let bean_name = directive
                .and_then(|d| non_empty(&d.fault_bean))
                .map(str::to_string)
                .unwrap_or_else(|| format!("{}{simple_name}{BEAN}", bean_package(context.package)));

            let payload = context.resolver.resolve(&bean_name).map_err(|_| {
                ModelBuildingError::FaultPayloadNotFound {
                    operation: context.operation_name.to_string(),
                    exception: exception.typ.name.clone(),
                    payload: bean_name.clone(),
                }
            })?;
            (payload, FaultKind::UserDefined)
        }
    };

    Ok(Fault {
        name,
        payload,
        exception: exception.typ.clone(),
        kind,
        message_name,
        action: None,
    })
}

#[cfg(test)]
mod tests {
    use core_model::type_ref::TypeRef;
    use core_model_builder::{
        descriptor::{FaultActionDirective, FaultDirective},
        resolver::KnownTypes,
        shapes::MarkerTypes,
    };

    use super::*;

    const TNS: &str = "http://bank.example.com/";

    fn checked(name: &str) -> TypeRef {
        TypeRef::new(name).with_supertypes(["java.lang.Exception"])
    }

    fn build(
        method: &MethodDescriptor,
        known: &KnownTypes,
    ) -> Result<Vec<Fault>, ModelBuildingError> {
        let shapes = MarkerTypes::default();
        build_faults(
            method,
            &FaultContext {
                operation_name: &method.name,
                package: "com.example.bank",
                target_namespace: TNS,
                shapes: &shapes,
                resolver: known,
            },
        )
    }

    #[test]
    fn user_defined_by_convention() {
        let mut method = MethodDescriptor::new("withdraw");
        method.exceptions = vec![
            ExceptionDescriptor::new(checked("com.example.bank.InsufficientFunds")),
            ExceptionDescriptor::new(TypeRef::new("java.rmi.RemoteException")),
            ExceptionDescriptor::new(
                TypeRef::new("java.lang.IllegalStateException")
                    .with_supertypes(["java.lang.RuntimeException"]),
            ),
        ];
        method.fault_actions = vec![FaultActionDirective {
            exception: "com.example.bank.InsufficientFunds".into(),
            action: "urn:withdraw:fault".into(),
        }];
        let known: KnownTypes = [TypeRef::new("com.example.bank.jaxws.InsufficientFundsBean")]
            .into_iter()
            .collect();

        let faults = build(&method, &known).unwrap();

        assert_eq!(faults.len(), 1);
        let fault = &faults[0];
        assert_eq!(fault.name, QName::new(TNS, "InsufficientFunds"));
        assert_eq!(fault.kind, FaultKind::UserDefined);
        assert_eq!(
            fault.payload,
            TypeRef::new("com.example.bank.jaxws.InsufficientFundsBean")
        );
        assert_eq!(fault.message_name, "InsufficientFunds");
        assert_eq!(fault.action.as_deref(), Some("urn:withdraw:fault"));
    }

    #[test]
    fn from_external_description() {
        let mut exception = ExceptionDescriptor::new(checked("com.example.bank.Overdrawn"));
        exception.fault_info = Some(TypeRef::new("com.example.bank.types.OverdrawnInfo"));
        exception.fault = Some(FaultDirective {
            message_name: Some("OverdrawnMessage".into()),
            ..Default::default()
        });
        let mut method = MethodDescriptor::new("withdraw");
        method.exceptions = vec![exception];

        let faults = build(&method, &KnownTypes::new()).unwrap();

        assert_eq!(faults[0].kind, FaultKind::FromExternalDescription);
        assert_eq!(
            faults[0].payload,
            TypeRef::new("com.example.bank.types.OverdrawnInfo")
        );
        assert_eq!(faults[0].message_name, "OverdrawnMessage");
    }

    #[test]
    fn missing_bean() {
        let mut method = MethodDescriptor::new("withdraw");
        method.exceptions = vec![ExceptionDescriptor::new(checked(
            "com.example.bank.InsufficientFunds",
        ))];

        let err = build(&method, &KnownTypes::new()).unwrap_err();

        assert!(matches!(
            err,
            ModelBuildingError::FaultPayloadNotFound { operation, payload, .. }
                if operation == "withdraw"
                    && payload == "com.example.bank.jaxws.InsufficientFundsBean"
        ));
    }

    #[test]
    fn duplicate_exceptions_yield_one_fault() {
        let mut method = MethodDescriptor::new("withdraw");
        let exception = ExceptionDescriptor::new(checked("com.example.bank.Frozen"));
        method.exceptions = vec![exception.clone(), exception];
        let known: KnownTypes = [TypeRef::new("com.example.bank.jaxws.FrozenBean")]
            .into_iter()
            .collect();

        assert_eq!(build(&method, &known).unwrap().len(), 1);
    }
}
