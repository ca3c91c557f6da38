// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Groups classified parameters into request/response wrappers (or leaves them standalone for
//! bare operations).

use core_model::{
    parameter::{OperationParameter, WrapperKind, WrapperParameter},
    qname::QName,
    type_ref::TypeRef,
};
use core_model_builder::{
    binding_description::{BoundOperation, PartDirection},
    descriptor::{MethodDescriptor, WrapperDirective, non_empty},
    error::ModelBuildingError,
    resolver::TypeResolver,
};

use super::{
    binding_overlay::wire_order,
    naming::{bean_package, capitalize},
    parameter_builder::ClassifiedParameter,
};

const RESPONSE: &str = "Response";
const PARAMETERS_PART: &str = "parameters";
const RESULT_PART: &str = "result";

#[derive(Debug, Clone, PartialEq)]
pub struct WrapperSpec {
    pub name: QName,
    pub typ: TypeRef,
    pub part_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Wrappers {
    pub request: WrapperSpec,
    /// Absent for one-way operations.
    pub response: Option<WrapperSpec>,
    /// Document wrappers rename their response part when any part travels in a header.
    pub document: bool,
}

pub struct WrapperContext<'a> {
    pub operation_name: &'a str,
    pub target_namespace: &'a str,
    pub package: &'a str,
    pub resolver: &'a dyn TypeResolver,
    pub suppress_lookup: bool,
}

pub fn document_wrappers(
    method: &MethodDescriptor,
    one_way: bool,
    context: &WrapperContext,
) -> Result<Wrappers, ModelBuildingError> {
    let bean_name = format!("{}{}", bean_package(context.package), capitalize(&method.name));

    let request = document_wrapper(
        method.request_wrapper.as_ref(),
        context.operation_name.to_string(),
        bean_name.clone(),
        context,
    )?;

    let response = if one_way {
        None
    } else {
        Some(document_wrapper(
            method.response_wrapper.as_ref(),
            format!("{}{RESPONSE}", context.operation_name),
            format!("{bean_name}{RESPONSE}"),
            context,
        )?)
    };

    Ok(Wrappers {
        request,
        response,
        document: true,
    })
}

fn document_wrapper(
    directive: Option<&WrapperDirective>,
    default_local: String,
    conventional_class: String,
    context: &WrapperContext,
) -> Result<WrapperSpec, ModelBuildingError> {
    let name = QName::new(
        directive
            .and_then(|d| non_empty(&d.target_namespace))
            .unwrap_or(context.target_namespace),
        directive
            .and_then(|d| non_empty(&d.local_name))
            .map(str::to_string)
            .unwrap_or(default_local),
    );
    let part_name = directive
        .and_then(|d| non_empty(&d.part_name))
        .unwrap_or(PARAMETERS_PART)
        .to_string();

    let typ = if context.suppress_lookup {
        TypeRef::wrapper_composite()
    } else {
        match directive.and_then(|d| non_empty(&d.class_name)) {
            // An explicitly named bean must exist
            Some(class_name) => context.resolver.resolve(class_name)?,
            None => context
                .resolver
                .resolve(&conventional_class)
                .unwrap_or_else(|err| {
                    tracing::debug!("{err}. Using a synthetic wrapper composite for '{name}'");
                    TypeRef::wrapper_composite()
                }),
        }
    };

    Ok(WrapperSpec {
        name,
        typ,
        part_name: Some(part_name),
    })
}

/// RPC wrappers are always synthetic composites. `bound` supplies the namespaces when the
/// external binding uses the RPC style.
pub fn rpc_wrappers(
    bound: Option<&BoundOperation>,
    one_way: bool,
    context: &WrapperContext,
) -> Wrappers {
    let request_namespace = bound
        .and_then(|b| non_empty(&b.request_namespace))
        .unwrap_or(context.target_namespace);
    let response_namespace = bound
        .and_then(|b| non_empty(&b.response_namespace))
        .unwrap_or(context.target_namespace);

    let wrapper = |name: QName| WrapperSpec {
        name,
        typ: TypeRef::wrapper_composite(),
        part_name: None,
    };

    Wrappers {
        request: wrapper(QName::new(request_namespace, context.operation_name)),
        response: (!one_way).then(|| {
            wrapper(QName::new(
                response_namespace,
                format!("{}{RESPONSE}", context.operation_name),
            ))
        }),
        document: false,
    }
}

fn in_body(classified: &&ClassifiedParameter) -> bool {
    classified.parameter.is_in() && classified.parameter.in_binding.is_body()
}

fn out_body(classified: &&ClassifiedParameter) -> bool {
    classified.parameter.is_out() && classified.parameter.out_binding.is_body()
}

/// Members of a wrapped operation and its request payload name.
pub fn assemble_wrapped(
    wrappers: Wrappers,
    leaves: &[ClassifiedParameter],
) -> (Vec<OperationParameter>, Option<QName>) {
    let Wrappers {
        request,
        response,
        document,
    } = wrappers;

    let request_payload_name = request.name.clone();

    let mut request_wrapper =
        WrapperParameter::new(WrapperKind::Request, request.name, request.typ, request.part_name);
    for classified in wire_order(leaves.iter().filter(in_body), PartDirection::Input) {
        request_wrapper.add_child(classified.parameter.clone());
    }

    let mut parameters = vec![OperationParameter::Wrapper(request_wrapper)];

    if let Some(response) = response {
        let has_headers = leaves.iter().any(|c| {
            c.parameter.in_binding.is_header() || c.parameter.out_binding.is_header()
        });
        let part_name = if document && has_headers {
            Some(RESULT_PART.to_string())
        } else {
            response.part_name
        };

        let mut response_wrapper =
            WrapperParameter::new(WrapperKind::Response, response.name, response.typ, part_name);
        for classified in wire_order(leaves.iter().filter(out_body), PartDirection::Output) {
            response_wrapper.add_child(classified.parameter.clone());
        }
        parameters.push(OperationParameter::Wrapper(response_wrapper));
    }

    parameters.extend(
        standalone(leaves)
            .into_iter()
            .filter(|c| {
                (c.parameter.is_in() && !c.parameter.in_binding.is_body())
                    || (c.parameter.is_out() && !c.parameter.out_binding.is_body())
            })
            .map(|c| OperationParameter::Single(c.parameter.clone())),
    );

    (parameters, Some(request_payload_name))
}

/// Every part of a bare operation stands alone.
pub fn assemble_bare(leaves: &[ClassifiedParameter]) -> (Vec<OperationParameter>, Option<QName>) {
    let request_payload_name = leaves
        .iter()
        .find(|c| in_body(c))
        .map(|c| c.parameter.name.clone());

    let parameters = standalone(leaves)
        .into_iter()
        .map(|c| OperationParameter::Single(c.parameter.clone()))
        .collect();

    (parameters, request_payload_name)
}

/// Request parts in request wire order, then the response-only parts in response wire order.
fn standalone(leaves: &[ClassifiedParameter]) -> Vec<&ClassifiedParameter> {
    let (request, response): (Vec<_>, Vec<_>) =
        leaves.iter().partition(|c| c.parameter.is_in());

    let mut ordered = wire_order(request, PartDirection::Input);
    ordered.extend(wire_order(response, PartDirection::Output));
    ordered
}

/// A bare operation carries at most one body part per message.
pub fn validate_bare(
    operation_name: &str,
    leaves: &[ClassifiedParameter],
) -> Result<(), ModelBuildingError> {
    let checks: [(fn(&&ClassifiedParameter) -> bool, &'static str); 2] =
        [(in_body, "request"), (out_body, "response")];

    for (in_message, direction) in checks {
        if let Some(second) = leaves.iter().filter(in_message).nth(1) {
            return Err(ModelBuildingError::DuplicateBodyParameter {
                operation: operation_name.to_string(),
                parameter: second.parameter.name.local.clone(),
                direction,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use core_model::parameter::{Mode, Parameter, ParameterBinding};
    use core_model_builder::resolver::KnownTypes;

    use super::*;

    const TNS: &str = "http://calc.example.com/";

    fn context<'a>(known: &'a KnownTypes, suppress_lookup: bool) -> WrapperContext<'a> {
        WrapperContext {
            operation_name: "add",
            target_namespace: TNS,
            package: "com.example.calc",
            resolver: known,
            suppress_lookup,
        }
    }

    fn leaf(
        name: &str,
        mode: Mode,
        index: Option<usize>,
        binding: ParameterBinding,
    ) -> ClassifiedParameter {
        let mut parameter =
            Parameter::new(QName::unqualified(name), TypeRef::new("int"), mode, index);
        parameter.set_binding(binding);
        ClassifiedParameter {
            parameter,
            holder_backed: mode != Mode::In,
            request_index: None,
            response_index: None,
        }
    }

    #[test]
    fn conventional_beans() {
        let known: KnownTypes = [TypeRef::new("com.example.calc.jaxws.Add")]
            .into_iter()
            .collect();

        let wrappers =
            document_wrappers(&MethodDescriptor::new("add"), false, &context(&known, false))
                .unwrap();

        assert_eq!(wrappers.request.name, QName::new(TNS, "add"));
        assert_eq!(wrappers.request.typ, TypeRef::new("com.example.calc.jaxws.Add"));
        assert_eq!(wrappers.request.part_name.as_deref(), Some("parameters"));

        let response = wrappers.response.unwrap();
        assert_eq!(response.name, QName::new(TNS, "addResponse"));
        assert!(response.typ.is_wrapper_composite());
    }

    #[test]
    fn suppressed_lookup() {
        let known: KnownTypes = [TypeRef::new("com.example.calc.jaxws.Add")]
            .into_iter()
            .collect();

        let wrappers =
            document_wrappers(&MethodDescriptor::new("add"), true, &context(&known, true))
                .unwrap();

        assert!(wrappers.request.typ.is_wrapper_composite());
        assert_eq!(wrappers.response, None);
    }

    #[test]
    fn explicit_bean_must_resolve() {
        let mut method = MethodDescriptor::new("add");
        method.request_wrapper = Some(WrapperDirective {
            local_name: Some("AddRequest".into()),
            class_name: Some("com.example.calc.AddRequest".into()),
            ..Default::default()
        });

        let err =
            document_wrappers(&method, false, &context(&KnownTypes::new(), false)).unwrap_err();

        assert!(matches!(
            err,
            ModelBuildingError::TypeNotFound(e) if e.name == "com.example.calc.AddRequest"
        ));
    }

    #[test]
    fn rpc_namespaces_from_binding() {
        let known = KnownTypes::new();
        let mut bound = BoundOperation::default();
        bound.request_namespace = Some("urn:in".into());

        let wrappers = rpc_wrappers(Some(&bound), false, &context(&known, false));

        assert_eq!(wrappers.request.name, QName::new("urn:in", "add"));
        assert_eq!(
            wrappers.response.map(|r| r.name),
            Some(QName::new(TNS, "addResponse"))
        );
        assert!(wrappers.request.typ.is_wrapper_composite());
    }

    #[test]
    fn inout_in_both_wrappers_and_headers_standalone() {
        let known = KnownTypes::new();
        let wrappers =
            document_wrappers(&MethodDescriptor::new("add"), false, &context(&known, false))
                .unwrap();
        let leaves = vec![
            leaf("a", Mode::In, Some(0), ParameterBinding::Body),
            leaf("total", Mode::InOut, Some(1), ParameterBinding::Body),
            leaf("token", Mode::In, Some(2), ParameterBinding::Header),
            leaf("return", Mode::Out, None, ParameterBinding::Body),
        ];

        let (parameters, payload) = assemble_wrapped(wrappers, &leaves);

        assert_eq!(payload, Some(QName::new(TNS, "add")));
        assert_eq!(parameters.len(), 3);

        let request = parameters[0].as_wrapper().unwrap();
        assert_eq!(request.child_names(), vec!["a", "total"]);
        assert!(
            request
                .children
                .iter()
                .all(|c| c.parent == Some(WrapperKind::Request))
        );

        let response = parameters[1].as_wrapper().unwrap();
        assert_eq!(response.child_names(), vec!["total", "return"]);
        assert_eq!(response.parameter.part_name.as_deref(), Some("result"));

        assert_eq!(parameters[2].parameter().name.local, "token");
    }

    #[test]
    fn bare_checks() {
        let leaves = vec![
            leaf("x", Mode::In, Some(0), ParameterBinding::Body),
            leaf("h", Mode::In, Some(1), ParameterBinding::Header),
            leaf("addResponse", Mode::Out, None, ParameterBinding::Body),
        ];
        assert!(validate_bare("add", &leaves).is_ok());

        let (parameters, payload) = assemble_bare(&leaves);
        assert_eq!(payload, Some(QName::unqualified("x")));
        assert_eq!(parameters.len(), 3);
        assert!(parameters.iter().all(|p| p.as_wrapper().is_none()));

        let leaves = vec![
            leaf("x", Mode::In, Some(0), ParameterBinding::Body),
            leaf("y", Mode::InOut, Some(1), ParameterBinding::Body),
        ];
        assert!(matches!(
            validate_bare("add", &leaves),
            Err(ModelBuildingError::DuplicateBodyParameter { parameter, direction: "request", .. })
                if parameter == "y"
        ));

        let leaves = vec![
            leaf("y", Mode::InOut, Some(0), ParameterBinding::Body),
            leaf("addResponse", Mode::Out, None, ParameterBinding::Body),
        ];
        assert!(matches!(
            validate_bare("add", &leaves),
            Err(ModelBuildingError::DuplicateBodyParameter { direction: "response", .. })
        ));
    }

    #[test]
    fn bare_request_parts_precede_response_parts() {
        let mut header = leaf("h", Mode::In, Some(1), ParameterBinding::Header);
        header.request_index = Some(0);
        let mut body = leaf("x", Mode::In, Some(0), ParameterBinding::Body);
        body.request_index = Some(1);
        let mut result = leaf("addResponse", Mode::Out, None, ParameterBinding::Body);
        result.response_index = Some(0);

        let (parameters, _) = assemble_bare(&[body, header, result]);

        let names: Vec<_> = parameters
            .iter()
            .map(|p| p.parameter().name.local.as_str())
            .collect();
        assert_eq!(names, vec!["h", "x", "addResponse"]);
    }
}
