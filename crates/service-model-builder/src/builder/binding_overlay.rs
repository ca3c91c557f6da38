// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Applies an external binding description over the classifier's defaults.

use core_model::parameter::Mode;
use core_model_builder::binding_description::{BoundOperation, PartDirection};

use super::parameter_builder::ClassifiedParameter;

/// Re-resolve binding locations and wire positions from `bound`.
///
/// Parts the binding does not declare keep their location and lose any position, so they sort
/// after the declared ones in declaration order. Applying the same binding again yields the same
/// result.
pub fn apply(parameters: &mut [ClassifiedParameter], bound: &BoundOperation) {
    for classified in parameters.iter_mut() {
        let part_name = classified.part_name().to_string();
        let request = bound.placement(&part_name, PartDirection::Input);
        let response = bound.placement(&part_name, PartDirection::Output);

        let parameter = &mut classified.parameter;
        match parameter.mode {
            Mode::In => {
                if let Some(placement) = request {
                    parameter.set_binding(placement.binding);
                }
            }
            Mode::Out => {
                if let Some(placement) = response {
                    parameter.set_binding(placement.binding);
                }
            }
            Mode::InOut => {
                if let Some(placement) = request {
                    parameter.in_binding = placement.binding;
                }
                if let Some(placement) = response {
                    parameter.out_binding = placement.binding;
                }
            }
        }

        classified.request_index = request
            .filter(|_| classified.parameter.is_in())
            .map(|p| p.index);
        classified.response_index = response
            .filter(|_| classified.parameter.is_out())
            .map(|p| p.index);
    }
}

/// Wire order of one message: parts with a declared position first, by position, then the rest
/// in declaration order with the return value last.
pub fn wire_order<'a>(
    parameters: impl IntoIterator<Item = &'a ClassifiedParameter>,
    direction: PartDirection,
) -> Vec<&'a ClassifiedParameter> {
    let mut ordered: Vec<_> = parameters.into_iter().collect();
    ordered.sort_by_key(|classified| {
        let index = match direction {
            PartDirection::Input => classified.request_index,
            PartDirection::Output => classified.response_index,
        };
        match index {
            Some(index) => (0, index),
            None => (1, classified.position()),
        }
    });
    ordered
}

#[cfg(test)]
mod tests {
    use core_model::{
        parameter::{Parameter, ParameterBinding},
        qname::QName,
        type_ref::TypeRef,
    };
    use core_model_builder::binding_description::{BindingDescription, BoundPart, ParsedBinding};

    use super::*;

    fn classified(name: &str, mode: Mode, index: Option<usize>) -> ClassifiedParameter {
        let mut parameter = Parameter::new(
            QName::unqualified(name),
            TypeRef::new("int"),
            mode,
            index,
        );
        parameter.part_name = Some(name.to_string());
        ClassifiedParameter {
            parameter,
            holder_backed: mode != Mode::In,
            request_index: None,
            response_index: None,
        }
    }

    fn part(name: &str, direction: PartDirection, binding: ParameterBinding) -> BoundPart {
        BoundPart {
            name: name.to_string(),
            direction,
            binding,
        }
    }

    fn bound(parts: Vec<BoundPart>) -> BoundOperation {
        let mut binding =
            ParsedBinding::new(None).with_operation("op", BoundOperation::new(parts));
        binding.finalize();
        binding.operation("op").cloned().unwrap()
    }

    fn names(ordered: &[&ClassifiedParameter]) -> Vec<String> {
        ordered
            .iter()
            .map(|c| c.parameter.name.local.clone())
            .collect()
    }

    #[test]
    fn declared_index_first() {
        let mut parameters = vec![
            classified("a", Mode::In, Some(0)),
            classified("b", Mode::In, Some(1)),
            classified("c", Mode::In, Some(2)),
        ];
        let bound = bound(vec![
            part("c", PartDirection::Input, ParameterBinding::Body),
            part("a", PartDirection::Input, ParameterBinding::Body),
        ]);

        apply(&mut parameters, &bound);

        assert_eq!(
            names(&wire_order(&parameters, PartDirection::Input)),
            vec!["c", "a", "b"]
        );
    }

    #[test]
    fn return_last_among_unindexed() {
        let mut parameters = vec![
            classified("return", Mode::Out, None),
            classified("x", Mode::Out, Some(0)),
            classified("y", Mode::Out, Some(1)),
        ];
        let bound = bound(vec![part("y", PartDirection::Output, ParameterBinding::Body)]);

        apply(&mut parameters, &bound);

        assert_eq!(
            names(&wire_order(&parameters, PartDirection::Output)),
            vec!["y", "x", "return"]
        );
    }

    #[test]
    fn inout_directions_are_independent() {
        let mut parameters = vec![classified("h", Mode::InOut, Some(0))];
        let bound = bound(vec![
            part("h", PartDirection::Input, ParameterBinding::Header),
            part("h", PartDirection::Output, ParameterBinding::Body),
        ]);

        apply(&mut parameters, &bound);

        assert_eq!(parameters[0].parameter.in_binding, ParameterBinding::Header);
        assert_eq!(parameters[0].parameter.out_binding, ParameterBinding::Body);
        assert_eq!(parameters[0].request_index, Some(0));
        assert_eq!(parameters[0].response_index, Some(0));
    }

    #[test]
    fn idempotent() {
        let mut parameters = vec![
            classified("a", Mode::In, Some(0)),
            classified("b", Mode::InOut, Some(1)),
            classified("return", Mode::Out, None),
        ];
        let bound = bound(vec![
            part("b", PartDirection::Input, ParameterBinding::Body),
            part("a", PartDirection::Input, ParameterBinding::Header),
            part("return", PartDirection::Output, ParameterBinding::Body),
            part("b", PartDirection::Output, ParameterBinding::Unbound),
        ]);

        apply(&mut parameters, &bound);
        let once = parameters.clone();
        apply(&mut parameters, &bound);

        assert_eq!(parameters, once);
    }
}
