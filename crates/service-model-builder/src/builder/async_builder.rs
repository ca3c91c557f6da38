// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use core_model::{operation::Mep, type_ref::TypeRef};
use core_model_builder::{
    descriptor::{MethodDescriptor, ParameterDescriptor},
    shapes::TypeShapes,
};

/// A method mapped back to its synchronous wire contract.
#[derive(Debug)]
pub struct AsyncShape<'a> {
    pub mep: Mep,
    /// The return type as seen on the wire.
    pub return_type: Option<TypeRef>,
    /// Parameters that take part in the message, in declaration order.
    pub parameters: Vec<&'a ParameterDescriptor>,
}

pub fn normalize<'a>(method: &'a MethodDescriptor, shapes: &dyn TypeShapes) -> AsyncShape<'a> {
    let declared_return = method.declared_return();
    let all_parameters = || method.parameters.iter().collect::<Vec<_>>();

    if method.one_way {
        return AsyncShape {
            mep: Mep::OneWay,
            return_type: declared_return.cloned(),
            parameters: all_parameters(),
        };
    }

    match declared_return {
        Some(typ) if shapes.is_polling_future(typ) => AsyncShape {
            mep: Mep::AsyncPoll,
            return_type: effective_return(typ.single_arg()),
            parameters: all_parameters(),
        },
        Some(typ) if shapes.is_deferred_result(typ) => {
            let (handlers, parameters): (Vec<_>, Vec<_>) = method
                .parameters
                .iter()
                .partition(|p| shapes.is_callback_handler(&p.typ));

            let return_type = match handlers.first() {
                Some(handler) => effective_return(handler.typ.single_arg()),
                None => Some(typ.clone()),
            };

            AsyncShape {
                mep: Mep::AsyncCallback,
                return_type,
                parameters,
            }
        }
        _ => AsyncShape {
            mep: Mep::RequestResponse,
            return_type: declared_return.cloned(),
            parameters: all_parameters(),
        },
    }
}

fn effective_return(typ: Option<&TypeRef>) -> Option<TypeRef> {
    typ.filter(|typ| !typ.is_void()).cloned()
}
