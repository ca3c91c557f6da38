// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

#![allow(dead_code)]

use core_model::type_ref::TypeRef;
use core_model_builder::{
    descriptor::{
        InterfaceDescriptor, MethodDescriptor, ParameterDescriptor, ParameterDirective,
        ServiceDirective, StaticDescriptorSource,
    },
    resolver::KnownTypes,
    shapes::MarkerTypes,
};

pub const CALC: &str = "com.example.calc.Calculator";
pub const CALC_NS: &str = "http://calc.example.com/";

pub fn interface(name: &str, methods: Vec<MethodDescriptor>) -> InterfaceDescriptor {
    InterfaceDescriptor {
        name: name.to_string(),
        service: Some(ServiceDirective::default()),
        binding: None,
        methods,
    }
}

pub fn source(interface: InterfaceDescriptor) -> StaticDescriptorSource<MarkerTypes> {
    StaticDescriptorSource::new(interface, MarkerTypes::default())
}

pub fn int() -> TypeRef {
    TypeRef::new("int")
}

pub fn holder_of(typ: TypeRef) -> TypeRef {
    TypeRef::new("javax.xml.ws.Holder").with_args(vec![typ])
}

pub fn checked_exception(name: &str) -> TypeRef {
    TypeRef::new(name).with_supertypes(["java.lang.Exception"])
}

pub fn named(typ: TypeRef, name: &str) -> ParameterDescriptor {
    ParameterDescriptor::new(typ).with_directive(ParameterDirective::named(name))
}

/// `int add(int a, int b)`
pub fn add_method() -> MethodDescriptor {
    let mut method = MethodDescriptor::new("add");
    method.parameters = vec![named(int(), "a"), named(int(), "b")];
    method.return_type = Some(int());
    method
}

pub fn no_types() -> KnownTypes {
    KnownTypes::new()
}
