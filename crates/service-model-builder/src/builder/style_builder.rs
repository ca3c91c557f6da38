// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use core_model::binding::{BindingStyleDirective, SoapVersion, Style, WrapperStyle};
use core_model_builder::descriptor::StyleDirective;

/// How the parameters of an operation are laid out on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Processing {
    DocumentWrapped,
    Rpc,
    Bare,
}

impl From<&BindingStyleDirective> for Processing {
    fn from(directive: &BindingStyleDirective) -> Self {
        match (directive.style, directive.wrapper_style) {
            (Style::Document, WrapperStyle::Wrapped) => Processing::DocumentWrapped,
            (Style::Rpc, WrapperStyle::Wrapped) => Processing::Rpc,
            (Style::Document | Style::Rpc, WrapperStyle::Bare) => Processing::Bare,
        }
    }
}

/// Resolve the effective style of one operation. Each method-level field overrides the
/// interface-level one independently.
pub fn resolve_style(
    interface_directive: Option<&StyleDirective>,
    method_directive: Option<&StyleDirective>,
    action: Option<String>,
    soap_version: SoapVersion,
) -> BindingStyleDirective {
    let style = method_directive
        .and_then(|d| d.style)
        .or_else(|| interface_directive.and_then(|d| d.style))
        .unwrap_or_default();

    let wrapper_style = method_directive
        .and_then(|d| d.parameter_style)
        .or_else(|| interface_directive.and_then(|d| d.parameter_style))
        .unwrap_or_default();

    BindingStyleDirective {
        style,
        wrapper_style,
        action: action.or_else(|| soap_version.default_action()),
        soap_version,
    }
}
