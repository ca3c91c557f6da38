// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! The pre-parsed, authoritative protocol binding (a WSDL binding or equivalent) that may
//! override default binding locations and wire order.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use core_model::{
    binding::{BindingId, Style},
    parameter::ParameterBinding,
};

pub trait BindingDescription {
    /// Prepare lookups. Must be invoked before any lookup; invoking it again has no effect.
    fn finalize(&mut self);

    fn binding_id(&self) -> &str;

    fn style(&self) -> Option<Style>;

    fn operation(&self, name: &str) -> Option<&BoundOperation>;
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartDirection {
    Input,
    Output,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BoundPart {
    pub name: String,
    pub direction: PartDirection,
    #[serde(default)]
    pub binding: ParameterBinding,
}

/// Placement of a part within one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartPlacement {
    pub binding: ParameterBinding,
    /// Position among the parts of the same direction.
    pub index: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct BoundOperation {
    #[serde(default)]
    pub soap_action: Option<String>,
    #[serde(default)]
    pub input_action: Option<String>,
    #[serde(default)]
    pub request_namespace: Option<String>,
    #[serde(default)]
    pub response_namespace: Option<String>,
    #[serde(default)]
    pub parts: Vec<BoundPart>,

    #[serde(skip)]
    placements: HashMap<(PartDirection, String), PartPlacement>,
}

impl BoundOperation {
    pub fn new(parts: Vec<BoundPart>) -> Self {
        Self {
            parts,
            ..Default::default()
        }
    }

    fn finalize(&mut self) {
        self.placements.clear();

        let mut next_index: HashMap<PartDirection, usize> = HashMap::new();
        for part in &self.parts {
            let index = next_index.entry(part.direction).or_insert(0);
            self.placements
                .entry((part.direction, part.name.clone()))
                .or_insert(PartPlacement {
                    binding: part.binding,
                    index: *index,
                });
            *index += 1;
        }
    }

    /// Placement of the part named `part_name` in the given direction, if the part is declared.
    pub fn placement(&self, part_name: &str, direction: PartDirection) -> Option<PartPlacement> {
        self.placements
            .get(&(direction, part_name.to_string()))
            .copied()
    }
}

/// A binding description deserialized from its JSON form.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ParsedBinding {
    #[serde(default = "default_binding_id")]
    pub binding_id: String,
    #[serde(default)]
    pub style: Option<Style>,
    #[serde(default)]
    pub operations: IndexMap<String, BoundOperation>,
}

fn default_binding_id() -> String {
    BindingId::default().uri()
}

impl ParsedBinding {
    pub fn new(style: Option<Style>) -> Self {
        Self {
            binding_id: default_binding_id(),
            style,
            operations: IndexMap::new(),
        }
    }

    pub fn with_operation(mut self, name: impl Into<String>, operation: BoundOperation) -> Self {
        self.operations.insert(name.into(), operation);
        self
    }
}

impl BindingDescription for ParsedBinding {
    fn finalize(&mut self) {
        for operation in self.operations.values_mut() {
            operation.finalize();
        }
    }

    fn binding_id(&self) -> &str {
        &self.binding_id
    }

    fn style(&self) -> Option<Style> {
        self.style
    }

    fn operation(&self, name: &str) -> Option<&BoundOperation> {
        self.operations.get(name)
    }
}
