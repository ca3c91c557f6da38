// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! On-disk (JSON) forms of the builder inputs.

use std::{fs, path::Path};

use anyhow::{Result, anyhow};
use serde::Deserialize;

use core_model::type_ref::TypeRef;
use core_model_builder::{
    binding_description::ParsedBinding,
    descriptor::{InterfaceDescriptor, StaticDescriptorSource},
    resolver::KnownTypes,
    shapes::MarkerTypes,
};

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct DescriptorFile {
    pub interface: InterfaceDescriptor,
    /// Types the resolver can find (wrapper and fault beans).
    #[serde(default)]
    pub types: Vec<TypeRef>,
    /// Overrides for the marker type names behind the capability predicates.
    #[serde(default)]
    pub markers: MarkerTypes,
}

impl DescriptorFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow!("Could not read descriptor file {}: {}", path.display(), e))?;
        Self::parse(&content)
            .map_err(|e| anyhow!("Invalid descriptor file {}: {}", path.display(), e))
    }

    fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn into_parts(self) -> (StaticDescriptorSource<MarkerTypes>, KnownTypes) {
        let known_types = self.types.into_iter().collect();
        (
            StaticDescriptorSource::new(self.interface, self.markers),
            known_types,
        )
    }
}

pub fn load_binding(path: &Path) -> Result<ParsedBinding> {
    let content = fs::read_to_string(path)
        .map_err(|e| anyhow!("Could not read binding description {}: {}", path.display(), e))?;
    serde_json::from_str(&content)
        .map_err(|e| anyhow!("Invalid binding description {}: {}", path.display(), e))
}
