// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.
//! Configuration switches, read through [`Environment`] so that tests can supply them without
//! touching the process environment.

use std::collections::HashMap;

pub trait Environment {
    fn get(&self, key: &str) -> Option<String>;

    /// A boolean switch; `default_value` when the key is not set.
    fn enabled(&self, key: &str, default_value: bool) -> Result<bool, EnvError> {
        self.get(key)
            .map_or(Ok(default_value), |value| parse_switch(key, value))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error("Invalid value '{value}' for {key}: expected one of true/false, 1/0, yes/no, on/off")]
    InvalidBoolean { key: String, value: String },
}

fn parse_switch(key: &str, value: String) -> Result<bool, EnvError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(EnvError::InvalidBoolean {
            key: key.to_string(),
            value,
        }),
    }
}

/// The process environment.
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// A fixed set of values.
#[derive(Debug, Clone, Default)]
pub struct MapEnvironment(HashMap<String, String>);

impl Environment for MapEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

impl<const N: usize> From<[(&str, &str); N]> for MapEnvironment {
    fn from(values: [(&str, &str); N]) -> Self {
        Self(
            values
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        )
    }
}
