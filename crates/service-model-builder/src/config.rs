// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use common::{
    env::{EnvError, Environment},
    env_const::{WSM_QUALIFY_WRAPPED_CHILDREN, WSM_SUPPRESS_WRAPPER_LOOKUP},
};
use core_model::qname::QName;

/// Modeler switches read from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModelerConfig {
    /// Qualify document/wrapped children (and the return value) that have no namespace with
    /// the namespace of their wrapper.
    pub qualify_wrapped_children: bool,
    /// Never look up wrapper beans; always use the synthetic wrapper composite.
    pub suppress_wrapper_lookup: bool,
}

impl ModelerConfig {
    pub fn from_env(env: &dyn Environment) -> Result<Self, EnvError> {
        Ok(Self {
            qualify_wrapped_children: env.enabled(WSM_QUALIFY_WRAPPED_CHILDREN, false)?,
            suppress_wrapper_lookup: env.enabled(WSM_SUPPRESS_WRAPPER_LOOKUP, false)?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Overrides the computed service name.
    pub service_name: Option<QName>,
    /// Overrides the computed port name.
    pub port_name: Option<QName>,
    /// One of the supported binding id URIs (or the `soap11`/`soap12` aliases). Defaults to
    /// SOAP 1.1 over HTTP. Ignored when building with an external binding.
    pub binding_id: Option<String>,
    pub config: ModelerConfig,
}

impl BuildOptions {
    pub fn with_config(config: ModelerConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }
}
