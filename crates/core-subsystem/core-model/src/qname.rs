// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A namespace-qualified element name. An empty namespace means "unqualified".
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QName {
    #[serde(default)]
    pub namespace: String,
    pub local: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid qualified name '{0}'. Expected 'local' or '{{namespace}}local'")]
pub struct InvalidQName(pub String);

impl QName {
    pub fn new(namespace: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            local: local.into(),
        }
    }

    pub fn unqualified(local: impl Into<String>) -> Self {
        Self::new("", local)
    }

    pub fn is_qualified(&self) -> bool {
        !self.namespace.is_empty()
    }

    /// The same local name in `namespace`, if this name has no namespace yet.
    pub fn qualified_or(self, namespace: &str) -> Self {
        if self.is_qualified() {
            self
        } else {
            Self::new(namespace, self.local)
        }
    }
}

/// Clark notation: `{namespace}local`, or just `local` when unqualified.
impl Display for QName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_qualified() {
            write!(f, "{{{}}}{}", self.namespace, self.local)
        } else {
            write!(f, "{}", self.local)
        }
    }
}

impl FromStr for QName {
    type Err = InvalidQName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidQName(s.to_string());

        let (namespace, local) = match s.strip_prefix('{') {
            Some(rest) => rest.split_once('}').ok_or_else(invalid)?,
            None => ("", s),
        };

        if local.is_empty() || local.contains(['{', '}']) {
            return Err(invalid());
        }

        Ok(QName::new(namespace, local))
    }
}
