// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Fully qualified name of the synthetic composite carried by wrappers that have no bean type.
pub const WRAPPER_COMPOSITE: &str = "WrapperComposite";

/// A structural handle to a type as delivered by the descriptor source.
///
/// `args` are the (already erased) type arguments, `supertypes` the fully qualified names of
/// every type this one is assignable to. The builder never inspects types beyond this record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<TypeRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supertypes: Vec<String>,
}

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: vec![],
            supertypes: vec![],
        }
    }

    pub fn with_args(mut self, args: Vec<TypeRef>) -> Self {
        self.args = args;
        self
    }

    pub fn with_supertypes<S: Into<String>>(
        mut self,
        supertypes: impl IntoIterator<Item = S>,
    ) -> Self {
        self.supertypes = supertypes.into_iter().map(Into::into).collect();
        self
    }

    pub fn wrapper_composite() -> Self {
        Self::new(WRAPPER_COMPOSITE)
    }

    pub fn is_wrapper_composite(&self) -> bool {
        self.name == WRAPPER_COMPOSITE
    }

    pub fn is_void(&self) -> bool {
        self.name == "void"
    }

    pub fn is_assignable_to(&self, name: &str) -> bool {
        self.name == name || self.supertypes.iter().any(|s| s == name)
    }

    /// The type argument of a single-parameter generic type.
    pub fn single_arg(&self) -> Option<&TypeRef> {
        match self.args.as_slice() {
            [arg] => Some(arg),
            _ => None,
        }
    }

    pub fn simple_name(&self) -> &str {
        self.name
            .rsplit_once('.')
            .map(|(_, simple)| simple)
            .unwrap_or(&self.name)
    }

    pub fn package(&self) -> &str {
        self.name
            .rsplit_once('.')
            .map(|(package, _)| package)
            .unwrap_or("")
    }
}

impl Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.args.is_empty() {
            write!(f, "<")?;
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{arg}")?;
            }
            write!(f, ">")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        let typ = TypeRef::new("com.example.calc.Calculator");
        assert_eq!(typ.simple_name(), "Calculator");
        assert_eq!(typ.package(), "com.example.calc");

        let typ = TypeRef::new("Calculator");
        assert_eq!(typ.simple_name(), "Calculator");
        assert_eq!(typ.package(), "");
    }

    #[test]
    fn display_includes_type_arguments() {
        let typ = TypeRef::new("javax.xml.ws.Holder").with_args(vec![TypeRef::new("int")]);
        assert_eq!(typ.to_string(), "javax.xml.ws.Holder<int>");
        assert_eq!(typ.single_arg(), Some(&TypeRef::new("int")));
    }

    #[test]
    fn assignability_follows_supertypes() {
        let typ = TypeRef::new("javax.xml.ws.Response")
            .with_supertypes(["java.util.concurrent.Future"]);
        assert!(typ.is_assignable_to("javax.xml.ws.Response"));
        assert!(typ.is_assignable_to("java.util.concurrent.Future"));
        assert!(!typ.is_assignable_to("javax.xml.ws.AsyncHandler"));
    }
}
