// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::HashMap;

use thiserror::Error;

use core_model::type_ref::TypeRef;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Type '{name}' could not be resolved")]
pub struct TypeNotFound {
    pub name: String,
}

/// Looks up types by fully qualified name. Used to locate wrapper and fault beans.
pub trait TypeResolver {
    fn resolve(&self, name: &str) -> Result<TypeRef, TypeNotFound>;
}

/// A resolver over a fixed set of types.
#[derive(Debug, Clone, Default)]
pub struct KnownTypes {
    types: HashMap<String, TypeRef>,
}

impl KnownTypes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, typ: TypeRef) {
        self.types.insert(typ.name.clone(), typ);
    }
}

impl FromIterator<TypeRef> for KnownTypes {
    fn from_iter<T: IntoIterator<Item = TypeRef>>(iter: T) -> Self {
        let mut known = KnownTypes::new();
        for typ in iter {
            known.add(typ);
        }
        known
    }
}

impl TypeResolver for KnownTypes {
    fn resolve(&self, name: &str) -> Result<TypeRef, TypeNotFound> {
        self.types.get(name).cloned().ok_or_else(|| TypeNotFound {
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_known_and_unknown() {
        let known: KnownTypes = [TypeRef::new("com.example.jaxws.Add")].into_iter().collect();

        assert_eq!(
            known.resolve("com.example.jaxws.Add"),
            Ok(TypeRef::new("com.example.jaxws.Add"))
        );
        assert_eq!(
            known.resolve("com.example.jaxws.AddResponse"),
            Err(TypeNotFound {
                name: "com.example.jaxws.AddResponse".to_string()
            })
        );
    }
}
