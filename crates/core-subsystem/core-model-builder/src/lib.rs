// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Inputs of the service model builder and the contracts of its collaborators.
//!
//! Metadata extraction (annotations, reflection) happens elsewhere; this crate only describes
//! the already-structured records it produces, the capability predicates that recognize special
//! type shapes, the type resolver, and the optional external binding description.

pub mod binding_description;
pub mod descriptor;
pub mod error;
pub mod resolver;
pub mod shapes;
