// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Turns a described service interface into its wire-level [ServiceModel](core_model::service::ServiceModel).

mod builder;
pub mod config;

pub use builder::system_builder::{build_from_interface, build_from_interface_with_binding};
pub use config::{BuildOptions, ModelerConfig};
