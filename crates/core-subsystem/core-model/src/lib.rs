// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! The wire-level operation model of a remote service interface.
//!
//! A [`service::ServiceModel`] is the only artifact produced by the model builder. Downstream
//! consumers (message marshalling, protocol document generation) read it but never mutate it.

pub mod binding;
pub mod fault;
pub mod operation;
pub mod parameter;
pub mod qname;
pub mod service;
pub mod type_ref;
