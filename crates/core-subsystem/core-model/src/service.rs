// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{
    binding::{BindingId, Style},
    operation::OperationModel,
    qname::QName,
};

/// All operations of one service interface, keyed by operation (local) name in declaration order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ServiceModel {
    pub service_name: QName,
    pub port_name: QName,
    pub port_type_name: QName,
    pub target_namespace: String,
    pub binding_id: BindingId,
    pub default_style: Style,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wsdl_location: Option<String>,
    pub operations: IndexMap<String, OperationModel>,
}

impl ServiceModel {
    pub fn operation(&self, name: &str) -> Option<&OperationModel> {
        self.operations.get(name)
    }

    pub fn operations(&self) -> impl Iterator<Item = &OperationModel> {
        self.operations.values()
    }

    /// Find the operation dispatched to a given method.
    pub fn operation_for_method(&self, method_name: &str) -> Option<&OperationModel> {
        self.operations()
            .find(|operation| operation.method.name == method_name)
    }
}
