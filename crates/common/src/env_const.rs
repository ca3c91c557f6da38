// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

pub const WSM_LOG: &str = "WSM_LOG";

/// Qualify document/wrapped children (and the return value) that have no namespace with the
/// namespace of their wrapper element.
pub const WSM_QUALIFY_WRAPPED_CHILDREN: &str = "WSM_QUALIFY_WRAPPED_CHILDREN";

/// Never look up document/wrapped wrapper beans; always use the synthetic wrapper composite.
pub const WSM_SUPPRESS_WRAPPER_LOOKUP: &str = "WSM_SUPPRESS_WRAPPER_LOOKUP";
