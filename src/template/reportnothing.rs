/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.*
 */

//! A report template without any attributes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const TEMPLATE_NAME: &str = "reportnothing";

/// A decoded reportnothing instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub name: String,
}

impl Instance {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Static type metadata of a reportnothing instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Type {}

/// Builder side of the reportnothing template.
pub trait HandlerBuilder: Send + Sync {
    fn set_report_nothing_types(&mut self, types: HashMap<String, Type>);
}

/// Handler side of the reportnothing template.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Report a batch of instances, in the order the host received them.
    async fn handle_report_nothing(&self, instances: &[Instance]) -> Result<(), String>;
}
