/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.*
 */

//! A check template without any attributes.

use crate::CheckResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const TEMPLATE_NAME: &str = "checknothing";

/// A decoded checknothing instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub name: String,
}

impl Instance {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Static type metadata of a checknothing instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Type {}

/// Builder side of the checknothing template.
pub trait HandlerBuilder: Send + Sync {
    /// Receive the type metadata of all configured instances, keyed by instance name.
    fn set_check_nothing_types(&mut self, types: HashMap<String, Type>);
}

/// Handler side of the checknothing template.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Check a single instance. The host may pass no instance at all.
    async fn handle_check_nothing(&self, instance: Option<&Instance>)
        -> Result<CheckResult, String>;
}
