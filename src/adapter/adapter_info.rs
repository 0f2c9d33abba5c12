/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.*
 */

use crate::{adapter::Config, error::AdapterError, HandlerBuilder};

/// Capabilities an adapter declares to the host.
pub struct Info {
    /// Name the adapter is referenced by in operator config.
    pub name: String,
    /// Identifier of the implementation, usually its package path.
    pub implementation: String,
    pub description: String,
    /// Names of the templates the adapter handles.
    pub supported_templates: Vec<String>,
    /// Config used when the operator does not provide one.
    pub default_config: Box<dyn Config>,
    /// Create a fresh [builder][HandlerBuilder].
    pub new_builder: fn() -> Box<dyn HandlerBuilder>,
    /// Decode operator config into the adapter's config type.
    pub decode_config: fn(&serde_json::Value) -> Result<Box<dyn Config>, AdapterError>,
}

impl Info {
    pub fn supports(&self, template: &str) -> bool {
        self.supported_templates.iter().any(|t| t == template)
    }
}

impl std::fmt::Debug for Info {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Info")
            .field("name", &self.name)
            .field("implementation", &self.implementation)
            .field("description", &self.description)
            .field("supported_templates", &self.supported_templates)
            .field("default_config", &self.default_config)
            .finish()
    }
}
