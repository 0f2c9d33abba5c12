/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.*
 */

//! The report template defined alongside the example adapter.
//!
//! Instances carry an open ended set of attributes.

use crate::template::ValueType;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

pub const TEMPLATE_NAME: &str = "examplereport";

/// A decoded examplereport instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub name: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, serde_json::Value>,
}

impl Instance {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

/// Static type metadata of an examplereport instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Type {
    /// Value type of every attribute, keyed by attribute name.
    #[serde(default)]
    pub attributes: BTreeMap<String, ValueType>,
}

/// Builder side of the examplereport template.
pub trait HandlerBuilder: Send + Sync {
    fn set_example_report_types(&mut self, types: HashMap<String, Type>);
}

/// Handler side of the examplereport template.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle_example_report(&self, instances: &[Instance]) -> Result<(), String>;
}

#[cfg(test)]
mod tests {
    use crate::template::{examplereport::Instance, examplereport::Type, ValueType};
    use serde_json::json;

    #[test]
    fn test_deserialize_instance() {
        let instance: Instance =
            serde_json::from_value(json!({"name": "ei", "attributes": {"foo": "bar", "n": 3}}))
                .unwrap();
        assert_eq!(
            instance,
            Instance::new("ei").attribute("foo", "bar").attribute("n", 3)
        );
    }

    #[test]
    fn test_deserialize_instance_without_attributes() {
        let instance: Instance = serde_json::from_value(json!({"name": "ei"})).unwrap();
        assert!(instance.attributes.is_empty());
    }

    #[test]
    fn test_deserialize_type() {
        let type_: Type = serde_json::from_value(
            json!({"attributes": {"foo": "STRING", "addr": "IP_ADDRESS"}}),
        )
        .unwrap();
        assert_eq!(type_.attributes["foo"], ValueType::String);
        assert_eq!(type_.attributes["addr"], ValueType::IpAddress);
    }
}
