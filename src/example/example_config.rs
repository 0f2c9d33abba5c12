/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.*
 */

use crate::{
    adapter::{Config, ConfigErrors},
    error::AdapterError,
};
use jsonschema::JSONSchema;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

/// Config of the example adapter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Params {
    /// Prefix of every log line the handler writes.
    #[serde(default)]
    pub log_prefix: String,
}

impl Params {
    pub fn new(log_prefix: impl Into<String>) -> Self {
        Self {
            log_prefix: log_prefix.into(),
        }
    }

    /// JSON schema operator config has to satisfy.
    pub fn schema() -> Result<serde_json::Value, AdapterError> {
        serde_json::to_value(&schema_for!(Self)).map_err(AdapterError::Serialization)
    }

    /// Validate operator config against the [schema][Params::schema] and deserialize it.
    pub fn decode(value: &serde_json::Value) -> Result<Self, AdapterError> {
        let schema = Self::schema()?;
        let compiled = JSONSchema::compile(&schema)
            .map_err(|err| AdapterError::Schema(format!("{:?}", err)))?;

        if let Err(errors) = compiled.validate(value) {
            let errors = errors.fold(ConfigErrors::new(), |errors, err| {
                errors.append("params", err)
            });
            return Err(AdapterError::InvalidConfig(errors));
        }

        serde_json::from_value(value.clone()).map_err(AdapterError::Serialization)
    }
}

pub(crate) fn decode_config(value: &serde_json::Value) -> Result<Box<dyn Config>, AdapterError> {
    Ok(Box::new(Params::decode(value)?))
}

#[cfg(test)]
mod tests {
    use crate::{error::AdapterError, example::Params};
    use serde_json::json;

    #[test]
    fn test_decode_params() {
        assert_eq!(
            Params::decode(&json!({"logPrefix": "foo"})).unwrap(),
            Params::new("foo")
        );
    }

    #[test]
    fn test_decode_empty_params() {
        assert_eq!(Params::decode(&json!({})).unwrap(), Params::new(""));
    }

    #[test]
    fn test_decode_wrong_type() {
        assert!(matches!(
            Params::decode(&json!({"logPrefix": 42})),
            Err(AdapterError::InvalidConfig(errors)) if !errors.is_empty()
        ));
    }

    #[test]
    fn test_decode_unknown_field() {
        assert!(matches!(
            Params::decode(&json!({"logPrefix": "foo", "bar": 1})),
            Err(AdapterError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_schema_names_prefix() {
        let schema = Params::schema().unwrap();
        assert!(schema["properties"]["logPrefix"].is_object());
    }
}
