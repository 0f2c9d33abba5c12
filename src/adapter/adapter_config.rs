/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.*
 */

use as_any::{AsAny, Downcast};
use std::fmt::{self, Debug, Display};
use thiserror::Error;

/// A type erased adapter config.
///
/// Auto-implemented for every `Clone + Debug` type, so adapters simply use their own params struct.
/// Recover the concrete type with [downcast_ref][as_any::Downcast::downcast_ref].
///
/// # Examples
/// ```
/// # use mixer_example_adapter::{adapter::Config, example::Params};
/// # use as_any::Downcast;
/// let config: Box<dyn Config> = Box::new(Params::new("foo"));
/// let params = config.downcast_ref::<Params>().unwrap();
/// assert_eq!(params.log_prefix, "foo");
/// ```
pub trait Config: AsAny + Debug + Send + Sync + 'static {
    /// Clone this config into a new box.
    fn clone_config(&self) -> Box<dyn Config>;
}

impl<T> Config for T
where
    T: Clone + Debug + Send + Sync + 'static,
{
    fn clone_config(&self) -> Box<dyn Config> {
        Box::new(self.clone())
    }
}

impl Downcast for dyn Config {}

/// A single config validation error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ConfigError {
    /// Config field the error refers to.
    pub field: String,
    pub message: String,
}

/// A collection of config validation errors.
///
/// An empty collection means the config is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigErrors {
    pub multi: Vec<ConfigError>,
}

impl ConfigErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an error for the given field.
    #[must_use]
    pub fn append(mut self, field: impl Into<String>, message: impl Display) -> Self {
        self.multi.push(ConfigError {
            field: field.into(),
            message: message.to_string(),
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.multi.is_empty()
    }

    pub fn len(&self) -> usize {
        self.multi.len()
    }

    /// `Ok` if no errors were collected.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Display for ConfigErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let errors = self
            .multi
            .iter()
            .map(ConfigError::to_string)
            .collect::<Vec<_>>();
        write!(f, "{} error(s): {}", errors.len(), errors.join("; "))
    }
}

impl std::error::Error for ConfigErrors {}

#[cfg(test)]
mod tests {
    use crate::adapter::{Config, ConfigErrors};
    use as_any::Downcast;

    #[test]
    fn test_empty_errors_are_ok() {
        assert!(ConfigErrors::new().is_empty());
        assert_eq!(ConfigErrors::new().into_result(), Ok(()));
    }

    #[test]
    fn test_append_errors() {
        let errors = ConfigErrors::new()
            .append("logPrefix", "must not be empty")
            .append("other", 42);
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.to_string(),
            "2 error(s): logPrefix: must not be empty; other: 42"
        );
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn test_clone_config() {
        let config: Box<dyn Config> = Box::new(String::from("foo"));
        let cloned = config.clone_config();
        assert_eq!(cloned.downcast_ref::<String>().unwrap(), "foo");
        assert!(cloned.downcast_ref::<i32>().is_none());
    }
}
