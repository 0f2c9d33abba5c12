/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.*
 */

//! The set of possible errors when working with this crate.

use crate::ConfigErrors;
use thiserror::Error;

/// The set of possible errors when working with this crate.
#[derive(Error, Debug)]
pub enum AdapterError {
    /// Failed to (de)serialize adapter data
    #[error("Failed to (de)serialize adapter data")]
    Serialization(#[source] serde_json::Error),

    /// Failed to compile the config schema
    #[error("Failed to compile config schema: {0}")]
    Schema(String),

    /// Config did not pass validation
    #[error("Invalid adapter config: {0}")]
    InvalidConfig(#[source] ConfigErrors),

    /// Adapter declares a template it does not implement
    #[error("Adapter '{adapter}' does not support template '{template}'")]
    UnsupportedTemplate { adapter: String, template: String },

    /// Template name is not known to the host
    #[error("Unknown template '{0}'")]
    UnknownTemplate(String),

    /// Failed to build handler
    #[error("Failed to build handler: {0}")]
    Build(String),

    /// Handler failed to process a request
    #[error("Failed to handle '{template}' request: {message}")]
    Handle { template: String, message: String },

    /// Failed to close handler
    #[error("Failed to close handler: {0}")]
    Close(String),
}
