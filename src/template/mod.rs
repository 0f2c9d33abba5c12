/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.*
 */

//! Request templates the host decodes instances into.
//!
//! Every template module provides the decoded `Instance`, the static `Type` metadata,
//! a `HandlerBuilder` trait receiving the type metadata and a `Handler` trait receiving instances.

pub mod checknothing;
pub mod examplereport;
pub mod reportnothing;
mod value_type;

pub use value_type::*;

use std::collections::HashMap;

/// Names of all templates known to the host.
pub const KNOWN_TEMPLATES: [&str; 3] = [
    checknothing::TEMPLATE_NAME,
    reportnothing::TEMPLATE_NAME,
    examplereport::TEMPLATE_NAME,
];

/// Type metadata for every template, keyed by instance name.
///
/// The host infers these from operator config and hands them to the builder before validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateTypes {
    pub checknothing: HashMap<String, checknothing::Type>,
    pub reportnothing: HashMap<String, reportnothing::Type>,
    pub examplereport: HashMap<String, examplereport::Type>,
}
