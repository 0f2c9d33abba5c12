/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.*
 */

use crate::{
    template::{checknothing, examplereport, reportnothing},
    CheckResult,
};
use serde::{Deserialize, Serialize};

/// A request the host dispatches to a handler.
///
/// Serialized with the template name as tag, e.g. `{"template": "reportnothing", "instances": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "template", content = "instances", rename_all = "lowercase")]
pub enum Request {
    CheckNothing(Option<checknothing::Instance>),
    ReportNothing(Vec<reportnothing::Instance>),
    ExampleReport(Vec<examplereport::Instance>),
}

impl Request {
    /// Name of the template this request belongs to.
    pub fn template(&self) -> &'static str {
        match self {
            Request::CheckNothing(_) => checknothing::TEMPLATE_NAME,
            Request::ReportNothing(_) => reportnothing::TEMPLATE_NAME,
            Request::ExampleReport(_) => examplereport::TEMPLATE_NAME,
        }
    }
}

/// The answer of a handler to a [request][Request].
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Check(CheckResult),
    Report,
}
