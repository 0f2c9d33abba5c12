/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.*
 */

use crate::{
    adapter::{handler, Logger},
    example::{VALID_DURATION, VALID_USES},
    template::{checknothing, examplereport, reportnothing},
    CheckResult, Handler,
};
use async_trait::async_trait;
use std::sync::Arc;

/// Handler of the example adapter.
///
/// Logs every received instance, prefixed with the configured log prefix.
#[handler(checknothing, reportnothing, examplereport)]
pub struct ExampleHandler {
    prefix: String,
    log: Arc<dyn Logger>,
}

impl ExampleHandler {
    pub fn new(prefix: impl Into<String>, log: Arc<dyn Logger>) -> Self {
        Self {
            prefix: prefix.into(),
            log,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

#[async_trait]
impl checknothing::Handler for ExampleHandler {
    async fn handle_check_nothing(
        &self,
        instance: Option<&checknothing::Instance>,
    ) -> Result<CheckResult, String> {
        self.log.info(format_args!(
            "{}: received checknothing instance: {:?}",
            self.prefix, instance
        ));
        Ok(CheckResult::ok(VALID_DURATION, VALID_USES))
    }
}

#[async_trait]
impl reportnothing::Handler for ExampleHandler {
    async fn handle_report_nothing(
        &self,
        instances: &[reportnothing::Instance],
    ) -> Result<(), String> {
        for instance in instances {
            self.log.info(format_args!(
                "{}: received reportnothing instance: {:?}",
                self.prefix, instance
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl examplereport::Handler for ExampleHandler {
    async fn handle_example_report(
        &self,
        instances: &[examplereport::Instance],
    ) -> Result<(), String> {
        for instance in instances {
            self.log.info(format_args!(
                "{}: received example instance: {:?}",
                self.prefix, instance
            ));
        }
        Ok(())
    }
}

impl Handler for ExampleHandler {}
