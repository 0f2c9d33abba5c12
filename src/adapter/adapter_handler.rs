/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.*
 */

use crate::{
    status::Status,
    template::{checknothing, examplereport, reportnothing},
};
use as_any::{AsAny, Downcast};
use async_trait::async_trait;
use std::time::Duration;

/// A trait used to specify the lifecycle of a built handler.
///
/// Request handling lives in the template specific handler traits, see [HandlerTemplates].
/// Handler methods may be called concurrently, so handlers should not keep mutable per call state.
#[async_trait]
pub trait Handler: HandlerTemplates + Send + Sync + AsAny + 'static {
    /// Called once when the host is done with this handler.
    async fn close(&self) -> Result<(), String> {
        Ok(())
    }
}

impl Downcast for dyn Handler {}

/// A trait used to expose the template specific handler traits a [handler][Handler] implements.
///
/// When you use the [handler][macro@crate::adapter::handler] macro, this will be implemented automatically.
pub trait HandlerTemplates {
    fn checknothing(&self) -> Option<&dyn checknothing::Handler> {
        None
    }

    fn reportnothing(&self) -> Option<&dyn reportnothing::Handler> {
        None
    }

    fn examplereport(&self) -> Option<&dyn examplereport::Handler> {
        None
    }
}

/// The outcome of a check request.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    pub status: Status,
    /// How long the host may cache this result.
    pub valid_duration: Duration,
    /// How many requests the host may answer with this result.
    pub valid_use_count: i32,
}

impl CheckResult {
    pub fn ok(valid_duration: Duration, valid_use_count: i32) -> Self {
        Self {
            status: Status::ok(),
            valid_duration,
            valid_use_count,
        }
    }
}
