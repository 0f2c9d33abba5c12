/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.*
 */

//! An example adapter showing how to structure an adapter.
//!
//! It handles instances of the `checknothing`, `reportnothing` and `examplereport` templates
//! and logs every instance it receives.
//!
//! # Examples
//! ```
//! # use mixer_example_adapter::{example::get_info, harness::{Harness, Request, TestEnv}, template::TemplateTypes};
//! # use std::sync::Arc;
//! # #[tokio::main]
//! # async fn main() -> Result<(), mixer_example_adapter::error::AdapterError> {
//! let env = TestEnv::new();
//! let harness = Harness::start(get_info(), Arc::new(env.clone()), None, TemplateTypes::default()).await?;
//! harness.handle(Request::CheckNothing(None)).await?;
//! harness.close().await?;
//! assert_eq!(env.logs().len(), 1);
//! # Ok(())
//! # }
//! ```

mod example_builder;
mod example_config;
mod example_handler;

pub use example_builder::*;
pub use example_config::*;
pub use example_handler::*;

use crate::{
    template::{checknothing, examplereport, reportnothing},
    HandlerBuilder, Info,
};
use std::time::Duration;

/// How long the host may cache a check result.
pub const VALID_DURATION: Duration = Duration::from_secs(10);

/// How many requests the host may answer with a single check result.
pub const VALID_USES: i32 = 1000;

/// Return the [Info] describing this adapter.
pub fn get_info() -> Info {
    Info {
        name: "example".to_owned(),
        implementation: "istio.io/extensions/adapter/mixer/example".to_owned(),
        description: "An example mixer adapter to showcase adapter development.".to_owned(),
        supported_templates: vec![
            checknothing::TEMPLATE_NAME.to_owned(),
            reportnothing::TEMPLATE_NAME.to_owned(),
            examplereport::TEMPLATE_NAME.to_owned(),
        ],
        default_config: Box::new(Params::new("mixer example adapter")),
        new_builder,
        decode_config: example_config::decode_config,
    }
}

fn new_builder() -> Box<dyn HandlerBuilder> {
    Box::new(Builder::new())
}
