/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.*
 */

use crate::{
    adapter::{handler_builder, Config, ConfigErrors, Env},
    example::{ExampleHandler, Params},
    template::{checknothing, examplereport, reportnothing},
    Handler, HandlerBuilder,
};
use as_any::Downcast;
use async_trait::async_trait;
use std::{collections::HashMap, sync::Arc};

/// Builder of the example adapter.
#[handler_builder(checknothing, reportnothing, examplereport)]
#[derive(Debug, Default)]
pub struct Builder {
    config: Option<Box<dyn Config>>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }
}

// Type metadata is not used by this adapter.
impl checknothing::HandlerBuilder for Builder {
    fn set_check_nothing_types(&mut self, _types: HashMap<String, checknothing::Type>) {}
}

impl reportnothing::HandlerBuilder for Builder {
    fn set_report_nothing_types(&mut self, _types: HashMap<String, reportnothing::Type>) {}
}

impl examplereport::HandlerBuilder for Builder {
    fn set_example_report_types(&mut self, _types: HashMap<String, examplereport::Type>) {}
}

#[async_trait]
impl HandlerBuilder for Builder {
    fn set_adapter_config(&mut self, config: Box<dyn Config>) {
        self.config = Some(config);
    }

    fn validate(&self) -> Result<(), ConfigErrors> {
        Ok(())
    }

    async fn build(&self, env: Arc<dyn Env>) -> Result<Box<dyn Handler>, String> {
        let params = self
            .config
            .as_ref()
            .ok_or_else(|| "No adapter config set".to_owned())?
            .downcast_ref::<Params>()
            .ok_or_else(|| "Adapter config is not example params".to_owned())?;

        Ok(Box::new(ExampleHandler::new(
            params.log_prefix.clone(),
            env.logger(),
        )))
    }
}
