/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.*
 */

use crate::{
    adapter::{Config, ConfigErrors, Env},
    template::{checknothing, examplereport, reportnothing},
    Handler,
};
use as_any::{AsAny, Downcast};
use async_trait::async_trait;
use std::sync::Arc;

/// A trait used to specify how an adapter turns its config into a [handler][Handler].
///
/// The host drives a builder through `set_adapter_config`, the per template type setters,
/// `validate` and finally `build`. A new builder is created for every config change.
///
/// # Examples
/// ```
/// # use mixer_example_adapter::{prelude::*, template::checknothing};
/// # use async_trait::async_trait;
/// # use std::{collections::HashMap, sync::Arc};
/// #[handler_builder(checknothing)]
/// #[derive(Default)]
/// struct ExampleBuilder {
///     config: Option<Box<dyn Config>>,
/// }
///
/// impl checknothing::HandlerBuilder for ExampleBuilder {
///     fn set_check_nothing_types(&mut self, _types: HashMap<String, checknothing::Type>) {}
/// }
///
/// #[async_trait]
/// impl HandlerBuilder for ExampleBuilder {
///     fn set_adapter_config(&mut self, config: Box<dyn Config>) {
///         self.config = Some(config);
///     }
///
///     fn validate(&self) -> Result<(), ConfigErrors> {
///         Ok(())
///     }
///
///     async fn build(&self, env: Arc<dyn Env>) -> Result<Box<dyn Handler>, String> {
///         // ...
///         # Err("not built".to_owned())
///     }
/// }
/// ```
#[async_trait]
pub trait HandlerBuilder: BuilderTemplates + Send + Sync + AsAny + 'static {
    /// Store the adapter config handed over by the host.
    fn set_adapter_config(&mut self, config: Box<dyn Config>);

    /// Check the stored config.
    fn validate(&self) -> Result<(), ConfigErrors>;

    /// Construct a [handler][Handler] from the stored config.
    async fn build(&self, env: Arc<dyn Env>) -> Result<Box<dyn Handler>, String>;
}

impl Downcast for dyn HandlerBuilder {}

/// A trait used to expose the template specific builder traits a [builder][HandlerBuilder] implements.
///
/// When you use the [handler_builder][macro@crate::adapter::handler_builder] macro, this will be implemented automatically.
pub trait BuilderTemplates {
    fn checknothing(&mut self) -> Option<&mut dyn checknothing::HandlerBuilder> {
        None
    }

    fn reportnothing(&mut self) -> Option<&mut dyn reportnothing::HandlerBuilder> {
        None
    }

    fn examplereport(&mut self) -> Option<&mut dyn examplereport::HandlerBuilder> {
        None
    }
}
