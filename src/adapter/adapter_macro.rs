/// Use this on a handler struct to expose the template handlers it implements.
///
/// # Examples
/// ```
/// # use mixer_example_adapter::{prelude::*, template::checknothing};
/// # use async_trait::async_trait;
/// # use std::time::Duration;
/// #[handler(checknothing)]
/// struct ExampleHandler;
///
/// #[async_trait]
/// impl checknothing::Handler for ExampleHandler {
///     async fn handle_check_nothing(
///         &self,
///         _instance: Option<&checknothing::Instance>,
///     ) -> Result<CheckResult, String> {
///         Ok(CheckResult::ok(Duration::from_secs(1), 1))
///     }
/// }
///
/// impl Handler for ExampleHandler {}
/// ```
/// will expand to
/// ```
/// # use mixer_example_adapter::{prelude::*, template::checknothing};
/// # use async_trait::async_trait;
/// # use std::time::Duration;
/// struct ExampleHandler;
///
/// impl HandlerTemplates for ExampleHandler {
///     fn checknothing(&self) -> Option<&dyn checknothing::Handler> {
///         Some(self)
///     }
/// }
/// #
/// # #[async_trait]
/// # impl checknothing::Handler for ExampleHandler {
/// #     async fn handle_check_nothing(
/// #         &self,
/// #         _instance: Option<&checknothing::Instance>,
/// #     ) -> Result<CheckResult, String> {
/// #         Ok(CheckResult::ok(Duration::from_secs(1), 1))
/// #     }
/// # }
/// #
/// # impl Handler for ExampleHandler {}
/// ```
/// Listing a template the struct does not implement is a compile error.
pub use mixer_example_adapter_codegen::handler;

/// Use this on a builder struct to expose the template builders it implements.
///
/// Works like the [handler][macro@handler] macro, implementing
/// [BuilderTemplates][crate::adapter::BuilderTemplates] instead.
pub use mixer_example_adapter_codegen::handler_builder;
