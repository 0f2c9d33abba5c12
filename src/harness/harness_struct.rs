/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.*
 */

use crate::{
    adapter::{BuilderTemplates, Env, HandlerTemplates},
    error::AdapterError,
    harness::{Request, Response},
    template::{checknothing, examplereport, reportnothing, TemplateTypes},
    Handler, HandlerBuilder, Info,
};
use futures::future;
use std::{mem, sync::Arc};

/// A built adapter, ready to receive requests.
///
/// # Examples
/// ```
/// # use mixer_example_adapter::{
/// #     example::get_info, error::AdapterError, harness::{Harness, Request, Response, TestEnv},
/// #     template::{reportnothing, TemplateTypes},
/// # };
/// # use serde_json::json;
/// # use std::sync::Arc;
/// # #[tokio::main]
/// # async fn main() -> Result<(), AdapterError> {
/// let env = TestEnv::new();
/// let params = json!({"logPrefix": "docs"});
/// let harness = Harness::start(
///     get_info(),
///     Arc::new(env.clone()),
///     Some(&params),
///     TemplateTypes::default(),
/// )
/// .await?;
///
/// let response = harness
///     .handle(Request::ReportNothing(vec![reportnothing::Instance::new("rni")]))
///     .await?;
/// assert_eq!(response, Response::Report);
/// assert!(env.logs()[0].starts_with("docs:"));
///
/// harness.close().await?;
/// # Ok(())
/// # }
/// ```
pub struct Harness {
    info: Info,
    handler: Arc<dyn Handler>,
}

impl Harness {
    /// Build a handler for the adapter described by `info`.
    ///
    /// Uses the adapter's default config if no `params` are given.
    pub async fn start(
        info: Info,
        env: Arc<dyn Env>,
        params: Option<&serde_json::Value>,
        types: TemplateTypes,
    ) -> Result<Self, AdapterError> {
        log::debug!(
            "Starting adapter '{}' ({})",
            info.name,
            info.implementation
        );

        let config = match params {
            Some(params) => (info.decode_config)(params)?,
            None => info.default_config.clone_config(),
        };

        let mut builder = (info.new_builder)();
        builder.set_adapter_config(config);
        set_types(&info, builder.as_mut(), types)?;
        builder.validate().map_err(AdapterError::InvalidConfig)?;

        let handler: Arc<dyn Handler> =
            Arc::from(builder.build(env).await.map_err(AdapterError::Build)?);

        for template in &info.supported_templates {
            if !handler_supports(handler.as_ref(), template)? {
                return Err(unsupported(&info, template));
            }
        }

        log::info!(
            "Adapter '{}' handles templates {:?}",
            info.name,
            info.supported_templates
        );

        Ok(Self { info, handler })
    }

    pub fn info(&self) -> &Info {
        &self.info
    }

    /// The built handler, e.g. to [downcast][as_any::Downcast] it.
    pub fn handler(&self) -> &dyn Handler {
        self.handler.as_ref()
    }

    /// Dispatch a request to the handler.
    pub async fn handle(&self, request: Request) -> Result<Response, AdapterError> {
        let template = request.template();
        if !self.info.supports(template) {
            return Err(unsupported(&self.info, template));
        }

        log::trace!(
            "Dispatching {} request to adapter '{}'",
            template,
            self.info.name
        );

        let result = match &request {
            Request::CheckNothing(instance) => self
                .handler
                .checknothing()
                .ok_or_else(|| unsupported(&self.info, template))?
                .handle_check_nothing(instance.as_ref())
                .await
                .map(Response::Check),
            Request::ReportNothing(instances) => self
                .handler
                .reportnothing()
                .ok_or_else(|| unsupported(&self.info, template))?
                .handle_report_nothing(instances)
                .await
                .map(|_| Response::Report),
            Request::ExampleReport(instances) => self
                .handler
                .examplereport()
                .ok_or_else(|| unsupported(&self.info, template))?
                .handle_example_report(instances)
                .await
                .map(|_| Response::Report),
        };

        result.map_err(|message| {
            log::warn!(
                "Adapter '{}' failed to handle {} request: {}",
                self.info.name,
                template,
                message
            );
            AdapterError::Handle {
                template: template.to_owned(),
                message,
            }
        })
    }

    /// Dispatch all requests concurrently.
    ///
    /// Results are returned in request order.
    pub async fn handle_all(&self, requests: Vec<Request>) -> Vec<Result<Response, AdapterError>> {
        future::join_all(requests.into_iter().map(|request| self.handle(request))).await
    }

    /// Close the handler. No requests can be dispatched afterwards.
    pub async fn close(self) -> Result<(), AdapterError> {
        log::debug!("Closing handler of adapter '{}'", self.info.name);
        self.handler.close().await.map_err(AdapterError::Close)
    }
}

fn set_types(
    info: &Info,
    builder: &mut dyn HandlerBuilder,
    types: TemplateTypes,
) -> Result<(), AdapterError> {
    let TemplateTypes {
        checknothing: mut check_nothing_types,
        reportnothing: mut report_nothing_types,
        examplereport: mut example_report_types,
    } = types;

    for template in &info.supported_templates {
        match template.as_str() {
            checknothing::TEMPLATE_NAME => builder
                .checknothing()
                .ok_or_else(|| unsupported(info, template))?
                .set_check_nothing_types(mem::take(&mut check_nothing_types)),
            reportnothing::TEMPLATE_NAME => builder
                .reportnothing()
                .ok_or_else(|| unsupported(info, template))?
                .set_report_nothing_types(mem::take(&mut report_nothing_types)),
            examplereport::TEMPLATE_NAME => builder
                .examplereport()
                .ok_or_else(|| unsupported(info, template))?
                .set_example_report_types(mem::take(&mut example_report_types)),
            other => return Err(AdapterError::UnknownTemplate(other.to_owned())),
        }
    }

    Ok(())
}

fn handler_supports(handler: &dyn Handler, template: &str) -> Result<bool, AdapterError> {
    Ok(match template {
        checknothing::TEMPLATE_NAME => handler.checknothing().is_some(),
        reportnothing::TEMPLATE_NAME => handler.reportnothing().is_some(),
        examplereport::TEMPLATE_NAME => handler.examplereport().is_some(),
        other => return Err(AdapterError::UnknownTemplate(other.to_owned())),
    })
}

fn unsupported(info: &Info, template: &str) -> AdapterError {
    AdapterError::UnsupportedTemplate {
        adapter: info.name.clone(),
        template: template.to_owned(),
    }
}
