/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.*
 */

//! An example mixer adapter, showing adapter developers how to structure an adapter.
//!
//! The [adapter] module holds the plugin interface the host drives,
//! the [template] module the request templates, [example] the adapter itself
//! and [harness] a driver running an adapter the way the host does.

// Lets the template macros refer to this crate by name from within.
extern crate self as mixer_example_adapter;

pub mod adapter;
pub mod error;
pub mod example;
pub mod harness;
pub mod status;
pub mod template;

pub use adapter::{
    BuilderTemplates, CheckResult, Config, ConfigErrors, Env, Handler, HandlerBuilder,
    HandlerTemplates, Info, Logger,
};

/// The commonly used types and macros of this crate.
pub mod prelude {
    pub use crate::{
        adapter::{handler, handler_builder},
        BuilderTemplates, CheckResult, Config, ConfigErrors, Env, Handler, HandlerBuilder,
        HandlerTemplates, Info, Logger,
    };
}
