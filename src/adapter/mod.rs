/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.*
 */

//! The plugin interface between the host and an adapter.

mod adapter_builder;
mod adapter_config;
mod adapter_env;
mod adapter_handler;
mod adapter_info;
mod adapter_macro;

pub use adapter_builder::*;
pub use adapter_config::*;
pub use adapter_env::*;
pub use adapter_handler::*;
pub use adapter_info::*;
pub use adapter_macro::*;

#[cfg(test)]
pub(crate) mod tests {
    pub use super::adapter_env::tests::*;
}
