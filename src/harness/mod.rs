/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.*
 */

//! Driving an adapter through its lifecycle the way the host does.

mod harness_env;
mod harness_request;
mod harness_struct;

pub use harness_env::*;
pub use harness_request::*;
pub use harness_struct::*;
