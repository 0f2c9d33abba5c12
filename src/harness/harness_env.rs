/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.*
 */

use crate::adapter::{Env, Logger};
use log::Level;
use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

/// An [environment][Env] recording every log line, for use in tests.
///
/// Lines are also forwarded to the [log] facade. Clones share the recorded lines.
#[derive(Clone, Default)]
pub struct TestEnv {
    logger: Arc<TestLogger>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines logged so far, in order.
    pub fn logs(&self) -> Vec<String> {
        self.logger
            .entries()
            .iter()
            .map(|(_, line)| line.clone())
            .collect()
    }

    /// All lines logged so far with the given level, in order.
    pub fn logs_at(&self, level: Level) -> Vec<String> {
        self.logger
            .entries()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, line)| line.clone())
            .collect()
    }
}

impl Env for TestEnv {
    fn logger(&self) -> Arc<dyn Logger> {
        self.logger.clone()
    }
}

/// The [logger][Logger] of a [TestEnv].
#[derive(Default)]
pub struct TestLogger {
    entries: Mutex<Vec<(Level, String)>>,
}

impl TestLogger {
    fn entries(&self) -> MutexGuard<'_, Vec<(Level, String)>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Logger for TestLogger {
    fn log(&self, level: Level, message: fmt::Arguments<'_>) {
        let line = message.to_string();
        log::log!(level, "{}", line);
        self.entries().push((level, line));
    }
}
