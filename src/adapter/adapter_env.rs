/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.*
 */

use log::Level;
use std::{fmt, sync::Arc};

/// A logging sink owned by the host.
///
/// Implementations have to be safe for concurrent use.
pub trait Logger: Send + Sync {
    /// Write a single log line.
    fn log(&self, level: Level, message: fmt::Arguments<'_>);

    fn debug(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Debug, message)
    }

    fn info(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Info, message)
    }

    fn warn(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Warn, message)
    }

    fn error(&self, message: fmt::Arguments<'_>) {
        self.log(Level::Error, message)
    }
}

/// The environment a [handler][crate::Handler] gets built in.
pub trait Env: Send + Sync {
    /// The logger handlers should write to.
    fn logger(&self) -> Arc<dyn Logger>;
}

/// A [logger][Logger] forwarding to the [log] facade.
pub struct LogLogger {
    target: String,
}

impl Logger for LogLogger {
    fn log(&self, level: Level, message: fmt::Arguments<'_>) {
        log::log!(target: self.target.as_str(), level, "{}", message);
    }
}

/// The default [environment][Env], forwarding all log lines to the [log] facade.
///
/// Every line is logged with the given target, usually the adapter name.
#[derive(Clone)]
pub struct LogEnv {
    logger: Arc<LogLogger>,
}

impl LogEnv {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            logger: Arc::new(LogLogger {
                target: target.into(),
            }),
        }
    }
}

impl Env for LogEnv {
    fn logger(&self) -> Arc<dyn Logger> {
        self.logger.clone()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use crate::adapter::{Env, LogEnv, Logger};
    use mockall::mock;
    use std::{fmt, sync::Arc};

    mock! {
        pub Env {}
        impl Env for Env {
            fn logger(&self) -> Arc<dyn Logger>;
        }
    }

    pub struct NullLogger;

    impl Logger for NullLogger {
        fn log(&self, _level: log::Level, _message: fmt::Arguments<'_>) {}
    }

    #[test]
    fn test_log_env_logger() {
        let env = LogEnv::new("example");
        env.logger().info(format_args!("{}: {}", "prefix", 42));
        env.logger().warn(format_args!("warning"));
    }
}
