// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::sync::{Arc, Mutex};

#[derive(Default)]
pub struct LoggerInner {
    pub(crate) lines: Vec<String>,
    pub(crate) warn: bool,
}

/// Thread-safe string logger.  Cloning yields another handle on the same log.
#[derive(Clone, Default)]
pub struct StringLogger {
    pub(crate) debug: bool,
    pub(crate) inner: Arc<Mutex<LoggerInner>>,
}

impl StringLogger {
    /// Whether the log contains any warnings.
    pub fn contains_warnings(&self) -> bool {
        self.inner
            .lock()
            .ok()
            .map(|inner| inner.warn)
            .unwrap_or(false)
    }

    /// Add all lines from the specified logger to this logger.
    pub fn extend(&self, string_logger: &StringLogger) {
        if let (Ok(mut to_inner), Ok(from_inner)) = (self.inner.lock(), string_logger.inner.lock())
        {
            if !from_inner.lines.is_empty() {
                if from_inner.warn {
                    to_inner.warn = true;
                }
                let lines = from_inner.lines.join("\n");
                if self.debug {
                    println!("{lines}");
                }
                to_inner.lines.push(lines);
            }
        }
    }

    /// Create a new string logger.
    pub fn new(debug: bool) -> Self {
        Self {
            debug,
            inner: Arc::new(Mutex::new(Default::default())),
        }
    }

    /// Add a trace line to this logger.
    pub fn trace(&self, line: String) {
        if !line.is_empty() {
            if self.debug {
                println!("{line}");
            }
            if let Ok(mut inner) = self.inner.lock() {
                inner.lines.push(line);
            }
        }
    }

    /// Add a warning or error line to this logger.
    pub fn warn(&self, line: String) {
        if !line.is_empty() {
            if self.debug {
                println!("{line}");
            }
            if let Ok(mut inner) = self.inner.lock() {
                inner.lines.push(line);
                inner.warn = true;
            }
        }
    }
}

impl ToString for StringLogger {
    fn to_string(&self) -> String {
        if let Ok(inner) = self.inner.lock() {
            if inner.lines.is_empty() {
                String::default()
            } else {
                inner.lines.join("\n")
            }
        } else {
            String::default()
        }
    }
}
