// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::sync::{Arc, Mutex};
use std::time::Instant;

#[derive(Default)]
pub struct TracerInner {
    pub(crate) spans: Vec<String>,
}

/// Thread-safe span recorder.  A span records its wall-time when dropped.
#[derive(Clone, Default)]
pub struct StringTracer {
    pub(crate) debug: bool,
    pub(crate) inner: Arc<Mutex<TracerInner>>,
}

impl StringTracer {
    /// Begin a span.  The span ends when the returned guard drops.
    pub fn begin(&self, name: &str) -> TraceSpan {
        if self.debug {
            println!("{name} began");
        }
        TraceSpan {
            debug: self.debug,
            inner: Arc::clone(&self.inner),
            name: name.to_string(),
            started: Instant::now(),
        }
    }

    /// Create a new string tracer.
    pub fn new(debug: bool) -> Self {
        Self {
            debug,
            inner: Arc::new(Mutex::new(Default::default())),
        }
    }
}

impl ToString for StringTracer {
    fn to_string(&self) -> String {
        if let Ok(inner) = self.inner.lock() {
            inner.spans.join("\n")
        } else {
            String::default()
        }
    }
}

/// Guard returned by `StringTracer::begin`.
pub struct TraceSpan {
    debug: bool,
    inner: Arc<Mutex<TracerInner>>,
    name: String,
    started: Instant,
}

impl Drop for TraceSpan {
    fn drop(&mut self) {
        let line = format!("{} took {}ms", self.name, self.started.elapsed().as_millis());
        if self.debug {
            println!("{line}");
        }
        if let Ok(mut inner) = self.inner.lock() {
            inner.spans.push(line);
        }
    }
}
