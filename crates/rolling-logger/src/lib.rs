//! Rolling Logger
//!
//! A `tracing` layer that echoes every event to the console (browser) or
//! stderr (native) and keeps the most recent lines in a circular buffer so
//! they can be shown or copied from inside the app.

use std::collections::VecDeque;
use std::fmt::{self, Write as _};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use chrono::{SecondsFormat, Utc};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

/// Lines kept when no capacity is given
pub const DEFAULT_CAPACITY: usize = 500;

#[derive(Debug)]
struct Ring {
    lines: VecDeque<String>,
    capacity: usize,
}

/// Shared circular buffer of formatted log lines
#[derive(Debug, Clone)]
pub struct LogBuffer {
    inner: Arc<Mutex<Ring>>,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            inner: Arc::new(Mutex::new(Ring {
                lines: VecDeque::with_capacity(capacity),
                capacity,
            })),
        }
    }

    fn ring(&self) -> MutexGuard<'_, Ring> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Append a line, evicting the oldest when full
    pub fn push(&self, line: String) {
        let mut ring = self.ring();
        if ring.lines.len() == ring.capacity {
            ring.lines.pop_front();
        }
        ring.lines.push_back(line);
    }

    /// Oldest first
    pub fn lines(&self) -> Vec<String> {
        self.ring().lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.ring().lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.ring().capacity
    }

    pub fn clear(&self) {
        self.ring().lines.clear();
    }
}

/// Layer writing events into a [`LogBuffer`]
pub struct RollingLayer {
    buffer: LogBuffer,
    echo: bool,
}

impl RollingLayer {
    /// Buffer and echo to the console
    pub fn new(buffer: LogBuffer) -> Self {
        Self { buffer, echo: true }
    }

    /// Buffer only
    pub fn silent(buffer: LogBuffer) -> Self {
        Self { buffer, echo: false }
    }
}

impl<S: Subscriber> Layer<S> for RollingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let line = format_event(event);
        if self.echo {
            emit(*event.metadata().level(), &line);
        }
        self.buffer.push(line);
    }
}

#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

/// `<timestamp> <LEVEL> <target>: <message> key=value...`
fn format_event(event: &Event<'_>) -> String {
    let meta = event.metadata();
    let mut visitor = LineVisitor::default();
    event.record(&mut visitor);
    format!(
        "{} {:>5} {}: {}{}",
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        meta.level(),
        meta.target(),
        visitor.message,
        visitor.fields
    )
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::ERROR => web_sys::console::error_1(&value),
        Level::WARN => web_sys::console::warn_1(&value),
        Level::INFO => web_sys::console::info_1(&value),
        _ => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{line}");
}

static GLOBAL_BUFFER: OnceLock<LogBuffer> = OnceLock::new();

/// Install the global subscriber. Events below `level` are dropped.
///
/// Fails if a global subscriber is already set.
pub fn init_logger(level: Level, capacity: usize) -> Result<LogBuffer, String> {
    let buffer = GLOBAL_BUFFER.get_or_init(|| LogBuffer::new(capacity)).clone();
    tracing_subscriber::registry()
        .with(RollingLayer::new(buffer.clone()).with_filter(LevelFilter::from_level(level)))
        .try_init()
        .map_err(|e| e.to_string())?;
    Ok(buffer)
}

/// Lines captured by the global logger, oldest first
pub fn recent_lines() -> Vec<String> {
    GLOBAL_BUFFER.get().map(LogBuffer::lines).unwrap_or_default()
}

/// Drop everything captured so far
pub fn clear_recent_lines() {
    if let Some(buffer) = GLOBAL_BUFFER.get() {
        buffer.clear();
    }
}

pub fn info(message: &str) {
    tracing::info!("{message}");
}

pub fn error(message: &str) {
    tracing::error!("{message}");
}
