//! Capture tracing events in memory.
//!
//! Install the layer from [`capture`] in a subscriber and inspect the returned
//! [`LogBuffer`] afterwards:
//!
//! ```
//! use tracing_subscriber::{layer::SubscriberExt, registry};
//!
//! let (layer, logs) = logging::capture::capture();
//! let subscriber = registry().with(layer);
//! tracing::subscriber::with_default(subscriber, || {
//!     tracing::warn!(kind = "frobnicate", "unknown action type");
//! });
//! assert!(logs.contains("unknown action type"));
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use crate::fmt::{self, RenderedLog};

/// Shared, append-only buffer of rendered events.
#[derive(Debug, Clone, Default)]
pub struct LogBuffer {
    /// Rendered events in arrival order.
    entries: Arc<Mutex<Vec<RenderedLog>>>,
}

impl LogBuffer {
    /// Snapshot of all captured events.
    pub fn entries(&self) -> Vec<RenderedLog> {
        self.entries.lock().clone()
    }

    /// True if any captured event's line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.entries.lock().iter().any(|r| r.line().contains(needle))
    }

    /// Number of captured events at `level` whose line contains `needle`.
    pub fn count(&self, level: Level, needle: &str) -> usize {
        let level = level.to_string();
        self.entries
            .lock()
            .iter()
            .filter(|r| r.level == level && r.line().contains(needle))
            .count()
    }

    /// Drop everything captured so far.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

/// Tracing layer that appends every event to a [`LogBuffer`].
#[derive(Debug, Clone)]
pub struct CaptureLayer {
    /// Destination buffer.
    buffer: LogBuffer,
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let rendered = fmt::render_event(event);
        self.buffer.entries.lock().push(rendered);
    }
}

/// Create a capture layer and the buffer it fills.
pub fn capture() -> (CaptureLayer, LogBuffer) {
    let buffer = LogBuffer::default();
    (
        CaptureLayer {
            buffer: buffer.clone(),
        },
        buffer,
    )
}
