//! Telemetry events
//!
//! Discrete named events the session reports to an external sink. Strictly
//! fire-and-forget: a sink must never fail and never affects control flow.

use std::fmt;

use serde::Serialize;

/// A discrete UI event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum TelemetryEvent {
    /// A page was displayed
    PageView { path: String },

    /// A mentor was added to or removed from the favorites
    FavoriteToggled,

    /// A modal dialog was opened
    ModalOpened { title: String },
}

impl fmt::Display for TelemetryEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryEvent::PageView { path } => write!(f, "Page view: {path}"),
            TelemetryEvent::FavoriteToggled => write!(f, "Favorite toggled"),
            TelemetryEvent::ModalOpened { title } => write!(f, "Modal opened: {title}"),
        }
    }
}

/// Destination for telemetry events
pub trait TelemetrySink: Send + Sync {
    fn report(&self, event: TelemetryEvent);
}

/// Sink that discards everything
pub struct NoopSink;

impl TelemetrySink for NoopSink {
    fn report(&self, _event: TelemetryEvent) {}
}

/// Sink that writes events to the log
pub struct LogSink;

impl TelemetrySink for LogSink {
    fn report(&self, event: TelemetryEvent) {
        tracing::info!(target: "telemetry", "{event}");
    }
}
