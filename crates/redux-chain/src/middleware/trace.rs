//! Trace sinks - where logging middleware reports what it saw

use parking_lot::Mutex;
use std::fmt;

/// Which stage of a middleware produced a trace event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The middleware was bound into the chain (composition time)
    Bound,
    /// Pre-phase: before passing the action inward
    Entering,
    /// Post-phase: after the inner chain returned
    Leaving,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Bound => f.write_str("bound"),
            Phase::Entering => f.write_str("entering"),
            Phase::Leaving => f.write_str("leaving"),
        }
    }
}

/// A single observation made by a middleware
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEvent {
    pub middleware: String,
    pub phase: Phase,
    /// Discriminator of the action being handled; `None` for [`Phase::Bound`]
    pub action_type: Option<String>,
}

impl TraceEvent {
    pub fn bound(middleware: impl Into<String>) -> Self {
        Self {
            middleware: middleware.into(),
            phase: Phase::Bound,
            action_type: None,
        }
    }

    pub fn action(middleware: impl Into<String>, phase: Phase, action_type: impl Into<String>) -> Self {
        Self {
            middleware: middleware.into(),
            phase,
            action_type: Some(action_type.into()),
        }
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.action_type {
            Some(action_type) => write!(f, "{} {} {}", self.middleware, self.phase, action_type),
            None => write!(f, "{} {}", self.middleware, self.phase),
        }
    }
}

/// Observability sink injected into logging middleware
pub trait TraceSink: Send + Sync {
    fn record(&self, event: TraceEvent);
}

/// Forwards trace events to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl TraceSink for LogSink {
    fn record(&self, event: TraceEvent) {
        log::info!("{}", event);
    }
}

/// Keeps every trace event in memory, in the order recorded
#[derive(Debug, Default)]
pub struct CaptureSink {
    events: Mutex<Vec<TraceEvent>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far
    pub fn events(&self) -> Vec<TraceEvent> {
        self.events.lock().clone()
    }

    /// Recorded events rendered as `"<middleware>-pre"` / `"<middleware>-post"`,
    /// skipping bind events
    pub fn labels(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event.phase {
                Phase::Bound => None,
                Phase::Entering => Some(format!("{}-pre", event.middleware)),
                Phase::Leaving => Some(format!("{}-post", event.middleware)),
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl TraceSink for CaptureSink {
    fn record(&self, event: TraceEvent) {
        self.events.lock().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(TraceEvent::bound("L1").to_string(), "L1 bound");
        assert_eq!(
            TraceEvent::action("L2", Phase::Leaving, "increment").to_string(),
            "L2 leaving increment"
        );
    }

    #[test]
    fn test_capture_sink_labels() {
        let sink = CaptureSink::new();
        sink.record(TraceEvent::bound("L1"));
        sink.record(TraceEvent::action("L1", Phase::Entering, "a"));
        sink.record(TraceEvent::action("L1", Phase::Leaving, "a"));

        assert_eq!(sink.events().len(), 3);
        assert_eq!(sink.labels(), vec!["L1-pre", "L1-post"]);

        sink.clear();
        assert!(sink.events().is_empty());
    }
}
