//! Telemetry initialization and reconciler transition span helpers.

use std::time::Instant;

use anyhow::Result;
use tracing::{debug, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

/// Initialize `tracing` and format developer logs.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record one selection event applied to a session.
pub struct TransitionSpan {
    span: Span,
    started_at: Instant,
    session_id: Uuid,
    transition: &'static str,
}

impl TransitionSpan {
    /// Start a transition span.
    pub fn start(session_id: Uuid, transition: &'static str) -> Self {
        let span = info_span!(
            target: "memshell_config::reconciler",
            "transition",
            %session_id,
            transition
        );
        Self {
            span,
            started_at: Instant::now(),
            session_id,
            transition,
        }
    }

    /// Run `f` inside the span.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        self.span.in_scope(f)
    }

    /// Close the span, recording whether the record changed.
    pub fn finish(self, changed: bool) {
        let elapsed_us = self.started_at.elapsed().as_micros();
        let _entered = self.span.enter();
        debug!(
            target: "memshell_config::reconciler",
            session_id = %self.session_id,
            transition = self.transition,
            changed,
            elapsed_us,
            "Applied selection event"
        );
    }
}
