/*!
 * Structured Tracing
 * Subscriber setup and timed operation spans using the tracing crate
 *
 * RUST_LOG drives the filter; RRSIM_TRACE_JSON switches to JSON lines on stderr
 */

use std::time::Instant;
use tracing::{debug, span, Level};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Environment variable enabling JSON output
pub const ENV_TRACE_JSON: &str = "RRSIM_TRACE_JSON";

fn json_requested() -> bool {
    std::env::var(ENV_TRACE_JSON)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false)
}

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - RRSIM_TRACE_JSON: Enable JSON output (default: false)
///
/// Returns false if a global subscriber was already installed.
pub fn init_tracing() -> bool {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(env_filter);

    // Logs go to stderr; stdout carries the trace itself
    let installed = if json_requested() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init()
            .is_ok()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .try_init()
            .is_ok()
    };

    if installed {
        debug!(json = json_requested(), "Structured tracing initialized");
    }
    installed
}

/// Span around loading or assembling a simulation; records its duration on drop
pub struct OperationSpan {
    span: tracing::Span,
    start: Instant,
}

impl OperationSpan {
    pub fn new(operation: &str) -> Self {
        Self {
            span: span!(
                Level::DEBUG,
                "operation",
                operation = operation,
                duration_us = tracing::field::Empty,
                items_processed = tracing::field::Empty,
                result = tracing::field::Empty,
            ),
            start: Instant::now(),
        }
    }

    pub fn record_result(&self, success: bool) {
        self.span.record("result", if success { "success" } else { "error" });
    }

    pub fn record_items_processed(&self, count: usize) {
        self.span.record("items_processed", count);
    }

    /// Enter the span context
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }
}

impl Drop for OperationSpan {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed().as_micros();
        self.span.record("duration_us", elapsed);
        self.span.in_scope(|| debug!(duration_us = elapsed, "operation completed"));
    }
}

#[inline]
pub fn span_operation(name: &str) -> OperationSpan {
    OperationSpan::new(name)
}
