//! Logging utilities for the symbology engine.
//!
//! Library code only emits `tracing` events. Installing a subscriber is
//! left to the binary (or the embedding application) via [`init_tracing`].

use std::time::Instant;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::breaks::ClassificationMethod;
use crate::error::SymbologyError;

/// Initialize the tracing subscriber with the given log level
pub fn init_tracing(log_level: &str) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(val) => val,
        Err(_) => log_level.to_string(),
    };

    // Logs go to stderr so that stdout stays clean JSON
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();
}

/// Log a start message for a significant operation
pub fn log_operation_start(operation: &str, details: Option<&str>) {
    if let Some(details) = details {
        info!(
            operation = operation,
            details = details,
            "Starting operation"
        );
    } else {
        info!(operation = operation, "Starting operation");
    }
}

/// Log the completion of a significant operation
pub fn log_operation_end(operation: &str, start_time: Instant, success: bool) {
    let duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;

    if success {
        info!(
            operation = operation,
            duration_ms = duration_ms,
            "Operation completed successfully"
        );
    } else {
        warn!(
            operation = operation,
            duration_ms = duration_ms,
            "Operation failed"
        );
    }
}

/// Run `f`, tagging its start and end events with a fresh request id
pub fn log_timed_operation<F, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let request_id = Uuid::new_v4();

    debug!(
        operation = operation,
        request_id = %request_id,
        "Starting operation"
    );

    let result = f();

    debug!(
        operation = operation,
        request_id = %request_id,
        duration_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Operation completed"
    );

    result
}

/// Log a summary of a finished classification
pub fn log_classification_stats(
    method: ClassificationMethod,
    sample_len: usize,
    classes: usize,
    breaks: &[f64],
) {
    let breaks_str = breaks
        .iter()
        .map(|b| format!("{}", b))
        .collect::<Vec<_>>()
        .join(", ");

    info!(
        operation = "classify",
        method = %method,
        sample_len = sample_len,
        classes = classes,
        break_count = breaks.len(),
        breaks = %breaks_str,
        "Classification computed"
    );
}

/// Log an error with context
pub fn log_error(error: &SymbologyError, context: &str) {
    error!(
        error = %error,
        context = context,
        error_type = std::any::type_name_of_val(error),
        "Error occurred"
    );
}

/// Generate a unique request ID
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}
