//! Logging utilities
//!
//! Standardized log lines for flow graph operations.

use std::time::Duration;

/// Log the start of an operation on `subject`
pub fn log_operation_start(operation: &str, subject: &str, items: usize) {
    log::debug!("{operation} for {subject} ({items} items)");
}

/// Log an operation completion with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `subject` - What the operation ran on, e.g. `"diagnosis G30"`
/// * `items` - Number of items produced
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(
    operation: &str,
    subject: &str,
    items: usize,
    elapsed: Option<Duration>,
) {
    if let Some(duration) = elapsed {
        log::info!("Successfully {operation} {items} items for {subject} in {duration:?}");
    } else {
        log::info!("Successfully {operation} {items} items for {subject}");
    }
}

/// Log a warning, optionally tied to a subject
pub fn log_warning(message: &str, subject: Option<&str>) {
    if let Some(subject) = subject {
        log::warn!("{message}: {subject}");
    } else {
        log::warn!("{message}");
    }
}
