//! File naming conventions for the local data directory.
//!
//! Pure string functions. These define the canonical layout of files under
//! the HealthAccess data directory.

/// The results log, a JSON array of saved assessments.
pub const RESULTS_LOG: &str = "health-assessments.json";

/// Scratch file written before being renamed over [`RESULTS_LOG`].
pub fn results_log_tmp() -> String {
    format!("{RESULTS_LOG}.tmp")
}

/// Default file name for a JSON backup taken on `date`.
pub fn export_file(date: jiff::civil::Date) -> String {
    format!("healthaccess-data-{date}.json")
}
