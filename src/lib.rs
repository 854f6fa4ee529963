//! Stock Reconciler Library
//!
//! A Rust library for reconciling two independently produced inventory
//! reports, an ERP ("1C") export and a warehouse-management ("СОЛВО")
//! export, and reporting every product whose recorded quantity differs
//! between the two sources.
//!
//! This library provides tools for:
//! - Decoding loosely-structured tabular exports into typed tables
//! - Normalizing irregular whitespace and coercing quantity cells
//! - Rewriting source-specific category labels to a canonical vocabulary
//! - Adapting both export schemas to one intermediate record shape
//! - Outer-joining the two sides and computing signed quantity deltas
//! - Rendering the discrepancy report for delivery to the caller

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod session;
    pub mod services {
        pub mod category_mapper;
        pub mod engine;
        pub mod normalizer;
        pub mod reconciler;
        pub mod report;
        pub mod source_adapter;
        pub mod table_codec;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{DiscrepancyRecord, NormalizedRecord, RawTable, ReconcileOutcome};
pub use config::Config;

/// Result type alias for the stock reconciler
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for reconciliation operations
///
/// `Format` and `SchemaMismatch` are the two failure modes surfaced to the
/// caller with guidance; everything else indicates an environment problem
/// (I/O, codec) rather than a malformed export.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Input bytes cannot be parsed as a table, or parse to an empty table
    #[error("Format error: {message}")]
    Format { message: String },

    /// Required columns absent, or no recognized category after mapping
    #[error("Schema mismatch in {source_name} export: {message}")]
    SchemaMismatch {
        source_name: String,
        message: String,
    },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV codec error
    #[error("CSV codec error: {message}")]
    Csv {
        message: String,
        #[source]
        source: Option<csv::Error>,
    },
}

impl Error {
    /// Create a format error
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
        }
    }

    /// Create a schema mismatch error with a guidance message
    pub fn schema_mismatch(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV codec error with context
    pub fn csv(message: impl Into<String>, source: Option<csv::Error>) -> Self {
        Self::Csv {
            message: message.into(),
            source,
        }
    }

    /// True when the error should be shown to the caller as bad input
    /// (resubmit the export) rather than as an internal failure
    pub fn is_caller_facing(&self) -> bool {
        matches!(self, Self::Format { .. } | Self::SchemaMismatch { .. })
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::Csv {
            message: "CSV processing failed".to_string(),
            source: Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app::models::Source;

    #[test]
    fn test_bad_input_errors_are_caller_facing() {
        assert!(Error::format("not a table").is_caller_facing());
        assert!(Error::schema_mismatch(Source::Erp.name(), "missing columns").is_caller_facing());
    }

    #[test]
    fn test_environment_errors_are_not_caller_facing() {
        let io = Error::io("read failed", std::io::Error::other("disk"));
        assert!(!io.is_caller_facing());
        assert!(!Error::csv("write failed", None).is_caller_facing());
    }

    #[test]
    fn test_schema_mismatch_names_the_source() {
        let error = Error::schema_mismatch(Source::Wms.name(), "too few columns");
        assert!(error.to_string().contains("SOLVO"));
    }
}
