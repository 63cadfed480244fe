//! Error types for rtpkit operations.
//!
//! This module defines [`RtpError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Malformed authoring data is rejected when a table is built
//! - A name that is not part of any runtime package is *not* an error;
//!   lookups report it as an empty result
//! - Use `anyhow::Error` (via `RtpError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for rtpkit operations.
#[derive(Debug, Error)]
pub enum RtpError {
    /// Authoring data could not be parsed.
    #[error("Failed to parse RTP table '{source_name}': {message}")]
    TableParse {
        source_name: String,
        message: String,
    },

    /// A table row does not have one cell per header variant.
    #[error(
        "Row {row} of category '{category}' in '{source_name}' has {found} cells, expected {expected}"
    )]
    TableShape {
        source_name: String,
        category: String,
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A table header lists a variant from another generation.
    #[error("Variant '{variant}' does not belong to generation {generation} in '{source_name}'")]
    GenerationMismatch {
        source_name: String,
        variant: String,
        generation: u16,
    },

    /// A table header lists the same variant twice.
    #[error("Variant '{variant}' is listed twice in '{source_name}'")]
    DuplicateVariant {
        source_name: String,
        variant: String,
    },

    /// A single row gives one variant more than one name.
    #[error("A '{category}' row names {variant} more than once")]
    RepeatedCell {
        category: String,
        variant: String,
    },

    /// The same name maps to two different assets of one variant and category.
    #[error("Name '{name}' appears in more than one '{category}' row for {variant}")]
    AmbiguousName {
        variant: String,
        category: String,
        name: String,
    },

    /// A variant identifier that is not one of the known runtime packages.
    #[error("Unknown RTP variant: {name}")]
    UnknownVariant { name: String },

    /// A generation that is neither 2000 nor 2003.
    #[error("Unknown RTP generation: {value}")]
    UnknownGeneration { value: String },

    /// Walking a directory tree failed.
    #[error("Failed to scan {path}: {message}")]
    TreeScan { path: PathBuf, message: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for rtpkit operations.
pub type Result<T> = std::result::Result<T, RtpError>;
