//! Error types for the NAGO platform core
//!
//! This module provides unified error handling across the platform crates,
//! covering data-source failures, pagination, state access, settings and
//! serialization errors.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for the NAGO platform
#[derive(Debug, Error)]
pub enum NagoError {
    // ========================================================================
    // Data Source Errors
    // ========================================================================
    /// Collecting identifiers from a finder failed
    #[error("Data source error: {0}")]
    DataSource(String),

    /// A point lookup failed (distinct from the tolerated "not found" case)
    #[error("Lookup failed for '{key}': {message}")]
    Lookup { key: String, message: String },

    /// Filtering or paginating a data set failed
    #[error("Pagination error: {0}")]
    Paginate(String),

    // ========================================================================
    // State Errors
    // ========================================================================
    /// A state slot was accessed in an unexpected way
    #[error("State error for slot '{key}': {message}")]
    State { key: String, message: String },

    // ========================================================================
    // Form Errors
    // ========================================================================
    /// A form field referenced a source that was never registered
    #[error("Source '{0}' is not registered")]
    SourceMissing(String),

    /// A declared default literal could not be parsed for the field's kind
    #[error("Invalid default value for field '{field}': {message}")]
    InvalidDefault { field: String, message: String },

    // ========================================================================
    // Settings Errors
    // ========================================================================
    /// Settings file could not be read
    #[error("Failed to read settings '{path}': {message}")]
    SettingsRead { path: PathBuf, message: String },

    /// Settings file could not be written
    #[error("Failed to write settings '{path}': {message}")]
    SettingsWrite { path: PathBuf, message: String },

    /// Settings content is not valid TOML
    #[error("Invalid settings format: {0}")]
    SettingsParse(String),

    /// Settings values failed validation
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    // ========================================================================
    // IO / Serialization Errors
    // ========================================================================
    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl NagoError {
    /// Create a data-source error
    pub fn data_source(msg: impl Into<String>) -> Self {
        NagoError::DataSource(msg.into())
    }

    /// Create a lookup error for a specific key
    pub fn lookup(key: impl Into<String>, msg: impl Into<String>) -> Self {
        NagoError::Lookup {
            key: key.into(),
            message: msg.into(),
        }
    }

    /// Create a pagination error
    pub fn paginate(msg: impl Into<String>) -> Self {
        NagoError::Paginate(msg.into())
    }

    /// Create a state error for a slot key
    pub fn state(key: impl Into<String>, msg: impl Into<String>) -> Self {
        NagoError::State {
            key: key.into(),
            message: msg.into(),
        }
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        NagoError::Internal(msg.into())
    }

    /// Create an error with context
    pub fn with_context(context: impl Into<String>, msg: impl Into<String>) -> Self {
        NagoError::WithContext {
            context: context.into(),
            message: msg.into(),
        }
    }

    /// Check if this error originated in a data source or lookup
    pub fn is_data_source(&self) -> bool {
        matches!(
            self,
            NagoError::DataSource(_) | NagoError::Lookup { .. } | NagoError::Paginate(_)
        )
    }

    /// Check if this error relates to settings loading or validation
    pub fn is_settings(&self) -> bool {
        matches!(
            self,
            NagoError::SettingsRead { .. }
                | NagoError::SettingsWrite { .. }
                | NagoError::SettingsParse(_)
                | NagoError::InvalidSettings(_)
        )
    }

    /// Check if this error relates to form metadata resolution
    pub fn is_form(&self) -> bool {
        matches!(
            self,
            NagoError::SourceMissing(_) | NagoError::InvalidDefault { .. }
        )
    }
}

/// Result type alias using NagoError
pub type NagoResult<T> = Result<T, NagoError>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn with_context<C: Into<String>>(self, context: C) -> NagoResult<T>;
}

impl<T, E: Into<NagoError>> ResultExt<T> for Result<T, E> {
    fn with_context<C: Into<String>>(self, context: C) -> NagoResult<T> {
        self.map_err(|e| {
            let err: NagoError = e.into();
            NagoError::WithContext {
                context: context.into(),
                message: err.to_string(),
            }
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_source_error() {
        let err = NagoError::data_source("connection refused");
        assert!(err.is_data_source());
        assert!(!err.is_settings());
        assert_eq!(err.to_string(), "Data source error: connection refused");
    }

    #[test]
    fn test_lookup_error() {
        let err = NagoError::lookup("cust-17", "backend unavailable");
        assert!(err.is_data_source());
        assert_eq!(
            err.to_string(),
            "Lookup failed for 'cust-17': backend unavailable"
        );
    }

    #[test]
    fn test_state_error() {
        let err = NagoError::state("list-checkbox-1", "slot holds a different type");
        assert_eq!(
            err.to_string(),
            "State error for slot 'list-checkbox-1': slot holds a different type"
        );
    }

    #[test]
    fn test_settings_errors() {
        let err = NagoError::SettingsParse("expected table".to_string());
        assert!(err.is_settings());
        assert!(!err.is_data_source());

        let err = NagoError::InvalidSettings("page size must be non-zero".to_string());
        assert!(err.is_settings());
    }

    #[test]
    fn test_form_errors() {
        let err = NagoError::SourceMissing("country".to_string());
        assert!(err.is_form());
        assert_eq!(err.to_string(), "Source 'country' is not registered");
    }

    #[test]
    fn test_error_with_context() {
        let err = NagoError::with_context("Building customer view", "bad page size");
        assert_eq!(err.to_string(), "Building customer view: bad page size");
    }

    #[test]
    fn test_result_ext_context() {
        let res: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing file",
        ));
        let err = res.with_context("Loading settings").unwrap_err();
        assert!(err.to_string().starts_with("Loading settings:"));
    }
}
