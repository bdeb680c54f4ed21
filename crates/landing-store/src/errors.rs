//! Error handling for landing-store
//!
//! Wraps landing-core ExError with store-specific helpers

use landing_core::errors::{ExError, ExErrorKind, LandingError};
use rusqlite::ErrorCode;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Which schema constraint a failed write tripped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    Unique,
    ForeignKey,
}

/// Classify a constraint failure by its extended result code
pub fn constraint_kind(err: &rusqlite::Error) -> Option<ConstraintKind> {
    match err {
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation => {
            match e.extended_code {
                rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                | rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY => Some(ConstraintKind::Unique),
                rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY => Some(ConstraintKind::ForeignKey),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Map a failed write to a domain error when `domain` recognizes the
/// constraint, otherwise to a persistence error
pub fn from_write<F>(err: rusqlite::Error, domain: F) -> ExError
where
    F: FnOnce(ConstraintKind) -> Option<LandingError>,
{
    match constraint_kind(&err).and_then(domain) {
        Some(domain_err) => {
            tracing::debug!(error = %err, "write rejected by constraint");
            domain_err.into()
        }
        None => from_rusqlite(err),
    }
}

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration")
        .with_entity_id(migration_id)
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ExError {
    ExError::new(ExErrorKind::ConstraintViolation)
        .with_op("migration_checksum")
        .with_entity_id(migration_id)
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create a JSON column error
pub fn serialization_error(column: &str, err: serde_json::Error) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op("json_column")
        .with_entity_id(column)
        .with_message(err.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
