//! Theme command handlers

use landing_core::model::{Theme, ThemeCreate};
use landing_core::ops::theme_ops;
use landing_core::{log_op_end, log_op_error, log_op_start};
use landing_core_types::RequestId;
use landing_store::errors::Result;
use landing_store::SqliteRepo;
use rusqlite::Connection;

/// Look up the active theme called `name`
///
/// ## Errors
///
/// - `Persistence`: Database error
pub fn theme_get(conn: &Connection, name: &str) -> Result<Option<Theme>> {
    let request_id = RequestId::new();
    log_op_start!("theme_get", request_id = request_id.as_str(), theme_name = name);
    let start = std::time::Instant::now();

    let theme = theme_ops::get_theme(&SqliteRepo::new(conn), name).map_err(|e| {
        log_op_error!(
            "theme_get",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            request_id = request_id.as_str()
        );
        e
    })?;

    log_op_end!(
        "theme_get",
        duration_ms = start.elapsed().as_millis() as u64,
        request_id = request_id.as_str(),
        found = theme.is_some()
    );

    Ok(theme)
}

/// Create a theme
///
/// ## Errors
///
/// - `InvalidInput`: Validation failed
/// - `ConstraintViolation`: The name is taken
/// - `Persistence`: Database error
pub fn theme_create(conn: &Connection, input: ThemeCreate) -> Result<Theme> {
    let request_id = RequestId::new();
    log_op_start!(
        "theme_create",
        request_id = request_id.as_str(),
        theme_name = input.name.as_str()
    );
    let start = std::time::Instant::now();

    let theme = theme_ops::create_theme(&mut SqliteRepo::new(conn), input).map_err(|e| {
        log_op_error!(
            "theme_create",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            request_id = request_id.as_str()
        );
        e
    })?;

    log_op_end!(
        "theme_create",
        duration_ms = start.elapsed().as_millis() as u64,
        request_id = request_id.as_str(),
        theme_id = theme.id
    );

    Ok(theme)
}
