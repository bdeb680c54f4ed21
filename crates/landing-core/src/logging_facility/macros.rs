//! Canonical lifecycle logging macros

/// Log the start of an operation
///
/// ```
/// # use landing_core::log_op_start;
/// log_op_start!("page_show");
/// log_op_start!("page_show", slug = "home");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = landing_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = landing_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// ```
/// # use landing_core::log_op_end;
/// log_op_end!("page_show", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = landing_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = landing_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// Accepts anything convertible into `ExError`.
///
/// ```
/// # use landing_core::log_op_error;
/// # use landing_core::errors::LandingError;
/// let err = LandingError::PageNotFound { page_id: 7 };
/// log_op_error!("page_update", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = landing_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = landing_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            $($field)*
        );
    }};
}
