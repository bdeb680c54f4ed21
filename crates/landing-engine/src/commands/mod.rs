//! Command orchestration layer.
//!
//! ## Logging Ownership
//!
//! Handlers here own lifecycle logging: `log_op_start!` at entry,
//! `log_op_end!` on success and `log_op_error!` on failure, each tagged with a
//! fresh `RequestId`. Lower layers use only `tracing::debug!()`.

pub mod page;
pub mod theme;
