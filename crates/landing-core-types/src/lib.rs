//! Shared types for the landing page facilities
//!
//! - **Correlation**: RequestId, carried through engine command boundaries
//! - **Schema constants**: canonical log field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::RequestId;
