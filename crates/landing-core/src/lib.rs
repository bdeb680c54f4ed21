//! Landing Core - content model and page assembly
//!
//! This crate holds everything above the record store:
//! - Page, hero, feature, call-to-action and theme models with create payloads
//! - Field validation (required fields, lengths, slug shape)
//! - The `ContentStore` boundary plus an in-memory implementation
//! - Repository operations, page assembly and the sample content generator
//! - The structured error and logging facilities shared by the other crates

pub mod assembly;
pub mod bootstrap;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod rules;

// Re-export commonly used types
pub use assembly::{
    assemble_page, partition_features, AssembledPage, FeaturePartition, PageRef,
    FEATURED_DISPLAY_LIMIT,
};
pub use bootstrap::{generate_sample_content, SAMPLE_PAGE_SLUG};
pub use errors::{ExError, ExErrorKind, LandingError, Result};
pub use model::{CallToActionSection, Feature, HeroSection, Page, Theme};
pub use ops::{ContentStore, MemoryStore, StoreResult};
