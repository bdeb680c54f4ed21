//! Record-store boundary
//!
//! `ContentStore` is the only way the repository ops, the assembler and the
//! sample content generator reach persisted content. Implementations:
//! `MemoryStore` here, and the SQLite repository in the store crate.

use crate::errors::ExError;
use crate::model::{
    CallToActionSection, CallToActionSectionCreate, Feature, FeatureCreate, HeroSection,
    HeroSectionCreate, Page, PageCreate, PageUpdate, Theme, ThemeCreate,
};

/// Result type for every store-facing call
pub type StoreResult<T> = std::result::Result<T, ExError>;

/// Persisted content, queried by equality/boolean filters and ascending sorts
///
/// Contract shared by all implementations:
///
/// - Inserts assign the id and both timestamps and return the full record.
///   Payloads arrive already validated.
/// - A duplicate page slug or theme name fails with `ConstraintViolation`,
///   as does a component whose `landing_page_id` names no page.
/// - `active_*` lists only rows with `landing_page_id == page_id` and
///   `is_active`. Features sort by `(display_order, title, id)`; hero and
///   CTA sections by `(display_order, id)`.
/// - Lookups that match nothing return `None` or an empty list, never an
///   error.
pub trait ContentStore {
    fn insert_page(&mut self, input: PageCreate) -> StoreResult<Page>;

    /// Apply a partial update; `None` when the page does not exist
    fn update_page(&mut self, id: i64, update: PageUpdate) -> StoreResult<Option<Page>>;

    /// Fetch a page by id regardless of its active flag
    fn find_page(&self, id: i64) -> StoreResult<Option<Page>>;

    /// Fetch the active page with this slug
    fn find_active_page(&self, slug: &str) -> StoreResult<Option<Page>>;

    fn insert_hero_section(&mut self, input: HeroSectionCreate) -> StoreResult<HeroSection>;
    fn find_hero_section(&self, id: i64) -> StoreResult<Option<HeroSection>>;
    fn active_hero_sections(&self, page_id: i64) -> StoreResult<Vec<HeroSection>>;

    fn insert_feature(&mut self, input: FeatureCreate) -> StoreResult<Feature>;
    fn find_feature(&self, id: i64) -> StoreResult<Option<Feature>>;
    fn active_features(&self, page_id: i64) -> StoreResult<Vec<Feature>>;

    fn insert_cta_section(
        &mut self,
        input: CallToActionSectionCreate,
    ) -> StoreResult<CallToActionSection>;
    fn find_cta_section(&self, id: i64) -> StoreResult<Option<CallToActionSection>>;
    fn active_cta_sections(&self, page_id: i64) -> StoreResult<Vec<CallToActionSection>>;

    fn insert_theme(&mut self, input: ThemeCreate) -> StoreResult<Theme>;

    /// Fetch the active theme with this name
    fn find_active_theme(&self, name: &str) -> StoreResult<Option<Theme>>;

    /// Run `f` as one unit of work
    ///
    /// Either every write made through the handed-in store is kept, or, when
    /// `f` returns an error, none of them is. The scope is released on every
    /// exit path.
    fn atomically<T, F>(&mut self, f: F) -> StoreResult<T>
    where
        Self: Sized,
        F: FnOnce(&mut dyn ContentStore) -> StoreResult<T>;
}
