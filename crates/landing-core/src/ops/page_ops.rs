use super::store::{ContentStore, StoreResult};
use crate::errors::LandingError;
use crate::model::{Page, PageCreate, PageUpdate};
use crate::rules::validation::{validate_page_create, validate_page_update};

/// Create a new landing page
///
/// The page starts active. Validation runs before the store is touched.
///
/// # Errors
/// * `InvalidInput` - Title missing, a field too long, or a malformed slug
/// * `ConstraintViolation` - Another page (active or not) already has the slug
pub fn create_page(store: &mut dyn ContentStore, input: PageCreate) -> StoreResult<Page> {
    validate_page_create(&input)?;
    store.insert_page(input)
}

/// Look up the active page with this slug
///
/// Inactive pages are invisible here.
pub fn get_active_page(store: &dyn ContentStore, slug: &str) -> StoreResult<Option<Page>> {
    store.find_active_page(slug)
}

/// Look up a page by id, active or not
pub fn get_page(store: &dyn ContentStore, id: i64) -> StoreResult<Option<Page>> {
    store.find_page(id)
}

/// Apply a partial update to a page
///
/// Only the fields set on `update` change; `updated_at` is bumped even for an
/// empty update.
///
/// # Errors
/// * `InvalidInput` - A provided field fails the creation rules
/// * `NotFound` - No page has this id
/// * `ConstraintViolation` - The new slug belongs to another page
pub fn update_page(
    store: &mut dyn ContentStore,
    id: i64,
    update: PageUpdate,
) -> StoreResult<Page> {
    validate_page_update(&update)?;
    store
        .update_page(id, update)?
        .ok_or_else(|| LandingError::PageNotFound { page_id: id }.into())
}
