use super::store::{ContentStore, StoreResult};
use crate::model::{Feature, FeatureCreate};
use crate::rules::validation::validate_feature;

/// Create a feature attached to an existing page
///
/// # Errors
/// * `InvalidInput` - Title or description missing, or a field too long
/// * `ConstraintViolation` - `landing_page_id` names no page
pub fn create_feature(store: &mut dyn ContentStore, input: FeatureCreate) -> StoreResult<Feature> {
    validate_feature(&input)?;
    store.insert_feature(input)
}

/// Every active feature of a page, featured or not
///
/// Ordered by display order, then title, then insertion. No featured cap is
/// applied here.
pub fn get_features(store: &dyn ContentStore, page_id: i64) -> StoreResult<Vec<Feature>> {
    store.active_features(page_id)
}

pub fn get_feature(store: &dyn ContentStore, id: i64) -> StoreResult<Option<Feature>> {
    store.find_feature(id)
}
