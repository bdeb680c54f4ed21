use super::store::{ContentStore, StoreResult};
use crate::model::{Theme, ThemeCreate};
use crate::rules::validation::validate_theme;

/// Create a named theme
///
/// # Errors
/// * `InvalidInput` - Name or a required color missing, or a field too long
/// * `ConstraintViolation` - A theme with this name already exists
pub fn create_theme(store: &mut dyn ContentStore, input: ThemeCreate) -> StoreResult<Theme> {
    validate_theme(&input)?;
    store.insert_theme(input)
}

/// Look up the active theme with this name
pub fn get_theme(store: &dyn ContentStore, name: &str) -> StoreResult<Option<Theme>> {
    store.find_active_theme(name)
}
