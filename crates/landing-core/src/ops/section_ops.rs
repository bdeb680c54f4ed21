//! Hero and call-to-action sections

use super::store::{ContentStore, StoreResult};
use crate::model::{
    CallToActionSection, CallToActionSectionCreate, HeroSection, HeroSectionCreate,
};
use crate::rules::validation::{validate_cta_section, validate_hero_section};

/// Create a hero section attached to an existing page
///
/// # Errors
/// * `InvalidInput` - Headline missing or a field too long
/// * `ConstraintViolation` - `landing_page_id` names no page
pub fn create_hero_section(
    store: &mut dyn ContentStore,
    input: HeroSectionCreate,
) -> StoreResult<HeroSection> {
    validate_hero_section(&input)?;
    store.insert_hero_section(input)
}

/// Active hero sections of a page, by display order then insertion
///
/// Unknown or empty pages yield an empty list.
pub fn get_hero_sections(store: &dyn ContentStore, page_id: i64) -> StoreResult<Vec<HeroSection>> {
    store.active_hero_sections(page_id)
}

pub fn get_hero_section(store: &dyn ContentStore, id: i64) -> StoreResult<Option<HeroSection>> {
    store.find_hero_section(id)
}

/// Create a call-to-action section attached to an existing page
///
/// # Errors
/// * `InvalidInput` - Headline or primary button missing, or a field too long
/// * `ConstraintViolation` - `landing_page_id` names no page
pub fn create_cta_section(
    store: &mut dyn ContentStore,
    input: CallToActionSectionCreate,
) -> StoreResult<CallToActionSection> {
    validate_cta_section(&input)?;
    store.insert_cta_section(input)
}

/// Active CTA sections of a page, by display order then insertion
pub fn get_cta_sections(
    store: &dyn ContentStore,
    page_id: i64,
) -> StoreResult<Vec<CallToActionSection>> {
    store.active_cta_sections(page_id)
}

pub fn get_cta_section(
    store: &dyn ContentStore,
    id: i64,
) -> StoreResult<Option<CallToActionSection>> {
    store.find_cta_section(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ExErrorKind;
    use crate::model::PageCreate;
    use crate::ops::page_ops::create_page;
    use crate::ops::MemoryStore;

    #[test]
    fn test_hero_requires_existing_page() {
        let mut store = MemoryStore::new();
        let err = create_hero_section(&mut store, HeroSectionCreate::new(7, "Hello")).unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
        assert_eq!(err.entity_id(), Some("7"));
    }

    #[test]
    fn test_cta_requires_primary_button() {
        let mut store = MemoryStore::new();
        let page = create_page(&mut store, PageCreate::new("Home", "home")).unwrap();

        let err = create_cta_section(
            &mut store,
            CallToActionSectionCreate::new(page.id, "Ready?", "", "/start"),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    }

    #[test]
    fn test_inactive_sections_are_skipped() {
        let mut store = MemoryStore::new();
        let page = create_page(&mut store, PageCreate::new("Home", "home")).unwrap();
        create_hero_section(
            &mut store,
            HeroSectionCreate {
                is_active: false,
                ..HeroSectionCreate::new(page.id, "Hidden")
            },
        )
        .unwrap();
        let shown = create_hero_section(&mut store, HeroSectionCreate::new(page.id, "Shown"))
            .unwrap();

        assert_eq!(get_hero_sections(&store, page.id).unwrap(), vec![shown]);
    }
}
