use landing_core::model::{
    CallToActionSectionCreate, FeatureCreate, HeroSectionCreate, Page, PageCreate,
};
use landing_core::ops::feature_ops::create_feature;
use landing_core::ops::page_ops::create_page;
use landing_core::ops::section_ops::{create_cta_section, create_hero_section};
use landing_core::{ContentStore, Feature, MemoryStore};

/// Create a new empty MemoryStore for testing
#[allow(dead_code)]
pub fn new_store() -> MemoryStore {
    MemoryStore::new()
}

/// Create an active page with the given slug
#[allow(dead_code)]
pub fn create_test_page(store: &mut dyn ContentStore, slug: &str) -> Page {
    create_page(store, PageCreate::new(format!("Page {}", slug), slug)).unwrap()
}

/// Create an active feature with explicit order and featured flag
#[allow(dead_code)]
pub fn add_feature(
    store: &mut dyn ContentStore,
    page_id: i64,
    order: i32,
    title: &str,
    featured: bool,
) -> Feature {
    create_feature(
        store,
        FeatureCreate {
            display_order: order,
            is_featured: featured,
            ..FeatureCreate::new(page_id, title, format!("About {}", title))
        },
    )
    .unwrap()
}

#[allow(dead_code)]
pub fn add_hero(store: &mut dyn ContentStore, page_id: i64, order: i32, active: bool) -> i64 {
    create_hero_section(
        store,
        HeroSectionCreate {
            display_order: order,
            is_active: active,
            ..HeroSectionCreate::new(page_id, format!("Hero {}", order))
        },
    )
    .unwrap()
    .id
}

#[allow(dead_code)]
pub fn add_cta(store: &mut dyn ContentStore, page_id: i64, order: i32, active: bool) -> i64 {
    create_cta_section(
        store,
        CallToActionSectionCreate {
            display_order: order,
            is_active: active,
            ..CallToActionSectionCreate::new(page_id, format!("CTA {}", order), "Go", "/go")
        },
    )
    .unwrap()
    .id
}
