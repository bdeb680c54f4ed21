#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{add_cta, add_feature, add_hero, create_test_page, new_store};
use landing_core::errors::ExErrorKind;
use landing_core::model::{
    Alignment, ButtonStyle, CallToActionSectionCreate, CtaSize, FeatureCreate, HeroHeight,
    HeroSectionCreate, PageCreate, PageUpdate,
};
use landing_core::ops::feature_ops::{create_feature, get_feature, get_features};
use landing_core::ops::page_ops::{create_page, get_active_page, get_page, update_page};
use landing_core::ops::section_ops::{
    create_cta_section, create_hero_section, get_cta_section, get_cta_sections, get_hero_section,
    get_hero_sections,
};

#[test]
fn test_duplicate_slug_is_constraint_violation() {
    let mut store = new_store();
    create_page(&mut store, PageCreate::new("Home", "home")).unwrap();

    let err = create_page(&mut store, PageCreate::new("Home again", "home")).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
    assert_eq!(err.code(), "ERR_CONSTRAINT_VIOLATION");
    assert_eq!(err.entity_id(), Some("home"));
}

#[test]
fn test_inactive_components_never_listed() {
    let mut store = new_store();
    let page = create_test_page(&mut store, "home");

    add_hero(&mut store, page.id, 1, false);
    let hero = add_hero(&mut store, page.id, 2, true);
    create_feature(
        &mut store,
        FeatureCreate {
            is_active: false,
            ..FeatureCreate::new(page.id, "Hidden", "not shown")
        },
    )
    .unwrap();
    let feature = add_feature(&mut store, page.id, 1, "Shown", false);
    add_cta(&mut store, page.id, 1, false);
    let cta = add_cta(&mut store, page.id, 2, true);

    let heroes = get_hero_sections(&store, page.id).unwrap();
    let features = get_features(&store, page.id).unwrap();
    let ctas = get_cta_sections(&store, page.id).unwrap();

    assert_eq!(heroes.iter().map(|h| h.id).collect::<Vec<_>>(), vec![hero]);
    assert_eq!(features, vec![feature]);
    assert_eq!(ctas.iter().map(|c| c.id).collect::<Vec<_>>(), vec![cta]);
}

#[test]
fn test_features_order_by_display_order_then_title() {
    let mut store = new_store();
    let page = create_test_page(&mut store, "home");
    add_feature(&mut store, page.id, 2, "B", false);
    add_feature(&mut store, page.id, 1, "A", false);

    let titles: Vec<String> = get_features(&store, page.id)
        .unwrap()
        .into_iter()
        .map(|f| f.title)
        .collect();
    assert_eq!(titles, vec!["A", "B"]);

    let other = create_test_page(&mut store, "other");
    add_feature(&mut store, other.id, 1, "B", false);
    add_feature(&mut store, other.id, 1, "A", false);

    let titles: Vec<String> = get_features(&store, other.id)
        .unwrap()
        .into_iter()
        .map(|f| f.title)
        .collect();
    assert_eq!(titles, vec!["A", "B"]);
}

#[test]
fn test_sections_order_by_display_order() {
    let mut store = new_store();
    let page = create_test_page(&mut store, "home");
    let hero_two = add_hero(&mut store, page.id, 2, true);
    let hero_one = add_hero(&mut store, page.id, 1, true);
    let cta_two = add_cta(&mut store, page.id, 2, true);
    let cta_one = add_cta(&mut store, page.id, 1, true);

    let heroes: Vec<i64> = get_hero_sections(&store, page.id)
        .unwrap()
        .iter()
        .map(|h| h.id)
        .collect();
    let ctas: Vec<i64> = get_cta_sections(&store, page.id)
        .unwrap()
        .iter()
        .map(|c| c.id)
        .collect();

    assert_eq!(heroes, vec![hero_one, hero_two]);
    assert_eq!(ctas, vec![cta_one, cta_two]);
}

#[test]
fn test_page_without_components_yields_empty_lists() {
    let mut store = new_store();
    let page = create_test_page(&mut store, "empty");

    assert!(get_hero_sections(&store, page.id).unwrap().is_empty());
    assert!(get_features(&store, page.id).unwrap().is_empty());
    assert!(get_cta_sections(&store, page.id).unwrap().is_empty());
}

#[test]
fn test_unknown_page_yields_empty_lists() {
    let store = new_store();

    assert!(get_hero_sections(&store, 999).unwrap().is_empty());
    assert!(get_features(&store, 999).unwrap().is_empty());
    assert!(get_cta_sections(&store, 999).unwrap().is_empty());
}

#[test]
fn test_components_require_existing_page() {
    let mut store = new_store();

    let err = create_feature(&mut store, FeatureCreate::new(42, "Orphan", "no page")).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);

    let err = create_cta_section(
        &mut store,
        CallToActionSectionCreate::new(42, "Orphan", "Go", "/go"),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
}

#[test]
fn test_created_records_round_trip_by_id() {
    let mut store = new_store();
    let page = create_page(
        &mut store,
        PageCreate {
            meta_title: Some("Meta".to_string()),
            meta_description: Some("Description".to_string()),
            ..PageCreate::new("Home", "home")
        },
    )
    .unwrap();
    assert_eq!(get_page(&store, page.id).unwrap(), Some(page.clone()));
    assert_eq!(get_active_page(&store, "home").unwrap(), Some(page.clone()));

    let hero = create_hero_section(
        &mut store,
        HeroSectionCreate {
            subheadline: Some("Sub".to_string()),
            background_image_url: Some("https://example.com/bg.png".to_string()),
            secondary_button_text: Some("Docs".to_string()),
            secondary_button_url: Some("/docs".to_string()),
            alignment: Alignment::Left,
            height: HeroHeight::Compact,
            display_order: 3,
            ..HeroSectionCreate::new(page.id, "Hello")
        },
    )
    .unwrap();
    assert_eq!(get_hero_section(&store, hero.id).unwrap(), Some(hero));

    let feature = create_feature(
        &mut store,
        FeatureCreate {
            icon: Some("speed".to_string()),
            link_text: Some("More".to_string()),
            link_url: Some("/more".to_string()),
            is_featured: true,
            ..FeatureCreate::new(page.id, "Fast", "Very fast")
        },
    )
    .unwrap();
    assert_eq!(get_feature(&store, feature.id).unwrap(), Some(feature));

    let cta = create_cta_section(
        &mut store,
        CallToActionSectionCreate {
            secondary_button_text: Some("Pricing".to_string()),
            secondary_button_url: Some("/pricing".to_string()),
            secondary_button_style: ButtonStyle::Outline,
            size: CtaSize::Small,
            alignment: Alignment::Right,
            ..CallToActionSectionCreate::new(page.id, "Ready?", "Start", "/start")
        },
    )
    .unwrap();
    assert_eq!(get_cta_section(&store, cta.id).unwrap(), Some(cta));
}

#[test]
fn test_update_page_bumps_updated_at_and_keeps_created_at() {
    let mut store = new_store();
    let page = create_test_page(&mut store, "home");

    let updated = update_page(
        &mut store,
        page.id,
        PageUpdate {
            title: Some("New title".to_string()),
            meta_description: Some(Some("Now described".to_string())),
            ..PageUpdate::default()
        },
    )
    .unwrap();

    assert_eq!(updated.title, "New title");
    assert_eq!(updated.meta_description.as_deref(), Some("Now described"));
    assert_eq!(updated.created_at, page.created_at);
    assert!(updated.updated_at >= page.updated_at);
    assert_eq!(get_page(&store, page.id).unwrap(), Some(updated));
}

#[test]
fn test_update_page_validates_before_writing() {
    let mut store = new_store();
    let page = create_test_page(&mut store, "home");

    let err = update_page(
        &mut store,
        page.id,
        PageUpdate {
            slug: Some("not a slug".to_string()),
            ..PageUpdate::default()
        },
    )
    .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    assert_eq!(get_page(&store, page.id).unwrap(), Some(page));
}
