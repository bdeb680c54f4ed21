#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{add_cta, add_feature, add_hero, create_test_page, new_store};
use landing_core::model::PageUpdate;
use landing_core::ops::page_ops::update_page;
use landing_core::{assemble_page, PageRef, FEATURED_DISPLAY_LIMIT};

#[test]
fn test_assemble_by_slug_collects_active_components() {
    let mut store = new_store();
    let page = create_test_page(&mut store, "home");
    let hero = add_hero(&mut store, page.id, 1, true);
    add_hero(&mut store, page.id, 2, false);
    add_feature(&mut store, page.id, 1, "One", true);
    add_feature(&mut store, page.id, 2, "Two", false);
    let cta = add_cta(&mut store, page.id, 1, true);

    let assembled = assemble_page(&store, "home").unwrap().unwrap();

    assert_eq!(assembled.page, page);
    assert_eq!(
        assembled.hero_sections.iter().map(|h| h.id).collect::<Vec<_>>(),
        vec![hero]
    );
    assert_eq!(assembled.features.len(), 2);
    assert_eq!(
        assembled.cta_sections.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![cta]
    );
    assert!(!assembled.is_empty());
}

#[test]
fn test_assemble_by_id_matches_slug() {
    let mut store = new_store();
    let page = create_test_page(&mut store, "home");
    add_feature(&mut store, page.id, 1, "One", false);

    let by_id = assemble_page(&store, PageRef::Id(page.id)).unwrap();
    let by_slug = assemble_page(&store, PageRef::Slug("home".to_string())).unwrap();

    assert!(by_id.is_some());
    assert_eq!(by_id, by_slug);
}

#[test]
fn test_missing_page_is_none() {
    let store = new_store();

    assert_eq!(assemble_page(&store, "nowhere").unwrap(), None);
    assert_eq!(assemble_page(&store, 12_i64).unwrap(), None);
}

#[test]
fn test_inactive_page_is_none_by_slug_and_id() {
    let mut store = new_store();
    let page = create_test_page(&mut store, "retired");
    add_feature(&mut store, page.id, 1, "One", false);
    update_page(
        &mut store,
        page.id,
        PageUpdate {
            is_active: Some(false),
            ..PageUpdate::default()
        },
    )
    .unwrap();

    assert_eq!(assemble_page(&store, "retired").unwrap(), None);
    assert_eq!(assemble_page(&store, page.id).unwrap(), None);
}

#[test]
fn test_page_without_components_assembles_empty() {
    let mut store = new_store();
    create_test_page(&mut store, "bare");

    let assembled = assemble_page(&store, "bare").unwrap().unwrap();

    assert!(assembled.hero_sections.is_empty());
    assert!(assembled.features.is_empty());
    assert!(assembled.cta_sections.is_empty());
    assert!(assembled.is_empty());
}

#[test]
fn test_five_featured_split_three_and_overflow() {
    let mut store = new_store();
    let page = create_test_page(&mut store, "home");
    for order in 1..=5 {
        add_feature(&mut store, page.id, order, &format!("Featured {}", order), true);
    }
    add_feature(&mut store, page.id, 6, "Plain A", false);
    add_feature(&mut store, page.id, 7, "Plain B", false);

    let assembled = assemble_page(&store, "home").unwrap().unwrap();
    assert_eq!(assembled.features.len(), 7);

    let partition = assembled.feature_partition();
    let featured: Vec<&str> = partition.featured.iter().map(|f| f.title.as_str()).collect();
    let others: Vec<&str> = partition.others.iter().map(|f| f.title.as_str()).collect();

    assert_eq!(featured.len(), FEATURED_DISPLAY_LIMIT);
    assert_eq!(featured, vec!["Featured 1", "Featured 2", "Featured 3"]);
    assert_eq!(others, vec!["Featured 4", "Featured 5", "Plain A", "Plain B"]);
}

#[test]
fn test_assembled_page_serializes_to_json() {
    let mut store = new_store();
    let page = create_test_page(&mut store, "home");
    add_hero(&mut store, page.id, 1, true);

    let assembled = assemble_page(&store, "home").unwrap().unwrap();
    let json = serde_json::to_value(&assembled).unwrap();

    assert_eq!(json["page"]["slug"], "home");
    assert_eq!(json["hero_sections"][0]["alignment"], "center");
    assert_eq!(json["features"], serde_json::json!([]));
}
