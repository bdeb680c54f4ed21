// Integration tests for landing page command handlers.

use landing_core::errors::ExErrorKind;
use landing_core::logging_facility::init_test_capture;
use landing_core::model::{PageCreate, PageUpdate};
use landing_core::ops::page_ops::{create_page, update_page};
use landing_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_REQUEST_ID};
use landing_engine::commands::page::{seed_sample_content, show_landing_page};
use landing_store::SqliteRepo;
use rusqlite::Connection;
use tempfile::TempDir;

fn setup_db() -> (TempDir, Connection) {
    let temp_dir = TempDir::new().unwrap();
    let conn = landing_store::db::connect(temp_dir.path().join("test.db")).unwrap();
    (temp_dir, conn)
}

fn page_count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM landing_pages", [], |r| r.get(0))
        .unwrap()
}

#[test]
fn test_seed_then_show() {
    let (_tmp, conn) = setup_db();

    let page = seed_sample_content(&conn).unwrap();
    let assembled = show_landing_page(&conn, "home", false).unwrap().unwrap();

    assert_eq!(assembled.page.id, page.id);
    assert_eq!(assembled.features.len(), 6);
}

#[test]
fn test_second_seed_is_constraint_violation() {
    let (_tmp, conn) = setup_db();
    seed_sample_content(&conn).unwrap();

    let err = seed_sample_content(&conn).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
    assert_eq!(page_count(&conn), 1);
}

#[test]
fn test_show_home_seeds_when_missing() {
    let (_tmp, conn) = setup_db();

    let assembled = show_landing_page(&conn, "home", true).unwrap().unwrap();

    assert_eq!(assembled.page.slug, "home");
    assert_eq!(assembled.hero_sections.len(), 1);
    assert_eq!(assembled.feature_partition().featured.len(), 3);
    assert_eq!(assembled.cta_sections.len(), 1);

    // Already there: served without another seed
    show_landing_page(&conn, "home", true).unwrap().unwrap();
    assert_eq!(page_count(&conn), 1);
}

#[test]
fn test_show_without_seeding_is_none() {
    let (_tmp, conn) = setup_db();

    assert!(show_landing_page(&conn, "home", false).unwrap().is_none());
    assert_eq!(page_count(&conn), 0);
}

#[test]
fn test_other_slugs_are_never_seeded() {
    let (_tmp, conn) = setup_db();

    assert!(show_landing_page(&conn, "pricing", true).unwrap().is_none());
    assert_eq!(page_count(&conn), 0);
}

#[test]
fn test_inactive_home_is_not_replaced() {
    let (_tmp, conn) = setup_db();
    let mut repo = SqliteRepo::new(&conn);
    let page = create_page(&mut repo, PageCreate::new("Old home", "home")).unwrap();
    update_page(
        &mut repo,
        page.id,
        PageUpdate {
            is_active: Some(false),
            ..PageUpdate::default()
        },
    )
    .unwrap();

    let err = show_landing_page(&conn, "home", true).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
    assert_eq!(page_count(&conn), 1);
}

#[test]
fn test_show_emits_lifecycle_events() {
    let capture = init_test_capture();
    let (_tmp, conn) = setup_db();

    show_landing_page(&conn, "home", true).unwrap();

    capture.assert_event_exists("show_landing_page", EVENT_START);
    capture.assert_event_exists("show_landing_page", EVENT_END);
    let ends = capture
        .events_for("show_landing_page")
        .into_iter()
        .filter(|e| {
            e.event.as_deref() == Some(EVENT_END) && e.fields.get("feature_count").is_some()
        })
        .count();
    assert!(ends >= 1);
}

#[test]
fn test_seed_error_is_logged_with_code() {
    let capture = init_test_capture();
    let (_tmp, conn) = setup_db();
    seed_sample_content(&conn).unwrap();

    seed_sample_content(&conn).unwrap_err();

    let errors: Vec<_> = capture
        .events_for("seed_sample_content")
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();
    assert!(!errors.is_empty());
    assert!(errors.iter().any(|e| {
        e.fields.get("err_code").map(String::as_str) == Some("ERR_CONSTRAINT_VIOLATION")
            && e.fields.contains_key(FIELD_REQUEST_ID)
    }));
}
