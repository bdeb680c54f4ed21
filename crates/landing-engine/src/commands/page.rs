//! Landing page command handlers

use landing_core::bootstrap::{generate_sample_content, SAMPLE_PAGE_SLUG};
use landing_core::errors::ExErrorKind;
use landing_core::model::Page;
use landing_core::ops::page_ops;
use landing_core::{assemble_page, log_op_end, log_op_error, log_op_start, AssembledPage};
use landing_core_types::RequestId;
use landing_store::errors::Result;
use landing_store::SqliteRepo;
use rusqlite::Connection;

/// Generate the sample landing page
///
/// ## Errors
///
/// - `ConstraintViolation`: A page with the sample slug already exists
/// - `PartialSeed`: A component insert failed; nothing was kept
/// - `Persistence`: Database error
pub fn seed_sample_content(conn: &Connection) -> Result<Page> {
    let request_id = RequestId::new();
    log_op_start!("seed_sample_content", request_id = request_id.as_str());
    let start = std::time::Instant::now();

    let page = generate_sample_content(&mut SqliteRepo::new(conn)).map_err(|e| {
        log_op_error!(
            "seed_sample_content",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            request_id = request_id.as_str()
        );
        e
    })?;

    log_op_end!(
        "seed_sample_content",
        duration_ms = start.elapsed().as_millis() as u64,
        request_id = request_id.as_str(),
        page_id = page.id
    );

    Ok(page)
}

/// Assemble the active page with `slug`
///
/// When the sample slug is requested, nothing is there yet and
/// `seed_when_missing` is set, the sample content is generated first. A seed
/// that loses a race to another writer falls back to reading what that writer
/// created.
///
/// ## Returns
///
/// `None` when no active page has the slug
///
/// ## Errors
///
/// - `PartialSeed`: Seeding was attempted and failed part way
/// - `Persistence`: Database error
pub fn show_landing_page(
    conn: &Connection,
    slug: &str,
    seed_when_missing: bool,
) -> Result<Option<AssembledPage>> {
    let request_id = RequestId::new();
    log_op_start!("show_landing_page", request_id = request_id.as_str(), slug = slug);
    let start = std::time::Instant::now();

    let result = show_landing_page_impl(conn, slug, seed_when_missing).map_err(|e| {
        log_op_error!(
            "show_landing_page",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            request_id = request_id.as_str()
        );
        e
    })?;

    match &result {
        Some(assembled) => {
            log_op_end!(
                "show_landing_page",
                duration_ms = start.elapsed().as_millis() as u64,
                request_id = request_id.as_str(),
                page_id = assembled.page.id,
                hero_count = assembled.hero_sections.len(),
                feature_count = assembled.features.len(),
                cta_count = assembled.cta_sections.len()
            );
        }
        None => {
            log_op_end!(
                "show_landing_page",
                duration_ms = start.elapsed().as_millis() as u64,
                request_id = request_id.as_str(),
                found = false
            );
        }
    }

    Ok(result)
}

fn show_landing_page_impl(
    conn: &Connection,
    slug: &str,
    seed_when_missing: bool,
) -> Result<Option<AssembledPage>> {
    let mut repo = SqliteRepo::new(conn);

    if let Some(assembled) = assemble_page(&repo, slug)? {
        return Ok(Some(assembled));
    }
    if !(seed_when_missing && slug == SAMPLE_PAGE_SLUG) {
        return Ok(None);
    }

    tracing::debug!(slug, "sample page missing, seeding");
    match generate_sample_content(&mut repo) {
        Ok(page) => assemble_page(&repo, page.id),
        Err(e) if e.kind() == ExErrorKind::ConstraintViolation => {
            // Another writer holds the slug; serve theirs if it is live
            match page_ops::get_active_page(&repo, slug)? {
                Some(page) => assemble_page(&repo, page.id),
                None => Err(e),
            }
        }
        Err(e) => Err(e),
    }
}
