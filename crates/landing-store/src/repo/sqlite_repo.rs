//! SQLite repository implementation
//!
//! Implements `ContentStore` over a borrowed connection. Filtering and
//! ordering happen in SQL; uniqueness and page references are enforced by the
//! schema and mapped back to domain errors.

use landing_core::errors::LandingError;
use landing_core::model::{
    timestamp_now, CallToActionSection, CallToActionSectionCreate, Feature, FeatureCreate,
    HeroSection, HeroSectionCreate, Page, PageCreate, PageUpdate, Theme, ThemeCreate,
};
use landing_core::ops::{ContentStore, StoreResult};
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::rows::{
    self, millis, CTA_COLUMNS, FEATURE_COLUMNS, HERO_COLUMNS, PAGE_COLUMNS, THEME_COLUMNS,
};
use crate::errors::{from_rusqlite, from_write, serialization_error, ConstraintKind};

type RowMapper<T> = fn(&Row<'_>) -> rusqlite::Result<T>;

/// SQLite-backed content store
///
/// Borrows the connection, so one connection can back several short-lived
/// repositories. `atomically` opens a transaction on it.
pub struct SqliteRepo<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteRepo<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &Connection {
        self.conn
    }

    fn query_one<T>(
        &self,
        sql: &str,
        key: impl rusqlite::ToSql,
        map: RowMapper<T>,
    ) -> StoreResult<Option<T>> {
        self.conn
            .query_row(sql, [key], map)
            .optional()
            .map_err(from_rusqlite)
    }

    fn query_for_page<T>(
        &self,
        sql: &str,
        page_id: i64,
        map: RowMapper<T>,
    ) -> StoreResult<Vec<T>> {
        let mut stmt = self.conn.prepare(sql).map_err(from_rusqlite)?;
        let records = stmt
            .query_map([page_id], map)
            .map_err(from_rusqlite)?
            .collect::<rusqlite::Result<Vec<T>>>()
            .map_err(from_rusqlite)?;
        Ok(records)
    }
}

fn missing_page(page_id: i64) -> impl FnOnce(ConstraintKind) -> Option<LandingError> {
    move |kind| {
        (kind == ConstraintKind::ForeignKey).then_some(LandingError::MissingPage { page_id })
    }
}

impl ContentStore for SqliteRepo<'_> {
    fn insert_page(&mut self, input: PageCreate) -> StoreResult<Page> {
        let now = timestamp_now();
        self.conn
            .execute(
                "INSERT INTO landing_pages
                    (title, slug, is_active, meta_title, meta_description, created_at, updated_at)
                 VALUES (?1, ?2, 1, ?3, ?4, ?5, ?5)",
                params![
                    input.title,
                    input.slug,
                    input.meta_title,
                    input.meta_description,
                    millis(&now),
                ],
            )
            .map_err(|e| {
                from_write(e, |kind| {
                    (kind == ConstraintKind::Unique).then(|| LandingError::SlugTaken {
                        slug: input.slug.clone(),
                    })
                })
            })?;

        let id = self.conn.last_insert_rowid();
        tracing::debug!(page_id = id, slug = %input.slug, "page inserted");
        Ok(input.into_record(id, now))
    }

    fn update_page(&mut self, id: i64, update: PageUpdate) -> StoreResult<Option<Page>> {
        let Some(mut page) = self.find_page(id)? else {
            return Ok(None);
        };
        update.apply_to(&mut page, timestamp_now());

        self.conn
            .execute(
                "UPDATE landing_pages
                 SET title = ?1, slug = ?2, is_active = ?3, meta_title = ?4,
                     meta_description = ?5, updated_at = ?6
                 WHERE id = ?7",
                params![
                    page.title,
                    page.slug,
                    page.is_active,
                    page.meta_title,
                    page.meta_description,
                    millis(&page.updated_at),
                    id,
                ],
            )
            .map_err(|e| {
                from_write(e, |kind| {
                    (kind == ConstraintKind::Unique).then(|| LandingError::SlugTaken {
                        slug: page.slug.clone(),
                    })
                })
            })?;

        tracing::debug!(page_id = id, "page updated");
        Ok(Some(page))
    }

    fn find_page(&self, id: i64) -> StoreResult<Option<Page>> {
        let sql = format!("SELECT {} FROM landing_pages WHERE id = ?1", PAGE_COLUMNS);
        self.query_one(&sql, id, rows::page)
    }

    fn find_active_page(&self, slug: &str) -> StoreResult<Option<Page>> {
        let sql = format!(
            "SELECT {} FROM landing_pages WHERE slug = ?1 AND is_active = 1",
            PAGE_COLUMNS
        );
        self.query_one(&sql, slug, rows::page)
    }

    fn insert_hero_section(&mut self, input: HeroSectionCreate) -> StoreResult<HeroSection> {
        let now = timestamp_now();
        self.conn
            .execute(
                "INSERT INTO hero_sections
                    (landing_page_id, headline, subheadline, description, background_image_url,
                     background_color, text_color, primary_button_text, primary_button_url,
                     secondary_button_text, secondary_button_url, alignment, height,
                     display_order, is_active, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?16)",
                params![
                    input.landing_page_id,
                    input.headline,
                    input.subheadline,
                    input.description,
                    input.background_image_url,
                    input.background_color,
                    input.text_color,
                    input.primary_button_text,
                    input.primary_button_url,
                    input.secondary_button_text,
                    input.secondary_button_url,
                    input.alignment.as_str(),
                    input.height.as_str(),
                    input.display_order,
                    input.is_active,
                    millis(&now),
                ],
            )
            .map_err(|e| from_write(e, missing_page(input.landing_page_id)))?;

        let id = self.conn.last_insert_rowid();
        tracing::debug!(hero_id = id, page_id = input.landing_page_id, "hero section inserted");
        Ok(input.into_record(id, now))
    }

    fn find_hero_section(&self, id: i64) -> StoreResult<Option<HeroSection>> {
        let sql = format!("SELECT {} FROM hero_sections WHERE id = ?1", HERO_COLUMNS);
        self.query_one(&sql, id, rows::hero_section)
    }

    fn active_hero_sections(&self, page_id: i64) -> StoreResult<Vec<HeroSection>> {
        let sql = format!(
            "SELECT {} FROM hero_sections
             WHERE landing_page_id = ?1 AND is_active = 1
             ORDER BY display_order, id",
            HERO_COLUMNS
        );
        self.query_for_page(&sql, page_id, rows::hero_section)
    }

    fn insert_feature(&mut self, input: FeatureCreate) -> StoreResult<Feature> {
        let now = timestamp_now();
        self.conn
            .execute(
                "INSERT INTO features
                    (landing_page_id, title, description, icon, icon_color, image_url,
                     link_text, link_url, background_color, text_color, display_order,
                     is_featured, is_active, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?14)",
                params![
                    input.landing_page_id,
                    input.title,
                    input.description,
                    input.icon,
                    input.icon_color,
                    input.image_url,
                    input.link_text,
                    input.link_url,
                    input.background_color,
                    input.text_color,
                    input.display_order,
                    input.is_featured,
                    input.is_active,
                    millis(&now),
                ],
            )
            .map_err(|e| from_write(e, missing_page(input.landing_page_id)))?;

        let id = self.conn.last_insert_rowid();
        tracing::debug!(feature_id = id, page_id = input.landing_page_id, "feature inserted");
        Ok(input.into_record(id, now))
    }

    fn find_feature(&self, id: i64) -> StoreResult<Option<Feature>> {
        let sql = format!("SELECT {} FROM features WHERE id = ?1", FEATURE_COLUMNS);
        self.query_one(&sql, id, rows::feature)
    }

    fn active_features(&self, page_id: i64) -> StoreResult<Vec<Feature>> {
        let sql = format!(
            "SELECT {} FROM features
             WHERE landing_page_id = ?1 AND is_active = 1
             ORDER BY display_order, title, id",
            FEATURE_COLUMNS
        );
        self.query_for_page(&sql, page_id, rows::feature)
    }

    fn insert_cta_section(
        &mut self,
        input: CallToActionSectionCreate,
    ) -> StoreResult<CallToActionSection> {
        let now = timestamp_now();
        self.conn
            .execute(
                "INSERT INTO cta_sections
                    (landing_page_id, headline, subheadline, description, primary_button_text,
                     primary_button_url, primary_button_style, secondary_button_text,
                     secondary_button_url, secondary_button_style, background_color, text_color,
                     background_image_url, alignment, size, display_order, is_active,
                     created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16,
                         ?17, ?18, ?18)",
                params![
                    input.landing_page_id,
                    input.headline,
                    input.subheadline,
                    input.description,
                    input.primary_button_text,
                    input.primary_button_url,
                    input.primary_button_style.as_str(),
                    input.secondary_button_text,
                    input.secondary_button_url,
                    input.secondary_button_style.as_str(),
                    input.background_color,
                    input.text_color,
                    input.background_image_url,
                    input.alignment.as_str(),
                    input.size.as_str(),
                    input.display_order,
                    input.is_active,
                    millis(&now),
                ],
            )
            .map_err(|e| from_write(e, missing_page(input.landing_page_id)))?;

        let id = self.conn.last_insert_rowid();
        tracing::debug!(cta_id = id, page_id = input.landing_page_id, "cta section inserted");
        Ok(input.into_record(id, now))
    }

    fn find_cta_section(&self, id: i64) -> StoreResult<Option<CallToActionSection>> {
        let sql = format!("SELECT {} FROM cta_sections WHERE id = ?1", CTA_COLUMNS);
        self.query_one(&sql, id, rows::cta_section)
    }

    fn active_cta_sections(&self, page_id: i64) -> StoreResult<Vec<CallToActionSection>> {
        let sql = format!(
            "SELECT {} FROM cta_sections
             WHERE landing_page_id = ?1 AND is_active = 1
             ORDER BY display_order, id",
            CTA_COLUMNS
        );
        self.query_for_page(&sql, page_id, rows::cta_section)
    }

    fn insert_theme(&mut self, input: ThemeCreate) -> StoreResult<Theme> {
        let now = timestamp_now();
        let tokens = serde_json::to_string(&input.design_tokens)
            .map_err(|e| serialization_error("design_tokens", e))?;

        self.conn
            .execute(
                "INSERT INTO landing_page_themes
                    (name, description, primary_color, secondary_color, accent_color,
                     background_color, text_color, font_family, heading_font_family,
                     border_radius, spacing_unit, custom_css, design_tokens, is_active,
                     created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?15)",
                params![
                    input.name,
                    input.description,
                    input.primary_color,
                    input.secondary_color,
                    input.accent_color,
                    input.background_color,
                    input.text_color,
                    input.font_family,
                    input.heading_font_family,
                    input.border_radius,
                    input.spacing_unit,
                    input.custom_css,
                    tokens,
                    input.is_active,
                    millis(&now),
                ],
            )
            .map_err(|e| {
                from_write(e, |kind| {
                    (kind == ConstraintKind::Unique).then(|| LandingError::ThemeNameTaken {
                        name: input.name.clone(),
                    })
                })
            })?;

        let id = self.conn.last_insert_rowid();
        tracing::debug!(theme_id = id, name = %input.name, "theme inserted");
        Ok(input.into_record(id, now))
    }

    fn find_active_theme(&self, name: &str) -> StoreResult<Option<Theme>> {
        let sql = format!(
            "SELECT {} FROM landing_page_themes WHERE name = ?1 AND is_active = 1",
            THEME_COLUMNS
        );
        self.query_one(&sql, name, rows::theme)
    }

    fn atomically<T, F>(&mut self, f: F) -> StoreResult<T>
    where
        F: FnOnce(&mut dyn ContentStore) -> StoreResult<T>,
    {
        // Rolled back on drop unless committed
        let tx = self.conn.unchecked_transaction().map_err(from_rusqlite)?;
        let mut scoped = SqliteRepo::new(&tx);
        let out = f(&mut scoped)?;
        tx.commit().map_err(from_rusqlite)?;
        Ok(out)
    }
}
