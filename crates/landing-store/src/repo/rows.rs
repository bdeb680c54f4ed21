//! Row to record mapping
//!
//! Column lists and mappers are kept side by side so the positional indexes
//! stay in step with the SELECTs.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use landing_core::errors::LandingError;
use landing_core::model::{CallToActionSection, DesignTokens, Feature, HeroSection, Page, Theme};
use rusqlite::types::Type;
use rusqlite::Row;

pub const PAGE_COLUMNS: &str =
    "id, title, slug, is_active, meta_title, meta_description, created_at, updated_at";

pub const HERO_COLUMNS: &str = "id, landing_page_id, headline, subheadline, description, \
     background_image_url, background_color, text_color, primary_button_text, \
     primary_button_url, secondary_button_text, secondary_button_url, alignment, height, \
     display_order, is_active, created_at, updated_at";

pub const FEATURE_COLUMNS: &str = "id, landing_page_id, title, description, icon, icon_color, \
     image_url, link_text, link_url, background_color, text_color, display_order, is_featured, \
     is_active, created_at, updated_at";

pub const CTA_COLUMNS: &str = "id, landing_page_id, headline, subheadline, description, \
     primary_button_text, primary_button_url, primary_button_style, secondary_button_text, \
     secondary_button_url, secondary_button_style, background_color, text_color, \
     background_image_url, alignment, size, display_order, is_active, created_at, updated_at";

pub const THEME_COLUMNS: &str = "id, name, description, primary_color, secondary_color, \
     accent_color, background_color, text_color, font_family, heading_font_family, \
     border_radius, spacing_unit, custom_css, design_tokens, is_active, created_at, updated_at";

pub fn millis(ts: &DateTime<Utc>) -> i64 {
    ts.timestamp_millis()
}

fn timestamp(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let ms: i64 = row.get(idx)?;
    Ok(DateTime::from_timestamp_millis(ms).unwrap_or_else(Utc::now))
}

fn flag(row: &Row<'_>, idx: usize) -> rusqlite::Result<bool> {
    let value: i64 = row.get(idx)?;
    Ok(value != 0)
}

fn choice<T>(row: &Row<'_>, idx: usize) -> rusqlite::Result<T>
where
    T: FromStr<Err = LandingError>,
{
    let raw: String = row.get(idx)?;
    raw.parse()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn tokens(row: &Row<'_>, idx: usize) -> rusqlite::Result<DesignTokens> {
    let raw: String = row.get(idx)?;
    serde_json::from_str(&raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

pub fn page(row: &Row<'_>) -> rusqlite::Result<Page> {
    Ok(Page {
        id: row.get(0)?,
        title: row.get(1)?,
        slug: row.get(2)?,
        is_active: flag(row, 3)?,
        meta_title: row.get(4)?,
        meta_description: row.get(5)?,
        created_at: timestamp(row, 6)?,
        updated_at: timestamp(row, 7)?,
    })
}

pub fn hero_section(row: &Row<'_>) -> rusqlite::Result<HeroSection> {
    Ok(HeroSection {
        id: row.get(0)?,
        landing_page_id: row.get(1)?,
        headline: row.get(2)?,
        subheadline: row.get(3)?,
        description: row.get(4)?,
        background_image_url: row.get(5)?,
        background_color: row.get(6)?,
        text_color: row.get(7)?,
        primary_button_text: row.get(8)?,
        primary_button_url: row.get(9)?,
        secondary_button_text: row.get(10)?,
        secondary_button_url: row.get(11)?,
        alignment: choice(row, 12)?,
        height: choice(row, 13)?,
        display_order: row.get(14)?,
        is_active: flag(row, 15)?,
        created_at: timestamp(row, 16)?,
        updated_at: timestamp(row, 17)?,
    })
}

pub fn feature(row: &Row<'_>) -> rusqlite::Result<Feature> {
    Ok(Feature {
        id: row.get(0)?,
        landing_page_id: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        icon: row.get(4)?,
        icon_color: row.get(5)?,
        image_url: row.get(6)?,
        link_text: row.get(7)?,
        link_url: row.get(8)?,
        background_color: row.get(9)?,
        text_color: row.get(10)?,
        display_order: row.get(11)?,
        is_featured: flag(row, 12)?,
        is_active: flag(row, 13)?,
        created_at: timestamp(row, 14)?,
        updated_at: timestamp(row, 15)?,
    })
}

pub fn cta_section(row: &Row<'_>) -> rusqlite::Result<CallToActionSection> {
    Ok(CallToActionSection {
        id: row.get(0)?,
        landing_page_id: row.get(1)?,
        headline: row.get(2)?,
        subheadline: row.get(3)?,
        description: row.get(4)?,
        primary_button_text: row.get(5)?,
        primary_button_url: row.get(6)?,
        primary_button_style: choice(row, 7)?,
        secondary_button_text: row.get(8)?,
        secondary_button_url: row.get(9)?,
        secondary_button_style: choice(row, 10)?,
        background_color: row.get(11)?,
        text_color: row.get(12)?,
        background_image_url: row.get(13)?,
        alignment: choice(row, 14)?,
        size: choice(row, 15)?,
        display_order: row.get(16)?,
        is_active: flag(row, 17)?,
        created_at: timestamp(row, 18)?,
        updated_at: timestamp(row, 19)?,
    })
}

pub fn theme(row: &Row<'_>) -> rusqlite::Result<Theme> {
    Ok(Theme {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        primary_color: row.get(3)?,
        secondary_color: row.get(4)?,
        accent_color: row.get(5)?,
        background_color: row.get(6)?,
        text_color: row.get(7)?,
        font_family: row.get(8)?,
        heading_font_family: row.get(9)?,
        border_radius: row.get(10)?,
        spacing_unit: row.get(11)?,
        custom_css: row.get(12)?,
        design_tokens: tokens(row, 13)?,
        is_active: flag(row, 14)?,
        created_at: timestamp(row, 15)?,
        updated_at: timestamp(row, 16)?,
    })
}
