//! Payload validation
//!
//! Every creation payload is checked here before any store is touched:
//! required text must be non-blank, every text column has a maximum length
//! (counted in characters), and slugs must be URL-safe.

use crate::errors::{LandingError, Result};
use crate::model::{
    CallToActionSectionCreate, FeatureCreate, HeroSectionCreate, PageCreate, PageUpdate,
    ThemeCreate,
};

pub const MAX_PAGE_TITLE: usize = 200;
pub const MAX_SLUG: usize = 100;
pub const MAX_META_TITLE: usize = 200;
pub const MAX_META_DESCRIPTION: usize = 500;

pub const MAX_HEADLINE: usize = 300;
pub const MAX_SUBHEADLINE: usize = 500;
pub const MAX_DESCRIPTION: usize = 1000;
pub const MAX_URL: usize = 500;
pub const MAX_COLOR: usize = 50;
pub const MAX_BUTTON_TEXT: usize = 100;

pub const MAX_FEATURE_TITLE: usize = 200;
pub const MAX_ICON: usize = 100;

pub const MAX_THEME_NAME: usize = 100;
pub const MAX_THEME_DESCRIPTION: usize = 500;
pub const MAX_FONT_FAMILY: usize = 200;
pub const MAX_SPACING: usize = 50;

/// Field checker bound to one entity name, so errors say where they came from
struct Checker {
    entity: &'static str,
}

impl Checker {
    fn required(&self, field: &str, value: &str, max: usize) -> Result<()> {
        if value.trim().is_empty() {
            return Err(LandingError::MissingField {
                entity: self.entity.to_string(),
                field: field.to_string(),
            });
        }
        self.max(field, value, max)
    }

    fn max(&self, field: &str, value: &str, max: usize) -> Result<()> {
        let actual = value.chars().count();
        if actual > max {
            return Err(LandingError::FieldTooLong {
                entity: self.entity.to_string(),
                field: field.to_string(),
                max,
                actual,
            });
        }
        Ok(())
    }

    fn optional(&self, field: &str, value: Option<&str>, max: usize) -> Result<()> {
        match value {
            Some(v) => self.max(field, v, max),
            None => Ok(()),
        }
    }
}

/// Validate a slug: non-empty, bounded, ASCII letters, digits, `-` or `_`
pub fn validate_slug(slug: &str) -> Result<()> {
    if slug.is_empty() {
        return Err(LandingError::MissingField {
            entity: "page".to_string(),
            field: "slug".to_string(),
        });
    }
    Checker { entity: "page" }.max("slug", slug, MAX_SLUG)?;

    if let Some(bad) = slug
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(LandingError::InvalidSlug {
            slug: slug.to_string(),
            reason: format!("character '{}' is not URL-safe", bad),
        });
    }
    Ok(())
}

pub fn validate_page_create(input: &PageCreate) -> Result<()> {
    let c = Checker { entity: "page" };
    c.required("title", &input.title, MAX_PAGE_TITLE)?;
    validate_slug(&input.slug)?;
    c.optional("meta_title", input.meta_title.as_deref(), MAX_META_TITLE)?;
    c.optional(
        "meta_description",
        input.meta_description.as_deref(),
        MAX_META_DESCRIPTION,
    )
}

/// Validate only the fields an update actually sets
pub fn validate_page_update(update: &PageUpdate) -> Result<()> {
    let c = Checker { entity: "page" };
    if let Some(title) = &update.title {
        c.required("title", title, MAX_PAGE_TITLE)?;
    }
    if let Some(slug) = &update.slug {
        validate_slug(slug)?;
    }
    if let Some(meta_title) = &update.meta_title {
        c.optional("meta_title", meta_title.as_deref(), MAX_META_TITLE)?;
    }
    if let Some(meta_description) = &update.meta_description {
        c.optional(
            "meta_description",
            meta_description.as_deref(),
            MAX_META_DESCRIPTION,
        )?;
    }
    Ok(())
}

pub fn validate_hero_section(input: &HeroSectionCreate) -> Result<()> {
    let c = Checker {
        entity: "hero_section",
    };
    c.required("headline", &input.headline, MAX_HEADLINE)?;
    c.optional("subheadline", input.subheadline.as_deref(), MAX_SUBHEADLINE)?;
    c.optional("description", input.description.as_deref(), MAX_DESCRIPTION)?;
    c.optional(
        "background_image_url",
        input.background_image_url.as_deref(),
        MAX_URL,
    )?;
    c.optional(
        "background_color",
        input.background_color.as_deref(),
        MAX_COLOR,
    )?;
    c.optional("text_color", input.text_color.as_deref(), MAX_COLOR)?;
    c.optional(
        "primary_button_text",
        input.primary_button_text.as_deref(),
        MAX_BUTTON_TEXT,
    )?;
    c.optional(
        "primary_button_url",
        input.primary_button_url.as_deref(),
        MAX_URL,
    )?;
    c.optional(
        "secondary_button_text",
        input.secondary_button_text.as_deref(),
        MAX_BUTTON_TEXT,
    )?;
    c.optional(
        "secondary_button_url",
        input.secondary_button_url.as_deref(),
        MAX_URL,
    )
}

pub fn validate_feature(input: &FeatureCreate) -> Result<()> {
    let c = Checker { entity: "feature" };
    c.required("title", &input.title, MAX_FEATURE_TITLE)?;
    c.required("description", &input.description, MAX_DESCRIPTION)?;
    c.optional("icon", input.icon.as_deref(), MAX_ICON)?;
    c.optional("icon_color", input.icon_color.as_deref(), MAX_COLOR)?;
    c.optional("image_url", input.image_url.as_deref(), MAX_URL)?;
    c.optional("link_text", input.link_text.as_deref(), MAX_BUTTON_TEXT)?;
    c.optional("link_url", input.link_url.as_deref(), MAX_URL)?;
    c.optional(
        "background_color",
        input.background_color.as_deref(),
        MAX_COLOR,
    )?;
    c.optional("text_color", input.text_color.as_deref(), MAX_COLOR)
}

pub fn validate_cta_section(input: &CallToActionSectionCreate) -> Result<()> {
    let c = Checker {
        entity: "cta_section",
    };
    c.required("headline", &input.headline, MAX_HEADLINE)?;
    c.optional("subheadline", input.subheadline.as_deref(), MAX_SUBHEADLINE)?;
    c.optional("description", input.description.as_deref(), MAX_DESCRIPTION)?;
    c.required(
        "primary_button_text",
        &input.primary_button_text,
        MAX_BUTTON_TEXT,
    )?;
    c.required("primary_button_url", &input.primary_button_url, MAX_URL)?;
    c.optional(
        "secondary_button_text",
        input.secondary_button_text.as_deref(),
        MAX_BUTTON_TEXT,
    )?;
    c.optional(
        "secondary_button_url",
        input.secondary_button_url.as_deref(),
        MAX_URL,
    )?;
    c.optional(
        "background_color",
        input.background_color.as_deref(),
        MAX_COLOR,
    )?;
    c.optional("text_color", input.text_color.as_deref(), MAX_COLOR)?;
    c.optional(
        "background_image_url",
        input.background_image_url.as_deref(),
        MAX_URL,
    )
}

pub fn validate_theme(input: &ThemeCreate) -> Result<()> {
    let c = Checker { entity: "theme" };
    c.required("name", &input.name, MAX_THEME_NAME)?;
    c.optional(
        "description",
        input.description.as_deref(),
        MAX_THEME_DESCRIPTION,
    )?;
    c.required("primary_color", &input.primary_color, MAX_COLOR)?;
    c.required("secondary_color", &input.secondary_color, MAX_COLOR)?;
    c.required("accent_color", &input.accent_color, MAX_COLOR)?;
    c.required("background_color", &input.background_color, MAX_COLOR)?;
    c.required("text_color", &input.text_color, MAX_COLOR)?;
    c.required("font_family", &input.font_family, MAX_FONT_FAMILY)?;
    c.optional(
        "heading_font_family",
        input.heading_font_family.as_deref(),
        MAX_FONT_FAMILY,
    )?;
    c.required("border_radius", &input.border_radius, MAX_SPACING)?;
    c.required("spacing_unit", &input.spacing_unit, MAX_SPACING)
}
