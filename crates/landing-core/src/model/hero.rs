use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::layout::{Alignment, HeroHeight};

/// Hero banner shown at the top of a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroSection {
    pub id: i64,
    /// Owning page
    pub landing_page_id: i64,

    pub headline: String,
    pub subheadline: Option<String>,
    pub description: Option<String>,

    pub background_image_url: Option<String>,
    /// Free-form CSS colour
    pub background_color: Option<String>,
    pub text_color: Option<String>,

    pub primary_button_text: Option<String>,
    pub primary_button_url: Option<String>,
    pub secondary_button_text: Option<String>,
    pub secondary_button_url: Option<String>,

    pub alignment: Alignment,
    pub height: HeroHeight,

    pub display_order: i32,
    pub is_active: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a hero section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroSectionCreate {
    pub landing_page_id: i64,
    pub headline: String,
    pub subheadline: Option<String>,
    pub description: Option<String>,
    pub background_image_url: Option<String>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub primary_button_text: Option<String>,
    pub primary_button_url: Option<String>,
    pub secondary_button_text: Option<String>,
    pub secondary_button_url: Option<String>,
    pub alignment: Alignment,
    pub height: HeroHeight,
    pub display_order: i32,
    pub is_active: bool,
}

impl HeroSectionCreate {
    /// Payload with every optional field empty and default layout
    pub fn new(landing_page_id: i64, headline: impl Into<String>) -> Self {
        Self {
            landing_page_id,
            headline: headline.into(),
            subheadline: None,
            description: None,
            background_image_url: None,
            background_color: None,
            text_color: None,
            primary_button_text: None,
            primary_button_url: None,
            secondary_button_text: None,
            secondary_button_url: None,
            alignment: Alignment::default(),
            height: HeroHeight::default(),
            display_order: 0,
            is_active: true,
        }
    }

    pub fn into_record(self, id: i64, now: DateTime<Utc>) -> HeroSection {
        HeroSection {
            id,
            landing_page_id: self.landing_page_id,
            headline: self.headline,
            subheadline: self.subheadline,
            description: self.description,
            background_image_url: self.background_image_url,
            background_color: self.background_color,
            text_color: self.text_color,
            primary_button_text: self.primary_button_text,
            primary_button_url: self.primary_button_url,
            secondary_button_text: self.secondary_button_text,
            secondary_button_url: self.secondary_button_url,
            alignment: self.alignment,
            height: self.height,
            display_order: self.display_order,
            is_active: self.is_active,
            created_at: now,
            updated_at: now,
        }
    }
}
