use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Feature highlight card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub id: i64,
    pub landing_page_id: i64,

    pub title: String,
    pub description: String,

    /// Icon name or CSS class
    pub icon: Option<String>,
    pub icon_color: Option<String>,
    pub image_url: Option<String>,

    pub link_text: Option<String>,
    pub link_url: Option<String>,

    pub background_color: Option<String>,
    pub text_color: Option<String>,

    pub display_order: i32,
    /// Marks the feature for prioritized display
    pub is_featured: bool,
    pub is_active: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCreate {
    pub landing_page_id: i64,
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
    pub icon_color: Option<String>,
    pub image_url: Option<String>,
    pub link_text: Option<String>,
    pub link_url: Option<String>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub display_order: i32,
    pub is_featured: bool,
    pub is_active: bool,
}

impl FeatureCreate {
    pub fn new(
        landing_page_id: i64,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            landing_page_id,
            title: title.into(),
            description: description.into(),
            icon: None,
            icon_color: None,
            image_url: None,
            link_text: None,
            link_url: None,
            background_color: None,
            text_color: None,
            display_order: 0,
            is_featured: false,
            is_active: true,
        }
    }

    pub fn into_record(self, id: i64, now: DateTime<Utc>) -> Feature {
        Feature {
            id,
            landing_page_id: self.landing_page_id,
            title: self.title,
            description: self.description,
            icon: self.icon,
            icon_color: self.icon_color,
            image_url: self.image_url,
            link_text: self.link_text,
            link_url: self.link_url,
            background_color: self.background_color,
            text_color: self.text_color,
            display_order: self.display_order,
            is_featured: self.is_featured,
            is_active: self.is_active,
            created_at: now,
            updated_at: now,
        }
    }
}
