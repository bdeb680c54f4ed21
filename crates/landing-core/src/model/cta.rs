use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::layout::{Alignment, ButtonStyle, CtaSize};

/// Call-to-action section
///
/// The primary button is mandatory; the secondary one is optional but always
/// carries a style so it can be rendered consistently once set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallToActionSection {
    pub id: i64,
    pub landing_page_id: i64,

    pub headline: String,
    pub subheadline: Option<String>,
    pub description: Option<String>,

    pub primary_button_text: String,
    pub primary_button_url: String,
    pub primary_button_style: ButtonStyle,

    pub secondary_button_text: Option<String>,
    pub secondary_button_url: Option<String>,
    pub secondary_button_style: ButtonStyle,

    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub background_image_url: Option<String>,

    pub alignment: Alignment,
    pub size: CtaSize,

    pub display_order: i32,
    pub is_active: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CallToActionSection {
    /// Secondary button, when both its label and target are set
    pub fn secondary_button(&self) -> Option<(&str, &str)> {
        match (&self.secondary_button_text, &self.secondary_button_url) {
            (Some(text), Some(url)) => Some((text.as_str(), url.as_str())),
            _ => None,
        }
    }
}

/// Payload for creating a CTA section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallToActionSectionCreate {
    pub landing_page_id: i64,
    pub headline: String,
    pub subheadline: Option<String>,
    pub description: Option<String>,
    pub primary_button_text: String,
    pub primary_button_url: String,
    pub primary_button_style: ButtonStyle,
    pub secondary_button_text: Option<String>,
    pub secondary_button_url: Option<String>,
    pub secondary_button_style: ButtonStyle,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub background_image_url: Option<String>,
    pub alignment: Alignment,
    pub size: CtaSize,
    pub display_order: i32,
    pub is_active: bool,
}

impl CallToActionSectionCreate {
    pub fn new(
        landing_page_id: i64,
        headline: impl Into<String>,
        primary_button_text: impl Into<String>,
        primary_button_url: impl Into<String>,
    ) -> Self {
        Self {
            landing_page_id,
            headline: headline.into(),
            subheadline: None,
            description: None,
            primary_button_text: primary_button_text.into(),
            primary_button_url: primary_button_url.into(),
            primary_button_style: ButtonStyle::Primary,
            secondary_button_text: None,
            secondary_button_url: None,
            secondary_button_style: ButtonStyle::Secondary,
            background_color: None,
            text_color: None,
            background_image_url: None,
            alignment: Alignment::default(),
            size: CtaSize::default(),
            display_order: 0,
            is_active: true,
        }
    }

    pub fn into_record(self, id: i64, now: DateTime<Utc>) -> CallToActionSection {
        CallToActionSection {
            id,
            landing_page_id: self.landing_page_id,
            headline: self.headline,
            subheadline: self.subheadline,
            description: self.description,
            primary_button_text: self.primary_button_text,
            primary_button_url: self.primary_button_url,
            primary_button_style: self.primary_button_style,
            secondary_button_text: self.secondary_button_text,
            secondary_button_url: self.secondary_button_url,
            secondary_button_style: self.secondary_button_style,
            background_color: self.background_color,
            text_color: self.text_color,
            background_image_url: self.background_image_url,
            alignment: self.alignment,
            size: self.size,
            display_order: self.display_order,
            is_active: self.is_active,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::timestamp_now;

    #[test]
    fn test_new_uses_secondary_style_for_secondary_button() {
        let cta = CallToActionSectionCreate::new(1, "Go", "Start", "/start");
        assert_eq!(cta.primary_button_style, ButtonStyle::Primary);
        assert_eq!(cta.secondary_button_style, ButtonStyle::Secondary);
        assert_eq!(cta.size, CtaSize::Medium);
    }

    #[test]
    fn test_secondary_button_requires_text_and_url() {
        let mut input = CallToActionSectionCreate::new(1, "Go", "Start", "/start");
        input.secondary_button_text = Some("Pricing".to_string());
        let half = input.clone().into_record(1, timestamp_now());
        assert_eq!(half.secondary_button(), None);

        input.secondary_button_url = Some("/pricing".to_string());
        let full = input.into_record(2, timestamp_now());
        assert_eq!(full.secondary_button(), Some(("Pricing", "/pricing")));
    }
}
