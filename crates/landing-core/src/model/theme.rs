use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::design_tokens::DesignTokens;

pub const DEFAULT_BACKGROUND_COLOR: &str = "#ffffff";
pub const DEFAULT_TEXT_COLOR: &str = "#333333";
pub const DEFAULT_FONT_FAMILY: &str = "Inter, sans-serif";
pub const DEFAULT_BORDER_RADIUS: &str = "8px";
pub const DEFAULT_SPACING_UNIT: &str = "1rem";

/// Named theme: palette, typography, spacing and extra design tokens
///
/// Independent of pages; looked up by its unique name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,

    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub background_color: String,
    pub text_color: String,

    pub font_family: String,
    pub heading_font_family: Option<String>,

    pub border_radius: String,
    pub spacing_unit: String,

    pub custom_css: Option<String>,
    pub design_tokens: DesignTokens,

    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a theme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeCreate {
    pub name: String,
    pub description: Option<String>,
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub background_color: String,
    pub text_color: String,
    pub font_family: String,
    pub heading_font_family: Option<String>,
    pub border_radius: String,
    pub spacing_unit: String,
    pub custom_css: Option<String>,
    pub design_tokens: DesignTokens,
    pub is_active: bool,
}

impl ThemeCreate {
    /// Payload with the stock background, text, font and spacing defaults
    pub fn new(
        name: impl Into<String>,
        primary_color: impl Into<String>,
        secondary_color: impl Into<String>,
        accent_color: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            primary_color: primary_color.into(),
            secondary_color: secondary_color.into(),
            accent_color: accent_color.into(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            heading_font_family: None,
            border_radius: DEFAULT_BORDER_RADIUS.to_string(),
            spacing_unit: DEFAULT_SPACING_UNIT.to_string(),
            custom_css: None,
            design_tokens: DesignTokens::new(),
            is_active: true,
        }
    }

    pub fn into_record(self, id: i64, now: DateTime<Utc>) -> Theme {
        Theme {
            id,
            name: self.name,
            description: self.description,
            primary_color: self.primary_color,
            secondary_color: self.secondary_color,
            accent_color: self.accent_color,
            background_color: self.background_color,
            text_color: self.text_color,
            font_family: self.font_family,
            heading_font_family: self.heading_font_family,
            border_radius: self.border_radius,
            spacing_unit: self.spacing_unit,
            custom_css: self.custom_css,
            design_tokens: self.design_tokens,
            is_active: self.is_active,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_applies_stock_defaults() {
        let theme = ThemeCreate::new("default", "#2563eb", "#64748b", "#f59e0b");

        assert_eq!(theme.background_color, "#ffffff");
        assert_eq!(theme.text_color, "#333333");
        assert_eq!(theme.font_family, "Inter, sans-serif");
        assert_eq!(theme.border_radius, "8px");
        assert_eq!(theme.spacing_unit, "1rem");
        assert!(theme.design_tokens.is_empty());
        assert!(theme.is_active);
    }
}
