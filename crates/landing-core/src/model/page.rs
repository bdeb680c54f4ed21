use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Landing page - the root content entity
///
/// A page is addressed by its unique slug. Components point at it through
/// their `landing_page_id`; the page itself holds no back-references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Store-assigned surrogate key
    pub id: i64,
    pub title: String,
    /// URL-safe identifier, unique across all pages
    pub slug: String,
    /// Soft lifecycle flag; lookups by slug only see active pages
    pub is_active: bool,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageCreate {
    pub title: String,
    pub slug: String,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

impl PageCreate {
    pub fn new(title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
            meta_title: None,
            meta_description: None,
        }
    }

    /// Map the payload onto a persisted record
    ///
    /// New pages always start active.
    pub fn into_record(self, id: i64, now: DateTime<Utc>) -> Page {
        Page {
            id,
            title: self.title,
            slug: self.slug,
            is_active: true,
            meta_title: self.meta_title,
            meta_description: self.meta_description,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update of a page
///
/// `None` leaves a field untouched. The meta fields use a double Option so
/// `Some(None)` clears them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageUpdate {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub is_active: Option<bool>,
    pub meta_title: Option<Option<String>>,
    pub meta_description: Option<Option<String>>,
}

impl PageUpdate {
    pub fn is_empty(&self) -> bool {
        self == &PageUpdate::default()
    }

    /// Apply the update to a record, bumping `updated_at`
    pub fn apply_to(self, page: &mut Page, now: DateTime<Utc>) {
        if let Some(title) = self.title {
            page.title = title;
        }
        if let Some(slug) = self.slug {
            page.slug = slug;
        }
        if let Some(is_active) = self.is_active {
            page.is_active = is_active;
        }
        if let Some(meta_title) = self.meta_title {
            page.meta_title = meta_title;
        }
        if let Some(meta_description) = self.meta_description {
            page.meta_description = meta_description;
        }
        page.updated_at = now;
    }
}
