//! Page assembly
//!
//! Resolves one active page and gathers its active components into a single
//! presentation-ready aggregate. Nothing is rendered here.

use serde::Serialize;

use crate::model::{CallToActionSection, Feature, HeroSection, Page};
use crate::ops::{ContentStore, StoreResult};

/// Maximum number of features shown in the featured slot
pub const FEATURED_DISPLAY_LIMIT: usize = 3;

/// How the caller identifies the page to assemble
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRef {
    Id(i64),
    Slug(String),
}

impl From<i64> for PageRef {
    fn from(id: i64) -> Self {
        PageRef::Id(id)
    }
}

impl From<&str> for PageRef {
    fn from(slug: &str) -> Self {
        PageRef::Slug(slug.to_string())
    }
}

impl From<String> for PageRef {
    fn from(slug: String) -> Self {
        PageRef::Slug(slug)
    }
}

/// A page with its active components, each list in presentation order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssembledPage {
    pub page: Page,
    pub hero_sections: Vec<HeroSection>,
    pub features: Vec<Feature>,
    pub cta_sections: Vec<CallToActionSection>,
}

impl AssembledPage {
    pub fn feature_partition(&self) -> FeaturePartition<'_> {
        partition_features(&self.features)
    }

    /// True when the page has no active components at all
    pub fn is_empty(&self) -> bool {
        self.hero_sections.is_empty() && self.features.is_empty() && self.cta_sections.is_empty()
    }
}

/// Features split into the capped featured slot and everything else
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeaturePartition<'a> {
    pub featured: Vec<&'a Feature>,
    pub others: Vec<&'a Feature>,
}

/// Split ordered features for display
///
/// `featured` takes the first `FEATURED_DISPLAY_LIMIT` features flagged
/// `is_featured`; `others` gets every remaining feature, including featured
/// overflow. Both keep the input order.
pub fn partition_features(features: &[Feature]) -> FeaturePartition<'_> {
    let mut featured = Vec::with_capacity(FEATURED_DISPLAY_LIMIT);
    let mut others = Vec::new();

    for feature in features {
        if feature.is_featured && featured.len() < FEATURED_DISPLAY_LIMIT {
            featured.push(feature);
        } else {
            others.push(feature);
        }
    }

    FeaturePartition { featured, others }
}

/// Assemble an active page and its active components
///
/// Returns `Ok(None)` when no active page matches; an id that points at an
/// inactive page counts as no match. Store errors propagate unchanged.
pub fn assemble_page(
    store: &dyn ContentStore,
    page: impl Into<PageRef>,
) -> StoreResult<Option<AssembledPage>> {
    let page = match page.into() {
        PageRef::Slug(slug) => store.find_active_page(&slug)?,
        PageRef::Id(id) => store.find_page(id)?.filter(|p| p.is_active),
    };
    let Some(page) = page else {
        return Ok(None);
    };

    let hero_sections = store.active_hero_sections(page.id)?;
    let features = store.active_features(page.id)?;
    let cta_sections = store.active_cta_sections(page.id)?;

    Ok(Some(AssembledPage {
        page,
        hero_sections,
        features,
        cta_sections,
    }))
}
