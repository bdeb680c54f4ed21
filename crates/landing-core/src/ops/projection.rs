//! Active-row filtering and presentation ordering
//!
//! The in-memory store projects through these functions; the SQLite store
//! expresses the same filters and sort keys in SQL.

use std::cmp::Ordering;

use crate::model::{CallToActionSection, Feature, HeroSection};

/// Feature order: `display_order`, then `title`, then insertion (`id`)
pub fn feature_order(a: &Feature, b: &Feature) -> Ordering {
    a.display_order
        .cmp(&b.display_order)
        .then_with(|| a.title.cmp(&b.title))
        .then_with(|| a.id.cmp(&b.id))
}

/// Active hero sections of one page, by `(display_order, id)`
pub fn active_hero_sections<'a>(
    sections: impl IntoIterator<Item = &'a HeroSection>,
    page_id: i64,
) -> Vec<HeroSection> {
    let mut active: Vec<HeroSection> = sections
        .into_iter()
        .filter(|h| h.landing_page_id == page_id && h.is_active)
        .cloned()
        .collect();
    active.sort_by_key(|h| (h.display_order, h.id));
    active
}

/// Active features of one page, by `feature_order`
pub fn active_features<'a>(
    features: impl IntoIterator<Item = &'a Feature>,
    page_id: i64,
) -> Vec<Feature> {
    let mut active: Vec<Feature> = features
        .into_iter()
        .filter(|f| f.landing_page_id == page_id && f.is_active)
        .cloned()
        .collect();
    active.sort_by(feature_order);
    active
}

/// Active CTA sections of one page, by `(display_order, id)`
pub fn active_cta_sections<'a>(
    sections: impl IntoIterator<Item = &'a CallToActionSection>,
    page_id: i64,
) -> Vec<CallToActionSection> {
    let mut active: Vec<CallToActionSection> = sections
        .into_iter()
        .filter(|c| c.landing_page_id == page_id && c.is_active)
        .cloned()
        .collect();
    active.sort_by_key(|c| (c.display_order, c.id));
    active
}
