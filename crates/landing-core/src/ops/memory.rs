use std::collections::BTreeMap;

use super::projection;
use super::store::{ContentStore, StoreResult};
use crate::errors::LandingError;
use crate::model::{
    timestamp_now, CallToActionSection, CallToActionSectionCreate, Feature, FeatureCreate,
    HeroSection, HeroSectionCreate, Page, PageCreate, PageUpdate, Theme, ThemeCreate,
};

/// In-memory record store
///
/// BTreeMap-backed tables keyed by id; ids are assigned per table starting at
/// 1, so iteration order is insertion order. Enforces the same uniqueness and
/// page-reference constraints as the SQLite schema. Single-threaded.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pages: BTreeMap<i64, Page>,
    hero_sections: BTreeMap<i64, HeroSection>,
    features: BTreeMap<i64, Feature>,
    cta_sections: BTreeMap<i64, CallToActionSection>,
    themes: BTreeMap<i64, Theme>,
}

fn next_id<V>(table: &BTreeMap<i64, V>) -> i64 {
    table.keys().next_back().map_or(1, |last| last + 1)
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored pages, active or not
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Total number of stored components across all pages, active or not
    pub fn component_count(&self) -> usize {
        self.hero_sections.len() + self.features.len() + self.cta_sections.len()
    }

    fn ensure_page_exists(&self, page_id: i64) -> StoreResult<()> {
        if self.pages.contains_key(&page_id) {
            Ok(())
        } else {
            Err(LandingError::MissingPage { page_id }.into())
        }
    }

    fn ensure_slug_free(&self, slug: &str, except: Option<i64>) -> StoreResult<()> {
        let taken = self
            .pages
            .values()
            .any(|p| p.slug == slug && Some(p.id) != except);
        if taken {
            return Err(LandingError::SlugTaken {
                slug: slug.to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl ContentStore for MemoryStore {
    fn insert_page(&mut self, input: PageCreate) -> StoreResult<Page> {
        self.ensure_slug_free(&input.slug, None)?;
        let id = next_id(&self.pages);
        let page = input.into_record(id, timestamp_now());
        self.pages.insert(id, page.clone());
        Ok(page)
    }

    fn update_page(&mut self, id: i64, update: PageUpdate) -> StoreResult<Option<Page>> {
        if !self.pages.contains_key(&id) {
            return Ok(None);
        }
        if let Some(slug) = &update.slug {
            self.ensure_slug_free(slug, Some(id))?;
        }
        let Some(page) = self.pages.get_mut(&id) else {
            return Ok(None);
        };
        update.apply_to(page, timestamp_now());
        Ok(Some(page.clone()))
    }

    fn find_page(&self, id: i64) -> StoreResult<Option<Page>> {
        Ok(self.pages.get(&id).cloned())
    }

    fn find_active_page(&self, slug: &str) -> StoreResult<Option<Page>> {
        Ok(self
            .pages
            .values()
            .find(|p| p.slug == slug && p.is_active)
            .cloned())
    }

    fn insert_hero_section(&mut self, input: HeroSectionCreate) -> StoreResult<HeroSection> {
        self.ensure_page_exists(input.landing_page_id)?;
        let id = next_id(&self.hero_sections);
        let hero = input.into_record(id, timestamp_now());
        self.hero_sections.insert(id, hero.clone());
        Ok(hero)
    }

    fn find_hero_section(&self, id: i64) -> StoreResult<Option<HeroSection>> {
        Ok(self.hero_sections.get(&id).cloned())
    }

    fn active_hero_sections(&self, page_id: i64) -> StoreResult<Vec<HeroSection>> {
        Ok(projection::active_hero_sections(
            self.hero_sections.values(),
            page_id,
        ))
    }

    fn insert_feature(&mut self, input: FeatureCreate) -> StoreResult<Feature> {
        self.ensure_page_exists(input.landing_page_id)?;
        let id = next_id(&self.features);
        let feature = input.into_record(id, timestamp_now());
        self.features.insert(id, feature.clone());
        Ok(feature)
    }

    fn find_feature(&self, id: i64) -> StoreResult<Option<Feature>> {
        Ok(self.features.get(&id).cloned())
    }

    fn active_features(&self, page_id: i64) -> StoreResult<Vec<Feature>> {
        Ok(projection::active_features(self.features.values(), page_id))
    }

    fn insert_cta_section(
        &mut self,
        input: CallToActionSectionCreate,
    ) -> StoreResult<CallToActionSection> {
        self.ensure_page_exists(input.landing_page_id)?;
        let id = next_id(&self.cta_sections);
        let cta = input.into_record(id, timestamp_now());
        self.cta_sections.insert(id, cta.clone());
        Ok(cta)
    }

    fn find_cta_section(&self, id: i64) -> StoreResult<Option<CallToActionSection>> {
        Ok(self.cta_sections.get(&id).cloned())
    }

    fn active_cta_sections(&self, page_id: i64) -> StoreResult<Vec<CallToActionSection>> {
        Ok(projection::active_cta_sections(
            self.cta_sections.values(),
            page_id,
        ))
    }

    fn insert_theme(&mut self, input: ThemeCreate) -> StoreResult<Theme> {
        if self.themes.values().any(|t| t.name == input.name) {
            return Err(LandingError::ThemeNameTaken { name: input.name }.into());
        }
        let id = next_id(&self.themes);
        let theme = input.into_record(id, timestamp_now());
        self.themes.insert(id, theme.clone());
        Ok(theme)
    }

    fn find_active_theme(&self, name: &str) -> StoreResult<Option<Theme>> {
        Ok(self
            .themes
            .values()
            .find(|t| t.name == name && t.is_active)
            .cloned())
    }

    fn atomically<T, F>(&mut self, f: F) -> StoreResult<T>
    where
        F: FnOnce(&mut dyn ContentStore) -> StoreResult<T>,
    {
        let snapshot = self.clone();
        match f(&mut *self) {
            Ok(value) => Ok(value),
            Err(err) => {
                *self = snapshot;
                Err(err)
            }
        }
    }
}
