//! Sample content for a fresh store
//!
//! Builds the "home" page with one hero, six features and one CTA, all in a
//! single unit of work.

use crate::errors::{ExError, ExErrorKind};
use crate::model::{
    Alignment, CallToActionSectionCreate, CtaSize, FeatureCreate, HeroHeight, HeroSectionCreate,
    Page, PageCreate,
};
use crate::ops::feature_ops::create_feature;
use crate::ops::page_ops::create_page;
use crate::ops::section_ops::{create_cta_section, create_hero_section};
use crate::ops::{ContentStore, StoreResult};

/// Slug of the generated sample page
pub const SAMPLE_PAGE_SLUG: &str = "home";

pub fn sample_page() -> PageCreate {
    PageCreate {
        meta_title: Some("Modern Landing Page - Beautiful Design".to_string()),
        meta_description: Some(
            "A modern and elegant landing page with clean design and engaging features."
                .to_string(),
        ),
        ..PageCreate::new("Modern Landing Page", SAMPLE_PAGE_SLUG)
    }
}

pub fn sample_hero(page_id: i64) -> HeroSectionCreate {
    HeroSectionCreate {
        subheadline: Some("Unlock your potential with our cutting-edge platform".to_string()),
        description: Some(
            "Experience the future of business automation with our intuitive, powerful, and \
             beautifully designed platform that grows with your needs."
                .to_string(),
        ),
        background_color: Some("#1e293b".to_string()),
        text_color: Some("#ffffff".to_string()),
        primary_button_text: Some("Get Started".to_string()),
        primary_button_url: Some("/signup".to_string()),
        alignment: Alignment::Center,
        height: HeroHeight::Full,
        display_order: 1,
        ..HeroSectionCreate::new(page_id, "Transform Your Business with Modern Solutions")
    }
}

// (order, title, description, icon, icon color, featured)
const SAMPLE_FEATURES: [(i32, &str, &str, &str, &str, bool); 6] = [
    (
        1,
        "Lightning Fast Performance",
        "Built with modern technology stack for maximum speed and reliability. Experience \
         blazing-fast load times and seamless user interactions.",
        "speed",
        "#10b981",
        true,
    ),
    (
        2,
        "Intuitive Design",
        "User-centered design that makes complex tasks simple. Our interface adapts to your \
         workflow, not the other way around.",
        "design_services",
        "#3b82f6",
        true,
    ),
    (
        3,
        "Enterprise Security",
        "Bank-level security with end-to-end encryption, SSO integration, and compliance with \
         industry standards.",
        "security",
        "#8b5cf6",
        true,
    ),
    (
        4,
        "24/7 Support",
        "Our dedicated support team is available around the clock to help you succeed with \
         personalized assistance.",
        "support_agent",
        "#f59e0b",
        false,
    ),
    (
        5,
        "Scalable Infrastructure",
        "From startup to enterprise, our platform scales with your business without \
         compromising performance.",
        "trending_up",
        "#ef4444",
        false,
    ),
    (
        6,
        "Advanced Analytics",
        "Make data-driven decisions with comprehensive analytics and real-time insights into \
         your business metrics.",
        "analytics",
        "#06b6d4",
        false,
    ),
];

pub fn sample_features(page_id: i64) -> Vec<FeatureCreate> {
    SAMPLE_FEATURES
        .iter()
        .map(
            |&(order, title, description, icon, icon_color, featured)| FeatureCreate {
                icon: Some(icon.to_string()),
                icon_color: Some(icon_color.to_string()),
                display_order: order,
                is_featured: featured,
                ..FeatureCreate::new(page_id, title, description)
            },
        )
        .collect()
}

pub fn sample_cta(page_id: i64) -> CallToActionSectionCreate {
    CallToActionSectionCreate {
        subheadline: Some("Join thousands of satisfied customers".to_string()),
        description: Some(
            "Start your journey today with our free trial. No credit card required, no hidden \
             fees, just pure innovation at your fingertips."
                .to_string(),
        ),
        secondary_button_text: Some("View Pricing".to_string()),
        secondary_button_url: Some("/pricing".to_string()),
        background_color: Some("#f8fafc".to_string()),
        alignment: Alignment::Center,
        size: CtaSize::Large,
        display_order: 1,
        ..CallToActionSectionCreate::new(
            page_id,
            "Ready to Transform Your Business?",
            "Start Free Trial",
            "/trial",
        )
    }
}

/// Populate the store with the sample landing page
///
/// Runs as one unit of work. Does not check for an existing sample page; a
/// second run fails on the slug constraint and leaves the store untouched.
///
/// # Errors
/// * Any error from creating the page itself, unchanged
/// * `PartialSeed` - A component insert failed after the page was created;
///   the cause is attached as the source and every insert is rolled back
pub fn generate_sample_content<S: ContentStore>(store: &mut S) -> StoreResult<Page> {
    store.atomically(|tx| {
        let page = create_page(tx, sample_page())?;
        populate_components(tx, page.id).map_err(|cause| {
            ExError::new(ExErrorKind::PartialSeed)
                .with_op("generate_sample_content")
                .with_entity_id(page.slug.clone())
                .with_message("sample content incomplete; all inserts rolled back")
                .with_source(cause)
        })?;
        Ok(page)
    })
}

fn populate_components(store: &mut dyn ContentStore, page_id: i64) -> StoreResult<()> {
    create_hero_section(store, sample_hero(page_id))?;
    for feature in sample_features(page_id) {
        create_feature(store, feature)?;
    }
    create_cta_section(store, sample_cta(page_id))?;
    Ok(())
}
