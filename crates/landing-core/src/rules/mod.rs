pub mod validation;

pub use validation::{
    validate_cta_section, validate_feature, validate_hero_section, validate_page_create,
    validate_page_update, validate_slug, validate_theme,
};
