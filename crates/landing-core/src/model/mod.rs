pub mod cta;
pub mod design_tokens;
pub mod feature;
pub mod hero;
pub mod layout;
pub mod page;
pub mod theme;

pub use cta::{CallToActionSection, CallToActionSectionCreate};
pub use design_tokens::DesignTokens;
pub use feature::{Feature, FeatureCreate};
pub use hero::{HeroSection, HeroSectionCreate};
pub use layout::{Alignment, ButtonStyle, CtaSize, HeroHeight};
pub use page::{Page, PageCreate, PageUpdate};
pub use theme::{Theme, ThemeCreate};

use chrono::{DateTime, Utc};

/// Current time truncated to millisecond precision
///
/// Stores persist timestamps as epoch milliseconds, so a created record and
/// the same record read back compare equal.
pub fn timestamp_now() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}
