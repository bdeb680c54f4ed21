//! Canonical schema constants for structured logging
//!
//! Engine handlers and the test capture layer agree on these keys.

// Boundary fields
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";

// Content identifiers
pub const FIELD_PAGE_ID: &str = "page_id";
pub const FIELD_SLUG: &str = "slug";
pub const FIELD_THEME_NAME: &str = "theme_name";

// Assembled component counts
pub const FIELD_HERO_COUNT: &str = "hero_count";
pub const FIELD_FEATURE_COUNT: &str = "feature_count";
pub const FIELD_CTA_COUNT: &str = "cta_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
