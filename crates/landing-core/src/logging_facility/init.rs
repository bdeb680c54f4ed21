//! Logging initialization

use serde::Deserialize;
use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

const DEV_FILTER: &str = "landing_core=debug,landing_store=debug,landing_engine=debug";
const PROD_FILTER: &str = "landing_core=info,landing_store=info,landing_engine=info";

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Silent registry; tests install their own capture layer
    Test,
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Call once at startup. Later calls are no-ops, whatever their profile.
/// `RUST_LOG` overrides the profile's default filter.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEV_FILTER)),
                )
                .with_writer(std::io::stderr)
                .finish()
                .try_init()
                .ok();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new(PROD_FILTER)),
                )
                .with_writer(std::io::stderr)
                .finish()
                .try_init()
                .ok();
        }
        Profile::Test => {
            tracing_subscriber::registry().try_init().ok();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            profile: Profile,
        }

        let w: Wrapper = serde_json::from_str(r#"{"profile":"production"}"#).unwrap();
        assert_eq!(w.profile, Profile::Production);
    }
}
