//! Closed vocabularies for layout and styling columns
//!
//! Persisted as lowercase text; parsing rejects anything else.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::LandingError;

macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $field:literal, default $default:ident {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = LandingError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(LandingError::InvalidChoice {
                        field: $field.to_string(),
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

choice_enum! {
    /// Horizontal alignment of a section's content
    Alignment as "alignment", default Center {
        Left => "left",
        Center => "center",
        Right => "right",
    }
}

choice_enum! {
    /// Vertical extent of a hero banner
    HeroHeight as "height", default Full {
        Full => "full",
        Medium => "medium",
        Compact => "compact",
    }
}

choice_enum! {
    /// Visual weight of a CTA button
    ButtonStyle as "button_style", default Primary {
        Primary => "primary",
        Secondary => "secondary",
        Outline => "outline",
    }
}

choice_enum! {
    /// Overall size of a CTA section
    CtaSize as "size", default Medium {
        Small => "small",
        Medium => "medium",
        Large => "large",
    }
}
