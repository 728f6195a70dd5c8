//! Serializable theme documents.
//!
//! [`ThemeDocument`] is the shape a CSS-utility build tool reads as its theme
//! section: exactly `colors`, `backgroundImage` and `extend`. The first two are
//! [`IndexMap`]s, so families appear in registration order.
//!
//! [`ConfigDocument`] wraps a theme document the way the tool's config file
//! does, adding the optional `darkMode` strategy next to it.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::ramp::ShadeRamp;

/// Extension tokens, passed through to `extend` untouched.
pub type Extensions = BTreeMap<String, serde_json::Value>;

/// Fixed entries for the consumer's keyword colors.
pub const KEYWORD_COLORS: [(&str, &str); 4] = [
    ("transparent", "transparent"),
    ("current", "currentColor"),
    ("white", "#ffffff"),
    ("black", "#000000"),
];

/// How the consumer switches to dark mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DarkMode {
    /// Toggled by a `dark` class on an ancestor element.
    Class,
    /// Follows the `prefers-color-scheme` media query.
    Media,
}

impl fmt::Display for DarkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DarkMode::Class => f.write_str("class"),
            DarkMode::Media => f.write_str("media"),
        }
    }
}

impl FromStr for DarkMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "class" => Ok(DarkMode::Class),
            "media" => Ok(DarkMode::Media),
            other => Err(format!(
                "unknown dark mode '{}' (expected class or media)",
                other
            )),
        }
    }
}

/// A value in the `colors` section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColorValue {
    /// A keyword color such as `currentColor`.
    Keyword(&'static str),
    /// A family's full ramp.
    Shades(ShadeRamp),
}

/// The theme section of a build tool configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDocument {
    pub colors: IndexMap<String, ColorValue>,
    pub background_image: IndexMap<String, String>,
    pub extend: Extensions,
}

/// A full configuration: dark-mode strategy plus the theme section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<DarkMode>,
    pub theme: ThemeDocument,
}
