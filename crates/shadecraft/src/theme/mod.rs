//! Theme assembly: families, gradients and extension tokens in one value.
//!
//! A [`Theme`] is produced by a single call to [`assemble`] (or
//! [`ThemeBuilder::assemble`]) and is never modified afterwards. Each build
//! makes a fresh theme; nothing is kept in global state between builds.
//!
//! ## Validation
//!
//! Assembly fails fast on:
//!
//! - an empty registry
//! - an extension key that shadows `colors`, `gradients` or `darkMode`
//! - a gradient with a single color (no colors at all means no gradients)
//!
//! It also inspects the families and records [`Diagnostic`]s for likely
//! authoring mistakes that should not break a build:
//!
//! - families whose ramps are byte-identical
//! - hand-authored ramps that get lighter toward `900`
//! - hand-authored ramps whose `DEFAULT` is not their `500`
//!
//! ## Output
//!
//! [`Theme::serialize`] yields a [`ThemeDocument`] with exactly three
//! sections:
//!
//! ```yaml
//! colors:
//!   teal:
//!     DEFAULT: "#042f2e"
//!     "100": "#c0cbcb"
//!     # ...
//! backgroundImage:
//!   top: linear-gradient(0deg, #0f0d19, #401830)
//!   # ...
//! extend:
//!   height: { "108": 26rem }
//! ```
//!
//! [`Theme::config_document`] wraps it with the dark-mode strategy.

mod assemble;
mod diagnostics;
mod document;
#[allow(clippy::module_inception)]
mod theme;

pub use assemble::{assemble, ThemeBuilder, RESERVED_THEME_KEYS};
pub use diagnostics::Diagnostic;
pub use document::{
    ColorValue, ConfigDocument, DarkMode, Extensions, ThemeDocument, KEYWORD_COLORS,
};
pub use theme::Theme;
