//! The assembled, immutable theme.

use crate::gradient::GradientToken;
use crate::palette::PaletteFamily;

use super::diagnostics::Diagnostic;
use super::document::{
    ColorValue, ConfigDocument, DarkMode, Extensions, ThemeDocument, KEYWORD_COLORS,
};

/// A self-contained snapshot of design tokens.
///
/// Built only by [`assemble`](crate::assemble) or
/// [`ThemeBuilder`](crate::ThemeBuilder); there is no way to modify one
/// afterwards. To produce a variant, assemble a new theme.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub(super) families: Vec<PaletteFamily>,
    pub(super) gradients: Vec<GradientToken>,
    pub(super) extensions: Extensions,
    pub(super) diagnostics: Vec<Diagnostic>,
    pub(super) dark_mode: Option<DarkMode>,
    pub(super) keyword_colors: bool,
}

impl Theme {
    /// Families in registration order.
    pub fn families(&self) -> &[PaletteFamily] {
        &self.families
    }

    /// Looks up a family by name.
    pub fn family(&self, name: &str) -> Option<&PaletteFamily> {
        self.families.iter().find(|f| f.name() == name)
    }

    /// Gradient tokens in canonical direction order.
    pub fn gradients(&self) -> &[GradientToken] {
        &self.gradients
    }

    /// Extension tokens, sorted by key.
    pub fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    /// Warnings found during assembly.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn dark_mode(&self) -> Option<DarkMode> {
        self.dark_mode
    }

    /// Whether keyword colors are emitted ahead of the families.
    pub fn has_keyword_colors(&self) -> bool {
        self.keyword_colors
    }

    /// Produces the theme section document: `colors`, `backgroundImage`, `extend`.
    pub fn serialize(&self) -> ThemeDocument {
        let keywords = KEYWORD_COLORS
            .iter()
            .filter(|_| self.keyword_colors)
            .map(|&(name, value)| (name.to_string(), ColorValue::Keyword(value)));
        let families = self
            .families
            .iter()
            .map(|f| (f.name().to_string(), ColorValue::Shades(*f.ramp())));

        ThemeDocument {
            colors: keywords.chain(families).collect(),
            background_image: self
                .gradients
                .iter()
                .map(|g| (g.name().to_string(), g.value().to_string()))
                .collect(),
            extend: self.extensions.clone(),
        }
    }

    /// Produces the full configuration document with the dark-mode strategy.
    pub fn config_document(&self) -> ConfigDocument {
        ConfigDocument {
            dark_mode: self.dark_mode,
            theme: self.serialize(),
        }
    }
}
