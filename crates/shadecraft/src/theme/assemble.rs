//! Theme assembly and validation.

use std::collections::BTreeSet;

use crate::color::Color;
use crate::error::ThemeValidationError;
use crate::gradient::{synthesize, Direction};
use crate::palette::PaletteRegistry;

use super::diagnostics;
use super::document::{DarkMode, Extensions};
use super::theme::Theme;

/// Top-level theme keys an extension may not shadow.
pub const RESERVED_THEME_KEYS: &[&str] = &["colors", "gradients", "darkMode"];

/// Assembles a theme with gradients in all nine directions.
///
/// An empty `gradient_colors` slice yields a theme without gradients.
///
/// # Errors
///
/// See [`ThemeBuilder::assemble`].
pub fn assemble(
    registry: PaletteRegistry,
    gradient_colors: &[Color],
    extensions: Extensions,
) -> Result<Theme, ThemeValidationError> {
    ThemeBuilder::new(registry)
        .gradient_colors(gradient_colors.iter().copied())
        .extensions(extensions)
        .assemble()
}

/// Configures and runs one theme assembly.
///
/// ```rust
/// use shadecraft::{Color, DarkMode, Direction, PaletteRegistry, ThemeBuilder};
///
/// let mut registry = PaletteRegistry::new();
/// registry.register("teal", Color::from_hex("#042F2E").unwrap()).unwrap();
///
/// let theme = ThemeBuilder::new(registry)
///     .gradient_colors([Color::BLACK, Color::WHITE])
///     .directions([Direction::Top, Direction::Radial])
///     .extension("height", serde_json::json!({ "108": "26rem" }))
///     .dark_mode(DarkMode::Class)
///     .assemble()
///     .unwrap();
///
/// assert_eq!(theme.gradients().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ThemeBuilder {
    registry: PaletteRegistry,
    gradient_colors: Vec<Color>,
    directions: BTreeSet<Direction>,
    extensions: Extensions,
    dark_mode: Option<DarkMode>,
    keyword_colors: bool,
}

impl ThemeBuilder {
    /// Starts an assembly over `registry`, with all directions selected.
    pub fn new(registry: PaletteRegistry) -> Self {
        Self {
            registry,
            gradient_colors: Vec::new(),
            directions: Direction::all(),
            extensions: Extensions::new(),
            dark_mode: None,
            keyword_colors: false,
        }
    }

    /// Sets the ordered gradient stops.
    pub fn gradient_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.gradient_colors = colors.into_iter().collect();
        self
    }

    /// Restricts gradients to `directions`.
    pub fn directions(mut self, directions: impl IntoIterator<Item = Direction>) -> Self {
        self.directions = directions.into_iter().collect();
        self
    }

    /// Replaces all extension tokens.
    pub fn extensions(mut self, extensions: Extensions) -> Self {
        self.extensions = extensions;
        self
    }

    /// Adds one extension token.
    pub fn extension(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extensions.insert(key.into(), value.into());
        self
    }

    pub fn dark_mode(mut self, mode: DarkMode) -> Self {
        self.dark_mode = Some(mode);
        self
    }

    /// Emits `transparent`, `current`, `white`, `black` ahead of the families.
    pub fn keyword_colors(mut self, enabled: bool) -> Self {
        self.keyword_colors = enabled;
        self
    }

    /// Validates and builds the theme.
    ///
    /// # Errors
    ///
    /// - [`ThemeValidationError::EmptyRegistry`] if no family is registered
    /// - [`ThemeValidationError::ReservedExtensionKey`] if an extension key is
    ///   one of [`RESERVED_THEME_KEYS`]
    /// - [`ThemeValidationError::Gradient`] if exactly one gradient color is given
    pub fn assemble(self) -> Result<Theme, ThemeValidationError> {
        if self.registry.is_empty() {
            return Err(ThemeValidationError::EmptyRegistry);
        }

        if let Some(key) = self
            .extensions
            .keys()
            .find(|key| RESERVED_THEME_KEYS.contains(&key.as_str()))
        {
            return Err(ThemeValidationError::ReservedExtensionKey { key: key.clone() });
        }

        let gradients = if self.gradient_colors.is_empty() {
            Vec::new()
        } else {
            synthesize(&self.gradient_colors, &self.directions)?
        };

        let families = self.registry.into_families();
        let diagnostics = diagnostics::inspect(&families);
        for diagnostic in &diagnostics {
            tracing::warn!(%diagnostic, "theme diagnostic");
        }

        tracing::debug!(
            families = families.len(),
            gradients = gradients.len(),
            extensions = self.extensions.len(),
            warnings = diagnostics.len(),
            "assembled theme"
        );

        Ok(Theme {
            families,
            gradients,
            extensions: self.extensions,
            diagnostics,
            dark_mode: self.dark_mode,
            keyword_colors: self.keyword_colors,
        })
    }
}
