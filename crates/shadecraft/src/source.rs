//! Theme source documents: the authored input a build starts from.
//!
//! A source names each color family by either a single base color or a full
//! hand-tuned table, lists the gradient stops, and carries extension tokens:
//!
//! ```yaml
//! darkMode: class
//! keywords: true
//! colors:
//!   teal: "#042F2E"
//!   gray:
//!     DEFAULT: "#DCE9E6"
//!     100: "#f8fbfa"
//!     200: "#f1f6f5"
//!     # ... through 900
//! gradient:
//!   colors: ["#0F0D19", "#401830", "#2375A7"]
//!   directions: [top, bottom-right, radial]   # optional, default: all
//! extend:
//!   height:
//!     "108": 26rem
//! ```
//!
//! Family order in the document is kept. Sources load from YAML or JSON,
//! either inline or from a file whose extension picks the format.
//!
//! ```rust
//! use shadecraft::ThemeSource;
//!
//! let theme = ThemeSource::from_yaml(r##"
//! colors:
//!   teal: "#042F2E"
//!   salmon: "#FDA4AF"
//! "##).unwrap().build().unwrap();
//!
//! assert_eq!(theme.families().len(), 2);
//! ```

use std::fmt;
use std::path::Path;

use indexmap::IndexMap;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use crate::color::Color;
use crate::error::SourceError;
use crate::gradient::Direction;
use crate::palette::PaletteRegistry;
use crate::ramp::{ShadeRamp, ShadeStep};
use crate::theme::{DarkMode, Extensions, Theme, ThemeBuilder};

/// Recognized source file extensions, without the leading dot.
pub const SOURCE_EXTENSIONS: [(&str, SourceFormat); 3] = [
    ("yaml", SourceFormat::Yaml),
    ("yml", SourceFormat::Yaml),
    ("json", SourceFormat::Json),
];

/// How one family is authored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FamilySpec {
    /// A base color; the ramp is generated.
    Base(String),
    /// Explicit step entries, in document order.
    Table(Vec<(ShadeStep, String)>),
}

impl<'de> Deserialize<'de> for FamilySpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SpecVisitor;

        impl<'de> Visitor<'de> for SpecVisitor {
            type Value = FamilySpec;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a hex color string or a table of shade steps")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<FamilySpec, E> {
                Ok(FamilySpec::Base(v.to_string()))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<FamilySpec, A::Error> {
                let mut entries = Vec::new();
                while let Some((step, value)) = map.next_entry::<ShadeStep, String>()? {
                    entries.push((step, value));
                }
                Ok(FamilySpec::Table(entries))
            }
        }

        deserializer.deserialize_any(SpecVisitor)
    }
}

/// Reads the `colors` mapping in document order, rejecting repeated names.
fn unique_families<'de, D>(deserializer: D) -> Result<IndexMap<String, FamilySpec>, D::Error>
where
    D: Deserializer<'de>,
{
    struct FamiliesVisitor;

    impl<'de> Visitor<'de> for FamiliesVisitor {
        type Value = IndexMap<String, FamilySpec>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a mapping of family name to color or shade table")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut families = IndexMap::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((name, spec)) = map.next_entry::<String, FamilySpec>()? {
                if families.contains_key(&name) {
                    return Err(de::Error::custom(format!(
                        "color family '{}' is defined twice",
                        name
                    )));
                }
                families.insert(name, spec);
            }
            Ok(families)
        }
    }

    deserializer.deserialize_map(FamiliesVisitor)
}

/// Gradient stops and the directions to emit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GradientSource {
    pub colors: Vec<String>,
    #[serde(default)]
    pub directions: Option<Vec<Direction>>,
}

/// A parsed theme source, ready to [`build`](ThemeSource::build).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ThemeSource {
    #[serde(default)]
    pub dark_mode: Option<DarkMode>,
    #[serde(default)]
    pub keywords: bool,
    #[serde(deserialize_with = "unique_families")]
    pub colors: IndexMap<String, FamilySpec>,
    #[serde(default)]
    pub gradient: Option<GradientSource>,
    #[serde(default)]
    pub extend: Extensions,
}

/// Serialization format of a source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Yaml,
    Json,
}

impl SourceFormat {
    /// Picks the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        SOURCE_EXTENSIONS
            .iter()
            .find(|(known, _)| *known == ext)
            .map(|&(_, format)| format)
    }
}

impl ThemeSource {
    /// Parses a YAML source.
    ///
    /// # Errors
    ///
    /// [`SourceError::Parse`] if the document doesn't match the source shape.
    pub fn from_yaml(content: &str) -> Result<Self, SourceError> {
        Self::parse(content, SourceFormat::Yaml, None)
    }

    /// Parses a JSON source.
    ///
    /// # Errors
    ///
    /// [`SourceError::Parse`] if the document doesn't match the source shape.
    pub fn from_json(content: &str) -> Result<Self, SourceError> {
        Self::parse(content, SourceFormat::Json, None)
    }

    /// Reads and parses a source file, choosing the format by extension.
    ///
    /// # Errors
    ///
    /// [`SourceError::UnsupportedExtension`], [`SourceError::Io`] or
    /// [`SourceError::Parse`] (with the path attached).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let format =
            SourceFormat::from_path(path).ok_or_else(|| SourceError::UnsupportedExtension {
                path: path.to_path_buf(),
            })?;
        let content = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), ?format, "loading theme source");
        Self::parse(&content, format, Some(path))
    }

    fn parse(content: &str, format: SourceFormat, path: Option<&Path>) -> Result<Self, SourceError> {
        let parsed = match format {
            SourceFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            SourceFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| SourceError::Parse {
            path: path.map(Path::to_path_buf),
            message,
        })
    }

    /// Registers every family, synthesizes gradients and assembles the theme.
    ///
    /// # Errors
    ///
    /// Color, table and registry errors name the offending family; assembly
    /// failures come through as [`SourceError::Theme`].
    pub fn build(self) -> Result<Theme, SourceError> {
        let mut registry = PaletteRegistry::new();
        for (name, spec) in self.colors {
            match spec {
                FamilySpec::Base(hex) => {
                    let base = Color::from_hex(&hex).map_err(|source| SourceError::Color {
                        family: name.clone(),
                        step: ShadeStep::Default,
                        source,
                    })?;
                    registry.register(name, base)?;
                }
                FamilySpec::Table(entries) => {
                    let ramp = parse_table(&name, entries)?;
                    registry.register_ramp(name, ramp)?;
                }
            }
        }

        let mut builder = ThemeBuilder::new(registry)
            .extensions(self.extend)
            .keyword_colors(self.keywords);
        if let Some(mode) = self.dark_mode {
            builder = builder.dark_mode(mode);
        }
        if let Some(gradient) = self.gradient {
            let stops = gradient
                .colors
                .iter()
                .enumerate()
                .map(|(index, hex)| {
                    Color::from_hex(hex).map_err(|source| SourceError::GradientColor { index, source })
                })
                .collect::<Result<Vec<_>, _>>()?;
            builder = builder.gradient_colors(stops);
            if let Some(directions) = gradient.directions {
                builder = builder.directions(directions);
            }
        }

        Ok(builder.assemble()?)
    }
}

fn parse_table(family: &str, entries: Vec<(ShadeStep, String)>) -> Result<ShadeRamp, SourceError> {
    let colors = entries
        .into_iter()
        .map(|(step, hex)| {
            Color::from_hex(&hex)
                .map(|color| (step, color))
                .map_err(|source| SourceError::Color {
                    family: family.to_string(),
                    step,
                    source,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    ShadeRamp::from_table(colors).map_err(|source| SourceError::Ramp {
        family: family.to_string(),
        source,
    })
}
