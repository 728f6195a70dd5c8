//! Error types for token derivation and theme assembly.
//!
//! Every failure here is an authoring error in static input, so none of these
//! are retriable. Each variant carries the offending name or value so a host
//! can point at the exact entry that needs fixing.

use std::path::PathBuf;

use crate::ramp::ShadeStep;

/// Errors produced by the color model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// Input is not exactly six hex digits (optionally prefixed with `#`).
    #[error("invalid color '{value}': expected 6 hex digits, e.g. #1a2b3c")]
    InvalidFormat { value: String },
}

/// Errors produced when building a ramp from a hand-authored table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RampError {
    /// One or more steps are missing from the table.
    #[error("shade table is missing step(s): {}", join_steps(.missing))]
    IncompleteShadeTable { missing: Vec<ShadeStep> },

    /// A step appears more than once.
    #[error("shade table defines step '{step}' more than once")]
    DuplicateStep { step: ShadeStep },
}

fn join_steps(steps: &[ShadeStep]) -> String {
    steps
        .iter()
        .map(|s| s.key())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors produced by [`PaletteRegistry`](crate::PaletteRegistry).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The name is already registered in this registry.
    #[error("color family '{name}' is already registered")]
    DuplicateFamilyName { name: String },

    /// The name collides with a keyword color the consumer provides.
    #[error("'{name}' is a reserved color name")]
    ReservedName { name: String },

    /// No family with this name exists.
    #[error("unknown color family '{name}'")]
    UnknownFamily { name: String },
}

/// Errors produced by the gradient synthesizer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GradientError {
    /// A gradient needs at least two stops.
    #[error("a gradient needs at least 2 colors, got {len}")]
    EmptyColorSequence { len: usize },

    /// Direction identifier is not one of the fixed set.
    #[error("unknown gradient direction '{value}'")]
    UnknownDirection { value: String },
}

/// Cross-cutting consistency failures detected while assembling a theme.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeValidationError {
    /// The registry has no families.
    #[error("theme has no color families")]
    EmptyRegistry,

    /// An extension key shadows a top-level theme section.
    #[error("extension key '{key}' collides with a reserved theme key")]
    ReservedExtensionKey { key: String },

    /// Gradient synthesis failed.
    #[error("gradient tokens: {0}")]
    Gradient(#[from] GradientError),
}

/// Errors produced while loading and building a [`ThemeSource`](crate::ThemeSource).
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The document could not be parsed.
    #[error("failed to parse theme source{}: {message}", location(.path))]
    Parse {
        path: Option<PathBuf>,
        message: String,
    },

    /// The source file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension does not name a supported format.
    #[error("unsupported theme source extension: {}", .path.display())]
    UnsupportedExtension { path: PathBuf },

    /// A family color value is malformed.
    #[error("color family '{family}' step '{step}': {source}")]
    Color {
        family: String,
        step: ShadeStep,
        #[source]
        source: ColorError,
    },

    /// A hand-authored shade table is malformed.
    #[error("color family '{family}': {source}")]
    Ramp {
        family: String,
        #[source]
        source: RampError,
    },

    /// A gradient color is malformed.
    #[error("gradient color #{index}: {source}")]
    GradientColor {
        index: usize,
        #[source]
        source: ColorError,
    },

    /// Registration failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Assembly validation failed.
    #[error(transparent)]
    Theme(#[from] ThemeValidationError),
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

/// Umbrella error for hosts that drive the whole pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    Ramp(#[from] RampError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Gradient(#[from] GradientError),
    #[error(transparent)]
    Theme(#[from] ThemeValidationError),
    #[error(transparent)]
    Source(#[from] SourceError),
    /// Rendering the theme document failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Result type for shadecraft operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_color_display_names_value() {
        let err = ColorError::InvalidFormat {
            value: "#abc".to_string(),
        };
        assert!(err.to_string().contains("#abc"));
    }

    #[test]
    fn test_incomplete_table_lists_missing_steps() {
        let err = RampError::IncompleteShadeTable {
            missing: vec![ShadeStep::S100, ShadeStep::Default],
        };
        let msg = err.to_string();
        assert!(msg.contains("100, DEFAULT"), "{}", msg);
    }

    #[test]
    fn test_source_color_error_pinpoints_family_and_step() {
        let err = SourceError::Color {
            family: "teal".to_string(),
            step: ShadeStep::S700,
            source: ColorError::InvalidFormat {
                value: "nope".to_string(),
            },
        };
        let msg = err.to_string();
        assert!(msg.contains("teal"));
        assert!(msg.contains("700"));
        assert!(msg.contains("nope"));
    }

    #[test]
    fn test_parse_error_includes_path() {
        let err = SourceError::Parse {
            path: Some(PathBuf::from("theme.yaml")),
            message: "bad indent".to_string(),
        };
        assert!(err.to_string().contains("theme.yaml"));
        assert!(err.to_string().contains("bad indent"));
    }

    #[test]
    fn test_umbrella_from_registry_error() {
        let err: Error = RegistryError::ReservedName {
            name: "white".to_string(),
        }
        .into();
        assert!(matches!(err, Error::Registry(_)));
    }
}
