//! # Shadecraft - Design Tokens From Base Colors
//!
//! `shadecraft` derives a styling build tool's color configuration from a
//! handful of inputs instead of hand-maintained tables. Give it one base color
//! per family and it produces the `DEFAULT` + `100`–`900` ramp, synthesizes
//! directional gradient tokens, checks the result for likely authoring
//! mistakes and emits one theme document.
//!
//! ## Core Concepts
//!
//! - [`Color`]: opaque sRGB value with a strict `#rrggbb` form
//! - [`generate_ramp`]: base color to a 9-step [`ShadeRamp`]
//! - [`PaletteRegistry`]: uniquely named families, in registration order
//! - [`synthesize`]: ordered colors to [`GradientToken`]s per [`Direction`]
//! - [`assemble`] / [`ThemeBuilder`]: validate and build an immutable [`Theme`]
//! - [`ThemeSource`]: the YAML/JSON document a build starts from
//! - [`output::render`]: encode a theme document as JSON, YAML or a JS module
//!
//! ## Quick Start
//!
//! ```rust
//! use shadecraft::{assemble, Color, Extensions, PaletteRegistry};
//!
//! let mut registry = PaletteRegistry::new();
//! registry.register("teal", Color::from_hex("#042F2E").unwrap()).unwrap();
//! registry.register("salmon", Color::from_hex("#FDA4AF").unwrap()).unwrap();
//!
//! let stops: Vec<Color> = ["#0F0D19", "#401830", "#2375A7"]
//!     .iter()
//!     .map(|h| Color::from_hex(h).unwrap())
//!     .collect();
//!
//! let theme = assemble(registry, &stops, Extensions::new()).unwrap();
//! let doc = theme.serialize();
//!
//! assert_eq!(doc.colors.len(), 2);
//! assert_eq!(doc.background_image.len(), 9);
//! assert!(theme.diagnostics().is_empty());
//! ```
//!
//! ## Purity
//!
//! Nothing here performs I/O except [`ThemeSource::from_file`]. Every value is
//! immutable once built and every operation is deterministic, so independent
//! assemblies can run on any thread without coordination. Warnings are also
//! emitted through `tracing`; installing a subscriber is left to the host.

pub mod color;
mod error;
pub mod gradient;
pub mod output;
pub mod palette;
pub mod ramp;
pub mod source;
pub mod theme;

pub use color::Color;
pub use error::{
    ColorError, Error, GradientError, RampError, RegistryError, Result, SourceError,
    ThemeValidationError,
};
pub use gradient::{synthesize, Direction, GradientToken};
pub use output::{render, OutputFormat};
pub use palette::{PaletteFamily, PaletteRegistry, RESERVED_NAMES};
pub use ramp::{generate_ramp, ShadeRamp, ShadeStep};
pub use source::{FamilySpec, GradientSource, SourceFormat, ThemeSource};
pub use theme::{
    assemble, ColorValue, ConfigDocument, DarkMode, Diagnostic, Extensions, Theme,
    ThemeBuilder, ThemeDocument,
};
