//! Named color families and the registry that holds them.
//!
//! A [`PaletteFamily`] pairs a unique name with a [`ShadeRamp`](crate::ShadeRamp).
//! The [`PaletteRegistry`] collects families for one theme build:
//!
//! - Names are unique per registry ([`RegistryError::DuplicateFamilyName`])
//! - Keyword colors (`transparent`, `current`, `white`, `black`) can't be
//!   shadowed ([`RegistryError::ReservedName`])
//! - Registration order is preserved, since documentation generated from a
//!   theme lists families in the order they were authored
//!
//! Families are immutable once registered. Registering the same name again is
//! an error rather than an update; build a new registry to change a palette.
//!
//! ```rust
//! use shadecraft::{Color, PaletteRegistry};
//!
//! let mut registry = PaletteRegistry::new();
//! registry.register("teal", Color::from_hex("#042F2E").unwrap()).unwrap();
//! registry.register("salmon", Color::from_hex("#FDA4AF").unwrap()).unwrap();
//!
//! assert_eq!(registry.list().collect::<Vec<_>>(), ["teal", "salmon"]);
//! assert!(registry.register("white", shadecraft::Color::WHITE).is_err());
//! ```
//!
//! [`RegistryError::DuplicateFamilyName`]: crate::RegistryError::DuplicateFamilyName
//! [`RegistryError::ReservedName`]: crate::RegistryError::ReservedName

mod family;
mod registry;

pub use family::PaletteFamily;
pub use registry::{PaletteRegistry, RESERVED_NAMES};
