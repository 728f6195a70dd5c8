//! Registration-ordered storage for color families.

use std::collections::HashMap;

use crate::color::Color;
use crate::error::RegistryError;
use crate::ramp::{generate_ramp, ShadeRamp};

use super::family::PaletteFamily;

/// Names the consumer already defines as keyword colors.
pub const RESERVED_NAMES: &[&str] = &["transparent", "current", "white", "black"];

/// Holds the color families for one theme build.
///
/// Lookups go through a name index; iteration follows registration order.
#[derive(Debug, Clone, Default)]
pub struct PaletteRegistry {
    families: Vec<PaletteFamily>,
    index: HashMap<String, usize>,
}

impl PaletteRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a family whose ramp is generated from `base`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::ReservedName`] for keyword color names,
    /// [`RegistryError::DuplicateFamilyName`] if `name` is taken. The registry
    /// is unchanged on error.
    pub fn register(&mut self, name: impl Into<String>, base: Color) -> Result<(), RegistryError> {
        let name = self.check_name(name.into())?;
        tracing::debug!(family = %name, base = %base, "registering generated family");
        self.insert(name, generate_ramp(base));
        Ok(())
    }

    /// Registers a family with a pre-computed ramp, bypassing generation.
    ///
    /// # Errors
    ///
    /// Same as [`register`](Self::register).
    pub fn register_ramp(
        &mut self,
        name: impl Into<String>,
        ramp: ShadeRamp,
    ) -> Result<(), RegistryError> {
        let name = self.check_name(name.into())?;
        tracing::debug!(family = %name, "registering hand-authored family");
        self.insert(name, ramp);
        Ok(())
    }

    /// Returns the ramp registered under `name`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnknownFamily`] if nothing is registered under `name`.
    pub fn get(&self, name: &str) -> Result<&ShadeRamp, RegistryError> {
        self.index
            .get(name)
            .map(|&i| self.families[i].ramp())
            .ok_or_else(|| RegistryError::UnknownFamily {
                name: name.to_string(),
            })
    }

    /// Family names in registration order.
    pub fn list(&self) -> impl Iterator<Item = &str> + '_ {
        self.families.iter().map(PaletteFamily::name)
    }

    /// Families in registration order.
    pub fn families(&self) -> &[PaletteFamily] {
        &self.families
    }

    /// True if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    pub(crate) fn into_families(self) -> Vec<PaletteFamily> {
        self.families
    }

    fn check_name(&self, name: String) -> Result<String, RegistryError> {
        if RESERVED_NAMES.contains(&name.as_str()) {
            return Err(RegistryError::ReservedName { name });
        }
        if self.index.contains_key(&name) {
            return Err(RegistryError::DuplicateFamilyName { name });
        }
        Ok(name)
    }

    fn insert(&mut self, name: String, ramp: ShadeRamp) {
        self.index.insert(name.clone(), self.families.len());
        self.families.push(PaletteFamily::new(name, ramp));
    }
}
