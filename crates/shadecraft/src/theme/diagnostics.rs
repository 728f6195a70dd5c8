//! Warning-level findings reported by assembly.
//!
//! Diagnostics never stop a theme from being built. They flag things that are
//! probably authoring mistakes but can also be deliberate, such as two
//! families sharing one palette while a design is being iterated on.

use std::collections::HashMap;
use std::fmt;

use crate::palette::PaletteFamily;
use crate::ramp::{ShadeRamp, ShadeStep};

/// A non-fatal finding about an assembled theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Two or more families resolve to byte-identical ramps.
    DuplicateRamp { families: Vec<String> },

    /// A hand-authored ramp gets lighter somewhere between `100` and `900`.
    NonMonotonicRamp {
        family: String,
        /// The step that is darker than the one after it.
        darker: ShadeStep,
        /// The following step, which is lighter.
        lighter: ShadeStep,
    },

    /// A hand-authored ramp whose `DEFAULT` differs from its `500`.
    DefaultDrift { family: String },
}

impl Diagnostic {
    /// Every family name this diagnostic refers to.
    pub fn families(&self) -> Vec<&str> {
        match self {
            Diagnostic::DuplicateRamp { families } => families.iter().map(String::as_str).collect(),
            Diagnostic::NonMonotonicRamp { family, .. } | Diagnostic::DefaultDrift { family } => {
                vec![family.as_str()]
            }
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::DuplicateRamp { families } => {
                write!(f, "identical ramps in families: {}", families.join(", "))
            }
            Diagnostic::NonMonotonicRamp {
                family,
                darker,
                lighter,
            } => write!(
                f,
                "family '{}': step {} is lighter than step {}",
                family, lighter, darker
            ),
            Diagnostic::DefaultDrift { family } => {
                write!(f, "family '{}': DEFAULT differs from step 500", family)
            }
        }
    }
}

/// Runs every check over `families`, in registration order.
pub(crate) fn inspect(families: &[PaletteFamily]) -> Vec<Diagnostic> {
    let mut diagnostics = duplicate_ramps(families);

    for family in families {
        let ramp = family.ramp();
        if let Some((darker, lighter)) = ramp.first_inversion() {
            diagnostics.push(Diagnostic::NonMonotonicRamp {
                family: family.name().to_string(),
                darker,
                lighter,
            });
        }
        if !ramp.default_matches_base() {
            diagnostics.push(Diagnostic::DefaultDrift {
                family: family.name().to_string(),
            });
        }
    }

    diagnostics
}

fn duplicate_ramps(families: &[PaletteFamily]) -> Vec<Diagnostic> {
    let mut groups: Vec<Vec<String>> = Vec::new();
    let mut by_ramp: HashMap<&ShadeRamp, usize> = HashMap::new();

    for family in families {
        let slot = *by_ramp.entry(family.ramp()).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(family.name().to_string());
    }

    groups
        .into_iter()
        .filter(|names| names.len() > 1)
        .map(|families| Diagnostic::DuplicateRamp { families })
        .collect()
}
