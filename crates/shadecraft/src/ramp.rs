//! Shade ramps: one base color expanded into `DEFAULT` plus `100`–`900`.
//!
//! # Convention
//!
//! Steps run from lightest (`100`) to darkest (`900`). Step `500` is the base
//! color itself and is also exported as `DEFAULT`, so a generated ramp never
//! drifts from the color the author wrote down.
//!
//! # Generation
//!
//! Lighter steps mix the base toward white, darker steps toward black. The
//! fractions live in [`LIGHTER_STEPS`] and [`DARKER_STEPS`] and grow strictly
//! as the step moves away from `500`:
//!
//! | Step | Target | Fraction |
//! |------|--------|----------|
//! | 100  | white  | 0.75     |
//! | 200  | white  | 0.55     |
//! | 300  | white  | 0.35     |
//! | 400  | white  | 0.15     |
//! | 500  | base   | 0.00     |
//! | 600  | black  | 0.20     |
//! | 700  | black  | 0.40     |
//! | 800  | black  | 0.60     |
//! | 900  | black  | 0.85     |
//!
//! Bases that are already near white or near black still get all nine steps,
//! though the ones on the saturated side may be visually close.
//!
//! # Hand-authored ramps
//!
//! [`ShadeRamp::from_table`] builds a ramp from ten explicit entries for
//! families that are tuned by hand. Such tables are only checked for
//! completeness here; ordering problems surface as assembly diagnostics.
//!
//! ```rust
//! use shadecraft::{generate_ramp, Color, ShadeStep};
//!
//! let base = Color::from_hex("#446784").unwrap();
//! let ramp = generate_ramp(base);
//!
//! assert_eq!(ramp.default_color(), base);
//! assert_eq!(ramp.get(ShadeStep::S500), base);
//! assert!(ramp.is_monotonic());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::color::Color;
use crate::error::RampError;

// ─── ShadeStep ──────────────────────────────────────────────────────────────

/// A step key in a shade ramp.
///
/// Ordering puts `DEFAULT` first, then the numbered steps ascending, which is
/// also the order steps appear in a serialized theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShadeStep {
    Default,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
}

impl ShadeStep {
    /// Every step, `DEFAULT` first.
    pub const ALL: [ShadeStep; 10] = [
        ShadeStep::Default,
        ShadeStep::S100,
        ShadeStep::S200,
        ShadeStep::S300,
        ShadeStep::S400,
        ShadeStep::S500,
        ShadeStep::S600,
        ShadeStep::S700,
        ShadeStep::S800,
        ShadeStep::S900,
    ];

    /// The numbered steps, lightest to darkest.
    pub const SHADES: [ShadeStep; 9] = [
        ShadeStep::S100,
        ShadeStep::S200,
        ShadeStep::S300,
        ShadeStep::S400,
        ShadeStep::S500,
        ShadeStep::S600,
        ShadeStep::S700,
        ShadeStep::S800,
        ShadeStep::S900,
    ];

    /// The key as it appears in a theme document.
    pub const fn key(&self) -> &'static str {
        match self {
            ShadeStep::Default => "DEFAULT",
            ShadeStep::S100 => "100",
            ShadeStep::S200 => "200",
            ShadeStep::S300 => "300",
            ShadeStep::S400 => "400",
            ShadeStep::S500 => "500",
            ShadeStep::S600 => "600",
            ShadeStep::S700 => "700",
            ShadeStep::S800 => "800",
            ShadeStep::S900 => "900",
        }
    }

    /// Numeric value for the numbered steps, `None` for `DEFAULT`.
    pub const fn number(&self) -> Option<u16> {
        match self {
            ShadeStep::Default => None,
            ShadeStep::S100 => Some(100),
            ShadeStep::S200 => Some(200),
            ShadeStep::S300 => Some(300),
            ShadeStep::S400 => Some(400),
            ShadeStep::S500 => Some(500),
            ShadeStep::S600 => Some(600),
            ShadeStep::S700 => Some(700),
            ShadeStep::S800 => Some(800),
            ShadeStep::S900 => Some(900),
        }
    }

    /// Looks up a numbered step.
    pub fn from_number(n: u64) -> Option<ShadeStep> {
        ShadeStep::SHADES
            .into_iter()
            .find(|step| step.number().map(u64::from) == Some(n))
    }

    /// Index into the 9-slot shade array; `None` for `DEFAULT`.
    fn shade_index(&self) -> Option<usize> {
        self.number().map(|n| usize::from(n / 100) - 1)
    }
}

impl fmt::Display for ShadeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ShadeStep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShadeStep::ALL
            .into_iter()
            .find(|step| step.key() == s)
            .ok_or_else(|| format!("unknown shade step '{}'", s))
    }
}

impl Serialize for ShadeStep {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

// Accepts both `"500"` and a bare `500`, since YAML tables are usually
// written with unquoted numeric keys.
impl<'de> Deserialize<'de> for ShadeStep {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StepVisitor;

        impl de::Visitor<'_> for StepVisitor {
            type Value = ShadeStep;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a shade step: DEFAULT or 100..900")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ShadeStep, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<ShadeStep, E> {
                ShadeStep::from_number(v)
                    .ok_or_else(|| E::custom(format!("unknown shade step '{}'", v)))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<ShadeStep, E> {
                u64::try_from(v)
                    .ok()
                    .and_then(ShadeStep::from_number)
                    .ok_or_else(|| E::custom(format!("unknown shade step '{}'", v)))
            }
        }

        deserializer.deserialize_any(StepVisitor)
    }
}

// ─── Generation ─────────────────────────────────────────────────────────────

/// Fractions toward white for the steps lighter than `500`.
pub const LIGHTER_STEPS: [(ShadeStep, f64); 4] = [
    (ShadeStep::S400, 0.15),
    (ShadeStep::S300, 0.35),
    (ShadeStep::S200, 0.55),
    (ShadeStep::S100, 0.75),
];

/// Fractions toward black for the steps darker than `500`.
pub const DARKER_STEPS: [(ShadeStep, f64); 4] = [
    (ShadeStep::S600, 0.20),
    (ShadeStep::S700, 0.40),
    (ShadeStep::S800, 0.60),
    (ShadeStep::S900, 0.85),
];

/// Generates the full ramp for `base`. Never fails.
pub fn generate_ramp(base: Color) -> ShadeRamp {
    let mut shades = [base; 9];
    for (step, amount) in LIGHTER_STEPS {
        shades[slot(step)] = base.lighten(amount);
    }
    for (step, amount) in DARKER_STEPS {
        shades[slot(step)] = base.darken(amount);
    }
    tracing::trace!(base = %base, "generated shade ramp");
    ShadeRamp {
        default: base,
        shades,
    }
}

fn slot(step: ShadeStep) -> usize {
    // Only called with numbered steps from the constant tables.
    step.shade_index().unwrap_or(4)
}

// ─── ShadeRamp ──────────────────────────────────────────────────────────────

/// A complete shade ramp: `DEFAULT` plus the nine numbered steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShadeRamp {
    default: Color,
    shades: [Color; 9],
}

impl ShadeRamp {
    /// Builds a ramp from a hand-authored table naming all ten steps.
    ///
    /// # Errors
    ///
    /// [`RampError::DuplicateStep`] if a step appears twice,
    /// [`RampError::IncompleteShadeTable`] if any step is missing.
    pub fn from_table<I>(entries: I) -> Result<Self, RampError>
    where
        I: IntoIterator<Item = (ShadeStep, Color)>,
    {
        let mut slots: [Option<Color>; 10] = [None; 10];
        for (step, color) in entries {
            let idx = step_position(step);
            if slots[idx].replace(color).is_some() {
                return Err(RampError::DuplicateStep { step });
            }
        }

        let missing: Vec<ShadeStep> = ShadeStep::ALL
            .into_iter()
            .filter(|step| slots[step_position(*step)].is_none())
            .collect();
        if !missing.is_empty() {
            return Err(RampError::IncompleteShadeTable { missing });
        }

        let color_at = |step: ShadeStep| slots[step_position(step)].unwrap_or(Color::BLACK);
        let mut shades = [Color::BLACK; 9];
        for (i, step) in ShadeStep::SHADES.into_iter().enumerate() {
            shades[i] = color_at(step);
        }
        Ok(Self {
            default: color_at(ShadeStep::Default),
            shades,
        })
    }

    /// The color at `step`.
    pub fn get(&self, step: ShadeStep) -> Color {
        match step.shade_index() {
            Some(i) => self.shades[i],
            None => self.default,
        }
    }

    /// The `DEFAULT` color.
    pub fn default_color(&self) -> Color {
        self.default
    }

    /// All ten entries, `DEFAULT` first then `100`..`900`.
    pub fn iter(&self) -> impl Iterator<Item = (ShadeStep, Color)> + '_ {
        ShadeStep::ALL.into_iter().map(move |step| (step, self.get(step)))
    }

    /// First adjacent pair `(a, b)` walking `100`→`900` where `b` is lighter
    /// than `a`, judged by channel sum.
    pub fn first_inversion(&self) -> Option<(ShadeStep, ShadeStep)> {
        ShadeStep::SHADES.windows(2).find_map(|pair| {
            let (a, b) = (pair[0], pair[1]);
            (self.get(b).channel_sum() > self.get(a).channel_sum()).then_some((a, b))
        })
    }

    /// True when no step is lighter than the one before it.
    pub fn is_monotonic(&self) -> bool {
        self.first_inversion().is_none()
    }

    /// True when `DEFAULT` is the same color as `500`.
    pub fn default_matches_base(&self) -> bool {
        self.default == self.get(ShadeStep::S500)
    }
}

fn step_position(step: ShadeStep) -> usize {
    step.shade_index().map_or(0, |i| i + 1)
}

impl Serialize for ShadeRamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ShadeStep::ALL.len()))?;
        for (step, color) in self.iter() {
            map.serialize_entry(step.key(), &color)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> Color {
        Color::from_hex(s).unwrap()
    }

    // =========================================================================
    // ShadeStep
    // =========================================================================

    #[test]
    fn test_step_parse_and_key() {
        assert_eq!("DEFAULT".parse::<ShadeStep>().unwrap(), ShadeStep::Default);
        assert_eq!("700".parse::<ShadeStep>().unwrap(), ShadeStep::S700);
        assert!("default".parse::<ShadeStep>().is_err());
        assert!("550".parse::<ShadeStep>().is_err());
        assert!("1000".parse::<ShadeStep>().is_err());
        assert_eq!(ShadeStep::S300.key(), "300");
    }

    #[test]
    fn test_step_keys_must_match_exactly() {
        for key in ["+100", "0500", "500.0", " 500", "default", "1000"] {
            assert!(key.parse::<ShadeStep>().is_err(), "accepted {:?}", key);
        }
        let err = serde_json::from_str::<ShadeStep>("\"0200\"").unwrap_err();
        assert!(err.to_string().contains("unknown shade step '0200'"));
    }

    #[test]
    fn test_step_ordering_puts_default_first() {
        let mut steps = vec![ShadeStep::S900, ShadeStep::S100, ShadeStep::Default];
        steps.sort();
        assert_eq!(steps, vec![ShadeStep::Default, ShadeStep::S100, ShadeStep::S900]);
    }

    #[test]
    fn test_step_deserializes_from_string_or_integer() {
        let from_str: ShadeStep = serde_yaml::from_str("\"400\"").unwrap();
        let from_int: ShadeStep = serde_yaml::from_str("400").unwrap();
        assert_eq!(from_str, ShadeStep::S400);
        assert_eq!(from_int, ShadeStep::S400);
        assert!(serde_yaml::from_str::<ShadeStep>("450").is_err());
    }

    // =========================================================================
    // Generation
    // =========================================================================

    #[test]
    fn test_base_is_default_and_500() {
        let base = hex("#042F2E");
        let ramp = generate_ramp(base);
        assert_eq!(ramp.default_color(), base);
        assert_eq!(ramp.get(ShadeStep::S500), base);
        assert!(ramp.default_matches_base());
    }

    #[test]
    fn test_fraction_tables_grow_away_from_base() {
        assert!(LIGHTER_STEPS.windows(2).all(|w| w[0].1 < w[1].1));
        assert!(DARKER_STEPS.windows(2).all(|w| w[0].1 < w[1].1));
    }

    #[test]
    fn test_mid_gray_ramp_values() {
        let ramp = generate_ramp(Color::rgb(100, 100, 100));
        // 100 + 155 * 0.75 = 216.25
        assert_eq!(ramp.get(ShadeStep::S100), Color::rgb(216, 216, 216));
        // 100 + 155 * 0.15 = 123.25
        assert_eq!(ramp.get(ShadeStep::S400), Color::rgb(123, 123, 123));
        // 100 * (1 - 0.2) = 80
        assert_eq!(ramp.get(ShadeStep::S600), Color::rgb(80, 80, 80));
        // 100 * (1 - 0.85) = 15
        assert_eq!(ramp.get(ShadeStep::S900), Color::rgb(15, 15, 15));
    }

    #[test]
    fn test_mid_tone_ramp_has_distinct_steps() {
        let ramp = generate_ramp(hex("#7f7fa8"));
        let colors: Vec<Color> = ShadeStep::SHADES.iter().map(|s| ramp.get(*s)).collect();
        for pair in colors.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn test_extreme_bases_are_total_and_monotonic() {
        for base in [Color::WHITE, Color::BLACK, hex("#fefefe"), hex("#010101")] {
            let ramp = generate_ramp(base);
            assert!(ramp.is_monotonic(), "{} not monotonic", base);
            assert_eq!(ramp.default_color(), base);
        }
    }

    #[test]
    fn test_iter_order() {
        let ramp = generate_ramp(hex("#fda4af"));
        let keys: Vec<&str> = ramp.iter().map(|(s, _)| s.key()).collect();
        assert_eq!(
            keys,
            ["DEFAULT", "100", "200", "300", "400", "500", "600", "700", "800", "900"]
        );
    }

    // =========================================================================
    // Hand-authored tables
    // =========================================================================

    fn gray_table() -> Vec<(ShadeStep, Color)> {
        vec![
            (ShadeStep::Default, hex("#DCE9E6")),
            (ShadeStep::S900, hex("#233833")),
            (ShadeStep::S800, hex("#467066")),
            (ShadeStep::S700, hex("#6da497")),
            (ShadeStep::S600, hex("#a5c6bf")),
            (ShadeStep::S500, hex("#dce9e6")),
            (ShadeStep::S400, hex("#e3eeeb")),
            (ShadeStep::S300, hex("#eaf2f0")),
            (ShadeStep::S200, hex("#f1f6f5")),
            (ShadeStep::S100, hex("#f8fbfa")),
        ]
    }

    #[test]
    fn test_from_table_accepts_any_entry_order() {
        let ramp = ShadeRamp::from_table(gray_table()).unwrap();
        assert_eq!(ramp.get(ShadeStep::S900), hex("#233833"));
        assert_eq!(ramp.get(ShadeStep::S100), hex("#f8fbfa"));
        assert!(ramp.is_monotonic());
        assert!(ramp.default_matches_base());
    }

    #[test]
    fn test_from_table_reports_missing_steps() {
        let mut table = gray_table();
        table.retain(|(s, _)| *s != ShadeStep::S300 && *s != ShadeStep::Default);
        let err = ShadeRamp::from_table(table).unwrap_err();
        assert_eq!(
            err,
            RampError::IncompleteShadeTable {
                missing: vec![ShadeStep::Default, ShadeStep::S300]
            }
        );
    }

    #[test]
    fn test_from_table_rejects_duplicate_step() {
        let mut table = gray_table();
        table.push((ShadeStep::S400, hex("#000000")));
        assert_eq!(
            ShadeRamp::from_table(table).unwrap_err(),
            RampError::DuplicateStep {
                step: ShadeStep::S400
            }
        );
    }

    #[test]
    fn test_inverted_table_reports_first_inversion() {
        // Dark at 100, light at 900.
        let table: Vec<(ShadeStep, Color)> = gray_table()
            .into_iter()
            .map(|(step, color)| match step.number() {
                Some(n) => (ShadeStep::from_number(u64::from(1000 - n)).unwrap(), color),
                None => (step, color),
            })
            .collect();
        let ramp = ShadeRamp::from_table(table).unwrap();
        assert!(!ramp.is_monotonic());
        assert_eq!(ramp.first_inversion(), Some((ShadeStep::S100, ShadeStep::S200)));
    }

    #[test]
    fn test_serializes_as_ordered_hex_map() {
        let ramp = generate_ramp(Color::rgb(100, 100, 100));
        let json = serde_json::to_string(&ramp).unwrap();
        assert!(json.starts_with("{\"DEFAULT\":\"#646464\",\"100\":\"#d8d8d8\""), "{}", json);
    }
}
