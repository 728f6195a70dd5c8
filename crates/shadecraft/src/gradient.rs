//! Directional gradient tokens built from an ordered list of colors.
//!
//! Every token in a set shares the same color stops in the same order; only
//! the CSS function and angle differ. The direction set is fixed:
//!
//! | Id             | Value                              |
//! |----------------|------------------------------------|
//! | `top`          | `linear-gradient(0deg, …)`         |
//! | `right`        | `linear-gradient(90deg, …)`        |
//! | `bottom`       | `linear-gradient(180deg, …)`       |
//! | `left`         | `linear-gradient(270deg, …)`       |
//! | `top-right`    | `linear-gradient(45deg, …)`        |
//! | `bottom-right` | `linear-gradient(135deg, …)`       |
//! | `top-left`     | `linear-gradient(225deg, …)`       |
//! | `bottom-left`  | `linear-gradient(315deg, …)`       |
//! | `radial`       | `radial-gradient(…)`               |
//!
//! ```rust
//! use std::collections::BTreeSet;
//! use shadecraft::{synthesize, Color, Direction};
//!
//! let stops = [Color::from_hex("#0F0D19").unwrap(), Color::from_hex("#401830").unwrap()];
//! let tokens = synthesize(&stops, &BTreeSet::from([Direction::Top])).unwrap();
//! assert_eq!(tokens[0].value(), "linear-gradient(0deg, #0f0d19, #401830)");
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::color::Color;
use crate::error::GradientError;

/// A gradient direction. Ordering is the canonical output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
    TopRight,
    BottomRight,
    TopLeft,
    BottomLeft,
    Radial,
}

impl Direction {
    /// All nine directions in canonical order.
    pub const ALL: [Direction; 9] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
        Direction::TopRight,
        Direction::BottomRight,
        Direction::TopLeft,
        Direction::BottomLeft,
        Direction::Radial,
    ];

    /// The full direction set.
    pub fn all() -> BTreeSet<Direction> {
        Direction::ALL.into_iter().collect()
    }

    /// Identifier used as the token name.
    pub const fn id(&self) -> &'static str {
        match self {
            Direction::Top => "top",
            Direction::Right => "right",
            Direction::Bottom => "bottom",
            Direction::Left => "left",
            Direction::TopRight => "top-right",
            Direction::BottomRight => "bottom-right",
            Direction::TopLeft => "top-left",
            Direction::BottomLeft => "bottom-left",
            Direction::Radial => "radial",
        }
    }

    /// Angle in degrees; `None` for radial.
    pub const fn angle(&self) -> Option<u16> {
        match self {
            Direction::Top => Some(0),
            Direction::Right => Some(90),
            Direction::Bottom => Some(180),
            Direction::Left => Some(270),
            Direction::TopRight => Some(45),
            Direction::BottomRight => Some(135),
            Direction::TopLeft => Some(225),
            Direction::BottomLeft => Some(315),
            Direction::Radial => None,
        }
    }

    fn render(&self, stops: &str) -> String {
        match self.angle() {
            Some(deg) => format!("linear-gradient({}deg, {})", deg, stops),
            None => format!("radial-gradient({})", stops),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Direction {
    type Err = GradientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.id() == s)
            .ok_or_else(|| GradientError::UnknownDirection {
                value: s.to_string(),
            })
    }
}

impl Serialize for Direction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A named CSS gradient value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientToken {
    direction: Direction,
    value: String,
}

impl GradientToken {
    /// Token name (the direction id).
    pub fn name(&self) -> &str {
        self.direction.id()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The CSS gradient function string.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Builds one token per requested direction, in canonical direction order.
///
/// # Errors
///
/// [`GradientError::EmptyColorSequence`] if fewer than two colors are given.
pub fn synthesize(
    colors: &[Color],
    directions: &BTreeSet<Direction>,
) -> Result<Vec<GradientToken>, GradientError> {
    if colors.len() < 2 {
        return Err(GradientError::EmptyColorSequence { len: colors.len() });
    }

    let stops = colors
        .iter()
        .map(Color::to_hex)
        .collect::<Vec<_>>()
        .join(", ");

    Ok(directions
        .iter()
        .map(|direction| GradientToken {
            direction: *direction,
            value: direction.render(&stops),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stops() -> Vec<Color> {
        ["#0F0D19", "#401830", "#2375A7", "#4E97D1", "#682146"]
            .iter()
            .map(|h| Color::from_hex(h).unwrap())
            .collect()
    }

    #[test]
    fn test_two_color_top() {
        let colors = [Color::rgb(255, 0, 0), Color::rgb(0, 0, 255)];
        let tokens = synthesize(&colors, &BTreeSet::from([Direction::Top])).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].name(), "top");
        assert_eq!(tokens[0].value(), "linear-gradient(0deg, #ff0000, #0000ff)");
    }

    #[test]
    fn test_single_color_fails() {
        let err = synthesize(&[Color::WHITE], &Direction::all()).unwrap_err();
        assert_eq!(err, GradientError::EmptyColorSequence { len: 1 });
        assert!(synthesize(&[], &Direction::all()).is_err());
    }

    #[test]
    fn test_all_directions() {
        let tokens = synthesize(&stops(), &Direction::all()).unwrap();
        let names: Vec<&str> = tokens.iter().map(GradientToken::name).collect();
        assert_eq!(
            names,
            [
                "top",
                "right",
                "bottom",
                "left",
                "top-right",
                "bottom-right",
                "top-left",
                "bottom-left",
                "radial"
            ]
        );
        assert_eq!(
            tokens[5].value(),
            "linear-gradient(135deg, #0f0d19, #401830, #2375a7, #4e97d1, #682146)"
        );
        assert_eq!(
            tokens[8].value(),
            "radial-gradient(#0f0d19, #401830, #2375a7, #4e97d1, #682146)"
        );
    }

    #[test]
    fn test_stop_order_shared_across_directions() {
        let tokens = synthesize(&stops(), &Direction::all()).unwrap();
        let expected = "#0f0d19, #401830, #2375a7, #4e97d1, #682146)";
        assert!(tokens.iter().all(|t| t.value().ends_with(expected)));
    }

    #[test]
    fn test_output_order_ignores_request_order() {
        let mut requested = BTreeSet::new();
        requested.insert(Direction::Radial);
        requested.insert(Direction::Left);
        requested.insert(Direction::Top);
        let tokens = synthesize(&stops(), &requested).unwrap();
        let names: Vec<&str> = tokens.iter().map(GradientToken::name).collect();
        assert_eq!(names, ["top", "left", "radial"]);
    }

    #[test]
    fn test_synthesis_is_deterministic() {
        let a = synthesize(&stops(), &Direction::all()).unwrap();
        let b = synthesize(&stops(), &Direction::all()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!("bottom-left".parse::<Direction>().unwrap(), Direction::BottomLeft);
        assert_eq!(
            "diagonal".parse::<Direction>().unwrap_err(),
            GradientError::UnknownDirection {
                value: "diagonal".to_string()
            }
        );
    }
}
