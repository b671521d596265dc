// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The identifier of a GPIO pin, as used by the kernel.
///
/// On Raspberry Pi boards this is the BCM pin number, not the position of
/// the pin on the connector.  The [`header`] module maps between the two.
///
/// [`header`]: crate::header
pub type PinId = u32;

/// The direction of a pin.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Direction {
    /// The pin is an input, with its level driven externally.
    In,

    /// The pin is an output, with its level driven by the handle.
    Out,
}

impl Direction {
    /// The representation of the direction in the `direction` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::In => "in",
            Direction::Out => "out",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "in" => Ok(Direction::In),
            "out" => Ok(Direction::Out),
            _ => Err(format!("invalid direction: {}", s)),
        }
    }
}

/// The transitions of the pin level that trigger an edge.
///
/// Waits on the value of an input pin only return early if an edge is configured.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Edge {
    /// No edge detection.
    #[default]
    None,

    /// Transitions from low to high.
    Rising,

    /// Transitions from high to low.
    Falling,

    /// Transitions in either direction.
    Both,
}

impl Edge {
    /// The representation of the edge in the `edge` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Edge::None => "none",
            Edge::Rising => "rising",
            Edge::Falling => "falling",
            Edge::Both => "both",
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Edge {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "none" => Ok(Edge::None),
            "rising" => Ok(Edge::Rising),
            "falling" => Ok(Edge::Falling),
            "both" => Ok(Edge::Both),
            _ => Err(format!("invalid edge: {}", s)),
        }
    }
}

/// The pull resistor mode of a pin.
///
/// The sysfs GPIO interface provides no control over pull resistors,
/// so only [`Resistor::None`] is ever in effect.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Resistor {
    /// No pull resistor.
    #[default]
    None,

    /// Pulled up to the supply rail.
    PullUp,

    /// Pulled down to ground.
    PullDown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_as_str() {
        assert_eq!(Direction::In.as_str(), "in");
        assert_eq!(Direction::Out.as_str(), "out");
        assert_eq!(format!("{}", Direction::Out), "out");
    }

    #[test]
    fn direction_from_str() {
        assert_eq!("in".parse::<Direction>(), Ok(Direction::In));
        assert_eq!("out".parse::<Direction>(), Ok(Direction::Out));
        assert_eq!(
            "high".parse::<Direction>().unwrap_err(),
            "invalid direction: high"
        );
        assert!("IN".parse::<Direction>().is_err());
    }

    #[test]
    fn edge_default() {
        assert_eq!(Edge::default(), Edge::None);
    }

    #[test]
    fn edge_round_trip() {
        for edge in [Edge::None, Edge::Rising, Edge::Falling, Edge::Both] {
            assert_eq!(edge.as_str().parse::<Edge>(), Ok(edge));
            assert_eq!(edge.to_string(), edge.as_str());
        }
    }

    #[test]
    fn edge_from_str_invalid() {
        assert_eq!("sideways".parse::<Edge>().unwrap_err(), "invalid edge: sideways");
        assert!("".parse::<Edge>().is_err());
    }

    #[test]
    fn resistor_default() {
        assert_eq!(Resistor::default(), Resistor::None);
    }
}
