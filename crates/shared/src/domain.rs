use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

macro_rules! keyword_enum {
    ($name:ident, $kind:literal { $($variant:ident => $keyword:literal),+ $(,)? }) => {
        impl $name {
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $keyword,)+
                }
            }

            /// Exact keyword match, no trimming or case folding.
            pub fn from_keyword(raw: &str) -> Option<Self> {
                match raw {
                    $($keyword => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                match raw.trim().to_ascii_lowercase().as_str() {
                    $($keyword => Ok(Self::$variant),)+
                    "" => Err(ParseError::Empty { kind: $kind }),
                    _ => Err(ParseError::Unrecognized {
                        kind: $kind,
                        value: raw.trim().to_string(),
                    }),
                }
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Road {
    North,
    South,
    East,
    West,
    Intersection,
}

keyword_enum!(Road, "road" {
    North => "north",
    South => "south",
    East => "east",
    West => "west",
    Intersection => "intersection",
});

impl Road {
    /// The four approaches feeding the intersection, in table order.
    pub const APPROACHES: [Road; 4] = [Road::North, Road::South, Road::East, Road::West];

    pub fn is_approach(self) -> bool {
        !matches!(self, Road::Intersection)
    }

    /// Position in [`Road::APPROACHES`]; the intersection has none.
    pub const fn approach_index(self) -> Option<usize> {
        match self {
            Road::North => Some(0),
            Road::South => Some(1),
            Road::East => Some(2),
            Road::West => Some(3),
            Road::Intersection => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnDirection {
    Left,
    Right,
    Straight,
}

keyword_enum!(TurnDirection, "direction" {
    Left => "left",
    Right => "right",
    Straight => "straight",
});

impl TurnDirection {
    pub const ALL: [TurnDirection; 3] = [
        TurnDirection::Left,
        TurnDirection::Right,
        TurnDirection::Straight,
    ];

    pub const fn index(self) -> usize {
        match self {
            TurnDirection::Left => 0,
            TurnDirection::Right => 1,
            TurnDirection::Straight => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalColor {
    #[default]
    Red,
    Yellow,
    Green,
}

keyword_enum!(SignalColor, "signal color" {
    Red => "red",
    Yellow => "yellow",
    Green => "green",
});

/// One controllable signal head. Each head governs exactly one approach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalHead {
    WestApproach,
    EastApproach,
    NorthApproach,
    SouthApproach,
}

impl SignalHead {
    pub const ALL: [SignalHead; 4] = [
        SignalHead::WestApproach,
        SignalHead::EastApproach,
        SignalHead::NorthApproach,
        SignalHead::SouthApproach,
    ];

    /// Stable position of the head, numbered 1..=4 on the operator surface.
    pub const fn index(self) -> usize {
        match self {
            SignalHead::WestApproach => 0,
            SignalHead::EastApproach => 1,
            SignalHead::NorthApproach => 2,
            SignalHead::SouthApproach => 3,
        }
    }

    pub const fn approach(self) -> Road {
        match self {
            SignalHead::WestApproach => Road::West,
            SignalHead::EastApproach => Road::East,
            SignalHead::NorthApproach => Road::North,
            SignalHead::SouthApproach => Road::South,
        }
    }

    pub fn for_approach(road: Road) -> Option<Self> {
        match road {
            Road::West => Some(SignalHead::WestApproach),
            Road::East => Some(SignalHead::EastApproach),
            Road::North => Some(SignalHead::NorthApproach),
            Road::South => Some(SignalHead::SouthApproach),
            Road::Intersection => None,
        }
    }
}

impl fmt::Display for SignalHead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-approach", self.approach())
    }
}

impl FromStr for SignalHead {
    type Err = ParseError;

    /// Accepts either the approach road (`west`) or the head number (`1`..`4`).
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if let Ok(number) = trimmed.parse::<usize>() {
            return number
                .checked_sub(1)
                .and_then(|index| SignalHead::ALL.get(index).copied())
                .ok_or_else(|| ParseError::Unrecognized {
                    kind: "signal head",
                    value: trimmed.to_string(),
                });
        }

        let approach = trimmed
            .trim_end_matches("-approach")
            .parse::<Road>()
            .map_err(|err| match err {
                ParseError::Empty { .. } => ParseError::Empty {
                    kind: "signal head",
                },
                _ => ParseError::Unrecognized {
                    kind: "signal head",
                    value: trimmed.to_string(),
                },
            })?;
        SignalHead::for_approach(approach).ok_or_else(|| ParseError::Unrecognized {
            kind: "signal head",
            value: trimmed.to_string(),
        })
    }
}

/// Operator's current pick: a road and, once chosen, a turn direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub road: Option<Road>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<TurnDirection>,
}

impl Selection {
    pub const fn empty() -> Self {
        Self {
            road: None,
            direction: None,
        }
    }

    pub const fn new(road: Road, direction: Option<TurnDirection>) -> Self {
        Self {
            road: Some(road),
            direction,
        }
    }

    /// Picking a road always clears the previously chosen direction.
    pub fn with_road(self, road: Road) -> Self {
        Self {
            road: Some(road),
            direction: None,
        }
    }

    pub fn with_direction(self, direction: TurnDirection) -> Self {
        Self {
            direction: Some(direction),
            ..self
        }
    }

    /// The turning movement this selection identifies, if it is complete.
    /// Direction is ignored for the intersection itself.
    pub fn turning_movement(&self) -> Option<(Road, TurnDirection)> {
        match (self.road, self.direction) {
            (Some(road), Some(direction)) if road.is_approach() => Some((road, direction)),
            _ => None,
        }
    }

    pub fn is_turning_movement(&self) -> bool {
        self.turning_movement().is_some()
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
