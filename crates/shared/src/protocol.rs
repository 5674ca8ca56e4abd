//! Logical command surface of the remote signal actuator.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Road, TurnDirection};

#[derive(Debug, PartialEq, Eq, Hash)]
struct Route {
    key: &'static str,
    path: &'static str,
}

const fn route(key: &'static str, path: &'static str) -> Route {
    Route { key, path }
}

/// Indexed by `[approach][direction]`, both in declaration order of
/// `Road::APPROACHES` and `TurnDirection::ALL`.
const ROUTES: [[Route; 3]; 4] = [
    [
        route("turn-left-north", "/urgent/left/north"),
        route("turn-right-north", "/urgent/right/north"),
        route("straight-north", "/urgent/straight/north"),
    ],
    [
        route("turn-left-south", "/urgent/left/south"),
        route("turn-right-south", "/urgent/right/south"),
        route("straight-south", "/urgent/straight/south"),
    ],
    [
        route("turn-left-east", "/urgent/left/east"),
        route("turn-right-east", "/urgent/right/east"),
        route("straight-east", "/urgent/straight/east"),
    ],
    [
        route("turn-left-west", "/urgent/left/west"),
        route("turn-right-west", "/urgent/right/west"),
        route("straight-west", "/urgent/straight/west"),
    ],
];

pub const COMMAND_KEY_COUNT: usize = 12;

/// Canonical name of one turning movement, e.g. `turn-left-north`.
///
/// Only the twelve approach/direction combinations exist; there is no key for
/// the intersection itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CommandKey {
    route: &'static Route,
    approach: Road,
    direction: TurnDirection,
}

impl CommandKey {
    pub fn new(approach: Road, direction: TurnDirection) -> Option<Self> {
        let route = ROUTES
            .get(approach.approach_index()?)?
            .get(direction.index())?;
        Some(Self {
            route,
            approach,
            direction,
        })
    }

    pub fn approach(&self) -> Road {
        self.approach
    }

    pub fn direction(&self) -> TurnDirection {
        self.direction
    }

    pub fn as_str(&self) -> &'static str {
        self.route.key
    }

    /// Actuator endpoint path, relative to the configured base URL.
    pub fn endpoint_path(&self) -> &'static str {
        self.route.path
    }

    pub fn all() -> impl Iterator<Item = CommandKey> {
        Road::APPROACHES.into_iter().flat_map(|approach| {
            TurnDirection::ALL
                .into_iter()
                .filter_map(move |direction| CommandKey::new(approach, direction))
        })
    }

    /// Looks up a composed key string in the fixed table.
    pub fn lookup(raw: &str) -> Option<Self> {
        Self::all().find(|key| key.as_str() == raw)
    }
}

/// Key prefix the actuator uses for a turn direction.
pub const fn direction_prefix(direction: TurnDirection) -> &'static str {
    match direction {
        TurnDirection::Left => "turn-left",
        TurnDirection::Right => "turn-right",
        TurnDirection::Straight => "straight",
    }
}

impl fmt::Display for CommandKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for CommandKey {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CommandKey::lookup(&value).ok_or_else(|| format!("unknown command key '{value}'"))
    }
}

impl From<CommandKey> for String {
    fn from(value: CommandKey) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
