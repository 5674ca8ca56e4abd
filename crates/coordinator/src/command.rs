use shared::{
    domain::{Road, TurnDirection},
    protocol::{direction_prefix, CommandKey},
};

pub fn command_key(road: Road, direction: TurnDirection) -> Option<CommandKey> {
    CommandKey::new(road, direction)
}

/// Maps raw road/direction keywords to an actuator command key.
///
/// Both keywords must match exactly (lowercase, unpadded). The key is composed
/// as `{prefix}-{road}` and must then be found in the fixed command table;
/// nothing outside the table is ever produced.
pub fn to_command_key(road: &str, direction: &str) -> Option<CommandKey> {
    let road = Road::from_keyword(road).filter(|road| road.is_approach())?;
    let direction = TurnDirection::from_keyword(direction)?;
    CommandKey::lookup(&format!("{}-{road}", direction_prefix(direction)))
}

#[cfg(test)]
#[path = "tests/command_tests.rs"]
mod tests;
