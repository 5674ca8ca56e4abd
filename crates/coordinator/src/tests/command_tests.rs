use super::*;

#[test]
fn maps_documented_examples() {
    assert_eq!(
        to_command_key("north", "left").map(|key| key.as_str()),
        Some("turn-left-north")
    );
    assert_eq!(
        to_command_key("west", "straight").map(|key| key.as_str()),
        Some("straight-west")
    );
    assert_eq!(
        to_command_key("east", "right").map(|key| key.endpoint_path()),
        Some("/urgent/right/east")
    );
}

#[test]
fn rejects_incomplete_or_out_of_domain_selections() {
    assert_eq!(to_command_key("intersection", "left"), None);
    assert_eq!(to_command_key("north", ""), None);
    assert_eq!(to_command_key("", "left"), None);
    assert_eq!(to_command_key("north", "backwards"), None);
    assert_eq!(to_command_key("northeast", "left"), None);
}

#[test]
fn keywords_are_matched_exactly_for_both_inputs() {
    assert_eq!(to_command_key("north", "LEFT"), None);
    assert_eq!(to_command_key("NORTH", "left"), None);
    assert_eq!(to_command_key("North", "Left"), None);
    assert_eq!(to_command_key(" north ", " left"), None);
    assert_eq!(to_command_key("north", "left "), None);
    assert!(to_command_key("north", "left").is_some());
}

#[test]
fn string_and_typed_mappings_agree() {
    for road in Road::APPROACHES {
        for direction in TurnDirection::ALL {
            assert_eq!(
                to_command_key(road.as_str(), direction.as_str()),
                command_key(road, direction)
            );
            assert!(command_key(road, direction).is_some());
        }
    }
}
