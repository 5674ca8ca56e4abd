use super::*;

#[test]
fn parses_selection_commands() {
    assert_eq!(
        parse_action("road east"),
        Ok(OperatorAction::Select(SelectionEvent::RoadChosen(Road::East)))
    );
    assert_eq!(
        parse_action("  DIRECTION Right "),
        Ok(OperatorAction::Select(SelectionEvent::DirectionChosen(
            TurnDirection::Right
        )))
    );
    assert_eq!(
        parse_action("clear"),
        Ok(OperatorAction::Select(SelectionEvent::Cleared))
    );
}

#[test]
fn parses_manual_light_click() {
    assert_eq!(
        parse_action("light west yellow"),
        Ok(OperatorAction::Override {
            head: SignalHead::WestApproach,
            color: SignalColor::Yellow,
        })
    );
    assert_eq!(
        parse_action("click 3 green"),
        Ok(OperatorAction::Override {
            head: SignalHead::NorthApproach,
            color: SignalColor::Green,
        })
    );
}

#[test]
fn blank_lines_and_comments_are_noops() {
    assert_eq!(parse_action(""), Ok(OperatorAction::Noop));
    assert_eq!(parse_action("   # warm up"), Ok(OperatorAction::Noop));
    assert_eq!(parse_action("status # show"), Ok(OperatorAction::Status));
}

#[test]
fn reports_bad_input() {
    assert_eq!(
        parse_action("road"),
        Err(InputError::MissingArgument {
            command: "road",
            argument: "road",
        })
    );
    assert_eq!(
        parse_action("light west"),
        Err(InputError::MissingArgument {
            command: "light",
            argument: "color",
        })
    );
    assert_eq!(
        parse_action("road northeast"),
        Err(InputError::Parse(ParseError::Unrecognized {
            kind: "road",
            value: "northeast".to_string(),
        }))
    );
    assert_eq!(
        parse_action("honk"),
        Err(InputError::UnknownCommand("honk".to_string()))
    );
    assert_eq!(
        parse_action("road east now"),
        Err(InputError::TrailingInput("now".to_string()))
    );
}
