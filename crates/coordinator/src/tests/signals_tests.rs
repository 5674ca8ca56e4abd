use super::*;

#[test]
fn defaults_to_all_red() {
    assert_eq!(SignalHeadStates::default(), SignalHeadStates::all_red());
    assert!(SignalHeadStates::all_red().is_all_red());
}

#[test]
fn granting_turns_exactly_one_head_green() {
    for approach in Road::APPROACHES {
        let states = SignalHeadStates::granting(approach);
        let green: Vec<_> = states.green_heads().collect();
        assert_eq!(green.len(), 1);
        assert_eq!(green[0].approach(), approach);
    }
    assert!(SignalHeadStates::granting(Road::Intersection).is_all_red());
}

#[test]
fn with_replaces_only_the_named_head() {
    let states = SignalHeadStates::all_red().with(SignalHead::NorthApproach, SignalColor::Yellow);
    assert_eq!(states.get(SignalHead::NorthApproach), SignalColor::Yellow);
    for head in [
        SignalHead::WestApproach,
        SignalHead::EastApproach,
        SignalHead::SouthApproach,
    ] {
        assert_eq!(states.get(head), SignalColor::Red);
    }
}

#[test]
fn serializes_colors_by_approach() {
    let json = serde_json::to_value(SignalHeadStates::granting(Road::East)).expect("json");
    assert_eq!(
        json,
        serde_json::json!({
            "west": "red",
            "east": "green",
            "north": "red",
            "south": "red",
        })
    );
}
