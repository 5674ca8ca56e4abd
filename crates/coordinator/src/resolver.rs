use shared::domain::{Road, Selection, TurnDirection};

/// Road a vehicle ends up on after leaving `source` in `direction`.
///
/// Left turns walk the approaches clockwise (north, east, south, west) and
/// right turns walk them back; straight always reaches the opposite road.
pub fn destination_road(source: Road, direction: TurnDirection) -> Option<Road> {
    use Road::*;
    use TurnDirection::*;

    let destination = match (source, direction) {
        (North, Left) => East,
        (North, Right) => West,
        (North, Straight) => South,
        (South, Left) => West,
        (South, Right) => East,
        (South, Straight) => North,
        (East, Left) => South,
        (East, Right) => North,
        (East, Straight) => West,
        (West, Left) => North,
        (West, Right) => South,
        (West, Straight) => East,
        (Intersection, _) => return None,
    };
    Some(destination)
}

/// Untyped variant for callers holding raw keywords. Keywords must match
/// exactly; anything else has no destination.
pub fn destination_road_str(source: &str, direction: &str) -> Option<Road> {
    destination_road(
        Road::from_keyword(source)?,
        TurnDirection::from_keyword(direction)?,
    )
}

pub fn highlighted_roads(selection: &Selection) -> Vec<Road> {
    let Some(road) = selection.road else {
        return Vec::new();
    };

    match selection
        .turning_movement()
        .and_then(|(source, direction)| destination_road(source, direction))
    {
        Some(destination) => vec![road, destination],
        None => vec![road],
    }
}

#[cfg(test)]
#[path = "tests/resolver_tests.rs"]
mod tests;
