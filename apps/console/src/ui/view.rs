use coordinator::{CommandDispatcher, SignalCoordinator, SignalHeadStates};
use serde::Serialize;
use shared::{
    domain::{Road, Selection, TurnDirection},
    protocol::CommandKey,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntersectionView {
    pub selection: Selection,
    pub destination: Option<Road>,
    pub highlighted: Vec<Road>,
    pub heads: SignalHeadStates,
    pub command: Option<CommandKey>,
}

impl IntersectionView {
    pub fn capture<D: CommandDispatcher>(coordinator: &SignalCoordinator<D>) -> Self {
        let selection = coordinator.selection();
        Self {
            selection,
            destination: coordinator.destination(),
            highlighted: coordinator.highlighted_roads(),
            heads: coordinator.heads(),
            command: selection
                .turning_movement()
                .and_then(|(road, direction)| coordinator::command_key(road, direction)),
        }
    }

    pub fn render_lines(&self) -> Vec<String> {
        let heads = self
            .heads
            .iter()
            .enumerate()
            .map(|(index, (head, color))| format!("{}:{}={color}", index + 1, head.approach()))
            .collect::<Vec<_>>()
            .join("  ");

        let highlighted = if self.highlighted.is_empty() {
            "none".to_string()
        } else {
            self.highlighted
                .iter()
                .map(|road| road_label(*road))
                .collect::<Vec<_>>()
                .join(" -> ")
        };

        let mut lines = vec![format!("signals    {heads}"), format!("highlight  {highlighted}")];

        if let (Some((road, direction)), Some(destination)) =
            (self.selection.turning_movement(), self.destination)
        {
            lines.push(format!(
                "movement   from {} | {} | to {}",
                road_label(road),
                direction_label(direction),
                road_label(destination)
            ));
        }
        if let Some(command) = self.command {
            lines.push(format!(
                "command    {command} ({})",
                command.endpoint_path()
            ));
        }
        lines
    }
}

pub fn road_label(road: Road) -> &'static str {
    match road {
        Road::North => "North Road",
        Road::South => "South Road",
        Road::East => "East Road",
        Road::West => "West Road",
        Road::Intersection => "Center Intersection",
    }
}

pub fn direction_label(direction: TurnDirection) -> &'static str {
    match direction {
        TurnDirection::Left => "Turn Left",
        TurnDirection::Right => "Turn Right",
        TurnDirection::Straight => "Go Straight",
    }
}
