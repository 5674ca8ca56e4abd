//! Stateful signal synchronization for a single intersection.
//!
//! The coordinator owns the operator's selection and the four head colors.
//! Every selection change recomputes all heads in one step and, once the
//! selection names a full turning movement, hands exactly one command to the
//! dispatcher. Dispatchers must return immediately; delivery happens elsewhere.

use serde::Serialize;
use shared::{
    domain::{Road, Selection, SignalColor, SignalHead, TurnDirection},
    protocol::CommandKey,
};
use tracing::{debug, info, warn};

use crate::{command::command_key, resolver, signals::SignalHeadStates};

/// Head colors implied by `selection`: all red unless it names a turning
/// movement, in which case only the head of the chosen approach is green.
pub fn synchronize(selection: &Selection) -> SignalHeadStates {
    match selection.turning_movement() {
        Some((road, _)) => SignalHeadStates::granting(road),
        None => SignalHeadStates::all_red(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dispatch {
    /// Monotonic per coordinator; deliveries may finish out of order.
    pub sequence: u64,
    pub key: CommandKey,
}

pub trait CommandDispatcher {
    fn dispatch(&self, dispatch: Dispatch);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    RoadChosen(Road),
    DirectionChosen(TurnDirection),
    Cleared,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideOutcome {
    Applied,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionUpdate {
    pub changed: bool,
    pub selection: Selection,
    pub heads: SignalHeadStates,
    pub highlighted: Vec<Road>,
    pub dispatched: Option<Dispatch>,
}

pub struct SignalCoordinator<D> {
    selection: Selection,
    heads: SignalHeadStates,
    dispatcher: D,
    next_sequence: u64,
}

impl<D: CommandDispatcher> SignalCoordinator<D> {
    pub fn new(dispatcher: D) -> Self {
        Self {
            selection: Selection::empty(),
            heads: SignalHeadStates::all_red(),
            dispatcher,
            next_sequence: 1,
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn heads(&self) -> SignalHeadStates {
        self.heads
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    pub fn highlighted_roads(&self) -> Vec<Road> {
        resolver::highlighted_roads(&self.selection)
    }

    pub fn destination(&self) -> Option<Road> {
        let (road, direction) = self.selection.turning_movement()?;
        resolver::destination_road(road, direction)
    }

    pub fn handle(&mut self, event: SelectionEvent) -> SelectionUpdate {
        let next = match event {
            SelectionEvent::RoadChosen(road) => self.selection.with_road(road),
            SelectionEvent::DirectionChosen(direction) => match self.selection.road {
                Some(road) if road.is_approach() => self.selection.with_direction(direction),
                road => {
                    debug!(
                        road = road.map(Road::as_str),
                        direction = direction.as_str(),
                        "direction ignored without an approach road"
                    );
                    self.selection
                }
            },
            SelectionEvent::Cleared => Selection::empty(),
        };
        self.select(next)
    }

    /// Replaces the selection and recomputes every head. Re-applying the
    /// current selection changes nothing and dispatches nothing.
    pub fn select(&mut self, selection: Selection) -> SelectionUpdate {
        if selection == self.selection {
            return self.update(false, None);
        }

        self.selection = selection;
        self.heads = synchronize(&selection);

        let Some((road, direction)) = selection.turning_movement() else {
            debug!(
                road = selection.road.map(Road::as_str),
                "no turning movement selected; all signal heads red"
            );
            return self.update(true, None);
        };

        info!(
            road = road.as_str(),
            direction = direction.as_str(),
            "signal heads synchronized"
        );

        let dispatched = match command_key(road, direction) {
            Some(key) => {
                let dispatch = Dispatch {
                    sequence: self.next_sequence,
                    key,
                };
                self.next_sequence += 1;
                debug!(sequence = dispatch.sequence, key = %key, "dispatching actuator command");
                self.dispatcher.dispatch(dispatch);
                Some(dispatch)
            }
            None => {
                warn!(
                    road = road.as_str(),
                    direction = direction.as_str(),
                    "no actuator command for selection"
                );
                None
            }
        };

        self.update(true, dispatched)
    }

    /// Operator click on a single head. Only honored while no turning
    /// movement holds the heads in sync.
    pub fn request_override(&mut self, head: SignalHead, color: SignalColor) -> OverrideOutcome {
        if self.selection.is_turning_movement() {
            info!(
                head = %head,
                color = color.as_str(),
                "traffic lights are synchronized; manual override disabled"
            );
            return OverrideOutcome::Rejected;
        }

        self.heads = self.heads.with(head, color);
        info!(head = %head, color = color.as_str(), "signal head changed manually");
        OverrideOutcome::Applied
    }

    fn update(&self, changed: bool, dispatched: Option<Dispatch>) -> SelectionUpdate {
        SelectionUpdate {
            changed,
            selection: self.selection,
            heads: self.heads,
            highlighted: self.highlighted_roads(),
            dispatched,
        }
    }
}

#[cfg(test)]
#[path = "tests/synchronizer_tests.rs"]
mod tests;
