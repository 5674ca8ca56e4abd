//! Intersection signal coordination: road resolution, signal head
//! synchronization, and the actuator command mapping.

pub mod command;
pub mod resolver;
pub mod signals;
pub mod synchronizer;

pub use command::{command_key, to_command_key};
pub use resolver::{destination_road, destination_road_str, highlighted_roads};
pub use signals::SignalHeadStates;
pub use synchronizer::{
    synchronize, CommandDispatcher, Dispatch, OverrideOutcome, SelectionEvent, SelectionUpdate,
    SignalCoordinator,
};
