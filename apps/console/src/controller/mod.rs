//! Controller layer: operator input, console events, and command orchestration.

pub mod events;
pub mod input;
pub mod orchestration;
