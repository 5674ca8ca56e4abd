//! Bridge between the console thread and the async actuator client.

pub mod commands;
pub mod runtime;
