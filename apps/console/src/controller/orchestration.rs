//! Command orchestration from coordinator dispatches to the backend command queue.

use std::cell::RefCell;

use coordinator::{CommandDispatcher, Dispatch};
use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) {
    let cmd_name = match &cmd {
        BackendCommand::Deliver(_) => "deliver",
        BackendCommand::Shutdown => "shutdown",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued console->backend command"),
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "backend command queue full");
            *status = "Actuator command queue is full; the signal preview was updated but the command was dropped".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command = cmd_name, "backend command processor disconnected");
            *status =
                "Actuator bridge disconnected (possible startup/runtime failure); commands are not being delivered"
                    .to_string();
        }
    }
}

/// Queues `Shutdown` behind any pending deliveries, waiting for room if the
/// queue is full. Returns `false` when the bridge is already gone.
pub fn request_shutdown(cmd_tx: &Sender<BackendCommand>) -> bool {
    match cmd_tx.send(BackendCommand::Shutdown) {
        Ok(()) => {
            tracing::debug!(command = "shutdown", "queued console->backend command");
            true
        }
        Err(_) => {
            tracing::warn!("backend command processor already stopped");
            false
        }
    }
}

/// Hands coordinator dispatches to the backend thread without blocking.
/// Queue problems are kept as a status line for the console to show.
pub struct QueueDispatcher {
    cmd_tx: Sender<BackendCommand>,
    status: RefCell<String>,
}

impl QueueDispatcher {
    pub fn new(cmd_tx: Sender<BackendCommand>) -> Self {
        Self {
            cmd_tx,
            status: RefCell::new(String::new()),
        }
    }

    pub fn take_status(&self) -> Option<String> {
        let status = self.status.take();
        (!status.is_empty()).then_some(status)
    }
}

impl CommandDispatcher for QueueDispatcher {
    fn dispatch(&self, dispatch: Dispatch) {
        dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::Deliver(dispatch),
            &mut self.status.borrow_mut(),
        );
    }
}

#[cfg(test)]
#[path = "tests/orchestration_tests.rs"]
mod tests;
