//! Runtime bridge between the console command queue and actuator deliveries.
//!
//! Every delivery is its own task: a newer selection never cancels an older
//! request, and completions may arrive in any order.

use std::{
    sync::Arc,
    thread::{self, JoinHandle},
    time::Duration,
};

use actuator::Actuator;
use coordinator::Dispatch;
use crossbeam_channel::{Receiver, Sender};
use tracing::{error, info, warn};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    actuator: Arc<dyn Actuator>,
    shutdown_grace: Duration,
) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("actuator-bridge".to_string())
        .spawn(move || run(cmd_rx, ui_tx, actuator, shutdown_grace))
}

fn run(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    actuator: Arc<dyn Actuator>,
    shutdown_grace: Duration,
) {
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                UiErrorContext::BackendStartup,
                format!("backend worker startup failure: failed to build runtime: {err}"),
            )));
            error!("failed to build backend runtime: {err}");
            return;
        }
    };

    let _ = ui_tx.try_send(UiEvent::Info(format!(
        "Actuator bridge ready ({})",
        actuator.describe()
    )));

    let mut in_flight: Vec<tokio::task::JoinHandle<()>> = Vec::new();
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            BackendCommand::Deliver(dispatch) => {
                in_flight.retain(|task| !task.is_finished());
                in_flight.push(runtime.spawn(deliver(
                    actuator.clone(),
                    dispatch,
                    ui_tx.clone(),
                )));
            }
            BackendCommand::Shutdown => break,
        }
    }

    in_flight.retain(|task| !task.is_finished());
    if in_flight.is_empty() {
        return;
    }

    info!(pending = in_flight.len(), "waiting for in-flight actuator deliveries");
    runtime.block_on(async move {
        let pending = async {
            for task in in_flight {
                let _ = task.await;
            }
        };
        if tokio::time::timeout(shutdown_grace, pending).await.is_err() {
            warn!(
                grace_ms = shutdown_grace.as_millis() as u64,
                "abandoning actuator deliveries still in flight"
            );
        }
    });
}

pub(crate) async fn deliver(actuator: Arc<dyn Actuator>, dispatch: Dispatch, ui_tx: Sender<UiEvent>) {
    let Dispatch { sequence, key } = dispatch;
    match actuator.trigger(key).await {
        Ok(receipt) => {
            info!(sequence, %key, url = %receipt.url, "actuator request delivered");
            let _ = ui_tx.try_send(UiEvent::DeliverySucceeded { sequence, receipt });
        }
        Err(err) => {
            error!(sequence, %key, %err, "actuator request failed");
            let _ = ui_tx.try_send(UiEvent::DeliveryFailed {
                sequence,
                key,
                error: UiError::from_delivery(&err),
            });
        }
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
