use coordinator::{OverrideOutcome, SignalCoordinator};
use crossbeam_channel::Receiver;

use crate::controller::{
    events::{UiError, UiErrorContext, UiEvent},
    input::{parse_action, OperatorAction, HELP},
    orchestration::QueueDispatcher,
};
use crate::ui::view::IntersectionView;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Reply {
    pub lines: Vec<String>,
    pub quit: bool,
}

impl Reply {
    fn text(lines: Vec<String>) -> Self {
        Self { lines, quit: false }
    }
}

/// Text front end over the coordinator. It only feeds selection events in and
/// renders what comes back.
pub struct ConsoleApp {
    coordinator: SignalCoordinator<QueueDispatcher>,
    ui_rx: Receiver<UiEvent>,
}

impl ConsoleApp {
    pub fn new(dispatcher: QueueDispatcher, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            coordinator: SignalCoordinator::new(dispatcher),
            ui_rx,
        }
    }

    pub fn view(&self) -> IntersectionView {
        IntersectionView::capture(&self.coordinator)
    }

    pub fn handle_line(&mut self, line: &str) -> Reply {
        match parse_action(line) {
            Ok(action) => self.apply(action),
            Err(err) => {
                let error = UiError::from_message(UiErrorContext::Input, err.to_string());
                Reply::text(vec![format!("error: {} ({})", error.message(), error.hint())])
            }
        }
    }

    pub fn apply(&mut self, action: OperatorAction) -> Reply {
        match action {
            OperatorAction::Select(event) => {
                let update = self.coordinator.handle(event);
                let mut lines = Vec::new();
                if !update.changed {
                    lines.push("selection unchanged".to_string());
                }
                lines.extend(self.view().render_lines());
                if let Some(status) = self.coordinator.dispatcher().take_status() {
                    lines.push(format!("warning: {status}"));
                }
                Reply::text(lines)
            }
            OperatorAction::Override { head, color } => {
                match self.coordinator.request_override(head, color) {
                    OverrideOutcome::Applied => {
                        let mut lines = vec![format!("{head} head set to {color}")];
                        lines.extend(self.view().render_lines());
                        Reply::text(lines)
                    }
                    OverrideOutcome::Rejected => Reply::text(vec![
                        "Traffic lights are synchronized. Manual override disabled.".to_string(),
                    ]),
                }
            }
            OperatorAction::Status => Reply::text(self.view().render_lines()),
            OperatorAction::Json => match serde_json::to_string_pretty(&self.view()) {
                Ok(json) => Reply::text(vec![json]),
                Err(err) => Reply::text(vec![format!("error: failed to encode view: {err}")]),
            },
            OperatorAction::Help => Reply::text(vec![HELP.to_string()]),
            OperatorAction::Quit => Reply {
                lines: Vec::new(),
                quit: true,
            },
            OperatorAction::Noop => Reply::default(),
        }
    }

    /// Renders backend events that arrived since the last call.
    pub fn drain_events(&mut self) -> Vec<String> {
        self.ui_rx.try_iter().map(|event| describe_event(&event)).collect()
    }
}

pub fn describe_event(event: &UiEvent) -> String {
    match event {
        UiEvent::Info(message) => format!("info: {message}"),
        UiEvent::DeliverySucceeded { sequence, receipt } => match receipt.status {
            Some(status) => format!(
                "actuator #{sequence}: {} delivered ({status})",
                receipt.key
            ),
            None => format!(
                "actuator #{sequence}: {} not sent (dry run: {})",
                receipt.key, receipt.url
            ),
        },
        UiEvent::DeliveryFailed {
            sequence,
            key,
            error,
        } => format!(
            "actuator #{sequence}: {key} failed: {} ({})",
            error.message(),
            error.hint()
        ),
        UiEvent::Error(error) => {
            let label = match error.context() {
                UiErrorContext::BackendStartup => "backend error",
                _ => "error",
            };
            format!("{label}: {} ({})", error.message(), error.hint())
        }
    }
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
