//! Operator command line parsing.

use coordinator::SelectionEvent;
use shared::{
    domain::{Road, SignalColor, SignalHead, TurnDirection},
    error::ParseError,
};
use thiserror::Error;

pub const HELP: &str = "\
commands:
  road <north|south|east|west|intersection>   pick a road (clears the direction)
  direction <left|right|straight>             pick a turn direction
  clear                                       drop the selection
  light <west|east|north|south|1-4> <red|yellow|green>
                                              set one head manually (idle only)
  status                                      show signals and highlighted roads
  json                                        show the current view as json
  help                                        show this text
  quit                                        exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorAction {
    Select(SelectionEvent),
    Override { head: SignalHead, color: SignalColor },
    Status,
    Json,
    Help,
    Quit,
    Noop,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unrecognized command '{0}' (try 'help')")]
    UnknownCommand(String),
    #[error("missing {argument} for '{command}'")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("unexpected extra input '{0}'")]
    TrailingInput(String),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Blank lines and `#` comments parse to [`OperatorAction::Noop`] so scripts
/// can be annotated.
pub fn parse_action(line: &str) -> Result<OperatorAction, InputError> {
    let line = line.split('#').next().unwrap_or_default().trim();
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(OperatorAction::Noop);
    };

    let action = match command.to_ascii_lowercase().as_str() {
        "road" | "r" => {
            let road = required(words.next(), "road", "road")?.parse::<Road>()?;
            OperatorAction::Select(SelectionEvent::RoadChosen(road))
        }
        "direction" | "dir" | "d" => {
            let direction =
                required(words.next(), "direction", "direction")?.parse::<TurnDirection>()?;
            OperatorAction::Select(SelectionEvent::DirectionChosen(direction))
        }
        "clear" => OperatorAction::Select(SelectionEvent::Cleared),
        "light" | "click" => {
            let head = required(words.next(), "light", "signal head")?.parse::<SignalHead>()?;
            let color = required(words.next(), "light", "color")?.parse::<SignalColor>()?;
            OperatorAction::Override { head, color }
        }
        "status" | "s" => OperatorAction::Status,
        "json" => OperatorAction::Json,
        "help" | "?" => OperatorAction::Help,
        "quit" | "exit" | "q" => OperatorAction::Quit,
        other => return Err(InputError::UnknownCommand(other.to_string())),
    };

    let rest: Vec<&str> = words.collect();
    if !rest.is_empty() {
        return Err(InputError::TrailingInput(rest.join(" ")));
    }
    Ok(action)
}

fn required<'a>(
    word: Option<&'a str>,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, InputError> {
    word.ok_or(InputError::MissingArgument { command, argument })
}

#[cfg(test)]
#[path = "tests/input_tests.rs"]
mod tests;
