use actuator::DeliveryReceipt;
use crossbeam_channel::{bounded, Receiver, Sender};
use shared::{
    domain::{Road, SignalColor, SignalHead, TurnDirection},
    protocol::CommandKey,
};

use super::*;
use crate::backend_bridge::commands::BackendCommand;

fn app() -> (ConsoleApp, Receiver<BackendCommand>, Sender<UiEvent>) {
    let (cmd_tx, cmd_rx) = bounded(16);
    let (ui_tx, ui_rx) = bounded(16);
    (
        ConsoleApp::new(QueueDispatcher::new(cmd_tx), ui_rx),
        cmd_rx,
        ui_tx,
    )
}

fn delivered_keys(cmd_rx: &Receiver<BackendCommand>) -> Vec<&'static str> {
    cmd_rx
        .try_iter()
        .filter_map(|cmd| match cmd {
            BackendCommand::Deliver(dispatch) => Some(dispatch.key.as_str()),
            BackendCommand::Shutdown => None,
        })
        .collect()
}

#[test]
fn road_then_direction_queues_one_command() {
    let (mut app, cmd_rx, _ui_tx) = app();
    app.handle_line("road east");
    let reply = app.handle_line("direction right");

    assert!(!reply.quit);
    assert!(reply
        .lines
        .iter()
        .any(|line| line == "movement   from East Road | Turn Right | to North Road"));
    assert!(reply
        .lines
        .iter()
        .any(|line| line == "command    turn-right-east (/urgent/right/east)"));
    assert_eq!(delivered_keys(&cmd_rx), vec!["turn-right-east"]);

    let view = app.view();
    assert_eq!(view.highlighted, vec![Road::East, Road::North]);
    assert_eq!(view.heads.get(SignalHead::EastApproach), SignalColor::Green);
}

#[test]
fn status_and_rerenders_do_not_resend() {
    let (mut app, cmd_rx, _ui_tx) = app();
    app.handle_line("road south");
    app.handle_line("direction left");
    app.handle_line("status");
    app.handle_line("json");
    let reply = app.handle_line("direction left");

    assert_eq!(reply.lines.first().map(String::as_str), Some("selection unchanged"));
    assert_eq!(delivered_keys(&cmd_rx), vec!["turn-left-south"]);
}

#[test]
fn manual_click_is_rejected_while_synchronized() {
    let (mut app, _cmd_rx, _ui_tx) = app();
    let reply = app.handle_line("light west yellow");
    assert_eq!(reply.lines[0], "west-approach head set to yellow");
    assert_eq!(
        app.view().heads.get(SignalHead::WestApproach),
        SignalColor::Yellow
    );

    app.handle_line("road south");
    app.handle_line("direction left");
    let reply = app.handle_line("light west yellow");
    assert_eq!(
        reply.lines,
        vec!["Traffic lights are synchronized. Manual override disabled.".to_string()]
    );
    assert_eq!(app.view().heads.get(SignalHead::WestApproach), SignalColor::Red);
}

#[test]
fn intersection_selection_renders_idle_state() {
    let (mut app, cmd_rx, _ui_tx) = app();
    let reply = app.handle_line("road intersection");

    assert_eq!(
        reply.lines,
        vec![
            "signals    1:west=red  2:east=red  3:north=red  4:south=red".to_string(),
            "highlight  Center Intersection".to_string(),
        ]
    );
    assert!(delivered_keys(&cmd_rx).is_empty());
}

#[test]
fn json_view_is_serialized() {
    let (mut app, _cmd_rx, _ui_tx) = app();
    app.handle_line("road west");
    app.handle_line("direction straight");
    let reply = app.handle_line("json");

    let value: serde_json::Value = serde_json::from_str(&reply.lines[0]).expect("json");
    assert_eq!(value["command"], "straight-west");
    assert_eq!(value["destination"], "east");
    assert_eq!(value["heads"]["west"], "green");
    assert_eq!(value["highlighted"], serde_json::json!(["west", "east"]));
}

#[test]
fn input_errors_and_quit() {
    let (mut app, _cmd_rx, _ui_tx) = app();
    let reply = app.handle_line("road up");
    assert!(reply.lines[0].starts_with("error: unrecognized road 'up'"));

    assert_eq!(app.handle_line("# comment"), Reply::default());
    assert!(app.handle_line("quit").quit);
}

#[test]
fn backend_events_are_rendered() {
    let (mut app, _cmd_rx, ui_tx) = app();
    let key = CommandKey::new(Road::North, TurnDirection::Left).expect("key");
    ui_tx
        .send(UiEvent::DeliverySucceeded {
            sequence: 1,
            receipt: DeliveryReceipt {
                key,
                url: "http://lights/urgent/left/north".to_string(),
                status: Some(200),
            },
        })
        .expect("send");
    ui_tx
        .send(UiEvent::DeliveryFailed {
            sequence: 2,
            key,
            error: UiError::from_message(
                UiErrorContext::Delivery,
                "actuator request to http://lights/urgent/left/north failed: connection refused",
            ),
        })
        .expect("send");

    let lines = app.drain_events();
    assert_eq!(lines[0], "actuator #1: turn-left-north delivered (200)");
    assert!(lines[1].starts_with("actuator #2: turn-left-north failed:"));
    assert!(lines[1].contains("actuator unreachable"));
    assert!(app.drain_events().is_empty());
}
