use crossbeam_channel::bounded;
use shared::{
    domain::{Road, TurnDirection},
    protocol::CommandKey,
};

use super::*;

fn dispatch(sequence: u64) -> Dispatch {
    Dispatch {
        sequence,
        key: CommandKey::new(Road::North, TurnDirection::Left).expect("key"),
    }
}

#[test]
fn queues_deliveries_for_the_backend() {
    let (cmd_tx, cmd_rx) = bounded(4);
    let dispatcher = QueueDispatcher::new(cmd_tx);
    dispatcher.dispatch(dispatch(1));

    match cmd_rx.try_recv() {
        Ok(BackendCommand::Deliver(sent)) => assert_eq!(sent, dispatch(1)),
        _ => panic!("expected a queued delivery"),
    }
    assert_eq!(dispatcher.take_status(), None);
}

#[test]
fn full_queue_is_reported_not_blocking() {
    let (cmd_tx, _cmd_rx) = bounded(1);
    let dispatcher = QueueDispatcher::new(cmd_tx);
    dispatcher.dispatch(dispatch(1));
    dispatcher.dispatch(dispatch(2));

    let status = dispatcher.take_status().expect("status");
    assert!(status.contains("queue is full"));
    assert_eq!(dispatcher.take_status(), None);
}

#[test]
fn disconnected_backend_is_reported() {
    let (cmd_tx, cmd_rx) = bounded(1);
    drop(cmd_rx);
    let mut status = String::new();
    dispatch_backend_command(&cmd_tx, BackendCommand::Shutdown, &mut status);
    assert!(status.contains("disconnected"));
}
