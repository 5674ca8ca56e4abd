//! Backend commands queued from the console to the backend worker.

use coordinator::Dispatch;

#[derive(Debug)]
pub enum BackendCommand {
    Deliver(Dispatch),
    /// Stop accepting work and let in-flight deliveries finish.
    Shutdown,
}
