use crate::device::{DeviceClient, DeviceError};
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

/// A resolved shell-level network call, ready to be applied as one state patch.
#[derive(Debug)]
pub enum ShellEvent {
    StatusResolved(Result<bool, DeviceError>),
    ToggleResolved(Result<bool, DeviceError>),
}

/// Runs `job` on a short-lived worker thread and delivers its outcome to `tx`.
///
/// If the receiving side has been dropped in the meantime (panel unmounted,
/// app shutting down), the outcome is discarded: a resolved call against an
/// unmounted instance is a no-op, not an error.
pub fn dispatch<T, F>(label: &'static str, tx: Sender<T>, job: F) -> JoinHandle<()>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    thread::spawn(move || {
        let outcome = job();
        if tx.send(outcome).is_err() {
            log::debug!("{}: receiver dropped, discarding response", label);
        }
    })
}

/// One-shot status poll issued when the shell mounts.
pub fn spawn_status_poll(client: DeviceClient, tx: Sender<ShellEvent>) {
    dispatch("status poll", tx, move || {
        ShellEvent::StatusResolved(client.get_status())
    });
}

pub fn spawn_power_toggle(client: DeviceClient, tx: Sender<ShellEvent>) {
    dispatch("power toggle", tx, move || {
        ShellEvent::ToggleResolved(client.toggle_power())
    });
}

/// Board reset is fire-and-forget: no response is consumed and failures are
/// only logged.
pub fn spawn_reset(client: DeviceClient) {
    thread::spawn(move || {
        if let Err(e) = client.reset() {
            log::warn!("Device reset failed: {}", e);
        }
    });
}
