use led_strip_panel::device::DeviceError;
use led_strip_panel::http_worker::{self, ShellEvent};
use led_strip_panel::state::{PowerState, ShellState};
use led_strip_panel::ui::power_color;
use reqwest::StatusCode;
use std::sync::mpsc::channel;
use std::time::Duration;

fn device_error() -> DeviceError {
    DeviceError::Status(StatusCode::INTERNAL_SERVER_ERROR)
}

#[test]
fn test_status_success_adopts_server_value() {
    let mut shell = ShellState::default();
    assert_eq!(shell.power, PowerState::Unknown);

    shell.apply_event(ShellEvent::StatusResolved(Ok(true)));

    assert_eq!(shell.power, PowerState::On);
    assert!(shell.last_status_at.is_some());
    assert!(shell.last_error.is_none());
}

#[test]
fn test_status_on_mount_drives_indicator_before_any_interaction() {
    // getStatus resolving {powerOn: true} must turn the chrome indicator
    // green with no user action involved
    let mut shell = ShellState::default();
    shell.apply_event(ShellEvent::StatusResolved(Ok(true)));

    assert_eq!(power_color(shell.power), power_color(PowerState::On));
    assert_ne!(power_color(shell.power), power_color(PowerState::Off));
}

#[test]
fn test_status_failure_keeps_power_unknown() {
    let mut shell = ShellState::default();

    shell.apply_event(ShellEvent::StatusResolved(Err(device_error())));

    assert_eq!(shell.power, PowerState::Unknown);
    assert!(shell.last_status_at.is_none());
    assert!(shell.last_error.is_some());
}

#[test]
fn test_toggle_adopts_exact_server_value_not_a_flip() {
    let mut shell = ShellState::default();
    shell.apply_event(ShellEvent::StatusResolved(Ok(true)));
    assert_eq!(shell.power, PowerState::On);

    // Server echoes the current value; a locally negated update would
    // wrongly flip to Off here
    shell.apply_event(ShellEvent::ToggleResolved(Ok(true)));
    assert_eq!(shell.power, PowerState::On);

    shell.apply_event(ShellEvent::ToggleResolved(Ok(false)));
    assert_eq!(shell.power, PowerState::Off);
}

#[test]
fn test_toggle_failure_leaves_power_unchanged() {
    let mut shell = ShellState::default();
    shell.apply_event(ShellEvent::StatusResolved(Ok(true)));

    shell.apply_event(ShellEvent::ToggleResolved(Err(device_error())));

    assert_eq!(shell.power, PowerState::On);
    assert!(shell.last_error.is_some());
}

#[test]
fn test_power_updates_are_last_write_wins() {
    let mut shell = ShellState::default();

    // Drain order is arrival order; the latest resolved value sticks
    shell.apply_event(ShellEvent::ToggleResolved(Ok(true)));
    shell.apply_event(ShellEvent::ToggleResolved(Ok(false)));

    assert_eq!(shell.power, PowerState::Off);
}

#[test]
fn test_success_clears_previous_error() {
    let mut shell = ShellState::default();

    shell.apply_event(ShellEvent::ToggleResolved(Err(device_error())));
    assert!(shell.last_error.is_some());

    shell.apply_event(ShellEvent::StatusResolved(Ok(false)));
    assert!(shell.last_error.is_none());
    assert_eq!(shell.power, PowerState::Off);
}

#[test]
fn test_dispatch_delivers_to_live_receiver() {
    let (tx, rx) = channel();

    http_worker::dispatch("live receiver", tx, || 41 + 1);

    let delivered = rx
        .recv_timeout(Duration::from_secs(5))
        .expect("worker result should arrive");
    assert_eq!(delivered, 42);
}

#[test]
fn test_dispatch_after_unmount_is_noop() {
    // Dropping the receiver models an unmounted panel: the resolved call
    // must complete without panicking and without going anywhere
    let (tx, rx) = channel::<i32>();
    drop(rx);

    let handle = http_worker::dispatch("unmounted receiver", tx, || 7);
    handle.join().expect("worker thread must not panic");
}
