use chrono::{DateTime, Local};

use crate::http_worker::ShellEvent;

// Represents the current high-level state of the application UI
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum State {
    Initialising, // App is starting, loading config, dispatching the first poll
    Running,      // Main operational state, showing chrome and the selected panel
    About,        // Showing the about screen
}

/// Identifier for a selectable content panel. The set is closed and known
/// at build time; no id outside it is constructible.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum PanelId {
    Animations,
    Effects,
    Developer,
}

impl PanelId {
    pub const ALL: [PanelId; 3] = [PanelId::Animations, PanelId::Effects, PanelId::Developer];
}

/// Power state as last reported by the device. `Unknown` only before the
/// first status poll resolves; the value is never inferred client-side.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PowerState {
    Unknown,
    Off,
    On,
}

impl Default for PowerState {
    fn default() -> Self {
        PowerState::Unknown
    }
}

impl From<bool> for PowerState {
    fn from(power_on: bool) -> Self {
        if power_on {
            PowerState::On
        } else {
            PowerState::Off
        }
    }
}

// Navigation state owned solely by the shell
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct NavigationState {
    pub selected: PanelId,
    pub menu_open: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            selected: PanelId::Animations,
            menu_open: false,
        }
    }
}

impl NavigationState {
    /// Selecting a panel always closes the menu, regardless of its prior state.
    pub fn select(&mut self, id: PanelId) {
        self.selected = id;
        self.menu_open = false;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}

/// Shell-owned state fed by resolved worker calls: navigation, device power,
/// the most recent failed call, and when the device last confirmed its state.
#[derive(Debug, Default)]
pub struct ShellState {
    pub nav: NavigationState,
    pub power: PowerState,
    pub last_error: Option<String>,
    pub last_status_at: Option<DateTime<Local>>,
}

impl ShellState {
    /// Applies exactly one state patch for a resolved shell-level call.
    ///
    /// The power value is always the one the device reported; a failed call
    /// leaves power untouched and only records the error for the chrome label.
    pub fn apply_event(&mut self, event: ShellEvent) {
        match event {
            ShellEvent::StatusResolved(Ok(power_on)) => {
                log::info!("Status poll resolved: powerOn={}", power_on);
                self.power = power_on.into();
                self.last_status_at = Some(Local::now());
                self.last_error = None;
            }
            ShellEvent::StatusResolved(Err(e)) => {
                // Power stays as-is; before the first successful poll that
                // means Unknown.
                log::warn!("Status poll failed: {}", e);
                self.last_error = Some(format!("Status poll failed: {e}"));
            }
            ShellEvent::ToggleResolved(Ok(power_on)) => {
                log::info!("Power toggle acknowledged: powerOn={}", power_on);
                self.power = power_on.into();
                self.last_status_at = Some(Local::now());
                self.last_error = None;
            }
            ShellEvent::ToggleResolved(Err(e)) => {
                log::warn!("Power toggle failed: {}", e);
                self.last_error = Some(format!("Power toggle failed: {e}"));
            }
        }
    }
}
