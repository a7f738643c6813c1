use chrono::{DateTime, Local};
use eframe::egui::Ui;

use crate::animations_panel::AnimationsPanel;
use crate::developer_panel::DeveloperPanel;
use crate::device::DeviceClient;
use crate::effect_picker::EffectPicker;
use crate::state::{PanelId, PowerState};

/// Static description of a panel: what the chrome and menu show for it, and
/// how to mount a fresh instance of its view.
pub struct PanelDescriptor {
    pub id: PanelId,
    pub title: &'static str,
    pub icon: &'static str,
    pub mount: fn(&DeviceClient) -> ActivePanel,
}

fn mount_animations(client: &DeviceClient) -> ActivePanel {
    ActivePanel::Animations(AnimationsPanel::mount(client))
}

fn mount_effects(client: &DeviceClient) -> ActivePanel {
    ActivePanel::Effects(EffectPicker::mount(client))
}

fn mount_developer(client: &DeviceClient) -> ActivePanel {
    ActivePanel::Developer(DeveloperPanel::mount(client))
}

static ANIMATIONS: PanelDescriptor = PanelDescriptor {
    id: PanelId::Animations,
    title: "Animations",
    icon: egui_phosphor::regular::LIGHTBULB,
    mount: mount_animations,
};

static EFFECTS: PanelDescriptor = PanelDescriptor {
    id: PanelId::Effects,
    title: "Effects",
    icon: egui_phosphor::regular::PALETTE,
    mount: mount_effects,
};

static DEVELOPER: PanelDescriptor = PanelDescriptor {
    id: PanelId::Developer,
    title: "Developer",
    icon: egui_phosphor::regular::WRENCH,
    mount: mount_developer,
};

/// Total over the closed `PanelId` set: every id has exactly one descriptor,
/// and the match below is checked by the compiler.
pub fn describe(id: PanelId) -> &'static PanelDescriptor {
    match id {
        PanelId::Animations => &ANIMATIONS,
        PanelId::Effects => &EFFECTS,
        PanelId::Developer => &DEVELOPER,
    }
}

/// Read-only shell facts handed to panels that display them.
pub struct ShellInfo {
    pub power: PowerState,
    pub last_status_at: Option<DateTime<Local>>,
    pub device_url: String,
}

/// The mounted instance of the currently selected panel.
///
/// Dropping it discards the panel's local state and its event receiver, so
/// responses to calls still in flight are silently discarded.
pub enum ActivePanel {
    Animations(AnimationsPanel),
    Effects(EffectPicker),
    Developer(DeveloperPanel),
}

impl ActivePanel {
    pub fn id(&self) -> PanelId {
        match self {
            ActivePanel::Animations(_) => PanelId::Animations,
            ActivePanel::Effects(_) => PanelId::Effects,
            ActivePanel::Developer(_) => PanelId::Developer,
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, info: &ShellInfo) {
        match self {
            ActivePanel::Animations(panel) => panel.ui(ui),
            ActivePanel::Effects(panel) => panel.ui(ui),
            ActivePanel::Developer(panel) => panel.ui(ui, info),
        }
    }
}
