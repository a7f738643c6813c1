use eframe::egui::Ui;

use crate::device::DeviceClient;
use crate::http_worker;
use crate::panels::ShellInfo;

/// Developer page: device facts plus dev and testing-specific actions.
pub struct DeveloperPanel {
    client: DeviceClient,
}

impl DeveloperPanel {
    pub fn mount(client: &DeviceClient) -> Self {
        Self {
            client: client.clone(),
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, info: &ShellInfo) {
        ui.label(format!("Device: {}", info.device_url));
        ui.label(format!("Power: {:?}", info.power));
        match info.last_status_at {
            Some(at) => {
                ui.label(format!("Last device confirmation: {}", at.format("%H:%M:%S")));
            }
            None => {
                ui.label("Last device confirmation: never");
            }
        }

        ui.separator();

        if ui.button("Reset board").clicked() {
            log::info!("Requesting board reset");
            http_worker::spawn_reset(self.client.clone());
        }
        ui.small("Restarts the controller. The strip goes dark until the board is back up.");
    }
}
