use eframe::egui::{self, Align, Color32, Context, Layout, RichText, Ui};

use crate::panels::{self, ShellInfo};
use crate::state::{PanelId, PowerState, State};
use crate::{about, http_worker, StripPanel, PROGRAM_TITLE};

const POWER_ON_COLOR: Color32 = Color32::from_rgb(0, 160, 0);
const POWER_OFF_COLOR: Color32 = Color32::from_rgb(190, 0, 0);

/// Indicator color for the power button.
///
/// Unknown deliberately renders the same as Off: until the first status poll
/// resolves the two are visually indistinguishable.
pub fn power_color(power: PowerState) -> Color32 {
    match power {
        PowerState::On => POWER_ON_COLOR,
        PowerState::Off | PowerState::Unknown => POWER_OFF_COLOR,
    }
}

// Keep action handlers associated with StripPanel
impl StripPanel {
    pub(crate) fn handle_menu_toggle(&mut self) {
        self.shell.nav.toggle_menu();
    }

    /// Switches the visible panel and closes the menu. Selecting the panel
    /// that is already mounted only closes the menu; its state survives.
    pub(crate) fn handle_panel_select(&mut self, id: PanelId) {
        self.shell.nav.select(id);
        if self.panel.id() != id {
            self.panel = (panels::describe(id).mount)(&self.client);
            log::info!("Switched panel to {:?}", id);
        }
    }

    /// Dispatches the toggle; the indicator changes only once the device
    /// reports its new state.
    pub(crate) fn handle_power_toggle(&mut self) {
        log::info!("Requesting power toggle");
        http_worker::spawn_power_toggle(self.client.clone(), self.events_tx.clone());
    }
}

// --- UI Drawing Functions ---

pub(crate) fn draw_about_screen(app: &mut StripPanel, ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.heading(format!("About {}", PROGRAM_TITLE));
        ui.separator();
        for line in about::about() {
            ui.label(line);
        }
        ui.separator();
        if ui.button("OK").clicked() {
            app.state = State::Running;
        }
    });
}

pub(crate) fn draw_running(app: &mut StripPanel, ctx: &Context) {
    draw_chrome(app, ctx);
    draw_menu(app, ctx);
    draw_content(app, ctx);
}

/// Top bar: menu button, the selected panel's title, the non-blocking error
/// label, and the power button filled with the indicator color.
fn draw_chrome(app: &mut StripPanel, ctx: &Context) {
    egui::TopBottomPanel::top("chrome").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let menu_glyph = RichText::new(egui_phosphor::regular::LIST).size(18.0);
            if ui.button(menu_glyph).clicked() {
                app.handle_menu_toggle();
            }

            let title = panels::describe(app.shell.nav.selected).title;
            ui.label(RichText::new(title).heading());

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let power_glyph =
                    RichText::new(egui_phosphor::regular::POWER).color(Color32::WHITE);
                let power_button =
                    egui::Button::new(power_glyph).fill(power_color(app.shell.power));
                if ui.add(power_button).clicked() {
                    app.handle_power_toggle();
                }

                if let Some(error) = &app.shell.last_error {
                    ui.colored_label(POWER_OFF_COLOR, RichText::new(error).small());
                }
            });
        });
    });
}

/// Side menu, shown only while open. One entry per registered panel.
fn draw_menu(app: &mut StripPanel, ctx: &Context) {
    if !app.shell.nav.menu_open {
        return;
    }

    egui::SidePanel::left("menu")
        .resizable(false)
        .default_width(170.0)
        .show(ctx, |ui| {
            for id in PanelId::ALL {
                let descriptor = panels::describe(id);
                let label = format!("{}  {}", descriptor.icon, descriptor.title);
                let is_selected = app.shell.nav.selected == id;
                if ui.selectable_label(is_selected, label).clicked() {
                    app.handle_panel_select(id);
                }
            }

            ui.separator();

            if ui
                .button(format!("{}  About", egui_phosphor::regular::INFO))
                .clicked()
            {
                app.state = State::About;
            }
            if ui.button("Exit").clicked() {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });
}

fn draw_content(app: &mut StripPanel, ctx: &Context) {
    let info = ShellInfo {
        power: app.shell.power,
        last_status_at: app.shell.last_status_at,
        device_url: app.client.base_url().to_string(),
    };
    egui::CentralPanel::default().show(ctx, |ui| {
        app.panel.ui(ui, &info);
    });
}
