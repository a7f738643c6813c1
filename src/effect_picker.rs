use eframe::egui::{self, Color32, Slider, Ui};
use std::sync::mpsc::{channel, Receiver, Sender};

use crate::device::{DeviceClient, DeviceError, EffectParams};
use crate::http_worker;
use crate::util::ColorState;

#[derive(Debug)]
pub enum EffectEvent {
    Applied {
        sent: EffectParams,
        outcome: Result<(), DeviceError>,
    },
}

/// Panel for pushing a custom color (and optional effect type) to the strip.
///
/// The sliders edit raw channel values; alpha is applied once, on transmit.
pub struct EffectPicker {
    client: DeviceClient,
    tx: Sender<EffectEvent>,
    rx: Receiver<EffectEvent>,
    color: ColorState,
    effect_type: String,
    last_sent: Option<EffectParams>,
    error: Option<String>,
}

impl EffectPicker {
    pub fn mount(client: &DeviceClient) -> Self {
        let (tx, rx) = channel();
        Self {
            client: client.clone(),
            tx,
            rx,
            color: ColorState::default(),
            effect_type: String::new(),
            last_sent: None,
            error: None,
        }
    }

    fn request_apply(&self) {
        let (r, g, b) = self.color.scaled();
        let effect_type = {
            let trimmed = self.effect_type.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        };
        let params = EffectParams {
            r,
            g,
            b,
            effect_type,
        };
        log::info!("Requesting effect ({}, {}, {})", r, g, b);
        let client = self.client.clone();
        http_worker::dispatch("effect set", self.tx.clone(), move || {
            let outcome = client.set_effect(&params);
            EffectEvent::Applied {
                sent: params,
                outcome,
            }
        });
    }

    pub fn apply_event(&mut self, event: EffectEvent) {
        match event {
            EffectEvent::Applied {
                sent,
                outcome: Ok(()),
            } => {
                self.last_sent = Some(sent);
                self.error = None;
            }
            EffectEvent::Applied {
                outcome: Err(e), ..
            } => {
                log::warn!("Effect set failed: {}", e);
                self.error = Some(format!("Could not set effect: {e}"));
            }
        }
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.rx.try_recv() {
            self.apply_event(event);
        }
    }

    pub fn ui(&mut self, ui: &mut Ui) {
        self.drain_events();

        ui.heading("Primary Color");

        // Edit a working copy so the picker state changes in one step
        let mut working = self.color;
        ui.add(Slider::new(&mut working.r, 0..=255).text("R"));
        ui.add(Slider::new(&mut working.g, 0..=255).text("G"));
        ui.add(Slider::new(&mut working.b, 0..=255).text("B"));
        ui.add(Slider::new(&mut working.a, 0.0..=1.0).text("Brightness"));
        if working != self.color {
            self.color.set(working.r, working.g, working.b, working.a);
        }

        ui.horizontal(|ui| {
            ui.label("Sends as:");
            let (r, g, b) = self.color.scaled();
            egui::color_picker::show_color(
                ui,
                Color32::from_rgb(r, g, b),
                egui::vec2(48.0, 20.0),
            );
            ui.monospace(format!("({}, {}, {})", r, g, b));
        });

        ui.horizontal(|ui| {
            ui.label("Effect type (optional):");
            ui.text_edit_singleline(&mut self.effect_type);
        });

        if ui.button("Apply").clicked() {
            self.request_apply();
        }

        if let Some(sent) = &self.last_sent {
            ui.label(format!(
                "Device acknowledged ({}, {}, {})",
                sent.r, sent.g, sent.b
            ));
        }

        if let Some(error) = &self.error {
            ui.colored_label(Color32::RED, error);
        }
    }
}
