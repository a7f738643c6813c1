use eframe::egui::{Color32, ScrollArea, Ui};
use std::sync::mpsc::{channel, Receiver, Sender};

use crate::device::{Animation, DeviceClient, DeviceError};
use crate::http_worker;

/// Outcome of a network call owned by this panel.
#[derive(Debug)]
pub enum AnimationsEvent {
    Loaded(Result<Vec<Animation>, DeviceError>),
    Selected(Result<u32, DeviceError>),
}

/// Panel listing the animations the device offers, one button each.
///
/// The highlighted entry is the id the device confirmed, not the one that
/// was clicked last.
pub struct AnimationsPanel {
    client: DeviceClient,
    tx: Sender<AnimationsEvent>,
    rx: Receiver<AnimationsEvent>,
    animations: Vec<Animation>,
    selected: Option<u32>,
    loading: bool,
    error: Option<String>,
}

impl AnimationsPanel {
    /// Creates the panel and immediately requests the animation list.
    pub fn mount(client: &DeviceClient) -> Self {
        let (tx, rx) = channel();
        let panel = Self {
            client: client.clone(),
            tx,
            rx,
            animations: vec![],
            selected: None,
            loading: true,
            error: None,
        };
        panel.request_list();
        panel
    }

    fn request_list(&self) {
        let client = self.client.clone();
        http_worker::dispatch("animation list", self.tx.clone(), move || {
            AnimationsEvent::Loaded(client.list_animations())
        });
    }

    fn request_select(&self, id: u32) {
        log::info!("Requesting animation {}", id);
        let client = self.client.clone();
        http_worker::dispatch("animation select", self.tx.clone(), move || {
            AnimationsEvent::Selected(client.select_animation(id))
        });
    }

    pub fn apply_event(&mut self, event: AnimationsEvent) {
        match event {
            AnimationsEvent::Loaded(Ok(animations)) => {
                log::info!("Loaded {} animations", animations.len());
                self.animations = animations;
                self.loading = false;
                self.error = None;
            }
            AnimationsEvent::Loaded(Err(e)) => {
                log::warn!("Animation list failed: {}", e);
                self.loading = false;
                self.error = Some(format!("Could not load animations: {e}"));
            }
            AnimationsEvent::Selected(Ok(id)) => {
                self.selected = Some(id);
                self.error = None;
            }
            AnimationsEvent::Selected(Err(e)) => {
                log::warn!("Animation select failed: {}", e);
                self.error = Some(format!("Could not select animation: {e}"));
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

        ui.horizontal(|ui| {
            if ui.button("Refresh").clicked() {
                self.loading = true;
                self.request_list();
            }
            if self.loading {
                ui.label("Loading animations...");
            }
        });

        if let Some(error) = &self.error {
            ui.colored_label(Color32::RED, error);
        }

        ui.separator();

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for animation in &self.animations {
                    let is_selected = self.selected == Some(animation.id);
                    if ui
                        .selectable_label(is_selected, animation.to_string())
                        .clicked()
                    {
                        self.request_select(animation.id);
                    }
                }
                if !self.loading && self.animations.is_empty() && self.error.is_none() {
                    ui.label("The device reported no animations.");
                }
            });
    }
}
