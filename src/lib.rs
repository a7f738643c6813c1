// Export modules for testing
pub mod about;
pub mod animations_panel;
pub mod config;
pub mod developer_panel;
pub mod device;
pub mod effect_picker;
pub mod http_worker;
pub mod panels;
pub mod state;
pub mod ui;
pub mod util;

// Re-export the types tests and main touch most
pub use crate::config::ConfigData;
pub use crate::device::{Animation, DeviceClient, DeviceError};
pub use crate::state::{NavigationState, PanelId, PowerState, ShellState, State};

use eframe::{egui, glow};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::time::Duration;

use crate::http_worker::ShellEvent;
use crate::panels::ActivePanel;

// Constants
pub const PROGRAM_TITLE: &str = "LED Strip Controls";
pub const INITIAL_WIDTH: f32 = 420.0;
pub const INITIAL_HEIGHT: f32 = 540.0;

// Args struct for command line parsing
use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Device base URL override, e.g. http://ledstrip.local
    #[arg(short, long)]
    pub url: Option<String>,
}

pub use fast_config::Config;

// The main application struct
pub struct StripPanel {
    // Lifecycle
    pub state: State,

    // Shell-owned navigation and power state
    pub shell: ShellState,

    // The mounted instance of the selected panel
    pub panel: ActivePanel,

    // Device access
    pub client: DeviceClient,

    // Shell-level worker responses (status poll, power toggle)
    pub events: Receiver<ShellEvent>,
    pub events_tx: Sender<ShellEvent>,

    // Configuration
    pub config: Config<ConfigData>,
}

impl StripPanel {
    pub fn new(config: Config<ConfigData>, client: DeviceClient) -> Self {
        let (events_tx, events) = channel();
        let shell = ShellState::default();
        // Mount the default panel; its initial fetch is dispatched here
        let panel = (panels::describe(shell.nav.selected).mount)(&client);
        Self {
            state: State::Initialising,
            shell,
            panel,
            client,
            events,
            events_tx,
            config,
        }
    }

    // One-shot startup work, run once after the first frame
    fn init(&mut self) {
        http_worker::spawn_status_poll(self.client.clone(), self.events_tx.clone());
        self.state = State::Running;
        log::info!("Initialization complete. State set to Running.");
    }

    /// Applies every queued worker response, in arrival order. Power updates
    /// are last-write-wins by construction.
    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.shell.apply_event(event);
        }
    }

    // Graceful shutdown logic
    fn shutdown(&mut self) {
        log::info!("Shutdown requested.");
        if let Err(e) = self.config.save() {
            log::error!("Failed to save configuration on exit: {}", e);
        } else {
            log::info!("Configuration saved.");
        }
    }
}

// Main eframe application loop
impl eframe::App for StripPanel {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events();
        // Worker responses arrive between frames; keep repainting so they
        // are picked up without user input
        ctx.request_repaint_after(Duration::from_millis(250));

        match self.state {
            State::Initialising => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.centered_and_justified(|ui| {
                        ui.label("Connecting to device...");
                    });
                });
                self.init();
            }
            State::About => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui::draw_about_screen(self, ui);
                });
            }
            State::Running => {
                ui::draw_running(self, ctx);
            }
        }
    }

    // Called when the application is about to close
    fn on_exit(&mut self, _gl: Option<&glow::Context>) {
        self.shutdown();
    }
}
