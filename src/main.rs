#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use clap::Parser;
use eframe::egui;
use fast_config::Config;
use std::process::exit;
use std::time::Duration;

use led_strip_panel::config::ConfigData;
use led_strip_panel::device::DeviceClient;
use led_strip_panel::{Args, StripPanel, INITIAL_HEIGHT, INITIAL_WIDTH, PROGRAM_TITLE};

// Application Entry Point
fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    log::info!("Starting {}", PROGRAM_TITLE);

    // Determine config path safely
    let config_dir = dirs::config_dir()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| ".".to_string()); // Fallback to current dir
    let config_path = format!("{}/strip_panel.json", config_dir);

    let config = match Config::new(&config_path, ConfigData::default()) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::error!("Error creating config file at {}: {}", config_path, e);
            exit(1)
        }
    };

    // CLI override wins over the configured device URL for this run
    let base_url = args
        .url
        .clone()
        .unwrap_or_else(|| config.data.device_url.clone());
    let timeout = Duration::from_secs(config.data.request_timeout_secs);

    let client = match DeviceClient::new(&base_url, timeout) {
        Ok(client) => client,
        Err(e) => {
            log::error!("Failed to build device client: {}", e);
            exit(1)
        }
    };
    log::info!("Device endpoint: {}", base_url);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([INITIAL_WIDTH, INITIAL_HEIGHT])
            .with_title(PROGRAM_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        PROGRAM_TITLE,
        options,
        Box::new(|cc| {
            // Panel and power glyphs come from the phosphor icon font
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(StripPanel::new(config, client)))
        }),
    )
}
