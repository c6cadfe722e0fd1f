// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotator - screenshot and image annotation
//!
//! A cross-platform desktop application for annotating screenshots and
//! images, with drag-to-pan and zoom navigation and per-tool styles.
//!
//! Usage: `annotator [IMAGE]`

mod app;
mod config;
mod io;
mod models;
mod ui;
mod util;
mod view;

use anyhow::Result;
use app::AnnotatorApp;
use config::Config;
use std::path::PathBuf;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = Config::load_or_default();
    let initial_image = std::env::args_os().nth(1).map(PathBuf::from);

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Annotator"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Annotator",
        options,
        Box::new(move |cc| Ok(Box::new(AnnotatorApp::new(cc, config, initial_image)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
