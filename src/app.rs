// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the eframe::App trait, owning the scene, the annotation view and the
//! tool styles, and wiring them to the UI components.

use crate::config::Config;
use crate::io::media::{self, LoadedImage};
use crate::models::{area::AnnotationArea, tool::Tool, tool::ToolSettings};
use crate::ui::{canvas, canvas::CanvasViewport, properties, toolbar};
use crate::view::actions::ViewAction;
use crate::view::cursor::CursorOverrides;
use crate::view::painter::CheckerboardPainter;
use crate::view::zoom::{ViewZoomer, ZoomLimits};
use crate::view::{AnnotationView, CanvasScene, CanvasSurface};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;

/// Where an image is loaded from.
enum ImageSource {
    File(PathBuf),
    Bytes { name: String, bytes: Arc<[u8]> },
}

impl ImageSource {
    fn name(&self) -> String {
        match self {
            ImageSource::File(path) => path.to_string_lossy().to_string(),
            ImageSource::Bytes { name, .. } => name.clone(),
        }
    }
}

/// Result of background image loading operation.
struct LoadedImageData {
    path: String,
    image: LoadedImage,
}

/// Main application state.
pub struct AnnotatorApp {
    /// Currently selected tool
    current_tool: Tool,

    /// Style of every drawing tool
    tool_settings: ToolSettings,

    /// Scene shown on the canvas
    area: AnnotationArea,

    /// Pan/zoom view over the scene
    view: AnnotationView,

    /// Screen area and scroll offset of the canvas
    viewport: CanvasViewport,

    zoom_limits: ZoomLimits,

    /// Loaded image texture for display
    image_texture: Option<egui::TextureHandle>,

    /// Hovered position in canvas coordinates
    hover_pos: Option<egui::Pos2>,

    /// Receiver for background image loading
    image_loader: Option<Receiver<Result<LoadedImageData, String>>>,

    /// Loading state message
    loading_message: Option<String>,
}

impl AnnotatorApp {
    /// Create the application, optionally loading an image right away.
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config, initial_image: Option<PathBuf>) -> Self {
        // Ctrl+Plus/Minus belong to the canvas zoom, not to egui's UI scale.
        cc.egui_ctx.options_mut(|options| options.zoom_with_keyboard = false);

        let mut app = Self::from_config(config);
        if let Some(path) = initial_image {
            app.load_image_file(path);
        }
        app
    }

    fn from_config(config: Config) -> Self {
        let zoom_limits = config.zoom.sanitized();
        Self {
            current_tool: Tool::Select,
            tool_settings: ToolSettings::with_overrides(&config.tools),
            area: AnnotationArea::new(config.canvas_color),
            view: AnnotationView::new(ViewZoomer::new(zoom_limits), CheckerboardPainter::default()),
            viewport: CanvasViewport::new(CursorOverrides::new()),
            zoom_limits,
            image_texture: None,
            hover_pos: None,
            image_loader: None,
            loading_message: None,
        }
    }

    /// Load an image file and create a texture for display (asynchronously).
    pub fn load_image_file(&mut self, path: PathBuf) {
        self.spawn_loader(ImageSource::File(path));
    }

    fn spawn_loader(&mut self, source: ImageSource) {
        let (sender, receiver) = channel();
        self.image_loader = Some(receiver);
        self.loading_message = Some(format!("Loading {}...", source.name()));

        // Spawn background thread for loading
        std::thread::spawn(move || {
            let name = source.name();
            let decoded = match &source {
                ImageSource::File(path) => media::load_image(path),
                ImageSource::Bytes { bytes, .. } => media::load_image_from_memory(bytes),
            };
            let result = decoded
                .map(|image| {
                    log::info!("Decoded image: {} ({}x{})", name, image.width, image.height);
                    LoadedImageData { path: name, image }
                })
                .map_err(|e| format!("{:#}", e));

            let _ = sender.send(result);
        });
    }

    /// Load the first image dropped onto the window.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let Some(file) = dropped.into_iter().next() else {
            return;
        };

        if let Some(path) = file.path {
            self.load_image_file(path);
        } else if let Some(bytes) = file.bytes {
            self.spawn_loader(ImageSource::Bytes { name: file.name, bytes });
        } else {
            log::warn!("Dropped file {:?} has neither a path nor contents", file.name);
        }
    }

    /// Check for completed image loading.
    fn poll_image_loader(&mut self, ctx: &egui::Context) {
        let Some(ref receiver) = self.image_loader else {
            return;
        };
        let Ok(result) = receiver.try_recv() else {
            return;
        };
        self.image_loader = None;
        self.loading_message = None;

        match result {
            Ok(loaded) => {
                let LoadedImageData { path, image } = loaded;
                let size = [image.width as usize, image.height as usize];
                let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &image.pixels);
                self.image_texture = Some(ctx.load_texture("loaded_image", color_image, egui::TextureOptions::LINEAR));
                self.area.load_image(path, image.width, image.height);
                // A new image starts unzoomed at its top-left corner.
                self.view.set_zoom_value(1.0, &self.area, &mut self.viewport);
                self.viewport.set_scroll_offset(egui::Vec2::ZERO);
                log::info!("Image loaded successfully");
            }
            Err(e) => {
                log::error!("Failed to load image: {}", e);
            }
        }
    }

    fn open_image_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", media::IMAGE_EXTENSIONS)
            .pick_file()
        {
            self.load_image_file(path);
        }
    }

    fn status_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(format!("Current tool: {:?}", self.current_tool));
            ui.separator();

            match self.area.image_file() {
                Some(file) => {
                    let size = self.area.canvas_rect().size();
                    ui.label(format!("{} ({}x{})", file, size.x, size.y));
                }
                None => {
                    ui.label("No file loaded");
                }
            }

            if let Some(pos) = self.hover_pos {
                ui.separator();
                ui.label(format!("{:.0}, {:.0}", pos.x, pos.y));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let zoom = self.view.zoom_value_provider().zoom_value();
                let mut percent = (zoom * 100.0).round();
                let range = (self.zoom_limits.min * 100.0)..=(self.zoom_limits.max * 100.0);
                let response = ui.add(
                    egui::DragValue::new(&mut percent)
                        .speed(1.0)
                        .range(range)
                        .suffix("%"),
                );
                if response.changed() {
                    self.view.set_zoom_value(percent / 100.0, &self.area, &mut self.viewport);
                }
                ui.label("Zoom:");
            });
        });
    }
}

impl eframe::App for AnnotatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_image_loader(ctx);
        self.handle_dropped_files(ctx);

        // Request repaint if still loading (to update spinner)
        if self.loading_message.is_some() {
            ctx.request_repaint();
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Image...").clicked() {
                        ui.close_menu();
                        self.open_image_dialog();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    for action in ViewAction::ALL {
                        let button = egui::Button::new(action.label())
                            .shortcut_text(ctx.format_shortcut(&action.shortcut()));
                        if ui.add_enabled(self.area.has_image(), button).clicked() {
                            self.view.trigger(action, &self.area, &mut self.viewport);
                            ui.close_menu();
                        }
                    }
                });
            });
        });

        // Toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            if toolbar::show(ui, &mut self.current_tool) {
                log::info!("Selected tool: {:?}", self.current_tool);
            }
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.status_bar(ui);
        });

        // Properties panel (right side)
        egui::SidePanel::right("properties")
            .default_width(250.0)
            .show(ctx, |ui| {
                properties::show(ui, self.current_tool, &mut self.tool_settings, &mut self.area);
            });

        // Main canvas (center)
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                if let Some(ref message) = self.loading_message {
                    ui.centered_and_justified(|ui| {
                        ui.vertical_centered(|ui| {
                            ui.add_space(20.0);
                            ui.spinner();
                            ui.add_space(10.0);
                            ui.label(
                                egui::RichText::new(message)
                                    .size(16.0)
                                    .color(egui::Color32::from_gray(200)),
                            );
                        });
                    });
                    self.hover_pos = None;
                } else {
                    self.hover_pos = canvas::show(
                        ui,
                        &mut self.view,
                        &self.area,
                        &mut self.viewport,
                        self.image_texture.as_ref(),
                    );
                }
            });
    }
}
