// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation properties panel.
//!
//! This module provides the side panel for editing the style of the active
//! tool and the canvas background color.

use crate::models::{
    area::AnnotationArea,
    properties::{AnnotationProperties, FillType},
    tool::{Tool, ToolSettings},
};
use crate::view::CanvasScene;

const MAX_SIZE: u32 = 100;

/// Display the properties panel.
pub fn show(ui: &mut egui::Ui, tool: Tool, settings: &mut ToolSettings, area: &mut AnnotationArea) {
    ui.heading("Properties");
    ui.separator();

    match settings.properties_mut(tool) {
        Some(properties) => {
            if edit_properties(ui, tool, properties) {
                log::info!("{:?} style changed: {:?}", tool, properties);
            }
        }
        None => {
            ui.label(egui::RichText::new("Pick a drawing tool to edit its style").weak());
        }
    }

    ui.add_space(12.0);
    ui.heading("Canvas");
    ui.separator();

    let mut canvas_color = area.canvas_color();
    ui.horizontal(|ui| {
        ui.label("Background");
        if ui.color_edit_button_srgba(&mut canvas_color).changed() {
            area.set_canvas_color(canvas_color);
        }
    });
}

/// Edit one tool's style. Returns `true` if anything changed.
fn edit_properties(ui: &mut egui::Ui, tool: Tool, properties: &mut AnnotationProperties) -> bool {
    let mut changed = false;

    egui::Grid::new("annotation_properties")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            let mut color = properties.color();
            ui.label("Color");
            if ui.color_edit_button_srgba(&mut color).changed() {
                properties.set_color(color);
                changed = true;
            }
            ui.end_row();

            if tool.has_fill() {
                let mut foreground = properties.foreground_color();
                ui.label("Fill color");
                if ui.color_edit_button_srgba(&mut foreground).changed() {
                    properties.set_foreground_color(foreground);
                    changed = true;
                }
                ui.end_row();
            }

            let mut size = properties.size();
            ui.label(tool.size_label());
            if ui.add(egui::Slider::new(&mut size, 1..=MAX_SIZE)).changed() {
                properties.set_size(size);
                changed = true;
            }
            ui.end_row();

            if tool.has_fill() {
                let mut fill_type = properties.fill_type();
                ui.label("Fill");
                egui::ComboBox::from_id_source("fill_type")
                    .selected_text(fill_type.label())
                    .show_ui(ui, |ui| {
                        for option in FillType::ALL {
                            ui.selectable_value(&mut fill_type, option, option.label());
                        }
                    });
                if fill_type != properties.fill_type() {
                    properties.set_fill_type(fill_type);
                    changed = true;
                }
                ui.end_row();
            }

            let mut shadow = properties.shadow_enabled();
            ui.label("Shadow");
            if ui.checkbox(&mut shadow, "").changed() {
                properties.set_shadow_enabled(shadow);
                changed = true;
            }
            ui.end_row();
        });

    changed
}
