// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar and tool selection UI.
//!
//! This module provides the toolbar interface for selecting the drawing
//! tool whose style is shown in the properties panel.

use crate::models::tool::Tool;

/// Display the toolbar. Returns `true` if the selected tool changed.
pub fn show(ui: &mut egui::Ui, current_tool: &mut Tool) -> bool {
    let previous = *current_tool;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        ui.label("Tools:");

        ui.separator();

        for tool in Tool::ALL {
            if ui.selectable_label(*current_tool == tool, tool.label()).clicked() {
                *current_tool = tool;
            }
            if tool == Tool::Select {
                ui.separator();
            }
        }

        ui.separator();

        ui.label(
            egui::RichText::new("Hold Space or the middle mouse button and drag to pan")
                .italics()
                .weak(),
        );
    });

    *current_tool != previous
}
