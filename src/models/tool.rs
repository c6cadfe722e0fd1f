// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drawing tools and their per-tool styles.

use super::properties::{AnnotationProperties, FillType};
use egui::Color32;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Current drawing tool selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    Select,
    Pen,
    Marker,
    Rect,
    Ellipse,
    Line,
    Arrow,
    Number,
    Text,
    Blur,
}

impl Tool {
    pub const ALL: [Tool; 10] = [
        Tool::Select,
        Tool::Pen,
        Tool::Marker,
        Tool::Rect,
        Tool::Ellipse,
        Tool::Line,
        Tool::Arrow,
        Tool::Number,
        Tool::Text,
        Tool::Blur,
    ];

    /// Toolbar label.
    pub fn label(self) -> &'static str {
        match self {
            Tool::Select => "⬆ Select",
            Tool::Pen => "✏ Pen",
            Tool::Marker => "🖍 Marker",
            Tool::Rect => "▭ Rect",
            Tool::Ellipse => "◯ Ellipse",
            Tool::Line => "⟋ Line",
            Tool::Arrow => "➚ Arrow",
            Tool::Number => "① Number",
            Tool::Text => "T Text",
            Tool::Blur => "▒ Blur",
        }
    }

    /// What `AnnotationProperties::size` means for this tool.
    pub fn size_label(self) -> &'static str {
        match self {
            Tool::Number | Tool::Text => "Font size",
            Tool::Blur => "Blur radius",
            _ => "Width",
        }
    }

    /// Whether the tool draws a closed shape that can be filled.
    pub fn has_fill(self) -> bool {
        matches!(self, Tool::Rect | Tool::Ellipse | Tool::Number)
    }

    /// Whether the tool draws anything at all.
    pub fn is_drawing_tool(self) -> bool {
        self != Tool::Select
    }

    /// Built-in style for a drawing tool.
    pub fn default_properties(self) -> Option<AnnotationProperties> {
        let properties = match self {
            Tool::Select => return None,
            Tool::Pen | Tool::Line | Tool::Arrow => {
                AnnotationProperties::with_color_and_size(Color32::RED, 3)
            }
            Tool::Marker => {
                let mut properties = AnnotationProperties::with_color_and_size(Color32::YELLOW, 20);
                properties.set_shadow_enabled(false);
                properties
            }
            Tool::Rect | Tool::Ellipse => {
                let mut properties = AnnotationProperties::with_color_and_size(Color32::RED, 3);
                properties.set_fill_type(FillType::BorderAndNoFill);
                properties
            }
            Tool::Number => {
                let mut properties = AnnotationProperties::with_color_and_size(Color32::RED, 20);
                properties.set_fill_type(FillType::BorderAndFill);
                properties
            }
            Tool::Text => {
                let mut properties = AnnotationProperties::with_color_and_size(Color32::RED, 10);
                properties.set_fill_type(FillType::NoBorderAndNoFill);
                properties
            }
            Tool::Blur => {
                let mut properties = AnnotationProperties::with_color_and_size(Color32::BLACK, 10);
                properties.set_shadow_enabled(false);
                properties
            }
        };
        Some(properties)
    }
}

/// The style each drawing tool applies to new annotations.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolSettings {
    properties: BTreeMap<Tool, AnnotationProperties>,
}

impl Default for ToolSettings {
    fn default() -> Self {
        let properties = Tool::ALL
            .iter()
            .filter_map(|tool| tool.default_properties().map(|p| (*tool, p)))
            .collect();
        Self { properties }
    }
}

impl ToolSettings {
    /// Built-in styles with the given per-tool overrides applied.
    pub fn with_overrides(overrides: &BTreeMap<Tool, AnnotationProperties>) -> Self {
        let mut settings = Self::default();
        for (tool, properties) in overrides {
            if !tool.is_drawing_tool() {
                log::warn!("Ignoring style configured for the {:?} tool", tool);
                continue;
            }
            settings.properties.insert(*tool, properties.clone());
        }
        settings
    }

    /// Style for the given tool, `None` for tools that do not draw.
    pub fn properties(&self, tool: Tool) -> Option<&AnnotationProperties> {
        self.properties.get(&tool)
    }

    pub fn properties_mut(&mut self, tool: Tool) -> Option<&mut AnnotationProperties> {
        self.properties.get_mut(&tool)
    }
}
