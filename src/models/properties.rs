// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation style properties.
//!
//! This module defines the style value object that drawing tools apply to
//! newly created or selected annotations.

use egui::Color32;
use serde::{Deserialize, Serialize};

/// How a closed shape is outlined and filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillType {
    BorderAndFill,
    #[default]
    BorderAndNoFill,
    NoBorderAndNoFill,
}

impl FillType {
    pub const ALL: [FillType; 3] = [
        FillType::BorderAndFill,
        FillType::BorderAndNoFill,
        FillType::NoBorderAndNoFill,
    ];

    /// Human readable label for the properties panel.
    pub fn label(self) -> &'static str {
        match self {
            FillType::BorderAndFill => "Border and fill",
            FillType::BorderAndNoFill => "Border, no fill",
            FillType::NoBorderAndNoFill => "No border, no fill",
        }
    }
}

/// Visual style for an annotation.
///
/// `size` is a stroke width or a font size depending on the tool that owns
/// the properties. No field constrains another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationProperties {
    #[serde(with = "crate::util::color")]
    color: Color32,
    #[serde(with = "crate::util::color")]
    foreground_color: Color32,
    size: u32,
    fill_type: FillType,
    shadow_enabled: bool,
}

impl Default for AnnotationProperties {
    fn default() -> Self {
        Self {
            color: Color32::RED,
            foreground_color: Color32::WHITE,
            size: 3,
            fill_type: FillType::default(),
            shadow_enabled: true,
        }
    }
}

impl AnnotationProperties {
    /// Create properties with the given stroke color and size, other fields
    /// at their defaults.
    pub fn with_color_and_size(color: Color32, size: u32) -> Self {
        Self {
            color,
            size,
            ..Self::default()
        }
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    pub fn foreground_color(&self) -> Color32 {
        self.foreground_color
    }

    pub fn set_foreground_color(&mut self, color: Color32) {
        self.foreground_color = color;
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn set_size(&mut self, size: u32) {
        self.size = size;
    }

    pub fn fill_type(&self) -> FillType {
        self.fill_type
    }

    pub fn set_fill_type(&mut self, fill_type: FillType) {
        self.fill_type = fill_type;
    }

    pub fn shadow_enabled(&self) -> bool {
        self.shadow_enabled
    }

    pub fn set_shadow_enabled(&mut self, enabled: bool) {
        self.shadow_enabled = enabled;
    }
}
