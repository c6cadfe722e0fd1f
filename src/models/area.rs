// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The annotation scene.
//!
//! Holds the canvas geometry and background color that the view paints
//! underneath the loaded image.

use crate::view::CanvasScene;
use egui::{Color32, Pos2, Rect, Vec2};

/// Scene backing the annotation view.
#[derive(Debug, Clone)]
pub struct AnnotationArea {
    canvas_rect: Rect,
    canvas_color: Color32,
    image_file: Option<String>,
}

impl AnnotationArea {
    /// Create an empty scene with the given canvas background color.
    pub fn new(canvas_color: Color32) -> Self {
        Self {
            canvas_rect: Rect::from_min_size(Pos2::ZERO, Vec2::ZERO),
            canvas_color,
            image_file: None,
        }
    }

    /// Resize the canvas to the bounds of a newly loaded image.
    pub fn load_image(&mut self, image_file: String, width: u32, height: u32) {
        self.canvas_rect = Rect::from_min_size(Pos2::ZERO, Vec2::new(width as f32, height as f32));
        self.image_file = Some(image_file);
    }

    pub fn image_file(&self) -> Option<&str> {
        self.image_file.as_deref()
    }

    pub fn has_image(&self) -> bool {
        self.image_file.is_some()
    }

    pub fn set_canvas_color(&mut self, color: Color32) {
        self.canvas_color = color;
    }
}

impl CanvasScene for AnnotationArea {
    fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }

    fn canvas_color(&self) -> Color32 {
        self.canvas_color
    }
}
