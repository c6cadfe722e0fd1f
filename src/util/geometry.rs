// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides the mapping between canvas coordinates and screen
//! coordinates for a zoomed and scrolled viewport.

use egui::{Pos2, Rect, Vec2};

/// Maps canvas coordinates to screen coordinates.
///
/// `screen = canvas * zoom + translation`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub zoom: f32,
    pub translation: Vec2,
}

impl ViewTransform {
    /// Transform for `canvas` shown at `zoom` inside `viewport`, scrolled by
    /// `scroll`. A canvas smaller than the viewport is centered on that axis.
    pub fn new(viewport: Rect, canvas: Rect, zoom: f32, scroll: Vec2) -> Self {
        let padding = centering_padding(viewport.size(), canvas.size() * zoom);
        let translation = viewport.min.to_vec2() + padding - scroll - canvas.min.to_vec2() * zoom;
        Self { zoom, translation }
    }

    /// Canvas point to screen point.
    pub fn map_pos(&self, pos: Pos2) -> Pos2 {
        (pos.to_vec2() * self.zoom + self.translation).to_pos2()
    }

    /// Canvas rect to screen rect.
    pub fn map_rect(&self, rect: Rect) -> Rect {
        Rect::from_min_max(self.map_pos(rect.min), self.map_pos(rect.max))
    }

    /// Screen point to canvas point.
    pub fn unmap_pos(&self, pos: Pos2) -> Pos2 {
        let zoom = self.zoom.max(f32::EPSILON);
        ((pos.to_vec2() - self.translation) / zoom).to_pos2()
    }
}

/// Offset that centers content smaller than the viewport, zero otherwise.
fn centering_padding(viewport: Vec2, content: Vec2) -> Vec2 {
    ((viewport - content) * 0.5).max(Vec2::ZERO)
}

/// Largest scroll offset that keeps the viewport inside the content.
pub fn max_scroll(viewport: Vec2, content: Vec2) -> Vec2 {
    (content - viewport).max(Vec2::ZERO)
}

/// Clamp a scroll offset to `[0, max_scroll]` on each axis.
pub fn clamp_scroll(scroll: Vec2, viewport: Vec2, content: Vec2) -> Vec2 {
    let max = max_scroll(viewport, content);
    Vec2::new(scroll.x.clamp(0.0, max.x), scroll.y.clamp(0.0, max.y))
}

/// Scroll offset that puts canvas point `canvas_pos` under screen point
/// `anchor` at the given zoom. The result is not clamped.
pub fn scroll_for_anchor(viewport: Rect, canvas: Rect, zoom: f32, canvas_pos: Pos2, anchor: Pos2) -> Vec2 {
    let padding = centering_padding(viewport.size(), canvas.size() * zoom);
    viewport.min.to_vec2() + padding - canvas.min.to_vec2() * zoom + canvas_pos.to_vec2() * zoom
        - anchor.to_vec2()
}
