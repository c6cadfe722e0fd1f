// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Canvas background painting.

use egui::{Color32, Pos2, Rect, Vec2};

/// Something rectangles can be filled on, in screen coordinates.
pub trait PaintTarget {
    fn fill_rect(&mut self, rect: Rect, color: Color32);

    /// Region that is actually visible. Painting outside it is wasted.
    fn clip_rect(&self) -> Rect;
}

impl PaintTarget for egui::Painter {
    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        self.rect_filled(rect, 0.0, color);
    }

    fn clip_rect(&self) -> Rect {
        egui::Painter::clip_rect(self)
    }
}

/// Paints the canvas background.
pub trait CanvasPainter {
    fn paint(&self, target: &mut dyn PaintTarget, rect: Rect, color: Color32);
}

/// Fills opaque canvases with their color and shows translucent ones over a
/// checkerboard.
#[derive(Debug, Clone)]
pub struct CheckerboardPainter {
    tile_size: f32,
    light: Color32,
    dark: Color32,
}

impl Default for CheckerboardPainter {
    fn default() -> Self {
        Self {
            tile_size: 8.0,
            light: Color32::from_gray(255),
            dark: Color32::from_gray(204),
        }
    }
}

impl CheckerboardPainter {
    fn paint_checkerboard(&self, target: &mut dyn PaintTarget, rect: Rect) {
        let visible = rect.intersect(target.clip_rect());
        if !visible.is_positive() {
            return;
        }

        target.fill_rect(visible, self.light);

        // Tiles are aligned to the canvas origin so they scroll with it.
        let size = self.tile_size;
        let first_col = ((visible.min.x - rect.min.x) / size).floor() as i64;
        let last_col = ((visible.max.x - rect.min.x) / size).ceil() as i64;
        let first_row = ((visible.min.y - rect.min.y) / size).floor() as i64;
        let last_row = ((visible.max.y - rect.min.y) / size).ceil() as i64;

        for row in first_row..last_row {
            for col in first_col..last_col {
                if (row + col) % 2 == 0 {
                    continue;
                }
                let min = Pos2::new(rect.min.x + col as f32 * size, rect.min.y + row as f32 * size);
                let tile = Rect::from_min_size(min, Vec2::splat(size)).intersect(visible);
                if tile.is_positive() {
                    target.fill_rect(tile, self.dark);
                }
            }
        }
    }
}

impl CanvasPainter for CheckerboardPainter {
    fn paint(&self, target: &mut dyn PaintTarget, rect: Rect, color: Color32) {
        if color.a() < u8::MAX {
            self.paint_checkerboard(target, rect);
        }
        if color.a() > 0 {
            target.fill_rect(rect, color);
        }
    }
}
