// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Canvas area for image display.
//!
//! This module connects the annotation view to egui: it implements the
//! canvas surface the view scrolls, translates egui input into view events,
//! and paints the canvas, the image and the scroll indicators.

use crate::models::area::AnnotationArea;
use crate::view::cursor::{CursorGuard, CursorOverrides};
use crate::view::zoom::WheelEvent;
use crate::view::{AnnotationView, CanvasScene, CanvasSurface, ViewEvent};
use egui::{Color32, CursorIcon, Pos2, Rect, Vec2};

/// Points scrolled per wheel line.
const LINE_SCROLL: f32 = 40.0;
const INDICATOR_THICKNESS: f32 = 4.0;

/// The screen area the canvas is shown in, with its scroll offset.
pub struct CanvasViewport {
    rect: Rect,
    scroll: Vec2,
    cursors: CursorOverrides,
}

impl CanvasViewport {
    pub fn new(cursors: CursorOverrides) -> Self {
        Self {
            rect: Rect::NOTHING,
            scroll: Vec2::ZERO,
            cursors,
        }
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    pub fn cursors(&self) -> &CursorOverrides {
        &self.cursors
    }
}

impl CanvasSurface for CanvasViewport {
    fn viewport(&self) -> Rect {
        self.rect
    }

    fn scroll_offset(&self) -> Vec2 {
        self.scroll
    }

    fn set_scroll_offset(&mut self, offset: Vec2) {
        self.scroll = offset;
    }

    fn override_cursor(&mut self, icon: CursorIcon) -> CursorGuard {
        self.cursors.push(icon)
    }
}

/// What the input translation needs to know about the frame.
#[derive(Debug, Clone, Copy)]
struct InputContext {
    viewport: Rect,
    hover: Option<Pos2>,
    keyboard_free: bool,
}

/// Translate one egui event. Presses and wheel events only count inside the
/// viewport; releases and moves always do so a drag can end anywhere. Key
/// presses are dropped while a text field has focus, key releases never are.
fn translate_event(event: &egui::Event, input: InputContext) -> Option<ViewEvent> {
    match event {
        egui::Event::Key {
            key,
            pressed,
            modifiers,
            ..
        } => {
            if *pressed {
                input.keyboard_free.then_some(ViewEvent::KeyPressed {
                    key: *key,
                    modifiers: *modifiers,
                    pointer: input.hover,
                })
            } else {
                Some(ViewEvent::KeyReleased { key: *key })
            }
        }
        egui::Event::PointerButton {
            pos, button, pressed, ..
        } => {
            if *pressed {
                input.viewport.contains(*pos).then_some(ViewEvent::PointerPressed {
                    button: *button,
                    pos: *pos,
                })
            } else {
                Some(ViewEvent::PointerReleased {
                    button: *button,
                    pos: *pos,
                })
            }
        }
        egui::Event::PointerMoved(pos) => Some(ViewEvent::PointerMoved { pos: *pos }),
        egui::Event::MouseWheel {
            unit, delta, modifiers, ..
        } => {
            let pointer = input.hover.filter(|pos| input.viewport.contains(*pos))?;
            let scale = match unit {
                egui::MouseWheelUnit::Point => 1.0,
                egui::MouseWheelUnit::Line => LINE_SCROLL,
                egui::MouseWheelUnit::Page => input.viewport.height(),
            };
            let mut delta = *delta * scale;
            // Shift turns a vertical wheel into horizontal scrolling.
            if modifiers.shift && !modifiers.command {
                delta = Vec2::new(delta.y, delta.x);
            }
            Some(ViewEvent::Wheel(WheelEvent {
                delta,
                modifiers: *modifiers,
                pointer: Some(pointer),
            }))
        }
        egui::Event::WindowFocused(false) => Some(ViewEvent::FocusLost),
        _ => None,
    }
}

/// Without an image there is nothing to pan or zoom, so only events that can
/// end a drag get through.
fn accepts_without_image(event: &ViewEvent) -> bool {
    !matches!(
        event,
        ViewEvent::KeyPressed { .. } | ViewEvent::PointerPressed { .. } | ViewEvent::Wheel(_)
    )
}

/// Display the canvas and feed this frame's input to the view.
///
/// Returns the hovered position in canvas coordinates.
pub fn show(
    ui: &mut egui::Ui,
    view: &mut AnnotationView,
    area: &AnnotationArea,
    viewport: &mut CanvasViewport,
    texture: Option<&egui::TextureHandle>,
) -> Option<Pos2> {
    let (rect, _response) = ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
    viewport.set_rect(rect);
    view.clamp_scroll(area, viewport);

    let ctx = ui.ctx().clone();
    let input = InputContext {
        viewport: rect,
        hover: ctx.input(|i| i.pointer.hover_pos()),
        keyboard_free: !ctx.wants_keyboard_input(),
    };
    let has_image = area.has_image();
    let events: Vec<ViewEvent> = ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| translate_event(event, input))
            .filter(|event| has_image || accepts_without_image(event))
            .collect()
    });
    for event in events {
        view.handle_event(event, area, viewport);
    }

    let mut painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, Color32::from_gray(40));

    if !has_image {
        show_welcome(&painter, rect);
        return None;
    }

    view.draw_background(&mut painter, area, viewport);

    let transform = view.transform(area, viewport);
    if let Some(texture) = texture {
        painter.image(
            texture.id(),
            transform.map_rect(area.canvas_rect()),
            Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
            Color32::WHITE,
        );
    }
    draw_scroll_indicators(&painter, rect, view.content_size(area), viewport.scroll_offset());

    if let Some(icon) = viewport.cursors().current() {
        ctx.set_cursor_icon(icon);
    }
    if view.is_dragging() {
        ctx.request_repaint();
    }

    input
        .hover
        .filter(|pos| rect.contains(*pos))
        .map(|pos| transform.unmap_pos(pos))
        .filter(|pos| area.canvas_rect().contains(*pos))
}

fn show_welcome(painter: &egui::Painter, rect: Rect) {
    painter.text(
        rect.center() - Vec2::new(0.0, 20.0),
        egui::Align2::CENTER_CENTER,
        "Annotator",
        egui::FontId::proportional(32.0),
        Color32::from_gray(200),
    );
    painter.text(
        rect.center() + Vec2::new(0.0, 20.0),
        egui::Align2::CENTER_CENTER,
        "Open an image to begin annotating (File → Open Image...)",
        egui::FontId::proportional(14.0),
        Color32::from_gray(150),
    );
}

/// Thin bars along the right and bottom edges showing the visible part of
/// the content. Nothing is drawn on an axis that does not scroll.
fn draw_scroll_indicators(painter: &egui::Painter, viewport: Rect, content: Vec2, scroll: Vec2) {
    let color = Color32::from_white_alpha(96);

    if content.x > viewport.width() {
        let length = viewport.width() * viewport.width() / content.x;
        let start = viewport.min.x + scroll.x * viewport.width() / content.x;
        let bar = Rect::from_min_size(
            Pos2::new(start, viewport.max.y - INDICATOR_THICKNESS),
            Vec2::new(length, INDICATOR_THICKNESS),
        );
        painter.rect_filled(bar, 2.0, color);
    }

    if content.y > viewport.height() {
        let length = viewport.height() * viewport.height() / content.y;
        let start = viewport.min.y + scroll.y * viewport.height() / content.y;
        let bar = Rect::from_min_size(
            Pos2::new(viewport.max.x - INDICATOR_THICKNESS, start),
            Vec2::new(INDICATOR_THICKNESS, length),
        );
        painter.rect_filled(bar, 2.0, color);
    }
}
