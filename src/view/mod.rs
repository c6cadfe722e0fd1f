// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation view: panning, zooming and background painting.
//!
//! The view is written against small capability traits instead of a GUI
//! toolkit. A toolkit adapter turns raw input into [`ViewEvent`]s and
//! implements [`CanvasSurface`]; the view decides what the events mean.
//!
//! Drag-to-pan is started by the middle mouse button or by holding space.
//! Both triggers feed one drag session: the session starts with the first
//! trigger, keeps running while any trigger is held, and ends when the last
//! one is released. The pan cursor is overridden exactly once per session.

pub mod actions;
pub mod cursor;
pub mod keys;
pub mod painter;
pub mod zoom;

use crate::util::geometry::{self, ViewTransform};
use actions::ViewAction;
use cursor::CursorGuard;
use egui::{Color32, CursorIcon, Key, Modifiers, PointerButton, Pos2, Rect, Vec2};
use keys::KeyTracker;
use painter::{CanvasPainter, CheckerboardPainter, PaintTarget};
use zoom::{ViewZoomer, WheelEvent, WheelZoom, ZoomChange, ZoomPolicy, ZoomValueProvider};

/// Scene shown by the view.
pub trait CanvasScene {
    /// Canvas bounds in scene coordinates.
    fn canvas_rect(&self) -> Rect;
    fn canvas_color(&self) -> Color32;
}

/// Toolkit widget the view scrolls and decorates.
pub trait CanvasSurface {
    /// Screen rectangle the canvas is shown in.
    fn viewport(&self) -> Rect;
    fn scroll_offset(&self) -> Vec2;
    fn set_scroll_offset(&mut self, offset: Vec2);
    /// Override the application cursor until the guard is dropped.
    fn override_cursor(&mut self, icon: CursorIcon) -> CursorGuard;
}

/// Input delivered to the view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewEvent {
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
        /// Pointer position at the time of the press, if it is known.
        pointer: Option<Pos2>,
    },
    KeyReleased {
        key: Key,
    },
    PointerPressed {
        button: PointerButton,
        pos: Pos2,
    },
    PointerReleased {
        button: PointerButton,
        pos: Pos2,
    },
    PointerMoved {
        pos: Pos2,
    },
    Wheel(WheelEvent),
    FocusLost,
}

/// Whether the view used an event or left it for the default handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    Consumed,
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragTrigger {
    MiddleButton,
    SpaceKey,
}

#[derive(Debug)]
struct DragSession {
    last_pos: Option<Pos2>,
    middle_button: bool,
    space_key: bool,
    _cursor: CursorGuard,
}

impl DragSession {
    fn set(&mut self, trigger: DragTrigger, active: bool) {
        match trigger {
            DragTrigger::MiddleButton => self.middle_button = active,
            DragTrigger::SpaceKey => self.space_key = active,
        }
    }

    fn is_held(&self) -> bool {
        self.middle_button || self.space_key
    }
}

/// Pan/zoom view over a [`CanvasScene`].
pub struct AnnotationView<Z = ViewZoomer, P = CheckerboardPainter> {
    zoomer: Z,
    painter: P,
    keys: KeyTracker,
    drag: Option<DragSession>,
    last_pointer: Option<Pos2>,
}

impl Default for AnnotationView {
    fn default() -> Self {
        Self::new(ViewZoomer::default(), CheckerboardPainter::default())
    }
}

impl<Z: ZoomPolicy, P: CanvasPainter> AnnotationView<Z, P> {
    pub fn new(zoomer: Z, painter: P) -> Self {
        Self {
            zoomer,
            painter,
            keys: KeyTracker::new(),
            drag: None,
            last_pointer: None,
        }
    }

    /// Read access to the zoom factor for status displays.
    pub fn zoom_value_provider(&self) -> &dyn ZoomValueProvider {
        &self.zoomer
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Current canvas-to-screen mapping.
    pub fn transform(&self, scene: &impl CanvasScene, surface: &impl CanvasSurface) -> ViewTransform {
        ViewTransform::new(
            surface.viewport(),
            scene.canvas_rect(),
            self.zoomer.zoom_value(),
            surface.scroll_offset(),
        )
    }

    /// Size of the zoomed canvas in screen points.
    pub fn content_size(&self, scene: &impl CanvasScene) -> Vec2 {
        scene.canvas_rect().size() * self.zoomer.zoom_value()
    }

    /// Route one input event.
    pub fn handle_event(
        &mut self,
        event: ViewEvent,
        scene: &impl CanvasScene,
        surface: &mut impl CanvasSurface,
    ) -> EventResponse {
        match event {
            ViewEvent::KeyPressed { key, modifiers, pointer } => {
                let first_press = self.keys.press(key);
                if let Some(action) = ViewAction::for_key(key, modifiers) {
                    self.trigger(action, scene, surface);
                    return EventResponse::Consumed;
                }
                if first_press && key == Key::Space {
                    let pos = pointer.or(self.last_pointer);
                    self.enable_dragging(DragTrigger::SpaceKey, pos, surface);
                }
                EventResponse::Ignored
            }
            ViewEvent::KeyReleased { key } => {
                self.keys.release(key);
                if key == Key::Space && !self.keys.is_space_pressed() {
                    self.disable_dragging(DragTrigger::SpaceKey);
                }
                EventResponse::Ignored
            }
            ViewEvent::PointerPressed { button, pos } => {
                self.last_pointer = Some(pos);
                if button == PointerButton::Middle {
                    self.enable_dragging(DragTrigger::MiddleButton, Some(pos), surface);
                    return EventResponse::Consumed;
                }
                EventResponse::Ignored
            }
            ViewEvent::PointerReleased { button, pos } => {
                self.last_pointer = Some(pos);
                if button == PointerButton::Middle {
                    self.disable_dragging(DragTrigger::MiddleButton);
                    return EventResponse::Consumed;
                }
                EventResponse::Ignored
            }
            ViewEvent::PointerMoved { pos } => {
                self.last_pointer = Some(pos);
                if self.drag.is_some() {
                    self.scroll_to(pos, scene, surface);
                    return EventResponse::Consumed;
                }
                EventResponse::Ignored
            }
            ViewEvent::Wheel(wheel) => {
                if let Some(pos) = wheel.pointer {
                    self.last_pointer = Some(pos);
                }
                match self.zoomer.wheel_zoom(&wheel) {
                    WheelZoom::Zoomed(change) => {
                        let anchor = wheel.pointer.unwrap_or_else(|| surface.viewport().center());
                        self.keep_anchor(change, anchor, scene, surface);
                    }
                    WheelZoom::Unchanged => {}
                    WheelZoom::Ignored => {
                        let scroll = surface.scroll_offset() - wheel.delta;
                        self.set_scroll(scroll, scene, surface);
                    }
                }
                EventResponse::Consumed
            }
            ViewEvent::FocusLost => {
                self.keys.clear();
                if self.drag.take().is_some() {
                    log::debug!("Drag ended by focus loss");
                }
                EventResponse::Ignored
            }
        }
    }

    /// Run a view action, anchored at the viewport center.
    pub fn trigger(&mut self, action: ViewAction, scene: &impl CanvasScene, surface: &mut impl CanvasSurface) {
        let change = match action {
            ViewAction::ZoomIn => self.zoomer.zoom(self.zoomer.step()),
            ViewAction::ZoomOut => self.zoomer.zoom(-self.zoomer.step()),
            ViewAction::ResetZoom => self.zoomer.set_zoom_value(1.0),
        };
        if let Some(change) = change {
            let anchor = surface.viewport().center();
            self.keep_anchor(change, anchor, scene, surface);
        }
    }

    /// Set an absolute zoom factor, anchored at the viewport center.
    pub fn set_zoom_value(&mut self, value: f32, scene: &impl CanvasScene, surface: &mut impl CanvasSurface) {
        if let Some(change) = self.zoomer.set_zoom_value(value) {
            let anchor = surface.viewport().center();
            self.keep_anchor(change, anchor, scene, surface);
        }
    }

    /// Re-clamp the scroll offset, e.g. after the viewport or scene changed
    /// size.
    pub fn clamp_scroll(&self, scene: &impl CanvasScene, surface: &mut impl CanvasSurface) {
        let scroll = surface.scroll_offset();
        self.set_scroll(scroll, scene, surface);
    }

    /// Paint the canvas background for the current frame.
    pub fn draw_background(
        &self,
        target: &mut dyn PaintTarget,
        scene: &impl CanvasScene,
        surface: &impl CanvasSurface,
    ) {
        let rect = self.transform(scene, surface).map_rect(scene.canvas_rect());
        self.painter.paint(target, rect, scene.canvas_color());
    }

    fn enable_dragging(&mut self, trigger: DragTrigger, pos: Option<Pos2>, surface: &mut impl CanvasSurface) {
        match self.drag.as_mut() {
            Some(session) => session.set(trigger, true),
            None => {
                let mut session = DragSession {
                    last_pos: pos,
                    middle_button: false,
                    space_key: false,
                    _cursor: surface.override_cursor(CursorIcon::Move),
                };
                session.set(trigger, true);
                self.drag = Some(session);
                log::debug!("Drag started by {:?}", trigger);
            }
        }
    }

    fn disable_dragging(&mut self, trigger: DragTrigger) {
        let Some(session) = self.drag.as_mut() else {
            return;
        };
        session.set(trigger, false);
        if !session.is_held() {
            self.drag = None;
            log::debug!("Drag ended by {:?} release", trigger);
        }
    }

    fn scroll_to(&mut self, pos: Pos2, scene: &impl CanvasScene, surface: &mut impl CanvasSurface) {
        let Some(session) = self.drag.as_mut() else {
            return;
        };
        let last = session.last_pos.replace(pos);
        if let Some(last) = last {
            let delta = pos - last;
            let scroll = surface.scroll_offset() - delta;
            self.set_scroll(scroll, scene, surface);
        }
    }

    fn keep_anchor(
        &self,
        change: ZoomChange,
        anchor: Pos2,
        scene: &impl CanvasScene,
        surface: &mut impl CanvasSurface,
    ) {
        let viewport = surface.viewport();
        let canvas = scene.canvas_rect();
        let before = ViewTransform::new(viewport, canvas, change.from, surface.scroll_offset());
        let canvas_pos = before.unmap_pos(anchor);
        let scroll = geometry::scroll_for_anchor(viewport, canvas, change.to, canvas_pos, anchor);
        self.set_scroll(scroll, scene, surface);
    }

    fn set_scroll(&self, scroll: Vec2, scene: &impl CanvasScene, surface: &mut impl CanvasSurface) {
        let clamped = geometry::clamp_scroll(scroll, surface.viewport().size(), self.content_size(scene));
        surface.set_scroll_offset(clamped);
    }
}

#[cfg(test)]
mod tests {
    use super::cursor::CursorOverrides;
    use super::painter::tests::RecordingTarget;
    use super::*;

    struct TestScene {
        rect: Rect,
        color: Color32,
    }

    impl CanvasScene for TestScene {
        fn canvas_rect(&self) -> Rect {
            self.rect
        }

        fn canvas_color(&self) -> Color32 {
            self.color
        }
    }

    fn big_scene() -> TestScene {
        TestScene {
            rect: Rect::from_min_size(Pos2::ZERO, Vec2::new(4000.0, 3000.0)),
            color: Color32::WHITE,
        }
    }

    struct TestSurface {
        viewport: Rect,
        scroll: Vec2,
        cursors: CursorOverrides,
        cursor_requests: usize,
    }

    impl TestSurface {
        fn new() -> Self {
            Self {
                viewport: Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0)),
                scroll: Vec2::new(500.0, 500.0),
                cursors: CursorOverrides::new(),
                cursor_requests: 0,
            }
        }
    }

    impl CanvasSurface for TestSurface {
        fn viewport(&self) -> Rect {
            self.viewport
        }

        fn scroll_offset(&self) -> Vec2 {
            self.scroll
        }

        fn set_scroll_offset(&mut self, offset: Vec2) {
            self.scroll = offset;
        }

        fn override_cursor(&mut self, icon: CursorIcon) -> CursorGuard {
            self.cursor_requests += 1;
            self.cursors.push(icon)
        }
    }

    /// Zoom policy that records what it was asked to do.
    #[derive(Default)]
    struct RecordingZoomer {
        steps: Vec<f32>,
        wheels: Vec<WheelEvent>,
    }

    impl ZoomValueProvider for RecordingZoomer {
        fn zoom_value(&self) -> f32 {
            1.0
        }
    }

    impl ZoomPolicy for RecordingZoomer {
        fn zoom(&mut self, step: f32) -> Option<ZoomChange> {
            self.steps.push(step);
            None
        }

        fn wheel_zoom(&mut self, event: &WheelEvent) -> WheelZoom {
            self.wheels.push(*event);
            WheelZoom::Unchanged
        }

        fn set_zoom_value(&mut self, _value: f32) -> Option<ZoomChange> {
            None
        }
    }

    fn press_key(key: Key, modifiers: Modifiers) -> ViewEvent {
        ViewEvent::KeyPressed {
            key,
            modifiers,
            pointer: None,
        }
    }

    fn middle_press(x: f32, y: f32) -> ViewEvent {
        ViewEvent::PointerPressed {
            button: PointerButton::Middle,
            pos: Pos2::new(x, y),
        }
    }

    fn middle_release(x: f32, y: f32) -> ViewEvent {
        ViewEvent::PointerReleased {
            button: PointerButton::Middle,
            pos: Pos2::new(x, y),
        }
    }

    fn moved(x: f32, y: f32) -> ViewEvent {
        ViewEvent::PointerMoved { pos: Pos2::new(x, y) }
    }

    #[test]
    fn test_middle_button_drag_scrolls_by_negated_delta() {
        let scene = big_scene();
        let mut surface = TestSurface::new();
        let mut view: AnnotationView = AnnotationView::default();

        assert_eq!(view.handle_event(middle_press(100.0, 100.0), &scene, &mut surface), EventResponse::Consumed);
        assert!(view.is_dragging());
        assert_eq!(surface.cursors.current(), Some(CursorIcon::Move));

        assert_eq!(view.handle_event(moved(110.0, 95.0), &scene, &mut surface), EventResponse::Consumed);
        assert_eq!(surface.scroll, Vec2::new(490.0, 505.0));

        view.handle_event(moved(130.0, 95.0), &scene, &mut surface);
        assert_eq!(surface.scroll, Vec2::new(470.0, 505.0));

        assert_eq!(view.handle_event(middle_release(130.0, 95.0), &scene, &mut surface), EventResponse::Consumed);
        assert!(!view.is_dragging());
        assert_eq!(surface.cursors.current(), None);
        assert_eq!(surface.scroll, Vec2::new(470.0, 505.0));
    }

    #[test]
    fn test_press_release_without_moves_keeps_scroll() {
        let scene = big_scene();
        let mut surface = TestSurface::new();
        let mut view: AnnotationView = AnnotationView::default();

        view.handle_event(middle_press(10.0, 10.0), &scene, &mut surface);
        view.handle_event(middle_release(300.0, 300.0), &scene, &mut surface);

        assert!(!view.is_dragging());
        assert_eq!(surface.scroll, Vec2::new(500.0, 500.0));
        assert_eq!(surface.cursors.depth(), 0);
    }

    #[test]
    fn test_moves_are_ignored_when_idle() {
        let scene = big_scene();
        let mut surface = TestSurface::new();
        let mut view: AnnotationView = AnnotationView::default();

        assert_eq!(view.handle_event(moved(50.0, 50.0), &scene, &mut surface), EventResponse::Ignored);
        assert_eq!(surface.scroll, Vec2::new(500.0, 500.0));

        let primary = ViewEvent::PointerPressed {
            button: PointerButton::Primary,
            pos: Pos2::new(50.0, 50.0),
        };
        assert_eq!(view.handle_event(primary, &scene, &mut surface), EventResponse::Ignored);
        assert!(!view.is_dragging());
    }

    #[test]
    fn test_space_drag_uses_last_pointer_position() {
        let scene = big_scene();
        let mut surface = TestSurface::new();
        let mut view: AnnotationView = AnnotationView::default();

        view.handle_event(moved(200.0, 200.0), &scene, &mut surface);
        view.handle_event(press_key(Key::Space, Modifiers::NONE), &scene, &mut surface);
        assert!(view.is_dragging());

        view.handle_event(moved(180.0, 230.0), &scene, &mut surface);
        assert_eq!(surface.scroll, Vec2::new(520.0, 470.0));

        view.handle_event(ViewEvent::KeyReleased { key: Key::Space }, &scene, &mut surface);
        assert!(!view.is_dragging());
        assert_eq!(surface.cursors.depth(), 0);
    }

    #[test]
    fn test_space_without_pointer_waits_for_first_move() {
        let scene = big_scene();
        let mut surface = TestSurface::new();
        let mut view: AnnotationView = AnnotationView::default();

        view.handle_event(press_key(Key::Space, Modifiers::NONE), &scene, &mut surface);
        view.handle_event(moved(300.0, 300.0), &scene, &mut surface);
        assert_eq!(surface.scroll, Vec2::new(500.0, 500.0));

        view.handle_event(moved(310.0, 300.0), &scene, &mut surface);
        assert_eq!(surface.scroll, Vec2::new(490.0, 500.0));
    }

    #[test]
    fn test_key_repeat_does_not_restart_drag() {
        let scene = big_scene();
        let mut surface = TestSurface::new();
        let mut view: AnnotationView = AnnotationView::default();

        view.handle_event(moved(100.0, 100.0), &scene, &mut surface);
        view.handle_event(press_key(Key::Space, Modifiers::NONE), &scene, &mut surface);
        view.handle_event(moved(90.0, 100.0), &scene, &mut surface);
        // A repeat must not reset the last position to the stale pointer.
        view.handle_event(press_key(Key::Space, Modifiers::NONE), &scene, &mut surface);
        view.handle_event(moved(80.0, 100.0), &scene, &mut surface);

        assert_eq!(surface.scroll, Vec2::new(520.0, 500.0));
        assert_eq!(surface.cursor_requests, 1);
    }

    #[test]
    fn test_overlapping_triggers_push_cursor_once() {
        let scene = big_scene();
        let mut surface = TestSurface::new();
        let mut view: AnnotationView = AnnotationView::default();

        view.handle_event(moved(100.0, 100.0), &scene, &mut surface);
        view.handle_event(press_key(Key::Space, Modifiers::NONE), &scene, &mut surface);
        view.handle_event(middle_press(100.0, 100.0), &scene, &mut surface);
        assert_eq!(surface.cursor_requests, 1);
        assert_eq!(surface.cursors.depth(), 1);

        // Releasing space keeps the middle-button drag alive.
        view.handle_event(ViewEvent::KeyReleased { key: Key::Space }, &scene, &mut surface);
        assert!(view.is_dragging());
        view.handle_event(moved(90.0, 90.0), &scene, &mut surface);
        assert_eq!(surface.scroll, Vec2::new(510.0, 510.0));

        view.handle_event(middle_release(90.0, 90.0), &scene, &mut surface);
        assert!(!view.is_dragging());
        assert_eq!(surface.cursors.depth(), 0);
    }

    #[test]
    fn test_focus_loss_ends_drag_and_releases_keys() {
        let scene = big_scene();
        let mut surface = TestSurface::new();
        let mut view: AnnotationView = AnnotationView::default();

        view.handle_event(press_key(Key::Space, Modifiers::NONE), &scene, &mut surface);
        view.handle_event(ViewEvent::FocusLost, &scene, &mut surface);
        assert!(!view.is_dragging());
        assert_eq!(surface.cursors.depth(), 0);

        // Space is logically up again, so the next press starts a new drag.
        view.handle_event(press_key(Key::Space, Modifiers::NONE), &scene, &mut surface);
        assert!(view.is_dragging());
        assert_eq!(surface.cursor_requests, 2);
    }

    #[test]
    fn test_release_without_drag_is_harmless() {
        let scene = big_scene();
        let mut surface = TestSurface::new();
        let mut view: AnnotationView = AnnotationView::default();

        view.handle_event(middle_release(0.0, 0.0), &scene, &mut surface);
        view.handle_event(ViewEvent::KeyReleased { key: Key::Space }, &scene, &mut surface);

        assert!(!view.is_dragging());
        assert_eq!(surface.cursor_requests, 0);
    }

    #[test]
    fn test_zoom_shortcuts_step_in_order() {
        let scene = big_scene();
        let mut surface = TestSurface::new();
        let mut view = AnnotationView::new(RecordingZoomer::default(), CheckerboardPainter::default());

        let zoom_in = press_key(Key::Plus, Modifiers::COMMAND);
        assert_eq!(view.handle_event(zoom_in, &scene, &mut surface), EventResponse::Consumed);
        view.handle_event(ViewEvent::KeyReleased { key: Key::Plus }, &scene, &mut surface);
        view.handle_event(zoom_in, &scene, &mut surface);
        view.handle_event(press_key(Key::Minus, Modifiers::COMMAND), &scene, &mut surface);

        assert_eq!(view.zoomer.steps, vec![0.1, 0.1, -0.1]);
    }

    #[test]
    fn test_plain_plus_is_not_a_shortcut() {
        let scene = big_scene();
        let mut surface = TestSurface::new();
        let mut view = AnnotationView::new(RecordingZoomer::default(), CheckerboardPainter::default());

        let response = view.handle_event(press_key(Key::Plus, Modifiers::NONE), &scene, &mut surface);

        assert_eq!(response, EventResponse::Ignored);
        assert!(view.zoomer.steps.is_empty());
    }

    #[test]
    fn test_wheel_is_forwarded_to_zoom_policy() {
        let scene = big_scene();
        let mut surface = TestSurface::new();
        let mut view = AnnotationView::new(RecordingZoomer::default(), CheckerboardPainter::default());

        let wheel = WheelEvent {
            delta: Vec2::new(0.0, 40.0),
            modifiers: Modifiers::COMMAND,
            pointer: Some(Pos2::new(10.0, 20.0)),
        };
        view.handle_event(ViewEvent::Wheel(wheel), &scene, &mut surface);

        assert_eq!(view.zoomer.wheels, vec![wheel]);
        assert_eq!(surface.scroll, Vec2::new(500.0, 500.0));
    }

    #[test]
    fn test_plain_wheel_scrolls() {
        let scene = big_scene();
        let mut surface = TestSurface::new();
        let mut view: AnnotationView = AnnotationView::default();

        let wheel = WheelEvent {
            delta: Vec2::new(0.0, -40.0),
            modifiers: Modifiers::NONE,
            pointer: None,
        };
        view.handle_event(ViewEvent::Wheel(wheel), &scene, &mut surface);

        assert_eq!(surface.scroll, Vec2::new(500.0, 540.0));
        assert_eq!(view.zoom_value_provider().zoom_value(), 1.0);
    }

    #[test]
    fn test_zoom_keeps_viewport_center_fixed() {
        let scene = big_scene();
        let mut surface = TestSurface::new();
        let mut view: AnnotationView = AnnotationView::default();

        let center = surface.viewport.center();
        let before = view.transform(&scene, &surface).unmap_pos(center);

        view.handle_event(press_key(Key::Plus, Modifiers::COMMAND), &scene, &mut surface);
        assert_eq!(view.zoom_value_provider().zoom_value(), 1.1);

        let after = view.transform(&scene, &surface).map_pos(before);
        assert!((after - center).length() < 0.01);
    }

    #[test]
    fn test_wheel_zoom_keeps_point_under_pointer_fixed() {
        let scene = big_scene();
        let mut surface = TestSurface::new();
        let mut view: AnnotationView = AnnotationView::default();

        let pointer = Pos2::new(200.0, 150.0);
        let before = view.transform(&scene, &surface).unmap_pos(pointer);

        let wheel = WheelEvent {
            delta: Vec2::new(0.0, 40.0),
            modifiers: Modifiers::COMMAND,
            pointer: Some(pointer),
        };
        assert_eq!(view.handle_event(ViewEvent::Wheel(wheel), &scene, &mut surface), EventResponse::Consumed);
        assert_eq!(view.zoom_value_provider().zoom_value(), 1.1);

        let after = view.transform(&scene, &surface).map_pos(before);
        assert!((after - pointer).length() < 0.01);
        assert!((surface.scroll - Vec2::new(570.0, 565.0)).length() < 0.01);
    }

    #[test]
    fn test_reset_shortcut_restores_unit_zoom_and_clamps_scroll() {
        let scene = big_scene();
        let mut surface = TestSurface::new();
        surface.scroll = Vec2::new(3200.0, 2400.0);
        let mut view: AnnotationView = AnnotationView::default();

        let zoom_in = press_key(Key::Plus, Modifiers::COMMAND);
        view.handle_event(zoom_in, &scene, &mut surface);
        view.handle_event(zoom_in, &scene, &mut surface);
        assert_eq!(view.zoom_value_provider().zoom_value(), 1.2);
        assert!(surface.scroll.x > 3200.0);

        let reset = press_key(Key::Num0, Modifiers::COMMAND);
        assert_eq!(view.handle_event(reset, &scene, &mut surface), EventResponse::Consumed);
        assert_eq!(view.zoom_value_provider().zoom_value(), 1.0);

        let max = geometry::max_scroll(surface.viewport.size(), view.content_size(&scene));
        assert!(surface.scroll.x <= max.x && surface.scroll.y <= max.y);
        assert!((surface.scroll - Vec2::new(3200.0, 2400.0)).length() < 0.01);
    }

    #[test]
    fn test_zoom_shortcuts_use_configured_step() {
        let scene = big_scene();
        let mut surface = TestSurface::new();
        let limits = zoom::ZoomLimits { min: 0.1, max: 8.0, step: 0.25 };
        let mut view = AnnotationView::new(ViewZoomer::new(limits), CheckerboardPainter::default());

        view.handle_event(press_key(Key::Plus, Modifiers::COMMAND), &scene, &mut surface);
        assert_eq!(view.zoom_value_provider().zoom_value(), 1.25);

        view.handle_event(press_key(Key::Minus, Modifiers::COMMAND), &scene, &mut surface);
        view.handle_event(press_key(Key::Minus, Modifiers::COMMAND), &scene, &mut surface);
        assert_eq!(view.zoom_value_provider().zoom_value(), 0.75);
    }

    #[test]
    fn test_drag_scroll_is_clamped() {
        let scene = big_scene();
        let mut surface = TestSurface::new();
        let mut view: AnnotationView = AnnotationView::default();

        view.handle_event(middle_press(0.0, 0.0), &scene, &mut surface);
        view.handle_event(moved(2000.0, 2000.0), &scene, &mut surface);
        assert_eq!(surface.scroll, Vec2::ZERO);

        view.handle_event(moved(-10_000.0, -10_000.0), &scene, &mut surface);
        assert_eq!(surface.scroll, Vec2::new(3200.0, 2400.0));
    }

    #[test]
    fn test_background_is_delegated_to_painter() {
        let scene = TestScene {
            rect: Rect::from_min_size(Pos2::ZERO, Vec2::new(400.0, 200.0)),
            color: Color32::LIGHT_BLUE,
        };
        let mut surface = TestSurface::new();
        surface.scroll = Vec2::ZERO;
        let view: AnnotationView = AnnotationView::default();
        let mut target = RecordingTarget::new(surface.viewport);

        view.draw_background(&mut target, &scene, &surface);

        let expected = Rect::from_min_size(Pos2::new(200.0, 200.0), Vec2::new(400.0, 200.0));
        assert_eq!(target.fills, vec![(expected, Color32::LIGHT_BLUE)]);
    }
}
