// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Zoom policy.
//!
//! The view owns no zoom factor. It forwards zoom steps and wheel events to
//! a [`ZoomPolicy`], which decides whether and how the factor changes.

use egui::{Modifiers, Pos2, Vec2};
use serde::{Deserialize, Serialize};

/// Default step of the zoom shortcuts and of one wheel notch.
pub const ZOOM_STEP: f32 = 0.1;

/// A wheel event, with the delta already converted to points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    pub delta: Vec2,
    pub modifiers: Modifiers,
    pub pointer: Option<Pos2>,
}

/// A zoom factor transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomChange {
    pub from: f32,
    pub to: f32,
}

/// How a zoom policy handled a wheel event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelZoom {
    /// The event was a zoom gesture and changed the factor.
    Zoomed(ZoomChange),
    /// The event was a zoom gesture but the factor is already at its bound.
    Unchanged,
    /// The event is not a zoom gesture.
    Ignored,
}

/// Read access to the current zoom factor.
pub trait ZoomValueProvider {
    fn zoom_value(&self) -> f32;
}

/// Owner of the zoom factor and the rules for changing it.
pub trait ZoomPolicy: ZoomValueProvider {
    /// Step used by the zoom-in and zoom-out actions.
    fn step(&self) -> f32 {
        ZOOM_STEP
    }

    /// Change the factor by `step`. Returns `None` if nothing changed.
    fn zoom(&mut self, step: f32) -> Option<ZoomChange>;

    /// Interpret a wheel event.
    fn wheel_zoom(&mut self, event: &WheelEvent) -> WheelZoom;

    /// Set an absolute factor. Returns `None` if nothing changed.
    fn set_zoom_value(&mut self, value: f32) -> Option<ZoomChange>;
}

/// Bounds and step for [`ViewZoomer`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomLimits {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: 0.1,
            max: 8.0,
            step: ZOOM_STEP,
        }
    }
}

impl ZoomLimits {
    /// Limits with swapped or non-positive bounds repaired.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let min = if self.min > 0.0 { self.min } else { defaults.min };
        let max = if self.max > 0.0 { self.max } else { defaults.max };
        let step = if self.step > 0.0 { self.step } else { defaults.step };
        Self {
            min: min.min(max),
            max: min.max(max),
            step,
        }
    }
}

/// Default zoom policy: additive steps, clamped, rounded to two decimals.
#[derive(Debug, Clone)]
pub struct ViewZoomer {
    factor: f32,
    limits: ZoomLimits,
}

impl Default for ViewZoomer {
    fn default() -> Self {
        Self::new(ZoomLimits::default())
    }
}

impl ViewZoomer {
    pub fn new(limits: ZoomLimits) -> Self {
        let limits = limits.sanitized();
        Self {
            factor: 1.0_f32.clamp(limits.min, limits.max),
            limits,
        }
    }

    fn apply(&mut self, value: f32) -> Option<ZoomChange> {
        let to = round_factor(value).clamp(self.limits.min, self.limits.max);
        if (to - self.factor).abs() < f32::EPSILON {
            return None;
        }
        let change = ZoomChange { from: self.factor, to };
        self.factor = to;
        log::debug!("Zoom {:.2} -> {:.2}", change.from, change.to);
        Some(change)
    }
}

impl ZoomValueProvider for ViewZoomer {
    fn zoom_value(&self) -> f32 {
        self.factor
    }
}

impl ZoomPolicy for ViewZoomer {
    fn step(&self) -> f32 {
        self.limits.step
    }

    fn zoom(&mut self, step: f32) -> Option<ZoomChange> {
        self.apply(self.factor + step)
    }

    fn wheel_zoom(&mut self, event: &WheelEvent) -> WheelZoom {
        if !event.modifiers.command || event.delta.y == 0.0 {
            return WheelZoom::Ignored;
        }
        let step = if event.delta.y > 0.0 {
            self.limits.step
        } else {
            -self.limits.step
        };
        match self.zoom(step) {
            Some(change) => WheelZoom::Zoomed(change),
            None => WheelZoom::Unchanged,
        }
    }

    fn set_zoom_value(&mut self, value: f32) -> Option<ZoomChange> {
        self.apply(value)
    }
}

fn round_factor(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
