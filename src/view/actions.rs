// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Keyboard actions registered on the annotation view.

use egui::{Key, KeyboardShortcut, Modifiers};

/// Action triggered from the keyboard or the View menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAction {
    ZoomIn,
    ZoomOut,
    ResetZoom,
}

impl ViewAction {
    pub const ALL: [ViewAction; 3] = [ViewAction::ZoomIn, ViewAction::ZoomOut, ViewAction::ResetZoom];

    pub fn label(self) -> &'static str {
        match self {
            ViewAction::ZoomIn => "Zoom In",
            ViewAction::ZoomOut => "Zoom Out",
            ViewAction::ResetZoom => "Reset Zoom",
        }
    }

    pub fn shortcut(self) -> KeyboardShortcut {
        let key = match self {
            ViewAction::ZoomIn => Key::Plus,
            ViewAction::ZoomOut => Key::Minus,
            ViewAction::ResetZoom => Key::Num0,
        };
        KeyboardShortcut::new(Modifiers::COMMAND, key)
    }

    /// Action bound to a key press, if any. Shift is tolerated because many
    /// layouts need it to type `+`.
    pub fn for_key(key: Key, modifiers: Modifiers) -> Option<ViewAction> {
        if !modifiers.command || modifiers.alt {
            return None;
        }
        ViewAction::ALL
            .into_iter()
            .find(|action| action.shortcut().logical_key == key)
    }
}
