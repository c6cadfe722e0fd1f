// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Logical key state.
//!
//! Operating systems repeat key-press events while a key is held. The
//! tracker keeps the set of keys that are logically down so callers can
//! react to the up/down transitions only.

use egui::Key;
use std::collections::HashSet;

/// Set of keys currently held down.
#[derive(Debug, Default)]
pub struct KeyTracker {
    down: HashSet<Key>,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press. Returns `true` if the key was not already down.
    pub fn press(&mut self, key: Key) -> bool {
        self.down.insert(key)
    }

    /// Record a key release. Returns `true` if the key was down.
    pub fn release(&mut self, key: Key) -> bool {
        self.down.remove(&key)
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.down.contains(&key)
    }

    pub fn is_space_pressed(&self) -> bool {
        self.is_down(Key::Space)
    }

    /// Forget every held key, e.g. when the window loses focus and the
    /// matching releases will never arrive.
    pub fn clear(&mut self) {
        self.down.clear();
    }
}
