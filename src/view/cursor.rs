// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application-wide cursor overrides.
//!
//! An override is held through a [`CursorGuard`]; dropping the guard removes
//! exactly the entry it pushed, so a guard can never restore a cursor twice
//! or leak an override.

use egui::CursorIcon;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Stack {
    next_id: u64,
    entries: Vec<(u64, CursorIcon)>,
}

/// Shared handle to the cursor override stack.
#[derive(Debug, Clone, Default)]
pub struct CursorOverrides {
    stack: Rc<RefCell<Stack>>,
}

impl CursorOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an override. It stays active until the returned guard is dropped.
    #[must_use = "the override is removed as soon as the guard is dropped"]
    pub fn push(&self, icon: CursorIcon) -> CursorGuard {
        let mut stack = self.stack.borrow_mut();
        let id = stack.next_id;
        stack.next_id += 1;
        stack.entries.push((id, icon));
        CursorGuard {
            stack: Rc::clone(&self.stack),
            id,
        }
    }

    /// The active override, if any.
    pub fn current(&self) -> Option<CursorIcon> {
        self.stack.borrow().entries.last().map(|(_, icon)| *icon)
    }

    #[cfg(test)]
    pub fn depth(&self) -> usize {
        self.stack.borrow().entries.len()
    }
}

/// Keeps a cursor override active while alive.
#[derive(Debug)]
pub struct CursorGuard {
    stack: Rc<RefCell<Stack>>,
    id: u64,
}

impl Drop for CursorGuard {
    fn drop(&mut self) {
        let mut stack = self.stack.borrow_mut();
        if let Some(index) = stack.entries.iter().rposition(|(id, _)| *id == self.id) {
            stack.entries.remove(index);
        }
    }
}
