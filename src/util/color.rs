// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Serde helpers for colors written as unmultiplied `[r, g, b, a]`.
//!
//! `Color32` stores premultiplied alpha, so its own serde form is not what a
//! user means by `[255, 0, 0, 128]`. Use with `#[serde(with = "...")]`.

use egui::Color32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub fn serialize<S: Serializer>(color: &Color32, serializer: S) -> Result<S::Ok, S::Error> {
    color.to_srgba_unmultiplied().serialize(serializer)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color32, D::Error> {
    let [r, g, b, a] = <[u8; 4]>::deserialize(deserializer)?;
    Ok(Color32::from_rgba_unmultiplied(r, g, b, a))
}
