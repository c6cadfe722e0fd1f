// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Image file loading.
//!
//! This module decodes image files into RGBA pixels suitable for uploading
//! as an egui texture.

use anyhow::{Context, Result};
use std::path::Path;

/// File extensions offered in the open dialog.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif", "tiff", "tif", "webp"];

/// A decoded image in unmultiplied RGBA8.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Load and decode an image file.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let image = image::open(path).with_context(|| format!("Failed to decode {}", path.display()))?;
    Ok(from_dynamic(image))
}

/// Decode an image from memory, guessing the format from its contents.
pub fn load_image_from_memory(bytes: &[u8]) -> Result<LoadedImage> {
    let image = image::load_from_memory(bytes).context("Failed to decode image data")?;
    Ok(from_dynamic(image))
}

fn from_dynamic(image: image::DynamicImage) -> LoadedImage {
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    LoadedImage {
        width,
        height,
        pixels: rgba.into_raw(),
    }
}
