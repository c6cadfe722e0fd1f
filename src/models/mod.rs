// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model: the scene, tools and annotation styles.

pub mod area;
pub mod properties;
pub mod tool;
