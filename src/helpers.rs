// SPDX-License-Identifier: MPL-2.0

//! Async helper functions for the Cascade application.
//! These functions wrap loading and clipboard work for use in tasks.

use crate::cascader::CascaderOption;
use crate::demo::{self, Sample};
use std::path::PathBuf;

/// Load an option tree from a JSON file, or a bundled sample when no path is given
pub async fn load_options(path: Option<PathBuf>, fallback: Sample) -> Result<Vec<CascaderOption>, String> {
    match path {
        Some(path) => demo::read_options(&path).await.map_err(|e| e.to_string()),
        None => demo::sample_options(fallback).map_err(|e| e.to_string()),
    }
}

/// Put text on the system clipboard
pub async fn copy_to_clipboard(text: String) -> Result<(), String> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| e.to_string())?;
    clipboard.set_text(text).map_err(|e| e.to_string())
}
