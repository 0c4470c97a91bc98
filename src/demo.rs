// SPDX-License-Identifier: MPL-2.0

//! Option trees bundled with the application, and loading trees from JSON.

use crate::cascader::CascaderOption;
use rust_embed::RustEmbed;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(RustEmbed)]
#[folder = "resources/options/"]
struct Samples;

/// An option tree shipped with the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sample {
    #[default]
    Components,
    Regions,
}

impl Sample {
    pub const ALL: [Sample; 2] = [Sample::Components, Sample::Regions];

    fn file_name(self) -> &'static str {
        match self {
            Sample::Components => "components.json",
            Sample::Regions => "regions.json",
        }
    }

    /// Returns the other sample, for swapping trees at runtime.
    pub fn next(self) -> Self {
        match self {
            Sample::Components => Sample::Regions,
            Sample::Regions => Sample::Components,
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("sample `{0}` is not embedded")]
    MissingSample(&'static str),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid option tree: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parses an option tree from JSON text.
pub fn parse_options(json: &str) -> Result<Vec<CascaderOption>, LoadError> {
    Ok(serde_json::from_str(json)?)
}

/// Loads one of the bundled option trees.
pub fn sample_options(sample: Sample) -> Result<Vec<CascaderOption>, LoadError> {
    let name = sample.file_name();
    let file = Samples::get(name).ok_or(LoadError::MissingSample(name))?;
    Ok(serde_json::from_slice(&file.data)?)
}

/// Reads an option tree from a JSON file.
pub async fn read_options(path: &Path) -> Result<Vec<CascaderOption>, LoadError> {
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    parse_options(&json)
}
