// SPDX-License-Identifier: MPL-2.0

//! Committed selection state.

use super::error::CascaderError;
use super::option::OptionKey;
use serde::{Deserialize, Serialize};

/// Keys of the options from the root to a selected leaf.
pub type SelectionPath = Vec<OptionKey>;

/// Whether one path or a set of paths can be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Single,
    Multiple,
}

/// Notification emitted when the committed selection changes.
///
/// Carries the whole selection after the change, in the shape of the mode
/// that was active.
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    Single(SelectionPath),
    Multiple(Vec<SelectionPath>),
}

impl Change {
    /// Returns true if the selection is empty after the change.
    pub fn is_empty(&self) -> bool {
        match self {
            Change::Single(path) => path.is_empty(),
            Change::Multiple(paths) => paths.is_empty(),
        }
    }
}

/// The committed selection for both modes.
///
/// Both shapes are kept side by side; the active mode decides which one
/// operations touch. Paths in the multiple selection are unique under
/// element-wise comparison and keep the order they were added in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    path: SelectionPath,
    paths: Vec<SelectionPath>,
}

impl Selection {
    /// Returns the single-mode path.
    pub fn path(&self) -> &[OptionKey] {
        &self.path
    }

    /// Returns the multiple-mode paths.
    pub fn paths(&self) -> &[SelectionPath] {
        &self.paths
    }

    /// Returns true if nothing is selected in `mode`.
    pub fn is_empty(&self, mode: Mode) -> bool {
        match mode {
            Mode::Single => self.path.is_empty(),
            Mode::Multiple => self.paths.is_empty(),
        }
    }

    /// Returns true if `keys` is one of the multiple-mode paths.
    pub fn contains(&self, keys: &[OptionKey]) -> bool {
        self.position(keys).is_some()
    }

    fn position(&self, keys: &[OptionKey]) -> Option<usize> {
        self.paths.iter().position(|p| p.as_slice() == keys)
    }

    /// Replaces the single-mode path.
    pub fn replace(&mut self, keys: SelectionPath) -> Change {
        self.path = keys;
        Change::Single(self.path.clone())
    }

    /// Adds `keys` to the multiple-mode paths, or removes it if present.
    pub fn toggle(&mut self, keys: SelectionPath) -> Change {
        match self.position(&keys) {
            Some(existing) => {
                self.paths.remove(existing);
            }
            None => self.paths.push(keys),
        }
        Change::Multiple(self.paths.clone())
    }

    /// Empties the selection of `mode`.
    pub fn clear(&mut self, mode: Mode) -> Change {
        match mode {
            Mode::Single => self.path.clear(),
            Mode::Multiple => self.paths.clear(),
        }
        self.snapshot(mode)
    }

    /// Returns the current selection of `mode` as a change.
    pub fn snapshot(&self, mode: Mode) -> Change {
        match mode {
            Mode::Single => Change::Single(self.path.clone()),
            Mode::Multiple => Change::Multiple(self.paths.clone()),
        }
    }

    /// Assigns the single-mode path. An empty path means nothing is selected.
    pub fn set_path(&mut self, keys: SelectionPath) {
        self.path = keys;
    }

    /// Assigns the multiple-mode paths.
    ///
    /// Rejects empty paths and paths that appear twice; the current paths
    /// are kept when validation fails.
    pub fn set_paths(&mut self, paths: Vec<SelectionPath>) -> Result<(), CascaderError> {
        for (i, path) in paths.iter().enumerate() {
            if path.is_empty() {
                return Err(CascaderError::EmptyPath);
            }
            if paths[..i].contains(path) {
                return Err(CascaderError::DuplicatePath(join_keys(path)));
            }
        }
        self.paths = paths;
        Ok(())
    }
}

fn join_keys(path: &[OptionKey]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" / ")
}
