// SPDX-License-Identifier: MPL-2.0

//! The cascader engine: option tree, navigation and selection together.

use super::error::CascaderError;
use super::format::{self, Summary};
use super::navigation::{Menu, Navigation, OptionRef};
use super::option::{CascaderOption, OptionKey};
use super::selection::{Change, Mode, Selection, SelectionPath};
use std::sync::Arc;

/// Result of an interaction with the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Nothing changed.
    Ignored(CascaderError),
    /// Navigation moved; the selection is untouched.
    Expanded,
    /// The selection changed.
    Committed {
        change: Change,
        /// Set for single-mode commits, which end the interaction.
        close: bool,
    },
}

impl Outcome {
    /// Returns the change notification, if the selection changed.
    pub fn change(&self) -> Option<&Change> {
        match self {
            Outcome::Committed { change, .. } => Some(change),
            _ => None,
        }
    }

    /// Consumes the outcome and returns the change notification, if any.
    pub fn into_change(self) -> Option<Change> {
        match self {
            Outcome::Committed { change, .. } => Some(change),
            _ => None,
        }
    }

    /// Returns true if the rendering layer should close the popup.
    pub fn closes_popup(&self) -> bool {
        matches!(self, Outcome::Committed { close: true, .. })
    }
}

/// Headless cascading selector.
///
/// The option tree is shared and never mutated; [`Cascader::set_options`]
/// is the only way to change it. Every operation runs to completion and
/// produces at most one [`Change`].
#[derive(Debug, Clone)]
pub struct Cascader {
    options: Arc<[CascaderOption]>,
    generation: u64,
    navigation: Navigation,
    selection: Selection,
    mode: Mode,
}

impl Default for Cascader {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Cascader {
    /// Creates a single-mode cascader over `options`.
    pub fn new(options: impl Into<Arc<[CascaderOption]>>) -> Self {
        Self {
            options: options.into(),
            generation: 0,
            navigation: Navigation::default(),
            selection: Selection::default(),
            mode: Mode::Single,
        }
    }

    /// Sets the selection mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switches the selection mode. Both selections are kept.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Returns the root options.
    pub fn options(&self) -> &[CascaderOption] {
        &self.options
    }

    /// Returns the generation of the current option tree.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replaces the option tree.
    ///
    /// Navigation goes back to the root column and earlier [`OptionRef`]s
    /// become stale. The selection is kept: it is made of keys, which stay
    /// meaningful across trees.
    pub fn set_options(&mut self, options: impl Into<Arc<[CascaderOption]>>) {
        self.options = options.into();
        self.generation = self.generation.wrapping_add(1);
        self.navigation.reset();
        tracing::info!(
            generation = self.generation,
            roots = self.options.len(),
            "option tree replaced"
        );
    }

    /// Returns the visible columns, root first.
    pub fn menus(&self) -> Vec<Menu<'_>> {
        self.navigation.menus(&self.options)
    }

    /// Returns the options chosen while drilling down, root first.
    pub fn current_path(&self) -> Vec<&CascaderOption> {
        self.navigation.current_path(&self.options)
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    /// Creates a handle to the option at `index` in column `level`.
    pub fn option_ref(&self, level: usize, index: usize) -> OptionRef {
        OptionRef {
            generation: self.generation,
            level,
            index,
        }
    }

    /// Looks up the option behind a handle.
    pub fn resolve(&self, target: OptionRef) -> Result<&CascaderOption, CascaderError> {
        if target.generation != self.generation {
            return Err(CascaderError::StaleReference);
        }
        self.navigation
            .column(&self.options, target.level)
            .and_then(|column| column.get(target.index))
            .ok_or(CascaderError::OutOfRange {
                level: target.level,
                index: target.index,
            })
    }

    fn resolve_enabled(&self, target: OptionRef) -> Result<&CascaderOption, CascaderError> {
        let option = self.resolve(target)?;
        if option.disabled {
            return Err(CascaderError::Disabled(option.label.clone()));
        }
        Ok(option)
    }

    /// Drills into the option behind `target`.
    ///
    /// Deeper columns are dropped; the option's children become the next
    /// column when it has any. The selection is never touched.
    pub fn expand(&mut self, target: OptionRef) -> Outcome {
        if let Err(err) = self.resolve_enabled(target) {
            return self.ignore(err);
        }
        self.navigation.choose(target.level, target.index);
        tracing::debug!(level = target.level, index = target.index, "expanded");
        Outcome::Expanded
    }

    /// Commits the leaf behind `target`.
    ///
    /// The committed path is the choice in every column above the leaf's
    /// column, followed by the leaf.
    pub fn select_leaf(&mut self, target: OptionRef) -> Outcome {
        let keys = match self.resolve_enabled(target) {
            Ok(option) if option.is_branch() => {
                let err = CascaderError::NotALeaf(option.label.clone());
                return self.ignore(err);
            }
            Ok(option) => {
                let mut keys: SelectionPath = self
                    .navigation
                    .prefix(&self.options, target.level)
                    .into_iter()
                    .map(CascaderOption::key)
                    .collect();
                keys.push(option.key());
                keys
            }
            Err(err) => return self.ignore(err),
        };
        self.commit(keys)
    }

    /// Commits an explicit root-to-leaf path.
    ///
    /// Each option is matched by key against the column it would appear in,
    /// so equal options from a rebuilt tree are accepted. Paths that leave
    /// the current tree are ignored.
    pub fn select_path<'a>(&mut self, path: impl IntoIterator<Item = &'a CascaderOption>) -> Outcome {
        let mut keys = SelectionPath::new();
        let mut column: &[CascaderOption] = &self.options;
        let mut last = None;

        for requested in path {
            let key = requested.key();
            let Some(option) = column.iter().find(|option| option.matches(&key)) else {
                return self.ignore(CascaderError::Unreachable(requested.label.clone()));
            };
            if option.disabled {
                return self.ignore(CascaderError::Disabled(option.label.clone()));
            }
            keys.push(key);
            column = &option.children;
            last = Some(option);
        }

        match last {
            None => return self.ignore(CascaderError::EmptyPath),
            Some(leaf) if leaf.is_branch() => {
                let err = CascaderError::NotALeaf(leaf.label.clone());
                return self.ignore(err);
            }
            Some(_) => {}
        }
        self.commit(keys)
    }

    /// Handles a click on an option: branches expand, leaves commit.
    pub fn activate(&mut self, target: OptionRef) -> Outcome {
        let is_branch = match self.resolve_enabled(target) {
            Ok(option) => option.is_branch(),
            Err(err) => return self.ignore(err),
        };
        if is_branch {
            self.expand(target)
        } else {
            self.select_leaf(target)
        }
    }

    fn commit(&mut self, keys: SelectionPath) -> Outcome {
        let (change, close) = match self.mode {
            Mode::Single => (self.selection.replace(keys), true),
            Mode::Multiple => (self.selection.toggle(keys), false),
        };
        tracing::info!(mode = ?self.mode, "selection committed");
        Outcome::Committed { change, close }
    }

    fn ignore(&self, err: CascaderError) -> Outcome {
        match err {
            CascaderError::Disabled(_) => {}
            _ => tracing::warn!(%err, "interaction ignored"),
        }
        Outcome::Ignored(err)
    }

    /// Empties the selection of the active mode. Navigation is kept.
    pub fn clear(&mut self) -> Change {
        tracing::info!(mode = ?self.mode, "selection cleared");
        self.selection.clear(self.mode)
    }

    /// Returns to the root column without touching the selection.
    pub fn reset_navigation(&mut self) {
        self.navigation.reset();
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns the single-mode path.
    pub fn selected_path(&self) -> &[OptionKey] {
        self.selection.path()
    }

    /// Returns the multiple-mode paths.
    pub fn selected_paths(&self) -> &[SelectionPath] {
        self.selection.paths()
    }

    /// Assigns the single-mode path from outside, e.g. for a preset value.
    pub fn set_selected_path(&mut self, path: SelectionPath) {
        self.selection.set_path(path);
    }

    /// Assigns the multiple-mode paths from outside.
    pub fn set_selected_paths(&mut self, paths: Vec<SelectionPath>) -> Result<(), CascaderError> {
        self.selection.set_paths(paths)
    }

    /// Returns the current selection of the active mode.
    pub fn snapshot(&self) -> Change {
        self.selection.snapshot(self.mode)
    }

    /// Formats a path against this cascader's option tree.
    pub fn format_path(&self, path: &[OptionKey], show_all_levels: bool) -> String {
        format::format_path(&self.options, path, show_all_levels)
    }

    /// Summarizes the selection of the active mode for display.
    pub fn summary(&self, show_all_levels: bool, collapse: bool) -> Summary {
        Summary::new(
            &self.options,
            &self.selection,
            self.mode,
            show_all_levels,
            collapse,
        )
    }
}
