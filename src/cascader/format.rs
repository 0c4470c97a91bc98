// SPDX-License-Identifier: MPL-2.0

//! Human-readable text for selections.

use super::option::{CascaderOption, OptionKey};
use super::selection::{Mode, Selection};
use std::fmt;

/// Separator between levels when every level is shown.
pub const LEVEL_SEPARATOR: &str = " / ";

/// Finds the label of the first option matching `key`.
///
/// The search is depth-first: an option is checked before its children,
/// and its children before its next sibling.
pub fn find_label<'a>(options: &'a [CascaderOption], key: &OptionKey) -> Option<&'a str> {
    options.iter().find_map(|option| {
        if option.matches(key) {
            Some(option.label.as_str())
        } else {
            find_label(&option.children, key)
        }
    })
}

/// Resolves a key to its label, falling back to the key itself.
pub fn label_for(options: &[CascaderOption], key: &OptionKey) -> String {
    find_label(options, key)
        .map(str::to_string)
        .unwrap_or_else(|| key.to_string())
}

/// Formats a selected path for display.
///
/// With `show_all_levels` every level is shown, joined by
/// [`LEVEL_SEPARATOR`]. Otherwise only the last level is shown.
pub fn format_path(options: &[CascaderOption], path: &[OptionKey], show_all_levels: bool) -> String {
    if show_all_levels {
        path.iter()
            .map(|key| label_for(options, key))
            .collect::<Vec<_>>()
            .join(LEVEL_SEPARATOR)
    } else {
        path.last()
            .map(|key| label_for(options, key))
            .unwrap_or_default()
    }
}

/// What the collapsed display box should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Summary {
    /// Nothing is selected.
    Placeholder,
    /// The single selected path.
    Single(String),
    /// One entry per selected path.
    Tags(Vec<String>),
    /// Only the number of selected paths.
    Collapsed(usize),
}

impl Summary {
    /// Builds the summary for a selection.
    ///
    /// `collapse` is only consulted in multiple mode.
    pub fn new(
        options: &[CascaderOption],
        selection: &Selection,
        mode: Mode,
        show_all_levels: bool,
        collapse: bool,
    ) -> Self {
        if selection.is_empty(mode) {
            return Summary::Placeholder;
        }

        match mode {
            Mode::Single => Summary::Single(format_path(options, selection.path(), show_all_levels)),
            Mode::Multiple if collapse => Summary::Collapsed(selection.paths().len()),
            Mode::Multiple => Summary::Tags(
                selection
                    .paths()
                    .iter()
                    .map(|path| format_path(options, path, show_all_levels))
                    .collect(),
            ),
        }
    }

    /// Returns true if something is selected.
    pub fn has_selection(&self) -> bool {
        !matches!(self, Summary::Placeholder)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Summary::Placeholder => Ok(()),
            Summary::Single(text) => f.write_str(text),
            Summary::Tags(tags) => f.write_str(&tags.join(", ")),
            Summary::Collapsed(count) => write!(f, "{} selected", count),
        }
    }
}
