// SPDX-License-Identifier: MPL-2.0

//! Drill-down position through the option tree.
//!
//! Columns are never stored. They are derived on demand from the option
//! tree and the path of indices chosen so far, so each column borrows
//! straight from the tree and a column always equals the children of the
//! option chosen one level up.

use super::option::CascaderOption;

/// Handle to one option in one of the visible columns.
///
/// Handles are created by the engine and carry the generation of the option
/// tree they were created against, so a handle kept across a tree
/// replacement is recognized as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OptionRef {
    pub generation: u64,
    /// Column the option is displayed in (0 is the root column).
    pub level: usize,
    /// Position of the option within its column.
    pub index: usize,
}

/// One visible column of options.
#[derive(Debug, Clone, Copy)]
pub struct Menu<'a> {
    /// Column index (0 is the root column).
    pub level: usize,
    /// Options shown in this column.
    pub options: &'a [CascaderOption],
    /// Index of the option chosen in this column while drilling down.
    pub active: Option<usize>,
}

impl<'a> Menu<'a> {
    /// Returns true if the option at `index` is the one chosen in this column.
    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }
}

/// The chosen option index per column, root first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigation {
    path: Vec<usize>,
}

impl Navigation {
    /// Returns the chosen index per column.
    pub fn indices(&self) -> &[usize] {
        &self.path
    }

    /// Returns the number of options chosen so far.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Records `index` as the choice in column `level`.
    ///
    /// Choices in deeper columns are discarded. The caller must have checked
    /// that `level` is a visible column.
    pub fn choose(&mut self, level: usize, index: usize) {
        self.path.truncate(level);
        self.path.push(index);
    }

    /// Drops every choice, leaving only the root column visible.
    pub fn reset(&mut self) {
        self.path.clear();
    }

    /// Derives the visible columns.
    pub fn menus<'a>(&self, roots: &'a [CascaderOption]) -> Vec<Menu<'a>> {
        let mut menus = Vec::with_capacity(self.path.len() + 1);
        let mut column = roots;
        menus.push(Menu {
            level: 0,
            options: column,
            active: self.path.first().copied(),
        });

        for (level, &index) in self.path.iter().enumerate() {
            let Some(option) = column.get(index) else {
                break;
            };
            if option.is_leaf() {
                break;
            }
            column = &option.children;
            menus.push(Menu {
                level: level + 1,
                options: column,
                active: self.path.get(level + 1).copied(),
            });
        }

        menus
    }

    /// Returns the options in column `level`, if that column is visible.
    pub fn column<'a>(
        &self,
        roots: &'a [CascaderOption],
        level: usize,
    ) -> Option<&'a [CascaderOption]> {
        if level > self.path.len() {
            return None;
        }
        let mut column = roots;
        for &index in self.path.iter().take(level) {
            let option = column.get(index)?;
            if option.is_leaf() {
                return None;
            }
            column = &option.children;
        }
        Some(column)
    }

    /// Returns the chosen options, root first.
    pub fn current_path<'a>(&self, roots: &'a [CascaderOption]) -> Vec<&'a CascaderOption> {
        self.prefix(roots, self.path.len())
    }

    /// Returns the first `len` chosen options.
    pub fn prefix<'a>(&self, roots: &'a [CascaderOption], len: usize) -> Vec<&'a CascaderOption> {
        let mut options = Vec::with_capacity(len);
        let mut column = roots;
        for &index in self.path.iter().take(len) {
            let Some(option) = column.get(index) else {
                break;
            };
            options.push(option);
            column = &option.children;
        }
        options
    }
}
