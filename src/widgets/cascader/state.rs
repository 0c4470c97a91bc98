// SPDX-License-Identifier: MPL-2.0

//! State for the cascader widget.

use super::message::CascaderMessage;
use crate::cascader::{Cascader, CascaderOption, Change, Mode, Summary};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Pointer interaction that drills into an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExpandTrigger {
    #[default]
    Click,
    Hover,
}

/// Behavior of one cascader instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascaderConfig {
    /// Allow selecting several paths.
    pub multiple: bool,
    /// Show every level of a path instead of only the last one.
    pub show_all_levels: bool,
    /// Show a count instead of one tag per path in multiple mode.
    pub collapse_tags: bool,
    /// Offer a clear button while something is selected.
    pub clearable: bool,
    pub expand_trigger: ExpandTrigger,
    /// Text shown while nothing is selected. Uses a localized default when unset.
    pub placeholder: Option<String>,
}

impl Default for CascaderConfig {
    fn default() -> Self {
        Self {
            multiple: false,
            show_all_levels: true,
            collapse_tags: false,
            clearable: false,
            expand_trigger: ExpandTrigger::Click,
            placeholder: None,
        }
    }
}

impl CascaderConfig {
    pub fn mode(&self) -> Mode {
        if self.multiple {
            Mode::Multiple
        } else {
            Mode::Single
        }
    }
}

/// State for the cascader widget.
///
/// This state is owned by the parent component and passed to the widget.
#[derive(Debug, Clone, Default)]
pub struct CascaderState {
    /// The selection engine.
    pub cascader: Cascader,
    config: CascaderConfig,
    open: bool,
}

impl CascaderState {
    /// Creates a closed cascader over `options`.
    pub fn new(options: impl Into<Arc<[CascaderOption]>>, config: CascaderConfig) -> Self {
        Self {
            cascader: Cascader::new(options).with_mode(config.mode()),
            config,
            open: false,
        }
    }

    pub fn config(&self) -> &CascaderConfig {
        &self.config
    }

    /// Replaces the configuration. Selections of both modes are kept.
    pub fn set_config(&mut self, config: CascaderConfig) {
        self.cascader.set_mode(config.mode());
        self.config = config;
    }

    /// Returns true if the popup with the columns is shown.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Shows the popup, starting again from the root column.
    pub fn open(&mut self) {
        self.open = true;
        self.cascader.reset_navigation();
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Summarizes the selection according to the configuration.
    pub fn summary(&self) -> Summary {
        self.cascader
            .summary(self.config.show_all_levels, self.config.collapse_tags)
    }

    /// Returns true if the clear button should be shown.
    pub fn show_clear(&self) -> bool {
        self.config.clearable && !self.cascader.selection().is_empty(self.cascader.mode())
    }

    /// Applies a widget message.
    ///
    /// Returns the change notification when the selection changed.
    pub fn update(&mut self, message: CascaderMessage) -> Option<Change> {
        match message {
            CascaderMessage::Toggle => {
                if self.open {
                    self.close();
                } else {
                    self.open();
                }
                None
            }
            CascaderMessage::Dismiss => {
                self.close();
                None
            }
            CascaderMessage::Activate(target) => {
                let outcome = self.cascader.activate(target);
                if outcome.closes_popup() {
                    self.close();
                }
                outcome.into_change()
            }
            CascaderMessage::Hover(target) => {
                // Hovering only drills into branches; leaves still need a click.
                if self.config.expand_trigger == ExpandTrigger::Hover
                    && self
                        .cascader
                        .resolve(target)
                        .is_ok_and(CascaderOption::is_branch)
                {
                    self.cascader.expand(target);
                }
                None
            }
            CascaderMessage::Clear => Some(self.cascader.clear()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cascader::OptionKey;

    fn options() -> Vec<CascaderOption> {
        vec![
            CascaderOption::branch(
                "Guide",
                "guide",
                [
                    CascaderOption::leaf("Consistency", "consistency"),
                    CascaderOption::leaf("Feedback", "feedback"),
                ],
            ),
            CascaderOption::leaf("Resources", "resources"),
        ]
    }

    #[test]
    fn single_commit_closes_popup() {
        let mut state = CascaderState::new(options(), CascaderConfig::default());
        state.update(CascaderMessage::Toggle);
        assert!(state.is_open());

        let target = state.cascader.option_ref(0, 0);
        assert_eq!(state.update(CascaderMessage::Activate(target)), None);
        assert!(state.is_open());

        let target = state.cascader.option_ref(1, 1);
        let change = state.update(CascaderMessage::Activate(target));
        assert_eq!(
            change,
            Some(Change::Single(vec![
                OptionKey::from("guide"),
                OptionKey::from("feedback")
            ]))
        );
        assert!(!state.is_open());
        assert_eq!(state.summary(), Summary::Single("Guide / Feedback".to_string()));
    }

    #[test]
    fn multiple_commit_keeps_popup_open() {
        let config = CascaderConfig {
            multiple: true,
            collapse_tags: true,
            ..CascaderConfig::default()
        };
        let mut state = CascaderState::new(options(), config);
        state.open();

        let target = state.cascader.option_ref(0, 1);
        state.update(CascaderMessage::Activate(target));
        assert!(state.is_open());
        assert_eq!(state.summary(), Summary::Collapsed(1));
    }

    #[test]
    fn opening_resets_navigation() {
        let mut state = CascaderState::new(options(), CascaderConfig::default());
        state.open();
        state.update(CascaderMessage::Activate(state.cascader.option_ref(0, 0)));
        assert_eq!(state.cascader.menus().len(), 2);

        state.update(CascaderMessage::Dismiss);
        assert!(!state.is_open());
        assert_eq!(state.cascader.menus().len(), 2);

        state.update(CascaderMessage::Toggle);
        assert_eq!(state.cascader.menus().len(), 1);
    }

    #[test]
    fn hover_only_expands_in_hover_mode() {
        let mut state = CascaderState::new(options(), CascaderConfig::default());
        state.open();
        state.update(CascaderMessage::Hover(state.cascader.option_ref(0, 0)));
        assert_eq!(state.cascader.menus().len(), 1);

        state.set_config(CascaderConfig {
            expand_trigger: ExpandTrigger::Hover,
            ..CascaderConfig::default()
        });
        state.update(CascaderMessage::Hover(state.cascader.option_ref(0, 0)));
        assert_eq!(state.cascader.menus().len(), 2);

        let change = state.update(CascaderMessage::Hover(state.cascader.option_ref(1, 0)));
        assert_eq!(change, None);
        assert!(state.cascader.selected_path().is_empty());
    }

    #[test]
    fn clear_button_visibility() {
        let config = CascaderConfig {
            clearable: true,
            ..CascaderConfig::default()
        };
        let mut state = CascaderState::new(options(), config);
        assert!(!state.show_clear());

        state.open();
        state.update(CascaderMessage::Activate(state.cascader.option_ref(0, 1)));
        assert!(state.show_clear());

        let change = state.update(CascaderMessage::Clear);
        assert_eq!(change, Some(Change::Single(vec![])));
        assert!(!state.show_clear());
    }
}
