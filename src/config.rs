// SPDX-License-Identifier: MPL-2.0

use crate::widgets::cascader::{CascaderConfig, ExpandTrigger};
use cosmic::cosmic_config::{self, cosmic_config_derive::CosmicConfigEntry, CosmicConfigEntry};

/// Settings of the playground cascader, persisted between runs.
#[derive(Debug, Clone, CosmicConfigEntry, Eq, PartialEq)]
#[version = 1]
pub struct Config {
    /// Whether options expand on click or on hover
    pub expand_trigger: ExpandTrigger,
    /// Show the full path instead of only the last level
    pub show_all_levels: bool,
    /// Allow selecting several paths
    pub multiple: bool,
    /// Show a count instead of tags when several paths are selected
    pub collapse_tags: bool,
    /// Offer a button that clears the selection
    pub clearable: bool,
    /// Text shown while nothing is selected (empty for the default)
    pub placeholder: String,
    /// JSON option tree to load at startup (empty for the built-in sample)
    pub options_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            expand_trigger: ExpandTrigger::Click,
            show_all_levels: true,
            multiple: false,
            collapse_tags: false,
            clearable: true,
            placeholder: String::new(),
            options_file: String::new(),
        }
    }
}

impl Config {
    /// Builds the widget configuration for the playground cascader.
    pub fn cascader_config(&self) -> CascaderConfig {
        CascaderConfig {
            multiple: self.multiple,
            show_all_levels: self.show_all_levels,
            collapse_tags: self.collapse_tags,
            clearable: self.clearable,
            expand_trigger: self.expand_trigger,
            placeholder: (!self.placeholder.is_empty()).then(|| self.placeholder.clone()),
        }
    }
}
