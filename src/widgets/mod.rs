// SPDX-License-Identifier: MPL-2.0

//! Custom widgets for the Cascade application.

pub mod cascader;

pub use cascader::{CascaderConfig, CascaderMessage, CascaderState, CascaderView, ExpandTrigger};
