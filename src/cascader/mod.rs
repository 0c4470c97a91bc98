// SPDX-License-Identifier: MPL-2.0

//! Headless cascading selection engine.
//!
//! A cascader lets the user pick a leaf out of an option tree by drilling
//! down through columns: choosing an option in one column shows its
//! children in the next. Nothing in this module knows about rendering; a
//! view reads [`Cascader::menus`] and the selection, and feeds interactions
//! back through [`OptionRef`] handles.
//!
//! # Example
//!
//! ```
//! use cascade::cascader::{Cascader, CascaderOption, Change, OptionKey};
//!
//! let mut cascader = Cascader::new(vec![CascaderOption::branch(
//!     "Guide",
//!     "guide",
//!     [CascaderOption::leaf("Consistency", "consistency")],
//! )]);
//!
//! cascader.activate(cascader.option_ref(0, 0));
//! let outcome = cascader.activate(cascader.option_ref(1, 0));
//!
//! assert_eq!(
//!     outcome.change(),
//!     Some(&Change::Single(vec![
//!         OptionKey::from("guide"),
//!         OptionKey::from("consistency"),
//!     ]))
//! );
//! assert_eq!(
//!     cascader.format_path(cascader.selected_path(), true),
//!     "Guide / Consistency"
//! );
//! ```

mod engine;
mod error;
mod format;
mod navigation;
mod option;
mod selection;

pub use engine::{Cascader, Outcome};
pub use error::CascaderError;
pub use format::{find_label, format_path, label_for, Summary, LEVEL_SEPARATOR};
pub use navigation::{Menu, Navigation, OptionRef};
pub use option::{CascaderOption, OptionKey};
pub use selection::{Change, Mode, Selection, SelectionPath};
