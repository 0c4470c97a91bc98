// SPDX-License-Identifier: MPL-2.0

//! Input validation errors for the cascader engine.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CascaderError {
    #[error("option reference belongs to a replaced option tree")]
    StaleReference,

    #[error("no option at level {level}, index {index}")]
    OutOfRange { level: usize, index: usize },

    #[error("option `{0}` is not reachable from the root column")]
    Unreachable(String),

    #[error("option `{0}` is disabled")]
    Disabled(String),

    #[error("option `{0}` has children and cannot be selected")]
    NotALeaf(String),

    #[error("selection path is empty")]
    EmptyPath,

    #[error("path `{0}` is selected more than once")]
    DuplicatePath(String),
}
