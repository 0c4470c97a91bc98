// SPDX-License-Identifier: MPL-2.0

//! Messages emitted by the cascader widget.

use crate::cascader::OptionRef;

/// Messages emitted by the cascader widget.
///
/// These should be wrapped by the parent's message type and passed to
/// [`CascaderState::update`](super::CascaderState::update).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascaderMessage {
    /// The display box was pressed.
    Toggle,
    /// The popup was dismissed by pressing outside of it.
    Dismiss,
    /// An option was pressed.
    Activate(OptionRef),
    /// The pointer entered an option.
    Hover(OptionRef),
    /// The clear button was pressed.
    Clear,
}
