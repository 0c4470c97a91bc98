// SPDX-License-Identifier: MPL-2.0

//! Cascader widget for picking a leaf out of an option tree.
//!
//! The widget shows the current selection in a display box. Pressing the
//! box opens a popover with cascading columns: choosing an option in one
//! column shows its children in the next, and choosing a leaf commits it.
//!
//! # Example
//!
//! ```ignore
//! use crate::widgets::cascader::{CascaderMessage, CascaderState, CascaderView};
//!
//! // In your app state
//! struct AppModel {
//!     region: CascaderState,
//! }
//!
//! // In your message enum
//! enum Message {
//!     Region(CascaderMessage),
//! }
//!
//! // In your view function
//! fn view(&self) -> Element<'_, Message> {
//!     CascaderView::new(&self.region, Message::Region).into()
//! }
//!
//! // In your update function
//! fn update(&mut self, message: Message) -> Task<Message> {
//!     match message {
//!         Message::Region(msg) => {
//!             if let Some(change) = self.region.update(msg) {
//!                 // React to the new selection
//!             }
//!         }
//!     }
//!     Task::none()
//! }
//! ```

mod message;
mod state;
mod widget;

pub use message::CascaderMessage;
pub use state::{CascaderConfig, CascaderState, ExpandTrigger};
pub use widget::CascaderView;
