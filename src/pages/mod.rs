// SPDX-License-Identifier: MPL-2.0

//! Page view modules for the Cascade application.
//! Each module contains the view logic for a specific page.

pub mod gallery;
pub mod playground;
pub mod settings;
pub mod widgets;
