// SPDX-License-Identifier: MPL-2.0

//! Cascading option selection: a headless engine in [`cascader`] and a COSMIC
//! widget and demo application built on it.

pub mod app;
pub mod cascader;
pub mod config;
pub mod demo;
pub mod helpers;
pub mod i18n;
pub mod pages;
pub mod widgets;
