// SPDX-License-Identifier: MPL-2.0
//! `learnreel` is a short-video learning app built with the Iced GUI
//! framework.
//!
//! The [`navigation`] module holds the tab and overlay controller; [`app`]
//! wires it to the screens in [`ui`], with sample content from [`catalog`],
//! Fluent localization and TOML preferences.

pub mod app;
pub mod catalog;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod navigation;
pub mod ui;

pub use app::config;
