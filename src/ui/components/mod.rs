// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across multiple screens.
//!
//! # Components
//!
//! - [`bar_chart`] - Canvas bar chart for the analytics screens
//! - [`edit_panel`] - Clip preview, timeline and editing tools
//! - [`header`] - Screen header with a back button and title
//! - [`post_grid`] - Lesson tiles on profile pages
//! - [`section`] - Titled card grouping dashboard content
//! - [`segmented`] - Row of toggle buttons (ranges, filters, tool tabs)
//! - [`stat_card`] - Headline figure with its change

pub mod bar_chart;
pub mod edit_panel;
pub mod header;
pub mod post_grid;
pub mod section;
pub mod segmented;
pub mod stat_card;
