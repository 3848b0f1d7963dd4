// SPDX-License-Identifier: MPL-2.0
//! User interface screens and shared widgets.
//!
//! Every screen follows the same Elm-style contract: a `State`, a `Message`,
//! an `update` returning an `Event` for the shell, and a `view` taking a
//! `ViewContext`. Screens never touch navigation state; the shell turns
//! their events into [`crate::navigation::Navigator`] calls.
//!
//! # Full-window screens
//!
//! - [`login`] - Sign in and sign up
//! - [`onboarding`] - Welcome carousel and interest picker
//! - [`admin`] - Moderation dashboard
//!
//! # Tab screens
//!
//! - [`feed`] - Vertical lesson feed with comments and support sheets
//! - [`discover`] - Trending lessons and categories
//! - [`create`] - Record, edit and publish flow
//! - [`profile`] - The user's own profile
//!
//! # Overlays
//!
//! - [`search`], [`activity`], [`settings`], [`creator_profile`],
//!   [`video_editor`], [`studio`], [`earnings`], [`wallet`]
//!
//! # Shared Infrastructure
//!
//! - [`tab_bar`] - Bottom navigation bar
//! - [`gifting`] - Gift drawer opened from creator profiles
//! - [`components`] - Reusable widgets (header, charts, segmented control)
//! - [`state`] - Small shared state types
//! - [`styles`] - Centralized styling (buttons, containers, sliders)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light and dark color schemes
//! - [`notifications`] - Toast notification system for user feedback

pub mod activity;
pub mod admin;
pub mod components;
pub mod create;
pub mod creator_profile;
pub mod design_tokens;
pub mod discover;
pub mod earnings;
pub mod feed;
pub mod gifting;
pub mod login;
pub mod notifications;
pub mod onboarding;
pub mod profile;
pub mod search;
pub mod settings;
pub mod state;
pub mod studio;
pub mod styles;
pub mod tab_bar;
pub mod theming;
pub mod video_editor;
pub mod wallet;
