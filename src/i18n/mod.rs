// SPDX-License-Identifier: MPL-2.0
//! Localization using the Fluent system.
//!
//! Translation files are embedded from `assets/i18n/`. The locale comes from
//! the CLI, then the config file, then the OS, falling back to en-US.
//! Sample content (lesson titles, creator names) is not translated.

pub mod fluent;
