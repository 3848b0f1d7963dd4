// SPDX-License-Identifier: MPL-2.0
//! Process-wide session flags. Nothing here is persisted.

/// Light or dark rendering of every screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Appearance::Light => Appearance::Dark,
            Appearance::Dark => Appearance::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Appearance::Dark
    }
}

/// Session flags consulted by the render decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub logged_in: bool,
    pub onboarding_complete: bool,
    /// Exposes the admin dashboard entry point.
    pub admin_mode: bool,
    /// The admin dashboard is showing. Only honoured while `admin_mode` is set.
    pub admin_dashboard_open: bool,
    pub appearance: Appearance,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            logged_in: false,
            onboarding_complete: true,
            admin_mode: false,
            admin_dashboard_open: false,
            appearance: Appearance::Light,
        }
    }
}

impl Session {
    /// Whether the admin dashboard supersedes the tab layout.
    #[must_use]
    pub fn shows_admin(&self) -> bool {
        self.admin_mode && self.admin_dashboard_open
    }
}
