// SPDX-License-Identifier: MPL-2.0
//! Overlays that can be stacked on top of a tab's base screen.

use std::fmt;

/// Identifier of a creator whose profile is shown in the creator overlay.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CreatorId(String);

impl CreatorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CreatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CreatorId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Overlay state of a single tab.
///
/// The parameter travels inside the variant that needs it, so an overlay
/// kind that takes no parameter cannot carry a stale one. The admin
/// dashboard is not an overlay: it is a session-wide switch held by the
/// navigator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    Search,
    Editor,
    Studio,
    Earnings,
    Wallet,
    Notifications,
    Settings,
    /// Another user's profile. `None` falls back to the default profile.
    CreatorProfile(Option<CreatorId>),
}

impl Overlay {
    /// Opens the profile of `id`.
    pub fn creator(id: impl Into<String>) -> Self {
        Overlay::CreatorProfile(Some(CreatorId::new(id)))
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Overlay::None)
    }

    /// The overlay's parameter, if its kind takes one and it was supplied.
    #[must_use]
    pub fn param(&self) -> Option<&CreatorId> {
        match self {
            Overlay::CreatorProfile(id) => id.as_ref(),
            _ => None,
        }
    }

    /// Short name used in logs.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Overlay::None => "none",
            Overlay::Search => "search",
            Overlay::Editor => "editor",
            Overlay::Studio => "studio",
            Overlay::Earnings => "earnings",
            Overlay::Wallet => "wallet",
            Overlay::Notifications => "notifications",
            Overlay::Settings => "settings",
            Overlay::CreatorProfile(_) => "other-profile",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_creator_profile_carries_a_param() {
        assert_eq!(Overlay::Search.param(), None);
        assert_eq!(Overlay::CreatorProfile(None).param(), None);
        assert_eq!(
            Overlay::creator("2").param().map(CreatorId::as_str),
            Some("2")
        );
    }

    #[test]
    fn default_overlay_is_none() {
        assert!(Overlay::default().is_none());
        assert!(!Overlay::Settings.is_none());
    }

    #[test]
    fn kind_names_are_unique() {
        let kinds = [
            Overlay::None,
            Overlay::Search,
            Overlay::Editor,
            Overlay::Studio,
            Overlay::Earnings,
            Overlay::Wallet,
            Overlay::Notifications,
            Overlay::Settings,
            Overlay::CreatorProfile(None),
        ];
        let mut names: Vec<&str> = kinds.iter().map(Overlay::kind_name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), kinds.len());
    }
}
