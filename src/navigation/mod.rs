// SPDX-License-Identifier: MPL-2.0
//! Navigation state: active tab, per-tab overlays and session flags.
//!
//! The [`Navigator`] is the only owner of this state. Screens never mutate it
//! directly: they emit events that the application shell turns into calls on
//! the navigator, and the view layer reads the resulting [`Scene`].
//!
//! Each tab keeps its own overlay. Switching tabs never touches any overlay,
//! so returning to a tab shows exactly what was open there before.

pub mod overlay;
pub mod scene;
pub mod session;
pub mod tab;

pub use overlay::{CreatorId, Overlay};
pub use scene::{Scene, TabLayer};
pub use session::{Appearance, Session};
pub use tab::Tab;

/// Owner of all navigation and session state.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    active: Tab,
    overlays: [Overlay; 4],
    session: Session,
}

impl Navigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a navigator with the given appearance and admin mode, as read
    /// from preferences at launch.
    #[must_use]
    pub fn with_preferences(appearance: Appearance, admin_mode: bool) -> Self {
        Self {
            session: Session {
                appearance,
                admin_mode,
                ..Session::default()
            },
            ..Self::default()
        }
    }

    #[must_use]
    pub fn active_tab(&self) -> Tab {
        self.active
    }

    #[must_use]
    pub fn overlay(&self, tab: Tab) -> &Overlay {
        &self.overlays[tab.index()]
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn appearance(&self) -> Appearance {
        self.session.appearance
    }

    /// Resolves what should be rendered for the current state.
    #[must_use]
    pub fn scene(&self) -> Scene {
        scene::resolve(&self.session, self.active, &self.overlays)
    }

    pub fn set_active_tab(&mut self, tab: Tab) {
        if self.active != tab {
            tracing::debug!(from = ?self.active, to = ?tab, "switching tab");
        }
        self.active = tab;
    }

    /// Opens `overlay` on the currently active tab.
    pub fn open_overlay(&mut self, overlay: Overlay) {
        self.open_overlay_on(self.active, overlay);
    }

    /// Opens `overlay` on a specific tab, whether or not it is active.
    pub fn open_overlay_on(&mut self, tab: Tab, overlay: Overlay) {
        tracing::debug!(?tab, overlay = overlay.kind_name(), "opening overlay");
        self.overlays[tab.index()] = overlay;
    }

    /// Resets `tab`'s overlay to none, dropping any parameter.
    pub fn close_overlay(&mut self, tab: Tab) {
        tracing::debug!(?tab, "closing overlay");
        self.overlays[tab.index()] = Overlay::None;
    }

    pub fn login(&mut self, is_new_user: bool) {
        tracing::info!(is_new_user, "user logged in");
        self.session.logged_in = true;
        self.session.onboarding_complete = !is_new_user;
    }

    pub fn complete_onboarding(&mut self) {
        tracing::info!("onboarding completed");
        self.session.onboarding_complete = true;
    }

    pub fn toggle_theme(&mut self) {
        self.session.appearance = self.session.appearance.toggled();
        tracing::debug!(appearance = ?self.session.appearance, "theme toggled");
    }

    /// Ends the session. Tabs and overlays return to their initial state;
    /// appearance and admin mode are kept.
    pub fn logout(&mut self) {
        tracing::info!("user logged out");
        self.active = Tab::Home;
        self.overlays = Default::default();
        self.session = Session {
            appearance: self.session.appearance,
            admin_mode: self.session.admin_mode,
            ..Session::default()
        };
    }

    /// Enables or disables admin mode. Disabling also closes the dashboard.
    pub fn set_admin_mode(&mut self, enabled: bool) {
        self.session.admin_mode = enabled;
        if !enabled {
            self.session.admin_dashboard_open = false;
        }
    }

    /// Shows the admin dashboard. Ignored unless admin mode is on.
    pub fn open_admin_dashboard(&mut self) {
        if self.session.admin_mode {
            tracing::debug!("opening admin dashboard");
            self.session.admin_dashboard_open = true;
        } else {
            tracing::warn!("admin dashboard requested without admin mode");
        }
    }

    pub fn close_admin_dashboard(&mut self) {
        self.session.admin_dashboard_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_in() -> Navigator {
        let mut navigator = Navigator::new();
        navigator.login(false);
        navigator
    }

    #[test]
    fn starts_logged_out_on_home_without_overlays() {
        let navigator = Navigator::new();
        assert_eq!(navigator.active_tab(), Tab::Home);
        assert!(Tab::ALL
            .into_iter()
            .all(|tab| navigator.overlay(tab).is_none()));
        assert_eq!(navigator.scene(), Scene::Login);
    }

    #[test]
    fn open_overlay_targets_active_tab_only() {
        let mut navigator = signed_in();
        navigator.set_active_tab(Tab::Profile);
        navigator.open_overlay(Overlay::Settings);

        assert_eq!(navigator.overlay(Tab::Profile), &Overlay::Settings);
        assert!(navigator.overlay(Tab::Home).is_none());
    }

    #[test]
    fn open_overlay_on_leaves_active_tab_untouched() {
        let mut navigator = signed_in();
        navigator.set_active_tab(Tab::Discover);
        navigator.open_overlay_on(Tab::Profile, Overlay::Wallet);

        assert_eq!(navigator.overlay(Tab::Profile), &Overlay::Wallet);
        assert!(navigator.overlay(Tab::Discover).is_none());
        assert_eq!(navigator.active_tab(), Tab::Discover);
    }

    #[test]
    fn close_overlay_clears_parameter() {
        let mut navigator = signed_in();
        navigator.open_overlay(Overlay::creator("1"));
        navigator.close_overlay(Tab::Home);

        assert_eq!(navigator.overlay(Tab::Home), &Overlay::None);
        assert_eq!(navigator.overlay(Tab::Home).param(), None);
    }

    #[test]
    fn login_as_new_user_requires_onboarding() {
        let mut navigator = Navigator::new();
        navigator.login(true);
        assert_eq!(navigator.scene(), Scene::Onboarding);

        navigator.complete_onboarding();
        assert_eq!(navigator.scene().visible_tab(), Some(Tab::Home));
    }

    #[test]
    fn returning_user_skips_onboarding() {
        let navigator = signed_in();
        assert!(navigator.session().onboarding_complete);
        assert_eq!(navigator.scene().visible_tab(), Some(Tab::Home));
    }

    #[test]
    fn toggle_theme_twice_restores_appearance() {
        let mut navigator = Navigator::new();
        let original = navigator.appearance();
        navigator.toggle_theme();
        assert_ne!(navigator.appearance(), original);
        navigator.toggle_theme();
        assert_eq!(navigator.appearance(), original);
    }

    #[test]
    fn admin_dashboard_requires_admin_mode() {
        let mut navigator = signed_in();
        navigator.open_admin_dashboard();
        assert_ne!(navigator.scene(), Scene::Admin);

        navigator.set_admin_mode(true);
        navigator.open_admin_dashboard();
        assert_eq!(navigator.scene(), Scene::Admin);

        navigator.close_admin_dashboard();
        assert_eq!(navigator.scene().visible_tab(), Some(Tab::Home));
    }

    #[test]
    fn disabling_admin_mode_closes_dashboard() {
        let mut navigator = Navigator::with_preferences(Appearance::Light, true);
        navigator.login(false);
        navigator.open_admin_dashboard();
        navigator.set_admin_mode(false);

        assert!(!navigator.session().admin_dashboard_open);
        navigator.set_admin_mode(true);
        assert_ne!(navigator.scene(), Scene::Admin);
    }

    #[test]
    fn logout_resets_navigation_but_keeps_preferences() {
        let mut navigator = Navigator::with_preferences(Appearance::Dark, true);
        navigator.login(false);
        navigator.set_active_tab(Tab::Profile);
        navigator.open_overlay(Overlay::Settings);
        navigator.open_admin_dashboard();

        navigator.logout();

        assert_eq!(navigator.scene(), Scene::Login);
        assert_eq!(navigator.active_tab(), Tab::Home);
        assert!(navigator.overlay(Tab::Profile).is_none());
        assert_eq!(navigator.appearance(), Appearance::Dark);
        assert!(navigator.session().admin_mode);
        assert!(!navigator.session().admin_dashboard_open);
    }
}
