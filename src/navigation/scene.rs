// SPDX-License-Identifier: MPL-2.0
//! Render decision table.
//!
//! [`resolve`] turns navigator state into a [`Scene`], the single value the
//! view layer matches on. Rows are checked in order:
//!
//! 1. logged out: login screen only
//! 2. onboarding incomplete: onboarding screen only
//! 3. admin mode with the dashboard open: admin screen only
//! 4. otherwise every tab as a layer, the active one visible, each with its
//!    own overlay; the bottom bar is hidden while Create is active

use super::overlay::Overlay;
use super::session::Session;
use super::tab::Tab;

/// One tab in the layered tab composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabLayer {
    pub tab: Tab,
    pub overlay: Overlay,
    pub visible: bool,
}

/// What the window shows right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scene {
    Login,
    Onboarding,
    Admin,
    Tabs {
        active: Tab,
        /// One layer per tab, in [`Tab::ALL`] order.
        layers: Vec<TabLayer>,
        show_tab_bar: bool,
    },
}

impl Scene {
    /// The overlay drawn above the visible tab, if any.
    #[must_use]
    pub fn visible_overlay(&self) -> Option<&Overlay> {
        match self {
            Scene::Tabs { layers, .. } => layers
                .iter()
                .find(|layer| layer.visible)
                .map(|layer| &layer.overlay)
                .filter(|overlay| !overlay.is_none()),
            _ => None,
        }
    }

    /// The tab whose base screen is visible, if tabs are showing.
    #[must_use]
    pub fn visible_tab(&self) -> Option<Tab> {
        match self {
            Scene::Tabs { active, .. } => Some(*active),
            _ => None,
        }
    }
}

pub(super) fn resolve(session: &Session, active: Tab, overlays: &[Overlay; 4]) -> Scene {
    if !session.logged_in {
        return Scene::Login;
    }
    if !session.onboarding_complete {
        return Scene::Onboarding;
    }
    if session.shows_admin() {
        return Scene::Admin;
    }

    let layers = Tab::ALL
        .into_iter()
        .map(|tab| TabLayer {
            tab,
            overlay: overlays[tab.index()].clone(),
            visible: tab == active,
        })
        .collect();

    Scene::Tabs {
        active,
        layers,
        show_tab_bar: !active.is_fullscreen(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logged_in() -> Session {
        Session {
            logged_in: true,
            ..Session::default()
        }
    }

    #[test]
    fn login_row_wins_over_everything() {
        let session = Session {
            logged_in: false,
            onboarding_complete: false,
            admin_mode: true,
            admin_dashboard_open: true,
            ..Session::default()
        };
        let scene = resolve(&session, Tab::Home, &Default::default());
        assert_eq!(scene, Scene::Login);
    }

    #[test]
    fn onboarding_row_precedes_admin() {
        let session = Session {
            onboarding_complete: false,
            admin_mode: true,
            admin_dashboard_open: true,
            ..logged_in()
        };
        assert_eq!(
            resolve(&session, Tab::Home, &Default::default()),
            Scene::Onboarding
        );
    }

    #[test]
    fn tabs_scene_has_one_visible_layer() {
        let scene = resolve(&logged_in(), Tab::Profile, &Default::default());
        let Scene::Tabs { layers, .. } = scene else {
            panic!("expected tab layout");
        };
        assert_eq!(layers.len(), 4);
        let visible: Vec<Tab> = layers
            .iter()
            .filter(|layer| layer.visible)
            .map(|layer| layer.tab)
            .collect();
        assert_eq!(visible, vec![Tab::Profile]);
    }

    #[test]
    fn inactive_overlay_is_kept_but_not_visible() {
        let mut overlays: [Overlay; 4] = Default::default();
        overlays[Tab::Home.index()] = Overlay::Search;
        let scene = resolve(&logged_in(), Tab::Discover, &overlays);

        assert_eq!(scene.visible_overlay(), None);
        let Scene::Tabs { layers, .. } = &scene else {
            panic!("expected tab layout");
        };
        assert_eq!(layers[Tab::Home.index()].overlay, Overlay::Search);
    }

    #[test]
    fn tab_bar_hidden_only_on_create() {
        for tab in Tab::ALL {
            let Scene::Tabs { show_tab_bar, .. } =
                resolve(&logged_in(), tab, &Default::default())
            else {
                panic!("expected tab layout");
            };
            assert_eq!(show_tab_bar, tab != Tab::Create);
        }
    }
}
