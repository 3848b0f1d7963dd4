// SPDX-License-Identifier: MPL-2.0
//! Primary tabs reachable from the bottom bar.

/// One of the four top-level sections of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Home,
    Discover,
    Create,
    Profile,
}

impl Tab {
    /// All tabs in bottom-bar order.
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Discover, Tab::Create, Tab::Profile];

    /// Position of the tab in [`Tab::ALL`], used to index per-tab storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Discover => 1,
            Tab::Create => 2,
            Tab::Profile => 3,
        }
    }

    /// i18n key of the bottom-bar label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Tab::Home => "tab-home",
            Tab::Discover => "tab-discover",
            Tab::Create => "tab-create",
            Tab::Profile => "tab-profile",
        }
    }

    /// Glyph shown above the label.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Tab::Home => "⌂",
            Tab::Discover => "◎",
            Tab::Create => "+",
            Tab::Profile => "☺",
        }
    }

    /// Whether this tab takes the whole window and hides the bottom bar.
    #[must_use]
    pub fn is_fullscreen(self) -> bool {
        matches!(self, Tab::Create)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_match_declaration_order() {
        for (position, tab) in Tab::ALL.iter().enumerate() {
            assert_eq!(tab.index(), position);
        }
    }

    #[test]
    fn only_create_is_fullscreen() {
        let fullscreen: Vec<Tab> = Tab::ALL
            .into_iter()
            .filter(|tab| tab.is_fullscreen())
            .collect();
        assert_eq!(fullscreen, vec![Tab::Create]);
    }

    #[test]
    fn default_tab_is_home() {
        assert_eq!(Tab::default(), Tab::Home);
    }
}
