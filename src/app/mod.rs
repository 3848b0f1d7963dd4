// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! `App` owns the [`Navigator`], every screen state, localization, toasts and
//! the loaded preferences. Screens report `Event`s; `update` turns them into
//! navigator calls and toasts, and `view` renders the resolved scene.
//!
//! All screen states live for the whole session so that switching tabs never
//! loses what a tab was showing. They are only reset on logout.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{FeedDirection, Flags, Message};

use crate::i18n::fluent::I18n;
use crate::navigation::{Navigator, Scene, Tab};
use crate::ui::design_tokens::sizing;
use crate::ui::notifications;
use crate::ui::theming;
use crate::ui::{
    activity, admin, create, creator_profile, discover, earnings, feed, login, onboarding,
    profile, search, settings, studio, video_editor, wallet,
};
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Overlay screen states of one tab.
///
/// Every tab gets its own set, so an overlay shows what it showed the last
/// time the user was on that tab.
#[derive(Debug, Clone, Default)]
pub struct OverlayScreens {
    pub search: search::State,
    pub activity: activity::State,
    pub settings: settings::State,
    pub creator_profile: creator_profile::State,
    pub video_editor: video_editor::State,
    pub studio: studio::State,
    pub earnings: earnings::State,
    pub wallet: wallet::State,
}

/// State of every screen, kept for the whole session.
#[derive(Debug, Clone, Default)]
pub struct Screens {
    pub login: login::State,
    pub onboarding: onboarding::State,
    pub admin: admin::State,
    pub feed: feed::State,
    pub discover: discover::State,
    pub create: create::State,
    pub profile: profile::State,
    overlays: [OverlayScreens; 4],
}

impl Screens {
    /// Overlay screens hosted by `tab`.
    #[must_use]
    pub fn overlays(&self, tab: Tab) -> &OverlayScreens {
        &self.overlays[tab.index()]
    }

    pub fn overlays_mut(&mut self, tab: Tab) -> &mut OverlayScreens {
        &mut self.overlays[tab.index()]
    }

    /// Whether any drawer is showing a timed success state.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.feed.needs_tick()
            || self
                .overlays
                .iter()
                .any(|overlays| overlays.creator_profile.needs_tick())
    }
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    navigator: Navigator,
    screens: Screens,
    notifications: notifications::Manager,
    config: Config,
    /// Where the language choice is saved. `None` uses the resolved
    /// config directory.
    config_dir: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("scene", &self.navigator.scene())
            .field("locale", &self.i18n.current_locale().to_string())
            .finish_non_exhaustive()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(Config::default(), I18n::default(), &Flags::default())
    }
}

/// Phone-shaped window with a fixed minimum size.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(sizing::WINDOW_WIDTH, sizing::WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(sizing::WINDOW_WIDTH, sizing::WINDOW_WIDTH)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads preferences and localization, then applies CLI overrides.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let mut app = Self::with_config(config, i18n, &flags);

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        (app, Task::none())
    }

    /// Builds the app from already loaded preferences. CLI flags win over
    /// the file.
    pub fn with_config(config: Config, i18n: I18n, flags: &Flags) -> Self {
        let theme_mode = flags.theme.unwrap_or(config.general.theme_mode);
        let admin_mode = flags.admin
            || config
                .session
                .admin_mode
                .unwrap_or(config::DEFAULT_ADMIN_MODE);
        tracing::debug!(?theme_mode, admin_mode, "starting session");

        Self {
            i18n,
            navigator: Navigator::with_preferences(theme_mode.resolve(), admin_mode),
            screens: Screens::default(),
            notifications: notifications::Manager::new(),
            config,
            config_dir: None,
        }
    }

    /// Saves preference changes under `dir` instead of the resolved
    /// config directory.
    #[must_use]
    pub fn with_config_dir(mut self, dir: PathBuf) -> Self {
        self.config_dir = Some(dir);
        self
    }

    #[must_use]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    #[must_use]
    pub fn screens(&self) -> &Screens {
        &self.screens
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        theming::iced_theme(self.navigator.appearance())
    }

    fn subscription(&self) -> Subscription<Message> {
        let scene = self.navigator.scene();
        let recording = scene.visible_tab() == Some(Tab::Create)
            && self.screens.create.is_recording();
        let feed_visible =
            scene.visible_tab() == Some(Tab::Home) && scene.visible_overlay().is_none();

        Subscription::batch([
            subscription::create_recording_subscription(recording),
            subscription::create_tick_subscription(
                self.notifications.has_notifications(),
                self.screens.needs_tick(),
            ),
            subscription::create_keyboard_subscription(feed_visible),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            navigator: &mut self.navigator,
            screens: &mut self.screens,
            notifications: &mut self.notifications,
            config: &mut self.config,
            config_dir: self.config_dir.as_deref(),
        };

        match message {
            Message::Login(message) => update::handle_login(&mut ctx, message),
            Message::Onboarding(message) => update::handle_onboarding(&mut ctx, message),
            Message::Admin(message) => update::handle_admin(&mut ctx, message),
            Message::TabBar(message) => update::handle_tab_bar(&mut ctx, message),
            Message::Feed(message) => update::handle_feed(&mut ctx, message),
            Message::Discover(message) => update::handle_discover(&mut ctx, message),
            Message::Create(message) => update::handle_create(&mut ctx, message),
            Message::Profile(message) => update::handle_profile(&mut ctx, message),
            Message::Search(message) => update::handle_search(&mut ctx, message),
            Message::Activity(message) => update::handle_activity(&mut ctx, message),
            Message::Settings(message) => update::handle_settings(&mut ctx, message),
            Message::CreatorProfile(message) => {
                update::handle_creator_profile(&mut ctx, message);
            }
            Message::VideoEditor(message) => update::handle_video_editor(&mut ctx, message),
            Message::Studio(message) => update::handle_studio(&mut ctx, message),
            Message::Earnings(message) => update::handle_earnings(&mut ctx, message),
            Message::Wallet(message) => update::handle_wallet(&mut ctx, message),
            Message::Notification(message) => ctx.notifications.handle_message(&message),
            Message::FeedKey(direction) => update::handle_feed_key(&mut ctx, direction),
            Message::RecordingTick => {
                update::handle_create(&mut ctx, create::Message::RecordingTick);
            }
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
        }

        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            navigator: &self.navigator,
            screens: &self.screens,
            notifications: &self.notifications,
        })
    }

    /// The scene the window currently shows.
    #[must_use]
    pub fn scene(&self) -> Scene {
        self.navigator.scene()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{Appearance, Overlay};
    use crate::ui::theming::ThemeMode;
    use tempfile::tempdir;

    fn signed_in() -> App {
        let mut app = App::default();
        app.update(Message::Login(login::Message::SwitchMode(login::Mode::LogIn)));
        app.update(Message::Login(login::Message::EmailChanged(
            "learner@example.com".into(),
        )));
        app.update(Message::Login(login::Message::PasswordChanged(
            "Secret#123".into(),
        )));
        app.update(Message::Login(login::Message::Submit));
        app
    }

    #[test]
    fn starts_on_login() {
        assert_eq!(App::default().scene(), Scene::Login);
    }

    #[test]
    fn sign_in_lands_on_home() {
        let app = signed_in();
        assert_eq!(app.scene().visible_tab(), Some(Tab::Home));
    }

    #[test]
    fn cli_flags_override_config() {
        let flags = Flags {
            theme: Some(ThemeMode::Dark),
            admin: true,
            ..Flags::default()
        };
        let app = App::with_config(Config::default(), I18n::default(), &flags);
        assert_eq!(app.navigator().appearance(), Appearance::Dark);
        assert!(app.navigator().session().admin_mode);
    }

    #[test]
    fn profile_settings_button_opens_overlay_on_profile() {
        let mut app = signed_in();
        app.update(Message::TabBar(crate::ui::tab_bar::Message::Select(Tab::Profile)));
        app.update(Message::Profile(profile::Message::OpenSettings));
        assert_eq!(app.navigator().overlay(Tab::Profile), &Overlay::Settings);
        assert!(app.navigator().overlay(Tab::Home).is_none());
    }

    #[test]
    fn settings_shortcuts_replace_the_host_overlay() {
        let mut app = signed_in();
        app.update(Message::TabBar(crate::ui::tab_bar::Message::Select(Tab::Profile)));
        app.update(Message::Profile(profile::Message::OpenSettings));
        app.update(Message::Settings(settings::Message::OpenWallet));
        assert_eq!(app.navigator().overlay(Tab::Profile), &Overlay::Wallet);

        app.update(Message::Wallet(wallet::Message::Back));
        assert!(app.navigator().overlay(Tab::Profile).is_none());
    }

    #[test]
    fn menu_action_raises_a_toast() {
        let mut app = signed_in();
        app.update(Message::Feed(feed::Message::MenuAction(
            crate::catalog::lessons::OverflowAction::Report,
        )));
        assert_eq!(app.notifications().visible_count(), 1);
    }

    #[test]
    fn publishing_returns_home_with_a_toast() {
        let mut app = signed_in();
        app.update(Message::TabBar(crate::ui::tab_bar::Message::Select(Tab::Create)));
        let steps = [
            create::Message::Camera(create::camera::Message::ToggleRecording),
            create::Message::Camera(create::camera::Message::ToggleRecording),
            create::Message::Camera(create::camera::Message::UseRecording),
            create::Message::ToSetup,
            create::Message::Setup(create::setup::Message::SelectCategory(0)),
            create::Message::Setup(create::setup::Message::TitleChanged("Fractions".into())),
            create::Message::Publish,
        ];
        for step in steps {
            app.update(Message::Create(step));
        }
        assert_eq!(app.navigator().active_tab(), Tab::Home);
        assert_eq!(app.notifications().visible_count(), 1);
    }

    #[test]
    fn closing_the_camera_returns_home() {
        let mut app = signed_in();
        app.update(Message::TabBar(crate::ui::tab_bar::Message::Select(Tab::Create)));
        app.update(Message::Create(create::Message::Camera(
            create::camera::Message::Close,
        )));
        assert_eq!(app.navigator().active_tab(), Tab::Home);
        assert_eq!(app.notifications().visible_count(), 0);
    }

    #[test]
    fn editor_publish_closes_overlay_and_activates_home() {
        let mut app = signed_in();
        app.update(Message::TabBar(crate::ui::tab_bar::Message::Select(Tab::Profile)));
        app.update(Message::Profile(profile::Message::OpenSettings));
        app.update(Message::Settings(settings::Message::OpenStudio));
        app.update(Message::Studio(studio::Message::EditVideo));
        assert_eq!(app.navigator().overlay(Tab::Profile), &Overlay::Editor);

        app.update(Message::VideoEditor(video_editor::Message::Publish));
        assert!(app.navigator().overlay(Tab::Profile).is_none());
        assert_eq!(app.navigator().active_tab(), Tab::Home);
    }

    #[test]
    fn creator_link_opens_profile_for_that_creator() {
        let mut app = signed_in();
        app.update(Message::Feed(feed::Message::OpenCreator));
        let expected = app.screens().feed.current().id;
        assert_eq!(
            app.navigator()
                .overlay(Tab::Home)
                .param()
                .map(|id| id.as_str().to_string()),
            Some(expected.to_string())
        );
    }

    #[test]
    fn arrow_keys_move_the_feed() {
        let mut app = signed_in();
        app.update(Message::FeedKey(FeedDirection::Next));
        assert_eq!(app.screens().feed.index(), 1);
        app.update(Message::FeedKey(FeedDirection::Previous));
        assert_eq!(app.screens().feed.index(), 0);
    }

    #[test]
    fn logout_resets_screens_and_keeps_theme() {
        let mut app = signed_in();
        app.update(Message::Settings(settings::Message::ToggleDarkMode));
        app.update(Message::FeedKey(FeedDirection::Next));
        app.update(Message::Settings(settings::Message::LogOut));

        assert_eq!(app.scene(), Scene::Login);
        assert_eq!(app.navigator().appearance(), Appearance::Dark);
        assert_eq!(app.screens().feed.index(), 0);
    }

    #[test]
    fn language_cycle_is_saved() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut app = signed_in().with_config_dir(temp_dir.path().to_path_buf());
        let before = app.i18n.current_locale().clone();

        app.update(Message::Settings(settings::Message::CycleLanguage));

        let after = app.i18n.current_locale().to_string();
        assert_ne!(after, before.to_string());
        assert_eq!(app.config().general.language.as_deref(), Some(after.as_str()));
        let (saved, warning) = config::load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(saved.general.language, Some(after));
    }

    #[test]
    fn failed_language_save_raises_an_error_toast() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let blocker = temp_dir.path().join("not-a-directory");
        std::fs::write(&blocker, "").expect("failed to create file");
        let mut app = signed_in().with_config_dir(blocker);

        app.update(Message::Settings(settings::Message::CycleLanguage));

        let severities: Vec<_> = app
            .notifications()
            .visible()
            .map(notifications::Notification::severity)
            .collect();
        assert_eq!(severities, vec![notifications::Severity::Error]);
    }

    #[test]
    fn each_tab_keeps_its_own_search() {
        let mut app = signed_in();
        app.update(Message::Feed(feed::Message::OpenSearch));
        app.update(Message::Search(search::Message::QueryChanged("calculus".into())));

        app.update(Message::TabBar(crate::ui::tab_bar::Message::Select(Tab::Discover)));
        app.update(Message::Discover(discover::Message::OpenSearch));
        assert_eq!(app.screens().overlays(Tab::Discover).search.query(), "");
        app.update(Message::Search(search::Message::QueryChanged("chem".into())));

        app.update(Message::TabBar(crate::ui::tab_bar::Message::Select(Tab::Home)));
        assert_eq!(app.screens().overlays(Tab::Home).search.query(), "calculus");
        assert_eq!(app.screens().overlays(Tab::Discover).search.query(), "chem");
    }

    #[test]
    fn settings_toggles_stay_with_their_tab() {
        let mut app = signed_in();
        app.update(Message::TabBar(crate::ui::tab_bar::Message::Select(Tab::Profile)));
        app.update(Message::Profile(profile::Message::OpenSettings));
        app.update(Message::Settings(settings::Message::ToggleSoundEffects));

        assert!(!app.screens().overlays(Tab::Profile).settings.sound_effects());
        assert!(app.screens().overlays(Tab::Home).settings.sound_effects());
    }

    #[test]
    fn admin_row_needs_admin_mode() {
        let mut app = signed_in();
        app.update(Message::Settings(settings::Message::OpenAdmin));
        assert!(!matches!(app.scene(), Scene::Admin));

        let flags = Flags {
            admin: true,
            ..Flags::default()
        };
        let mut admin = App::with_config(Config::default(), I18n::default(), &flags);
        admin.navigator.login(false);
        admin.update(Message::Settings(settings::Message::OpenAdmin));
        assert_eq!(admin.scene(), Scene::Admin);
        admin.update(Message::Admin(admin::Message::Exit));
        assert_eq!(admin.scene().visible_tab(), Some(Tab::Home));
    }
}
