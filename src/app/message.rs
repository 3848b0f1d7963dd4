// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{
    activity, admin, create, creator_profile, discover, earnings, feed, login, notifications,
    onboarding, profile, search, settings, studio, tab_bar, video_editor, wallet,
};
use crate::ui::theming::ThemeMode;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// screen messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Login(login::Message),
    Onboarding(onboarding::Message),
    Admin(admin::Message),
    TabBar(tab_bar::Message),
    Feed(feed::Message),
    Discover(discover::Message),
    Create(create::Message),
    Profile(profile::Message),
    Search(search::Message),
    Activity(activity::Message),
    Settings(settings::Message),
    CreatorProfile(creator_profile::Message),
    VideoEditor(video_editor::Message),
    Studio(studio::Message),
    Earnings(earnings::Message),
    Wallet(wallet::Message),
    Notification(notifications::NotificationMessage),
    /// Arrow key on the home feed.
    FeedKey(FeedDirection),
    /// One second of recording elapsed.
    RecordingTick,
    /// Periodic tick for toast auto-dismiss and drawer success states.
    Tick(Instant),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedDirection {
    Previous,
    Next,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Overrides the theme from the config file.
    pub theme: Option<ThemeMode>,
    /// Turns admin mode on regardless of the config file.
    pub admin: bool,
}
