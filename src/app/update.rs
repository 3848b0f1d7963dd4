// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each handler forwards a message to its screen and turns the returned
//! event into navigator calls, toasts or preference changes.

use super::config::{self, Config};
use super::{FeedDirection, OverlayScreens, Screens};
use crate::catalog::monetization::format_dollars;
use crate::i18n::fluent::I18n;
use crate::navigation::{Navigator, Overlay, Tab};
use crate::ui::notifications::{self, Notification};
use crate::ui::{
    activity, admin, create, creator_profile, discover, earnings, feed, login, onboarding,
    profile, search, settings, studio, tab_bar, video_editor, wallet,
};
use std::path::Path;
use std::time::Instant;

/// Mutable borrows of the app state needed by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub navigator: &'a mut Navigator,
    pub screens: &'a mut Screens,
    pub notifications: &'a mut notifications::Manager,
    pub config: &'a mut Config,
    pub config_dir: Option<&'a Path>,
}

impl UpdateContext<'_> {
    /// The tab whose overlay the user is looking at.
    fn host_tab(&self) -> Tab {
        self.navigator.active_tab()
    }

    /// Overlay screen states of the host tab.
    fn host_overlays(&mut self) -> &mut OverlayScreens {
        let tab = self.host_tab();
        self.screens.overlays_mut(tab)
    }

    fn close_host_overlay(&mut self) {
        let tab = self.host_tab();
        self.navigator.close_overlay(tab);
    }
}

pub fn handle_login(ctx: &mut UpdateContext<'_>, message: login::Message) {
    if let login::Event::LoggedIn { is_new_user } = login::update(&mut ctx.screens.login, message)
    {
        ctx.navigator.login(is_new_user);
    }
}

pub fn handle_onboarding(ctx: &mut UpdateContext<'_>, message: onboarding::Message) {
    if onboarding::update(&mut ctx.screens.onboarding, message) == onboarding::Event::Completed {
        ctx.screens.onboarding = onboarding::State::default();
        ctx.navigator.complete_onboarding();
    }
}

pub fn handle_admin(ctx: &mut UpdateContext<'_>, message: admin::Message) {
    if admin::update(&mut ctx.screens.admin, message) == admin::Event::Exit {
        ctx.navigator.close_admin_dashboard();
    }
}

pub fn handle_tab_bar(ctx: &mut UpdateContext<'_>, message: tab_bar::Message) {
    match message {
        tab_bar::Message::Select(tab) => ctx.navigator.set_active_tab(tab),
    }
}

pub fn handle_feed(ctx: &mut UpdateContext<'_>, message: feed::Message) {
    match feed::update(&mut ctx.screens.feed, message) {
        feed::Event::None => {}
        feed::Event::OpenCreator(id) => ctx
            .navigator
            .open_overlay_on(Tab::Home, Overlay::CreatorProfile(Some(id))),
        feed::Event::OpenSearch => ctx.navigator.open_overlay_on(Tab::Home, Overlay::Search),
        feed::Event::OpenActivity => ctx
            .navigator
            .open_overlay_on(Tab::Home, Overlay::Notifications),
        feed::Event::MenuAction(action) => {
            tracing::debug!(?action, "overflow action chosen");
            ctx.notifications
                .push(Notification::info(action.confirmation_key()));
        }
        feed::Event::SupportSent { amount } => {
            tracing::info!(amount, "support sent");
            ctx.notifications.push(
                Notification::success("notification-support-sent")
                    .with_arg("amount", amount.to_string()),
            );
        }
    }
}

pub fn handle_feed_key(ctx: &mut UpdateContext<'_>, direction: FeedDirection) {
    let message = match direction {
        FeedDirection::Previous => feed::Message::Previous,
        FeedDirection::Next => feed::Message::Next,
    };
    handle_feed(ctx, message);
}

pub fn handle_discover(ctx: &mut UpdateContext<'_>, message: discover::Message) {
    if discover::update(&mut ctx.screens.discover, message) == discover::Event::OpenSearch {
        ctx.navigator
            .open_overlay_on(Tab::Discover, Overlay::Search);
    }
}

pub fn handle_create(ctx: &mut UpdateContext<'_>, message: create::Message) {
    match create::update(&mut ctx.screens.create, message) {
        create::Event::None => {}
        create::Event::Exit => ctx.navigator.set_active_tab(Tab::Home),
        create::Event::Published => {
            ctx.navigator.set_active_tab(Tab::Home);
            ctx.notifications
                .push(Notification::success("notification-lesson-published"));
        }
    }
}

pub fn handle_profile(ctx: &mut UpdateContext<'_>, message: profile::Message) {
    if profile::update(&mut ctx.screens.profile, message) == profile::Event::OpenSettings {
        ctx.navigator
            .open_overlay_on(Tab::Profile, Overlay::Settings);
    }
}

pub fn handle_search(ctx: &mut UpdateContext<'_>, message: search::Message) {
    if search::update(&mut ctx.host_overlays().search, message) == search::Event::Close {
        ctx.close_host_overlay();
    }
}

pub fn handle_activity(ctx: &mut UpdateContext<'_>, message: activity::Message) {
    if activity::update(&mut ctx.host_overlays().activity, message) == activity::Event::Close {
        ctx.close_host_overlay();
    }
}

pub fn handle_settings(ctx: &mut UpdateContext<'_>, message: settings::Message) {
    let host = ctx.host_tab();
    match settings::update(&mut ctx.host_overlays().settings, message) {
        settings::Event::None => {}
        settings::Event::Close => ctx.navigator.close_overlay(host),
        settings::Event::OpenStudio => ctx.navigator.open_overlay_on(host, Overlay::Studio),
        settings::Event::OpenEarnings => ctx.navigator.open_overlay_on(host, Overlay::Earnings),
        settings::Event::OpenWallet => ctx.navigator.open_overlay_on(host, Overlay::Wallet),
        settings::Event::ToggleTheme => ctx.navigator.toggle_theme(),
        settings::Event::CycleLanguage => cycle_language(ctx),
        settings::Event::OpenAdmin => ctx.navigator.open_admin_dashboard(),
        settings::Event::LogOut => {
            ctx.navigator.logout();
            *ctx.screens = Screens::default();
            ctx.notifications.clear();
        }
    }
}

/// Switches to the next embedded locale and remembers it in `settings.toml`.
fn cycle_language(ctx: &mut UpdateContext<'_>) {
    let Some(next) = ctx.i18n.next_locale() else {
        return;
    };
    if !ctx.i18n.set_locale(next.clone()) {
        return;
    }
    tracing::debug!(locale = %next, "language changed");

    ctx.config.general.language = Some(next.to_string());
    if let Err(err) = config::save_with_override(ctx.config, ctx.config_dir.map(Path::to_path_buf))
    {
        tracing::warn!(%err, "failed to save preferences");
        ctx.notifications
            .push(Notification::error("notification-config-save-error"));
    }
}

pub fn handle_creator_profile(ctx: &mut UpdateContext<'_>, message: creator_profile::Message) {
    let host = ctx.host_tab();
    handle_creator_profile_on(ctx, host, message);
}

/// Runs `message` against the creator profile hosted by `tab`.
fn handle_creator_profile_on(
    ctx: &mut UpdateContext<'_>,
    tab: Tab,
    message: creator_profile::Message,
) {
    let creator = ctx.navigator.overlay(tab).param().cloned();
    let state = &mut ctx.screens.overlays_mut(tab).creator_profile;
    match creator_profile::update(state, creator.as_ref(), message) {
        creator_profile::Event::None => {}
        creator_profile::Event::Close => ctx.navigator.close_overlay(tab),
        creator_profile::Event::GiftSent { gift, creator } => {
            tracing::info!(gift, creator, "gift sent");
            ctx.notifications.push(
                Notification::success("notification-gift-sent")
                    .with_arg("gift", gift)
                    .with_arg("creator", creator),
            );
        }
    }
}

pub fn handle_video_editor(ctx: &mut UpdateContext<'_>, message: video_editor::Message) {
    match video_editor::update(&mut ctx.host_overlays().video_editor, message) {
        video_editor::Event::None => {}
        video_editor::Event::Close => ctx.close_host_overlay(),
        video_editor::Event::Published => {
            ctx.close_host_overlay();
            ctx.navigator.set_active_tab(Tab::Home);
            ctx.notifications
                .push(Notification::success("notification-lesson-published"));
        }
    }
}

pub fn handle_studio(ctx: &mut UpdateContext<'_>, message: studio::Message) {
    let host = ctx.host_tab();
    match studio::update(&mut ctx.host_overlays().studio, message) {
        studio::Event::None => {}
        studio::Event::Close => ctx.navigator.close_overlay(host),
        studio::Event::OpenEditor => ctx.navigator.open_overlay_on(host, Overlay::Editor),
    }
}

pub fn handle_earnings(ctx: &mut UpdateContext<'_>, message: earnings::Message) {
    match earnings::update(&mut ctx.host_overlays().earnings, message) {
        earnings::Event::None => {}
        earnings::Event::Close => ctx.close_host_overlay(),
        earnings::Event::WithdrawRequested { cents } => {
            tracing::info!(cents, "withdrawal requested");
            ctx.notifications.push(
                Notification::info("notification-withdraw-requested")
                    .with_arg("amount", format_dollars(cents)),
            );
        }
    }
}

pub fn handle_wallet(ctx: &mut UpdateContext<'_>, message: wallet::Message) {
    match wallet::update(&mut ctx.host_overlays().wallet, message) {
        wallet::Event::None => {}
        wallet::Event::Close => ctx.close_host_overlay(),
        wallet::Event::PurchaseRequested { tokens } => {
            tracing::info!(tokens, "token purchase requested");
            ctx.notifications.push(
                Notification::info("notification-purchase-requested")
                    .with_arg("tokens", tokens.to_string()),
            );
        }
    }
}

/// Expires toasts and finishes drawer success states on every tab.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) {
    ctx.notifications.tick();
    if ctx.screens.feed.needs_tick() {
        handle_feed(ctx, feed::Message::Tick(now));
    }
    for tab in Tab::ALL {
        if ctx.screens.overlays(tab).creator_profile.needs_tick() {
            handle_creator_profile_on(ctx, tab, creator_profile::Message::Tick(now));
        }
    }
}
