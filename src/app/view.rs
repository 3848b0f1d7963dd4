// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The resolved [`Scene`] decides the layout and is the only navigation
//! input read here. Tab layers that are not visible keep their state in
//! `App` but are not laid out.

use super::{Message, Screens};
use crate::i18n::fluent::I18n;
use crate::navigation::{Navigator, Overlay, Scene, Tab, TabLayer};
use crate::ui::notifications::{self, Toast};
use crate::ui::{
    activity, admin, create, creator_profile, discover, earnings, feed, login, onboarding,
    profile, search, settings, studio, tab_bar, video_editor, wallet,
};
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub navigator: &'a Navigator,
    pub screens: &'a Screens,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current scene with the toast stack above it.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let screens = ctx.screens;

    let content: Element<'_, Message> = match ctx.navigator.scene() {
        Scene::Login => login::view(login::ViewContext {
            i18n,
            state: &screens.login,
        })
        .map(Message::Login),
        Scene::Onboarding => onboarding::view(onboarding::ViewContext {
            i18n,
            state: &screens.onboarding,
        })
        .map(Message::Onboarding),
        Scene::Admin => admin::view(admin::ViewContext {
            i18n,
            state: &screens.admin,
        })
        .map(Message::Admin),
        Scene::Tabs {
            active,
            layers,
            show_tab_bar,
        } => view_tabs(&ctx, active, &layers, show_tab_bar),
    };

    let toasts = Toast::view_overlay(ctx.notifications, i18n).map(Message::Notification);

    Stack::new()
        .push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_tabs<'a>(
    ctx: &ViewContext<'a>,
    active: Tab,
    layers: &[TabLayer],
    show_tab_bar: bool,
) -> Element<'a, Message> {
    let mut stack = Stack::new().width(Length::Fill).height(Length::Fill);
    if let Some(layer) = layers.iter().find(|layer| layer.visible) {
        stack = stack.push(view_tab_base(ctx, layer.tab));
        if !layer.overlay.is_none() {
            stack = stack.push(view_overlay(ctx, layer.tab, &layer.overlay));
        }
    }

    let mut column = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(stack);
    if show_tab_bar {
        column = column.push(
            tab_bar::view(tab_bar::ViewContext {
                i18n: ctx.i18n,
                active,
            })
            .map(Message::TabBar),
        );
    }
    column.into()
}

fn view_tab_base<'a>(ctx: &ViewContext<'a>, tab: Tab) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let screens = ctx.screens;
    match tab {
        Tab::Home => feed::view(feed::ViewContext {
            i18n,
            state: &screens.feed,
        })
        .map(Message::Feed),
        Tab::Discover => discover::view(discover::ViewContext {
            i18n,
            state: &screens.discover,
        })
        .map(Message::Discover),
        Tab::Create => create::view(create::ViewContext {
            i18n,
            state: &screens.create,
        })
        .map(Message::Create),
        Tab::Profile => profile::view(profile::ViewContext {
            i18n,
            state: &screens.profile,
        })
        .map(Message::Profile),
    }
}

/// The overlay `tab` hosts, drawn from that tab's own screen states.
fn view_overlay<'a>(ctx: &ViewContext<'a>, tab: Tab, overlay: &Overlay) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let screens = ctx.screens.overlays(tab);
    match overlay {
        Overlay::None => Column::new().into(),
        Overlay::Search => search::view(search::ViewContext {
            i18n,
            state: &screens.search,
        })
        .map(Message::Search),
        Overlay::Editor => video_editor::view(video_editor::ViewContext {
            i18n,
            state: &screens.video_editor,
        })
        .map(Message::VideoEditor),
        Overlay::Studio => studio::view(studio::ViewContext {
            i18n,
            state: &screens.studio,
        })
        .map(Message::Studio),
        Overlay::Earnings => earnings::view(earnings::ViewContext {
            i18n,
            state: &screens.earnings,
        })
        .map(Message::Earnings),
        Overlay::Wallet => wallet::view(wallet::ViewContext {
            i18n,
            state: &screens.wallet,
        })
        .map(Message::Wallet),
        Overlay::Notifications => activity::view(activity::ViewContext {
            i18n,
            state: &screens.activity,
        })
        .map(Message::Activity),
        Overlay::Settings => settings::view(settings::ViewContext {
            i18n,
            state: &screens.settings,
            appearance: ctx.navigator.appearance(),
            admin_mode: ctx.navigator.session().admin_mode,
        })
        .map(Message::Settings),
        Overlay::CreatorProfile(creator) => creator_profile::view(creator_profile::ViewContext {
            i18n,
            state: &screens.creator_profile,
            creator: creator.clone(),
        })
        .map(Message::CreatorProfile),
    }
}
