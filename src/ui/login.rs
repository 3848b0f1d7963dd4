// SPDX-License-Identifier: MPL-2.0
//! Log-in and sign-up form.
//!
//! Both modes share the email and password fields; sign-up adds a name and
//! enforces the password rules. Nothing is sent anywhere: a valid form
//! simply reports who logged in.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::widget::{button, container, scrollable, text, text_input, Column, Row};
use iced::{alignment::Horizontal, Element, Length};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";
const MIN_PASSWORD_LENGTH: usize = 8;

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Which sign-up password rules a candidate satisfies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordRules {
    pub min_length: bool,
    pub no_whitespace: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digit: bool,
    pub special: bool,
}

impl PasswordRules {
    #[must_use]
    pub fn check(password: &str) -> Self {
        Self {
            min_length: password.chars().count() >= MIN_PASSWORD_LENGTH,
            no_whitespace: !password.is_empty() && !password.chars().any(char::is_whitespace),
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            digit: password.chars().any(|c| c.is_ascii_digit()),
            special: password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)),
        }
    }

    #[must_use]
    pub fn all_met(&self) -> bool {
        self.min_length
            && self.no_whitespace
            && self.uppercase
            && self.lowercase
            && self.digit
            && self.special
    }

    /// Each rule's i18n key paired with whether it holds.
    fn checklist(&self) -> [(&'static str, bool); 6] {
        [
            ("login-rule-length", self.min_length),
            ("login-rule-no-spaces", self.no_whitespace),
            ("login-rule-uppercase", self.uppercase),
            ("login-rule-lowercase", self.lowercase),
            ("login-rule-digit", self.digit),
            ("login-rule-special", self.special),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    LogIn,
    SignUp,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    mode: Mode,
    name: String,
    email: String,
    password: String,
    show_password: bool,
    /// Set once the user submitted; from then on field errors are shown.
    attempted: bool,
}

impl State {
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn email_error(&self) -> bool {
        (self.attempted || !self.email.is_empty()) && !is_valid_email(&self.email)
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        let email_ok = is_valid_email(&self.email);
        match self.mode {
            Mode::LogIn => email_ok && !self.password.is_empty(),
            Mode::SignUp => {
                email_ok
                    && !self.name.trim().is_empty()
                    && PasswordRules::check(&self.password).all_met()
            }
        }
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

#[derive(Debug, Clone)]
pub enum Message {
    SwitchMode(Mode),
    NameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    TogglePasswordVisibility,
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    LoggedIn { is_new_user: bool },
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::SwitchMode(mode) => {
            state.mode = mode;
            state.attempted = false;
        }
        Message::NameChanged(name) => state.name = name,
        Message::EmailChanged(email) => state.email = email,
        Message::PasswordChanged(password) => state.password = password,
        Message::TogglePasswordVisibility => state.show_password = !state.show_password,
        Message::Submit => {
            state.attempted = true;
            if state.is_valid() {
                let is_new_user = state.mode == Mode::SignUp;
                *state = State::default();
                return Event::LoggedIn { is_new_user };
            }
        }
    }
    Event::None
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;
    let is_sign_up = state.mode == Mode::SignUp;

    let title_key = if is_sign_up { "login-title-sign-up" } else { "login-title" };
    let mut form = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .push(text("🎓").size(typography::TITLE_LG * 2.0))
        .push(text(i18n.tr(title_key)).size(typography::TITLE_LG))
        .push(text(i18n.tr("login-subtitle")).size(typography::BODY_SM));

    if is_sign_up {
        form = form.push(
            text_input(&i18n.tr("login-name-placeholder"), &state.name)
                .on_input(Message::NameChanged)
                .padding(spacing::SM),
        );
    }

    form = form.push(
        text_input(&i18n.tr("login-email-placeholder"), &state.email)
            .on_input(Message::EmailChanged)
            .on_submit(Message::Submit)
            .padding(spacing::SM),
    );
    if state.email_error() {
        form = form.push(
            text(i18n.tr("login-email-invalid"))
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        );
    }

    let visibility_key = if state.show_password { "login-hide" } else { "login-show" };
    form = form.push(
        Row::new()
            .spacing(spacing::XS)
            .push(
                text_input(&i18n.tr("login-password-placeholder"), &state.password)
                    .on_input(Message::PasswordChanged)
                    .on_submit(Message::Submit)
                    .secure(!state.show_password)
                    .padding(spacing::SM)
                    .width(Length::Fill),
            )
            .push(
                button(text(i18n.tr(visibility_key)).size(typography::BODY_SM))
                    .on_press(Message::TogglePasswordVisibility)
                    .style(button_styles::ghost),
            ),
    );

    if is_sign_up && !state.password.is_empty() {
        let rules = PasswordRules::check(&state.password);
        form = rules
            .checklist()
            .into_iter()
            .fold(form, |column, (key, met)| {
                let (mark, color) = if met {
                    ("✓", palette::SUCCESS_500)
                } else {
                    ("○", palette::GRAY_500)
                };
                column.push(
                    text(format!("{mark} {}", i18n.tr(key)))
                        .size(typography::CAPTION)
                        .color(color),
                )
            });
    }

    let submit_key = if is_sign_up { "login-submit-sign-up" } else { "login-submit" };
    form = form.push(
        button(
            text(i18n.tr(submit_key))
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .on_press_maybe(state.is_valid().then_some(Message::Submit))
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(button_styles::primary),
    );

    let (switch_prompt, switch_action, target) = if is_sign_up {
        ("login-have-account", "login-switch-to-login", Mode::LogIn)
    } else {
        ("login-no-account", "login-switch-to-sign-up", Mode::SignUp)
    };
    form = form.push(
        Row::new()
            .spacing(spacing::XXS)
            .push(text(i18n.tr(switch_prompt)).size(typography::BODY_SM))
            .push(
                button(text(i18n.tr(switch_action)).size(typography::BODY_SM))
                    .on_press(Message::SwitchMode(target))
                    .padding(0)
                    .style(button_styles::ghost),
            ),
    );

    container(scrollable(form.padding(spacing::XL)))
        .width(Length::Fill)
        .height(Length::Fill)
        .max_width(sizing::WINDOW_WIDTH)
        .style(container_styles::screen)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(state: &mut State, email: &str, password: &str) {
        update(state, Message::EmailChanged(email.into()));
        update(state, Message::PasswordChanged(password.into()));
    }

    #[test]
    fn email_validation_matches_common_addresses() {
        assert!(is_valid_email("learner@example.com"));
        assert!(is_valid_email("first.last+tag@uni.edu.au"));
        assert!(!is_valid_email("learner@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("learner example@x.io"));
        assert!(!is_valid_email("a@b.co "));
        assert!(!is_valid_email(" a@b.co"));
    }

    #[test]
    fn password_rules_are_checked_individually() {
        let rules = PasswordRules::check("abc");
        assert!(!rules.min_length);
        assert!(rules.lowercase);
        assert!(!rules.uppercase);

        assert!(PasswordRules::check("Str0ng!Pass").all_met());
        assert!(!PasswordRules::check("Str0ng! Pass").all_met());
        assert!(!PasswordRules::check("NoDigits!!").all_met());
    }

    #[test]
    fn letter_rules_only_count_ascii_letters() {
        let rules = PasswordRules::check("ÉCOLE1!é");
        assert!(!rules.uppercase);
        assert!(!rules.lowercase);

        let rules = PasswordRules::check("École1!é");
        assert!(!rules.uppercase);
        assert!(rules.lowercase);
    }

    #[test]
    fn login_needs_valid_email_and_any_password() {
        let mut state = State::default();
        fill(&mut state, "not-an-email", "x");
        assert_eq!(update(&mut state, Message::Submit), Event::None);
        assert!(state.email_error());

        fill(&mut state, "learner@example.com", "x");
        assert_eq!(
            update(&mut state, Message::Submit),
            Event::LoggedIn { is_new_user: false }
        );
    }

    #[test]
    fn sign_up_needs_name_and_strong_password() {
        let mut state = State::default();
        update(&mut state, Message::SwitchMode(Mode::SignUp));
        fill(&mut state, "new@example.com", "Str0ng!Pass");
        assert!(!state.is_valid());

        update(&mut state, Message::NameChanged("Robin".into()));
        assert_eq!(
            update(&mut state, Message::Submit),
            Event::LoggedIn { is_new_user: true }
        );
        assert_eq!(state.mode(), Mode::LogIn);
    }

    #[test]
    fn switching_mode_hides_previous_errors() {
        let mut state = State::default();
        update(&mut state, Message::Submit);
        assert!(state.email_error());
        update(&mut state, Message::SwitchMode(Mode::SignUp));
        assert!(!state.email_error());
    }
}
