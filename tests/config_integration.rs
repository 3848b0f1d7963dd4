// SPDX-License-Identifier: MPL-2.0
//! Preferences on disk feeding localization and the initial session.

use learnreel::app::{App, Flags};
use learnreel::config::{self, Config, GeneralConfig, SessionConfig};
use learnreel::i18n::fluent::I18n;
use learnreel::navigation::Appearance;
use learnreel::ui::theming::ThemeMode;
use std::fs;
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let english = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&english, &config_path).expect("Failed to write english config");
    let loaded = config::load_from_path(&config_path).expect("Failed to load english config");
    assert_eq!(
        I18n::with_locale(None, &loaded).current_locale().to_string(),
        "en-US"
    );

    let french = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&french, &config_path).expect("Failed to write french config");
    let loaded = config::load_from_path(&config_path).expect("Failed to load french config");
    let i18n = I18n::with_locale(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("tab-home"), "Accueil");
}

#[test]
fn cli_language_beats_config() {
    let config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    let i18n = I18n::with_locale(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn theme_and_admin_mode_seed_the_session() {
    let config = Config {
        general: GeneralConfig {
            language: None,
            theme_mode: ThemeMode::Dark,
        },
        session: SessionConfig {
            admin_mode: Some(true),
        },
    };
    let app = App::with_config(config, I18n::default(), &Flags::default());
    assert_eq!(app.navigator().appearance(), Appearance::Dark);
    assert!(app.navigator().session().admin_mode);
}

#[test]
fn theme_flag_overrides_file() {
    let config = Config {
        general: GeneralConfig {
            language: None,
            theme_mode: ThemeMode::Dark,
        },
        ..Config::default()
    };
    let flags = Flags {
        theme: Some(ThemeMode::Light),
        ..Flags::default()
    };
    let app = App::with_config(config, I18n::default(), &flags);
    assert_eq!(app.navigator().appearance(), Appearance::Light);
}

#[test]
fn unreadable_file_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[general]\ntheme_mode = 42\n")
        .expect("Failed to write broken config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[test]
fn every_english_key_has_a_french_translation() {
    let english = include_str!("../assets/i18n/en-US.ftl");
    let french = include_str!("../assets/i18n/fr.ftl");
    let keys = |source: &'static str| -> Vec<&'static str> {
        let mut keys: Vec<&str> = source
            .lines()
            .filter(|line| line.chars().next().is_some_and(|c| c.is_ascii_lowercase()))
            .filter_map(|line| line.split_once(" =").map(|(key, _)| key))
            .collect();
        keys.sort_unstable();
        keys
    };
    assert_eq!(keys(english), keys(french));
}
