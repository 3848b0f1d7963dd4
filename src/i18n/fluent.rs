// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use crate::error::{Error, Result};
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish_non_exhaustive()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::with_locale(Some(DEFAULT_LOCALE.to_string()), &Config::default())
    }
}

impl I18n {
    /// Loads every embedded `.ftl` file and picks the locale from, in order,
    /// the CLI, the config file and the OS.
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        Self::build(cli_lang, config, true)
    }

    /// Like [`I18n::new`] but never consults the OS locale.
    pub fn with_locale(lang: Option<String>, config: &Config) -> Self {
        Self::build(lang, config, false)
    }

    fn build(cli_lang: Option<String>, config: &Config, use_os_locale: bool) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                tracing::warn!(filename, "skipping translation file with invalid locale");
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            let source = String::from_utf8_lossy(content.data.as_ref()).into_owned();
            match load_bundle(&locale, source) {
                Ok(bundle) => {
                    bundles.insert(locale.clone(), bundle);
                    available_locales.push(locale);
                }
                Err(err) => tracing::warn!(%locale, %err, "translation bundle rejected"),
            }
        }
        available_locales.sort_by_key(ToString::to_string);

        let os_locale = if use_os_locale {
            sys_locale::get_locale()
        } else {
            None
        };
        let current_locale =
            resolve_locale(cli_lang, config, os_locale, &available_locales)
                .unwrap_or_else(|| DEFAULT_LOCALE.parse().unwrap_or_default());

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Switches locale if a bundle exists for it. Returns whether it changed.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) -> bool {
        if self.bundles.contains_key(&locale) && self.current_locale != locale {
            self.current_locale = locale;
            true
        } else {
            false
        }
    }

    /// The locale after the current one, wrapping around.
    #[must_use]
    pub fn next_locale(&self) -> Option<LanguageIdentifier> {
        let position = self
            .available_locales
            .iter()
            .position(|locale| *locale == self.current_locale)?;
        let next = (position + 1) % self.available_locales.len();
        self.available_locales.get(next).cloned()
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, args, &mut errors);
                if errors.is_empty() {
                    return value.into_owned();
                }
            }
        }
        format!("MISSING: {key}")
    }
}

fn load_bundle(
    locale: &LanguageIdentifier,
    source: String,
) -> Result<FluentBundle<FluentResource>> {
    let resource = FluentResource::try_new(source)
        .map_err(|(_, errors)| Error::I18n(format!("{} parse errors in {locale}", errors.len())))?;
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    bundle.set_use_isolating(false);
    bundle
        .add_resource(resource)
        .map_err(|errors| Error::I18n(format!("{} duplicate keys in {locale}", errors.len())))?;
    Ok(bundle)
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    os_locale: Option<String>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidates = [cli_lang, config.general.language.clone(), os_locale];
    candidates
        .into_iter()
        .flatten()
        .filter_map(|raw| raw.parse::<LanguageIdentifier>().ok())
        .find_map(|lang| match_available(&lang, available))
}

/// Exact match first, then a locale sharing the language subtag.
fn match_available(
    lang: &LanguageIdentifier,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    available
        .iter()
        .find(|candidate| *candidate == lang)
        .or_else(|| {
            available
                .iter()
                .find(|candidate| candidate.language == lang.language)
        })
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn available() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "fr".parse().unwrap()]
    }

    #[test]
    fn resolve_locale_prefers_cli() {
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        let lang = resolve_locale(Some("fr".to_string()), &config, None, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_uses_config() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(None, &config, None, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_matches_language_subtag() {
        let lang = resolve_locale(None, &Config::default(), Some("fr-CA".into()), &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_skips_unknown_languages() {
        let lang = resolve_locale(Some("de".into()), &Config::default(), None, &available());
        assert_eq!(lang, None);
    }

    #[test]
    fn default_is_english_with_embedded_bundles() {
        let i18n = I18n::default();
        assert_eq!(i18n.current_locale().to_string(), "en-US");
        assert!(i18n.available_locales.len() >= 2);
        assert_eq!(i18n.tr("window-title"), "LearnReel");
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn tr_with_args_interpolates() {
        let i18n = I18n::default();
        let text = i18n.tr_with_args("wallet-balance-tokens", &[("count", "825")]);
        assert!(text.contains("825"));
    }

    #[test]
    fn set_locale_switches_bundle() {
        let mut i18n = I18n::default();
        assert!(i18n.set_locale("fr".parse().unwrap()));
        assert_eq!(i18n.tr("tab-home"), "Accueil");
        assert!(!i18n.set_locale("fr".parse().unwrap()));
    }

    #[test]
    fn next_locale_wraps_around() {
        let mut i18n = I18n::default();
        let first = i18n.current_locale().clone();
        let mut seen = vec![first.clone()];
        while let Some(next) = i18n.next_locale() {
            if next == first {
                break;
            }
            seen.push(next.clone());
            i18n.set_locale(next);
        }
        assert_eq!(seen.len(), i18n.available_locales.len());
    }

    #[test]
    fn invalid_ftl_is_rejected() {
        let locale: LanguageIdentifier = "en-US".parse().unwrap();
        let result = load_bundle(&locale, "= broken".to_string());
        assert!(matches!(result, Err(Error::I18n(_))));
    }
}
