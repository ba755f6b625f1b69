// SPDX-License-Identifier: MPL-2.0
use crate::app::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::{langid, LanguageIdentifier};

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: LanguageIdentifier = langid!("en-US");

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish_non_exhaustive()
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = filename
                .strip_suffix(".ftl")
                .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
            else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = FluentResource::try_new(source).unwrap_or_else(|(partial, errors)| {
                tracing::warn!(%locale, errors = errors.len(), "translation file has syntax errors");
                partial
            });

            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            // Arguments are rendered inline, without Unicode isolation marks.
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                tracing::warn!(%locale, errors = errors.len(), "duplicate translation keys");
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }
        available_locales.sort_by_key(ToString::to_string);

        let current_locale = resolve_locale(
            cli_lang,
            config,
            sys_locale::get_locale(),
            &available_locales,
        )
        .unwrap_or(DEFAULT_LOCALE);
        tracing::debug!(locale = %current_locale, "locale selected");

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translates `key`, substituting Fluent variables from `args`.
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
                    return value.to_string();
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

/// Picks the first requested locale that is available.
///
/// Requests are tried in order: CLI, config file, OS. A request matches an
/// available locale exactly or, failing that, by language subtag (`fr-CA`
/// selects `fr`).
fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    os_locale: Option<String>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    [cli_lang, config.general.language.clone(), os_locale]
        .into_iter()
        .flatten()
        .filter_map(|raw| raw.parse::<LanguageIdentifier>().ok())
        .find_map(|requested| match_available(&requested, available))
}

fn match_available(
    requested: &LanguageIdentifier,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    available
        .iter()
        .find(|candidate| *candidate == requested)
        .or_else(|| {
            available
                .iter()
                .find(|candidate| candidate.language == requested.language)
        })
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn available() -> Vec<LanguageIdentifier> {
        vec![langid!("en-US"), langid!("fr")]
    }

    #[test]
    fn resolve_locale_prefers_cli() {
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        let lang = resolve_locale(Some("fr".to_string()), &config, None, &available());
        assert_eq!(lang, Some(langid!("fr")));
    }

    #[test]
    fn resolve_locale_uses_config() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(None, &config, Some("en-US".to_string()), &available());
        assert_eq!(lang, Some(langid!("fr")));
    }

    #[test]
    fn resolve_locale_falls_back_to_os_by_language() {
        let config = Config::default();
        let lang = resolve_locale(None, &config, Some("fr-CA".to_string()), &available());
        assert_eq!(lang, Some(langid!("fr")));
    }

    #[test]
    fn resolve_locale_skips_unknown_requests() {
        let config = Config::default();
        let lang = resolve_locale(Some("de".to_string()), &config, Some("ja".to_string()), &available());
        assert_eq!(lang, None);
    }

    #[test]
    fn bundled_locales_are_loaded() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert!(i18n.available_locales.contains(&langid!("en-US")));
        assert!(i18n.available_locales.contains(&langid!("fr")));
        assert_eq!(i18n.current_locale(), &langid!("en-US"));
    }

    #[test]
    fn tr_returns_marker_for_missing_key() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn tr_with_args_substitutes_variables() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let text = i18n.tr_with_args("gallery-count", &[("shown", "2"), ("total", "4")]);
        assert_eq!(text, "2 of 4 documents");
    }

    #[test]
    fn french_translation_is_used() {
        let i18n = I18n::new(Some("fr".to_string()), &Config::default());
        assert_eq!(i18n.tr("preview-close"), "Fermer");
    }
}
