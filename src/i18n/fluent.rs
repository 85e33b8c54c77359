// SPDX-License-Identifier: MPL-2.0
//! Fluent bundles and locale resolution.

use crate::app::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::path::Path;
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
        Self::new(None, None, &Config::default())
    }
}

impl I18n {
    /// Loads the embedded bundles, then `.ftl` files from `override_dir`,
    /// and picks the locale from the CLI flag, the config file or the OS.
    pub fn new(cli_lang: Option<String>, override_dir: Option<&Path>, config: &Config) -> Self {
        let mut i18n = Self {
            bundles: HashMap::new(),
            available_locales: Vec::new(),
            current_locale: default_locale(),
        };

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            i18n.add_source(filename, &String::from_utf8_lossy(content.data.as_ref()));
        }
        if let Some(dir) = override_dir {
            i18n.load_dir(dir);
        }

        i18n.current_locale = resolve_locale(
            cli_lang,
            config.general.language.as_deref(),
            sys_locale::get_locale(),
            &i18n.available_locales,
        )
        .unwrap_or_else(default_locale);

        i18n
    }

    /// Loads `.ftl` files from `dir`, replacing embedded bundles with the same
    /// locale. Unreadable or malformed files are logged and skipped.
    fn load_dir(&mut self, dir: &Path) {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(error) => {
                tracing::warn!(dir = %dir.display(), %error, "cannot read translation directory");
                return;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            match std::fs::read_to_string(&path) {
                Ok(source) => self.add_source(filename, &source),
                Err(error) => {
                    tracing::warn!(file = %path.display(), %error, "cannot read translation file");
                }
            }
        }
    }

    /// Parses one `<locale>.ftl` source into a bundle.
    fn add_source(&mut self, filename: &str, source: &str) {
        let Some(locale) = filename
            .strip_suffix(".ftl")
            .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
        else {
            return;
        };

        let resource = match FluentResource::try_new(source.to_string()) {
            Ok(resource) => resource,
            Err((_, errors)) => {
                tracing::warn!(%locale, count = errors.len(), "skipping malformed translation file");
                return;
            }
        };

        let mut bundle = FluentBundle::new(vec![locale.clone()]);
        bundle.set_use_isolating(false);
        if let Err(errors) = bundle.add_resource(resource) {
            tracing::warn!(%locale, count = errors.len(), "duplicate translation entries");
        }

        if !self.available_locales.contains(&locale) {
            self.available_locales.push(locale.clone());
        }
        self.bundles.insert(locale, bundle);
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translates `key` with named arguments. Values that parse as numbers
    /// are passed as numbers so plural selectors work.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            match value.parse::<f64>() {
                Ok(number) => fluent_args.set(*name, FluentValue::from(number)),
                Err(_) => fluent_args.set(*name, FluentValue::from(*value)),
            }
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
        format!("MISSING: {key}")
    }
}

fn default_locale() -> LanguageIdentifier {
    LanguageIdentifier::from_parts(
        unic_langid::subtags::Language::from_bytes(b"en").unwrap_or_default(),
        None,
        unic_langid::subtags::Region::from_bytes(b"US").ok(),
        &[],
    )
}

/// Picks the first available locale among the CLI flag, the config file and
/// the OS locale, in that order.
fn resolve_locale(
    cli_lang: Option<String>,
    config_lang: Option<&str>,
    os_lang: Option<String>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidates = [cli_lang.as_deref(), config_lang, os_lang.as_deref()];

    candidates
        .into_iter()
        .flatten()
        .filter_map(|lang| lang.parse::<LanguageIdentifier>().ok())
        .find(|lang| available.contains(lang))
}
