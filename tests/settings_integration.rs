// SPDX-License-Identifier: MPL-2.0
use reel_play::app::config::{self, Config, GeneralConfig, DEFAULT_LOAD_THRESHOLD};
use reel_play::i18n::fluent::I18n;
use tempfile::tempdir;

fn write_language(path: &std::path::Path, language: &str) -> Config {
    std::fs::write(path, format!("[general]\nlanguage = \"{language}\"\n"))
        .expect("Failed to write config file");
    config::load_from_path(path).expect("Failed to load config")
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let loaded = write_language(&config_path, "en-US");
    let i18n = I18n::new(None, None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
    assert_eq!(i18n.tr("loading-more"), "Loading more videos...");

    let loaded = write_language(&config_path, "fr");
    let i18n = I18n::new(None, None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(
        i18n.tr_with_args("header-video-count", &[("count", "3")]),
        "3 vidéos"
    );
}

#[test]
fn cli_language_beats_config() {
    let config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
        },
        ..Config::default()
    };
    let i18n = I18n::new(Some("en-US".to_string()), None, &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn hand_written_settings_file_is_understood() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");
    std::fs::write(
        &config_path,
        "[library]\ndirectory = \"/srv/videos\"\n\n[gallery]\nload_threshold = 5.0\n\n[video]\nautoplay = false\n",
    )
    .expect("Failed to write settings");

    let config = config::load_from_path(&config_path).expect("Failed to load config");

    assert_eq!(
        config.library_directory(),
        Some(std::path::PathBuf::from("/srv/videos"))
    );
    assert_eq!(config.load_threshold(), config::MAX_LOAD_THRESHOLD);
    assert!(!config.autoplay());
    assert!(config.general.language.is_none());
    assert!(DEFAULT_LOAD_THRESHOLD < config::MAX_LOAD_THRESHOLD);
}
