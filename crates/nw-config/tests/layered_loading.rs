//! Integration tests for layered configuration loading.
//!
//! Uses figment::Jail for sandboxed working directories and env vars.

use std::path::Path;

use figment::Jail;
use nw_config::{ConfigError, MonitorConfig};
use pretty_assertions::assert_eq;

#[test]
fn loads_languages_from_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "newswatch.toml",
            r#"
[site]
base_url = "https://radio.example"

[thresholds]
audio_min_kb = 1500

[[languages]]
code = "en"
display_name = "English"
batch = "A"

[[languages]]
code = "fr"
display_name = "Français"
section_id = "9"
batch = "B"
audio_min_kb = 800
"#,
        )?;

        let config = MonitorConfig::load(None).expect("config loads");
        assert_eq!(config.site.base_url, "https://radio.example");

        let targets = config.targets(None);
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].audio_min_kb, 1500);
        assert_eq!(targets[0].section_id, "4");
        assert_eq!(targets[1].section_id, "9");
        assert_eq!(targets[1].audio_min_kb, 800);
        assert_eq!(targets[1].transcript_min_chars, 40);
        Ok(())
    });
}

#[test]
fn explicit_json_file_overrides_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "newswatch.toml",
            r#"
[output]
dir = "from-toml"
"#,
        )?;
        jail.create_file(
            "monitor.json",
            r#"{
  "output": { "dir": "from-json", "delimiter": "\t" },
  "languages": [
    { "code": "kr", "display_name": "한국어", "section_id": "4", "transcript_min_chars": 60 }
  ],
  "overrides": { "transcript_exempt_programs": ["News", "ON AIR"] }
}"#,
        )?;

        let config = MonitorConfig::load(Some(Path::new("monitor.json"))).expect("config loads");
        assert_eq!(config.output.dir, "from-json");
        assert_eq!(config.output.table_extension(), "tsv");
        assert_eq!(config.overrides.transcript_exempt_programs, vec!["News", "ON AIR"]);
        assert_eq!(config.targets(None)[0].transcript_min_chars, 60);
        Ok(())
    });
}

#[test]
fn env_vars_beat_files() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "newswatch.toml",
            r#"
[thresholds]
audio_min_kb = 1500
"#,
        )?;
        jail.set_env("NEWSWATCH_THRESHOLDS__AUDIO_MIN_KB", "3000");
        jail.set_env("NEWSWATCH_HTTP__PAGE_TIMEOUT_SECS", "5");

        let config = MonitorConfig::load(None).expect("config loads");
        assert_eq!(config.thresholds.audio_min_kb, 3000);
        assert_eq!(config.http.page_timeout_secs, 5);
        assert_eq!(config.http.probe_timeout_secs, 20);
        Ok(())
    });
}

#[test]
fn legacy_flat_layout_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "legacy.json",
            r#"{
  "site_base": "https://legacy.example",
  "output_dir": "reports",
  "defaults": { "audio_min_kb": 500, "bulletin_min_chars": 20 },
  "overrides": { "bulletin_optional_programs": ["News", "ON AIR"] }
}"#,
        )?;

        let err = MonitorConfig::load(Some(Path::new("legacy.json"))).unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        assert!(err.to_string().contains("unknown field"), "{err}");
        Ok(())
    });
}

#[test]
fn unknown_language_key_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "newswatch.toml",
            r#"
[[languages]]
code = "fr"
uid = "9"
"#,
        )?;

        let err = MonitorConfig::load(None).unwrap_err();
        assert!(err.to_string().contains("uid"), "{err}");
        Ok(())
    });
}

#[test]
fn log_filter_env_var_is_not_a_config_key() {
    Jail::expect_with(|jail| {
        jail.set_env("NEWSWATCH_LOG", "debug");
        let config = MonitorConfig::load(None).expect("config loads");
        assert_eq!(config.thresholds.audio_min_kb, 2000);
        Ok(())
    });
}

#[test]
fn missing_explicit_file_is_an_error() {
    Jail::expect_with(|_jail| {
        let err = MonitorConfig::load(Some(Path::new("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::MissingFile(ref path) if path == Path::new("nope.toml")));
        Ok(())
    });
}

#[test]
fn invalid_values_fail_validation() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "newswatch.toml",
            r#"
[[languages]]
code = ""
"#,
        )?;

        let err = MonitorConfig::load(None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}

#[test]
fn shipped_example_config_is_valid() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "newswatch.toml",
            include_str!("../../../newswatch.example.toml"),
        )?;

        let config = MonitorConfig::load(None).expect("example config loads");
        let batch_a: Vec<_> = config
            .targets(Some("a"))
            .into_iter()
            .map(|target| (target.code, target.audio_min_kb))
            .collect();
        assert_eq!(
            batch_a,
            vec![(String::from("en"), 2000), (String::from("fr"), 1500)]
        );
        assert_eq!(config.overrides.transcript_exempt_programs, vec!["Beyond the Reefs"]);
        Ok(())
    });
}
