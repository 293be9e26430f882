//! Settings layering: built-in defaults, then an optional RON file, then flags.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use digest_engine::EngineConfig;
use digest_logging::engine_info;
use serde::Deserialize;

use crate::cli::{Cli, FailurePolicy};

/// Contents of a settings file. Every field is optional.
///
/// ```ron
/// (
///     topic: Some("rust"),
///     page_size: Some(25),
///     output_location: Some("digests"),
///     on_failure: Some(Skip),
/// )
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileSettings {
    pub topic: Option<String>,
    pub page_size: Option<u32>,
    pub output_location: Option<PathBuf>,
    pub base_url: Option<String>,
    pub site_name: Option<String>,
    pub code_language: Option<String>,
    pub on_failure: Option<FailurePolicy>,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

pub fn load(path: &Path) -> anyhow::Result<FileSettings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file {path:?}"))?;
    let settings = ron::from_str(&content)
        .with_context(|| format!("failed to parse settings file {path:?}"))?;
    engine_info!("Loaded settings from {:?}", path);
    Ok(settings)
}

/// Merge file settings and command-line flags over the engine defaults.
pub fn resolve(cli: &Cli, file: FileSettings) -> EngineConfig {
    let mut config = EngineConfig::default();

    if let Some(topic) = cli.topic.clone().or(file.topic) {
        config.topic = topic;
    }
    if let Some(page_size) = cli.page_size.or(file.page_size) {
        config.page_size = page_size;
    }
    if let Some(output) = cli.output.clone().or(file.output_location) {
        config.output_location = output;
    }
    if let Some(base_url) = cli.base_url.clone().or(file.base_url) {
        config.base_url = base_url;
    }
    if let Some(site_name) = cli.site_name.clone().or(file.site_name) {
        config.site_name = site_name;
    }
    if let Some(language) = cli.code_language.clone().or(file.code_language) {
        config.code_language = language;
    }
    if let Some(policy) = cli.on_failure.or(file.on_failure) {
        config.failure_policy = policy.into();
    }
    if let Some(secs) = cli.timeout_secs.or(file.timeout_secs) {
        config.fetch.request_timeout = Duration::from_secs(secs);
    }
    if let Some(agent) = file.user_agent {
        config.fetch.user_agent = agent;
    }

    config
}

#[cfg(test)]
mod tests {
    use super::{load, resolve, FileSettings};
    use crate::cli::{Cli, FailurePolicy};
    use digest_engine::ItemFailurePolicy;
    use std::path::PathBuf;
    use std::time::Duration;

    #[test]
    fn defaults_apply_without_file_or_flags() {
        let config = resolve(&Cli::default(), FileSettings::default());
        assert_eq!(config.topic, "Javascript");
        assert_eq!(config.page_size, 50);
        assert_eq!(config.base_url, "https://stackoverflow.com");
        assert_eq!(config.failure_policy, ItemFailurePolicy::Abort);
    }

    #[test]
    fn flags_override_file_values() {
        let file = FileSettings {
            topic: Some("python".to_string()),
            page_size: Some(5),
            on_failure: Some(FailurePolicy::Skip),
            timeout_secs: Some(3),
            ..FileSettings::default()
        };
        let cli = Cli {
            topic: Some("rust".to_string()),
            output: Some(PathBuf::from("elsewhere")),
            ..Cli::default()
        };

        let config = resolve(&cli, file);
        assert_eq!(config.topic, "rust");
        assert_eq!(config.page_size, 5);
        assert_eq!(config.output_location, PathBuf::from("elsewhere"));
        assert_eq!(config.failure_policy, ItemFailurePolicy::Skip);
        assert_eq!(config.fetch.request_timeout, Duration::from_secs(3));
    }

    #[test]
    fn ron_file_is_parsed() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("digest.ron");
        std::fs::write(
            &path,
            r#"(topic: Some("go"), page_size: Some(3), on_failure: Some(Skip))"#,
        )
        .unwrap();

        let settings = load(&path).unwrap();
        assert_eq!(
            settings,
            FileSettings {
                topic: Some("go".to_string()),
                page_size: Some(3),
                on_failure: Some(FailurePolicy::Skip),
                ..FileSettings::default()
            }
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("digest.ron");
        std::fs::write(&path, r#"(topics: Some("typo"))"#).unwrap();
        assert!(load(&path).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load(std::path::Path::new("/definitely/not/here.ron")).is_err());
    }
}
