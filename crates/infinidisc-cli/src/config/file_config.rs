use anyhow::{Context, Result};
use infinidisc_backend_audio::SynthConfig;
use infinidisc_backend_texture::ArtConfig;
use serde::Deserialize;
use std::path::Path;

use crate::server::RequestsLoggingLevel;

/// Server settings read from a TOML file. Every field is optional; present
/// fields override the command line.
#[derive(Debug, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub requests_logging_level: Option<RequestsLoggingLevel>,
    pub content_cache_age_sec: Option<u64>,
    pub max_page_size: Option<u32>,
    pub default_page_size: Option<u32>,
    pub default_locale: Option<String>,
    pub default_user_seed: Option<String>,
    pub default_average_likes: Option<f64>,

    pub synth: Option<SynthConfig>,
    pub art: Option<ArtConfig>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::parse(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_all_none() {
        let config = FileConfig::parse("").unwrap();
        assert!(config.port.is_none());
        assert!(config.synth.is_none());
    }

    #[test]
    fn test_nested_tables() {
        let config = FileConfig::parse(
            r#"
            port = 8080
            requests_logging_level = "headers"
            default_locale = "de"

            [synth]
            duration_seconds = 2.5

            [art]
            size = 300
            "#,
        )
        .unwrap();
        assert_eq!(config.port, Some(8080));
        assert_eq!(
            config.requests_logging_level,
            Some(RequestsLoggingLevel::Headers)
        );
        let synth = config.synth.unwrap();
        assert_eq!(synth.duration_seconds, 2.5);
        assert_eq!(synth.sample_rate, 44_100);
        assert_eq!(config.art.unwrap().size, 300);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(FileConfig::parse("prot = 1").is_err());
        assert!(FileConfig::parse("[synth]\nrate = 1").is_err());
    }

    #[test]
    fn test_load_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = FileConfig::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("missing.toml"));
    }
}
