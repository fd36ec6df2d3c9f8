//! Server configuration.
//!
//! Values come from command-line flags ([`CliConfig`]), optionally
//! overridden by a TOML file ([`FileConfig`]), and are checked once in
//! [`ServerConfig::resolve`] so that request handlers never see an invalid
//! synthesizer or renderer configuration.

mod file_config;

pub use file_config::FileConfig;

use anyhow::{bail, Context, Result};
use infinidisc_backend_audio::SynthConfig;
use infinidisc_backend_texture::ArtConfig;
use infinidisc_core::validation::validate_average_likes;
use infinidisc_core::{Locale, ParamDefaults};

use crate::server::RequestsLoggingLevel;

/// Settings given on the command line.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub host: String,
    pub port: u16,
    pub requests_logging_level: RequestsLoggingLevel,
    pub content_cache_age_sec: u64,
    pub max_page_size: u32,
    pub default_locale: Locale,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
            requests_logging_level: RequestsLoggingLevel::Path,
            content_cache_age_sec: 86_400,
            max_page_size: ParamDefaults::default().max_page_size,
            default_locale: Locale::EnUs,
        }
    }
}

/// Fully resolved and validated server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub requests_logging_level: RequestsLoggingLevel,
    /// `max-age` of generated media responses.
    pub content_cache_age_sec: u64,
    /// Defaults for absent query parameters.
    pub defaults: ParamDefaults,
    pub synth: SynthConfig,
    pub art: ArtConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        let cli = CliConfig::default();
        Self {
            host: cli.host,
            port: cli.port,
            requests_logging_level: cli.requests_logging_level,
            content_cache_age_sec: cli.content_cache_age_sec,
            defaults: ParamDefaults::default(),
            synth: SynthConfig::default(),
            art: ArtConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();
        let base = ParamDefaults::default();

        // TOML overrides CLI for each field
        let max_page_size = file.max_page_size.unwrap_or(cli.max_page_size);
        let page_size = file.default_page_size.unwrap_or(base.page_size);
        if max_page_size == 0 {
            bail!("max_page_size must be at least 1");
        }
        if page_size == 0 || page_size > max_page_size {
            bail!(
                "default_page_size must be 1-{}, got {}",
                max_page_size,
                page_size
            );
        }

        let average_likes = file.default_average_likes.unwrap_or(base.average_likes);
        validate_average_likes(average_likes).context("Invalid default_average_likes")?;

        let defaults = ParamDefaults {
            user_seed: file.default_user_seed.unwrap_or(base.user_seed),
            page: base.page,
            page_size,
            max_page_size,
            locale: file
                .default_locale
                .as_deref()
                .map(Locale::parse)
                .unwrap_or(cli.default_locale),
            average_likes,
        };

        let synth = file.synth.unwrap_or_default();
        synth.validate().context("Invalid [synth] configuration")?;
        let art = file.art.unwrap_or_default();
        art.validate().context("Invalid [art] configuration")?;

        Ok(Self {
            host: file.host.unwrap_or_else(|| cli.host.clone()),
            port: file.port.unwrap_or(cli.port),
            requests_logging_level: file
                .requests_logging_level
                .unwrap_or_else(|| cli.requests_logging_level.clone()),
            content_cache_age_sec: file
                .content_cache_age_sec
                .unwrap_or(cli.content_cache_age_sec),
            defaults,
            synth,
            art,
        })
    }
}
