//! infinidisc CLI - procedural music catalog generator
//!
//! This binary generates catalog records, album covers and audio loops from
//! a seed, either one at a time or through the HTTP server.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use infinidisc_backend_audio::SynthConfig;
use infinidisc_backend_texture::ArtConfig;
use infinidisc_cli::commands;
use infinidisc_cli::config::CliConfig;
use infinidisc_cli::logging::init_logging;
use infinidisc_cli::server::RequestsLoggingLevel;

/// infinidisc - an infinite, reproducible music catalog
#[derive(Parser)]
#[command(name = "infinidisc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a single catalog record
    Record {
        /// Catalog seed
        #[arg(short, long, default_value = "default")]
        seed: String,

        /// Record index
        #[arg(short, long, default_value = "0")]
        index: String,

        /// Locale tag (en-US, de, uk)
        #[arg(short, long, default_value = "en-US")]
        locale: String,

        /// Mean of the likes distribution
        #[arg(long, allow_hyphen_values = true)]
        average_likes: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print one page of catalog records
    Page {
        /// Catalog seed
        #[arg(short, long)]
        seed: Option<String>,

        /// Zero-based page number
        #[arg(short, long, allow_hyphen_values = true)]
        page: Option<String>,

        /// Records per page (1-100)
        #[arg(long, allow_hyphen_values = true)]
        page_size: Option<String>,

        /// Locale tag (en-US, de, uk)
        #[arg(short, long)]
        locale: Option<String>,

        /// Mean of the likes distribution
        #[arg(long, allow_hyphen_values = true)]
        average_likes: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Synthesize the audio loop of a record into a WAV file
    Audio {
        /// Catalog seed
        #[arg(short, long, default_value = "default")]
        seed: String,

        /// Record index
        #[arg(short, long, default_value = "0")]
        index: String,

        /// Output WAV path
        #[arg(short, long)]
        output: PathBuf,

        /// Sample rate in Hz
        #[arg(long, default_value_t = SynthConfig::default().sample_rate)]
        sample_rate: u32,

        /// Loop length in seconds
        #[arg(long, default_value_t = SynthConfig::default().duration_seconds)]
        duration: f64,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render the album cover of a record into a PNG file
    Art {
        /// Catalog seed
        #[arg(short, long, default_value = "default")]
        seed: String,

        /// Record index
        #[arg(short, long, default_value = "0")]
        index: String,

        /// Locale tag (en-US, de, uk)
        #[arg(short, long, default_value = "en-US")]
        locale: String,

        /// Mean of the likes distribution
        #[arg(long, allow_hyphen_values = true)]
        average_likes: Option<String>,

        /// Edge length in pixels
        #[arg(long, default_value_t = ArtConfig::default().size)]
        size: u32,

        /// Output PNG path
        #[arg(short, long)]
        output: PathBuf,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Run the HTTP catalog server
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value_t = 3001)]
        port: u16,

        /// TOML file overriding these flags
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Request logging detail
        #[arg(long, value_enum, default_value_t = RequestsLoggingLevel::Path)]
        requests_logging_level: RequestsLoggingLevel,

        /// max-age of raw media responses, in seconds
        #[arg(long, default_value_t = 86_400)]
        content_cache_age_sec: u64,

        /// Largest accepted pageSize
        #[arg(long, default_value_t = 100)]
        max_page_size: u32,

        /// Locale used when a request names none
        #[arg(long, default_value = "en-US")]
        default_locale: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging() {
        eprintln!("{}: {}", colored::Colorize::yellow("warning"), e);
    }

    let result = match cli.command {
        Commands::Record {
            seed,
            index,
            locale,
            average_likes,
            json,
        } => commands::record::run(&seed, &index, &locale, average_likes.as_deref(), json),
        Commands::Page {
            seed,
            page,
            page_size,
            locale,
            average_likes,
            json,
        } => {
            let args = commands::page::PageArgs {
                user_seed: seed,
                page,
                page_size,
                locale,
                average_likes,
            };
            commands::page::run(&args, json)
        }
        Commands::Audio {
            seed,
            index,
            output,
            sample_rate,
            duration,
            json,
        } => {
            let config = SynthConfig {
                sample_rate,
                duration_seconds: duration,
            };
            commands::audio::run(&seed, &index, &config, &output, json)
        }
        Commands::Art {
            seed,
            index,
            locale,
            average_likes,
            size,
            output,
            json,
        } => {
            let args = commands::art::ArtArgs {
                user_seed: &seed,
                index: &index,
                locale: &locale,
                average_likes: average_likes.as_deref(),
            };
            commands::art::run(&args, &ArtConfig { size }, &output, json)
        }
        Commands::Serve {
            host,
            port,
            config,
            requests_logging_level,
            content_cache_age_sec,
            max_page_size,
            default_locale,
        } => {
            let cli_config = CliConfig {
                host,
                port,
                requests_logging_level,
                content_cache_age_sec,
                max_page_size,
                default_locale: infinidisc_core::Locale::parse(&default_locale),
            };
            commands::serve::run(&cli_config, config.as_deref())
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_record_defaults() {
        let cli = Cli::try_parse_from(["infinidisc", "record"]).unwrap();
        match cli.command {
            Commands::Record {
                seed,
                index,
                locale,
                average_likes,
                json,
            } => {
                assert_eq!(seed, "default");
                assert_eq!(index, "0");
                assert_eq!(locale, "en-US");
                assert!(average_likes.is_none());
                assert!(!json);
            }
            _ => panic!("expected record command"),
        }
    }

    #[test]
    fn test_cli_parses_negative_average() {
        let cli = Cli::try_parse_from([
            "infinidisc",
            "record",
            "--average-likes",
            "-1",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Record {
                average_likes, json, ..
            } => {
                assert_eq!(average_likes.as_deref(), Some("-1"));
                assert!(json);
            }
            _ => panic!("expected record command"),
        }
    }

    #[test]
    fn test_cli_parses_audio() {
        let cli = Cli::try_parse_from([
            "infinidisc",
            "audio",
            "--seed",
            "abc",
            "-i",
            "7",
            "-o",
            "out.wav",
            "--duration",
            "2.5",
        ])
        .unwrap();
        match cli.command {
            Commands::Audio {
                seed,
                index,
                output,
                sample_rate,
                duration,
                ..
            } => {
                assert_eq!(seed, "abc");
                assert_eq!(index, "7");
                assert_eq!(output, PathBuf::from("out.wav"));
                assert_eq!(sample_rate, 44_100);
                assert_eq!(duration, 2.5);
            }
            _ => panic!("expected audio command"),
        }
    }

    #[test]
    fn test_cli_requires_output_for_art() {
        assert!(Cli::try_parse_from(["infinidisc", "art"]).is_err());
    }

    #[test]
    fn test_cli_parses_serve() {
        let cli = Cli::try_parse_from([
            "infinidisc",
            "serve",
            "--port",
            "8080",
            "--requests-logging-level",
            "headers",
        ])
        .unwrap();
        match cli.command {
            Commands::Serve {
                port,
                requests_logging_level,
                config,
                ..
            } => {
                assert_eq!(port, 8080);
                assert_eq!(requests_logging_level, RequestsLoggingLevel::Headers);
                assert!(config.is_none());
            }
            _ => panic!("expected serve command"),
        }
    }
}
