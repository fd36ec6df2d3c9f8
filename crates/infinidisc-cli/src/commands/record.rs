//! Record command implementation
//!
//! Assembles a single catalog record and prints it.

use anyhow::Result;
use colored::Colorize;
use infinidisc_backend_catalog::assemble_record;
use infinidisc_core::validation::{parse_average_likes, parse_index, ParamDefaults};
use infinidisc_core::{CatalogRecord, GenerationError, Locale};
use std::process::ExitCode;

use super::{print_json, report_failure};

/// Run the record command
///
/// # Arguments
/// * `user_seed` - Catalog seed
/// * `index` - Record index, as typed by the user
/// * `locale` - Locale tag; unknown tags fall back to `en-US`
/// * `average_likes` - Mean of the likes distribution, default 5
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(
    user_seed: &str,
    index: &str,
    locale: &str,
    average_likes: Option<&str>,
    json_output: bool,
) -> Result<ExitCode> {
    match generate(user_seed, index, locale, average_likes) {
        Ok(record) if json_output => print_json(record),
        Ok(record) => {
            print_record(&record);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => report_failure(err, json_output),
    }
}

fn generate(
    user_seed: &str,
    index: &str,
    locale: &str,
    average_likes: Option<&str>,
) -> Result<CatalogRecord, GenerationError> {
    let index = parse_index(index)?;
    let average_likes = parse_average_likes(average_likes, ParamDefaults::default().average_likes)?;
    assemble_record(user_seed, index, Locale::parse(locale), average_likes)
        .map_err(GenerationError::from_backend)
}

pub(crate) fn print_record(record: &CatalogRecord) {
    println!("{} {}", "Record".cyan().bold(), format!("#{}", record.index).bold());
    println!("  {} {}", "Title: ".dimmed(), record.song_title);
    println!("  {} {}", "Artist:".dimmed(), record.artist);
    println!("  {} {}", "Album: ".dimmed(), record.album);
    println!("  {} {}", "Genre: ".dimmed(), record.genre);
    println!("  {} {}", "Likes: ".dimmed(), record.likes);
}
