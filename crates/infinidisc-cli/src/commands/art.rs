//! Art command implementation
//!
//! Renders the cover of one record and writes it as a PNG file.

use anyhow::{Context, Result};
use colored::Colorize;
use infinidisc_backend_catalog::assemble_record;
use infinidisc_backend_texture::{art_seed, render_album_art, AlbumArt, ArtConfig};
use infinidisc_core::validation::{parse_average_likes, parse_index, ParamDefaults};
use infinidisc_core::{CatalogRecord, GenerationError, Locale};
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use super::record::print_record;
use super::{print_json, report_failure};

#[derive(Debug, Serialize)]
pub struct ArtOutput {
    pub path: String,
    pub seed: String,
    pub record: CatalogRecord,
    pub art: AlbumArt,
}

/// Parameters of the record whose cover is rendered.
#[derive(Debug, Clone)]
pub struct ArtArgs<'a> {
    pub user_seed: &'a str,
    pub index: &'a str,
    pub locale: &'a str,
    pub average_likes: Option<&'a str>,
}

/// Run the art command
pub fn run(
    args: &ArtArgs<'_>,
    config: &ArtConfig,
    output: &Path,
    json_output: bool,
) -> Result<ExitCode> {
    let (seed, record, art) = match generate(args, config) {
        Ok(generated) => generated,
        Err(err) => return report_failure(err, json_output),
    };

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(output, &art.png_data)
        .with_context(|| format!("Failed to write to: {}", output.display()))?;

    let result = ArtOutput {
        path: output.display().to_string(),
        seed,
        record,
        art,
    };
    if json_output {
        return print_json(result);
    }

    println!("{} {}", "Wrote".green().bold(), result.path);
    println!(
        "  {} {}x{}, hash {}",
        "Image:".dimmed(),
        result.art.width,
        result.art.height,
        &result.art.hash[..16]
    );
    print_record(&result.record);
    Ok(ExitCode::SUCCESS)
}

fn generate(
    args: &ArtArgs<'_>,
    config: &ArtConfig,
) -> Result<(String, CatalogRecord, AlbumArt), GenerationError> {
    let index = parse_index(args.index)?;
    let average_likes =
        parse_average_likes(args.average_likes, ParamDefaults::default().average_likes)?;
    let record = assemble_record(args.user_seed, index, Locale::parse(args.locale), average_likes)
        .map_err(GenerationError::from_backend)?;
    let seed = art_seed(args.user_seed, index);
    let art = render_album_art(&record, &seed, config).map_err(GenerationError::from_backend)?;
    Ok((seed, record, art))
}
