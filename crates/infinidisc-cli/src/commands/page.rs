//! Page command implementation
//!
//! Assembles one page of the catalog and prints it as a table.

use anyhow::Result;
use colored::Colorize;
use infinidisc_backend_catalog::assemble_page;
use infinidisc_core::{CatalogRecord, GenerationError, PageRequest, ParamDefaults};
use serde::Serialize;
use std::process::ExitCode;

use super::{print_json, report_failure};

/// Raw page parameters, validated exactly like the HTTP query string.
#[derive(Debug, Default, Clone)]
pub struct PageArgs {
    pub user_seed: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub locale: Option<String>,
    pub average_likes: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageOutput {
    pub user_seed: String,
    pub page: u64,
    pub page_size: u32,
    pub locale: String,
    pub records: Vec<CatalogRecord>,
}

/// Run the page command
pub fn run(args: &PageArgs, json_output: bool) -> Result<ExitCode> {
    match generate(args) {
        Ok(output) if json_output => print_json(output),
        Ok(output) => {
            print_table(&output);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => report_failure(err, json_output),
    }
}

pub fn generate(args: &PageArgs) -> Result<PageOutput, GenerationError> {
    let request = PageRequest::from_raw(
        args.user_seed.as_deref(),
        args.page.as_deref(),
        args.page_size.as_deref(),
        args.locale.as_deref(),
        args.average_likes.as_deref(),
        &ParamDefaults::default(),
    )?;
    let records = assemble_page(&request).map_err(GenerationError::from_backend)?;
    Ok(PageOutput {
        user_seed: request.user_seed,
        page: request.page,
        page_size: request.page_size,
        locale: request.locale.tag().to_string(),
        records,
    })
}

fn print_table(output: &PageOutput) {
    println!(
        "{} {} {}",
        "Page".cyan().bold(),
        output.page.to_string().bold(),
        format!(
            "(seed '{}', {} records, {})",
            output.user_seed, output.page_size, output.locale
        )
        .dimmed()
    );
    println!(
        "{}",
        format!(
            "{:>8}  {:<32} {:<28} {:<28} {:<11} {:>6}",
            "#", "Title", "Artist", "Album", "Genre", "Likes"
        )
        .dimmed()
    );
    for record in &output.records {
        println!(
            "{:>8}  {:<32} {:<28} {:<28} {:<11} {:>6}",
            record.index,
            record.song_title,
            record.artist,
            record.album,
            record.genre.as_str(),
            record.likes
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page() {
        let output = generate(&PageArgs::default()).unwrap();
        assert_eq!(output.user_seed, "default");
        assert_eq!(output.records.len(), 20);
        assert_eq!(output.locale, "en-US");
    }

    #[test]
    fn test_page_offsets_indices() {
        let args = PageArgs {
            page: Some("3".into()),
            page_size: Some("4".into()),
            ..PageArgs::default()
        };
        let indices: Vec<u64> = generate(&args).unwrap().records.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![12, 13, 14, 15]);
    }

    #[test]
    fn test_invalid_page_size() {
        let args = PageArgs {
            page_size: Some("0".into()),
            ..PageArgs::default()
        };
        assert_eq!(generate(&args).unwrap_err().code, "E003");
    }
}
