//! One-shot command implementations.

pub mod art;
pub mod audio;
pub mod page;
pub mod record;
pub mod serve;

use std::process::ExitCode;

use anyhow::Result;
use infinidisc_core::GenerationError;
use serde::Serialize;

use crate::json_output::{ErrorOutput, JsonError, JsonOutput};

/// Prints a successful JSON result.
pub(crate) fn print_json<T: Serialize>(result: T) -> Result<ExitCode> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOutput::success(result))?
    );
    Ok(ExitCode::SUCCESS)
}

/// Reports a generation failure: a JSON envelope with exit code 1, or an
/// error for `main` to print.
pub(crate) fn report_failure(err: GenerationError, json: bool) -> Result<ExitCode> {
    if !json {
        return Err(anyhow::Error::new(err));
    }
    let output = ErrorOutput::failure(vec![JsonError::from(&err)]);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(ExitCode::from(1))
}
