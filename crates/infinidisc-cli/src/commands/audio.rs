//! Audio command implementation
//!
//! Synthesizes the loop of one record and writes it as a WAV file.

use anyhow::{Context, Result};
use colored::Colorize;
use infinidisc_backend_audio::{audio_seed, render_audio, AudioClip, SynthConfig};
use infinidisc_core::validation::parse_index;
use infinidisc_core::GenerationError;
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use super::{print_json, report_failure};

#[derive(Debug, Serialize)]
pub struct AudioOutput {
    pub path: String,
    pub seed: String,
    pub clip: AudioClip,
}

/// Run the audio command
///
/// # Arguments
/// * `user_seed` - Catalog seed
/// * `index` - Record index, as typed by the user
/// * `config` - Sample rate and loop length
/// * `output` - Destination WAV path
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(
    user_seed: &str,
    index: &str,
    config: &SynthConfig,
    output: &Path,
    json_output: bool,
) -> Result<ExitCode> {
    let (seed, clip) = match generate(user_seed, index, config) {
        Ok(generated) => generated,
        Err(err) => return report_failure(err, json_output),
    };

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(output, &clip.wav_data)
        .with_context(|| format!("Failed to write to: {}", output.display()))?;

    let result = AudioOutput {
        path: output.display().to_string(),
        seed,
        clip,
    };
    if json_output {
        return print_json(result);
    }

    println!("{} {}", "Wrote".green().bold(), result.path);
    println!("  {} {}", "Seed:    ".dimmed(), result.seed);
    println!(
        "  {} {} samples @ {} Hz ({:.2} s)",
        "Length:  ".dimmed(),
        result.clip.num_samples,
        result.clip.sample_rate,
        result.clip.duration_seconds()
    );
    println!("  {} {}", "PCM hash:".dimmed(), &result.clip.pcm_hash[..16]);
    Ok(ExitCode::SUCCESS)
}

fn generate(
    user_seed: &str,
    index: &str,
    config: &SynthConfig,
) -> Result<(String, AudioClip), GenerationError> {
    let index = parse_index(index)?;
    let clip = render_audio(config, user_seed, index).map_err(GenerationError::from_backend)?;
    Ok((audio_seed(user_seed, index), clip))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short() -> SynthConfig {
        SynthConfig {
            sample_rate: 8_000,
            duration_seconds: 0.25,
        }
    }

    #[test]
    fn test_writes_wav_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("loop.wav");
        let code = run("abc", "2", &short(), &path, true).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let data = fs::read(&path).unwrap();
        assert_eq!(data.len(), 44 + 2_000 * 2);
        assert_eq!(&data[..4], b"RIFF");
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loop.wav");
        let config = SynthConfig {
            sample_rate: 0,
            ..short()
        };
        let code = run("abc", "2", &config, &path, true).unwrap();
        assert_eq!(code, ExitCode::from(1));
        assert!(!path.exists());
    }
}
