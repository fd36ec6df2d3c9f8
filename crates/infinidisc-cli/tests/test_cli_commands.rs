//! Commands exercised through the library entry points.

use std::fs;
use std::process::ExitCode;

use infinidisc_backend_audio::SynthConfig;
use infinidisc_backend_texture::ArtConfig;
use infinidisc_cli::commands::{art, audio, page};
use pretty_assertions::assert_eq;

#[test]
fn test_audio_command_output_decodes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("loop.wav");
    let config = SynthConfig {
        sample_rate: 22_050,
        duration_seconds: 1.0,
    };

    let code = audio::run("cli", "11", &config, &path, true).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let reader = hound::WavReader::open(&path).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 22_050);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(reader.len(), 22_050);
}

#[test]
fn test_audio_command_is_reproducible() {
    let dir = tempfile::tempdir().unwrap();
    let config = SynthConfig {
        sample_rate: 8_000,
        duration_seconds: 0.5,
    };
    let a = dir.path().join("a.wav");
    let b = dir.path().join("b.wav");
    audio::run("cli", "1", &config, &a, true).unwrap();
    audio::run("cli", "1", &config, &b, true).unwrap();
    assert_eq!(fs::read(a).unwrap(), fs::read(b).unwrap());
}

#[test]
fn test_art_command_output_decodes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("covers").join("cover.png");
    let args = art::ArtArgs {
        user_seed: "cli",
        index: "11",
        locale: "de",
        average_likes: Some("0"),
    };

    let code = art::run(&args, &ArtConfig { size: 80 }, &path, true).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let decoder = png::Decoder::new(fs::File::open(&path).unwrap());
    let reader = decoder.read_info().unwrap();
    assert_eq!(reader.info().width, 80);
    assert_eq!(reader.info().height, 80);
}

#[test]
fn test_page_command_matches_http_defaults() {
    let output = page::generate(&page::PageArgs {
        user_seed: Some("cli".into()),
        ..page::PageArgs::default()
    })
    .unwrap();
    assert_eq!(output.page, 0);
    assert_eq!(output.page_size, 20);
    let indices: Vec<u64> = output.records.iter().map(|r| r.index).collect();
    assert_eq!(indices, (0..20).collect::<Vec<u64>>());
}

#[test]
fn test_failures_exit_with_one_in_json_mode() {
    let dir = tempfile::tempdir().unwrap();
    let args = page::PageArgs {
        page_size: Some("1000".into()),
        ..page::PageArgs::default()
    };
    assert_eq!(page::run(&args, true).unwrap(), ExitCode::from(1));

    let path = dir.path().join("bad.wav");
    let code = audio::run("cli", "x", &SynthConfig::default(), &path, true).unwrap();
    assert_eq!(code, ExitCode::from(1));
}
