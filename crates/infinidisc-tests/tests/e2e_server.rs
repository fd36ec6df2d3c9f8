//! HTTP surface against the library functions it wraps.

use axum::{body::Body, http::Request, http::StatusCode, Router};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use infinidisc_backend_audio::{render_audio, SynthConfig};
use infinidisc_backend_catalog::assemble_record;
use infinidisc_backend_texture::{art_seed, render_album_art, ArtConfig};
use infinidisc_cli::config::ServerConfig;
use infinidisc_cli::server::make_app;
use infinidisc_core::{CatalogRecord, Locale};
use serde_json::Value;
use tower::ServiceExt; // for `oneshot`

fn app() -> Router {
    make_app(ServerConfig {
        synth: SynthConfig {
            sample_rate: 8_000,
            duration_seconds: 0.5,
        },
        art: ArtConfig { size: 48 },
        ..ServerConfig::default()
    })
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn strip_data_url(value: &Value, mime: &str) -> Vec<u8> {
    let url = value.as_str().unwrap();
    let payload = url
        .strip_prefix(&format!("data:{};base64,", mime))
        .unwrap();
    STANDARD.decode(payload).unwrap()
}

#[tokio::test]
async fn e2e_records_match_assembler() {
    let app = app();
    let (status, body) = get_json(
        &app,
        "/api/records?userSeed=abc&page=1&pageSize=3&locale=uk&averageLikes=7",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let records: Vec<CatalogRecord> = serde_json::from_value(body["records"].clone()).unwrap();
    let expected: Vec<CatalogRecord> = (3..6)
        .map(|i| assemble_record("abc", i, Locale::Uk, 7.0).unwrap())
        .collect();
    assert_eq!(records, expected);
}

#[tokio::test]
async fn e2e_album_art_matches_renderer() {
    let app = app();
    let (status, body) = get_json(&app, "/api/album-art/9?userSeed=abc&locale=de").await;
    assert_eq!(status, StatusCode::OK);

    let record = assemble_record("abc", 9, Locale::De, 5.0).unwrap();
    let art = render_album_art(&record, &art_seed("abc", 9), &ArtConfig { size: 48 }).unwrap();
    assert_eq!(strip_data_url(&body["albumArt"], "image/png"), art.png_data);
}

#[tokio::test]
async fn e2e_audio_matches_synthesizer() {
    let app = app();
    let (status, body) = get_json(&app, "/api/audio/9?userSeed=abc").await;
    assert_eq!(status, StatusCode::OK);

    let config = SynthConfig {
        sample_rate: 8_000,
        duration_seconds: 0.5,
    };
    let clip = render_audio(&config, "abc", 9).unwrap();
    assert_eq!(strip_data_url(&body["audio"], "audio/wav"), clip.wav_data);
}

#[tokio::test]
async fn e2e_index_overflow_is_rejected() {
    let app = app();
    let uri = format!("/api/records?page={}&pageSize=100", u64::MAX / 50);
    let (status, body) = get_json(&app, &uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["code"], "E005");
}
