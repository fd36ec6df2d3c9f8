//! Catalog, album art and audio handlers.
//!
//! Generation is CPU-bound and runs on the blocking pool; a dropped request
//! simply discards the result.

use std::time::Instant;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use infinidisc_backend_audio::{audio_seed, render_audio, AudioClip};
use infinidisc_backend_catalog::{assemble_page, assemble_record};
use infinidisc_backend_texture::{art_seed, render_album_art, AlbumArt};
use infinidisc_core::validation::{parse_average_likes, parse_index};
use infinidisc_core::{CatalogRecord, Locale, PageRequest};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::ApiError;
use super::state::ServerState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordsQuery {
    pub user_seed: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub locale: Option<String>,
    pub average_likes: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumArtQuery {
    pub user_seed: Option<String>,
    pub locale: Option<String>,
    pub average_likes: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioQuery {
    pub user_seed: Option<String>,
}

#[derive(Serialize)]
pub struct RecordsResponse {
    pub records: Vec<CatalogRecord>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumArtResponse {
    pub album_art: String,
}

#[derive(Serialize)]
pub struct AudioResponse {
    pub audio: String,
}

/// Returns `data:<mime>;base64,<payload>`.
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

pub async fn get_records(
    State(state): State<ServerState>,
    Query(query): Query<RecordsQuery>,
) -> Result<Json<RecordsResponse>, ApiError> {
    let request = PageRequest::from_raw(
        query.user_seed.as_deref(),
        query.page.as_deref(),
        query.page_size.as_deref(),
        query.locale.as_deref(),
        query.average_likes.as_deref(),
        &state.config.defaults,
    )?;

    let start = Instant::now();
    let (request, records) = tokio::task::spawn_blocking(move || {
        let records = assemble_page(&request);
        (request, records)
    })
    .await?;
    let records = records?;

    debug!(
        "assembled page {} of '{}' ({} records) in {:?}",
        request.page,
        request.user_seed,
        records.len(),
        start.elapsed()
    );
    Ok(Json(RecordsResponse { records }))
}

pub async fn get_album_art(
    State(state): State<ServerState>,
    Path(index): Path<String>,
    Query(query): Query<AlbumArtQuery>,
) -> Result<Response, ApiError> {
    let art = album_art(&state, &index, query).await?;
    Ok(Json(AlbumArtResponse {
        album_art: data_url("image/png", &art.png_data),
    })
    .into_response())
}

pub async fn get_album_art_raw(
    State(state): State<ServerState>,
    Path(index): Path<String>,
    Query(query): Query<AlbumArtQuery>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let art = album_art(&state, &index, query).await?;
    Ok(raw_media(
        &state,
        &headers,
        "image/png",
        &art.hash,
        art.png_data,
    ))
}

pub async fn get_audio(
    State(state): State<ServerState>,
    Path(index): Path<String>,
    Query(query): Query<AudioQuery>,
) -> Result<Response, ApiError> {
    let clip = audio(&state, &index, query).await?;
    Ok(Json(AudioResponse {
        audio: data_url("audio/wav", &clip.wav_data),
    })
    .into_response())
}

pub async fn get_audio_raw(
    State(state): State<ServerState>,
    Path(index): Path<String>,
    Query(query): Query<AudioQuery>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let clip = audio(&state, &index, query).await?;
    Ok(raw_media(
        &state,
        &headers,
        "audio/wav",
        &clip.pcm_hash,
        clip.wav_data,
    ))
}

async fn album_art(
    state: &ServerState,
    index: &str,
    query: AlbumArtQuery,
) -> Result<AlbumArt, ApiError> {
    let defaults = &state.config.defaults;
    let index = parse_index(index)?;
    let user_seed = query
        .user_seed
        .unwrap_or_else(|| defaults.user_seed.clone());
    let locale = query
        .locale
        .as_deref()
        .map(Locale::parse)
        .unwrap_or(defaults.locale);
    let average_likes = parse_average_likes(query.average_likes.as_deref(), defaults.average_likes)?;
    let art_config = state.config.art;

    let start = Instant::now();
    let seed = art_seed(&user_seed, index);
    let art = tokio::task::spawn_blocking({
        let seed = seed.clone();
        move || -> Result<AlbumArt, ApiError> {
            let record = assemble_record(&user_seed, index, locale, average_likes)?;
            Ok(render_album_art(&record, &seed, &art_config)?)
        }
    })
    .await??;

    debug!("rendered album art '{}' in {:?}", seed, start.elapsed());
    Ok(art)
}

async fn audio(state: &ServerState, index: &str, query: AudioQuery) -> Result<AudioClip, ApiError> {
    let index = parse_index(index)?;
    let user_seed = query
        .user_seed
        .unwrap_or_else(|| state.config.defaults.user_seed.clone());
    let synth_config = state.config.synth;

    let start = Instant::now();
    let seed = audio_seed(&user_seed, index);
    let clip =
        tokio::task::spawn_blocking(move || render_audio(&synth_config, &user_seed, index))
            .await??;

    debug!("synthesized audio '{}' in {:?}", seed, start.elapsed());
    Ok(clip)
}

/// Builds a cacheable binary response, or `304` when the client already
/// holds this exact content.
fn raw_media(
    state: &ServerState,
    request_headers: &HeaderMap,
    content_type: &'static str,
    hash: &str,
    body: Vec<u8>,
) -> Response {
    let etag = format!("\"{}\"", hash);
    let cache_control = format!(
        "public, max-age={}, immutable",
        state.config.content_cache_age_sec
    );

    let not_modified = request_headers
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.split(',').any(|tag| tag.trim() == etag || tag.trim() == "*"));

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    // Hex digests and integers are always valid header values.
    if let Ok(value) = HeaderValue::from_str(&etag) {
        headers.insert(header::ETAG, value);
    }
    if let Ok(value) = HeaderValue::from_str(&cache_control) {
        headers.insert(header::CACHE_CONTROL, value);
    }

    if not_modified {
        headers.remove(header::CONTENT_TYPE);
        return (StatusCode::NOT_MODIFIED, headers).into_response();
    }
    (StatusCode::OK, headers, body).into_response()
}
