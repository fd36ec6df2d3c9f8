//! Album cover rendering.
//!
//! Layout is expressed in a 600-unit design square and scaled to the
//! configured size. All randomness comes from one stream seeded with the
//! record key, drawn in a fixed order:
//!
//! 1. background radius jitter
//! 2. hue, saturation, lightness
//! 3. for each accent circle: angle, distance, size

use std::f64::consts::TAU;

use infinidisc_core::{record_key, CatalogRecord, RandomSource, RandomStream};
use serde::Serialize;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::config::ArtConfig;
use crate::error::TextureResult;
use crate::font::{draw_text, fit_scale, fold};
use crate::gradient::RadialGradient;
use crate::png;

const DESIGN_SIZE: f64 = 600.0;
const CENTER: f64 = DESIGN_SIZE / 2.0;
const ORB_RADIUS: f64 = 220.0;
const ACCENT_CIRCLES: usize = 5;
const ACCENT_ALPHA: f64 = 0.7 * 0.25;
const TEXT_MAX_WIDTH: f64 = 560.0;
const SHADOW_OFFSET: (f64, f64) = (4.0, 6.0);

/// A rendered cover.
#[derive(Debug, Clone, Serialize)]
pub struct AlbumArt {
    /// Encoded PNG file.
    #[serde(skip)]
    pub png_data: Vec<u8>,
    /// BLAKE3 hash of `png_data`.
    pub hash: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Seed of the cover for record `index`.
pub fn art_seed(user_seed: &str, index: u64) -> String {
    record_key(user_seed, index)
}

/// Palette and accent layout drawn from the seed.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Design {
    radius: f64,
    hue: f64,
    saturation: f64,
    lightness: f64,
    circles: [(f64, f64, f64); ACCENT_CIRCLES],
}

impl Design {
    fn draw<R: RandomSource + ?Sized>(stream: &mut R) -> Self {
        let radius = 420.0 + stream.next_f64() * 80.0;
        let hue = (stream.next_f64() * 360.0).floor();
        let saturation = 65.0 + stream.next_f64() * 25.0;
        let lightness = 35.0 + stream.next_f64() * 30.0;

        let mut circles = [(0.0, 0.0, 0.0); ACCENT_CIRCLES];
        for circle in circles.iter_mut() {
            let angle = stream.next_f64() * TAU;
            let dist = 120.0 + stream.next_f64() * 140.0;
            let size = 40.0 + stream.next_f64() * 90.0;
            *circle = (
                CENTER + angle.cos() * dist,
                CENTER + angle.sin() * dist,
                size / 2.0,
            );
        }

        Self {
            radius,
            hue,
            saturation,
            lightness,
            circles,
        }
    }
}

/// Renders the cover of `record` from `seed`.
///
/// The same record, seed and config always produce the same PNG bytes.
pub fn render_album_art(
    record: &CatalogRecord,
    seed: &str,
    config: &ArtConfig,
) -> TextureResult<AlbumArt> {
    config.validate()?;

    let design = Design::draw(&mut RandomStream::from_seed(seed));
    let canvas = paint(record, &design, config.size);
    let png::EncodedPng { data: png_data, hash } = png::encode(&canvas)?;

    Ok(AlbumArt {
        png_data,
        hash,
        width: canvas.width,
        height: canvas.height,
    })
}

fn paint(record: &CatalogRecord, design: &Design, size: u32) -> Canvas {
    let f = size as f64 / DESIGN_SIZE;
    let (h, s, l) = (design.hue, design.saturation, design.lightness);

    let background = RadialGradient::new(
        CENTER * f,
        CENTER * f,
        40.0 * f,
        design.radius * f,
        &[
            (0.0, Color::from_hsl(h, s, l + 25.0)),
            (0.4, Color::from_hsl(h + 30.0, s - 10.0, l + 5.0)),
            (1.0, Color::from_hsl(h + 90.0, s - 20.0, l - 25.0)),
        ],
    );
    let mut canvas = Canvas::new(size, size, Color::black());
    canvas.fill_with(|x, y| background.at(x, y));

    let orb = RadialGradient::new(
        CENTER * f,
        CENTER * f,
        0.0,
        ORB_RADIUS * f,
        &[
            (0.0, Color::from_hsla(h, 90.0, 88.0, 0.9)),
            (0.6, Color::from_hsla(h, 80.0, 65.0, 0.4)),
            (1.0, Color::from_hsla(h, 70.0, 30.0, 0.0)),
        ],
    );
    canvas.fill_circle(CENTER * f, CENTER * f, ORB_RADIUS * f, |x, y| orb.at(x, y));

    for (i, &(cx, cy, radius)) in design.circles.iter().enumerate() {
        let color = Color::from_hsla(h + 180.0 + i as f64 * 40.0, 85.0, 75.0, ACCENT_ALPHA);
        canvas.fill_circle(cx * f, cy * f, radius * f, |_, _| color);
    }

    let lines = [
        (fold(&record.song_title), 440.0, 5, Color::white()),
        (fold(&record.artist), 510.0, 4, Color::white().with_alpha(0.92)),
        (
            fold(record.genre.as_str()),
            560.0,
            3,
            Color::from_hsl(h + 200.0, 90.0, 85.0),
        ),
    ];
    let shadow = Color::rgba(0.0, 0.0, 0.0, 0.7);
    let max_width = (TEXT_MAX_WIDTH * f) as u32;

    for (text, baseline, preferred, color) in lines {
        let scale = fit_scale(&text, scaled(preferred, f), max_width);
        let (x, y) = (CENTER * f, baseline * f);
        draw_text(
            &mut canvas,
            &text,
            x + SHADOW_OFFSET.0 * f,
            y + SHADOW_OFFSET.1 * f,
            scale,
            shadow,
        );
        draw_text(&mut canvas, &text, x, y, scale, color);
    }

    canvas
}

fn scaled(units: u32, f: f64) -> u32 {
    ((units as f64 * f).round() as u32).max(1)
}
