//! infinidisc album art backend.
//!
//! Paints a square cover for a catalog record (a gradient background, a
//! glow orb, accent circles and the record's text) and encodes it as PNG.
//!
//! # Determinism
//!
//! Shapes and colours come from a [`RandomStream`](infinidisc_core::RandomStream)
//! seeded with the record key, and the PNG writer uses fixed settings, so
//! equal inputs produce byte-identical files.
//!
//! ```no_run
//! use infinidisc_backend_texture::{art_seed, render_album_art, ArtConfig};
//! # let record: infinidisc_core::CatalogRecord = unimplemented!();
//!
//! let art = render_album_art(&record, &art_seed("abc", 0), &ArtConfig::default()).unwrap();
//! assert_eq!(&art.png_data[..4], b"\x89PNG");
//! ```

pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod font;
pub mod gradient;
pub mod png;
pub mod render;

pub use canvas::Canvas;
pub use color::Color;
pub use config::ArtConfig;
pub use error::{TextureError, TextureResult};
pub use render::{art_seed, render_album_art, AlbumArt};
