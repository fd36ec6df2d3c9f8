//! infinidisc Core Library
//!
//! This crate provides the types shared by every infinidisc backend: the
//! catalog record model, the seed derivation discipline, the music theory
//! tables, and request parameter validation.
//!
//! # Overview
//!
//! Every piece of generated content is a pure function of a user seed and a
//! handful of labels. A single user seed is fanned out into independent
//! random streams by appending labels to a per-record key:
//!
//! - `"<userSeed>-<index>"` is the record key (album art is seeded with it)
//! - `"<userSeed>-<index>-title"`, `"-artist"`, `"-album"`, `"-genre"` drive the
//!   assembler's choices
//! - `"<userSeed>-<index>-likes-<averageLikes>"` drives the likes draw only
//! - `"<userSeed>-<index>-audio"` drives audio synthesis
//!
//! # Example
//!
//! ```
//! use infinidisc_core::seed::{derive_stream, record_key, RandomSource};
//!
//! let key = record_key("abc", 0);
//! assert_eq!(key, "abc-0");
//!
//! let mut a = derive_stream(&key, &["likes", "5"]);
//! let mut b = derive_stream(&key, &["likes", "5"]);
//! assert_eq!(a.next_f64(), b.next_f64());
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error codes, validation errors and the backend error trait
//! - [`record`]: Catalog record, genre and locale types
//! - [`seed`]: String-seeded random streams and key derivation
//! - [`theory`]: Scales and chord progressions
//! - [`validation`]: Parsing of request parameters with defaults

pub mod error;
pub mod record;
pub mod seed;
pub mod theory;
pub mod validation;

// Re-export commonly used types at the crate root
pub use error::{BackendError, ErrorCode, FailureKind, GenerationError, ValidationError};
pub use record::{CatalogRecord, Genre, Locale, GENRES};
pub use seed::{derive_key, derive_stream, hash_to_integer, record_key, RandomSource, RandomStream};
pub use theory::{ChordProgression, Scale, CHORD_PROGRESSIONS, SCALES};
pub use validation::{PageRequest, ParamDefaults};
