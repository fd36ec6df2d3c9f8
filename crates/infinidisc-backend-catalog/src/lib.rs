//! Catalog backend for infinidisc.
//!
//! Turns a `(userSeed, index, locale, averageLikes)` tuple into a
//! [`CatalogRecord`](infinidisc_core::CatalogRecord). Assembly is a pure
//! function of its inputs: the same tuple always yields the same record, and
//! `averageLikes` only changes the `likes` field.
//!
//! # Example
//!
//! ```
//! use infinidisc_backend_catalog::assemble_record;
//! use infinidisc_core::Locale;
//!
//! let a = assemble_record("abc", 0, Locale::EnUs, 5.0).unwrap();
//! let b = assemble_record("abc", 0, Locale::EnUs, 9.0).unwrap();
//! assert_eq!(a.song_title, b.song_title);
//! assert_eq!(a.index, 0);
//! ```

pub mod assemble;
pub mod error;
pub mod lexicon;
pub mod likes;
pub mod page;

pub use assemble::{assemble_record, assemble_record_with, title_case};
pub use error::{CatalogError, CatalogResult};
pub use lexicon::{Lexicon, WordListLexicon};
pub use likes::estimate_likes;
pub use page::{assemble_page, assemble_page_with};
