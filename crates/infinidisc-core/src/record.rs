//! Catalog record, genre and locale types.

use serde::{Deserialize, Serialize};

/// A music genre from the fixed catalog list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Pop,
    Rock,
    Jazz,
    Electronic,
    #[serde(rename = "Hip Hop")]
    HipHop,
    Classical,
    #[serde(rename = "R&B")]
    RnB,
    Country,
    Metal,
    Indie,
    Folk,
    Reggae,
    Blues,
    Punk,
    Ambient,
}

/// All genres in selection order.
pub const GENRES: [Genre; 15] = [
    Genre::Pop,
    Genre::Rock,
    Genre::Jazz,
    Genre::Electronic,
    Genre::HipHop,
    Genre::Classical,
    Genre::RnB,
    Genre::Country,
    Genre::Metal,
    Genre::Indie,
    Genre::Folk,
    Genre::Reggae,
    Genre::Blues,
    Genre::Punk,
    Genre::Ambient,
];

impl Genre {
    /// Display name as shown in the catalog.
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Pop => "Pop",
            Genre::Rock => "Rock",
            Genre::Jazz => "Jazz",
            Genre::Electronic => "Electronic",
            Genre::HipHop => "Hip Hop",
            Genre::Classical => "Classical",
            Genre::RnB => "R&B",
            Genre::Country => "Country",
            Genre::Metal => "Metal",
            Genre::Indie => "Indie",
            Genre::Folk => "Folk",
            Genre::Reggae => "Reggae",
            Genre::Blues => "Blues",
            Genre::Punk => "Punk",
            Genre::Ambient => "Ambient",
        }
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supported catalog locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// English (United States).
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    /// German.
    #[serde(rename = "de")]
    De,
    /// Ukrainian.
    #[serde(rename = "uk")]
    Uk,
}

impl Locale {
    /// All supported locales.
    pub const ALL: [Locale; 3] = [Locale::EnUs, Locale::De, Locale::Uk];

    /// Parses a locale tag, falling back to `en-US` for unknown tags.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "en-US" => Locale::EnUs,
            "de" => Locale::De,
            "uk" => Locale::Uk,
            _ => Locale::EnUs,
        }
    }

    /// Canonical tag for this locale.
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::De => "de",
            Locale::Uk => "uk",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// One generated catalog entry.
///
/// For a fixed user seed, index and locale every field except `likes` is
/// independent of the requested average likes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRecord {
    /// Position in the infinite catalog.
    pub index: u64,
    /// Song title.
    pub song_title: String,
    /// Person or band name.
    pub artist: String,
    /// Album name, or `"Single"`.
    pub album: String,
    /// Genre.
    pub genre: Genre,
    /// Popularity count.
    pub likes: u64,
}

impl CatalogRecord {
    /// Returns every field except `likes`.
    pub fn without_likes(&self) -> (u64, &str, &str, &str, Genre) {
        (
            self.index,
            &self.song_title,
            &self.artist,
            &self.album,
            self.genre,
        )
    }
}
