//! Record assembly.
//!
//! Each semantic choice reads from its own stream derived from the record key
//! `"<userSeed>-<index>"`:
//!
//! | stream | draws |
//! |---|---|
//! | `title` | title template |
//! | `artist` | band-or-person, band template |
//! | `album` | single-or-album, album template |
//! | `genre` | genre index |
//! | `likes-<averageLikes>` | likes |
//!
//! The likes stream is the only one whose key mentions the average, so every
//! other field is unaffected by it. Words come from the [`Lexicon`], which is
//! set to the record's locale and seeded with `hash_to_integer(key)` once,
//! before the first word draw.

use infinidisc_core::seed::{derive_key, float_label};
use infinidisc_core::validation::validate_average_likes;
use infinidisc_core::{
    derive_stream, hash_to_integer, record_key, CatalogRecord, Genre, Locale, RandomSource,
    RandomStream, GENRES,
};

use crate::error::CatalogResult;
use crate::lexicon::{Lexicon, WordListLexicon};
use crate::likes::estimate_likes;

/// Probability that a record is released as a single.
pub const SINGLE_PROBABILITY: f64 = 0.30;

/// Probability that the artist is a band rather than a person.
pub const BAND_PROBABILITY: f64 = 0.40;

/// Album name used for singles.
pub const SINGLE_ALBUM: &str = "Single";

/// Assembles a record using the built-in word lists.
pub fn assemble_record(
    user_seed: &str,
    index: u64,
    locale: Locale,
    average_likes: f64,
) -> CatalogResult<CatalogRecord> {
    let mut lexicon = WordListLexicon::new(locale);
    assemble_record_with(&mut lexicon, user_seed, index, locale, average_likes)
}

/// Assembles a record using the supplied lexicon.
///
/// Lexicon failures are returned as-is, tagged with the record index; no
/// fallback content is produced.
pub fn assemble_record_with<L: Lexicon + ?Sized>(
    lexicon: &mut L,
    user_seed: &str,
    index: u64,
    locale: Locale,
    average_likes: f64,
) -> CatalogResult<CatalogRecord> {
    validate_average_likes(average_likes)?;

    let key = record_key(user_seed, index);
    lexicon.set_locale(locale);
    lexicon.seed(hash_to_integer(&key));

    let words = |result: CatalogResult<String>| result.map_err(|e| e.at_index(index));

    let song_title = words(song_title(&mut derive_stream(&key, &["title"]), lexicon))?;
    let artist = words(artist_name(&mut derive_stream(&key, &["artist"]), lexicon))?;
    let album = words(album_name(&mut derive_stream(&key, &["album"]), lexicon))?;
    let genre = pick_genre(&mut derive_stream(&key, &["genre"]));
    let likes = estimate_likes(&mut likes_stream(&key, average_likes), average_likes);

    Ok(CatalogRecord {
        index,
        song_title,
        artist,
        album,
        genre,
        likes,
    })
}

/// Stream used for the likes draw of a record.
pub fn likes_stream(key: &str, average_likes: f64) -> RandomStream {
    let label = float_label(average_likes);
    RandomStream::from_seed(&derive_key(key, &["likes", &label]))
}

/// Capitalizes the first character of each space-separated token.
///
/// The rest of each token is left untouched and runs of spaces are kept.
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn song_title<R, L>(stream: &mut R, lexicon: &mut L) -> CatalogResult<String>
where
    R: RandomSource + ?Sized,
    L: Lexicon + ?Sized,
{
    let title = match stream.next_index(5) {
        0 => format!("{} {}", lexicon.adjective()?, lexicon.noun()?),
        1 => format!("{} {}", lexicon.verb()?, lexicon.adverb()?),
        2 => format!("{} in the {}", lexicon.noun()?, lexicon.noun()?),
        3 => format!("The {} {}", lexicon.adjective()?, lexicon.noun()?),
        _ => format!("{} of {}", lexicon.noun()?, lexicon.noun()?),
    };
    Ok(title_case(&title))
}

fn artist_name<R, L>(stream: &mut R, lexicon: &mut L) -> CatalogResult<String>
where
    R: RandomSource + ?Sized,
    L: Lexicon + ?Sized,
{
    if !stream.chance(BAND_PROBABILITY) {
        return Ok(title_case(&lexicon.full_name()?));
    }
    let band = match stream.next_index(3) {
        0 => format!("The {} {}s", lexicon.adjective()?, lexicon.noun()?),
        1 => format!("{} {}", lexicon.noun()?, lexicon.noun()?),
        _ => format!("{} {}", lexicon.adjective()?, lexicon.animal()?),
    };
    Ok(title_case(&band))
}

fn album_name<R, L>(stream: &mut R, lexicon: &mut L) -> CatalogResult<String>
where
    R: RandomSource + ?Sized,
    L: Lexicon + ?Sized,
{
    if stream.chance(SINGLE_PROBABILITY) {
        return Ok(SINGLE_ALBUM.to_string());
    }
    let album = match stream.next_index(4) {
        0 => format!("{} {}", lexicon.adjective()?, lexicon.noun()?),
        1 => format!("The {} Chronicles", lexicon.noun()?),
        2 => format!("{} Sessions", lexicon.noun()?),
        _ => format!("{} {}", lexicon.color()?, lexicon.noun()?),
    };
    Ok(title_case(&album))
}

fn pick_genre<R: RandomSource + ?Sized>(stream: &mut R) -> Genre {
    GENRES[stream.next_index(GENRES.len())]
}
