//! Uppercase 5x7 bitmap font.
//!
//! Covers ASCII 32 (space) through 95 (underscore). Each glyph is seven rows
//! of five bits, most significant bit on the left. Text outside that range is
//! folded first: letters are uppercased, Latin diacritics are stripped and
//! Cyrillic is transliterated, so every locale's titles stay readable.

use crate::canvas::Canvas;
use crate::color::Color;

/// Glyph width in font pixels.
pub const GLYPH_WIDTH: u32 = 5;
/// Glyph height in font pixels.
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance per character in font pixels (glyph plus one column gap).
pub const ADVANCE: u32 = GLYPH_WIDTH + 1;

const FIRST_CHAR: u32 = 32;

const GLYPHS: [[u8; 7]; 64] = [
    [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000], // space
    [0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100, 0b00000], // !
    [0b01010, 0b01010, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000], // "
    [0b01010, 0b11111, 0b01010, 0b11111, 0b01010, 0b00000, 0b00000], // #
    [0b00100, 0b01110, 0b10100, 0b01110, 0b00101, 0b01110, 0b00100], // $
    [0b11001, 0b11010, 0b00100, 0b01011, 0b10011, 0b00000, 0b00000], // %
    [0b01100, 0b10010, 0b01100, 0b10010, 0b10011, 0b01101, 0b00000], // &
    [0b00100, 0b00100, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000], // '
    [0b00100, 0b01000, 0b01000, 0b01000, 0b01000, 0b00100, 0b00000], // (
    [0b00100, 0b00010, 0b00010, 0b00010, 0b00010, 0b00100, 0b00000], // )
    [0b00000, 0b10101, 0b01110, 0b10101, 0b00000, 0b00000, 0b00000], // *
    [0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000], // +
    [0b00000, 0b00000, 0b00000, 0b00000, 0b00100, 0b00100, 0b01000], // ,
    [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000], // -
    [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00100, 0b00000], // .
    [0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b00000, 0b00000], // /
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110], // 0
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // 1
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111], // 2
    [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110], // 3
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010], // 4
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110], // 5
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110], // 6
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000], // 7
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110], // 8
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100], // 9
    [0b00000, 0b00100, 0b00000, 0b00000, 0b00100, 0b00000, 0b00000], // :
    [0b00000, 0b00100, 0b00000, 0b00000, 0b00100, 0b00100, 0b01000], // ;
    [0b00010, 0b00100, 0b01000, 0b10000, 0b01000, 0b00100, 0b00010], // <
    [0b00000, 0b00000, 0b11111, 0b00000, 0b11111, 0b00000, 0b00000], // =
    [0b01000, 0b00100, 0b00010, 0b00001, 0b00010, 0b00100, 0b01000], // >
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100], // ?
    [0b01110, 0b10001, 0b10111, 0b10101, 0b10111, 0b10000, 0b01110], // @
    [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001], // A
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110], // B
    [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110], // C
    [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110], // D
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111], // E
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000], // F
    [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111], // G
    [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001], // H
    [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // I
    [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100], // J
    [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001], // K
    [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111], // L
    [0b10001, 0b11011, 0b10101, 0b10001, 0b10001, 0b10001, 0b10001], // M
    [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001], // N
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110], // O
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000], // P
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101], // Q
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001], // R
    [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110], // S
    [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100], // T
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110], // U
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100], // V
    [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001], // W
    [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001], // X
    [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100], // Y
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111], // Z
    [0b01110, 0b01000, 0b01000, 0b01000, 0b01000, 0b01000, 0b01110], // [
    [0b10000, 0b01000, 0b00100, 0b00010, 0b00001, 0b00000, 0b00000], // \
    [0b01110, 0b00010, 0b00010, 0b00010, 0b00010, 0b00010, 0b01110], // ]
    [0b00100, 0b01010, 0b10001, 0b00000, 0b00000, 0b00000, 0b00000], // ^
    [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b11111], // _
];

/// Rows of the glyph for `ch`, if the font has one.
pub fn glyph(ch: char) -> Option<&'static [u8; 7]> {
    let index = (ch as u32).checked_sub(FIRST_CHAR)? as usize;
    GLYPHS.get(index)
}

/// Whether pixel `(x, y)` of a glyph is set.
#[inline]
pub fn glyph_pixel(rows: &[u8; 7], x: u32, y: u32) -> bool {
    rows[y as usize] & (1 << (GLYPH_WIDTH - 1 - x)) != 0
}

/// Folds `text` into characters the font can draw.
///
/// Characters with no mapping become `?`.
pub fn fold(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars().flat_map(char::to_uppercase) {
        if glyph(ch).is_some() {
            out.push(ch);
        } else if let Some(folded) = fold_char(ch) {
            out.push_str(folded);
        } else if ch.is_whitespace() {
            out.push(' ');
        } else {
            out.push('?');
        }
    }
    out
}

fn fold_char(ch: char) -> Option<&'static str> {
    let folded = match ch {
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => "A",
        'Æ' => "AE",
        'Ç' => "C",
        'È' | 'É' | 'Ê' | 'Ë' => "E",
        'Ì' | 'Í' | 'Î' | 'Ï' => "I",
        'Ñ' => "N",
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => "O",
        'Ù' | 'Ú' | 'Û' | 'Ü' => "U",
        'Ý' => "Y",
        'А' => "A",
        'Б' => "B",
        'В' => "V",
        'Г' => "H",
        'Ґ' => "G",
        'Д' => "D",
        'Е' | 'Э' => "E",
        'Є' => "YE",
        'Ё' => "YO",
        'Ж' => "ZH",
        'З' => "Z",
        'И' | 'Ы' => "Y",
        'І' => "I",
        'Ї' => "YI",
        'Й' => "Y",
        'К' => "K",
        'Л' => "L",
        'М' => "M",
        'Н' => "N",
        'О' => "O",
        'П' => "P",
        'Р' => "R",
        'С' => "S",
        'Т' => "T",
        'У' => "U",
        'Ф' => "F",
        'Х' => "KH",
        'Ц' => "TS",
        'Ч' => "CH",
        'Ш' => "SH",
        'Щ' => "SHCH",
        'Ю' => "YU",
        'Я' => "YA",
        'Ь' | 'Ъ' | '\u{2BC}' | '\u{2019}' => "",
        _ => return None,
    };
    Some(folded)
}

/// Width in canvas pixels of `text` drawn at `scale`.
///
/// `text` must already be folded.
pub fn text_width(text: &str, scale: u32) -> u32 {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return 0;
    }
    (chars * ADVANCE - 1) * scale
}

/// Largest scale up to `preferred` at which `text` fits in `max_width`.
///
/// Never returns less than 1.
pub fn fit_scale(text: &str, preferred: u32, max_width: u32) -> u32 {
    (1..=preferred.max(1))
        .rev()
        .find(|&scale| text_width(text, scale) <= max_width)
        .unwrap_or(1)
}

/// Draws folded `text` centred on `center_x` with its bottom edge on `baseline`.
pub fn draw_text(
    canvas: &mut Canvas,
    text: &str,
    center_x: f64,
    baseline: f64,
    scale: u32,
    color: Color,
) {
    let width = text_width(text, scale) as f64;
    let left = (center_x - width / 2.0).round() as i64;
    let top = (baseline - (GLYPH_HEIGHT * scale) as f64).round() as i64;

    for (i, ch) in text.chars().enumerate() {
        let Some(rows) = glyph(ch) else {
            continue;
        };
        let origin_x = left + (i as u32 * ADVANCE * scale) as i64;
        for y in 0..GLYPH_HEIGHT {
            for x in 0..GLYPH_WIDTH {
                if glyph_pixel(rows, x, y) {
                    canvas.fill_rect(
                        origin_x + (x * scale) as i64,
                        top + (y * scale) as i64,
                        scale,
                        scale,
                        color,
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_glyph_coverage() {
        assert!(glyph(' ').is_some());
        assert!(glyph('A').is_some());
        assert!(glyph('Z').is_some());
        assert!(glyph('_').is_some());
        assert!(glyph('a').is_none());
        assert!(glyph('\u{1F}').is_none());
        assert_eq!(glyph(' ').unwrap(), &[0; 7]);
    }

    #[test]
    fn test_letter_a_shape() {
        let rows = glyph('A').unwrap();
        // Apex of the A is the middle three columns of the top row.
        assert!(!glyph_pixel(rows, 0, 0));
        assert!(glyph_pixel(rows, 1, 0));
        assert!(glyph_pixel(rows, 3, 0));
        assert!(!glyph_pixel(rows, 4, 0));
        // Crossbar.
        assert!((0..5).all(|x| glyph_pixel(rows, x, 3)));
    }

    #[test]
    fn test_fold() {
        assert_eq!(fold("Quiet Harbor"), "QUIET HARBOR");
        assert_eq!(fold("Müller Straße"), "MULLER STRASSE");
        assert_eq!(fold("Тихий Сад"), "TYKHYY SAD");
        assert_eq!(fold("R&B"), "R&B");
        assert_eq!(fold("snow~"), "SNOW?");
    }

    #[test]
    fn test_text_width_and_fit() {
        assert_eq!(text_width("", 3), 0);
        assert_eq!(text_width("A", 1), 5);
        assert_eq!(text_width("AB", 2), 22);
        assert_eq!(fit_scale("AB", 5, 100), 5);
        assert_eq!(fit_scale("AB", 5, 22), 2);
        assert_eq!(fit_scale("AB", 5, 3), 1);
    }

    #[test]
    fn test_draw_text_marks_pixels() {
        let mut canvas = Canvas::new(20, 10, Color::black());
        draw_text(&mut canvas, "I", 10.0, 9.0, 1, Color::white());
        let lit = canvas.data.iter().filter(|c| c.r > 0.5).count();
        let expected: u32 = glyph('I').unwrap().iter().map(|r| r.count_ones()).sum();
        assert_eq!(lit as u32, expected);
    }
}
