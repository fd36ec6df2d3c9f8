//! Deterministic PNG writer.
//!
//! Uses fixed compression and filter settings so the same canvas always
//! encodes to the same bytes. The `png` crate writes no timestamps.

use std::io::Write;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};

use crate::canvas::Canvas;
use crate::error::TextureResult;

const COMPRESSION: Compression = Compression::Default;
const FILTER: FilterType = FilterType::NoFilter;

/// An encoded image and the BLAKE3 hex digest of its bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPng {
    pub data: Vec<u8>,
    pub hash: String,
}

/// Encodes `canvas` as 8-bit RGBA and streams it into `writer`.
pub fn encode_to<W: Write>(canvas: &Canvas, writer: W) -> TextureResult<()> {
    let mut encoder = Encoder::new(writer, canvas.width, canvas.height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(COMPRESSION);
    encoder.set_filter(FILTER);

    let mut stream = encoder.write_header()?;
    stream.write_image_data(&canvas.to_rgba8())?;
    stream.finish()?;
    Ok(())
}

/// Encodes `canvas` in memory.
pub fn encode(canvas: &Canvas) -> TextureResult<EncodedPng> {
    let mut data = Vec::new();
    encode_to(canvas, &mut data)?;
    let hash = hash_png(&data);
    Ok(EncodedPng { data, hash })
}

/// BLAKE3 hex digest of encoded PNG bytes.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn gradient_canvas() -> Canvas {
        let mut canvas = Canvas::new(64, 64, Color::black());
        for y in 0..64 {
            for x in 0..64 {
                canvas.set(x, y, Color::rgb(x as f64 / 63.0, y as f64 / 63.0, 0.5));
            }
        }
        canvas
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let canvas = gradient_canvas();
        let first = encode(&canvas).unwrap();
        let second = encode(&canvas).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.hash, hash_png(&first.data));
        assert_eq!(&first.data[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_decodes_to_same_pixels() {
        let canvas = gradient_canvas();
        let mut data = Vec::new();
        encode_to(&canvas, &mut data).unwrap();

        let decoder = png::Decoder::new(std::io::Cursor::new(data));
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        assert_eq!((info.width, info.height), (64, 64));
        assert_eq!(&buf[..info.buffer_size()], canvas.to_rgba8().as_slice());
    }
}
