//! PNG encoding for the rendered RGBA board image.
//!
//! A board with composited glyphs and antialiased labels carries well
//! over 256 unique colors, so only truecolor-with-alpha (color type 6)
//! is emitted. The container is written chunk by chunk over `flate2`
//! (zlib IDAT) and `crc32fast` (chunk CRCs).

use std::io::Write;

use crate::error::{RenderError, RenderResult};

/// Create a PNG image from RGBA pixel data (color type 6).
///
/// # Arguments
/// - `pixels`: RGBA pixel data (4 bytes per pixel)
/// - `width`: Image width in pixels
/// - `height`: Image height in pixels
pub fn encode_rgba(pixels: &[u8], width: usize, height: usize) -> RenderResult<Vec<u8>> {
    let mut png = Vec::new();

    // PNG signature
    png.extend_from_slice(&[137, 80, 78, 71, 13, 10, 26, 10]);

    // IHDR chunk
    let mut ihdr_data = Vec::with_capacity(13);
    ihdr_data.extend_from_slice(&(width as u32).to_be_bytes());
    ihdr_data.extend_from_slice(&(height as u32).to_be_bytes());
    ihdr_data.push(8); // bit depth
    ihdr_data.push(6); // color type (RGBA)
    ihdr_data.push(0); // compression method
    ihdr_data.push(0); // filter method
    ihdr_data.push(0); // interlace method
    write_chunk(&mut png, b"IHDR", &ihdr_data);

    // IDAT chunk (image data)
    let idat_data = deflate_idat_rgba(pixels, width, height)
        .map_err(|e| RenderError::PngEncode(format!("IDAT compression failed: {e}")))?;
    write_chunk(&mut png, b"IDAT", &idat_data);

    // IEND chunk
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Deflate RGBA image data for the IDAT chunk.
fn deflate_idat_rgba(pixels: &[u8], width: usize, height: usize) -> std::io::Result<Vec<u8>> {
    // Add filter byte (0 = no filter) to each scanline
    let stride = width * 4;
    let mut uncompressed = Vec::with_capacity(height * (1 + stride));
    for y in 0..height {
        uncompressed.push(0); // filter type: none
        uncompressed.extend_from_slice(&pixels[y * stride..(y + 1) * stride]);
    }

    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::fast());
    encoder.write_all(&uncompressed)?;
    encoder.finish()
}

fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    png.extend_from_slice(&hasher.finalize().to_be_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_structure() {
        // 2x2: red, green / green, red
        let pixels = [
            255, 0, 0, 255, 0, 255, 0, 255, //
            0, 255, 0, 255, 255, 0, 0, 255,
        ];
        let png = encode_rgba(&pixels, 2, 2).unwrap();

        assert_eq!(&png[..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
        // First chunk is a 13-byte IHDR
        assert_eq!(&png[8..12], &13u32.to_be_bytes());
        assert_eq!(&png[12..16], b"IHDR");
        // Width and height
        assert_eq!(&png[16..20], &2u32.to_be_bytes());
        assert_eq!(&png[20..24], &2u32.to_be_bytes());
        // Bit depth 8, color type 6 (RGBA)
        assert_eq!(png[24], 8);
        assert_eq!(png[25], 6);
        // File ends with an empty IEND chunk (4 len + 4 type + 4 crc)
        assert_eq!(&png[png.len() - 8..png.len() - 4], b"IEND");
    }

    #[test]
    fn test_roundtrip_through_decoder() {
        let pixels = [
            255, 0, 0, 255, 0, 255, 0, 128, //
            0, 0, 255, 255, 0, 0, 0, 0,
        ];
        let png = encode_rgba(&pixels, 2, 2).unwrap();

        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (2, 2));
        assert_eq!(decoded.as_raw().as_slice(), &pixels);
    }

    #[test]
    fn test_deterministic_output() {
        let pixels: Vec<u8> = (0..16 * 16).flat_map(|i| [i as u8, 0, 255 - i as u8, 255]).collect();
        let a = encode_rgba(&pixels, 16, 16).unwrap();
        let b = encode_rgba(&pixels, 16, 16).unwrap();
        assert_eq!(a, b);
    }
}
