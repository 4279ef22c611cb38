//! PNG snapshots as pixel buffers.
//!
//! Screenshots stand in for a live screen in the CLI and in tests. Every
//! color type is normalized to 8-bit RGB on read; alpha is dropped.
//!
//! # Example
//!
//! ```rust,ignore
//! use huepick_sample::png;
//!
//! let shot = png::read("screenshot.png")?;
//! png::write("crop.png", &shot.region(rect)?)?;
//! ```

use huepick_core::{Error, PixelBuffer, Rect, Result, Rgb8};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Cursor, Seek};
use std::path::Path;
use tracing::debug;

fn decode_error(e: png::DecodingError) -> Error {
    Error::capture_unavailable(format!("PNG decode failed: {e}"))
}

/// Reads a PNG file into a buffer at origin `(0, 0)`.
///
/// # Errors
///
/// I/O errors pass through; malformed data is [`Error::CaptureUnavailable`].
pub fn read<P: AsRef<Path>>(path: P) -> Result<PixelBuffer> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let buf = decode(BufReader::new(file))?;
    debug!(path = %path.display(), rect = %buf.rect(), "loaded png");
    Ok(buf)
}

/// Decodes PNG bytes held in memory.
pub fn read_bytes(bytes: &[u8]) -> Result<PixelBuffer> {
    decode(Cursor::new(bytes))
}

fn decode<R: BufRead + Seek>(source: R) -> Result<PixelBuffer> {
    let mut decoder = png::Decoder::new(source);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info().map_err(decode_error)?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| Error::capture_unavailable("cannot determine PNG buffer size"))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader.next_frame(&mut buf).map_err(decode_error)?;
    let data = &buf[..info.buffer_size()];

    let rect = Rect::from_size(info.width, info.height);
    let rgb: Vec<u8> = match (info.color_type, info.bit_depth) {
        (png::ColorType::Rgb, png::BitDepth::Eight) => data.to_vec(),
        (png::ColorType::Rgba, png::BitDepth::Eight) => {
            data.chunks_exact(4).flat_map(|p| [p[0], p[1], p[2]]).collect()
        }
        (png::ColorType::Grayscale, png::BitDepth::Eight) => {
            data.iter().flat_map(|&g| [g, g, g]).collect()
        }
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => {
            data.chunks_exact(2).flat_map(|p| [p[0], p[0], p[0]]).collect()
        }
        (color_type, bit_depth) => {
            return Err(Error::capture_unavailable(format!(
                "unsupported PNG layout {color_type:?} {bit_depth:?}"
            )));
        }
    };
    PixelBuffer::from_data(rect, &rgb)
}

/// Writes a buffer as 8-bit RGB PNG, ignoring its screen origin.
pub fn write<P: AsRef<Path>>(path: P, buffer: &PixelBuffer) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), buffer.width(), buffer.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

    let encode_error = |e: png::EncodingError| Error::other(format!("PNG encode failed: {e}"));
    let mut writer = encoder.write_header().map_err(encode_error)?;
    let bytes: Vec<u8> = buffer
        .pixels()
        .iter()
        .flat_map(|p: &Rgb8| [p.r, p.g, p.b])
        .collect();
    writer.write_image_data(&bytes).map_err(encode_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use huepick_core::Point;
    use tempfile::TempDir;

    #[test]
    fn test_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shot.png");
        let buf = PixelBuffer::from_fn(Rect::from_size(5, 3), |p| {
            Rgb8::new(p.x as u8 * 50, p.y as u8 * 100, 7)
        });
        write(&path, &buf).unwrap();

        let back = read(&path).unwrap();
        assert_eq!(back.rect(), buf.rect());
        assert_eq!(back.get(Point::new(4, 2)), Some(Rgb8::new(200, 200, 7)));
        assert_eq!(back, buf);
    }

    #[test]
    fn test_garbage_is_capture_error() {
        let err = read_bytes(b"definitely not a png").unwrap_err();
        assert!(err.is_capture_error());
    }

    #[test]
    fn test_missing_file_is_io() {
        let dir = TempDir::new().unwrap();
        assert!(read(dir.path().join("missing.png")).unwrap_err().is_io_error());
    }
}
