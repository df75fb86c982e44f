//! RGBA PNG dumps of rendered color/alpha buffers

use crate::error::{TestError, TestResult};
use pixwarp_core::PixelFormat;
use png::{BitDepth, ColorType, Decoder, Encoder};
use std::fs::File;
use std::io::{BufReader, BufWriter};

/// Interleave a color array and an alpha array into RGBA8 bytes
pub(crate) fn to_rgba<F: PixelFormat>(colors: &[F::Color], alphas: &[u8]) -> Vec<u8> {
    let mut data = Vec::with_capacity(colors.len() * 4);
    for (&c, &a) in colors.iter().zip(alphas) {
        let [r, g, b] = F::to_rgb8(c);
        data.extend_from_slice(&[r, g, b, a]);
    }
    data
}

/// Write RGBA8 bytes as a PNG file
pub(crate) fn write_rgba(path: &str, width: u32, height: u32, data: &[u8]) -> TestResult<()> {
    let write_err = |message: String| TestError::ImageWrite {
        path: path.to_string(),
        message,
    };

    let file = File::create(path)?;
    let mut encoder = Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| write_err(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(data)
        .map_err(|e| write_err(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| write_err(format!("PNG finish error: {}", e)))?;
    Ok(())
}

/// Decoded PNG contents: width, height and raw frame bytes
pub(crate) fn read_raw(path: &str) -> TestResult<(u32, u32, Vec<u8>)> {
    let read_err = |message: String| TestError::ImageRead {
        path: path.to_string(),
        message,
    };

    let file = File::open(path)?;
    let mut reader = Decoder::new(BufReader::new(file))
        .read_info()
        .map_err(|e| read_err(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| read_err("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| read_err(format!("PNG frame error: {}", e)))?;
    buf.truncate(info.buffer_size());

    Ok((info.width, info.height, buf))
}
