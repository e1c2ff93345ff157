//! PNG output for rendered canvases.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::ImageFormat;

use crate::error::{IconError, Result};

use super::Canvas;

/// Encode a canvas as PNG bytes.
///
/// `path` is only used to label the error.
pub fn encode_png(canvas: &Canvas, path: &Path) -> Result<Vec<u8>> {
    let mut bytes = Cursor::new(Vec::new());
    canvas
        .to_image()
        .write_to(&mut bytes, ImageFormat::Png)
        .map_err(|e| IconError::Encoding {
            path: path.to_path_buf(),
            message: format!("Failed to encode PNG: {}", e),
        })?;

    Ok(bytes.into_inner())
}

/// Write a canvas to a PNG file, consuming it.
pub fn write_png(canvas: Canvas, path: &Path) -> Result<()> {
    let bytes = encode_png(&canvas, path)?;

    fs::write(path, bytes).map_err(|e| IconError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}
