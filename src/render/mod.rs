//! Rasterisation and encoding.
//!
//! [`Canvas`] is the pixel buffer every icon is painted on; [`write_png`]
//! persists a finished canvas.

mod canvas;
pub mod font;
mod png;

pub use canvas::{Canvas, MAX_SIZE};
pub use png::{encode_png, write_png};
