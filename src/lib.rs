//! pwa-icons - Procedural icon set generator
//!
//! Draws the primary app icon at every configured resolution plus three
//! shortcut icons onto an RGBA canvas and writes them as PNG files.

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod geometry;
pub mod icons;
pub mod output;
pub mod render;
pub mod types;

pub use config::GeneratorConfig;
pub use error::{IconError, Result};
pub use export::{
    export_all, export_each, manifest_json, plan, write_manifest, BatchReport, FileStatus, IconJob,
};
pub use icons::IconKind;
pub use render::{encode_png, write_png, Canvas, MAX_SIZE};
pub use types::{Colour, Point, Theme};
