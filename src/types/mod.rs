//! Core domain types for the icon pipeline.
//!
//! - `Colour` - RGBA colour values with "over" compositing
//! - `Point` - floating-point pixel coordinates for geometry construction
//! - `Theme` - the brand colours every composer paints with

mod colour;
mod point;
mod theme;

pub use colour::Colour;
pub use point::Point;
pub use theme::Theme;
