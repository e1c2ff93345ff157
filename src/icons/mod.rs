//! Icon composers.
//!
//! Each composer is a pure function of the requested pixel size: it
//! allocates a fresh [`Canvas`], paints a fixed back-to-front sequence of
//! primitives, and hands the canvas back. Every length it uses is a
//! fraction of `size`, so the layouts scale with the output resolution.

pub mod assignments;
pub mod capture;
pub mod primary;
pub mod sync;

use std::fmt;

use crate::error::Result;
use crate::render::Canvas;
use crate::types::{Point, Theme};

/// The icon variants the generator knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    /// Brand icon, rendered at every size in the size matrix.
    Primary,
    Capture,
    Assignments,
    Sync,
}

impl IconKind {
    /// Shortcut icons in output order.
    pub const SHORTCUTS: [IconKind; 3] = [IconKind::Capture, IconKind::Assignments, IconKind::Sync];

    /// Render this icon at `size` pixels square.
    ///
    /// Fails only with [`IconError::InvalidSize`](crate::IconError::InvalidSize)
    /// when `size <= 0`.
    pub fn render(self, size: i32, theme: &Theme, label: &str) -> Result<Canvas> {
        match self {
            IconKind::Primary => primary::render(size, theme, label),
            IconKind::Capture => capture::render(size, theme),
            IconKind::Assignments => assignments::render(size, theme),
            IconKind::Sync => sync::render(size, theme),
        }
    }

    /// Output filename for this icon at `size`.
    pub fn file_name(self, size: i32) -> String {
        match self {
            IconKind::Primary => format!("icon-{size}x{size}.png"),
            shortcut => format!("shortcut-{}.png", shortcut.slug()),
        }
    }

    /// Lowercase identifier.
    pub fn slug(self) -> &'static str {
        match self {
            IconKind::Primary => "primary",
            IconKind::Capture => "capture",
            IconKind::Assignments => "assignments",
            IconKind::Sync => "sync",
        }
    }

    /// Human-readable name, used for web-manifest shortcuts.
    pub fn title(self) -> &'static str {
        match self {
            IconKind::Primary => "Primary",
            IconKind::Capture => "Capture",
            IconKind::Assignments => "Assignments",
            IconKind::Sync => "Sync",
        }
    }
}

impl fmt::Display for IconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// The whole-pixel centre of a `size`-pixel canvas.
pub(crate) fn center_of(size: f64) -> Point {
    let c = (size / 2.0).floor();
    Point::new(c, c)
}

/// `size * fraction`, truncated to whole pixels.
pub(crate) fn frac(size: f64, fraction: f64) -> f64 {
    (size * fraction).floor()
}

/// Stroke width of `size / divisor` pixels, never thinner than `min`.
pub(crate) fn stroke(size: f64, divisor: f64, min: f64) -> f64 {
    (size / divisor).floor().max(min)
}
