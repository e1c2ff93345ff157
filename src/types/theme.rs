//! Brand colour theme shared by every icon composer.

use serde::{Deserialize, Serialize};

use super::Colour;

/// The five colours the icons are painted with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Main brand blue (#3b82f6).
    pub primary: Colour,

    /// Darker blue for depth and outlines (#2563eb).
    pub secondary: Colour,

    /// Pale blue for fibres, dots and highlights (#93c5fd).
    pub light: Colour,

    pub white: Colour,

    /// Lens body and label shadow (#6b7280).
    pub gray: Colour,

    /// Hue rotation in degrees applied to every colour above.
    pub hue_shift: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Colour::rgb(59, 130, 246),
            secondary: Colour::rgb(37, 99, 235),
            light: Colour::rgb(147, 197, 253),
            white: Colour::WHITE,
            gray: Colour::rgb(107, 114, 128),
            hue_shift: 0.0,
        }
    }
}

impl Theme {
    /// Resolve `hue_shift` into the colours themselves.
    ///
    /// The returned theme has `hue_shift == 0.0`, so resolving twice is a no-op.
    pub fn resolved(&self) -> Theme {
        if self.hue_shift == 0.0 {
            return *self;
        }

        let shift = self.hue_shift;
        Theme {
            primary: self.primary.shift_hue(shift),
            secondary: self.secondary.shift_hue(shift),
            light: self.light.shift_hue(shift),
            white: self.white.shift_hue(shift),
            gray: self.gray.shift_hue(shift),
            hue_shift: 0.0,
        }
    }
}
