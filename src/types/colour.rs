//! Colour type, parsing and compositing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{IconError, Result};

/// An RGBA colour value with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Same colour with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RRGGBB` (6 digits)
    /// - `#RRGGBBAA` (8 digits)
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if !hex.is_ascii() {
            return Err(invalid_hex(s));
        }

        match hex.len() {
            3 => {
                let r = parse_hex_byte(&hex[0..1])?;
                let g = parse_hex_byte(&hex[1..2])?;
                let b = parse_hex_byte(&hex[2..3])?;
                Ok(Self::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                Ok(Self::rgb(r, g, b))
            }
            8 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                let a = parse_hex_byte(&hex[6..8])?;
                Ok(Self::new(r, g, b, a))
            }
            _ => Err(invalid_hex(s)),
        }
    }

    /// Convert to RGBA array.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Check if the colour is fully transparent.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Composite `self` over `dst` with the "over" operator.
    ///
    /// `out_a = src_a + dst_a * (1 - src_a)`, and each channel is the
    /// alpha-weighted mix of source and destination normalised by `out_a`.
    /// Over an opaque destination this reduces to
    /// `src * src_a + dst * (1 - src_a)`.
    pub fn over(self, dst: Colour) -> Colour {
        if self.a == 0 {
            return dst;
        }
        if self.a == 255 {
            return self;
        }

        let src_a = self.a as f32 / 255.0;
        let dst_a = dst.a as f32 / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);

        let mix = |s: u8, d: u8| -> u8 {
            let value = (s as f32 * src_a + d as f32 * dst_a * (1.0 - src_a)) / out_a;
            value.round().clamp(0.0, 255.0) as u8
        };

        Colour::new(
            mix(self.r, dst.r),
            mix(self.g, dst.g),
            mix(self.b, dst.b),
            (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
        )
    }

    /// Rotate the hue by `degrees` in HSL space, keeping alpha.
    pub fn shift_hue(self, degrees: f32) -> Colour {
        use palette::{Hsl, IntoColor, ShiftHue, Srgb};

        let rgb: Srgb<f32> = Srgb::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        );

        let hsl: Hsl = rgb.into_color();
        let rgb_out: Srgb<f32> = hsl.shift_hue(degrees).into_color();

        Colour::new(
            (rgb_out.red.clamp(0.0, 1.0) * 255.0).round() as u8,
            (rgb_out.green.clamp(0.0, 1.0) * 255.0).round() as u8,
            (rgb_out.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
            self.a,
        )
    }
}

impl FromStr for Colour {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Serialize for Colour {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Colour::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

fn invalid_hex(s: &str) -> IconError {
    IconError::Config {
        message: format!("Invalid hex colour: {}", s),
        help: Some("Use #RGB, #RRGGBB, or #RRGGBBAA format".to_string()),
    }
}

/// Parse one or two hex digits.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| IconError::Config {
        message: format!("Invalid hex digits: {}", s),
        help: None,
    })
}
