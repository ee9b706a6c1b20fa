//! Paint descriptors and CSS color parsing

use std::fmt;
use std::str::FromStr;

use crate::errors::BadgeError;

/// An opaque fill descriptor handed to the drawing surface unvalidated.
///
/// Conventionally a CSS color (`"red"`, `"#ff0000"`, `"rgba(0,0,0,0.5)"`),
/// but a surface may accept anything it knows how to resolve, such as the
/// name of a gradient it registered itself.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Paint(String);

impl Paint {
    pub fn new(descriptor: impl Into<String>) -> Self {
        Paint(descriptor.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve as a solid CSS color.
    pub fn to_color(&self) -> Result<Color, BadgeError> {
        self.0.parse()
    }
}

impl From<&str> for Paint {
    fn from(s: &str) -> Self {
        Paint::new(s)
    }
}

impl From<String> for Paint {
    fn from(s: String) -> Self {
        Paint(s)
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Straight (non-premultiplied) 8-bit RGBA color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "rgb({},{},{})", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
        }
    }
}

/// CSS named colors likely to show up in badge styling.
const NAMED_COLORS: &[(&str, Color)] = &[
    ("black", Color::rgb(0, 0, 0)),
    ("white", Color::rgb(255, 255, 255)),
    ("red", Color::rgb(255, 0, 0)),
    ("green", Color::rgb(0, 128, 0)),
    ("lime", Color::rgb(0, 255, 0)),
    ("blue", Color::rgb(0, 0, 255)),
    ("yellow", Color::rgb(255, 255, 0)),
    ("cyan", Color::rgb(0, 255, 255)),
    ("aqua", Color::rgb(0, 255, 255)),
    ("magenta", Color::rgb(255, 0, 255)),
    ("fuchsia", Color::rgb(255, 0, 255)),
    ("orange", Color::rgb(255, 165, 0)),
    ("orangered", Color::rgb(255, 69, 0)),
    ("purple", Color::rgb(128, 0, 128)),
    ("brown", Color::rgb(165, 42, 42)),
    ("pink", Color::rgb(255, 192, 203)),
    ("crimson", Color::rgb(220, 20, 60)),
    ("gold", Color::rgb(255, 215, 0)),
    ("navy", Color::rgb(0, 0, 128)),
    ("teal", Color::rgb(0, 128, 128)),
    ("gray", Color::rgb(128, 128, 128)),
    ("grey", Color::rgb(128, 128, 128)),
    ("lightgray", Color::rgb(211, 211, 211)),
    ("lightgrey", Color::rgb(211, 211, 211)),
    ("darkgray", Color::rgb(169, 169, 169)),
    ("darkgrey", Color::rgb(169, 169, 169)),
    ("silver", Color::rgb(192, 192, 192)),
    ("transparent", Color::TRANSPARENT),
];

impl FromStr for Color {
    type Err = BadgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BadgeError::InvalidColor {
            value: s.to_string(),
        };
        let value = s.trim().to_ascii_lowercase();

        if let Some(hex) = value.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(invalid);
        }
        if let Some(args) = value
            .strip_prefix("rgba(")
            .or_else(|| value.strip_prefix("rgb("))
        {
            let args = args.strip_suffix(')').ok_or_else(invalid)?;
            return parse_rgb_args(args).ok_or_else(invalid);
        }
        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == value)
            .map(|(_, color)| *color)
            .ok_or_else(invalid)
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    // Short forms repeat each nibble: #f80 == #ff8800
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|n| n * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => Some(Color::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
        4 => Some(Color::rgba(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
        6 => Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

fn parse_rgb_args(args: &str) -> Option<Color> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let channel = |s: &str| -> Option<u8> {
        let v: f64 = s.parse().ok()?;
        v.is_finite().then(|| v.round().clamp(0.0, 255.0) as u8)
    };
    match parts.as_slice() {
        [r, g, b] => Some(Color::rgb(channel(r)?, channel(g)?, channel(b)?)),
        [r, g, b, a] => {
            let alpha: f64 = a.parse().ok()?;
            if !alpha.is_finite() {
                return None;
            }
            let alpha = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
            Some(Color::rgba(channel(r)?, channel(g)?, channel(b)?, alpha))
        }
        _ => None,
    }
}
