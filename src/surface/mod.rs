//! Drawing surface capability
//!
//! The render pipeline talks to a 2D surface only through [`Surface`]. Two
//! implementations ship with the crate:
//! - `recording`: logs every call, encodes the log (tests, inspection)
//! - `pixmap`: rasterizes with tiny-skia, encodes PNG (feature `pixmap`)

use std::fmt;

use base64::Engine;
use glam::DVec2;

use crate::errors::BadgeError;
use crate::paint::Paint;

#[cfg(feature = "pixmap")]
pub mod glyphs;
#[cfg(feature = "pixmap")]
pub mod pixmap;
pub mod recording;

#[cfg(feature = "pixmap")]
pub use pixmap::PixmapSurface;
pub use recording::{DrawOp, RecordedImage, RecordingSurface};

/// Anything with intrinsic pixel dimensions, known once loading completes.
pub trait NaturalSize {
    fn natural_size(&self) -> (u32, u32);
}

/// Font used for the badge label. Text is always centered horizontally and
/// vertically on the point it is drawn at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Font {
    pub size: f64,
    pub bold: bool,
}

impl Font {
    pub fn bold(size: f64) -> Self {
        Font { size, bold: true }
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bold {
            f.write_str("bold ")?;
        }
        write!(f, "{}px sans-serif", self.size)
    }
}

/// A 2D raster the badge paints into and encodes from.
///
/// Path calls follow the conventional canvas model: `begin_path` discards
/// the current path, the construction calls extend it, and `fill` paints
/// it without consuming it.
pub trait Surface {
    type Image: NaturalSize;

    /// (Re)acquire backing storage of exactly `width` x `height` pixels.
    fn resize(&mut self, width: u32, height: u32) -> Result<(), BadgeError>;

    /// Clear every pixel to transparent. Fails when no storage is held.
    fn clear(&mut self) -> Result<(), BadgeError>;

    /// Blit `image` at native size with its top-left corner at `origin`.
    fn draw_image(&mut self, image: &Self::Image, origin: DVec2);

    fn begin_path(&mut self);
    fn move_to(&mut self, to: DVec2);
    fn line_to(&mut self, to: DVec2);
    fn quad_to(&mut self, ctrl: DVec2, to: DVec2);
    fn close_path(&mut self);
    fn fill(&mut self, paint: &Paint);

    /// Draw `text` centered on `center`.
    fn fill_text(&mut self, text: &str, center: DVec2, font: &Font, paint: &Paint);

    /// Encode the current contents as a data URI.
    fn encode(&self) -> Result<String, BadgeError>;
}

/// Build a `data:` URI with a base64 payload.
pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
    let payload = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{mime};base64,{payload}")
}
