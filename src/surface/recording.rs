//! A surface that records draw calls instead of rasterizing them.

use std::fmt;

use glam::DVec2;

use super::{Font, NaturalSize, Surface, data_uri};
use crate::errors::BadgeError;
use crate::paint::Paint;

/// Stand-in image for the recording surface: a name plus natural size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedImage {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl RecordedImage {
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }
}

impl NaturalSize for RecordedImage {
    fn natural_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// One recorded surface call
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Resize { width: u32, height: u32 },
    Clear,
    DrawImage { image: String, origin: DVec2 },
    BeginPath,
    MoveTo(DVec2),
    LineTo(DVec2),
    QuadTo { ctrl: DVec2, to: DVec2 },
    ClosePath,
    Fill(Paint),
    FillText {
        text: String,
        center: DVec2,
        font: Font,
        paint: Paint,
    },
}

struct Pt(DVec2);

impl fmt::Display for Pt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0.x, self.0.y)
    }
}

impl fmt::Display for DrawOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawOp::Resize { width, height } => write!(f, "resize {width}x{height}"),
            DrawOp::Clear => f.write_str("clear"),
            DrawOp::DrawImage { image, origin } => write!(f, "image {image} at {}", Pt(*origin)),
            DrawOp::BeginPath => f.write_str("begin_path"),
            DrawOp::MoveTo(p) => write!(f, "move_to {}", Pt(*p)),
            DrawOp::LineTo(p) => write!(f, "line_to {}", Pt(*p)),
            DrawOp::QuadTo { ctrl, to } => write!(f, "quad_to {} {}", Pt(*ctrl), Pt(*to)),
            DrawOp::ClosePath => f.write_str("close_path"),
            DrawOp::Fill(paint) => write!(f, "fill {paint}"),
            DrawOp::FillText {
                text,
                center,
                font,
                paint,
            } => write!(f, "fill_text {text:?} at {} {font} {paint}", Pt(*center)),
        }
    }
}

/// Records every call. The encoded output is the text of the ops drawn
/// since the last clear, so two renders of the same state encode equally.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    size: Option<(u32, u32)>,
    ops: Vec<DrawOp>,
    frame_start: usize,
    refuse_storage: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// A surface whose storage can never be acquired.
    pub fn unavailable() -> Self {
        Self {
            refuse_storage: true,
            ..Self::default()
        }
    }

    pub fn size(&self) -> Option<(u32, u32)> {
        self.size
    }

    /// Every call recorded so far.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Ops since the last clear, i.e. what is currently on the surface.
    pub fn frame(&self) -> &[DrawOp] {
        &self.ops[self.frame_start..]
    }

    /// The current frame, one op per line.
    pub fn frame_text(&self) -> String {
        self.frame()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn count(&self, pred: impl Fn(&DrawOp) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

impl Surface for RecordingSurface {
    type Image = RecordedImage;

    fn resize(&mut self, width: u32, height: u32) -> Result<(), BadgeError> {
        if self.refuse_storage || width == 0 || height == 0 {
            self.size = None;
            return Err(BadgeError::SurfaceUnavailable { width, height });
        }
        self.size = Some((width, height));
        self.ops.push(DrawOp::Resize { width, height });
        self.frame_start = self.ops.len();
        Ok(())
    }

    fn clear(&mut self) -> Result<(), BadgeError> {
        if self.size.is_none() {
            return Err(BadgeError::SurfaceUnavailable {
                width: 0,
                height: 0,
            });
        }
        self.ops.push(DrawOp::Clear);
        self.frame_start = self.ops.len() - 1;
        Ok(())
    }

    fn draw_image(&mut self, image: &RecordedImage, origin: DVec2) {
        self.ops.push(DrawOp::DrawImage {
            image: image.name.clone(),
            origin,
        });
    }

    fn begin_path(&mut self) {
        self.ops.push(DrawOp::BeginPath);
    }

    fn move_to(&mut self, to: DVec2) {
        self.ops.push(DrawOp::MoveTo(to));
    }

    fn line_to(&mut self, to: DVec2) {
        self.ops.push(DrawOp::LineTo(to));
    }

    fn quad_to(&mut self, ctrl: DVec2, to: DVec2) {
        self.ops.push(DrawOp::QuadTo { ctrl, to });
    }

    fn close_path(&mut self) {
        self.ops.push(DrawOp::ClosePath);
    }

    fn fill(&mut self, paint: &Paint) {
        self.ops.push(DrawOp::Fill(paint.clone()));
    }

    fn fill_text(&mut self, text: &str, center: DVec2, font: &Font, paint: &Paint) {
        self.ops.push(DrawOp::FillText {
            text: text.to_string(),
            center,
            font: *font,
            paint: paint.clone(),
        });
    }

    fn encode(&self) -> Result<String, BadgeError> {
        if self.size.is_none() {
            return Err(BadgeError::SurfaceUnavailable {
                width: 0,
                height: 0,
            });
        }
        Ok(data_uri("text/plain", self.frame_text().as_bytes()))
    }
}
