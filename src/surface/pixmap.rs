//! Raster surface backed by a tiny-skia pixmap, encoding to PNG data URIs.

use base64::Engine;
use glam::DVec2;
use tiny_skia::{
    FillRule, LineCap, LineJoin, Paint as SkiaPaint, PathBuilder, Pixmap, PixmapPaint, Stroke,
    Transform,
};

use super::{Font, NaturalSize, Surface, data_uri, glyphs};
use crate::errors::BadgeError;
use crate::paint::{Color, Paint};
use crate::render::PathCommand;

impl NaturalSize for Pixmap {
    fn natural_size(&self) -> (u32, u32) {
        (self.width(), self.height())
    }
}

/// Decode PNG bytes into an image the pixmap surface can draw.
pub fn decode_png(bytes: &[u8]) -> Result<Pixmap, BadgeError> {
    Pixmap::decode_png(bytes).map_err(|e| BadgeError::ImageDecode {
        message: e.to_string(),
    })
}

/// Decode a `data:image/png;base64,…` URI.
pub fn decode_data_uri(uri: &str) -> Result<Pixmap, BadgeError> {
    let payload = uri
        .strip_prefix("data:image/png;base64,")
        .ok_or_else(|| BadgeError::ImageDecode {
            message: "expected a base64 PNG data URI".to_string(),
        })?;
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload.trim())
        .map_err(|e| BadgeError::ImageDecode {
            message: e.to_string(),
        })?;
    decode_png(&bytes)
}

/// Storage is acquired by the first [`Surface::resize`]; until then every
/// drawing call is a no-op and clearing or encoding fails.
#[derive(Debug, Default)]
pub struct PixmapSurface {
    pixmap: Option<Pixmap>,
    path: Vec<PathCommand>,
}

impl PixmapSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pixmap(&self) -> Option<&Pixmap> {
        self.pixmap.as_ref()
    }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn skia_paint(paint: &Paint) -> SkiaPaint<'static> {
    let color = paint.to_color().unwrap_or_else(|err| {
        crate::log::warn!(%err, "unsupported paint, filling with black");
        Color::BLACK
    });
    let mut out = SkiaPaint::default();
    out.set_color_rgba8(color.r, color.g, color.b, color.a);
    out.anti_alias = true;
    out
}

fn skia_path(commands: &[PathCommand]) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for cmd in commands {
        match *cmd {
            PathCommand::MoveTo(p) => pb.move_to(p.x as f32, p.y as f32),
            PathCommand::LineTo(p) => pb.line_to(p.x as f32, p.y as f32),
            PathCommand::QuadTo { ctrl, to } => {
                pb.quad_to(ctrl.x as f32, ctrl.y as f32, to.x as f32, to.y as f32)
            }
            PathCommand::Close => pb.close(),
        }
    }
    pb.finish()
}

fn polyline_path(points: &[DVec2]) -> Option<tiny_skia::Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x as f32, first.y as f32);
    for p in rest {
        pb.line_to(p.x as f32, p.y as f32);
    }
    pb.finish()
}

impl Surface for PixmapSurface {
    type Image = Pixmap;

    fn resize(&mut self, width: u32, height: u32) -> Result<(), BadgeError> {
        self.pixmap = Pixmap::new(width, height);
        self.path.clear();
        match self.pixmap {
            Some(_) => Ok(()),
            None => Err(BadgeError::SurfaceUnavailable { width, height }),
        }
    }

    fn clear(&mut self) -> Result<(), BadgeError> {
        let pixmap = self.pixmap.as_mut().ok_or(BadgeError::SurfaceUnavailable {
            width: 0,
            height: 0,
        })?;
        pixmap.fill(tiny_skia::Color::TRANSPARENT);
        Ok(())
    }

    fn draw_image(&mut self, image: &Pixmap, origin: DVec2) {
        if let Some(pixmap) = self.pixmap.as_mut() {
            pixmap.draw_pixmap(
                origin.x.round() as i32,
                origin.y.round() as i32,
                image.as_ref(),
                &PixmapPaint::default(),
                Transform::identity(),
                None,
            );
        }
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, to: DVec2) {
        self.path.push(PathCommand::MoveTo(to));
    }

    fn line_to(&mut self, to: DVec2) {
        self.path.push(PathCommand::LineTo(to));
    }

    fn quad_to(&mut self, ctrl: DVec2, to: DVec2) {
        self.path.push(PathCommand::QuadTo { ctrl, to });
    }

    fn close_path(&mut self) {
        self.path.push(PathCommand::Close);
    }

    fn fill(&mut self, paint: &Paint) {
        let Some(pixmap) = self.pixmap.as_mut() else {
            return;
        };
        let Some(path) = skia_path(&self.path) else {
            crate::log::debug!("degenerate path, nothing to fill");
            return;
        };
        pixmap.fill_path(
            &path,
            &skia_paint(paint),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    fn fill_text(&mut self, text: &str, center: DVec2, font: &Font, paint: &Paint) {
        let Some(pixmap) = self.pixmap.as_mut() else {
            return;
        };
        // A zero-width stroke would be drawn as a hairline.
        if font.size.is_nan() || font.size <= 0.0 {
            return;
        }
        let stroke = Stroke {
            width: glyphs::stroke_width(font) as f32,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };
        let paint = skia_paint(paint);
        for line in glyphs::outline(text, center, font) {
            if let Some(path) = polyline_path(&line) {
                pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
            }
        }
    }

    fn encode(&self) -> Result<String, BadgeError> {
        let pixmap = self.pixmap.as_ref().ok_or(BadgeError::SurfaceUnavailable {
            width: 0,
            height: 0,
        })?;
        let png = pixmap.encode_png().map_err(|e| BadgeError::Encode {
            message: e.to_string(),
        })?;
        Ok(data_uri("image/png", &png))
    }
}
