//! Badge rendering
//!
//! This module is organized into submodules:
//! - `defaults`: Default option values and label proportions
//! - `geometry`: Badge square placement
//! - `path`: Pill outline construction
//!
//! [`render`] repaints a surface from scratch: base image, then (for a
//! non-zero value) the pill and its label, then encodes the result.

pub mod defaults;
pub mod geometry;
pub mod path;

pub use geometry::Geometry;
pub use path::{BadgePath, PathCommand};

use glam::{DVec2, dvec2};

use crate::errors::BadgeError;
use crate::store::BadgeOptions;
use crate::surface::{Font, Surface};
use crate::types::BadgeValue;

/// Repaint `surface` and return its encoding.
///
/// Without geometry (no image loaded yet) only the base image is drawn, if
/// there is one, and the value is ignored. Fails without drawing anything
/// when the surface holds no storage.
pub fn render<S: Surface>(
    surface: &mut S,
    image: Option<&S::Image>,
    geometry: Option<&Geometry>,
    value: BadgeValue,
    options: &BadgeOptions,
) -> Result<String, BadgeError> {
    surface.clear()?;
    if let Some(image) = image {
        surface.draw_image(image, DVec2::ZERO);
    }

    if let Some(geometry) = geometry.filter(|_| !value.is_hidden()) {
        geometry.pill_path(options.corner_radius).replay(surface);
        surface.fill(&options.background_fill);

        let font = Font::bold(defaults::FONT_SCALE * geometry.side);
        let label_at = geometry.center() + dvec2(0.0, defaults::BASELINE_NUDGE * geometry.side);
        surface.fill_text(&value.to_string(), label_at, &font, &options.text_fill);
    }

    surface.encode()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::AnchorPosition;
    use crate::surface::{RecordedImage, RecordingSurface};
    use crate::types::SizeFraction;

    fn setup(position: AnchorPosition) -> (RecordingSurface, RecordedImage, Geometry) {
        let mut surface = RecordingSurface::new();
        surface.resize(100, 100).unwrap();
        let image = RecordedImage::new("icon.png", 100, 100);
        let geometry = Geometry::compute(100, 100, SizeFraction::clamped(0.5), position);
        (surface, image, geometry)
    }

    #[test]
    fn paints_pill_and_label() {
        let (mut surface, image, geometry) = setup(AnchorPosition::TopRight);
        render(
            &mut surface,
            Some(&image),
            Some(&geometry),
            BadgeValue::clamped(7),
            &BadgeOptions::default(),
        )
        .unwrap();

        insta::assert_snapshot!(surface.frame_text(), @r#"
        clear
        image icon.png at (0, 0)
        begin_path
        move_to (58, 0)
        line_to (92, 0)
        quad_to (100, 0) (100, 8)
        line_to (100, 42)
        quad_to (100, 50) (92, 50)
        line_to (58, 50)
        quad_to (50, 50) (50, 42)
        line_to (50, 8)
        quad_to (50, 0) (58, 0)
        close_path
        fill red
        fill_text "7" at (75, 29.5) bold 35px sans-serif white
        "#);
    }

    #[test]
    fn zero_value_draws_only_the_base_image() {
        let (mut surface, image, geometry) = setup(AnchorPosition::Center);
        let url = render(
            &mut surface,
            Some(&image),
            Some(&geometry),
            BadgeValue::ZERO,
            &BadgeOptions::default(),
        )
        .unwrap();

        insta::assert_snapshot!(surface.frame_text(), @r"
        clear
        image icon.png at (0, 0)
        ");
        assert_eq!(url, surface.encode().unwrap());
    }

    #[test]
    fn two_digit_label_and_custom_paints() {
        let (mut surface, image, geometry) = setup(AnchorPosition::BottomLeft);
        let options = BadgeOptions::default()
            .with_background_fill("#1e90ff")
            .with_text_fill("black")
            .with_corner_radius(0.0);
        render(
            &mut surface,
            Some(&image),
            Some(&geometry),
            BadgeValue::clamped(250),
            &options,
        )
        .unwrap();

        let last = surface.frame().last().unwrap().to_string();
        assert_eq!(last, r#"fill_text "99" at (25, 79.5) bold 35px sans-serif black"#);
        assert!(surface.frame_text().contains("fill #1e90ff"));
    }

    #[test]
    fn unavailable_surface_fails_before_drawing() {
        let mut surface = RecordingSurface::unavailable();
        let _ = surface.resize(100, 100);
        let image = RecordedImage::new("icon.png", 100, 100);
        let geometry =
            Geometry::compute(100, 100, SizeFraction::clamped(0.5), AnchorPosition::TopRight);
        let err = render(
            &mut surface,
            Some(&image),
            Some(&geometry),
            BadgeValue::clamped(3),
            &BadgeOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, BadgeError::SurfaceUnavailable { .. }));
        assert!(surface.ops().is_empty());
    }

    #[test]
    fn without_geometry_only_the_base_image_is_drawn() {
        let (mut surface, image, _) = setup(AnchorPosition::TopRight);
        render(
            &mut surface,
            Some(&image),
            None,
            BadgeValue::clamped(5),
            &BadgeOptions::default(),
        )
        .unwrap();
        insta::assert_snapshot!(surface.frame_text(), @r"
        clear
        image icon.png at (0, 0)
        ");

        render(
            &mut surface,
            None,
            None,
            BadgeValue::clamped(5),
            &BadgeOptions::default(),
        )
        .unwrap();
        assert_eq!(surface.frame_text(), "clear");
    }
}
