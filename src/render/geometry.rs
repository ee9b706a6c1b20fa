//! Badge geometry: the square the pill occupies inside the image.

use glam::{DVec2, dvec2};

use super::path::BadgePath;
use crate::anchor::AnchorPosition;
use crate::types::{CornerRadius, SizeFraction};

/// Derived badge placement for one image size and option set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    /// Natural image width, also the surface width.
    pub width: u32,
    /// Natural image height, also the surface height.
    pub height: u32,
    /// Side length of the badge square.
    pub side: f64,
    /// Top-left corner of the badge square.
    pub offset: DVec2,
}

impl Geometry {
    /// `side = fraction × min(width, height)`, and the free space on each
    /// axis is distributed by the anchor weights:
    /// `offset = weights × (size − side)`.
    ///
    /// Expects a loaded image (`width, height > 0`).
    pub fn compute(
        width: u32,
        height: u32,
        fraction: SizeFraction,
        position: AnchorPosition,
    ) -> Self {
        debug_assert!(width > 0 && height > 0, "geometry needs a loaded image");
        let size = dvec2(f64::from(width), f64::from(height));
        let side = fraction.raw() * size.min_element();
        let offset = position.weights() * (size - DVec2::splat(side));
        Self {
            width,
            height,
            side,
            offset,
        }
    }

    pub fn center(&self) -> DVec2 {
        self.offset + DVec2::splat(self.side / 2.0)
    }

    pub fn pill_path(&self, radius: CornerRadius) -> BadgePath {
        BadgePath::rounded_square(self.offset, self.side, radius.raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::path::PathCommand;

    const EPSILON: f64 = 1e-9;

    fn assert_vec_eq(actual: DVec2, expected: DVec2) {
        assert!(
            (actual - expected).abs().max_element() < EPSILON,
            "{actual:?} != {expected:?}"
        );
    }

    fn half() -> SizeFraction {
        SizeFraction::clamped(0.5)
    }

    #[test]
    fn top_right_on_square_image() {
        let g = Geometry::compute(100, 100, half(), AnchorPosition::TopRight);
        assert_eq!(g.side, 50.0);
        assert_eq!(g.offset, dvec2(50.0, 0.0));
    }

    #[test]
    fn center_on_square_image() {
        let g = Geometry::compute(100, 100, half(), AnchorPosition::Center);
        assert_eq!(g.offset, dvec2(25.0, 25.0));
        assert_eq!(g.center(), dvec2(50.0, 50.0));
    }

    #[test]
    fn side_uses_shorter_dimension() {
        let g = Geometry::compute(200, 80, half(), AnchorPosition::BottomRight);
        assert_eq!(g.side, 40.0);
        assert_eq!(g.offset, dvec2(160.0, 40.0));
    }

    #[test]
    fn every_anchor_follows_its_weights() {
        let sizes = [(16, 16), (32, 24), (7, 90), (640, 480)];
        let fractions = [0.0, 0.25, 0.6, 1.0];
        for (w, h) in sizes {
            for f in fractions {
                for pos in AnchorPosition::ALL {
                    let g = Geometry::compute(w, h, SizeFraction::clamped(f), pos);
                    let side = f * f64::from(w.min(h));
                    assert!((g.side - side).abs() < EPSILON);
                    let expected = pos.weights()
                        * dvec2(f64::from(w) - side, f64::from(h) - side);
                    assert_vec_eq(g.offset, expected);
                }
            }
        }
    }

    #[test]
    fn full_fraction_leaves_no_slack_on_short_axis() {
        let g = Geometry::compute(64, 32, SizeFraction::clamped(1.0), AnchorPosition::Bottom);
        assert_eq!(g.side, 32.0);
        assert_eq!(g.offset, dvec2(16.0, 0.0));
    }

    #[test]
    fn pill_path_covers_the_square() {
        let g = Geometry::compute(100, 100, half(), AnchorPosition::TopLeft);
        let path = g.pill_path(CornerRadius::clamped(0.0));
        assert_eq!(path.commands()[0], PathCommand::MoveTo(DVec2::ZERO));
    }
}
