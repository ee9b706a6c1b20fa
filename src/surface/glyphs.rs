//! Stroked vector digits for the raster surface.
//!
//! Each glyph is a set of polylines in a unit cell (`x` right, `y` down).
//! Only the characters a badge label can contain are defined.

use glam::{DVec2, dvec2};

use super::Font;

/// Glyph cell width, in ems.
const CELL_WIDTH: f64 = 0.42;
/// Glyph cell height, in ems.
const CELL_HEIGHT: f64 = 0.62;
/// Space between adjacent cells, in ems.
const GAP: f64 = 0.16;

const STROKE_REGULAR: f64 = 0.09;
const STROKE_BOLD: f64 = 0.14;

type Polyline = &'static [(f64, f64)];

#[rustfmt::skip]
const DIGITS: [&[Polyline]; 10] = [
    /* 0 */ &[&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]],
    /* 1 */ &[&[(0.2, 0.2), (0.55, 0.0), (0.55, 1.0)]],
    /* 2 */ &[&[(0.0, 0.0), (1.0, 0.0), (1.0, 0.5), (0.0, 0.5), (0.0, 1.0), (1.0, 1.0)]],
    /* 3 */ &[&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)], &[(0.2, 0.5), (1.0, 0.5)]],
    /* 4 */ &[&[(0.0, 0.0), (0.0, 0.5), (1.0, 0.5)], &[(1.0, 0.0), (1.0, 1.0)]],
    /* 5 */ &[&[(1.0, 0.0), (0.0, 0.0), (0.0, 0.5), (1.0, 0.5), (1.0, 1.0), (0.0, 1.0)]],
    /* 6 */ &[&[(1.0, 0.0), (0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.5), (0.0, 0.5)]],
    /* 7 */ &[&[(0.0, 0.0), (1.0, 0.0), (0.45, 1.0)]],
    /* 8 */ &[&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)], &[(0.0, 0.5), (1.0, 0.5)]],
    /* 9 */ &[&[(1.0, 0.5), (0.0, 0.5), (0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]],
];

fn glyph(c: char) -> Option<&'static [Polyline]> {
    c.to_digit(10).map(|d| DIGITS[d as usize])
}

/// Stroke width for `font`, in pixels.
pub fn stroke_width(font: &Font) -> f64 {
    let weight = if font.bold { STROKE_BOLD } else { STROKE_REGULAR };
    weight * font.size
}

/// Lay `text` out centered on `center` and return its strokes in pixels.
///
/// Characters without a glyph are skipped and take no space.
pub fn outline(text: &str, center: DVec2, font: &Font) -> Vec<Vec<DVec2>> {
    let glyphs: Vec<&[Polyline]> = text
        .chars()
        .filter_map(|c| {
            let g = glyph(c);
            if g.is_none() {
                crate::log::warn!(?c, "no glyph for character, skipping");
            }
            g
        })
        .collect();
    if glyphs.is_empty() {
        return Vec::new();
    }

    let cell = dvec2(CELL_WIDTH, CELL_HEIGHT) * font.size;
    let advance = (CELL_WIDTH + GAP) * font.size;
    let count = glyphs.len() as f64;
    let total_width = count * cell.x + (count - 1.0) * GAP * font.size;
    let origin = center - dvec2(total_width, cell.y) / 2.0;

    let mut strokes = Vec::new();
    for (i, polylines) in glyphs.into_iter().enumerate() {
        let cell_origin = origin + dvec2(i as f64 * advance, 0.0);
        for line in polylines {
            strokes.push(
                line.iter()
                    .map(|&(u, v)| cell_origin + dvec2(u, v) * cell)
                    .collect(),
            );
        }
    }
    strokes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(strokes: &[Vec<DVec2>]) -> (DVec2, DVec2) {
        let mut min = DVec2::splat(f64::INFINITY);
        let mut max = DVec2::splat(f64::NEG_INFINITY);
        for p in strokes.iter().flatten() {
            min = min.min(*p);
            max = max.max(*p);
        }
        (min, max)
    }

    #[test]
    fn single_digit_is_centered() {
        let strokes = outline("8", dvec2(50.0, 50.0), &Font::bold(100.0));
        let (min, max) = bounds(&strokes);
        let mid = (min + max) / 2.0;
        assert!((mid - dvec2(50.0, 50.0)).length() < 1e-9);
        assert!((max.y - min.y - 62.0).abs() < 1e-9);
    }

    #[test]
    fn two_digits_are_centered_as_a_block() {
        let strokes = outline("88", dvec2(0.0, 0.0), &Font::bold(10.0));
        let (min, max) = bounds(&strokes);
        assert!((min.x + max.x).abs() < 1e-9);
        assert!((max.x - min.x - (2.0 * 4.2 + 1.6)).abs() < 1e-9);
    }

    #[test]
    fn every_digit_has_a_glyph() {
        for c in '0'..='9' {
            assert!(glyph(c).is_some(), "missing glyph for {c}");
        }
        assert!(outline("x", DVec2::ZERO, &Font::bold(10.0)).is_empty());
    }

    #[test]
    fn bold_strokes_are_heavier() {
        let regular = Font {
            size: 20.0,
            bold: false,
        };
        assert!(stroke_width(&Font::bold(20.0)) > stroke_width(&regular));
    }
}
