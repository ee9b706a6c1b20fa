//! Pill outline construction.
//!
//! The outline is built once as a list of commands and then replayed onto
//! whatever surface is rendering, so the shape can be inspected and tested
//! without a rasterizer.

use glam::{DVec2, dvec2};

use crate::surface::Surface;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(DVec2),
    LineTo(DVec2),
    QuadTo { ctrl: DVec2, to: DVec2 },
    Close,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BadgePath {
    commands: Vec<PathCommand>,
}

impl BadgePath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounded square over `[origin.x, origin.x + side] × [origin.y, origin.y + side]`.
    ///
    /// Each corner is a quadratic curve whose control point is the sharp
    /// corner. The radius is used as given: one larger than half the side
    /// makes the straight edges run backwards, producing a self-intersecting
    /// outline that the surface fills however it fills such paths.
    pub fn rounded_square(origin: DVec2, side: f64, radius: f64) -> Self {
        let (x0, y0) = (origin.x, origin.y);
        let (x1, y1) = (x0 + side, y0 + side);
        let r = radius;

        let mut path = Self::new();
        path.move_to(dvec2(x0 + r, y0));
        path.line_to(dvec2(x1 - r, y0));
        path.quad_to(dvec2(x1, y0), dvec2(x1, y0 + r));
        path.line_to(dvec2(x1, y1 - r));
        path.quad_to(dvec2(x1, y1), dvec2(x1 - r, y1));
        path.line_to(dvec2(x0 + r, y1));
        path.quad_to(dvec2(x0, y1), dvec2(x0, y1 - r));
        path.line_to(dvec2(x0, y0 + r));
        path.quad_to(dvec2(x0, y0), dvec2(x0 + r, y0));
        path.close();
        path
    }

    pub fn move_to(&mut self, to: DVec2) {
        self.commands.push(PathCommand::MoveTo(to));
    }

    pub fn line_to(&mut self, to: DVec2) {
        self.commands.push(PathCommand::LineTo(to));
    }

    pub fn quad_to(&mut self, ctrl: DVec2, to: DVec2) {
        self.commands.push(PathCommand::QuadTo { ctrl, to });
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Start a fresh path on `surface` and issue every command.
    pub fn replay<S: Surface>(&self, surface: &mut S) {
        surface.begin_path();
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => surface.move_to(p),
                PathCommand::LineTo(p) => surface.line_to(p),
                PathCommand::QuadTo { ctrl, to } => surface.quad_to(ctrl, to),
                PathCommand::Close => surface.close_path(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawOp, RecordingSurface};

    #[test]
    fn rounded_square_is_closed_and_starts_after_the_corner() {
        let path = BadgePath::rounded_square(dvec2(50.0, 0.0), 50.0, 8.0);
        let cmds = path.commands();
        assert_eq!(cmds.len(), 10);
        assert_eq!(cmds[0], PathCommand::MoveTo(dvec2(58.0, 0.0)));
        assert_eq!(
            cmds[8],
            PathCommand::QuadTo {
                ctrl: dvec2(50.0, 0.0),
                to: dvec2(58.0, 0.0)
            }
        );
        assert_eq!(cmds[9], PathCommand::Close);
    }

    #[test]
    fn corner_controls_are_the_square_corners() {
        let path = BadgePath::rounded_square(dvec2(10.0, 20.0), 30.0, 5.0);
        let controls: Vec<DVec2> = path
            .commands()
            .iter()
            .filter_map(|c| match c {
                PathCommand::QuadTo { ctrl, .. } => Some(*ctrl),
                _ => None,
            })
            .collect();
        assert_eq!(
            controls,
            [
                dvec2(40.0, 20.0),
                dvec2(40.0, 50.0),
                dvec2(10.0, 50.0),
                dvec2(10.0, 20.0)
            ]
        );
    }

    #[test]
    fn zero_radius_degenerates_to_a_square() {
        let path = BadgePath::rounded_square(DVec2::ZERO, 4.0, 0.0);
        assert_eq!(path.commands()[1], PathCommand::LineTo(dvec2(4.0, 0.0)));
        assert_eq!(
            path.commands()[2],
            PathCommand::QuadTo {
                ctrl: dvec2(4.0, 0.0),
                to: dvec2(4.0, 0.0)
            }
        );
    }

    #[test]
    fn oversized_radius_is_not_corrected() {
        let path = BadgePath::rounded_square(DVec2::ZERO, 10.0, 8.0);
        // first edge runs from x=8 back to x=2
        assert_eq!(path.commands()[0], PathCommand::MoveTo(dvec2(8.0, 0.0)));
        assert_eq!(path.commands()[1], PathCommand::LineTo(dvec2(2.0, 0.0)));
    }

    #[test]
    fn replay_begins_a_new_path() {
        let mut surface = RecordingSurface::new();
        BadgePath::rounded_square(DVec2::ZERO, 10.0, 2.0).replay(&mut surface);
        assert_eq!(surface.ops()[0], DrawOp::BeginPath);
        assert_eq!(surface.ops().len(), 11);
        assert_eq!(surface.ops()[10], DrawOp::ClosePath);
    }
}
