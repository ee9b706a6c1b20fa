//! Named badge placements and their normalized weights.

use std::fmt;
use std::str::FromStr;

use glam::{DVec2, dvec2};

use crate::errors::BadgeError;

/// Where the badge sits relative to the image.
///
/// Each position maps to a weight pair in `[0, 1]²`: the fraction of the
/// free space (image size minus badge side) placed before the badge on
/// each axis. `x` grows to the right, `y` grows downward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum AnchorPosition {
    Top,
    Right,
    Bottom,
    Left,
    TopLeft,
    #[default]
    TopRight,
    BottomRight,
    BottomLeft,
    Center,
}

impl AnchorPosition {
    pub const ALL: [AnchorPosition; 9] = [
        AnchorPosition::Top,
        AnchorPosition::Right,
        AnchorPosition::Bottom,
        AnchorPosition::Left,
        AnchorPosition::TopLeft,
        AnchorPosition::TopRight,
        AnchorPosition::BottomRight,
        AnchorPosition::BottomLeft,
        AnchorPosition::Center,
    ];

    pub const fn weights(self) -> DVec2 {
        match self {
            AnchorPosition::Top => dvec2(0.5, 0.0),
            AnchorPosition::Right => dvec2(1.0, 0.5),
            AnchorPosition::Bottom => dvec2(0.5, 1.0),
            AnchorPosition::Left => dvec2(0.0, 0.5),
            AnchorPosition::TopLeft => dvec2(0.0, 0.0),
            AnchorPosition::TopRight => dvec2(1.0, 0.0),
            AnchorPosition::BottomRight => dvec2(1.0, 1.0),
            AnchorPosition::BottomLeft => dvec2(0.0, 1.0),
            AnchorPosition::Center => dvec2(0.5, 0.5),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            AnchorPosition::Top => "top",
            AnchorPosition::Right => "right",
            AnchorPosition::Bottom => "bottom",
            AnchorPosition::Left => "left",
            AnchorPosition::TopLeft => "topLeft",
            AnchorPosition::TopRight => "topRight",
            AnchorPosition::BottomRight => "bottomRight",
            AnchorPosition::BottomLeft => "bottomLeft",
            AnchorPosition::Center => "center",
        }
    }
}

impl fmt::Display for AnchorPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AnchorPosition {
    type Err = BadgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| BadgeError::UnknownPosition { name: s.to_string() })
    }
}
