//! Default option values and label proportions

/// Label font size as a fraction of the badge side.
pub const FONT_SCALE: f64 = 0.7;
/// Downward nudge of the label center, as a fraction of the badge side.
/// Digits sit visually high when centered on their em box.
pub const BASELINE_NUDGE: f64 = 0.09;
pub const BACKGROUND_FILL: &str = "red";
pub const TEXT_FILL: &str = "white";

/// Surface size held until the first image loads, matching a fresh canvas.
pub const SURFACE_WIDTH: u32 = 300;
pub const SURFACE_HEIGHT: u32 = 150;
