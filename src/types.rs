//! Strongly-typed numeric option values (zero-cost newtypes).
//!
//! Each constructor normalizes instead of rejecting: out-of-range input is
//! clamped, and input that cannot be ordered (NaN) is replaced by the default.

use std::fmt;

/// Fraction of the image's shorter side used as the badge side, in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct SizeFraction(f64);

impl SizeFraction {
    pub const DEFAULT: SizeFraction = SizeFraction(0.6);

    /// Clamp into `[0, 1]`. NaN yields the default.
    pub fn clamped(val: f64) -> SizeFraction {
        if val.is_nan() {
            Self::DEFAULT
        } else {
            SizeFraction(val.clamp(0.0, 1.0))
        }
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl Default for SizeFraction {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for SizeFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The displayed count, in `[0, 99]`. Zero means no badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct BadgeValue(u8);

impl BadgeValue {
    pub const ZERO: BadgeValue = BadgeValue(0);
    pub const MAX: BadgeValue = BadgeValue(99);

    pub fn clamped(val: i64) -> BadgeValue {
        BadgeValue(val.clamp(0, Self::MAX.0 as i64) as u8)
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    /// True when nothing but the base image is drawn.
    #[inline]
    pub fn is_hidden(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for BadgeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pixel radius of the pill corners, never negative.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct CornerRadius(f64);

impl CornerRadius {
    pub const DEFAULT: CornerRadius = CornerRadius(8.0);

    /// Negative input clamps to zero, NaN yields the default.
    pub fn clamped(val: f64) -> CornerRadius {
        if val.is_nan() {
            Self::DEFAULT
        } else {
            CornerRadius(val.max(0.0))
        }
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl Default for CornerRadius {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for CornerRadius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
