//! Option storage with normalize-then-compare write semantics.
//!
//! Every setter normalizes its input (absent → default, then clamp), compares
//! the result with the stored value, and reports what the write invalidated.
//! The store never renders anything itself; the badge acts on the [`Change`].

use crate::anchor::AnchorPosition;
use crate::paint::Paint;
use crate::render::defaults;
use crate::types::{BadgeValue, CornerRadius, SizeFraction};

/// What a property write invalidated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Change {
    /// The normalized value equals the stored one; nothing to do.
    Unchanged,
    /// Only the painted output is stale.
    Repaint,
    /// Geometry must be recomputed before repainting.
    Relayout,
    /// The base image must be loaded again.
    Reload,
}

/// Resolved option values of a badge.
///
/// Built with [`Default`] plus the `with_*` methods; every value passes
/// through the same normalization as the runtime setters when handed to a
/// [`PropertyStore`].
#[derive(Clone, Debug, PartialEq)]
pub struct BadgeOptions {
    pub source: String,
    pub size_fraction: SizeFraction,
    pub position: AnchorPosition,
    pub corner_radius: CornerRadius,
    pub background_fill: Paint,
    pub text_fill: Paint,
}

impl Default for BadgeOptions {
    fn default() -> Self {
        Self {
            source: String::new(),
            size_fraction: SizeFraction::DEFAULT,
            position: AnchorPosition::TopRight,
            corner_radius: CornerRadius::DEFAULT,
            background_fill: Paint::new(defaults::BACKGROUND_FILL),
            text_fill: Paint::new(defaults::TEXT_FILL),
        }
    }
}

impl BadgeOptions {
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_size_fraction(mut self, fraction: f64) -> Self {
        self.size_fraction = SizeFraction::clamped(fraction);
        self
    }

    pub fn with_position(mut self, position: AnchorPosition) -> Self {
        self.position = position;
        self
    }

    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = CornerRadius::clamped(radius);
        self
    }

    pub fn with_background_fill(mut self, paint: impl Into<Paint>) -> Self {
        self.background_fill = paint.into();
        self
    }

    pub fn with_text_fill(mut self, paint: impl Into<Paint>) -> Self {
        self.text_fill = paint.into();
        self
    }
}

/// Current option values plus the badge value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyStore {
    options: BadgeOptions,
    value: BadgeValue,
}

impl PropertyStore {
    pub fn new(options: BadgeOptions) -> Self {
        Self {
            options,
            value: BadgeValue::ZERO,
        }
    }

    pub fn options(&self) -> &BadgeOptions {
        &self.options
    }

    pub fn value(&self) -> BadgeValue {
        self.value
    }

    pub fn source(&self) -> &str {
        &self.options.source
    }

    pub fn size_fraction(&self) -> SizeFraction {
        self.options.size_fraction
    }

    pub fn position(&self) -> AnchorPosition {
        self.options.position
    }

    pub fn corner_radius(&self) -> CornerRadius {
        self.options.corner_radius
    }

    pub fn background_fill(&self) -> &Paint {
        &self.options.background_fill
    }

    pub fn text_fill(&self) -> &Paint {
        &self.options.text_fill
    }

    pub fn set_value(&mut self, value: Option<i64>) -> Change {
        let value = value.map_or(BadgeValue::ZERO, BadgeValue::clamped);
        replace(&mut self.value, value, Change::Repaint)
    }

    pub fn set_source(&mut self, source: Option<String>) -> Change {
        replace(&mut self.options.source, source.unwrap_or_default(), Change::Reload)
    }

    pub fn set_size_fraction(&mut self, fraction: Option<f64>) -> Change {
        let fraction = fraction.map_or(SizeFraction::DEFAULT, SizeFraction::clamped);
        replace(&mut self.options.size_fraction, fraction, Change::Relayout)
    }

    pub fn set_position(&mut self, position: Option<AnchorPosition>) -> Change {
        let position = position.unwrap_or_default();
        replace(&mut self.options.position, position, Change::Relayout)
    }

    pub fn set_corner_radius(&mut self, radius: Option<f64>) -> Change {
        let radius = radius.map_or(CornerRadius::DEFAULT, CornerRadius::clamped);
        replace(&mut self.options.corner_radius, radius, Change::Repaint)
    }

    pub fn set_background_fill(&mut self, paint: Option<Paint>) -> Change {
        let paint = paint.unwrap_or_else(|| Paint::new(defaults::BACKGROUND_FILL));
        replace(&mut self.options.background_fill, paint, Change::Repaint)
    }

    pub fn set_text_fill(&mut self, paint: Option<Paint>) -> Change {
        let paint = paint.unwrap_or_else(|| Paint::new(defaults::TEXT_FILL));
        replace(&mut self.options.text_fill, paint, Change::Repaint)
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T, change: Change) -> Change {
    if *slot == value {
        Change::Unchanged
    } else {
        *slot = value;
        change
    }
}
