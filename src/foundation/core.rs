pub use kurbo::{BezPath, Point, Rect, Vec2};

/// Normalized traversal of a scroll-linked region.
///
/// Always within `[0, 1]`; the constructor clamps, so downstream consumers
/// never have to defend against out-of-range geometry. NaN collapses to `0`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(into = "f64", from = "f64")]
pub struct Progress(f64);

impl From<f64> for Progress {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Progress> for f64 {
    fn from(value: Progress) -> Self {
        value.0
    }
}

impl Progress {
    /// Region has not yet reached its start anchor.
    pub const ZERO: Self = Self(0.0);
    /// Region has passed its end anchor.
    pub const ONE: Self = Self(1.0);

    /// Clamp `value` into `[0, 1]`.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// The underlying fraction.
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Viewport geometry at the moment of a scroll or resize notification.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Viewport width in CSS pixels; drives breakpoint selection.
    pub width: f64,
    /// Viewport height in CSS pixels.
    pub height: f64,
    /// Document-space offset of the viewport top edge.
    pub scroll_y: f64,
}

impl Viewport {
    /// Viewport at a given scroll offset.
    pub fn new(width: f64, height: f64, scroll_y: f64) -> Self {
        Self {
            width,
            height,
            scroll_y,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
