use crate::timeline::segment::{Channel, Segment, Timeline};

/// Opacity `0 -> 1` over `[start, end]`.
pub fn fade_in(start: f64, end: f64) -> Segment {
    Segment::new(Channel::Opacity, start, end, 0.0, 1.0)
}

/// Opacity `1 -> 0` over `[start, end]`.
pub fn fade_out(start: f64, end: f64) -> Segment {
    Segment::new(Channel::Opacity, start, end, 1.0, 0.0)
}

/// Horizontal offset `from_x -> 0` over `[start, end]`.
pub fn slide_in_x(start: f64, end: f64, from_x: f64) -> Segment {
    Segment::new(Channel::TranslateX, start, end, from_x, 0.0)
}

/// Vertical offset `from_y -> 0` over `[start, end]`.
pub fn slide_in_y(start: f64, end: f64, from_y: f64) -> Segment {
    Segment::new(Channel::TranslateY, start, end, from_y, 0.0)
}

/// The staged text-reveal recipe: slide in from `from_x` while fading in,
/// both over `[start, end]`.
pub fn reveal(start: f64, end: f64, from_x: f64) -> Timeline {
    Timeline::new(vec![slide_in_x(start, end, from_x), fade_in(start, end)])
}

/// `count` reveal timelines, each shifted by `index * delta`, so elements
/// sharing one progress source enter one after another.
pub fn staggered_reveal(count: usize, start: f64, end: f64, from_x: f64, delta: f64) -> Vec<Timeline> {
    let base = reveal(start, end, from_x);
    (0..count).map(|i| base.staggered(i, delta)).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/ops.rs"]
mod tests;
