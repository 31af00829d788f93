/// Easing applied to the normalized position within a segment.
///
/// Every curve here is monotonic on `[0, 1]` with fixed endpoints, so easing
/// never breaks the continuity/monotonicity guarantees of segment sampling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// No easing.
    #[default]
    Linear,
    /// Decelerating quadratic; the usual choice for reveal-on-scroll.
    OutQuad,
    /// Symmetric quadratic.
    InOutQuad,
    /// Stronger deceleration for long slide-ins.
    OutCubic,
    /// Symmetric cubic.
    InOutCubic,
}

impl Ease {
    /// Map `t` in `[0, 1]` through the curve. Inputs outside the range clamp.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/ease.rs"]
mod tests;
