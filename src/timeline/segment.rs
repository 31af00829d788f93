use crate::{
    foundation::core::Progress,
    foundation::error::{ScrollweaveError, ScrollweaveResult},
    timeline::ease::Ease,
};

/// A named animatable output driven by progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    /// Element opacity; consumers clamp the sampled value to `[0, 1]`.
    Opacity,
    /// Horizontal offset in pixels.
    TranslateX,
    /// Vertical offset in pixels.
    TranslateY,
}

/// Piecewise-linear map from a progress sub-range to an output range.
///
/// Evaluate with [`Segment::sample`]: inputs outside
/// `[start_fraction, end_fraction]` clamp to the nearest endpoint value, and
/// a zero-length range degenerates to a step function at that fraction.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Segment {
    /// Channel this segment drives.
    pub channel: Channel,
    /// Progress at which interpolation begins.
    pub start_fraction: f64,
    /// Progress at which interpolation ends.
    pub end_fraction: f64,
    /// Output at `start_fraction` (and below).
    pub start_value: f64,
    /// Output at `end_fraction` (and above).
    pub end_value: f64,
    /// Easing applied to the in-range position; defaults to linear.
    #[serde(default)]
    pub ease: Ease,
}

impl Segment {
    /// Linear segment over `[start_fraction, end_fraction]`.
    pub fn new(
        channel: Channel,
        start_fraction: f64,
        end_fraction: f64,
        start_value: f64,
        end_value: f64,
    ) -> Self {
        Self {
            channel,
            start_fraction,
            end_fraction,
            start_value,
            end_value,
            ease: Ease::Linear,
        }
    }

    /// Same segment with a non-linear ease.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Check the range and value invariants.
    pub fn validate(&self) -> ScrollweaveResult<()> {
        for (name, v) in [
            ("start_fraction", self.start_fraction),
            ("end_fraction", self.end_fraction),
            ("start_value", self.start_value),
            ("end_value", self.end_value),
        ] {
            if !v.is_finite() {
                return Err(ScrollweaveError::timeline(format!(
                    "Segment {name} must be finite"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.start_fraction) || !(0.0..=1.0).contains(&self.end_fraction)
        {
            return Err(ScrollweaveError::timeline(
                "Segment fractions must lie within [0, 1]",
            ));
        }
        if self.start_fraction > self.end_fraction {
            return Err(ScrollweaveError::timeline(
                "Segment start_fraction must be <= end_fraction",
            ));
        }
        Ok(())
    }

    /// Whether `progress` falls inside this segment's range (inclusive).
    pub fn contains(&self, progress: Progress) -> bool {
        let p = progress.value();
        self.start_fraction <= p && p <= self.end_fraction
    }

    /// Evaluate the segment at `progress`. Pure; safe to call every frame.
    pub fn sample(&self, progress: Progress) -> f64 {
        ramp(
            self.start_fraction,
            self.end_fraction,
            self.start_value,
            self.end_value,
            self.ease,
            progress,
        )
    }

    /// The segment shifted by `index * delta` along the progress axis.
    ///
    /// Used for sequential reveal: elements sharing one progress source take
    /// `segment(i) = base + i * delta`. Shifted fractions clamp into `[0, 1]`.
    pub fn staggered(&self, index: usize, delta: f64) -> Self {
        let shift = index as f64 * delta;
        Self {
            start_fraction: (self.start_fraction + shift).clamp(0.0, 1.0),
            end_fraction: (self.end_fraction + shift).clamp(0.0, 1.0),
            ..*self
        }
    }

    /// Distance from `p` to this segment's range; `0` when inside.
    fn boundary_distance(&self, p: f64) -> f64 {
        if p < self.start_fraction {
            self.start_fraction - p
        } else if p > self.end_fraction {
            p - self.end_fraction
        } else {
            0.0
        }
    }
}

/// Piecewise-linear interpolation over one fraction range, with endpoint
/// clamping and the degenerate-range step rule.
///
/// The numeric core shared by [`Segment`] and effect triggers.
pub fn ramp(
    start_fraction: f64,
    end_fraction: f64,
    start_value: f64,
    end_value: f64,
    ease: Ease,
    progress: Progress,
) -> f64 {
    let p = progress.value();
    let span = end_fraction - start_fraction;
    if span.abs() <= f64::EPSILON {
        // Zero-length range: step at the fraction.
        return if p < start_fraction {
            start_value
        } else {
            end_value
        };
    }
    let t = ((p - start_fraction) / span).clamp(0.0, 1.0);
    start_value + (end_value - start_value) * ease.apply(t)
}

/// An ordered list of segments, possibly spanning multiple channels.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    /// Segments in declaration order. When two segments of the same channel
    /// overlap, the later-declared one takes precedence at the overlap.
    pub segments: Vec<Segment>,
}

impl Timeline {
    /// Timeline over the given segments.
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Validate every segment.
    pub fn validate(&self) -> ScrollweaveResult<()> {
        for segment in &self.segments {
            segment.validate()?;
        }
        Ok(())
    }

    /// Evaluate `channel` at `progress`.
    ///
    /// A segment containing the progress governs, later declarations winning
    /// at overlaps. When no segment contains it, the segment with the nearest
    /// range boundary supplies its clamped endpoint value. `None` when the
    /// channel has no segments at all.
    pub fn sample(&self, channel: Channel, progress: Progress) -> Option<f64> {
        let p = progress.value();
        let mut best: Option<(&Segment, f64)> = None;
        for segment in self.segments.iter().filter(|s| s.channel == channel) {
            let distance = segment.boundary_distance(p);
            match best {
                Some((_, nearest)) if distance > nearest => {}
                // Ties go to the later declaration.
                _ => best = Some((segment, distance)),
            }
        }
        best.map(|(segment, _)| segment.sample(progress))
    }

    /// Whether any segment drives `channel`.
    pub fn drives(&self, channel: Channel) -> bool {
        self.segments.iter().any(|s| s.channel == channel)
    }

    /// The whole timeline shifted by `index * delta` along the progress axis.
    pub fn staggered(&self, index: usize, delta: f64) -> Self {
        Self {
            segments: self
                .segments
                .iter()
                .map(|s| s.staggered(index, delta))
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/segment.rs"]
mod tests;
