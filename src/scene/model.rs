use std::collections::BTreeSet;

use crate::{
    connector::path::Side,
    foundation::core::Progress,
    foundation::error::{ScrollweaveError, ScrollweaveResult},
    timeline::ease::Ease,
    timeline::segment::{Timeline, ramp},
};

/// One parameterized scroll scene.
///
/// A scene is a pure data model: the animated elements with their
/// channel-to-timeline mappings, the annotations whose connectors are drawn
/// between measured boxes, the effect triggers threaded to the render surface
/// as ordinary data, and the single viewport-width breakpoint that selects
/// the connector path strategy. Serializable via Serde (JSON); evaluated by
/// [`crate::eval_frame`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    /// Viewport-width cutoff: below it connectors curve, at or above it they
    /// run orthogonally.
    pub breakpoint_px: f64,
    /// Animated text/graphic elements.
    pub elements: Vec<AnimatedElement>,
    /// Connector declarations between labeled fragments.
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    /// Progress-driven effect-state values.
    #[serde(default)]
    pub effects: Vec<EffectTrigger>,
}

impl Scene {
    /// Check structural invariants: unique non-empty identifiers, non-empty
    /// labels, valid segments, a positive breakpoint.
    pub fn validate(&self) -> ScrollweaveResult<()> {
        if !self.breakpoint_px.is_finite() || self.breakpoint_px <= 0.0 {
            return Err(ScrollweaveError::validation(
                "Scene breakpoint_px must be finite and > 0",
            ));
        }

        let mut element_ids = BTreeSet::new();
        for element in &self.elements {
            if element.id.is_empty() {
                return Err(ScrollweaveError::validation("element id must be non-empty"));
            }
            if !element_ids.insert(element.id.as_str()) {
                return Err(ScrollweaveError::validation(format!(
                    "duplicate element id '{}'",
                    element.id
                )));
            }
            element.timeline.validate()?;
        }

        for annotation in &self.annotations {
            annotation.validate()?;
        }

        let mut effect_ids = BTreeSet::new();
        for effect in &self.effects {
            if effect.id.is_empty() {
                return Err(ScrollweaveError::validation("effect id must be non-empty"));
            }
            if !effect_ids.insert(effect.id.as_str()) {
                return Err(ScrollweaveError::validation(format!(
                    "duplicate effect id '{}'",
                    effect.id
                )));
            }
            effect.validate()?;
        }

        Ok(())
    }

    /// Every label referenced by an annotation, deduplicated and sorted.
    ///
    /// This is the label set a measurement pass needs to resolve.
    pub fn annotation_labels(&self) -> Vec<String> {
        let mut labels = BTreeSet::new();
        for annotation in &self.annotations {
            labels.insert(annotation.source_label.clone());
            labels.insert(annotation.target_label.clone());
        }
        labels.into_iter().collect()
    }
}

/// An animated element and its channel-to-timeline mapping.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimatedElement {
    /// Stable identifier for the render surface.
    pub id: String,
    /// Timeline driving this element's channels.
    pub timeline: Timeline,
}

/// Declares that a connector path runs from the box of `source_label` to the
/// box of `target_label`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Annotation {
    /// Label of the expanded annotation text.
    pub source_label: String,
    /// Label of the compact glyph being annotated.
    pub target_label: String,
    /// Attachment side on the source box.
    pub from_side: Side,
    /// Attachment side on the target box.
    pub to_side: Side,
    /// Extra clearance past the target attachment point, for trailing glyphs
    /// that need breathing room. Orthogonal style only.
    #[serde(default)]
    pub end_clearance: f64,
}

impl Annotation {
    fn validate(&self) -> ScrollweaveResult<()> {
        if self.source_label.is_empty() || self.target_label.is_empty() {
            return Err(ScrollweaveError::validation(
                "annotation labels must be non-empty",
            ));
        }
        if !self.end_clearance.is_finite() || self.end_clearance < 0.0 {
            return Err(ScrollweaveError::validation(
                "annotation end_clearance must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

/// A progress-driven scalar threaded to the render surface as ordinary data.
///
/// Replaces process-wide visual-effect flags: the surface reads the value
/// from each frame snapshot instead of observing a global toggle.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EffectTrigger {
    /// Stable identifier for the render surface.
    pub id: String,
    /// Progress at which the ramp begins.
    pub start_fraction: f64,
    /// Progress at which the ramp ends.
    pub end_fraction: f64,
    /// Value at and below `start_fraction`.
    pub start_value: f64,
    /// Value at and above `end_fraction`.
    pub end_value: f64,
}

impl EffectTrigger {
    /// Ramp `start_value -> end_value` over `[start_fraction, end_fraction]`.
    pub fn new(
        id: impl Into<String>,
        start_fraction: f64,
        end_fraction: f64,
        start_value: f64,
        end_value: f64,
    ) -> Self {
        Self {
            id: id.into(),
            start_fraction,
            end_fraction,
            start_value,
            end_value,
        }
    }

    /// Evaluate the trigger at `progress`; same clamp and zero-length-step
    /// rules as segment sampling.
    pub fn sample(&self, progress: Progress) -> f64 {
        ramp(
            self.start_fraction,
            self.end_fraction,
            self.start_value,
            self.end_value,
            Ease::Linear,
            progress,
        )
    }

    fn validate(&self) -> ScrollweaveResult<()> {
        for (name, v) in [
            ("start_fraction", self.start_fraction),
            ("end_fraction", self.end_fraction),
            ("start_value", self.start_value),
            ("end_value", self.end_value),
        ] {
            if !v.is_finite() {
                return Err(ScrollweaveError::validation(format!(
                    "effect {name} must be finite"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.start_fraction)
            || !(0.0..=1.0).contains(&self.end_fraction)
            || self.start_fraction > self.end_fraction
        {
            return Err(ScrollweaveError::validation(
                "effect fractions must be an ordered pair within [0, 1]",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
