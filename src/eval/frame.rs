use std::collections::BTreeMap;

use crate::{
    connector::path::{MarkerStyle, PathStyle, connector_path},
    foundation::core::{Progress, Vec2, Viewport},
    foundation::error::ScrollweaveResult,
    layout::measure::Measurements,
    scene::model::Scene,
    timeline::segment::Channel,
};

/// Everything a single frame evaluation reads.
///
/// Progress and measurements come from independent chains and may update at
/// different rates; the evaluator just consumes whatever is current.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput<'a> {
    /// Current progress of the tracked region.
    pub progress: Progress,
    /// Current viewport; width drives breakpoint selection.
    pub viewport: Viewport,
    /// Latest measurement pass, or `None` before the first pass completes.
    pub measurements: Option<&'a Measurements>,
}

/// Per-frame output consumed by the render surface.
///
/// Owns no computational logic downstream: opacities, offsets, effect values
/// and path data are final here.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameSnapshot {
    /// Progress the frame was evaluated at.
    pub progress: Progress,
    /// Channel values per animated element, in scene order.
    pub elements: Vec<ElementState>,
    /// Effect-state values keyed by trigger id.
    pub effects: BTreeMap<String, f64>,
    /// Connectors whose boxes were both measurable this frame.
    pub connectors: Vec<ResolvedConnector>,
}

/// Evaluated channel values for one element.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ElementState {
    /// Element identifier from the scene.
    pub id: String,
    /// Sampled opacity clamped to `[0, 1]`, or `None` when the timeline has
    /// no opacity segment.
    pub opacity: Option<f64>,
    /// Sampled translation; axes without segments stay at `0`.
    pub translate: Vec2,
}

/// A connector resolved against measured geometry.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ResolvedConnector {
    /// Label of the annotation text box.
    pub source_label: String,
    /// Label of the annotated glyph box.
    pub target_label: String,
    /// SVG path data in container coordinates.
    pub svg_path: String,
    /// End-of-line marker.
    pub marker: MarkerStyle,
    /// Dash pattern, if any.
    pub dash: Option<[f64; 2]>,
}

/// Evaluate one frame of `scene` against `input`.
///
/// Validates the scene first; use [`crate::Driver`] for a loop that validates
/// once at mount. Annotations whose boxes are not both measured are skipped,
/// never an error: they appear on the first frame after the labels become
/// measurable. Layout failures never affect element or effect evaluation.
#[tracing::instrument(skip(scene, input))]
pub fn eval_frame(scene: &Scene, input: &FrameInput<'_>) -> ScrollweaveResult<FrameSnapshot> {
    scene.validate()?;
    Ok(eval_frame_unvalidated(scene, input))
}

pub(crate) fn eval_frame_unvalidated(scene: &Scene, input: &FrameInput<'_>) -> FrameSnapshot {
    let progress = input.progress;

    let mut elements = Vec::with_capacity(scene.elements.len());
    for element in &scene.elements {
        let opacity = element
            .timeline
            .sample(Channel::Opacity, progress)
            .map(|v| v.clamp(0.0, 1.0));
        let tx = element
            .timeline
            .sample(Channel::TranslateX, progress)
            .unwrap_or(0.0);
        let ty = element
            .timeline
            .sample(Channel::TranslateY, progress)
            .unwrap_or(0.0);
        elements.push(ElementState {
            id: element.id.clone(),
            opacity,
            translate: Vec2::new(tx, ty),
        });
    }

    let mut effects = BTreeMap::new();
    for effect in &scene.effects {
        effects.insert(effect.id.clone(), effect.sample(progress));
    }

    let mut connectors = Vec::new();
    if let Some(measurements) = input.measurements {
        let style = PathStyle::for_viewport(input.viewport.width, scene.breakpoint_px);
        for annotation in &scene.annotations {
            let (Some(from), Some(to)) = (
                measurements.rect(&annotation.source_label),
                measurements.rect(&annotation.target_label),
            ) else {
                tracing::debug!(
                    source = %annotation.source_label,
                    target = %annotation.target_label,
                    pass = measurements.pass(),
                    "connector skipped: box not yet measured"
                );
                continue;
            };
            let style = style.with_end_clearance(annotation.end_clearance);
            let connector = connector_path(
                &from,
                &to,
                annotation.from_side,
                annotation.to_side,
                &style,
            );
            connectors.push(ResolvedConnector {
                source_label: annotation.source_label.clone(),
                target_label: annotation.target_label.clone(),
                svg_path: connector.to_svg(),
                marker: connector.marker,
                dash: connector.dash,
            });
        }
    }

    FrameSnapshot {
        progress,
        elements,
        effects,
        connectors,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/frame.rs"]
mod tests;
