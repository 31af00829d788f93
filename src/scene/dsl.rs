use std::collections::BTreeSet;

use crate::{
    connector::path::Side,
    foundation::error::{ScrollweaveError, ScrollweaveResult},
    scene::model::{AnimatedElement, Annotation, EffectTrigger, Scene},
    timeline::ops,
    timeline::segment::Timeline,
};

/// Fluent construction of a [`Scene`].
///
/// Identifier collisions are rejected at insertion time; [`SceneBuilder::build`]
/// runs full validation before handing the scene out.
pub struct SceneBuilder {
    breakpoint_px: f64,
    elements: Vec<AnimatedElement>,
    annotations: Vec<Annotation>,
    effects: Vec<EffectTrigger>,
    element_ids: BTreeSet<String>,
    effect_ids: BTreeSet<String>,
}

impl SceneBuilder {
    /// Builder for a scene with the given connector breakpoint.
    pub fn new(breakpoint_px: f64) -> Self {
        Self {
            breakpoint_px,
            elements: Vec::new(),
            annotations: Vec::new(),
            effects: Vec::new(),
            element_ids: BTreeSet::new(),
            effect_ids: BTreeSet::new(),
        }
    }

    /// Add an animated element.
    pub fn element(mut self, id: impl Into<String>, timeline: Timeline) -> ScrollweaveResult<Self> {
        let id = id.into();
        if !self.element_ids.insert(id.clone()) {
            return Err(ScrollweaveError::validation(format!(
                "duplicate element id '{id}'"
            )));
        }
        self.elements.push(AnimatedElement { id, timeline });
        Ok(self)
    }

    /// Add `count` elements `"{prefix}-0" .. "{prefix}-{count-1}"`, each with
    /// `base` shifted by `index * delta` for sequential reveal.
    pub fn staggered_elements(
        mut self,
        prefix: &str,
        count: usize,
        base: &Timeline,
        delta: f64,
    ) -> ScrollweaveResult<Self> {
        for index in 0..count {
            self = self.element(format!("{prefix}-{index}"), base.staggered(index, delta))?;
        }
        Ok(self)
    }

    /// Add `count` elements with the default reveal recipe (slide in from
    /// `from_x` while fading in over `[start, end]`, staggered by `delta`).
    pub fn staggered_reveal(
        mut self,
        prefix: &str,
        count: usize,
        start: f64,
        end: f64,
        from_x: f64,
        delta: f64,
    ) -> ScrollweaveResult<Self> {
        for (index, timeline) in ops::staggered_reveal(count, start, end, from_x, delta)
            .into_iter()
            .enumerate()
        {
            self = self.element(format!("{prefix}-{index}"), timeline)?;
        }
        Ok(self)
    }

    /// Add an annotation.
    pub fn annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Add a progress-driven effect trigger.
    pub fn effect(mut self, effect: EffectTrigger) -> ScrollweaveResult<Self> {
        if !self.effect_ids.insert(effect.id.clone()) {
            return Err(ScrollweaveError::validation(format!(
                "duplicate effect id '{}'",
                effect.id
            )));
        }
        self.effects.push(effect);
        Ok(self)
    }

    /// Validate and produce the scene.
    pub fn build(self) -> ScrollweaveResult<Scene> {
        let scene = Scene {
            breakpoint_px: self.breakpoint_px,
            elements: self.elements,
            annotations: self.annotations,
            effects: self.effects,
        };
        scene.validate()?;
        Ok(scene)
    }
}

/// Annotation from `source_label` to `target_label` with no end clearance.
pub fn annotation(
    source_label: impl Into<String>,
    target_label: impl Into<String>,
    from_side: Side,
    to_side: Side,
) -> Annotation {
    Annotation {
        source_label: source_label.into(),
        target_label: target_label.into(),
        from_side,
        to_side,
        end_clearance: 0.0,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/dsl.rs"]
mod tests;
