use std::collections::BTreeMap;

use crate::{
    foundation::core::{Point, Rect},
    foundation::error::{ScrollweaveError, ScrollweaveResult},
};

/// Delay between mount and the first measurement pass, in milliseconds.
///
/// Glyph metrics may not be final immediately after mount (late font
/// availability); deferring the initial pass tolerates that. A readiness
/// heuristic, not a correctness bound; tune as needed.
pub const REMEASURE_DELAY_MS: u64 = 100;

/// Host-platform seam supplying raw fragment geometry in viewport
/// coordinates.
///
/// Implementations are expected to resolve labels against the *measurement
/// layer*: an invisible instance of the final typeset content, so true
/// line-wrapped geometry is available without affecting the visible layout.
/// Callers of this module never see that two-copy arrangement; they only see
/// label -> box.
pub trait GeometrySource {
    /// Viewport-space origin of the shared container, or `None` while the
    /// container is not yet rendered.
    fn container_origin(&self) -> Option<Point>;

    /// Viewport-space bounding box of the fragment carrying `label`, or
    /// `None` while that fragment is not yet rendered.
    fn fragment_rect(&self, label: &str) -> Option<Rect>;
}

/// Label -> bounding box mapping produced by one measurement pass.
///
/// All boxes are relative to the shared container origin captured at the
/// start of the pass, so they are mutually consistent. Valid only until the
/// next pass; treat a missing entry as "not yet available", never as fatal.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Measurements {
    boxes: BTreeMap<String, Rect>,
    pass: u64,
}

impl Measurements {
    /// Bounding box for `label`, if it was measurable this pass.
    pub fn rect(&self, label: &str) -> Option<Rect> {
        self.boxes.get(label).copied()
    }

    /// Monotonically increasing pass counter; distinguishes "same geometry"
    /// from "new pass" without comparing boxes.
    pub fn pass(&self) -> u64 {
        self.pass
    }

    /// Number of measured labels.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Whether no label was measurable.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Measured labels in sorted order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.boxes.keys().map(String::as_str)
    }
}

/// Runs measurement passes and numbers them.
#[derive(Clone, Debug, Default)]
pub struct Measurer {
    pass: u64,
}

impl Measurer {
    /// Fresh measurer; the first pass is numbered `1`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `labels` against `source` into container-relative boxes.
    ///
    /// The container origin is captured exactly once, before any fragment is
    /// resolved; every box in the resulting pass is expressed against that
    /// single offset, which rules out the stale-geometry race by
    /// construction. Labels the source cannot resolve are omitted.
    ///
    /// Errors only when the container itself is unavailable; that pass is a
    /// no-op for the caller, who keeps the previous measurements and retries
    /// on the next notification.
    pub fn measure<'a, S, I>(&mut self, source: &S, labels: I) -> ScrollweaveResult<Measurements>
    where
        S: GeometrySource + ?Sized,
        I: IntoIterator<Item = &'a str>,
    {
        let origin = source
            .container_origin()
            .ok_or_else(|| ScrollweaveError::layout("container origin is not yet measurable"))?;

        self.pass += 1;
        let mut boxes = BTreeMap::new();
        for label in labels {
            match source.fragment_rect(label) {
                Some(rect) => {
                    let relative = Rect::new(
                        rect.x0 - origin.x,
                        rect.y0 - origin.y,
                        rect.x1 - origin.x,
                        rect.y1 - origin.y,
                    );
                    boxes.insert(label.to_string(), relative);
                }
                None => {
                    tracing::debug!(label, pass = self.pass, "fragment not measurable; omitted");
                }
            }
        }
        Ok(Measurements {
            boxes,
            pass: self.pass,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/measure.rs"]
mod tests;
