use crate::foundation::core::{Progress, Viewport};

/// Minimum change in progress required before subscribers are notified.
///
/// Scroll events arrive far more often than the value meaningfully moves;
/// gating on this epsilon keeps downstream timeline/connector work off the
/// hot path for sub-pixel scrolls.
pub const PROGRESS_EPSILON: f64 = 1e-4;

/// An edge of the tracked region, in scroll direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionEdge {
    /// Top edge of the region.
    Start,
    /// Bottom edge of the region.
    End,
}

/// An edge of the viewport, in scroll direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewportEdge {
    /// Top edge of the viewport.
    Start,
    /// Bottom edge of the viewport.
    End,
}

/// "Edge E of the region aligns with edge F of the viewport."
///
/// Each anchor resolves to the unique scroll offset at which the two edges
/// coincide; a pair of anchors spans the progress interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Anchor {
    /// Region edge that participates in the alignment.
    pub region: RegionEdge,
    /// Viewport edge that participates in the alignment.
    pub viewport: ViewportEdge,
}

impl Anchor {
    /// Anchor aligning `region` with `viewport`.
    pub fn new(region: RegionEdge, viewport: ViewportEdge) -> Self {
        Self { region, viewport }
    }

    /// Scroll offset at which this anchor's edges align.
    fn scroll_offset(self, region: RegionGeometry, viewport: Viewport) -> f64 {
        let region_edge = match self.region {
            RegionEdge::Start => region.top,
            RegionEdge::End => region.top + region.height,
        };
        let viewport_edge = match self.viewport {
            ViewportEdge::Start => 0.0,
            ViewportEdge::End => viewport.height,
        };
        region_edge - viewport_edge
    }
}

/// The two anchor events delimiting a tracked region's traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AnchorRange {
    /// Anchor at which progress is `0`.
    pub start: Anchor,
    /// Anchor at which progress is `1`.
    pub end: Anchor,
}

impl AnchorRange {
    /// Progress runs from "region top reaches viewport bottom" to
    /// "region bottom leaves viewport top".
    ///
    /// This is the span used for pinned sections that animate while the
    /// region crosses the whole viewport.
    pub fn enter_to_exit() -> Self {
        Self {
            start: Anchor::new(RegionEdge::Start, ViewportEdge::End),
            end: Anchor::new(RegionEdge::End, ViewportEdge::Start),
        }
    }

    /// Progress runs from "region top reaches viewport top" to
    /// "region bottom reaches viewport bottom".
    ///
    /// The span used for tall sticky containers whose inner content stays
    /// pinned for the whole traversal.
    pub fn full_traversal() -> Self {
        Self {
            start: Anchor::new(RegionEdge::Start, ViewportEdge::Start),
            end: Anchor::new(RegionEdge::End, ViewportEdge::End),
        }
    }
}

/// Document-space position of the tracked scrollable region.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RegionGeometry {
    /// Distance from document top to the region's top edge.
    pub top: f64,
    /// Region height.
    pub height: f64,
}

impl RegionGeometry {
    /// Region at `top` with the given `height`.
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }
}

/// Map the current scroll position onto `[0, 1]` between two anchors.
///
/// Pure: no error conditions. Geometry entirely before the start anchor
/// clamps to `0`, entirely past the end anchor clamps to `1`. A degenerate
/// anchor span (both anchors resolving to the same offset) behaves as a step
/// at that offset.
pub fn progress_between(
    region: RegionGeometry,
    viewport: Viewport,
    anchors: AnchorRange,
) -> Progress {
    let start = anchors.start.scroll_offset(region, viewport);
    let end = anchors.end.scroll_offset(region, viewport);
    let span = end - start;
    if span.abs() <= f64::EPSILON {
        return if viewport.scroll_y < start {
            Progress::ZERO
        } else {
            Progress::ONE
        };
    }
    Progress::new((viewport.scroll_y - start) / span)
}

/// Stateful progress tracker for one scroll-linked region.
///
/// Holds no history beyond the last emitted value; [`ProgressSource::update`]
/// is expected to run once per scroll/resize notification, coalesced to at
/// most one call per animation-frame tick by the runtime driver.
#[derive(Clone, Debug)]
pub struct ProgressSource {
    anchors: AnchorRange,
    last: Option<Progress>,
}

impl ProgressSource {
    /// Source tracking traversal between `anchors`.
    pub fn new(anchors: AnchorRange) -> Self {
        Self {
            anchors,
            last: None,
        }
    }

    /// Last emitted value, if any update has run.
    pub fn last(&self) -> Option<Progress> {
        self.last
    }

    /// Recompute progress from current geometry.
    ///
    /// Returns `Some` only when the value moved by more than
    /// [`PROGRESS_EPSILON`] since the last emission (or nothing has been
    /// emitted yet), so downstream consumers skip redundant work.
    pub fn update(&mut self, region: RegionGeometry, viewport: Viewport) -> Option<Progress> {
        let next = progress_between(region, viewport, self.anchors);
        match self.last {
            Some(prev) if (next.value() - prev.value()).abs() <= PROGRESS_EPSILON => None,
            _ => {
                self.last = Some(next);
                Some(next)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/progress/source.rs"]
mod tests;
