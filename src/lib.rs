//! Scrollweave is a scroll-synchronized animation and dynamic-layout engine.
//!
//! A progress source derived from scroll position drives multi-channel
//! timelines (opacity, offset) for staged text reveal and pinned sections,
//! while a companion layout chain measures labeled text-fragment geometry and
//! draws annotation connector paths between a compact glyph and its expanded
//! label, adapting path shape to viewport width.
//!
//! # Pipeline overview
//!
//! 1. **Progress**: scroll/viewport geometry -> clamped [`Progress`] in `[0, 1]`
//! 2. **Timeline**: [`Progress`] -> per-channel values via piecewise-linear [`Segment`]s
//! 3. **Measure**: labeled fragments -> container-relative [`Measurements`]
//! 4. **Connect**: two measured boxes + sides + breakpoint -> [`ConnectorPath`]
//! 5. **Evaluate**: [`Scene`] + frame inputs -> [`FrameSnapshot`] for the render surface
//!
//! The two computational chains (progress -> timeline, measurement -> path)
//! are independent and may update at different rates; [`Driver`] coalesces
//! both into at most one recomputation per animation-frame tick.
//!
//! Key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: sampling and path generation are pure and
//!   stable for a given input; everything may be recomputed every frame.
//! - **Non-fatal by construction**: a label that is not yet measurable means
//!   "omit that connector this frame", never an error.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod connector;
mod eval;
mod foundation;
mod layout;
mod progress;
mod runtime;
mod scene;
mod timeline;

pub use connector::path::{
    ConnectorPath, DEFAULT_CLEARANCE, MarkerStyle, ORTHOGONAL_DASH, PathStyle, Side,
    connector_path,
};
pub use eval::frame::{ElementState, FrameInput, FrameSnapshot, ResolvedConnector, eval_frame};
pub use foundation::core::{BezPath, Point, Progress, Rect, Vec2, Viewport};
pub use foundation::error::{ScrollweaveError, ScrollweaveResult};
pub use layout::measure::{GeometrySource, Measurements, Measurer, REMEASURE_DELAY_MS};
pub use progress::source::{
    Anchor, AnchorRange, PROGRESS_EPSILON, ProgressSource, RegionEdge, RegionGeometry,
    ViewportEdge, progress_between,
};
pub use runtime::driver::{Driver, EventHost, HostEvent, Subscription};
pub use scene::dsl::{SceneBuilder, annotation};
pub use scene::model::{AnimatedElement, Annotation, EffectTrigger, Scene};
pub use timeline::ease::Ease;
pub use timeline::ops::{fade_in, fade_out, reveal, slide_in_x, slide_in_y, staggered_reveal};
pub use timeline::segment::{Channel, Segment, Timeline, ramp};
