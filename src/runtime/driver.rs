use std::fmt;

use crate::{
    eval::frame::{FrameInput, FrameSnapshot, eval_frame_unvalidated},
    foundation::core::{Progress, Viewport},
    foundation::error::ScrollweaveResult,
    layout::measure::{GeometrySource, Measurements, Measurer, REMEASURE_DELAY_MS},
    progress::source::{AnchorRange, ProgressSource, RegionGeometry},
    scene::model::Scene,
};

/// Notification kinds delivered by the host's event streams.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostEvent {
    /// The scroll position changed.
    Scroll,
    /// The viewport was resized.
    Resize,
}

/// Host-platform seam for event-stream registration.
pub trait EventHost {
    /// Register interest in `event`; the returned guard holds the
    /// registration alive.
    fn subscribe(&mut self, event: HostEvent) -> Subscription;
}

/// RAII guard for one host event registration.
///
/// Dropping the guard releases the listener, so teardown happens on every
/// exit path, including early unmount.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Guard invoking `release` when dropped.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

/// Event-driven frame loop for one scroll scene.
///
/// Notifications only set dirty flags; all recomputation happens in
/// [`Driver::tick`], so the work is coalesced to at most one full pass per
/// animation-frame tick regardless of how many events arrived. Each pass is
/// a complete, fast recomputation, `O(labels + segments)`.
pub struct Driver {
    scene: Scene,
    labels: Vec<String>,
    source: ProgressSource,
    measurer: Measurer,
    measurements: Option<Measurements>,
    region: RegionGeometry,
    scroll_dirty: bool,
    resize_dirty: bool,
    initial_measure_at: Option<u64>,
    subscriptions: Vec<Subscription>,
}

impl Driver {
    /// Mount the scene: validate it, subscribe to the host's scroll and
    /// resize streams, and schedule the deferred initial measurement
    /// ([`REMEASURE_DELAY_MS`] after `now_ms`).
    ///
    /// Subscriptions are released when the driver is dropped.
    pub fn mount(
        scene: Scene,
        anchors: AnchorRange,
        region: RegionGeometry,
        host: &mut dyn EventHost,
        now_ms: u64,
    ) -> ScrollweaveResult<Self> {
        scene.validate()?;
        let labels = scene.annotation_labels();
        let subscriptions = vec![
            host.subscribe(HostEvent::Scroll),
            host.subscribe(HostEvent::Resize),
        ];
        Ok(Self {
            scene,
            labels,
            source: ProgressSource::new(anchors),
            measurer: Measurer::new(),
            measurements: None,
            region,
            scroll_dirty: true,
            resize_dirty: false,
            initial_measure_at: Some(now_ms.saturating_add(REMEASURE_DELAY_MS)),
            subscriptions,
        })
    }

    /// Record a host notification. No recomputation happens here.
    pub fn notify(&mut self, event: HostEvent) {
        match event {
            HostEvent::Scroll => self.scroll_dirty = true,
            HostEvent::Resize => self.resize_dirty = true,
        }
    }

    /// Update the tracked region's document-space geometry (layout shifts,
    /// content changes above the region).
    pub fn set_region(&mut self, region: RegionGeometry) {
        self.region = region;
        self.scroll_dirty = true;
    }

    /// Latest measurement pass, if one has completed.
    pub fn measurements(&self) -> Option<&Measurements> {
        self.measurements.as_ref()
    }

    /// Run at most one full recomputation for this animation-frame tick.
    ///
    /// Remeasures when a resize is pending (unconditionally) or when the
    /// deferred initial measurement comes due; recomputes progress when a
    /// scroll or resize was recorded. Returns a fresh snapshot only when
    /// progress moved beyond the epsilon or a new measurement pass landed;
    /// `None` means the previous frame is still current.
    pub fn tick<S: GeometrySource>(
        &mut self,
        geometry: &S,
        viewport: Viewport,
        now_ms: u64,
    ) -> Option<FrameSnapshot> {
        let scroll = std::mem::take(&mut self.scroll_dirty);
        let resize = std::mem::take(&mut self.resize_dirty);
        let initial_due = self
            .initial_measure_at
            .is_some_and(|due| now_ms >= due);

        let mut changed = false;

        if resize || initial_due {
            if initial_due {
                self.initial_measure_at = None;
            }
            match self
                .measurer
                .measure(geometry, self.labels.iter().map(String::as_str))
            {
                Ok(pass) => {
                    self.measurements = Some(pass);
                    changed = true;
                }
                // Degrade: keep the previous pass, retry on the next
                // notification.
                Err(err) => tracing::warn!(error = %err, "measurement pass failed"),
            }
        }

        if (scroll || resize) && self.source.update(self.region, viewport).is_some() {
            changed = true;
        }

        if !changed {
            return None;
        }

        let input = FrameInput {
            progress: self.source.last().unwrap_or(Progress::ZERO),
            viewport,
            measurements: self.measurements.as_ref(),
        };
        Some(eval_frame_unvalidated(&self.scene, &input))
    }

    /// Tear down explicitly, releasing the event subscriptions now.
    ///
    /// Equivalent to dropping the driver; provided for call sites that want
    /// the release to be visible.
    pub fn unmount(mut self) {
        self.subscriptions.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/driver.rs"]
mod tests;
