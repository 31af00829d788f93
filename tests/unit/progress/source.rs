use super::*;

fn viewport(height: f64, scroll_y: f64) -> Viewport {
    Viewport::new(1024.0, height, scroll_y)
}

#[test]
fn enter_to_exit_maps_midpoint_to_half() {
    // Start anchor (region top meets viewport bottom) resolves to scroll 0,
    // end anchor (region bottom meets viewport top) to scroll 500.
    let region = RegionGeometry::new(300.0, 200.0);
    let anchors = AnchorRange::enter_to_exit();

    assert_eq!(
        progress_between(region, viewport(300.0, 0.0), anchors).value(),
        0.0
    );
    assert_eq!(
        progress_between(region, viewport(300.0, 250.0), anchors).value(),
        0.5
    );
    assert_eq!(
        progress_between(region, viewport(300.0, 500.0), anchors).value(),
        1.0
    );
}

#[test]
fn off_screen_geometry_clamps_instead_of_failing() {
    let region = RegionGeometry::new(300.0, 200.0);
    let anchors = AnchorRange::enter_to_exit();

    assert_eq!(
        progress_between(region, viewport(300.0, -5000.0), anchors),
        Progress::ZERO
    );
    assert_eq!(
        progress_between(region, viewport(300.0, 5000.0), anchors),
        Progress::ONE
    );
}

#[test]
fn full_traversal_spans_region_minus_viewport() {
    // Region top meets viewport top at scroll 1000; region bottom meets
    // viewport bottom at scroll 1000 + (3000 - 600).
    let region = RegionGeometry::new(1000.0, 3000.0);
    let anchors = AnchorRange::full_traversal();

    assert_eq!(
        progress_between(region, viewport(600.0, 1000.0), anchors),
        Progress::ZERO
    );
    assert_eq!(
        progress_between(region, viewport(600.0, 2200.0), anchors).value(),
        0.5
    );
    assert_eq!(
        progress_between(region, viewport(600.0, 3400.0), anchors),
        Progress::ONE
    );
}

#[test]
fn degenerate_anchor_span_steps() {
    // Region exactly as tall as the viewport: full traversal collapses both
    // anchors onto the same scroll offset.
    let region = RegionGeometry::new(500.0, 600.0);
    let anchors = AnchorRange::full_traversal();

    assert_eq!(
        progress_between(region, viewport(600.0, 499.0), anchors),
        Progress::ZERO
    );
    assert_eq!(
        progress_between(region, viewport(600.0, 500.0), anchors),
        Progress::ONE
    );
}

#[test]
fn source_emits_first_update_and_gates_on_epsilon() {
    let region = RegionGeometry::new(300.0, 200.0);
    let mut source = ProgressSource::new(AnchorRange::enter_to_exit());

    let first = source.update(region, viewport(300.0, 250.0));
    assert_eq!(first, Some(Progress::new(0.5)));

    // Sub-epsilon move: no notification, last value unchanged.
    let span = 500.0;
    let nudge = 250.0 + span * (PROGRESS_EPSILON / 2.0);
    assert_eq!(source.update(region, viewport(300.0, nudge)), None);
    assert_eq!(source.last(), Some(Progress::new(0.5)));

    // A real move notifies again.
    let moved = source.update(region, viewport(300.0, 300.0));
    assert_eq!(moved, Some(Progress::new(0.6)));
}
