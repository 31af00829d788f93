use super::*;
use crate::{
    connector::path::Side,
    foundation::core::{Point, Rect},
    layout::measure::{GeometrySource, Measurer},
    scene::dsl::{SceneBuilder, annotation},
    scene::model::EffectTrigger,
    timeline::ops,
};
use std::collections::BTreeMap;

struct FakeDom(BTreeMap<String, Rect>);

impl GeometrySource for FakeDom {
    fn container_origin(&self) -> Option<Point> {
        Some(Point::ORIGIN)
    }

    fn fragment_rect(&self, label: &str) -> Option<Rect> {
        self.0.get(label).copied()
    }
}

fn scene() -> Scene {
    SceneBuilder::new(768.0)
        .staggered_reveal("sentence", 3, 0.1, 0.28, -140.0, 0.15)
        .unwrap()
        .annotation(annotation("Technical", "0x", Side::Bottom, Side::Top))
        .effect(EffectTrigger::new("neon", 0.6, 0.65, 0.0, 1.0))
        .unwrap()
        .effect(EffectTrigger::new("stack-fade", 0.75, 0.9, 1.0, 0.0))
        .unwrap()
        .build()
        .unwrap()
}

fn wide_viewport() -> Viewport {
    Viewport::new(1280.0, 800.0, 0.0)
}

#[test]
fn elements_sample_their_channels() {
    let scene = scene();
    let input = FrameInput {
        progress: Progress::new(0.19),
        viewport: wide_viewport(),
        measurements: None,
    };
    let snapshot = eval_frame(&scene, &input).unwrap();

    assert_eq!(snapshot.elements.len(), 3);
    // Sentence 0 is halfway through its reveal.
    let first = &snapshot.elements[0];
    assert!((first.opacity.unwrap() - 0.5).abs() < 1e-9);
    assert!((first.translate.x + 70.0).abs() < 1e-9);
    // Sentence 2 has not started.
    let third = &snapshot.elements[2];
    assert_eq!(third.opacity, Some(0.0));
    assert_eq!(third.translate.x, -140.0);
    // No vertical channel declared.
    assert_eq!(first.translate.y, 0.0);
}

#[test]
fn effects_are_threaded_as_data() {
    let scene = scene();
    let input = FrameInput {
        progress: Progress::new(0.65),
        viewport: wide_viewport(),
        measurements: None,
    };
    let snapshot = eval_frame(&scene, &input).unwrap();

    assert_eq!(snapshot.effects["neon"], 1.0);
    assert_eq!(snapshot.effects["stack-fade"], 1.0);
}

#[test]
fn missing_measurements_skip_connectors_without_error() {
    let scene = scene();
    let input = FrameInput {
        progress: Progress::ZERO,
        viewport: wide_viewport(),
        measurements: None,
    };
    let snapshot = eval_frame(&scene, &input).unwrap();
    assert!(snapshot.connectors.is_empty());
}

#[test]
fn partially_measured_annotation_is_skipped_then_appears() {
    let scene = scene();
    let mut measurer = Measurer::new();

    // Only the glyph is rendered so far.
    let partial = FakeDom(BTreeMap::from([(
        "0x".to_string(),
        Rect::new(0.0, 0.0, 40.0, 20.0),
    )]));
    let pass = measurer
        .measure(&partial, scene.annotation_labels().iter().map(String::as_str))
        .unwrap();
    let input = FrameInput {
        progress: Progress::ZERO,
        viewport: wide_viewport(),
        measurements: Some(&pass),
    };
    assert!(eval_frame(&scene, &input).unwrap().connectors.is_empty());

    // Next pass both labels resolve; the connector appears.
    let complete = FakeDom(BTreeMap::from([
        ("0x".to_string(), Rect::new(0.0, 0.0, 40.0, 20.0)),
        ("Technical".to_string(), Rect::new(-60.0, -80.0, 20.0, -60.0)),
    ]));
    let pass = measurer
        .measure(&complete, scene.annotation_labels().iter().map(String::as_str))
        .unwrap();
    let input = FrameInput {
        progress: Progress::ZERO,
        viewport: wide_viewport(),
        measurements: Some(&pass),
    };
    let snapshot = eval_frame(&scene, &input).unwrap();
    assert_eq!(snapshot.connectors.len(), 1);
    assert_eq!(snapshot.connectors[0].source_label, "Technical");
    assert_eq!(snapshot.connectors[0].marker, MarkerStyle::FlatHead);
}

#[test]
fn narrow_viewport_produces_curved_connectors() {
    let scene = scene();
    let mut measurer = Measurer::new();
    let dom = FakeDom(BTreeMap::from([
        ("0x".to_string(), Rect::new(0.0, 0.0, 40.0, 20.0)),
        ("Technical".to_string(), Rect::new(-60.0, -80.0, 20.0, -60.0)),
    ]));
    let pass = measurer
        .measure(&dom, scene.annotation_labels().iter().map(String::as_str))
        .unwrap();

    let input = FrameInput {
        progress: Progress::ZERO,
        viewport: Viewport::new(375.0, 700.0, 0.0),
        measurements: Some(&pass),
    };
    let snapshot = eval_frame(&scene, &input).unwrap();
    assert_eq!(snapshot.connectors.len(), 1);
    assert_eq!(snapshot.connectors[0].marker, MarkerStyle::None);
    assert_eq!(snapshot.connectors[0].dash, None);
}

#[test]
fn invalid_scene_is_rejected_before_evaluation() {
    let mut bad = scene();
    bad.breakpoint_px = -1.0;
    let input = FrameInput {
        progress: Progress::ZERO,
        viewport: wide_viewport(),
        measurements: None,
    };
    assert!(eval_frame(&bad, &input).is_err());
}
