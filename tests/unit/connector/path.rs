use super::*;
use kurbo::PathEl;

fn from_box() -> Rect {
    // Bottom-mid anchor at (100, 50).
    Rect::new(80.0, 30.0, 120.0, 50.0)
}

fn to_box() -> Rect {
    Rect::new(90.0, 130.0, 110.0, 150.0)
}

#[test]
fn side_midpoints() {
    let rect = Rect::new(0.0, 0.0, 10.0, 20.0);
    assert_eq!(Side::Top.midpoint(&rect), Point::new(5.0, 0.0));
    assert_eq!(Side::Bottom.midpoint(&rect), Point::new(5.0, 20.0));
    assert_eq!(Side::Left.midpoint(&rect), Point::new(0.0, 10.0));
    assert_eq!(Side::Right.midpoint(&rect), Point::new(10.0, 10.0));
}

#[test]
fn orthogonal_clearance_vertex() {
    // Target shifted sideways so the right-angle turn is a real one.
    let to = Rect::new(140.0, 130.0, 160.0, 150.0);
    let connector = connector_path(
        &from_box(),
        &to,
        Side::Bottom,
        Side::Top,
        &PathStyle::orthogonal(),
    );

    let els: Vec<PathEl> = connector.path.elements().to_vec();
    assert_eq!(els.len(), 4);
    assert_eq!(els[0], PathEl::MoveTo(Point::new(100.0, 50.0)));
    // First turn sits one clearance below the source's bottom edge.
    assert_eq!(els[1], PathEl::LineTo(Point::new(100.0, 70.0)));
    // Second turn aligns with the endpoint's x at the clearance height.
    assert_eq!(els[2], PathEl::LineTo(Point::new(150.0, 70.0)));
    assert_eq!(els[3], PathEl::LineTo(Point::new(150.0, 130.0)));
}

#[test]
fn orthogonal_from_horizontal_side_turns_on_y() {
    let from = Rect::new(0.0, 0.0, 20.0, 20.0);
    let to = Rect::new(100.0, 60.0, 140.0, 80.0);
    let connector = connector_path(&from, &to, Side::Right, Side::Left, &PathStyle::orthogonal());

    let els: Vec<PathEl> = connector.path.elements().to_vec();
    assert_eq!(els[0], PathEl::MoveTo(Point::new(20.0, 10.0)));
    assert_eq!(els[1], PathEl::LineTo(Point::new(40.0, 10.0)));
    assert_eq!(els[2], PathEl::LineTo(Point::new(40.0, 70.0)));
    assert_eq!(els[3], PathEl::LineTo(Point::new(100.0, 70.0)));
    assert_eq!(connector.marker, MarkerStyle::FlatHead);
    assert_eq!(connector.dash, Some(ORTHOGONAL_DASH));
}

#[test]
fn end_clearance_pushes_the_endpoint_outward() {
    let style = PathStyle::orthogonal().with_end_clearance(30.0);
    let from = Rect::new(200.0, 0.0, 240.0, 20.0);
    let to = Rect::new(100.0, 100.0, 140.0, 120.0);
    let connector = connector_path(&from, &to, Side::Bottom, Side::Right, &style);

    let els: Vec<PathEl> = connector.path.elements().to_vec();
    // Right-side midpoint (140, 110) pushed 30 further right.
    assert_eq!(els[3], PathEl::LineTo(Point::new(170.0, 110.0)));
}

#[test]
fn curved_path_is_an_s_curve_between_centers() {
    let connector = connector_path(
        &from_box(),
        &to_box(),
        Side::Bottom,
        Side::Top,
        &PathStyle::Curved,
    );

    let els: Vec<PathEl> = connector.path.elements().to_vec();
    assert_eq!(els.len(), 2);
    assert_eq!(els[0], PathEl::MoveTo(Point::new(100.0, 40.0)));
    // Centers are (100, 40) and (100, 140); control points offset by half
    // the vertical distance.
    assert_eq!(
        els[1],
        PathEl::CurveTo(
            Point::new(100.0, 90.0),
            Point::new(100.0, 90.0),
            Point::new(100.0, 140.0),
        )
    );
    assert_eq!(connector.marker, MarkerStyle::None);
    assert_eq!(connector.dash, None);
}

#[test]
fn identical_inputs_yield_byte_identical_svg() {
    for style in [PathStyle::Curved, PathStyle::orthogonal()] {
        let a = connector_path(&from_box(), &to_box(), Side::Bottom, Side::Top, &style);
        let b = connector_path(&from_box(), &to_box(), Side::Bottom, Side::Top, &style);
        assert_eq!(a.to_svg(), b.to_svg());
        assert_eq!(a, b);
    }
}

#[test]
fn breakpoint_selects_the_strategy() {
    assert_eq!(PathStyle::for_viewport(500.0, 768.0), PathStyle::Curved);
    assert_eq!(
        PathStyle::for_viewport(768.0, 768.0),
        PathStyle::orthogonal()
    );
    assert_eq!(
        PathStyle::for_viewport(1280.0, 768.0),
        PathStyle::orthogonal()
    );
}
