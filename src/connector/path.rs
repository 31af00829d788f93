use crate::foundation::core::{BezPath, Point, Rect, Vec2};

/// Perpendicular clearance for the first leg of an orthogonal connector.
pub const DEFAULT_CLEARANCE: f64 = 20.0;

/// Dash pattern applied to orthogonal connectors.
pub const ORTHOGONAL_DASH: [f64; 2] = [4.0, 4.0];

/// The edge of a box used as a path's attachment point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Top edge; paths leave upward.
    Top,
    /// Bottom edge; paths leave downward.
    Bottom,
    /// Left edge; paths leave leftward.
    Left,
    /// Right edge; paths leave rightward.
    Right,
}

impl Side {
    /// Midpoint of this edge on `rect`.
    pub fn midpoint(self, rect: &Rect) -> Point {
        match self {
            Self::Top => Point::new(rect.x0 + rect.width() / 2.0, rect.y0),
            Self::Bottom => Point::new(rect.x0 + rect.width() / 2.0, rect.y1),
            Self::Left => Point::new(rect.x0, rect.y0 + rect.height() / 2.0),
            Self::Right => Point::new(rect.x1, rect.y0 + rect.height() / 2.0),
        }
    }

    /// Unit vector pointing away from the box (screen coordinates, y down).
    pub fn outward(self) -> Vec2 {
        match self {
            Self::Top => Vec2::new(0.0, -1.0),
            Self::Bottom => Vec2::new(0.0, 1.0),
            Self::Left => Vec2::new(-1.0, 0.0),
            Self::Right => Vec2::new(1.0, 0.0),
        }
    }

    fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Path strategy, selected by viewport width against the breakpoint.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathStyle {
    /// Smooth S-curve between box centers; used below the breakpoint.
    Curved,
    /// Orthogonal 4-point polyline with right-angle turns; used at and above
    /// the breakpoint.
    Orthogonal {
        /// Clearance along the source side's outward normal.
        clearance: f64,
        /// Extra clearance past the target side's midpoint, for glyphs that
        /// need visual breathing room.
        end_clearance: f64,
    },
}

impl PathStyle {
    /// Orthogonal style with the default clearance and no end clearance.
    pub fn orthogonal() -> Self {
        Self::Orthogonal {
            clearance: DEFAULT_CLEARANCE,
            end_clearance: 0.0,
        }
    }

    /// Select the strategy for `viewport_width` against `breakpoint_px`.
    pub fn for_viewport(viewport_width: f64, breakpoint_px: f64) -> Self {
        if viewport_width < breakpoint_px {
            Self::Curved
        } else {
            Self::orthogonal()
        }
    }

    /// Same style with `end_clearance` applied; a no-op for curved paths.
    pub fn with_end_clearance(self, end_clearance: f64) -> Self {
        match self {
            Self::Curved => Self::Curved,
            Self::Orthogonal { clearance, .. } => Self::Orthogonal {
                clearance,
                end_clearance,
            },
        }
    }
}

/// End-of-line marker for a connector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerStyle {
    /// No marker.
    None,
    /// Flat perpendicular cap at the end of orthogonal connectors.
    FlatHead,
}

/// A drawable connector between two measured boxes.
///
/// Derived, disposable state: regenerate whenever either referenced box
/// changes. Never a source of truth.
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectorPath {
    /// Path geometry in container coordinates.
    pub path: BezPath,
    /// End-of-line marker.
    pub marker: MarkerStyle,
    /// Dash pattern, if the style uses one.
    pub dash: Option<[f64; 2]>,
}

impl ConnectorPath {
    /// SVG path data (`d` attribute). Byte-identical for identical inputs.
    pub fn to_svg(&self) -> String {
        self.path.to_svg()
    }
}

/// Generate the connector between `from` and `to`.
///
/// Pure and deterministic: identical inputs always yield an identical path
/// description, so callers may regenerate on every measurement change without
/// any invalidation logic. Sides are ignored by the curved strategy, which
/// always runs center-to-center.
pub fn connector_path(
    from: &Rect,
    to: &Rect,
    from_side: Side,
    to_side: Side,
    style: &PathStyle,
) -> ConnectorPath {
    match *style {
        PathStyle::Curved => curved(from, to),
        PathStyle::Orthogonal {
            clearance,
            end_clearance,
        } => orthogonal(from, to, from_side, to_side, clearance, end_clearance),
    }
}

/// Cubic between centers; control points offset vertically by half the
/// inter-center distance, yielding a smooth S-curve.
fn curved(from: &Rect, to: &Rect) -> ConnectorPath {
    let start = from.center();
    let end = to.center();
    let half_dy = (end.y - start.y) * 0.5;
    let c1 = Point::new(start.x, start.y + half_dy);
    let c2 = Point::new(end.x, end.y - half_dy);

    let mut path = BezPath::new();
    path.move_to(start);
    path.curve_to(c1, c2, end);
    ConnectorPath {
        path,
        marker: MarkerStyle::None,
        dash: None,
    }
}

/// 4-point polyline: leave the source side by `clearance`, turn at a right
/// angle to align with the endpoint, terminate at the target side's midpoint
/// (pushed out by `end_clearance`).
fn orthogonal(
    from: &Rect,
    to: &Rect,
    from_side: Side,
    to_side: Side,
    clearance: f64,
    end_clearance: f64,
) -> ConnectorPath {
    let p1 = from_side.midpoint(from);
    let p4 = to_side.midpoint(to) + to_side.outward() * end_clearance;
    let p2 = p1 + from_side.outward() * clearance;
    let p3 = if from_side.is_horizontal() {
        Point::new(p2.x, p4.y)
    } else {
        Point::new(p4.x, p2.y)
    };

    let mut path = BezPath::new();
    path.move_to(p1);
    path.line_to(p2);
    path.line_to(p3);
    path.line_to(p4);
    ConnectorPath {
        path,
        marker: MarkerStyle::FlatHead,
        dash: Some(ORTHOGONAL_DASH),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/connector/path.rs"]
mod tests;
