use super::error::ParseShapeKindError;
use super::geo::{Location, Ring};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Number of distinct vertices approximating a circle.
pub const CIRCLE_POINTS: usize = 36;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
}

impl ShapeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
            ShapeKind::Triangle => "triangle",
        }
    }

    /// Title-cased variant used for the KML feature name.
    pub fn title(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Square => "Square",
            ShapeKind::Triangle => "Triangle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = ParseShapeKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "circle" => Ok(ShapeKind::Circle),
            "square" => Ok(ShapeKind::Square),
            "triangle" => Ok(ShapeKind::Triangle),
            _ => Err(ParseShapeKindError(s.to_string())),
        }
    }
}

/// A polygon request: which shape, where, and how large. `size` is the
/// radius for circles and the side length for squares and triangles,
/// in meters.
#[derive(Debug, Clone, Copy)]
pub struct ShapeSpec {
    pub kind: ShapeKind,
    pub center: Location,
    pub size: f64,
}

impl ShapeSpec {
    pub fn new(kind: ShapeKind, center: Location, size: f64) -> Self {
        ShapeSpec { kind, center, size }
    }

    /// Generate the closed boundary ring for this shape. Pure function of
    /// the spec: identical specs yield bit-identical rings.
    pub fn ring(&self) -> Ring {
        match self.kind {
            ShapeKind::Circle => circle_ring(self.center, self.size),
            ShapeKind::Square => square_ring(self.center, self.size),
            ShapeKind::Triangle => triangle_ring(self.center, self.size),
        }
    }
}

/// 36 vertices counterclockwise, starting due east of the center.
fn circle_ring(center: Location, radius: f64) -> Ring {
    let mut points = Vec::with_capacity(CIRCLE_POINTS + 1);
    for i in 0..CIRCLE_POINTS {
        let angle = i as f64 / CIRCLE_POINTS as f64 * 2.0 * PI;
        let dx = radius * angle.cos();
        let dy = radius * angle.sin();
        points.push(center.offset(dx, dy));
    }
    points.push(points[0]);
    Ring::new(points)
}

/// Corners in NW, NE, SE, SW order. The ordering is part of the contract.
fn square_ring(center: Location, side_length: f64) -> Ring {
    let half = side_length / 2.0;
    let nw = center.offset(-half, half);
    let ne = center.offset(half, half);
    let se = center.offset(half, -half);
    let sw = center.offset(-half, -half);
    Ring::new(vec![nw, ne, se, sw, nw])
}

/// Equilateral triangle with its centroid at the center: the apex sits
/// two thirds of the height above, the base one third below.
fn triangle_ring(center: Location, side_length: f64) -> Ring {
    let height = side_length * 3.0f64.sqrt() / 2.0;
    let top = center.offset(0.0, 2.0 * height / 3.0);
    let bottom_left = center.offset(-side_length / 2.0, -height / 3.0);
    let bottom_right = center.offset(side_length / 2.0, -height / 3.0);
    Ring::new(vec![top, bottom_left, bottom_right, top])
}
