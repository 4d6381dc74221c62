use geo::prelude::*;
use geo_types::{Coordinate, LineString, Point, Polygon};
use serde::{Deserialize, Serialize};

/// Meters per degree of latitude in the equirectangular approximation.
pub const METERS_PER_DEGREE: f64 = 111_111.0;

/// 0.1 m — the `COORD_PRECISION` constant formerly exported by `geo-types`.
const COORD_PRECISION: f32 = 1e-1;

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    pub fn new(lat: f64, lon: f64) -> Self {
        Location { lat, lon }
    }

    /// Displace this location by `dx` meters east and `dy` meters north,
    /// treating the surrounding area as a flat plane.
    ///
    /// The longitude scale collapses towards the poles (`cos(lat)` goes to
    /// zero), so the eastward delta diverges for |lat| near 90°. That is an
    /// accepted limitation of the approximation and is deliberately not
    /// clamped here.
    pub fn offset(&self, dx: f64, dy: f64) -> Location {
        let lat = self.lat + dy / METERS_PER_DEGREE;
        let lon = self.lon + dx / (METERS_PER_DEGREE * self.lat.to_radians().cos());
        Location { lat, lon }
    }
}

impl PartialEq<Location> for Location {
    fn eq(&self, other: &Self) -> bool {
        let self_point = Point::new(self.lon, self.lat);
        let other_point = Point::new(other.lon, other.lat);
        let distance = self_point.haversine_distance(&other_point);
        distance < COORD_PRECISION.into()
    }
}

impl From<Location> for Point<f64> {
    fn from(loc: Location) -> Self {
        Point::new(loc.lon, loc.lat)
    }
}

impl From<Location> for Coordinate<f64> {
    fn from(loc: Location) -> Self {
        Coordinate {
            x: loc.lon,
            y: loc.lat,
        }
    }
}

impl From<Location> for [f64; 2] {
    fn from(loc: Location) -> Self {
        [loc.lon, loc.lat]
    }
}

/// A closed boundary: an ordered sequence of locations whose first and last
/// entries coincide. Insertion order defines the boundary traversal.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring(Vec<Location>);

impl Ring {
    /// Wrap an ordered vertex list. The shape generators guarantee closure;
    /// `is_closed` makes the invariant observable for callers and tests.
    pub(crate) fn new(points: Vec<Location>) -> Self {
        Ring(points)
    }

    pub fn points(&self) -> &[Location] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First and last vertex agree to within 1e-9 degrees on both axes.
    pub fn is_closed(&self) -> bool {
        match (self.0.first(), self.0.last()) {
            (Some(first), Some(last)) => {
                (first.lat - last.lat).abs() <= 1e-9 && (first.lon - last.lon).abs() <= 1e-9
            }
            _ => false,
        }
    }

    pub fn to_polygon(&self) -> Polygon<f64> {
        let line_string: LineString<f64> = self.into();
        Polygon::new(line_string, vec![])
    }
}

impl From<&Ring> for LineString<f64> {
    fn from(ring: &Ring) -> Self {
        let coordinates: Vec<Coordinate<f64>> = ring.0.iter().map(|&loc| loc.into()).collect();
        coordinates.into()
    }
}
