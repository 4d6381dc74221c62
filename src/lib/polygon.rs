use super::geo::Ring;
use super::shapes::ShapeSpec;
use super::style::PolygonStyle;

/// Tunable parts of the derived camera hint. The defaults frame the shape
/// from an oblique angle at three times its size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraDefaults {
    pub range_factor: f64,
    pub tilt: f64,
    pub heading: f64,
}

impl Default for CameraDefaults {
    fn default() -> Self {
        CameraDefaults {
            range_factor: 3.0,
            tilt: 60.0,
            heading: 0.0,
        }
    }
}

/// A suggested viewpoint for rendering clients, centered above the shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookAt {
    pub lat: f64,
    pub lon: f64,
    pub altitude: f64,
    pub range: f64,
    pub heading: f64,
    pub tilt: f64,
}

/// A polygon ready for serialization: boundary ring, styling, camera hint
/// and feature name. Each boundary vertex carries the extrusion height as
/// its altitude.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderablePolygon {
    pub name: String,
    pub ring: Ring,
    pub style: PolygonStyle,
    pub look_at: LookAt,
}

impl RenderablePolygon {
    /// Generate the ring for `spec` and attach style and camera hint. The
    /// spec is consumed once; no validation happens here.
    pub fn assemble(spec: ShapeSpec, style: PolygonStyle, camera: &CameraDefaults) -> Self {
        let ring = spec.ring();
        let look_at = LookAt {
            lat: spec.center.lat,
            lon: spec.center.lon,
            altitude: style.height / 2.0,
            range: spec.size * camera.range_factor,
            heading: camera.heading,
            tilt: camera.tilt,
        };
        let name = format!("My {}", spec.kind.title());
        RenderablePolygon {
            name,
            ring,
            style,
            look_at,
        }
    }

    /// Boundary vertices as (lon, lat, altitude) triples, closing duplicate
    /// included. Every vertex sits at the extrusion height.
    pub fn coordinates(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        let altitude = self.style.height;
        self.ring
            .points()
            .iter()
            .map(move |loc| (loc.lon, loc.lat, altitude))
    }
}
