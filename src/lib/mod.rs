use self::kml::Output;
use self::polygon::{CameraDefaults, RenderablePolygon};
use self::shapes::ShapeSpec;
use self::style::PolygonStyle;
use std::error::Error;
use std::io::Write;

pub mod error;
pub mod geo;
pub mod geocode;
pub mod kml;
pub mod polygon;
pub mod shapes;
pub mod style;

/// Generate the shape described by `spec`, attach `style` and the derived
/// camera hint, and serialize the result as a KML document.
pub fn create_polygon_kml(
    spec: ShapeSpec,
    style: PolygonStyle,
    camera: &CameraDefaults,
    writer: &mut dyn Write,
) -> Result<(), Box<dyn Error>> {
    let polygon = RenderablePolygon::assemble(spec, style, camera);
    polygon.write_kml(writer)
}
