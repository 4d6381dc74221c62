use addr2kml::create_polygon_kml;
use addr2kml::error::GeocodeError;
use addr2kml::geo::Location;
use addr2kml::geocode::Geocoder;
use addr2kml::kml::output_file_name;
use addr2kml::polygon::CameraDefaults;
use addr2kml::shapes::{ShapeKind, ShapeSpec};
use addr2kml::style::{Color, PolygonStyle};
use std::io::{Cursor, Read, Seek, SeekFrom};

struct FixedGeocoder(Location);

impl Geocoder for FixedGeocoder {
    fn resolve(&self, _address: &str) -> Result<Location, GeocodeError> {
        Ok(self.0)
    }
}

struct UnavailableGeocoder;

impl Geocoder for UnavailableGeocoder {
    fn resolve(&self, _address: &str) -> Result<Location, GeocodeError> {
        Err(GeocodeError::Service("connection refused".to_string()))
    }
}

fn get_string(cursor: &mut Cursor<Vec<u8>>) -> String {
    cursor.seek(SeekFrom::Start(0)).unwrap();
    let mut out = Vec::new();
    cursor.read_to_end(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn coordinate_triples(kml: &str) -> Vec<String> {
    let start = kml.find("<coordinates>").unwrap() + "<coordinates>".len();
    let end = kml.find("</coordinates>").unwrap();
    kml[start..end]
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[test]
fn square_at_the_white_house() {
    let geocoder = FixedGeocoder(Location::new(38.8977, -77.0365));
    let address = "1600 Pennsylvania Avenue NW";
    let center = geocoder.resolve(address).unwrap();

    let spec = ShapeSpec::new(ShapeKind::Square, center, 200.0);
    let style = PolygonStyle {
        fill: Color::Blue,
        fill_opacity: 0.5,
        outline: Color::Red,
        outline_width: 2.0,
        height: 50.0,
    };

    let mut cursor = Cursor::new(Vec::new());
    create_polygon_kml(spec, style, &CameraDefaults::default(), &mut cursor).unwrap();
    let kml = get_string(&mut cursor);

    assert!(kml.contains("<name>My Square</name>"));
    assert!(kml.contains("<extrude>1</extrude>"));
    assert!(kml.contains("<altitudeMode>relativeToGround</altitudeMode>"));
    // camera: range 3x size, altitude half the height, oblique tilt
    assert!(kml.contains("<range>600</range>"));
    assert!(kml.contains("<altitude>25</altitude>"));
    assert!(kml.contains("<tilt>60</tilt>"));
    assert!(kml.contains("<longitude>-77.0365</longitude>"));
    assert!(kml.contains("<latitude>38.8977</latitude>"));
    // fill: blue at 50% alpha, outline: opaque red
    assert!(kml.contains("<color>80ff0000</color>"));
    assert!(kml.contains("<color>ff0000ff</color>"));

    let triples = coordinate_triples(&kml);
    assert_eq!(triples.len(), 5);
    assert_eq!(triples.first(), triples.last());
    assert!(triples.iter().all(|t| t.ends_with(",50")));

    let file_name = output_file_name(spec.kind, address);
    assert_eq!(file_name, "square_at_1600_Pennsylvania_Avenue_NW.kml");
}

#[test]
fn circle_document_has_37_vertices() {
    let center = Location::new(52.5200, 13.4050);
    let spec = ShapeSpec::new(ShapeKind::Circle, center, 120.0);
    let style = PolygonStyle {
        fill: Color::Yellow,
        fill_opacity: 1.0,
        outline: Color::Black,
        outline_width: 1.0,
        height: 0.0,
    };

    let mut cursor = Cursor::new(Vec::new());
    create_polygon_kml(spec, style, &CameraDefaults::default(), &mut cursor).unwrap();
    let kml = get_string(&mut cursor);

    let triples = coordinate_triples(&kml);
    assert_eq!(triples.len(), 37);
    assert_eq!(triples.first(), triples.last());
    // fully opaque yellow fill
    assert!(kml.contains("<color>ff00ffff</color>"));
    assert!(kml.contains("<range>360</range>"));
    assert!(kml.contains("<altitude>0</altitude>"));
}

#[test]
fn triangle_document_has_4_vertices() {
    let center = Location::new(48.8584, 2.2945);
    let spec = ShapeSpec::new(ShapeKind::Triangle, center, 300.0);
    let style = PolygonStyle {
        fill: Color::Green,
        fill_opacity: 0.8,
        outline: Color::White,
        outline_width: 3.0,
        height: 100.0,
    };

    let mut cursor = Cursor::new(Vec::new());
    create_polygon_kml(spec, style, &CameraDefaults::default(), &mut cursor).unwrap();
    let kml = get_string(&mut cursor);

    assert!(kml.contains("<name>My Triangle</name>"));
    let triples = coordinate_triples(&kml);
    assert_eq!(triples.len(), 4);
    assert_eq!(triples.first(), triples.last());
    assert!(kml.contains("<range>900</range>"));
    assert!(kml.contains("<altitude>50</altitude>"));
}

#[test]
fn service_failures_are_recoverable_errors() {
    let geocoder = UnavailableGeocoder;
    let err = geocoder.resolve("somewhere").unwrap_err();
    match err {
        GeocodeError::Service(message) => assert!(message.contains("connection refused")),
        GeocodeError::AddressNotFound => panic!("expected a service error"),
    }
}
