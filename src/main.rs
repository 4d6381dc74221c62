use addr2kml::create_polygon_kml;
use addr2kml::error::GeocodeError;
use addr2kml::geo::Location;
use addr2kml::geocode::{Geocoder, Nominatim};
use addr2kml::kml::output_file_name;
use addr2kml::polygon::CameraDefaults;
use addr2kml::shapes::{ShapeKind, ShapeSpec};
use addr2kml::style::{Color, PolygonStyle};
use std::error::Error;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(
    name = "addr2kml",
    about = "Turn a street address into an extruded 3D polygon in a KML file"
)]
struct Opt {
    /// Directory the KML file is written to
    #[structopt(short, long, parse(from_os_str), default_value = ".")]
    out_dir: PathBuf,
    /// Nominatim endpoint used for geocoding
    #[structopt(long, default_value = "https://nominatim.openstreetmap.org")]
    endpoint: String,
    /// User-Agent header sent with geocoding requests
    #[structopt(long, default_value = "addr2kml")]
    user_agent: String,
}

fn prompt(question: &str) -> io::Result<String> {
    print!("{}: ", question);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Ask until `parse` accepts the answer, echoing its message on rejection.
fn prompt_until<T, F>(question: &str, parse: F) -> io::Result<T>
where
    F: Fn(&str) -> Result<T, String>,
{
    loop {
        let answer = prompt(question)?;
        match parse(&answer) {
            Ok(value) => return Ok(value),
            Err(message) => println!("{}", message),
        }
    }
}

fn parse_positive(answer: &str) -> Result<f64, String> {
    let value: f64 = answer
        .parse()
        .map_err(|_| format!("'{}' is not a number", answer))?;
    if value <= 0.0 {
        return Err("value must be greater than 0".to_string());
    }
    Ok(value)
}

fn parse_non_negative(answer: &str) -> Result<f64, String> {
    let value: f64 = answer
        .parse()
        .map_err(|_| format!("'{}' is not a number", answer))?;
    if value < 0.0 {
        return Err("value must not be negative".to_string());
    }
    Ok(value)
}

fn parse_opacity(answer: &str) -> Result<f64, String> {
    let value: f64 = answer
        .parse()
        .map_err(|_| format!("'{}' is not a number", answer))?;
    if !(0.0..=1.0).contains(&value) {
        return Err("opacity must be between 0.0 and 1.0".to_string());
    }
    Ok(value)
}

fn resolve_address(geocoder: &dyn Geocoder) -> io::Result<(String, Location)> {
    loop {
        let address = prompt("Enter a street address")?;
        match geocoder.resolve(&address) {
            Ok(center) => return Ok((address, center)),
            Err(GeocodeError::AddressNotFound) => {
                println!("Address not found. Please try again.");
            }
            Err(GeocodeError::Service(message)) => {
                println!("Geocoding service error: {}. Please try again.", message);
            }
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let opt = Opt::from_args();
    let geocoder = Nominatim::new(opt.endpoint, opt.user_agent);

    let (address, center) = resolve_address(&geocoder)?;
    println!("Coordinates: {}, {}", center.lat, center.lon);

    let kind = prompt_until("Enter polygon type (circle, square, or triangle)", |s| {
        s.parse::<ShapeKind>().map_err(|e| e.to_string())
    })?;
    let size = prompt_until(
        "Enter size in meters (radius for circle, side length for square/triangle)",
        parse_positive,
    )?;
    let height = prompt_until("Enter height of the polygon in meters", parse_non_negative)?;
    let fill = prompt_until(
        "Enter fill color (red, green, blue, white, black, yellow, cyan, magenta)",
        |s| s.parse::<Color>().map_err(|e| e.to_string()),
    )?;
    let fill_opacity = prompt_until("Enter fill opacity (0.0 to 1.0)", parse_opacity)?;
    let outline = prompt_until(
        "Enter outline color (red, green, blue, white, black, yellow, cyan, magenta)",
        |s| s.parse::<Color>().map_err(|e| e.to_string()),
    )?;
    let outline_width = prompt_until("Enter outline width in pixels", parse_non_negative)?;

    let spec = ShapeSpec::new(kind, center, size);
    let style = PolygonStyle {
        fill,
        fill_opacity,
        outline,
        outline_width,
        height,
    };

    let path = opt.out_dir.join(output_file_name(kind, &address));
    let mut file = File::create(&path)?;
    create_polygon_kml(spec, style, &CameraDefaults::default(), &mut file)?;
    println!("KML file '{}' has been created.", path.display());
    Ok(())
}
