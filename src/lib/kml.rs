use super::polygon::RenderablePolygon;
use super::shapes::ShapeKind;
use std::error::Error;
use std::io::Write;

pub trait Output {
    fn write_kml(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>>;
}

/// Conventional output file name: `{kind}_at_{address}.kml` with spaces
/// replaced by underscores.
pub fn output_file_name(kind: ShapeKind, address: &str) -> String {
    format!("{}_at_{}.kml", kind, address.replace(' ', "_"))
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

impl Output for RenderablePolygon {
    fn write_kml(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>> {
        let style = &self.style;
        let look_at = &self.look_at;
        writeln!(writer, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(writer, r#"<kml xmlns="http://www.opengis.net/kml/2.2">"#)?;
        writeln!(writer, "  <Document>")?;
        writeln!(writer, "    <Placemark>")?;
        writeln!(writer, "      <name>{}</name>", escape_xml(&self.name))?;
        writeln!(writer, "      <LookAt>")?;
        writeln!(writer, "        <longitude>{}</longitude>", look_at.lon)?;
        writeln!(writer, "        <latitude>{}</latitude>", look_at.lat)?;
        writeln!(writer, "        <altitude>{}</altitude>", look_at.altitude)?;
        writeln!(writer, "        <heading>{}</heading>", look_at.heading)?;
        writeln!(writer, "        <tilt>{}</tilt>", look_at.tilt)?;
        writeln!(writer, "        <range>{}</range>", look_at.range)?;
        writeln!(writer, "      </LookAt>")?;
        writeln!(writer, "      <Style>")?;
        writeln!(writer, "        <LineStyle>")?;
        writeln!(writer, "          <color>{}</color>", style.outline.kml())?;
        writeln!(writer, "          <width>{}</width>", style.outline_width)?;
        writeln!(writer, "        </LineStyle>")?;
        writeln!(writer, "        <PolyStyle>")?;
        writeln!(
            writer,
            "          <color>{}</color>",
            style.fill.kml_with_opacity(style.fill_opacity)
        )?;
        writeln!(writer, "          <outline>1</outline>")?;
        writeln!(writer, "        </PolyStyle>")?;
        writeln!(writer, "      </Style>")?;
        writeln!(writer, "      <Polygon>")?;
        writeln!(writer, "        <extrude>1</extrude>")?;
        writeln!(
            writer,
            "        <altitudeMode>relativeToGround</altitudeMode>"
        )?;
        writeln!(writer, "        <outerBoundaryIs>")?;
        writeln!(writer, "          <LinearRing>")?;
        let coordinates: Vec<String> = self
            .coordinates()
            .map(|(lon, lat, alt)| format!("{},{},{}", lon, lat, alt))
            .collect();
        writeln!(
            writer,
            "            <coordinates>{}</coordinates>",
            coordinates.join(" ")
        )?;
        writeln!(writer, "          </LinearRing>")?;
        writeln!(writer, "        </outerBoundaryIs>")?;
        writeln!(writer, "      </Polygon>")?;
        writeln!(writer, "    </Placemark>")?;
        writeln!(writer, "  </Document>")?;
        writeln!(writer, "</kml>")?;
        Ok(())
    }
}
