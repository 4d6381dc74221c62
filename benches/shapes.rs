use addr2kml::geo::Location;
use addr2kml::kml::Output;
use addr2kml::polygon::{CameraDefaults, RenderablePolygon};
use addr2kml::shapes::{ShapeKind, ShapeSpec};
use addr2kml::style::{Color, PolygonStyle};
use criterion::{criterion_group, criterion_main, Criterion};
use std::io::{Result, Write};

struct MockWriter;

impl Write for MockWriter {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        Ok(buf.len())
    }
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

pub fn ring_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("rings");
    let center = Location::new(52.5200, 13.4050);
    for kind in &[ShapeKind::Circle, ShapeKind::Square, ShapeKind::Triangle] {
        let spec = ShapeSpec::new(*kind, center, 250.0);
        group.bench_function(kind.name(), |b| b.iter(|| spec.ring()));
    }
    group.finish();
}

pub fn serialize_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("kml");
    let center = Location::new(52.5200, 13.4050);
    let spec = ShapeSpec::new(ShapeKind::Circle, center, 250.0);
    let style = PolygonStyle {
        fill: Color::Blue,
        fill_opacity: 0.5,
        outline: Color::Red,
        outline_width: 2.0,
        height: 50.0,
    };
    let polygon = RenderablePolygon::assemble(spec, style, &CameraDefaults::default());
    group.bench_function("write_circle", |b| {
        b.iter(|| {
            let mut writer = MockWriter;
            polygon.write_kml(&mut writer).unwrap();
        })
    });
    group.finish();
}

criterion_group!(benches, ring_bench, serialize_bench);
criterion_main!(benches);
