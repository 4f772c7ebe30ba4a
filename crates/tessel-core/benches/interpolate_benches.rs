use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tessel_core::{Color, Font, Interpolatable, Rect, Text, Value};

fn bench_color(c: &mut Criterion) {
    let from = Color::BLACK;
    let to = Color::from_hex("3366FF").unwrap_or_default();
    c.bench_function("color_interpolate", |b| {
        b.iter(|| black_box(from).interpolate(black_box(&to), black_box(0.42)))
    });
    c.bench_function("color_from_hex", |b| {
        b.iter(|| Color::from_hex(black_box("#3366FFCC")))
    });
}

fn bench_composite(c: &mut Criterion) {
    let from = Rect::from_xywh(0.0, 0.0, 320.0, 240.0);
    let to = Rect::from_xywh(100.0, 50.0, 1920.0, 1080.0);
    c.bench_function("rect_interpolate", |b| {
        b.iter(|| black_box(from).interpolate(black_box(&to), black_box(0.42)))
    });

    let from = Text::new("Title", Font::regular("Inter", 24.0), Color::BLACK);
    let to = Text::new("Title", Font::new("Inter", 48.0, 700.0), Color::WHITE);
    c.bench_function("text_interpolate", |b| {
        b.iter(|| black_box(&from).interpolate(black_box(&to), black_box(0.42)))
    });
}

fn bench_dynamic(c: &mut Criterion) {
    let from = Value::from(Color::BLACK);
    let to = Value::from(Color::WHITE);
    c.bench_function("value_interpolate", |b| {
        b.iter(|| black_box(&from).interpolate(black_box(&to), black_box(0.42)))
    });
}

criterion_group!(benches, bench_color, bench_composite, bench_dynamic);
criterion_main!(benches);
