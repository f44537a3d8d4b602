use criterion::{criterion_group, criterion_main, Criterion};

use falimy_logo::{render_logo, LogoConfig};

// Run with:
//    cargo bench --bench render_bench

fn bench_render_fallback(c: &mut Criterion) {
    let cfg = LogoConfig {
        font_file: "falimy-missing-face.ttf".to_string(),
        system_fonts: false,
        ..Default::default()
    };

    c.bench_function("render_logo_fallback", |b| {
        b.iter(|| {
            render_logo(&cfg).unwrap();
        })
    });
}

fn bench_encode_png(c: &mut Criterion) {
    let cfg = LogoConfig {
        font_file: "falimy-missing-face.ttf".to_string(),
        system_fonts: false,
        ..Default::default()
    };
    let logo = render_logo(&cfg).expect("render");

    c.bench_function("encode_png", |b| {
        b.iter(|| {
            logo.to_png().unwrap();
        })
    });
}

criterion_group!(benches, bench_render_fallback, bench_encode_png);
criterion_main!(benches);
