use crate::common::samples::CURVES;
use bezier_pen::{Curve, EngineConfiguration, Pen, Reduction, Style};
use criterion::{black_box, Criterion};

const GUIDE_COUNT: usize = 100;

const STYLE: Style = Style {
    show_control_segments: true,
    show_curve_segments: false,
};

pub fn reduce(c: &mut Criterion) {
    for (name, reduction) in [
        ("reduce pairwise", Reduction::Pairwise),
        ("reduce casteljau", Reduction::Casteljau),
    ] {
        c.bench_function(name, |b| {
            for points in CURVES.iter() {
                b.iter(|| black_box(Curve::new(points, GUIDE_COUNT, false, reduction)))
            }
        });
    }
}

pub fn render(c: &mut Criterion) {
    c.bench_function("render", |b| {
        for points in CURVES.iter() {
            let curve = Curve::new(points, GUIDE_COUNT, true, Reduction::Pairwise);
            b.iter(|| black_box(curve.render(&STYLE)))
        }
    });
}

pub fn clicks(c: &mut Criterion) {
    c.bench_function("clicks", |b| {
        for points in CURVES.iter() {
            let config = EngineConfiguration {
                order: points.len(),
                guide_count: GUIDE_COUNT,
                ..Default::default()
            };
            b.iter(|| {
                let mut pen = Pen::new(config.clone()).unwrap();
                for &point in points {
                    pen.on_click(point);
                }
                black_box(pen.primitives().len())
            })
        }
    });
}

pub fn all(c: &mut Criterion) {
    reduce(c);
    render(c);
    clicks(c);
}
