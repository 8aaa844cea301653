use criterion::{black_box, Criterion};
use projplot::draw::svg::SvgCanvas;
use projplot::draw::DrawCommand;
use projplot::raster::Framebuffer;
use projplot::scene::presets;
use projplot::svg::SVG;
use projplot::{render, Scene, SceneConfig};
use crate::common::samples::SCENES;

pub fn sample(c: &mut Criterion) {
    c.bench_function("sample", |b| {
        b.iter(|| black_box(Scene::from_table(SceneConfig::default(), &presets::RATIONAL)))
    });
}

pub fn record(c: &mut Criterion) {
    let mut group = c.benchmark_group("record");
    for (name, scene) in SCENES.iter() {
        group.bench_function(*name, |b| {
            b.iter(|| {
                let mut commands: Vec<DrawCommand> = Vec::new();
                black_box(render(scene, &mut commands));
                commands
            })
        });
    }
    group.finish();
}

pub fn raster(c: &mut Criterion) {
    let mut group = c.benchmark_group("raster");
    for (name, scene) in SCENES.iter() {
        let config = scene.config();
        let mut buffer = Framebuffer::new(config.width as usize, config.height as usize);
        group.bench_function(*name, |b| b.iter(|| black_box(render(scene, &mut buffer))));
    }
    group.finish();
}

pub fn svg(c: &mut Criterion) {
    let mut group = c.benchmark_group("svg");
    for (name, scene) in SCENES.iter() {
        group.bench_function(*name, |b| {
            b.iter(|| {
                let config = scene.config();
                let mut svg = SVG::new(config.width, config.height);
                render(scene, &mut SvgCanvas::from(&mut svg));
                black_box(svg.to_string())
            })
        });
    }
    group.finish();
}

pub fn all(c: &mut Criterion) {
    sample(c);
    record(c);
    raster(c);
    svg(c);
}
