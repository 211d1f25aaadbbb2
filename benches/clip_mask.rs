// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the clipped image path.
//!
//! Measures:
//! - Clip geometry (fit, transform-to-clip mapping, source crop)
//! - Cropping the decoded pixels for a circle clip

use criterion::{criterion_group, criterion_main, Criterion};
use iced::{Point, Rectangle, Size};
use iced_image_loader::request::{ContentFit, ImageTransform};
use iced_image_loader::ui::async_image::clip;
use image_rs::{imageops, Rgba, RgbaImage};
use std::hint::black_box;

const IMAGE: Size = Size::new(800.0, 600.0);

fn card_bounds() -> Rectangle {
    Rectangle::new(Point::new(16.0, 120.0), Size::new(688.0, 280.0))
}

fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("clip_mask");
    let bounds = card_bounds();

    for (name, transform) in [
        ("circle", ImageTransform::Circle),
        ("rounded_16", ImageTransform::RoundedCorners(16.0)),
        ("none", ImageTransform::None),
    ] {
        group.bench_function(format!("geometry_{name}"), |b| {
            b.iter(|| {
                let fit = black_box(ContentFit::Cover);
                let drawn = clip::fit_rect(fit, IMAGE, bounds);
                let surface = clip::visible_surface(fit, IMAGE, bounds);
                let shape = clip::clip_for(black_box(transform), surface);
                black_box(clip::source_crop(
                    IMAGE.width as u32,
                    IMAGE.height as u32,
                    drawn,
                    shape.bounds(surface),
                ))
            });
        });
    }

    group.finish();
}

fn bench_crop(c: &mut Criterion) {
    let mut group = c.benchmark_group("clip_mask");
    let pixels = RgbaImage::from_pixel(IMAGE.width as u32, IMAGE.height as u32, Rgba([90, 60, 200, 255]));

    let bounds = card_bounds();
    let drawn = clip::fit_rect(ContentFit::Cover, IMAGE, bounds);
    let shape = clip::clip_for(ImageTransform::Circle, bounds);
    let Some((x, y, width, height)) = clip::source_crop(
        pixels.width(),
        pixels.height(),
        drawn,
        shape.bounds(bounds),
    ) else {
        panic!("circle clip overlaps the drawn image");
    };

    group.bench_function("crop_circle_region", |b| {
        b.iter(|| black_box(imageops::crop_imm(&pixels, x, y, width, height).to_image()));
    });

    group.finish();
}

criterion_group!(benches, bench_geometry, bench_crop);
criterion_main!(benches);
