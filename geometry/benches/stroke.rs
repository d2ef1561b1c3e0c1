/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use flo_geometry::*;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn zigzag(count: i32) -> Path {
    let mut path = Path::new();
    path.add_point(FixedPoint::from_int(0, 0).unwrap()).unwrap();

    for idx in 1..=count {
        let y = if idx % 2 == 0 { 0 } else { 20 };
        path.add_line(FixedPoint::from_int(idx * 10, y).unwrap()).unwrap();
    }

    path
}

fn criterion_benchmark(c: &mut Criterion) {
    let path    = zigzag(200);
    let miter   = ImagerState::default().with_line_width(4.0);
    let round   = miter.clone().with_line_join(LineJoin::Round).with_line_cap(LineCap::Round);
    let dashed  = miter.clone().with_line_params(LineParams::default().with_width(4.0).with_dash(Some(DashPattern::new(&[6.0, 3.0], 0.0, false).unwrap())));
    let fast    = miter.clone().with_fill_adjust(FixedPoint::ORIGIN);

    c.bench_function("stroke_miter", |b| b.iter(|| stroke_path(black_box(&path), &miter).unwrap()));
    c.bench_function("stroke_round", |b| b.iter(|| stroke_path(black_box(&path), &round).unwrap()));
    c.bench_function("stroke_dashed", |b| b.iter(|| stroke_path(black_box(&path), &dashed).unwrap()));

    c.bench_function("stroke_to_device", |b| b.iter(|| {
        let mut device = RecordingDevice::new();
        stroke_path_to_device(black_box(&path), &mut device, &fast, None).unwrap();
        device
    }));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
