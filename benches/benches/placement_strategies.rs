// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};
use understory_placement::{Placement, PlacementConfig, Resolver};

const VIEWPORT: Size = Size::new(1280.0, 800.0);

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Triggers scattered over the viewport, including the edges.
fn gen_triggers(count: usize, seed: u64) -> Vec<Rect> {
    let mut rng = Rng::new(seed);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let w = 20.0 + rng.next_f64() * 180.0;
        let h = 16.0 + rng.next_f64() * 32.0;
        let x = rng.next_f64() * (VIEWPORT.width - w);
        let y = rng.next_f64() * (VIEWPORT.height - h);
        out.push(Rect::new(x, y, x + w, y + h));
    }
    out
}

fn gen_panels(count: usize, seed: u64) -> Vec<Size> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| Size::new(80.0 + rng.next_f64() * 320.0, 40.0 + rng.next_f64() * 400.0))
        .collect()
}

fn bench_strategies(c: &mut Criterion) {
    const N: usize = 4096;
    let triggers = gen_triggers(N, 0x9E37_79B9_7F4A_7C15);
    let panels = gen_panels(N, 0xD1B5_4A32_D192_ED03);
    let prefs = [
        Placement::Auto,
        Placement::Bottom,
        Placement::TopLeft,
        Placement::RightBottom,
    ];

    let mut group = c.benchmark_group("placement");
    group.throughput(Throughput::Elements(N as u64));

    let presets = [
        ("ranked", PlacementConfig::menu()),
        ("flip", PlacementConfig::dropdown()),
        ("flip_split", PlacementConfig::tooltip()),
    ];
    for (name, config) in presets {
        let resolver = Resolver::new(config);
        group.bench_function(name, |b| {
            b.iter(|| {
                for (i, (t, p)) in triggers.iter().zip(&panels).enumerate() {
                    let pref = prefs[i % prefs.len()];
                    black_box(resolver.place(*t, *p, pref, VIEWPORT));
                }
            });
        });
    }

    let resolver = Resolver::default();
    group.bench_function("resolve_and_layout", |b| {
        b.iter(|| {
            for (t, p) in triggers.iter().zip(&panels) {
                let placement = resolver.resolve(*t, *p, Placement::Bottom, VIEWPORT);
                black_box(resolver.layout(*t, *p, placement, VIEWPORT));
            }
        });
    });

    let resolver = Resolver::new(PlacementConfig::action_menu());
    group.bench_function("resolve_point", |b| {
        b.iter(|| {
            for (t, p) in triggers.iter().zip(&panels) {
                let anchor = Point::new(t.x0, t.y0);
                black_box(resolver.resolve_point(anchor, *p, Placement::Auto, VIEWPORT));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
