// Copyright 2026 the Onetap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use onetap_dedup::gate::{GateMap, TapGate};
use onetap_dedup::router::TapRouter;
use onetap_dedup::types::ActivationKind::{Click, PointerUp, TouchEnd};
use onetap_dedup::types::{ActivationKind, TapEvent};

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
}

// Event streams as the device profiles emit them for one tap each.
fn ghost_taps(count: usize) -> Vec<ActivationKind> {
    let mut out = Vec::with_capacity(count * 3);
    for _ in 0..count {
        out.extend([PointerUp, TouchEnd, Click]);
    }
    out
}

fn touch_taps(count: usize) -> Vec<ActivationKind> {
    let mut out = Vec::with_capacity(count * 2);
    for _ in 0..count {
        out.extend([TouchEnd, Click]);
    }
    out
}

fn mixed_taps(count: usize) -> Vec<ActivationKind> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    let mut out = Vec::with_capacity(count * 3);
    for _ in 0..count {
        match rng.next_u64() % 3 {
            0 => out.extend(&[PointerUp, TouchEnd, Click][..]),
            1 => out.extend(&[TouchEnd, Click][..]),
            _ => out.push(Click),
        }
    }
    out
}

fn bench_gate(c: &mut Criterion) {
    let mut group = c.benchmark_group("gate");
    for (name, events) in [
        ("ghost_taps", ghost_taps(1024)),
        ("touch_taps", touch_taps(1024)),
        ("mixed_taps", mixed_taps(1024)),
    ] {
        group.throughput(Throughput::Elements(events.len() as u64));
        group.bench_function(name, |b| {
            b.iter_batched(
                TapGate::new,
                |mut gate| {
                    let admitted = events.iter().filter(|&&k| gate.admit(k)).count();
                    black_box(admitted);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_gate_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("gate_map");
    let events = ghost_taps(256);
    for &targets in &[4_u32, 16, 64] {
        group.throughput(Throughput::Elements((events.len() as u64) * u64::from(targets)));
        group.bench_function(format!("ghost_taps_targets{}", targets), |b| {
            b.iter_batched(
                GateMap::<u32>::new,
                |mut map| {
                    let mut admitted = 0_usize;
                    for t in 0..targets {
                        for &kind in &events {
                            if map.admit(t, kind) {
                                admitted += 1;
                            }
                        }
                    }
                    black_box(admitted);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_router_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("router");
    let targets: Vec<u32> = (0..64).collect();
    let events = ghost_taps(64);
    group.throughput(Throughput::Elements((events.len() * targets.len()) as u64));
    group.bench_function("dispatch_fanout", |b| {
        b.iter_batched(
            || {
                let mut router = TapRouter::new();
                router.attach(&targets, |event: &TapEvent<u32>| {
                    black_box(event.target);
                });
                router
            },
            |mut router| {
                let mut fired = 0_usize;
                for &t in &targets {
                    for &kind in &events {
                        fired += router.dispatch(&TapEvent::new(t, kind, Point::ZERO));
                    }
                }
                black_box(fired);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_gate, bench_gate_map, bench_router_dispatch);
criterion_main!(benches);
