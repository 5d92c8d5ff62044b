// Copyright 2026 the Onetap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use onetap_hover::coordinator::HoverCoordinator;
use onetap_hover::types::AnchorSpec;
use onetap_dedup::types::ActivationKind::PointerUp;

// A forest of `roots` root-level anchors, each enclosing `children` nested
// anchors. Anchor keys are even, target keys odd.
fn menu_forest(roots: u32, children: u32) -> Vec<AnchorSpec<u32>> {
    let mut specs = Vec::with_capacity((roots * (children + 1)) as usize);
    let mut next = 0_u32;
    for _ in 0..roots {
        let root = next;
        specs.push(AnchorSpec {
            anchor: root,
            target: Some(root + 1),
            ancestors: vec![],
        });
        next += 2;
        for _ in 0..children {
            specs.push(AnchorSpec {
                anchor: next,
                target: Some(next + 1),
                ancestors: vec![root],
            });
            next += 2;
        }
    }
    specs
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("coordinator_build");
    for &(roots, children) in &[(8_u32, 4_u32), (32, 8), (64, 16)] {
        let specs = menu_forest(roots, children);
        group.throughput(Throughput::Elements(specs.len() as u64));
        group.bench_function(format!("roots{}_children{}", roots, children), |b| {
            b.iter_batched(
                || specs.clone(),
                |specs| black_box(HoverCoordinator::new(specs)),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_reveal_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("coordinator_churn");
    let specs = menu_forest(32, 8);
    let roots: Vec<u32> = (0..32).map(|r| r * 18).collect();
    group.throughput(Throughput::Elements(roots.len() as u64));
    // Walking across the menu bar: every reveal globally conceals the
    // previous root's subtree.
    group.bench_function("root_sweep", |b| {
        b.iter_batched(
            || HoverCoordinator::new(specs.clone()),
            |mut coordinator| {
                let mut effects = 0_usize;
                for &root in &roots {
                    effects += coordinator.reveal(root).len();
                }
                black_box(effects);
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("tap_reveal_then_outside_dismiss", |b| {
        b.iter_batched(
            || HoverCoordinator::new(specs.clone()),
            |mut coordinator| {
                let mut effects = 0_usize;
                for &root in &roots {
                    effects += coordinator.anchor_tap(root, PointerUp).effects.len();
                    effects += coordinator.outside_tap(None, PointerUp).len();
                }
                black_box(effects);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_subtree_collapse(c: &mut Criterion) {
    let mut group = c.benchmark_group("coordinator_collapse");
    let specs = menu_forest(8, 32);
    group.bench_function("pointer_move_collapses_children", |b| {
        b.iter_batched(
            || {
                let mut coordinator = HoverCoordinator::new(specs.clone());
                coordinator.reveal(0);
                coordinator.reveal(2);
                coordinator
            },
            |mut coordinator| {
                // Off the child, still within the root.
                black_box(coordinator.pointer_moved(Some(0)));
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_reveal_churn, bench_subtree_collapse);
criterion_main!(benches);
