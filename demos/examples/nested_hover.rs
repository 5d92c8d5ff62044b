// Copyright 2026 the Onetap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nested anchors, the click-through timer, and subtree collapse.
//!
//! A submenu anchor lives inside its parent's dropdown. Pending timers are
//! simulated with a queue; each expiry re-checks with the coordinator, so
//! timers surviving a conceal are harmless.
//!
//! Run:
//! - `cargo run -p onetap_examples --example nested_hover`

use onetap_dedup::types::ActivationKind::PointerUp;
use onetap_hover::coordinator::HoverCoordinator;
use onetap_hover::types::{AnchorSpec, Effect};

fn pending_timers(effects: &[Effect<u32>]) -> Vec<u32> {
    effects
        .iter()
        .filter_map(|e| match e {
            Effect::StartClickThroughTimer { anchor, .. } => Some(*anchor),
            _ => None,
        })
        .collect()
}

fn main() {
    // Anchor 1 reveals dropdown 10; anchor 2 sits inside that dropdown and
    // reveals flyout 20.
    let mut menus = HoverCoordinator::new(vec![
        AnchorSpec {
            anchor: 1_u32,
            target: Some(10),
            ancestors: vec![],
        },
        AnchorSpec {
            anchor: 2,
            target: Some(20),
            ancestors: vec![1],
        },
    ]);
    let mut timers: Vec<u32> = Vec::new();

    println!("== tap the parent, then its nested submenu ==");
    let response = menus.anchor_tap(1, PointerUp);
    assert!(response.intercepted, "first tap is intercepted");
    timers.extend(pending_timers(&response.effects));

    let response = menus.anchor_tap(2, PointerUp);
    timers.extend(pending_timers(&response.effects));
    assert!(menus.is_active(1) && menus.is_active(2));
    assert!(menus.has_active_child(1));
    println!("  dropdown and flyout open, parent knows its child is active");

    // 70ms later the pending timers expire; both anchors stay active, so
    // click-through latches for both.
    for anchor in timers.drain(..) {
        menus.click_through_elapsed(anchor);
    }
    let response = menus.anchor_tap(1, PointerUp);
    assert!(!response.intercepted, "second deliberate tap passes through");
    println!("  second tap on the parent would follow its link");

    // Moving the pointer within the parent but off the submenu collapses
    // just the flyout.
    println!("== pointer drifts off the submenu ==");
    let effects = menus.pointer_moved(Some(1));
    assert!(menus.is_active(1) && !menus.is_active(2));
    assert!(effects.contains(&Effect::ClearActive(20)));
    println!("  flyout closed, dropdown still open");

    // Pointer leaves the anchors entirely; everything closes. A timer that
    // was still pending for the submenu now expires into a no-op.
    println!("== pointer leaves the menu ==");
    let response = menus.anchor_tap(2, PointerUp);
    timers.extend(pending_timers(&response.effects));
    menus.pointer_moved(None);
    assert!(!menus.is_active(1) && !menus.is_active(2) && !menus.is_armed());
    for anchor in timers.drain(..) {
        assert!(!menus.click_through_elapsed(anchor), "stale timer is a no-op");
    }
    println!("  all closed, stale timers ignored");
}
