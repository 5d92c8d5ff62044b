// Copyright 2026 the Onetap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A touch-friendly menu bar: three root-level dropdowns.
//!
//! Anchor records are scanned from a toy page tree through
//! [`MarkupLookup`], raw event targets are resolved with
//! [`enclosing_anchor`], and the emitted effects are applied to a mock page
//! (a set of keys carrying the active marker).
//!
//! Run:
//! - `cargo run -p onetap_examples --example hover_menu`

use std::collections::HashSet;

use onetap_dedup::types::ActivationKind::{Click, PointerUp, TouchEnd};
use onetap_hover::coordinator::HoverCoordinator;
use onetap_hover::markup::{MarkupLookup, enclosing_anchor, scan_anchors};
use onetap_hover::types::Effect;

// The page:
//
//   0 (document)
//   └─ 100 (nav bar)
//      ├─ 1 (menu anchor) ── 11 (dropdown target)
//      ├─ 2 (menu anchor) ── 12 (dropdown target)
//      └─ 3 (menu anchor) ── 13 (dropdown target)
struct Page;

impl MarkupLookup<u32> for Page {
    fn parent_of(&self, node: &u32) -> Option<u32> {
        match node {
            100 => Some(0),
            1 | 2 | 3 => Some(100),
            11 => Some(1),
            12 => Some(2),
            13 => Some(3),
            _ => None,
        }
    }

    fn is_anchor(&self, node: &u32) -> bool {
        matches!(node, 1 | 2 | 3)
    }

    fn reveal_target_of(&self, anchor: &u32) -> Option<u32> {
        match anchor {
            1 => Some(11),
            2 => Some(12),
            3 => Some(13),
            _ => None,
        }
    }
}

#[derive(Default)]
struct MockPage {
    active: HashSet<u32>,
    listeners_attached: bool,
}

impl MockPage {
    fn apply(&mut self, effects: &[Effect<u32>]) {
        for effect in effects {
            match effect {
                Effect::MarkActive(key) => {
                    self.active.insert(*key);
                }
                Effect::ClearActive(key) => {
                    self.active.remove(key);
                }
                Effect::ArmOutsideListeners => self.listeners_attached = true,
                Effect::DisarmOutsideListeners => self.listeners_attached = false,
                Effect::StartClickThroughTimer { .. } => {}
            }
        }
    }
}

fn main() {
    let specs = scan_anchors(&[1, 2, 3], &Page);
    let mut menus = HoverCoordinator::new(specs);
    let mut page = MockPage::default();

    // A tap on menu 1 as a touchscreen reports it: the ghost events are
    // absorbed, the dropdown opens once.
    println!("== tap menu 1 ==");
    for kind in [PointerUp, TouchEnd, Click] {
        let response = menus.anchor_tap(1, kind);
        assert!(response.intercepted);
        page.apply(&response.effects);
    }
    assert!(page.active.contains(&11) && page.listeners_attached);
    println!("  dropdown 11 open, outside listeners attached");

    // Hovering menu 2 swaps the open dropdown (root-level exclusion).
    println!("== hover menu 2 ==");
    page.apply(&menus.hover_enter(2));
    assert!(!page.active.contains(&11) && page.active.contains(&12));
    println!("  dropdown 11 closed, dropdown 12 open");

    // A tap on the nav bar itself lands outside every anchor.
    println!("== tap the bare nav bar ==");
    let hit = enclosing_anchor(100, &Page);
    assert_eq!(hit, None);
    for kind in [PointerUp, TouchEnd, Click] {
        page.apply(&menus.outside_tap(hit, kind));
    }
    assert!(page.active.is_empty() && !page.listeners_attached);
    println!("  everything closed, outside listeners detached");

    // A tap inside an open dropdown does not dismiss it.
    page.apply(&menus.hover_enter(3));
    let hit = enclosing_anchor(13, &Page);
    assert_eq!(hit, Some(3));
    page.apply(&menus.outside_tap(hit, PointerUp));
    assert!(page.active.contains(&13));
    println!("taps within dropdown 13 leave it open");
}
