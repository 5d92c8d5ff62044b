// Copyright 2026 the Onetap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deduplicating the activation streams of three device profiles.
//!
//! The same button is "tapped" as a pointer-capable touchscreen, a plain
//! touchscreen, and a mouse would report it; each physical tap invokes the
//! callback exactly once.
//!
//! Run:
//! - `cargo run -p onetap_examples --example ghost_taps`

use std::cell::Cell;
use std::rc::Rc;

use kurbo::Point;
use onetap_dedup::router::TapRouter;
use onetap_dedup::types::ActivationKind::{Click, PointerUp, TouchEnd};
use onetap_dedup::types::{ActivationKind, TapEvent};

const BUTTON: u32 = 1;

fn main() {
    let mut router: TapRouter<u32> = TapRouter::new();

    let activations = Rc::new(Cell::new(0_u32));
    let seen = Rc::clone(&activations);
    router.attach_namespaced(&[BUTTON], "demo", move |event: &TapEvent<u32>| {
        seen.set(seen.get() + 1);
        println!("  activated by {:?} at {:?}", event.kind, event.position);
    });

    let profiles: [(&str, &[ActivationKind]); 3] = [
        ("pointer-capable touchscreen", &[PointerUp, TouchEnd, Click]),
        ("plain touchscreen", &[TouchEnd, Click]),
        ("mouse", &[PointerUp, Click]),
    ];

    let mut taps = 0_u32;
    for (profile, events) in profiles {
        println!("== one tap as reported by a {} ==", profile);
        for &kind in events {
            router.dispatch(&TapEvent::new(BUTTON, kind, Point::new(40.0, 12.0)));
        }
        taps += 1;
        assert_eq!(activations.get(), taps, "exactly one activation per tap");
    }

    println!("{} taps, {} activations", taps, activations.get());

    // Detached, the stream falls through untouched.
    router.detach(&[BUTTON], "demo");
    for &kind in &[PointerUp, TouchEnd, Click] {
        assert_eq!(router.dispatch(&TapEvent::new(BUTTON, kind, Point::ZERO)), 0);
    }
    println!("detached: further events ignored");
}
