// Copyright 2026 the Onetap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-target gate state: the exactly-once-per-tap decision.
//!
//! ## Overview
//!
//! A [`TapGate`] watches the activation stream for one target and decides,
//! per event, whether it is the tap's first announcement (admit) or a
//! trailing ghost (absorb). [`GateMap`] keeps one gate per target key so
//! unrelated targets never share flag state.
//!
//! ## Decision rules
//!
//! - A pointer-up reopens the run gate unconditionally and pre-marks the
//!   touch-end and click that platforms synthesize after it.
//! - The first event of a gesture always admits.
//! - A touch-end after a non-pointer first event is a distinct gesture; a
//!   touch-end after a pointer-up is the expected synthetic echo.
//! - A click with no touch history is an independent mouse click; a click
//!   after touch or pointer input is the synthetic echo.
//!
//! Flags persist between gestures. The run gate is reopened by the next
//! pointer-up, and the touch/pointer marks are consumed by the echoes they
//! predict, so a gate needs no external reset between taps.

use alloc::vec::Vec;
use bitflags::bitflags;

use crate::types::ActivationKind;

bitflags! {
    /// Transient dedup state for one watched target.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct GateFlags: u8 {
        /// The current gesture has already produced an admission.
        const HAS_RUN = 1 << 0;
        /// A unified pointer-up has been seen.
        const POINTED = 1 << 1;
        /// A touch-end has been seen.
        const TOUCHED = 1 << 2;
    }
}

/// Dedup gate for a single watched target.
///
/// Starts with no history; state is mutated only by [`TapGate::admit`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TapGate {
    flags: GateFlags,
}

impl TapGate {
    /// Create a gate with no event history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current flag state, for diagnostics.
    pub fn flags(&self) -> GateFlags {
        self.flags
    }

    /// Forget all history, as if the target had never been tapped.
    pub fn reset(&mut self) {
        self.flags = GateFlags::empty();
    }

    /// Observe one activation event.
    ///
    /// Returns `true` when the event is the tap's single admitted
    /// activation, `false` when it is a ghost to be ignored.
    pub fn admit(&mut self, kind: ActivationKind) -> bool {
        if kind == ActivationKind::PointerUp {
            self.flags.insert(GateFlags::POINTED | GateFlags::TOUCHED);
            self.flags.remove(GateFlags::HAS_RUN);
        }
        if !self.flags.contains(GateFlags::HAS_RUN) {
            self.flags.insert(GateFlags::HAS_RUN);
            if kind == ActivationKind::TouchEnd {
                self.flags.insert(GateFlags::TOUCHED);
            }
            return true;
        }
        match kind {
            ActivationKind::TouchEnd => {
                if self.flags.contains(GateFlags::POINTED) {
                    // The synthetic touch-end echoing a pointer-up.
                    self.flags.remove(GateFlags::POINTED);
                    false
                } else {
                    self.flags.insert(GateFlags::TOUCHED);
                    true
                }
            }
            // Pointer-up never reaches this arm; it reopens the run gate
            // above and admits there.
            ActivationKind::Click | ActivationKind::PointerUp => {
                if self.flags.contains(GateFlags::TOUCHED) {
                    // The synthetic click echoing a touch or pointer gesture.
                    self.flags.remove(GateFlags::TOUCHED | GateFlags::POINTED);
                    false
                } else {
                    true
                }
            }
        }
    }
}

/// Side map of per-target gates, keyed by target identity.
///
/// Flag state lives here, owned by the watcher, rather than being injected
/// onto host-owned objects. Lookup is a linear scan; watched sets are small.
#[derive(Clone, Debug, Default)]
pub struct GateMap<K> {
    entries: Vec<(K, TapGate)>,
}

impl<K: Copy + Eq> GateMap<K> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Gate for `target`, created with no history on first sight.
    pub fn gate_mut(&mut self, target: K) -> &mut TapGate {
        if let Some(i) = self.entries.iter().position(|(k, _)| *k == target) {
            return &mut self.entries[i].1;
        }
        self.entries.push((target, TapGate::new()));
        // Just pushed, so the map cannot be empty.
        &mut self.entries.last_mut().unwrap().1
    }

    /// Observe one event for `target`.
    pub fn admit(&mut self, target: K, kind: ActivationKind) -> bool {
        self.gate_mut(target).admit(kind)
    }

    /// Number of targets seen so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no target has been seen yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ActivationKind::{Click, PointerUp, TouchEnd};

    fn admissions(gate: &mut TapGate, kinds: &[ActivationKind]) -> usize {
        kinds.iter().filter(|&&k| gate.admit(k)).count()
    }

    // The full platform ghost sequence for one tap on a pointer-capable
    // touchscreen.
    #[test]
    fn ghost_sequence_admits_once() {
        let mut gate = TapGate::new();
        assert_eq!(admissions(&mut gate, &[PointerUp, TouchEnd, Click]), 1);
    }

    #[test]
    fn ghost_sequence_admits_once_per_tap() {
        let mut gate = TapGate::new();
        let tap = [PointerUp, TouchEnd, Click];
        assert_eq!(admissions(&mut gate, &tap), 1);
        assert_eq!(admissions(&mut gate, &tap), 1);
        assert_eq!(admissions(&mut gate, &tap), 1);
    }

    // A plain mouse without pointer events: each click is independent.
    #[test]
    fn lone_mouse_clicks_each_admit() {
        let mut gate = TapGate::new();
        assert!(gate.admit(Click));
        assert!(gate.admit(Click));
        assert!(gate.admit(Click));
    }

    // A mouse on a pointer-capable platform emits pointer-up then click.
    #[test]
    fn pointer_then_click_admits_once() {
        let mut gate = TapGate::new();
        assert_eq!(admissions(&mut gate, &[PointerUp, Click]), 1);
        assert_eq!(admissions(&mut gate, &[PointerUp, Click]), 1);
    }

    // Touch hardware without pointer events: touch-end then synthetic click.
    #[test]
    fn touch_tap_with_synthetic_click_admits_once() {
        let mut gate = TapGate::new();
        assert_eq!(admissions(&mut gate, &[TouchEnd, Click]), 1);
        assert_eq!(admissions(&mut gate, &[TouchEnd, Click]), 1);
    }

    #[test]
    fn touch_end_is_the_admitting_event_on_touch_hardware() {
        let mut gate = TapGate::new();
        assert!(gate.admit(TouchEnd));
        assert!(!gate.admit(Click));
        assert!(gate.admit(TouchEnd));
        assert!(!gate.admit(Click));
    }

    // The accepted limitation: a real click right after a real touch tap is
    // read as the tap's synthetic echo and dropped. Preserved, not fixed.
    #[test]
    fn real_click_hard_on_touch_tap_is_absorbed() {
        let mut gate = TapGate::new();
        assert!(gate.admit(TouchEnd));
        assert!(!gate.admit(Click));
    }

    // Once the echo has been consumed, mouse input counts again.
    #[test]
    fn click_after_consumed_echo_admits() {
        let mut gate = TapGate::new();
        assert_eq!(admissions(&mut gate, &[TouchEnd, Click]), 1);
        assert!(gate.admit(Click));
    }

    #[test]
    fn reset_forgets_history() {
        let mut gate = TapGate::new();
        assert_eq!(admissions(&mut gate, &[PointerUp, TouchEnd]), 1);
        gate.reset();
        assert_eq!(gate.flags(), GateFlags::empty());
        // A fresh first event admits again.
        assert!(gate.admit(Click));
    }

    #[test]
    fn gate_map_keeps_targets_independent() {
        let mut map: GateMap<u32> = GateMap::new();
        // A ghost click on target 1 must not eat target 2's first event.
        assert!(map.admit(1, PointerUp));
        assert!(map.admit(2, TouchEnd));
        assert!(!map.admit(1, TouchEnd));
        assert!(!map.admit(2, Click));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn gate_map_reuses_state_per_target() {
        let mut map: GateMap<u32> = GateMap::new();
        assert!(map.admit(7, PointerUp));
        assert!(!map.admit(7, Click));
        assert_eq!(map.len(), 1);
    }
}
