// Copyright 2026 the Onetap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinator implementation.
//!
//! ## Overview
//!
//! Owns one record per anchor and walks each through a two-state machine,
//! Concealed (initial) and Active. Every operation returns the
//! [`Effect`] list the host applies in order; the coordinator itself touches
//! nothing outside its own records.
//!
//! ## Exclusion rules
//!
//! - Revealing a root-level anchor (one with no enclosing anchor) first
//!   conceals the entire set: mutual exclusion is global at the root.
//! - Revealing a nested anchor conceals only its active siblings, the
//!   anchors sharing its nearest enclosing anchor.
//! - Concealing an anchor cascades to its whole descendant subtree.
//!
//! ## Outside interaction
//!
//! While any anchor is active the coordinator expects the host to keep the
//! document-level listeners attached (it says when with
//! [`Effect::ArmOutsideListeners`] and [`Effect::DisarmOutsideListeners`])
//! and to forward their observations to
//! [`HoverCoordinator::outside_tap`] and
//! [`HoverCoordinator::pointer_moved`]. Arming is reentrant: nested reveals
//! arm once, and only a full conceal disarms.

use alloc::vec::Vec;

use onetap_dedup::gate::TapGate;
use onetap_dedup::types::ActivationKind;

use crate::types::{AnchorSpec, CLICK_THROUGH_DELAY, Effect, TapResponse};

struct AnchorRecord<K> {
    target: Option<K>,
    /// Enclosing anchors, outermost first.
    ancestors: Vec<K>,
    /// Anchors whose ancestor chain contains this one. Derived once.
    descendants: Vec<K>,
    /// Anchors sharing this one's nearest enclosing anchor. Derived once.
    siblings: Vec<K>,
    active: bool,
    active_child: bool,
    allow_click_through: bool,
    gate: TapGate,
}

/// Reveal/conceal coordinator for one set of anchors.
///
/// ## Usage
///
/// - Build with [`HoverCoordinator::new`] from pre-resolved
///   [`AnchorSpec`] values (see
///   [`scan_anchors`](crate::markup::scan_anchors)).
/// - Forward per-anchor interactions to [`HoverCoordinator::anchor_tap`]
///   and [`HoverCoordinator::hover_enter`], and the armed document-level
///   observations to [`HoverCoordinator::outside_tap`] and
///   [`HoverCoordinator::pointer_moved`].
/// - Apply every returned [`Effect`] in order, and call
///   [`HoverCoordinator::click_through_elapsed`] when a scheduled timer
///   expires.
///
/// Independent coordinators (for separate page regions) do not interfere;
/// each owns its armed state and its gates.
pub struct HoverCoordinator<K> {
    anchors: Vec<(K, AnchorRecord<K>)>,
    /// Dedup state for the document-level tap listener. Reset on each arm,
    /// matching a listener that is attached anew.
    outside_gate: TapGate,
    /// Zero when the outside listeners are detached.
    armed: u32,
}

impl<K: Copy + Eq> core::fmt::Debug for HoverCoordinator<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let active = self.anchors.iter().filter(|(_, rec)| rec.active).count();
        f.debug_struct("HoverCoordinator")
            .field("anchors", &self.anchors.len())
            .field("active", &active)
            .field("armed", &self.armed)
            .finish_non_exhaustive()
    }
}

impl<K: Copy + Eq> HoverCoordinator<K> {
    /// Build a record per anchor and derive the relationships the exclusion
    /// rules need.
    ///
    /// Records are built once; membership never changes afterwards. A
    /// duplicate anchor key keeps its first description.
    pub fn new(specs: impl IntoIterator<Item = AnchorSpec<K>>) -> Self {
        let mut anchors: Vec<(K, AnchorRecord<K>)> = Vec::new();
        for spec in specs {
            if anchors.iter().any(|(k, _)| *k == spec.anchor) {
                continue;
            }
            anchors.push((
                spec.anchor,
                AnchorRecord {
                    target: spec.target,
                    ancestors: spec.ancestors,
                    descendants: Vec::new(),
                    siblings: Vec::new(),
                    active: false,
                    active_child: false,
                    allow_click_through: false,
                    gate: TapGate::new(),
                },
            ));
        }
        for i in 0..anchors.len() {
            let key = anchors[i].0;
            let nearest = anchors[i].1.ancestors.last().copied();
            let mut descendants = Vec::new();
            let mut siblings = Vec::new();
            for (j, (other, rec)) in anchors.iter().enumerate() {
                if j == i {
                    continue;
                }
                if rec.ancestors.contains(&key) {
                    descendants.push(*other);
                }
                if rec.ancestors.last().copied() == nearest {
                    siblings.push(*other);
                }
            }
            anchors[i].1.descendants = descendants;
            anchors[i].1.siblings = siblings;
        }
        Self {
            anchors,
            outside_gate: TapGate::new(),
            armed: 0,
        }
    }

    /// Whether `anchor`'s target is currently revealed.
    pub fn is_active(&self, anchor: K) -> bool {
        self.index_of(anchor)
            .is_some_and(|i| self.anchors[i].1.active)
    }

    /// Whether any descendant anchor of `anchor` is active.
    pub fn has_active_child(&self, anchor: K) -> bool {
        self.index_of(anchor)
            .is_some_and(|i| self.anchors[i].1.active_child)
    }

    /// Whether the document-level outside listeners should currently be
    /// attached.
    pub fn is_armed(&self) -> bool {
        self.armed != 0
    }

    /// Number of anchors under management.
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    /// True when no anchor is managed.
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Reveal `anchor`'s target: Concealed to Active.
    ///
    /// Runs the exclusion rules first, then marks the anchor and its target
    /// active, flags every enclosing anchor as having an active child, and
    /// arms the outside listeners if they are not already.
    ///
    /// Unknown keys are a silent no-op.
    pub fn reveal(&mut self, anchor: K) -> Vec<Effect<K>> {
        let mut effects = Vec::new();
        self.reveal_into(anchor, &mut effects);
        effects
    }

    /// Conceal `anchor` and every descendant anchor. Idempotent.
    pub fn conceal(&mut self, anchor: K) -> Vec<Effect<K>> {
        let mut effects = Vec::new();
        self.conceal_into(anchor, &mut effects);
        effects
    }

    /// Conceal every anchor in the set, then disarm the outside listeners.
    pub fn conceal_all(&mut self) -> Vec<Effect<K>> {
        let mut effects = Vec::new();
        self.conceal_all_into(&mut effects);
        effects
    }

    /// Feed one combined-listener activation event observed on `anchor`.
    ///
    /// Until the click-through timer has re-armed the anchor the response is
    /// flagged intercepted (the host stops propagation and prevents the
    /// default action, so a tap on a nested anchor does not also trigger
    /// enclosing native behavior) and a timer effect is emitted. The event
    /// then runs the anchor's dedup gate; an admitted tap on a concealed
    /// anchor reveals it.
    pub fn anchor_tap(&mut self, anchor: K, kind: ActivationKind) -> TapResponse<K> {
        let Some(i) = self.index_of(anchor) else {
            return TapResponse {
                intercepted: false,
                effects: Vec::new(),
            };
        };
        let mut effects = Vec::new();
        let intercepted = !self.anchors[i].1.allow_click_through;
        if intercepted {
            effects.push(Effect::StartClickThroughTimer {
                anchor,
                delay: CLICK_THROUGH_DELAY,
            });
        }
        let admitted = self.anchors[i].1.gate.admit(kind);
        if admitted && !self.anchors[i].1.active {
            self.reveal_into(anchor, &mut effects);
        }
        TapResponse {
            intercepted,
            effects,
        }
    }

    /// Pointer hover entry on `anchor`, the non-touch affordance.
    ///
    /// Reveals immediately (no dedup needed, hover-enter has no ghosts) and
    /// arms the click-through timer so a prompt follow-up click can pass
    /// through.
    pub fn hover_enter(&mut self, anchor: K) -> Vec<Effect<K>> {
        let Some(i) = self.index_of(anchor) else {
            return Vec::new();
        };
        let mut effects = Vec::new();
        if !self.anchors[i].1.allow_click_through {
            effects.push(Effect::StartClickThroughTimer {
                anchor,
                delay: CLICK_THROUGH_DELAY,
            });
        }
        if !self.anchors[i].1.active {
            self.reveal_into(anchor, &mut effects);
        }
        effects
    }

    /// Feed one document-level tap observed while the outside listeners are
    /// armed.
    ///
    /// `hit` is the innermost anchor containing the raw event target (see
    /// [`enclosing_anchor`](crate::markup::enclosing_anchor)); `None` means
    /// the tap landed outside every anchor and conceals the whole set. The
    /// stream is deduplicated with the same gate the anchors use, so a
    /// ghost sequence outside conceals once, not three times. Ignored while
    /// disarmed, matching listeners that are detached.
    pub fn outside_tap(&mut self, hit: Option<K>, kind: ActivationKind) -> Vec<Effect<K>> {
        if self.armed == 0 {
            return Vec::new();
        }
        if !self.outside_gate.admit(kind) {
            return Vec::new();
        }
        let mut effects = Vec::new();
        if hit.is_none() {
            self.conceal_all_into(&mut effects);
        }
        effects
    }

    /// Feed one document-level pointer move observed while armed.
    ///
    /// Movement outside every anchor conceals the whole set. Movement
    /// within an anchor that has an active descendant collapses just that
    /// descendant subtree, leaving the anchor itself revealed (moving
    /// within a parent but off its child closes the child's reveal without
    /// closing the parent). Ignored while disarmed.
    pub fn pointer_moved(&mut self, hit: Option<K>) -> Vec<Effect<K>> {
        if self.armed == 0 {
            return Vec::new();
        }
        let mut effects = Vec::new();
        match hit {
            None => self.conceal_all_into(&mut effects),
            Some(anchor) => {
                let Some(i) = self.index_of(anchor) else {
                    return effects;
                };
                if self.anchors[i].1.active_child {
                    let descendants = self.anchors[i].1.descendants.clone();
                    for d in descendants {
                        self.conceal_into(d, &mut effects);
                    }
                    self.anchors[i].1.active_child = false;
                }
            }
        }
        effects
    }

    /// Expiry of a click-through timer scheduled for `anchor`.
    ///
    /// Latches click-through only when the anchor is still active; a stale
    /// timer firing after a conceal does nothing. Timers are never
    /// cancelled, so several may be pending for one anchor; each expiry
    /// re-checks. Returns whether click-through is now allowed.
    pub fn click_through_elapsed(&mut self, anchor: K) -> bool {
        let Some(i) = self.index_of(anchor) else {
            return false;
        };
        if self.anchors[i].1.active {
            self.anchors[i].1.allow_click_through = true;
        }
        self.anchors[i].1.allow_click_through
    }

    // --- internals ---

    fn index_of(&self, anchor: K) -> Option<usize> {
        self.anchors.iter().position(|(k, _)| *k == anchor)
    }

    fn reveal_into(&mut self, anchor: K, out: &mut Vec<Effect<K>>) {
        let Some(i) = self.index_of(anchor) else {
            return;
        };
        // Exclusion first: the whole set for root-level anchors, active
        // siblings otherwise.
        if self.anchors[i].1.ancestors.is_empty() {
            self.conceal_all_into(out);
        } else {
            let siblings = self.anchors[i].1.siblings.clone();
            for sibling in siblings {
                if self.is_active(sibling) {
                    self.conceal_into(sibling, out);
                }
            }
        }
        {
            let (key, rec) = &mut self.anchors[i];
            rec.active = true;
            out.push(Effect::MarkActive(*key));
            if let Some(target) = rec.target {
                out.push(Effect::MarkActive(target));
            }
        }
        let ancestors = self.anchors[i].1.ancestors.clone();
        for ancestor in ancestors {
            if let Some(j) = self.index_of(ancestor) {
                self.anchors[j].1.active_child = true;
            }
        }
        self.arm_into(out);
    }

    fn conceal_into(&mut self, anchor: K, out: &mut Vec<Effect<K>>) {
        let Some(i) = self.index_of(anchor) else {
            return;
        };
        self.clear_record(i, out);
        let descendants = self.anchors[i].1.descendants.clone();
        for d in descendants {
            if let Some(j) = self.index_of(d) {
                self.clear_record(j, out);
            }
        }
    }

    fn conceal_all_into(&mut self, out: &mut Vec<Effect<K>>) {
        for i in 0..self.anchors.len() {
            self.clear_record(i, out);
        }
        if self.armed != 0 {
            self.armed = 0;
            out.push(Effect::DisarmOutsideListeners);
        }
    }

    // Clear one record and emit the visual-state removals. Unconditional,
    // so conceals stay idempotent.
    fn clear_record(&mut self, i: usize, out: &mut Vec<Effect<K>>) {
        let (key, rec) = &mut self.anchors[i];
        rec.active = false;
        rec.active_child = false;
        rec.allow_click_through = false;
        out.push(Effect::ClearActive(*key));
        if let Some(target) = rec.target {
            out.push(Effect::ClearActive(target));
        }
    }

    // Arm is a no-op when already armed. A fresh arm cycle starts the
    // outside gate with no history, matching listeners attached anew.
    fn arm_into(&mut self, out: &mut Vec<Effect<K>>) {
        if self.armed == 0 {
            self.outside_gate = TapGate::new();
            self.armed += 1;
            out.push(Effect::ArmOutsideListeners);
        }
    }
}
