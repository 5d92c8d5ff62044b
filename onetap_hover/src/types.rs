// Copyright 2026 the Onetap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinator vocabulary: anchor descriptions, emitted effects, and the
//! click-through delay.

use alloc::vec::Vec;
use core::time::Duration;

/// Delay before a tapped, revealed anchor lets a second deliberate tap pass
/// through to its native behavior (for example following a link).
pub const CLICK_THROUGH_DELAY: Duration = Duration::from_millis(70);

/// Description of one anchor, pre-resolved by the host.
///
/// The coordinator does not traverse the host tree. Supply, per anchor, its
/// reveal target (the single tagged descendant, if present) and the chain of
/// enclosing anchors. [`scan_anchors`](crate::markup::scan_anchors) builds
/// these from a [`MarkupLookup`](crate::markup::MarkupLookup).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnchorSpec<K> {
    /// Key of the anchor element.
    pub anchor: K,
    /// Key of the element this anchor reveals. `None` for malformed markup
    /// without a target descendant; tolerated, the anchor then tracks state
    /// but toggles nothing visible.
    pub target: Option<K>,
    /// Enclosing anchors, outermost first. Empty for a root-level anchor.
    pub ancestors: Vec<K>,
}

/// One side effect for the host layer to apply.
///
/// The coordinator mutates only its own records; everything the page must
/// observe is described here, in application order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect<K> {
    /// Apply the active visual state to this element (an anchor or its
    /// target).
    MarkActive(K),
    /// Remove the active visual state from this element.
    ClearActive(K),
    /// Attach the document-level outside-tap and pointer-move listeners.
    ArmOutsideListeners,
    /// Detach the document-level listeners.
    DisarmOutsideListeners,
    /// Schedule a one-shot timer and call
    /// [`click_through_elapsed`](crate::coordinator::HoverCoordinator::click_through_elapsed)
    /// for `anchor` once `delay` has passed. Timers are never cancelled;
    /// stale ones no-op on expiry.
    StartClickThroughTimer {
        /// Anchor whose click-through gate the timer re-arms.
        anchor: K,
        /// How long to wait (always [`CLICK_THROUGH_DELAY`]).
        delay: Duration,
    },
}

/// Outcome of feeding an anchor tap to the coordinator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TapResponse<K> {
    /// When true the host must stop the event's propagation and prevent its
    /// default action. Nested anchors rely on this so a tap on an inner
    /// anchor does not also activate enclosing anchors natively.
    pub intercepted: bool,
    /// Effects to apply, in order.
    pub effects: Vec<Effect<K>>,
}
