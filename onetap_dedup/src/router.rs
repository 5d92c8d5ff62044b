// Copyright 2026 the Onetap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Callback registration over the gate: attach, detach, dispatch.
//!
//! ## Overview
//!
//! [`TapRouter`] owns a set of registrations. Each registration watches a
//! set of target keys, keeps an independent [`GateMap`] so flag state stays
//! per registration and per target, and holds the callback to invoke when a
//! gate admits an event. A registration may carry a namespace so it can be
//! detached later without disturbing others; a registration without one is
//! the plain combined-event form and stays until its targets are gone.
//!
//! ## Dispatch
//!
//! The host feeds every observed click, touch-end, and pointer-up to
//! [`TapRouter::dispatch`]. The router offers the event to each registration
//! watching its target; admitted events invoke that registration's callback
//! with the full [`TapEvent`]. Events for unwatched targets fall through
//! silently.
//!
//! ## Example
//!
//! ```
//! use kurbo::Point;
//! use onetap_dedup::router::TapRouter;
//! use onetap_dedup::types::{ActivationKind, TapEvent};
//!
//! let mut router: TapRouter<u32> = TapRouter::new();
//! router.attach_namespaced(&[7], "menu", |event: &TapEvent<u32>| {
//!     let _ = event.position;
//! });
//!
//! // The platform ghost sequence invokes the callback exactly once.
//! let mut fired = 0;
//! for kind in [
//!     ActivationKind::PointerUp,
//!     ActivationKind::TouchEnd,
//!     ActivationKind::Click,
//! ] {
//!     fired += router.dispatch(&TapEvent::new(7, kind, Point::ZERO));
//! }
//! assert_eq!(fired, 1);
//!
//! router.detach(&[7], "menu");
//! assert!(router.is_empty());
//! ```

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::gate::GateMap;
use crate::types::TapEvent;

/// Callback invoked with each admitted activation event.
pub type TapCallback<K> = Box<dyn FnMut(&TapEvent<K>)>;

struct Registration<K> {
    namespace: Option<String>,
    targets: Vec<K>,
    gates: GateMap<K>,
    callback: TapCallback<K>,
}

/// Combined-event listener registry with per-target deduplication.
///
/// ## Usage
///
/// - [`TapRouter::attach`] registers an unnamespaced combined listener for a
///   target set; [`TapRouter::attach_namespaced`] additionally labels the
///   registration so [`TapRouter::detach`] can remove it later.
/// - Call [`TapRouter::dispatch`] for every raw activation event the host
///   observes on watched targets.
pub struct TapRouter<K> {
    registrations: Vec<Registration<K>>,
}

impl<K> core::fmt::Debug for TapRouter<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TapRouter")
            .field("registrations", &self.registrations.len())
            .finish_non_exhaustive()
    }
}

impl<K: Copy + Eq> Default for TapRouter<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq> TapRouter<K> {
    /// Create a router with no registrations.
    pub fn new() -> Self {
        Self {
            registrations: Vec::new(),
        }
    }

    /// Register an unnamespaced combined listener on `targets`.
    ///
    /// `callback` is invoked with the triggering event, once per physical
    /// tap per target.
    pub fn attach<F>(&mut self, targets: &[K], callback: F)
    where
        F: FnMut(&TapEvent<K>) + 'static,
    {
        self.push_registration(targets, None, Box::new(callback));
    }

    /// Register a combined listener on `targets` under `namespace`.
    pub fn attach_namespaced<F>(&mut self, targets: &[K], namespace: &str, callback: F)
    where
        F: FnMut(&TapEvent<K>) + 'static,
    {
        self.push_registration(targets, Some(namespace.to_string()), Box::new(callback));
    }

    fn push_registration(
        &mut self,
        targets: &[K],
        namespace: Option<String>,
        callback: TapCallback<K>,
    ) {
        self.registrations.push(Registration {
            namespace,
            targets: targets.to_vec(),
            gates: GateMap::new(),
            callback,
        });
    }

    /// Remove the `namespace` registrations from `targets`.
    ///
    /// Other namespaces and other targets are untouched; registrations left
    /// watching nothing are dropped. Unknown namespaces are a silent no-op.
    pub fn detach(&mut self, targets: &[K], namespace: &str) {
        for reg in &mut self.registrations {
            if reg.namespace.as_deref() == Some(namespace) {
                reg.targets.retain(|t| !targets.contains(t));
            }
        }
        self.registrations.retain(|reg| !reg.targets.is_empty());
    }

    /// Offer one raw activation event to every registration watching its
    /// target.
    ///
    /// Returns the number of callbacks invoked (zero when every gate
    /// absorbed the event or nothing watches the target).
    pub fn dispatch(&mut self, event: &TapEvent<K>) -> usize {
        let mut fired = 0;
        for reg in &mut self.registrations {
            if !reg.targets.contains(&event.target) {
                continue;
            }
            if reg.gates.admit(event.target, event.kind) {
                (reg.callback)(event);
                fired += 1;
            }
        }
        fired
    }

    /// Number of live registrations.
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}
