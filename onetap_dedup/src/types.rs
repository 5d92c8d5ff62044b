// Copyright 2026 the Onetap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Activation event vocabulary shared by the gate and the router.

use kurbo::Point;

/// The raw event kinds a platform may emit for one physical tap.
///
/// Labelled by the host layer when it observes an event; consumed by
/// [`TapGate::admit`](crate::gate::TapGate::admit).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ActivationKind {
    /// A mouse click, real or synthesized after touch input.
    Click,
    /// The end of a touch contact.
    TouchEnd,
    /// A unified pointer-up, the authoritative final signal on
    /// pointer-capable devices.
    PointerUp,
}

/// One activation event as observed by the host layer.
///
/// This is the value [`TapRouter::dispatch`](crate::router::TapRouter::dispatch)
/// hands to registered callbacks.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TapEvent<K> {
    /// Key of the element the event targeted.
    pub target: K,
    /// Which of the combined event kinds fired.
    pub kind: ActivationKind,
    /// Pointer position at the time of the event, in the host's coordinate
    /// space.
    pub position: Point,
}

impl<K> TapEvent<K> {
    /// Package one raw event.
    pub fn new(target: K, kind: ActivationKind, position: Point) -> Self {
        Self {
            target,
            kind,
            position,
        }
    }
}
