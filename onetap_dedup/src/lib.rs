// Copyright 2026 the Onetap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Onetap Dedup: deterministic suppression of duplicate tap activations.
//!
//! ## Overview
//!
//! Platforms that speak several input models emit more than one activation
//! event for a single physical tap: a unified pointer-up, a touch-end, and a
//! synthetic mouse click, in whatever subset and order the device provides.
//! Code that treats each of those as a distinct activation runs once per
//! event instead of once per tap.
//!
//! This crate is the filter in front of that code. Feed every activation
//! event through a per-target [`TapGate`](crate::gate::TapGate) and act only
//! when the gate admits it: the gate guarantees exactly one admission per
//! physical tap, whichever of {pointer-up, touch-end, click} the platform
//! emits and in whichever order. [`TapRouter`](crate::router::TapRouter)
//! packages the same guarantee behind an attach/detach registration surface
//! with callbacks and optional namespaces.
//!
//! ## Inputs
//!
//! The crate never talks to an event source. A host layer (a browser
//! binding, a native shell, a test harness) observes raw events, labels each
//! with an [`ActivationKind`](crate::types::ActivationKind) and a target
//! key, and calls in. Target keys are small copyable identifiers, whatever
//! the host uses to name its elements.
//!
//! ## Minimal example
//!
//! ```
//! use onetap_dedup::gate::TapGate;
//! use onetap_dedup::types::ActivationKind;
//!
//! let mut gate = TapGate::new();
//!
//! // One physical tap on a pointer-capable touchscreen: the platform emits
//! // pointer-up, then touch-end, then a synthetic click.
//! assert!(gate.admit(ActivationKind::PointerUp));
//! assert!(!gate.admit(ActivationKind::TouchEnd));
//! assert!(!gate.admit(ActivationKind::Click));
//!
//! // The next tap admits again.
//! assert!(gate.admit(ActivationKind::PointerUp));
//! ```
//!
//! ## Known limitation
//!
//! A real mouse click arriving immediately after a real touch tap is
//! indistinguishable from the tap's synthetic click and is absorbed. The
//! trade is deliberate: a rare dropped gesture instead of routinely doubled
//! ones.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod gate;
pub mod router;
pub mod types;
