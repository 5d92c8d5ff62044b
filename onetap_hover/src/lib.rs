// Copyright 2026 the Onetap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Onetap Hover: hover-style reveal for touch input, deduplicated.
//!
//! ## Overview
//!
//! CSS `:hover` does not exist on touchscreens. The usual substitute is an
//! "anchor" element that, when tapped or hovered, reveals a single "target"
//! descendant, with sibling anchors mutually exclusive, nested anchors
//! supported, and any interaction outside the anchors dismissing the lot.
//!
//! This crate is that behavior as a deterministic state machine. It never
//! touches a real tree: the host describes each anchor up front with an
//! [`AnchorSpec`](crate::types::AnchorSpec), feeds interactions in as they
//! happen, and applies the [`Effect`](crate::types::Effect) lists the
//! [`HoverCoordinator`](crate::coordinator::HoverCoordinator) returns
//! (visual state changes, listener arming, timer scheduling). Taps are
//! deduplicated per anchor with the gates from [`onetap_dedup`], so a
//! platform's ghost click or synthetic touch-end never double-toggles a
//! menu.
//!
//! ## Markup and style contract
//!
//! An anchor owns at most one reveal target among its descendants (exactly
//! one in well-formed markup; an anchor without one still tracks state but
//! toggles nothing visible). The host's stylesheet hides targets by default
//! and shows them under the active marker that
//! [`Effect::MarkActive`](crate::types::Effect::MarkActive) applies; the
//! coordinator prescribes no styling of its own.
//!
//! ## Minimal example
//!
//! ```
//! use onetap_dedup::types::ActivationKind;
//! use onetap_hover::coordinator::HoverCoordinator;
//! use onetap_hover::types::{AnchorSpec, Effect};
//!
//! // Two root-level menus and one submenu nested under the first.
//! let mut menus = HoverCoordinator::new(vec![
//!     AnchorSpec { anchor: 1_u32, target: Some(10), ancestors: vec![] },
//!     AnchorSpec { anchor: 2, target: Some(20), ancestors: vec![] },
//!     AnchorSpec { anchor: 3, target: Some(30), ancestors: vec![1] },
//! ]);
//!
//! // A deduplicated tap on menu 1 reveals it and arms the outside
//! // listeners.
//! let response = menus.anchor_tap(1, ActivationKind::PointerUp);
//! assert!(response.intercepted);
//! assert!(response.effects.contains(&Effect::MarkActive(10)));
//! assert!(menus.is_active(1) && menus.is_armed());
//!
//! // Revealing the submenu keeps its parent revealed.
//! menus.reveal(3);
//! assert!(menus.is_active(1) && menus.is_active(3));
//! assert!(menus.has_active_child(1));
//!
//! // A tap outside every anchor dismisses everything.
//! let effects = menus.outside_tap(None, ActivationKind::PointerUp);
//! assert!(effects.contains(&Effect::DisarmOutsideListeners));
//! assert!(!menus.is_active(1) && !menus.is_active(3) && !menus.is_armed());
//! ```
//!
//! ## Hit resolution
//!
//! The document-level inputs ([`outside_tap`] and [`pointer_moved`]) take
//! the innermost anchor containing the raw event target, or `None` when the
//! event landed outside every anchor. Hosts that can answer parent and role
//! queries get that walk, and the initialization scan, from the
//! [`markup`](crate::markup) module.
//!
//! [`outside_tap`]: crate::coordinator::HoverCoordinator::outside_tap
//! [`pointer_moved`]: crate::coordinator::HoverCoordinator::pointer_moved
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod coordinator;
pub mod markup;
pub mod types;
