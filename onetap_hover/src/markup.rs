// Copyright 2026 the Onetap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-tree seam: build anchor descriptions and resolve hits.
//!
//! ## Overview
//!
//! The coordinator consumes pre-resolved [`AnchorSpec`] values and hit keys.
//! This module holds the one trait a host implements to produce them from
//! its own tree, plus the two walks every host needs: the initialization
//! scan ([`scan_anchors`]) and the closest-enclosing-anchor lookup
//! ([`enclosing_anchor`]) used to classify document-level taps and pointer
//! moves.

use alloc::vec::Vec;

use crate::types::AnchorSpec;

/// Minimal view of the host tree around the anchor markup.
///
/// Keys are whatever the host names its elements with. Callers ensure
/// parent chains are acyclic.
pub trait MarkupLookup<K> {
    /// Parent of `node`, or `None` at the root.
    fn parent_of(&self, node: &K) -> Option<K>;
    /// Whether `node` carries the anchor role.
    fn is_anchor(&self, node: &K) -> bool;
    /// The first descendant of `anchor` carrying the target role, if any.
    fn reveal_target_of(&self, anchor: &K) -> Option<K>;
}

/// Build an [`AnchorSpec`] per anchor by walking parent chains.
///
/// Candidates that do not carry the anchor role are skipped rather than
/// rejected, and a missing target descendant is passed through as `None`;
/// the coordinator tolerates both.
pub fn scan_anchors<K, L>(anchors: &[K], lookup: &L) -> Vec<AnchorSpec<K>>
where
    K: Copy + Eq,
    L: MarkupLookup<K>,
{
    anchors
        .iter()
        .copied()
        .filter(|a| lookup.is_anchor(a))
        .map(|anchor| AnchorSpec {
            anchor,
            target: lookup.reveal_target_of(&anchor),
            ancestors: anchor_chain(anchor, lookup),
        })
        .collect()
}

// Collect enclosing anchors up to the root, then reverse to
// outermost-first.
fn anchor_chain<K: Copy + Eq>(anchor: K, lookup: &impl MarkupLookup<K>) -> Vec<K> {
    let mut out = Vec::new();
    let mut cur = anchor;
    while let Some(parent) = lookup.parent_of(&cur) {
        if lookup.is_anchor(&parent) {
            out.push(parent);
        }
        cur = parent;
    }
    out.reverse();
    out
}

/// Innermost anchor containing `node`, including `node` itself.
///
/// This is the hit-resolution step for
/// [`outside_tap`](crate::coordinator::HoverCoordinator::outside_tap) and
/// [`pointer_moved`](crate::coordinator::HoverCoordinator::pointer_moved):
/// resolve the raw event target to its enclosing anchor, or `None` when the
/// event landed outside every anchor.
pub fn enclosing_anchor<K: Copy>(node: K, lookup: &impl MarkupLookup<K>) -> Option<K> {
    let mut cur = node;
    loop {
        if lookup.is_anchor(&cur) {
            return Some(cur);
        }
        cur = lookup.parent_of(&cur)?;
    }
}
