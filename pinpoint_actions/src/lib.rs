// Copyright 2026 the Pinpoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinpoint Actions: the catalog of accessibility actions Pinpoint can trigger.
//!
//! This crate defines [`ActionMask`], a bitmask over the accessibility actions
//! the rest of Pinpoint cares about, and [`DESCRIPTORS`], the immutable list
//! pairing each action with its user-facing label. The catalog is declarative:
//! it is defined once, at compile time, and read thereafter. There is no
//! registration step and no dynamic additions.
//!
//! Bit values match the platform accessibility action constants so a node's
//! reported action set can be intersected with an [`ActionMask`] directly.
//!
//! ## Example
//!
//! ```
//! use pinpoint_actions::{ActionMask, full_action_mask, label_for};
//!
//! // The full mask is the union of every cataloged action.
//! assert!(full_action_mask().contains(ActionMask::CLICK | ActionMask::PASTE));
//!
//! // A node supporting click and long-click intersected with the catalog:
//! let node_actions = ActionMask::CLICK | ActionMask::LONG_CLICK;
//! let available = full_action_mask() & node_actions;
//! assert_eq!(available.bits().count_ones(), 2);
//!
//! assert_eq!(label_for(ActionMask::LONG_CLICK), Some("Long click"));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

bitflags::bitflags! {
    /// Bitmask of accessibility actions.
    ///
    /// Bit values mirror the platform's accessibility action constants, so a
    /// mask can be intersected with the raw action set a node reports.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ActionMask: u32 {
        /// Activate the element.
        const CLICK           = 0x0000_0010;
        /// Press-and-hold the element.
        const LONG_CLICK      = 0x0000_0020;
        /// Scroll the element forward.
        const SCROLL_FORWARD  = 0x0000_1000;
        /// Scroll the element backward.
        const SCROLL_BACKWARD = 0x0000_2000;
        /// Copy the element's selection to the clipboard.
        const COPY            = 0x0000_4000;
        /// Paste the clipboard into the element.
        const PASTE           = 0x0000_8000;
        /// Cut the element's selection to the clipboard.
        const CUT             = 0x0001_0000;
        /// Expand the element (e.g. a collapsed list group).
        const EXPAND          = 0x0004_0000;
        /// Collapse the element.
        const COLLAPSE        = 0x0008_0000;
        /// Dismiss the element (e.g. a notification).
        const DISMISS         = 0x0010_0000;
    }
}

impl ActionMask {
    /// Whether exactly one action bit is set.
    #[inline]
    pub const fn is_single(self) -> bool {
        self.bits().count_ones() == 1
    }
}

/// An action paired with its user-facing label.
///
/// Descriptors are the unit of the catalog: the disambiguation menu shows one
/// entry per descriptor whose action is available on the resolved node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionDescriptor {
    /// The action, a single bit of [`ActionMask`].
    pub action: ActionMask,
    /// Label shown to the user in the disambiguation menu.
    pub label: &'static str,
}

const fn desc(action: ActionMask, label: &'static str) -> ActionDescriptor {
    ActionDescriptor { action, label }
}

/// The catalog: every supported action, in menu presentation order.
///
/// Each entry carries a distinct single-bit action. The union of all entries
/// is [`full_action_mask`].
pub const DESCRIPTORS: &[ActionDescriptor] = &[
    desc(ActionMask::CLICK, "Click"),
    desc(ActionMask::LONG_CLICK, "Long click"),
    desc(ActionMask::COLLAPSE, "Collapse"),
    desc(ActionMask::COPY, "Copy"),
    desc(ActionMask::CUT, "Cut"),
    desc(ActionMask::DISMISS, "Dismiss"),
    desc(ActionMask::EXPAND, "Expand"),
    desc(ActionMask::PASTE, "Paste"),
    desc(ActionMask::SCROLL_BACKWARD, "Scroll backward"),
    desc(ActionMask::SCROLL_FORWARD, "Scroll forward"),
];

/// Union of every cataloged action.
///
/// This is the interest mask handed to the node search: a node is actionable
/// iff its reported actions intersect it. Callers that need it repeatedly
/// (the dispatcher) capture it once at construction.
pub fn full_action_mask() -> ActionMask {
    DESCRIPTORS
        .iter()
        .fold(ActionMask::empty(), |mask, d| mask | d.action)
}

/// Label for a single cataloged action, or `None` if it is not cataloged
/// (or if `action` has more than one bit set).
pub fn label_for(action: ActionMask) -> Option<&'static str> {
    DESCRIPTORS
        .iter()
        .find(|d| d.action == action)
        .map(|d| d.label)
}
