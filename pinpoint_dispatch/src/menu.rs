// Copyright 2026 the Pinpoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The disambiguation-menu collaborator.
//!
//! The menu overlay itself (layout, rendering, animation) is the host's; this
//! module only defines the contract the dispatcher drives it through. The
//! dispatcher populates one entry per catalog descriptor at startup, then
//! shows the menu with the subset of actions available on a resolved node and
//! hit-tests the next click against it.

use kurbo::Point;
use pinpoint_actions::ActionMask;

/// Host-provided overlay that presents the disambiguation menu.
///
/// Lifecycle, as driven by [`Dispatcher`](crate::dispatcher::Dispatcher):
///
/// - [`populate_entry`](Self::populate_entry) is called once per catalog
///   entry at construction, before any pointer event. No entries are added
///   afterwards.
/// - [`show`](Self::show) displays the menu near `point` with only the
///   actions in `available` offered.
/// - The next click is passed to [`hit_test`](Self::hit_test), and
///   [`hide`](Self::hide) is called unconditionally right after: the menu is
///   always consumed by the next click, hit or miss.
pub trait MenuSurface {
    /// Register one selectable entry. Called once per catalog descriptor at
    /// startup; `action` is a single action bit.
    fn populate_entry(&mut self, action: ActionMask, label: &'static str);

    /// Display the menu near `point`, offering only the actions in
    /// `available`.
    fn show(&mut self, point: Point, available: ActionMask);

    /// Remove the menu from the screen. May be called when already hidden.
    fn hide(&mut self);

    /// Which entry, if any, lies under `point` while the menu is shown.
    ///
    /// Returns the entry's single action bit, or `None` when the click missed
    /// every entry (which dismisses the menu).
    fn hit_test(&self, point: Point) -> Option<ActionMask>;
}
