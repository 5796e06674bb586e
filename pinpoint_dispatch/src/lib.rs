// Copyright 2026 the Pinpoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinpoint Dispatch: turn a pointer event into exactly one action.
//!
//! ## Overview
//!
//! A click from the pointer pipeline arrives as a bare screen point. This
//! crate decides what that point means and carries it out:
//!
//! 1. If the disambiguation menu is open, the click selects (or dismisses) a
//!    menu entry and nothing else sees it.
//! 2. Otherwise the [dock](dock) is checked first, so docked overlay controls
//!    always win over whatever is rendered underneath them
//!    ([`router::try_global_action`]).
//! 3. Otherwise the accessibility tree is searched for the deepest actionable
//!    node under the point ([`pinpoint_tree::search::find_actionable`]).
//!    One available action is performed immediately; several open the
//!    disambiguation menu and the next click resolves it.
//!
//! The [`dispatcher::Dispatcher`] owns the menu-open/closed state machine and
//! guarantees a click is never lost and never double-triggers: every call
//! runs to completion and every open menu is consumed by the next click.
//!
//! Collaborators are traits so hosts can plug in their own overlay widgets
//! and platform bindings: [`menu::MenuSurface`] for the menu overlay,
//! [`dock::DockPanel`] for the docked panel, and [`router::GlobalActions`]
//! for platform navigation commands. A ready-made fixed-layout panel is
//! provided as [`dock::StaticDock`].
//!
//! This crate is `no_std` and uses `alloc` only in tests.

#![no_std]

#[cfg(test)]
extern crate alloc;

pub mod dispatcher;
pub mod dock;
pub mod menu;
pub mod router;
