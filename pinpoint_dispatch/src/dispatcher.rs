// Copyright 2026 the Pinpoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dispatcher: the two-state machine that turns clicks into actions.
//!
//! ## States
//!
//! - [`State::Idle`]: no menu on screen. A click routes through the dock,
//!   then the tree search.
//! - [`State::MenuOpen`]: the disambiguation menu is up, holding the node it
//!   was opened for. The next click resolves the menu, whatever it hits.
//!
//! The pending node handle is the one place a tree handle outlives a single
//! call: it is held from menu-open to the next click and dropped the moment
//! the menu closes, selection or not. The handle may go stale in between
//! (the platform owns the tree); a failed perform on it is a tolerated no-op.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use pinpoint_actions::ActionMask;
//! use pinpoint_dispatch::dispatcher::Dispatcher;
//! use pinpoint_dispatch::dock::StaticDock;
//! use pinpoint_dispatch::menu::MenuSurface;
//! use pinpoint_dispatch::router::{GlobalActions, GlobalCommand};
//! use pinpoint_tree::{TreeSource, UiNode};
//! use std::rc::Rc;
//!
//! // A one-node "tree": a clickable button filling the screen.
//! #[derive(Clone)]
//! struct Button;
//! impl UiNode for Button {
//!     fn bounds_in_screen(&self, out: &mut Rect) {
//!         *out = Rect::new(0.0, 0.0, 100.0, 100.0);
//!     }
//!     fn supported_actions(&self) -> ActionMask {
//!         ActionMask::CLICK
//!     }
//!     fn child_count(&self) -> usize {
//!         0
//!     }
//!     fn child(&self, _: usize) -> Option<Self> {
//!         None
//!     }
//!     fn perform(&self, _: ActionMask) -> bool {
//!         true
//!     }
//! }
//! struct Screen;
//! impl TreeSource for Screen {
//!     type Node = Button;
//!     fn active_root(&self) -> Option<Button> {
//!         Some(Button)
//!     }
//! }
//!
//! // Headless collaborators.
//! #[derive(Default)]
//! struct NoMenu;
//! impl MenuSurface for NoMenu {
//!     fn populate_entry(&mut self, _: ActionMask, _: &'static str) {}
//!     fn show(&mut self, _: Point, _: ActionMask) {}
//!     fn hide(&mut self) {}
//!     fn hit_test(&self, _: Point) -> Option<ActionMask> {
//!         None
//!     }
//! }
//! #[derive(Default)]
//! struct NoGlobal;
//! impl GlobalActions for NoGlobal {
//!     fn perform(&mut self, _: GlobalCommand) {}
//! }
//!
//! let mut dispatcher = Dispatcher::new(NoMenu, StaticDock::new(), NoGlobal);
//! // One supported action: performed immediately, no menu.
//! dispatcher.perform_action(&Screen, Point::new(50.0, 50.0));
//! assert!(!dispatcher.is_menu_open());
//! ```

use kurbo::Point;
use pinpoint_actions::{ActionMask, DESCRIPTORS, full_action_mask};
use pinpoint_tree::{TreeSource, UiNode, search::find_actionable, summarize};

use crate::dock::DockPanel;
use crate::menu::MenuSurface;
use crate::router::{GlobalActions, try_global_action};

/// Modal state of the dispatcher.
///
/// The pending node exists exactly when the menu is open; the tagged variant
/// makes a closed menu with a leftover node unrepresentable.
#[derive(Clone, Debug)]
pub enum State<N> {
    /// No menu on screen; clicks resolve against dock and tree.
    Idle,
    /// The disambiguation menu is up for `node`, offering `available`.
    MenuOpen {
        /// Node the menu was opened for; the action resolved by the next
        /// click is performed on it.
        node: N,
        /// Actions offered by the menu (more than one bit set).
        available: ActionMask,
    },
}

/// Resolves pointer clicks into actions on UI nodes.
///
/// Owns the menu-open/closed state machine and the three collaborators it
/// drives: the menu overlay, the dock panel, and the platform's global
/// command binding. See the [module docs](self) for the state rules.
///
/// Single-threaded by design: each [`perform_action`](Self::perform_action)
/// call runs to completion before the next pointer event, so no locking is
/// needed. A concurrent host must serialize clicks into the dispatcher so a
/// second click never observes a half-updated state.
#[derive(Debug)]
pub struct Dispatcher<N, M, D, G> {
    state: State<N>,
    /// Union of all cataloged actions, captured once at construction.
    interest: ActionMask,
    menu: M,
    dock: D,
    global: G,
}

impl<N, M, D, G> Dispatcher<N, M, D, G>
where
    N: UiNode,
    M: MenuSurface,
    D: DockPanel,
    G: GlobalActions,
{
    /// Create a dispatcher and populate `menu` with one entry per catalog
    /// descriptor.
    ///
    /// The full action mask is computed here, once; every later search and
    /// intersection reuses it.
    pub fn new(mut menu: M, dock: D, global: G) -> Self {
        for d in DESCRIPTORS {
            menu.populate_entry(d.action, d.label);
        }
        Self {
            state: State::Idle,
            interest: full_action_mask(),
            menu,
            dock,
            global,
        }
    }

    /// Whether the disambiguation menu is currently open.
    pub fn is_menu_open(&self) -> bool {
        matches!(self.state, State::MenuOpen { .. })
    }

    /// Actions offered by the open menu, or `None` when idle.
    pub fn pending_actions(&self) -> Option<ActionMask> {
        match &self.state {
            State::Idle => None,
            State::MenuOpen { available, .. } => Some(*available),
        }
    }

    /// The interest mask used for node searches.
    pub fn interest_mask(&self) -> ActionMask {
        self.interest
    }

    /// Resolve one click at `point` and carry out what it means.
    ///
    /// Every call terminates normally: absences (no active window, nothing
    /// under the point, menu miss) are silent no-ops, and a stale pending
    /// node failing to perform is tolerated. See the crate docs for the
    /// resolution order.
    pub fn perform_action<S>(&mut self, source: &S, point: Point)
    where
        S: TreeSource<Node = N>,
    {
        match core::mem::replace(&mut self.state, State::Idle) {
            State::MenuOpen { node, .. } => {
                // The menu consumes this click no matter what it hit.
                let chosen = self.menu.hit_test(point);
                self.menu.hide();
                if let Some(action) = chosen {
                    // The handle may have gone stale while the menu was open.
                    if !node.perform(action) {
                        log::debug!("pending node refused {action:?}, likely stale");
                    }
                }
                // `node` is dropped here; never held past menu close.
            }
            State::Idle => {
                if try_global_action(&mut self.dock, &mut self.global, point) {
                    return;
                }

                let Some(node) = find_actionable(source, point, self.interest) else {
                    return;
                };
                log::debug!(
                    "actionable node at ({}, {}): {:?}",
                    point.x,
                    point.y,
                    summarize(&node)
                );

                let available = self.interest & node.supported_actions();
                if available.is_empty() {
                    // The node matched during the search but reports nothing
                    // now; the platform mutated the tree underneath us.
                    log::warn!("node lost its actions between search and dispatch");
                } else if available.is_single() {
                    if !node.perform(available) {
                        log::debug!("perform {available:?} refused, likely stale");
                    }
                } else {
                    self.menu.show(point, available);
                    self.state = State::MenuOpen { node, available };
                }
            }
        }
    }
}
