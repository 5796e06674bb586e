// Copyright 2026 the Pinpoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinpoint Tree: a read-only view of the platform accessibility tree and the
//! search that resolves a screen point to an actionable node.
//!
//! ## Overview
//!
//! The accessibility tree is owned and mutated by the host platform. This
//! crate never takes ownership of it: [`UiNode`] is an opaque, cheap-to-clone
//! handle borrowed for the duration of one search, and [`TreeSource`] hands
//! out the root of the currently active window. A missing root (no active
//! window) and a missing child (the platform detached it mid-walk) are normal
//! transient conditions, not errors.
//!
//! [`find_actionable`](search::find_actionable) walks the tree depth-first
//! and returns the deepest node under a point whose reported actions
//! intersect an interest mask. See the [`search`] module for the traversal
//! rules and the bounds invariant it relies on.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use pinpoint_actions::ActionMask;
//! use pinpoint_tree::{TreeSource, UiNode, search::find_actionable};
//! use std::rc::Rc;
//!
//! #[derive(Clone)]
//! struct Node(Rc<NodeData>);
//! struct NodeData {
//!     bounds: Rect,
//!     actions: ActionMask,
//!     children: Vec<Node>,
//! }
//!
//! impl UiNode for Node {
//!     fn bounds_in_screen(&self, out: &mut Rect) {
//!         *out = self.0.bounds;
//!     }
//!     fn supported_actions(&self) -> ActionMask {
//!         self.0.actions
//!     }
//!     fn child_count(&self) -> usize {
//!         self.0.children.len()
//!     }
//!     fn child(&self, index: usize) -> Option<Self> {
//!         self.0.children.get(index).cloned()
//!     }
//!     fn perform(&self, _action: ActionMask) -> bool {
//!         true
//!     }
//! }
//!
//! struct Window(Node);
//! impl TreeSource for Window {
//!     type Node = Node;
//!     fn active_root(&self) -> Option<Node> {
//!         Some(self.0.clone())
//!     }
//! }
//!
//! let button = Node(Rc::new(NodeData {
//!     bounds: Rect::new(10.0, 10.0, 50.0, 30.0),
//!     actions: ActionMask::CLICK,
//!     children: Vec::new(),
//! }));
//! let root = Node(Rc::new(NodeData {
//!     bounds: Rect::new(0.0, 0.0, 100.0, 100.0),
//!     actions: ActionMask::empty(),
//!     children: vec![button],
//! }));
//!
//! let window = Window(root);
//! let hit = find_actionable(&window, Point::new(20.0, 20.0), ActionMask::CLICK);
//! assert!(hit.is_some());
//! let miss = find_actionable(&window, Point::new(90.0, 90.0), ActionMask::CLICK);
//! assert!(miss.is_none());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

use kurbo::Rect;
use pinpoint_actions::ActionMask;

pub mod search;

/// Opaque handle to a live accessibility-tree node.
///
/// Handles are borrowed views into platform-owned state: cloning one is cheap
/// (typically a reference-count bump) and never deep-copies the tree. A handle
/// may go stale at any time because the platform mutates the tree on its own
/// timeline; [`UiNode::perform`] reports failure in that case and callers
/// treat it as a no-op.
///
/// Handles must not be cached across interactions. The one sanctioned
/// exception is the dispatcher's pending menu selection, which holds a handle
/// from menu-open to the next click and discards it the moment the menu
/// closes.
pub trait UiNode: Clone {
    /// Write the node's bounding rectangle, in screen coordinates, into `out`.
    ///
    /// Takes a caller-provided buffer so a search can reuse one rectangle for
    /// every node it visits.
    fn bounds_in_screen(&self, out: &mut Rect);

    /// The set of actions the node currently reports supporting.
    fn supported_actions(&self) -> ActionMask;

    /// Number of children, in the platform's order.
    fn child_count(&self) -> usize;

    /// Child at `index`, or `None` if the platform detached it since
    /// `child_count` was read.
    fn child(&self, index: usize) -> Option<Self>;

    /// Ask the platform to perform `action` on the node.
    ///
    /// Fire-and-forget: the return value is the platform-reported success and
    /// carries no further contract. Performing on a stale handle returns
    /// `false`.
    fn perform(&self, action: ActionMask) -> bool;
}

/// Provider of the accessibility root for the currently active window.
pub trait TreeSource {
    /// The node handle type this source hands out.
    type Node: UiNode;

    /// Root of the active window, or `None` when no window is active.
    ///
    /// `None` is a normal transient condition (e.g. during app switches), not
    /// an error.
    fn active_root(&self) -> Option<Self::Node>;
}

/// Snapshot of a node's observable state, for diagnostics.
///
/// ```
/// # use kurbo::Rect;
/// # use pinpoint_actions::ActionMask;
/// # use pinpoint_tree::NodeSummary;
/// let s = NodeSummary {
///     bounds: Rect::new(0.0, 0.0, 10.0, 10.0),
///     actions: ActionMask::CLICK,
/// };
/// let _ = format!("{s:?}");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeSummary {
    /// Bounding rectangle in screen coordinates.
    pub bounds: Rect,
    /// Actions the node reported at snapshot time.
    pub actions: ActionMask,
}

/// Take a diagnostic snapshot of `node`.
pub fn summarize<N: UiNode>(node: &N) -> NodeSummary {
    let mut bounds = Rect::ZERO;
    node.bounds_in_screen(&mut bounds);
    NodeSummary {
        bounds,
        actions: node.supported_actions(),
    }
}
