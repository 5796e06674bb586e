// Copyright 2026 the Pinpoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Actionable-node search: point + interest mask → deepest matching node.
//!
//! ## Traversal
//!
//! [`find_actionable`] walks the active window's tree depth-first, pre-order,
//! pruning any subtree whose bounds do not contain the target point.
//!
//! Pruning is correctness-preserving only because of a required invariant of
//! the source tree: **a node's screen bounds enclose the bounds of all of its
//! descendants**. Platform accessibility trees guarantee this; a synthetic
//! [`TreeSource`] feeding this search must too, or matches inside an
//! out-of-bounds ancestor will be missed.
//!
//! ## Candidate selection
//!
//! A node whose reported actions intersect the interest mask becomes the
//! current candidate, but the walk still descends into its children: list
//! containers often report a generic action while a smaller descendant is the
//! control the user is pointing at. A non-`None` result from a child subtree
//! always replaces the parent's own candidate, so the deepest qualifying
//! descendant wins. Among equal-depth sibling matches the last visited wins;
//! platform child order puts later siblings on top, so this resolves overlap
//! in favor of the topmost control.
//!
//! Cost is O(nodes visited); pruning bounds that by the subtrees actually
//! containing the point, degrading to O(total nodes) when the point is inside
//! the root.

use kurbo::{Point, Rect};
use pinpoint_actions::ActionMask;

use crate::{TreeSource, UiNode};

/// Per-search state threaded through the recursion.
///
/// `point` and `mask` are fixed for the whole search; `scratch` is the one
/// rectangle every visited node writes its bounds into, so the walk performs
/// no per-node allocation.
#[derive(Debug)]
struct SearchContext {
    point: Point,
    mask: ActionMask,
    scratch: Rect,
}

/// Find the deepest node under `point` whose actions intersect `mask`.
///
/// Returns `None` when there is no active window or no node under the point
/// reports an intersecting action. Both are normal outcomes, not errors.
///
/// See the [module docs](self) for the traversal rules and the bounds
/// invariant the pruning relies on.
pub fn find_actionable<S: TreeSource>(
    source: &S,
    point: Point,
    mask: ActionMask,
) -> Option<S::Node> {
    let root = source.active_root()?;
    let mut cx = SearchContext {
        point,
        mask,
        scratch: Rect::ZERO,
    };
    search_from(&root, &mut cx)
}

fn search_from<N: UiNode>(node: &N, cx: &mut SearchContext) -> Option<N> {
    node.bounds_in_screen(&mut cx.scratch);
    if !cx.scratch.contains(cx.point) {
        // Bounds enclose all descendants, so the whole subtree misses.
        return None;
    }

    let mut best = node
        .supported_actions()
        .intersects(cx.mask)
        .then(|| node.clone());

    for index in 0..node.child_count() {
        // The platform may detach a child mid-walk; skip it and keep going.
        let Some(child) = node.child(index) else {
            continue;
        };
        if let Some(hit) = search_from(&child, cx) {
            best = Some(hit);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use alloc::{format, vec};
    use core::cell::Cell;

    /// Fake tree node with a shared visit counter.
    #[derive(Clone)]
    struct Fake(Rc<FakeData>);

    struct FakeData {
        name: &'static str,
        bounds: Rect,
        actions: ActionMask,
        children: Vec<Fake>,
        visits: Rc<Cell<usize>>,
    }

    impl Fake {
        fn new(
            name: &'static str,
            bounds: Rect,
            actions: ActionMask,
            children: Vec<Fake>,
            visits: &Rc<Cell<usize>>,
        ) -> Self {
            Self(Rc::new(FakeData {
                name,
                bounds,
                actions,
                children,
                visits: visits.clone(),
            }))
        }

        fn name(&self) -> &'static str {
            self.0.name
        }
    }

    impl UiNode for Fake {
        fn bounds_in_screen(&self, out: &mut Rect) {
            self.0.visits.set(self.0.visits.get() + 1);
            *out = self.0.bounds;
        }
        fn supported_actions(&self) -> ActionMask {
            self.0.actions
        }
        fn child_count(&self) -> usize {
            self.0.children.len()
        }
        fn child(&self, index: usize) -> Option<Self> {
            self.0.children.get(index).cloned()
        }
        fn perform(&self, _action: ActionMask) -> bool {
            true
        }
    }

    struct Window(Option<Fake>);

    impl TreeSource for Window {
        type Node = Fake;
        fn active_root(&self) -> Option<Fake> {
            self.0.clone()
        }
    }

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect {
        Rect::new(x0, y0, x1, y1)
    }

    #[test]
    fn no_active_window_is_not_found() {
        let window = Window(None);
        let hit = find_actionable(&window, Point::new(1.0, 1.0), ActionMask::CLICK);
        assert!(hit.is_none());
    }

    #[test]
    fn leaf_match_is_returned() {
        let visits = Rc::new(Cell::new(0));
        let leaf = Fake::new(
            "leaf",
            rect(10.0, 10.0, 20.0, 20.0),
            ActionMask::CLICK,
            vec![],
            &visits,
        );
        let root = Fake::new(
            "root",
            rect(0.0, 0.0, 100.0, 100.0),
            ActionMask::empty(),
            vec![leaf],
            &visits,
        );
        let window = Window(Some(root));

        let hit = find_actionable(&window, Point::new(15.0, 15.0), ActionMask::CLICK)
            .expect("leaf under point must be found");
        assert_eq!(hit.name(), "leaf");
    }

    #[test]
    fn descendant_overrides_matching_ancestor() {
        // A clickable list container with a clickable row inside it: the row
        // (deeper, smaller) must win even though the container matches too.
        let visits = Rc::new(Cell::new(0));
        let row = Fake::new(
            "row",
            rect(0.0, 10.0, 100.0, 20.0),
            ActionMask::CLICK | ActionMask::LONG_CLICK,
            vec![],
            &visits,
        );
        let list = Fake::new(
            "list",
            rect(0.0, 0.0, 100.0, 100.0),
            ActionMask::CLICK,
            vec![row],
            &visits,
        );
        let window = Window(Some(list));

        let hit = find_actionable(&window, Point::new(50.0, 15.0), ActionMask::CLICK)
            .expect("descendant must be found");
        assert_eq!(hit.name(), "row");
    }

    #[test]
    fn ancestor_wins_when_point_misses_descendant() {
        let visits = Rc::new(Cell::new(0));
        let row = Fake::new(
            "row",
            rect(0.0, 10.0, 100.0, 20.0),
            ActionMask::CLICK,
            vec![],
            &visits,
        );
        let list = Fake::new(
            "list",
            rect(0.0, 0.0, 100.0, 100.0),
            ActionMask::CLICK,
            vec![row],
            &visits,
        );
        let window = Window(Some(list));

        let hit = find_actionable(&window, Point::new(50.0, 50.0), ActionMask::CLICK)
            .expect("ancestor still matches");
        assert_eq!(hit.name(), "list");
    }

    #[test]
    fn point_outside_root_prunes_whole_tree() {
        let visits = Rc::new(Cell::new(0));
        let leaf = Fake::new(
            "leaf",
            rect(10.0, 10.0, 20.0, 20.0),
            ActionMask::CLICK,
            vec![],
            &visits,
        );
        let root = Fake::new(
            "root",
            rect(0.0, 0.0, 100.0, 100.0),
            ActionMask::CLICK,
            vec![leaf],
            &visits,
        );
        let window = Window(Some(root));

        let hit = find_actionable(&window, Point::new(200.0, 200.0), ActionMask::CLICK);
        assert!(hit.is_none());
        // Only the root's bounds were read; no child was visited.
        assert_eq!(visits.get(), 1, "pruning must stop at the root");
    }

    #[test]
    fn last_visited_sibling_wins_among_equal_depth_matches() {
        let visits = Rc::new(Cell::new(0));
        let overlap = rect(0.0, 0.0, 50.0, 50.0);
        let first = Fake::new("first", overlap, ActionMask::CLICK, vec![], &visits);
        let second = Fake::new("second", overlap, ActionMask::CLICK, vec![], &visits);
        let root = Fake::new(
            "root",
            rect(0.0, 0.0, 100.0, 100.0),
            ActionMask::empty(),
            vec![first, second],
            &visits,
        );
        let window = Window(Some(root));

        let hit = find_actionable(&window, Point::new(25.0, 25.0), ActionMask::CLICK)
            .expect("overlapping siblings match");
        assert_eq!(hit.name(), "second", "later sibling is on top");
    }

    #[test]
    fn mask_filters_out_uninteresting_actions() {
        let visits = Rc::new(Cell::new(0));
        let scroller = Fake::new(
            "scroller",
            rect(0.0, 0.0, 100.0, 100.0),
            ActionMask::SCROLL_FORWARD,
            vec![],
            &visits,
        );
        let window = Window(Some(scroller));

        let hit = find_actionable(&window, Point::new(50.0, 50.0), ActionMask::CLICK);
        assert!(hit.is_none());

        let hit = find_actionable(&window, Point::new(50.0, 50.0), ActionMask::SCROLL_FORWARD);
        assert!(hit.is_some());
    }

    /// Node whose child slots report present but resolve to `None`, as when
    /// the platform detaches children between `child_count` and `child`.
    #[derive(Clone)]
    struct Vanishing(Rc<(Rect, ActionMask)>);

    impl UiNode for Vanishing {
        fn bounds_in_screen(&self, out: &mut Rect) {
            *out = self.0.0;
        }
        fn supported_actions(&self) -> ActionMask {
            self.0.1
        }
        fn child_count(&self) -> usize {
            3
        }
        fn child(&self, _index: usize) -> Option<Self> {
            None
        }
        fn perform(&self, _action: ActionMask) -> bool {
            false
        }
    }

    struct VanishingWindow(Vanishing);

    impl TreeSource for VanishingWindow {
        type Node = Vanishing;
        fn active_root(&self) -> Option<Vanishing> {
            Some(self.0.clone())
        }
    }

    #[test]
    fn detached_children_are_skipped() {
        let root = Vanishing(Rc::new((rect(0.0, 0.0, 10.0, 10.0), ActionMask::CLICK)));
        let window = VanishingWindow(root);
        let hit = find_actionable(&window, Point::new(5.0, 5.0), ActionMask::CLICK);
        assert!(hit.is_some(), "root itself still matches");
    }

    #[test]
    fn summarize_reads_bounds_and_actions() {
        let visits = Rc::new(Cell::new(0));
        let node = Fake::new(
            "node",
            rect(1.0, 2.0, 3.0, 4.0),
            ActionMask::PASTE,
            vec![],
            &visits,
        );
        let s = crate::summarize(&node);
        assert_eq!(s.bounds, rect(1.0, 2.0, 3.0, 4.0));
        assert_eq!(s.actions, ActionMask::PASTE);
        assert!(!format!("{s:?}").is_empty());
    }
}
