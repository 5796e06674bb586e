// Copyright 2026 the Pinpoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The docked overlay panel: fixed navigation controls checked before any
//! tree search.
//!
//! Dock controls are not part of the accessibility tree. They live in a small
//! overlay the host renders on top of everything, and a click on one must win
//! over whatever UI sits underneath. [`DockControl`] names the fixed control
//! set, [`DockPanel`] is the collaborator contract the dispatcher queries,
//! and [`StaticDock`] is a ready-made fixed-layout implementation for hosts
//! that don't need a dynamic panel.

use hashbrown::HashMap;
use kurbo::{Point, Rect};
use smallvec::SmallVec;

/// Identifier of a docked control.
///
/// The navigation trio maps onto platform global commands; `Custom` slots are
/// host-defined and only meaningful through a registered local click.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DockControl {
    /// Navigate back.
    Back,
    /// Go to the home screen.
    Home,
    /// Show recent apps.
    Recents,
    /// Host-defined control slot.
    Custom(u32),
}

/// Host-provided docked panel.
///
/// The dispatcher consults the panel before every tree search: a point over a
/// docked control never reaches the accessibility tree.
pub trait DockPanel {
    /// The control under `point`, or `None` when the point is outside the
    /// panel (the common case; the caller falls through to tree search).
    fn control_under_point(&self, point: Point) -> Option<DockControl>;

    /// Run the control's local click behavior, if one is registered.
    ///
    /// Returns `false` when the control has no local behavior, in which case
    /// the router falls back to the control's global command mapping.
    fn perform_local_click(&mut self, control: DockControl) -> bool;
}

/// A fixed-layout [`DockPanel`].
///
/// Controls are rectangles in screen coordinates, hit-tested in registration
/// order (dock layouts don't overlap, so first hit wins). Local click
/// behaviors are plain function pointers keyed by control.
///
/// ```
/// use kurbo::{Point, Rect};
/// use pinpoint_dispatch::dock::{DockControl, DockPanel, StaticDock};
///
/// let mut dock = StaticDock::new()
///     .with_control(DockControl::Back, Rect::new(0.0, 0.0, 32.0, 32.0))
///     .with_control(DockControl::Home, Rect::new(32.0, 0.0, 64.0, 32.0));
///
/// assert_eq!(
///     dock.control_under_point(Point::new(10.0, 10.0)),
///     Some(DockControl::Back),
/// );
/// assert_eq!(dock.control_under_point(Point::new(100.0, 100.0)), None);
/// assert!(!dock.perform_local_click(DockControl::Back));
/// ```
#[derive(Debug, Default)]
pub struct StaticDock {
    controls: SmallVec<[(DockControl, Rect); 4]>,
    local_clicks: HashMap<DockControl, fn()>,
}

impl StaticDock {
    /// Create an empty panel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a control occupying `bounds` (screen coordinates).
    #[must_use]
    pub fn with_control(mut self, control: DockControl, bounds: Rect) -> Self {
        self.controls.push((control, bounds));
        self
    }

    /// Register a local click behavior for `control`.
    ///
    /// A control with a local click short-circuits the router: its global
    /// command mapping (if any) is never consulted.
    #[must_use]
    pub fn with_local_click(mut self, control: DockControl, behavior: fn()) -> Self {
        self.local_clicks.insert(control, behavior);
        self
    }
}

impl DockPanel for StaticDock {
    fn control_under_point(&self, point: Point) -> Option<DockControl> {
        self.controls
            .iter()
            .find(|(_, bounds)| bounds.contains(point))
            .map(|(control, _)| *control)
    }

    fn perform_local_click(&mut self, control: DockControl) -> bool {
        match self.local_clicks.get(&control) {
            Some(behavior) => {
                behavior();
                true
            }
            None => false,
        }
    }
}
