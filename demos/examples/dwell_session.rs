// Copyright 2026 the Pinpoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated dwell-click session: dock, direct action, and disambiguation menu.
//!
//! Builds a small fake accessibility tree (a window with a toolbar button and
//! a list row), a text-mode menu surface, and a dock panel, then drives the
//! dispatcher through a sequence of clicks and prints what each one resolved
//! to.
//!
//! Run with: `cargo run -p pinpoint_demos --example dwell_session`

use std::rc::Rc;

use kurbo::{Point, Rect};
use pinpoint_actions::{ActionMask, label_for};
use pinpoint_dispatch::dispatcher::Dispatcher;
use pinpoint_dispatch::dock::{DockControl, StaticDock};
use pinpoint_dispatch::menu::MenuSurface;
use pinpoint_dispatch::router::{GlobalActions, GlobalCommand};
use pinpoint_tree::{TreeSource, UiNode};

/// Fake accessibility node: a named rectangle with a fixed action set.
#[derive(Clone)]
struct SimNode(Rc<SimData>);

struct SimData {
    name: &'static str,
    bounds: Rect,
    actions: ActionMask,
    children: Vec<SimNode>,
}

impl SimNode {
    fn new(
        name: &'static str,
        bounds: Rect,
        actions: ActionMask,
        children: Vec<SimNode>,
    ) -> Self {
        Self(Rc::new(SimData {
            name,
            bounds,
            actions,
            children,
        }))
    }
}

impl UiNode for SimNode {
    fn bounds_in_screen(&self, out: &mut Rect) {
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
    fn perform(&self, action: ActionMask) -> bool {
        println!(
            "  -> perform {} on \"{}\"",
            label_for(action).unwrap_or("?"),
            self.0.name
        );
        true
    }
}

struct SimWindow(SimNode);

impl TreeSource for SimWindow {
    type Node = SimNode;
    fn active_root(&self) -> Option<SimNode> {
        Some(self.0.clone())
    }
}

/// Text-mode menu: entries stack downward from the shown point, 20px each.
#[derive(Default)]
struct TextMenu {
    entries: Vec<(ActionMask, &'static str)>,
    visible: Option<(Point, Vec<ActionMask>)>,
}

impl MenuSurface for TextMenu {
    fn populate_entry(&mut self, action: ActionMask, label: &'static str) {
        self.entries.push((action, label));
    }

    fn show(&mut self, point: Point, available: ActionMask) {
        let offered: Vec<ActionMask> = self
            .entries
            .iter()
            .map(|(action, _)| *action)
            .filter(|action| available.contains(*action))
            .collect();
        println!("  -> menu opens at ({}, {}):", point.x, point.y);
        for (i, action) in offered.iter().enumerate() {
            println!("       [{i}] {}", label_for(*action).unwrap_or("?"));
        }
        self.visible = Some((point, offered));
    }

    fn hide(&mut self) {
        if self.visible.take().is_some() {
            println!("  -> menu closes");
        }
    }

    fn hit_test(&self, point: Point) -> Option<ActionMask> {
        let (origin, offered) = self.visible.as_ref()?;
        if point.x < origin.x || point.x > origin.x + 120.0 || point.y < origin.y {
            return None;
        }
        let row = ((point.y - origin.y) / 20.0) as usize;
        offered.get(row).copied()
    }
}

struct PrintGlobal;

impl GlobalActions for PrintGlobal {
    fn perform(&mut self, command: GlobalCommand) {
        println!("  -> platform global command: {command:?}");
    }
}

fn main() {
    // Screen layout: a dock strip along the top, app content below.
    let dock = StaticDock::new()
        .with_control(DockControl::Back, Rect::new(0.0, 0.0, 32.0, 32.0))
        .with_control(DockControl::Home, Rect::new(32.0, 0.0, 64.0, 32.0))
        .with_control(DockControl::Recents, Rect::new(64.0, 0.0, 96.0, 32.0));

    // A toolbar button (click only) and a list row (click or long-click).
    let button = SimNode::new(
        "Save button",
        Rect::new(20.0, 50.0, 120.0, 90.0),
        ActionMask::CLICK,
        vec![],
    );
    let row = SimNode::new(
        "Inbox row",
        Rect::new(0.0, 120.0, 800.0, 160.0),
        ActionMask::CLICK | ActionMask::LONG_CLICK,
        vec![],
    );
    let list = SimNode::new(
        "Message list",
        Rect::new(0.0, 100.0, 800.0, 600.0),
        ActionMask::SCROLL_FORWARD | ActionMask::SCROLL_BACKWARD,
        vec![row],
    );
    let root = SimNode::new(
        "Window",
        Rect::new(0.0, 0.0, 800.0, 600.0),
        ActionMask::empty(),
        vec![button, list],
    );
    let window = SimWindow(root);

    let mut dispatcher = Dispatcher::new(TextMenu::default(), dock, PrintGlobal);

    let clicks = [
        ("dock Home control", Point::new(48.0, 16.0)),
        ("toolbar button (single action)", Point::new(70.0, 70.0)),
        ("list row (two actions, opens menu)", Point::new(400.0, 140.0)),
        ("second menu entry (long click)", Point::new(420.0, 170.0)),
        ("list row again", Point::new(400.0, 140.0)),
        ("empty space (dismisses menu)", Point::new(700.0, 500.0)),
        ("list background (scroll container)", Point::new(400.0, 400.0)),
    ];

    for (label, point) in clicks {
        println!("click on {label} @ ({}, {})", point.x, point.y);
        dispatcher.perform_action(&window, point);
        println!(
            "  state: {}",
            if dispatcher.is_menu_open() {
                "menu open"
            } else {
                "idle"
            }
        );
    }
}
