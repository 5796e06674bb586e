// Copyright 2026 the Pinpoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Global-action routing: resolve a point against the dock before anything
//! else gets to see it.
//!
//! The dock panel floats above the rest of the UI, so this check always runs
//! before the tree search; otherwise a click on the docked Back button would
//! resolve to whatever node happens to be rendered underneath it.
//!
//! Resolution order for a hit control:
//!
//! 1. A registered local click behavior, if any.
//! 2. The control's fixed platform command mapping (Back/Home/Recents).
//! 3. Neither → not handled, and the caller falls through to tree search.

use kurbo::Point;

use crate::dock::{DockControl, DockPanel};

/// A platform-level navigation command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GlobalCommand {
    /// Navigate back.
    Back,
    /// Go to the home screen.
    Home,
    /// Show recent apps.
    Recents,
}

/// Host binding for platform navigation commands.
///
/// Fire-and-forget: the platform reports no outcome the dispatcher could act
/// on.
pub trait GlobalActions {
    /// Ask the platform to perform `command`.
    fn perform(&mut self, command: GlobalCommand);
}

impl DockControl {
    /// The platform command this control maps to, if it is one of the fixed
    /// navigation controls.
    pub fn global_command(self) -> Option<GlobalCommand> {
        match self {
            Self::Back => Some(GlobalCommand::Back),
            Self::Home => Some(GlobalCommand::Home),
            Self::Recents => Some(GlobalCommand::Recents),
            Self::Custom(_) => None,
        }
    }
}

/// Try to resolve `point` as a dock interaction.
///
/// Returns `true` when the point hit a docked control and an action was
/// taken (local click or global command). Returns `false` when the point is
/// outside the dock, or hit a control with neither a local click nor a
/// command mapping; the caller then falls through to the tree search.
pub fn try_global_action<D, G>(dock: &mut D, global: &mut G, point: Point) -> bool
where
    D: DockPanel,
    G: GlobalActions,
{
    let Some(control) = dock.control_under_point(point) else {
        return false;
    };

    if dock.perform_local_click(control) {
        return true;
    }

    match control.global_command() {
        Some(command) => {
            log::debug!("dock control {control:?} -> {command:?}");
            global.perform(command);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use kurbo::Rect;

    use crate::dock::StaticDock;

    #[derive(Default)]
    struct CommandLog(Vec<GlobalCommand>);

    impl GlobalActions for CommandLog {
        fn perform(&mut self, command: GlobalCommand) {
            self.0.push(command);
        }
    }

    fn panel() -> StaticDock {
        StaticDock::new()
            .with_control(DockControl::Back, Rect::new(0.0, 0.0, 32.0, 32.0))
            .with_control(DockControl::Home, Rect::new(32.0, 0.0, 64.0, 32.0))
            .with_control(DockControl::Recents, Rect::new(64.0, 0.0, 96.0, 32.0))
            .with_control(DockControl::Custom(1), Rect::new(96.0, 0.0, 128.0, 32.0))
    }

    #[test]
    fn point_outside_dock_is_not_handled() {
        let mut dock = panel();
        let mut global = CommandLog::default();
        assert!(!try_global_action(
            &mut dock,
            &mut global,
            Point::new(200.0, 200.0)
        ));
        assert!(global.0.is_empty());
    }

    #[test]
    fn navigation_controls_map_to_commands() {
        let mut dock = panel();
        let mut global = CommandLog::default();

        assert!(try_global_action(
            &mut dock,
            &mut global,
            Point::new(16.0, 16.0)
        ));
        assert!(try_global_action(
            &mut dock,
            &mut global,
            Point::new(48.0, 16.0)
        ));
        assert!(try_global_action(
            &mut dock,
            &mut global,
            Point::new(80.0, 16.0)
        ));
        assert_eq!(
            global.0,
            vec![GlobalCommand::Back, GlobalCommand::Home, GlobalCommand::Recents]
        );
    }

    #[test]
    fn home_command_fires_exactly_once_per_click() {
        let mut dock = panel();
        let mut global = CommandLog::default();
        assert!(try_global_action(
            &mut dock,
            &mut global,
            Point::new(48.0, 16.0)
        ));
        assert_eq!(global.0, vec![GlobalCommand::Home]);
    }

    #[test]
    fn local_click_preempts_command_mapping() {
        fn noop() {}

        let mut dock = panel().with_local_click(DockControl::Home, noop);
        let mut global = CommandLog::default();
        assert!(try_global_action(
            &mut dock,
            &mut global,
            Point::new(48.0, 16.0)
        ));
        assert!(global.0.is_empty(), "local click consumed the hit");
    }

    #[test]
    fn custom_control_without_local_click_is_not_handled() {
        let mut dock = panel();
        let mut global = CommandLog::default();
        assert!(!try_global_action(
            &mut dock,
            &mut global,
            Point::new(112.0, 16.0)
        ));
        assert!(global.0.is_empty());
    }
}
