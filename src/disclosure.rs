//! Single-selection disclosure state (accordions and tab lists).
//!
//! A [`DisclosureController`] is built over a fixed, ordered set of panel
//! ids and tracks which one, if any, is expanded. Every mutation returns a
//! [`DisclosureTransition`] describing what closed and what opened, which
//! the animation layer consumes as a discrete signal.

use std::fmt::Debug;

/// What changed as the result of one disclosure operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisclosureTransition<Id> {
    /// Panel that was expanded before and is collapsed now
    pub collapsed: Option<Id>,
    /// Panel that is expanded now and was not before
    pub expanded: Option<Id>,
}

impl<Id> DisclosureTransition<Id> {
    /// A transition that changes nothing.
    pub fn none() -> Self {
        Self { collapsed: None, expanded: None }
    }

    /// Returns true if nothing changed.
    pub fn is_empty(&self) -> bool {
        self.collapsed.is_none() && self.expanded.is_none()
    }
}

/// At-most-one-open state machine over a registered panel set.
#[derive(Debug, Clone)]
pub struct DisclosureController<Id> {
    /// Registered panels in display order
    panels: Vec<Id>,
    /// Panel open at construction and after `reset`
    initial: Option<Id>,
    /// Currently expanded panel
    expanded: Option<Id>,
}

impl<Id: Copy + Eq + Debug> DisclosureController<Id> {
    /// Creates a controller over `panels`, starting with `initial` expanded.
    ///
    /// An `initial` id outside the panel set is ignored.
    pub fn new(panels: impl IntoIterator<Item = Id>, initial: Option<Id>) -> Self {
        let panels: Vec<Id> = panels.into_iter().collect();
        let initial = initial.filter(|id| panels.contains(id));
        Self { panels, initial, expanded: initial }
    }

    // ===== Queries =====

    /// Returns the expanded panel, if any.
    pub fn expanded(&self) -> Option<Id> {
        self.expanded
    }

    pub fn is_expanded(&self, id: Id) -> bool {
        self.expanded == Some(id)
    }

    /// Returns the registered panels in display order.
    pub fn panels(&self) -> &[Id] {
        &self.panels
    }

    /// Returns the display position of `id`.
    pub fn position(&self, id: Id) -> Option<usize> {
        self.panels.iter().position(|p| *p == id)
    }

    pub fn initial(&self) -> Option<Id> {
        self.initial
    }

    // ===== Mutations =====

    /// Collapses `id` if it is open, otherwise opens it (closing any other).
    pub fn toggle(&mut self, id: Id) -> DisclosureTransition<Id> {
        if !self.is_registered(id) {
            return DisclosureTransition::none();
        }

        let transition = if self.expanded == Some(id) {
            DisclosureTransition { collapsed: Some(id), expanded: None }
        } else {
            DisclosureTransition { collapsed: self.expanded, expanded: Some(id) }
        };
        self.expanded = transition.expanded;
        tracing::debug!(panel = ?id, expanded = ?self.expanded, "disclosure toggled");
        transition
    }

    /// Opens `id`, leaving it open if it already is (tab behavior).
    pub fn select(&mut self, id: Id) -> DisclosureTransition<Id> {
        if !self.is_registered(id) || self.expanded == Some(id) {
            return DisclosureTransition::none();
        }

        let transition = DisclosureTransition { collapsed: self.expanded, expanded: Some(id) };
        self.expanded = Some(id);
        tracing::debug!(panel = ?id, "disclosure selected");
        transition
    }

    /// Returns to the state the controller was constructed with.
    pub fn reset(&mut self) -> DisclosureTransition<Id> {
        if self.expanded == self.initial {
            return DisclosureTransition::none();
        }
        let transition = DisclosureTransition { collapsed: self.expanded, expanded: self.initial };
        self.expanded = self.initial;
        transition
    }

    fn is_registered(&self, id: Id) -> bool {
        let registered = self.panels.contains(&id);
        debug_assert!(registered, "panel {id:?} is not registered with this controller");
        if !registered {
            tracing::warn!(panel = ?id, "ignoring unregistered panel id");
        }
        registered
    }
}

impl DisclosureController<usize> {
    /// Creates a controller over the indices `0..count`.
    pub fn indexed(count: usize, initial: Option<usize>) -> Self {
        Self::new(0..count, initial)
    }
}

/// Maps the active tab to a slot of a moving indicator with `slots` stops.
///
/// Tabs past the last slot share the last slot; with no active tab the
/// indicator rests on the first one.
pub fn indicator_slot(active: Option<usize>, slots: usize) -> usize {
    if slots == 0 {
        return 0;
    }
    active.unwrap_or(0).min(slots - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let controller = DisclosureController::indexed(3, Some(0));
        assert_eq!(controller.expanded(), Some(0));
        assert!(controller.is_expanded(0));
        assert_eq!(controller.panels(), &[0, 1, 2]);
    }

    #[test]
    fn test_initial_outside_set_is_dropped() {
        let controller = DisclosureController::indexed(2, Some(5));
        assert_eq!(controller.expanded(), None);
    }

    #[test]
    fn test_toggle_switches_and_collapses() {
        let mut controller = DisclosureController::indexed(3, Some(0));

        let t = controller.toggle(2);
        assert_eq!(t, DisclosureTransition { collapsed: Some(0), expanded: Some(2) });
        assert_eq!(controller.expanded(), Some(2));

        let t = controller.toggle(2);
        assert_eq!(t, DisclosureTransition { collapsed: Some(2), expanded: None });
        assert_eq!(controller.expanded(), None);

        let t = controller.toggle(1);
        assert_eq!(t, DisclosureTransition { collapsed: None, expanded: Some(1) });
    }

    #[test]
    fn test_select_keeps_active_tab() {
        let mut controller = DisclosureController::indexed(2, Some(0));
        assert!(controller.select(0).is_empty());
        assert_eq!(controller.expanded(), Some(0));

        let t = controller.select(1);
        assert_eq!(t.collapsed, Some(0));
        assert_eq!(controller.expanded(), Some(1));
    }

    #[test]
    fn test_reset() {
        let mut controller = DisclosureController::indexed(3, Some(0));
        controller.toggle(1);
        let t = controller.reset();
        assert_eq!(t, DisclosureTransition { collapsed: Some(1), expanded: Some(0) });
        assert!(controller.reset().is_empty());
    }

    #[test]
    fn test_position() {
        let controller = DisclosureController::new(['a', 'b', 'c'], None);
        assert_eq!(controller.position('c'), Some(2));
        assert_eq!(controller.position('z'), None);
    }

    #[test]
    fn test_indicator_slot() {
        assert_eq!(indicator_slot(Some(0), 3), 0);
        assert_eq!(indicator_slot(Some(1), 3), 1);
        assert_eq!(indicator_slot(Some(2), 3), 2);
        assert_eq!(indicator_slot(Some(7), 3), 2);
        assert_eq!(indicator_slot(Some(4), 6), 4);
        assert_eq!(indicator_slot(None, 3), 0);
        assert_eq!(indicator_slot(Some(1), 0), 0);
    }
}
