use std::sync::Arc;
use std::time::Instant;

use dropnav_registry::{MenuGraph, MenuPanel};
use dropnav_types::{MenuId, PanelStyle};
use ratatui::layout::Rect;
use tracing::{debug, warn};

use crate::ui::transition::{HeightAnimation, Transition, TransitionEvent};

/// Rows a panel occupies besides its entries (top and bottom border).
pub const PANEL_CHROME_ROWS: u16 = 2;

/// A panel that is currently mounted, together with its transition.
#[derive(Debug, Clone)]
pub struct MountedPanel {
    pub id: MenuId,
    pub style: PanelStyle,
    pub transition: Transition,
    generation: u64,
}

/// Outcome of activating an entry of the active panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// The active panel switched
    Navigated { from: MenuId, to: MenuId },
    /// The entry targets the panel that is already active
    Unchanged,
    /// The entry has no target
    Leaf { label: String },
    /// No entry exists at the requested index
    OutOfRange,
}

/// State of one mounted dropdown menu.
///
/// Created when the owning nav item opens and dropped when it closes. Exactly
/// one panel is active at any time. While a switch is in flight the previous
/// panel stays mounted until its exit completes; once settled only the active
/// panel remains mounted.
#[derive(Debug, Clone)]
pub struct DropdownState {
    graph: Arc<MenuGraph>,
    active_menu: MenuId,
    menu_height: Option<u16>,
    height_animation: Option<HeightAnimation>,
    mounted: Vec<MountedPanel>,
    generation: u64,
    selected: usize,
    /// Last rendered container area; used for mouse hit testing.
    pub last_area: Rect,
    /// Last rendered row of each entry of the active panel.
    pub per_entry_areas: Vec<Rect>,
}

impl DropdownState {
    /// Mounts the dropdown on its root panel.
    ///
    /// The root appears without an enter animation and its height is adopted
    /// immediately so the container never renders at zero height.
    pub fn new(graph: Arc<MenuGraph>, now: Instant) -> Self {
        let root = graph.root().clone();
        let style = graph.panel(&root).map(|panel| panel.style).unwrap_or(PanelStyle::Primary);
        let duration = graph.transition_duration();
        let mut state = Self {
            graph,
            active_menu: root.clone(),
            menu_height: None,
            height_animation: None,
            mounted: vec![MountedPanel {
                id: root.clone(),
                style,
                transition: Transition::entered(now, duration),
                generation: 0,
            }],
            generation: 0,
            selected: 0,
            last_area: Rect::default(),
            per_entry_areas: Vec::new(),
        };
        state.menu_height = state.measure_panel(&root);
        state.height_animation = state.menu_height.map(|height| HeightAnimation::settled(height, now));
        state
    }

    pub fn graph(&self) -> &MenuGraph {
        &self.graph
    }

    pub fn active_menu(&self) -> &MenuId {
        &self.active_menu
    }

    pub fn active_panel(&self) -> Option<&MenuPanel> {
        self.graph.panel(&self.active_menu)
    }

    /// Height reported by the panel that most recently finished entering.
    pub fn menu_height(&self) -> Option<u16> {
        self.menu_height
    }

    /// Generation of the most recent switch.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn mounted_panels(&self) -> &[MountedPanel] {
        &self.mounted
    }

    pub fn is_mounted(&self, id: &MenuId) -> bool {
        self.mounted.iter().any(|panel| &panel.id == id)
    }

    /// True once only the active panel is mounted and nothing is moving.
    pub fn is_settled(&self) -> bool {
        matches!(self.mounted.as_slice(), [only] if only.id == self.active_menu && !only.transition.is_animating())
    }

    /// True while a panel transition or the height animation is running.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.mounted.iter().any(|panel| panel.transition.is_animating())
            || self.height_animation.is_some_and(|animation| !animation.is_settled(now))
    }

    /// Switches the active panel.
    ///
    /// Returns `false` without touching any state when `target` is already
    /// active or is not part of the graph. A switch supersedes any switch still
    /// in flight: every other mounted panel starts exiting, so an abandoned
    /// panel never completes its enter and never reports a height.
    pub fn go_to_menu(&mut self, target: &MenuId, now: Instant) -> bool {
        if *target == self.active_menu {
            return false;
        }
        if !self.graph.contains(target) {
            warn!(target = %target, "ignoring switch to a menu that is not configured");
            return false;
        }
        let style = self.graph.panel(target).map_or(PanelStyle::Secondary, |panel| panel.style);

        self.generation += 1;
        for panel in self.mounted.iter_mut().filter(|panel| &panel.id != target) {
            panel.transition.exit(now);
        }
        match self.mounted.iter_mut().find(|panel| &panel.id == target) {
            Some(existing) => {
                existing.transition.reenter(now);
                existing.generation = self.generation;
            }
            None => self.mounted.push(MountedPanel {
                id: target.clone(),
                style,
                transition: Transition::enter(now, self.graph.transition_duration()),
                generation: self.generation,
            }),
        }

        debug!(
            from = %self.active_menu,
            to = %target,
            class = self.graph.class_for(style),
            generation = self.generation,
            "switching dropdown panel"
        );
        self.active_menu = target.clone();
        self.selected = 0;
        true
    }

    /// Activates the entry at `index` of the active panel.
    pub fn activate(&mut self, index: usize, now: Instant) -> Activation {
        let Some(entry) = self.active_panel().and_then(|panel| panel.entries.get(index)).cloned() else {
            return Activation::OutOfRange;
        };
        if entry.is_leaf() {
            return Activation::Leaf { label: entry.label };
        }
        let Some(target) = entry.go_to_menu else {
            return Activation::Unchanged;
        };
        let from = self.active_menu.clone();
        if self.go_to_menu(&target, now) {
            Activation::Navigated { from, to: target }
        } else {
            Activation::Unchanged
        }
    }

    pub fn activate_selected(&mut self, now: Instant) -> Activation {
        self.activate(self.selected, now)
    }

    /// Advances every transition to `now`.
    ///
    /// Panels whose exit completed are unmounted; a panel whose enter completed
    /// reports its height. Returns whether anything was animating, i.e. whether
    /// the dropdown needs to be redrawn.
    pub fn tick(&mut self, now: Instant) -> bool {
        let was_animating = self.is_animating(now);
        let mut entered = Vec::new();
        for panel in &mut self.mounted {
            match panel.transition.advance(now) {
                Some(TransitionEvent::Entered) => entered.push((panel.id.clone(), panel.generation)),
                Some(TransitionEvent::Exited) => debug!(panel = %panel.id, "unmounting dropdown panel"),
                None => {}
            }
        }
        self.mounted.retain(|panel| panel.transition.is_mounted());

        for (id, generation) in entered {
            self.on_enter_complete(&id, generation, now);
        }
        if was_animating && self.is_settled() {
            debug!(panel = %self.active_menu, "dropdown settled");
        }
        was_animating
    }

    /// Applies the height reported by a panel that finished entering.
    ///
    /// Reports from a panel that is no longer active, or from an earlier switch
    /// generation, are dropped. Returns whether the height was applied.
    pub fn on_enter_complete(&mut self, id: &MenuId, generation: u64, now: Instant) -> bool {
        if *id != self.active_menu || generation != self.generation {
            debug!(panel = %id, generation, current = self.generation, "dropping stale height report");
            return false;
        }
        let Some(height) = self.measure_panel(id) else {
            return false;
        };
        let from = self.displayed_height(now).unwrap_or(height);
        self.menu_height = Some(height);
        self.height_animation = Some(HeightAnimation::new(from, height, now, self.graph.transition_duration()));
        true
    }

    /// Rendered height of a mounted panel in rows; `None` when the panel is not
    /// mounted.
    pub fn measure_panel(&self, id: &MenuId) -> Option<u16> {
        if !self.is_mounted(id) {
            return None;
        }
        let panel = self.graph.panel(id)?;
        let rows = u16::try_from(panel.entries.len()).unwrap_or(u16::MAX);
        Some(rows.saturating_add(PANEL_CHROME_ROWS))
    }

    /// Container height at `now`, following the height animation.
    pub fn displayed_height(&self, now: Instant) -> Option<u16> {
        self.height_animation.map(|animation| animation.value_at(now))
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select(&mut self, index: usize) {
        if index < self.active_entry_count() {
            self.selected = index;
        }
    }

    pub fn select_next(&mut self) {
        let count = self.active_entry_count();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    pub fn select_prev(&mut self) {
        let count = self.active_entry_count();
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
        }
    }

    /// Index of the active panel's entry rendered at the given cell.
    pub fn entry_at(&self, column: u16, row: u16) -> Option<usize> {
        self.per_entry_areas.iter().position(|area| {
            column >= area.x && column < area.x.saturating_add(area.width) && row >= area.y && row < area.y.saturating_add(area.height)
        })
    }

    fn active_entry_count(&self) -> usize {
        self.active_panel().map(|panel| panel.entries.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    const STEP: Duration = Duration::from_millis(10);
    const SETTLE: Duration = Duration::from_millis(400);

    fn graph() -> Arc<MenuGraph> {
        Arc::new(MenuGraph::from_embedded().expect("embedded menu"))
    }

    fn id(value: &str) -> MenuId {
        MenuId::new(value)
    }

    fn labels(state: &DropdownState) -> Vec<String> {
        state
            .active_panel()
            .map(|panel| panel.entries.iter().map(|entry| entry.label.clone()).collect())
            .unwrap_or_default()
    }

    fn mounted_ids(state: &DropdownState) -> Vec<&str> {
        state.mounted_panels().iter().map(|panel| panel.id.as_str()).collect()
    }

    #[test]
    fn starts_on_root_with_synchronous_height() {
        let state = DropdownState::new(graph(), Instant::now());
        assert_eq!(state.active_menu(), &id("main"));
        assert_eq!(state.menu_height(), Some(3 + PANEL_CHROME_ROWS));
        assert_eq!(mounted_ids(&state), vec!["main"]);
        assert!(state.is_settled());
    }

    #[test]
    fn settings_and_back() {
        let start = Instant::now();
        let mut state = DropdownState::new(graph(), start);

        let activation = state.activate(1, start);
        assert_eq!(
            activation,
            Activation::Navigated {
                from: id("main"),
                to: id("settings")
            }
        );
        assert_eq!(state.active_menu(), &id("settings"));
        state.tick(start + SETTLE);
        assert_eq!(labels(&state), vec!["Go Back"]);
        assert_eq!(mounted_ids(&state), vec!["settings"]);

        let back_at = start + SETTLE;
        state.activate(0, back_at);
        state.tick(back_at + SETTLE);
        assert_eq!(state.active_menu(), &id("main"));
        assert_eq!(labels(&state), vec!["My Profile", "Settings", "List Test"]);
        assert!(state.is_settled());
    }

    #[test]
    fn nested_list_and_back() {
        let mut now = Instant::now();
        let mut state = DropdownState::new(graph(), now);

        state.activate(2, now);
        now += SETTLE;
        state.tick(now);
        assert_eq!(state.active_menu(), &id("listtest"));
        assert_eq!(labels(&state).len(), 6);

        state.activate(1, now);
        now += SETTLE;
        state.tick(now);
        assert_eq!(state.active_menu(), &id("sublisttest"));
        assert_eq!(labels(&state).len(), 5);

        state.activate(0, now);
        now += SETTLE;
        state.tick(now);
        assert_eq!(state.active_menu(), &id("listtest"));
        assert_eq!(mounted_ids(&state), vec!["listtest"]);
    }

    #[test]
    fn leaf_entries_do_not_navigate() {
        let start = Instant::now();
        let mut state = DropdownState::new(graph(), start);
        let generation = state.generation();

        assert_eq!(
            state.activate(0, start),
            Activation::Leaf {
                label: "My Profile".to_string()
            }
        );
        assert_eq!(state.active_menu(), &id("main"));
        assert_eq!(state.generation(), generation);
        assert!(state.is_settled());
        assert_eq!(state.activate(42, start), Activation::OutOfRange);
    }

    #[test]
    fn switching_to_the_active_menu_is_a_no_op() {
        let start = Instant::now();
        let mut state = DropdownState::new(graph(), start);

        assert!(!state.go_to_menu(&id("main"), start));
        assert_eq!(mounted_ids(&state), vec!["main"]);
        assert_eq!(state.generation(), 0);
        assert!(!state.is_animating(start));
    }

    #[test]
    fn unknown_targets_are_ignored() {
        let start = Instant::now();
        let mut state = DropdownState::new(graph(), start);
        assert!(!state.go_to_menu(&id("missing"), start));
        assert_eq!(state.active_menu(), &id("main"));
    }

    #[test]
    fn height_follows_the_panel_that_finished_entering() {
        let start = Instant::now();
        let mut state = DropdownState::new(graph(), start);
        state.go_to_menu(&id("listtest"), start);

        // Height is only reported at the end of the enter transition.
        state.tick(start + Duration::from_millis(150));
        assert_eq!(state.menu_height(), Some(3 + PANEL_CHROME_ROWS));

        let entered_at = start + Duration::from_millis(300);
        state.tick(entered_at);
        assert_eq!(state.menu_height(), state.measure_panel(&id("listtest")));
        assert_eq!(state.menu_height(), Some(6 + PANEL_CHROME_ROWS));

        // The container grows from the old height to the new one.
        assert_eq!(state.displayed_height(entered_at), Some(3 + PANEL_CHROME_ROWS));
        assert_eq!(state.displayed_height(entered_at + SETTLE), Some(6 + PANEL_CHROME_ROWS));
        assert!(!state.is_animating(entered_at + SETTLE));
    }

    #[test]
    fn rapid_switch_keeps_the_last_request_and_drops_stale_heights() {
        let start = Instant::now();
        let mut state = DropdownState::new(graph(), start);

        state.activate(1, start + STEP);
        let settings_generation = state.generation();
        state.go_to_menu(&id("listtest"), start + STEP * 2);
        assert_eq!(state.active_menu(), &id("listtest"));

        state.tick(start + SETTLE);
        assert_eq!(mounted_ids(&state), vec!["listtest"]);
        assert_eq!(state.menu_height(), Some(6 + PANEL_CHROME_ROWS));

        // A late report from the abandoned settings switch changes nothing.
        assert!(!state.on_enter_complete(&id("settings"), settings_generation, start + SETTLE));
        assert_eq!(state.menu_height(), Some(6 + PANEL_CHROME_ROWS));
    }

    #[test]
    fn returning_to_an_exiting_panel_reenters_it() {
        let start = Instant::now();
        let mut state = DropdownState::new(graph(), start);

        state.go_to_menu(&id("settings"), start);
        state.go_to_menu(&id("main"), start + STEP);
        assert_eq!(mounted_ids(&state), vec!["main", "settings"]);

        state.tick(start + SETTLE);
        assert_eq!(mounted_ids(&state), vec!["main"]);
        assert_eq!(state.menu_height(), Some(3 + PANEL_CHROME_ROWS));
        assert!(state.is_settled());
    }

    #[test]
    fn measuring_an_unmounted_panel_is_a_no_op() {
        let start = Instant::now();
        let mut state = DropdownState::new(graph(), start);
        assert_eq!(state.measure_panel(&id("settings")), None);
        let generation = state.generation();
        assert!(!state.on_enter_complete(&id("settings"), generation, start));
        assert_eq!(state.menu_height(), Some(3 + PANEL_CHROME_ROWS));
    }

    #[test]
    fn keyboard_selection_wraps_and_resets_on_switch() {
        let start = Instant::now();
        let mut state = DropdownState::new(graph(), start);

        state.select_prev();
        assert_eq!(state.selected(), 2);
        state.select_next();
        assert_eq!(state.selected(), 0);
        state.select_next();
        assert_eq!(state.activate_selected(start), Activation::Navigated { from: id("main"), to: id("settings") });
        assert_eq!(state.selected(), 0);

        state.select(5);
        assert_eq!(state.selected(), 0, "out of range selection is ignored");
    }

    #[test]
    fn entry_hit_testing_respects_row_edges() {
        let mut state = DropdownState::new(graph(), Instant::now());
        assert_eq!(state.entry_at(10, 4), None, "nothing rendered yet");

        state.per_entry_areas = vec![Rect::new(10, 4, 20, 1), Rect::new(10, 5, 20, 1)];
        assert_eq!(state.entry_at(10, 4), Some(0));
        assert_eq!(state.entry_at(29, 4), Some(0));
        assert_eq!(state.entry_at(30, 4), None);
        assert_eq!(state.entry_at(9, 4), None);
        assert_eq!(state.entry_at(10, 5), Some(1));
        assert_eq!(state.entry_at(10, 6), None);
        assert_eq!(state.entry_at(10, 3), None);
    }
}
