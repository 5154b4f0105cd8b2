use std::rc::Rc;

use super::*;
use crate::state::{self, PageState, Theme};

// =============================================================
// Harness: fake clock driving the settle timers
// =============================================================

struct Harness {
    core: MonolithCore,
    shared: SharedState,
    hash: String,
    now_ms: u32,
    timers: Vec<(u32, u64)>,
    performed: Vec<Action>,
}

impl Harness {
    fn new(hash: &str, reduced_motion: bool) -> Self {
        let shared = state::shared();
        let core = MonolithCore::new(Rc::clone(&shared), Timing::new(reduced_motion));
        let mut h = Self {
            core,
            shared,
            hash: hash.to_owned(),
            now_ms: 0,
            timers: Vec::new(),
            performed: Vec::new(),
        };
        let hash = h.hash.clone();
        let actions = h.core.setup(&hash);
        h.perform(actions);
        h.performed.clear();
        h
    }

    fn perform(&mut self, actions: Vec<Action>) {
        for action in actions {
            match &action {
                Action::ReplaceFragment(state) => self.hash = hash_for(*state).to_owned(),
                Action::CancelSettle => self.timers.clear(),
                Action::ScheduleSettle { ticket, delay_ms } => {
                    self.timers.push((self.now_ms + delay_ms, *ticket));
                }
                _ => {}
            }
            self.performed.push(action);
        }
    }

    fn toggle(&mut self) -> Vec<Action> {
        let hash = self.hash.clone();
        let actions = self.core.toggle(&hash);
        self.perform(actions.clone());
        actions
    }

    fn activate(&mut self) -> Vec<Action> {
        let hash = self.hash.clone();
        let actions = self.core.activate(&hash);
        self.perform(actions.clone());
        actions
    }

    fn deactivate(&mut self) -> Vec<Action> {
        let hash = self.hash.clone();
        let actions = self.core.deactivate(&hash);
        self.perform(actions.clone());
        actions
    }

    fn advance(&mut self, ms: u32) {
        self.now_ms += ms;
        let now = self.now_ms;
        let (due, pending): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.timers).into_iter().partition(|(at, _)| *at <= now);
        self.timers = pending;
        for (_, ticket) in due {
            let actions = self.core.settle(ticket);
            self.perform(actions);
        }
    }

    fn page(&self) -> PageState {
        *self.shared.borrow()
    }

    fn scheduled(&self) -> usize {
        self.performed
            .iter()
            .filter(|a| matches!(a, Action::ScheduleSettle { .. }))
            .count()
    }
}

const DELAY: u32 = 227;

// =============================================================
// Timing
// =============================================================

#[test]
fn timing_default_uses_full_transition() {
    let timing = Timing::default();
    assert_eq!(timing.transition_ms, 650);
    assert_eq!(timing.enable_delay_ms(), DELAY);
}

#[test]
fn timing_reduced_motion_is_instant() {
    let timing = Timing::new(true);
    assert_eq!(timing.transition_ms, 0);
    assert_eq!(timing.enable_delay_ms(), 0);
}

#[test]
fn activation_keys() {
    assert!(is_activation_key("Enter"));
    assert!(is_activation_key(" "));
    assert!(!is_activation_key("Escape"));
    assert!(!is_activation_key("Spacebar"));
    assert!(!is_activation_key("a"));
}

// =============================================================
// setup from fragment
// =============================================================

#[test]
fn setup_open_starts_active_with_links_enabled() {
    let h = Harness::new("#open", false);
    assert_eq!(h.core.state(), Activation::Active);
    assert!(h.core.links_enabled());
    assert!(!h.core.is_busy());
    assert!(h.timers.is_empty());
}

#[test]
fn setup_active_alias_starts_active() {
    let h = Harness::new("#ACTIVE", false);
    assert_eq!(h.core.state(), Activation::Active);
    assert!(h.core.links_enabled());
}

#[test]
fn setup_closed_starts_rest_with_links_disabled() {
    let h = Harness::new("#closed", false);
    assert_eq!(h.core.state(), Activation::Rest);
    assert!(!h.core.links_enabled());
}

#[test]
fn setup_unrecognized_defaults_to_rest() {
    for hash in ["", "#", "#about"] {
        let h = Harness::new(hash, false);
        assert_eq!(h.core.state(), Activation::Rest);
        assert!(!h.core.links_enabled());
    }
}

#[test]
fn setup_emits_state_links_and_no_url_change() {
    let shared = state::shared();
    let mut core = MonolithCore::new(shared, Timing::default());
    let actions = core.setup("#open");
    assert_eq!(
        actions,
        vec![
            Action::SetActivation(Activation::Active),
            Action::RewriteLinks(Activation::Active),
            Action::SetLinksEnabled(true),
        ]
    );
}

#[test]
fn setup_does_not_normalize_alias_hash() {
    let mut h = Harness::new("#active", false);
    assert_eq!(h.hash, "#active");
    h.advance(1_000);
    assert_eq!(h.hash, "#active");
}

// =============================================================
// activate / deactivate
// =============================================================

#[test]
fn activate_emits_full_action_sequence() {
    let mut h = Harness::new("", false);
    let actions = h.activate();
    assert_eq!(
        actions,
        vec![
            Action::CancelSettle,
            Action::SetLinksEnabled(false),
            Action::SetActivation(Activation::Active),
            Action::RewriteLinks(Activation::Active),
            Action::ReplaceFragment(Activation::Active),
            Action::ScheduleSettle { ticket: 1, delay_ms: DELAY },
        ]
    );
}

#[test]
fn activate_skips_url_update_when_hash_already_matches() {
    let mut h = Harness::new("#closed", false);
    h.hash = "#open".to_owned();
    let actions = h.activate();
    assert!(!actions.iter().any(|a| matches!(a, Action::ReplaceFragment(_))));
}

#[test]
fn activate_replaces_alias_hash_with_canonical() {
    let mut h = Harness::new("#rest", false);
    h.activate();
    assert_eq!(h.hash, "#open");
}

#[test]
fn activate_enables_links_only_after_delay() {
    let mut h = Harness::new("#closed", false);
    h.activate();
    assert_eq!(h.core.state(), Activation::Active);
    assert!(!h.core.links_enabled());
    assert!(h.core.is_busy());

    h.advance(DELAY - 1);
    assert!(!h.core.links_enabled());
    assert!(h.core.is_busy());

    h.advance(1);
    assert!(h.core.links_enabled());
    assert!(!h.core.is_busy());
}

#[test]
fn deactivate_keeps_links_disabled_after_delay() {
    let mut h = Harness::new("#open", false);
    assert!(h.core.links_enabled());

    h.deactivate();
    assert_eq!(h.core.state(), Activation::Rest);
    assert!(!h.core.links_enabled());
    assert!(h.core.is_busy());
    assert_eq!(h.hash, "#closed");

    h.advance(DELAY);
    assert!(!h.core.links_enabled());
    assert!(!h.core.is_busy());
}

#[test]
fn transition_disables_links_immediately_regardless_of_target() {
    for start in ["#open", "#closed"] {
        let mut h = Harness::new(start, false);
        let actions = h.toggle();
        assert_eq!(actions[1], Action::SetLinksEnabled(false));
        assert_eq!(h.page().links, Links::Disabled);
    }
}

#[test]
fn reduced_motion_settles_on_zero_delay_timer() {
    let mut h = Harness::new("", true);
    let actions = h.activate();
    assert!(actions.contains(&Action::ScheduleSettle { ticket: 1, delay_ms: 0 }));
    assert!(!h.core.links_enabled());
    h.advance(0);
    assert!(h.core.links_enabled());
    assert!(!h.core.is_busy());
}

// =============================================================
// Busy guard
// =============================================================

#[test]
fn repeated_toggles_while_busy_produce_one_transition() {
    let mut h = Harness::new("", false);
    h.toggle();
    for _ in 0..5 {
        assert!(h.toggle().is_empty());
        h.advance(10);
    }
    assert_eq!(h.core.state(), Activation::Active);
    assert_eq!(h.scheduled(), 1);
    let activations = h
        .performed
        .iter()
        .filter(|a| matches!(a, Action::SetActivation(_)))
        .count();
    assert_eq!(activations, 1);
}

#[test]
fn deactivate_during_activation_is_dropped() {
    let mut h = Harness::new("", false);
    h.activate();
    assert!(h.deactivate().is_empty());
    assert_eq!(h.core.state(), Activation::Active);
    h.advance(DELAY);
    assert!(h.core.links_enabled());
}

#[test]
fn toggle_after_settle_runs_next_transition() {
    let mut h = Harness::new("", false);
    h.toggle();
    h.advance(DELAY);
    let actions = h.toggle();
    assert!(!actions.is_empty());
    assert_eq!(h.core.state(), Activation::Rest);
    assert_eq!(h.scheduled(), 2);
}

#[test]
fn full_cycle_round_trips_state_and_hash() {
    let mut h = Harness::new("#closed", false);
    h.toggle();
    h.advance(DELAY);
    h.toggle();
    h.advance(DELAY);
    assert_eq!(h.core.state(), Activation::Rest);
    assert_eq!(h.hash, "#closed");
    assert!(!h.core.links_enabled());
    assert!(!h.core.is_busy());
}

// =============================================================
// Settle tickets
// =============================================================

#[test]
fn settle_with_unknown_ticket_is_ignored() {
    let mut h = Harness::new("", false);
    h.activate();
    assert!(h.core.settle(99).is_empty());
    assert!(h.core.is_busy());
    assert!(!h.core.links_enabled());
}

#[test]
fn stale_ticket_cannot_enable_links_after_newer_transition() {
    let mut h = Harness::new("", false);
    h.activate();
    h.advance(DELAY);
    h.deactivate();
    // First transition's ticket fires late.
    assert!(h.core.settle(1).is_empty());
    assert!(!h.core.links_enabled());
    assert!(h.core.is_busy());
}

#[test]
fn settle_is_single_shot() {
    let mut h = Harness::new("", false);
    h.activate();
    assert_eq!(h.core.settle(1), vec![Action::SetLinksEnabled(true)]);
    assert!(h.core.settle(1).is_empty());
}

#[test]
fn tickets_increase_per_transition() {
    let mut h = Harness::new("", false);
    h.toggle();
    h.advance(DELAY);
    let actions = h.toggle();
    assert!(actions.contains(&Action::ScheduleSettle { ticket: 2, delay_ms: DELAY }));
}

// =============================================================
// Link guard
// =============================================================

#[test]
fn link_click_blocked_while_disabled_and_state_unchanged() {
    let h = Harness::new("#closed", false);
    let before = h.page();
    assert!(!h.core.link_click().allow_navigation);
    assert_eq!(h.page(), before);
}

#[test]
fn link_click_blocked_during_transition() {
    let mut h = Harness::new("", false);
    h.activate();
    assert!(!h.core.link_click().allow_navigation);
}

#[test]
fn link_click_allowed_when_enabled_and_state_unchanged() {
    let h = Harness::new("#open", false);
    let before = h.page();
    assert!(h.core.link_click().allow_navigation);
    assert_eq!(h.page(), before);
    assert!(!h.core.is_busy());
}

// =============================================================
// State accessors
// =============================================================

#[test]
fn set_state_moves_activation_without_url_or_links() {
    let mut h = Harness::new("#closed", false);
    let actions = h.core.set_state(Activation::Active);
    assert_eq!(
        actions,
        vec![Action::SetActivation(Activation::Active), Action::RewriteLinks(Activation::Active)]
    );
    assert_eq!(h.core.state(), Activation::Active);
    assert!(!h.core.links_enabled());
    assert!(!h.core.is_busy());
}

#[test]
fn transitions_leave_theme_alone() {
    let mut h = Harness::new("", false);
    h.shared.borrow_mut().theme = Theme::Light;
    h.toggle();
    h.advance(DELAY);
    assert_eq!(h.page().theme, Theme::Light);
}
