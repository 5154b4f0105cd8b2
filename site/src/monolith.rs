//! Activation state machine for the home page monolith.
//!
//! The monolith toggles between [`Activation::Rest`] and
//! [`Activation::Active`]. Each transition:
//!
//! 1. is dropped entirely while another one is still settling (busy guard);
//! 2. cancels any pending settle timer and disables the links at once;
//! 3. moves the shared state, rewrites nav-link fragments, and syncs the URL;
//! 4. schedules a settle timer `enable_delay_ms` later.
//!
//! When the timer fires the busy flag clears. Opening also enables the links
//! at that point; closing leaves them disabled, since a closed monolith shows
//! no links.
//!
//! [`MonolithCore`] performs no I/O. Every side effect is returned as an
//! [`Action`] for the browser layer to carry out, and timers are identified by
//! tickets so a test can fire them deterministically.

#[cfg(test)]
#[path = "monolith_test.rs"]
mod monolith_test;

use crate::consts::{ENABLE_DELAY_RATIO, TRANSITION_MS};
use crate::fragment::{self, hash_for};
use crate::state::{Activation, Links, SharedState};

/// Side effects requested by the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Mirror the activation onto the page root and the monolith's `aria-pressed`.
    SetActivation(Activation),
    /// Make links focusable/clickable or not, and expose/hide their container.
    SetLinksEnabled(bool),
    /// Point every nav link's fragment at the given state.
    RewriteLinks(Activation),
    /// Replace the location fragment with the one for this state, without reloading.
    ReplaceFragment(Activation),
    /// Cancel the pending settle timer, if any.
    CancelSettle,
    /// Call [`MonolithCore::settle`] with `ticket` after `delay_ms`.
    ScheduleSettle { ticket: u64, delay_ms: u32 },
}

/// Transition timing, fixed at setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub transition_ms: u32,
}

impl Timing {
    /// Timing for the current motion preference; reduced motion skips the transition.
    #[must_use]
    pub fn new(reduced_motion: bool) -> Self {
        Self { transition_ms: if reduced_motion { 0 } else { TRANSITION_MS } }
    }

    /// Delay after which a transition settles and revealed links unlock.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn enable_delay_ms(self) -> u32 {
        (f64::from(self.transition_ms) * ENABLE_DELAY_RATIO).round() as u32
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Verdict for a click on a nav link. Propagation to the monolith is always stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkGuard {
    pub allow_navigation: bool,
}

/// Whether a keydown should toggle the monolith like a button press.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingSettle {
    ticket: u64,
    enable_links: bool,
}

pub struct MonolithCore {
    state: SharedState,
    timing: Timing,
    busy: bool,
    pending: Option<PendingSettle>,
    next_ticket: u64,
}

impl MonolithCore {
    #[must_use]
    pub fn new(state: SharedState, timing: Timing) -> Self {
        Self { state, timing, busy: false, pending: None, next_ticket: 0 }
    }

    /// Initial state from the location hash.
    ///
    /// An `#open` page starts active with links enabled right away; everything
    /// else starts at rest with links disabled. The URL is left untouched.
    pub fn setup(&mut self, hash: &str) -> Vec<Action> {
        let start = fragment::read_state(hash).unwrap_or_default();
        log::debug!("monolith setup: {}", start.as_str());
        let mut actions = self.set_state(start);
        actions.push(self.set_links(start.is_active()));
        actions
    }

    /// Open the monolith. No-op while busy.
    pub fn activate(&mut self, hash: &str) -> Vec<Action> {
        self.transition(Activation::Active, hash)
    }

    /// Close the monolith. No-op while busy.
    pub fn deactivate(&mut self, hash: &str) -> Vec<Action> {
        self.transition(Activation::Rest, hash)
    }

    /// Click or activation key on the monolith.
    pub fn toggle(&mut self, hash: &str) -> Vec<Action> {
        if self.state().is_active() { self.deactivate(hash) } else { self.activate(hash) }
    }

    /// Settle timer callback. Tickets that are no longer pending are ignored.
    pub fn settle(&mut self, ticket: u64) -> Vec<Action> {
        match self.pending {
            Some(pending) if pending.ticket == ticket => {
                self.pending = None;
                self.busy = false;
                if pending.enable_links { vec![self.set_links(true)] } else { Vec::new() }
            }
            _ => {
                log::debug!("ignoring stale settle ticket {ticket}");
                Vec::new()
            }
        }
    }

    /// Click on a nav link: navigation only goes through while links are enabled.
    #[must_use]
    pub fn link_click(&self) -> LinkGuard {
        LinkGuard { allow_navigation: self.links_enabled() }
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    #[must_use]
    pub fn links_enabled(&self) -> bool {
        self.state.borrow().links == Links::Enabled
    }

    #[must_use]
    pub fn timing(&self) -> Timing {
        self.timing
    }

    #[must_use]
    pub fn state(&self) -> Activation {
        self.state.borrow().activation
    }

    /// Move to `activation` and rewrite the nav links, without touching the
    /// URL, the links' enabled state, or the busy guard.
    pub fn set_state(&mut self, activation: Activation) -> Vec<Action> {
        self.state.borrow_mut().activation = activation;
        vec![Action::SetActivation(activation), Action::RewriteLinks(activation)]
    }

    fn transition(&mut self, target: Activation, hash: &str) -> Vec<Action> {
        if self.busy {
            log::debug!("monolith busy, dropping {} request", target.as_str());
            return Vec::new();
        }
        self.busy = true;

        self.pending = None;
        let mut actions = vec![Action::CancelSettle, self.set_links(false)];
        actions.extend(self.set_state(target));

        if hash != hash_for(target) {
            actions.push(Action::ReplaceFragment(target));
        }

        self.next_ticket += 1;
        let ticket = self.next_ticket;
        self.pending = Some(PendingSettle { ticket, enable_links: target.is_active() });
        actions.push(Action::ScheduleSettle { ticket, delay_ms: self.timing.enable_delay_ms() });
        actions
    }

    fn set_links(&mut self, enabled: bool) -> Action {
        self.state.borrow_mut().links = Links::from_enabled(enabled);
        Action::SetLinksEnabled(enabled)
    }
}
