//! The one-request-at-a-time gate.

use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    Pending,
}

/// `Idle → Pending` is a compare-and-set, so two callers can never both
/// acquire the gate. `Pending → Idle` happens when the permit drops.
#[derive(Debug, Default)]
pub struct RequestGate {
    pending: AtomicBool,
}

impl RequestGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RequestState {
        if self.pending.load(Ordering::Acquire) {
            RequestState::Pending
        } else {
            RequestState::Idle
        }
    }

    /// Returns `None` while another permit is alive.
    pub fn try_acquire(self: &Rc<Self>) -> Option<GatePermit> {
        self.pending
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| GatePermit { gate: Rc::clone(self) })
    }
}

/// Held for the lifetime of one in-flight request.
#[derive(Debug)]
pub struct GatePermit {
    gate: Rc<RequestGate>,
}

impl Drop for GatePermit {
    fn drop(&mut self) {
        self.gate.pending.store(false, Ordering::Release);
    }
}
