//! One in-flight action per control.
//!
//! A control starts [`ActionState::Idle`]. [`ActionGuard::try_begin`] moves
//! it to [`ActionState::Pending`] and hands back an [`InFlight`] token; the
//! control returns to idle when that token is dropped, whichever way the
//! action ends.

use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionState {
    Idle,
    Pending,
}

#[derive(Debug, Default)]
pub struct ActionGuard {
    pending: AtomicBool,
}

impl ActionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the control, or `None` if an action is already running on it.
    pub fn try_begin(&self) -> Option<InFlight<'_>> {
        self.pending
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlight { guard: self })
    }

    pub fn state(&self) -> ActionState {
        if self.pending.load(Ordering::Acquire) {
            ActionState::Pending
        } else {
            ActionState::Idle
        }
    }
}

/// Proof that the owning control is pending. Releases it on drop.
#[derive(Debug)]
pub struct InFlight<'a> {
    guard: &'a ActionGuard,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.guard.pending.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_begin_is_refused_while_pending() {
        let guard = ActionGuard::new();
        let first = guard.try_begin();
        assert!(first.is_some());
        assert_eq!(guard.state(), ActionState::Pending);
        assert!(guard.try_begin().is_none());
    }

    #[test]
    fn test_drop_returns_to_idle() {
        let guard = ActionGuard::new();
        {
            let _in_flight = guard.try_begin().unwrap();
        }
        assert_eq!(guard.state(), ActionState::Idle);
        assert!(guard.try_begin().is_some());
    }

    #[test]
    fn test_guards_are_independent() {
        let a = ActionGuard::new();
        let b = ActionGuard::new();
        let _a = a.try_begin().unwrap();
        assert!(b.try_begin().is_some());
    }
}
