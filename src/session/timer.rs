use std::time::{Duration, Instant};

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerState {
    Pending { deadline: Instant },
    Fired,
    Cancelled,
}

/// One-shot deadline driving the end of the loading screen.
///
/// The timer is owned by its session. Dropping it while still pending
/// cancels it, so a torn-down session can never observe it firing.
#[derive(Debug)]
pub(crate) struct LoadingTimer {
    state: TimerState,
}

impl LoadingTimer {
    pub(crate) fn start(now: Instant, delay: Duration) -> Self {
        Self {
            state: TimerState::Pending {
                deadline: now + delay,
            },
        }
    }

    /// Returns `true` exactly once: on the first poll at or after the deadline.
    pub(crate) fn poll(&mut self, now: Instant) -> bool {
        match self.state {
            TimerState::Pending { deadline } if now >= deadline => {
                self.state = TimerState::Fired;
                true
            }
            _ => false,
        }
    }

    /// Time left before the deadline, or `None` once fired or cancelled.
    pub(crate) fn remaining(&self, now: Instant) -> Option<Duration> {
        match self.state {
            TimerState::Pending { deadline } => Some(deadline.saturating_duration_since(now)),
            TimerState::Fired | TimerState::Cancelled => None,
        }
    }

    /// Cancel a pending timer. Returns whether anything was cancelled;
    /// cancelling a fired or already cancelled timer is a no-op.
    pub(crate) fn cancel(&mut self) -> bool {
        if matches!(self.state, TimerState::Pending { .. }) {
            self.state = TimerState::Cancelled;
            true
        } else {
            false
        }
    }

    pub(crate) fn is_pending(&self) -> bool {
        matches!(self.state, TimerState::Pending { .. })
    }

    #[cfg(test)]
    pub(crate) fn has_fired(&self) -> bool {
        self.state == TimerState::Fired
    }
}

impl Drop for LoadingTimer {
    fn drop(&mut self) {
        if self.cancel() {
            debug!("loading timer cancelled before firing");
        }
    }
}
