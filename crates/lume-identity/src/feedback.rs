//! Transient "Copied!" acknowledgement for the copy-to-clipboard button.
//!
//! The acknowledgement is a deadline on an injected [`Clock`], so it reverts on its own
//! once the window elapses. Hosts that re-render on expiry own a timer scoped to the
//! component and call [`CopyFeedback::cancel`] (or drop the timer) on teardown.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Millisecond time source.
pub trait Clock {
    /// Milliseconds since an arbitrary, monotonic origin.
    fn now_ms(&self) -> u64;
}

/// Hand-driven clock for tests and stories. Clones share the same time.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    /// Start at `start_ms`.
    #[must_use]
    pub fn starting_at(start_ms: u64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
        }
    }

    /// Move time forward by `by`.
    pub fn advance(&self, by: Duration) {
        let step = u64::try_from(by.as_millis()).unwrap_or(u64::MAX);
        self.now.set(self.now.get().saturating_add(step));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

/// Visible state of the copy button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyState {
    /// Default label.
    Idle,
    /// Acknowledgement shown after a copy.
    Clicked,
}

impl CopyState {
    /// Button label for this state.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "Copy Account Key",
            Self::Clicked => "Copied!",
        }
    }
}

/// Copy acknowledgement that reverts to [`CopyState::Idle`] after a fixed window.
#[derive(Clone, Debug)]
pub struct CopyFeedback<C> {
    clock: C,
    window: Duration,
    clicked_until: Option<u64>,
}

impl<C: Clock> CopyFeedback<C> {
    /// Create an idle acknowledgement lasting `window` per copy.
    #[must_use]
    pub const fn new(clock: C, window: Duration) -> Self {
        Self {
            clock,
            window,
            clicked_until: None,
        }
    }

    /// Record a copy. A copy during an active window restarts it.
    pub fn copy(&mut self) {
        let window = u64::try_from(self.window.as_millis()).unwrap_or(u64::MAX);
        self.clicked_until = Some(self.clock.now_ms().saturating_add(window));
    }

    /// State as of the clock's current time.
    #[must_use]
    pub fn state(&self) -> CopyState {
        match self.clicked_until {
            Some(until) if self.clock.now_ms() < until => CopyState::Clicked,
            _ => CopyState::Idle,
        }
    }

    /// Time left until the acknowledgement reverts, if one is showing.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        let until = self.clicked_until?;
        let now = self.clock.now_ms();
        (now < until).then(|| Duration::from_millis(until - now))
    }

    /// Drop any pending acknowledgement.
    pub fn cancel(&mut self) {
        self.clicked_until = None;
    }
}
