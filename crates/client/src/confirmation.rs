//! The confirmation page and its redirect countdown.
//!
//! Once shown, the page counts down from [`COUNTDOWN_START`] once per
//! second and sends the visitor home when the counter reaches zero. The
//! visitor can go home earlier; either way exactly one navigation happens.
//! Dropping the view cancels the countdown.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};
use tokio_util::sync::CancellationToken;

use crate::view::{Navigator, View};

/// Seconds shown when the countdown starts.
pub const COUNTDOWN_START: u32 = 10;

/// Countdown granularity.
pub const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationState {
    /// Not yet shown.
    Idle,
    /// Shown, counting down.
    Submitted { remaining: u32 },
    /// The visitor has been sent home.
    Redirected,
}

struct Shared {
    state: Mutex<ConfirmationState>,
    navigator: Arc<dyn Navigator>,
    cancel: CancellationToken,
}

impl Shared {
    fn state(&self) -> MutexGuard<'_, ConfirmationState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Advance the countdown by one tick. Returns `false` once the task
    /// should stop.
    fn tick(&self) -> bool {
        let mut state = self.state();
        if self.cancel.is_cancelled() {
            return false;
        }
        match *state {
            ConfirmationState::Submitted { remaining } if remaining > 1 => {
                *state = ConfirmationState::Submitted {
                    remaining: remaining - 1,
                };
                true
            }
            ConfirmationState::Submitted { .. } => {
                *state = ConfirmationState::Redirected;
                self.cancel.cancel();
                self.navigator.navigate(View::Home);
                tracing::debug!("Countdown finished, redirected home");
                false
            }
            ConfirmationState::Idle | ConfirmationState::Redirected => false,
        }
    }
}

/// Handle to a mounted confirmation page.
pub struct ConfirmationView {
    shared: Arc<Shared>,
    task: Option<JoinHandle<()>>,
}

impl ConfirmationView {
    /// Create the view in the [`ConfirmationState::Idle`] state.
    pub fn new(navigator: Arc<dyn Navigator>) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(ConfirmationState::Idle),
                navigator,
                cancel: CancellationToken::new(),
            }),
            task: None,
        }
    }

    /// Create the view and start its countdown. Must be called inside a
    /// tokio runtime.
    pub fn mount(navigator: Arc<dyn Navigator>) -> Self {
        let mut view = Self::new(navigator);
        view.start();
        view
    }

    /// Enter [`ConfirmationState::Submitted`] and spawn the countdown.
    ///
    /// Does nothing unless the view is idle.
    pub fn start(&mut self) {
        {
            let mut state = self.shared.state();
            if *state != ConfirmationState::Idle {
                return;
            }
            *state = ConfirmationState::Submitted {
                remaining: COUNTDOWN_START,
            };
        }

        let shared = Arc::clone(&self.shared);
        self.task = Some(tokio::spawn(async move {
            let mut ticks = interval_at(Instant::now() + TICK, TICK);
            loop {
                tokio::select! {
                    () = shared.cancel.cancelled() => break,
                    _ = ticks.tick() => {
                        if !shared.tick() {
                            break;
                        }
                    }
                }
            }
        }));
    }

    pub fn state(&self) -> ConfirmationState {
        *self.shared.state()
    }

    /// Seconds left before the automatic redirect, while counting down.
    pub fn remaining(&self) -> Option<u32> {
        match self.state() {
            ConfirmationState::Submitted { remaining } => Some(remaining),
            _ => None,
        }
    }

    /// The explicit "back to home" action.
    ///
    /// Cancels the countdown and navigates, unless a redirect already
    /// happened. Returns whether this call navigated.
    pub fn go_home(&self) -> bool {
        let mut state = self.shared.state();
        if *state == ConfirmationState::Redirected {
            return false;
        }
        *state = ConfirmationState::Redirected;
        self.shared.cancel.cancel();
        self.shared.navigator.navigate(View::Home);
        true
    }

    /// Whether the countdown task has exited.
    pub fn is_settled(&self) -> bool {
        self.task.as_ref().map_or(true, |t| t.is_finished())
    }
}

impl Drop for ConfirmationView {
    fn drop(&mut self) {
        // Taking the lock orders teardown after any tick in progress.
        let _state = self.shared.state();
        self.shared.cancel.cancel();
    }
}
