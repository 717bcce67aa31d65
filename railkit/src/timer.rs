//! Cancellable cooperative timers.
//!
//! Two shapes cover everything the scroll widgets need:
//!
//! - [`Debounced`]: run an action once, a fixed delay after the *last* call.
//!   Each call replaces the previous cancellation token, so only the trailing
//!   invocation survives a burst.
//! - [`Repeater`]: re-run a step on a zero-delay reschedule, yielding to the
//!   scheduler between steps so other events (a pointer release, say) can
//!   interrupt the loop.
//!
//! Both degrade gracefully outside a Tokio runtime: the debounced action runs
//! immediately and the repeater keeps whatever its caller already did
//! synchronously.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::debug;
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

/// A delayed action that only fires after calls stop arriving.
pub struct Debounced {
    delay: Duration,
    action: Arc<dyn Fn() + Send + Sync>,
    token: Mutex<CancellationToken>,
}

impl Debounced {
    pub fn new(delay: Duration, action: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            delay,
            action: Arc::new(action),
            token: Mutex::new(CancellationToken::new()),
        }
    }

    /// Schedule the action, cancelling any pending schedule.
    pub fn call(&self) {
        let token = self.reset_token();

        match Handle::try_current() {
            Ok(handle) => {
                let action = Arc::clone(&self.action);
                let delay = self.delay;
                let _ = handle.spawn(async move {
                    tokio::select! {
                        _ = token.cancelled() => {}
                        _ = tokio::time::sleep(delay) => action(),
                    }
                });
            }
            Err(_) => {
                debug!("debounce: no async runtime, running action directly");
                (self.action)();
            }
        }
    }

    /// Cancel a pending schedule without running the action.
    pub fn cancel(&self) {
        if let Ok(guard) = self.token.lock() {
            guard.cancel();
        }
    }

    fn reset_token(&self) -> CancellationToken {
        let token = CancellationToken::new();
        if let Ok(mut guard) = self.token.lock() {
            guard.cancel();
            *guard = token.clone();
        }
        token
    }
}

impl Drop for Debounced {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// A zero-delay rescheduled step loop.
///
/// The step runs once per scheduler turn until it returns `false` or the
/// repeater is cancelled. Cancellation wins even with a step pending: the
/// token is checked before every step.
pub struct Repeater {
    token: CancellationToken,
}

impl Repeater {
    /// Spawn the step loop. The caller is expected to have run the first
    /// step synchronously; the loop continues from the second one.
    pub fn spawn(mut step: impl FnMut() -> bool + Send + 'static) -> Self {
        let token = CancellationToken::new();

        match Handle::try_current() {
            Ok(handle) => {
                let task_token = token.clone();
                let _ = handle.spawn(async move {
                    loop {
                        tokio::task::yield_now().await;
                        if task_token.is_cancelled() || !step() {
                            break;
                        }
                    }
                });
            }
            Err(_) => {
                debug!("repeater: no async runtime, keeping the initial step only");
            }
        }

        Self { token }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl Drop for Repeater {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
