//! Session snapshots shared between tasks
//!
//! The dispatcher runs in the UART receive task while the robot program may
//! read values from another task or core. A Face-App update replaces eleven
//! fields at once, so readers copy the whole state under the lock instead of
//! reading fields one by one.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

use super::state::SessionState;

/// Session state behind a blocking mutex
///
/// Use `CriticalSectionRawMutex` to share across interrupt priorities or
/// cores, `NoopRawMutex` when everything runs in one executor.
pub struct SharedSession<M: RawMutex> {
    inner: Mutex<M, RefCell<SessionState>>,
}

impl<M: RawMutex> Default for SharedSession<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex> SharedSession<M> {
    /// Create a shared session holding the initial (all zero) state
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(SessionState::new())),
        }
    }

    /// Replace the shared state with `state`
    pub fn publish(&self, state: &SessionState) {
        self.inner.lock(|cell| cell.borrow_mut().clone_from(state));
    }

    /// Copy out the current state
    pub fn snapshot(&self) -> SessionState {
        self.inner.lock(|cell| cell.borrow().clone())
    }

    /// Run `f` against the current state without copying it
    pub fn read<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R {
        self.inner.lock(|cell| f(&cell.borrow()))
    }
}
