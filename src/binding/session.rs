//! Process-wide binding session.
//!
//! The BASIC host calls flat functions, so one live context per bound
//! library has to be parked in process-wide state. [`Session`] is that
//! slot: a mutex-guarded one-time container with idempotent
//! initialization and idempotent teardown. The mutex is what makes
//! concurrent `init` calls perform the load work at most once.

use parking_lot::Mutex;

use super::{trace, BindingError};

/// A guarded process-wide slot for one binding context.
///
/// State machine (failure collapses back to uninitialized, so a later
/// retry is possible):
///
/// ```text
/// [uninitialized] --init ok--> [ready]
/// [uninitialized] --init err-> [uninitialized]
/// [ready]         --init----->  [ready]          (no-op)
/// [ready]         --done-----> [uninitialized]
/// ```
pub struct Session<C> {
    slot: Mutex<Option<C>>,
}

impl<C> Session<C> {
    /// An empty (uninitialized) session.
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Initialize the session if it is not already live.
    ///
    /// Idempotent: a live session short-circuits to `true` without
    /// calling `make`. A failed `make` leaves the session uninitialized.
    pub fn init_with(&self, make: impl FnOnce() -> Result<C, BindingError>) -> bool {
        let mut slot = self.slot.lock();
        if slot.is_some() {
            return true;
        }
        match make() {
            Ok(context) => {
                *slot = Some(context);
                true
            }
            Err(err) => {
                trace!("session init failed: {}", err);
                false
            }
        }
    }

    /// Tear down the session.
    ///
    /// Safe no-op when never initialized; dropping the context performs
    /// the actual cleanup. Never fails.
    pub fn done(&self) {
        drop(self.slot.lock().take());
    }

    /// True while a context is live.
    pub fn is_ready(&self) -> bool {
        self.slot.lock().is_some()
    }

    /// Run `f` against the live context.
    pub fn with<R>(
        &self,
        f: impl FnOnce(&C) -> Result<R, BindingError>,
    ) -> Result<R, BindingError> {
        match self.slot.lock().as_ref() {
            Some(context) => f(context),
            None => Err(BindingError::Uninitialized),
        }
    }
}

impl<C> Default for Session<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn init_is_idempotent_and_makes_once() {
        let session: Session<u32> = Session::new();
        let calls = AtomicUsize::new(0);

        let make = || {
            calls.fetch_add(1, Ordering::Relaxed);
            Ok(7u32)
        };

        assert!(session.init_with(make));
        assert!(session.init_with(|| {
            calls.fetch_add(1, Ordering::Relaxed);
            Ok(8u32)
        }));
        assert_eq!(calls.load(Ordering::Relaxed), 1);
        assert_eq!(session.with(|v| Ok(*v)).unwrap(), 7);
    }

    #[test]
    fn failed_init_collapses_to_uninitialized_and_permits_retry() {
        let session: Session<u32> = Session::new();

        assert!(!session.init_with(|| Err(BindingError::Uninitialized)));
        assert!(!session.is_ready());

        assert!(session.init_with(|| Ok(3u32)));
        assert!(session.is_ready());
    }

    #[test]
    fn done_is_a_safe_noop_when_never_initialized() {
        let session: Session<u32> = Session::new();
        session.done();
        session.done();
        assert!(!session.is_ready());
        assert_eq!(session.with(|v| Ok(*v)), Err(BindingError::Uninitialized));
    }

    #[test]
    fn done_drops_the_context() {
        struct Flagged<'a>(&'a AtomicUsize);
        impl Drop for Flagged<'_> {
            fn drop(&mut self) {
                self.0.fetch_add(1, Ordering::Relaxed);
            }
        }

        let drops = AtomicUsize::new(0);
        let session: Session<Flagged<'_>> = Session::new();
        assert!(session.init_with(|| Ok(Flagged(&drops))));
        session.done();
        assert_eq!(drops.load(Ordering::Relaxed), 1);
        session.done();
        assert_eq!(drops.load(Ordering::Relaxed), 1);
    }
}
