//! # List Lock
//!
//! The mutual-exclusion capability a [`LockedList`](crate::linked_list::LockedList)
//! uses to serialize every read and write.
//!
//! A lock moves through three states:
//!
//! - `initialize` builds a ready, unlocked lock around the protected value.
//! - `acquire` blocks until the caller owns the lock and returns a guard;
//!   dropping the guard (or passing it to [`release`]) unlocks again.
//! - `destroy` consumes the lock and hands back the protected value. Since a
//!   live guard borrows the lock, a held lock can never be destroyed.
//!
//! Locks are not reentrant. Acquiring a lock the current thread already holds
//! deadlocks with the spin backends and may panic or deadlock with
//! `std::sync::Mutex`.
//!
//! ## Backends
//!
//! - [`spin::Mutex`]: the default, usable in `no_std` builds.
//! - [`spin::mutex::TicketMutex`]: FIFO-fair spinning for contended lists.
//! - `std::sync::Mutex`: the host's native mutex, behind the `std` feature.

use core::ops::DerefMut;

use crate::error::LockError;

mod spin_impl;
#[cfg(feature = "std")]
mod std_impl;


/// A mutual-exclusion primitive guarding a value of type `T`.
pub trait RawLock<T>: Sized {
    /// The guard proving ownership of the lock. Dropping it releases the lock.
    type Guard<'a>: DerefMut<Target = T>
    where
        Self: 'a,
        T: 'a;

    /// Construct a ready, unlocked lock protecting `value`.
    fn initialize(value: T) -> Result<Self, LockError>;

    /// Block the calling thread until it owns the lock.
    ///
    /// # Returns
    /// A guard giving exclusive access to the protected value, or an error if
    /// the underlying primitive cannot be acquired any more.
    fn acquire(&self) -> Result<Self::Guard<'_>, LockError>;

    /// Tear the lock down and return the protected value.
    fn destroy(self) -> T;
}

/// Release a lock by giving up its guard.
#[inline]
pub fn release<G>(guard: G) {
    drop(guard);
}
