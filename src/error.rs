//! Error types returned by list and lock operations.

use core::fmt;

/// Errors reported by a [`RawLock`](crate::lock::RawLock) backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum LockError {
    /// A thread panicked while holding the lock.
    Poisoned,
}

impl fmt::Display for LockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LockError::Poisoned => write!(f, "lock poisoned by a panicking holder"),
        }
    }
}

impl core::error::Error for LockError {}

/// Errors returned by [`LockedList`](crate::linked_list::LockedList) operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListError {
    /// Malformed call: the list was destroyed, or the element type has no size.
    InvalidArgument,
    /// The index is not smaller than the current length.
    OutOfRange,
    /// Allocating storage for a value failed.
    OutOfMemory,
    /// The list lock reported an error.
    Lock(LockError),
}

const EINVAL: i32 = 22;
const ERANGE: i32 = 34;
const ENOMEM: i32 = 12;
const ENOTRECOVERABLE: i32 = 131;

impl ListError {
    /// Returns the POSIX error number matching this error.
    ///
    /// Useful when the list sits behind an interface that reports plain
    /// status codes.
    pub fn errno(&self) -> i32 {
        match self {
            ListError::InvalidArgument => EINVAL,
            ListError::OutOfRange => ERANGE,
            ListError::OutOfMemory => ENOMEM,
            ListError::Lock(LockError::Poisoned) => ENOTRECOVERABLE,
        }
    }
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::InvalidArgument => write!(f, "invalid argument or list not initialized"),
            ListError::OutOfRange => write!(f, "index out of range"),
            ListError::OutOfMemory => write!(f, "out of memory"),
            ListError::Lock(err) => write!(f, "list lock failed: {err}"),
        }
    }
}

impl core::error::Error for ListError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            ListError::Lock(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LockError> for ListError {
    fn from(err: LockError) -> Self {
        ListError::Lock(err)
    }
}

impl From<alloc::collections::TryReserveError> for ListError {
    fn from(_: alloc::collections::TryReserveError) -> Self {
        ListError::OutOfMemory
    }
}
