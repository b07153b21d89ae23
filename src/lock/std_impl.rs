use std::sync::{Mutex, MutexGuard};

use super::RawLock;
use crate::error::LockError;

impl<T> RawLock<T> for Mutex<T> {
    type Guard<'a>
        = MutexGuard<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn initialize(value: T) -> Result<Self, LockError> {
        Ok(Mutex::new(value))
    }

    fn acquire(&self) -> Result<Self::Guard<'_>, LockError> {
        self.lock().map_err(|_| {
            log::warn!("refusing to acquire a poisoned list lock");
            LockError::Poisoned
        })
    }

    // Teardown still has to free whatever the lock protects, poisoned or not.
    fn destroy(self) -> T {
        self.into_inner().unwrap_or_else(|poisoned| {
            log::warn!("destroying a poisoned list lock");
            poisoned.into_inner()
        })
    }
}
