use spin::Mutex;
use spin::mutex::{TicketMutex, TicketMutexGuard};

use super::RawLock;
use crate::error::LockError;

impl<T> RawLock<T> for Mutex<T> {
    type Guard<'a>
        = spin::MutexGuard<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn initialize(value: T) -> Result<Self, LockError> {
        Ok(Mutex::new(value))
    }

    #[inline]
    fn acquire(&self) -> Result<Self::Guard<'_>, LockError> {
        Ok(self.lock())
    }

    fn destroy(self) -> T {
        self.into_inner()
    }
}

impl<T> RawLock<T> for TicketMutex<T> {
    type Guard<'a>
        = TicketMutexGuard<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn initialize(value: T) -> Result<Self, LockError> {
        Ok(TicketMutex::new(value))
    }

    #[inline]
    fn acquire(&self) -> Result<Self::Guard<'_>, LockError> {
        Ok(self.lock())
    }

    fn destroy(self) -> T {
        self.into_inner()
    }
}
