//! A generic, thread-safe singly linked list.
//!
//! Every operation on a [`LockedList`](linked_list::LockedList) is serialized
//! through one list-wide lock. Values move in and out of the list through a
//! pluggable [`ValueHooks`](linked_list::ValueHooks) strategy, so element
//! types that need a deep copy or nested resource release can be stored
//! without aliasing caller memory.
//!
//! ```
//! use sync_linkedlist::linked_list::SpinList;
//!
//! let list = SpinList::<u32>::new().unwrap();
//! list.add(&42).unwrap();
//! list.add(&69).unwrap();
//! assert_eq!(list.length().unwrap(), 2);
//! assert_eq!(list.get(1).unwrap(), 69);
//!
//! list.update(1, &1234).unwrap();
//! list.remove(0).unwrap();
//! assert_eq!(list.get(0).unwrap(), 1234);
//! ```
#![no_std]

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod error;
pub mod linked_list;
pub mod lock;

pub use error::{ListError, LockError};
