//! # Locked Linked List
//!
//! A singly linked list whose node chain is guarded by a single list-wide
//! lock.
//!
//! ## Core Components
//!
//! - [`LockedList`]: the container, generic over element type, hooks and lock backend.
//! - [`ValueHooks`]: how values are copied in and out, and how nested resources are released.
//! - [`CloneHooks`] and [`FnHooks`]: the default strategy and a closure-backed one.
//! - [`SpinList`], [`TicketList`] and `StdList`: the list with a given lock backend.
//!
//! ## Locking
//!
//! `add`, `remove`, `get`, `update` and `length` each take the lock once.
//! `remove` runs the dealloc hook after releasing it, so the time the lock is
//! held does not depend on the hook. `destroy` needs `&mut self` and never
//! locks.
//!
//! Lock acquisition blocks without a timeout and cannot be cancelled.
//!
//! # Examples
//!
//! ```
//! use sync_linkedlist::linked_list::{FnHooks, SpinList};
//! use sync_linkedlist::ListError;
//!
//! #[derive(Debug, PartialEq)]
//! struct ByteBuffer {
//!     data: Vec<u8>,
//! }
//!
//! let hooks = FnHooks::new(
//!     |src: &ByteBuffer| -> Result<ByteBuffer, ListError> {
//!         let mut data = Vec::new();
//!         data.try_reserve_exact(src.data.len())?;
//!         data.extend_from_slice(&src.data);
//!         Ok(ByteBuffer { data })
//!     },
//!     |buffer: &mut ByteBuffer| buffer.data = Vec::new(),
//! );
//!
//! let list = SpinList::<_, _>::with_hooks(hooks).unwrap();
//! list.add(&ByteBuffer { data: vec![1, 2, 3, 4] }).unwrap();
//!
//! let mut copy = list.get(0).unwrap();
//! copy.data[0] = 0xff;
//! assert_eq!(list.get(0).unwrap().data, vec![1, 2, 3, 4]);
//! list.release_value(&mut copy).unwrap();
//! ```

mod hooks;
mod locked;
mod node;

#[cfg(test)]
mod tests;

pub use hooks::{CloneHooks, FnHooks, ValueHooks};
#[cfg(feature = "std")]
pub use locked::StdList;
pub use locked::{ListBuilder, LockedList, SpinList, TicketList};
pub use node::NodeChain;

/// The list's hook types and error in one import.
pub mod prelude {
    pub use super::{CloneHooks, FnHooks, LockedList, ValueHooks};
    pub use crate::error::ListError;
}
