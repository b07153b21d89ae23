use core::fmt;
use core::marker::PhantomData;
use core::mem::size_of;

use crossbeam_utils::CachePadded;
use spin::mutex::TicketMutex;

use crate::error::ListError;
use crate::lock::{RawLock, release};

use super::hooks::{CloneHooks, ValueHooks};
use super::node::{Node, NodeChain};

/// A singly linked list guarded by one list-wide lock.
///
/// Values are copied in by [`add`](Self::add) and [`update`](Self::update)
/// and copied out by [`get`](Self::get), always through the list's
/// [`ValueHooks`]. Indices are 0-based; an index is valid iff it is smaller
/// than the current [`length`](Self::length).
///
/// # Type Parameters
/// * `T` - The element type
/// * `H` - The copy/dealloc strategy
/// * `L` - The lock backend guarding the node chain
pub struct LockedList<T, H = CloneHooks, L = spin::Mutex<NodeChain<T>>>
where
    H: ValueHooks<T>,
    L: RawLock<NodeChain<T>>,
{
    /// `None` once the list is destroyed
    lock: Option<CachePadded<L>>,
    /// `None` once the list is destroyed; the authoritative readiness check
    hooks: Option<H>,
    /// Elements are only reached through the lock, so `T` need not be `Sync`
    _marker: PhantomData<fn() -> T>,
}

/// A list guarded by a [`spin::Mutex`].
pub type SpinList<T, H = CloneHooks> = LockedList<T, H, spin::Mutex<NodeChain<T>>>;

/// A list guarded by a FIFO-fair [`TicketMutex`].
pub type TicketList<T, H = CloneHooks> = LockedList<T, H, TicketMutex<NodeChain<T>>>;

/// A list guarded by the host's native [`std::sync::Mutex`].
#[cfg(feature = "std")]
pub type StdList<T, H = CloneHooks> = LockedList<T, H, std::sync::Mutex<NodeChain<T>>>;

impl<T, H, L> LockedList<T, H, L>
where
    H: ValueHooks<T> + Default,
    L: RawLock<NodeChain<T>>,
{
    /// Create an empty list using the default hooks.
    ///
    /// # Errors
    /// * [`ListError::InvalidArgument`] - `T` is zero-sized
    /// * [`ListError::Lock`] - the lock could not be constructed
    pub fn new() -> Result<Self, ListError> {
        Self::with_hooks(H::default())
    }
}

impl<T, H, L> LockedList<T, H, L>
where
    H: ValueHooks<T>,
    L: RawLock<NodeChain<T>>,
{
    /// Create an empty list that moves values through `hooks`.
    ///
    /// # Errors
    /// * [`ListError::InvalidArgument`] - `T` is zero-sized
    /// * [`ListError::Lock`] - the lock could not be constructed
    pub fn with_hooks(hooks: H) -> Result<Self, ListError> {
        if size_of::<T>() == 0 {
            return Err(ListError::InvalidArgument);
        }
        let lock = L::initialize(NodeChain::new())?;
        Ok(Self {
            lock: Some(CachePadded::new(lock)),
            hooks: Some(hooks),
            _marker: PhantomData,
        })
    }

    /// Size in bytes of every element. Still reported after [`destroy`](Self::destroy).
    pub fn element_size(&self) -> usize {
        size_of::<T>()
    }

    /// Check whether the list can still be used.
    pub fn is_initialized(&self) -> bool {
        self.hooks.is_some() && self.lock.is_some()
    }

    fn parts(&self) -> Result<(&L, &H), ListError> {
        match (&self.lock, &self.hooks) {
            (Some(lock), Some(hooks)) => Ok((&**lock, hooks)),
            _ => Err(ListError::InvalidArgument),
        }
    }

    /// Append a copy of `value` after the last element.
    ///
    /// The copy is made before the lock is taken. If the lock cannot be
    /// acquired the copy is released again and the list is left unchanged.
    ///
    /// # Errors
    /// * [`ListError::InvalidArgument`] - the list was destroyed
    /// * [`ListError::OutOfMemory`] - the copy hook could not allocate
    /// * [`ListError::Lock`] - the lock could not be acquired
    pub fn add(&self, value: &T) -> Result<(), ListError> {
        let (lock, hooks) = self.parts()?;
        let mut node = Node::new(hooks.copy(value)?);

        let mut chain = match lock.acquire() {
            Ok(chain) => chain,
            Err(err) => {
                log::warn!("add: failed to acquire list lock: {err}");
                hooks.dealloc(&mut node.value);
                return Err(err.into());
            }
        };
        chain.append(node);
        release(chain);

        log::trace!("add: appended element");
        Ok(())
    }

    /// Remove the element at `index`, shifting later elements down by one.
    ///
    /// The node is unlinked while the lock is held; the dealloc hook runs and
    /// the node is freed after the lock has been released.
    ///
    /// # Errors
    /// * [`ListError::InvalidArgument`] - the list was destroyed
    /// * [`ListError::OutOfRange`] - `index` is not smaller than the length
    /// * [`ListError::Lock`] - the lock could not be acquired
    pub fn remove(&self, index: usize) -> Result<(), ListError> {
        let (lock, hooks) = self.parts()?;

        let mut chain = lock.acquire()?;
        let detached = chain.unlink(index);
        release(chain);

        let mut node = detached.ok_or(ListError::OutOfRange)?;
        hooks.dealloc(&mut node.value);
        drop(node);

        log::trace!("remove: unlinked element {index}");
        Ok(())
    }

    /// Get a copy of the element at `index`.
    ///
    /// The caller owns the returned copy. Element types with nested resources
    /// should hand it to [`release_value`](Self::release_value) when done.
    ///
    /// # Errors
    /// * [`ListError::InvalidArgument`] - the list was destroyed
    /// * [`ListError::OutOfRange`] - `index` is not smaller than the length
    /// * [`ListError::OutOfMemory`] - the copy hook could not allocate
    /// * [`ListError::Lock`] - the lock could not be acquired
    pub fn get(&self, index: usize) -> Result<T, ListError> {
        let (lock, hooks) = self.parts()?;

        let chain = lock.acquire()?;
        let node = chain.node(index).ok_or(ListError::OutOfRange)?;
        hooks.copy(&node.value)
    }

    /// Replace the element at `index` with a copy of `value`.
    ///
    /// The node keeps its place and allocation. Both hooks run under the lock
    /// in this order: `copy` on `value` first, then `dealloc` on the old
    /// element, which is then overwritten. A failing copy hook therefore
    /// leaves the old element untouched and no dealloc runs.
    ///
    /// # Errors
    /// * [`ListError::InvalidArgument`] - the list was destroyed
    /// * [`ListError::OutOfRange`] - `index` is not smaller than the length
    /// * [`ListError::OutOfMemory`] - the copy hook could not allocate
    /// * [`ListError::Lock`] - the lock could not be acquired
    pub fn update(&self, index: usize, value: &T) -> Result<(), ListError> {
        let (lock, hooks) = self.parts()?;

        let mut chain = lock.acquire()?;
        let node = chain.node_mut(index).ok_or(ListError::OutOfRange)?;
        let replacement = hooks.copy(value)?;
        hooks.dealloc(&mut node.value);
        node.value = replacement;

        log::trace!("update: replaced element {index}");
        Ok(())
    }

    /// Count the elements by walking the whole chain.
    ///
    /// # Errors
    /// * [`ListError::InvalidArgument`] - the list was destroyed
    /// * [`ListError::Lock`] - the lock could not be acquired
    pub fn length(&self) -> Result<usize, ListError> {
        let (lock, _) = self.parts()?;
        let chain = lock.acquire()?;
        Ok(chain.count())
    }

    /// Check whether the list holds no elements.
    ///
    /// # Errors
    /// * [`ListError::InvalidArgument`] - the list was destroyed
    /// * [`ListError::Lock`] - the lock could not be acquired
    pub fn is_empty(&self) -> Result<bool, ListError> {
        let (lock, _) = self.parts()?;
        let chain = lock.acquire()?;
        Ok(chain.is_empty())
    }

    /// Run the list's dealloc hook on a caller-owned value, typically a copy
    /// obtained from [`get`](Self::get).
    ///
    /// # Errors
    /// * [`ListError::InvalidArgument`] - the list was destroyed
    pub fn release_value(&self, value: &mut T) -> Result<(), ListError> {
        let (_, hooks) = self.parts()?;
        hooks.dealloc(value);
        Ok(())
    }

    /// Free every element and tear the lock down.
    ///
    /// Calling it again is a no-op. Afterwards every other operation fails
    /// with [`ListError::InvalidArgument`]. The unique borrow guarantees that
    /// no other operation is in flight, so the lock is not acquired.
    pub fn destroy(&mut self) {
        let Some(lock) = self.lock.take() else {
            self.hooks = None;
            return;
        };
        let mut chain = CachePadded::into_inner(lock).destroy();

        let mut freed = 0usize;
        while let Some(mut node) = chain.pop_front() {
            if let Some(hooks) = &self.hooks {
                hooks.dealloc(&mut node.value);
            }
            freed += 1;
        }
        self.hooks = None;

        log::debug!("destroy: freed {freed} elements");
    }
}

impl<T, H, L> Drop for LockedList<T, H, L>
where
    H: ValueHooks<T>,
    L: RawLock<NodeChain<T>>,
{
    fn drop(&mut self) {
        self.destroy();
    }
}

impl<T, H, L> fmt::Debug for LockedList<T, H, L>
where
    H: ValueHooks<T>,
    L: RawLock<NodeChain<T>>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LockedList")
            .field("element_size", &self.element_size())
            .field("initialized", &self.is_initialized())
            .finish_non_exhaustive()
    }
}

/// Builder for a [`LockedList`] with custom hooks or lock backend.
pub struct ListBuilder<H = CloneHooks> {
    hooks: H,
}

impl Default for ListBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ListBuilder {
    /// Create a builder with the default [`CloneHooks`].
    pub fn new() -> Self {
        Self { hooks: CloneHooks }
    }
}

impl<H> ListBuilder<H> {
    /// Set the hooks values are copied and released with.
    ///
    /// # Arguments
    /// * `hooks` - The copy/dealloc strategy
    ///
    /// # Returns
    /// The builder instance for method chaining
    pub fn with_hooks<H2>(self, hooks: H2) -> ListBuilder<H2> {
        ListBuilder { hooks }
    }

    /// Build the list with the lock backend `L`.
    ///
    /// # Errors
    /// See [`LockedList::with_hooks`].
    pub fn build<T, L>(self) -> Result<LockedList<T, H, L>, ListError>
    where
        H: ValueHooks<T>,
        L: RawLock<NodeChain<T>>,
    {
        LockedList::with_hooks(self.hooks)
    }
}
