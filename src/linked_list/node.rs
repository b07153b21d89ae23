use alloc::boxed::Box;

type Link<T> = Option<Box<Node<T>>>;

/// One element slot of a list.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Box<Self> {
        Box::new(Node { value, next: None })
    }
}

/// The chain of nodes protected by a list's lock.
///
/// Only the list itself can look inside; the type is public so lock backends
/// can be named, e.g. `spin::Mutex<NodeChain<T>>`.
pub struct NodeChain<T> {
    head: Link<T>,
}

impl<T> NodeChain<T> {
    pub(crate) const fn new() -> Self {
        Self { head: None }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Link `node` in after the current last node.
    pub(crate) fn append(&mut self, node: Box<Node<T>>) {
        let mut link = &mut self.head;
        while let Some(current) = link {
            link = &mut current.next;
        }
        *link = Some(node);
    }

    /// Walk from head to the node at `index`.
    pub(crate) fn node(&self, index: usize) -> Option<&Node<T>> {
        let mut current = self.head.as_deref();
        for _ in 0..index {
            current = current?.next.as_deref();
        }
        current
    }

    pub(crate) fn node_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        let mut current = self.head.as_deref_mut();
        for _ in 0..index {
            current = current?.next.as_deref_mut();
        }
        current
    }

    /// Unlink the node at `index` and hand it back detached.
    ///
    /// A walk that runs off the end of the chain leaves every node in place.
    pub(crate) fn unlink(&mut self, index: usize) -> Option<Box<Node<T>>> {
        let mut link = &mut self.head;
        for _ in 0..index {
            link = &mut link.as_mut()?.next;
        }
        let mut node = link.take()?;
        *link = node.next.take();
        Some(node)
    }

    /// Number of reachable nodes.
    pub(crate) fn count(&self) -> usize {
        let mut count = 0;
        let mut current = self.head.as_deref();
        while let Some(node) = current {
            count += 1;
            current = node.next.as_deref();
        }
        count
    }

    /// Detach the first node, if any.
    pub(crate) fn pop_front(&mut self) -> Option<Box<Node<T>>> {
        let mut node = self.head.take()?;
        self.head = node.next.take();
        Some(node)
    }
}

impl<T> Drop for NodeChain<T> {
    // Unlink one node at a time so long chains don't recurse in `Box::drop`.
    fn drop(&mut self) {
        while self.pop_front().is_some() {}
    }
}
