use std::cell::UnsafeCell;
use std::cmp::Ordering;
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::{InsertError, ListError};
use crate::list::cursor::{Cursor, Direction};

pub mod cursor;

mod algorithms;

/// Comparison callback deciding precedence between two elements.
///
/// `Ordering::Greater` gives the first argument precedence, `Less` gives
/// it to the second, and `Equal` means no difference. It is shared behind
/// an `Arc` so that copies of a list keep the same configuration.
pub type Comparator<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// Destructor callback invoked whenever the list takes destructive
/// ownership of an element: [`List::delete_at`], [`List::filter`],
/// [`List::purge`] and dropping the list itself.
///
/// Elements handed back to the caller ([`List::remove_at`], [`List::pop`],
/// [`List::shift`]) never pass through it.
pub type Destructor<T> = Arc<dyn Fn(T) + Send + Sync>;

/// The `List` is a doubly-linked list with owned nodes, guarded by a
/// per-list lock so that every public operation is safe to call from
/// several threads at once.
///
/// Elements are navigated by zero-based index. The chain is walked from
/// the head on every lookup, so index-based access is *O*(*n*); there is
/// no random-access guarantee.
///
/// A list is configured at construction with an optional capacity bound,
/// an optional [`Comparator`] (used by [`find`] and [`sort`]) and a
/// mandatory [`Destructor`] (invoked whenever the list destroys an
/// element in place).
///
/// # Examples
///
/// ```
/// use guarded_list::List;
/// use std::sync::Arc;
///
/// let list = List::new(None, None, Arc::new(drop)).unwrap();
///
/// list.push(1).unwrap();
/// list.push(2).unwrap();
/// list.unshift(0).unwrap();
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.pop(), Some(2));
/// assert_eq!(list.shift(), Some(0));
/// ```
///
/// [`find`]: List::find
/// [`sort`]: List::sort
pub struct List<T> {
    inner: UnsafeCell<RawList<T>>,
    /// Guards every public operation. Cursors intentionally bypass it,
    /// see [`List::cursor`].
    lock: Mutex<()>,
}

pub(crate) struct Node<T> {
    pub(crate) next: Option<NonNull<Node<T>>>,
    pub(crate) prev: Option<NonNull<Node<T>>>,
    pub(crate) element: T,
}

/// The unlocked core of a list: the chain, the length counter and the
/// configuration. All real work happens here, always under the list lock
/// held by the public wrappers in [`List`] — nothing on `RawList` takes
/// the lock itself, so no internal path can deadlock on it.
pub(crate) struct RawList<T> {
    pub(crate) head: Option<NonNull<Node<T>>>,
    pub(crate) len: usize,
    pub(crate) max_len: Option<usize>,
    pub(crate) cmp: Option<Comparator<T>>,
    dtor: Destructor<T>,
    _marker: PhantomData<Box<Node<T>>>,
}

impl<T> Node<T> {
    /// Create a detached node with given element.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node {
            next: None,
            prev: None,
            element,
        })))
    }
}

impl<T> RawList<T> {
    fn new(max_len: Option<usize>, cmp: Option<Comparator<T>>, dtor: Destructor<T>) -> Self {
        Self {
            head: None,
            len: 0,
            max_len,
            cmp,
            dtor,
            _marker: PhantomData,
        }
    }

    /// Hand `element` to the configured destructor.
    pub(crate) fn destroy(&self, element: T) {
        (self.dtor)(element);
    }

    pub(crate) fn duplicate_config(&self) -> Self {
        Self::new(self.max_len, self.cmp.clone(), self.dtor.clone())
    }

    /// Returns the node at zero-based index `at`, walking from the head.
    ///
    /// `None` if `at >= len`, or if the chain dead-ends before `at` —
    /// the caller decides whether that is normal absence or corruption.
    ///
    /// # Complexity
    ///
    /// *O*(`at`). This walk is the dominant cost center of the whole
    /// structure.
    pub(crate) fn node_at(&self, at: usize) -> Option<NonNull<Node<T>>> {
        if at >= self.len {
            return None;
        }
        let mut current = self.head;
        for _ in 0..at {
            // SAFETY: `current` came from the chain, which only holds
            // live nodes.
            current = current.and_then(|node| unsafe { node.as_ref().next });
        }
        current
    }

    /// The last node of the chain, located by walking from the head.
    pub(crate) fn back_node(&self) -> Option<NonNull<Node<T>>> {
        self.node_at(self.len.checked_sub(1)?)
    }

    /// Splice a freshly allocated node holding `element` into position
    /// `at` (`0..=len`).
    ///
    /// Bounds and capacity are checked before anything is allocated, so a
    /// rejected insertion leaves the chain untouched and hands the
    /// element back inside the error.
    pub(crate) fn insert(&mut self, element: T, at: usize) -> Result<(), InsertError<T>> {
        if at > self.len {
            return Err(InsertError {
                value: element,
                kind: ListError::InvalidParam,
            });
        }
        if let Some(max) = self.max_len {
            if self.len >= max {
                return Err(InsertError {
                    value: element,
                    kind: ListError::ExceedLimit,
                });
            }
        }
        if at == 0 {
            let mut node = Node::new_detached(element);
            // SAFETY: `node` is fresh and `head`, when present, is a live
            // node of this chain.
            unsafe {
                node.as_mut().next = self.head;
                if let Some(mut front) = self.head {
                    front.as_mut().prev = Some(node);
                }
            }
            self.head = Some(node);
        } else {
            // `1 <= at <= len`, so the predecessor exists in a well-formed
            // chain; a dead end here means corruption and nothing gets
            // spliced.
            let mut before = match self.node_at(at - 1) {
                Some(node) => node,
                None => {
                    return Err(InsertError {
                        value: element,
                        kind: ListError::BadEntry,
                    })
                }
            };
            let mut node = Node::new_detached(element);
            // SAFETY: `before` belongs to this chain and `node` is fresh.
            // The old successor of `before` (`None` when appending) ends
            // up on `node.next`, keeping the chain connected.
            unsafe {
                let after = before.as_ref().next;
                node.as_mut().prev = Some(before);
                node.as_mut().next = after;
                before.as_mut().next = Some(node);
                if let Some(mut after) = after {
                    after.as_mut().prev = Some(node);
                }
            }
        }
        self.len += 1;
        Ok(())
    }

    /// Unlink `node`, patch its neighbors, fix the head if needed, free
    /// the node shell and return the element it held.
    ///
    /// It is unsafe because it does not check whether `node` belongs to
    /// this chain. Passing a foreign node makes the list ill-formed.
    pub(crate) unsafe fn remove_node(&mut self, node: NonNull<Node<T>>) -> T {
        let boxed = Box::from_raw(node.as_ptr());
        if let Some(mut before) = boxed.prev {
            before.as_mut().next = boxed.next;
        }
        if let Some(mut after) = boxed.next {
            after.as_mut().prev = boxed.prev;
        }
        if self.head == Some(node) {
            self.head = boxed.next;
        }
        self.len -= 1;
        boxed.element
    }

    /// Detach and return the element at `at`, or `None` when out of
    /// range.
    pub(crate) fn remove_at(&mut self, at: usize) -> Option<T> {
        let node = self.node_at(at)?;
        // SAFETY: `node_at` only yields nodes of this chain.
        Some(unsafe { self.remove_node(node) })
    }

    /// Exchange the payloads of two nodes in place. Node identity stays
    /// fixed, so no relinking happens; sort and reverse are built on
    /// this.
    ///
    /// It is unsafe because both pointers must be live nodes of the same
    /// chain.
    pub(crate) unsafe fn swap_elements(a: NonNull<Node<T>>, b: NonNull<Node<T>>) {
        if a != b {
            std::ptr::swap(&mut (*a.as_ptr()).element, &mut (*b.as_ptr()).element);
        }
    }

    /// Detach and destroy every element, leaving an empty, still usable
    /// chain.
    pub(crate) fn purge(&mut self) {
        while let Some(element) = self.remove_at(0) {
            self.destroy(element);
        }
    }
}

impl<T> Drop for RawList<T> {
    fn drop(&mut self) {
        self.purge();
    }
}

// private methods
impl<T> List<T> {
    pub(crate) fn from_raw(raw: RawList<T>) -> Self {
        Self {
            inner: UnsafeCell::new(raw),
            lock: Mutex::new(()),
        }
    }

    /// Run `f` on the unlocked core while holding the list lock.
    ///
    /// The guard is released on every exit path. A poisoned lock is
    /// re-entered (`PoisonError::into_inner`) — the library never
    /// panics, so poisoning can only come from a caller-supplied
    /// callback, and the chain itself stays well-formed around callback
    /// invocations. Must not be nested.
    pub(crate) fn with_inner<R>(&self, f: impl FnOnce(&mut RawList<T>) -> R) -> R {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        // SAFETY: the list lock is held for the whole call, so this is
        // the only live reference into the chain.
        f(unsafe { &mut *self.inner.get() })
    }

    /// Read the unlocked core without taking the list lock.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that no list operation runs concurrently
    /// for as long as the returned reference is in use.
    pub(crate) unsafe fn raw_unlocked(&self) -> &RawList<T> {
        &*self.inner.get()
    }
}

impl<T> List<T> {
    /// Create an empty `List`.
    ///
    /// - `max_len`: `None` for an unbounded list, `Some(n)` to cap the
    ///   length at `n`. `Some(0)` is rejected with
    ///   [`ListError::InvalidParam`] — a list that cannot hold a single
    ///   node is a caller mistake, not a configuration.
    /// - `cmp`: optional comparator used by [`find`] and [`sort`]. When
    ///   absent, every element has equal precedence: `find` matches the
    ///   first entry and `sort` has nothing to do.
    /// - `dtor`: the destructor invoked whenever the list destroys an
    ///   element in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use guarded_list::{List, ListError};
    /// use std::sync::Arc;
    ///
    /// let list: List<u32> = List::new(Some(10), None, Arc::new(drop)).unwrap();
    /// assert_eq!(list.len(), 0);
    ///
    /// let err = List::<u32>::new(Some(0), None, Arc::new(drop)).unwrap_err();
    /// assert_eq!(err, ListError::InvalidParam);
    /// ```
    ///
    /// [`find`]: List::find
    /// [`sort`]: List::sort
    pub fn new(
        max_len: Option<usize>,
        cmp: Option<Comparator<T>>,
        dtor: Destructor<T>,
    ) -> Result<Self, ListError> {
        if max_len == Some(0) {
            return Err(ListError::InvalidParam);
        }
        Ok(Self::from_raw(RawList::new(max_len, cmp, dtor)))
    }

    /// Returns the number of elements in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time — the counter is
    /// maintained by every mutation.
    pub fn len(&self) -> usize {
        self.with_inner(|raw| raw.len)
    }

    /// Returns `true` if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Apply `with` to the element at `at` under the list lock and return
    /// its result, or `None` when `at` is out of range.
    ///
    /// A plain reference cannot be returned here because it would outlive
    /// the lock guard; the closure runs while the lock is held.
    ///
    /// # Examples
    ///
    /// ```
    /// use guarded_list::List;
    /// use std::sync::Arc;
    ///
    /// let list = List::new(None, None, Arc::new(drop)).unwrap();
    /// list.push(7).unwrap();
    ///
    /// assert_eq!(list.at(0, |n| n * 10), Some(70));
    /// assert_eq!(list.at(1, |n| n * 10), None);
    /// ```
    pub fn at<R, F>(&self, at: usize, with: F) -> Option<R>
    where
        F: FnOnce(&T) -> R,
    {
        self.with_inner(|raw| {
            let node = raw.node_at(at)?;
            // SAFETY: the node belongs to the chain and the lock is held.
            Some(with(unsafe { &node.as_ref().element }))
        })
    }

    /// Insert `value` at position `at` (`0..=len`).
    ///
    /// Fails with [`ListError::InvalidParam`] when `at > len` and with
    /// [`ListError::ExceedLimit`] when the list is bounded and full. A
    /// failed insertion does not mutate the list, and the rejected value
    /// rides back to the caller inside the error.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(`at`) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use guarded_list::{List, ListError};
    /// use std::sync::Arc;
    ///
    /// let list = List::new(None, None, Arc::new(drop)).unwrap();
    /// list.insert('b', 0).unwrap();
    /// list.insert('a', 0).unwrap();
    /// list.insert('c', 2).unwrap();
    ///
    /// assert_eq!(list.pop(), Some('c'));
    ///
    /// let err = list.insert('x', 9).unwrap_err();
    /// assert_eq!(err.kind(), ListError::InvalidParam);
    /// assert_eq!(err.into_inner(), 'x');
    /// ```
    pub fn insert(&self, value: T, at: usize) -> Result<(), InsertError<T>> {
        self.with_inner(|raw| raw.insert(value, at))
    }

    /// Append `value` to the end of the list. Equivalent to inserting at
    /// `len`.
    pub fn push(&self, value: T) -> Result<(), InsertError<T>> {
        self.with_inner(|raw| raw.insert(value, raw.len))
    }

    /// Prepend `value` to the beginning of the list. Equivalent to
    /// inserting at `0`.
    pub fn unshift(&self, value: T) -> Result<(), InsertError<T>> {
        self.with_inner(|raw| raw.insert(value, 0))
    }

    /// Detach and return the element at `at` without destroying it, or
    /// `None` when `at` is out of range. Ownership transfers back to the
    /// caller; the destructor is not involved.
    pub fn remove_at(&self, at: usize) -> Option<T> {
        self.with_inner(|raw| raw.remove_at(at))
    }

    /// Remove the element at `at` and hand it to the destructor. A no-op
    /// when `at` is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use guarded_list::List;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use std::sync::Arc;
    ///
    /// let destroyed = Arc::new(AtomicUsize::new(0));
    /// let counter = Arc::clone(&destroyed);
    /// let list = List::new(None, None, Arc::new(move |_: u32| {
    ///     counter.fetch_add(1, Ordering::SeqCst);
    /// }))
    /// .unwrap();
    ///
    /// list.push(1).unwrap();
    /// list.delete_at(0);
    /// assert_eq!(destroyed.load(Ordering::SeqCst), 1);
    /// assert!(list.is_empty());
    /// ```
    pub fn delete_at(&self, at: usize) {
        self.with_inner(|raw| {
            if let Some(element) = raw.remove_at(at) {
                raw.destroy(element);
            }
        })
    }

    /// Detach and return the last element, or `None` on an empty list.
    ///
    /// # Examples
    ///
    /// ```
    /// use guarded_list::List;
    /// use std::sync::Arc;
    ///
    /// let list = List::new(None, None, Arc::new(drop)).unwrap();
    /// assert_eq!(list.pop(), None);
    ///
    /// list.push(1).unwrap();
    /// list.push(3).unwrap();
    /// assert_eq!(list.pop(), Some(3));
    /// assert_eq!(list.pop(), Some(1));
    /// ```
    pub fn pop(&self) -> Option<T> {
        self.with_inner(|raw| {
            let last = raw.len.checked_sub(1)?;
            raw.remove_at(last)
        })
    }

    /// Detach and return the first element, or `None` on an empty list.
    ///
    /// # Examples
    ///
    /// ```
    /// use guarded_list::List;
    /// use std::sync::Arc;
    ///
    /// let list = List::new(None, None, Arc::new(drop)).unwrap();
    /// list.push(1).unwrap();
    /// list.push(3).unwrap();
    /// assert_eq!(list.shift(), Some(1));
    /// assert_eq!(list.shift(), Some(3));
    /// assert_eq!(list.shift(), None);
    /// ```
    pub fn shift(&self) -> Option<T> {
        self.with_inner(|raw| raw.remove_at(0))
    }

    /// Detach and destroy every element via the destructor. The list
    /// stays empty and usable afterwards.
    pub fn purge(&self) {
        self.with_inner(|raw| raw.purge())
    }

    /// Provides a cursor over the list, fixed to the given traversal
    /// direction. See [`Cursor`] for the stepping protocol.
    ///
    /// # Safety
    ///
    /// The cursor reads node links **without taking the list lock**. The
    /// caller must guarantee that no operation mutates this list — from
    /// any thread — for as long as the cursor, or any reference it has
    /// yielded, is alive. There is no iterator-vs-mutation ordering
    /// guarantee; violating this is undefined behavior.
    ///
    /// # Examples
    ///
    /// ```
    /// use guarded_list::{Direction, List};
    /// use std::sync::Arc;
    ///
    /// let list = List::new(None, None, Arc::new(drop)).unwrap();
    /// list.push(1).unwrap();
    /// list.push(2).unwrap();
    ///
    /// // SAFETY: the list is not mutated while the cursor is alive.
    /// let mut cursor = unsafe { list.cursor(Direction::Forward) };
    /// assert_eq!(cursor.next(), Some(&1));
    /// assert_eq!(cursor.next(), Some(&2));
    /// assert_eq!(cursor.next(), None);
    /// ```
    pub unsafe fn cursor(&self, direction: Direction) -> Cursor<'_, T> {
        Cursor::new(self, direction)
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.with_inner(|raw| {
            let mut entries = f.debug_list();
            let mut current = raw.head;
            while let Some(node) = current {
                // SAFETY: the lock is held and the node belongs to the
                // chain.
                let node = unsafe { node.as_ref() };
                entries.entry(&node.element);
                current = node.next;
            }
            entries.finish()
        })
    }
}

// The lock serializes every public operation, so sharing a `List` across
// threads imposes exactly the bounds `Mutex<RawList<T>>` would: the
// elements (and the callbacks, by construction) must be sendable.
unsafe impl<T: Send> Send for List<T> {}

unsafe impl<T: Send> Sync for List<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

    fn ordered(max_len: Option<usize>) -> List<i32> {
        List::new(
            max_len,
            Some(Arc::new(|a: &i32, b: &i32| a.cmp(b))),
            Arc::new(drop),
        )
        .unwrap()
    }

    fn counting(counter: &Arc<AtomicUsize>) -> Destructor<i32> {
        let counter = Arc::clone(counter);
        Arc::new(move |_| {
            counter.fetch_add(1, AtomicOrdering::SeqCst);
        })
    }

    fn fill(list: &List<i32>, values: &[i32]) {
        for &value in values {
            list.push(value).unwrap();
        }
    }

    fn drain(list: &List<i32>) -> Vec<i32> {
        let mut shifted = Vec::new();
        while let Some(value) = list.shift() {
            shifted.push(value);
        }
        shifted
    }

    #[test]
    fn list_create() {
        let list = ordered(Some(10));
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        // a comparator is optional
        assert!(List::<i32>::new(Some(10), None, Arc::new(drop)).is_ok());

        // a zero bound cannot hold a single node
        assert_eq!(
            List::<i32>::new(Some(0), None, Arc::new(drop)).unwrap_err(),
            ListError::InvalidParam
        );
    }

    #[test]
    fn list_push_pop_is_lifo() {
        let list = ordered(None);
        fill(&list, &[1, 2, 3, 4]);

        assert_eq!(list.pop(), Some(4));
        assert_eq!(list.pop(), Some(3));
        assert_eq!(list.pop(), Some(2));
        assert_eq!(list.pop(), Some(1));
        assert_eq!(list.pop(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn list_push_shift_is_fifo() {
        let list = ordered(None);
        fill(&list, &[1, 2, 3, 4]);
        assert_eq!(drain(&list), vec![1, 2, 3, 4]);
        assert_eq!(list.shift(), None);
    }

    #[test]
    fn list_insert_positions() {
        let list = ordered(None);
        list.insert(1, 0).unwrap(); // first node
        list.insert(3, 1).unwrap(); // back
        list.insert(0, 0).unwrap(); // front
        list.insert(2, 2).unwrap(); // middle
        assert_eq!(drain(&list), vec![0, 1, 2, 3]);
    }

    #[test]
    fn list_insert_rejects_without_mutation() {
        let list = ordered(Some(1));

        let err = list.insert(7, 1).unwrap_err();
        assert_eq!(err.kind(), ListError::InvalidParam);
        assert_eq!(err.into_inner(), 7);
        assert_eq!(list.len(), 0);

        list.push(1).unwrap();

        let err = list.push(2).unwrap_err();
        assert_eq!(err.kind(), ListError::ExceedLimit);
        assert_eq!(err.into_inner(), 2);
        assert_eq!(list.len(), 1);

        assert_eq!(list.pop(), Some(1));
    }

    #[test]
    fn list_capacity_of_one() {
        let list = ordered(Some(1));
        assert!(list.push(255).is_ok());
        assert_eq!(list.push(127).unwrap_err().kind(), ListError::ExceedLimit);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn list_at_reads_without_mutation() {
        let list = ordered(None);
        fill(&list, &[10, 20, 30]);

        assert_eq!(list.at(0, |n| *n), Some(10));
        assert_eq!(list.at(2, |n| *n), Some(30));
        assert_eq!(list.at(3, |n| *n), None);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn list_remove_at_returns_without_destroying() {
        let destroyed = Arc::new(AtomicUsize::new(0));
        let list = List::new(None, None, counting(&destroyed)).unwrap();
        fill(&list, &[1, 2, 3]);

        assert_eq!(list.remove_at(1), Some(2));
        assert_eq!(destroyed.load(AtomicOrdering::SeqCst), 0);
        assert_eq!(list.remove_at(5), None);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn list_delete_at_destroys_exactly_once() {
        let destroyed = Arc::new(AtomicUsize::new(0));
        let list = List::new(None, None, counting(&destroyed)).unwrap();
        fill(&list, &[1, 2, 3]);

        list.delete_at(1);
        assert_eq!(destroyed.load(AtomicOrdering::SeqCst), 1);
        assert_eq!(list.len(), 2);

        // out of range is a no-op
        list.delete_at(9);
        assert_eq!(destroyed.load(AtomicOrdering::SeqCst), 1);
    }

    #[test]
    fn list_purge_destroys_all_and_stays_usable() {
        let destroyed = Arc::new(AtomicUsize::new(0));
        let list = List::new(None, None, counting(&destroyed)).unwrap();
        fill(&list, &[1, 2, 3]);

        list.purge();
        assert_eq!(destroyed.load(AtomicOrdering::SeqCst), 3);
        assert!(list.is_empty());

        list.push(4).unwrap();
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn list_drop_destroys_remaining_elements() {
        let destroyed = Arc::new(AtomicUsize::new(0));
        let list = List::new(None, None, counting(&destroyed)).unwrap();
        fill(&list, &[1, 2, 3]);

        assert_eq!(list.pop(), Some(3));
        drop(list);
        // the popped element went back to the caller, the other two were
        // destroyed by the drop
        assert_eq!(destroyed.load(AtomicOrdering::SeqCst), 2);
    }

    #[test]
    fn list_length_tracks_every_mutation() {
        let list = ordered(Some(8));
        assert_eq!(list.len(), 0);

        list.push(1).unwrap();
        assert_eq!(list.len(), 1);
        list.unshift(0).unwrap();
        assert_eq!(list.len(), 2);
        list.insert(2, 1).unwrap();
        assert_eq!(list.len(), 3);

        list.pop();
        assert_eq!(list.len(), 2);
        list.shift();
        assert_eq!(list.len(), 1);
        list.delete_at(0);
        assert_eq!(list.len(), 0);

        // the counter always matches the walk
        fill(&list, &[5, 6, 7]);
        assert_eq!(list.verify(), Ok(()));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn list_debug_output() {
        let list = ordered(None);
        fill(&list, &[1, 2, 3]);
        assert_eq!(format!("{:?}", list), "[1, 2, 3]");
    }

    #[test]
    fn list_concurrent_pushes_all_arrive() {
        const WORKERS: i32 = 4;
        const PER_WORKER: i32 = 100;

        let list = ordered(None);
        crossbeam::scope(|scope| {
            for worker in 0..WORKERS {
                let list = &list;
                scope.spawn(move |_| {
                    for i in 0..PER_WORKER {
                        list.push(worker * PER_WORKER + i).unwrap();
                    }
                });
            }
        })
        .unwrap();

        assert_eq!(list.len(), (WORKERS * PER_WORKER) as usize);
        assert_eq!(list.verify(), Ok(()));

        let mut values = drain(&list);
        values.sort_unstable();
        assert_eq!(values, (0..WORKERS * PER_WORKER).collect::<Vec<_>>());
    }

    #[test]
    fn list_concurrent_push_and_pop_conserves_elements() {
        let list = ordered(None);
        let popped = AtomicUsize::new(0);

        crossbeam::scope(|scope| {
            for _ in 0..2 {
                let list = &list;
                scope.spawn(move |_| {
                    for i in 0..200 {
                        list.push(i).unwrap();
                    }
                });
            }
            for _ in 0..2 {
                let (list, popped) = (&list, &popped);
                scope.spawn(move |_| {
                    for _ in 0..150 {
                        if list.pop().is_some() {
                            popped.fetch_add(1, AtomicOrdering::SeqCst);
                        }
                    }
                });
            }
        })
        .unwrap();

        assert_eq!(list.len() + popped.load(AtomicOrdering::SeqCst), 400);
        assert_eq!(list.verify(), Ok(()));
    }
}
