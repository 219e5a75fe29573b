use std::cmp::Ordering;

use crate::error::ListError;
use crate::list::List;

mod sort;

impl<T> List<T> {
    /// Find the first element matching `search` under the list
    /// comparator and return its index.
    ///
    /// An element matches when the comparator reports
    /// [`Ordering::Equal`] between `search` and it. Without a
    /// comparator every element has equal precedence, so the first
    /// entry matches.
    ///
    /// Returns [`ListError::NotFound`] when the scan exhausts the list,
    /// and [`ListError::BadEntry`] when the chain dead-ends before the
    /// recorded length.
    ///
    /// # Examples
    ///
    /// ```
    /// use guarded_list::{List, ListError};
    /// use std::sync::Arc;
    ///
    /// let list = List::new(
    ///     None,
    ///     Some(Arc::new(|a: &i32, b: &i32| a.cmp(b))),
    ///     Arc::new(drop),
    /// )
    /// .unwrap();
    /// for value in [255, 127, 63] {
    ///     list.push(value).unwrap();
    /// }
    ///
    /// assert_eq!(list.find(&127), Ok(1));
    /// assert_eq!(list.find(&99), Err(ListError::NotFound));
    /// ```
    pub fn find(&self, search: &T) -> Result<usize, ListError> {
        self.with_inner(|raw| {
            let mut current = raw.head;
            for index in 0..raw.len {
                let node = match current {
                    Some(node) => node,
                    None => return Err(ListError::BadEntry),
                };
                // SAFETY: the lock is held and the node belongs to the
                // chain.
                let node = unsafe { node.as_ref() };
                let matches = match &raw.cmp {
                    Some(cmp) => cmp(search, &node.element) == Ordering::Equal,
                    None => true,
                };
                if matches {
                    return Ok(index);
                }
                current = node.next;
            }
            Err(ListError::NotFound)
        })
    }

    /// Returns `true` if any element passes `test`. Short-circuits on the
    /// first pass; `false` on an empty list or a dead-end chain.
    ///
    /// # Examples
    ///
    /// ```
    /// use guarded_list::List;
    /// use std::sync::Arc;
    ///
    /// let list = List::new(None, None, Arc::new(drop)).unwrap();
    /// for value in [1, 2, 3] {
    ///     list.push(value).unwrap();
    /// }
    ///
    /// assert!(list.some(|n| n % 2 == 0));
    /// assert!(!list.some(|n| *n > 3));
    /// ```
    pub fn some<F>(&self, mut test: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.with_inner(|raw| {
            let mut current = raw.head;
            for _ in 0..raw.len {
                let node = match current {
                    Some(node) => node,
                    None => return false,
                };
                // SAFETY: the lock is held and the node belongs to the
                // chain.
                let node = unsafe { node.as_ref() };
                if test(&node.element) {
                    return true;
                }
                current = node.next;
            }
            false
        })
    }

    /// Returns `true` if every element passes `test` — vacuously true on
    /// an empty list. Short-circuits on the first failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use guarded_list::List;
    /// use std::sync::Arc;
    ///
    /// let list = List::new(None, None, Arc::new(drop)).unwrap();
    /// assert!(list.every(|n: &i32| *n > 0));
    ///
    /// for value in [1, 2, 3] {
    ///     list.push(value).unwrap();
    /// }
    /// assert!(list.every(|n| *n > 0));
    /// assert!(!list.every(|n| n % 2 == 0));
    /// ```
    pub fn every<F>(&self, mut test: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.with_inner(|raw| {
            let mut current = raw.head;
            for _ in 0..raw.len {
                if let Some(node) = current {
                    // SAFETY: the lock is held and the node belongs to
                    // the chain.
                    let node = unsafe { node.as_ref() };
                    if !test(&node.element) {
                        return false;
                    }
                    current = node.next;
                }
            }
            true
        })
    }

    /// Apply `action` to every element in order.
    ///
    /// Returns [`ListError::BadEntry`] when the chain is shorter than the
    /// recorded length; the elements before the dead end have been
    /// visited by then.
    pub fn for_each<F>(&self, mut action: F) -> Result<(), ListError>
    where
        F: FnMut(&T),
    {
        self.with_inner(|raw| {
            let mut current = raw.head;
            for _ in 0..raw.len {
                let node = match current {
                    Some(node) => node,
                    None => return Err(ListError::BadEntry),
                };
                // SAFETY: the lock is held and the node belongs to the
                // chain.
                let node = unsafe { node.as_ref() };
                action(&node.element);
                current = node.next;
            }
            Ok(())
        })
    }

    /// Fold the list left to right: `acc = reducer(&element, acc)` for
    /// every element, starting from `initial`.
    ///
    /// # Examples
    ///
    /// ```
    /// use guarded_list::List;
    /// use std::sync::Arc;
    ///
    /// let list = List::new(None, None, Arc::new(drop)).unwrap();
    /// for value in [1, 2, 3] {
    ///     list.push(value).unwrap();
    /// }
    ///
    /// assert_eq!(list.reduce(0, |n, acc| acc + n), 6);
    /// ```
    pub fn reduce<A, F>(&self, initial: A, mut reducer: F) -> A
    where
        F: FnMut(&T, A) -> A,
    {
        self.with_inner(|raw| {
            let mut accumulator = initial;
            let mut current = raw.head;
            for _ in 0..raw.len {
                if let Some(node) = current {
                    // SAFETY: the lock is held and the node belongs to
                    // the chain.
                    let node = unsafe { node.as_ref() };
                    accumulator = reducer(&node.element, accumulator);
                    current = node.next;
                }
            }
            accumulator
        })
    }

    /// Remove and destroy every element failing `keep`, in one pass,
    /// preserving the relative order of the survivors.
    ///
    /// Each removal is atomic: if the chain dead-ends mid-pass
    /// ([`ListError::BadEntry`]), the already-processed prefix is left
    /// valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use guarded_list::List;
    /// use std::sync::Arc;
    ///
    /// let list = List::new(None, None, Arc::new(drop)).unwrap();
    /// for value in [255, 127, 63] {
    ///     list.push(value).unwrap();
    /// }
    ///
    /// list.filter(|n| *n != 255).unwrap();
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.shift(), Some(127));
    /// assert_eq!(list.shift(), Some(63));
    /// ```
    pub fn filter<F>(&self, mut keep: F) -> Result<(), ListError>
    where
        F: FnMut(&T) -> bool,
    {
        self.with_inner(|raw| {
            // removals shrink `raw.len`; the pass covers the entries
            // present when it started
            let expected = raw.len;
            let mut current = raw.head;
            for _ in 0..expected {
                let node = match current {
                    Some(node) => node,
                    None => return Err(ListError::BadEntry),
                };
                // SAFETY: the lock is held and the node belongs to the
                // chain; `next` is read before any unlinking.
                let next = unsafe { node.as_ref().next };
                let keep_it = keep(unsafe { &node.as_ref().element });
                if !keep_it {
                    // SAFETY: `node` came from walking this chain.
                    let element = unsafe { raw.remove_node(node) };
                    raw.destroy(element);
                }
                current = next;
            }
            Ok(())
        })
    }

    /// Produce an independent list with the same configuration (bound,
    /// comparator, destructor) and cloned elements.
    ///
    /// Cloning is the shallow copy of this structure: with a
    /// reference-counted element type such as `Arc<V>`, the copy shares
    /// the underlying values with the original. Use
    /// [`duplicate_with`](List::duplicate_with) to produce new values
    /// instead. The original is untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use guarded_list::List;
    /// use std::sync::Arc;
    ///
    /// let list = List::new(None, None, Arc::new(drop)).unwrap();
    /// for value in [1, 2, 3] {
    ///     list.push(value).unwrap();
    /// }
    ///
    /// let copy = list.duplicate().unwrap();
    /// assert_eq!(copy.pop(), Some(3));
    /// assert_eq!(list.len(), 3);
    /// ```
    pub fn duplicate(&self) -> Result<List<T>, ListError>
    where
        T: Clone,
    {
        self.duplicate_with(T::clone)
    }

    /// Produce an independent deep copy: `copier` builds a new value
    /// from every element, and the copy carries the same configuration
    /// as the original.
    ///
    /// If anything fails mid-copy, the partial copy is destroyed (its
    /// elements go through the destructor) before the error is returned;
    /// the original is untouched either way.
    pub fn duplicate_with<F>(&self, copier: F) -> Result<List<T>, ListError>
    where
        F: Fn(&T) -> T,
    {
        self.with_inner(|raw| {
            let mut copy = raw.duplicate_config();
            let mut current = raw.head;
            for _ in 0..raw.len {
                let node = match current {
                    // dropping `copy` here purges the partial result
                    None => return Err(ListError::BadEntry),
                    Some(node) => node,
                };
                // SAFETY: the lock is held and the node belongs to the
                // chain.
                let node = unsafe { node.as_ref() };
                let at = copy.len;
                if let Err(err) = copy.insert(copier(&node.element), at) {
                    return Err(err.kind());
                }
                current = node.next;
            }
            Ok(List::from_raw(copy))
        })
    }

    /// Walk the whole chain checking its consistency against the
    /// recorded length.
    ///
    /// Returns [`ListError::BadEntry`] when the chain ends early or
    /// extends past the counter.
    pub fn verify(&self) -> Result<(), ListError> {
        self.verify_with(|_| true)
    }

    /// Like [`verify`](List::verify), additionally checking every
    /// element against `valid`; the first element failing it reports
    /// [`ListError::BadEntry`]. Pure read.
    ///
    /// # Examples
    ///
    /// ```
    /// use guarded_list::{List, ListError};
    /// use std::sync::Arc;
    ///
    /// let list = List::new(None, None, Arc::new(drop)).unwrap();
    /// assert_eq!(list.verify(), Ok(()));
    ///
    /// for value in [2, 4, 5] {
    ///     list.push(value).unwrap();
    /// }
    /// assert_eq!(list.verify_with(|n| n % 2 == 0), Err(ListError::BadEntry));
    /// ```
    pub fn verify_with<F>(&self, mut valid: F) -> Result<(), ListError>
    where
        F: FnMut(&T) -> bool,
    {
        self.with_inner(|raw| {
            let mut current = raw.head;
            for _ in 0..raw.len {
                let node = match current {
                    Some(node) => node,
                    None => return Err(ListError::BadEntry),
                };
                // SAFETY: the lock is held and the node belongs to the
                // chain.
                let node = unsafe { node.as_ref() };
                if !valid(&node.element) {
                    return Err(ListError::BadEntry);
                }
                current = node.next;
            }
            // the chain must end exactly where the counter says
            match current {
                Some(_) => Err(ListError::BadEntry),
                None => Ok(()),
            }
        })
    }
}
