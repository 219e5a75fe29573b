use std::fmt;
use std::ptr::NonNull;

use crate::list::{List, Node, RawList};

/// Traversal direction of a [`Cursor`], fixed for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Walk from the head toward the tail.
    Forward,
    /// Walk from the tail toward the head.
    Reverse,
}

/// A cursor over a [`List`], stepping one node at a time in a fixed
/// [`Direction`].
///
/// In a list with *n* elements the cursor has *n* + 2 states: before the
/// first element, positioned at one of the elements, or past the last
/// one. A freshly built cursor is before the start; [`next`] enters the
/// list, [`prev`] steps back and can re-enter a cursor that ran off the
/// end. No cursor operation mutates the list.
///
/// The "first" and "last" element are relative to the direction: a
/// reverse cursor starts at the tail and `next` moves it toward the
/// head.
///
/// Cursors do **not** take the list lock — see the safety contract on
/// [`List::cursor`]. The borrow ties the cursor to the list, so the list
/// always outlives it.
///
/// # Examples
///
/// ```
/// use guarded_list::{Direction, List};
/// use std::sync::Arc;
///
/// let list = List::new(None, None, Arc::new(drop)).unwrap();
/// for value in [1, 2, 3] {
///     list.push(value).unwrap();
/// }
///
/// // SAFETY: the list is not mutated while the cursor is alive.
/// let mut cursor = unsafe { list.cursor(Direction::Reverse) };
/// assert_eq!(cursor.current(), None); // before the start
///
/// assert_eq!(cursor.next(), Some(&3));
/// assert_eq!(cursor.next(), Some(&2));
/// assert_eq!(cursor.current(), Some(&2));
///
/// assert_eq!(cursor.next(), Some(&1));
/// assert_eq!(cursor.next(), None); // ran off the end
///
/// assert_eq!(cursor.prev(), Some(&1)); // re-enters at the last node
/// ```
///
/// [`next`]: Cursor::next
/// [`prev`]: Cursor::prev
pub struct Cursor<'a, T: 'a> {
    list: &'a List<T>,
    current: Option<NonNull<Node<T>>>,
    direction: Direction,
    /// Distinguishes "ran off the end" from "not yet started" while
    /// `current` is `None`.
    finished: bool,
}

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(list: &'a List<T>, direction: Direction) -> Self {
        Self {
            list,
            current: None,
            direction,
            finished: false,
        }
    }

    fn raw(&self) -> &'a RawList<T> {
        // SAFETY: the construction contract of `List::cursor` guarantees
        // no concurrent mutation while the cursor is alive.
        unsafe { self.list.raw_unlocked() }
    }

    /// The first node in the traversal direction.
    fn entry_node(&self) -> Option<NonNull<Node<T>>> {
        match self.direction {
            Direction::Forward => self.raw().head,
            Direction::Reverse => self.raw().back_node(),
        }
    }

    /// The last node in the traversal direction.
    fn exit_node(&self) -> Option<NonNull<Node<T>>> {
        match self.direction {
            Direction::Forward => self.raw().back_node(),
            Direction::Reverse => self.raw().head,
        }
    }

    fn step_from(&self, node: NonNull<Node<T>>) -> Option<NonNull<Node<T>>> {
        // SAFETY: `node` is a live node of the chain (construction
        // contract).
        let node = unsafe { node.as_ref() };
        match self.direction {
            Direction::Forward => node.next,
            Direction::Reverse => node.prev,
        }
    }

    fn step_back_from(&self, node: NonNull<Node<T>>) -> Option<NonNull<Node<T>>> {
        // SAFETY: as in `step_from`.
        let node = unsafe { node.as_ref() };
        match self.direction {
            Direction::Forward => node.prev,
            Direction::Reverse => node.next,
        }
    }

    fn element_of(node: NonNull<Node<T>>) -> &'a T {
        // SAFETY: the node is live and the construction contract rules
        // out concurrent mutation for the borrow's whole lifetime.
        unsafe { &node.as_ref().element }
    }

    /// The traversal direction this cursor was built with.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Advance one step in the cursor's direction and return the element
    /// at the new position.
    ///
    /// From before the start it enters at the first node; once it runs
    /// off the end it stays there and keeps returning `None`.
    pub fn next(&mut self) -> Option<&'a T> {
        if self.finished {
            return None;
        }
        let target = match self.current {
            None => self.entry_node(),
            Some(node) => self.step_from(node),
        };
        self.current = target;
        match target {
            Some(node) => Some(Self::element_of(node)),
            None => {
                self.finished = true;
                None
            }
        }
    }

    /// Step one position against the cursor's direction and return the
    /// element there.
    ///
    /// From past the end it re-enters at the last node; from before the
    /// start it stays put and returns `None`.
    pub fn prev(&mut self) -> Option<&'a T> {
        let target = if self.finished {
            self.exit_node()
        } else {
            match self.current {
                None => return None,
                Some(node) => self.step_back_from(node),
            }
        };
        if target.is_some() {
            self.finished = false;
        }
        self.current = target;
        target.map(Self::element_of)
    }

    /// The element at the present position, without moving. `None` when
    /// the cursor is before the start or past the end.
    pub fn current(&self) -> Option<&'a T> {
        self.current.map(Self::element_of)
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Cursor<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("direction", &self.direction)
            .field("current", &self.current())
            .field("finished", &self.finished)
            .finish()
    }
}
