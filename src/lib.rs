//! This crate provides a thread-safe doubly-linked list with owned nodes,
//! guarded by one mutual-exclusion lock per list.
//!
//! The [`List`] supports insertion and removal at any index, search,
//! traversal, filtering, reduction, copying, sorting, reversal and
//! bidirectional cursors. Every public operation takes the list's lock at
//! entry and releases it on every exit path, so a single list can be
//! hammered from many threads at once. Navigation is by index and always
//! walks from the head: access at any position takes *O*(*n*) time — this
//! is a genuine linked list, not a random-access container.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use guarded_list::{List, ListError};
//! use std::sync::Arc;
//!
//! let list = List::new(
//!     Some(8),                                     // capacity bound
//!     Some(Arc::new(|a: &i32, b: &i32| a.cmp(b))), // comparator
//!     Arc::new(drop),                              // destructor
//! )
//! .unwrap();
//!
//! list.push(63).unwrap();
//! list.push(255).unwrap();
//! list.push(127).unwrap();
//!
//! assert_eq!(list.find(&255), Ok(1));
//!
//! list.sort().unwrap();
//! assert_eq!(list.pop(), Some(255)); // highest precedence pops first
//! assert_eq!(list.len(), 2);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!    ╔═══════════╗    ╔═══════════╗            ╔═══════════╗
//! ┌→ ║   next    ║ ─→ ║   next    ║ ─→ ┄┄ ──→  ║   next    ║ ─→ ∅
//! │  ╟───────────╢    ╟───────────╢            ╟───────────╢
//! │  ║   prev    ║ ←─ ║   prev    ║ ←─ ┄┄ ←──  ║   prev    ║
//! │  ╟───────────╢ ∅← ╟───────────╢            ╟───────────╢
//! │  ║ payload T ║    ║ payload T ║            ║ payload T ║
//! │  ╚═══════════╝    ╚═══════════╝            ╚═══════════╝
//! │      Node 0           Node 1                Node len-1
//! │  ╔═══════════╦═════╦═════════╦═════╦══════╦══════╗
//! └─ ║   head    ║ len ║ max_len ║ cmp ║ dtor ║ lock ║
//!    ╚═══════════╩═════╩═════════╩═════╩══════╩══════╝
//!                           List
//! ```
//!
//! The `List` contains a pointer to the head node (`None` when empty), a
//! length counter, an optional capacity bound, the two configured
//! callbacks and the lock. Each node is allocated on the heap and holds
//! its payload plus the two neighbor links; the first node's `prev` and
//! the last node's `next` are empty.
//!
//! # Ownership and the destructor
//!
//! A value pushed into the list is owned by the list until it leaves:
//!
//! - [`remove_at`], [`pop`] and [`shift`] detach a value and hand
//!   ownership back to the caller;
//! - [`delete_at`], [`filter`], [`purge`] and dropping the list destroy
//!   values in place by passing them to the configured [`Destructor`].
//!
//! The destructor is the explicit ownership-drop contract of the list —
//! with plain types `Arc::new(drop)` is all that is needed, while
//! reference-counted or pooled payloads can do their bookkeeping there.
//!
//! # Errors
//!
//! Operations report failures through the closed [`ListError`] enum:
//! out-of-range parameters, a full bounded list, an exhausted search, or
//! a chain/length mismatch ([`ListError::BadEntry`] — the corruption
//! guard). Rejected insertions carry the value back to the caller in
//! [`InsertError`]. Nothing panics, nothing logs, nothing retries.
//!
//! # Cursors
//!
//! [`Cursor`] walks a list one node at a time in a fixed [`Direction`],
//! forward or reverse, with `next`/`prev`/`current`. Cursors read the
//! chain **without taking the list lock**: creating one is `unsafe`, and
//! the caller promises that nothing mutates the list while the cursor is
//! alive. See [`List::cursor`].
//!
//! ```
//! use guarded_list::{Direction, List};
//! use std::sync::Arc;
//!
//! let list = List::new(None, None, Arc::new(drop)).unwrap();
//! for value in [1, 2, 3] {
//!     list.push(value).unwrap();
//! }
//!
//! // SAFETY: the list is not mutated while the cursor is alive.
//! let mut cursor = unsafe { list.cursor(Direction::Forward) };
//! assert_eq!(cursor.next(), Some(&1));
//! assert_eq!(cursor.next(), Some(&2));
//! assert_eq!(cursor.prev(), Some(&1));
//! assert_eq!(cursor.current(), Some(&1));
//! ```

pub use error::{InsertError, ListError};
#[doc(inline)]
pub use list::cursor::{Cursor, Direction};
#[doc(inline)]
pub use list::{Comparator, Destructor, List};

mod error;

pub mod list;
