//! This crate provides a singly-linked list with owned nodes, edited through
//! cursors with the insert-after/erase-after protocol.
//!
//! The [`List`] allows inserting and removing elements right after any given
//! position in constant time. In compromise, reaching a position takes *O*(*n*)
//! time, and the list can only be walked forward.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use forward_list::List;
//!
//! let mut list = List::from([1, 2, 3, 4]);
//!
//! let mut cursor = list.before_begin_mut();
//!
//! cursor.insert_after(0); // insert 0 at the beginning of the list
//! assert_eq!(cursor.current(), Some(&0));
//! assert_eq!(cursor.view(), &List::from([0, 1, 2, 3, 4]));
//!
//! cursor.seek_forward(2).unwrap(); // move the cursor to 2, and remove the element after it
//! assert_eq!(cursor.erase_after(), Some(3));
//! assert_eq!(cursor.view(), &List::from([0, 1, 2, 4]));
//!
//! list.push_front(5); // pushing front to the list is also allowed
//! assert_eq!(list, List::from([5, 0, 1, 2, 4]));
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!    ╔═══════════╗       ┌───────────┐       ┌───────────┐               ┌───────────┐
//!    ║   head    ║ ────→ │   next    │ ────→ │   next    │ ────→ ┄┄ ───→ │   next    │ ──→ None
//!    ╟───────────╢       ├───────────┤       ├───────────┤  Node 2, ...  ├───────────┤
//!    ║    len    ║       │ element T │       │ element T │               │ element T │
//!    ╚═══════════╝       └───────────┘       └───────────┘               └───────────┘
//!        List               Node 0              Node 1                     Node n - 1
//! ```
//! The `List` contains:
//! - the sentinel link `head`, which owns the first node. It holds no element;
//!   its address is the "before-begin" position of the list;
//! - a length field `len` indicating the length of the list.
//!
//! Each node of the list `List<T>` is allocated on heap, and owns:
//! - the actual payload `T`;
//! - the `next` link to the next node, which is `None` for the last node.
//!
//! Since every node has exactly one owner, the chain can never be cyclic, and
//! dropping the list releases the nodes front to back.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. These are
//! forward iterators with an exact size, and are fused. [`IterMut`] provides
//! mutability of the elements (but not the linked structure of the list).
//!
//! ## Examples
//!
//! ```
//! use forward_list::List;
//!
//! let mut list = List::from([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Cursor Views
//!
//! Beside iteration, the cursors [`Cursor`] and [`CursorMut`] provide more
//! flexible ways of viewing a list.
//!
//! In a list with length *n*, there are *n* + 2 valid positions for a cursor:
//! the before-begin position, the *n* elements, and the end. Cursors only move
//! forward, and moving past the end is an error.
//!
//! Cursors can also be used as iterators ([`CursorIter`] and [`CursorIterMut`]),
//! from the cursor position to the end of the list.
//!
//! ## Examples
//!
//! ```
//! use forward_list::List;
//!
//! let list = List::from([1, 2, 3]);
//! let mut cursor = list.before_begin();
//! assert_eq!(cursor.current(), None);
//! assert_eq!(cursor.peek_next(), Some(&1));
//!
//! cursor.move_next().unwrap();
//! assert_eq!(cursor, list.begin());
//!
//! let mut cursor_iter = cursor.into_iter();
//! assert_eq!(cursor_iter.next(), Some(&1));
//! assert_eq!(cursor_iter.next(), Some(&2));
//! assert_eq!(cursor_iter.next(), Some(&3));
//! assert_eq!(cursor_iter.next(), None);
//! assert_eq!(cursor_iter.into_cursor(), list.end());
//! ```
//!
//! # Cursor Mutations
//!
//! [`CursorMut`] mutates the list right after its position.
//! - [`insert_after`]: insert a new item after the cursor, and move onto it;
//! - [`erase_after`]: remove the item after the cursor;
//!
//! From the before-begin position, they are pushing to and popping from the
//! front of the list.
//!
//! ## Examples
//!
//! ```
//! use forward_list::List;
//!
//! let mut list = List::from([1, 2, 3, 4]);
//!
//! let mut cursor = list.begin_mut();
//!
//! cursor.insert_after(5); // becomes [1, 5, 2, 3, 4], points to 5
//! assert_eq!(cursor.current(), Some(&5));
//!
//! assert!(cursor.seek_forward(1).is_ok());
//! assert_eq!(cursor.erase_after(), Some(3)); // becomes [1, 5, 2, 4], points to 2
//! assert_eq!(cursor.current(), Some(&2));
//!
//! assert_eq!(Vec::from_iter(list), vec![1, 5, 2, 4]);
//! ```
//!
//! See more functions in [`CursorMut`].
//!
//! # Allocation Failures
//!
//! Operations like [`List::push_front`] abort the process when the allocator
//! fails, like [`Box::new`]. Their `try_` counterparts return an
//! [`AllocError`] instead and leave the list as it was.
//!
//! [`List`]: crate::List
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`AllocError`]: crate::AllocError
//! [`Cursor`]: crate::list::cursor::Cursor
//! [`CursorMut`]: crate::list::cursor::CursorMut
//! [`CursorIter`]: crate::list::cursor::CursorIter
//! [`CursorIterMut`]: crate::list::cursor::CursorIterMut
//! [`insert_after`]: crate::list::cursor::CursorMut::insert_after
//! [`erase_after`]: crate::list::cursor::CursorMut::erase_after

#[doc(inline)]
pub use error::AllocError;
#[doc(inline)]
pub use list::algorithms::swap;
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;

pub mod error;
pub mod list;
