//! This crate provides a singly-linked list with owned nodes and checked,
//! index-based operations.
//!
//! The [`OrderedList`] supports inserting, removing, reading and overwriting
//! elements at any position, swapping two nodes, rotating the whole list and
//! removing runs or matching elements. Every positional operation walks the
//! chain forward from the front node, so it takes *O*(*index*) time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use ordered_list::OrderedList;
//!
//! let mut list = OrderedList::new();
//! list.add_front('A');
//! list.add_front('B');
//! list.add_front('C');
//! assert_eq!(list.render(), "C B A");
//!
//! list.add_end('D');
//! list.swap(0, 3)?; // exchange the front and back nodes
//! assert_eq!(list.render(), "D B A C");
//!
//! list.shift(1)?; // rotate towards the end by one position
//! assert_eq!(list.render(), "C D B A");
//!
//! list.remove_matching(&'A')?;
//! list.erase(1, 1)?;
//! assert_eq!(list.render(), "C B");
//! assert_eq!(list.len(), 2);
//! # Ok::<(), ordered_list::ListError>(())
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!    ╔═══════════╗           ╔═══════════╗                        ╔═══════════╗
//!    ║ payload T ║           ║ payload T ║                        ║ payload T ║
//!    ╟───────────╢           ╟───────────╢     Node 2, 3, ...     ╟───────────╢
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ ║   next    ║ ──→ None
//!    ╚═══════════╝           ╚═══════════╝                        ╚═══════════╝
//!      ↑ Node 0                  Node 1                              Node n - 1
//! ╔═══════════╗
//! ║   front   ║
//! ╟───────────╢
//! ║    len    ║
//! ╚═══════════╝
//!     List
//! ```
//! The `OrderedList` contains:
//! - an owning link `front` to the first node, which is `None` if and only if
//!   the list is empty (there is no sentinel or placeholder node);
//! - a length field `len`, used to validate indices before any traversal.
//!
//! Each node is allocated on heap and exclusively owns its successor through
//! its `next` link, so the chain can never be cyclic or shared, and unlinking
//! a node drops it.
//!
//! # Errors
//!
//! Operations that need an element, an index or a range return a
//! [`Result`] with a [`ListError`]:
//! - [`EmptyContainer`]: the list has no element;
//! - [`IndexOutOfRange`]: an index or range leaves the list bounds;
//! - [`InvalidArgument`]: e.g. erasing an empty range.
//!
//! Arguments are validated before the list is touched, so a failed call never
//! leaves a partially modified list behind.
//!
//! ```
//! use ordered_list::{ListError, OrderedList};
//!
//! let mut list: OrderedList<i32> = OrderedList::new();
//! assert_eq!(list.remove_front(), Err(ListError::EmptyContainer));
//!
//! list.extend([1, 2, 3]);
//! assert_eq!(list.get(3), Err(ListError::IndexOutOfRange { index: 3, len: 3 }));
//! assert!(matches!(list.erase(0, 0), Err(ListError::InvalidArgument(_))));
//! ```
//!
//! # Features
//!
//! - `tracing` (default): every operation emits a `trace`-level event through
//!   the [`tracing`](https://docs.rs/tracing) crate, naming the operation and
//!   the indices it works on.
//!
//! [`OrderedList`]: crate::OrderedList
//! [`ListError`]: crate::ListError
//! [`EmptyContainer`]: crate::ListError::EmptyContainer
//! [`IndexOutOfRange`]: crate::ListError::IndexOutOfRange
//! [`InvalidArgument`]: crate::ListError::InvalidArgument

/// Emits a `trace`-level event when the `tracing` feature is enabled, and
/// nothing otherwise.
macro_rules! trace_op {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
    };
}

#[doc(inline)]
pub use error::{ListError, Result};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::OrderedList;

mod error;
pub mod list;
