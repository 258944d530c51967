//! # seqlist
//!
//! An ordered sequence container with value semantics and a fluent set of
//! construction, query and transformation helpers.
//!
//! Two handles share one trait surface:
//!
//! - [`List<V>`](list::List): an owned container. Cloning copies the elements.
//! - [`SharedList<V>`](list::shared::SharedList): a reference-counted cell
//!   guarded by a read/write lock. Cloning shares the cell. (feature `shared`)
//!
//! Operations fall into two categories:
//!
//! - **NonReactive** (`filter`, `map`, `chunk`, `join`, `nth`, `reverse`,
//!   `shuffle`, `unique`, `zip`, ...): always return a new, independent container
//!   and leave the receiver untouched.
//! - **Reactive** (`add`, `delete`): update the receiver in place and return it
//!   for chaining.
//!
//! ```
//! use seqlist::prelude::*;
//!
//! let mut list = list![1, 2, 3];
//! list.add(4).delete(0);
//! assert_eq!(list.values(), &[2, 3, 4]);
//!
//! let evens = List::range(0, 10).nth(2)?;
//! assert_eq!(evens.values(), &[0, 2, 4, 6, 8, 10]);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod error;
pub mod list;

pub use list::prelude;

/// Builds a [`List`](crate::list::List) from its arguments, in order.
///
/// ```
/// use seqlist::prelude::*;
///
/// let list = list![1, 1, 1, 1, 2].unique();
/// assert_eq!(list.values(), &[1, 2]);
///
/// let empty: List<i32> = list![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::list::List::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::list::List::from_vec(vec![$($value),+])
    };
}

/// Explicitly drops every argument, in order. Used to release lock guards at a
/// precise point instead of at scope end.
#[macro_export]
macro_rules! drop {
    ($($x:expr),* $(,)?) => {
        $( std::mem::drop($x); )*
    };
}
