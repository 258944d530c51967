use std::hash::Hash;

use rand::Rng;

/// ### -> `Length Trait`.
///
/// Element count and count comparisons. `length` is `O(1)` for every handle.
pub trait Length {
    fn length(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.length() == 0
    }

    fn length_eq(&self, other: &Self) -> bool {
        self.length() == other.length()
    }

    fn length_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.length().cmp(&other.length())
    }
}

/// ### -> `SnapShot<V> Trait`.
///
/// Copies the current contents out as a plain `Vec<V>`. For a shared handle
/// the copy reflects the contents at the moment the read guard was held.
pub trait SnapShot<V> {
    fn snapshot(&self) -> Vec<V>;
}

/// ### -> `Query<V> Trait`.
///
/// Read-only element access. None of these methods fail on an empty list
/// except `random`, which has nothing to choose from.
///
/// ### -> `Methods`
/// - `first() -> V`: element at position 0, or `V::default()` when empty.
/// - `last() -> V`: element at position `length - 1`, or `V::default()` when empty.
/// - `contains(&V) -> bool`: linear scan for an equal element.
/// - `random() -> anyhow::Result<V>`: a uniformly chosen element, drawn from the
///   thread-local generator. Fails with `ListError::Empty` on an empty list.
/// - `random_with(&mut R) -> anyhow::Result<V>`: same, drawing from `rng`.
///
/// ### -> `Usage`
///
/// ```
/// use seqlist::prelude::*;
///
/// let list = list![2, 3, 10];
/// assert_eq!(list.first(), 2);
/// assert_eq!(list.last(), 10);
/// assert!(list.contains(&3));
///
/// let empty: List<String> = list![];
/// assert_eq!(empty.last(), String::new());
/// assert!(empty.random().is_err());
/// ```
pub trait Query<V>: Length
where
    V: Clone + PartialEq,
{
    fn first(&self) -> V
    where
        V: Default;

    fn last(&self) -> V
    where
        V: Default;

    fn contains(&self, value: &V) -> bool;

    /// ### -> `random`
    ///
    /// Picks one element uniformly at random using the thread-local generator.
    ///
    /// ### -> `Returns`
    /// - `anyhow::Result<V>`: a clone of the chosen element.
    ///
    /// ### -> `Errors`
    /// - `ListError::Empty` when there is nothing to choose from.
    ///
    /// ### -> `Usage`
    ///
    /// ```
    /// use seqlist::prelude::*;
    ///
    /// let list = list![4, 8, 15];
    /// assert!(list.contains(&list.random()?));
    ///
    /// let error = List::<i32>::new().random().unwrap_err();
    /// assert_eq!(
    ///     error.downcast_ref::<ListError>(),
    ///     Some(&ListError::Empty { operation: "random" })
    /// );
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    fn random(&self) -> anyhow::Result<V> {
        self.random_with(&mut rand::thread_rng())
    }

    /// ### -> `random_with`
    ///
    /// Same as `random`, drawing from `rng`. A seeded generator gives a
    /// reproducible pick.
    ///
    /// ### -> `Parameters`
    /// - `rng: &mut R`: any `rand::Rng`.
    ///
    /// ### -> `Errors`
    /// - `ListError::Empty` on an empty list.
    fn random_with<R>(&self, rng: &mut R) -> anyhow::Result<V>
    where
        R: Rng + ?Sized;
}

/// ### -> `NonReactive<V> Trait`.
///
/// Transformations that build a **new, independent** container and leave the
/// receiver's contents untouched. For `SharedList<V>` the result is a fresh
/// shared cell; nothing written to it is visible through the receiver and
/// vice versa.
///
/// Type Parameters:
/// - `V`: the element type. Elements are cloned into the result.
///
/// ### -> `Methods`
/// - `filter(predicate)`: keeps the elements for which `predicate` holds, in order.
/// - `map(mapper)`: replaces each element by `mapper(element)`, in order.
///   See `compose::each` when the element type changes.
/// - `chunk(size) -> anyhow::Result<Vec<Self>>`: consecutive runs of at most
///   `size` elements; the last run may be shorter. `size == 0` fails with
///   `ListError::InvalidArgument`. An empty list yields no chunks.
/// - `join(others)`: the receiver's elements followed by each of `others`, in order.
/// - `nth(step) -> anyhow::Result<Self>`: keeps positions `0, step, 2 * step, ...`.
///   `step == 0` fails with `ListError::InvalidArgument`.
/// - `reverse()`: elements in reverse positional order.
/// - `shuffle()` / `shuffle_with(rng)`: a uniformly random permutation (Fisher-Yates).
/// - `unique()`: first occurrence of each value, in first-occurrence order.
/// - `zip(other) -> anyhow::Result<Vec<Self>>`: pairs `[self[i], other[i]]` as
///   two-element containers. Fails with `ListError::LengthMismatch` when the
///   lengths differ; no partial result is produced.
/// - `join_to_string(separator)`: concatenates text elements with `separator`
///   between them. Only available when `V: AsRef<str>`.
///
/// ### -> `Usage`
///
/// ```
/// use seqlist::prelude::*;
///
/// let list = List::range(1, 6);
///
/// let odd = list.filter(|v| v % 2 == 1);
/// assert_eq!(odd.values(), &[1, 3, 5]);
///
/// let chunks = list.chunk(4)?;
/// assert_eq!(chunks.len(), 2);
/// assert_eq!(chunks[1].values(), &[5, 6]);
///
/// let pairs = list![1, 2].zip(&list![3, 4])?;
/// assert_eq!(pairs[0].values(), &[1, 3]);
///
/// // receiver is untouched
/// assert_eq!(list.values(), &[1, 2, 3, 4, 5, 6]);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub trait NonReactive<V>: Length + Sized
where
    V: Clone,
{
    fn filter<F>(&self, predicate: F) -> Self
    where
        F: FnMut(&V) -> bool;

    fn map<F>(&self, mapper: F) -> Self
    where
        F: FnMut(&V) -> V;

    /// ### -> `chunk`
    ///
    /// Splits the elements into consecutive runs of `size`. Every run is full
    /// except possibly the last one.
    ///
    /// ### -> `Parameters`
    /// - `size: usize`: the maximum length of each run.
    ///
    /// ### -> `Returns`
    /// - `anyhow::Result<Vec<Self>>`: `ceil(length / size)` new containers.
    ///   An empty receiver yields no chunks.
    ///
    /// ### -> `Errors`
    /// - `ListError::InvalidArgument` when `size == 0`.
    ///
    /// ### -> `Usage`
    ///
    /// ```
    /// use seqlist::prelude::*;
    ///
    /// let chunks = list![1, 2, 3, 4, 5].chunk(2)?;
    /// assert_eq!(chunks, vec![list![1, 2], list![3, 4], list![5]]);
    /// assert!(list![1].chunk(0).is_err());
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    fn chunk(&self, size: usize) -> anyhow::Result<Vec<Self>>;

    fn join<'a, I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        Self: 'a;

    /// ### -> `nth`
    ///
    /// Keeps the elements at positions `0, step, 2 * step, ...`.
    ///
    /// ### -> `Errors`
    /// - `ListError::InvalidArgument` when `step == 0`.
    ///
    /// ### -> `Usage`
    ///
    /// ```
    /// use seqlist::prelude::*;
    ///
    /// assert_eq!(List::range(1, 10).nth(3)?.values(), &[1, 4, 7, 10]);
    /// assert!(list![1].nth(0).is_err());
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    fn nth(&self, step: usize) -> anyhow::Result<Self>;

    fn reverse(&self) -> Self;

    fn shuffle(&self) -> Self {
        self.shuffle_with(&mut rand::thread_rng())
    }

    fn shuffle_with<R>(&self, rng: &mut R) -> Self
    where
        R: Rng + ?Sized;

    fn unique(&self) -> Self
    where
        V: Eq + Hash;

    /// ### -> `zip`
    ///
    /// Pairs elements by position: entry `i` is the two-element container
    /// `[self[i], other[i]]`.
    ///
    /// ### -> `Errors`
    /// - `ListError::LengthMismatch` when the lengths differ. No partial
    ///   result is produced.
    ///
    /// ### -> `Usage`
    ///
    /// ```
    /// use seqlist::prelude::*;
    ///
    /// let pairs = list![1, 2].zip(&list![3, 4])?;
    /// assert_eq!(pairs, vec![list![1, 3], list![2, 4]]);
    ///
    /// let error = list![1, 2].zip(&list![3]).unwrap_err();
    /// assert_eq!(
    ///     error.downcast_ref::<ListError>(),
    ///     Some(&ListError::LengthMismatch { left: 2, right: 1 })
    /// );
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    fn zip(&self, other: &Self) -> anyhow::Result<Vec<Self>>;

    /// ### -> `join_to_string`
    ///
    /// Concatenates text elements with `separator` between them. Elements
    /// that are not text do not have this method at all:
    ///
    /// ```compile_fail
    /// use seqlist::prelude::*;
    ///
    /// let text = list![1, 2].join_to_string(",");
    /// ```
    ///
    /// ### -> `Usage`
    ///
    /// ```
    /// use seqlist::prelude::*;
    ///
    /// assert_eq!(list!["a", "b"].join_to_string(", "), "a, b");
    /// ```
    fn join_to_string(&self, separator: &str) -> String
    where
        V: AsRef<str>;
}

/// ### -> `Reactive<V> Trait`.
///
/// In-place mutation. Both methods update the receiver and hand it back so
/// calls can be chained. On a `SharedList<V>` every clone of the handle sees
/// the update, and each call holds the write guard only for its own duration.
/// `SharedList<V>` also offers `add`/`delete` on `&self` for writers that only
/// hold a borrow; this trait routes through those.
///
/// ### -> `Methods`
/// - `add(value)`: appends `value`; the length grows by one.
/// - `delete(index)`: removes the element at `index`, shifting later elements
///   left. An `index` at or past the end leaves the list unchanged.
///
/// ### -> `Usage`
///
/// ```
/// use seqlist::prelude::*;
///
/// let mut list = list![1, 2, 3];
/// list.add(4);
/// assert_eq!(list.values(), &[1, 2, 3, 4]);
///
/// list.delete(0).delete(10);
/// assert_eq!(list.values(), &[2, 3, 4]);
/// ```
pub trait Reactive<V> {
    fn add(&mut self, value: V) -> &mut Self;

    fn delete(&mut self, index: usize) -> &mut Self;
}
