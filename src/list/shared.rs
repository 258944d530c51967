use std::hash::Hash;
use std::sync::Arc;

use parking_lot::RwLock;
use rand::seq::SliceRandom;
use rand::Rng;

use super::traits::{Length, NonReactive, Query, Reactive, SnapShot};
use super::List;

/// ### -> `SharedList<V>` - A lock-guarded, reference-counted list cell.
///
/// `SharedList<V>` stores its elements in an `Arc<RwLock<Vec<V>>>`. The lock
/// belongs to the shared cell, not to the handle: every clone of a
/// `SharedList<V>` points at the same cell and the same lock.
///
/// ### -> `Concurrency Model`
///
/// - **Readers** (`length`, `first`, `last`, `contains`, `random`, `snapshot`)
///   take the read guard and may run concurrently with each other.
/// - **Writers** (`add`, `delete`) take `&self` and the write guard, and
///   exclude every other reader and writer for the duration of that single
///   call. `Reactive<V>` is implemented on top of them for generic callers.
/// - **NonReactive transforms** copy the contents out under the read guard,
///   release it, and build the result without holding any lock. The result is
///   a new, independent cell.
/// - No guard is ever held across calls. Concurrent `add`/`delete` from
///   several threads are serialized by the lock; their relative order is
///   whatever order the lock was granted in.
///
/// ### -> `Usage`
///
/// ```
/// use seqlist::prelude::*;
///
/// let shared = SharedList::from_vec(vec![1, 2, 3]);
///
/// let writer = shared.clone();
/// writer.add(4);
///
/// // every clone sees the update
/// assert_eq!(shared.snapshot(), vec![1, 2, 3, 4]);
///
/// // transforms produce independent cells
/// let reversed = shared.reverse();
/// reversed.delete(0);
/// assert_eq!(reversed.snapshot(), vec![3, 2, 1]);
/// assert_eq!(shared.length(), 4);
/// ```
pub struct SharedList<V> {
    cell: Arc<RwLock<Vec<V>>>,
}

impl <V> Clone for SharedList<V> {
    fn clone(&self) -> Self {
        Self { cell: Arc::clone(&self.cell) }
    }
}

impl <V> SharedList<V> {
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    pub fn from_vec(values: Vec<V>) -> Self {
        Self { cell: Arc::new(RwLock::new(values)) }
    }

    /// ### -> `add`
    ///
    /// Appends `value` under the write guard. Takes `&self`: the lock lives in
    /// the shared cell, so a borrowed handle is enough to write through.
    ///
    /// ### -> `Parameters`
    /// - `value: V`: the element to append.
    ///
    /// ### -> `Returns`
    /// - `&Self`: the same handle, for chaining.
    ///
    /// ### -> `Usage`
    ///
    /// ```
    /// use seqlist::prelude::*;
    ///
    /// let shared = SharedList::<usize>::new();
    /// std::thread::scope(|scope| {
    ///     for i in 0..4 {
    ///         let shared = &shared;
    ///         scope.spawn(move || {
    ///             shared.add(i);
    ///         });
    ///     }
    /// });
    /// assert_eq!(shared.length(), 4);
    /// ```
    pub fn add(&self, value: V) -> &Self {
        let mut guard = self.cell.write();
        guard.push(value);
        crate::drop!(guard);
        self
    }

    /// ### -> `delete`
    ///
    /// Removes the element at `index` under the write guard, shifting later
    /// elements left. An `index` at or past the end leaves the cell unchanged.
    ///
    /// ### -> `Parameters`
    /// - `index: usize`: position of the element to remove.
    ///
    /// ### -> `Returns`
    /// - `&Self`: the same handle, for chaining.
    pub fn delete(&self, index: usize) -> &Self {
        let mut guard = self.cell.write();
        if index < guard.len() {
            guard.remove(index);
        }
        crate::drop!(guard);
        self
    }

    /// Copies the current contents into an owned `List<V>`.
    pub fn to_list(&self) -> List<V>
    where
        V: Clone,
    {
        List::from_vec(self.snapshot())
    }

    /// `true` when both handles point at the same cell.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.cell, &other.cell)
    }

    /// Runs `reader` against the current contents under the read guard.
    pub fn with_values<F, T>(&self, reader: F) -> T
    where
        F: FnOnce(&[V]) -> T,
    {
        let guard = self.cell.read();
        let result = reader(&guard);
        crate::drop!(guard);
        result
    }

    /// Copies the contents out under the read guard and builds a new cell
    /// from `transform` without holding the lock.
    fn transform<F>(&self, transform: F) -> Self
    where
        V: Clone,
        F: FnOnce(Vec<V>) -> Vec<V>,
    {
        Self::from_vec(transform(self.snapshot()))
    }
}

impl <V> Default for SharedList<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl <V> std::fmt::Debug for SharedList<V>
where
    V: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let guard = self.cell.read();
        f.debug_struct("SharedList").field("values", &*guard).finish()
    }
}

impl <V> Length for SharedList<V> {
    fn length(&self) -> usize {
        self.cell.read().len()
    }
}

impl <V> SnapShot<V> for SharedList<V>
where
    V: Clone,
{
    fn snapshot(&self) -> Vec<V> {
        self.cell.read().clone()
    }
}

impl <V> Query<V> for SharedList<V>
where
    V: Clone + PartialEq,
{
    fn first(&self) -> V
    where
        V: Default,
    {
        self.cell.read().first().cloned().unwrap_or_default()
    }

    fn last(&self) -> V
    where
        V: Default,
    {
        self.cell.read().last().cloned().unwrap_or_default()
    }

    fn contains(&self, value: &V) -> bool {
        self.cell.read().contains(value)
    }

    fn random_with<R>(&self, rng: &mut R) -> anyhow::Result<V>
    where
        R: Rng + ?Sized,
    {
        let guard = self.cell.read();
        super::random_value(guard.as_slice(), rng)
    }
}

impl <V> NonReactive<V> for SharedList<V>
where
    V: Clone,
{
    fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&V) -> bool,
    {
        self.transform(|mut values| {
            values.retain(|value| predicate(value));
            values
        })
    }

    fn map<F>(&self, mapper: F) -> Self
    where
        F: FnMut(&V) -> V,
    {
        self.transform(|values| values.iter().map(mapper).collect())
    }

    fn chunk(&self, size: usize) -> anyhow::Result<Vec<Self>> {
        let chunks = self.with_values(|values| super::chunk_values(values, size))?;
        Ok(chunks.into_iter().map(Self::from_vec).collect())
    }

    fn join<'a, I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        Self: 'a,
    {
        // one guard at a time, so joining a list with itself cannot deadlock
        let mut joined = self.snapshot();
        for other in others {
            other.with_values(|values| joined.extend_from_slice(values));
        }
        Self::from_vec(joined)
    }

    fn nth(&self, step: usize) -> anyhow::Result<Self> {
        self.with_values(|values| super::nth_values(values, step)).map(Self::from_vec)
    }

    fn reverse(&self) -> Self {
        self.transform(|mut values| {
            values.reverse();
            values
        })
    }

    fn shuffle_with<R>(&self, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        self.transform(|mut values| {
            values.shuffle(rng);
            values
        })
    }

    fn unique(&self) -> Self
    where
        V: Eq + Hash,
    {
        Self::from_vec(self.with_values(super::unique_values))
    }

    fn zip(&self, other: &Self) -> anyhow::Result<Vec<Self>> {
        let left = self.snapshot();
        let pairs = other.with_values(|right| super::zip_values(&left, right))?;
        Ok(pairs.into_iter().map(Self::from_vec).collect())
    }

    fn join_to_string(&self, separator: &str) -> String
    where
        V: AsRef<str>,
    {
        self.with_values(|values| super::join_text(values, separator))
    }
}

impl <V> Reactive<V> for SharedList<V> {
    fn add(&mut self, value: V) -> &mut Self {
        SharedList::add(self, value);
        self
    }

    fn delete(&mut self, index: usize) -> &mut Self {
        SharedList::delete(self, index);
        self
    }
}

impl <V> From<Vec<V>> for SharedList<V> {
    fn from(values: Vec<V>) -> Self {
        Self::from_vec(values)
    }
}

impl <V> From<List<V>> for SharedList<V> {
    fn from(list: List<V>) -> Self {
        list.into_shared()
    }
}

impl <V> FromIterator<V> for SharedList<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}
