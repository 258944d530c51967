use std::hash::Hash;

use num_traits::PrimInt;
use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashSet;

use crate::error::ListError;

pub mod compose;
pub mod traits;
#[cfg(feature = "shared")]
pub mod shared;

use traits::{Length, NonReactive, Query, Reactive, SnapShot};

/// ### -> `List<V>` - An ordered, value-semantics sequence container.
///
/// `List<V>` wraps a contiguous `Vec<V>` whose insertion order is significant:
/// it defines what `first`, `last`, `nth` and `reverse` mean. The container
/// offers a fluent chain of construction, query and transformation helpers.
///
/// ### -> `Value Semantics`
///
/// - **NonReactive operations** (`filter`, `map`, `chunk`, `join`, `nth`,
///   `reverse`, `shuffle`, `unique`, `zip`) take `&self` and always build a
///   new `List<V>`. The receiver is never modified.
/// - **Reactive operations** (`add`, `delete`) take `&mut self`, update the
///   receiver in place and return it for chaining.
///
/// Cloning a `List<V>` copies the elements; two clones never observe each
/// other's mutations. For a handle whose clones *do* share state, see
/// `SharedList<V>` (feature `shared`).
///
/// ### -> `Constructors`
///
/// - `new()` / `Default`: an empty list.
/// - `from_vec(values)` / `From<Vec<V>>` / `FromIterator`: wraps values verbatim.
/// - `list![a, b, c]`: from an argument list.
/// - `from_string(text, separator, convert)`: split, trim, keep accepted conversions.
/// - `range(min, max)`: the inclusive integer run `min..=max`.
/// - `fill(value, count)`: `count` copies of `value`.
/// - `List::<String>::sequence(prefix, count, start)`: `prefix` followed by a running index.
/// - `compose::between(min, max, group, generator)`: one value per fixed-size window.
///
/// ### -> `Invariants`
///
/// 1. `length()` is always the number of stored elements and costs `O(1)`.
/// 2. Only `add` and `delete` alter an existing list.
///
/// ### -> `Usage Example`
///
/// ```
/// use seqlist::prelude::*;
///
/// let numbers = List::from_string("1, 2, x, 3", ",", |piece| piece.parse::<i32>().ok());
/// assert_eq!(numbers.values(), &[1, 2, 3]);
///
/// let doubled = numbers.map(|v| v * 2);
/// assert_eq!(doubled.values(), &[2, 4, 6]);
///
/// let joined = doubled.join([&list![8], &list![10, 12]]);
/// assert_eq!(joined.values(), &[2, 4, 6, 8, 10, 12]);
///
/// let markers = List::<String>::sequence("$", 3, 1).join_to_string(", ");
/// assert_eq!(markers, "$1, $2, $3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct List<V> {
    values: Vec<V>,
}

impl <V> List<V> {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { values: Vec::with_capacity(capacity) }
    }

    /// Wraps `values` without copying.
    pub fn from_vec(values: Vec<V>) -> Self {
        Self { values }
    }

    /// ### -> `from_string`
    ///
    /// Splits `text` on `separator`, trims surrounding whitespace from every
    /// piece and hands it to `convert`. Pieces for which `convert` returns
    /// `None` are skipped silently; this is a filtering map, not a strict parse.
    ///
    /// An empty `separator` splits `text` into its individual characters.
    ///
    /// ```
    /// use seqlist::prelude::*;
    ///
    /// let words = List::from_string(" a ;b;  ; c", ";", |piece| {
    ///     (!piece.is_empty()).then(|| piece.to_string())
    /// });
    /// assert_eq!(words.values(), &["a", "b", "c"]);
    /// ```
    pub fn from_string<F>(text: &str, separator: &str, mut convert: F) -> Self
    where
        F: FnMut(&str) -> Option<V>,
    {
        if separator.is_empty() {
            let mut buffer = [0u8; 4];
            return text
                .chars()
                .filter_map(|character| convert(character.encode_utf8(&mut buffer).trim()))
                .collect();
        }

        text.split(separator)
            .filter_map(|piece| convert(piece.trim()))
            .collect()
    }

    /// `count` copies of `value`, in order.
    pub fn fill(value: V, count: usize) -> Self
    where
        V: Clone,
    {
        Self { values: vec![value; count] }
    }

    /// The inclusive run `min, min + 1, ..., max`. Empty when `max < min`.
    ///
    /// ```
    /// use seqlist::prelude::*;
    ///
    /// assert_eq!(List::range(0u8, 4).values(), &[0, 1, 2, 3, 4]);
    /// assert!(List::range(5, 1).is_empty());
    /// assert_eq!(List::range(i8::MAX - 1, i8::MAX).length(), 2);
    /// ```
    pub fn range(min: V, max: V) -> Self
    where
        V: PrimInt,
    {
        if max < min {
            return Self::new();
        }

        let capacity = max
            .checked_sub(&min)
            .and_then(|span| span.to_usize())
            .map_or(0, |span| span.saturating_add(1));
        let mut values = Vec::with_capacity(capacity);
        let mut current = min;
        loop {
            values.push(current);
            // stepping past `max` could overflow `V`
            if current == max {
                break;
            }
            current = current + V::one();
        }

        Self { values }
    }

    /// The underlying elements, in order.
    pub fn values(&self) -> &[V] {
        &self.values
    }

    pub fn into_values(self) -> Vec<V> {
        self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.values.iter()
    }

    /// Moves the elements into a new `SharedList<V>`.
    #[cfg(feature = "shared")]
    pub fn into_shared(self) -> shared::SharedList<V> {
        shared::SharedList::from_vec(self.values)
    }
}

impl List<String> {
    /// ### -> `sequence`
    ///
    /// `count` strings made of `prefix` followed by `start`, `start + 1`, ...,
    /// `start + count - 1`. Handy for positional query placeholders.
    ///
    /// The run stops at `i64::MAX`; indices past it are not produced.
    ///
    /// ```
    /// use seqlist::prelude::*;
    ///
    /// assert_eq!(List::<String>::sequence("$", 3, 1).values(), &["$1", "$2", "$3"]);
    /// assert!(List::<String>::sequence("?", 0, 1).is_empty());
    /// ```
    pub fn sequence(prefix: &str, count: usize, start: i64) -> Self {
        (0..count)
            .map_while(|offset| {
                i64::try_from(offset)
                    .ok()
                    .and_then(|offset| start.checked_add(offset))
            })
            .map(|index| format!("{prefix}{index}"))
            .collect()
    }
}

pub(crate) fn chunk_values<V: Clone>(values: &[V], size: usize) -> anyhow::Result<Vec<Vec<V>>> {
    if size == 0 {
        return Err(ListError::InvalidArgument { name: "size", value: 0 }.into());
    }

    Ok(values.chunks(size).map(<[V]>::to_vec).collect())
}

pub(crate) fn nth_values<V: Clone>(values: &[V], step: usize) -> anyhow::Result<Vec<V>> {
    if step == 0 {
        return Err(ListError::InvalidArgument { name: "step", value: 0 }.into());
    }

    Ok(values.iter().step_by(step).cloned().collect())
}

pub(crate) fn unique_values<V: Clone + Eq + Hash>(values: &[V]) -> Vec<V> {
    let mut visited = FxHashSet::with_capacity_and_hasher(values.len(), Default::default());
    values
        .iter()
        .filter(|value| visited.insert(*value))
        .cloned()
        .collect()
}

pub(crate) fn zip_values<V: Clone>(left: &[V], right: &[V]) -> anyhow::Result<Vec<Vec<V>>> {
    if left.len() != right.len() {
        return Err(ListError::LengthMismatch { left: left.len(), right: right.len() }.into());
    }

    Ok(left
        .iter()
        .zip(right)
        .map(|(l, r)| vec![l.clone(), r.clone()])
        .collect())
}

pub(crate) fn random_value<V: Clone, R: Rng + ?Sized>(values: &[V], rng: &mut R) -> anyhow::Result<V> {
    values
        .choose(rng)
        .cloned()
        .ok_or_else(|| ListError::Empty { operation: "random" }.into())
}

pub(crate) fn join_text<V: AsRef<str>>(values: &[V], separator: &str) -> String {
    let mut joined = String::new();
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            joined.push_str(separator);
        }
        joined.push_str(value.as_ref());
    }
    joined
}

impl <V> Length for List<V> {
    fn length(&self) -> usize {
        self.values.len()
    }
}

impl <V> SnapShot<V> for List<V>
where
    V: Clone,
{
    fn snapshot(&self) -> Vec<V> {
        self.values.clone()
    }
}

impl <V> Query<V> for List<V>
where
    V: Clone + PartialEq,
{
    fn first(&self) -> V
    where
        V: Default,
    {
        self.values.first().cloned().unwrap_or_default()
    }

    fn last(&self) -> V
    where
        V: Default,
    {
        self.values.last().cloned().unwrap_or_default()
    }

    fn contains(&self, value: &V) -> bool {
        self.values.contains(value)
    }

    fn random_with<R>(&self, rng: &mut R) -> anyhow::Result<V>
    where
        R: Rng + ?Sized,
    {
        random_value(&self.values, rng)
    }
}

impl <V> NonReactive<V> for List<V>
where
    V: Clone,
{
    fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&V) -> bool,
    {
        self.values.iter().filter(|value| predicate(*value)).cloned().collect()
    }

    fn map<F>(&self, mapper: F) -> Self
    where
        F: FnMut(&V) -> V,
    {
        self.values.iter().map(mapper).collect()
    }

    fn chunk(&self, size: usize) -> anyhow::Result<Vec<Self>> {
        Ok(chunk_values(&self.values, size)?.into_iter().map(Self::from_vec).collect())
    }

    fn join<'a, I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        Self: 'a,
    {
        let mut joined = self.values.clone();
        for other in others {
            joined.extend_from_slice(&other.values);
        }
        Self::from_vec(joined)
    }

    fn nth(&self, step: usize) -> anyhow::Result<Self> {
        nth_values(&self.values, step).map(Self::from_vec)
    }

    fn reverse(&self) -> Self {
        self.values.iter().rev().cloned().collect()
    }

    fn shuffle_with<R>(&self, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut shuffled = self.values.clone();
        shuffled.shuffle(rng);
        Self::from_vec(shuffled)
    }

    fn unique(&self) -> Self
    where
        V: Eq + Hash,
    {
        Self::from_vec(unique_values(&self.values))
    }

    fn zip(&self, other: &Self) -> anyhow::Result<Vec<Self>> {
        Ok(zip_values(&self.values, &other.values)?.into_iter().map(Self::from_vec).collect())
    }

    fn join_to_string(&self, separator: &str) -> String
    where
        V: AsRef<str>,
    {
        join_text(&self.values, separator)
    }
}

impl <V> Reactive<V> for List<V> {
    fn add(&mut self, value: V) -> &mut Self {
        self.values.push(value);
        self
    }

    fn delete(&mut self, index: usize) -> &mut Self {
        if index < self.values.len() {
            self.values.remove(index);
        }
        self
    }
}

impl <V> From<Vec<V>> for List<V> {
    fn from(values: Vec<V>) -> Self {
        Self::from_vec(values)
    }
}

impl <V> From<List<V>> for Vec<V> {
    fn from(list: List<V>) -> Self {
        list.values
    }
}

impl <V> FromIterator<V> for List<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self { values: iter.into_iter().collect() }
    }
}

impl <V> Extend<V> for List<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}

impl <V> IntoIterator for List<V> {
    type Item = V;
    type IntoIter = std::vec::IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl <'a, V> IntoIterator for &'a List<V> {
    type Item = &'a V;
    type IntoIter = std::slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl <V> std::ops::Index<usize> for List<V> {
    type Output = V;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

impl <V> AsRef<[V]> for List<V> {
    fn as_ref(&self) -> &[V] {
        &self.values
    }
}

pub mod prelude;

#[cfg(test)]
mod tests;
