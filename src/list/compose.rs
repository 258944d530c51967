//! Free-standing constructors and combinators that change the element type
//! or do not start from an existing list.

use crate::error::ListError;

use super::List;

/// ### -> `each`
///
/// Applies `mapper` to every element and collects the results into a new
/// `List<E>`. Unlike `NonReactive::map`, the element type may change.
///
/// ```
/// use seqlist::prelude::*;
///
/// let text = each(&list![1, 2, 3], |v| v.to_string());
/// assert_eq!(text.values(), &["1", "2", "3"]);
/// ```
pub fn each<V, E, F>(list: &List<V>, mapper: F) -> List<E>
where
    F: FnMut(&V) -> E,
{
    list.iter().map(mapper).collect()
}

/// ### -> `every`
///
/// Like [`each`], but hands back a plain `Vec<E>` for results that are not
/// meant to be chained further.
pub fn every<V, E, F>(list: &List<V>, mapper: F) -> Vec<E>
where
    F: FnMut(&V) -> E,
{
    list.iter().map(mapper).collect()
}

/// ### -> `between`
///
/// Walks `i` from `min` to `max` inclusive and, whenever `i` is a multiple of
/// `group`, appends `generator(i - group + 1, group)`: one aggregate value for
/// each window of `group` positions that ends at `i`.
///
/// ### -> `Errors`
/// - `ListError::InvalidArgument` when `group <= 0`.
/// - `ListError::InvalidArgument` naming `min` when a window would start
///   below `i64::MIN`.
///
/// An empty list is returned when `max < min`.
///
/// ### -> `Usage`
///
/// ```
/// use seqlist::prelude::*;
///
/// // sum of every window of three positions in 1..=9
/// let sums = between(1, 9, 3, |start, count| (start..start + count).sum::<i64>())?;
/// assert_eq!(sums.values(), &[6, 15, 24]);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn between<V, F>(min: i64, max: i64, group: i64, mut generator: F) -> anyhow::Result<List<V>>
where
    F: FnMut(i64, i64) -> V,
{
    if group <= 0 {
        return Err(ListError::InvalidArgument { name: "group", value: group }.into());
    }

    if max < min {
        return Ok(List::new());
    }

    let windows = (min..=max)
        .filter(|i| i % group == 0)
        .map(|i| {
            i.checked_sub(group - 1)
                .map(|start| generator(start, group))
                .ok_or(ListError::InvalidArgument { name: "min", value: min })
        })
        .collect::<Result<List<V>, ListError>>()?;

    Ok(windows)
}
