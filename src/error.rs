use thiserror::Error;

/// ### -> `ListError`
///
/// The recoverable failure kinds of the list operations. Fallible methods
/// return `anyhow::Result<_>` carrying one of these, so callers that need
/// to branch on the kind can `downcast_ref::<ListError>()`.
///
/// Boundary policies that are *not* errors:
/// - `delete` with an index past the end is a no-op.
/// - `first`/`last` on an empty list yield `V::default()`.
/// - `range` with `max < min` yields an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// Both operands of a pairwise operation must hold the same number of elements.
    #[error("lists must be of the same length (left: {left}, right: {right})")]
    LengthMismatch { left: usize, right: usize },

    /// A size, step or group argument outside its valid domain.
    #[error("invalid argument `{name}`: {value} (must be greater than zero)")]
    InvalidArgument { name: &'static str, value: i64 },

    /// The operation needs at least one element.
    #[error("'{operation}' requires a non-empty list")]
    Empty { operation: &'static str },
}
