pub use {
    crate::list::List,
    crate::list::compose::{between, each, every},
    crate::list::traits::{Length, NonReactive, Query, Reactive, SnapShot},
    crate::error::ListError,
    crate::list,
};

#[cfg(feature = "shared")]
pub use crate::list::shared::SharedList;
