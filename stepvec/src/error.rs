#![warn(missing_docs)]

//! Error surface of the container operations.
//!
//! Two kinds only: [`Error::OutOfRange`] for indexed access outside the live
//! range, and [`Error::InvalidArgument`] for counts arriving from a signed
//! external source that cannot name a slot. A failing operation reports its
//! error before touching the container, so no partial mutation is ever
//! observable.

use thiserror::Error;

/// Error reported by [`StepVec`][crate::seq::StepVec] operations.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A size or growth step read from a signed source was not representable
    /// as a count.
    #[error("invalid size or growth step: {value}")]
    InvalidArgument {
        /// The rejected input value.
        value: i64,
    },

    /// An index fell outside the sequence's valid range.
    #[error("index {index} out of bounds for sequence of length {len}")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// Length of the sequence at the time of the access.
        len: usize,
    },
}

/// Shorthand for results of fallible container operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Validates a count read from a signed external source.
///
/// Counts inside the library are `usize`, so negative sizes and growth steps
/// cannot be expressed at all; this is the boundary where signed input (such
/// as integers parsed from a console) is checked before it reaches the
/// container.
///
/// # Examples
///
/// ```
/// use stepvec::{checked_len, Error};
///
/// assert_eq!(checked_len(3), Ok(3));
/// assert_eq!(checked_len(-1), Err(Error::InvalidArgument { value: -1 }));
/// ```
pub fn checked_len(value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| Error::InvalidArgument { value })
}
