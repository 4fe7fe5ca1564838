//! # `stepvec`
//! A growable sequence container with an explicit growth step.
//!
//! 1. [Summary](#summary)
//! 1. [Examples](#examples)
//! 1. [Growth policy](#growth-policy)
//! 1. [Errors](#errors)
//!
//! # Summary
//!
//! `stepvec` defines [`StepVec<T>`](crate::seq::StepVec), an ordered,
//! owning collection of `T` values backed by one contiguous buffer. Unlike
//! [`Vec<T>`], which doubles its allocation as it sees fit, a `StepVec`
//! reserves storage in explicit increments: the *growth step*. Capacity is
//! exact, observable through [`capacity`](crate::seq::StepVec::capacity),
//! and fully decoupled from the logical length, so callers control the
//! amortization trade-off slot by slot.
//!
//! The container is single-threaded by design: it takes no locks, shares
//! nothing, and leaves any synchronization to the caller.
//!
//! # Examples
//!
//! ```
//! use stepvec::StepVec;
//!
//! let mut seq = StepVec::new();
//! seq.push(10);
//! seq.push(20);
//! seq.push(30);
//! assert_eq!(seq.len(), 3);
//! assert_eq!(seq.as_slice(), &[10, 20, 30]);
//!
//! seq.insert(1, 99)?;
//! assert_eq!(seq.as_slice(), &[10, 99, 20, 30]);
//!
//! assert_eq!(seq.remove(0)?, 10);
//! assert_eq!(seq.as_slice(), &[99, 20, 30]);
//! # Ok::<(), stepvec::Error>(())
//! ```
//!
//! Capacity follows the step:
//!
//! ```
//! use stepvec::StepVec;
//!
//! let mut seq: StepVec<i32> = StepVec::new();
//! seq.set_size(0, 4);
//! seq.push(1);
//! assert_eq!(seq.capacity(), 4);
//! seq.extend([2, 3, 4, 5]);
//! assert_eq!(seq.capacity(), 8);
//! seq.free_extra();
//! assert_eq!(seq.capacity(), 5);
//! ```
//!
//! # Growth policy
//!
//! Every insertion that finds the buffer full expands capacity by the
//! growth step before writing the element, and every reallocation preserves
//! the existing elements. [`set_size`](crate::seq::StepVec::set_size) is
//! the one operation that sets capacity to an exact figure, bypassing the
//! step. A step of 0 grows by exactly the shortfall, so `capacity() >=
//! len()` holds after every public operation.
//!
//! # Errors
//!
//! Indexed operations validate before they mutate and report
//! [`Error::OutOfRange`](crate::error::Error::OutOfRange) on a bad index;
//! nothing is partially applied. Counts arriving from signed input are
//! validated at the boundary by [`checked_len`](crate::error::checked_len).

pub mod error;
pub mod prelude;
pub mod seq;

pub use crate::error::{checked_len, Error};
pub use crate::seq::StepVec;
