//! Single module with all `stepvec` exports.
//!
//! # Examples
//!
//! Import all into current scope:
//!
//! ```
//! use stepvec::prelude::*;
//! ```
//!
//! Import all, named:
//!
//! ```
//! use stepvec::prelude as sv;
//! ```

pub use crate::error::{checked_len, Error, Result};
pub use crate::seq::StepVec;
