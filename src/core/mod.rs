//! Core traits, types, constants and errors.
//!
//! Everything else in the crate builds on these definitions.

mod constants;
mod error;
mod traits;
mod types;

pub use constants::*;
pub use error::*;
pub use traits::*;
pub use types::*;
