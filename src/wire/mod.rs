//! Wire cursor
//!
//! Bounded, position-tracked reading and appending writing of the big-endian
//! integers and length-prefixed runs that TLS handshake messages are built from.
//!
//! Reads never go past the end of the slice they were given: a short buffer is
//! reported as [`WireError::Truncated`] and the reader position is left where it
//! was before the failed read.

mod reader;
mod writer;

pub use reader::*;
pub use writer::*;
