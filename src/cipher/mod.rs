//! Negotiable handshake parameters
//!
//! Cipher suites with their key-exchange algorithm, named groups, signature
//! schemes and protocol versions. Selection among these is done by the
//! handshake; this module only describes them.

mod params;
mod suites;

pub use params::*;
pub use suites::*;
