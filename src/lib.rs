//! # TLS Extensions
//!
//! Table-driven encoding, decoding and negotiation of TLS handshake
//! extensions.
//!
//! Each extension identifier is described once per direction by an
//! [`ExtensionType`] descriptor: whether to send it, how to write its
//! payload, how to apply a peer's payload, and what to do if the peer left it
//! out. Descriptors are registered into an immutable [`ExtensionTable`] that
//! fixes, for every handshake message, which extensions it carries and in
//! what order. The [`dispatch`] functions walk that table to write or read a
//! message's extension block against a per-connection [`Connection`].
//!
//! ## Feature Flags
//!
//! - `tls13` (default): supported_versions and the TLS 1.3 ServerHello list
//!
//! ## Modules
//!
//! - [`core`]: Descriptor trait, roles, message types, constants and errors
//! - [`wire`]: Bounds-checked big-endian reader and writer
//! - [`cipher`]: Cipher suites, groups, signature schemes, versions
//! - [`config`]: Shared handshake configuration
//! - [`connection`]: Per-connection negotiation state
//! - [`registry`]: Descriptor table and its builder
//! - [`dispatch`]: Extension block encode/decode
//! - [`extensions`]: Built-in extension descriptors
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use tls_extensions::prelude::*;
//!
//! # fn main() -> Result<(), tls_extensions::Error> {
//! let table = ExtensionTable::standard();
//! let mut client = Connection::client(Arc::new(Config::default()));
//!
//! let mut hello = WireWriter::new();
//! dispatch::send_extensions(MessageType::ClientHello, table, &mut client, &mut hello)?;
//!
//! let mut server = Connection::server(Arc::new(Config::default()));
//! let mut input = WireReader::new(hello.as_bytes());
//! dispatch::recv_extensions(MessageType::ClientHello, table, &mut server, &mut input)?;
//! assert!(server.ec_point_formats);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod cipher;
pub mod config;
pub mod connection;
pub mod core;
pub mod dispatch;
pub mod extensions;
pub mod registry;
pub mod wire;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::cipher::*;
    pub use crate::config::{Config, ConfigBuilder};
    pub use crate::connection::{Connection, ExtensionTracker};
    pub use crate::core::*;
    pub use crate::dispatch;
    pub use crate::registry::{Descriptor, ExtensionTable, ExtensionTableBuilder};
    pub use crate::wire::{WireReader, WireWriter};
}

// Re-export commonly used items at crate root
pub use crate::config::Config;
pub use crate::connection::Connection;
pub use crate::core::{Direction, Error, ExtensionError, ExtensionType, MessageType, Mode};
pub use crate::registry::ExtensionTable;
