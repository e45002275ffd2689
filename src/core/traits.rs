//! Core traits for extension negotiation.
//!
//! These traits define the interface every extension descriptor implements.

use std::fmt;

use super::error::ExtensionError;
use super::types::Direction;
use crate::connection::Connection;
use crate::wire::{WireReader, WireWriter};

/// Behavior of one extension identifier in one direction.
///
/// Descriptors are immutable and shared across all connections, so every
/// piece of per-connection state lives in the [`Connection`] they are handed.
///
/// # Requirements
///
/// - `send` MUST write only the payload; the dispatcher writes the type and
///   length header
/// - `recv` MUST NOT depend on the order other extensions were processed in,
///   only on state the handshake established before this message
/// - `recv` MUST treat its reader as the whole payload and never assume
///   trailing bytes belong to it
///
/// # Example
///
/// ```ignore
/// #[derive(Debug)]
/// struct Heartbeat;
///
/// impl ExtensionType for Heartbeat {
///     fn iana_value(&self) -> u16 { 15 }
///     fn direction(&self) -> Direction { Direction::ClientOriginated }
///     fn name(&self) -> &'static str { "heartbeat" }
///
///     fn should_send(&self, _conn: &Connection) -> bool { true }
///
///     fn send(&self, _conn: &Connection, out: &mut WireWriter) -> Result<(), ExtensionError> {
///         out.write_u8(1);
///         Ok(())
///     }
///
///     fn recv(&self, _conn: &mut Connection, payload: &mut WireReader<'_>) -> Result<(), ExtensionError> {
///         payload.read_u8()?;
///         Ok(())
///     }
/// }
/// ```
pub trait ExtensionType: fmt::Debug + Send + Sync {
    /// IANA extension identifier.
    fn iana_value(&self) -> u16;

    /// Whether this descriptor governs the request or the response.
    fn direction(&self) -> Direction;

    /// Human-readable name for logs.
    fn name(&self) -> &'static str;

    /// Decide whether to emit the extension. Evaluated right before `send`.
    fn should_send(&self, conn: &Connection) -> bool;

    /// Write the extension payload.
    fn send(&self, conn: &Connection, out: &mut WireWriter) -> Result<(), ExtensionError>;

    /// Parse the peer's payload and record the result on `conn`.
    fn recv(&self, conn: &mut Connection, payload: &mut WireReader<'_>) -> Result<(), ExtensionError>;

    /// Called when the peer could have sent this extension but did not.
    ///
    /// The default ignores the omission.
    fn if_missing(&self, conn: &mut Connection) -> Result<(), ExtensionError> {
        let _ = conn;
        Ok(())
    }

    /// True for server responses.
    fn is_response(&self) -> bool {
        self.direction().is_response()
    }
}

/// `if_missing` policy that fails the handshake.
pub fn error_if_missing<E: ExtensionType + ?Sized>(extension: &E) -> Result<(), ExtensionError> {
    Err(ExtensionError::MissingExtension(extension.iana_value()))
}
