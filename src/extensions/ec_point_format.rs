//! EC point formats extension (RFC 8422 §5.1.2)
//!
//! Only the uncompressed format is ever offered.
//!
//! Wire format:
//! ```text
//! +0   Format Count (1 byte)
//! +1   Formats (count bytes)
//! ```
//!
//! Received lists are bounds-checked but their contents are not validated.
//! Uncompressed is mandatory to implement, so a peer that sends the extension
//! at all is taken to support it; a peer that somehow only supports compressed
//! points fails later, when no compatible ECDHE suite can be negotiated.

use crate::connection::Connection;
use crate::core::{Direction, EC_POINT_FORMAT_UNCOMPRESSED, EXT_EC_POINT_FORMATS, ExtensionError, ExtensionType};
use crate::dispatch;
use crate::wire::{WireReader, WireWriter};

/// ec_point_formats sent in the ClientHello.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientEcPointFormats;

/// ec_point_formats sent in the ServerHello.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerEcPointFormats;

fn send_point_formats(out: &mut WireWriter) -> Result<(), ExtensionError> {
    // We only support one
    out.write_u8(1);
    out.write_u8(EC_POINT_FORMAT_UNCOMPRESSED);
    Ok(())
}

fn read_point_formats(payload: &mut WireReader<'_>) -> Result<(), ExtensionError> {
    let formats = payload.read_u8_prefixed()?;
    tracing::trace!(formats = ?formats.rest(), "peer EC point formats");
    Ok(())
}

impl ExtensionType for ClientEcPointFormats {
    fn iana_value(&self) -> u16 {
        EXT_EC_POINT_FORMATS
    }

    fn direction(&self) -> Direction {
        Direction::ClientOriginated
    }

    fn name(&self) -> &'static str {
        "ec_point_formats"
    }

    fn should_send(&self, conn: &Connection) -> bool {
        conn.config().ecc_enabled()
    }

    fn send(&self, _conn: &Connection, out: &mut WireWriter) -> Result<(), ExtensionError> {
        send_point_formats(out)
    }

    fn recv(&self, conn: &mut Connection, payload: &mut WireReader<'_>) -> Result<(), ExtensionError> {
        read_point_formats(payload)?;
        conn.ec_point_formats = true;
        Ok(())
    }
}

impl ExtensionType for ServerEcPointFormats {
    fn iana_value(&self) -> u16 {
        EXT_EC_POINT_FORMATS
    }

    fn direction(&self) -> Direction {
        Direction::ServerOriginated
    }

    fn name(&self) -> &'static str {
        "ec_point_formats"
    }

    fn should_send(&self, conn: &Connection) -> bool {
        conn.negotiated_ecdhe()
    }

    fn send(&self, _conn: &Connection, out: &mut WireWriter) -> Result<(), ExtensionError> {
        send_point_formats(out)
    }

    fn recv(&self, _conn: &mut Connection, payload: &mut WireReader<'_>) -> Result<(), ExtensionError> {
        read_point_formats(payload)
    }
}

// =============================================================================
// LEGACY ENTRY POINTS
// =============================================================================
//
// Kept for callers that size buffers before running the extension list.
// Both go through the same code as the dispatcher.

/// Bytes the server ec_point_formats container will occupy, or 0 if it is not sent.
///
/// When sent this is [`EXTENSION_HEADER_SIZE`](crate::core::EXTENSION_HEADER_SIZE)
/// plus the two payload bytes.
pub fn server_ec_point_format_extension_size(conn: &Connection) -> Result<usize, ExtensionError> {
    dispatch::extension_size(&ServerEcPointFormats, conn)
}

/// Apply a client ec_point_formats payload received outside the extension list.
pub fn recv_client_ec_point_formats(conn: &mut Connection, payload: &[u8]) -> Result<(), ExtensionError> {
    dispatch::recv_extension(&ClientEcPointFormats, conn, payload)
}
