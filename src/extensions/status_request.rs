//! Certificate status request (RFC 6066 §8)
//!
//! Wire format (request):
//! ```text
//! +0   Status Type (1 byte, 1 = ocsp)
//! +1   Responder ID List (2 bytes BE16 length + entries)
//! +3   Request Extensions (2 bytes BE16 length + data)
//! ```
//!
//! Responder IDs and request extensions are never sent and not inspected when
//! received. The server's response is empty.

use crate::connection::Connection;
use crate::core::{Direction, EXT_STATUS_REQUEST, ExtensionError, ExtensionType, STATUS_TYPE_OCSP};
use crate::wire::{WireReader, WireWriter};

use super::expect_empty;

/// status_request sent in the ClientHello.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientStatusRequest;

/// status_request acknowledgement from the server.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerStatusRequest;

impl ExtensionType for ClientStatusRequest {
    fn iana_value(&self) -> u16 {
        EXT_STATUS_REQUEST
    }

    fn direction(&self) -> Direction {
        Direction::ClientOriginated
    }

    fn name(&self) -> &'static str {
        "status_request"
    }

    fn should_send(&self, conn: &Connection) -> bool {
        conn.config().status_request
    }

    fn send(&self, _conn: &Connection, out: &mut WireWriter) -> Result<(), ExtensionError> {
        out.write_u8(STATUS_TYPE_OCSP);
        // responder_id_list, request_extensions
        out.write_u16(0);
        out.write_u16(0);
        Ok(())
    }

    fn recv(&self, conn: &mut Connection, payload: &mut WireReader<'_>) -> Result<(), ExtensionError> {
        let status_type = payload.read_u8()?;
        conn.status_requested = status_type == STATUS_TYPE_OCSP;
        Ok(())
    }
}

impl ExtensionType for ServerStatusRequest {
    fn iana_value(&self) -> u16 {
        EXT_STATUS_REQUEST
    }

    fn direction(&self) -> Direction {
        Direction::ServerOriginated
    }

    fn name(&self) -> &'static str {
        "status_request"
    }

    fn should_send(&self, conn: &Connection) -> bool {
        conn.status_requested && conn.config().ocsp_response.is_some()
    }

    fn send(&self, _conn: &Connection, _out: &mut WireWriter) -> Result<(), ExtensionError> {
        Ok(())
    }

    fn recv(&self, conn: &mut Connection, payload: &mut WireReader<'_>) -> Result<(), ExtensionError> {
        expect_empty(EXT_STATUS_REQUEST, payload)?;
        conn.ocsp_status_expected = true;
        Ok(())
    }
}
