//! Session ticket (RFC 5077 §3.2)
//!
//! The client sends its ticket, or nothing to ask for a new one. The server's
//! answer is empty and promises a NewSessionTicket message.

use crate::connection::Connection;
use crate::core::{Direction, EXT_SESSION_TICKET, ExtensionError, ExtensionType};
use crate::wire::{WireReader, WireWriter};

use super::expect_empty;

/// session_ticket sent in the ClientHello.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientSessionTicket;

/// session_ticket acknowledgement from the server.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerSessionTicket;

impl ExtensionType for ClientSessionTicket {
    fn iana_value(&self) -> u16 {
        EXT_SESSION_TICKET
    }

    fn direction(&self) -> Direction {
        Direction::ClientOriginated
    }

    fn name(&self) -> &'static str {
        "session_ticket"
    }

    fn should_send(&self, conn: &Connection) -> bool {
        let config = conn.config();
        config.session_tickets && config.legacy_versions_enabled()
    }

    fn send(&self, conn: &Connection, out: &mut WireWriter) -> Result<(), ExtensionError> {
        out.write_bytes(&conn.session_ticket);
        Ok(())
    }

    fn recv(&self, conn: &mut Connection, payload: &mut WireReader<'_>) -> Result<(), ExtensionError> {
        if !conn.config().session_tickets {
            return Ok(());
        }
        conn.session_ticket = payload.read_bytes(payload.remaining())?.to_vec();
        conn.session_ticket_negotiated = true;
        Ok(())
    }
}

impl ExtensionType for ServerSessionTicket {
    fn iana_value(&self) -> u16 {
        EXT_SESSION_TICKET
    }

    fn direction(&self) -> Direction {
        Direction::ServerOriginated
    }

    fn name(&self) -> &'static str {
        "session_ticket"
    }

    fn should_send(&self, conn: &Connection) -> bool {
        conn.session_ticket_negotiated
    }

    fn send(&self, _conn: &Connection, _out: &mut WireWriter) -> Result<(), ExtensionError> {
        Ok(())
    }

    fn recv(&self, conn: &mut Connection, payload: &mut WireReader<'_>) -> Result<(), ExtensionError> {
        expect_empty(EXT_SESSION_TICKET, payload)?;
        conn.session_ticket_negotiated = true;
        Ok(())
    }
}
