//! Application-layer protocol negotiation (RFC 7301)
//!
//! Wire format:
//! ```text
//! +0   List Length (2 bytes BE16)
//! +2   Protocol Length (1 byte)   \ repeated
//! +3   Protocol Name (variable)   /
//! ```
//!
//! The server answers with a list holding exactly the protocol it selected,
//! the first of its own preferences that the client offered.

use crate::connection::Connection;
use crate::core::{Direction, EXT_ALPN, ExtensionError, ExtensionType};
use crate::wire::{WireReader, WireWriter};

/// ALPN protocol list sent in the ClientHello.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientAlpn;

/// ALPN protocol selected by the server.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerAlpn;

fn write_protocols<'p>(out: &mut WireWriter, protocols: impl IntoIterator<Item = &'p [u8]>) -> Result<(), ExtensionError> {
    out.with_u16_length(|out| {
        for proto in protocols {
            out.with_u8_length(|out| -> Result<(), ExtensionError> {
                out.write_bytes(proto);
                Ok(())
            })?;
        }
        Ok(())
    })
}

fn read_protocols<'a>(payload: &mut WireReader<'a>) -> Result<Vec<&'a [u8]>, ExtensionError> {
    let mut list = payload.read_u16_prefixed()?;
    let mut protocols = Vec::new();
    while !list.is_empty() {
        let proto = list.read_u8_prefixed()?.rest();
        if proto.is_empty() {
            return Err(ExtensionError::malformed(EXT_ALPN, "empty protocol name"));
        }
        protocols.push(proto);
    }
    Ok(protocols)
}

impl ExtensionType for ClientAlpn {
    fn iana_value(&self) -> u16 {
        EXT_ALPN
    }

    fn direction(&self) -> Direction {
        Direction::ClientOriginated
    }

    fn name(&self) -> &'static str {
        "application_layer_protocol_negotiation"
    }

    fn should_send(&self, conn: &Connection) -> bool {
        !conn.config().alpn_protocols.is_empty()
    }

    fn send(&self, conn: &Connection, out: &mut WireWriter) -> Result<(), ExtensionError> {
        write_protocols(out, conn.config().alpn_protocols.iter().map(Vec::as_slice))
    }

    fn recv(&self, conn: &mut Connection, payload: &mut WireReader<'_>) -> Result<(), ExtensionError> {
        let offered = read_protocols(payload)?;
        conn.application_protocol = conn
            .config()
            .alpn_protocols
            .iter()
            .find(|ours| offered.contains(&ours.as_slice()))
            .cloned();
        Ok(())
    }
}

impl ExtensionType for ServerAlpn {
    fn iana_value(&self) -> u16 {
        EXT_ALPN
    }

    fn direction(&self) -> Direction {
        Direction::ServerOriginated
    }

    fn name(&self) -> &'static str {
        "application_layer_protocol_negotiation"
    }

    fn should_send(&self, conn: &Connection) -> bool {
        conn.application_protocol.is_some()
    }

    fn send(&self, conn: &Connection, out: &mut WireWriter) -> Result<(), ExtensionError> {
        write_protocols(out, conn.application_protocol.as_deref())
    }

    fn recv(&self, conn: &mut Connection, payload: &mut WireReader<'_>) -> Result<(), ExtensionError> {
        let selected = match read_protocols(payload)?.as_slice() {
            [one] => one.to_vec(),
            _ => return Err(ExtensionError::malformed(EXT_ALPN, "server must select exactly one protocol")),
        };
        if !conn.config().alpn_protocols.contains(&selected) {
            return Err(ExtensionError::malformed(EXT_ALPN, "server selected a protocol we did not offer"));
        }
        conn.application_protocol = Some(selected);
        Ok(())
    }
}
