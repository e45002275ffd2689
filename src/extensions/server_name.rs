//! Server name indication (RFC 6066 §3)
//!
//! Wire format (request):
//! ```text
//! +0   List Length (2 bytes BE16)
//! +2   Name Type (1 byte, 0 = host_name)
//! +3   Name Length (2 bytes BE16)
//! +5   Host Name (variable)
//! ```
//!
//! The response is empty and only sent when the server recognized the name.

use crate::connection::Connection;
use crate::core::{
    Direction, EXT_SERVER_NAME, ExtensionError, ExtensionType, MAX_SERVER_NAME_LEN, SERVER_NAME_HOST_NAME,
};
use crate::wire::{WireReader, WireWriter};

use super::expect_empty;

/// server_name sent in the ClientHello.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientServerName;

/// server_name acknowledgement from the server.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerServerName;

/// Pull the first host_name out of a server_name list.
fn read_host_name(payload: &mut WireReader<'_>) -> Result<Option<String>, ExtensionError> {
    let mut list = payload.read_u16_prefixed()?;
    while !list.is_empty() {
        let name_type = list.read_u8()?;
        let name = list.read_u16_prefixed()?.rest();
        if name_type != SERVER_NAME_HOST_NAME {
            continue;
        }
        if name.is_empty() || name.len() > MAX_SERVER_NAME_LEN {
            return Err(ExtensionError::malformed(EXT_SERVER_NAME, "bad host name length"));
        }
        let name = std::str::from_utf8(name)
            .ok()
            .filter(|n| n.is_ascii())
            .ok_or(ExtensionError::malformed(EXT_SERVER_NAME, "host name is not ASCII"))?;
        return Ok(Some(name.to_owned()));
    }
    Ok(None)
}

impl ExtensionType for ClientServerName {
    fn iana_value(&self) -> u16 {
        EXT_SERVER_NAME
    }

    fn direction(&self) -> Direction {
        Direction::ClientOriginated
    }

    fn name(&self) -> &'static str {
        "server_name"
    }

    fn should_send(&self, conn: &Connection) -> bool {
        conn.config().server_name.is_some()
    }

    fn send(&self, conn: &Connection, out: &mut WireWriter) -> Result<(), ExtensionError> {
        let name = conn.config().server_name.as_deref().unwrap_or_default();
        out.with_u16_length(|out| {
            out.write_u8(SERVER_NAME_HOST_NAME);
            out.with_u16_length(|out| {
                out.write_bytes(name.as_bytes());
                Ok(())
            })
        })
    }

    fn recv(&self, conn: &mut Connection, payload: &mut WireReader<'_>) -> Result<(), ExtensionError> {
        if let Some(name) = read_host_name(payload)? {
            conn.server_name_used = conn.config().has_certificate_for(&name);
            conn.server_name = Some(name);
        }
        Ok(())
    }
}

impl ExtensionType for ServerServerName {
    fn iana_value(&self) -> u16 {
        EXT_SERVER_NAME
    }

    fn direction(&self) -> Direction {
        Direction::ServerOriginated
    }

    fn name(&self) -> &'static str {
        "server_name"
    }

    fn should_send(&self, conn: &Connection) -> bool {
        conn.server_name_used
    }

    fn send(&self, _conn: &Connection, _out: &mut WireWriter) -> Result<(), ExtensionError> {
        Ok(())
    }

    fn recv(&self, conn: &mut Connection, payload: &mut WireReader<'_>) -> Result<(), ExtensionError> {
        expect_empty(EXT_SERVER_NAME, payload)?;
        conn.server_name_used = true;
        Ok(())
    }
}
