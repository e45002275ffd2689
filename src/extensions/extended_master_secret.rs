//! Extended master secret (RFC 7627)
//!
//! Empty in both directions. A client configured to require EMS treats a
//! ServerHello without it as a negotiation failure.

use crate::connection::Connection;
use crate::core::{Direction, EXT_EXTENDED_MASTER_SECRET, ExtensionError, ExtensionType, error_if_missing};
use crate::wire::{WireReader, WireWriter};

use super::expect_empty;

/// extended_master_secret sent in the ClientHello.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientExtendedMasterSecret;

/// extended_master_secret echoed by the server.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerExtendedMasterSecret;

impl ExtensionType for ClientExtendedMasterSecret {
    fn iana_value(&self) -> u16 {
        EXT_EXTENDED_MASTER_SECRET
    }

    fn direction(&self) -> Direction {
        Direction::ClientOriginated
    }

    fn name(&self) -> &'static str {
        "extended_master_secret"
    }

    fn should_send(&self, conn: &Connection) -> bool {
        let config = conn.config();
        config.extended_master_secret && config.legacy_versions_enabled()
    }

    fn send(&self, _conn: &Connection, _out: &mut WireWriter) -> Result<(), ExtensionError> {
        Ok(())
    }

    fn recv(&self, conn: &mut Connection, payload: &mut WireReader<'_>) -> Result<(), ExtensionError> {
        expect_empty(EXT_EXTENDED_MASTER_SECRET, payload)?;
        conn.ems_negotiated = conn.config().extended_master_secret;
        Ok(())
    }
}

impl ExtensionType for ServerExtendedMasterSecret {
    fn iana_value(&self) -> u16 {
        EXT_EXTENDED_MASTER_SECRET
    }

    fn direction(&self) -> Direction {
        Direction::ServerOriginated
    }

    fn name(&self) -> &'static str {
        "extended_master_secret"
    }

    fn should_send(&self, conn: &Connection) -> bool {
        conn.ems_negotiated
    }

    fn send(&self, _conn: &Connection, _out: &mut WireWriter) -> Result<(), ExtensionError> {
        Ok(())
    }

    fn recv(&self, conn: &mut Connection, payload: &mut WireReader<'_>) -> Result<(), ExtensionError> {
        expect_empty(EXT_EXTENDED_MASTER_SECRET, payload)?;
        conn.ems_negotiated = true;
        Ok(())
    }

    fn if_missing(&self, conn: &mut Connection) -> Result<(), ExtensionError> {
        if conn.config().require_extended_master_secret {
            return error_if_missing(self);
        }
        conn.ems_negotiated = false;
        Ok(())
    }
}
