//! Supported groups (RFC 8422 §5.1.1, RFC 8446 §4.2.7)
//!
//! Client-only. The server picks the first group of its own preference list
//! that the client also offered; no overlap leaves the group unset and lets
//! cipher suite selection fall back to a non-ECC suite.

use crate::connection::Connection;
use crate::core::{Direction, EXT_SUPPORTED_GROUPS, ExtensionError, ExtensionType};
use crate::wire::{WireReader, WireWriter};

use super::read_u16_list;

/// supported_groups sent in the ClientHello.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientSupportedGroups;

impl ExtensionType for ClientSupportedGroups {
    fn iana_value(&self) -> u16 {
        EXT_SUPPORTED_GROUPS
    }

    fn direction(&self) -> Direction {
        Direction::ClientOriginated
    }

    fn name(&self) -> &'static str {
        "supported_groups"
    }

    fn should_send(&self, conn: &Connection) -> bool {
        let config = conn.config();
        !config.groups.is_empty() && (config.ecc_enabled() || config.tls13_enabled())
    }

    fn send(&self, conn: &Connection, out: &mut WireWriter) -> Result<(), ExtensionError> {
        out.with_u16_length(|out| {
            for group in &conn.config().groups {
                out.write_u16(group.0);
            }
            Ok(())
        })
    }

    fn recv(&self, conn: &mut Connection, payload: &mut WireReader<'_>) -> Result<(), ExtensionError> {
        let offered = read_u16_list(EXT_SUPPORTED_GROUPS, payload)?;
        conn.negotiated_group = conn
            .config()
            .groups
            .iter()
            .copied()
            .find(|group| offered.contains(&group.0));

        if conn.negotiated_group.is_none() {
            tracing::debug!(offered = offered.len(), "no mutually supported group");
        }
        Ok(())
    }
}
