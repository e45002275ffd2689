//! Supported versions (RFC 8446 §4.2.1)
//!
//! The client lists every version it accepts, newest first, behind a one-byte
//! length. The server picks the highest version both sides accept and answers
//! with that single version in the TLS 1.3 ServerHello.

use crate::cipher::ProtocolVersion;
use crate::connection::Connection;
use crate::core::{Direction, EXT_SUPPORTED_VERSIONS, ExtensionError, ExtensionType};
use crate::wire::{WireReader, WireWriter};

/// supported_versions sent in the ClientHello.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientSupportedVersions;

/// supported_versions selected by the server.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerSupportedVersions;

impl ExtensionType for ClientSupportedVersions {
    fn iana_value(&self) -> u16 {
        EXT_SUPPORTED_VERSIONS
    }

    fn direction(&self) -> Direction {
        Direction::ClientOriginated
    }

    fn name(&self) -> &'static str {
        "supported_versions"
    }

    fn should_send(&self, conn: &Connection) -> bool {
        conn.config().tls13_enabled()
    }

    fn send(&self, conn: &Connection, out: &mut WireWriter) -> Result<(), ExtensionError> {
        out.with_u8_length(|out| {
            for version in conn.config().versions_descending() {
                out.write_u16(version.0);
            }
            Ok(())
        })
    }

    fn recv(&self, conn: &mut Connection, payload: &mut WireReader<'_>) -> Result<(), ExtensionError> {
        let mut list = payload.read_u8_prefixed()?;
        if list.remaining() % 2 != 0 {
            return Err(ExtensionError::malformed(EXT_SUPPORTED_VERSIONS, "odd list length"));
        }

        let mut offered = Vec::with_capacity(list.remaining() / 2);
        while !list.is_empty() {
            offered.push(ProtocolVersion(list.read_u16()?));
        }

        let config = conn.config();
        let selected = offered.iter().copied().filter(|v| config.supports_version(*v)).max();
        if let Some(version) = selected {
            conn.actual_protocol_version = Some(version);
        }
        conn.peer_supported_versions = offered;
        Ok(())
    }
}

impl ExtensionType for ServerSupportedVersions {
    fn iana_value(&self) -> u16 {
        EXT_SUPPORTED_VERSIONS
    }

    fn direction(&self) -> Direction {
        Direction::ServerOriginated
    }

    fn name(&self) -> &'static str {
        "supported_versions"
    }

    fn should_send(&self, conn: &Connection) -> bool {
        conn.is_tls13()
    }

    fn send(&self, conn: &Connection, out: &mut WireWriter) -> Result<(), ExtensionError> {
        let version = conn
            .actual_protocol_version
            .ok_or(ExtensionError::malformed(EXT_SUPPORTED_VERSIONS, "no version negotiated"))?;
        out.write_u16(version.0);
        Ok(())
    }

    fn recv(&self, conn: &mut Connection, payload: &mut WireReader<'_>) -> Result<(), ExtensionError> {
        let version = ProtocolVersion(payload.read_u16()?);
        if version < ProtocolVersion::TLS13 || !conn.config().supports_version(version) {
            return Err(ExtensionError::malformed(
                EXT_SUPPORTED_VERSIONS,
                "server selected a version we did not offer",
            ));
        }
        conn.actual_protocol_version = Some(version);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::extensions::test_util::{client, payload, recv, server};

    #[test]
    fn test_client_payload() {
        let conn = client(Config::default());
        assert!(ClientSupportedVersions.should_send(&conn));
        assert_eq!(hex::encode(payload(&ClientSupportedVersions, &conn)), "0403040303");
    }

    #[test]
    fn test_server_selects_highest_mutual() {
        let mut conn = server(Config::default());
        recv(&ClientSupportedVersions, &mut conn, &hex::decode("06030403030302").unwrap()).unwrap();
        assert_eq!(conn.actual_protocol_version, Some(ProtocolVersion::TLS13));
        assert_eq!(conn.peer_supported_versions.len(), 3);
        assert_eq!(hex::encode(payload(&ServerSupportedVersions, &conn)), "0304");
    }

    #[test]
    fn test_server_capped_by_config() {
        let mut conn = server(
            Config::builder()
                .versions(ProtocolVersion::TLS12, ProtocolVersion::TLS12)
                .build()
                .unwrap(),
        );
        recv(&ClientSupportedVersions, &mut conn, &hex::decode("0403040303").unwrap()).unwrap();
        assert_eq!(conn.actual_protocol_version, Some(ProtocolVersion::TLS12));
        assert!(!ServerSupportedVersions.should_send(&conn));
    }

    #[test]
    fn test_odd_list_rejected() {
        let mut conn = server(Config::default());
        let err = recv(&ClientSupportedVersions, &mut conn, &[0x03, 0x03, 0x04, 0x03]).unwrap_err();
        assert!(matches!(err, ExtensionError::Malformed { .. }));
    }

    #[test]
    fn test_client_rejects_downgrade_in_extension() {
        let mut conn = client(Config::default());
        assert!(recv(&ServerSupportedVersions, &mut conn, &[0x03, 0x03]).is_err());
        recv(&ServerSupportedVersions, &mut conn, &[0x03, 0x04]).unwrap();
        assert!(conn.is_tls13());
    }
}
