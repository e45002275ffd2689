//! Renegotiation indication (RFC 5746 §3.2)
//!
//! Wire format:
//! ```text
//! +0   Renegotiated Connection Length (1 byte)
//! +1   Renegotiated Connection (variable)
//! ```
//!
//! Renegotiation itself is not supported, so only the initial-handshake form
//! (an empty renegotiated_connection) is ever sent or accepted.

use crate::connection::Connection;
use crate::core::{Direction, EXT_RENEGOTIATION_INFO, ExtensionError, ExtensionType};
use crate::wire::{WireReader, WireWriter};

/// renegotiation_info sent in the ClientHello.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientRenegotiationInfo;

/// renegotiation_info answered by the server.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerRenegotiationInfo;

fn read_initial(payload: &mut WireReader<'_>) -> Result<(), ExtensionError> {
    let verify_data = payload.read_u8_prefixed()?;
    if !verify_data.is_empty() {
        return Err(ExtensionError::malformed(
            EXT_RENEGOTIATION_INFO,
            "non-empty renegotiated_connection on initial handshake",
        ));
    }
    Ok(())
}

impl ExtensionType for ClientRenegotiationInfo {
    fn iana_value(&self) -> u16 {
        EXT_RENEGOTIATION_INFO
    }

    fn direction(&self) -> Direction {
        Direction::ClientOriginated
    }

    fn name(&self) -> &'static str {
        "renegotiation_info"
    }

    fn should_send(&self, conn: &Connection) -> bool {
        conn.config().legacy_versions_enabled()
    }

    fn send(&self, _conn: &Connection, out: &mut WireWriter) -> Result<(), ExtensionError> {
        out.write_u8(0);
        Ok(())
    }

    fn recv(&self, conn: &mut Connection, payload: &mut WireReader<'_>) -> Result<(), ExtensionError> {
        read_initial(payload)?;
        conn.secure_renegotiation = true;
        Ok(())
    }
}

impl ExtensionType for ServerRenegotiationInfo {
    fn iana_value(&self) -> u16 {
        EXT_RENEGOTIATION_INFO
    }

    fn direction(&self) -> Direction {
        Direction::ServerOriginated
    }

    fn name(&self) -> &'static str {
        "renegotiation_info"
    }

    fn should_send(&self, conn: &Connection) -> bool {
        conn.secure_renegotiation
    }

    fn send(&self, _conn: &Connection, out: &mut WireWriter) -> Result<(), ExtensionError> {
        out.write_u8(0);
        Ok(())
    }

    fn recv(&self, conn: &mut Connection, payload: &mut WireReader<'_>) -> Result<(), ExtensionError> {
        read_initial(payload)?;
        conn.secure_renegotiation = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::ProtocolVersion;
    use crate::config::Config;
    use crate::extensions::test_util::{client, payload, recv, server};

    #[test]
    fn test_initial_handshake_payload() {
        let conn = client(Config::default());
        assert!(ClientRenegotiationInfo.should_send(&conn));
        assert_eq!(payload(&ClientRenegotiationInfo, &conn), vec![0x00]);
    }

    #[test]
    fn test_tls13_only_client_does_not_send() {
        let conn = client(
            Config::builder()
                .versions(ProtocolVersion::TLS13, ProtocolVersion::TLS13)
                .build()
                .unwrap(),
        );
        assert!(!ClientRenegotiationInfo.should_send(&conn));
    }

    #[test]
    fn test_server_marks_secure_renegotiation() {
        let mut conn = server(Config::default());
        recv(&ClientRenegotiationInfo, &mut conn, &[0x00]).unwrap();
        assert!(conn.secure_renegotiation);
        assert!(ServerRenegotiationInfo.should_send(&conn));
    }

    #[test]
    fn test_non_empty_rejected() {
        let mut conn = client(Config::default());
        let err = recv(&ServerRenegotiationInfo, &mut conn, &[0x02, 0xaa, 0xbb]).unwrap_err();
        assert!(matches!(err, ExtensionError::Malformed { .. }));
        assert!(!conn.secure_renegotiation);
    }
}
