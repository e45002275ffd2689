//! Signature algorithms (RFC 8446 §4.2.3)
//!
//! Client-only. The server records the schemes the client accepts; choosing
//! one happens when the certificate is selected.

use crate::cipher::{ProtocolVersion, SignatureScheme};
use crate::connection::Connection;
use crate::core::{Direction, EXT_SIGNATURE_ALGORITHMS, ExtensionError, ExtensionType};
use crate::wire::{WireReader, WireWriter};

use super::read_u16_list;

/// signature_algorithms sent in the ClientHello.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientSignatureAlgorithms;

impl ExtensionType for ClientSignatureAlgorithms {
    fn iana_value(&self) -> u16 {
        EXT_SIGNATURE_ALGORITHMS
    }

    fn direction(&self) -> Direction {
        Direction::ClientOriginated
    }

    fn name(&self) -> &'static str {
        "signature_algorithms"
    }

    fn should_send(&self, conn: &Connection) -> bool {
        let config = conn.config();
        config.max_version >= ProtocolVersion::TLS12 && !config.signature_schemes.is_empty()
    }

    fn send(&self, conn: &Connection, out: &mut WireWriter) -> Result<(), ExtensionError> {
        out.with_u16_length(|out| {
            for scheme in &conn.config().signature_schemes {
                out.write_u16(scheme.0);
            }
            Ok(())
        })
    }

    fn recv(&self, conn: &mut Connection, payload: &mut WireReader<'_>) -> Result<(), ExtensionError> {
        let schemes = read_u16_list(EXT_SIGNATURE_ALGORITHMS, payload)?;
        if schemes.is_empty() {
            return Err(ExtensionError::malformed(EXT_SIGNATURE_ALGORITHMS, "empty scheme list"));
        }
        conn.peer_signature_schemes = schemes.into_iter().map(SignatureScheme).collect();
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
        let conn = client(
            Config::builder()
                .signature_schemes(&[SignatureScheme::ED25519, SignatureScheme::RSA_PSS_RSAE_SHA256])
                .build()
                .unwrap(),
        );
        assert!(ClientSignatureAlgorithms.should_send(&conn));
        assert_eq!(hex::encode(payload(&ClientSignatureAlgorithms, &conn)), "000408070804");
    }

    #[test]
    fn test_not_sent_below_tls12() {
        let conn = client(
            Config::builder()
                .versions(ProtocolVersion::TLS10, ProtocolVersion::TLS11)
                .build()
                .unwrap(),
        );
        assert!(!ClientSignatureAlgorithms.should_send(&conn));
    }

    #[test]
    fn test_server_records_schemes() {
        let mut conn = server(Config::default());
        recv(&ClientSignatureAlgorithms, &mut conn, &hex::decode("000404030807").unwrap()).unwrap();
        assert_eq!(
            conn.peer_signature_schemes,
            vec![SignatureScheme::ECDSA_SECP256R1_SHA256, SignatureScheme::ED25519]
        );
    }

    #[test]
    fn test_empty_list_rejected() {
        let mut conn = server(Config::default());
        let err = recv(&ClientSignatureAlgorithms, &mut conn, &[0x00, 0x00]).unwrap_err();
        assert!(matches!(err, ExtensionError::Malformed { .. }));
    }
}
