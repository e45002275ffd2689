//! Per-connection handshake state.
//!
//! A [`Connection`] is created for each TLS connection and dropped at teardown.
//! Extension descriptors read the negotiated fields to make send decisions and
//! write their results into it when a peer's extension is parsed. Fields the
//! surrounding handshake owns (protocol version, cipher suite) are set by that
//! handshake before the extension lists that depend on them are processed.

mod tracking;

pub use tracking::*;

use std::sync::Arc;

use crate::cipher::{CipherSuite, MaxFragmentLength, NamedGroup, ProtocolVersion, SignatureScheme};
use crate::config::Config;
use crate::core::Mode;

/// Handshake state for one connection.
#[derive(Debug, Clone)]
pub struct Connection {
    mode: Mode,
    config: Arc<Config>,
    extensions: ExtensionTracker,

    /// Negotiated protocol version, once known.
    pub actual_protocol_version: Option<ProtocolVersion>,

    /// Selected cipher suite, once known.
    pub cipher_suite: Option<CipherSuite>,

    /// Peer announced EC point formats (uncompressed is implied).
    pub ec_point_formats: bool,

    /// Group chosen from the peer's supported_groups.
    pub negotiated_group: Option<NamedGroup>,

    /// Signature schemes the peer accepts.
    pub peer_signature_schemes: Vec<SignatureScheme>,

    /// Host name the client asked for.
    pub server_name: Option<String>,

    /// Server recognized the requested host name.
    pub server_name_used: bool,

    /// Negotiated ALPN protocol.
    pub application_protocol: Option<Vec<u8>>,

    /// Extended master secret is in use.
    pub ems_negotiated: bool,

    /// Ticket a client presents for resumption (may be empty).
    pub session_ticket: Vec<u8>,

    /// Both sides agreed to use session tickets.
    pub session_ticket_negotiated: bool,

    /// Peer signalled RFC 5746 secure renegotiation.
    pub secure_renegotiation: bool,

    /// Agreed maximum fragment length.
    pub negotiated_mfl: Option<MaxFragmentLength>,

    /// Client asked for a stapled OCSP response.
    pub status_requested: bool,

    /// Server will send a CertificateStatus message.
    pub ocsp_status_expected: bool,

    /// Versions the client listed in supported_versions.
    pub peer_supported_versions: Vec<ProtocolVersion>,
}

impl Connection {
    /// Create state for a new connection.
    pub fn new(mode: Mode, config: Arc<Config>) -> Self {
        Self {
            mode,
            config,
            extensions: ExtensionTracker::default(),
            actual_protocol_version: None,
            cipher_suite: None,
            ec_point_formats: false,
            negotiated_group: None,
            peer_signature_schemes: Vec::new(),
            server_name: None,
            server_name_used: false,
            application_protocol: None,
            ems_negotiated: false,
            session_ticket: Vec::new(),
            session_ticket_negotiated: false,
            secure_renegotiation: false,
            negotiated_mfl: None,
            status_requested: false,
            ocsp_status_expected: false,
            peer_supported_versions: Vec::new(),
        }
    }

    /// Client-side connection.
    pub fn client(config: Arc<Config>) -> Self {
        Self::new(Mode::Client, config)
    }

    /// Server-side connection.
    pub fn server(config: Arc<Config>) -> Self {
        Self::new(Mode::Server, config)
    }

    /// Role of this connection.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Shared configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Extension request/response bookkeeping.
    pub fn extensions(&self) -> &ExtensionTracker {
        &self.extensions
    }

    pub(crate) fn extensions_mut(&mut self) -> &mut ExtensionTracker {
        &mut self.extensions
    }

    /// True once a cipher suite whose key exchange includes ECDHE is selected.
    pub fn negotiated_ecdhe(&self) -> bool {
        self.cipher_suite.is_some_and(|suite| suite.uses_ecdhe())
    }

    /// True if TLS 1.3 was negotiated.
    pub fn is_tls13(&self) -> bool {
        self.actual_protocol_version == Some(ProtocolVersion::TLS13)
    }

    /// Forget per-message tracking before processing a new hello exchange.
    ///
    /// Negotiated results are left alone.
    pub fn reset_extension_tracking(&mut self) {
        self.extensions = ExtensionTracker::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::KeyExchange;

    #[test]
    fn test_new_connection_is_blank() {
        let conn = Connection::client(Arc::new(Config::default()));
        assert_eq!(conn.mode(), Mode::Client);
        assert!(conn.cipher_suite.is_none());
        assert!(!conn.ec_point_formats);
        assert!(!conn.negotiated_ecdhe());
        assert!(conn.extensions().is_empty());
    }

    #[test]
    fn test_negotiated_ecdhe() {
        let mut conn = Connection::server(Arc::new(Config::default()));

        conn.cipher_suite = Some(CipherSuite::RSA_AES128_GCM_SHA256);
        assert!(!conn.negotiated_ecdhe());

        conn.cipher_suite = Some(CipherSuite::ECDHE_RSA_AES128_GCM_SHA256);
        assert!(conn.negotiated_ecdhe());

        conn.cipher_suite = Some(CipherSuite::new(0xfffe, "TEST_HYBRID", KeyExchange::HybridEcdheKem));
        assert!(conn.negotiated_ecdhe());
    }

    #[test]
    fn test_reset_tracking_keeps_results() {
        let mut conn = Connection::server(Arc::new(Config::default()));
        conn.ec_point_formats = true;
        conn.extensions_mut().mark_request_received(11);

        conn.reset_extension_tracking();
        assert!(conn.extensions().is_empty());
        assert!(conn.ec_point_formats);
    }
}
