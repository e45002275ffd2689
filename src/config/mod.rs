//! Handshake configuration.
//!
//! A [`Config`] is built once, validated, and shared by every connection that
//! uses it (`Arc<Config>`). Extension `should_send` policies read it to decide
//! what a ClientHello offers and what a server is willing to answer.

use crate::cipher::{
    CipherSuite, DEFAULT_CIPHER_SUITES, DEFAULT_GROUPS, DEFAULT_SIGNATURE_SCHEMES,
    MaxFragmentLength, NamedGroup, ProtocolVersion, SignatureScheme,
};
use crate::core::{ConfigError, MAX_ALPN_PROTOCOL_LEN, MAX_SERVER_NAME_LEN};

/// Configuration shared by all connections.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cipher suites in preference order.
    pub cipher_suites: Vec<CipherSuite>,

    /// Lowest protocol version offered or accepted.
    pub min_version: ProtocolVersion,

    /// Highest protocol version offered or accepted.
    pub max_version: ProtocolVersion,

    /// Named groups in preference order.
    pub groups: Vec<NamedGroup>,

    /// Signature schemes in preference order.
    pub signature_schemes: Vec<SignatureScheme>,

    /// Host name a client sends in server_name.
    pub server_name: Option<String>,

    /// Host names a server holds certificates for.
    pub certificate_names: Vec<String>,

    /// ALPN protocols in preference order.
    pub alpn_protocols: Vec<Vec<u8>>,

    /// Fragment length a client requests.
    pub max_fragment_length: Option<MaxFragmentLength>,

    /// Whether a server honors max_fragment_length requests.
    pub accept_max_fragment_length: bool,

    /// Enable session tickets.
    pub session_tickets: bool,

    /// Offer / accept extended master secret.
    pub extended_master_secret: bool,

    /// Client fails the handshake if the server does not echo EMS.
    pub require_extended_master_secret: bool,

    /// Client requests OCSP stapling.
    pub status_request: bool,

    /// OCSP response a server can staple.
    pub ocsp_response: Option<Vec<u8>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cipher_suites: DEFAULT_CIPHER_SUITES.to_vec(),
            min_version: ProtocolVersion::TLS12,
            max_version: ProtocolVersion::TLS13,
            groups: DEFAULT_GROUPS.to_vec(),
            signature_schemes: DEFAULT_SIGNATURE_SCHEMES.to_vec(),
            server_name: None,
            certificate_names: Vec::new(),
            alpn_protocols: Vec::new(),
            max_fragment_length: None,
            accept_max_fragment_length: false,
            session_tickets: true,
            extended_master_secret: true,
            require_extended_master_secret: false,
            status_request: false,
            ocsp_response: None,
        }
    }
}

impl Config {
    /// Start building a configuration from defaults.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// True if any configured cipher suite uses ephemeral ECDH.
    pub fn ecc_enabled(&self) -> bool {
        self.cipher_suites.iter().any(CipherSuite::uses_ecdhe)
    }

    /// True if TLS 1.3 is within the version range.
    pub fn tls13_enabled(&self) -> bool {
        self.max_version >= ProtocolVersion::TLS13
    }

    /// True if TLS 1.2 or older is within the version range.
    pub fn legacy_versions_enabled(&self) -> bool {
        self.min_version <= ProtocolVersion::TLS12
    }

    /// True if `version` is within the version range.
    pub fn supports_version(&self, version: ProtocolVersion) -> bool {
        self.min_version <= version && version <= self.max_version
    }

    /// Versions within range, newest first.
    pub fn versions_descending(&self) -> Vec<ProtocolVersion> {
        [
            ProtocolVersion::TLS13,
            ProtocolVersion::TLS12,
            ProtocolVersion::TLS11,
            ProtocolVersion::TLS10,
        ]
        .into_iter()
        .filter(|v| self.supports_version(*v))
        .collect()
    }

    /// True if a server holds a certificate for `name` (ASCII case-insensitive).
    pub fn has_certificate_for(&self, name: &str) -> bool {
        self.certificate_names
            .iter()
            .any(|n| n.eq_ignore_ascii_case(name))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.min_version > self.max_version {
            return Err(ConfigError::EmptyVersionRange);
        }
        if let Some(name) = &self.server_name {
            if name.is_empty() || name.len() > MAX_SERVER_NAME_LEN {
                return Err(ConfigError::InvalidServerName(name.len()));
            }
        }
        for proto in &self.alpn_protocols {
            if proto.is_empty() || proto.len() > MAX_ALPN_PROTOCOL_LEN {
                return Err(ConfigError::InvalidAlpnProtocol(proto.len()));
            }
        }
        // Each list must fit a u16-prefixed field with 2-byte entries
        let max_entries = (u16::MAX as usize) / 2;
        if self.groups.len() > max_entries {
            return Err(ConfigError::ListTooLong("supported groups"));
        }
        if self.signature_schemes.len() > max_entries {
            return Err(ConfigError::ListTooLong("signature schemes"));
        }
        let alpn_len: usize = self.alpn_protocols.iter().map(|p| p.len() + 1).sum();
        if alpn_len > u16::MAX as usize {
            return Err(ConfigError::ListTooLong("ALPN"));
        }
        Ok(())
    }
}

/// Builder for [`Config`].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a builder holding the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set cipher suite preferences.
    pub fn cipher_suites(mut self, suites: &[CipherSuite]) -> Self {
        self.config.cipher_suites = suites.to_vec();
        self
    }

    /// Set the accepted protocol version range.
    pub fn versions(mut self, min: ProtocolVersion, max: ProtocolVersion) -> Self {
        self.config.min_version = min;
        self.config.max_version = max;
        self
    }

    /// Set named group preferences.
    pub fn groups(mut self, groups: &[NamedGroup]) -> Self {
        self.config.groups = groups.to_vec();
        self
    }

    /// Set signature scheme preferences.
    pub fn signature_schemes(mut self, schemes: &[SignatureScheme]) -> Self {
        self.config.signature_schemes = schemes.to_vec();
        self
    }

    /// Set the host name a client sends.
    pub fn server_name(mut self, name: impl Into<String>) -> Self {
        self.config.server_name = Some(name.into());
        self
    }

    /// Add a host name a server holds a certificate for.
    pub fn certificate_name(mut self, name: impl Into<String>) -> Self {
        self.config.certificate_names.push(name.into());
        self
    }

    /// Set ALPN protocols in preference order.
    pub fn alpn_protocols<P: AsRef<[u8]>>(mut self, protocols: &[P]) -> Self {
        self.config.alpn_protocols = protocols.iter().map(|p| p.as_ref().to_vec()).collect();
        self
    }

    /// Request a maximum fragment length (client).
    pub fn max_fragment_length(mut self, mfl: MaxFragmentLength) -> Self {
        self.config.max_fragment_length = Some(mfl);
        self
    }

    /// Honor max_fragment_length requests (server).
    pub fn accept_max_fragment_length(mut self, enabled: bool) -> Self {
        self.config.accept_max_fragment_length = enabled;
        self
    }

    /// Enable or disable session tickets.
    pub fn session_tickets(mut self, enabled: bool) -> Self {
        self.config.session_tickets = enabled;
        self
    }

    /// Enable or disable extended master secret.
    pub fn extended_master_secret(mut self, enabled: bool) -> Self {
        self.config.extended_master_secret = enabled;
        self
    }

    /// Fail the handshake if the server omits extended master secret.
    pub fn require_extended_master_secret(mut self, required: bool) -> Self {
        self.config.require_extended_master_secret = required;
        if required {
            self.config.extended_master_secret = true;
        }
        self
    }

    /// Request OCSP stapling (client).
    pub fn status_request(mut self, enabled: bool) -> Self {
        self.config.status_request = enabled;
        self
    }

    /// Provide an OCSP response to staple (server).
    pub fn ocsp_response(mut self, response: Vec<u8>) -> Self {
        self.config.ocsp_response = Some(response);
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.ecc_enabled());
        assert!(config.tls13_enabled());
        assert!(config.legacy_versions_enabled());
        assert_eq!(
            config.versions_descending(),
            vec![ProtocolVersion::TLS13, ProtocolVersion::TLS12]
        );
    }

    #[test]
    fn test_ecc_disabled_without_ecdhe_suites() {
        let config = Config::builder()
            .cipher_suites(&[
                CipherSuite::RSA_AES128_GCM_SHA256,
                CipherSuite::DHE_RSA_AES128_GCM_SHA256,
            ])
            .build()
            .unwrap();
        assert!(!config.ecc_enabled());
    }

    #[test]
    fn test_hybrid_suite_enables_ecc() {
        let config = Config::builder()
            .cipher_suites(&[CipherSuite::ECDHE_KYBER_RSA_AES256_GCM_SHA384])
            .build()
            .unwrap();
        assert!(config.ecc_enabled());
    }

    #[test]
    fn test_builder_validation() {
        let err = Config::builder()
            .versions(ProtocolVersion::TLS13, ProtocolVersion::TLS12)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::EmptyVersionRange);

        let err = Config::builder().server_name("").build().unwrap_err();
        assert_eq!(err, ConfigError::InvalidServerName(0));

        let long = vec![b'a'; 256];
        let err = Config::builder()
            .alpn_protocols(&[long])
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidAlpnProtocol(256));
    }

    #[test]
    fn test_require_ems_implies_enabled() {
        let config = Config::builder()
            .extended_master_secret(false)
            .require_extended_master_secret(true)
            .build()
            .unwrap();
        assert!(config.extended_master_secret);
    }

    #[test]
    fn test_certificate_name_match() {
        let config = Config::builder()
            .certificate_name("www.example.com")
            .build()
            .unwrap();
        assert!(config.has_certificate_for("WWW.Example.com"));
        assert!(!config.has_certificate_for("example.org"));
    }
}
