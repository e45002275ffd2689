//! Cipher suites and key-exchange algorithms.

use std::fmt;

/// Key-exchange algorithm of a cipher suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyExchange {
    /// Static RSA key transport.
    Rsa,
    /// Ephemeral finite-field Diffie-Hellman.
    Dhe,
    /// Ephemeral elliptic-curve Diffie-Hellman.
    Ecdhe,
    /// ECDHE combined with a post-quantum KEM.
    HybridEcdheKem,
    /// TLS 1.3: negotiated through key_share, not the suite.
    Tls13,
}

impl KeyExchange {
    /// True if this algorithm is, or contains, `other`.
    ///
    /// A hybrid ECDHE+KEM exchange includes ECDHE.
    pub fn includes(self, other: KeyExchange) -> bool {
        if self == other {
            return true;
        }
        matches!((self, other), (KeyExchange::HybridEcdheKem, KeyExchange::Ecdhe))
    }

    /// True if the exchange needs EC point format negotiation.
    pub fn is_ephemeral_ecdh(self) -> bool {
        self.includes(KeyExchange::Ecdhe)
    }
}

/// A cipher suite and the parts of it extension policy cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CipherSuite {
    /// IANA value.
    pub iana_value: u16,
    /// IANA name.
    pub name: &'static str,
    /// Key-exchange algorithm.
    pub key_exchange: KeyExchange,
}

impl CipherSuite {
    /// TLS_AES_128_GCM_SHA256
    pub const TLS13_AES_128_GCM_SHA256: Self = Self::new(0x1301, "TLS_AES_128_GCM_SHA256", KeyExchange::Tls13);
    /// TLS_AES_256_GCM_SHA384
    pub const TLS13_AES_256_GCM_SHA384: Self = Self::new(0x1302, "TLS_AES_256_GCM_SHA384", KeyExchange::Tls13);
    /// TLS_CHACHA20_POLY1305_SHA256
    pub const TLS13_CHACHA20_POLY1305_SHA256: Self =
        Self::new(0x1303, "TLS_CHACHA20_POLY1305_SHA256", KeyExchange::Tls13);
    /// TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256
    pub const ECDHE_ECDSA_AES128_GCM_SHA256: Self =
        Self::new(0xc02b, "TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256", KeyExchange::Ecdhe);
    /// TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256
    pub const ECDHE_RSA_AES128_GCM_SHA256: Self =
        Self::new(0xc02f, "TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256", KeyExchange::Ecdhe);
    /// TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384
    pub const ECDHE_RSA_AES256_GCM_SHA384: Self =
        Self::new(0xc030, "TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384", KeyExchange::Ecdhe);
    /// TLS_ECDHE_KYBER_RSA_WITH_AES_256_GCM_SHA384 (draft hybrid)
    pub const ECDHE_KYBER_RSA_AES256_GCM_SHA384: Self = Self::new(
        0xff0c,
        "TLS_ECDHE_KYBER_RSA_WITH_AES_256_GCM_SHA384",
        KeyExchange::HybridEcdheKem,
    );
    /// TLS_DHE_RSA_WITH_AES_128_GCM_SHA256
    pub const DHE_RSA_AES128_GCM_SHA256: Self =
        Self::new(0x009e, "TLS_DHE_RSA_WITH_AES_128_GCM_SHA256", KeyExchange::Dhe);
    /// TLS_RSA_WITH_AES_128_GCM_SHA256
    pub const RSA_AES128_GCM_SHA256: Self = Self::new(0x009c, "TLS_RSA_WITH_AES_128_GCM_SHA256", KeyExchange::Rsa);

    /// Describe a cipher suite.
    pub const fn new(iana_value: u16, name: &'static str, key_exchange: KeyExchange) -> Self {
        Self {
            iana_value,
            name,
            key_exchange,
        }
    }

    /// True if this suite's key exchange includes ephemeral ECDH.
    pub fn uses_ecdhe(&self) -> bool {
        self.key_exchange.is_ephemeral_ecdh()
    }
}

impl fmt::Display for CipherSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:04x})", self.name, self.iana_value)
    }
}

/// Default preference list: TLS 1.3 suites first, then ECDHE, then the rest.
pub const DEFAULT_CIPHER_SUITES: &[CipherSuite] = &[
    CipherSuite::TLS13_AES_128_GCM_SHA256,
    CipherSuite::TLS13_AES_256_GCM_SHA384,
    CipherSuite::TLS13_CHACHA20_POLY1305_SHA256,
    CipherSuite::ECDHE_ECDSA_AES128_GCM_SHA256,
    CipherSuite::ECDHE_RSA_AES128_GCM_SHA256,
    CipherSuite::ECDHE_RSA_AES256_GCM_SHA384,
    CipherSuite::DHE_RSA_AES128_GCM_SHA256,
    CipherSuite::RSA_AES128_GCM_SHA256,
];
