//! Protocol versions, named groups, signature schemes, fragment lengths.

use std::fmt;

/// TLS protocol version as carried on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProtocolVersion(pub u16);

impl ProtocolVersion {
    /// TLS 1.0
    pub const TLS10: Self = Self(0x0301);
    /// TLS 1.1
    pub const TLS11: Self = Self(0x0302);
    /// TLS 1.2
    pub const TLS12: Self = Self(0x0303);
    /// TLS 1.3
    pub const TLS13: Self = Self(0x0304);
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::TLS10 => f.write_str("TLSv1.0"),
            Self::TLS11 => f.write_str("TLSv1.1"),
            Self::TLS12 => f.write_str("TLSv1.2"),
            Self::TLS13 => f.write_str("TLSv1.3"),
            Self(other) => write!(f, "0x{other:04x}"),
        }
    }
}

/// Named group (supported_groups entry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NamedGroup(pub u16);

impl NamedGroup {
    /// secp256r1
    pub const SECP256R1: Self = Self(0x0017);
    /// secp384r1
    pub const SECP384R1: Self = Self(0x0018);
    /// secp521r1
    pub const SECP521R1: Self = Self(0x0019);
    /// x25519
    pub const X25519: Self = Self(0x001d);
    /// ffdhe2048
    pub const FFDHE2048: Self = Self(0x0100);
}

/// Default group preference.
pub const DEFAULT_GROUPS: &[NamedGroup] = &[
    NamedGroup::X25519,
    NamedGroup::SECP256R1,
    NamedGroup::SECP384R1,
];

/// Signature scheme (signature_algorithms entry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignatureScheme(pub u16);

impl SignatureScheme {
    /// rsa_pkcs1_sha256
    pub const RSA_PKCS1_SHA256: Self = Self(0x0401);
    /// ecdsa_secp256r1_sha256
    pub const ECDSA_SECP256R1_SHA256: Self = Self(0x0403);
    /// rsa_pkcs1_sha384
    pub const RSA_PKCS1_SHA384: Self = Self(0x0501);
    /// ecdsa_secp384r1_sha384
    pub const ECDSA_SECP384R1_SHA384: Self = Self(0x0503);
    /// rsa_pss_rsae_sha256
    pub const RSA_PSS_RSAE_SHA256: Self = Self(0x0804);
    /// ed25519
    pub const ED25519: Self = Self(0x0807);
}

/// Default signature scheme preference.
pub const DEFAULT_SIGNATURE_SCHEMES: &[SignatureScheme] = &[
    SignatureScheme::ECDSA_SECP256R1_SHA256,
    SignatureScheme::RSA_PSS_RSAE_SHA256,
    SignatureScheme::RSA_PKCS1_SHA256,
    SignatureScheme::ECDSA_SECP384R1_SHA384,
    SignatureScheme::RSA_PKCS1_SHA384,
    SignatureScheme::ED25519,
];

/// Negotiable maximum fragment length (RFC 6066 §4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaxFragmentLength {
    /// 2^9 bytes.
    Bytes512 = 1,
    /// 2^10 bytes.
    Bytes1024 = 2,
    /// 2^11 bytes.
    Bytes2048 = 3,
    /// 2^12 bytes.
    Bytes4096 = 4,
}

impl MaxFragmentLength {
    /// Parse a wire code, `None` for values outside 1..=4.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Bytes512),
            2 => Some(Self::Bytes1024),
            3 => Some(Self::Bytes2048),
            4 => Some(Self::Bytes4096),
            _ => None,
        }
    }

    /// Wire code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Fragment size in bytes.
    pub fn bytes(self) -> usize {
        256 << self.code()
    }
}
