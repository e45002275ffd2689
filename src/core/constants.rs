//! Protocol constants for TLS handshake extensions.
//!
//! These values are fixed by the IANA TLS registries and MUST NOT be changed.

// =============================================================================
// EXTENSION TYPES (IANA "TLS ExtensionType Values")
// =============================================================================

/// Extension type: server_name (RFC 6066).
pub const EXT_SERVER_NAME: u16 = 0x0000;

/// Extension type: max_fragment_length (RFC 6066).
pub const EXT_MAX_FRAGMENT_LENGTH: u16 = 0x0001;

/// Extension type: status_request (RFC 6066).
pub const EXT_STATUS_REQUEST: u16 = 0x0005;

/// Extension type: supported_groups (RFC 8422, formerly elliptic_curves).
pub const EXT_SUPPORTED_GROUPS: u16 = 0x000a;

/// Extension type: ec_point_formats (RFC 8422).
pub const EXT_EC_POINT_FORMATS: u16 = 0x000b;

/// Extension type: signature_algorithms (RFC 8446).
pub const EXT_SIGNATURE_ALGORITHMS: u16 = 0x000d;

/// Extension type: application_layer_protocol_negotiation (RFC 7301).
pub const EXT_ALPN: u16 = 0x0010;

/// Extension type: extended_master_secret (RFC 7627).
pub const EXT_EXTENDED_MASTER_SECRET: u16 = 0x0017;

/// Extension type: session_ticket (RFC 5077).
pub const EXT_SESSION_TICKET: u16 = 0x0023;

/// Extension type: supported_versions (RFC 8446).
pub const EXT_SUPPORTED_VERSIONS: u16 = 0x002b;

/// Extension type: renegotiation_info (RFC 5746).
pub const EXT_RENEGOTIATION_INFO: u16 = 0xff01;

// =============================================================================
// WIRE SIZES
// =============================================================================

/// Extension container header: type (2) + length (2).
pub const EXTENSION_HEADER_SIZE: usize = 4;

/// Length prefix of the whole extension block.
pub const EXTENSION_BLOCK_LENGTH_SIZE: usize = 2;

// =============================================================================
// EC POINT FORMATS (RFC 8422 §5.1.2)
// =============================================================================

/// Point format code: uncompressed.
pub const EC_POINT_FORMAT_UNCOMPRESSED: u8 = 0;

/// Point format code: ansiX962_compressed_prime (deprecated).
pub const EC_POINT_FORMAT_COMPRESSED_PRIME: u8 = 1;

/// Point format code: ansiX962_compressed_char2 (deprecated).
pub const EC_POINT_FORMAT_COMPRESSED_CHAR2: u8 = 2;

// =============================================================================
// SERVER NAME (RFC 6066 §3)
// =============================================================================

/// NameType: host_name.
pub const SERVER_NAME_HOST_NAME: u8 = 0;

/// Longest DNS host name accepted in server_name.
pub const MAX_SERVER_NAME_LEN: usize = 255;

// =============================================================================
// STATUS REQUEST (RFC 6066 §8)
// =============================================================================

/// CertificateStatusType: ocsp.
pub const STATUS_TYPE_OCSP: u8 = 1;

// =============================================================================
// ALPN (RFC 7301 §3.1)
// =============================================================================

/// Longest protocol name allowed in an ALPN list.
pub const MAX_ALPN_PROTOCOL_LEN: usize = 255;
