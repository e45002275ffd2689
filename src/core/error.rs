//! Error types for TLS extension negotiation.

use thiserror::Error;

use super::types::{Direction, MessageType, Mode};

/// Errors from the wire cursor.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WireError {
    /// Buffer is shorter than a declared field requires.
    #[error("truncated: needed {needed} bytes, {remaining} remaining")]
    Truncated {
        /// Bytes the read required.
        needed: usize,
        /// Bytes left in the buffer.
        remaining: usize,
    },

    /// A length does not fit in its prefix.
    #[error("length {length} exceeds prefix maximum {max}")]
    LengthOverflow {
        /// Actual length.
        length: usize,
        /// Largest value the prefix can hold.
        max: usize,
    },
}

/// Errors raised while encoding or decoding a message's extensions.
///
/// Any of these aborts processing of the whole handshake message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtensionError {
    /// Wire-level failure (truncation or length overflow).
    #[error("wire error: {0}")]
    Wire(#[from] WireError),

    /// The same extension appeared twice in one message.
    #[error("duplicate extension: 0x{0:04x}")]
    DuplicateExtension(u16),

    /// Peer sent a response to an extension we never requested.
    #[error("unsolicited extension response: 0x{0:04x}")]
    UnsupportedExtension(u16),

    /// A required extension was absent from the peer's message.
    #[error("missing required extension: 0x{0:04x}")]
    MissingExtension(u16),

    /// Extension payload is well-framed but semantically invalid.
    #[error("malformed extension 0x{extension:04x}: {reason}")]
    Malformed {
        /// Extension identifier.
        extension: u16,
        /// What was wrong.
        reason: &'static str,
    },

    /// The connection's role cannot build or parse this message.
    #[error("{mode} cannot process extensions of {message}")]
    RoleMismatch {
        /// Message being processed.
        message: MessageType,
        /// Role of the connection.
        mode: Mode,
    },

    /// The connection's role cannot send or receive this descriptor.
    #[error("{mode} cannot process {direction} extension 0x{extension:04x}")]
    WrongDirection {
        /// Extension identifier.
        extension: u16,
        /// Direction of the descriptor.
        direction: Direction,
        /// Role of the connection.
        mode: Mode,
    },
}

impl ExtensionError {
    /// Shorthand for [`ExtensionError::Malformed`].
    pub fn malformed(extension: u16, reason: &'static str) -> Self {
        Self::Malformed { extension, reason }
    }

    /// True if the failure was a read past the end of the buffer.
    pub fn is_truncation(&self) -> bool {
        matches!(self, Self::Wire(WireError::Truncated { .. }))
    }
}

/// Errors building the descriptor table. These must prevent startup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A second descriptor was registered for the same identifier and direction.
    #[error("duplicate registration of extension 0x{extension:04x} ({direction})")]
    DuplicateRegistration {
        /// Extension identifier.
        extension: u16,
        /// Direction of both descriptors.
        direction: Direction,
    },

    /// A descriptor was placed in a message of the opposite direction.
    #[error("extension 0x{extension:04x} cannot be carried in {message}")]
    DirectionMismatch {
        /// Extension identifier.
        extension: u16,
        /// Message it was registered for.
        message: MessageType,
    },
}

/// Invalid configuration values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Server name is empty or longer than 255 bytes.
    #[error("invalid server name length: {0}")]
    InvalidServerName(usize),

    /// An ALPN protocol name is empty or longer than 255 bytes.
    #[error("invalid ALPN protocol length: {0}")]
    InvalidAlpnProtocol(usize),

    /// Minimum protocol version is above the maximum.
    #[error("protocol version range is empty")]
    EmptyVersionRange,

    /// A list that must fit a u16-prefixed field is too long.
    #[error("{0} list too long")]
    ListTooLong(&'static str),
}

/// Top-level errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Extension processing error.
    #[error("extension error: {0}")]
    Extension(#[from] ExtensionError),

    /// Descriptor table error.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl From<WireError> for Error {
    fn from(err: WireError) -> Self {
        Error::Extension(err.into())
    }
}
