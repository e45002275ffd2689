//! Roles, directions and handshake message kinds.

use std::fmt;

/// Which side of the handshake a connection plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Sends the ClientHello.
    Client,
    /// Answers the ClientHello.
    Server,
}

impl Mode {
    /// The direction of extensions this side emits.
    pub fn sending_direction(self) -> Direction {
        match self {
            Mode::Client => Direction::ClientOriginated,
            Mode::Server => Direction::ServerOriginated,
        }
    }

    /// The direction of extensions this side receives.
    pub fn receiving_direction(self) -> Direction {
        self.sending_direction().opposite()
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Client => f.write_str("client"),
            Mode::Server => f.write_str("server"),
        }
    }
}

/// Whether an extension occurrence is the client's offer or the server's response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Request, carried in the ClientHello.
    ClientOriginated,
    /// Response, carried in ServerHello or EncryptedExtensions.
    ServerOriginated,
}

impl Direction {
    /// The other direction.
    pub fn opposite(self) -> Self {
        match self {
            Direction::ClientOriginated => Direction::ServerOriginated,
            Direction::ServerOriginated => Direction::ClientOriginated,
        }
    }

    /// True for server responses.
    pub fn is_response(self) -> bool {
        self == Direction::ServerOriginated
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::ClientOriginated => f.write_str("client-originated"),
            Direction::ServerOriginated => f.write_str("server-originated"),
        }
    }
}

/// Handshake messages that carry an extension block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageType {
    /// ClientHello (any version).
    ClientHello,
    /// TLS 1.2 ServerHello.
    ServerHello,
    /// TLS 1.3 ServerHello.
    ServerHelloTls13,
    /// TLS 1.3 EncryptedExtensions.
    EncryptedExtensions,
}

impl MessageType {
    /// All message types, in handshake order.
    pub const ALL: [MessageType; 4] = [
        MessageType::ClientHello,
        MessageType::ServerHello,
        MessageType::ServerHelloTls13,
        MessageType::EncryptedExtensions,
    ];

    /// Direction of the extensions this message carries.
    pub fn direction(self) -> Direction {
        match self {
            MessageType::ClientHello => Direction::ClientOriginated,
            MessageType::ServerHello
            | MessageType::ServerHelloTls13
            | MessageType::EncryptedExtensions => Direction::ServerOriginated,
        }
    }

    /// The role that builds this message.
    pub fn sender(self) -> Mode {
        match self.direction() {
            Direction::ClientOriginated => Mode::Client,
            Direction::ServerOriginated => Mode::Server,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            MessageType::ClientHello => 0,
            MessageType::ServerHello => 1,
            MessageType::ServerHelloTls13 => 2,
            MessageType::EncryptedExtensions => 3,
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MessageType::ClientHello => "ClientHello",
            MessageType::ServerHello => "ServerHello",
            MessageType::ServerHelloTls13 => "ServerHello (TLS 1.3)",
            MessageType::EncryptedExtensions => "EncryptedExtensions",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_directions() {
        assert_eq!(Mode::Client.sending_direction(), Direction::ClientOriginated);
        assert_eq!(Mode::Client.receiving_direction(), Direction::ServerOriginated);
        assert_eq!(Mode::Server.sending_direction(), Direction::ServerOriginated);
        assert_eq!(Mode::Server.receiving_direction(), Direction::ClientOriginated);
    }

    #[test]
    fn test_message_direction() {
        assert_eq!(MessageType::ClientHello.sender(), Mode::Client);
        for msg in &MessageType::ALL[1..] {
            assert!(msg.direction().is_response());
            assert_eq!(msg.sender(), Mode::Server);
        }
    }

    #[test]
    fn test_message_index_unique() {
        let mut seen = [false; 4];
        for msg in MessageType::ALL {
            assert!(!seen[msg.index()]);
            seen[msg.index()] = true;
        }
    }
}
