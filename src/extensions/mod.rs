//! Built-in TLS extensions
//!
//! Each module defines the client-originated and, where the extension has
//! one, the server-originated descriptor for a single extension identifier.
//!
//! ## Extensions
//!
//! | ID     | Module                   | Client → (ClientHello)         | Server → (response)          |
//! |--------|--------------------------|--------------------------------|------------------------------|
//! | 0x0000 | `server_name`            | host name                      | empty ack                    |
//! | 0x0001 | `max_fragment_length`    | requested code                 | echoed code                  |
//! | 0x0005 | `status_request`         | OCSP request                   | empty ack                    |
//! | 0x000a | `supported_groups`       | group list                     |                              |
//! | 0x000b | `ec_point_format`        | `[uncompressed]`               | `[uncompressed]`             |
//! | 0x000d | `signature_algorithms`   | scheme list                    |                              |
//! | 0x0010 | `alpn`                   | protocol list                  | selected protocol            |
//! | 0x0017 | `extended_master_secret` | empty                          | empty                        |
//! | 0x0023 | `session_ticket`         | ticket                         | empty ack                    |
//! | 0x002b | `supported_versions`     | version list                   | selected version (TLS 1.3)   |
//! | 0xff01 | `renegotiation_info`     | empty renegotiated_connection  | empty renegotiated_connection|

mod alpn;
mod ec_point_format;
mod extended_master_secret;
mod max_fragment_length;
mod renegotiation_info;
mod server_name;
mod session_ticket;
mod signature_algorithms;
mod status_request;
mod supported_groups;
#[cfg(feature = "tls13")]
mod supported_versions;

pub use alpn::*;
pub use ec_point_format::*;
pub use extended_master_secret::*;
pub use max_fragment_length::*;
pub use renegotiation_info::*;
pub use server_name::*;
pub use session_ticket::*;
pub use signature_algorithms::*;
pub use status_request::*;
pub use supported_groups::*;
#[cfg(feature = "tls13")]
pub use supported_versions::*;

use crate::core::{ExtensionError, MessageType};
use crate::registry::ExtensionTableBuilder;
use crate::wire::WireReader;

/// Register every built-in extension in its standard emission order.
pub fn register_builtins(builder: ExtensionTableBuilder) -> ExtensionTableBuilder {
    use MessageType::*;

    #[cfg(feature = "tls13")]
    let builder = builder
        .register(&[ClientHello], ClientSupportedVersions)
        .register(&[ServerHelloTls13], ServerSupportedVersions);

    builder
        .register(&[ClientHello], ClientServerName)
        .register(&[ServerHello, EncryptedExtensions], ServerServerName)
        .register(&[ClientHello], ClientAlpn)
        .register(&[ServerHello, EncryptedExtensions], ServerAlpn)
        .register(&[ClientHello], ClientStatusRequest)
        .register(&[ServerHello], ServerStatusRequest)
        .register(&[ClientHello], ClientMaxFragmentLength)
        .register(&[ServerHello, EncryptedExtensions], ServerMaxFragmentLength)
        .register(&[ClientHello], ClientSignatureAlgorithms)
        .register(&[ClientHello], ClientSupportedGroups)
        .register(&[ClientHello], ClientEcPointFormats)
        .register(&[ServerHello], ServerEcPointFormats)
        .register(&[ClientHello], ClientSessionTicket)
        .register(&[ServerHello], ServerSessionTicket)
        .register(&[ClientHello], ClientExtendedMasterSecret)
        .register(&[ServerHello], ServerExtendedMasterSecret)
        .register(&[ClientHello], ClientRenegotiationInfo)
        .register(&[ServerHello], ServerRenegotiationInfo)
}

/// Fail unless the payload is empty.
fn expect_empty(id: u16, payload: &WireReader<'_>) -> Result<(), ExtensionError> {
    if !payload.is_empty() {
        return Err(ExtensionError::malformed(id, "expected empty payload"));
    }
    Ok(())
}

/// Read a u16-prefixed list of u16 values.
fn read_u16_list(id: u16, payload: &mut WireReader<'_>) -> Result<Vec<u16>, ExtensionError> {
    let mut list = payload.read_u16_prefixed()?;
    if list.remaining() % 2 != 0 {
        return Err(ExtensionError::malformed(id, "odd list length"));
    }
    let mut values = Vec::with_capacity(list.remaining() / 2);
    while !list.is_empty() {
        values.push(list.read_u16()?);
    }
    Ok(values)
}
