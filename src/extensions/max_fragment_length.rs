//! Maximum fragment length negotiation (RFC 6066 §4)
//!
//! One byte in each direction: the code the client asks for, echoed by the
//! server if it agrees. A server that does not honor the extension, or does
//! not know the code, ignores the request instead of aborting.

use crate::cipher::MaxFragmentLength;
use crate::connection::Connection;
use crate::core::{Direction, EXT_MAX_FRAGMENT_LENGTH, ExtensionError, ExtensionType};
use crate::wire::{WireReader, WireWriter};

/// max_fragment_length sent in the ClientHello.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientMaxFragmentLength;

/// max_fragment_length echoed by the server.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerMaxFragmentLength;

impl ExtensionType for ClientMaxFragmentLength {
    fn iana_value(&self) -> u16 {
        EXT_MAX_FRAGMENT_LENGTH
    }

    fn direction(&self) -> Direction {
        Direction::ClientOriginated
    }

    fn name(&self) -> &'static str {
        "max_fragment_length"
    }

    fn should_send(&self, conn: &Connection) -> bool {
        conn.config().max_fragment_length.is_some()
    }

    fn send(&self, conn: &Connection, out: &mut WireWriter) -> Result<(), ExtensionError> {
        let mfl = conn
            .config()
            .max_fragment_length
            .ok_or(ExtensionError::malformed(EXT_MAX_FRAGMENT_LENGTH, "no fragment length configured"))?;
        out.write_u8(mfl.code());
        Ok(())
    }

    fn recv(&self, conn: &mut Connection, payload: &mut WireReader<'_>) -> Result<(), ExtensionError> {
        let code = payload.read_u8()?;
        if !conn.config().accept_max_fragment_length {
            return Ok(());
        }
        match MaxFragmentLength::from_code(code) {
            Some(mfl) => conn.negotiated_mfl = Some(mfl),
            None => tracing::debug!(code, "ignoring unknown max_fragment_length code"),
        }
        Ok(())
    }
}

impl ExtensionType for ServerMaxFragmentLength {
    fn iana_value(&self) -> u16 {
        EXT_MAX_FRAGMENT_LENGTH
    }

    fn direction(&self) -> Direction {
        Direction::ServerOriginated
    }

    fn name(&self) -> &'static str {
        "max_fragment_length"
    }

    fn should_send(&self, conn: &Connection) -> bool {
        conn.negotiated_mfl.is_some()
    }

    fn send(&self, conn: &Connection, out: &mut WireWriter) -> Result<(), ExtensionError> {
        let mfl = conn
            .negotiated_mfl
            .ok_or(ExtensionError::malformed(EXT_MAX_FRAGMENT_LENGTH, "no fragment length negotiated"))?;
        out.write_u8(mfl.code());
        Ok(())
    }

    fn recv(&self, conn: &mut Connection, payload: &mut WireReader<'_>) -> Result<(), ExtensionError> {
        let code = payload.read_u8()?;
        let requested = conn.config().max_fragment_length;
        match requested {
            Some(mfl) if mfl.code() == code => {
                conn.negotiated_mfl = Some(mfl);
                Ok(())
            }
            _ => Err(ExtensionError::malformed(
                EXT_MAX_FRAGMENT_LENGTH,
                "server echoed a different fragment length",
            )),
        }
    }
}
