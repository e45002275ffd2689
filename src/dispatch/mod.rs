//! Extension dispatcher
//!
//! Drives the encode and decode of a handshake message's extension block
//! against an [`ExtensionTable`].
//!
//! ## Wire format
//!
//! ```text
//! +0   Block Length (2 bytes BE16)
//! +2   Extension Type (2 bytes BE16)   \
//! +4   Extension Length (2 bytes BE16)  } repeated
//! +6   Extension Payload (variable)    /
//! ```
//!
//! ## Encode
//!
//! Descriptors are visited in table order. A response is only considered if
//! the peer sent the matching request; then `should_send` decides. An
//! extension that does not fire emits nothing at all.
//!
//! ## Decode
//!
//! The block is split into `(type, payload)` pairs first. Types the message
//! does not know are skipped, so unknown extensions never desynchronize the
//! stream; a known type seen twice is an error. Received extensions are then
//! applied in table order, and finally `if_missing` runs for every descriptor
//! the peer could have sent but did not.

use crate::connection::Connection;
use crate::core::{Direction, EXTENSION_HEADER_SIZE, ExtensionError, ExtensionType, MessageType};
use crate::registry::ExtensionTable;
use crate::wire::{WireReader, WireWriter};

/// Write the extension block of `message`.
///
/// On error nothing is written and the connection's request tracking is
/// left as it was before the call.
pub fn send_extensions(
    message: MessageType,
    table: &ExtensionTable,
    conn: &mut Connection,
    out: &mut WireWriter,
) -> Result<(), ExtensionError> {
    check_sender(message, conn)?;

    let tracking = conn.extensions().clone();
    let result: Result<(), ExtensionError> = out.with_u16_length(|out| {
        for descriptor in table.list(message) {
            send_extension(descriptor.as_ref(), conn, out)?;
        }
        Ok(())
    });
    if result.is_err() {
        *conn.extensions_mut() = tracking;
    }
    result
}

/// Emit one extension container if its policy allows.
///
/// Returns whether anything was written.
pub fn send_extension(
    ext: &dyn ExtensionType,
    conn: &mut Connection,
    out: &mut WireWriter,
) -> Result<bool, ExtensionError> {
    check_direction(ext, conn.mode().sending_direction(), conn)?;

    let id = ext.iana_value();
    if !should_emit(ext, conn) {
        tracing::trace!(extension = ext.name(), id, "extension not sent");
        return Ok(false);
    }

    write_container(ext, conn, out)?;
    if !ext.is_response() {
        conn.extensions_mut().mark_request_sent(id);
    }

    tracing::trace!(extension = ext.name(), id, "extension sent");
    Ok(true)
}

/// Bytes the extension's container occupies for `conn`, or 0 if it would not be sent.
///
/// Runs the same encode path as [`send_extension`], so the result always
/// matches what is actually emitted.
pub fn extension_size(ext: &dyn ExtensionType, conn: &Connection) -> Result<usize, ExtensionError> {
    check_direction(ext, conn.mode().sending_direction(), conn)?;

    if !should_emit(ext, conn) {
        return Ok(0);
    }
    let mut scratch = WireWriter::with_capacity(EXTENSION_HEADER_SIZE);
    write_container(ext, conn, &mut scratch)?;
    Ok(scratch.len())
}

fn check_sender(message: MessageType, conn: &Connection) -> Result<(), ExtensionError> {
    if conn.mode() != message.sender() {
        return Err(ExtensionError::RoleMismatch {
            message,
            mode: conn.mode(),
        });
    }
    Ok(())
}

fn check_receiver(message: MessageType, conn: &Connection) -> Result<(), ExtensionError> {
    if conn.mode() == message.sender() {
        return Err(ExtensionError::RoleMismatch {
            message,
            mode: conn.mode(),
        });
    }
    Ok(())
}

fn check_direction(
    ext: &dyn ExtensionType,
    expected: Direction,
    conn: &Connection,
) -> Result<(), ExtensionError> {
    if ext.direction() != expected {
        return Err(ExtensionError::WrongDirection {
            extension: ext.iana_value(),
            direction: ext.direction(),
            mode: conn.mode(),
        });
    }
    Ok(())
}

fn should_emit(ext: &dyn ExtensionType, conn: &Connection) -> bool {
    // Responses require a request
    if ext.is_response() && !conn.extensions().request_received(ext.iana_value()) {
        return false;
    }
    ext.should_send(conn)
}

fn write_container(ext: &dyn ExtensionType, conn: &Connection, out: &mut WireWriter) -> Result<(), ExtensionError> {
    let mark = out.len();
    out.write_u16(ext.iana_value());
    out.with_u16_length(|out| ext.send(conn, out))
        .inspect_err(|_| out.truncate(mark))
}

/// Payloads of a received extension block, indexed by table position.
#[derive(Debug, Clone)]
pub struct ParsedExtensions<'a> {
    message: MessageType,
    payloads: Vec<Option<&'a [u8]>>,
    skipped: usize,
}

impl<'a> ParsedExtensions<'a> {
    /// Message the block was parsed for.
    pub fn message(&self) -> MessageType {
        self.message
    }

    /// Payload of the extension at table position `pos`, if received.
    pub fn payload(&self, pos: usize) -> Option<&'a [u8]> {
        self.payloads.get(pos).copied().flatten()
    }

    /// Number of recognized extensions received.
    pub fn received(&self) -> usize {
        self.payloads.iter().filter(|p| p.is_some()).count()
    }

    /// Number of unrecognized extensions skipped.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

/// Split an extension block into per-extension payloads.
///
/// An empty input is an absent block, which TLS 1.2 hellos are allowed.
pub fn parse_extensions<'a>(
    message: MessageType,
    table: &ExtensionTable,
    input: &mut WireReader<'a>,
) -> Result<ParsedExtensions<'a>, ExtensionError> {
    let mut parsed = ParsedExtensions {
        message,
        payloads: vec![None; table.list(message).len()],
        skipped: 0,
    };
    if input.is_empty() {
        return Ok(parsed);
    }

    let mut block = input.read_u16_prefixed()?;
    while !block.is_empty() {
        let id = block.read_u16()?;
        let payload = block.read_u16_prefixed()?.rest();

        match table.position(message, id) {
            Some(pos) => {
                if parsed.payloads[pos].is_some() {
                    return Err(ExtensionError::DuplicateExtension(id));
                }
                parsed.payloads[pos] = Some(payload);
            }
            None => {
                tracing::trace!(id, len = payload.len(), "skipping unrecognized extension");
                parsed.skipped += 1;
            }
        }
    }

    Ok(parsed)
}

/// Read the extension block of `message` and apply it to `conn`.
pub fn recv_extensions(
    message: MessageType,
    table: &ExtensionTable,
    conn: &mut Connection,
    input: &mut WireReader<'_>,
) -> Result<(), ExtensionError> {
    check_receiver(message, conn)?;

    let parsed = parse_extensions(message, table, input)?;
    process_extensions(table, conn, &parsed)
}

/// Apply parsed extensions in table order, then run missing-extension policy.
pub fn process_extensions(
    table: &ExtensionTable,
    conn: &mut Connection,
    parsed: &ParsedExtensions<'_>,
) -> Result<(), ExtensionError> {
    check_receiver(parsed.message(), conn)?;

    let list = table.list(parsed.message());

    for (pos, descriptor) in list.iter().enumerate() {
        if let Some(payload) = parsed.payload(pos) {
            recv_extension(descriptor.as_ref(), conn, payload)?;
        }
    }

    for (pos, descriptor) in list.iter().enumerate() {
        if parsed.payload(pos).is_none() {
            extension_missing(descriptor.as_ref(), conn)?;
        }
    }

    Ok(())
}

/// Apply one received extension payload.
pub fn recv_extension(ext: &dyn ExtensionType, conn: &mut Connection, payload: &[u8]) -> Result<(), ExtensionError> {
    check_direction(ext, conn.mode().receiving_direction(), conn)?;

    let id = ext.iana_value();
    if ext.is_response() {
        if !conn.extensions().request_sent(id) {
            return Err(ExtensionError::UnsupportedExtension(id));
        }
        conn.extensions_mut().mark_response_received(id);
    } else {
        conn.extensions_mut().mark_request_received(id);
    }

    let mut reader = WireReader::new(payload);
    ext.recv(conn, &mut reader)?;

    if !reader.is_empty() {
        tracing::trace!(extension = ext.name(), id, unread = reader.remaining(), "extension payload not fully consumed");
    }
    tracing::trace!(extension = ext.name(), id, "extension received");
    Ok(())
}

fn extension_missing(ext: &dyn ExtensionType, conn: &mut Connection) -> Result<(), ExtensionError> {
    // A response we never asked for cannot be missing
    if ext.is_response() && !conn.extensions().request_sent(ext.iana_value()) {
        return Ok(());
    }
    tracing::trace!(extension = ext.name(), id = ext.iana_value(), "extension missing");
    ext.if_missing(conn)
}
