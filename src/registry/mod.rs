//! Extension descriptor table
//!
//! Maps `(identifier, direction)` to the descriptor implementing that
//! extension, and keeps, for each handshake message, the ordered list of
//! descriptors that message may carry.
//!
//! ## Registration
//!
//! A table is built once through [`ExtensionTableBuilder`] and never mutated
//! afterwards. Registering two descriptors for the same identifier in the same
//! direction, or placing a descriptor in a message of the other direction, is
//! rejected by [`ExtensionTableBuilder::build`]. A single descriptor may be
//! listed in several messages (a TLS 1.2 ServerHello and a TLS 1.3
//! EncryptedExtensions answer server_name the same way).
//!
//! ## Ordering
//!
//! Registration order is emission order. It is fixed at build time, so the
//! bytes a given connection state produces are identical run to run.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::core::{Direction, ExtensionType, MessageType, RegistryError};

/// Shared handle to a registered descriptor.
pub type Descriptor = Arc<dyn ExtensionType>;

/// Descriptors one message carries, in emission order.
#[derive(Default)]
struct MessageList {
    order: Vec<Descriptor>,
    index: HashMap<u16, usize>,
}

/// Immutable registry of extension descriptors.
///
/// `Send + Sync`; share one table across every connection.
pub struct ExtensionTable {
    by_direction: [HashMap<u16, Descriptor>; 2],
    lists: [MessageList; 4],
}

fn direction_slot(direction: Direction) -> usize {
    match direction {
        Direction::ClientOriginated => 0,
        Direction::ServerOriginated => 1,
    }
}

impl ExtensionTable {
    /// Start building a table.
    pub fn builder() -> ExtensionTableBuilder {
        ExtensionTableBuilder::new()
    }

    /// Process-wide table holding every built-in extension.
    pub fn standard() -> &'static ExtensionTable {
        static STANDARD: OnceLock<ExtensionTable> = OnceLock::new();
        STANDARD.get_or_init(|| {
            crate::extensions::register_builtins(ExtensionTable::builder())
                .build()
                .expect("register_builtins registers each (id, direction) once")
        })
    }

    /// Descriptor for `id` in `direction`.
    pub fn get(&self, id: u16, direction: Direction) -> Option<&Descriptor> {
        self.by_direction[direction_slot(direction)].get(&id)
    }

    /// Descriptors `message` may carry, in emission order.
    pub fn list(&self, message: MessageType) -> &[Descriptor] {
        &self.lists[message.index()].order
    }

    /// Position of `id` within `message`'s list.
    pub fn position(&self, message: MessageType, id: u16) -> Option<usize> {
        self.lists[message.index()].index.get(&id).copied()
    }

    /// Number of registered descriptors across both directions.
    pub fn len(&self) -> usize {
        self.by_direction.iter().map(HashMap::len).sum()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for ExtensionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for message in MessageType::ALL {
            let names: Vec<&'static str> = self.list(message).iter().map(|d| d.name()).collect();
            map.entry(&message, &names);
        }
        map.finish()
    }
}

/// Builder for [`ExtensionTable`].
#[derive(Default)]
pub struct ExtensionTableBuilder {
    registrations: Vec<(Vec<MessageType>, Descriptor)>,
}

impl ExtensionTableBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `extension` for each of `messages`, after everything registered so far.
    pub fn register<E>(self, messages: &[MessageType], extension: E) -> Self
    where
        E: ExtensionType + 'static,
    {
        self.register_shared(messages, Arc::new(extension))
    }

    /// Register an already shared descriptor.
    pub fn register_shared(mut self, messages: &[MessageType], extension: Descriptor) -> Self {
        self.registrations.push((messages.to_vec(), extension));
        self
    }

    /// Validate registrations and freeze the table.
    pub fn build(self) -> Result<ExtensionTable, RegistryError> {
        let mut table = ExtensionTable {
            by_direction: [HashMap::new(), HashMap::new()],
            lists: Default::default(),
        };

        for (messages, descriptor) in self.registrations {
            let id = descriptor.iana_value();
            let direction = descriptor.direction();

            if let Some(message) = messages.iter().find(|m| m.direction() != direction) {
                return Err(RegistryError::DirectionMismatch {
                    extension: id,
                    message: *message,
                });
            }

            match table.by_direction[direction_slot(direction)].entry(id) {
                Entry::Occupied(_) => {
                    return Err(RegistryError::DuplicateRegistration {
                        extension: id,
                        direction,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(Arc::clone(&descriptor));
                }
            }

            for message in messages {
                let list = &mut table.lists[message.index()];
                if list.index.contains_key(&id) {
                    continue;
                }
                list.index.insert(id, list.order.len());
                list.order.push(Arc::clone(&descriptor));
            }
        }

        for message in MessageType::ALL {
            tracing::debug!(
                handshake_message = %message,
                extensions = table.list(message).len(),
                "extension list built"
            );
        }

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::Connection;
    use crate::core::ExtensionError;
    use crate::wire::{WireReader, WireWriter};

    #[derive(Debug)]
    struct Dummy {
        id: u16,
        direction: Direction,
    }

    impl ExtensionType for Dummy {
        fn iana_value(&self) -> u16 {
            self.id
        }

        fn direction(&self) -> Direction {
            self.direction
        }

        fn name(&self) -> &'static str {
            "dummy"
        }

        fn should_send(&self, _conn: &Connection) -> bool {
            true
        }

        fn send(&self, _conn: &Connection, _out: &mut WireWriter) -> Result<(), ExtensionError> {
            Ok(())
        }

        fn recv(&self, _conn: &mut Connection, _payload: &mut WireReader<'_>) -> Result<(), ExtensionError> {
            Ok(())
        }
    }

    fn request(id: u16) -> Dummy {
        Dummy {
            id,
            direction: Direction::ClientOriginated,
        }
    }

    fn response(id: u16) -> Dummy {
        Dummy {
            id,
            direction: Direction::ServerOriginated,
        }
    }

    #[test]
    fn test_registration_order_is_emission_order() {
        let table = ExtensionTable::builder()
            .register(&[MessageType::ClientHello], request(30))
            .register(&[MessageType::ClientHello], request(10))
            .register(&[MessageType::ClientHello], request(20))
            .build()
            .unwrap();

        let ids: Vec<u16> = table
            .list(MessageType::ClientHello)
            .iter()
            .map(|d| d.iana_value())
            .collect();
        assert_eq!(ids, vec![30, 10, 20]);
        assert_eq!(table.position(MessageType::ClientHello, 20), Some(2));
    }

    #[test]
    fn test_same_id_both_directions() {
        let table = ExtensionTable::builder()
            .register(&[MessageType::ClientHello], request(11))
            .register(&[MessageType::ServerHello], response(11))
            .build()
            .unwrap();

        assert_eq!(table.len(), 2);
        assert!(table.get(11, Direction::ClientOriginated).is_some());
        assert!(table.get(11, Direction::ServerOriginated).is_some());
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let err = ExtensionTable::builder()
            .register(&[MessageType::ServerHello], response(11))
            .register(&[MessageType::EncryptedExtensions], response(11))
            .build()
            .unwrap_err();

        assert_eq!(
            err,
            RegistryError::DuplicateRegistration {
                extension: 11,
                direction: Direction::ServerOriginated,
            }
        );
    }

    #[test]
    fn test_direction_mismatch_rejected() {
        let err = ExtensionTable::builder()
            .register(&[MessageType::ClientHello, MessageType::ServerHello], request(0))
            .build()
            .unwrap_err();

        assert_eq!(
            err,
            RegistryError::DirectionMismatch {
                extension: 0,
                message: MessageType::ServerHello,
            }
        );
    }

    #[test]
    fn test_shared_descriptor_in_several_messages() {
        let table = ExtensionTable::builder()
            .register(
                &[MessageType::ServerHello, MessageType::EncryptedExtensions],
                response(0),
            )
            .build()
            .unwrap();

        let sh = &table.list(MessageType::ServerHello)[0];
        let ee = &table.list(MessageType::EncryptedExtensions)[0];
        assert!(Arc::ptr_eq(sh, ee));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_standard_table_builds() {
        let table = ExtensionTable::standard();
        assert!(!table.is_empty());
        assert!(!table.list(MessageType::ClientHello).is_empty());
        assert!(std::ptr::eq(table, ExtensionTable::standard()));
    }

    #[test]
    fn test_builtin_registrations_are_unique() {
        let table = crate::extensions::register_builtins(ExtensionTable::builder())
            .build()
            .expect("built-in registrations must be accepted");

        let expected = if cfg!(feature = "tls13") { 20 } else { 18 };
        assert_eq!(table.len(), expected);
        assert_eq!(table.len(), ExtensionTable::standard().len());
    }

    #[test]
    fn test_table_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ExtensionTable>();
    }
}
