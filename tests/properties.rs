//! Property tests for extension negotiation through the standard table.

use std::sync::Arc;

use proptest::{
    arbitrary::Arbitrary,
    collection, prop_assert, prop_assert_eq, proptest,
    sample,
    strategy::{BoxedStrategy, Just, Strategy},
    test_runner::TestCaseResult,
};
use tls_extensions::{
    cipher::{CipherSuite, ProtocolVersion},
    core::EXT_EC_POINT_FORMATS,
    dispatch,
    extensions::{
        ClientEcPointFormats, ServerEcPointFormats, recv_client_ec_point_formats,
        server_ec_point_format_extension_size,
    },
    wire::{WireReader, WireWriter},
    Config, Connection, ExtensionTable, MessageType,
};

const ALL_SUITES: &[CipherSuite] = &[
    CipherSuite::TLS13_AES_128_GCM_SHA256,
    CipherSuite::ECDHE_ECDSA_AES128_GCM_SHA256,
    CipherSuite::ECDHE_RSA_AES128_GCM_SHA256,
    CipherSuite::ECDHE_RSA_AES256_GCM_SHA384,
    CipherSuite::ECDHE_KYBER_RSA_AES256_GCM_SHA384,
    CipherSuite::DHE_RSA_AES128_GCM_SHA256,
    CipherSuite::RSA_AES128_GCM_SHA256,
];

const NON_ECDHE_SUITES: &[CipherSuite] = &[
    CipherSuite::DHE_RSA_AES128_GCM_SHA256,
    CipherSuite::RSA_AES128_GCM_SHA256,
];

/// A configuration drawn from a suite subset and a version range.
#[derive(Debug, Clone)]
struct ArbitraryConfig {
    suites: Vec<CipherSuite>,
    min: ProtocolVersion,
    max: ProtocolVersion,
}

impl ArbitraryConfig {
    fn build(&self) -> Config {
        Config::builder()
            .cipher_suites(&self.suites)
            .versions(self.min, self.max)
            .build()
            .unwrap()
    }
}

fn version_range() -> impl Strategy<Value = (ProtocolVersion, ProtocolVersion)> {
    sample::select(vec![
        (ProtocolVersion::TLS12, ProtocolVersion::TLS12),
        (ProtocolVersion::TLS12, ProtocolVersion::TLS13),
        (ProtocolVersion::TLS10, ProtocolVersion::TLS12),
        (ProtocolVersion::TLS13, ProtocolVersion::TLS13),
    ])
}

impl Arbitrary for ArbitraryConfig {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        (sample::subsequence(ALL_SUITES.to_vec(), 0..=ALL_SUITES.len()), version_range())
            .prop_map(|(suites, (min, max))| Self { suites, min, max })
            .boxed()
    }
}

fn non_ecdhe_config() -> impl Strategy<Value = ArbitraryConfig> {
    (sample::subsequence(NON_ECDHE_SUITES.to_vec(), 0..=NON_ECDHE_SUITES.len()), version_range())
        .prop_map(|(suites, (min, max))| ArbitraryConfig { suites, min, max })
}

fn client_hello(config: Config) -> (Connection, Vec<u8>) {
    let mut conn = Connection::client(Arc::new(config));
    let mut out = WireWriter::new();
    dispatch::send_extensions(MessageType::ClientHello, ExtensionTable::standard(), &mut conn, &mut out).unwrap();
    (conn, out.into_inner())
}

fn container_ids(block: &[u8]) -> Vec<u16> {
    let mut input = WireReader::new(block);
    let mut list = input.read_u16_prefixed().unwrap();
    let mut ids = Vec::new();
    while !list.is_empty() {
        ids.push(list.read_u16().unwrap());
        list.read_u16_prefixed().unwrap();
    }
    ids
}

fn check_client_round_trip(config: ArbitraryConfig) -> TestCaseResult {
    let client_config = config.build();
    let offered = client_config.ecc_enabled();
    let (_, block) = client_hello(client_config);

    let mut server = Connection::server(Arc::new(Config::default()));
    let mut input = WireReader::new(&block);
    dispatch::recv_extensions(MessageType::ClientHello, ExtensionTable::standard(), &mut server, &mut input)
        .map_err(|err| proptest::test_runner::TestCaseError::fail(err.to_string()))?;

    prop_assert_eq!(server.ec_point_formats, offered);
    prop_assert_eq!(server.extensions().request_received(EXT_EC_POINT_FORMATS), offered);
    Ok(())
}

fn check_server_policy(suite: Option<CipherSuite>, requested: bool) -> TestCaseResult {
    let mut conn = Connection::server(Arc::new(Config::default()));
    if requested {
        recv_client_ec_point_formats(&mut conn, &[0x01, 0x00]).unwrap();
    }
    conn.cipher_suite = suite;

    let mut out = WireWriter::new();
    let sent = dispatch::send_extension(&ServerEcPointFormats, &mut conn, &mut out).unwrap();

    let expected = requested && suite.is_some_and(|s| s.uses_ecdhe());
    prop_assert_eq!(sent, expected);
    if expected {
        prop_assert_eq!(out.as_bytes(), &[0x00, 0x0b, 0x00, 0x02, 0x01, 0x00][..]);
    } else {
        prop_assert!(out.is_empty());
    }

    // Legacy sizing runs the same encode path
    prop_assert_eq!(server_ec_point_format_extension_size(&conn).unwrap(), out.len());
    Ok(())
}

proptest! {
    #[test]
    fn client_round_trip(config in ArbitraryConfig::arbitrary()) {
        check_client_round_trip(config)?;
    }

    #[test]
    fn ecc_disabled_never_offers_point_formats(config in non_ecdhe_config()) {
        let (conn, block) = client_hello(config.build());
        prop_assert!(!container_ids(&block).contains(&EXT_EC_POINT_FORMATS));
        prop_assert!(!conn.extensions().request_sent(EXT_EC_POINT_FORMATS));
    }

    #[test]
    fn server_sends_only_with_ecdhe(
        suite in proptest::option::of(sample::select(ALL_SUITES.to_vec())),
        requested in proptest::bool::ANY,
    ) {
        check_server_policy(suite, requested)?;
    }

    #[test]
    fn no_suite_means_no_server_extension(requested in proptest::bool::ANY) {
        check_server_policy(None, requested)?;
    }

    #[test]
    fn any_point_format_list_accepted(formats in collection::vec(proptest::num::u8::ANY, 0..=255)) {
        let mut payload = vec![formats.len() as u8];
        payload.extend_from_slice(&formats);

        let mut conn = Connection::server(Arc::new(Config::default()));
        prop_assert!(recv_client_ec_point_formats(&mut conn, &payload).is_ok());
        prop_assert!(conn.ec_point_formats);
    }

    #[test]
    fn short_point_format_list_is_truncation(
        (count, present) in (1u8..=255).prop_flat_map(|count| (Just(count), 0..count as usize)),
    ) {
        let mut payload = vec![count];
        payload.resize(1 + present, 0);

        let mut conn = Connection::server(Arc::new(Config::default()));
        let err = recv_client_ec_point_formats(&mut conn, &payload).unwrap_err();
        prop_assert!(err.is_truncation());
        prop_assert!(!conn.ec_point_formats);
    }

    #[test]
    fn unknown_extension_does_not_desync(
        unknown in proptest::num::u16::ANY.prop_filter("must be unregistered", |id| {
            ExtensionTable::standard().position(MessageType::ClientHello, *id).is_none()
        }),
        body in collection::vec(proptest::num::u8::ANY, 0..64),
    ) {
        let mut out = WireWriter::new();
        out.with_u16_length(|out| -> Result<(), tls_extensions::ExtensionError> {
            out.write_u16(unknown);
            out.with_u16_length(|out| -> Result<(), tls_extensions::ExtensionError> {
                out.write_bytes(&body);
                Ok(())
            })?;
            out.write_u16(EXT_EC_POINT_FORMATS);
            out.with_u16_length(|out| -> Result<(), tls_extensions::ExtensionError> {
                out.write_bytes(&[0x01, 0x00]);
                Ok(())
            })
        })
        .unwrap();

        let mut conn = Connection::server(Arc::new(Config::default()));
        let mut input = WireReader::new(out.as_bytes());
        let parsed = dispatch::parse_extensions(MessageType::ClientHello, ExtensionTable::standard(), &mut input).unwrap();
        prop_assert_eq!(parsed.skipped(), 1);

        dispatch::process_extensions(ExtensionTable::standard(), &mut conn, &parsed).unwrap();
        prop_assert!(conn.ec_point_formats);
    }
}

#[test]
fn client_descriptor_payload_is_fixed() {
    let conn = Connection::client(Arc::new(Config::default()));
    assert_eq!(dispatch::extension_size(&ClientEcPointFormats, &conn).unwrap(), 6);
}
