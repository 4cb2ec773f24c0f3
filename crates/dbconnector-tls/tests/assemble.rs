use dbconnector_core::TlsErrorKind;
use dbconnector_tls::{TlsSettings, TlsVersion, assemble};

const CA_PEM: &str = include_str!("fixtures/ca.pem");
const SECOND_CA_PEM: &str = include_str!("fixtures/second-ca.pem");

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

#[allow(unsafe_code)]
fn test_set_var(key: &str, value: &str) {
    // SAFETY: the key is unique to the calling test.
    unsafe { std::env::set_var(key, value) };
}

#[test]
fn disabled_returns_no_configuration() {
    let settings = TlsSettings::new()
        .enabled(false)
        .trust_system_roots(true)
        .server_name("db.example.com")
        .trusted_cas_pem(CA_PEM)
        .trusted_cas_pem_file("/nowhere.pem");

    assert!(assemble(&settings).unwrap().is_none());
}

#[test]
fn public_ca_sentinel_uses_system_roots_only() {
    let settings = TlsSettings::new()
        .enabled(true)
        .trust_system_roots(true)
        .trusted_cas_pem_file("public-ca");

    let config = assemble(&settings).unwrap().unwrap();
    assert_eq!(config.trust_anchors(), 0);
    // Host store, or the bundled roots when the host store is empty.
    assert!(config.system_roots() > 0);
    assert_eq!(config.min_version(), TlsVersion::Tls12);
}

#[test]
fn true_sentinel_is_treated_as_unset() {
    let settings = TlsSettings::new()
        .trust_system_roots(false)
        .trusted_cas_pem_file("true")
        .trusted_cas_pem(CA_PEM);

    let config = assemble(&settings).unwrap().unwrap();
    assert_eq!(config.trust_anchors(), 1);
}

#[test]
fn inline_pem_adds_trust_anchors() {
    let bundle = format!("{CA_PEM}{SECOND_CA_PEM}");
    let settings = TlsSettings::new()
        .trust_system_roots(false)
        .trusted_cas_pem(bundle);

    let config = assemble(&settings).unwrap().unwrap();
    assert_eq!(config.system_roots(), 0);
    assert_eq!(config.trust_anchors(), 2);
}

#[test]
fn pem_file_adds_trust_anchors() {
    let settings = TlsSettings::new()
        .trust_system_roots(false)
        .trusted_cas_pem_file(fixture_path("ca.pem"));

    let config = assemble(&settings).unwrap().unwrap();
    assert_eq!(config.trust_anchors(), 1);
}

#[test]
fn pem_file_wins_over_inline_pem() {
    // The inline value would fail to parse if it were consulted.
    let settings = TlsSettings::new()
        .trust_system_roots(false)
        .trusted_cas_pem_file(fixture_path("ca.pem"))
        .trusted_cas_pem("definitely not PEM");

    let config = assemble(&settings).unwrap().unwrap();
    assert_eq!(config.trust_anchors(), 1);
}

#[test]
fn inline_pem_resolves_through_env() {
    test_set_var("DBCONNECTOR_TLS_ASSEMBLE_CA", SECOND_CA_PEM);
    let settings = TlsSettings::new()
        .trust_system_roots(false)
        .trusted_cas_pem("env://DBCONNECTOR_TLS_ASSEMBLE_CA");

    let config = assemble(&settings).unwrap().unwrap();
    assert_eq!(config.trust_anchors(), 1);
}

#[test]
fn inline_pem_resolves_through_file_scheme() {
    let settings = TlsSettings::new()
        .trust_system_roots(false)
        .trusted_cas_pem(format!("file://{}", fixture_path("second-ca.pem")));

    let config = assemble(&settings).unwrap().unwrap();
    assert_eq!(config.trust_anchors(), 1);
}

#[test]
fn unreadable_pem_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let settings = TlsSettings::new()
        .trust_system_roots(false)
        .trusted_cas_pem_file(dir.path().join("absent.pem").display().to_string());

    let err = assemble(&settings).unwrap_err();
    assert_eq!(err.tls_kind(), Some(TlsErrorKind::ReadPemFile));
}

#[test]
fn garbage_pem_file_is_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.pem");
    std::fs::write(&path, "-----BEGIN NOTHING-----\n").unwrap();

    let settings = TlsSettings::new()
        .trust_system_roots(false)
        .trusted_cas_pem_file(path.display().to_string());

    let err = assemble(&settings).unwrap_err();
    assert_eq!(err.tls_kind(), Some(TlsErrorKind::MalformedPem));
}

#[test]
fn tls13_floor() {
    let config = assemble(
        &TlsSettings::new()
            .trust_system_roots(false)
            .min_version(TlsVersion::Tls13),
    )
    .unwrap()
    .unwrap();

    assert_eq!(config.min_version(), TlsVersion::Tls13);
}
