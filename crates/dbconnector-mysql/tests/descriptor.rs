use dbconnector_core::{Error, ServerError};
use dbconnector_mysql::{MySqlSettings, REDACTED, normalize, render};
use proptest::prelude::*;

#[allow(unsafe_code)]
fn test_set_var(key: &str, value: &str) {
    // SAFETY: the key is unique to the calling test.
    unsafe { std::env::set_var(key, value) };
}

#[test]
fn scenario_credentials_and_redaction() {
    let settings = MySqlSettings::new()
        .username("root")
        .password("hunter2")
        .address("127.0.0.1:3306")
        .schema("app");

    assert!(render(&settings, "tcp", None, false).starts_with("root:hunter2@tcp(127.0.0.1:3306)/app?"));
    assert!(render(&settings, "tcp", None, true).starts_with("root:REDACTED@tcp(127.0.0.1:3306)/app?"));
}

#[test]
fn scenario_empty_password() {
    let settings = MySqlSettings::new().username("root").schema("app");
    assert!(render(&settings, "tcp", None, false).starts_with("root@tcp(127.0.0.1:3306)/app?"));
}

#[test]
fn password_resolves_through_env() {
    test_set_var("DBCONNECTOR_DESCRIPTOR_TEST_PASSWORD", "s3cret");
    let settings = MySqlSettings::new().password("env://DBCONNECTOR_DESCRIPTOR_TEST_PASSWORD");

    assert!(render(&settings, "tcp", None, false).starts_with("root:s3cret@tcp("));
    assert!(render(&settings, "tcp", None, true).starts_with("root:REDACTED@tcp("));
}

#[test]
fn unresolvable_password_collapses_prefix() {
    let settings = MySqlSettings::new().password("env://DBCONNECTOR_DESCRIPTOR_TEST_NEVER_SET");
    assert!(render(&settings, "tcp", None, false).starts_with("root@tcp("));
}

#[test]
fn scenario_normalize_duplicate_entry() {
    let dup = Error::Server(ServerError {
        number: 1062,
        sqlstate: Some("23000".to_string()),
        message: "Duplicate entry 'x' for key 'uniq'".to_string(),
    });
    assert!(normalize(dup).is_optimistic_concurrency());

    let deadlock = Error::Server(ServerError {
        number: 1213,
        sqlstate: Some("40001".to_string()),
        message: "Deadlock found".to_string(),
    });
    let out = normalize(deadlock);
    assert_eq!(out.server_error_number(), Some(1213));
    assert_eq!(out.to_string(), "Server error: Error 1213 (40001): Deadlock found");
}

proptest! {
    #[test]
    fn redaction_only_touches_password(
        user in "[a-z][a-z0-9_]{0,15}",
        password in "[A-Za-z0-9!#%^*_+=.-]{1,24}",
        schema in "[a-z][a-z0-9_]{0,15}",
    ) {
        let settings = MySqlSettings::new()
            .username(user.clone())
            .password(password.clone())
            .schema(schema);

        let plain = render(&settings, "tcp", None, false);
        let redacted = render(&settings, "tcp", None, true);

        let plain_prefix = format!("{user}:{password}@");
        let redacted_prefix = format!("{user}:{REDACTED}@");
        prop_assert!(plain.starts_with(&plain_prefix));
        prop_assert!(redacted.starts_with(&redacted_prefix));
        prop_assert_eq!(&plain[plain_prefix.len()..], &redacted[redacted_prefix.len()..]);
    }

    #[test]
    fn rendering_is_stable(
        schema in "[a-z][a-z0-9_]{0,15}",
        collation in "[a-z0-9_]{1,24}",
        parse_time in any::<bool>(),
        allow_read_only in any::<bool>(),
        key in "[a-zA-Z]{1,12}",
        value in "[a-zA-Z0-9]{0,12}",
    ) {
        let settings = MySqlSettings::new()
            .schema(schema)
            .collation(collation)
            .parse_time(parse_time)
            .allow_read_only(allow_read_only)
            .param(key, value);

        prop_assert_eq!(
            render(&settings, "tcp", None, false),
            render(&settings.clone(), "tcp", None, false)
        );
        let reject = format!("rejectReadOnly={}", !allow_read_only);
        prop_assert!(render(&settings, "tcp", None, false).contains(&reject));
    }
}
