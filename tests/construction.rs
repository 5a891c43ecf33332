//! End-to-end construction scenarios through the public API: the plain
//! constructor, the option list, the chaining builder, and the validating
//! path, checked against each other.

use std::time::Duration;

use server_options::{option, validate, ConfigError, Server, ServerOption};

#[test]
fn address_alone_yields_all_defaults() {
    let server = Server::new(":8080");

    assert_eq!(server.addr, ":8080");
    assert_eq!(server.timeout, Duration::ZERO);
    assert_eq!(server.motd, None);
}

#[test]
fn timeout_option_configures_the_timeout() {
    let server = Server::with_options(":8080", [option::timeout(Duration::from_secs(10))]);

    assert_eq!(server.addr, ":8080");
    assert_eq!(server.timeout, Duration::from_secs(10));
}

#[test]
fn last_timeout_wins() {
    let server = Server::with_options(
        ":8080",
        [
            option::timeout(Duration::from_secs(5)),
            option::timeout(Duration::from_secs(10)),
        ],
    );

    assert_eq!(server.timeout, Duration::from_secs(10));
}

#[test]
fn repeated_constructions_are_equal_and_independent() {
    let first = Server::new(":9090");
    let mut second = Server::new(":9090");
    assert_eq!(first, second);

    second.max_conns = 1;
    assert_ne!(first, second);
    assert_eq!(first, Server::new(":9090"));
}

#[test]
fn the_same_option_sequence_is_deterministic() {
    let build = || {
        Server::with_options(
            ":8080",
            [
                option::timeout(Duration::from_secs(3)),
                option::max_conns(42),
                option::motd("hello"),
            ],
        )
    };

    assert_eq!(build(), build());
}

#[test]
fn options_interleave_across_different_fields() {
    let server = Server::with_options(
        ":8080",
        [
            option::max_conns(10),
            option::timeout(Duration::from_secs(1)),
            option::max_conns(20),
            option::motd("a"),
            option::motd("b"),
        ],
    );

    assert_eq!(server.max_conns, 20);
    assert_eq!(server.timeout, Duration::from_secs(1));
    assert_eq!(server.motd.as_deref(), Some("b"));
}

#[test]
fn bare_closures_and_named_factories_mix() {
    let server = Server::with_options(
        ":8080",
        [
            ServerOption::custom(|s| s.max_conns = 2),
            option::timeout(Duration::from_secs(7)),
        ],
    );

    assert_eq!(server.max_conns, 2);
    assert_eq!(server.timeout, Duration::from_secs(7));
}

#[test]
fn builder_matches_the_option_path() {
    let chained = Server::builder(":8080")
        .timeout(Duration::from_secs(10))
        .motd("welcome")
        .build();

    let listed = Server::with_options(
        ":8080",
        [
            option::timeout(Duration::from_secs(10)),
            option::motd("welcome"),
        ],
    );

    assert_eq!(chained, listed);
}

#[test]
fn validating_construction_accepts_good_values() {
    let server = Server::try_with_options(
        ":8080",
        [
            validate::checked_timeout(Duration::from_secs(10)),
            validate::checked_max_conns(16),
        ],
    )
    .expect("all values in range");

    assert_eq!(server.timeout, Duration::from_secs(10));
    assert_eq!(server.max_conns, 16);
}

#[test]
fn validating_construction_surfaces_the_first_error() {
    let result = Server::try_with_options(
        ":8080",
        [
            validate::checked_max_conns(0),
            validate::checked_timeout(Duration::ZERO),
        ],
    );

    assert_eq!(result.unwrap_err(), ConfigError::ZeroMaxConns);
}
