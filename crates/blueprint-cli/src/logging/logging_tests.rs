#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test_case(0, "warn")]
#[test_case(1, "info")]
#[test_case(2, "debug")]
#[test_case(3, "trace")]
#[test_case(9, "trace")]
fn default_directive___verbosity___maps_to_level(verbosity: u8, expected: &str) {
    assert_eq!(default_directive(verbosity), expected);
}

#[test]
fn init_logging___called_twice___does_not_panic() {
    init_logging(0);
    init_logging(2);

    tracing::info!("logging initialized");
}
