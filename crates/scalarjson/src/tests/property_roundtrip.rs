use std::{format, string::String};

use quickcheck::QuickCheck;

use super::{arbitrary::JsonNumber, quickcheck_tests};
use crate::{Value, parse};

fn same_number(src: &str, n: f64) -> bool {
    match parse(src) {
        Ok(Value::Number(parsed)) => parsed.to_bits() == n.to_bits(),
        _ => false,
    }
}

/// Property: every finite `f64` printed in plain or exponent notation parses
/// back to the identical bit pattern.
#[test]
fn number_roundtrip_quickcheck() {
    fn prop(n: JsonNumber) -> bool {
        let n = n.0;
        same_number(&format!("{n}"), n) && same_number(&format!("{n:e}"), n)
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(JsonNumber) -> bool);
}

/// Property: every value round-trips through its textual form.
#[test]
fn value_roundtrip_quickcheck() {
    fn prop(value: Value) -> bool {
        let src = match value {
            Value::Null => String::from("null"),
            Value::True => String::from("true"),
            Value::False => String::from("false"),
            Value::Number(n) => format!(" {n:e}\n"),
        };
        parse(&src) == Ok(value)
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Value) -> bool);
}

#[test]
fn boundary_numbers_roundtrip() {
    for n in [
        0.0,
        -0.0,
        f64::MAX,
        f64::MIN,
        f64::MIN_POSITIVE,
        f64::EPSILON,
        f64::from_bits(1),
        -f64::from_bits(1),
        9_007_199_254_740_993.0,
    ] {
        assert!(same_number(&format!("{n}"), n), "{n}");
        assert!(same_number(&format!("{n:e}"), n), "{n:e}");
    }
}
