#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use scalarjson::{ParseStatus, ParserOptions, Value, parse_status_with_options, parse_with_options};
use serde_json::Value as Json;

static WS_TABLE: &[&str] = &[
    " ", "\t", "\n", "\r", // JSON core
    "\u{000B}", "\u{000C}", "\u{00A0}", "\u{FEFF}", "\u{2028}", "\u{2029}", "\u{3000}",
];

/// One piece of a document, biased toward the scalar grammar.
#[derive(Debug, Arbitrary)]
enum Piece {
    Whitespace(u8),
    Literal(u8),
    Digits(u16),
    Sign(bool),
    Dot,
    Exponent(bool),
    Byte(u8),
    Float(f64),
}

#[derive(Debug, Arbitrary)]
struct Input {
    unicode_whitespace: bool,
    pieces: Vec<Piece>,
}

impl Input {
    fn render(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for piece in &self.pieces {
            match piece {
                Piece::Whitespace(i) => {
                    out.extend_from_slice(WS_TABLE[*i as usize % WS_TABLE.len()].as_bytes());
                }
                Piece::Literal(i) => {
                    let literals: [&[u8]; 6] =
                        [b"null", b"true", b"false", b"nul", b"tru", b"fals"];
                    out.extend_from_slice(literals[*i as usize % literals.len()]);
                }
                Piece::Digits(n) => out.extend_from_slice(n.to_string().as_bytes()),
                Piece::Sign(neg) => out.push(if *neg { b'-' } else { b'+' }),
                Piece::Dot => out.push(b'.'),
                Piece::Exponent(upper) => out.push(if *upper { b'E' } else { b'e' }),
                Piece::Byte(b) => out.push(*b),
                Piece::Float(f) => out.extend_from_slice(format!("{f:e}").as_bytes()),
            }
        }
        out
    }
}

fn check(input: &Input) {
    let doc = input.render();
    let options = ParserOptions {
        allow_unicode_whitespace: input.unicode_whitespace,
        panic_on_error: false,
    };

    let ours = parse_with_options(&doc, options);
    assert_eq!(ours, parse_with_options(&doc, options), "parse is not deterministic");

    let (status, value) = parse_status_with_options(&doc, options);
    assert_eq!(status, ParseStatus::from(&ours));
    assert!(status.is_ok() || value == Value::Null);

    if !input.unicode_whitespace {
        let theirs = serde_json::from_slice::<Json>(&doc);
        match (&ours, &theirs) {
            (Ok(Value::Null), Ok(Json::Null))
            | (Err(_), Err(_))
            | (Err(_), Ok(Json::String(_) | Json::Array(_) | Json::Object(_))) => {}
            (Ok(v), Ok(Json::Bool(b))) => assert_eq!(v.as_bool(), Some(*b)),
            (Ok(Value::Number(n)), Ok(Json::Number(m))) => {
                assert_eq!(m.as_f64(), Some(*n));
            }
            _ => panic!("disagreement on {doc:?}: ours {ours:?}, serde_json {theirs:?}"),
        }
    }
}

fuzz_target!(|input: Input| check(&input));
