use crate::ErrorKind;

/// Lexical hint distinguishing integers from floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NumberLexeme<'a> {
    Integer(&'a str), // no '.' and no exponent
    Float(&'a str),   // has '.' or exponent
}

impl<'a> NumberLexeme<'a> {
    pub(crate) fn as_str(&self) -> &'a str {
        match self {
            Self::Integer(s) | Self::Float(s) => *s,
        }
    }

    /// Convert the validated text to an `f64`.
    ///
    /// Conversion never decides how much input the number spans; that is
    /// fixed by [`scan`] before this runs.
    pub(crate) fn to_f64(&self) -> Result<f64, ErrorKind> {
        let exact = match self {
            Self::Integer(text) => exact_integer(text),
            Self::Float(_) => None,
        };
        if let Some(n) = exact {
            return Ok(n);
        }
        let n: f64 = self.as_str().parse().map_err(|_| ErrorKind::InvalidValue)?;
        if n.is_infinite() {
            return Err(ErrorKind::NumberTooBig);
        }
        Ok(n)
    }
}

/// Integers with at most this many digits are below 2^53 and convert to
/// `f64` without rounding.
const MAX_EXACT_DIGITS: usize = 15;

/// Fast path for short integers: accumulate in a `u64` and convert exactly.
fn exact_integer(text: &str) -> Option<f64> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, text),
    };
    if digits.len() > MAX_EXACT_DIGITS {
        return None;
    }
    let magnitude = digits
        .bytes()
        .try_fold(0_u64, |acc, b| Some(acc * 10 + u64::from(b.checked_sub(b'0')?)))?;
    #[allow(clippy::cast_precision_loss)]
    let n = magnitude as f64;
    // Negate as a float so "-0" keeps its sign.
    Some(if negative { -n } else { n })
}

/// Validate the number starting at `input[start]` against the JSON grammar:
///
/// ```text
/// number := '-'? int frac? exp?
/// int    := '0' | [1-9] [0-9]*
/// frac   := '.' [0-9]+
/// exp    := ('e' | 'E') ('+' | '-')? [0-9]+
/// ```
///
/// On success the lexeme covers exactly the grammar validation span. On
/// failure returns the offset of the offending byte (`input.len()` if input
/// ran out).
pub(crate) fn scan(input: &[u8], start: usize) -> Result<NumberLexeme<'_>, usize> {
    let digit_at = |i: usize| input.get(i).is_some_and(u8::is_ascii_digit);

    let mut i = start;
    let mut is_float = false;

    if input.get(i) == Some(&b'-') {
        i += 1;
    }

    match input.get(i) {
        Some(b'0') => {
            i += 1;
            // "0" is the whole integer part; "0123" is not a number.
            if digit_at(i) {
                return Err(i);
            }
        }
        Some(b'1'..=b'9') => i = skip_digits(input, i + 1),
        _ => return Err(i),
    }

    if input.get(i) == Some(&b'.') {
        is_float = true;
        i += 1;
        if !digit_at(i) {
            return Err(i);
        }
        i = skip_digits(input, i);
    }

    if matches!(input.get(i), Some(b'e' | b'E')) {
        is_float = true;
        i += 1;
        if matches!(input.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        if !digit_at(i) {
            return Err(i);
        }
        i = skip_digits(input, i);
    }

    let text = core::str::from_utf8(&input[start..i]).map_err(|_| start)?;
    Ok(if is_float {
        NumberLexeme::Float(text)
    } else {
        NumberLexeme::Integer(text)
    })
}

fn skip_digits(input: &[u8], from: usize) -> usize {
    from + input[from..].iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("0", NumberLexeme::Integer("0"))]
    #[case("-0", NumberLexeme::Integer("-0"))]
    #[case("1234567890", NumberLexeme::Integer("1234567890"))]
    #[case("0.0", NumberLexeme::Float("0.0"))]
    #[case("1e10", NumberLexeme::Float("1e10"))]
    #[case("-1.5E-3", NumberLexeme::Float("-1.5E-3"))]
    #[case("1E+2", NumberLexeme::Float("1E+2"))]
    // The span stops where the grammar stops.
    #[case("12,", NumberLexeme::Integer("12"))]
    #[case("0 1", NumberLexeme::Integer("0"))]
    #[case("3.25]", NumberLexeme::Float("3.25"))]
    #[case("0x10", NumberLexeme::Integer("0"))]
    fn scan_accepts(#[case] input: &str, #[case] expected: NumberLexeme<'_>) {
        assert_eq!(scan(input.as_bytes(), 0), Ok(expected));
    }

    #[rstest]
    #[case("", 0)]
    #[case("-", 1)]
    #[case("-x", 1)]
    #[case("+1", 0)]
    #[case(".5", 0)]
    #[case("0123", 1)]
    #[case("00", 1)]
    #[case("-01", 2)]
    #[case("1.", 2)]
    #[case("1.e5", 2)]
    #[case("1e", 2)]
    #[case("1e+", 3)]
    #[case("1E-x", 3)]
    #[case("INF", 0)]
    #[case("NaN", 0)]
    fn scan_rejects_at_offending_byte(#[case] input: &str, #[case] offset: usize) {
        assert_eq!(scan(input.as_bytes(), 0), Err(offset));
    }

    #[test]
    fn scan_starts_at_given_offset() {
        let input = b"   -2.5e1 ";
        let lexeme = scan(input, 3).unwrap();
        assert_eq!(lexeme.as_str(), "-2.5e1");
    }

    #[test]
    fn conversion_reports_overflow() {
        assert_eq!(NumberLexeme::Float("1e400").to_f64(), Err(ErrorKind::NumberTooBig));
        assert_eq!(NumberLexeme::Float("-1e400").to_f64(), Err(ErrorKind::NumberTooBig));
        assert_eq!(
            NumberLexeme::Float("1.8e308").to_f64(),
            Err(ErrorKind::NumberTooBig)
        );
        assert_eq!(NumberLexeme::Float("1.7976931348623157e308").to_f64(), Ok(f64::MAX));
    }

    #[rstest]
    #[case("0")]
    #[case("-0")]
    #[case("7")]
    #[case("-42")]
    #[case("1234567890")]
    #[case("999999999999999")]
    #[case("-999999999999999")]
    #[case("9007199254740993")]
    #[case("18446744073709551615")]
    #[case("18446744073709551616")]
    fn integer_fast_path_matches_float_parse(#[case] text: &str) {
        let fast = NumberLexeme::Integer(text).to_f64().unwrap();
        let slow: f64 = text.parse().unwrap();
        assert_eq!(fast.to_bits(), slow.to_bits(), "{text}");
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn integer_fast_path_bounds() {
        assert_eq!(exact_integer("999999999999999"), Some(999_999_999_999_999.0));
        assert_eq!(exact_integer("1000000000000000"), None);
        assert!(exact_integer("-0").unwrap().is_sign_negative());
        assert_eq!(exact_integer("12"), Some(12.0));
        // Floats never take the integer path.
        assert_eq!(NumberLexeme::Float("12e0").to_f64(), Ok(12.0));
    }

    #[test]
    fn conversion_accepts_underflow() {
        assert_eq!(NumberLexeme::Float("1e-400").to_f64(), Ok(0.0));
        assert_eq!(
            NumberLexeme::Float("4.9406564584124654e-324").to_f64(),
            Ok(f64::from_bits(1))
        );
    }
}
