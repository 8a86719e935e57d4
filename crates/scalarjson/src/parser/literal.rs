use crate::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExpectedLiteral {
    Null,
    True,
    False,
}

impl ExpectedLiteral {
    /// The literal starting with `first` (`n`, `t`, or `f`), if any.
    pub(crate) fn from_first(first: u8) -> Option<Self> {
        match first {
            b'n' => Some(Self::Null),
            b't' => Some(Self::True),
            b'f' => Some(Self::False),
            _ => None,
        }
    }

    pub(crate) fn bytes(self) -> &'static [u8] {
        match self {
            Self::Null => b"null",
            Self::True => b"true",
            Self::False => b"false",
        }
    }

    pub(crate) fn value(self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::True => Value::True,
            Self::False => Value::False,
        }
    }

    /// Match the literal at the start of `input`.
    ///
    /// Returns the literal's length on success, or the offset of the first
    /// byte that differs (which may be `input.len()` when input runs out).
    pub(crate) fn match_prefix(self, input: &[u8]) -> Result<usize, usize> {
        let expected = self.bytes();
        match expected
            .iter()
            .zip(input)
            .position(|(want, got)| want != got)
        {
            Some(at) => Err(at),
            None if input.len() < expected.len() => Err(input.len()),
            None => Ok(expected.len()),
        }
    }
}
