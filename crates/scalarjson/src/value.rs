//! Scalar JSON values.
//!
//! This module defines the [`Value`] enum produced by the parser and its
//! discriminant, [`ValueType`].
use core::fmt;

/// A scalar JSON value.
///
/// The numeric payload only exists on [`Value::Number`], so no other variant
/// can expose a stale number.
///
/// # Examples
///
/// ```
/// use scalarjson::{Value, ValueType};
///
/// let v = Value::Number(1e10);
/// assert_eq!(v.value_type(), ValueType::Number);
/// assert_eq!(v.number(), 1e10);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Value {
    /// `null`
    #[default]
    Null,
    /// `true`
    True,
    /// `false`
    False,
    /// A finite number.
    Number(f64),
}

/// The discriminant of a [`Value`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// `null`
    Null,
    /// `false`
    False,
    /// `true`
    True,
    /// A number.
    Number,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Null => "null",
            Self::False => "false",
            Self::True => "true",
            Self::Number => "number",
        })
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        if v { Self::True } else { Self::False }
    }
}

impl Value {
    /// Returns the discriminant of this value.
    #[must_use]
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Null => ValueType::Null,
            Self::True => ValueType::True,
            Self::False => ValueType::False,
            Self::Number(_) => ValueType::Number,
        }
    }

    /// Returns the numeric payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a [`Value::Number`]. Use
    /// [`Value::as_number`] when the type is not known in advance.
    #[must_use]
    #[track_caller]
    pub fn number(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            other => panic!("`Value::number` called on a {} value", other.value_type()),
        }
    }

    /// Returns the numeric payload, or `None` for non-numbers.
    ///
    /// # Examples
    ///
    /// ```
    /// use scalarjson::Value;
    ///
    /// assert_eq!(Value::Number(-0.5).as_number(), Some(-0.5));
    /// assert_eq!(Value::Null.as_number(), None);
    /// ```
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean for `true`/`false`, or `None` otherwise.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::True => Some(true),
            Self::False => Some(false),
            _ => None,
        }
    }

    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`True`] or [`False`].
    ///
    /// [`True`]: Value::True
    /// [`False`]: Value::False
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::True | Self::False)
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }
}
