/// Configuration options for the scalar parser.
///
/// # Examples
///
/// ```rust
/// use scalarjson::{ParserOptions, Value, parse_with_options};
///
/// let options = ParserOptions {
///     allow_unicode_whitespace: true,
///     ..Default::default()
/// };
/// assert_eq!(parse_with_options("\u{00A0}true", options), Ok(Value::True));
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParserOptions {
    /// Whether to allow any Unicode whitespace around the value.
    ///
    /// By default, the parser only recognizes the four whitespace characters
    /// defined by the JSON specification: space (U+0020), line feed (U+000A),
    /// carriage return (U+000D), and horizontal tab (U+0009).
    ///
    /// # Default
    ///
    /// `false`
    pub allow_unicode_whitespace: bool,

    #[cfg(any(test, feature = "fuzzing"))]
    /// Panic on parse errors instead of returning them.
    ///
    /// Produces a backtrace pointing at the failing step.
    pub panic_on_error: bool,
}
