//! Diagnostic message formatting.
//!
//! The exact text of every diagnostic is a compatibility surface consumed
//! by existing clients: names are wrapped in double quotes, nested object
//! paths join with `.`, array elements index with `[i]`, and union
//! diagnostics join with `", or "`. Every combinator formats through these
//! helpers so paths render identically everywhere; custom validators can
//! use them to match the built-in output.

/// Wrap a diagnostic name in double quotes.
///
/// # Example
///
/// ```
/// use json_shape::message::quoted;
///
/// assert_eq!(quoted("age"), "\"age\"");
/// ```
pub fn quoted(name: &str) -> String {
    format!("\"{}\"", name)
}

/// A primitive mismatch: the quoted name followed by a failure description.
pub fn mismatch(name: &str, description: &str) -> String {
    format!("{} {}", quoted(name), description)
}

/// The element path `name[index]` used for array elements and object
/// values. The composite is quoted as a whole by whichever validator
/// reports on it.
pub fn indexed(name: &str, index: usize) -> String {
    format!("{}[{}]", name, index)
}

/// Prefix a child's message with its parent's quoted name and a dot.
pub fn prefixed(name: &str, child_message: &str) -> String {
    format!("{}.{}", quoted(name), child_message)
}

/// The unrecognized-property diagnostic.
///
/// The trailing space before the end of the message is part of the
/// compatible format and must be preserved.
pub fn unknown_property(name: &str, key: &str) -> String {
    format!("{} should not have a property named \"{}\" ", quoted(name), key)
}

/// The union diagnostic: all alternatives' messages joined by `", or "`,
/// wrapped in a single `"name": ...` envelope.
pub fn union(name: &str, messages: &[String]) -> String {
    format!("{}: {}", quoted(name), messages.join(", or "))
}
