use std::fmt;

/// A grammar violation found while parsing gradient text.
///
/// Parsing never recovers partially: the first violation aborts the whole
/// parse and is reported here together with the input that was left.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxError {
    pub message: String,
    /// Byte offset into the source where the violation was detected.
    pub offset: usize,
    /// Unconsumed input at the point of failure.
    pub remaining: String,
}

impl SyntaxError {
    pub(crate) fn new(msg: impl Into<String>, offset: usize, remaining: &str) -> Self {
        Self { message: msg.into(), offset, remaining: remaining.to_string() }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "gradient syntax error at byte {}: {} (remaining input: {:?})",
            self.offset, self.message, self.remaining
        )
    }
}

impl std::error::Error for SyntaxError {}
