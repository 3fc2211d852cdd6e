//! Validation failure payload.

use thiserror::Error;

/// All diagnostics from a failed [`check`](crate::Validator::check).
///
/// This is data, not an engine fault: validation itself never fails, it
/// only reports that the input does not conform. The messages are exactly
/// what [`get_messages`](crate::Validator::get_messages) returns for the
/// same input and name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .messages.join(", "))]
pub struct ValidationError {
    /// One entry per violation, in schema order.
    pub messages: Vec<String>,
}
