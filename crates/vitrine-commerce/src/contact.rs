//! Contact form types.
//!
//! Submissions are validated and acknowledged; delivery is out of scope.

use serde::{Deserialize, Serialize};

/// Minimum length for the sender name.
pub const MIN_NAME_LEN: usize = 2;

/// Minimum length for the message body.
pub const MIN_MESSAGE_LEN: usize = 10;

/// A validated contact form submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactForm {
    /// Sender name.
    pub name: String,
    /// Sender email.
    pub email: String,
    /// Message body.
    pub message: String,
}
