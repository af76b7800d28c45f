use crate::domain::value::MessageId;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Normalized outcome of a single send operation.
///
/// `success: false` covers the recoverable-by-caller outcomes (missing
/// destination, remote rejection, transport failure on the send path);
/// misconfiguration and account discovery problems surface as errors instead.
pub struct SendResult {
    pub success: bool,
    pub message_id: Option<MessageId>,
    pub error: Option<String>,
    pub http_status: Option<u16>,
    pub raw_body: Option<String>,
}

impl SendResult {
    /// The gateway accepted the message (2xx response).
    pub fn sent(message_id: Option<MessageId>, http_status: u16, raw_body: impl Into<String>) -> Self {
        Self {
            success: true,
            message_id,
            error: None,
            http_status: Some(http_status),
            raw_body: Some(raw_body.into()),
        }
    }

    /// The gateway rejected the message (non-2xx response).
    pub fn rejected(error: impl Into<String>, http_status: u16, raw_body: impl Into<String>) -> Self {
        Self {
            success: false,
            message_id: None,
            error: Some(error.into()),
            http_status: Some(http_status),
            raw_body: Some(raw_body.into()),
        }
    }

    /// No HTTP round trip happened, or it never produced a status
    /// (missing destination, DNS/connect/timeout failure).
    pub fn not_attempted(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message_id: None,
            error: Some(error.into()),
            http_status: None,
            raw_body: None,
        }
    }
}
