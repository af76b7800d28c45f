use serde::Deserialize;

use crate::domain::{AccountId, AttendeeId, MessageId, MessageText, SendResult};
use crate::transport::ident::JsonId;

#[derive(Debug, Clone, Default, Deserialize)]
struct ChatJsonResponse {
    #[serde(default)]
    id: Option<JsonId>,
    #[serde(default)]
    message_id: Option<JsonId>,
    #[serde(default)]
    data: Option<ChatJsonData>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ChatJsonData {
    #[serde(default)]
    id: Option<JsonId>,
}

/// Encode the `POST /chats` multipart fields.
pub fn encode_chat_form(
    account_id: &AccountId,
    attendee: &AttendeeId,
    text: &MessageText,
) -> Vec<(String, String)> {
    vec![
        (AccountId::FIELD.to_owned(), account_id.as_str().to_owned()),
        (AttendeeId::FIELD.to_owned(), attendee.as_str().to_owned()),
        (MessageText::FIELD.to_owned(), text.as_str().to_owned()),
    ]
}

/// Normalize a `POST /chats` response into a [`SendResult`].
///
/// On 2xx the message id is taken from `id`, else `message_id`, else the
/// nested `data.id`. On anything else the error text is taken from `error`,
/// else `message`, else a generic `HTTP {status}` string. Bodies that fail
/// to parse are tolerated in both branches.
pub fn decode_chat_json_response(status: u16, body: &str) -> SendResult {
    let parsed: ChatJsonResponse = serde_json::from_str(body).unwrap_or_default();

    if (200..=299).contains(&status) {
        let message_id = parsed
            .id
            .or(parsed.message_id)
            .or(parsed.data.and_then(|data| data.id))
            .and_then(|id| MessageId::new(id.into_string()).ok());
        return SendResult::sent(message_id, status, body);
    }

    let error = parsed
        .error
        .or(parsed.message)
        .unwrap_or_else(|| format!("HTTP {status}"));
    SendResult::rejected(error, status, body)
}
