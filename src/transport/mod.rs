//! Transport layer: wire-format details for the gateway's endpoints
//! (serialization/deserialization, no I/O).

mod accounts;
mod chats;
mod ident;

pub use accounts::{AccountDecodeError, decode_accounts_json_response};
pub use chats::{decode_chat_json_response, encode_chat_form};
