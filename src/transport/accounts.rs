use serde::Deserialize;

use crate::domain::AccountId;
use crate::transport::ident::JsonId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountDecodeError {
    #[error("no account found")]
    NoAccountFound,

    #[error("account id not found in response")]
    AccountIdNotFound,
}

/// Discovery bodies vary by deployment: the account list arrives under
/// `items`, under `data`, or as the bare top-level array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum AccountsJsonResponse {
    Envelope {
        #[serde(default)]
        items: Option<Vec<AccountJsonRecord>>,
        #[serde(default)]
        data: Option<Vec<AccountJsonRecord>>,
    },
    List(Vec<AccountJsonRecord>),
}

#[derive(Debug, Clone, Deserialize)]
struct AccountJsonRecord {
    #[serde(default)]
    id: Option<JsonId>,
    #[serde(default)]
    account_id: Option<JsonId>,
}

/// Decode a `GET /accounts` body into the first account's id.
///
/// An unparseable body is treated the same as an absent list: there is no
/// account to resolve.
pub fn decode_accounts_json_response(body: &str) -> Result<AccountId, AccountDecodeError> {
    let parsed: AccountsJsonResponse =
        serde_json::from_str(body).map_err(|_| AccountDecodeError::NoAccountFound)?;

    let accounts = match parsed {
        AccountsJsonResponse::Envelope {
            items: Some(items), ..
        } => items,
        AccountsJsonResponse::Envelope {
            data: Some(data), ..
        } => data,
        AccountsJsonResponse::Envelope { .. } => return Err(AccountDecodeError::NoAccountFound),
        AccountsJsonResponse::List(list) => list,
    };

    let first = accounts
        .into_iter()
        .next()
        .ok_or(AccountDecodeError::NoAccountFound)?;

    let id = first
        .id
        .or(first.account_id)
        .ok_or(AccountDecodeError::AccountIdNotFound)?;

    AccountId::new(id.into_string()).map_err(|_| AccountDecodeError::AccountIdNotFound)
}
