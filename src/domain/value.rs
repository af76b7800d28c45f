use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Gateway API key, sent as the `X-API-KEY` header.
///
/// Invariant: non-empty after trimming.
pub struct ApiKey(String);

impl ApiKey {
    /// Header name the gateway expects (`X-API-KEY`).
    pub const HEADER: &'static str = "X-API-KEY";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "api key" });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Base URL of the gateway, e.g. `https://your-host/api`.
///
/// Invariants: parses as an absolute URL, no trailing slash.
pub struct BaseUrl(String);

impl BaseUrl {
    /// Create a validated [`BaseUrl`], stripping any trailing slashes.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "base url" });
        }
        if url::Url::parse(trimmed).is_err() {
            return Err(ValidationError::InvalidBaseUrl { input: value });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the normalized URL.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Join a `/`-prefixed endpoint path onto the base.
    pub fn join(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Gateway-side identifier of the connected messaging account (`account_id`).
///
/// Invariant: non-empty after trimming.
pub struct AccountId(String);

impl AccountId {
    /// Form field name the gateway expects (`account_id`).
    pub const FIELD: &'static str = "account_id";

    /// Create a validated [`AccountId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated account id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Message body (`text`).
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// Form field name the gateway expects (`text`).
    pub const FIELD: &'static str = "text";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Raw recipient phone number as given by the caller, e.g. `+243000000000`.
///
/// Deliberately unvalidated: the gateway addresses recipients by messaging
/// identifier, and [`PhoneNumber::messaging_id`] only reshapes the string.
/// Malformed input passes through silently.
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Wrap a raw phone number.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the number as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Format the number as an individual messaging identifier:
    /// every leading `+` is stripped and `@s.whatsapp.net` appended.
    pub fn messaging_id(&self) -> AttendeeId {
        let digits = self.0.trim_start_matches('+');
        AttendeeId(format!("{digits}{}", AttendeeId::INDIVIDUAL_SUFFIX))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Group identifier already in network form, e.g. `12345-67890@g.us`.
///
/// Invariant: non-empty after trimming. Passed through to the gateway verbatim.
pub struct GroupJid(String);

impl GroupJid {
    /// Create a validated [`GroupJid`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "group jid" });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated jid.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Recipient in the gateway's addressing format (`attendees_ids`):
/// `<digits>@s.whatsapp.net` for individuals, `<id>@g.us` for groups.
pub struct AttendeeId(String);

impl AttendeeId {
    /// Form field name the gateway expects (`attendees_ids`).
    pub const FIELD: &'static str = "attendees_ids";

    /// Suffix for individual recipients.
    pub const INDIVIDUAL_SUFFIX: &'static str = "@s.whatsapp.net";

    /// Borrow the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&GroupJid> for AttendeeId {
    fn from(jid: &GroupJid) -> Self {
        Self(jid.as_str().to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Message identifier returned by the gateway after a successful send.
///
/// Invariant: non-empty after trimming.
pub struct MessageId(String);

impl MessageId {
    /// Create a validated [`MessageId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "message id" });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated message id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
