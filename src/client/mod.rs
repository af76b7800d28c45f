//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::domain::{
    AccountId, ApiKey, AttendeeId, BaseUrl, GroupJid, MessageText, PhoneNumber, SendResult,
};
use crate::transport::AccountDecodeError;

const ACCOUNTS_ENDPOINT: &str = "/accounts";
const CHATS_ENDPOINT: &str = "/chats";

/// Environment variable consulted by [`GatewayClient::from_env`] for the API key.
pub const ENV_API_KEY: &str = "WHATSAPP_API_KEY";
/// Environment variable consulted by [`GatewayClient::from_env`] for the base URL.
pub const ENV_BASE_URL: &str = "WHATSAPP_BASE_URL";

const JSON_GET_TIMEOUT: Duration = Duration::from_secs(10);
const MULTIPART_POST_TIMEOUT: Duration = Duration::from_secs(15);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

type BoxError = Box<dyn StdError + Send + Sync>;
type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn get_json<'a>(
        &'a self,
        url: &'a str,
        api_key: &'a ApiKey,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;

    fn post_multipart<'a>(
        &'a self,
        url: &'a str,
        api_key: &'a ApiKey,
        fields: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn get_json<'a>(
        &'a self,
        url: &'a str,
        api_key: &'a ApiKey,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let response = self
                .client
                .get(url)
                .header(ApiKey::HEADER, api_key.as_str())
                .header(reqwest::header::ACCEPT, "application/json")
                .timeout(JSON_GET_TIMEOUT)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }

    fn post_multipart<'a>(
        &'a self,
        url: &'a str,
        api_key: &'a ApiKey,
        fields: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let mut form = reqwest::multipart::Form::new();
            for (name, value) in fields {
                form = form.text(name, value);
            }
            let response = self
                .client
                .post(url)
                .header(ApiKey::HEADER, api_key.as_str())
                .header(reqwest::header::ACCEPT, "application/json")
                .timeout(MULTIPART_POST_TIMEOUT)
                .multipart(form)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// The client is missing a setting it needs before it can talk to the gateway.
///
/// Fatal to the calling operation: fix the configuration and retry.
pub enum ConfigurationError {
    /// No API key was set via [`GatewayClient::set_api_key`], the builder, or
    /// the `WHATSAPP_API_KEY` variable.
    #[error("api key is not set (use set_api_key or the WHATSAPP_API_KEY variable)")]
    MissingApiKey,

    /// No base URL was set via [`GatewayClient::set_base_url`], the builder, or
    /// the `WHATSAPP_BASE_URL` variable.
    #[error("base url is not set (use set_base_url or the WHATSAPP_BASE_URL variable)")]
    MissingBaseUrl,
}

#[derive(Debug, thiserror::Error)]
/// Account discovery against `GET /accounts` could not complete.
pub enum RemoteError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("account discovery transport error: {0}")]
    Transport(#[source] BoxError),

    /// Non-200 HTTP status returned by the discovery endpoint.
    #[error("account discovery failed with HTTP {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// The response carried no account records.
    #[error("no account found")]
    NoAccountFound,

    /// The first account record had neither an `id` nor an `account_id` field.
    #[error("account id not found in response")]
    AccountIdNotFound,
}

impl From<AccountDecodeError> for RemoteError {
    fn from(err: AccountDecodeError) -> Self {
        match err {
            AccountDecodeError::NoAccountFound => Self::NoAccountFound,
            AccountDecodeError::AccountIdNotFound => Self::AccountIdNotFound,
        }
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`GatewayClient`].
///
/// These are the raised channel of the error design: misconfiguration and
/// discovery failures. Expected per-send outcomes (remote rejection, missing
/// destination) are reported as [`SendResult`] data instead, so group sends
/// can keep going.
pub enum GatewayError {
    /// API key or base URL missing at the time of a network operation.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Account discovery failed.
    #[error("account discovery error: {0}")]
    Remote(#[from] RemoteError),

    /// The underlying HTTP client could not be constructed.
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),
}

#[derive(Debug, Clone)]
/// Builder for [`GatewayClient`].
///
/// Use this to pre-seed configuration or to customize the HTTP client
/// (connect timeout, user-agent, TLS behavior).
pub struct GatewayClientBuilder {
    api_key: Option<ApiKey>,
    base_url: Option<BaseUrl>,
    account_id: Option<AccountId>,
    default_destination: Option<PhoneNumber>,
    connect_timeout: Duration,
    user_agent: Option<String>,
    danger_accept_invalid_certs: bool,
}

impl GatewayClientBuilder {
    /// Create a builder with nothing configured, a 10-second connect timeout,
    /// and TLS certificate verification enabled.
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: None,
            account_id: None,
            default_destination: None,
            connect_timeout: CONNECT_TIMEOUT,
            user_agent: None,
            danger_accept_invalid_certs: false,
        }
    }

    /// Set the gateway API key.
    pub fn api_key(mut self, api_key: ApiKey) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Set the gateway base URL.
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Pre-seed the account id, skipping discovery entirely.
    pub fn account_id(mut self, account_id: AccountId) -> Self {
        self.account_id = Some(account_id);
        self
    }

    /// Set the destination used when `send_message` is called without one.
    pub fn default_destination(mut self, destination: PhoneNumber) -> Self {
        self.default_destination = Some(destination);
        self
    }

    /// Override the connection timeout (default: 10 seconds).
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Disable TLS certificate verification.
    ///
    /// Certificates are verified by default. This switch exists for test and
    /// sandbox gateways with self-signed certificates; never enable it against
    /// a production endpoint.
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.danger_accept_invalid_certs = accept;
        self
    }

    /// Build a [`GatewayClient`].
    pub fn build(self) -> Result<GatewayClient, GatewayError> {
        let mut builder = reqwest::Client::builder().connect_timeout(self.connect_timeout);
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        if self.danger_accept_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder
            .build()
            .map_err(|err| GatewayError::Transport(Box::new(err)))?;

        Ok(GatewayClient {
            api_key: self.api_key,
            base_url: self.base_url,
            account_id: Mutex::new(self.account_id),
            default_destination: self.default_destination,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

impl Default for GatewayClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for a Unipile-style WhatsApp messaging gateway.
///
/// The client resolves the gateway-side account id (lazily, cached for the
/// client's lifetime), formats recipients into messaging identifiers, and
/// submits sends as multipart POSTs to `/chats`:
///
/// ```rust,no_run
/// use whatsapp_gateway::{ApiKey, BaseUrl, GatewayClient, MessageText, PhoneNumber};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut client = GatewayClient::new();
///     client
///         .set_api_key(ApiKey::new("...")?)
///         .set_base_url(BaseUrl::new("https://your-host/api")?);
///
///     let text = MessageText::new("hello")?;
///     let result = client
///         .send_message(&text, Some(&PhoneNumber::new("+243000000000")))
///         .await?;
///     println!("sent: {} ({:?})", result.success, result.message_id);
///     Ok(())
/// }
/// ```
pub struct GatewayClient {
    api_key: Option<ApiKey>,
    base_url: Option<BaseUrl>,
    account_id: Mutex<Option<AccountId>>,
    default_destination: Option<PhoneNumber>,
    http: Arc<dyn HttpTransport>,
}

impl GatewayClient {
    /// Create an unconfigured client. Set the API key and base URL before
    /// calling any network operation.
    ///
    /// Panics if the default HTTP client cannot be constructed, the same
    /// convention `reqwest::Client::new` follows. Use
    /// [`GatewayClient::builder`] to handle that failure as an error.
    pub fn new() -> Self {
        GatewayClientBuilder::new()
            .build()
            .expect("default HTTP client")
    }

    /// Create a client configured from `WHATSAPP_API_KEY` and
    /// `WHATSAPP_BASE_URL`. Absent, empty, or invalid values leave the
    /// corresponding field unset.
    pub fn from_env() -> Self {
        let mut client = Self::new();
        if let Some(api_key) = std::env::var(ENV_API_KEY)
            .ok()
            .and_then(|value| ApiKey::new(value).ok())
        {
            client.set_api_key(api_key);
        }
        if let Some(base_url) = std::env::var(ENV_BASE_URL)
            .ok()
            .and_then(|value| BaseUrl::new(value).ok())
        {
            client.set_base_url(base_url);
        }
        client
    }

    /// Start building a client with custom settings.
    pub fn builder() -> GatewayClientBuilder {
        GatewayClientBuilder::new()
    }

    /// Set the gateway API key.
    pub fn set_api_key(&mut self, api_key: ApiKey) -> &mut Self {
        self.api_key = Some(api_key);
        self
    }

    /// Set the gateway base URL.
    pub fn set_base_url(&mut self, base_url: BaseUrl) -> &mut Self {
        self.base_url = Some(base_url);
        self
    }

    /// Seed the account-id cache, so sends skip discovery.
    pub fn set_account_id(&mut self, account_id: AccountId) -> &mut Self {
        *self.cache() = Some(account_id);
        self
    }

    /// Set the destination used when [`GatewayClient::send_message`] is called
    /// without one.
    pub fn set_default_destination(&mut self, destination: PhoneNumber) -> &mut Self {
        self.default_destination = Some(destination);
        self
    }

    /// Resolve the gateway-side account id.
    ///
    /// Returns the cached id when present; otherwise fetches `GET /accounts`,
    /// takes the first account's `id` (else `account_id`), caches it for the
    /// client's lifetime, and returns it. There is no invalidation path: once
    /// resolved, later sends never re-query.
    ///
    /// Errors:
    /// - [`GatewayError::Configuration`] when the API key or base URL is unset,
    /// - [`GatewayError::Remote`] when the call fails or no usable account
    ///   record comes back.
    pub async fn account_id(&self) -> Result<AccountId, GatewayError> {
        if let Some(account_id) = self.cache().clone() {
            return Ok(account_id);
        }

        let (api_key, base_url) = self.assert_configured()?;
        let url = base_url.join(ACCOUNTS_ENDPOINT);
        let response = self
            .http
            .get_json(&url, api_key)
            .await
            .map_err(RemoteError::Transport)?;

        if response.status != 200 {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(RemoteError::HttpStatus {
                status: response.status,
                body,
            }
            .into());
        }

        let account_id = crate::transport::decode_accounts_json_response(&response.body)
            .map_err(RemoteError::from)?;
        *self.cache() = Some(account_id.clone());
        Ok(account_id)
    }

    /// Send a message to one recipient.
    ///
    /// The destination is the explicit argument, else the configured default.
    /// When neither exists the call does not touch the network and returns a
    /// `SendResult` failure (caller input, not a system fault). Remote
    /// rejections and send-path transport failures are likewise reported as
    /// `SendResult` data.
    ///
    /// Errors:
    /// - [`GatewayError::Configuration`] when the API key or base URL is unset,
    /// - [`GatewayError::Remote`] when account discovery fails.
    pub async fn send_message(
        &self,
        text: &MessageText,
        destination: Option<&PhoneNumber>,
    ) -> Result<SendResult, GatewayError> {
        self.assert_configured()?;

        let Some(destination) = destination.or(self.default_destination.as_ref()) else {
            return Ok(SendResult::not_attempted(
                "no destination provided (pass one or call set_default_destination)",
            ));
        };

        self.post_chat(&destination.messaging_id(), text).await
    }

    /// Send the same message to several recipients, sequentially and in the
    /// order given.
    ///
    /// Returns one `(destination, SendResult)` pair per input, keyed by the
    /// destination exactly as given. A rejection or transport failure for one
    /// destination never prevents the attempt for the next; configuration and
    /// discovery errors abort the whole batch, since they would fail every
    /// destination identically.
    pub async fn send_message_group(
        &self,
        text: &MessageText,
        destinations: &[PhoneNumber],
    ) -> Result<Vec<(PhoneNumber, SendResult)>, GatewayError> {
        let mut results = Vec::with_capacity(destinations.len());
        for destination in destinations {
            let result = self.send_message(text, Some(destination)).await?;
            results.push((destination.clone(), result));
        }
        Ok(results)
    }

    /// Send a message to a group chat.
    ///
    /// The group jid is already in network form (e.g. `12345-67890@g.us`) and
    /// is passed to the gateway verbatim, bypassing phone formatting.
    pub async fn send_message_to_group(
        &self,
        group: &GroupJid,
        text: &MessageText,
    ) -> Result<SendResult, GatewayError> {
        self.assert_configured()?;
        self.post_chat(&AttendeeId::from(group), text).await
    }

    async fn post_chat(
        &self,
        attendee: &AttendeeId,
        text: &MessageText,
    ) -> Result<SendResult, GatewayError> {
        let (api_key, base_url) = self.assert_configured()?;
        let account_id = self.account_id().await?;
        let fields = crate::transport::encode_chat_form(&account_id, attendee, text);
        let url = base_url.join(CHATS_ENDPOINT);

        match self.http.post_multipart(&url, api_key, fields).await {
            Ok(response) => Ok(crate::transport::decode_chat_json_response(
                response.status,
                &response.body,
            )),
            // Send-path transport failures become data so group sends continue.
            Err(err) => Ok(SendResult::not_attempted(format!("transport error: {err}"))),
        }
    }

    fn assert_configured(&self) -> Result<(&ApiKey, &BaseUrl), ConfigurationError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or(ConfigurationError::MissingApiKey)?;
        let base_url = self
            .base_url
            .as_ref()
            .ok_or(ConfigurationError::MissingBaseUrl)?;
        Ok((api_key, base_url))
    }

    // Never held across an await.
    fn cache(&self) -> MutexGuard<'_, Option<AccountId>> {
        self.account_id.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for GatewayClient {
    fn default() -> Self {
        Self::new()
    }
}
