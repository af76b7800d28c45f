//! Typed Rust client for a Unipile-style WhatsApp messaging gateway.
//!
//! The design follows a small layered layout: a domain layer of strong types,
//! a transport layer for wire-format quirks, and a client layer orchestrating
//! requests. The client resolves the gateway-side account id once, caches it,
//! formats recipients into messaging identifiers, and submits sends as
//! multipart POSTs.
//!
//! ```rust,no_run
//! use whatsapp_gateway::{ApiKey, BaseUrl, GatewayClient, MessageText, PhoneNumber};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut client = GatewayClient::new();
//!     client
//!         .set_api_key(ApiKey::new("...")?)
//!         .set_base_url(BaseUrl::new("https://your-host/api")?);
//!
//!     let text = MessageText::new("hello")?;
//!     let result = client
//!         .send_message(&text, Some(&PhoneNumber::new("+243000000000")))
//!         .await?;
//!     assert!(result.success);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    ConfigurationError, ENV_API_KEY, ENV_BASE_URL, GatewayClient, GatewayClientBuilder,
    GatewayError, RemoteError,
};
pub use domain::{
    AccountId, ApiKey, AttendeeId, BaseUrl, GroupJid, MessageId, MessageText, PhoneNumber,
    SendResult, ValidationError,
};
