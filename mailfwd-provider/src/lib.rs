//! # mailfwd-provider
//!
//! An email forwarding abstraction for managing mailbox redirections hosted by
//! a domain registrar.
//!
//! ## Supported Providers
//!
//! | Provider | Auth Method |
//! |----------|-------------|
//! | [OVHcloud email domain](https://www.ovhcloud.com/) | Application key + consumer key, `$1$` SHA-1 signature |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for static and cross-compiled builds.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mailfwd_provider::{
//!     create_provider, ForwardingProvider, ForwardingSettings, ProviderCredentials,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Create a provider from credentials and the managed domain
//!     let credentials = ProviderCredentials::Ovh {
//!         endpoint: "ovh-eu".to_string(),
//!         app_key: "app-key".to_string(),
//!         app_secret: "app-secret".to_string(),
//!         consumer_key: "consumer-key".to_string(),
//!     };
//!     let settings = ForwardingSettings {
//!         domain: "example.com".to_string(),
//!         default_email: "me@example.org".to_string(),
//!     };
//!     let provider = create_provider(credentials, settings)?;
//!
//!     // 2. Create a redirection with a random source on the default mailbox
//!     provider.create_on_default_email().await?;
//!
//!     // 3. List redirections, newest first
//!     for rule in provider.list().await? {
//!         println!("{} -> {}", rule.from, rule.to);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All provider operations return [`Result<T, ProviderError>`](ProviderError).
//!
//! - [`ProviderError::InvalidCredentials`]: authentication failed
//! - [`ProviderError::RedirectionNotFound`]: redirection id unknown to the API
//! - [`ProviderError::RateLimited`]: API rate limit exceeded
//! - [`ProviderError::NetworkError`]: network connectivity issue
//!
//! Only creation is retried automatically (3 attempts, fixed 2 s delay).

mod error;
mod factory;
mod http_client;
mod local_part;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::create_provider;

// Re-export core trait only (internal traits are not exported)
pub use traits::ForwardingProvider;

// Re-export types
pub use types::{ForwardingRule, ForwardingSettings, OvhEndpoint, ProviderCredentials};

// Re-export the randomness seam
pub use local_part::{
    LOCAL_PART_ALPHABET, LOCAL_PART_LEN, LocalPartSource, SeededLocalPart, ThreadRngLocalPart,
};

// Re-export concrete providers
pub use providers::{OvhProvider, OvhProviderBuilder};
