//! Provider factory functions.

use std::sync::Arc;

use crate::error::Result;
use crate::providers::OvhProvider;
use crate::traits::ForwardingProvider;
use crate::types::{ForwardingSettings, OvhEndpoint, ProviderCredentials};

/// Creates a [`ForwardingProvider`] instance from the given credentials.
///
/// The concrete provider type is determined by the [`ProviderCredentials`] variant.
/// The returned provider is wrapped in `Arc<dyn ForwardingProvider>` for easy sharing.
///
/// # Examples
///
/// ```rust,no_run
/// use mailfwd_provider::{create_provider, ForwardingSettings, ProviderCredentials};
///
/// let provider = create_provider(
///     ProviderCredentials::Ovh {
///         endpoint: "ovh-eu".to_string(),
///         app_key: "app-key".to_string(),
///         app_secret: "app-secret".to_string(),
///         consumer_key: "consumer-key".to_string(),
///     },
///     ForwardingSettings {
///         domain: "example.com".to_string(),
///         default_email: "me@example.org".to_string(),
///     },
/// )
/// .unwrap();
/// ```
pub fn create_provider(
    credentials: ProviderCredentials,
    settings: ForwardingSettings,
) -> Result<Arc<dyn ForwardingProvider>> {
    match credentials {
        ProviderCredentials::Ovh {
            endpoint,
            app_key,
            app_secret,
            consumer_key,
        } => {
            let endpoint = OvhEndpoint::parse(&endpoint)?;
            Ok(Arc::new(OvhProvider::new(
                endpoint,
                app_key,
                app_secret,
                consumer_key,
                settings,
            )?))
        }
    }
}
