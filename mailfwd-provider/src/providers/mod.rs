//! Forwarding provider implementations

mod ovh;

pub use ovh::{OvhProvider, OvhProviderBuilder};
