//! Utility modules shared across providers.

pub(crate) mod log_sanitizer;
