//! Ambient credential and subscription resolution.
//!
//! Credentials are resolved once and passed explicitly to the compute client,
//! so callers (and tests) can substitute their own [`TokenCredential`].

use crate::config;
use azure_core::auth::TokenCredential;
use azure_identity::DefaultAzureCredential;
use std::error::Error;
use std::sync::Arc;

/// Build the default credential chain from the execution environment
/// (environment variables, managed identity, Azure CLI session).
pub fn default_credential() -> Result<Arc<dyn TokenCredential>, Box<dyn Error>> {
    Ok(Arc::new(DefaultAzureCredential::default()))
}

/// Read the target subscription ID from `ARM_SUBSCRIPTION_ID`.
///
/// An unset or empty variable is a hard error; there is no fallback.
pub fn subscription_from_env() -> Result<String, Box<dyn Error>> {
    match std::env::var(config::SUBSCRIPTION_ID_ENV) {
        Ok(sub_id) if !sub_id.trim().is_empty() => Ok(sub_id.trim().to_string()),
        _ => Err(format!(
            "{} environment variable is not set",
            config::SUBSCRIPTION_ID_ENV
        )
        .into()),
    }
}
