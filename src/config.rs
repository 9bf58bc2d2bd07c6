//! Crate-wide constants and environment defaults.

use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Base URL of the Azure Resource Manager endpoint (public cloud).
pub const ARM_ENDPOINT: &str = "https://management.azure.com";

/// Token scope requested for ARM calls.
pub const ARM_TOKEN_SCOPE: &str = "https://management.azure.com/.default";

/// Compute API version used for virtual machine requests.
pub const COMPUTE_API_VERSION: &str = "2023-09-01";

/// Environment variable holding the target subscription ID.
pub const SUBSCRIPTION_ID_ENV: &str = "ARM_SUBSCRIPTION_ID";

/// Admin username provisioned on the test virtual machine.
pub const SSH_USERNAME: &str = "azureadmin";

/// SSH port on the provisioned host.
pub const SSH_PORT: u16 = 22;

/// Timeout for the TCP connect preceding the SSH handshake.
pub const SSH_CONNECT_TIMEOUT: Duration = Duration::from_secs(15);

/// Path of the private key used for SSH authentication: `$HOME/.ssh/id_rsa`.
pub fn default_private_key_path() -> Result<PathBuf, Box<dyn Error>> {
    let home = std::env::var("HOME").map_err(|_| "HOME environment variable is not set")?;
    Ok(Path::new(&home).join(".ssh").join("id_rsa"))
}
