//! Azure credential handling and compute management API access.
//!
//! This module handles all Azure-related operations:
//! - [`credentials`] - Ambient credential and subscription resolution
//! - [`compute`] - HTTP client for the ARM compute API
//! - [`virtual_machine`] - Virtual machine query functions

mod compute;
mod credentials;
mod virtual_machine;

// Re-export public types and functions
pub use compute::ComputeClient;
pub use credentials::{default_credential, subscription_from_env};
pub use virtual_machine::{
    get_virtual_machine_image, get_virtual_machine_nics, image_from, list_virtual_machine_names,
    names_from, nic_names_from,
};
