// cargo watch -x 'fmt' -x 'run'  // 'run -- rg-demo'

mod cmd;
pub mod azure;
pub mod config;
pub mod models;
pub mod ssh;
pub mod terraform;

pub use azure::{
    default_credential, get_virtual_machine_image, get_virtual_machine_nics,
    list_virtual_machine_names, subscription_from_env, ComputeClient,
};
pub use models::{ResourceId, VmImage};
pub use ssh::SshHost;
