//! Terraform interaction for the verification harness.
//!
//! Thin wrappers over the terraform CLI: apply the externally defined
//! infrastructure configuration and read its string outputs.

use crate::cmd;
use std::error::Error;
use std::path::Path;

/// Run `terraform init` followed by `terraform apply -auto-approve` in the
/// given configuration directory.
pub fn init_and_apply(dir: &Path) -> Result<(), Box<dyn Error>> {
    log::info!("terraform init in {dir:?}");
    cmd::run_in(dir, "terraform init -input=false")?;
    log::info!("terraform apply in {dir:?}");
    cmd::run_in(dir, "terraform apply -auto-approve -input=false")?;
    Ok(())
}

/// Read a single string output from the applied configuration.
///
/// # Errors
/// Fails when terraform exits non-zero or the output value is empty.
pub fn output(dir: &Path, name: &str) -> Result<String, Box<dyn Error>> {
    let value = cmd::run_in(dir, &format!("terraform output -raw {name}"))?;
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(format!("terraform output '{name}' is empty").into());
    }
    log::info!("terraform output {name}={value}");
    Ok(value)
}
