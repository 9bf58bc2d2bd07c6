//! HTTP client for the ARM compute management API.
//!
//! Read-only requests against virtual machine endpoints, scoped to one
//! subscription. Pagination follows `nextLink` until exhausted; there is no
//! caching and no retry.

use crate::config;
use crate::models::{VirtualMachine, VirtualMachineListPage};
use azure_core::auth::TokenCredential;
use colored::Colorize;
use serde::de::DeserializeOwned;
use std::error::Error;
use std::sync::Arc;

/// Client for read requests against the compute API of one subscription.
pub struct ComputeClient {
    http: reqwest::Client,
    credential: Arc<dyn TokenCredential>,
    subscription_id: String,
}

impl ComputeClient {
    /// Create a client scoped to the given subscription.
    ///
    /// The credential is injected rather than resolved internally, so a
    /// caller controls where tokens come from.
    pub fn new(credential: Arc<dyn TokenCredential>, subscription_id: &str) -> ComputeClient {
        ComputeClient {
            http: reqwest::Client::new(),
            credential,
            subscription_id: subscription_id.to_string(),
        }
    }

    /// List all virtual machines in a resource group, following pagination.
    ///
    /// A group with no machines yields an empty vector, not an error.
    pub async fn list_virtual_machines(
        &self,
        resource_group: &str,
    ) -> Result<Vec<VirtualMachine>, Box<dyn Error>> {
        let mut url = vm_list_url(&self.subscription_id, resource_group);
        let mut vms: Vec<VirtualMachine> = Vec::new();
        let mut page_number = 0;

        loop {
            let page: VirtualMachineListPage = self.get_json(&url).await?;
            log::info!(
                "got page#{page_number} vm_count=+{count:2} => {total:2}",
                count = page.value.len(),
                total = vms.len() + page.value.len(),
            );
            vms.extend(page.value);

            match page.next_link {
                Some(next) if !next.is_empty() => {
                    if next == url {
                        return Err("nextLink not unique - possible infinite loop".into());
                    }
                    url = next;
                }
                _ => break,
            }
            page_number += 1;
        }

        Ok(vms)
    }

    /// Fetch one virtual machine by name.
    pub async fn get_virtual_machine(
        &self,
        resource_group: &str,
        vm_name: &str,
    ) -> Result<VirtualMachine, Box<dyn Error>> {
        let url = vm_get_url(&self.subscription_id, resource_group, vm_name);
        self.get_json(&url).await
    }

    /// Issue an authenticated GET and deserialize the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, Box<dyn Error>> {
        log::debug!("GET {url}", url = url.on_blue());

        let token = self
            .credential
            .get_token(&[config::ARM_TOKEN_SCOPE])
            .await
            .map_err(|e| format!("failed to get credential token: {e}"))?;

        let response = self
            .http
            .get(url)
            .bearer_auth(token.token.secret())
            .send()
            .await
            .map_err(|e| format!("ARM request failed: {e}"))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| format!("failed to read ARM response body: {e}"))?;

        if !status.is_success() {
            log::warn!(
                "{failed} GET {url} status={status}",
                failed = "failed".on_red(),
            );
            return Err(format!("ARM request returned {status}: {body}").into());
        }

        let mut deserializer = serde_json::Deserializer::from_str(&body);
        let parsed: T = serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
            log::error!("RESPONSE START:\n\n{body}\n\nRESPONSE END\n");
            format!("Error parsing ARM response: path={} error={}", e.path(), e)
        })?;

        Ok(parsed)
    }
}

/// URL of the list-by-resource-group endpoint.
fn vm_list_url(subscription_id: &str, resource_group: &str) -> String {
    format!(
        "{endpoint}/subscriptions/{subscription_id}/resourceGroups/{resource_group}\
/providers/Microsoft.Compute/virtualMachines?api-version={api_version}",
        endpoint = config::ARM_ENDPOINT,
        api_version = config::COMPUTE_API_VERSION,
    )
}

/// URL of the get-by-name endpoint.
fn vm_get_url(subscription_id: &str, resource_group: &str, vm_name: &str) -> String {
    format!(
        "{endpoint}/subscriptions/{subscription_id}/resourceGroups/{resource_group}\
/providers/Microsoft.Compute/virtualMachines/{vm_name}?api-version={api_version}",
        endpoint = config::ARM_ENDPOINT,
        api_version = config::COMPUTE_API_VERSION,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vm_list_url() {
        let url = vm_list_url("sub-1", "rg-demo");
        assert_eq!(
            url,
            "https://management.azure.com/subscriptions/sub-1/resourceGroups/rg-demo\
/providers/Microsoft.Compute/virtualMachines?api-version=2023-09-01"
        );
    }

    #[test]
    fn test_vm_get_url() {
        let url = vm_get_url("sub-1", "rg-demo", "vm-web01");
        assert!(
            url.contains("/virtualMachines/vm-web01?api-version="),
            "Unexpected url: {url}"
        );
    }
}
