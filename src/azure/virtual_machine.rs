//! Virtual machine query functions.
//!
//! The three read-only lookups used by the verification harness:
//! - [`list_virtual_machine_names`] - VM names in a resource group
//! - [`get_virtual_machine_nics`] - NIC short names attached to a VM
//! - [`get_virtual_machine_image`] - OS image reference of a VM
//!
//! Fetching is separated from extraction: [`names_from`], [`nic_names_from`]
//! and [`image_from`] work on already fetched records.

use super::compute::ComputeClient;
use crate::models::{ResourceId, VirtualMachine, VmImage};
use std::error::Error;

/// List the names of all virtual machines in a resource group.
///
/// Machines without a name in the API response are skipped. An empty
/// resource group yields an empty vector.
pub async fn list_virtual_machine_names(
    client: &ComputeClient,
    resource_group: &str,
) -> Result<Vec<String>, Box<dyn Error>> {
    let vms = client.list_virtual_machines(resource_group).await?;
    Ok(names_from(vms))
}

/// Extract the names from fetched virtual machine records.
///
/// Machines without a name are skipped; order follows the input.
pub fn names_from(vms: Vec<VirtualMachine>) -> Vec<String> {
    vms.into_iter().filter_map(|vm| vm.name).collect()
}

/// Resolve the NIC short names attached to a named virtual machine.
pub async fn get_virtual_machine_nics(
    client: &ComputeClient,
    resource_group: &str,
    vm_name: &str,
) -> Result<Vec<String>, Box<dyn Error>> {
    let vm = client.get_virtual_machine(resource_group, vm_name).await?;
    nic_names_from(&vm)
}

/// Resolve the OS image reference of a named virtual machine.
pub async fn get_virtual_machine_image(
    client: &ComputeClient,
    resource_group: &str,
    vm_name: &str,
) -> Result<VmImage, Box<dyn Error>> {
    let vm = client.get_virtual_machine(resource_group, vm_name).await?;
    image_from(&vm)
}

/// Extract NIC short names from a fetched virtual machine record.
///
/// A missing network profile or interface list is an error. Interface
/// references without an ID are skipped; an ID that does not parse as an
/// ARM resource identifier is an error.
pub fn nic_names_from(vm: &VirtualMachine) -> Result<Vec<String>, Box<dyn Error>> {
    let interfaces = vm
        .properties
        .as_ref()
        .and_then(|props| props.network_profile.as_ref())
        .and_then(|profile| profile.network_interfaces.as_ref())
        .ok_or("vm network interfaces not found")?;

    let mut nic_names = Vec::new();
    for nic_ref in interfaces {
        let Some(id) = nic_ref.id.as_deref() else {
            continue;
        };
        let parsed = ResourceId::parse(id)
            .map_err(|e| format!("failed to parse network interface id: {e}"))?;
        nic_names.push(parsed.name);
    }

    Ok(nic_names)
}

/// Extract the image reference from a fetched virtual machine record.
///
/// A missing storage profile or image reference is an error; absent leaf
/// fields become empty strings.
pub fn image_from(vm: &VirtualMachine) -> Result<VmImage, Box<dyn Error>> {
    let image_ref = vm
        .properties
        .as_ref()
        .and_then(|props| props.storage_profile.as_ref())
        .and_then(|profile| profile.image_reference.as_ref())
        .ok_or("vm image reference not found")?;

    Ok(VmImage::from(image_ref))
}
