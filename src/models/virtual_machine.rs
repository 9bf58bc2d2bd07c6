//! Azure virtual machine data model.
//!
//! Mirrors the subset of the ARM compute API response consumed by this crate.
//! Every field the API may omit is an `Option`; the query layer decides which
//! absences are errors and which default to empty values.

use serde::{Deserialize, Serialize};

/// One page of a virtual machine list response.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachineListPage {
    /// Virtual machines in this page, in API enumeration order.
    #[serde(default)]
    pub value: Vec<VirtualMachine>,
    /// URL of the next page, absent on the last page.
    pub next_link: Option<String>,
}

/// An Azure virtual machine as returned by the ARM compute API.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachine {
    /// Fully-qualified ARM resource ID.
    pub id: Option<String>,
    /// Name of the virtual machine, unique within its resource group.
    pub name: Option<String>,
    /// Azure region location.
    pub location: Option<String>,
    /// Machine properties sub-structure.
    pub properties: Option<VirtualMachineProperties>,
}

/// Properties sub-structure of a virtual machine.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachineProperties {
    /// Provisioning state reported by ARM (e.g. "Succeeded").
    pub provisioning_state: Option<String>,
    /// Network profile with the attached interface references.
    pub network_profile: Option<NetworkProfile>,
    /// Storage profile with the OS image reference.
    pub storage_profile: Option<StorageProfile>,
}

/// Network profile of a virtual machine.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NetworkProfile {
    /// References to the network interfaces attached to the machine.
    pub network_interfaces: Option<Vec<NetworkInterfaceReference>>,
}

/// Reference to a network interface attached to a virtual machine.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInterfaceReference {
    /// Fully-qualified ARM resource ID of the interface.
    pub id: Option<String>,
}

/// Storage profile of a virtual machine.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct StorageProfile {
    /// Reference to the OS image the machine was created from.
    pub image_reference: Option<ImageReference>,
}

/// OS image reference as returned by the API, all fields optional.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ImageReference {
    /// Image publisher (e.g. "Canonical").
    pub publisher: Option<String>,
    /// Image offer (e.g. "0001-com-ubuntu-server-focal").
    pub offer: Option<String>,
    /// Image SKU (e.g. "20_04-lts-gen2").
    pub sku: Option<String>,
    /// Image version, often "latest".
    pub version: Option<String>,
}

/// Flattened image reference with absent fields normalized to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VmImage {
    pub publisher: String,
    pub offer: String,
    pub sku: String,
    pub version: String,
}

impl From<&ImageReference> for VmImage {
    fn from(image_ref: &ImageReference) -> Self {
        VmImage {
            publisher: image_ref.publisher.clone().unwrap_or_default(),
            offer: image_ref.offer.clone().unwrap_or_default(),
            sku: image_ref.sku.clone().unwrap_or_default(),
            version: image_ref.version.clone().unwrap_or_default(),
        }
    }
}

// TESTS read sample API payloads from src/tests/test_data/
#[cfg(test)]
mod tests {
    use super::*;

    fn parse_vm(path: &str) -> VirtualMachine {
        let json = std::fs::read_to_string(path).expect("Error reading test data file");
        let mut deserializer = serde_json::Deserializer::from_str(&json);
        serde_path_to_error::deserialize(&mut deserializer).expect("Error parsing VM json")
    }

    #[test]
    fn test_parse_vm_get_response() {
        let vm = parse_vm("src/tests/test_data/vm_get_web01.json");
        assert_eq!(vm.name.as_deref(), Some("vm-web01"), "Wrong VM name");
        assert_eq!(vm.location.as_deref(), Some("canadacentral"));

        let props = vm.properties.expect("VM should have properties");
        let nics = props
            .network_profile
            .expect("VM should have a network profile")
            .network_interfaces
            .expect("VM should have network interfaces");
        assert_eq!(nics.len(), 1, "Expected one NIC reference");
        assert!(
            nics[0]
                .id
                .as_deref()
                .expect("NIC reference should have an id")
                .ends_with("/networkInterfaces/nic-web01"),
            "Unexpected NIC id: {:?}",
            nics[0].id
        );

        let image = props
            .storage_profile
            .expect("VM should have a storage profile")
            .image_reference
            .expect("VM should have an image reference");
        assert_eq!(image.offer.as_deref(), Some("0001-com-ubuntu-server-focal"));
    }

    #[test]
    fn test_parse_minimal_vm() {
        // A response stripped down to a bare name must still deserialize.
        let json = r#"{"name": "vm-bare"}"#;
        let vm: VirtualMachine = serde_json::from_str(json).expect("Error parsing minimal VM");
        assert_eq!(vm.name.as_deref(), Some("vm-bare"));
        assert!(vm.properties.is_none(), "No properties expected");
    }

    #[test]
    fn test_parse_list_page() {
        let json = std::fs::read_to_string("src/tests/test_data/vm_list_page_01.json")
            .expect("Error reading test data file");
        let page: VirtualMachineListPage =
            serde_json::from_str(&json).expect("Error parsing list page");
        assert_eq!(page.value.len(), 2, "Expected two VMs in test sample");
        assert_eq!(page.value[0].name.as_deref(), Some("vm-web01"));
        assert!(page.next_link.is_none(), "Single-page sample has no nextLink");
    }

    #[test]
    fn test_parse_empty_list_page() {
        let page: VirtualMachineListPage =
            serde_json::from_str(r#"{"value": []}"#).expect("Error parsing empty page");
        assert!(page.value.is_empty(), "Empty group should give an empty page");
    }

    #[test]
    fn test_vm_image_defaults_absent_fields() {
        let image_ref = ImageReference {
            offer: Some("0001-com-ubuntu-server-focal".to_string()),
            ..Default::default()
        };
        let image = VmImage::from(&image_ref);
        assert_eq!(image.offer, "0001-com-ubuntu-server-focal");
        assert_eq!(image.publisher, "", "Absent publisher should be empty");
        assert_eq!(image.sku, "", "Absent sku should be empty");
        assert_eq!(image.version, "", "Absent version should be empty");
    }
}
