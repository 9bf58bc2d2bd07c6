//! Domain models for Azure virtual machine verification.
//!
//! This module contains the data structures used throughout the application:
//! - [`VirtualMachine`] and its nested profiles - ARM compute API responses
//! - [`VmImage`] - flattened OS image reference of a virtual machine
//! - [`ResourceId`] - parsed ARM resource identifier

mod resource_id;
mod virtual_machine;

// Re-export public types
pub use resource_id::ResourceId;
pub use virtual_machine::{
    ImageReference, NetworkInterfaceReference, NetworkProfile, StorageProfile, VirtualMachine,
    VirtualMachineListPage, VirtualMachineProperties, VmImage,
};
