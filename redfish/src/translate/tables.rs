// SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


//! Enum translation tables.
//!
//! Backend enums are strings such as
//! `xyz.openbmc_project.Inventory.Item.Dimm.DeviceType.DDR4`. Tables are
//! keyed by the suffix after the last `.`.

/// Backend suffix to Redfish value.
pub type Table = [(&'static str, &'static str)];

/// Translate `value` by its suffix.
#[must_use]
pub fn translate(table: &Table, value: &str) -> Option<&'static str> {
    let suffix = value.rsplit('.').next().unwrap_or(value);
    table
        .iter()
        .find(|(backend, _)| *backend == suffix)
        .map(|(_, redfish)| *redfish)
}

pub const CHASSIS_TYPE: &Table = &[
    ("Blade", "Blade"),
    ("Component", "Component"),
    ("Enclosure", "Enclosure"),
    ("Module", "Module"),
    ("RackMount", "RackMount"),
    ("StandAlone", "StandAlone"),
    ("StorageEnclosure", "StorageEnclosure"),
    ("Zone", "Zone"),
];

pub const PROCESSOR_TYPE: &Table = &[
    ("Accelerator", "Accelerator"),
    ("Core", "Core"),
    ("DSP", "DSP"),
    ("FPGA", "FPGA"),
    ("GPU", "GPU"),
    ("Thread", "Thread"),
];

pub const MEMORY_DEVICE_TYPE: &Table = &[
    ("DDR", "DDR"),
    ("DDR2", "DDR2"),
    ("DDR3", "DDR3"),
    ("DDR4", "DDR4"),
    ("DDR4E_SDRAM", "DDR4E_SDRAM"),
    ("DDR5", "DDR5"),
    ("LPDDR3_SDRAM", "LPDDR3_SDRAM"),
    ("LPDDR4_SDRAM", "LPDDR4_SDRAM"),
    ("LPDDR5_SDRAM", "LPDDR5_SDRAM"),
    ("DDR2_SDRAM_FB_DIMM", "DDR2_SDRAM_FB_DIMM"),
    ("HBM", "HBM"),
    ("HBM2", "HBM2"),
    ("HBM2E", "HBM2E"),
    ("HBM3", "HBM3"),
    ("EDO", "EDO"),
    ("ROM", "ROM"),
    ("SDRAM", "SDRAM"),
    ("Logical", "Logical"),
];

pub const MEMORY_ECC: &Table = &[
    ("NoECC", "NoECC"),
    ("SingleBitECC", "SingleBitECC"),
    ("MultiBitECC", "MultiBitECC"),
    ("AddressParity", "AddressParity"),
];

pub const MEMORY_FORM_FACTOR: &Table = &[
    ("RDIMM", "RDIMM"),
    ("UDIMM", "UDIMM"),
    ("SO_DIMM", "SO_DIMM"),
    ("LRDIMM", "LRDIMM"),
    ("Mini_RDIMM", "Mini_RDIMM"),
    ("Mini_UDIMM", "Mini_UDIMM"),
    ("SO_RDIMM_72b", "SO_RDIMM_72b"),
    ("SO_UDIMM_72b", "SO_UDIMM_72b"),
    ("SO_DIMM_16b", "SO_DIMM_16b"),
    ("SO_DIMM_32b", "SO_DIMM_32b"),
    ("Die", "Die"),
];

/// Fabric, switch and port protocols.
pub const PROTOCOL: &Table = &[
    ("CXL", "CXL"),
    ("Ethernet", "Ethernet"),
    ("InfiniBand", "InfiniBand"),
    ("NVLink", "NVLink"),
    ("NVMe", "NVMe"),
    ("PCIe", "PCIe"),
    ("OEM", "OEM"),
];

pub const PORT_TYPE: &Table = &[
    ("BidirectionalPort", "BidirectionalPort"),
    ("DownstreamPort", "DownstreamPort"),
    ("InterswitchPort", "InterswitchPort"),
    ("ManagementPort", "ManagementPort"),
    ("UnconfiguredPort", "UnconfiguredPort"),
    ("UpstreamPort", "UpstreamPort"),
];

pub const LINK_STATE: &Table = &[
    ("Enabled", "Enabled"),
    ("Disabled", "Disabled"),
];

pub const LINK_STATUS: &Table = &[
    ("LinkDown", "LinkDown"),
    ("LinkUp", "LinkUp"),
    ("NoLink", "NoLink"),
    ("Starting", "Starting"),
    ("Training", "Training"),
];

pub const PCIE_GENERATION: &Table = &[
    ("Gen1", "Gen1"),
    ("Gen2", "Gen2"),
    ("Gen3", "Gen3"),
    ("Gen4", "Gen4"),
    ("Gen5", "Gen5"),
    ("Gen6", "Gen6"),
];

pub const PCIE_SLOT_TYPE: &Table = &[
    ("FullLength", "FullLength"),
    ("HalfLength", "HalfLength"),
    ("LowProfile", "LowProfile"),
    ("Mini", "Mini"),
    ("M_2", "M2"),
    ("OEM", "OEM"),
    ("OCP3Small", "OCP3Small"),
    ("OCP3Large", "OCP3Large"),
    ("U_2", "U2"),
];

/// BIOS attribute types.
pub const BIOS_ATTRIBUTE_TYPE: &Table = &[
    ("Enumeration", "Enumeration"),
    ("Integer", "Integer"),
    ("Password", "Password"),
    ("String", "String"),
    ("Boolean", "Boolean"),
];
