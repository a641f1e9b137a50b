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


//! Well-known backend interface and service names.

pub const ITEM: &str = "xyz.openbmc_project.Inventory.Item";
pub const BOARD: &str = "xyz.openbmc_project.Inventory.Item.Board";
pub const CHASSIS: &str = "xyz.openbmc_project.Inventory.Item.Chassis";
pub const CPU: &str = "xyz.openbmc_project.Inventory.Item.Cpu";
pub const ACCELERATOR: &str = "xyz.openbmc_project.Inventory.Item.Accelerator";
pub const DIMM: &str = "xyz.openbmc_project.Inventory.Item.Dimm";
pub const FABRIC: &str = "xyz.openbmc_project.Inventory.Item.Fabric";
pub const SWITCH: &str = "xyz.openbmc_project.Inventory.Item.Switch";
pub const PORT: &str = "xyz.openbmc_project.Inventory.Item.Port";
pub const PCIE_SLOT: &str = "xyz.openbmc_project.Inventory.Item.PCIeSlot";

pub const ASSET: &str = "xyz.openbmc_project.Inventory.Decorator.Asset";
pub const ASSET_TAG: &str = "xyz.openbmc_project.Inventory.Decorator.AssetTag";
pub const DIMENSION: &str = "xyz.openbmc_project.Inventory.Decorator.Dimension";
pub const LOCATION_CODE: &str = "xyz.openbmc_project.Inventory.Decorator.LocationCode";
pub const REVISION: &str = "xyz.openbmc_project.Inventory.Decorator.Revision";
pub const UUID: &str = "xyz.openbmc_project.Common.UUID";
pub const OPERATIONAL_STATUS: &str = "xyz.openbmc_project.State.Decorator.OperationalStatus";

pub const CURRENT_OPERATING_CONFIG: &str =
    "xyz.openbmc_project.Control.Processor.CurrentOperatingConfig";
pub const SENSOR_VALUE: &str = "xyz.openbmc_project.Sensor.Value";
pub const POWER_CAP: &str = "xyz.openbmc_project.Control.Power.Cap";

pub const BIOS_SERVICE: &str = "xyz.openbmc_project.BIOSConfigManager";
pub const BIOS_PATH: &str = "/xyz/openbmc_project/bios_config/manager";
pub const BIOS_MANAGER: &str = "xyz.openbmc_project.BIOSConfig.Manager";
pub const BIOS_RESET_FACTORY: &str =
    "xyz.openbmc_project.BIOSConfig.Manager.ResetFlag.FactoryDefaults";
pub const BIOS_ATTRIBUTE_TYPE: &str = "xyz.openbmc_project.BIOSConfig.Manager.AttributeType";

pub const BOOT_OPTIONS_ROOT: &str = "/xyz/openbmc_project/control/host0/boot/options";
pub const BOOT_OPTION: &str = "xyz.openbmc_project.Control.Boot.Option";
pub const BOOT_OPTION_MANAGER: &str = "xyz.openbmc_project.Control.Boot.OptionManager";
pub const OBJECT_DELETE: &str = "xyz.openbmc_project.Object.Delete";

/// Interfaces that make an inventory object a Redfish chassis.
pub const CHASSIS_INTERFACES: &[&str] = &[BOARD, CHASSIS];
/// Interfaces that make an inventory object a Redfish processor.
pub const PROCESSOR_INTERFACES: &[&str] = &[CPU, ACCELERATOR];
