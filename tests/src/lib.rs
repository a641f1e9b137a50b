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


//! Fixtures shared by the integration tests.
//!
//! [`platform`] builds a mock bus with one chassis and every kind of
//! resource attached to it. Individual builders can be combined to set up
//! smaller inventories.

use nv_bmcweb::Config;
use nv_bmcweb::ResourceId;
use nv_bmcweb::Response;
use nv_bmcweb::Service;
use nv_bmcweb_bus_mock::services;
use nv_bmcweb_bus_mock::Bus;
use nv_bmcweb_core::ObjectPath;
use nv_bmcweb_core::PropertyBag;
use nv_bmcweb_core::Variant;
use serde_json::Value;

/// Used in tests for `@odata.id` fields.
pub const ODATA_ID: &str = "@odata.id";
/// Used in tests for `@odata.type` fields.
pub const ODATA_TYPE: &str = "@odata.type";

pub const INVENTORY_SERVICE: &str = "xyz.openbmc_project.Inventory.Manager";
pub const SENSOR_SERVICE: &str = "xyz.openbmc_project.Sensors";
pub const CONTROL_SERVICE: &str = "xyz.openbmc_project.Settings";
pub const BIOS_SERVICE: &str = "xyz.openbmc_project.BIOSConfigManager";

pub const CHASSIS: &str = "/xyz/openbmc_project/inventory/system/chassis/Baseboard";
pub const CPU: &str = "/xyz/openbmc_project/inventory/system/chassis/Baseboard/CPU_0";
pub const DIMM: &str = "/xyz/openbmc_project/inventory/system/chassis/Baseboard/dimm0";
pub const FABRIC: &str = "/xyz/openbmc_project/inventory/system/fabrics/NVLinkFabric_0";
pub const SWITCH_A: &str = "/xyz/openbmc_project/inventory/system/fabrics/NVLinkFabric_0/Switch_A";
pub const SWITCH_B: &str = "/xyz/openbmc_project/inventory/system/fabrics/NVLinkFabric_0/Switch_B";
pub const PORT: &str = "/xyz/openbmc_project/inventory/system/fabrics/NVLinkFabric_0/Switch_A/Port_0";
pub const SLOT: &str = "/xyz/openbmc_project/inventory/system/chassis/Baseboard/PCIeSlot_0";
pub const OTHER_SLOT: &str = "/xyz/openbmc_project/inventory/system/chassis/Riser/PCIeSlot_1";
pub const POWER_CAP: &str = "/xyz/openbmc_project/control/power/ChassisCap";
pub const TEMPERATURE: &str = "/xyz/openbmc_project/sensors/temperature/Inlet";
pub const POWER: &str = "/xyz/openbmc_project/sensors/power/Total";
pub const FAN: &str = "/xyz/openbmc_project/sensors/fan_pwm/Fan0";
pub const BIOS_PATH: &str = "/xyz/openbmc_project/bios_config/manager";
pub const BOOT_OPTION: &str = "/xyz/openbmc_project/control/host0/boot/options/Pxe0";

pub const ITEM: &str = "xyz.openbmc_project.Inventory.Item";
pub const BOARD: &str = "xyz.openbmc_project.Inventory.Item.Board";
pub const CHASSIS_ITEM: &str = "xyz.openbmc_project.Inventory.Item.Chassis";
pub const ASSET: &str = "xyz.openbmc_project.Inventory.Decorator.Asset";
pub const CPU_ITEM: &str = "xyz.openbmc_project.Inventory.Item.Cpu";
pub const ACCELERATOR: &str = "xyz.openbmc_project.Inventory.Item.Accelerator";
pub const OPERATING_CONFIG: &str = "xyz.openbmc_project.Control.Processor.CurrentOperatingConfig";
pub const DIMM_ITEM: &str = "xyz.openbmc_project.Inventory.Item.Dimm";
pub const POWER_CAP_IFACE: &str = "xyz.openbmc_project.Control.Power.Cap";
pub const SENSOR_VALUE: &str = "xyz.openbmc_project.Sensor.Value";
pub const BIOS_MANAGER: &str = "xyz.openbmc_project.BIOSConfig.Manager";
pub const BOOT_OPTION_IFACE: &str = "xyz.openbmc_project.Control.Boot.Option";
pub const DELETE: &str = "xyz.openbmc_project.Object.Delete";

const ATTRIBUTE_TYPE: &str = "xyz.openbmc_project.BIOSConfig.Manager.AttributeType";
const BOUND_TYPE: &str = "xyz.openbmc_project.BIOSConfig.Manager.BoundType";

/// Property bag from name/value pairs.
#[must_use]
pub fn bag<const N: usize>(items: [(&str, Variant); N]) -> PropertyBag {
    items
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

/// Resource id from a string.
#[must_use]
pub fn id(s: &str) -> ResourceId {
    ResourceId::new(s.to_string())
}

/// Service with default configuration over `bus`.
#[must_use]
pub fn service(bus: Bus) -> Service<Bus> {
    Service::new(bus, Config::default())
}

/// Registry names (`PropertyValueIncorrect`, ...) of recorded error
/// messages, in order.
#[must_use]
pub fn error_names(resp: &Response) -> Vec<String> {
    messages(&resp.body()["error"])
}

/// Registry names of recorded success messages.
#[must_use]
pub fn success_names(resp: &Response) -> Vec<String> {
    messages(resp.body())
}

fn messages(holder: &Value) -> Vec<String> {
    holder["@Message.ExtendedInfo"]
        .as_array()
        .map(|info| {
            info.iter()
                .filter_map(|m| m["MessageId"].as_str())
                .filter_map(|id| id.rsplit('.').next())
                .map(ToString::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Baseboard chassis.
pub fn chassis(bus: &Bus) {
    bus.add_interface(CHASSIS, INVENTORY_SERVICE, BOARD, PropertyBag::new());
    bus.add_interface(
        CHASSIS,
        INVENTORY_SERVICE,
        ITEM,
        bag([
            ("PrettyName", "Baseboard".into()),
            ("Present", Variant::Bool(true)),
        ]),
    );
    bus.add_interface(
        CHASSIS,
        INVENTORY_SERVICE,
        CHASSIS_ITEM,
        bag([(
            "Type",
            "xyz.openbmc_project.Inventory.Item.Chassis.ChassisType.Module".into(),
        )]),
    );
    bus.add_interface(
        CHASSIS,
        INVENTORY_SERVICE,
        ASSET,
        bag([
            ("PartNumber", "PN-0001".into()),
            ("SerialNumber", "SN-0001".into()),
            ("Manufacturer", "NVIDIA".into()),
        ]),
    );
}

/// `CPU_0`: a processor implementing both the CPU and the accelerator
/// interfaces, with an operating config.
pub fn processor(bus: &Bus) {
    bus.add_interface(
        CPU,
        INVENTORY_SERVICE,
        CPU_ITEM,
        bag([
            ("CoreCount", Variant::Uint16(72)),
            ("ThreadCount", Variant::Uint16(72)),
            ("EffectiveFamily", Variant::Uint16(0x19)),
            ("Id", Variant::Uint64(0x00a0_0f11)),
        ]),
    );
    bus.add_interface(
        CPU,
        INVENTORY_SERVICE,
        ACCELERATOR,
        bag([(
            "Type",
            "xyz.openbmc_project.Inventory.Item.Accelerator.AcceleratorType.GPU".into(),
        )]),
    );
    bus.add_interface(
        CPU,
        INVENTORY_SERVICE,
        OPERATING_CONFIG,
        bag([
            ("AppliedConfig", Variant::ObjectPath(ObjectPath::from(CPU).child("config0"))),
            ("BaseSpeedPriorityEnabled", Variant::Bool(false)),
        ]),
    );
    bus.add_association(CPU, "parent_chassis", &[CHASSIS]);
    bus.add_association(CHASSIS, "all_processors", &[CPU]);
}

/// `dimm0`: a 64 GiB DDR5 module.
pub fn memory(bus: &Bus) {
    bus.add_interface(
        DIMM,
        INVENTORY_SERVICE,
        DIMM_ITEM,
        bag([
            ("MemorySizeInKB", Variant::Uint64(64 * 1024 * 1024)),
            ("MemoryDataWidth", Variant::Uint16(64)),
            (
                "MemoryType",
                "xyz.openbmc_project.Inventory.Item.Dimm.DeviceType.DDR5".into(),
            ),
        ]),
    );
    bus.add_association(DIMM, "parent_chassis", &[CHASSIS]);
}

/// NVLink fabric with two switches and one port. The fabric lists its
/// switches out of order.
pub fn fabric(bus: &Bus) {
    let nvlink = "xyz.openbmc_project.Inventory.Item.Fabric.FabricType.NVLink";
    bus.add_interface(
        FABRIC,
        INVENTORY_SERVICE,
        "xyz.openbmc_project.Inventory.Item.Fabric",
        bag([("Type", nvlink.into())]),
    );
    for switch in [SWITCH_A, SWITCH_B] {
        bus.add_interface(
            switch,
            INVENTORY_SERVICE,
            "xyz.openbmc_project.Inventory.Item.Switch",
            bag([
                ("Type", nvlink.into()),
                ("Enabled", Variant::Bool(true)),
                ("CurrentBandwidth", Variant::Double(900.0)),
            ]),
        );
    }
    bus.add_interface(
        PORT,
        INVENTORY_SERVICE,
        "xyz.openbmc_project.Inventory.Item.Port",
        bag([
            ("Protocol", nvlink.into()),
            ("Width", Variant::Uint32(2)),
            (
                "LinkStatus",
                "xyz.openbmc_project.Inventory.Item.Port.LinkStatusType.LinkUp".into(),
            ),
        ]),
    );
    bus.add_association(FABRIC, "all_switches", &[SWITCH_B, SWITCH_A]);
    bus.add_association(SWITCH_A, "all_ports", &[PORT]);
    bus.add_association(SWITCH_A, "parent_chassis", &[CHASSIS]);
    bus.add_association(SWITCH_A, "all_endpoints", &[]);
}

/// Temperature, power and fan sensors of the chassis.
pub fn sensors(bus: &Bus) {
    for (path, value) in [(TEMPERATURE, 24.5), (POWER, 812.0), (FAN, 41.0)] {
        bus.add_interface(
            path,
            SENSOR_SERVICE,
            SENSOR_VALUE,
            bag([("Value", Variant::Double(value))]),
        );
    }
    bus.add_association(CHASSIS, "all_sensors", &[TEMPERATURE, POWER, FAN]);
}

/// Chassis power limit: 1200 W of 500..2000 W, enabled.
pub fn power_cap(bus: &Bus) {
    bus.add_interface(
        POWER_CAP,
        CONTROL_SERVICE,
        POWER_CAP_IFACE,
        bag([
            ("PowerCap", Variant::Uint32(1200)),
            ("PowerCapEnable", Variant::Bool(true)),
            ("MinPowerCapValue", Variant::Uint32(500)),
            ("MaxPowerCapValue", Variant::Uint32(2000)),
        ]),
    );
    bus.add_association(CHASSIS, "power_controls", &[POWER_CAP]);
}

fn bios_attribute(kind: &str, read_only: bool, current: Variant, options: &[(&str, Variant)]) -> Variant {
    Variant::Struct(vec![
        Variant::String(format!("{ATTRIBUTE_TYPE}.{kind}")),
        Variant::Bool(read_only),
        Variant::String(String::new()),
        Variant::String(String::new()),
        Variant::String(String::new()),
        Variant::Variant(Box::new(current.clone())),
        Variant::Variant(Box::new(current)),
        Variant::Array(
            options
                .iter()
                .map(|(bound, value)| {
                    Variant::Struct(vec![
                        Variant::String(format!("{BOUND_TYPE}.{bound}")),
                        Variant::Variant(Box::new(value.clone())),
                    ])
                })
                .collect(),
        ),
    ])
}

/// BIOS manager with `SMT` (enumeration), `BootDelay` (0..=30),
/// `AdminPassword` and read-only `SerialNumber`.
pub fn bios(bus: &Bus) {
    let table = Variant::Dict(vec![
        (
            "SMT".into(),
            bios_attribute(
                "Enumeration",
                false,
                "Enabled".into(),
                &[("OneOf", "Enabled".into()), ("OneOf", "Disabled".into())],
            ),
        ),
        (
            "BootDelay".into(),
            bios_attribute(
                "Integer",
                false,
                Variant::Int64(5),
                &[
                    ("LowerBound", Variant::Int64(0)),
                    ("UpperBound", Variant::Int64(30)),
                ],
            ),
        ),
        (
            "AdminPassword".into(),
            bios_attribute("Password", false, "".into(), &[]),
        ),
        (
            "SerialNumber".into(),
            bios_attribute("String", true, "SN-0001".into(), &[]),
        ),
    ]);
    let pending = Variant::Dict(vec![(
        "BootDelay".into(),
        Variant::Struct(vec![
            Variant::String(format!("{ATTRIBUTE_TYPE}.Integer")),
            Variant::Variant(Box::new(Variant::Int64(10))),
        ]),
    )]);
    bus.add_interface(
        BIOS_PATH,
        BIOS_SERVICE,
        BIOS_MANAGER,
        bag([
            ("BaseBIOSTable", table),
            ("PendingAttributes", pending),
            (
                "ResetBIOSSettings",
                "xyz.openbmc_project.BIOSConfig.Manager.ResetFlag.NoAction".into(),
            ),
        ]),
    );
}

/// Two PCIe slots; only `PCIeSlot_0` belongs to the baseboard.
pub fn pcie_slots(bus: &Bus) {
    let slot = "xyz.openbmc_project.Inventory.Item.PCIeSlot";
    bus.add_interface(
        SLOT,
        INVENTORY_SERVICE,
        slot,
        bag([
            (
                "Generation",
                "xyz.openbmc_project.Inventory.Item.PCIeSlot.Generations.Gen5".into(),
            ),
            ("Lanes", Variant::Uint32(16)),
            (
                "SlotType",
                "xyz.openbmc_project.Inventory.Item.PCIeSlot.SlotTypes.U_2".into(),
            ),
            ("HotPluggable", Variant::Bool(false)),
        ]),
    );
    bus.add_interface(
        SLOT,
        INVENTORY_SERVICE,
        "xyz.openbmc_project.Inventory.Decorator.LocationCode",
        bag([("LocationCode", "SLOT0".into())]),
    );
    bus.add_interface(
        OTHER_SLOT,
        INVENTORY_SERVICE,
        slot,
        bag([("Lanes", Variant::Uint32(8))]),
    );
    bus.add_association(SLOT, "chassis", &[CHASSIS]);
    bus.add_association(OTHER_SLOT, "chassis", &["/xyz/openbmc_project/inventory/system/chassis/Riser"]);
}

/// Boot option manager with one network boot option `Pxe0`.
pub fn boot_options(bus: &Bus) {
    services::boot_option_manager(bus);
    bus.add_interface(
        BOOT_OPTION,
        CONTROL_SERVICE,
        BOOT_OPTION_IFACE,
        bag([
            ("DisplayName", "Network boot".into()),
            ("Description", "".into()),
            ("UefiDevicePath", "PciRoot(0x0)/Pci(0x1,0x0)".into()),
            ("Enabled", Variant::Bool(true)),
        ]),
    );
    bus.add_interface(BOOT_OPTION, CONTROL_SERVICE, DELETE, PropertyBag::new());
}

/// Everything above on one bus.
#[must_use]
pub fn platform() -> Bus {
    let bus = Bus::default();
    chassis(&bus);
    processor(&bus);
    memory(&bus);
    fabric(&bus);
    sensors(&bus);
    power_cap(&bus);
    bios(&bus);
    pcie_slots(&bus);
    boot_options(&bus);
    bus
}
