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


//! Emulation of backend services that implement methods beyond plain
//! property access.

use crate::Bus;
use crate::Inventory;
use crate::DELETE_INTERFACE;
use nv_bmcweb_core::BusError;
use nv_bmcweb_core::ObjectPath;
use nv_bmcweb_core::PropertyBag;
use nv_bmcweb_core::ServiceName;
use nv_bmcweb_core::Variant;

/// Service owning boot options.
pub const BOOT_SERVICE: &str = "xyz.openbmc_project.Settings";
/// Root of boot option objects.
pub const BOOT_OPTIONS_ROOT: &str = "/xyz/openbmc_project/control/host0/boot/options";
/// Interface of one boot option.
pub const BOOT_OPTION_INTERFACE: &str = "xyz.openbmc_project.Control.Boot.Option";
/// Interface of the boot option factory at [`BOOT_OPTIONS_ROOT`].
pub const BOOT_OPTION_MANAGER_INTERFACE: &str = "xyz.openbmc_project.Control.Boot.OptionManager";

/// Serve `CreateOption(id, display_name, uefi_device_path, enabled)` at
/// the boot options root.
///
/// Creates a deletable boot option object and returns its path. Fails with
/// `NotAllowed` if the option already exists.
pub fn boot_option_manager(bus: &Bus) {
    bus.add_interface(
        BOOT_OPTIONS_ROOT,
        BOOT_SERVICE,
        BOOT_OPTION_MANAGER_INTERFACE,
        PropertyBag::new(),
    );
    bus.on_method(BOOT_OPTION_MANAGER_INTERFACE, "CreateOption", create_option);
}

fn create_option(
    inventory: &mut Inventory,
    path: &ObjectPath,
    args: &[Variant],
) -> Result<Vec<Variant>, BusError> {
    if path.as_str() != BOOT_OPTIONS_ROOT {
        return Err(BusError::from_name(
            "org.freedesktop.DBus.Error.UnknownObject",
            path.to_string(),
        ));
    }
    let (Some(id), Some(name), Some(uefi), Some(enabled)) = (
        args.first().and_then(Variant::as_str),
        args.get(1).and_then(Variant::as_str),
        args.get(2).and_then(Variant::as_str),
        args.get(3).and_then(Variant::get::<bool>),
    ) else {
        return Err(BusError::InvalidArgument("expected (s, s, s, b)".into()));
    };
    if id.is_empty() || id.contains('/') {
        return Err(BusError::InvalidArgument(format!("bad option id: {id}")));
    }
    let option = path.child(id);
    if inventory.objects.contains_key(&option) {
        return Err(BusError::NotAllowed(format!("{option} already exists")));
    }
    let mut props = PropertyBag::new();
    props.insert("DisplayName", name);
    props.insert("Description", "");
    props.insert("UefiDevicePath", uefi);
    props.insert("Enabled", enabled);
    let interfaces = inventory
        .objects
        .entry(option.clone())
        .or_default()
        .entry(ServiceName::from(BOOT_SERVICE))
        .or_default();
    interfaces.insert(BOOT_OPTION_INTERFACE.into(), props);
    interfaces.insert(DELETE_INTERFACE.into(), PropertyBag::new());
    Ok(vec![Variant::ObjectPath(option)])
}
