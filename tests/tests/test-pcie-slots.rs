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


//! Integration tests of chassis PCIe slots.

use http::StatusCode;
use nv_bmcweb::handlers::pcie_slots;
use nv_bmcweb_bus_mock::Fault;
use nv_bmcweb_core::BusError;
use nv_bmcweb_tests::error_names;
use nv_bmcweb_tests::id;
use nv_bmcweb_tests::platform;
use nv_bmcweb_tests::service;
use nv_bmcweb_tests::SLOT;
use serde_json::json;
use std::error::Error as StdError;
use tokio::test;

#[test]
async fn only_slots_of_the_chassis() -> Result<(), Box<dyn StdError>> {
    let resp = pcie_slots::get(&service(platform()), &id("Baseboard")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.body()["@odata.id"],
        "/redfish/v1/Chassis/Baseboard/PCIeSlots"
    );
    assert_eq!(
        resp.body()["Slots"],
        json!([{
            "PCIeType": "Gen5",
            "Lanes": 16,
            "SlotType": "U2",
            "HotPluggable": false,
            "Location": {"PartLocation": {"ServiceLabel": "SLOT0"}},
        }])
    );
    Ok(())
}

#[test]
async fn chassis_without_slots() -> Result<(), Box<dyn StdError>> {
    let bus = platform();
    bus.add_association(SLOT, "chassis", &[]);
    let resp = pcie_slots::get(&service(bus), &id("Baseboard")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.body()["Slots"], json!([]));
    Ok(())
}

#[test]
async fn failed_location_keeps_slot() -> Result<(), Box<dyn StdError>> {
    let bus = platform();
    bus.fail(Fault::new(
        SLOT,
        "xyz.openbmc_project.Inventory.Decorator.LocationCode",
        "*",
        BusError::Io("timeout".into()),
    ));
    let resp = pcie_slots::get(&service(bus), &id("Baseboard")).await;
    assert_eq!(error_names(&resp), ["InternalError"]);
    assert_eq!(resp.body()["Slots"][0]["Lanes"], 16);
    assert!(resp.body()["Slots"][0].get("Location").is_none());
    Ok(())
}

#[test]
async fn slots_of_unknown_chassis() -> Result<(), Box<dyn StdError>> {
    let resp = pcie_slots::get(&service(platform()), &id("Nope")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}
