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


//! Integration tests of processor resources.

use http::StatusCode;
use nv_bmcweb::handlers::processor;
use nv_bmcweb_bus_mock::Fault;
use nv_bmcweb_core::BusError;
use nv_bmcweb_core::ObjectPath;
use nv_bmcweb_core::Variant;
use nv_bmcweb_tests::bag;
use nv_bmcweb_tests::error_names;
use nv_bmcweb_tests::id;
use nv_bmcweb_tests::platform;
use nv_bmcweb_tests::service;
use nv_bmcweb_tests::success_names;
use nv_bmcweb_tests::ACCELERATOR;
use nv_bmcweb_tests::CPU;
use nv_bmcweb_tests::CPU_ITEM;
use nv_bmcweb_tests::INVENTORY_SERVICE;
use nv_bmcweb_tests::ODATA_ID;
use nv_bmcweb_tests::OPERATING_CONFIG;
use serde_json::json;
use std::error::Error as StdError;
use tokio::test;

const CONFIG1: &str = "/redfish/v1/Systems/system/Processors/CPU_0/OperatingConfigs/config1";

#[test]
async fn processor_with_accelerator_interface() -> Result<(), Box<dyn StdError>> {
    let svc = service(platform());
    let resp = processor::get(&svc, &id("system"), &id("CPU_0")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.body();
    assert_eq!(body[ODATA_ID], "/redfish/v1/Systems/system/Processors/CPU_0");
    // Both interfaces contribute to the same document.
    assert_eq!(body["ProcessorType"], "GPU");
    assert_eq!(body["TotalCores"], 72);
    assert_eq!(body["TotalThreads"], 72);
    assert_eq!(body["ProcessorId"]["EffectiveFamily"], "0x0019");
    assert_eq!(
        body["ProcessorId"]["IdentificationRegisters"],
        "0x0000000000A00F11"
    );
    assert_eq!(
        body["AppliedOperatingConfig"][ODATA_ID],
        "/redfish/v1/Systems/system/Processors/CPU_0/OperatingConfigs/config0"
    );
    assert_eq!(body["BaseSpeedPriorityState"], "Disabled");
    assert_eq!(
        body["Links"]["Chassis"],
        json!({ODATA_ID: "/redfish/v1/Chassis/Baseboard"})
    );
    assert!(body.get("error").is_none());
    Ok(())
}

#[test]
async fn plain_cpu_reports_cpu_type() -> Result<(), Box<dyn StdError>> {
    let bus = platform();
    let cpu1 = ObjectPath::from(CPU).parent().map(|p| p.child("CPU_1")).ok_or("no parent")?;
    bus.add_interface(
        cpu1,
        INVENTORY_SERVICE,
        CPU_ITEM,
        bag([("CoreCount", Variant::Uint16(8))]),
    );
    let resp = processor::get(&service(bus), &id("system"), &id("CPU_1")).await;
    assert_eq!(resp.body()["ProcessorType"], "CPU");
    assert_eq!(resp.body()["TotalCores"], 8);
    assert!(resp.body().get("Links").is_none());
    Ok(())
}

#[test]
async fn internal_error_is_reported_once() -> Result<(), Box<dyn StdError>> {
    let bus = platform();
    bus.add_interface(
        CPU,
        INVENTORY_SERVICE,
        CPU_ITEM,
        bag([
            ("CoreCount", "many".into()),
            ("ThreadCount", Variant::Uint16(72)),
        ]),
    );
    bus.fail(Fault::new(CPU, ACCELERATOR, "*", BusError::Io("gone".into())));
    let resp = processor::get(&service(bus), &id("system"), &id("CPU_0")).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error_names(&resp), ["InternalError"]);
    // Optional fields of the failed translation are still applied.
    assert_eq!(resp.body()["TotalThreads"], 72);
    assert!(resp.body().get("TotalCores").is_none());
    Ok(())
}

#[test]
async fn processor_in_unknown_system() -> Result<(), Box<dyn StdError>> {
    let bus = platform();
    let svc = service(bus);
    let resp = processor::get(&svc, &id("other"), &id("CPU_0")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_names(&resp), ["ResourceNotFound"]);
    assert!(svc.bus().calls().is_empty());
    Ok(())
}

#[test]
async fn processor_collection() -> Result<(), Box<dyn StdError>> {
    let resp = processor::collection(&service(platform()), &id("system")).await;
    assert_eq!(
        resp.body()["Members"],
        json!([{ODATA_ID: "/redfish/v1/Systems/system/Processors/CPU_0"}])
    );
    Ok(())
}

#[test]
async fn patch_applied_operating_config() -> Result<(), Box<dyn StdError>> {
    let svc = service(platform());
    let body = json!({"AppliedOperatingConfig": {ODATA_ID: CONFIG1}}).to_string();
    let resp = processor::patch(&svc, &id("system"), &id("CPU_0"), body.as_bytes()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(success_names(&resp), ["Success"]);
    assert_eq!(
        svc.bus()
            .property(CPU, INVENTORY_SERVICE, OPERATING_CONFIG, "AppliedConfig"),
        Some(Variant::ObjectPath(ObjectPath::from(CPU).child("config1")))
    );
    assert_eq!(svc.bus().mutating_calls().len(), 1);
    Ok(())
}

#[test]
async fn patch_rejects_unknown_property() -> Result<(), Box<dyn StdError>> {
    let svc = service(platform());
    let body = json!({
        "AppliedOperatingConfig": {ODATA_ID: CONFIG1},
        "TotalCores": 4,
    })
    .to_string();
    let resp = processor::patch(&svc, &id("system"), &id("CPU_0"), body.as_bytes()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_names(&resp), ["PropertyUnknown"]);
    assert!(svc.bus().mutating_calls().is_empty());
    Ok(())
}

#[test]
async fn patch_rejects_foreign_config() -> Result<(), Box<dyn StdError>> {
    let svc = service(platform());
    let body = json!({
        "AppliedOperatingConfig": {
            ODATA_ID: "/redfish/v1/Systems/system/Processors/CPU_1/OperatingConfigs/config1"
        },
    })
    .to_string();
    let resp = processor::patch(&svc, &id("system"), &id("CPU_0"), body.as_bytes()).await;
    assert_eq!(error_names(&resp), ["PropertyValueIncorrect"]);
    assert!(svc.bus().calls().is_empty());
    Ok(())
}
