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


//! Integration tests of memory resources.

use http::StatusCode;
use nv_bmcweb::handlers::memory;
use nv_bmcweb_core::Variant;
use nv_bmcweb_tests::bag;
use nv_bmcweb_tests::error_names;
use nv_bmcweb_tests::id;
use nv_bmcweb_tests::platform;
use nv_bmcweb_tests::service;
use nv_bmcweb_tests::DIMM;
use nv_bmcweb_tests::DIMM_ITEM;
use nv_bmcweb_tests::INVENTORY_SERVICE;
use nv_bmcweb_tests::ODATA_ID;
use serde_json::json;
use std::error::Error as StdError;
use tokio::test;

#[test]
async fn memory_document() -> Result<(), Box<dyn StdError>> {
    let resp = memory::get(&service(platform()), &id("system"), &id("dimm0")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.body();
    assert_eq!(body[ODATA_ID], "/redfish/v1/Systems/system/Memory/dimm0");
    assert_eq!(body["CapacityMiB"], 65536);
    assert_eq!(body["DataWidthBits"], 64);
    assert_eq!(body["MemoryDeviceType"], "DDR5");
    assert_eq!(body["MemoryType"], "DRAM");
    assert_eq!(
        body["Links"]["Chassis"],
        json!({ODATA_ID: "/redfish/v1/Chassis/Baseboard"})
    );
    Ok(())
}

#[test]
async fn capacity_is_truncated() -> Result<(), Box<dyn StdError>> {
    let bus = platform();
    bus.add_interface(
        DIMM,
        INVENTORY_SERVICE,
        DIMM_ITEM,
        bag([("MemorySizeInKB", Variant::Uint64(2047))]),
    );
    let resp = memory::get(&service(bus), &id("system"), &id("dimm0")).await;
    assert_eq!(resp.body()["CapacityMiB"], 1);
    assert!(resp.body().get("MemoryDeviceType").is_none());
    Ok(())
}

#[test]
async fn missing_capacity_is_internal_error() -> Result<(), Box<dyn StdError>> {
    let bus = platform();
    bus.add_interface(
        DIMM,
        INVENTORY_SERVICE,
        DIMM_ITEM,
        bag([("MemoryDataWidth", Variant::Uint16(72))]),
    );
    let resp = memory::get(&service(bus), &id("system"), &id("dimm0")).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error_names(&resp), ["InternalError"]);
    assert_eq!(resp.body()["DataWidthBits"], 72);
    Ok(())
}

#[test]
async fn memory_collection_and_not_found() -> Result<(), Box<dyn StdError>> {
    let svc = service(platform());
    let resp = memory::collection(&svc, &id("system")).await;
    assert_eq!(resp.body()["Members@odata.count"], 1);
    let resp = memory::get(&svc, &id("system"), &id("dimm9")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}
