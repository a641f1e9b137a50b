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


//! Integration tests of chassis resources.

use http::StatusCode;
use nv_bmcweb::handlers::chassis;
use nv_bmcweb::Config;
use nv_bmcweb::Service;
use nv_bmcweb_bus_mock::Bus;
use nv_bmcweb_bus_mock::Fault;
use nv_bmcweb_core::mapper::ASSOCIATION_ENDPOINTS;
use nv_bmcweb_core::mapper::ASSOCIATION_INTERFACE;
use nv_bmcweb_core::mapper::MAPPER_INTERFACE;
use nv_bmcweb_core::mapper::MAPPER_PATH;
use nv_bmcweb_core::mapper::MAPPER_SERVICE;
use nv_bmcweb_core::BusError;
use nv_bmcweb_core::PropertyBag;
use nv_bmcweb_core::Variant;
use nv_bmcweb_tests::bag;
use nv_bmcweb_tests::error_names;
use nv_bmcweb_tests::id;
use nv_bmcweb_tests::platform;
use nv_bmcweb_tests::service;
use nv_bmcweb_tests::ASSET;
use nv_bmcweb_tests::BOARD;
use nv_bmcweb_tests::CHASSIS;
use nv_bmcweb_tests::INVENTORY_SERVICE;
use nv_bmcweb_tests::ITEM;
use nv_bmcweb_tests::ODATA_ID;
use serde_json::json;
use std::error::Error as StdError;
use std::time::Duration;
use tokio::test;

#[test]
async fn chassis_document() -> Result<(), Box<dyn StdError>> {
    let svc = service(platform());
    let resp = chassis::get(&svc, &id("Baseboard")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.body();
    assert_eq!(body[ODATA_ID], "/redfish/v1/Chassis/Baseboard");
    assert_eq!(body["Id"], "Baseboard");
    assert_eq!(body["Name"], "Baseboard");
    assert_eq!(body["ChassisType"], "Module");
    assert_eq!(body["PartNumber"], "PN-0001");
    assert_eq!(body["SerialNumber"], "SN-0001");
    assert_eq!(body["Manufacturer"], "NVIDIA");
    assert_eq!(body["Status"], json!({"State": "Enabled", "Health": "OK"}));
    assert_eq!(
        body["Links"]["Processors"],
        json!([{ODATA_ID: "/redfish/v1/Systems/system/Processors/CPU_0"}])
    );
    assert_eq!(
        body["Links"]["ComputerSystems"],
        json!([{ODATA_ID: "/redfish/v1/Systems/system"}])
    );
    assert_eq!(body["Sensors"][ODATA_ID], "/redfish/v1/Chassis/Baseboard/Sensors");
    assert_eq!(body["PCIeSlots"][ODATA_ID], "/redfish/v1/Chassis/Baseboard/PCIeSlots");
    // No contained_by/containing associations.
    assert!(body["Links"].get("ContainedBy").is_none());
    assert!(body["Links"].get("Contains").is_none());
    assert!(body.get("error").is_none());
    Ok(())
}

#[test]
async fn chassis_containment_links() -> Result<(), Box<dyn StdError>> {
    let bus = platform();
    let rack = "/xyz/openbmc_project/inventory/system/chassis/Rack";
    bus.add_interface(rack, INVENTORY_SERVICE, BOARD, PropertyBag::new());
    bus.add_association(CHASSIS, "contained_by", &[rack]);
    bus.add_association(rack, "containing", &[CHASSIS]);
    bus.add_association(rack, "all_processors", &[]);
    let svc = service(bus);

    let resp = chassis::get(&svc, &id("Baseboard")).await;
    assert_eq!(
        resp.body()["Links"]["ContainedBy"],
        json!({ODATA_ID: "/redfish/v1/Chassis/Rack"})
    );

    let resp = chassis::get(&svc, &id("Rack")).await;
    assert_eq!(
        resp.body()["Links"]["Contains"],
        json!([{ODATA_ID: "/redfish/v1/Chassis/Baseboard"}])
    );
    // Existing but empty association renders as an empty array.
    assert_eq!(resp.body()["Links"]["Processors"], json!([]));
    assert!(resp.body().get("Sensors").is_none());
    Ok(())
}

#[test]
async fn unknown_chassis_is_not_found() -> Result<(), Box<dyn StdError>> {
    let svc = service(platform());
    let resp = chassis::get(&svc, &id("Nope")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_names(&resp), ["ResourceNotFound"]);
    assert_eq!(
        resp.body()["error"]["@Message.ExtendedInfo"][0]["MessageArgs"],
        json!(["Chassis", "Nope"])
    );
    Ok(())
}

#[test]
async fn chassis_without_owner_is_internal_error() -> Result<(), Box<dyn StdError>> {
    let bus = Bus::default();
    bus.add_orphan(CHASSIS, &[BOARD]);
    let svc = service(bus);
    let resp = chassis::get(&svc, &id("Baseboard")).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error_names(&resp), ["InternalError"]);
    Ok(())
}

#[test]
async fn absent_chassis_reports_absent_state() -> Result<(), Box<dyn StdError>> {
    let bus = platform();
    bus.add_interface(
        CHASSIS,
        INVENTORY_SERVICE,
        ITEM,
        bag([("Present", Variant::Bool(false))]),
    );
    let resp = chassis::get(&service(bus), &id("Baseboard")).await;
    assert_eq!(resp.body()["Status"]["State"], "Absent");
    assert_eq!(resp.body()["Status"]["Health"], "OK");
    Ok(())
}

#[test]
async fn failed_interface_keeps_other_fields() -> Result<(), Box<dyn StdError>> {
    let bus = platform();
    bus.fail(Fault::new(CHASSIS, ASSET, "*", BusError::Io("broken pipe".into())));
    let resp = chassis::get(&service(bus), &id("Baseboard")).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error_names(&resp), ["InternalError"]);
    // Siblings of the failed fetch still contributed.
    assert_eq!(resp.body()["ChassisType"], "Module");
    assert!(resp.body().get("PartNumber").is_none());
    Ok(())
}

#[test]
async fn malformed_association_is_internal_error() -> Result<(), Box<dyn StdError>> {
    let bus = platform();
    bus.add_interface(
        format!("{CHASSIS}/all_processors"),
        MAPPER_SERVICE,
        ASSOCIATION_INTERFACE,
        bag([(ASSOCIATION_ENDPOINTS, "CPU_0".into())]),
    );
    let resp = chassis::get(&service(bus), &id("Baseboard")).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error_names(&resp), ["InternalError"]);
    let body = resp.body();
    assert!(body["Links"].get("Processors").is_none());
    assert_eq!(body["ChassisType"], "Module");
    assert_eq!(body["PartNumber"], "PN-0001");
    assert_eq!(body["Sensors"][ODATA_ID], "/redfish/v1/Chassis/Baseboard/Sensors");
    Ok(())
}

#[test]
async fn unreachable_mapper_gives_empty_collection() -> Result<(), Box<dyn StdError>> {
    let bus = platform();
    bus.fail(Fault::new(
        MAPPER_PATH,
        MAPPER_INTERFACE,
        "GetSubTreePaths",
        BusError::Io("no reply".into()),
    ));
    let resp = chassis::collection(&service(bus)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.body()["Members@odata.count"], 0);
    assert_eq!(resp.body()["Members"], json!([]));
    assert!(resp.body().get("error").is_none());
    Ok(())
}

#[test]
async fn bad_mapper_reply_fails_collection() -> Result<(), Box<dyn StdError>> {
    let bus = platform();
    bus.fail(Fault::new(
        MAPPER_PATH,
        MAPPER_INTERFACE,
        "GetSubTreePaths",
        BusError::BadReply {
            expected: "as",
            found: "s".into(),
        },
    ));
    let resp = chassis::collection(&service(bus)).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error_names(&resp), ["InternalError"]);
    assert!(resp.body().get("Members").is_none());
    Ok(())
}

#[test]
async fn chassis_collection_is_sorted() -> Result<(), Box<dyn StdError>> {
    let bus = platform();
    for name in ["Zeta", "Alpha"] {
        bus.add_interface(
            format!("/xyz/openbmc_project/inventory/system/chassis/{name}"),
            INVENTORY_SERVICE,
            BOARD,
            PropertyBag::new(),
        );
    }
    let resp = chassis::collection(&service(bus)).await;
    assert_eq!(resp.body()["Members@odata.count"], 3);
    assert_eq!(
        resp.body()["Members"],
        json!([
            {ODATA_ID: "/redfish/v1/Chassis/Alpha"},
            {ODATA_ID: "/redfish/v1/Chassis/Baseboard"},
            {ODATA_ID: "/redfish/v1/Chassis/Zeta"},
        ])
    );
    Ok(())
}

#[test]
async fn repeated_get_is_identical() -> Result<(), Box<dyn StdError>> {
    let svc = service(platform());
    let first = chassis::get(&svc, &id("Baseboard")).await;
    let second = chassis::get(&svc, &id("Baseboard")).await;
    assert_eq!(
        serde_json::to_vec(first.body())?,
        serde_json::to_vec(second.body())?
    );
    Ok(())
}

#[test]
async fn slow_interface_times_out() -> Result<(), Box<dyn StdError>> {
    let bus = platform();
    bus.delay(CHASSIS, Duration::from_millis(500));
    let config = Config {
        bus_timeout: Duration::from_millis(20),
        ..Config::default()
    };
    let svc = Service::with_timeout(bus, config);
    let resp = chassis::get(&svc, &id("Baseboard")).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error_names(&resp), ["InternalError"]);
    // Associations live on other paths and are not delayed.
    assert_eq!(
        resp.body()["Links"]["Processors"],
        json!([{ODATA_ID: "/redfish/v1/Systems/system/Processors/CPU_0"}])
    );
    assert!(resp.body().get("PartNumber").is_none());
    Ok(())
}
