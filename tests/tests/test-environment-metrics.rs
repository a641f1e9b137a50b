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


//! Integration tests of chassis environment metrics.

use http::StatusCode;
use nv_bmcweb::handlers::environment_metrics;
use nv_bmcweb_bus_mock::Fault;
use nv_bmcweb_core::BusError;
use nv_bmcweb_core::PropertyBag;
use nv_bmcweb_core::Variant;
use nv_bmcweb_tests::error_names;
use nv_bmcweb_tests::id;
use nv_bmcweb_tests::platform;
use nv_bmcweb_tests::service;
use nv_bmcweb_tests::success_names;
use nv_bmcweb_tests::BOARD;
use nv_bmcweb_tests::CONTROL_SERVICE;
use nv_bmcweb_tests::INVENTORY_SERVICE;
use nv_bmcweb_tests::POWER_CAP;
use nv_bmcweb_tests::POWER_CAP_IFACE;
use nv_bmcweb_tests::SENSOR_SERVICE;
use nv_bmcweb_tests::SENSOR_VALUE;
use nv_bmcweb_tests::TEMPERATURE;
use serde_json::json;
use std::error::Error as StdError;
use tokio::test;

const SENSORS: &str = "/redfish/v1/Chassis/Baseboard/Sensors";

#[test]
async fn readings_and_power_limit() -> Result<(), Box<dyn StdError>> {
    let resp = environment_metrics::get(&service(platform()), &id("Baseboard")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.body();
    assert_eq!(
        body["@odata.id"],
        "/redfish/v1/Chassis/Baseboard/EnvironmentMetrics"
    );
    assert_eq!(
        body["TemperatureCelsius"],
        json!({"Reading": 24.5, "DataSourceUri": format!("{SENSORS}/temperature_Inlet")})
    );
    assert_eq!(
        body["PowerWatts"],
        json!({"Reading": 812.0, "DataSourceUri": format!("{SENSORS}/power_Total")})
    );
    assert_eq!(
        body["FanSpeedsPercent"],
        json!([{
            "Reading": 41.0,
            "DataSourceUri": format!("{SENSORS}/fan_pwm_Fan0"),
            "DeviceName": "Fan0",
        }])
    );
    assert_eq!(
        body["PowerLimitWatts"],
        json!({
            "SetPoint": 1200,
            "AllowableMin": 500,
            "AllowableMax": 2000,
            "ControlMode": "Automatic",
        })
    );
    assert!(body.get("EnergyJoules").is_none());
    Ok(())
}

#[test]
async fn non_numeric_reading_is_internal_error() -> Result<(), Box<dyn StdError>> {
    let bus = platform();
    let mut bag = PropertyBag::new();
    bag.insert("Value", "hot");
    bus.add_interface(TEMPERATURE, SENSOR_SERVICE, SENSOR_VALUE, bag);
    let resp = environment_metrics::get(&service(bus), &id("Baseboard")).await;
    assert_eq!(error_names(&resp), ["InternalError"]);
    assert!(resp.body().get("TemperatureCelsius").is_none());
    assert_eq!(resp.body()["PowerWatts"]["Reading"], 812.0);
    Ok(())
}

#[test]
async fn negative_set_point_is_rejected_by_backend() -> Result<(), Box<dyn StdError>> {
    let svc = service(platform());
    let body = json!({"PowerLimitWatts": {"SetPoint": -1}}).to_string();
    let resp = environment_metrics::patch(&svc, &id("Baseboard"), body.as_bytes()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_names(&resp), ["PropertyValueIncorrect"]);
    assert_eq!(
        resp.body()["error"]["@Message.ExtendedInfo"][0]["MessageArgs"],
        json!(["setpoint", "-1"])
    );
    assert_eq!(
        svc.bus()
            .property(POWER_CAP, CONTROL_SERVICE, POWER_CAP_IFACE, "PowerCap"),
        Some(Variant::Uint32(1200))
    );
    Ok(())
}

#[test]
async fn set_point_and_control_mode_are_written() -> Result<(), Box<dyn StdError>> {
    let svc = service(platform());
    let body = json!({"PowerLimitWatts": {"SetPoint": 900, "ControlMode": "Disabled"}}).to_string();
    let resp = environment_metrics::patch(&svc, &id("Baseboard"), body.as_bytes()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(success_names(&resp), ["Success"]);
    let bus = svc.bus();
    assert_eq!(
        bus.property(POWER_CAP, CONTROL_SERVICE, POWER_CAP_IFACE, "PowerCap"),
        Some(Variant::Uint32(900))
    );
    assert_eq!(
        bus.property(POWER_CAP, CONTROL_SERVICE, POWER_CAP_IFACE, "PowerCapEnable"),
        Some(Variant::Bool(false))
    );
    assert_eq!(bus.mutating_calls().len(), 2);
    Ok(())
}

#[test]
async fn invalid_request_makes_no_bus_calls() -> Result<(), Box<dyn StdError>> {
    let svc = service(platform());
    let body = json!({"PowerLimitWatts": {"SetPoint": "high", "ControlMode": "Automatic"}})
        .to_string();
    let resp = environment_metrics::patch(&svc, &id("Baseboard"), body.as_bytes()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_names(&resp), ["PropertyValueTypeError"]);
    assert!(svc.bus().calls().is_empty());

    let body = json!({"PowerLimitWatts": {"ControlMode": "Manual"}}).to_string();
    let resp = environment_metrics::patch(&svc, &id("Baseboard"), body.as_bytes()).await;
    assert_eq!(error_names(&resp), ["PropertyValueNotInList"]);
    assert!(svc.bus().calls().is_empty());
    Ok(())
}

#[test]
async fn chassis_without_power_control() -> Result<(), Box<dyn StdError>> {
    let bus = platform();
    bus.add_interface(
        "/xyz/openbmc_project/inventory/system/chassis/Riser",
        INVENTORY_SERVICE,
        BOARD,
        PropertyBag::new(),
    );
    let svc = service(bus);
    let body = json!({"PowerLimitWatts": {"SetPoint": 900}}).to_string();
    let resp = environment_metrics::patch(&svc, &id("Riser"), body.as_bytes()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(svc.bus().mutating_calls().is_empty());

    let resp = environment_metrics::get(&svc, &id("Riser")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.body().get("PowerLimitWatts").is_none());
    Ok(())
}

#[test]
async fn backend_write_failure() -> Result<(), Box<dyn StdError>> {
    let bus = platform();
    bus.fail(Fault::new(
        POWER_CAP,
        POWER_CAP_IFACE,
        "PowerCap",
        BusError::WriteFailure("device busy".into()),
    ));
    let body = json!({"PowerLimitWatts": {"SetPoint": 900}}).to_string();
    let resp = environment_metrics::patch(&service(bus), &id("Baseboard"), body.as_bytes()).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(error_names(&resp), ["OperationFailed"]);
    assert!(success_names(&resp).is_empty());
    Ok(())
}
