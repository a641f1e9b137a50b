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

//! Integration tests of chassis sensors.

use http::StatusCode;
use nv_bmcweb::handlers::chassis;
use nv_bmcweb::handlers::environment_metrics;
use nv_bmcweb::handlers::sensors;
use nv_bmcweb_core::PropertyBag;
use nv_bmcweb_core::Variant;
use nv_bmcweb_tests::bag;
use nv_bmcweb_tests::error_names;
use nv_bmcweb_tests::id;
use nv_bmcweb_tests::platform;
use nv_bmcweb_tests::service;
use nv_bmcweb_tests::ODATA_ID;
use nv_bmcweb_tests::SENSOR_SERVICE;
use nv_bmcweb_tests::SENSOR_VALUE;
use nv_bmcweb_tests::TEMPERATURE;
use serde_json::json;
use std::error::Error as StdError;
use tokio::test;

const SENSORS: &str = "/redfish/v1/Chassis/Baseboard/Sensors";

#[test]
async fn collection_sorted_by_name() -> Result<(), Box<dyn StdError>> {
    let svc = service(platform());
    let resp = sensors::collection(&svc, &id("Baseboard")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.body(),
        &json!({
            "@odata.id": SENSORS,
            "@odata.type": "#SensorCollection.SensorCollection",
            "Name": "Sensors",
            "Members@odata.count": 3,
            "Members": [
                {ODATA_ID: format!("{SENSORS}/fan_pwm_Fan0")},
                {ODATA_ID: format!("{SENSORS}/power_Total")},
                {ODATA_ID: format!("{SENSORS}/temperature_Inlet")},
            ],
        })
    );
    let chassis = chassis::get(&svc, &id("Baseboard")).await;
    assert_eq!(chassis.body()["Sensors"][ODATA_ID], SENSORS);
    Ok(())
}

#[test]
async fn temperature_sensor() -> Result<(), Box<dyn StdError>> {
    let bus = platform();
    bus.add_interface(
        TEMPERATURE,
        SENSOR_SERVICE,
        SENSOR_VALUE,
        bag([
            ("Value", Variant::Double(24.5)),
            ("MinValue", Variant::Double(-40.0)),
            ("MaxValue", Variant::Double(127.0)),
        ]),
    );
    let resp = sensors::get(&service(bus), &id("Baseboard"), &id("temperature_Inlet")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.body(),
        &json!({
            "@odata.id": format!("{SENSORS}/temperature_Inlet"),
            "@odata.type": "#Sensor.v1_2_0.Sensor",
            "Id": "temperature_Inlet",
            "Name": "Inlet",
            "Status": {"State": "Enabled", "Health": "OK"},
            "ReadingType": "Temperature",
            "ReadingUnits": "Cel",
            "Reading": 24.5,
            "ReadingRangeMin": -40.0,
            "ReadingRangeMax": 127.0,
        })
    );
    Ok(())
}

#[test]
async fn data_source_uris_resolve() -> Result<(), Box<dyn StdError>> {
    let svc = service(platform());
    let metrics = environment_metrics::get(&svc, &id("Baseboard")).await;
    let uri = metrics.body()["FanSpeedsPercent"][0]["DataSourceUri"]
        .as_str()
        .ok_or("no fan reading")?
        .to_string();
    let name = uri.rsplit('/').next().ok_or("empty uri")?;
    let resp = sensors::get(&svc, &id("Baseboard"), &id(name)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.body()[ODATA_ID], uri.as_str());
    assert_eq!(resp.body()["Reading"], 41.0);
    assert_eq!(resp.body()["ReadingUnits"], "%");
    Ok(())
}

#[test]
async fn missing_reading_is_internal_error() -> Result<(), Box<dyn StdError>> {
    let bus = platform();
    bus.add_interface(TEMPERATURE, SENSOR_SERVICE, SENSOR_VALUE, PropertyBag::new());
    let resp = sensors::get(&service(bus), &id("Baseboard"), &id("temperature_Inlet")).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error_names(&resp), ["InternalError"]);
    Ok(())
}

#[test]
async fn unknown_sensor() -> Result<(), Box<dyn StdError>> {
    let resp = sensors::get(&service(platform()), &id("Baseboard"), &id("voltage_P12V")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        resp.body()["error"]["@Message.ExtendedInfo"][0]["MessageArgs"],
        json!(["Sensor", "voltage_P12V"])
    );
    Ok(())
}
