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

//! Chassis sensors.
//!
//! Sensors are the endpoints of the chassis `all_sensors` association. A
//! sensor is named `{namespace}_{leaf}` after its object path, e.g.
//! `/xyz/openbmc_project/sensors/temperature/Inlet` is `temperature_Inlet`.

use crate::association;
use crate::handlers::chassis::resolve_chassis;
use crate::handlers::decorator_fields;
use crate::handlers::finish;
use crate::handlers::status_ok;
use crate::iface;
use crate::translate;
use crate::translate::Codec;
use crate::translate::Field;
use crate::translate::Kind;
use crate::AsyncResp;
use crate::Error;
use crate::FanOut;
use crate::ODataId;
use crate::ResourceId;
use crate::Response;
use crate::Service;
use nv_bmcweb_core::Bus;
use nv_bmcweb_core::ObjectPath;
use serde_json::json;

const VALUE_FIELDS: &[Field] = &[
    Field::required("Value", "/Reading", Codec::Identity(Kind::Double)),
    Field::optional("MinValue", "/ReadingRangeMin", Codec::Identity(Kind::Double)),
    Field::optional("MaxValue", "/ReadingRangeMax", Codec::Identity(Kind::Double)),
];

/// Redfish `ReadingType` and `ReadingUnits` of a sensor namespace.
fn reading_type(namespace: &str) -> Option<(&'static str, &'static str)> {
    match namespace {
        "temperature" => Some(("Temperature", "Cel")),
        "power" => Some(("Power", "W")),
        "energy" => Some(("EnergyJoules", "J")),
        "voltage" => Some(("Voltage", "V")),
        "current" => Some(("Current", "A")),
        "fan_pwm" => Some(("Percent", "%")),
        "fan_tach" => Some(("Rotational", "RPM")),
        _ => None,
    }
}

/// Redfish name of the sensor at `path`.
#[must_use]
pub fn sensor_name(path: &ObjectPath) -> String {
    format!("{}_{}", path.namespace().unwrap_or_default(), path.leaf())
}

fn sensors_id(chassis: &ResourceId) -> ODataId {
    ODataId::chassis(chassis).join("Sensors")
}

/// `@odata.id` of the sensor at `path` of `chassis`.
#[must_use]
pub fn sensor_uri(chassis: &ResourceId, path: &ObjectPath) -> ODataId {
    sensors_id(chassis).join(sensor_name(path))
}

/// `GET /redfish/v1/Chassis/{id}/Sensors`
pub async fn collection<B: Bus>(svc: &Service<B>, chassis: &ResourceId) -> Response {
    let resp = AsyncResp::new();
    let result = fill_collection(svc.bus(), &resp, chassis).await;
    finish(resp, result)
}

async fn fill_collection<B: Bus>(
    bus: &B,
    resp: &AsyncResp,
    chassis: &ResourceId,
) -> Result<(), Error> {
    let resolved = resolve_chassis(bus, chassis).await?;
    let mut names = association::walk(bus, &resolved.path, "all_sensors")
        .await?
        .endpoints()
        .iter()
        .map(|path| (sensor_name(path), sensor_uri(chassis, path)))
        .collect::<Vec<_>>();
    names.sort();
    let members = names.into_iter().map(|(_, uri)| uri.link()).collect::<Vec<_>>();
    resp.merge(json!({
        "@odata.id": sensors_id(chassis),
        "@odata.type": "#SensorCollection.SensorCollection",
        "Name": "Sensors",
        "Members@odata.count": members.len(),
        "Members": members,
    }));
    Ok(())
}

/// `GET /redfish/v1/Chassis/{id}/Sensors/{sensor}`
pub async fn get<B: Bus>(svc: &Service<B>, chassis: &ResourceId, id: &ResourceId) -> Response {
    let resp = AsyncResp::new();
    let result = fill(svc.bus(), &resp, chassis, id).await;
    finish(resp, result)
}

async fn fill<B: Bus>(
    bus: &B,
    resp: &AsyncResp,
    chassis: &ResourceId,
    id: &ResourceId,
) -> Result<(), Error> {
    let resolved = resolve_chassis(bus, chassis).await?;
    let sensors = association::walk(bus, &resolved.path, "all_sensors").await?;
    let path = sensors
        .endpoints()
        .iter()
        .find(|path| sensor_name(path) == *id.inner())
        .ok_or_else(|| Error::ResourceNotFound {
            kind: "Sensor",
            id: id.inner().clone(),
        })?;
    resp.merge(json!({
        "@odata.id": sensor_uri(chassis, path),
        "@odata.type": "#Sensor.v1_2_0.Sensor",
        "Id": id.inner(),
        "Name": path.leaf().replace('_', " "),
        "Status": status_ok(),
    }));
    if let Some((kind, units)) = path.namespace().and_then(reading_type) {
        resp.merge(json!({"ReadingType": kind, "ReadingUnits": units}));
    }

    let owners = bus.get_object(path, &[iface::SENSOR_VALUE]).await?;
    let (service, interfaces) = owners.first().ok_or_else(|| Error::Unowned(path.clone()))?;
    let mut fan = FanOut::new(resp);
    fan.spawn(translate::fetch(
        bus,
        service,
        path,
        iface::SENSOR_VALUE,
        resp,
        "",
        VALUE_FIELDS,
    ));
    for interface in interfaces {
        if let Some(fields) = decorator_fields(interface) {
            fan.spawn(translate::fetch(
                bus, service, path, interface, resp, "", fields,
            ));
        }
    }
    fan.settle().await;
    Ok(())
}
