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


//! Chassis environment metrics: sensor readings and the power limit.

use crate::association;
use crate::handlers::chassis::resolve_chassis;
use crate::handlers::finish;
use crate::handlers::owner;
use crate::handlers::parse_object;
use crate::handlers::reject_unknown;
use crate::handlers::sensors::sensor_uri;
use crate::handlers::write;
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
use nv_bmcweb_core::TypeMismatch;
use nv_bmcweb_core::Variant;
use serde_json::json;
use serde_json::Map;
use serde_json::Value;

const CONTROL_MODES: &[&str] = &["Automatic", "Disabled"];

fn control_mode(v: Value) -> Option<Value> {
    v.as_bool()
        .map(|enabled| Value::from(if enabled { "Automatic" } else { "Disabled" }))
}

const POWER_CAP_FIELDS: &[Field] = &[
    Field::optional("PowerCap", "/SetPoint", Codec::Identity(Kind::Uint32)),
    Field::optional("MinPowerCapValue", "/AllowableMin", Codec::Identity(Kind::Uint32)),
    Field::optional("MaxPowerCapValue", "/AllowableMax", Codec::Identity(Kind::Uint32)),
    Field::optional("PowerCapEnable", "/ControlMode", Codec::Map(Kind::Bool, control_mode)),
];

/// Where a sensor reading lands in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Temperature,
    Power,
    Energy,
    Fan,
}

impl Target {
    fn of(sensor: &ObjectPath) -> Option<Self> {
        match sensor.namespace()? {
            "temperature" => Some(Self::Temperature),
            "power" => Some(Self::Power),
            "energy" => Some(Self::Energy),
            "fan_pwm" => Some(Self::Fan),
            _ => None,
        }
    }

    const fn pointer(self) -> &'static str {
        match self {
            Self::Temperature => "/TemperatureCelsius",
            Self::Power => "/PowerWatts",
            Self::Energy => "/EnergyJoules",
            Self::Fan => "/FanSpeedsPercent",
        }
    }
}

/// Sensors to read: the first of each single-valued kind and every fan.
fn select(sensors: &[ObjectPath]) -> Vec<(Target, &ObjectPath)> {
    let mut selected: Vec<(Target, &ObjectPath)> = Vec::new();
    for sensor in sensors {
        let Some(target) = Target::of(sensor) else {
            continue;
        };
        if target == Target::Fan || !selected.iter().any(|(t, _)| *t == target) {
            selected.push((target, sensor));
        }
    }
    selected
}

async fn reading<B: Bus>(
    bus: &B,
    resp: &AsyncResp,
    chassis: &ResourceId,
    target: Target,
    sensor: &ObjectPath,
) -> Result<(), Error> {
    let service = owner(bus, sensor, iface::SENSOR_VALUE).await?;
    let value = bus
        .get_property(&service, sensor, iface::SENSOR_VALUE, "Value")
        .await?;
    let reading = value.get::<f64>().ok_or_else(|| TypeMismatch {
        property: "Value".into(),
        expected: "d",
        found: value.signature(),
    })?;
    let mut entry = json!({
        "Reading": reading,
        "DataSourceUri": sensor_uri(chassis, sensor),
    });
    if target == Target::Fan {
        entry["DeviceName"] = sensor.leaf().into();
        resp.append(target.pointer(), entry);
    } else {
        resp.set(target.pointer(), entry);
    }
    Ok(())
}

async fn power_limit<B: Bus>(bus: &B, resp: &AsyncResp, chassis: &ObjectPath) -> Result<(), Error> {
    let controls = association::walk(bus, chassis, "power_controls").await?;
    let Some(control) = controls.first() else {
        return Ok(());
    };
    let service = owner(bus, control, iface::POWER_CAP).await?;
    translate::fetch(
        bus,
        &service,
        control,
        iface::POWER_CAP,
        resp,
        "/PowerLimitWatts",
        POWER_CAP_FIELDS,
    )
    .await
}

/// `GET /redfish/v1/Chassis/{id}/EnvironmentMetrics`
pub async fn get<B: Bus>(svc: &Service<B>, id: &ResourceId) -> Response {
    let resp = AsyncResp::new();
    let result = fill(svc.bus(), &resp, id).await;
    finish(resp, result)
}

async fn fill<B: Bus>(bus: &B, resp: &AsyncResp, id: &ResourceId) -> Result<(), Error> {
    let chassis = resolve_chassis(bus, id).await?;
    resp.merge(json!({
        "@odata.id": ODataId::chassis(id).join("EnvironmentMetrics"),
        "@odata.type": "#EnvironmentMetrics.v1_3_0.EnvironmentMetrics",
        "Id": "EnvironmentMetrics",
        "Name": "Chassis Environment Metrics",
    }));
    let sensors = association::walk(bus, &chassis.path, "all_sensors")
        .await?
        .into_endpoints();
    let mut fan = FanOut::new(resp);
    for (target, sensor) in select(&sensors) {
        fan.spawn(reading(bus, resp, id, target, sensor));
    }
    fan.spawn(power_limit(bus, resp, &chassis.path));
    fan.settle().await;
    Ok(())
}

/// Validated `PowerLimitWatts` request.
#[derive(Debug, Default, PartialEq)]
struct LimitPatch {
    set_point: Option<(i64, Value)>,
    control_mode: Option<(bool, Value)>,
}

fn parse_limit(body: &Map<String, Value>) -> Result<LimitPatch, Error> {
    reject_unknown(body, &["PowerLimitWatts"])?;
    let Some(limit) = body.get("PowerLimitWatts") else {
        return Err(Error::UnrecognizedRequestBody);
    };
    let limit = limit
        .as_object()
        .ok_or_else(|| Error::value_type("PowerLimitWatts", limit))?;
    reject_unknown(limit, &["SetPoint", "ControlMode"])?;

    let mut patch = LimitPatch::default();
    if let Some(value) = limit.get("SetPoint") {
        let set_point = value
            .as_i64()
            .ok_or_else(|| Error::value_type("SetPoint", value))?;
        patch.set_point = Some((set_point, value.clone()));
    }
    if let Some(value) = limit.get("ControlMode") {
        let mode = value
            .as_str()
            .ok_or_else(|| Error::value_type("ControlMode", value))?;
        if !CONTROL_MODES.contains(&mode) {
            return Err(Error::PropertyValueNotInList {
                property: "ControlMode".into(),
                value: mode.into(),
            });
        }
        patch.control_mode = Some((mode == "Automatic", value.clone()));
    }
    if patch == LimitPatch::default() {
        return Err(Error::UnrecognizedRequestBody);
    }
    Ok(patch)
}

/// `PATCH /redfish/v1/Chassis/{id}/EnvironmentMetrics`
pub async fn patch<B: Bus>(svc: &Service<B>, id: &ResourceId, body: &[u8]) -> Response {
    let resp = AsyncResp::new();
    let result = apply(svc.bus(), &resp, id, body).await;
    finish(resp, result)
}

async fn apply<B: Bus>(bus: &B, resp: &AsyncResp, id: &ResourceId, body: &[u8]) -> Result<(), Error> {
    let patch = parse_limit(&parse_object(body)?)?;
    let chassis = resolve_chassis(bus, id).await?;
    let controls = association::walk(bus, &chassis.path, "power_controls").await?;
    let control = controls.first().ok_or_else(|| Error::ResourceNotFound {
        kind: "PowerLimit",
        id: id.inner().clone(),
    })?;
    let service = owner(bus, control, iface::POWER_CAP).await?;
    let target = (&service, control, iface::POWER_CAP);

    if let Some((set_point, value)) = &patch.set_point {
        let variant = u32::try_from(*set_point).map_or(Variant::Int64(*set_point), Variant::Uint32);
        write(bus, target, "PowerCap", variant, "setpoint", value).await?;
    }
    if let Some((enabled, value)) = &patch.control_mode {
        write(
            bus,
            target,
            "PowerCapEnable",
            Variant::Bool(*enabled),
            "ControlMode",
            value,
        )
        .await?;
    }
    resp.succeed();
    Ok(())
}
