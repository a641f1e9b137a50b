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


//! Chassis.

use crate::handlers::collection::Collection;
use crate::handlers::decorator_fields;
use crate::handlers::finish;
use crate::handlers::link_all;
use crate::handlers::link_first;
use crate::handlers::status_ok;
use crate::iface;
use crate::resolve::resolve;
use crate::resolve::Resolved;
use crate::translate;
use crate::translate::tables;
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

const ASSET_TAG_FIELDS: &[Field] =
    &[Field::optional("AssetTag", "/AssetTag", Codec::Identity(Kind::String))];

const UUID_FIELDS: &[Field] = &[Field::optional("UUID", "/UUID", Codec::Identity(Kind::String))];

const ITEM_FIELDS: &[Field] = &[
    Field::optional("PrettyName", "/Name", Codec::Identity(Kind::String)),
    Field::optional("Present", "/Status/State", Codec::Gate("Absent")),
];

const CHASSIS_FIELDS: &[Field] = &[Field::optional(
    "Type",
    "/ChassisType",
    Codec::Enum(tables::CHASSIS_TYPE),
)];

const DIMENSION_FIELDS: &[Field] = &[
    Field::optional("Height", "/HeightMm", Codec::Identity(Kind::Double)),
    Field::optional("Width", "/WidthMm", Codec::Identity(Kind::Double)),
    Field::optional("Depth", "/DepthMm", Codec::Identity(Kind::Double)),
];

fn fields(interface: &str) -> Option<&'static [Field]> {
    match interface {
        iface::ASSET_TAG => Some(ASSET_TAG_FIELDS),
        iface::UUID => Some(UUID_FIELDS),
        iface::ITEM => Some(ITEM_FIELDS),
        iface::CHASSIS => Some(CHASSIS_FIELDS),
        iface::DIMENSION => Some(DIMENSION_FIELDS),
        other => decorator_fields(other),
    }
}

/// Resolve a chassis id.
///
/// # Errors
///
/// See [`resolve`].
pub async fn resolve_chassis<B: Bus>(bus: &B, id: &ResourceId) -> Result<Resolved, Error> {
    resolve(
        bus,
        &ObjectPath::inventory(),
        iface::CHASSIS_INTERFACES,
        "Chassis",
        id,
    )
    .await
}

/// `GET /redfish/v1/Chassis`
pub async fn collection<B: Bus>(svc: &Service<B>) -> Response {
    Collection {
        id: ODataId::service_root().join("Chassis"),
        odata_type: "#ChassisCollection.ChassisCollection",
        name: "Chassis Collection",
        root: ObjectPath::inventory(),
        interfaces: iface::CHASSIS_INTERFACES,
    }
    .get(svc.bus())
    .await
}

/// `GET /redfish/v1/Chassis/{id}`
pub async fn get<B: Bus>(svc: &Service<B>, id: &ResourceId) -> Response {
    let resp = AsyncResp::new();
    let result = fill(svc, &resp, id).await;
    finish(resp, result)
}

async fn fill<B: Bus>(svc: &Service<B>, resp: &AsyncResp, id: &ResourceId) -> Result<(), Error> {
    let bus = svc.bus();
    let chassis = resolve_chassis(bus, id).await?;
    let (service, interfaces) = chassis.owner()?;
    let odata_id = ODataId::chassis(id);
    resp.merge(json!({
        "@odata.id": odata_id,
        "@odata.type": "#Chassis.v1_22_0.Chassis",
        "Id": id.inner(),
        "Name": id.inner(),
        "ChassisType": "RackMount",
        "Status": status_ok(),
        "PCIeSlots": odata_id.join("PCIeSlots").link(),
        "EnvironmentMetrics": odata_id.join("EnvironmentMetrics").link(),
        "Links": {
            "ComputerSystems": [svc.system_id().link()],
        },
    }));

    let path = &chassis.path;
    let mut fan = FanOut::new(resp);
    for interface in interfaces {
        if let Some(fields) = fields(interface) {
            fan.spawn(translate::fetch(
                bus, service, path, interface, resp, "", fields,
            ));
        }
    }
    fan.spawn(link_first(
        bus,
        resp,
        path,
        "contained_by",
        "/Links/ContainedBy",
        |p| ODataId::chassis(p.leaf()),
    ));
    fan.spawn(link_all(
        bus,
        resp,
        path,
        "containing",
        "/Links/Contains",
        |p| ODataId::chassis(p.leaf()),
    ));
    let system = svc.system_id();
    fan.spawn(link_all(
        bus,
        resp,
        path,
        "all_processors",
        "/Links/Processors",
        move |p| system.join("Processors").join(p.leaf()),
    ));
    fan.spawn(async {
        let sensors = crate::association::walk(bus, path, "all_sensors").await?;
        if !sensors.endpoints().is_empty() {
            resp.set("/Sensors", odata_id.join("Sensors").link());
        }
        Ok(())
    });
    fan.settle().await;
    Ok(())
}
