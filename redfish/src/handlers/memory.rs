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


//! Memory modules.

use crate::handlers::collection::Collection;
use crate::handlers::decorator_fields;
use crate::handlers::finish;
use crate::handlers::link_first;
use crate::handlers::status_ok;
use crate::iface;
use crate::resolve::resolve;
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
use serde_json::Value;

/// Redfish `MemoryType` of a backend device type.
fn memory_type(v: Value) -> Option<Value> {
    let device = v.as_str()?.rsplit('.').next()?;
    if device.contains("DDR") || device.starts_with("HBM") || device.ends_with("SDRAM") {
        Some(Value::from("DRAM"))
    } else if device == "Logical" {
        Some(Value::from("IntelOptane"))
    } else {
        None
    }
}

const DIMM_FIELDS: &[Field] = &[
    Field::optional("MemoryDataWidth", "/DataWidthBits", Codec::Identity(Kind::Uint16)),
    Field::optional("MemoryTotalWidth", "/BusWidthBits", Codec::Identity(Kind::Uint16)),
    Field::required("MemorySizeInKB", "/CapacityMiB", Codec::UnitShift(Kind::Uint64)),
    Field::optional(
        "MemoryConfiguredSpeedInMhz",
        "/OperatingSpeedMhz",
        Codec::Identity(Kind::Uint16),
    ),
    Field::optional("AllowedSpeedsMT", "/AllowedSpeedsMHz", Codec::Identity(Kind::Uint16List)),
    Field::optional("MemoryType", "/MemoryDeviceType", Codec::Enum(tables::MEMORY_DEVICE_TYPE)),
    Field::optional("MemoryType", "/MemoryType", Codec::Map(Kind::String, memory_type)),
    Field::optional("ECC", "/ErrorCorrection", Codec::Enum(tables::MEMORY_ECC)),
    Field::optional("FormFactor", "/BaseModuleType", Codec::Enum(tables::MEMORY_FORM_FACTOR)),
    Field::optional("MemoryAttributes", "/RankCount", Codec::Identity(Kind::Byte)),
];

const REVISION_FIELDS: &[Field] = &[Field::optional(
    "Version",
    "/FirmwareRevision",
    Codec::Identity(Kind::String),
)];

fn fields(interface: &str) -> Option<&'static [Field]> {
    match interface {
        iface::DIMM => Some(DIMM_FIELDS),
        iface::REVISION => Some(REVISION_FIELDS),
        other => decorator_fields(other),
    }
}

fn memory_id<B: Bus>(svc: &Service<B>) -> ODataId {
    svc.system_id().join("Memory")
}

/// `GET /redfish/v1/Systems/{system}/Memory`
pub async fn collection<B: Bus>(svc: &Service<B>, system: &ResourceId) -> Response {
    let resp = AsyncResp::new();
    let result = match svc.check_system(system) {
        Ok(()) => {
            Collection {
                id: memory_id(svc),
                odata_type: "#MemoryCollection.MemoryCollection",
                name: "Memory Module Collection",
                root: ObjectPath::inventory(),
                interfaces: &[iface::DIMM],
            }
            .fill(svc.bus(), &resp)
            .await
        }
        Err(err) => Err(err),
    };
    finish(resp, result)
}

/// `GET /redfish/v1/Systems/{system}/Memory/{id}`
pub async fn get<B: Bus>(svc: &Service<B>, system: &ResourceId, id: &ResourceId) -> Response {
    let resp = AsyncResp::new();
    let result = fill(svc, &resp, system, id).await;
    finish(resp, result)
}

async fn fill<B: Bus>(
    svc: &Service<B>,
    resp: &AsyncResp,
    system: &ResourceId,
    id: &ResourceId,
) -> Result<(), Error> {
    svc.check_system(system)?;
    let bus = svc.bus();
    let dimm = resolve(bus, &ObjectPath::inventory(), &[iface::DIMM], "Memory", id).await?;
    let (service, interfaces) = dimm.owner()?;
    resp.merge(json!({
        "@odata.id": memory_id(svc).join(id),
        "@odata.type": "#Memory.v1_17_0.Memory",
        "Id": id.inner(),
        "Name": "DIMM Slot",
        "Status": status_ok(),
    }));

    let path = &dimm.path;
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
        "parent_chassis",
        "/Links/Chassis",
        |p| ODataId::chassis(p.leaf()),
    ));
    fan.settle().await;
    Ok(())
}
