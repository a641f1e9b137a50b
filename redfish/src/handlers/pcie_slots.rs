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


//! PCIe slots of a chassis.
//!
//! Slots are inventory objects associated to their chassis through the
//! `chassis` association. Slots are appended in completion order.

use crate::association;
use crate::handlers::chassis::resolve_chassis;
use crate::handlers::finish;
use crate::handlers::LOCATION_FIELDS;
use crate::iface;
use crate::translate::tables;
use crate::translate::translate_into;
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
use nv_bmcweb_core::ServiceMap;
use serde_json::json;
use serde_json::Value;

const SLOT_FIELDS: &[Field] = &[
    Field::optional("Generation", "/PCIeType", Codec::Enum(tables::PCIE_GENERATION)),
    Field::optional("Lanes", "/Lanes", Codec::Identity(Kind::Uint32)),
    Field::optional("SlotType", "/SlotType", Codec::Enum(tables::PCIE_SLOT_TYPE)),
    Field::optional("HotPluggable", "/HotPluggable", Codec::Identity(Kind::Bool)),
];

/// `GET /redfish/v1/Chassis/{id}/PCIeSlots`
pub async fn get<B: Bus>(svc: &Service<B>, id: &ResourceId) -> Response {
    let resp = AsyncResp::new();
    let result = fill(svc.bus(), &resp, id).await;
    finish(resp, result)
}

async fn fill<B: Bus>(bus: &B, resp: &AsyncResp, id: &ResourceId) -> Result<(), Error> {
    let chassis = resolve_chassis(bus, id).await?;
    resp.merge(json!({
        "@odata.id": ODataId::chassis(id).join("PCIeSlots"),
        "@odata.type": "#PCIeSlots.v1_5_0.PCIeSlots",
        "Id": "1",
        "Name": "PCIe Slot Information",
        "Slots": [],
    }));
    let slots = bus
        .get_sub_tree(&ObjectPath::inventory(), 0, &[iface::PCIE_SLOT])
        .await?;
    let mut fan = FanOut::new(resp);
    for (path, services) in &slots {
        fan.spawn(slot(bus, resp, &chassis.path, path, services));
    }
    fan.settle().await;
    Ok(())
}

async fn slot<B: Bus>(
    bus: &B,
    resp: &AsyncResp,
    chassis: &ObjectPath,
    path: &ObjectPath,
    services: &ServiceMap,
) -> Result<(), Error> {
    let owners = association::walk(bus, path, "chassis").await?;
    if !owners.endpoints().contains(chassis) {
        return Ok(());
    }
    let service = services
        .service_for(iface::PCIE_SLOT)
        .ok_or_else(|| Error::Unowned(path.clone()))?;
    let mut slot = Value::Object(serde_json::Map::new());
    let bag = bus.get_all_properties(service, path, iface::PCIE_SLOT).await?;
    let mut result = translate_into(&mut slot, &bag, SLOT_FIELDS);
    if let Some(service) = services.service_for(iface::LOCATION_CODE) {
        let location = match bus
            .get_all_properties(service, path, iface::LOCATION_CODE)
            .await
        {
            Ok(bag) => translate_into(&mut slot, &bag, LOCATION_FIELDS),
            Err(err) => Err(err.into()),
        };
        result = result.and(location);
    }
    resp.append("/Slots", slot);
    result
}
