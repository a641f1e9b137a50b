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


//! Fabrics, switches and ports.
//!
//! Switch and port objects are looked up below the object of their parent
//! resource. Collections of switches and ports come from the `all_switches`
//! and `all_ports` associations of the parent.

use crate::association;
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

const FABRIC_FIELDS: &[Field] = &[Field::optional(
    "Type",
    "/FabricType",
    Codec::Enum(tables::PROTOCOL),
)];

const SWITCH_FIELDS: &[Field] = &[
    Field::optional("Type", "/SwitchType", Codec::Enum(tables::PROTOCOL)),
    Field::optional(
        "SupportedProtocols",
        "/SupportedProtocols",
        Codec::EnumList(tables::PROTOCOL),
    ),
    Field::optional("Enabled", "/Enabled", Codec::Identity(Kind::Bool)),
    Field::optional("TotalSwitchWidth", "/TotalSwitchWidth", Codec::Identity(Kind::Uint32)),
    Field::optional("CurrentBandwidth", "/CurrentBandwidthGbps", Codec::Identity(Kind::Double)),
    Field::optional("MaxBandwidth", "/MaxBandwidthGbps", Codec::Identity(Kind::Double)),
];

const PORT_FIELDS: &[Field] = &[
    Field::optional("Protocol", "/PortProtocol", Codec::Enum(tables::PROTOCOL)),
    Field::optional("Type", "/PortType", Codec::Enum(tables::PORT_TYPE)),
    Field::optional("CurrentSpeed", "/CurrentSpeedGbps", Codec::Identity(Kind::Double)),
    Field::optional("MaxSpeed", "/MaxSpeedGbps", Codec::Identity(Kind::Double)),
    Field::optional("Width", "/Width", Codec::Identity(Kind::Uint32)),
    Field::optional("LinkState", "/LinkState", Codec::Enum(tables::LINK_STATE)),
    Field::optional("LinkStatus", "/LinkStatus", Codec::Enum(tables::LINK_STATUS)),
];

fn fabric_fields(interface: &str) -> Option<&'static [Field]> {
    match interface {
        iface::FABRIC => Some(FABRIC_FIELDS),
        _ => None,
    }
}

fn switch_fields(interface: &str) -> Option<&'static [Field]> {
    match interface {
        iface::SWITCH => Some(SWITCH_FIELDS),
        other => decorator_fields(other),
    }
}

fn port_fields(interface: &str) -> Option<&'static [Field]> {
    match interface {
        iface::PORT => Some(PORT_FIELDS),
        other => decorator_fields(other),
    }
}

async fn resolve_fabric<B: Bus>(bus: &B, fabric: &ResourceId) -> Result<Resolved, Error> {
    resolve(bus, &ObjectPath::inventory(), &[iface::FABRIC], "Fabric", fabric).await
}

async fn resolve_switch<B: Bus>(
    bus: &B,
    fabric: &ResourceId,
    switch: &ResourceId,
) -> Result<Resolved, Error> {
    let fabric = resolve_fabric(bus, fabric).await?;
    resolve(bus, &fabric.path, &[iface::SWITCH], "Switch", switch).await
}

fn switches_id(fabric: &ResourceId) -> ODataId {
    ODataId::fabric(fabric).join("Switches")
}

/// Spawn one translation per interface of the owning service.
fn spawn_translations<'a, B: Bus>(
    fan: &mut FanOut<'a>,
    bus: &'a B,
    resp: &'a AsyncResp,
    object: &'a Resolved,
    fields: fn(&str) -> Option<&'static [Field]>,
) -> Result<(), Error> {
    let (service, interfaces) = object.owner()?;
    for interface in interfaces {
        if let Some(fields) = fields(interface) {
            fan.spawn(translate::fetch(
                bus,
                service,
                &object.path,
                interface,
                resp,
                "",
                fields,
            ));
        }
    }
    Ok(())
}

/// `GET /redfish/v1/Fabrics`
pub async fn collection<B: Bus>(svc: &Service<B>) -> Response {
    Collection {
        id: ODataId::service_root().join("Fabrics"),
        odata_type: "#FabricCollection.FabricCollection",
        name: "Fabric Collection",
        root: ObjectPath::inventory(),
        interfaces: &[iface::FABRIC],
    }
    .get(svc.bus())
    .await
}

/// `GET /redfish/v1/Fabrics/{fabric}`
pub async fn get<B: Bus>(svc: &Service<B>, fabric: &ResourceId) -> Response {
    let resp = AsyncResp::new();
    let result = fill_fabric(svc.bus(), &resp, fabric).await;
    finish(resp, result)
}

async fn fill_fabric<B: Bus>(bus: &B, resp: &AsyncResp, id: &ResourceId) -> Result<(), Error> {
    let fabric = resolve_fabric(bus, id).await?;
    resp.merge(json!({
        "@odata.id": ODataId::fabric(id),
        "@odata.type": "#Fabric.v1_3_0.Fabric",
        "Id": id.inner(),
        "Name": id.inner(),
        "Status": status_ok(),
        "Switches": switches_id(id).link(),
    }));
    let mut fan = FanOut::new(resp);
    spawn_translations(&mut fan, bus, resp, &fabric, fabric_fields)?;
    fan.settle().await;
    Ok(())
}

/// `GET /redfish/v1/Fabrics/{fabric}/Switches`
///
/// Members are sorted by object path.
pub async fn switches<B: Bus>(svc: &Service<B>, fabric: &ResourceId) -> Response {
    let resp = AsyncResp::new();
    let result = fill_switches(svc.bus(), &resp, fabric).await;
    finish(resp, result)
}

async fn fill_switches<B: Bus>(bus: &B, resp: &AsyncResp, id: &ResourceId) -> Result<(), Error> {
    let fabric = resolve_fabric(bus, id).await?;
    let mut paths = association::walk(bus, &fabric.path, "all_switches")
        .await?
        .into_endpoints();
    paths.sort();
    let collection = Collection {
        id: switches_id(id),
        odata_type: "#SwitchCollection.SwitchCollection",
        name: "Switch Collection",
        root: fabric.path.clone(),
        interfaces: &[iface::SWITCH],
    };
    resp.merge(collection.document(&paths));
    Ok(())
}

/// `GET /redfish/v1/Fabrics/{fabric}/Switches/{switch}`
pub async fn get_switch<B: Bus>(
    svc: &Service<B>,
    fabric: &ResourceId,
    switch: &ResourceId,
) -> Response {
    let resp = AsyncResp::new();
    let result = fill_switch(svc.bus(), &resp, fabric, switch).await;
    finish(resp, result)
}

async fn fill_switch<B: Bus>(
    bus: &B,
    resp: &AsyncResp,
    fabric: &ResourceId,
    id: &ResourceId,
) -> Result<(), Error> {
    let switch = resolve_switch(bus, fabric, id).await?;
    let odata_id = switches_id(fabric).join(id);
    resp.merge(json!({
        "@odata.id": odata_id,
        "@odata.type": "#Switch.v1_9_0.Switch",
        "Id": id.inner(),
        "Name": id.inner(),
        "Status": status_ok(),
        "Ports": odata_id.join("Ports").link(),
    }));
    let mut fan = FanOut::new(resp);
    spawn_translations(&mut fan, bus, resp, &switch, switch_fields)?;
    fan.spawn(link_first(
        bus,
        resp,
        &switch.path,
        "parent_chassis",
        "/Links/Chassis",
        |p| ODataId::chassis(p.leaf()),
    ));
    let endpoints = ODataId::fabric(fabric).join("Endpoints");
    fan.spawn(link_all(
        bus,
        resp,
        &switch.path,
        "all_endpoints",
        "/Links/Endpoints",
        move |p| endpoints.join(p.leaf()),
    ));
    fan.settle().await;
    Ok(())
}

/// `GET /redfish/v1/Fabrics/{fabric}/Switches/{switch}/Ports`
pub async fn ports<B: Bus>(svc: &Service<B>, fabric: &ResourceId, switch: &ResourceId) -> Response {
    let resp = AsyncResp::new();
    let result = fill_ports(svc.bus(), &resp, fabric, switch).await;
    finish(resp, result)
}

async fn fill_ports<B: Bus>(
    bus: &B,
    resp: &AsyncResp,
    fabric: &ResourceId,
    id: &ResourceId,
) -> Result<(), Error> {
    let switch = resolve_switch(bus, fabric, id).await?;
    let paths = association::walk(bus, &switch.path, "all_ports")
        .await?
        .into_endpoints();
    let collection = Collection {
        id: switches_id(fabric).join(id).join("Ports"),
        odata_type: "#PortCollection.PortCollection",
        name: "Port Collection",
        root: switch.path.clone(),
        interfaces: &[iface::PORT],
    };
    resp.merge(collection.document(&paths));
    Ok(())
}

/// `GET /redfish/v1/Fabrics/{fabric}/Switches/{switch}/Ports/{port}`
pub async fn get_port<B: Bus>(
    svc: &Service<B>,
    fabric: &ResourceId,
    switch: &ResourceId,
    port: &ResourceId,
) -> Response {
    let resp = AsyncResp::new();
    let result = fill_port(svc.bus(), &resp, fabric, switch, port).await;
    finish(resp, result)
}

async fn fill_port<B: Bus>(
    bus: &B,
    resp: &AsyncResp,
    fabric: &ResourceId,
    switch_id: &ResourceId,
    id: &ResourceId,
) -> Result<(), Error> {
    let switch = resolve_switch(bus, fabric, switch_id).await?;
    let port = resolve(bus, &switch.path, &[iface::PORT], "Port", id).await?;
    resp.merge(json!({
        "@odata.id": switches_id(fabric).join(switch_id).join("Ports").join(id),
        "@odata.type": "#Port.v1_9_0.Port",
        "Id": id.inner(),
        "Name": id.inner(),
        "Status": status_ok(),
    }));
    let mut fan = FanOut::new(resp);
    spawn_translations(&mut fan, bus, resp, &port, port_fields)?;
    fan.settle().await;
    Ok(())
}
