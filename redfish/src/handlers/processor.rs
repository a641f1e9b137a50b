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


//! Processors.
//!
//! A processor object may implement both `Item.Cpu` and
//! `Item.Accelerator`; both translations run and their fields end up in one
//! document. `ProcessorType` has a single producer: the accelerator
//! translation if the object is an accelerator, otherwise the handler
//! writes `CPU` up front.

use crate::handlers::collection::Collection;
use crate::handlers::decorator_fields;
use crate::handlers::finish;
use crate::handlers::link_first;
use crate::handlers::parse_object;
use crate::handlers::reject_unknown;
use crate::handlers::status_ok;
use crate::handlers::write;
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
use nv_bmcweb_core::ServiceName;
use nv_bmcweb_core::Variant;
use serde_json::json;
use serde_json::Value;

const CPU_FIELDS: &[Field] = &[
    Field::required("CoreCount", "/TotalCores", Codec::Identity(Kind::Uint16)),
    Field::optional("ThreadCount", "/TotalThreads", Codec::Identity(Kind::Uint16)),
    Field::optional("MaxSpeedInMhz", "/MaxSpeedMHz", Codec::Identity(Kind::Uint32)),
    Field::optional("Socket", "/Socket", Codec::Identity(Kind::String)),
    Field::optional(
        "EffectiveFamily",
        "/ProcessorId/EffectiveFamily",
        Codec::Hex {
            kind: Kind::Uint16,
            width: 4,
        },
    ),
    Field::optional(
        "EffectiveModel",
        "/ProcessorId/EffectiveModel",
        Codec::Hex {
            kind: Kind::Uint16,
            width: 4,
        },
    ),
    Field::optional(
        "Id",
        "/ProcessorId/IdentificationRegisters",
        Codec::Hex {
            kind: Kind::Uint64,
            width: 16,
        },
    ),
    Field::optional(
        "Microcode",
        "/ProcessorId/MicrocodeInfo",
        Codec::Hex {
            kind: Kind::Uint32,
            width: 8,
        },
    ),
    Field::optional(
        "Step",
        "/ProcessorId/Step",
        Codec::Hex {
            kind: Kind::Uint16,
            width: 4,
        },
    ),
    Field::optional("Family", "/ProcessorId/VendorId", Codec::Identity(Kind::String)),
];

const ACCELERATOR_FIELDS: &[Field] = &[Field::optional(
    "Type",
    "/ProcessorType",
    Codec::Enum(tables::PROCESSOR_TYPE),
)];

fn enabled_state(v: Value) -> Option<Value> {
    v.as_bool()
        .map(|enabled| Value::from(if enabled { "Enabled" } else { "Disabled" }))
}

const OPERATING_CONFIG_FIELDS: &[Field] = &[Field::optional(
    "BaseSpeedPriorityEnabled",
    "/BaseSpeedPriorityState",
    Codec::Map(Kind::Bool, enabled_state),
)];

fn fields(interface: &str) -> Option<&'static [Field]> {
    match interface {
        iface::CPU => Some(CPU_FIELDS),
        iface::ACCELERATOR => Some(ACCELERATOR_FIELDS),
        other => decorator_fields(other),
    }
}

fn processors_id<B: Bus>(svc: &Service<B>) -> ODataId {
    svc.system_id().join("Processors")
}

async fn resolve_processor<B: Bus>(bus: &B, id: &ResourceId) -> Result<Resolved, Error> {
    resolve(
        bus,
        &ObjectPath::inventory(),
        iface::PROCESSOR_INTERFACES,
        "Processor",
        id,
    )
    .await
}

/// `GET /redfish/v1/Systems/{system}/Processors`
pub async fn collection<B: Bus>(svc: &Service<B>, system: &ResourceId) -> Response {
    let resp = AsyncResp::new();
    let result = match svc.check_system(system) {
        Ok(()) => {
            Collection {
                id: processors_id(svc),
                odata_type: "#ProcessorCollection.ProcessorCollection",
                name: "Processor Collection",
                root: ObjectPath::inventory(),
                interfaces: iface::PROCESSOR_INTERFACES,
            }
            .fill(svc.bus(), &resp)
            .await
        }
        Err(err) => Err(err),
    };
    finish(resp, result)
}

/// `GET /redfish/v1/Systems/{system}/Processors/{id}`
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
    let processor = resolve_processor(bus, id).await?;
    let odata_id = processors_id(svc).join(id);
    resp.merge(json!({
        "@odata.id": odata_id,
        "@odata.type": "#Processor.v1_18_0.Processor",
        "Id": id.inner(),
        "Name": "Processor",
        "Status": status_ok(),
    }));
    if !processor.services.implements(iface::ACCELERATOR) {
        resp.set("/ProcessorType", "CPU");
    }

    let path = &processor.path;
    let mut fan = FanOut::new(resp);
    for (service, interface) in processor.services.interfaces() {
        if interface == iface::CURRENT_OPERATING_CONFIG {
            fan.spawn(operating_config(bus, resp, service, path, &odata_id));
        } else if let Some(fields) = fields(interface) {
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

async fn operating_config<B: Bus>(
    bus: &B,
    resp: &AsyncResp,
    service: &ServiceName,
    path: &ObjectPath,
    odata_id: &ODataId,
) -> Result<(), Error> {
    let bag = bus
        .get_all_properties(service, path, iface::CURRENT_OPERATING_CONFIG)
        .await?;
    let configs = odata_id.join("OperatingConfigs");
    resp.set("/OperatingConfigs", configs.link());
    match bag.typed::<ObjectPath>("AppliedConfig") {
        Ok(Some(applied)) => resp.set(
            "/AppliedOperatingConfig",
            configs.join(applied.leaf()).link(),
        ),
        Ok(None) => {}
        Err(err) => return Err(err.into()),
    }
    translate::translate(resp, "", &bag, OPERATING_CONFIG_FIELDS)
}

/// `PATCH /redfish/v1/Systems/{system}/Processors/{id}`
///
/// Only `AppliedOperatingConfig` is writable.
pub async fn patch<B: Bus>(
    svc: &Service<B>,
    system: &ResourceId,
    id: &ResourceId,
    body: &[u8],
) -> Response {
    let resp = AsyncResp::new();
    let result = apply(svc, &resp, system, id, body).await;
    finish(resp, result)
}

/// Operating config named by a `{"@odata.id": ...}` link of this processor.
fn config_from_link(configs: &ODataId, link: &Value) -> Result<String, Error> {
    const PROPERTY: &str = "AppliedOperatingConfig";
    let map = link
        .as_object()
        .ok_or_else(|| Error::value_type(PROPERTY, link))?;
    reject_unknown(map, &["@odata.id"])?;
    let uri = map
        .get("@odata.id")
        .ok_or_else(|| Error::PropertyMissing(format!("{PROPERTY}/@odata.id")))?;
    let uri_str = uri
        .as_str()
        .ok_or_else(|| Error::value_type(format!("{PROPERTY}/@odata.id"), uri))?;
    uri_str
        .strip_prefix(configs.as_str())
        .and_then(|rest| rest.strip_prefix('/'))
        .filter(|cfg| !cfg.is_empty() && !cfg.contains('/'))
        .map(ToString::to_string)
        .ok_or_else(|| Error::PropertyValueIncorrect {
            property: PROPERTY.into(),
            value: uri_str.into(),
        })
}

async fn apply<B: Bus>(
    svc: &Service<B>,
    resp: &AsyncResp,
    system: &ResourceId,
    id: &ResourceId,
    body: &[u8],
) -> Result<(), Error> {
    svc.check_system(system)?;
    let body = parse_object(body)?;
    reject_unknown(&body, &["AppliedOperatingConfig"])?;
    let Some(link) = body.get("AppliedOperatingConfig") else {
        return Err(Error::UnrecognizedRequestBody);
    };
    let configs = processors_id(svc).join(id).join("OperatingConfigs");
    let config = config_from_link(&configs, link)?;

    let bus = svc.bus();
    let processor = resolve_processor(bus, id).await?;
    let service = processor
        .service_for(iface::CURRENT_OPERATING_CONFIG)
        .ok_or_else(|| Error::PropertyNotWritable("AppliedOperatingConfig".into()))?;
    let config_path = processor.path.child(&config);
    write(
        bus,
        (service, &processor.path, iface::CURRENT_OPERATING_CONFIG),
        "AppliedConfig",
        Variant::ObjectPath(config_path),
        "AppliedOperatingConfig",
        &link["@odata.id"],
    )
    .await?;
    resp.succeed();
    Ok(())
}
