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


//! Host boot options.

use crate::handlers::collection::Collection;
use crate::handlers::finish;
use crate::handlers::owner;
use crate::handlers::parse_object;
use crate::handlers::reject_unknown;
use crate::handlers::write;
use crate::iface;
use crate::resolve;
use crate::resolve::Resolved;
use crate::translate;
use crate::translate::Codec;
use crate::translate::Field;
use crate::translate::Kind;
use crate::AsyncResp;
use crate::Error;
use crate::ODataId;
use crate::ResourceId;
use crate::Response;
use crate::Service;
use http::header::LOCATION;
use http::StatusCode;
use nv_bmcweb_core::Bus;
use nv_bmcweb_core::BusError;
use nv_bmcweb_core::ObjectPath;
use nv_bmcweb_core::Variant;
use serde_json::json;
use serde_json::Map;
use serde_json::Value;

const BOOT_OPTION_FIELDS: &[Field] = &[
    Field::optional("DisplayName", "/DisplayName", Codec::Identity(Kind::String)),
    Field::optional("Description", "/Description", Codec::Identity(Kind::String)),
    Field::optional("UefiDevicePath", "/UefiDevicePath", Codec::Identity(Kind::String)),
    Field::optional("Enabled", "/BootOptionEnabled", Codec::Identity(Kind::Bool)),
];

fn options_root() -> ObjectPath {
    ObjectPath::from(iface::BOOT_OPTIONS_ROOT)
}

fn options_id<B: Bus>(svc: &Service<B>) -> ODataId {
    svc.system_id().join("BootOptions")
}

async fn resolve_option<B: Bus>(bus: &B, id: &ResourceId) -> Result<Resolved, Error> {
    resolve::resolve(bus, &options_root(), &[iface::BOOT_OPTION], "BootOption", id).await
}

fn string<'a>(body: &'a Map<String, Value>, property: &str) -> Result<Option<&'a str>, Error> {
    body.get(property)
        .map(|v| v.as_str().ok_or_else(|| Error::value_type(property, v)))
        .transpose()
}

fn boolean(body: &Map<String, Value>, property: &str) -> Result<Option<bool>, Error> {
    body.get(property)
        .map(|v| v.as_bool().ok_or_else(|| Error::value_type(property, v)))
        .transpose()
}

fn rejected(id: &str, error: BusError) -> Error {
    Error::Write {
        property: "BootOptionReference".into(),
        value: id.into(),
        error,
    }
}

/// `GET /redfish/v1/Systems/{system}/BootOptions`
pub async fn collection<B: Bus>(svc: &Service<B>, system: &ResourceId) -> Response {
    let resp = AsyncResp::new();
    let result = match svc.check_system(system) {
        Ok(()) => {
            Collection {
                id: options_id(svc),
                odata_type: "#BootOptionCollection.BootOptionCollection",
                name: "Boot Options",
                root: options_root(),
                interfaces: &[iface::BOOT_OPTION],
            }
            .fill(svc.bus(), &resp)
            .await
        }
        Err(err) => Err(err),
    };
    finish(resp, result)
}

/// `GET /redfish/v1/Systems/{system}/BootOptions/{id}`
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
    let option = resolve_option(bus, id).await?;
    let service = option
        .service_for(iface::BOOT_OPTION)
        .ok_or_else(|| Error::Unowned(option.path.clone()))?;
    resp.merge(json!({
        "@odata.id": options_id(svc).join(id),
        "@odata.type": "#BootOption.v1_0_4.BootOption",
        "Id": id.inner(),
        "Name": "Boot Option",
        "BootOptionReference": id.inner(),
    }));
    translate::fetch(
        bus,
        service,
        &option.path,
        iface::BOOT_OPTION,
        resp,
        "",
        BOOT_OPTION_FIELDS,
    )
    .await
}

/// Validated creation request.
#[derive(Debug, PartialEq, Eq)]
struct NewOption {
    id: String,
    display_name: String,
    uefi_device_path: String,
    enabled: bool,
}

fn parse_new_option(body: &Map<String, Value>) -> Result<NewOption, Error> {
    reject_unknown(
        body,
        &[
            "BootOptionReference",
            "UefiDevicePath",
            "DisplayName",
            "BootOptionEnabled",
        ],
    )?;
    let id = string(body, "BootOptionReference")?
        .ok_or_else(|| Error::PropertyMissing("BootOptionReference".into()))?;
    let uefi_device_path = string(body, "UefiDevicePath")?
        .ok_or_else(|| Error::PropertyMissing("UefiDevicePath".into()))?;
    if id.is_empty() || id.contains('/') {
        return Err(Error::PropertyValueIncorrect {
            property: "BootOptionReference".into(),
            value: id.into(),
        });
    }
    Ok(NewOption {
        id: id.into(),
        display_name: string(body, "DisplayName")?.unwrap_or(id).into(),
        uefi_device_path: uefi_device_path.into(),
        enabled: boolean(body, "BootOptionEnabled")?.unwrap_or(true),
    })
}

/// `POST /redfish/v1/Systems/{system}/BootOptions`
pub async fn create<B: Bus>(svc: &Service<B>, system: &ResourceId, body: &[u8]) -> Response {
    let resp = AsyncResp::new();
    let result = add(svc, &resp, system, body).await;
    finish(resp, result)
}

async fn add<B: Bus>(
    svc: &Service<B>,
    resp: &AsyncResp,
    system: &ResourceId,
    body: &[u8],
) -> Result<(), Error> {
    svc.check_system(system)?;
    let option = parse_new_option(&parse_object(body)?)?;
    let bus = svc.bus();
    let root = options_root();
    let existing = resolve::members(bus, &root, &[iface::BOOT_OPTION]).await?;
    if existing.iter().any(|path| path.leaf() == option.id) {
        return Err(Error::ResourceAlreadyExists {
            kind: "BootOption",
            property: "BootOptionReference",
            value: option.id,
        });
    }
    let service = owner(bus, &root, iface::BOOT_OPTION_MANAGER).await?;
    bus.call(
        &service,
        &root,
        iface::BOOT_OPTION_MANAGER,
        "CreateOption",
        vec![
            Variant::String(option.id.clone()),
            Variant::String(option.display_name),
            Variant::String(option.uefi_device_path),
            Variant::Bool(option.enabled),
        ],
    )
    .await
    .map_err(|error| rejected(&option.id, error))?;

    let location = options_id(svc).join(&option.id);
    resp.with(|r| {
        r.set_status(StatusCode::CREATED);
        r.set_header(LOCATION, location.as_str());
    });
    resp.succeed();
    Ok(())
}

/// `PATCH /redfish/v1/Systems/{system}/BootOptions/{id}`
pub async fn patch<B: Bus>(
    svc: &Service<B>,
    system: &ResourceId,
    id: &ResourceId,
    body: &[u8],
) -> Response {
    let resp = AsyncResp::new();
    let result = update(svc, &resp, system, id, body).await;
    finish(resp, result)
}

/// Writes of a patch request as `(bus property, value, request property)`.
fn parse_update(body: &Map<String, Value>) -> Result<Vec<(&'static str, Variant, &'static str)>, Error> {
    for read_only in ["BootOptionReference", "UefiDevicePath"] {
        if body.contains_key(read_only) {
            return Err(Error::PropertyNotWritable(read_only.into()));
        }
    }
    reject_unknown(body, &["DisplayName", "Description", "BootOptionEnabled"])?;
    let mut writes = Vec::new();
    if let Some(name) = string(body, "DisplayName")? {
        writes.push(("DisplayName", Variant::from(name), "DisplayName"));
    }
    if let Some(description) = string(body, "Description")? {
        writes.push(("Description", Variant::from(description), "Description"));
    }
    if let Some(enabled) = boolean(body, "BootOptionEnabled")? {
        writes.push(("Enabled", Variant::Bool(enabled), "BootOptionEnabled"));
    }
    if writes.is_empty() {
        return Err(Error::UnrecognizedRequestBody);
    }
    Ok(writes)
}

async fn update<B: Bus>(
    svc: &Service<B>,
    resp: &AsyncResp,
    system: &ResourceId,
    id: &ResourceId,
    body: &[u8],
) -> Result<(), Error> {
    svc.check_system(system)?;
    let body = parse_object(body)?;
    let writes = parse_update(&body)?;
    let bus = svc.bus();
    let option = resolve_option(bus, id).await?;
    let service = option
        .service_for(iface::BOOT_OPTION)
        .ok_or_else(|| Error::Unowned(option.path.clone()))?;
    for (bus_property, variant, property) in writes {
        write(
            bus,
            (service, &option.path, iface::BOOT_OPTION),
            bus_property,
            variant,
            property,
            &body[property],
        )
        .await?;
    }
    resp.succeed();
    Ok(())
}

/// `DELETE /redfish/v1/Systems/{system}/BootOptions/{id}`
pub async fn delete<B: Bus>(svc: &Service<B>, system: &ResourceId, id: &ResourceId) -> Response {
    let resp = AsyncResp::new();
    let result = remove(svc, &resp, system, id).await;
    finish(resp, result)
}

async fn remove<B: Bus>(
    svc: &Service<B>,
    resp: &AsyncResp,
    system: &ResourceId,
    id: &ResourceId,
) -> Result<(), Error> {
    svc.check_system(system)?;
    let bus = svc.bus();
    let option = resolve_option(bus, id).await?;
    let service = option
        .service_for(iface::BOOT_OPTION)
        .ok_or_else(|| Error::Unowned(option.path.clone()))?;
    bus.call(service, &option.path, iface::OBJECT_DELETE, "Delete", Vec::new())
        .await
        .map_err(|error| rejected(id.inner(), error))?;
    resp.succeed();
    Ok(())
}
