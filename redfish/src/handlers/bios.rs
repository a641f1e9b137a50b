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


//! BIOS attributes and pending settings.
//!
//! The BIOS configuration manager publishes `BaseBIOSTable`, a dictionary
//! of attribute name to
//! `(type, read_only, display_name, description, menu_path, current,
//! default, options)`, where options are `(bound_type, value)` pairs.
//! Writes go to `PendingAttributes`, a dictionary of attribute name to
//! `(type, value)`, and take effect on the next host boot.

use crate::handlers::finish;
use crate::handlers::parse_object;
use crate::handlers::reject_unknown;
use crate::handlers::write;
use crate::iface;
use crate::translate::tables;
use crate::AsyncResp;
use crate::Error;
use crate::ODataId;
use crate::ResourceId;
use crate::Response;
use crate::Service;
use nv_bmcweb_core::Bus;
use nv_bmcweb_core::ObjectPath;
use nv_bmcweb_core::ServiceName;
use nv_bmcweb_core::Variant;
use serde_json::json;
use serde_json::Map;
use serde_json::Value;

/// One entry of `BaseBIOSTable`.
#[derive(Debug, Clone, PartialEq)]
struct Attribute {
    backend_type: String,
    read_only: bool,
    current: Variant,
    options: Vec<(String, Variant)>,
}

fn suffix(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

impl Attribute {
    fn kind(&self) -> Option<&'static str> {
        tables::translate(tables::BIOS_ATTRIBUTE_TYPE, &self.backend_type)
    }

    fn bound(&self, bound: &str) -> Option<i64> {
        self.options
            .iter()
            .find(|(b, _)| suffix(b) == bound)
            .and_then(|(_, v)| v.as_integer())
    }

    fn allows(&self, value: &str) -> bool {
        self.options
            .iter()
            .any(|(b, v)| suffix(b) == "OneOf" && v.as_str() == Some(value))
    }
}

type Table = Vec<(String, Attribute)>;

fn malformed(detail: impl Into<String>) -> Error {
    Error::Malformed {
        what: "BIOS table",
        detail: detail.into(),
    }
}

fn parse_option(option: &Variant) -> Result<(String, Variant), Error> {
    match option {
        Variant::Struct(pair) => match pair.as_slice() {
            [Variant::String(bound), value] => Ok((bound.clone(), value.unboxed().clone())),
            _ => Err(malformed("option is not (s, v)")),
        },
        other => Err(malformed(format!("option has signature {}", other.signature()))),
    }
}

fn parse_attribute(name: &str, entry: &Variant) -> Result<Attribute, Error> {
    let Variant::Struct(fields) = entry.unboxed() else {
        return Err(malformed(format!("{name} is not a structure")));
    };
    match fields.as_slice() {
        [Variant::String(backend_type), Variant::Bool(read_only), _, _, _, current, _, Variant::Array(options)] => {
            Ok(Attribute {
                backend_type: backend_type.clone(),
                read_only: *read_only,
                current: current.unboxed().clone(),
                options: options.iter().map(parse_option).collect::<Result<_, _>>()?,
            })
        }
        _ => Err(malformed(format!("{name} has unexpected layout"))),
    }
}

fn parse_table(table: &Variant) -> Result<Table, Error> {
    let Variant::Dict(entries) = table.unboxed() else {
        return Err(malformed("BaseBIOSTable is not a dictionary"));
    };
    entries
        .iter()
        .map(|(name, entry)| Ok((name.clone(), parse_attribute(name, entry)?)))
        .collect()
}

/// JSON form of an attribute value.
fn to_json(v: &Variant) -> Option<Value> {
    match v.unboxed() {
        Variant::String(s) => Some(s.clone().into()),
        Variant::Bool(b) => Some((*b).into()),
        Variant::Double(d) => Some((*d).into()),
        other => other.as_integer().map(Value::from),
    }
}

/// Check a requested attribute value against its table entry and produce
/// the pending entry.
fn validate(table: &Table, name: &str, value: &Value) -> Result<Variant, Error> {
    let attr = table
        .iter()
        .find(|(n, _)| n == name)
        .map(|(_, attr)| attr)
        .ok_or_else(|| Error::PropertyUnknown(name.into()))?;
    if attr.read_only {
        return Err(Error::PropertyNotWritable(name.into()));
    }
    let typed = match attr.kind() {
        Some("Enumeration") => {
            let s = value.as_str().ok_or_else(|| Error::value_type(name, value))?;
            if !attr.allows(s) {
                return Err(Error::PropertyValueNotInList {
                    property: name.into(),
                    value: s.into(),
                });
            }
            Variant::String(s.into())
        }
        Some("String" | "Password") => value
            .as_str()
            .map(|s| Variant::String(s.into()))
            .ok_or_else(|| Error::value_type(name, value))?,
        Some("Integer") => {
            let n = value.as_i64().ok_or_else(|| Error::value_type(name, value))?;
            let below = attr.bound("LowerBound").is_some_and(|lower| n < lower);
            let above = attr.bound("UpperBound").is_some_and(|upper| n > upper);
            if below || above {
                return Err(Error::PropertyValueIncorrect {
                    property: name.into(),
                    value: n.to_string(),
                });
            }
            Variant::Int64(n)
        }
        Some("Boolean") => value
            .as_bool()
            .map(Variant::Bool)
            .ok_or_else(|| Error::value_type(name, value))?,
        _ => return Err(malformed(format!("{name} has type {}", attr.backend_type))),
    };
    Ok(Variant::Struct(vec![
        Variant::String(attr.backend_type.clone()),
        Variant::Variant(Box::new(typed)),
    ]))
}

fn validate_all(table: &Table, attributes: &Map<String, Value>) -> Result<Vec<(String, Variant)>, Error> {
    attributes
        .iter()
        .map(|(name, value)| Ok((name.clone(), validate(table, name, value)?)))
        .collect()
}

/// `Attributes` object of a settings request.
fn requested_attributes(body: &[u8]) -> Result<Map<String, Value>, Error> {
    let mut body = parse_object(body)?;
    let attributes = body
        .remove("Attributes")
        .ok_or(Error::UnrecognizedRequestBody)?;
    reject_unknown(&body, &[])?;
    match attributes {
        Value::Object(attributes) => Ok(attributes),
        other => Err(Error::value_type("Attributes", &other)),
    }
}

fn manager() -> (ServiceName, ObjectPath) {
    (
        ServiceName::from(iface::BIOS_SERVICE),
        ObjectPath::from(iface::BIOS_PATH),
    )
}

async fn read_table<B: Bus>(bus: &B) -> Result<Table, Error> {
    let (service, path) = manager();
    let table = bus
        .get_property(&service, &path, iface::BIOS_MANAGER, "BaseBIOSTable")
        .await?;
    parse_table(&table)
}

async fn read_pending<B: Bus>(bus: &B) -> Result<Vec<(String, Variant)>, Error> {
    let (service, path) = manager();
    match bus
        .get_property(&service, &path, iface::BIOS_MANAGER, "PendingAttributes")
        .await?
        .unboxed()
    {
        Variant::Dict(entries) => Ok(entries.clone()),
        other => Err(malformed(format!(
            "PendingAttributes has signature {}",
            other.signature()
        ))),
    }
}

async fn write_pending<B: Bus>(
    bus: &B,
    pending: Vec<(String, Variant)>,
    request: Map<String, Value>,
) -> Result<(), Error> {
    let (service, path) = manager();
    write(
        bus,
        (&service, &path, iface::BIOS_MANAGER),
        "PendingAttributes",
        Variant::Dict(pending),
        "Attributes",
        &Value::Object(request),
    )
    .await
}

fn bios_id<B: Bus>(svc: &Service<B>) -> ODataId {
    svc.system_id().join("Bios")
}

/// `GET /redfish/v1/Systems/{system}/Bios`
pub async fn get<B: Bus>(svc: &Service<B>, system: &ResourceId) -> Response {
    let resp = AsyncResp::new();
    let result = fill(svc, &resp, system).await;
    finish(resp, result)
}

async fn fill<B: Bus>(svc: &Service<B>, resp: &AsyncResp, system: &ResourceId) -> Result<(), Error> {
    svc.check_system(system)?;
    let odata_id = bios_id(svc);
    resp.merge(json!({
        "@odata.id": odata_id,
        "@odata.type": "#Bios.v1_2_0.Bios",
        "Id": "BIOS",
        "Name": "BIOS Configuration",
        "@Redfish.Settings": {
            "@odata.type": "#Settings.v1_3_5.Settings",
            "SettingsObject": odata_id.join("Settings").link(),
        },
        "Actions": {
            "#Bios.ResetBios": {
                "target": odata_id.join("Actions").join("Bios.ResetBios"),
            },
        },
    }));
    let attributes = read_table(svc.bus())
        .await?
        .into_iter()
        .filter(|(_, attr)| attr.kind() != Some("Password"))
        .filter_map(|(name, attr)| to_json(&attr.current).map(|v| (name, v)))
        .collect::<Map<_, _>>();
    resp.set("/Attributes", attributes);
    Ok(())
}

/// `GET /redfish/v1/Systems/{system}/Bios/Settings`
pub async fn settings<B: Bus>(svc: &Service<B>, system: &ResourceId) -> Response {
    let resp = AsyncResp::new();
    let result = fill_settings(svc, &resp, system).await;
    finish(resp, result)
}

async fn fill_settings<B: Bus>(
    svc: &Service<B>,
    resp: &AsyncResp,
    system: &ResourceId,
) -> Result<(), Error> {
    svc.check_system(system)?;
    resp.merge(json!({
        "@odata.id": bios_id(svc).join("Settings"),
        "@odata.type": "#Bios.v1_2_0.Bios",
        "Id": "BIOS_Settings",
        "Name": "BIOS Configuration Pending Settings",
    }));
    let mut attributes = Map::new();
    for (name, entry) in read_pending(svc.bus()).await? {
        let value = match entry.unboxed() {
            Variant::Struct(fields) => fields.get(1).and_then(to_json),
            _ => None,
        }
        .ok_or_else(|| malformed(format!("pending {name} has unexpected layout")))?;
        attributes.insert(name, value);
    }
    resp.set("/Attributes", attributes);
    Ok(())
}

/// `PATCH /redfish/v1/Systems/{system}/Bios/Settings`
///
/// Validated attributes are merged into the pending set.
pub async fn patch_settings<B: Bus>(svc: &Service<B>, system: &ResourceId, body: &[u8]) -> Response {
    let resp = AsyncResp::new();
    let result = update(svc, &resp, system, body, true).await;
    finish(resp, result)
}

/// `PUT /redfish/v1/Systems/{system}/Bios/Settings`
///
/// Validated attributes replace the pending set.
pub async fn put_settings<B: Bus>(svc: &Service<B>, system: &ResourceId, body: &[u8]) -> Response {
    let resp = AsyncResp::new();
    let result = update(svc, &resp, system, body, false).await;
    finish(resp, result)
}

async fn update<B: Bus>(
    svc: &Service<B>,
    resp: &AsyncResp,
    system: &ResourceId,
    body: &[u8],
    merge: bool,
) -> Result<(), Error> {
    svc.check_system(system)?;
    let request = requested_attributes(body)?;
    if merge && request.is_empty() {
        resp.succeed();
        return Ok(());
    }
    let bus = svc.bus();
    let table = read_table(bus).await?;
    let requested = validate_all(&table, &request)?;
    let pending = if merge {
        let mut pending = read_pending(bus).await?;
        for (name, entry) in requested {
            match pending.iter_mut().find(|(n, _)| *n == name) {
                Some(slot) => slot.1 = entry,
                None => pending.push((name, entry)),
            }
        }
        pending
    } else {
        requested
    };
    write_pending(bus, pending, request).await?;
    resp.succeed();
    Ok(())
}

/// `POST /redfish/v1/Systems/{system}/Bios/Actions/Bios.ResetBios`
pub async fn reset<B: Bus>(svc: &Service<B>, system: &ResourceId) -> Response {
    let resp = AsyncResp::new();
    let result = request_reset(svc, &resp, system).await;
    finish(resp, result)
}

async fn request_reset<B: Bus>(
    svc: &Service<B>,
    resp: &AsyncResp,
    system: &ResourceId,
) -> Result<(), Error> {
    svc.check_system(system)?;
    let (service, path) = manager();
    write(
        svc.bus(),
        (&service, &path, iface::BIOS_MANAGER),
        "ResetBIOSSettings",
        Variant::String(iface::BIOS_RESET_FACTORY.into()),
        "ResetBios",
        &Value::from("FactoryDefaults"),
    )
    .await?;
    resp.succeed();
    Ok(())
}
