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


//! Resource handlers.
//!
//! Every handler follows the same shape: resolve the primary object, then
//! dispatch one translation per interface of its owning service and one
//! link fetch per association into a [`FanOut`], and settle it. Writes
//! validate the whole request body before the first bus call.

pub mod bios;
pub mod boot_options;
pub mod chassis;
pub mod collection;
pub mod environment_metrics;
pub mod fabric;
pub mod memory;
pub mod pcie_slots;
pub mod processor;
pub mod sensors;
pub mod service_root;
pub mod system;

use crate::association;
use crate::translate::Codec;
use crate::translate::Field;
use crate::translate::Kind;
use crate::AsyncResp;
use crate::Error;
use crate::ODataId;
use crate::Response;
use nv_bmcweb_core::Bus;
use nv_bmcweb_core::ObjectPath;
use nv_bmcweb_core::ServiceName;
use nv_bmcweb_core::Variant;
use serde_json::json;
use serde_json::Map;
use serde_json::Value;

pub(crate) const ASSET_FIELDS: &[Field] = &[
    Field::optional("PartNumber", "/PartNumber", Codec::Identity(Kind::String)),
    Field::optional("SerialNumber", "/SerialNumber", Codec::Identity(Kind::String)),
    Field::optional("Manufacturer", "/Manufacturer", Codec::Identity(Kind::String)),
    Field::optional("Model", "/Model", Codec::Identity(Kind::String)),
    Field::optional("SparePartNumber", "/SparePartNumber", Codec::Identity(Kind::String)),
];

pub(crate) const PRESENT_FIELDS: &[Field] =
    &[Field::optional("Present", "/Status/State", Codec::Gate("Absent"))];

pub(crate) const FUNCTIONAL_FIELDS: &[Field] =
    &[Field::optional("Functional", "/Status/Health", Codec::Gate("Critical"))];

pub(crate) const LOCATION_FIELDS: &[Field] = &[Field::optional(
    "LocationCode",
    "/Location/PartLocation/ServiceLabel",
    Codec::Identity(Kind::String),
)];

/// Fields shared by all inventory items for the common decorators.
pub(crate) fn decorator_fields(interface: &str) -> Option<&'static [Field]> {
    match interface {
        crate::iface::ASSET => Some(ASSET_FIELDS),
        crate::iface::ITEM => Some(PRESENT_FIELDS),
        crate::iface::OPERATIONAL_STATUS => Some(FUNCTIONAL_FIELDS),
        crate::iface::LOCATION_CODE => Some(LOCATION_FIELDS),
        _ => None,
    }
}

/// Default status written before any translation runs.
pub(crate) fn status_ok() -> Value {
    json!({"State": "Enabled", "Health": "OK"})
}

/// Record the outcome of a handler and take the response.
pub(crate) fn finish(resp: AsyncResp, result: Result<(), Error>) -> Response {
    if let Err(err) = result {
        resp.fail(&err);
    }
    resp.into_response()
}

/// Parse a request body that must be a JSON object.
pub(crate) fn parse_object(body: &[u8]) -> Result<Map<String, Value>, Error> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(Error::UnrecognizedRequestBody),
        Err(err) => Err(Error::MalformedJson(err)),
    }
}

/// Reject keys of `body` not in `allowed`.
pub(crate) fn reject_unknown(body: &Map<String, Value>, allowed: &[&str]) -> Result<(), Error> {
    body.keys()
        .find(|key| !allowed.contains(&key.as_str()))
        .map_or(Ok(()), |key| Err(Error::PropertyUnknown(key.clone())))
}

/// Owning service of `path` for `interface`, asked from the mapper.
pub(crate) async fn owner<B: Bus>(
    bus: &B,
    path: &ObjectPath,
    interface: &str,
) -> Result<ServiceName, Error> {
    bus.get_object(path, &[interface])
        .await?
        .first()
        .map(|(service, _)| service.clone())
        .ok_or_else(|| Error::Unowned(path.clone()))
}

/// Set one property; failures are reported against `property`/`value`
/// of the request.
pub(crate) async fn write<B: Bus>(
    bus: &B,
    target: (&ServiceName, &ObjectPath, &str),
    bus_property: &str,
    variant: Variant,
    property: &str,
    value: &Value,
) -> Result<(), Error> {
    let (service, path, interface) = target;
    bus.set_property(service, path, interface, bus_property, variant)
        .await
        .map_err(|error| Error::Write {
            property: property.into(),
            value: crate::error::display_value(value),
            error,
        })
}

/// Link the first endpoint of association `name` at `pointer`.
pub(crate) async fn link_first<B: Bus>(
    bus: &B,
    resp: &AsyncResp,
    path: &ObjectPath,
    name: &str,
    pointer: &str,
    uri: impl Fn(&ObjectPath) -> ODataId + Send,
) -> Result<(), Error> {
    if let Some(first) = association::walk(bus, path, name).await?.first() {
        resp.set(pointer, uri(first).link());
    }
    Ok(())
}

/// Append every endpoint of association `name` to the array at `pointer`.
///
/// An existing but empty association yields an empty array; an absent one
/// writes nothing.
pub(crate) async fn link_all<B: Bus>(
    bus: &B,
    resp: &AsyncResp,
    path: &ObjectPath,
    name: &str,
    pointer: &str,
    uri: impl Fn(&ObjectPath) -> ODataId + Send,
) -> Result<(), Error> {
    let assoc = association::walk(bus, path, name).await?;
    if !assoc.is_absent() {
        resp.extend(pointer, assoc.endpoints().iter().map(|p| uri(p).link()));
    }
    Ok(())
}
