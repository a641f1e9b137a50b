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


//! Backend property translation.
//!
//! A handler describes how one interface maps to the Redfish document as a
//! static list of [`Field`]s. Each field names a bus property, a JSON
//! pointer relative to the scope being filled and a [`Codec`]. Every
//! extraction narrows the dynamically typed [`Variant`] to the exact type
//! the codec expects.
//!
//! Failure policy is per field:
//! - [`Requirement::Required`]: missing or mistyped value is an internal
//!   error.
//! - [`Requirement::Optional`]: missing or mistyped value is skipped.
//!
//! Fields are translated independently. Valid fields are written even when
//! another field of the same bag fails; at most one error is reported per
//! bag.

pub mod tables;

use crate::AsyncResp;
use crate::Error;
use nv_bmcweb_core::Bus;
use nv_bmcweb_core::ObjectPath;
use nv_bmcweb_core::PropertyBag;
use nv_bmcweb_core::ServiceName;
use nv_bmcweb_core::TypeMismatch;
use nv_bmcweb_core::Variant;
use serde_json::Value;
use tables::Table;
use tracing::debug;

/// Exact variant arm a codec accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Bool,
    Byte,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Double,
    String,
    ObjectPath,
    StringList,
    Uint16List,
}

impl Kind {
    #[must_use]
    pub const fn signature(self) -> &'static str {
        match self {
            Self::Bool => "b",
            Self::Byte => "y",
            Self::Int16 => "n",
            Self::Uint16 => "q",
            Self::Int32 => "i",
            Self::Uint32 => "u",
            Self::Int64 => "x",
            Self::Uint64 => "t",
            Self::Double => "d",
            Self::String => "s",
            Self::ObjectPath => "o",
            Self::StringList => "as",
            Self::Uint16List => "aq",
        }
    }

    /// Narrow `v` to this kind as a JSON value.
    #[must_use]
    pub fn narrow(self, v: &Variant) -> Option<Value> {
        match self {
            Self::Bool => v.get::<bool>().map(Value::from),
            Self::Byte => v.get::<u8>().map(Value::from),
            Self::Int16 => v.get::<i16>().map(Value::from),
            Self::Uint16 => v.get::<u16>().map(Value::from),
            Self::Int32 => v.get::<i32>().map(Value::from),
            Self::Uint32 => v.get::<u32>().map(Value::from),
            Self::Int64 => v.get::<i64>().map(Value::from),
            Self::Uint64 => v.get::<u64>().map(Value::from),
            Self::Double => v.get::<f64>().map(Value::from),
            Self::String => v.get::<String>().map(Value::from),
            Self::ObjectPath => v.get::<ObjectPath>().map(|p| Value::from(p.to_string())),
            Self::StringList => v.get::<Vec<String>>().map(Value::from),
            Self::Uint16List => v.get::<Vec<u16>>().map(Value::from),
        }
    }

    /// Narrow an integer kind to `u64`. Negative values do not fit.
    fn unsigned(self, v: &Variant) -> Option<u64> {
        match self {
            Self::Byte => v.get::<u8>().map(u64::from),
            Self::Uint16 => v.get::<u16>().map(u64::from),
            Self::Uint32 => v.get::<u32>().map(u64::from),
            Self::Uint64 => v.get::<u64>(),
            Self::Int16 => v.get::<i16>().and_then(|n| u64::try_from(n).ok()),
            Self::Int32 => v.get::<i32>().and_then(|n| u64::try_from(n).ok()),
            Self::Int64 => v.get::<i64>().and_then(|n| u64::try_from(n).ok()),
            _ => None,
        }
    }
}

/// How a bus value becomes a JSON value.
#[derive(Debug, Clone, Copy)]
pub enum Codec {
    /// Copy the value as is.
    Identity(Kind),
    /// Translate an enum string by its suffix. Unknown values are dropped.
    Enum(&'static Table),
    /// Translate every string of a list; unknown values are dropped.
    EnumList(&'static Table),
    /// KiB to MiB (shift right by 10, truncating).
    UnitShift(Kind),
    /// `0x` prefixed, zero padded, upper case hex of `width` digits.
    Hex { kind: Kind, width: usize },
    /// Boolean that writes `when_false` at the field pointer when false and
    /// nothing when true.
    Gate(&'static str),
    /// Custom conversion of a narrowed value. `None` drops the field.
    Map(Kind, fn(Value) -> Option<Value>),
}

impl Codec {
    const fn kind(self) -> Kind {
        match self {
            Self::Identity(kind)
            | Self::UnitShift(kind)
            | Self::Hex { kind, .. }
            | Self::Map(kind, _) => kind,
            Self::Enum(_) => Kind::String,
            Self::EnumList(_) => Kind::StringList,
            Self::Gate(_) => Kind::Bool,
        }
    }

    /// Convert `v`. `Ok(None)` means "write nothing".
    fn apply(self, v: &Variant) -> Result<Option<Value>, &'static str> {
        let kind = self.kind();
        let mismatch = || kind.signature();
        match self {
            Self::Identity(kind) => kind.narrow(v).map(Some).ok_or_else(mismatch),
            Self::Enum(table) => v
                .get::<String>()
                .map(|s| tables::translate(table, &s).map(Value::from))
                .ok_or_else(mismatch),
            Self::EnumList(table) => v
                .get::<Vec<String>>()
                .map(|list| {
                    Some(Value::from(
                        list.iter()
                            .filter_map(|s| tables::translate(table, s))
                            .collect::<Vec<_>>(),
                    ))
                })
                .ok_or_else(mismatch),
            Self::UnitShift(kind) => kind
                .unsigned(v)
                .map(|kib| Some(Value::from(kib >> 10)))
                .ok_or_else(mismatch),
            Self::Hex { kind, width } => kind
                .unsigned(v)
                .map(|n| Some(Value::from(hex(n, width))))
                .ok_or_else(mismatch),
            Self::Gate(when_false) => v
                .get::<bool>()
                .map(|ok| (!ok).then(|| Value::from(when_false)))
                .ok_or_else(mismatch),
            Self::Map(kind, map) => kind.narrow(v).map(map).ok_or_else(mismatch),
        }
    }
}

/// `0x` prefixed upper case hex, zero padded to `width` digits.
#[must_use]
pub fn hex(n: u64, width: usize) -> String {
    format!("0x{n:0width$X}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Required,
    Optional,
}

/// Mapping of one bus property to one JSON field.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub property: &'static str,
    pub pointer: &'static str,
    pub codec: Codec,
    pub requirement: Requirement,
}

impl Field {
    #[must_use]
    pub const fn optional(property: &'static str, pointer: &'static str, codec: Codec) -> Self {
        Self {
            property,
            pointer,
            codec,
            requirement: Requirement::Optional,
        }
    }

    #[must_use]
    pub const fn required(property: &'static str, pointer: &'static str, codec: Codec) -> Self {
        Self {
            property,
            pointer,
            codec,
            requirement: Requirement::Required,
        }
    }

    fn translate(&self, bag: &PropertyBag) -> Result<Option<Value>, Error> {
        let Some(v) = bag.get(self.property) else {
            return match self.requirement {
                Requirement::Required => Err(Error::MissingProperty(self.property)),
                Requirement::Optional => Ok(None),
            };
        };
        let value = self.codec.apply(v).map_err(|expected| {
            Error::Type(TypeMismatch {
                property: self.property.into(),
                expected,
                found: v.signature(),
            })
        });
        match (value, self.requirement) {
            (Ok(value), _) => {
                if value.is_none() && matches!(self.codec, Codec::Enum(_)) {
                    debug!(property = self.property, value = ?v, "unknown enum value dropped");
                }
                Ok(value)
            }
            (Err(err), Requirement::Required) => Err(err),
            (Err(err), Requirement::Optional) => {
                debug!(property = self.property, error = %err, "optional property skipped");
                Ok(None)
            }
        }
    }
}

/// Apply `fields` of `bag` to `doc`.
///
/// # Errors
///
/// The first failure of a required field. All other fields are still
/// applied.
pub fn translate_into(doc: &mut Value, bag: &PropertyBag, fields: &[Field]) -> Result<(), Error> {
    let mut failure = None;
    for field in fields {
        match field.translate(bag) {
            Ok(Some(value)) => crate::json::set(doc, field.pointer, value),
            Ok(None) => {}
            Err(err) => {
                failure.get_or_insert(err);
            }
        }
    }
    failure.map_or(Ok(()), Err)
}

/// Apply `fields` of `bag` to the response below `scope`.
///
/// # Errors
///
/// See [`translate_into`].
pub fn translate(resp: &AsyncResp, scope: &str, bag: &PropertyBag, fields: &[Field]) -> Result<(), Error> {
    let mut patch = Value::Null;
    let result = translate_into(&mut patch, bag, fields);
    if !patch.is_null() {
        resp.with(|r| {
            let body = r.body_mut();
            if scope.is_empty() {
                crate::json::merge(body, patch);
            } else {
                let mut scoped = Value::Null;
                crate::json::set(&mut scoped, scope, patch);
                crate::json::merge(body, scoped);
            }
        });
    }
    result
}

/// Read all properties of `interface` and translate them.
///
/// # Errors
///
/// Bus failure or translation failure of a required field.
pub async fn fetch<B: Bus>(
    bus: &B,
    service: &ServiceName,
    path: &ObjectPath,
    interface: &str,
    resp: &AsyncResp,
    scope: &str,
    fields: &[Field],
) -> Result<(), Error> {
    let bag = bus.get_all_properties(service, path, interface).await?;
    translate(resp, scope, &bag, fields)
}
