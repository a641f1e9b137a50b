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


//! Dynamically typed bus values
//!
//! Every property and method argument on the inventory bus is a tagged
//! value. [`Variant`] is the sum type of the shapes the engine consumes and
//! [`FromVariant`] is the narrowing step: a value is extracted only when the
//! stored arm matches the requested Rust type exactly. There is no implicit
//! widening (`u16` is not readable as `u32`) because the bus does not do it
//! either.
//!
//! The serde form uses D-Bus signature letters as tags, which is also the
//! format of JSON inventory files:
//!
//! ```rust
//! use nv_bmcweb_core::Variant;
//!
//! let v: Variant = serde_json::from_str(r#"{"q": 4}"#).unwrap();
//! assert_eq!(v.get::<u16>(), Some(4));
//! assert_eq!(v.get::<u32>(), None);
//! ```

use crate::ObjectPath;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// Tagged bus value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Variant {
    #[serde(rename = "s")]
    String(String),
    #[serde(rename = "o")]
    ObjectPath(ObjectPath),
    #[serde(rename = "b")]
    Bool(bool),
    #[serde(rename = "y")]
    Byte(u8),
    #[serde(rename = "n")]
    Int16(i16),
    #[serde(rename = "q")]
    Uint16(u16),
    #[serde(rename = "i")]
    Int32(i32),
    #[serde(rename = "u")]
    Uint32(u32),
    #[serde(rename = "x")]
    Int64(i64),
    #[serde(rename = "t")]
    Uint64(u64),
    #[serde(rename = "d")]
    Double(f64),
    #[serde(rename = "as")]
    StringList(Vec<String>),
    /// Homogeneous array of any other shape (`a(sss)`, `aq`, ...).
    #[serde(rename = "a")]
    Array(Vec<Variant>),
    /// Structure (tuple) of values.
    #[serde(rename = "r")]
    Struct(Vec<Variant>),
    /// String-keyed dictionary. Entry order is the order sent by the bus.
    #[serde(rename = "e")]
    Dict(Vec<(String, Variant)>),
    /// Value boxed into a nested variant (`v`).
    #[serde(rename = "v")]
    Variant(Box<Variant>),
}

impl Variant {
    /// Narrow the value to `T`.
    #[must_use]
    pub fn get<T: FromVariant>(&self) -> Option<T> {
        T::from_variant(self)
    }

    /// Borrow string payload.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    /// Remove one level of `v` boxing if present.
    #[must_use]
    pub fn unboxed(&self) -> &Self {
        match self {
            Self::Variant(inner) => inner,
            v => v,
        }
    }

    /// Any signed or unsigned integer arm widened to `i64`.
    ///
    /// `u64` values above `i64::MAX` do not fit and yield `None`.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match *self {
            Self::Byte(v) => Some(v.into()),
            Self::Int16(v) => Some(v.into()),
            Self::Uint16(v) => Some(v.into()),
            Self::Int32(v) => Some(v.into()),
            Self::Uint32(v) => Some(v.into()),
            Self::Int64(v) => Some(v),
            Self::Uint64(v) => i64::try_from(v).ok(),
            _ => None,
        }
    }

    /// D-Bus type signature of the stored arm.
    #[must_use]
    pub const fn signature(&self) -> &'static str {
        match self {
            Self::String(_) => "s",
            Self::ObjectPath(_) => "o",
            Self::Bool(_) => "b",
            Self::Byte(_) => "y",
            Self::Int16(_) => "n",
            Self::Uint16(_) => "q",
            Self::Int32(_) => "i",
            Self::Uint32(_) => "u",
            Self::Int64(_) => "x",
            Self::Uint64(_) => "t",
            Self::Double(_) => "d",
            Self::StringList(_) => "as",
            Self::Array(_) => "a",
            Self::Struct(_) => "r",
            Self::Dict(_) => "a{sv}",
            Self::Variant(_) => "v",
        }
    }
}

/// Type-narrowing accessor for [`Variant`].
pub trait FromVariant: Sized {
    /// Signature of the arm this type is read from.
    const SIGNATURE: &'static str;

    /// Extract the value if the arm matches.
    fn from_variant(v: &Variant) -> Option<Self>;
}

macro_rules! from_variant {
    ($($ty:ty => $arm:ident, $sig:literal;)*) => {
        $(
            impl FromVariant for $ty {
                const SIGNATURE: &'static str = $sig;

                fn from_variant(v: &Variant) -> Option<Self> {
                    match v {
                        Variant::$arm(inner) => Some(inner.clone()),
                        _ => None,
                    }
                }
            }

            impl From<$ty> for Variant {
                fn from(v: $ty) -> Self {
                    Self::$arm(v)
                }
            }
        )*
    };
}

from_variant! {
    String => String, "s";
    ObjectPath => ObjectPath, "o";
    bool => Bool, "b";
    u8 => Byte, "y";
    i16 => Int16, "n";
    u16 => Uint16, "q";
    i32 => Int32, "i";
    u32 => Uint32, "u";
    i64 => Int64, "x";
    u64 => Uint64, "t";
    f64 => Double, "d";
    Vec<String> => StringList, "as";
}

impl From<&str> for Variant {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl FromVariant for Vec<u16> {
    const SIGNATURE: &'static str = "aq";

    fn from_variant(v: &Variant) -> Option<Self> {
        match v {
            Variant::Array(items) => items.iter().map(u16::from_variant).collect(),
            _ => None,
        }
    }
}

/// Property type did not match the accessor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("property {property}: expected type {expected}, found {found}")]
pub struct TypeMismatch {
    /// Name of the property.
    pub property: String,
    /// Signature the caller asked for.
    pub expected: &'static str,
    /// Signature stored on the bus.
    pub found: &'static str,
}

/// Property name to value map of one interface of one object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyBag(BTreeMap<String, Variant>);

impl PropertyBag {
    /// Create an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a property.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Variant>) {
        self.0.insert(name.into(), value.into());
    }

    /// Raw value of the property.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Variant> {
        self.0.get(name)
    }

    /// Typed value of the property.
    ///
    /// Returns `Ok(None)` when the property is absent.
    ///
    /// # Errors
    ///
    /// Returns [`TypeMismatch`] when the property is present with a different
    /// type.
    pub fn typed<T: FromVariant>(&self, name: &str) -> Result<Option<T>, TypeMismatch> {
        self.0.get(name).map_or(Ok(None), |v| {
            T::from_variant(v).map(Some).ok_or_else(|| TypeMismatch {
                property: name.into(),
                expected: T::SIGNATURE,
                found: v.signature(),
            })
        })
    }

    /// Iterate over properties in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Variant)> {
        self.0.iter()
    }

    /// Number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the bag has no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Variant)> for PropertyBag {
    fn from_iter<I: IntoIterator<Item = (String, Variant)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<PropertyBag> for Variant {
    fn from(bag: PropertyBag) -> Self {
        Self::Dict(
            bag.0
                .into_iter()
                .map(|(k, v)| (k, Self::Variant(Box::new(v))))
                .collect(),
        )
    }
}

impl TryFrom<Variant> for PropertyBag {
    type Error = Variant;

    /// Decode an `a{sv}` reply. Values are unboxed from their `v` wrapper.
    fn try_from(v: Variant) -> Result<Self, Self::Error> {
        match v {
            Variant::Dict(entries) => Ok(entries
                .into_iter()
                .map(|(k, v)| match v {
                    Variant::Variant(inner) => (k, *inner),
                    v => (k, v),
                })
                .collect()),
            v => Err(v),
        }
    }
}
