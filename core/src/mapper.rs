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


//! Object mapper vocabulary.
//!
//! The mapper indexes which services implement which interfaces on which
//! object paths. Its replies are nested dictionaries; this module decodes
//! them into [`ServiceMap`] and [`SubTree`] once, at the bus boundary.

use crate::BusError;
use crate::ObjectPath;
use crate::ServiceName;
use crate::Variant;

/// Mapper service name.
pub const MAPPER_SERVICE: &str = "xyz.openbmc_project.ObjectMapper";
/// Mapper object path.
pub const MAPPER_PATH: &str = "/xyz/openbmc_project/object_mapper";
/// Mapper interface.
pub const MAPPER_INTERFACE: &str = "xyz.openbmc_project.ObjectMapper";
/// Interface of synthetic association objects.
pub const ASSOCIATION_INTERFACE: &str = "xyz.openbmc_project.Association";
/// Property of association objects holding related paths.
pub const ASSOCIATION_ENDPOINTS: &str = "endpoints";

/// Services implementing an object, each with the interfaces it provides.
///
/// Order is the order reported by the mapper. By convention the first entry
/// is treated as the owner of the object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceMap(Vec<(ServiceName, Vec<String>)>);

impl ServiceMap {
    /// Create a service map from entries.
    #[must_use]
    pub const fn new(entries: Vec<(ServiceName, Vec<String>)>) -> Self {
        Self(entries)
    }

    /// First service with its interfaces.
    #[must_use]
    pub fn first(&self) -> Option<(&ServiceName, &[String])> {
        self.0.first().map(|(s, i)| (s, i.as_slice()))
    }

    /// Returns true if no service implements the object.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over services.
    pub fn iter(&self) -> impl Iterator<Item = (&ServiceName, &[String])> {
        self.0.iter().map(|(s, i)| (s, i.as_slice()))
    }

    /// Iterate over every (service, interface) pair.
    pub fn interfaces(&self) -> impl Iterator<Item = (&ServiceName, &str)> {
        self.0
            .iter()
            .flat_map(|(s, ifaces)| ifaces.iter().map(move |i| (s, i.as_str())))
    }

    /// Returns true if any service implements `interface`.
    #[must_use]
    pub fn implements(&self, interface: &str) -> bool {
        self.interfaces().any(|(_, i)| i == interface)
    }

    /// First service implementing `interface`.
    #[must_use]
    pub fn service_for(&self, interface: &str) -> Option<&ServiceName> {
        self.interfaces()
            .find_map(|(s, i)| (i == interface).then_some(s))
    }
}

impl From<ServiceMap> for Variant {
    fn from(map: ServiceMap) -> Self {
        Self::Dict(
            map.0
                .into_iter()
                .map(|(s, i)| (s.as_str().to_string(), Self::StringList(i)))
                .collect(),
        )
    }
}

impl TryFrom<Variant> for ServiceMap {
    type Error = BusError;

    fn try_from(v: Variant) -> Result<Self, BusError> {
        match v {
            Variant::Dict(entries) => entries
                .into_iter()
                .map(|(service, ifaces)| match ifaces {
                    Variant::StringList(ifaces) => Ok((ServiceName::from(service), ifaces)),
                    other => Err(BusError::bad_reply("as", &other)),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Self),
            other => Err(BusError::bad_reply("a{sas}", &other)),
        }
    }
}

/// Result of a subtree query: matching paths with their service maps.
pub type SubTree = Vec<(ObjectPath, ServiceMap)>;

/// Encode a subtree as the mapper sends it (`a{sa{sas}}`).
#[must_use]
pub fn encode_sub_tree(tree: SubTree) -> Variant {
    Variant::Dict(
        tree.into_iter()
            .map(|(p, m)| (p.as_str().to_string(), m.into()))
            .collect(),
    )
}

pub(crate) fn decode_sub_tree(v: Variant) -> Result<SubTree, BusError> {
    match v {
        Variant::Dict(entries) => entries
            .into_iter()
            .map(|(path, map)| {
                ServiceMap::try_from(map).map(|map| (ObjectPath::from(path), map))
            })
            .collect(),
        other => Err(BusError::bad_reply("a{sa{sas}}", &other)),
    }
}

pub(crate) fn decode_paths(v: Variant) -> Result<Vec<ObjectPath>, BusError> {
    match v {
        Variant::StringList(paths) => Ok(paths.into_iter().map(ObjectPath::from).collect()),
        other => Err(BusError::bad_reply("as", &other)),
    }
}
