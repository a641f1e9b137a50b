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


//! Redfish identifiers
//!
//! - [`ODataId`]: value of `@odata.id`, the canonical resource path.
//! - [`ResourceId`]: last segment of a resource URI as received from the
//!   client (chassis name, processor name, dimm id, ...). It is matched
//!   against the leaf segment of inventory object paths.

use core::fmt::Display;
use core::fmt::Formatter;
use core::fmt::Result as FmtResult;
use serde::Deserialize;
use serde::Serialize;
use serde_json::json;
use serde_json::Value;
use tagged_types::TaggedType;

/// Identifier of a Redfish resource instance.
pub type ResourceId = TaggedType<String, ResourceIdTag>;
#[doc(hidden)]
#[derive(tagged_types::Tag)]
#[implement(Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[transparent(Debug, Display, FromStr, Serialize, Deserialize)]
#[capability(inner_access, cloned)]
pub enum ResourceIdTag {}

/// Type for `@odata.id` identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ODataId(String);

impl ODataId {
    /// Redfish service root id.
    #[must_use]
    pub fn service_root() -> Self {
        Self("/redfish/v1".into())
    }

    /// Id of a child resource.
    #[must_use]
    pub fn join(&self, segment: impl Display) -> Self {
        Self(format!("{}/{segment}", self.0))
    }

    /// `/redfish/v1/Chassis/{id}`
    #[must_use]
    pub fn chassis(id: impl Display) -> Self {
        Self::service_root().join("Chassis").join(id)
    }

    /// `/redfish/v1/Systems/{system}`
    #[must_use]
    pub fn system(system: impl Display) -> Self {
        Self::service_root().join("Systems").join(system)
    }

    /// `/redfish/v1/Fabrics/{fabric}`
    #[must_use]
    pub fn fabric(fabric: impl Display) -> Self {
        Self::service_root().join("Fabrics").join(fabric)
    }

    /// Navigation link object: `{"@odata.id": ...}`.
    #[must_use]
    pub fn link(&self) -> Value {
        json!({ "@odata.id": self.0 })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ODataId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<ODataId> for Value {
    fn from(id: ODataId) -> Self {
        Self::String(id.0)
    }
}

impl Display for ODataId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.fmt(f)
    }
}
