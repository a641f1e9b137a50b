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


//! Inventory bus identifiers
//!
//! Minimal wrappers for the names the inventory bus uses to address things:
//! - [`ObjectPath`]: hierarchical key into the inventory namespace
//!   (`/xyz/openbmc_project/inventory/system/chassis/Baseboard`)
//! - [`ServiceName`]: bus name of the process that owns an object
//!   (`xyz.openbmc_project.Inventory.Manager`)
//!
//! Notes
//! - These types do not validate content; the bus is the authority.
//! - The last `/`-delimited segment of a path is its "leaf" and is what
//!   Redfish exposes as a resource identifier.
//!
//! Example
//! ```rust
//! use nv_bmcweb_core::ObjectPath;
//!
//! let path = ObjectPath::from("/xyz/openbmc_project/inventory/system/chassis");
//! assert_eq!(path.leaf(), "chassis");
//! assert_eq!(path.child("all_sensors").to_string(),
//!            "/xyz/openbmc_project/inventory/system/chassis/all_sensors");
//! ```

use core::fmt::Display;
use core::fmt::Formatter;
use core::fmt::Result as FmtResult;
use serde::Deserialize;
use serde::Serialize;

/// Object path on the inventory bus.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
#[serde(transparent)]
pub struct ObjectPath(String);

impl ObjectPath {
    /// Root of the inventory namespace.
    #[must_use]
    pub fn inventory() -> Self {
        Self("/xyz/openbmc_project/inventory".into())
    }

    /// Last `/`-delimited segment of the path.
    ///
    /// A path that ends with `/` has an empty leaf.
    #[must_use]
    pub fn leaf(&self) -> &str {
        self.0.rsplit_once('/').map_or(self.0.as_str(), |(_, leaf)| leaf)
    }

    /// Path without its leaf segment.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.0
            .rsplit_once('/')
            .filter(|(parent, _)| !parent.is_empty())
            .map(|(parent, _)| Self(parent.into()))
    }

    /// Namespace segment directly above the leaf.
    ///
    /// For `/xyz/openbmc_project/sensors/temperature/CPU0_Temp` this is
    /// `temperature`.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        let mut segments = self.0.rsplit('/');
        segments.next();
        segments.next().filter(|s| !s.is_empty())
    }

    /// Append a child segment.
    #[must_use]
    pub fn child(&self, segment: &str) -> Self {
        if self.0.ends_with('/') {
            Self(format!("{}{segment}", self.0))
        } else {
            Self(format!("{}/{segment}", self.0))
        }
    }

    /// Raw string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ObjectPath {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ObjectPath {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl Display for ObjectPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.fmt(f)
    }
}

/// Bus name of a service that implements interfaces on objects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
#[serde(transparent)]
pub struct ServiceName(String);

impl ServiceName {
    /// Raw string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ServiceName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ServiceName {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl Display for ServiceName {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.fmt(f)
    }
}
