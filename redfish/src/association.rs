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


//! Association walking.
//!
//! An association `name` of an object lives at `<path>/<name>` and is
//! served by the object mapper. A bus error reading it means the
//! relationship does not exist; this is the normal, silent outcome for
//! optional links. Only a reply of the wrong type is a failure.

use crate::Error;
use nv_bmcweb_core::mapper::ASSOCIATION_ENDPOINTS;
use nv_bmcweb_core::mapper::ASSOCIATION_INTERFACE;
use nv_bmcweb_core::mapper::MAPPER_SERVICE;
use nv_bmcweb_core::Bus;
use nv_bmcweb_core::BusError;
use nv_bmcweb_core::ObjectPath;
use nv_bmcweb_core::ServiceName;
use tracing::debug;

/// Result of walking one association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Association {
    /// The association object does not exist.
    Absent,
    /// The association exists; endpoints may be empty.
    Endpoints(Vec<ObjectPath>),
}

impl Association {
    /// Endpoints in bus order (empty if absent).
    #[must_use]
    pub fn endpoints(&self) -> &[ObjectPath] {
        match self {
            Self::Absent => &[],
            Self::Endpoints(endpoints) => endpoints,
        }
    }

    #[must_use]
    pub fn into_endpoints(self) -> Vec<ObjectPath> {
        match self {
            Self::Absent => Vec::new(),
            Self::Endpoints(endpoints) => endpoints,
        }
    }

    #[must_use]
    pub fn first(&self) -> Option<&ObjectPath> {
        self.endpoints().first()
    }

    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Read association `name` of `path`.
///
/// # Errors
///
/// `Error::Malformed` if the endpoints property is not a list of paths.
pub async fn walk<B: Bus>(bus: &B, path: &ObjectPath, name: &str) -> Result<Association, Error> {
    let assoc = path.child(name);
    let mapper = ServiceName::from(MAPPER_SERVICE);
    match bus
        .get_property(&mapper, &assoc, ASSOCIATION_INTERFACE, ASSOCIATION_ENDPOINTS)
        .await
    {
        Ok(value) => value
            .get::<Vec<String>>()
            .map(|endpoints| {
                Association::Endpoints(endpoints.into_iter().map(ObjectPath::from).collect())
            })
            .ok_or_else(|| Error::Malformed {
                what: "association endpoints",
                detail: format!("{assoc}: expected as, found {}", value.signature()),
            }),
        Err(err @ BusError::BadReply { .. }) => Err(err.into()),
        Err(err) => {
            debug!(path = %assoc, error = %err, "association absent");
            Ok(Association::Absent)
        }
    }
}
