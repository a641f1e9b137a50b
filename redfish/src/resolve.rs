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


//! Resource resolution.
//!
//! A Redfish resource id is resolved to an inventory object by searching
//! the object mapper for objects implementing any of a set of candidate
//! interfaces and comparing the last path segment with the id.
//!
//! Duplicate leaves in different branches are not an error: the first
//! match in mapper order wins.

use crate::Error;
use crate::ResourceId;
use nv_bmcweb_core::Bus;
use nv_bmcweb_core::BusError;
use nv_bmcweb_core::ObjectPath;
use nv_bmcweb_core::ServiceMap;
use nv_bmcweb_core::ServiceName;
use nv_bmcweb_core::SubTree;
use tracing::debug;

/// Object found for a resource id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub path: ObjectPath,
    pub services: ServiceMap,
}

impl Resolved {
    /// Owning service and its interfaces (first entry of the service map).
    pub fn owner(&self) -> Result<(&ServiceName, &[String]), Error> {
        self.services
            .first()
            .ok_or_else(|| Error::Unowned(self.path.clone()))
    }

    /// First service implementing `interface`.
    #[must_use]
    pub fn service_for(&self, interface: &str) -> Option<&ServiceName> {
        self.services.service_for(interface)
    }
}

/// Resolve `id` below `root` among objects implementing `interfaces`.
///
/// # Errors
///
/// - `Error::ResourceNotFound` (with `kind`) if no leaf matches.
/// - `Error::Unowned` if the matching entry has no services.
/// - `Error::Bus` if the subtree query fails.
pub async fn resolve<B: Bus>(
    bus: &B,
    root: &ObjectPath,
    interfaces: &[&str],
    kind: &'static str,
    id: &ResourceId,
) -> Result<Resolved, Error> {
    let tree = bus.get_sub_tree(root, 0, interfaces).await?;
    let resolved = first_match(tree, id.inner()).ok_or_else(|| Error::ResourceNotFound {
        kind,
        id: id.inner().clone(),
    })?;
    if resolved.services.is_empty() {
        return Err(Error::Unowned(resolved.path));
    }
    debug!(%id, path = %resolved.path, "resolved");
    Ok(resolved)
}

/// First subtree entry whose leaf equals `leaf`.
#[must_use]
pub fn first_match(tree: SubTree, leaf: &str) -> Option<Resolved> {
    tree.into_iter()
        .find(|(path, _)| path.leaf() == leaf)
        .map(|(path, services)| Resolved { path, services })
}

/// Paths below `root` implementing any of `interfaces`, sorted by leaf.
///
/// An I/O failure of the mapper means the collection is empty.
///
/// # Errors
///
/// Any other bus failure is returned as `Error::Bus`.
pub async fn members<B: Bus>(
    bus: &B,
    root: &ObjectPath,
    interfaces: &[&str],
) -> Result<Vec<ObjectPath>, Error> {
    let mut paths = match bus.get_sub_tree_paths(root, 0, interfaces).await {
        Ok(paths) => paths,
        Err(BusError::Io(err)) => {
            debug!(%root, error = %err, "no collection members");
            Vec::new()
        }
        Err(err) => return Err(err.into()),
    };
    paths.sort_by(|a, b| a.leaf().cmp(b.leaf()));
    Ok(paths)
}
