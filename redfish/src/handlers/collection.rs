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


//! Resource collections backed by a mapper search.

use crate::handlers::finish;
use crate::resolve;
use crate::AsyncResp;
use crate::Error;
use crate::ODataId;
use crate::Response;
use nv_bmcweb_core::Bus;
use nv_bmcweb_core::ObjectPath;
use serde_json::json;
use serde_json::Value;

/// Description of one collection resource.
pub struct Collection<'a> {
    /// `@odata.id` of the collection; members are `{id}/{leaf}`.
    pub id: ODataId,
    pub odata_type: &'static str,
    pub name: &'static str,
    /// Search root of members.
    pub root: ObjectPath,
    /// Interfaces any of which makes an object a member.
    pub interfaces: &'a [&'a str],
}

impl Collection<'_> {
    /// Collection document for `members`, in the given order.
    #[must_use]
    pub fn document<'p>(&self, members: impl IntoIterator<Item = &'p ObjectPath>) -> Value {
        let members = members
            .into_iter()
            .map(|path| self.id.join(path.leaf()).link())
            .collect::<Vec<_>>();
        json!({
            "@odata.id": self.id,
            "@odata.type": self.odata_type,
            "Name": self.name,
            "Members@odata.count": members.len(),
            "Members": members,
        })
    }

    /// Search members (sorted by leaf) and fill `resp`.
    ///
    /// # Errors
    ///
    /// Bus failures other than I/O.
    pub async fn fill<B: Bus>(&self, bus: &B, resp: &AsyncResp) -> Result<(), Error> {
        let members = resolve::members(bus, &self.root, self.interfaces).await?;
        resp.merge(self.document(&members));
        Ok(())
    }

    pub async fn get<B: Bus>(&self, bus: &B) -> Response {
        let resp = AsyncResp::new();
        let result = self.fill(bus, &resp).await;
        finish(resp, result)
    }
}
