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


//! Computer system.
//!
//! There is exactly one computer system, named by the configuration. It
//! only links the per-system resources served by other handlers.

use crate::handlers::finish;
use crate::AsyncResp;
use crate::ODataId;
use crate::ResourceId;
use crate::Response;
use crate::Service;
use nv_bmcweb_core::Bus;
use serde_json::json;

/// `GET /redfish/v1/Systems`
pub fn collection<B: Bus>(svc: &Service<B>) -> Response {
    let mut resp = Response::default();
    *resp.body_mut() = json!({
        "@odata.id": ODataId::service_root().join("Systems"),
        "@odata.type": "#ComputerSystemCollection.ComputerSystemCollection",
        "Name": "Computer System Collection",
        "Members": [svc.system_id().link()],
        "Members@odata.count": 1,
    });
    resp
}

/// `GET /redfish/v1/Systems/{system}`
pub fn get<B: Bus>(svc: &Service<B>, system: &ResourceId) -> Response {
    let resp = AsyncResp::new();
    let result = svc.check_system(system).map(|()| {
        let id = svc.system_id();
        resp.merge(json!({
            "@odata.id": id,
            "@odata.type": "#ComputerSystem.v1_22_0.ComputerSystem",
            "Id": system.inner(),
            "Name": "System",
            "Processors": id.join("Processors").link(),
            "Memory": id.join("Memory").link(),
            "Bios": id.join("Bios").link(),
            "BootOptions": id.join("BootOptions").link(),
        }));
    });
    finish(resp, result)
}
