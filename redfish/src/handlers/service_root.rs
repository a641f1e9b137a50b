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


//! Service root.

use crate::ODataId;
use crate::Response;
use serde_json::json;

#[must_use]
pub fn get() -> Response {
    let root = ODataId::service_root();
    let mut resp = Response::default();
    *resp.body_mut() = json!({
        "@odata.id": root,
        "@odata.type": "#ServiceRoot.v1_15_0.ServiceRoot",
        "Id": "RootService",
        "Name": "Root Service",
        "RedfishVersion": "1.17.0",
        "Systems": root.join("Systems").link(),
        "Chassis": root.join("Chassis").link(),
        "Fabrics": root.join("Fabrics").link(),
    });
    resp
}
