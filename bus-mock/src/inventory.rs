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


//! Inventory file format.
//!
//! A JSON document describing every object the mock bus serves:
//!
//! ```json
//! {
//!   "objects": {
//!     "/xyz/openbmc_project/inventory/system/chassis/Baseboard": {
//!       "xyz.openbmc_project.Inventory.Manager": {
//!         "xyz.openbmc_project.Inventory.Item.Board": {},
//!         "xyz.openbmc_project.Inventory.Decorator.Asset": {
//!           "SerialNumber": { "s": "SN0001" }
//!         }
//!       }
//!     }
//!   },
//!   "associations": {
//!     "/xyz/openbmc_project/inventory/system/chassis/Baseboard/all_sensors": [
//!       "/xyz/openbmc_project/sensors/temperature/Inlet"
//!     ]
//!   }
//! }
//! ```

use crate::Error;
use nv_bmcweb_core::ObjectPath;
use nv_bmcweb_core::PropertyBag;
use nv_bmcweb_core::ServiceName;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Interfaces of one object implemented by one service.
pub type Interfaces = BTreeMap<String, PropertyBag>;

/// Services implementing one object.
pub type Services = BTreeMap<ServiceName, Interfaces>;

/// Whole inventory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    pub objects: BTreeMap<ObjectPath, Services>,
    /// Association objects (`<path>/<name>`) and their endpoints.
    #[serde(default)]
    pub associations: BTreeMap<ObjectPath, Vec<ObjectPath>>,
}

impl Inventory {
    /// Read inventory from a JSON file.
    ///
    /// # Errors
    ///
    /// - `Error::Io` if failed to read file
    /// - `Error::Json` if the content is not a valid inventory.
    pub fn read(fname: &Path) -> Result<Self, Error> {
        let content = fs::read_to_string(fname).map_err(|err| Error::Io(fname.into(), err))?;
        serde_json::from_str(&content).map_err(|err| Error::Json(fname.into(), err))
    }
}
