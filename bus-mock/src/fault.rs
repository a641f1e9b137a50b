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


//! Recorded calls and injected faults of the mock bus.

use nv_bmcweb_core::BusError;
use nv_bmcweb_core::ObjectPath;
use nv_bmcweb_core::ServiceName;
use nv_bmcweb_core::Variant;

/// Call observed by the mock bus.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub service: ServiceName,
    pub path: ObjectPath,
    pub interface: String,
    pub method: String,
    pub args: Vec<Variant>,
}

impl Call {
    /// Returns true for calls that may change bus state.
    ///
    /// Property reads and mapper queries are not mutating; everything else is.
    #[must_use]
    pub fn is_mutating(&self) -> bool {
        !matches!(
            (self.interface.as_str(), self.method.as_str()),
            ("org.freedesktop.DBus.Properties", "Get" | "GetAll")
                | (
                    "xyz.openbmc_project.ObjectMapper",
                    "GetSubTree" | "GetSubTreePaths" | "GetObject"
                )
        )
    }

    /// Interface and member the call is about.
    ///
    /// Property calls are attributed to the target interface and property
    /// (`GetAll` uses `*` as member), other calls to their own interface and
    /// method.
    pub(crate) fn target(&self) -> (&str, &str) {
        if self.interface == "org.freedesktop.DBus.Properties" {
            let iface = self.args.first().and_then(Variant::as_str).unwrap_or("");
            let member = match self.method.as_str() {
                "GetAll" => "*",
                _ => self.args.get(1).and_then(Variant::as_str).unwrap_or(""),
            };
            (iface, member)
        } else {
            (&self.interface, &self.method)
        }
    }
}

/// Error to return for matching calls.
///
/// `member` is a property name for property access, a method name
/// otherwise; `*` matches anything.
#[derive(Debug, Clone)]
pub struct Fault {
    pub path: ObjectPath,
    pub interface: String,
    pub member: String,
    pub error: BusError,
}

impl Fault {
    pub fn new(
        path: impl Into<ObjectPath>,
        interface: impl Into<String>,
        member: impl Into<String>,
        error: BusError,
    ) -> Self {
        Self {
            path: path.into(),
            interface: interface.into(),
            member: member.into(),
            error,
        }
    }

    pub(crate) fn matches(&self, call: &Call) -> bool {
        let (interface, member) = call.target();
        self.path == call.path
            && (self.interface == "*" || self.interface == interface)
            && (self.member == "*" || self.member == member)
    }
}
