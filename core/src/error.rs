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


//! Errors reported by the inventory bus.
//!
//! The bus reports failures as named errors. The engine only interprets a
//! small fixed set of names; everything else is carried as
//! [`BusError::Other`] and treated as an internal failure by callers.

use std::time::Duration;

/// Error returned by a bus call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BusError {
    /// `xyz.openbmc_project.Common.Error.InvalidArgument`.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// `xyz.openbmc_project.Common.Error.WriteFailure`.
    #[error("write failure: {0}")]
    WriteFailure(String),
    /// `xyz.openbmc_project.Common.Error.NotAllowed`.
    #[error("not allowed: {0}")]
    NotAllowed(String),
    /// `xyz.openbmc_project.Common.Error.Unavailable`.
    #[error("unavailable: {0}")]
    Unavailable(String),
    /// `xyz.openbmc_project.Common.Error.InsufficientPermission`.
    #[error("insufficient permission: {0}")]
    InsufficientPermission(String),
    /// `xyz.openbmc_project.Common.Error.ResourceNotFound`.
    #[error("resource not found: {0}")]
    ResourceNotFound(String),
    /// `org.freedesktop.DBus.Error.UnknownObject` and friends: the addressed
    /// object, interface, property or method does not exist.
    #[error("no such object: {0}")]
    NoSuchObject(String),
    /// Transport level failure (no reply, broken connection).
    #[error("input/output error: {0}")]
    Io(String),
    /// Reply was received but does not have the expected shape.
    #[error("bad reply: expected {expected}, found {found}")]
    BadReply {
        /// Expected signature.
        expected: &'static str,
        /// Signature of the received value.
        found: String,
    },
    /// Call did not complete in time.
    #[error("call timed out after {0:?}")]
    Timeout(Duration),
    /// Any other named error.
    #[error("{name}: {message}")]
    Other {
        /// Error name as sent by the bus.
        name: String,
        /// Human readable description.
        message: String,
    },
}

const COMMON: &str = "xyz.openbmc_project.Common.Error.";
const DBUS: &str = "org.freedesktop.DBus.Error.";

impl BusError {
    /// Build an error from its bus name.
    #[must_use]
    pub fn from_name(name: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        if let Some(short) = name.strip_prefix(COMMON) {
            match short {
                "InvalidArgument" => return Self::InvalidArgument(message),
                "WriteFailure" => return Self::WriteFailure(message),
                "NotAllowed" => return Self::NotAllowed(message),
                "Unavailable" => return Self::Unavailable(message),
                "InsufficientPermission" => return Self::InsufficientPermission(message),
                "ResourceNotFound" => return Self::ResourceNotFound(message),
                _ => {}
            }
        }
        if let Some(short) = name.strip_prefix(DBUS) {
            match short {
                "UnknownObject" | "UnknownInterface" | "UnknownProperty" | "UnknownMethod" => {
                    return Self::NoSuchObject(message)
                }
                "NoReply" | "Disconnected" | "ServiceUnknown" => return Self::Io(message),
                _ => {}
            }
        }
        Self::Other {
            name: name.into(),
            message,
        }
    }

    /// Bus name of the error.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::InvalidArgument(_) => format!("{COMMON}InvalidArgument"),
            Self::WriteFailure(_) => format!("{COMMON}WriteFailure"),
            Self::NotAllowed(_) => format!("{COMMON}NotAllowed"),
            Self::Unavailable(_) => format!("{COMMON}Unavailable"),
            Self::InsufficientPermission(_) => format!("{COMMON}InsufficientPermission"),
            Self::ResourceNotFound(_) => format!("{COMMON}ResourceNotFound"),
            Self::NoSuchObject(_) => format!("{DBUS}UnknownObject"),
            Self::Io(_) => format!("{DBUS}NoReply"),
            Self::BadReply { .. } => format!("{DBUS}InvalidSignature"),
            Self::Timeout(_) => format!("{DBUS}Timeout"),
            Self::Other { name, .. } => name.clone(),
        }
    }

    pub(crate) fn bad_reply(expected: &'static str, found: &crate::Variant) -> Self {
        Self::BadReply {
            expected,
            found: found.signature().into(),
        }
    }
}
