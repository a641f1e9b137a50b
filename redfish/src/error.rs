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


//! Engine errors and their translation into registry messages.

use crate::message::Message;
use nv_bmcweb_core::BusError;
use nv_bmcweb_core::ObjectPath;
use nv_bmcweb_core::TypeMismatch;

/// Seconds a client should wait before retrying a temporarily unavailable
/// backend.
pub const RETRY_AFTER_SECONDS: &str = "1";

/// Failure of one request or sub-fetch.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Resource id did not match any backend object.
    #[error("{kind} '{id}' not found")]
    ResourceNotFound { kind: &'static str, id: String },
    /// Object path matched but no service implements it.
    #[error("no service implements {0}")]
    Unowned(ObjectPath),
    /// Bus call failed while reading.
    #[error("bus error: {0}")]
    Bus(#[from] BusError),
    /// Property exists with a different type than expected.
    #[error("{0}")]
    Type(#[from] TypeMismatch),
    /// Required property is absent from its bag.
    #[error("required property {0} is missing")]
    MissingProperty(&'static str),
    /// Backend value has a shape the engine does not understand.
    #[error("malformed {what}: {detail}")]
    Malformed { what: &'static str, detail: String },
    #[error("malformed JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),
    #[error("unrecognized request body")]
    UnrecognizedRequestBody,
    #[error("property {0} is required")]
    PropertyMissing(String),
    #[error("unknown property {0}")]
    PropertyUnknown(String),
    #[error("value {value} has wrong type for {property}")]
    PropertyValueType { property: String, value: String },
    #[error("value {value} of {property} is not acceptable")]
    PropertyValueIncorrect { property: String, value: String },
    #[error("value {value} of {property} is not in the list of allowed values")]
    PropertyValueNotInList { property: String, value: String },
    #[error("property {0} is read only")]
    PropertyNotWritable(String),
    #[error("{kind} with {property} '{value}' already exists")]
    ResourceAlreadyExists {
        kind: &'static str,
        property: &'static str,
        value: String,
    },
    /// Bus rejected a write of `value` to `property`.
    #[error("writing {property} = {value} failed: {error}")]
    Write {
        property: String,
        value: String,
        error: BusError,
    },
}

impl Error {
    /// Shortcut for [`Error::PropertyValueType`].
    pub fn value_type(property: impl Into<String>, value: &serde_json::Value) -> Self {
        Self::PropertyValueType {
            property: property.into(),
            value: display_value(value),
        }
    }

    /// Registry message reported to the client.
    #[must_use]
    pub fn to_message(&self) -> Message {
        match self {
            Self::ResourceNotFound { kind, id } => Message::resource_not_found(kind, id),
            Self::Unowned(_)
            | Self::Bus(_)
            | Self::Type(_)
            | Self::MissingProperty(_)
            | Self::Malformed { .. } => Message::internal_error(),
            Self::MalformedJson(_) => Message::malformed_json(),
            Self::UnrecognizedRequestBody => Message::unrecognized_request_body(),
            Self::PropertyMissing(property) => Message::property_missing(property),
            Self::PropertyUnknown(property) => Message::property_unknown(property),
            Self::PropertyValueType { property, value } => {
                Message::property_value_type_error(value, property)
            }
            Self::PropertyValueIncorrect { property, value } => {
                Message::property_value_incorrect(property, value)
            }
            Self::PropertyValueNotInList { property, value } => {
                Message::property_value_not_in_list(value, property)
            }
            Self::PropertyNotWritable(property) => Message::property_not_writable(property),
            Self::ResourceAlreadyExists {
                kind,
                property,
                value,
            } => Message::resource_already_exists(kind, property, value),
            Self::Write {
                property,
                value,
                error,
            } => write_error(property, value, error),
        }
    }

    /// Returns true if the error is reported as `InternalError`.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        self.to_message() == Message::internal_error()
    }
}

fn write_error(property: &str, value: &str, error: &BusError) -> Message {
    match error {
        BusError::InvalidArgument(_) => Message::property_value_incorrect(property, value),
        BusError::WriteFailure(_) => Message::operation_failed(),
        BusError::NotAllowed(_) => Message::operation_not_allowed(),
        BusError::InsufficientPermission(_) => Message::insufficient_privilege(),
        BusError::Unavailable(_) | BusError::Timeout(_) => {
            Message::service_temporarily_unavailable(RETRY_AFTER_SECONDS)
        }
        BusError::ResourceNotFound(_) | BusError::NoSuchObject(_) => {
            Message::resource_not_found("Property", property)
        }
        BusError::Io(_) | BusError::BadReply { .. } | BusError::Other { .. } => {
            Message::internal_error()
        }
    }
}

/// Render a request value the way it appears in message arguments:
/// strings without quotes, everything else as JSON.
#[must_use]
pub fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
