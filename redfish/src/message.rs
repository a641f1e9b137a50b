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


//! Base message registry.
//!
//! Every error or status reported to a client is a [`Message`] from the
//! DMTF Base registry. A message knows its HTTP status and renders itself
//! as a registry `Message` object.

use http::StatusCode;
use serde_json::json;
use serde_json::Value;

/// Registry prefix of every `MessageId`.
pub const REGISTRY: &str = "Base.1.16.0";

struct Entry {
    name: &'static str,
    text: &'static str,
    severity: &'static str,
    resolution: &'static str,
    status: StatusCode,
}

static ENTRIES: &[Entry] = &[
    Entry {
        name: "ResourceNotFound",
        text: "The requested resource of type %1 named '%2' was not found.",
        severity: "Critical",
        resolution: "Provide a valid resource identifier and resubmit the request.",
        status: StatusCode::NOT_FOUND,
    },
    Entry {
        name: "InternalError",
        text: "The request failed due to an internal service error.  The service is still operational.",
        severity: "Critical",
        resolution: "Resubmit the request.  If the problem persists, consider resetting the service.",
        status: StatusCode::INTERNAL_SERVER_ERROR,
    },
    Entry {
        name: "MalformedJSON",
        text: "The request body submitted was malformed JSON and could not be parsed by the receiving service.",
        severity: "Critical",
        resolution: "Ensure that the request body is valid JSON and resubmit the request.",
        status: StatusCode::BAD_REQUEST,
    },
    Entry {
        name: "UnrecognizedRequestBody",
        text: "The service detected a malformed request body that it was unable to interpret.",
        severity: "Warning",
        resolution: "Correct the request body and resubmit the request if it failed.",
        status: StatusCode::BAD_REQUEST,
    },
    Entry {
        name: "PropertyMissing",
        text: "The property %1 is a required property and must be included in the request.",
        severity: "Warning",
        resolution: "Ensure that the property is in the request body and has a valid value and resubmit the request if the operation failed.",
        status: StatusCode::BAD_REQUEST,
    },
    Entry {
        name: "PropertyUnknown",
        text: "The property %1 is not in the list of valid properties for the resource.",
        severity: "Warning",
        resolution: "Remove the unknown property from the request body and resubmit the request if the operation failed.",
        status: StatusCode::BAD_REQUEST,
    },
    Entry {
        name: "PropertyValueTypeError",
        text: "The value '%1' for the property %2 is not a type that the property can accept.",
        severity: "Warning",
        resolution: "Correct the value for the property in the request body and resubmit the request if the operation failed.",
        status: StatusCode::BAD_REQUEST,
    },
    Entry {
        name: "PropertyValueIncorrect",
        text: "The property '%1' with the requested value of '%2' could not be written because the value does not meet the constraints of the implementation.",
        severity: "Warning",
        resolution: "No resolution is required.",
        status: StatusCode::BAD_REQUEST,
    },
    Entry {
        name: "PropertyValueNotInList",
        text: "The value '%1' for the property %2 is not in the list of acceptable values.",
        severity: "Warning",
        resolution: "Choose a value from the enumeration list that the implementation can support and resubmit the request if the operation failed.",
        status: StatusCode::BAD_REQUEST,
    },
    Entry {
        name: "PropertyNotWritable",
        text: "The property %1 is a read only property and cannot be assigned a value.",
        severity: "Warning",
        resolution: "Remove the property from the request body and resubmit the request if the operation failed.",
        status: StatusCode::FORBIDDEN,
    },
    Entry {
        name: "OperationNotAllowed",
        text: "The HTTP method is not allowed on this resource.",
        severity: "Critical",
        resolution: "None.",
        status: StatusCode::FORBIDDEN,
    },
    Entry {
        name: "InsufficientPrivilege",
        text: "There are insufficient privileges for the account or credentials associated with the current session to perform the requested operation.",
        severity: "Critical",
        resolution: "Either abandon the operation or change the associated access rights and resubmit the request if the operation failed.",
        status: StatusCode::FORBIDDEN,
    },
    Entry {
        name: "ServiceTemporarilyUnavailable",
        text: "The service is temporarily unavailable.  Retry in %1 seconds.",
        severity: "Critical",
        resolution: "Wait for the indicated retry duration and retry the operation.",
        status: StatusCode::SERVICE_UNAVAILABLE,
    },
    Entry {
        name: "OperationFailed",
        text: "An error occurred internal to the service as part of the overall request.  Partial results may have been returned.",
        severity: "Warning",
        resolution: "Resubmit the request.  If the problem persists, consider resetting the service or provider.",
        status: StatusCode::BAD_GATEWAY,
    },
    Entry {
        name: "ResourceAlreadyExists",
        text: "The requested resource of type %1 with the property %2 with the value '%3' already exists.",
        severity: "Critical",
        resolution: "Do not repeat the create operation as the resource has already been created.",
        status: StatusCode::CONFLICT,
    },
    Entry {
        name: "Success",
        text: "The request completed successfully.",
        severity: "OK",
        resolution: "None.",
        status: StatusCode::OK,
    },
    Entry {
        name: "GeneralError",
        text: "A general error has occurred.  See Resolution for information on how to resolve the error.",
        severity: "Critical",
        resolution: "None.",
        status: StatusCode::INTERNAL_SERVER_ERROR,
    },
];

/// One registry message with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    entry: usize,
    args: Vec<String>,
}

impl Message {
    fn new(name: &str, args: Vec<String>) -> Self {
        let entry = ENTRIES
            .iter()
            .position(|e| e.name == name)
            .unwrap_or(1);
        Self { entry, args }
    }

    fn entry(&self) -> &'static Entry {
        &ENTRIES[self.entry]
    }

    #[must_use]
    pub fn resource_not_found(kind: &str, id: &str) -> Self {
        Self::new("ResourceNotFound", vec![kind.into(), id.into()])
    }

    #[must_use]
    pub fn internal_error() -> Self {
        Self::new("InternalError", Vec::new())
    }

    #[must_use]
    pub fn malformed_json() -> Self {
        Self::new("MalformedJSON", Vec::new())
    }

    #[must_use]
    pub fn unrecognized_request_body() -> Self {
        Self::new("UnrecognizedRequestBody", Vec::new())
    }

    #[must_use]
    pub fn property_missing(property: &str) -> Self {
        Self::new("PropertyMissing", vec![property.into()])
    }

    #[must_use]
    pub fn property_unknown(property: &str) -> Self {
        Self::new("PropertyUnknown", vec![property.into()])
    }

    #[must_use]
    pub fn property_value_type_error(value: &str, property: &str) -> Self {
        Self::new("PropertyValueTypeError", vec![value.into(), property.into()])
    }

    #[must_use]
    pub fn property_value_incorrect(property: &str, value: &str) -> Self {
        Self::new("PropertyValueIncorrect", vec![property.into(), value.into()])
    }

    #[must_use]
    pub fn property_value_not_in_list(value: &str, property: &str) -> Self {
        Self::new("PropertyValueNotInList", vec![value.into(), property.into()])
    }

    #[must_use]
    pub fn property_not_writable(property: &str) -> Self {
        Self::new("PropertyNotWritable", vec![property.into()])
    }

    #[must_use]
    pub fn operation_not_allowed() -> Self {
        Self::new("OperationNotAllowed", Vec::new())
    }

    #[must_use]
    pub fn insufficient_privilege() -> Self {
        Self::new("InsufficientPrivilege", Vec::new())
    }

    #[must_use]
    pub fn service_temporarily_unavailable(retry_after: &str) -> Self {
        Self::new("ServiceTemporarilyUnavailable", vec![retry_after.into()])
    }

    #[must_use]
    pub fn operation_failed() -> Self {
        Self::new("OperationFailed", Vec::new())
    }

    #[must_use]
    pub fn resource_already_exists(kind: &str, property: &str, value: &str) -> Self {
        Self::new(
            "ResourceAlreadyExists",
            vec![kind.into(), property.into(), value.into()],
        )
    }

    #[must_use]
    pub fn success() -> Self {
        Self::new("Success", Vec::new())
    }

    pub(crate) fn general_error() -> Self {
        Self::new("GeneralError", Vec::new())
    }

    /// Registry name, e.g. `ResourceNotFound`.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.entry().name
    }

    /// Full message id, e.g. `Base.1.16.0.ResourceNotFound`.
    #[must_use]
    pub fn id(&self) -> String {
        format!("{REGISTRY}.{}", self.entry().name)
    }

    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// HTTP status carried by the message.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.entry().status
    }

    /// Human readable text with arguments substituted.
    #[must_use]
    pub fn text(&self) -> String {
        // Single pass over the template: argument text is never rescanned.
        let template = self.entry().text;
        let mut text = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(pos) = rest.find('%') {
            text.push_str(&rest[..pos]);
            let after = &rest[pos + 1..];
            let digits = after.bytes().take_while(u8::is_ascii_digit).count();
            let arg = after[..digits]
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|n| self.args.get(n));
            match arg {
                Some(arg) => text.push_str(arg),
                None => text.push_str(&rest[pos..=pos + digits]),
            }
            rest = &after[digits..];
        }
        text.push_str(rest);
        text
    }

    /// Registry `Message` object.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let entry = self.entry();
        json!({
            "@odata.type": "#Message.v1_1_1.Message",
            "MessageId": self.id(),
            "Message": self.text(),
            "MessageArgs": self.args,
            "MessageSeverity": entry.severity,
            "Resolution": entry.resolution,
        })
    }
}
