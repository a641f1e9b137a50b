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


//! Response aggregation.
//!
//! A response is built by many independent sub-fetches. They share one
//! [`AsyncResp`] handle and write into disjoint fields (or append to the
//! same array). A [`FanOut`] owns the set of sub-fetches dispatched by a
//! handler and [`FanOut::settle`] is the explicit barrier: the response is
//! complete when every sub-fetch has finished, successfully or not.
//!
//! Failure policy: an error of one sub-fetch is recorded in the response
//! (status and `error` object) but never cancels its siblings, so an error
//! response may still carry partially populated data.

use crate::json;
use crate::message::Message;
use crate::Error;
use futures_util::future::join_all;
use futures_util::future::BoxFuture;
use futures_util::FutureExt as _;
use http::HeaderMap;
use http::HeaderValue;
use http::StatusCode;
use serde_json::json;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;
use tracing::debug;
use tracing::error;

/// Response document of one request.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Value,
}

impl Default for Response {
    fn default() -> Self {
        Self {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: Value::Object(serde_json::Map::new()),
        }
    }
}

impl Response {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    #[must_use]
    pub const fn body(&self) -> &Value {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Value {
        &mut self.body
    }

    pub fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    /// Returns true if an error message was recorded.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.body.get("error").is_some()
    }

    /// Split into status, headers and body.
    #[must_use]
    pub fn into_parts(self) -> (StatusCode, HeaderMap, Value) {
        (self.status, self.headers, self.body)
    }

    /// Set a header. Values that are not valid header text are dropped.
    pub fn set_header(&mut self, name: http::header::HeaderName, value: &str) {
        match HeaderValue::from_str(value) {
            Ok(value) => {
                self.headers.insert(name, value);
            }
            Err(err) => debug!(%name, value, error = %err, "invalid header value dropped"),
        }
    }

    /// Record a registry message.
    ///
    /// Success messages go to the top level `@Message.ExtendedInfo`. Error
    /// messages go to the `error` object and set the response status; an
    /// identical message is recorded only once.
    pub fn add_message(&mut self, message: &Message) {
        if message.status().is_success() {
            json::append(&mut self.body, "/@Message.ExtendedInfo", message.to_json());
            return;
        }
        self.status = message.status();
        let rendered = message.to_json();
        let error = &mut self.body["error"];
        let info = error
            .get("@Message.ExtendedInfo")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();
        if info.contains(&rendered) {
            return;
        }
        let head = if info.is_empty() {
            message.clone()
        } else {
            Message::general_error()
        };
        json::merge(
            error,
            json!({
                "code": head.id(),
                "message": head.text(),
            }),
        );
        json::append(error, "/@Message.ExtendedInfo", rendered);
    }
}

/// Shared handle to the response of one request.
#[derive(Debug, Clone, Default)]
pub struct AsyncResp(Arc<Mutex<Response>>);

impl AsyncResp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Response> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with exclusive access to the response.
    pub fn with<R>(&self, f: impl FnOnce(&mut Response) -> R) -> R {
        f(&mut self.lock())
    }

    /// Set the field at `pointer`.
    pub fn set(&self, pointer: &str, value: impl Into<Value>) {
        json::set(self.lock().body_mut(), pointer, value.into());
    }

    /// Merge `patch` into the document.
    pub fn merge(&self, patch: Value) {
        json::merge(self.lock().body_mut(), patch);
    }

    /// Append to the array at `pointer`.
    pub fn append(&self, pointer: &str, value: impl Into<Value>) {
        json::append(self.lock().body_mut(), pointer, value.into());
    }

    /// Append all values to the array at `pointer` (creating it if needed).
    pub fn extend(&self, pointer: &str, values: impl IntoIterator<Item = Value>) {
        json::extend(self.lock().body_mut(), pointer, values);
    }

    pub fn message(&self, message: &Message) {
        self.lock().add_message(message);
    }

    /// Record `err` in the response.
    pub fn fail(&self, err: &Error) {
        if err.is_internal() {
            error!(error = %err, "internal error");
        } else {
            debug!(error = %err, "request failed");
        }
        self.message(&err.to_message());
    }

    /// Record a success message unless an error was already recorded.
    pub fn succeed(&self) {
        let mut resp = self.lock();
        if !resp.is_error() {
            resp.add_message(&Message::success());
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.lock().is_error()
    }

    /// Take the finished response.
    #[must_use]
    pub fn into_response(self) -> Response {
        match Arc::try_unwrap(self.0) {
            Ok(resp) => resp.into_inner().unwrap_or_else(PoisonError::into_inner),
            Err(shared) => shared.lock().unwrap_or_else(PoisonError::into_inner).clone(),
        }
    }
}

/// Set of sub-fetches contributing to one response.
pub struct FanOut<'a> {
    resp: AsyncResp,
    fetches: Vec<BoxFuture<'a, ()>>,
}

impl<'a> FanOut<'a> {
    #[must_use]
    pub fn new(resp: &AsyncResp) -> Self {
        Self {
            resp: resp.clone(),
            fetches: Vec::new(),
        }
    }

    /// Add a sub-fetch. Its error, if any, is recorded in the response.
    pub fn spawn<F>(&mut self, fetch: F)
    where
        F: Future<Output = Result<(), Error>> + Send + 'a,
    {
        let resp = self.resp.clone();
        self.fetches.push(
            async move {
                if let Err(err) = fetch.await {
                    resp.fail(&err);
                }
            }
            .boxed(),
        );
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fetches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fetches.is_empty()
    }

    /// Wait until every sub-fetch has completed.
    pub async fn settle(self) {
        join_all(self.fetches).await;
    }
}
