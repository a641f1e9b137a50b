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


//! Bus decorator bounding call latency.

use crate::Bus;
use crate::BusError;
use crate::ObjectPath;
use crate::ServiceName;
use crate::Variant;
use std::time::Duration;
use tracing::warn;

/// Bus that fails any call not completed within `timeout`.
///
/// Every provided method of [`Bus`] is built on `call`, so property reads
/// and mapper queries are bounded as well.
pub struct TimeoutBus<B> {
    inner: B,
    timeout: Duration,
}

impl<B: Bus> TimeoutBus<B> {
    /// Wrap `inner`.
    pub const fn new(inner: B, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    /// Wrapped bus.
    pub const fn inner(&self) -> &B {
        &self.inner
    }
}

impl<B: Bus> Bus for TimeoutBus<B> {
    async fn call(
        &self,
        service: &ServiceName,
        path: &ObjectPath,
        interface: &str,
        method: &str,
        args: Vec<Variant>,
    ) -> Result<Vec<Variant>, BusError> {
        tokio::time::timeout(
            self.timeout,
            self.inner.call(service, path, interface, method, args),
        )
        .await
        .unwrap_or_else(|_| {
            warn!(%service, %path, interface, method, timeout = ?self.timeout, "bus call timed out");
            Err(BusError::Timeout(self.timeout))
        })
    }
}
