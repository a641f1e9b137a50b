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


//! Redfish resource engine.
//!
//! Redfish resources are assembled from an inventory bus in four steps:
//! 1. [`resolve`]: find the inventory object behind a resource id.
//! 2. [`association`]: follow named relationships to linked objects.
//! 3. [`translate`]: turn typed property bags into Redfish fields.
//! 4. [`aggregate`]: collect the results of concurrent sub-fetches into one
//!    response with partial-failure semantics.
//!
//! Resource handlers in [`handlers`] compose these for each resource type
//! and [`routes::router`] exposes them over HTTP.
//!
//! ```no_run
//! use nv_bmcweb::Config;
//! use nv_bmcweb::Service;
//! use nv_bmcweb_core::Bus;
//!
//! fn app<B: Bus + 'static>(bus: B) -> axum::Router {
//!     nv_bmcweb::routes::router(Service::new(bus, Config::default()))
//! }
//! ```

/// Response aggregation.
pub mod aggregate;
/// Association walking.
pub mod association;
/// Engine errors.
pub mod error;
/// Resource handlers.
pub mod handlers;
/// Backend interface names.
pub mod iface;
/// JSON pointer helpers.
pub mod json;
/// Base message registry.
pub mod message;
/// Redfish identifiers.
pub mod odata;
/// Resource resolution.
pub mod resolve;
/// HTTP routes.
pub mod routes;
/// Property translation.
pub mod translate;

#[doc(inline)]
pub use aggregate::AsyncResp;
#[doc(inline)]
pub use aggregate::FanOut;
#[doc(inline)]
pub use aggregate::Response;
#[doc(inline)]
pub use error::Error;
#[doc(inline)]
pub use message::Message;
#[doc(inline)]
pub use odata::ODataId;
#[doc(inline)]
pub use odata::ResourceId;

use nv_bmcweb_core::Bus;
use nv_bmcweb_core::TimeoutBus;
use std::time::Duration;

/// Default name of the only computer system.
pub const DEFAULT_SYSTEM_NAME: &str = "system";
/// Default bound of a single bus call.
pub const DEFAULT_BUS_TIMEOUT: Duration = Duration::from_secs(10);

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Id of the computer system in `/redfish/v1/Systems/{system}`.
    pub system_name: String,
    /// Upper bound of every bus call made through [`Service::with_timeout`].
    pub bus_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            system_name: DEFAULT_SYSTEM_NAME.into(),
            bus_timeout: DEFAULT_BUS_TIMEOUT,
        }
    }
}

/// Bus plus configuration shared by all handlers.
pub struct Service<B> {
    bus: B,
    config: Config,
}

impl<B: Bus> Service<B> {
    /// Create a service using `bus` as is.
    pub const fn new(bus: B, config: Config) -> Self {
        Self { bus, config }
    }

    /// Create a service whose bus calls are bounded by
    /// `config.bus_timeout`.
    pub fn with_timeout(bus: B, config: Config) -> Service<TimeoutBus<B>> {
        Service {
            bus: TimeoutBus::new(bus, config.bus_timeout),
            config,
        }
    }

    pub const fn bus(&self) -> &B {
        &self.bus
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Check that `system` names the configured computer system.
    pub(crate) fn check_system(&self, system: &ResourceId) -> Result<(), Error> {
        if system.inner() == &self.config.system_name {
            Ok(())
        } else {
            Err(Error::ResourceNotFound {
                kind: "ComputerSystem",
                id: system.inner().clone(),
            })
        }
    }

    /// `/redfish/v1/Systems/{system}`
    pub(crate) fn system_id(&self) -> ODataId {
        ODataId::system(&self.config.system_name)
    }
}
