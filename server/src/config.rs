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


//! Server configuration file.

use nv_bmcweb::Config;
use nv_bmcweb::DEFAULT_BUS_TIMEOUT;
use nv_bmcweb::DEFAULT_SYSTEM_NAME;
use serde::Deserialize;
use std::fs;
use std::io::Error as IoError;
use std::net::Ipv4Addr;
use std::net::SocketAddr;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;
use toml::de::Error as TomlError;

/// Errors of configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("input/output error: file: {path}: {1}", path = .0.display())]
    Io(PathBuf, IoError),
    #[error("invalid configuration: file: {path}: {1}", path = .0.display())]
    Toml(PathBuf, TomlError),
}

/// Contents of the TOML configuration file.
///
/// ```toml
/// listen = "127.0.0.1:8080"
/// system_name = "system"
/// bus_timeout_ms = 10000
/// inventory = "demos/inventory.json"
/// log = "info,nv_bmcweb=debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to accept HTTP connections on.
    pub listen: SocketAddr,
    /// Id of the computer system under `/redfish/v1/Systems`.
    pub system_name: String,
    /// Upper bound of a single bus call.
    pub bus_timeout_ms: u64,
    /// JSON inventory served by the bus.
    pub inventory: Option<PathBuf>,
    /// Log filter used when `RUST_LOG` is not set.
    pub log: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from((Ipv4Addr::LOCALHOST, 8080)),
            system_name: DEFAULT_SYSTEM_NAME.into(),
            bus_timeout_ms: u64::try_from(DEFAULT_BUS_TIMEOUT.as_millis()).unwrap_or(u64::MAX),
            inventory: None,
            log: "info".into(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// - `ConfigError::Io` if failed to read file
    /// - `ConfigError::Toml` if the content is not a valid configuration.
    pub fn read(fname: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(fname).map_err(|err| ConfigError::Io(fname.into(), err))?;
        toml::from_str(&content).map_err(|err| ConfigError::Toml(fname.into(), err))
    }

    /// Engine configuration.
    #[must_use]
    pub fn service_config(&self) -> Config {
        Config {
            system_name: self.system_name.clone(),
            bus_timeout: Duration::from_millis(self.bus_timeout_ms),
        }
    }
}
