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


mod config;

use clap::Parser;
use config::ConfigError;
use config::ServerConfig;
use nv_bmcweb::routes;
use nv_bmcweb::Service;
use nv_bmcweb_bus_mock::services;
use nv_bmcweb_bus_mock::Bus;
use nv_bmcweb_bus_mock::Inventory;
use std::io::Error as IoError;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::error;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Server CLI.
#[derive(Parser, Debug)]
#[command(name = "nv-bmcweb-server")]
#[command(about = "Redfish server over an inventory bus", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Listen address; overrides the configuration file.
    #[arg(long)]
    listen: Option<SocketAddr>,
    /// JSON inventory; overrides the configuration file.
    #[arg(long)]
    inventory: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Inventory(#[from] nv_bmcweb_bus_mock::Error),
    #[error("server error: {0}")]
    Io(#[from] IoError),
}

fn setup_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "cannot listen for shutdown signal");
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(fname) => ServerConfig::read(fname)?,
        None => ServerConfig::default(),
    };
    if let Some(listen) = cli.listen {
        config.listen = listen;
    }
    if let Some(inventory) = cli.inventory {
        config.inventory = Some(inventory);
    }
    setup_tracing(&config.log);

    let inventory = match &config.inventory {
        Some(fname) => Inventory::read(fname)?,
        None => Inventory::default(),
    };
    info!(
        objects = inventory.objects.len(),
        associations = inventory.associations.len(),
        "inventory loaded"
    );
    let bus = Bus::new(inventory);
    services::boot_option_manager(&bus);
    let service = Service::with_timeout(bus, config.service_config());

    let listener = TcpListener::bind(config.listen).await?;
    info!(listen = %config.listen, system = %config.system_name, "serving Redfish");
    axum::serve(listener, routes::router(service))
        .with_graceful_shutdown(shutdown())
        .await?;
    Ok(())
}
