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


//! HTTP routing of Redfish URIs to resource handlers.

use crate::handlers::bios;
use crate::handlers::boot_options;
use crate::handlers::chassis;
use crate::handlers::environment_metrics;
use crate::handlers::fabric;
use crate::handlers::finish;
use crate::handlers::memory;
use crate::handlers::pcie_slots;
use crate::handlers::processor;
use crate::handlers::sensors;
use crate::handlers::service_root;
use crate::handlers::system;
use crate::AsyncResp;
use crate::Error;
use crate::ResourceId;
use crate::Response;
use crate::Service;
use axum::body::Bytes;
use axum::extract::Path;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::response::Response as HttpResponse;
use axum::routing::get;
use axum::routing::post;
use axum::Json;
use axum::Router;
use http::Uri;
use nv_bmcweb_core::Bus;
use std::sync::Arc;
use tracing::debug;

impl IntoResponse for Response {
    fn into_response(self) -> HttpResponse {
        let (status, headers, body) = self.into_parts();
        (status, headers, [("OData-Version", "4.0")], Json(body)).into_response()
    }
}

type Shared<B> = State<Arc<Service<B>>>;
type Id = Path<ResourceId>;
type Ids = Path<(ResourceId, ResourceId)>;
type Ids3 = Path<(ResourceId, ResourceId, ResourceId)>;

/// Router serving every Redfish resource of `service`.
pub fn router<B: Bus + 'static>(service: Service<B>) -> Router {
    Router::new()
        .route("/redfish/v1", get(|| async { service_root::get() }))
        .route("/redfish/v1/", get(|| async { service_root::get() }))
        .route("/redfish/v1/Systems", get(systems::<B>))
        .route("/redfish/v1/Systems/{system}", get(system_get::<B>))
        .route(
            "/redfish/v1/Systems/{system}/Processors",
            get(processors::<B>),
        )
        .route(
            "/redfish/v1/Systems/{system}/Processors/{id}",
            get(processor_get::<B>).patch(processor_patch::<B>),
        )
        .route("/redfish/v1/Systems/{system}/Memory", get(memories::<B>))
        .route(
            "/redfish/v1/Systems/{system}/Memory/{id}",
            get(memory_get::<B>),
        )
        .route("/redfish/v1/Systems/{system}/Bios", get(bios_get::<B>))
        .route(
            "/redfish/v1/Systems/{system}/Bios/Settings",
            get(bios_settings::<B>)
                .patch(bios_patch::<B>)
                .put(bios_put::<B>),
        )
        .route(
            "/redfish/v1/Systems/{system}/Bios/Actions/Bios.ResetBios",
            post(bios_reset::<B>),
        )
        .route(
            "/redfish/v1/Systems/{system}/BootOptions",
            get(boot_option_collection::<B>).post(boot_option_create::<B>),
        )
        .route(
            "/redfish/v1/Systems/{system}/BootOptions/{id}",
            get(boot_option_get::<B>)
                .patch(boot_option_patch::<B>)
                .delete(boot_option_delete::<B>),
        )
        .route("/redfish/v1/Chassis", get(chassis_collection::<B>))
        .route("/redfish/v1/Chassis/{id}", get(chassis_get::<B>))
        .route(
            "/redfish/v1/Chassis/{id}/EnvironmentMetrics",
            get(environment_get::<B>).patch(environment_patch::<B>),
        )
        .route("/redfish/v1/Chassis/{id}/PCIeSlots", get(pcie_slots_get::<B>))
        .route("/redfish/v1/Chassis/{id}/Sensors", get(sensor_collection::<B>))
        .route(
            "/redfish/v1/Chassis/{id}/Sensors/{sensor}",
            get(sensor_get::<B>),
        )
        .route("/redfish/v1/Fabrics", get(fabrics::<B>))
        .route("/redfish/v1/Fabrics/{fabric}", get(fabric_get::<B>))
        .route(
            "/redfish/v1/Fabrics/{fabric}/Switches",
            get(switches::<B>),
        )
        .route(
            "/redfish/v1/Fabrics/{fabric}/Switches/{switch}",
            get(switch_get::<B>),
        )
        .route(
            "/redfish/v1/Fabrics/{fabric}/Switches/{switch}/Ports",
            get(ports::<B>),
        )
        .route(
            "/redfish/v1/Fabrics/{fabric}/Switches/{switch}/Ports/{port}",
            get(port_get::<B>),
        )
        .fallback(not_found)
        .with_state(Arc::new(service))
}

async fn not_found(uri: Uri) -> Response {
    debug!(%uri, "no route");
    finish(
        AsyncResp::new(),
        Err(Error::ResourceNotFound {
            kind: "Resource",
            id: uri.path().into(),
        }),
    )
}

async fn systems<B: Bus>(State(svc): Shared<B>) -> Response {
    system::collection(&svc)
}

async fn system_get<B: Bus>(State(svc): Shared<B>, Path(system): Id) -> Response {
    system::get(&svc, &system)
}

async fn processors<B: Bus>(State(svc): Shared<B>, Path(system): Id) -> Response {
    processor::collection(&svc, &system).await
}

async fn processor_get<B: Bus>(State(svc): Shared<B>, Path((system, id)): Ids) -> Response {
    processor::get(&svc, &system, &id).await
}

async fn processor_patch<B: Bus>(
    State(svc): Shared<B>,
    Path((system, id)): Ids,
    body: Bytes,
) -> Response {
    processor::patch(&svc, &system, &id, &body).await
}

async fn memories<B: Bus>(State(svc): Shared<B>, Path(system): Id) -> Response {
    memory::collection(&svc, &system).await
}

async fn memory_get<B: Bus>(State(svc): Shared<B>, Path((system, id)): Ids) -> Response {
    memory::get(&svc, &system, &id).await
}

async fn bios_get<B: Bus>(State(svc): Shared<B>, Path(system): Id) -> Response {
    bios::get(&svc, &system).await
}

async fn bios_settings<B: Bus>(State(svc): Shared<B>, Path(system): Id) -> Response {
    bios::settings(&svc, &system).await
}

async fn bios_patch<B: Bus>(State(svc): Shared<B>, Path(system): Id, body: Bytes) -> Response {
    bios::patch_settings(&svc, &system, &body).await
}

async fn bios_put<B: Bus>(State(svc): Shared<B>, Path(system): Id, body: Bytes) -> Response {
    bios::put_settings(&svc, &system, &body).await
}

async fn bios_reset<B: Bus>(State(svc): Shared<B>, Path(system): Id) -> Response {
    bios::reset(&svc, &system).await
}

async fn boot_option_collection<B: Bus>(State(svc): Shared<B>, Path(system): Id) -> Response {
    boot_options::collection(&svc, &system).await
}

async fn boot_option_create<B: Bus>(
    State(svc): Shared<B>,
    Path(system): Id,
    body: Bytes,
) -> Response {
    boot_options::create(&svc, &system, &body).await
}

async fn boot_option_get<B: Bus>(State(svc): Shared<B>, Path((system, id)): Ids) -> Response {
    boot_options::get(&svc, &system, &id).await
}

async fn boot_option_patch<B: Bus>(
    State(svc): Shared<B>,
    Path((system, id)): Ids,
    body: Bytes,
) -> Response {
    boot_options::patch(&svc, &system, &id, &body).await
}

async fn boot_option_delete<B: Bus>(State(svc): Shared<B>, Path((system, id)): Ids) -> Response {
    boot_options::delete(&svc, &system, &id).await
}

async fn chassis_collection<B: Bus>(State(svc): Shared<B>) -> Response {
    chassis::collection(&svc).await
}

async fn chassis_get<B: Bus>(State(svc): Shared<B>, Path(id): Id) -> Response {
    chassis::get(&svc, &id).await
}

async fn environment_get<B: Bus>(State(svc): Shared<B>, Path(id): Id) -> Response {
    environment_metrics::get(&svc, &id).await
}

async fn environment_patch<B: Bus>(State(svc): Shared<B>, Path(id): Id, body: Bytes) -> Response {
    environment_metrics::patch(&svc, &id, &body).await
}

async fn pcie_slots_get<B: Bus>(State(svc): Shared<B>, Path(id): Id) -> Response {
    pcie_slots::get(&svc, &id).await
}

async fn sensor_collection<B: Bus>(State(svc): Shared<B>, Path(id): Id) -> Response {
    sensors::collection(&svc, &id).await
}

async fn sensor_get<B: Bus>(State(svc): Shared<B>, Path((chassis, id)): Ids) -> Response {
    sensors::get(&svc, &chassis, &id).await
}

async fn fabrics<B: Bus>(State(svc): Shared<B>) -> Response {
    fabric::collection(&svc).await
}

async fn fabric_get<B: Bus>(State(svc): Shared<B>, Path(id): Id) -> Response {
    fabric::get(&svc, &id).await
}

async fn switches<B: Bus>(State(svc): Shared<B>, Path(id): Id) -> Response {
    fabric::switches(&svc, &id).await
}

async fn switch_get<B: Bus>(State(svc): Shared<B>, Path((fabric, id)): Ids) -> Response {
    fabric::get_switch(&svc, &fabric, &id).await
}

async fn ports<B: Bus>(State(svc): Shared<B>, Path((fabric, switch)): Ids) -> Response {
    fabric::ports(&svc, &fabric, &switch).await
}

async fn port_get<B: Bus>(State(svc): Shared<B>, Path((fabric, switch, id)): Ids3) -> Response {
    fabric::get_port(&svc, &fabric, &switch, &id).await
}
