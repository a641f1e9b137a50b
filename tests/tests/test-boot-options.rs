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


//! Integration tests of boot options.

use http::header::LOCATION;
use http::StatusCode;
use nv_bmcweb::handlers::boot_options;
use nv_bmcweb_core::Variant;
use nv_bmcweb_tests::error_names;
use nv_bmcweb_tests::id;
use nv_bmcweb_tests::platform;
use nv_bmcweb_tests::service;
use nv_bmcweb_tests::success_names;
use nv_bmcweb_tests::BOOT_OPTION;
use nv_bmcweb_tests::BOOT_OPTION_IFACE;
use nv_bmcweb_tests::CONTROL_SERVICE;
use nv_bmcweb_tests::ODATA_ID;
use serde_json::json;
use std::error::Error as StdError;
use tokio::test;

const OPTIONS: &str = "/redfish/v1/Systems/system/BootOptions";

#[test]
async fn boot_option_document() -> Result<(), Box<dyn StdError>> {
    let svc = service(platform());
    let resp = boot_options::collection(&svc, &id("system")).await;
    assert_eq!(
        resp.body()["Members"],
        json!([{ODATA_ID: format!("{OPTIONS}/Pxe0")}])
    );

    let resp = boot_options::get(&svc, &id("system"), &id("Pxe0")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.body();
    assert_eq!(body["BootOptionReference"], "Pxe0");
    assert_eq!(body["DisplayName"], "Network boot");
    assert_eq!(body["UefiDevicePath"], "PciRoot(0x0)/Pci(0x1,0x0)");
    assert_eq!(body["BootOptionEnabled"], true);
    Ok(())
}

#[test]
async fn create_boot_option() -> Result<(), Box<dyn StdError>> {
    let svc = service(platform());
    let body = json!({
        "BootOptionReference": "Disk0",
        "UefiDevicePath": "PciRoot(0x0)/Pci(0x2,0x0)/NVMe(0x1)",
        "BootOptionEnabled": false,
    })
    .to_string();
    let resp = boot_options::create(&svc, &id("system"), body.as_bytes()).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(
        resp.headers().get(LOCATION).map(|v| v.as_bytes()),
        Some(format!("{OPTIONS}/Disk0").as_bytes())
    );
    assert_eq!(success_names(&resp), ["Success"]);

    let resp = boot_options::get(&svc, &id("system"), &id("Disk0")).await;
    assert_eq!(resp.body()["DisplayName"], "Disk0");
    assert_eq!(resp.body()["BootOptionEnabled"], false);

    let resp = boot_options::collection(&svc, &id("system")).await;
    assert_eq!(resp.body()["Members@odata.count"], 2);
    Ok(())
}

#[test]
async fn create_existing_boot_option() -> Result<(), Box<dyn StdError>> {
    let svc = service(platform());
    let body = json!({"BootOptionReference": "Pxe0", "UefiDevicePath": "PciRoot(0x0)"}).to_string();
    let resp = boot_options::create(&svc, &id("system"), body.as_bytes()).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert_eq!(error_names(&resp), ["ResourceAlreadyExists"]);
    assert!(svc.bus().mutating_calls().is_empty());
    Ok(())
}

#[test]
async fn create_requires_device_path() -> Result<(), Box<dyn StdError>> {
    let svc = service(platform());
    let body = json!({"BootOptionReference": "Disk0"}).to_string();
    let resp = boot_options::create(&svc, &id("system"), body.as_bytes()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_names(&resp), ["PropertyMissing"]);
    assert_eq!(
        resp.body()["error"]["@Message.ExtendedInfo"][0]["MessageArgs"],
        json!(["UefiDevicePath"])
    );
    assert!(svc.bus().calls().is_empty());
    Ok(())
}

#[test]
async fn patch_boot_option() -> Result<(), Box<dyn StdError>> {
    let svc = service(platform());
    let body = json!({"DisplayName": "PXE IPv4", "BootOptionEnabled": false}).to_string();
    let resp = boot_options::patch(&svc, &id("system"), &id("Pxe0"), body.as_bytes()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let bus = svc.bus();
    assert_eq!(
        bus.property(BOOT_OPTION, CONTROL_SERVICE, BOOT_OPTION_IFACE, "DisplayName"),
        Some(Variant::from("PXE IPv4"))
    );
    assert_eq!(
        bus.property(BOOT_OPTION, CONTROL_SERVICE, BOOT_OPTION_IFACE, "Enabled"),
        Some(Variant::Bool(false))
    );

    bus.clear_calls();
    let body = json!({"UefiDevicePath": "PciRoot(0x1)"}).to_string();
    let resp = boot_options::patch(&svc, &id("system"), &id("Pxe0"), body.as_bytes()).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(error_names(&resp), ["PropertyNotWritable"]);
    assert!(bus.calls().is_empty());
    Ok(())
}

#[test]
async fn delete_boot_option() -> Result<(), Box<dyn StdError>> {
    let svc = service(platform());
    let resp = boot_options::delete(&svc, &id("system"), &id("Pxe0")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(!svc.bus().has_object(BOOT_OPTION));

    let resp = boot_options::get(&svc, &id("system"), &id("Pxe0")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let resp = boot_options::delete(&svc, &id("system"), &id("Pxe0")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}
