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


//! Inventory bus client abstraction
//!
//! This module defines the transport-agnostic [`Bus`] trait. Implementors
//! provide a single asynchronous primitive, [`Bus::call`], which invokes a
//! method on an interface of an object owned by a service. Everything else
//! the engine needs (property access and mapper queries) is layered on top
//! of `call` as provided methods that encode arguments and decode replies.
//!
//! Key concepts:
//! - Addressing: `(service, object path, interface, method)`.
//! - Typed boundary: provided methods turn untyped replies into
//!   [`PropertyBag`], [`SubTree`] or [`ServiceMap`]. A reply with the wrong
//!   shape becomes [`BusError::BadReply`].
//! - No retries: every call is issued at most once.
//!
//! Notes for implementors:
//! - The trait is `Send + Sync` and returns `Send` futures so handlers can be
//!   served from a multithreaded runtime.
//! - Cancellation is structured: dropping the returned future abandons the
//!   call. Use [`crate::TimeoutBus`] to bound call latency.

use crate::mapper::decode_paths;
use crate::mapper::decode_sub_tree;
use crate::mapper::MAPPER_INTERFACE;
use crate::mapper::MAPPER_PATH;
use crate::mapper::MAPPER_SERVICE;
use crate::BusError;
use crate::ObjectPath;
use crate::PropertyBag;
use crate::ServiceMap;
use crate::ServiceName;
use crate::SubTree;
use crate::Variant;
use std::future::Future;

/// Standard properties interface.
pub const PROPERTIES_INTERFACE: &str = "org.freedesktop.DBus.Properties";

/// Bus trait defines access to the inventory/state bus.
pub trait Bus: Send + Sync {
    /// Invoke `method` of `interface` on `path` owned by `service`.
    ///
    /// Returns the reply values in order.
    fn call(
        &self,
        service: &ServiceName,
        path: &ObjectPath,
        interface: &str,
        method: &str,
        args: Vec<Variant>,
    ) -> impl Future<Output = Result<Vec<Variant>, BusError>> + Send;

    /// Read a single property.
    fn get_property(
        &self,
        service: &ServiceName,
        path: &ObjectPath,
        interface: &str,
        property: &str,
    ) -> impl Future<Output = Result<Variant, BusError>> + Send {
        async move {
            let reply = self
                .call(
                    service,
                    path,
                    PROPERTIES_INTERFACE,
                    "Get",
                    vec![interface.into(), property.into()],
                )
                .await?;
            match single(reply, "v")? {
                Variant::Variant(inner) => Ok(*inner),
                other => Err(BusError::bad_reply("v", &other)),
            }
        }
    }

    /// Read all properties of an interface.
    fn get_all_properties(
        &self,
        service: &ServiceName,
        path: &ObjectPath,
        interface: &str,
    ) -> impl Future<Output = Result<PropertyBag, BusError>> + Send {
        async move {
            let reply = self
                .call(
                    service,
                    path,
                    PROPERTIES_INTERFACE,
                    "GetAll",
                    vec![interface.into()],
                )
                .await?;
            PropertyBag::try_from(single(reply, "a{sv}")?)
                .map_err(|other| BusError::bad_reply("a{sv}", &other))
        }
    }

    /// Write a single property.
    fn set_property(
        &self,
        service: &ServiceName,
        path: &ObjectPath,
        interface: &str,
        property: &str,
        value: Variant,
    ) -> impl Future<Output = Result<(), BusError>> + Send {
        async move {
            self.call(
                service,
                path,
                PROPERTIES_INTERFACE,
                "Set",
                vec![
                    interface.into(),
                    property.into(),
                    Variant::Variant(Box::new(value)),
                ],
            )
            .await
            .map(|_| ())
        }
    }

    /// Find objects below `root` implementing any of `interfaces`.
    ///
    /// `depth` of 0 means unlimited.
    fn get_sub_tree(
        &self,
        root: &ObjectPath,
        depth: i32,
        interfaces: &[&str],
    ) -> impl Future<Output = Result<SubTree, BusError>> + Send {
        let args = mapper_args(root, depth, interfaces);
        async move {
            let reply = self
                .call(&mapper(), &mapper_path(), MAPPER_INTERFACE, "GetSubTree", args)
                .await?;
            decode_sub_tree(single(reply, "a{sa{sas}}")?)
        }
    }

    /// Like [`Bus::get_sub_tree`] but only returns the paths.
    fn get_sub_tree_paths(
        &self,
        root: &ObjectPath,
        depth: i32,
        interfaces: &[&str],
    ) -> impl Future<Output = Result<Vec<ObjectPath>, BusError>> + Send {
        let args = mapper_args(root, depth, interfaces);
        async move {
            let reply = self
                .call(
                    &mapper(),
                    &mapper_path(),
                    MAPPER_INTERFACE,
                    "GetSubTreePaths",
                    args,
                )
                .await?;
            decode_paths(single(reply, "as")?)
        }
    }

    /// Services implementing `path`, restricted to `interfaces` when not empty.
    fn get_object(
        &self,
        path: &ObjectPath,
        interfaces: &[&str],
    ) -> impl Future<Output = Result<ServiceMap, BusError>> + Send {
        let args = vec![
            Variant::String(path.to_string()),
            Variant::StringList(interfaces.iter().map(ToString::to_string).collect()),
        ];
        async move {
            let reply = self
                .call(&mapper(), &mapper_path(), MAPPER_INTERFACE, "GetObject", args)
                .await?;
            ServiceMap::try_from(single(reply, "a{sas}")?)
        }
    }
}

fn mapper() -> ServiceName {
    ServiceName::from(MAPPER_SERVICE)
}

fn mapper_path() -> ObjectPath {
    ObjectPath::from(MAPPER_PATH)
}

fn mapper_args(root: &ObjectPath, depth: i32, interfaces: &[&str]) -> Vec<Variant> {
    vec![
        Variant::String(root.to_string()),
        Variant::Int32(depth),
        Variant::StringList(interfaces.iter().map(ToString::to_string).collect()),
    ]
}

fn single(reply: Vec<Variant>, expected: &'static str) -> Result<Variant, BusError> {
    reply.into_iter().next().ok_or(BusError::BadReply {
        expected,
        found: "()".into(),
    })
}
