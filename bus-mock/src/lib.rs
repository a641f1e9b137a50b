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


//! In-memory inventory bus.
//!
//! [`Bus`] implements [`nv_bmcweb_core::Bus`] over an [`Inventory`] held in
//! memory. It answers property calls, object mapper queries and association
//! lookups the way the real bus does, records every call it receives, and
//! can be told to fail or delay specific calls.

pub mod fault;
pub mod inventory;
pub mod services;

#[doc(inline)]
pub use fault::Call;
#[doc(inline)]
pub use fault::Fault;
#[doc(inline)]
pub use inventory::Inventory;

use nv_bmcweb_core::bus::PROPERTIES_INTERFACE;
use nv_bmcweb_core::mapper::encode_sub_tree;
use nv_bmcweb_core::mapper::ASSOCIATION_ENDPOINTS;
use nv_bmcweb_core::mapper::ASSOCIATION_INTERFACE;
use nv_bmcweb_core::mapper::MAPPER_INTERFACE;
use nv_bmcweb_core::mapper::MAPPER_SERVICE;
use nv_bmcweb_core::Bus as NvBus;
use nv_bmcweb_core::BusError;
use nv_bmcweb_core::ObjectPath;
use nv_bmcweb_core::PropertyBag;
use nv_bmcweb_core::ServiceMap;
use nv_bmcweb_core::ServiceName;
use nv_bmcweb_core::SubTree;
use nv_bmcweb_core::Variant;
use std::collections::BTreeMap;
use std::io::Error as IoError;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::time::Duration;
use tracing::debug;

/// Interface of objects that can be removed with `Delete`.
pub const DELETE_INTERFACE: &str = "xyz.openbmc_project.Object.Delete";

/// Errors of the mock itself (not of bus calls).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("input/output error: file: {path}: {1}", path = .0.display())]
    Io(PathBuf, IoError),
    #[error("invalid inventory: file: {path}: {1}", path = .0.display())]
    Json(PathBuf, serde_json::Error),
}

/// Custom method implementation.
pub type MethodHandler =
    Arc<dyn Fn(&mut Inventory, &ObjectPath, &[Variant]) -> Result<Vec<Variant>, BusError> + Send + Sync>;

#[derive(Default)]
struct State {
    inventory: Inventory,
    orphans: BTreeMap<ObjectPath, Vec<String>>,
    faults: Vec<Fault>,
    delays: BTreeMap<ObjectPath, Duration>,
    methods: BTreeMap<(String, String), MethodHandler>,
    calls: Vec<Call>,
}

#[derive(Default)]
pub struct Bus {
    state: Mutex<State>,
}

impl Bus {
    pub fn new(inventory: Inventory) -> Self {
        Self {
            state: Mutex::new(State {
                inventory,
                ..State::default()
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("not poisoned")
    }

    /// Add (or replace) an interface of an object.
    pub fn add_interface(
        &self,
        path: impl Into<ObjectPath>,
        service: impl Into<ServiceName>,
        interface: &str,
        properties: PropertyBag,
    ) {
        self.state()
            .inventory
            .objects
            .entry(path.into())
            .or_default()
            .entry(service.into())
            .or_default()
            .insert(interface.into(), properties);
    }

    /// Add association `name` of `path` pointing at `endpoints`.
    pub fn add_association(&self, path: impl Into<ObjectPath>, name: &str, endpoints: &[&str]) {
        self.state().inventory.associations.insert(
            path.into().child(name),
            endpoints.iter().copied().map(ObjectPath::from).collect(),
        );
    }

    /// Make the mapper report `path` with `interfaces` but no owning service.
    pub fn add_orphan(&self, path: impl Into<ObjectPath>, interfaces: &[&str]) {
        self.state().orphans.insert(
            path.into(),
            interfaces.iter().map(ToString::to_string).collect(),
        );
    }

    /// Fail calls matching `fault`.
    pub fn fail(&self, fault: Fault) {
        self.state().faults.push(fault);
    }

    /// Delay every call addressed to `path`.
    pub fn delay(&self, path: impl Into<ObjectPath>, delay: Duration) {
        self.state().delays.insert(path.into(), delay);
    }

    /// Implement `method` of `interface` for all objects.
    pub fn on_method<F>(&self, interface: &str, method: &str, handler: F)
    where
        F: Fn(&mut Inventory, &ObjectPath, &[Variant]) -> Result<Vec<Variant>, BusError>
            + Send
            + Sync
            + 'static,
    {
        self.state()
            .methods
            .insert((interface.into(), method.into()), Arc::new(handler));
    }

    /// Current value of a property.
    pub fn property(
        &self,
        path: &str,
        service: &str,
        interface: &str,
        property: &str,
    ) -> Option<Variant> {
        self.state()
            .inventory
            .objects
            .get(&ObjectPath::from(path))
            .and_then(|services| services.get(&ServiceName::from(service)))
            .and_then(|ifaces| ifaces.get(interface))
            .and_then(|bag| bag.get(property))
            .cloned()
    }

    /// Returns true if the object exists.
    pub fn has_object(&self, path: &str) -> bool {
        self.state()
            .inventory
            .objects
            .contains_key(&ObjectPath::from(path))
    }

    /// All calls received so far.
    pub fn calls(&self) -> Vec<Call> {
        self.state().calls.clone()
    }

    /// Calls that may have changed bus state.
    pub fn mutating_calls(&self) -> Vec<Call> {
        self.state()
            .calls
            .iter()
            .filter(|c| c.is_mutating())
            .cloned()
            .collect()
    }

    /// Forget recorded calls.
    pub fn clear_calls(&self) {
        self.state().calls.clear();
    }
}

impl NvBus for Bus {
    async fn call(
        &self,
        service: &ServiceName,
        path: &ObjectPath,
        interface: &str,
        method: &str,
        args: Vec<Variant>,
    ) -> Result<Vec<Variant>, BusError> {
        let call = Call {
            service: service.clone(),
            path: path.clone(),
            interface: interface.into(),
            method: method.into(),
            args,
        };
        debug!(%service, %path, interface, method, "mock bus call");
        let delay = {
            let mut state = self.state.lock().map_err(lock_error)?;
            state.calls.push(call.clone());
            state.delays.get(path).copied()
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        let mut state = self.state.lock().map_err(lock_error)?;
        if let Some(fault) = state.faults.iter().find(|f| f.matches(&call)) {
            return Err(fault.error.clone());
        }
        state.dispatch(&call)
    }
}

fn lock_error<T>(err: std::sync::PoisonError<T>) -> BusError {
    BusError::Io(format!("lock error: {err}"))
}

fn unknown(what: &str, detail: impl std::fmt::Display) -> BusError {
    BusError::from_name(
        &format!("org.freedesktop.DBus.Error.Unknown{what}"),
        detail.to_string(),
    )
}

fn string_arg<'a>(args: &'a [Variant], n: usize) -> Result<&'a str, BusError> {
    args.get(n)
        .and_then(Variant::as_str)
        .ok_or_else(|| BusError::InvalidArgument(format!("argument {n} must be a string")))
}

fn string_list_arg(args: &[Variant], n: usize) -> Result<Vec<String>, BusError> {
    args.get(n)
        .and_then(Variant::get::<Vec<String>>)
        .ok_or_else(|| BusError::InvalidArgument(format!("argument {n} must be a string list")))
}

/// Returns true if `path` is `root` or below it within `depth` levels
/// (0 is unlimited).
fn below(root: &str, path: &ObjectPath, depth: i32) -> bool {
    let rest = if root == "/" {
        path.as_str().strip_prefix('/')
    } else {
        path.as_str().strip_prefix(root).and_then(|rest| {
            if rest.is_empty() {
                Some(rest)
            } else {
                rest.strip_prefix('/')
            }
        })
    };
    match rest {
        None => false,
        Some("") => true,
        Some(rest) => {
            depth <= 0 || i32::try_from(rest.split('/').count()).map_or(false, |n| n <= depth)
        }
    }
}

impl State {
    fn dispatch(&mut self, call: &Call) -> Result<Vec<Variant>, BusError> {
        let args = call.args.as_slice();
        match (call.interface.as_str(), call.method.as_str()) {
            (PROPERTIES_INTERFACE, "Get") => self
                .get(&call.service, &call.path, string_arg(args, 0)?, string_arg(args, 1)?)
                .map(|v| vec![Variant::Variant(Box::new(v))]),
            (PROPERTIES_INTERFACE, "GetAll") => self
                .interface(&call.service, &call.path, string_arg(args, 0)?)
                .map(|bag| vec![bag.clone().into()]),
            (PROPERTIES_INTERFACE, "Set") => {
                let value = args
                    .get(2)
                    .map(Variant::unboxed)
                    .cloned()
                    .ok_or_else(|| BusError::InvalidArgument("missing value".into()))?;
                self.set(
                    &call.service,
                    &call.path,
                    string_arg(args, 0)?,
                    string_arg(args, 1)?,
                    value,
                )
                .map(|()| Vec::new())
            }
            (MAPPER_INTERFACE, "GetSubTree") if call.service.as_str() == MAPPER_SERVICE => {
                let tree = self.sub_tree(
                    string_arg(args, 0)?,
                    args.get(1).and_then(Variant::get::<i32>).unwrap_or(0),
                    &string_list_arg(args, 2)?,
                );
                Ok(vec![encode_sub_tree(tree)])
            }
            (MAPPER_INTERFACE, "GetSubTreePaths") if call.service.as_str() == MAPPER_SERVICE => {
                let tree = self.sub_tree(
                    string_arg(args, 0)?,
                    args.get(1).and_then(Variant::get::<i32>).unwrap_or(0),
                    &string_list_arg(args, 2)?,
                );
                Ok(vec![Variant::StringList(
                    tree.into_iter().map(|(p, _)| p.to_string()).collect(),
                )])
            }
            (MAPPER_INTERFACE, "GetObject") if call.service.as_str() == MAPPER_SERVICE => {
                let path = ObjectPath::from(string_arg(args, 0)?);
                let filter = string_list_arg(args, 1)?;
                self.service_map(&path, &filter)
                    .map(|map| vec![map.into()])
                    .ok_or_else(|| {
                        BusError::from_name(
                            "xyz.openbmc_project.Common.Error.ResourceNotFound",
                            path.to_string(),
                        )
                    })
            }
            (DELETE_INTERFACE, "Delete") => {
                self.interface(&call.service, &call.path, DELETE_INTERFACE)?;
                self.inventory.objects.remove(&call.path);
                Ok(Vec::new())
            }
            (interface, method) => {
                let handler = self
                    .methods
                    .get(&(interface.to_string(), method.to_string()))
                    .cloned()
                    .ok_or_else(|| unknown("Method", format!("{interface}.{method}")))?;
                handler(&mut self.inventory, &call.path, args)
            }
        }
    }

    fn interface(
        &self,
        service: &ServiceName,
        path: &ObjectPath,
        interface: &str,
    ) -> Result<&PropertyBag, BusError> {
        self.inventory
            .objects
            .get(path)
            .and_then(|services| services.get(service))
            .ok_or_else(|| unknown("Object", path))?
            .get(interface)
            .ok_or_else(|| unknown("Interface", interface))
    }

    fn get(
        &self,
        service: &ServiceName,
        path: &ObjectPath,
        interface: &str,
        property: &str,
    ) -> Result<Variant, BusError> {
        if let Ok(bag) = self.interface(service, path, interface) {
            return bag
                .get(property)
                .cloned()
                .ok_or_else(|| unknown("Property", property));
        }
        if service.as_str() == MAPPER_SERVICE && interface == ASSOCIATION_INTERFACE {
            let endpoints = self
                .inventory
                .associations
                .get(path)
                .ok_or_else(|| unknown("Object", path))?;
            return if property == ASSOCIATION_ENDPOINTS {
                Ok(Variant::StringList(
                    endpoints.iter().map(ToString::to_string).collect(),
                ))
            } else {
                Err(unknown("Property", property))
            };
        }
        self.interface(service, path, interface)
            .and_then(|_| Err(unknown("Property", property)))
    }

    fn set(
        &mut self,
        service: &ServiceName,
        path: &ObjectPath,
        interface: &str,
        property: &str,
        value: Variant,
    ) -> Result<(), BusError> {
        let slot = self
            .inventory
            .objects
            .get_mut(path)
            .and_then(|services| services.get_mut(service))
            .and_then(|ifaces| ifaces.get_mut(interface))
            .ok_or_else(|| unknown("Object", path))?;
        match slot.get(property) {
            None => Err(unknown("Property", property)),
            Some(current) if current.signature() != value.signature() => {
                Err(BusError::InvalidArgument(format!(
                    "{property}: expected {}, got {}",
                    current.signature(),
                    value.signature()
                )))
            }
            Some(_) => {
                slot.insert(property, value);
                Ok(())
            }
        }
    }

    fn service_map(&self, path: &ObjectPath, filter: &[String]) -> Option<ServiceMap> {
        if let Some(services) = self.inventory.objects.get(path) {
            let entries = services
                .iter()
                .filter(|(_, ifaces)| filter.is_empty() || ifaces.keys().any(|i| filter.contains(i)))
                .map(|(service, ifaces)| (service.clone(), ifaces.keys().cloned().collect()))
                .collect::<Vec<_>>();
            return (!entries.is_empty()).then(|| ServiceMap::new(entries));
        }
        self.orphans
            .get(path)
            .filter(|ifaces| filter.is_empty() || ifaces.iter().any(|i| filter.contains(i)))
            .map(|_| ServiceMap::default())
    }

    fn sub_tree(&self, root: &str, depth: i32, filter: &[String]) -> SubTree {
        let mut tree = self
            .inventory
            .objects
            .keys()
            .chain(self.orphans.keys())
            .filter(|path| below(root, path, depth))
            .filter_map(|path| self.service_map(path, filter).map(|map| (path.clone(), map)))
            .collect::<Vec<_>>();
        tree.sort_by(|(a, _), (b, _)| a.cmp(b));
        tree.dedup_by(|(a, _), (b, _)| a == b);
        tree
    }
}
