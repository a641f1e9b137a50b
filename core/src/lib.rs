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


//! Inventory bus vocabulary for nv-bmcweb.
//!
//! This crate describes the backend the Redfish engine talks to: an
//! object/interface/property bus with an object mapper that answers subtree
//! and association queries. It contains no transport; implementations of
//! [`Bus`] provide that.

/// Bus client trait.
pub mod bus;
/// Bus errors.
pub mod error;
/// Object mapper types.
pub mod mapper;
/// Object paths and service names.
pub mod path;
/// Call timeout decorator.
pub mod timeout;
/// Dynamically typed values.
pub mod variant;

#[doc(inline)]
pub use bus::Bus;
#[doc(inline)]
pub use error::BusError;
#[doc(inline)]
pub use mapper::ServiceMap;
#[doc(inline)]
pub use mapper::SubTree;
#[doc(inline)]
pub use path::ObjectPath;
#[doc(inline)]
pub use path::ServiceName;
#[doc(inline)]
pub use timeout::TimeoutBus;
#[doc(inline)]
pub use variant::FromVariant;
#[doc(inline)]
pub use variant::PropertyBag;
#[doc(inline)]
pub use variant::TypeMismatch;
#[doc(inline)]
pub use variant::Variant;
