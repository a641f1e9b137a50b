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


//! JSON pointer writes.
//!
//! Handlers address response fields with JSON pointers (`/Status/State`).
//! Writes create intermediate objects as needed; a non-object value on the
//! way is replaced.

use serde_json::Map;
use serde_json::Value;

/// Set the value at `pointer`.
pub fn set(doc: &mut Value, pointer: &str, value: Value) {
    *slot(doc, pointer) = value;
}

/// Append `value` to the array at `pointer`, creating the array if needed.
pub fn append(doc: &mut Value, pointer: &str, value: Value) {
    extend(doc, pointer, [value]);
}

/// Append all `values` to the array at `pointer`.
///
/// The array is created even if `values` is empty.
pub fn extend(doc: &mut Value, pointer: &str, values: impl IntoIterator<Item = Value>) {
    let slot = slot(doc, pointer);
    if !slot.is_array() {
        *slot = Value::Array(Vec::new());
    }
    if let Value::Array(items) = slot {
        items.extend(values);
    }
}

/// Deep merge of `patch` into `doc`. Objects are merged key by key, any
/// other value replaces the target.
pub fn merge(doc: &mut Value, patch: Value) {
    match (doc, patch) {
        (Value::Object(target), Value::Object(patch)) => {
            for (key, value) in patch {
                merge(target.entry(key).or_insert(Value::Null), value);
            }
        }
        (doc, patch) => *doc = patch,
    }
}

fn slot<'a>(mut node: &'a mut Value, pointer: &str) -> &'a mut Value {
    for key in pointer.split('/').skip(1) {
        if !node.is_object() {
            *node = Value::Object(Map::new());
        }
        node = match node {
            Value::Object(map) => map
                .entry(key.replace("~1", "/").replace("~0", "~"))
                .or_insert(Value::Null),
            other => other,
        };
    }
    node
}
