//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zi Augment.
//! The Zi project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Zi Sample Module
//!
//! This module provides the data structures that flow through an augmentor:
//! fetch specs travel backward through the augmentation chain, samples travel
//! forward.
//!
//! ## Design Principles
//!
//! - **Volumes**: every volume is a dynamic-rank `ndarray` array. Geometric
//!   augmentations read it as `(channel, z, y, x)`.
//! - **Unordered in flight**: augmentations may insert or replace keys freely,
//!   so an in-flight sample is a hash map.
//! - **Ordered on output**: the augmentor hands back a `BTreeMap`, so the
//!   sorted key order of a finished sample is a property of its type.
//!
//! ## Usage Example
//!
//! ```rust
//! use zi_augment::sample::{ZiDataSpec, ZiSample, ZiVolume, into_ordered};
//!
//! let mut spec = ZiDataSpec::new();
//! spec.insert("input", vec![1, 18, 160, 160]);
//!
//! let mut sample = ZiSample::new();
//! sample.insert("label".into(), ZiVolume::zeros(vec![3, 18, 160, 160]));
//! sample.insert("input".into(), ZiVolume::zeros(vec![1, 18, 160, 160]));
//! let ordered = into_ordered(sample);
//! assert_eq!(ordered.keys().next().map(String::as_str), Some("input"));
//! ```

use std::collections::{BTreeMap, HashMap};

use ndarray::ArrayD;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{Result, ZiError};

/// A single named volume, laid out as `(channel, z, y, x)`.
pub type ZiVolume = ArrayD<f32>;

/// In-flight sample: key to volume, no ordering guarantees.
pub type ZiSample = HashMap<String, ZiVolume>;

/// Finished sample with keys in ascending lexicographic order.
pub type ZiOrderedSample = BTreeMap<String, ZiVolume>;

/// Opaque transform metadata returned by a dataset alongside a sample.
///
/// The augmentor never inspects it; it is returned to the caller exactly as
/// the dataset produced it.
pub type ZiTransform = Value;

/// Re-keys a sample into sorted key order.
pub fn into_ordered(sample: ZiSample) -> ZiOrderedSample {
    sample.into_iter().collect()
}

/// Data-fetch specification: which keys to draw and at which shape.
///
/// The dataset owns the meaning of each shape; augmentations only enlarge or
/// adjust entries they need extra context for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZiDataSpec {
    entries: BTreeMap<String, Vec<usize>>,
}

impl ZiDataSpec {
    #[allow(non_snake_case)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the shape requested for `key`, returning the old one.
    pub fn insert(&mut self, key: impl Into<String>, shape: Vec<usize>) -> Option<Vec<usize>> {
        self.entries.insert(key.into(), shape)
    }

    pub fn get(&self, key: &str) -> Option<&[usize]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Returns the shape for `key` or a spec error attributed to `augment`.
    pub fn require(&self, augment: &str, key: &str) -> Result<&[usize]> {
        self.get(key).ok_or_else(|| {
            ZiError::spec(augment, format!("fetch spec has no entry for key '{key}'"))
        })
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Vec<usize>> {
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[usize])> {
        self.entries
            .iter()
            .map(|(key, shape)| (key.as_str(), shape.as_slice()))
    }
}

impl From<BTreeMap<String, Vec<usize>>> for ZiDataSpec {
    fn from(entries: BTreeMap<String, Vec<usize>>) -> Self {
        ZiDataSpec { entries }
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<usize>)> for ZiDataSpec {
    fn from_iter<I: IntoIterator<Item = (K, Vec<usize>)>>(iter: I) -> Self {
        ZiDataSpec {
            entries: iter
                .into_iter()
                .map(|(key, shape)| (key.into(), shape))
                .collect(),
        }
    }
}
