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

//! # Zi Augment Trait Module
//!
//! This module defines the contract every augmentation kind fulfills and the
//! parameter bag handed to augmentation constructors.
//!
//! ## Two-Phase Contract
//!
//! An augmentation takes part in a sampling request twice:
//!
//! - `prepare()`: runs before any data is fetched, in reverse pipeline order.
//!   It receives the fetch spec negotiated by the augmentations that run after
//!   it and returns the spec it needs the dataset to satisfy, for example a
//!   larger crop that it trims again after transforming.
//! - `augment()`: runs on the fetched sample, in pipeline order.
//!
//! ## Implementing Custom Augmentations
//!
//! ```rust
//! use zi_augment::augment::ZiAugment;
//! use zi_augment::errors::Result;
//! use zi_augment::sample::{ZiDataSpec, ZiSample};
//!
//! #[derive(Debug)]
//! struct Invert;
//!
//! impl ZiAugment for Invert {
//!     fn kind(&self) -> &'static str {
//!         "invert"
//!     }
//!
//!     fn prepare(&self, spec: ZiDataSpec) -> Result<ZiDataSpec> {
//!         Ok(spec)
//!     }
//!
//!     fn augment(&mut self, mut sample: ZiSample) -> Result<ZiSample> {
//!         if let Some(input) = sample.get_mut("input") {
//!             input.mapv_inplace(|v| 1.0 - v);
//!         }
//!         Ok(sample)
//!     }
//! }
//! ```

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::{Map, Value};

use crate::errors::{Result, ZiError};
use crate::sample::{ZiDataSpec, ZiSample};

/// Contract that every augmentation kind must fulfill.
///
/// `prepare` takes `&self`: the same instance is reused across many samples,
/// so spec negotiation may not depend on hidden state. `augment` takes
/// `&mut self` because randomized kinds advance their own generator.
pub trait ZiAugment: std::fmt::Debug + Send {
    /// Registry name of the augmentation kind, lower case.
    fn kind(&self) -> &'static str;

    /// Returns the fetch spec this augmentation needs, given the spec
    /// requested by the augmentations downstream of it.
    fn prepare(&self, spec: ZiDataSpec) -> Result<ZiDataSpec>;

    /// Transforms a sample. Keys the augmentation does not own stay untouched.
    fn augment(&mut self, sample: ZiSample) -> Result<ZiSample>;
}

/// Construction parameters for one augmentation, i.e. a spec entry without
/// its `type` field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZiAugmentParams {
    kind: String,
    values: Map<String, Value>,
}

impl ZiAugmentParams {
    #[allow(non_snake_case)]
    pub fn new(kind: impl Into<String>, values: Map<String, Value>) -> Self {
        Self {
            kind: kind.into(),
            values,
        }
    }

    /// Kind these parameters were supplied for.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Fails with a configuration error for any parameter outside `accepted`.
    pub fn reject_unknown(&self, accepted: &[&str]) -> Result<()> {
        match self
            .values
            .keys()
            .find(|name| !accepted.contains(&name.as_str()))
        {
            Some(name) => Err(self.error(name, "is not a recognized parameter")),
            None => Ok(()),
        }
    }

    pub fn optional_f64(&self, name: &str) -> Result<Option<f64>> {
        match self.values.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => value
                .as_f64()
                .map(Some)
                .ok_or_else(|| self.error(name, "must be a number")),
        }
    }

    pub fn optional_u64(&self, name: &str) -> Result<Option<u64>> {
        match self.values.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => value
                .as_u64()
                .map(Some)
                .ok_or_else(|| self.error(name, "must be a non-negative integer")),
        }
    }

    pub fn optional_string_list(&self, name: &str) -> Result<Option<Vec<String>>> {
        let items = match self.values.get(name) {
            None | Some(Value::Null) => return Ok(None),
            Some(Value::Array(items)) => items,
            Some(_) => return Err(self.error(name, "must be an array of strings")),
        };

        items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| self.error(name, "must be an array of strings"))
            })
            .collect::<Result<Vec<_>>>()
            .map(Some)
    }

    /// Random generator for a randomized kind: seeded from the `seed`
    /// parameter when present, from OS entropy otherwise.
    pub fn rng(&self) -> Result<SmallRng> {
        Ok(match self.optional_u64("seed")? {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        })
    }

    /// Configuration error naming this kind and the offending parameter.
    pub fn error(&self, name: &str, message: &str) -> ZiError {
        ZiError::configuration(&self.kind, format!("parameter '{name}' {message}"))
    }
}
