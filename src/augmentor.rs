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

//! # Augmentor Pipeline Module
//!
//! [`ZiAugmentor`] owns an ordered list of augmentations and draws augmented
//! samples from a dataset.
//!
//! ## Sampling Request
//!
//! 1. The dataset reports its native fetch spec.
//! 2. Augmentations negotiate the spec from last to first, each one possibly
//!    enlarging what it needs.
//! 3. The dataset draws one random sample at the negotiated spec.
//! 4. Augmentations transform the sample from first to last.
//! 5. The sample is returned with its keys in sorted order, together with the
//!    dataset's transform metadata.
//!
//! Errors from any step are returned as they are; nothing is retried and no
//! partial sample is produced.

use log::{debug, info};
use serde_json::Value;

use crate::augment::ZiAugment;
use crate::config::ZiAugmentorConfig;
use crate::dataset::ZiDataset;
use crate::errors::{Result, ZiError};
use crate::registry::ZiAugmentRegistry;
use crate::sample::{into_ordered, ZiDataSpec, ZiOrderedSample, ZiTransform};

/// Linear augmentation pipeline.
#[derive(Debug, Default)]
pub struct ZiAugmentor {
    augments: Vec<Box<dyn ZiAugment>>,
}

impl ZiAugmentor {
    /// Constructs an augmentor from already-built augmentations.
    pub fn new(augments: Vec<Box<dyn ZiAugment>>) -> Self {
        ZiAugmentor { augments }
    }

    /// Builds an augmentor from declarative spec entries.
    pub fn from_spec(registry: &ZiAugmentRegistry, entries: &[Value]) -> Result<Self> {
        let augmentor = Self::new(registry.build_all(entries)?);
        info!("augmentor built with kinds {:?}", augmentor.kinds());
        Ok(augmentor)
    }

    pub fn from_config(registry: &ZiAugmentRegistry, config: &ZiAugmentorConfig) -> Result<Self> {
        Self::from_spec(registry, &config.augmentations)
    }

    pub fn len(&self) -> usize {
        self.augments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.augments.is_empty()
    }

    /// Augmentation kinds in pipeline order.
    pub fn kinds(&self) -> Vec<&'static str> {
        self.augments.iter().map(|augment| augment.kind()).collect()
    }

    /// Negotiates the fetch spec for one sampling request.
    pub fn prepare<D: ZiDataset + ?Sized>(&self, dataset: &D) -> Result<ZiDataSpec> {
        let mut spec = dataset.get_spec();
        for augment in self.augments.iter().rev() {
            spec = augment.prepare(spec)?;
            debug!("'{}' prepared spec {:?}", augment.kind(), spec);
        }
        Ok(spec)
    }

    /// Draws one augmented sample from `dataset`.
    pub fn random_sample<D: ZiDataset + ?Sized>(
        &mut self,
        dataset: &mut D,
    ) -> Result<(ZiOrderedSample, ZiTransform)> {
        let spec = self.prepare(&*dataset)?;
        let (mut sample, transform) = dataset.random_sample(&spec)?;
        for augment in self.augments.iter_mut() {
            sample = augment.augment(sample)?;
            debug!("'{}' augmented {} volume(s)", augment.kind(), sample.len());
        }
        Ok((into_ordered(sample), transform))
    }

    /// Sequential, non-random sampling. Not available.
    pub fn next_sample<D: ZiDataset + ?Sized>(
        &mut self,
        _dataset: &mut D,
    ) -> Result<(ZiOrderedSample, ZiTransform)> {
        Err(ZiError::not_implemented(
            "next_sample: sequential augmentation is not supported, use random_sample",
        ))
    }
}
