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

//! # Zi Dataset Module
//!
//! The augmentor never reads volumes from storage itself. It talks to a
//! dataset through the [`ZiDataset`] trait: first to learn the native fetch
//! spec, then to draw one random sample at the spec the augmentations
//! negotiated.

use crate::errors::Result;
use crate::sample::{ZiDataSpec, ZiSample, ZiTransform};

/// Source of raw training samples.
pub trait ZiDataset {
    /// Native fetch spec of the dataset. Must be deterministic.
    fn get_spec(&self) -> ZiDataSpec;

    /// Draws one random sample satisfying `spec`.
    ///
    /// The returned transform metadata is opaque to the augmentor and is
    /// handed back to the caller untouched.
    fn random_sample(&mut self, spec: &ZiDataSpec) -> Result<(ZiSample, ZiTransform)>;
}

impl<D: ZiDataset + ?Sized> ZiDataset for &mut D {
    fn get_spec(&self) -> ZiDataSpec {
        (**self).get_spec()
    }

    fn random_sample(&mut self, spec: &ZiDataSpec) -> Result<(ZiSample, ZiTransform)> {
        (**self).random_sample(spec)
    }
}

impl<D: ZiDataset + ?Sized> ZiDataset for Box<D> {
    fn get_spec(&self) -> ZiDataSpec {
        (**self).get_spec()
    }

    fn random_sample(&mut self, spec: &ZiDataSpec) -> Result<(ZiSample, ZiTransform)> {
        (**self).random_sample(spec)
    }
}
