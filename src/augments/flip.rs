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

use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::augment::{ZiAugment, ZiAugmentParams};
use crate::augments::FLIP;
use crate::errors::Result;
use crate::sample::{ZiDataSpec, ZiSample};
use crate::transform::{flip_sample, ZiFlipRule};

/// Random flip: four fair coin tosses per sample pick a reflection and
/// transpose rule that is applied to every volume alike.
#[derive(Debug)]
pub struct ZiFlipAugment {
    rng: SmallRng,
}

impl ZiFlipAugment {
    #[allow(non_snake_case)]
    pub fn new(rng: SmallRng) -> Self {
        Self { rng }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Draws the next rule from the internal generator.
    pub fn draw_rule(&mut self) -> ZiFlipRule {
        std::array::from_fn(|_| self.rng.gen_bool(0.5))
    }
}

impl ZiAugment for ZiFlipAugment {
    fn kind(&self) -> &'static str {
        FLIP
    }

    fn prepare(&self, spec: ZiDataSpec) -> Result<ZiDataSpec> {
        Ok(spec)
    }

    fn augment(&mut self, sample: ZiSample) -> Result<ZiSample> {
        let rule = self.draw_rule();
        debug!("flip rule {:?} over {} volume(s)", rule, sample.len());
        flip_sample(sample, rule)
    }
}

#[allow(non_snake_case)]
pub fn flip_factory(params: &ZiAugmentParams) -> Result<Box<dyn ZiAugment>> {
    params.reject_unknown(&["seed"])?;
    Ok(Box::new(ZiFlipAugment::new(params.rng()?)))
}
