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

use log::warn;

use crate::augment::{ZiAugment, ZiAugmentParams};
use crate::augments::WARP;
use crate::errors::Result;
use crate::sample::{ZiDataSpec, ZiSample};

/// Warping placeholder.
///
/// Registered so that configurations naming `warp` build, but neither phase
/// changes anything: the spec is not enlarged and the sample is returned as
/// drawn.
#[derive(Debug, Default)]
pub struct ZiWarpAugment;

impl ZiAugment for ZiWarpAugment {
    fn kind(&self) -> &'static str {
        WARP
    }

    fn prepare(&self, spec: ZiDataSpec) -> Result<ZiDataSpec> {
        Ok(spec)
    }

    fn augment(&mut self, sample: ZiSample) -> Result<ZiSample> {
        Ok(sample)
    }
}

#[allow(non_snake_case)]
pub fn warp_factory(params: &ZiAugmentParams) -> Result<Box<dyn ZiAugment>> {
    params.reject_unknown(&[])?;
    warn!("warp augmentation is a pass-through placeholder");
    Ok(Box::new(ZiWarpAugment))
}
