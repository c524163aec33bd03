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

//! Greyscale value augmentation.
//!
//! Randomly adjusts contrast and brightness of each designated image volume
//! and applies a random gamma correction. Adapted from ELEKTRONN.

use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::augment::{ZiAugment, ZiAugmentParams};
use crate::augments::GREY;
use crate::errors::{Result, ZiError};
use crate::sample::{ZiDataSpec, ZiSample};
use crate::transform::adjust_greyscale;

pub const DEFAULT_CONTRAST_FACTOR: f32 = 0.3;
pub const DEFAULT_BRIGHTNESS_FACTOR: f32 = 0.3;
pub const DEFAULT_KEY: &str = "input";

const MAX_FACTOR: f64 = 2.0;

/// Parameters drawn for one volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZiGreyJitter {
    pub contrast: f32,
    pub brightness: f32,
    pub gamma: f32,
}

#[derive(Debug)]
pub struct ZiGreyAugment {
    keys: Vec<String>,
    contrast_factor: f32,
    brightness_factor: f32,
    rng: SmallRng,
}

impl ZiGreyAugment {
    #[allow(non_snake_case)]
    pub fn new(
        keys: Vec<String>,
        contrast_factor: f32,
        brightness_factor: f32,
        rng: SmallRng,
    ) -> Self {
        Self {
            keys,
            contrast_factor,
            brightness_factor,
            rng,
        }
    }

    /// Default factors on the `input` key.
    pub fn seeded(seed: u64) -> Self {
        Self::new(
            vec![DEFAULT_KEY.to_string()],
            DEFAULT_CONTRAST_FACTOR,
            DEFAULT_BRIGHTNESS_FACTOR,
            SmallRng::seed_from_u64(seed),
        )
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Contrast in `1 ± contrast_factor / 2`, brightness in
    /// `± brightness_factor / 2`, gamma in `[0.5, 2]` on a log scale.
    pub fn draw_jitter(&mut self) -> ZiGreyJitter {
        let contrast = 1.0 + (self.rng.gen::<f32>() - 0.5) * self.contrast_factor;
        let brightness = (self.rng.gen::<f32>() - 0.5) * self.brightness_factor;
        let gamma = 2.0f32.powf(self.rng.gen::<f32>() * 2.0 - 1.0);
        ZiGreyJitter {
            contrast,
            brightness,
            gamma,
        }
    }
}

impl ZiAugment for ZiGreyAugment {
    fn kind(&self) -> &'static str {
        GREY
    }

    fn prepare(&self, spec: ZiDataSpec) -> Result<ZiDataSpec> {
        for key in &self.keys {
            spec.require(GREY, key)?;
        }
        Ok(spec)
    }

    fn augment(&mut self, mut sample: ZiSample) -> Result<ZiSample> {
        for index in 0..self.keys.len() {
            let jitter = self.draw_jitter();
            let key = &self.keys[index];
            let volume = sample.get_mut(key).ok_or_else(|| {
                ZiError::spec(GREY, format!("sample has no volume for key '{key}'"))
            })?;
            debug!("grey jitter on '{}': {:?}", key, jitter);
            adjust_greyscale(volume, jitter.contrast, jitter.brightness, jitter.gamma);
        }
        Ok(sample)
    }
}

#[allow(non_snake_case)]
pub fn grey_factory(params: &ZiAugmentParams) -> Result<Box<dyn ZiAugment>> {
    params.reject_unknown(&["keys", "contrast_factor", "brightness_factor", "seed"])?;

    let keys = params
        .optional_string_list("keys")?
        .unwrap_or_else(|| vec![DEFAULT_KEY.to_string()]);
    if keys.is_empty() {
        return Err(params.error("keys", "may not be empty"));
    }

    let factor = |name: &str, default: f32| -> Result<f32> {
        match params.optional_f64(name)? {
            None => Ok(default),
            Some(value) if value.is_finite() && (0.0..=MAX_FACTOR).contains(&value) => {
                Ok(value as f32)
            }
            Some(_) => Err(params.error(name, "must be in [0, 2]")),
        }
    };
    let contrast_factor = factor("contrast_factor", DEFAULT_CONTRAST_FACTOR)?;
    let brightness_factor = factor("brightness_factor", DEFAULT_BRIGHTNESS_FACTOR)?;

    Ok(Box::new(ZiGreyAugment::new(
        keys,
        contrast_factor,
        brightness_factor,
        params.rng()?,
    )))
}
