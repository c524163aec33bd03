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

//! # Zi Transform Module
//!
//! Geometric and intensity helpers used by the built-in augmentations.
//!
//! ## Flip Rule
//!
//! A flip rule is four booleans applied to a `(channel, z, y, x)` volume:
//!
//! | bit | effect |
//! |-----|--------|
//! | 0 | reflect z (axis 1) |
//! | 1 | reflect y (axis 2) |
//! | 2 | reflect x (axis 3) |
//! | 3 | transpose y and x (swap axes 2 and 3) |
//!
//! Reflections are applied before the transpose. The channel axis is never
//! touched.

use ndarray::Axis;

use crate::errors::{Result, ZiError};
use crate::sample::{ZiSample, ZiVolume};

/// Four-bit geometric flip rule; see the module docs for the bit layout.
pub type ZiFlipRule = [bool; 4];

const Z_AXIS: usize = 1;
const Y_AXIS: usize = 2;
const X_AXIS: usize = 3;

/// Applies `rule` to a single `(c, z, y, x)` volume.
///
/// The result is returned in standard (row-major) layout.
pub fn flip_volume(volume: ZiVolume, rule: ZiFlipRule) -> Result<ZiVolume> {
    if volume.ndim() != 4 {
        return Err(ZiError::shape(format!(
            "flip expects a 4-D (c, z, y, x) volume, got {}-D with shape {:?}",
            volume.ndim(),
            volume.shape()
        )));
    }

    let mut out = volume;
    for (flag, axis) in [(rule[0], Z_AXIS), (rule[1], Y_AXIS), (rule[2], X_AXIS)] {
        if flag {
            out.invert_axis(Axis(axis));
        }
    }
    if rule[3] {
        out.swap_axes(Y_AXIS, X_AXIS);
    }

    if !out.is_standard_layout() {
        let standard = out.as_standard_layout().into_owned();
        out = standard;
    }
    Ok(out)
}

/// Applies the same rule to every volume in a sample.
///
/// Fails on the first volume that is not 4-D; keys are preserved.
pub fn flip_sample(sample: ZiSample, rule: ZiFlipRule) -> Result<ZiSample> {
    sample
        .into_iter()
        .map(|(key, volume)| {
            let flipped = flip_volume(volume, rule).map_err(|err| match err {
                ZiError::Shape { message } => ZiError::shape(format!("key '{key}': {message}")),
                other => other,
            })?;
            Ok((key, flipped))
        })
        .collect()
}

/// Greyscale jitter: `v := clip(v * contrast + brightness, 0, 1) ^ gamma`.
pub fn adjust_greyscale(volume: &mut ZiVolume, contrast: f32, brightness: f32, gamma: f32) {
    volume.mapv_inplace(|value| (value * contrast + brightness).clamp(0.0, 1.0).powf(gamma));
}
