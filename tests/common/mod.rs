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

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use ndarray::{Array, IxDyn};
use serde_json::{json, Value};
use zi_augment::errors::{Result, ZiError};
use zi_augment::{ZiAugment, ZiDataSpec, ZiDataset, ZiSample, ZiTransform, ZiVolume};

/// Volume whose elements count up from zero in row-major order.
pub fn ramp(shape: &[usize]) -> ZiVolume {
    let len = shape.iter().product::<usize>();
    Array::from_shape_vec(IxDyn(shape), (0..len).map(|v| v as f32).collect()).unwrap()
}

/// Same as [`ramp`] but scaled into `[0, 1)`.
pub fn unit_ramp(shape: &[usize]) -> ZiVolume {
    let len = shape.iter().product::<usize>() as f32;
    ramp(shape).mapv(|v| v / len)
}

pub fn spec_of(entries: &[(&str, &[usize])]) -> ZiDataSpec {
    entries
        .iter()
        .map(|(key, shape)| (key.to_string(), shape.to_vec()))
        .collect()
}

/// Dataset producing a ramp volume for every key of the requested spec and
/// recording each spec it was asked for.
pub struct ZiTDataset {
    spec: ZiDataSpec,
    pub requested: Vec<ZiDataSpec>,
}

impl ZiTDataset {
    pub fn new(spec: ZiDataSpec) -> Self {
        Self {
            spec,
            requested: Vec::new(),
        }
    }

    pub fn transform_for(draw: usize) -> Value {
        json!({"draw": draw, "origin": [0, 12, 40, 40]})
    }
}

impl ZiDataset for ZiTDataset {
    fn get_spec(&self) -> ZiDataSpec {
        self.spec.clone()
    }

    fn random_sample(&mut self, spec: &ZiDataSpec) -> Result<(ZiSample, ZiTransform)> {
        self.requested.push(spec.clone());
        let sample = spec
            .iter()
            .map(|(key, shape)| (key.to_string(), ramp(shape)))
            .collect();
        Ok((sample, Self::transform_for(self.requested.len())))
    }
}

/// Dataset that always fails to draw.
pub struct ZiTBrokenDataset;

impl ZiDataset for ZiTBrokenDataset {
    fn get_spec(&self) -> ZiDataSpec {
        spec_of(&[("input", &[1, 2, 2, 2])])
    }

    fn random_sample(&mut self, _spec: &ZiDataSpec) -> Result<(ZiSample, ZiTransform)> {
        Err(ZiError::dataset("volume store offline"))
    }
}

pub type ZiTCallLog = Arc<Mutex<Vec<String>>>;

pub fn call_log() -> ZiTCallLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn calls(log: &ZiTCallLog) -> Vec<String> {
    log.lock().unwrap().clone()
}

/// Identity augmentation recording every phase it takes part in.
#[derive(Debug)]
pub struct ZiTRecording {
    pub name: &'static str,
    pub log: ZiTCallLog,
}

impl ZiAugment for ZiTRecording {
    fn kind(&self) -> &'static str {
        self.name
    }

    fn prepare(&self, spec: ZiDataSpec) -> Result<ZiDataSpec> {
        self.log.lock().unwrap().push(format!("prepare:{}", self.name));
        Ok(spec)
    }

    fn augment(&mut self, sample: ZiSample) -> Result<ZiSample> {
        self.log.lock().unwrap().push(format!("augment:{}", self.name));
        Ok(sample)
    }
}
