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

#[path = "../common/mod.rs"]
mod common;

use common::{ramp, spec_of, ZiTDataset};
use serde_json::json;
use zi_augment::{
    flip_volume, ZiAugment, ZiAugmentRegistry, ZiAugmentor, ZiError, ZiFlipAugment, ZiFlipRule,
    ZiSample,
};

/// First seed whose first draw is `rule`.
fn seed_for(rule: ZiFlipRule) -> u64 {
    (0..10_000u64)
        .find(|seed| ZiFlipAugment::seeded(*seed).draw_rule() == rule)
        .expect("a seed producing the rule")
}

#[test]
fn flip_prepare_is_identity() {
    let flip = ZiFlipAugment::seeded(0);
    let spec = spec_of(&[("input", &[1, 18, 160, 160]), ("label", &[3, 18, 160, 160])]);
    assert_eq!(flip.prepare(spec.clone()).unwrap(), spec);
}

#[test]
fn seeded_flip_reflects_axes_one_and_three() {
    let rule = [true, false, true, false];
    let seed = seed_for(rule);
    let volume = ramp(&[2, 3, 4, 5]);

    for _ in 0..3 {
        let mut flip = ZiFlipAugment::seeded(seed);
        let mut sample = ZiSample::new();
        sample.insert("input".into(), volume.clone());

        let out = flip.augment(sample).unwrap().remove("input").unwrap();

        assert_eq!(out.shape(), volume.shape());
        for c in 0..2 {
            for z in 0..3 {
                for y in 0..4 {
                    for x in 0..5 {
                        assert_eq!(out[[c, z, y, x]], volume[[c, 2 - z, y, 4 - x]]);
                    }
                }
            }
        }
    }
}

#[test]
fn every_volume_gets_the_same_rule() {
    let mut flip = ZiFlipAugment::seeded(77);
    let volume = ramp(&[1, 2, 3, 3]);
    let mut sample = ZiSample::new();
    for key in ["input", "label", "mask"] {
        sample.insert(key.into(), volume.clone());
    }

    for _ in 0..8 {
        let out = flip.augment(sample.clone()).unwrap();
        assert_eq!(out["input"], out["label"]);
        assert_eq!(out["input"], out["mask"]);
    }
}

#[test]
fn seeded_pipelines_reproduce_each_other() {
    let registry = ZiAugmentRegistry::with_defaults();
    let spec = [json!({"type": "flip", "seed": 42})];
    let mut first = ZiAugmentor::from_spec(&registry, &spec).unwrap();
    let mut second = ZiAugmentor::from_spec(&registry, &spec).unwrap();
    let mut reference = ZiFlipAugment::seeded(42);

    let mut dataset = ZiTDataset::new(spec_of(&[("input", &[1, 2, 3, 4])]));
    for _ in 0..10 {
        let (a, _) = first.random_sample(&mut dataset).unwrap();
        let (b, _) = second.random_sample(&mut dataset).unwrap();
        let expected = flip_volume(ramp(&[1, 2, 3, 4]), reference.draw_rule()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a["input"], expected);
    }
}

#[test]
fn transpose_bit_swaps_y_and_x_shape() {
    let seed = seed_for([false, false, false, true]);
    let mut flip = ZiFlipAugment::seeded(seed);
    let mut sample = ZiSample::new();
    sample.insert("input".into(), ramp(&[1, 2, 3, 5]));

    let out = flip.augment(sample).unwrap();
    assert_eq!(out["input"].shape(), &[1, 2, 5, 3]);
}

#[test]
fn flip_rejects_volumes_that_are_not_4d() {
    let mut flip = ZiFlipAugment::seeded(1);
    let mut sample = ZiSample::new();
    sample.insert("input".into(), ramp(&[3, 4, 5]));
    assert!(matches!(flip.augment(sample).unwrap_err(), ZiError::Shape { .. }));
}
