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

//! # Zi Augment Core Library
//!
//! Zi Augment prepares training samples for a machine-learning training
//! loop. It builds a pipeline of volume augmentations (flip, greyscale
//! jitter, warp, misalignment) from declarative configuration and applies it
//! to samples drawn from a dataset.
//!
//! ## Module Overview
//!
//! - **errors**: `ZiError` and the crate-wide `Result` alias
//! - **sample**: volumes, samples and data-fetch specs
//! - **dataset**: the `ZiDataset` trait the augmentor draws samples from
//! - **transform**: geometric flip rules and greyscale adjustment
//! - **augment**: the `ZiAugment` trait and constructor parameters
//! - **augments**: built-in augmentation kinds
//! - **registry**: kind allow-list and name to constructor lookup
//! - **config**: JSON / YAML pipeline configuration
//! - **augmentor**: the `ZiAugmentor` pipeline
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use zi_augment::{ZiAugmentRegistry, ZiAugmentor};
//!
//! let registry = ZiAugmentRegistry::with_defaults();
//! let mut augmentor = ZiAugmentor::from_spec(
//!     &registry,
//!     &[json!({"type": "flip"}), json!({"type": "grey", "keys": ["input"]})],
//! )?;
//!
//! let (sample, transform) = augmentor.random_sample(&mut dataset)?;
//! ```
//!
//! ## Architecture
//!
//! 1. **Registry**: validates each entry's `type` against the known kinds
//!    and calls the bound constructor with the remaining fields
//! 2. **Prepare**: augmentations adjust the fetch spec in reverse order
//! 3. **Augment**: augmentations transform the drawn sample in order
//! 4. **Output**: samples leave the augmentor with sorted keys
//!
//! ## Error Handling
//!
//! All operations return `Result<T, ZiError>`. Configuration errors only
//! occur while a pipeline is built; sampling errors surface unchanged from
//! the augmentation or dataset that raised them.

pub mod errors;
pub mod sample;
pub mod dataset;
pub mod transform;
pub mod augment;
pub mod augments;
pub mod registry;
pub mod config;
pub mod augmentor;

pub use errors::{Result, ZiError};
pub use sample::{ZiDataSpec, ZiOrderedSample, ZiSample, ZiTransform, ZiVolume};
pub use dataset::ZiDataset;
pub use transform::{adjust_greyscale, flip_sample, flip_volume, ZiFlipRule};
pub use augment::{ZiAugment, ZiAugmentParams};
pub use augments::{ZiFlipAugment, ZiGreyAugment, ZiWarpAugment};
pub use registry::{ZiAugmentFactory, ZiAugmentRegistry};
pub use config::ZiAugmentorConfig;
pub use augmentor::ZiAugmentor;
