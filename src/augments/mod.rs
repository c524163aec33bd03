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

//! # Augments Module
//!
//! Built-in augmentation kinds. Each kind lives in its own module and exposes
//! a struct implementing [`ZiAugment`](crate::augment::ZiAugment) plus a
//! factory function that the registry binds to the kind name.
//!
//! ## Kinds
//!
//! - **flip**: random reflections and xy transpose of every volume
//! - **grey**: contrast, brightness and gamma jitter of designated image keys
//! - **warp**: placeholder, passes spec and sample through
//! - **misalign**: known kind without a built-in constructor; callers register
//!   their own implementation

pub mod flip;
pub mod grey;
pub mod warp;

pub use flip::{flip_factory, ZiFlipAugment};
pub use grey::{grey_factory, ZiGreyAugment, ZiGreyJitter};
pub use warp::{warp_factory, ZiWarpAugment};

pub const FLIP: &str = "flip";
pub const GREY: &str = "grey";
pub const WARP: &str = "warp";
pub const MISALIGN: &str = "misalign";

/// Kinds declared by [`ZiAugmentRegistry::with_defaults`](crate::registry::ZiAugmentRegistry::with_defaults).
///
/// Every new augmentation kind must be appended here.
pub const DEFAULT_KINDS: [&str; 4] = [FLIP, GREY, WARP, MISALIGN];
