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

//! # Augmentation Registry Module
//!
//! This module maps augmentation kind names to constructor functions and
//! turns declarative spec entries into augmentation instances.
//!
//! ## Registry Operations
//!
//! - Declare known kinds (the allow-list)
//! - Bind constructor functions to known kinds
//! - Create augmentation instances from configuration entries
//!
//! A kind can be known without a constructor. `misalign` is declared by
//! [`ZiAugmentRegistry::with_defaults`] but its implementation lives outside
//! this crate, so callers bind it with [`ZiAugmentRegistry::register`] before
//! building a pipeline that uses it.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use log::debug;
use serde_json::Value;

use crate::augment::{ZiAugment, ZiAugmentParams};
use crate::augments::{self, FLIP, GREY, WARP};
use crate::errors::{Result, ZiError};

/// Given the parameters of a spec entry, returns a boxed augmentation.
pub type ZiAugmentFactory = fn(&ZiAugmentParams) -> Result<Box<dyn ZiAugment>>;

/// Name of the field selecting the augmentation kind in a spec entry.
pub const TYPE_FIELD: &str = "type";

/// Registry of known augmentation kinds and their constructors.
#[derive(Clone, Default)]
pub struct ZiAugmentRegistry {
    known: BTreeSet<String>,
    factories: HashMap<String, ZiAugmentFactory>,
}

impl ZiAugmentRegistry {
    /// Creates an empty registry that knows no kinds.
    #[allow(non_snake_case)]
    pub fn new() -> Self {
        ZiAugmentRegistry {
            known: BTreeSet::new(),
            factories: HashMap::new(),
        }
    }

    /// Creates a registry declaring the bundled kinds, with constructors for
    /// `flip`, `grey` and `warp`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for kind in augments::DEFAULT_KINDS {
            registry.declare(kind);
        }
        registry.register(FLIP, augments::flip_factory as ZiAugmentFactory);
        registry.register(GREY, augments::grey_factory as ZiAugmentFactory);
        registry.register(WARP, augments::warp_factory as ZiAugmentFactory);
        registry
    }

    /// Adds a kind to the allow-list.
    pub fn declare(&mut self, kind: &str) {
        self.known.insert(kind.to_lowercase());
    }

    /// Declares a kind and binds its constructor, replacing any previous one.
    pub fn register(&mut self, kind: &str, factory: ZiAugmentFactory) {
        let kind = kind.to_lowercase();
        self.known.insert(kind.clone());
        self.factories.insert(kind, factory);
    }

    pub fn is_known(&self, kind: &str) -> bool {
        self.known.contains(&kind.to_lowercase())
    }

    pub fn is_registered(&self, kind: &str) -> bool {
        self.factories.contains_key(&kind.to_lowercase())
    }

    /// Known kinds in sorted order.
    pub fn known_kinds(&self) -> Vec<&str> {
        self.known.iter().map(String::as_str).collect()
    }

    /// Looks up the constructor for a kind, validating it against the allow-list.
    pub fn get(&self, kind: &str) -> Result<ZiAugmentFactory> {
        let kind = kind.to_lowercase();
        if !self.known.contains(&kind) {
            return Err(ZiError::configuration(
                &kind,
                format!("unknown data augmentation type [{kind}]"),
            ));
        }
        self.factories.get(&kind).copied().ok_or_else(|| {
            ZiError::configuration(
                &kind,
                format!("no constructor registered for data augmentation type [{kind}]"),
            )
        })
    }

    /// Builds one augmentation from a spec entry.
    ///
    /// The entry is read, never modified: every field except `type` is copied
    /// into the parameters handed to the constructor.
    pub fn build(&self, entry: &Value) -> Result<Box<dyn ZiAugment>> {
        let object = entry.as_object().ok_or_else(|| {
            ZiError::configuration(TYPE_FIELD, "augmentation entry must be an object")
        })?;

        let kind = object
            .get(TYPE_FIELD)
            .and_then(Value::as_str)
            .ok_or_else(|| {
                ZiError::configuration(TYPE_FIELD, "augmentation entry missing string 'type'")
            })?
            .to_lowercase();

        let factory = self.get(&kind)?;
        let values = object
            .iter()
            .filter(|(name, _)| name.as_str() != TYPE_FIELD)
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();

        factory(&ZiAugmentParams::new(kind, values))
    }

    /// Builds the augmentations for a sequence of entries, preserving order.
    pub fn build_all(&self, entries: &[Value]) -> Result<Vec<Box<dyn ZiAugment>>> {
        let mut augments = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let augment = self.build(entry)?;
            debug!("built augmentation #{} '{}'", index, augment.kind());
            augments.push(augment);
        }
        Ok(augments)
    }
}

impl fmt::Debug for ZiAugmentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut registered: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        registered.sort_unstable();
        f.debug_struct("ZiAugmentRegistry")
            .field("known", &self.known)
            .field("registered", &registered)
            .finish()
    }
}
