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

//! # Augmentor Configuration Module
//!
//! Declarative pipeline configuration, loadable from JSON or YAML.
//!
//! ```yaml
//! augmentations:
//!   - type: flip
//!     seed: 7
//!   - type: grey
//!     keys: [input]
//! ```
//!
//! A document that is a bare list is read as the augmentation list itself.
//! Entries are kept as raw JSON values; they are only validated when the
//! registry builds them.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{Result, ZiError};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZiAugmentorConfig {
    /// Spec entries in pipeline order.
    #[serde(default)]
    pub augmentations: Vec<Value>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ZiConfigDocument {
    List(Vec<Value>),
    Config(ZiAugmentorConfig),
}

impl From<ZiConfigDocument> for ZiAugmentorConfig {
    fn from(document: ZiConfigDocument) -> Self {
        match document {
            ZiConfigDocument::List(augmentations) => ZiAugmentorConfig { augmentations },
            ZiConfigDocument::Config(config) => config,
        }
    }
}

impl ZiAugmentorConfig {
    #[allow(non_snake_case)]
    pub fn new(augmentations: Vec<Value>) -> Self {
        Self { augmentations }
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let document: ZiConfigDocument = serde_json::from_value(value)?;
        Ok(document.into())
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let document: ZiConfigDocument = serde_json::from_str(text)?;
        Ok(document.into())
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let document: ZiConfigDocument = serde_yaml::from_str(text)?;
        Ok(document.into())
    }

    /// Loads a configuration file, choosing the format from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Self::from_json_str(&fs::read_to_string(path)?),
            "yaml" | "yml" => Self::from_yaml_str(&fs::read_to_string(path)?),
            other => Err(ZiError::configuration(
                "config",
                format!(
                    "unsupported config extension '{other}' for {}",
                    path.display()
                ),
            )),
        }
    }

    pub fn len(&self) -> usize {
        self.augmentations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.augmentations.is_empty()
    }
}
