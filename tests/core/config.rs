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

use std::fs;

use common::{spec_of, ZiTDataset};
use serde_json::json;
use tempfile::tempdir;
use zi_augment::{ZiAugmentRegistry, ZiAugmentor, ZiAugmentorConfig, ZiError};

#[test]
fn load_json_config_and_sample() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("augment.json");
    fs::write(
        &path,
        r#"{"augmentations": [{"type": "flip", "seed": 1}, {"type": "grey", "keys": ["input"]}]}"#,
    )
    .unwrap();

    let config = ZiAugmentorConfig::load(&path).unwrap();
    assert_eq!(config.len(), 2);

    let registry = ZiAugmentRegistry::with_defaults();
    let mut augmentor = ZiAugmentor::from_config(&registry, &config).unwrap();
    assert_eq!(augmentor.kinds(), vec!["flip", "grey"]);

    let mut dataset = ZiTDataset::new(spec_of(&[("input", &[1, 2, 2, 2])]));
    let (sample, _) = augmentor.random_sample(&mut dataset).unwrap();
    assert_eq!(sample.len(), 1);
}

#[test]
fn load_yaml_config_with_either_extension() {
    let dir = tempdir().unwrap();
    let text = "augmentations:\n  - type: Warp\n  - type: flip\n    seed: 3\n";
    for name in ["augment.yaml", "augment.YML"] {
        let path = dir.path().join(name);
        fs::write(&path, text).unwrap();
        let config = ZiAugmentorConfig::load(&path).unwrap();
        assert_eq!(
            config.augmentations,
            vec![json!({"type": "Warp"}), json!({"type": "flip", "seed": 3})]
        );
    }
}

#[test]
fn bare_yaml_list_is_accepted() {
    let config = ZiAugmentorConfig::from_yaml_str("- type: flip\n- type: grey\n").unwrap();
    assert_eq!(config.len(), 2);
}

#[test]
fn unknown_kind_in_file_fails_at_construction() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("augment.json");
    fs::write(&path, r#"[{"type": "bogus"}]"#).unwrap();

    let config = ZiAugmentorConfig::load(&path).unwrap();
    let registry = ZiAugmentRegistry::with_defaults();
    let err = ZiAugmentor::from_config(&registry, &config).unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("bogus"));
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("augment.toml");
    fs::write(&path, "").unwrap();
    assert!(ZiAugmentorConfig::load(&path).unwrap_err().is_configuration());
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = ZiAugmentorConfig::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ZiError::Io(_)));
}

#[test]
fn unknown_top_level_field_is_rejected() {
    let err = ZiAugmentorConfig::from_json_str(r#"{"augmentation": []}"#).unwrap_err();
    assert!(matches!(err, ZiError::Serde(_)));
}
