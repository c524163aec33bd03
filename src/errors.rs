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

//! # Zi Augment Error Module
//!
//! This module defines the error types shared by the augmentation registry,
//! the individual augmentations and the augmentor pipeline.
//!
//! ## Error Categories
//!
//! - **Configuration**: Unknown augmentation kinds and bad construction
//!   parameters. Raised only while a pipeline is being built.
//! - **Spec**: An augmentation received a fetch spec or sample it cannot
//!   satisfy.
//! - **Shape**: A geometric operation received a volume of the wrong rank.
//! - **NotImplemented**: Declared entry points that have no behavior yet.
//! - **Dataset**: Failures reported by the dataset collaborator.
//! - **Io** / **Serde**: Configuration document loading.
//! - **Internal**: Unexpected internal failures
//!
//! ## Usage
//!
//! ```rust
//! use zi_augment::errors::{Result, ZiError};
//!
//! fn check_kind(kind: &str) -> Result<()> {
//!     if kind.is_empty() {
//!         return Err(ZiError::configuration(kind, "augmentation type may not be empty"));
//!     }
//!     Ok(())
//! }
//! ```

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result type used throughout Zi Augment.
pub type Result<T> = std::result::Result<T, ZiError>;

/// Canonical error enumeration for Zi Augment.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq)]
pub enum ZiError {
    /// Invalid augmentation configuration, raised at construction time.
    #[error("configuration error for '{kind}': {message}")]
    Configuration { kind: String, message: String },

    /// A prepare or augment step received input it cannot satisfy.
    #[error("spec error in '{augment}': {message}")]
    Spec { augment: String, message: String },

    /// Volume rank or layout mismatch.
    #[error("shape error: {message}")]
    Shape { message: String },

    /// Entry point declared without behavior.
    #[error("not implemented: {0}")]
    NotImplemented(String),

    /// Failure reported by a dataset implementation.
    #[error("dataset error: {message}")]
    Dataset { message: String },

    /// Errors originating from filesystem IO.
    #[error("io error: {0}")]
    Io(String),

    /// Wrapper for serde-style serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Catch-all variant for unexpected situations.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<io::Error> for ZiError {
    fn from(err: io::Error) -> Self {
        ZiError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ZiError {
    fn from(err: serde_json::Error) -> Self {
        ZiError::Serde(err.to_string())
    }
}

impl From<serde_yaml::Error> for ZiError {
    fn from(err: serde_yaml::Error) -> Self {
        ZiError::Serde(err.to_string())
    }
}

impl From<ndarray::ShapeError> for ZiError {
    fn from(err: ndarray::ShapeError) -> Self {
        ZiError::Shape {
            message: err.to_string(),
        }
    }
}

impl ZiError {
    /// Helper to construct configuration errors.
    pub fn configuration(kind: impl Into<String>, message: impl Into<String>) -> Self {
        ZiError::Configuration {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Helper to construct spec errors.
    pub fn spec(augment: impl Into<String>, message: impl Into<String>) -> Self {
        ZiError::Spec {
            augment: augment.into(),
            message: message.into(),
        }
    }

    /// Helper to construct shape errors.
    pub fn shape<T: Into<String>>(message: T) -> Self {
        ZiError::Shape {
            message: message.into(),
        }
    }

    pub fn not_implemented<T: Into<String>>(what: T) -> Self {
        ZiError::NotImplemented(what.into())
    }

    /// Helper to construct dataset errors.
    pub fn dataset<T: Into<String>>(message: T) -> Self {
        ZiError::Dataset {
            message: message.into(),
        }
    }

    /// Helper to construct internal errors.
    pub fn internal<T: Into<String>>(message: T) -> Self {
        ZiError::Internal(message.into())
    }

    /// Returns true for errors that can only be raised while building a pipeline.
    pub fn is_configuration(&self) -> bool {
        matches!(self, ZiError::Configuration { .. })
    }
}
