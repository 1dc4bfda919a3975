// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0
//! # Error
//!
//! Errors that can occur while assembling Neutron API payloads.
use thiserror::Error;

/// Error of the derived builders.
#[derive(Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum BuilderError {
    /// A required field was not set.
    #[error("uninitialized field: {0}")]
    UninitializedField(String),

    /// Custom build validation failed.
    #[error("{0}")]
    Validation(String),
}

impl From<derive_builder::UninitializedFieldError> for BuilderError {
    fn from(err: derive_builder::UninitializedFieldError) -> Self {
        Self::UninitializedField(err.field_name().to_string())
    }
}

impl From<String> for BuilderError {
    fn from(msg: String) -> Self {
        Self::Validation(msg)
    }
}

/// Neutron API types error.
#[derive(Debug, Error)]
pub enum NeutronError {
    /// Builder error.
    #[error(transparent)]
    Builder {
        /// The source of the error.
        #[from]
        source: BuilderError,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),

    /// Request payload validation error.
    #[error("request validation failed: {}", source)]
    Validation {
        /// The source of the error.
        #[from]
        source: validator::ValidationErrors,
    },
}

impl From<eyre::Report> for NeutronError {
    fn from(err: eyre::Report) -> Self {
        Self::Config(format!("{err:#}"))
    }
}
