/*
 * Copyright 2025 Carver Automation Corporation.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Error types for the configuration driver.

use thiserror::Error;

/// Result type for driver operations.
pub type Result<T> = std::result::Result<T, DriverError>;

/// Reasons a configuration run stops.
///
/// Edits applied before the failure are kept.
#[derive(Error, Debug)]
pub enum DriverError {
    /// No home directory could be determined for this platform.
    #[error("cannot resolve home directory on platform {os}")]
    HomeUnresolved { os: String },

    /// `MC_CONFIG_*` variables could not be parsed.
    #[error("invalid MC_CONFIG_* environment: {0}")]
    Config(#[from] envy::Error),

    /// Directory creation, default installation, or permission change failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A text-file primitive failed.
    #[error(transparent)]
    File(#[from] txtfile::Error),
}
