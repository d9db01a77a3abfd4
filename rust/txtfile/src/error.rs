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

//! Error types for text-file operations.

use std::io;
use std::path::Path;

use thiserror::Error;

/// Result type for text-file operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading, writing, or rendering text files.
#[derive(Error, Debug)]
pub enum Error {
    /// The file does not exist.
    #[error("file not found: {path}")]
    NotFound {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The process lacks permission to access the file.
    #[error("permission denied at {path}: {source}")]
    PermissionDenied {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The file content is not valid UTF-8.
    #[error("invalid text encoding in {path}: {source}")]
    Encoding {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Any other I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Template could not be parsed or rendered.
    #[error("template error in {path}: {source}")]
    Template {
        path: String,
        #[source]
        source: tera::Error,
    },
}

impl Error {
    /// Classify an I/O error raised while touching `path`.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.display().to_string();
        match source.kind() {
            io::ErrorKind::NotFound => Error::NotFound { path, source },
            io::ErrorKind::PermissionDenied => Error::PermissionDenied { path, source },
            io::ErrorKind::InvalidData => Error::Encoding { path, source },
            _ => Error::Io { path, source },
        }
    }

    /// Path of the file the error refers to.
    pub fn path(&self) -> &str {
        match self {
            Error::NotFound { path, .. }
            | Error::PermissionDenied { path, .. }
            | Error::Encoding { path, .. }
            | Error::Io { path, .. }
            | Error::Template { path, .. } => path,
        }
    }
}
