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

//! Whole-file text primitives.
//!
//! Every operation loads or rewrites the complete file. A missing target file
//! is a soft condition (logged as a warning, negative result), while I/O
//! failures on the write path propagate to the caller.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};

/// Platform line separator used when none is given explicitly.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";

/// Platform line separator used when none is given explicitly.
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Read a whole text file.
///
/// Errors are classified by [`Error::from_io`], so callers can tell a missing
/// file from a permission or encoding problem.
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| Error::from_io(path, e))
}

/// Load a whole text file, returning an empty string when it cannot be read.
pub fn load_text(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();

    if !path.exists() {
        tracing::warn!(path = %path.display(), "text file not found");
        return String::new();
    }

    match read_text(path) {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "failed to load text file");
            String::new()
        }
    }
}

/// Save `text` to `path`.
///
/// With `overwrite` unset an existing file is left untouched and `Ok(false)`
/// is returned. Otherwise any existing file is removed and replaced in full.
pub fn save_text(path: impl AsRef<Path>, text: &str, overwrite: bool) -> Result<bool> {
    let path = path.as_ref();

    if path.exists() {
        if !overwrite {
            tracing::warn!(path = %path.display(), "file exists; not saved");
            return Ok(false);
        }

        fs::remove_file(path).map_err(|e| Error::from_io(path, e))?;
        tracing::info!(path = %path.display(), "removed existing file");
    }

    fs::write(path, text).map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "failed to save text file");
        Error::from_io(path, e)
    })?;

    Ok(true)
}

/// Append `text` to `path` using the platform line separator.
pub fn append_text(path: impl AsRef<Path>, text: &str) -> Result<bool> {
    append_text_with(path, text, LINE_SEPARATOR)
}

/// Append `separator + text` to `path`, creating the file if it is absent.
///
/// A freshly created file receives `text` alone. The data goes out in a single
/// write call.
pub fn append_text_with(path: impl AsRef<Path>, text: &str, separator: &str) -> Result<bool> {
    let path = path.as_ref();
    let separator = if path.exists() { separator } else { "" };
    let chunk = format!("{separator}{text}");

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::from_io(path, e))?;

    file.write_all(chunk.as_bytes()).map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "failed to append to text file");
        Error::from_io(path, e)
    })?;

    Ok(true)
}

/// Check whether `needle` occurs literally anywhere in the file.
///
/// Returns `Ok(false)` when the file does not exist.
pub fn contains_text(path: impl AsRef<Path>, needle: &str) -> Result<bool> {
    let path = path.as_ref();

    if !path.exists() {
        tracing::warn!(path = %path.display(), "text file does not exist");
        return Ok(false);
    }

    let text = read_text(path).map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "failed to search text file");
        e
    })?;

    Ok(text.contains(needle))
}

/// Replace every occurrence of `search` with `replacement`, appending the
/// replacement with the platform line separator when `auto_append` is set.
pub fn replace_or_append(
    path: impl AsRef<Path>,
    search: &str,
    replacement: &str,
    auto_append: bool,
) -> Result<bool> {
    replace_or_append_with(path, search, replacement, auto_append, LINE_SEPARATOR)
}

/// Replace every occurrence of `search` with `replacement` and write the file
/// back.
///
/// When `auto_append` is set and the rewritten content still lacks
/// `replacement`, `separator + replacement` is appended. The presence check is
/// made against the replacement, so passing the final snippet makes repeated
/// calls no-ops. Returns `Ok(false)` when the file does not exist.
pub fn replace_or_append_with(
    path: impl AsRef<Path>,
    search: &str,
    replacement: &str,
    auto_append: bool,
    separator: &str,
) -> Result<bool> {
    let path = path.as_ref();

    if !path.exists() {
        tracing::warn!(path = %path.display(), "text file does not exist");
        return Ok(false);
    }

    let mut text = read_text(path)
        .map_err(|e| {
            tracing::error!(path = %path.display(), error = %e, "failed to replace in text file");
            e
        })?
        .replace(search, replacement);

    if auto_append && !text.contains(replacement) {
        text.push_str(separator);
        text.push_str(replacement);
        tracing::info!(path = %path.display(), "appended text to file");
    }

    fs::write(path, text).map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "failed to replace in text file");
        Error::from_io(path, e)
    })?;

    Ok(true)
}
