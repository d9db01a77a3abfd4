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

//! Home directory resolution.
//!
//! The home directory is derived from environment variables, which differ per
//! platform:
//! - Windows: `HOMEDRIVE` + `HOMEPATH`
//! - Linux, macOS, BSDs: `HOME`

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

/// Source of environment variables.
pub trait Environment {
    /// Returns the value of the named variable, if set.
    fn var(&self, name: &str) -> Option<String>;
}

/// Reads variables from the process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Resolve the home directory for the current platform.
pub fn home_dir(env: &dyn Environment) -> Option<PathBuf> {
    resolve_home(std::env::consts::OS, env)
}

/// Resolve the home directory for `os` (a `std::env::consts::OS` value).
///
/// Returns `None` for unsupported platforms or when the variables are unset.
pub fn resolve_home(os: &str, env: &dyn Environment) -> Option<PathBuf> {
    let home = match os {
        "windows" => {
            let drive = env.var("HOMEDRIVE");
            let path = env.var("HOMEPATH");
            match (drive, path) {
                (Some(drive), Some(path)) => Some(format!("{drive}{path}")),
                _ => None,
            }
        }
        "linux" | "macos" | "freebsd" | "openbsd" | "netbsd" | "dragonfly" => env.var("HOME"),
        _ => {
            tracing::warn!(os, "unsupported platform");
            return None;
        }
    };

    match home {
        Some(home) if !home.trim().is_empty() => Some(normalize(Path::new(&home))),
        _ => {
            tracing::warn!(os, "home directory environment variables not set");
            None
        }
    }
}

/// Midnight Commander's per-user configuration directory.
pub fn mc_config_dir(home: &Path) -> PathBuf {
    home.join(".config").join("mc")
}

/// Lexically drop `.` components and redundant separators, and fold `..`
/// into the preceding directory.
///
/// `..` directly under the root stays at the root. Leading `..` in a relative
/// path is kept.
fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }

    parts.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(
            normalize(Path::new("/home/./user//")),
            PathBuf::from("/home/user")
        );
    }

    #[test]
    fn test_normalize_parent_dir() {
        assert_eq!(
            normalize(Path::new("/home/user/../other")),
            PathBuf::from("/home/other")
        );
        assert_eq!(normalize(Path::new("/../home")), PathBuf::from("/home"));
        assert_eq!(normalize(Path::new("../a/b/..")), PathBuf::from("../a"));
        assert_eq!(normalize(Path::new("../../a")), PathBuf::from("../../a"));
    }
}
