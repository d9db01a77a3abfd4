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

//! Tests for home directory resolution.

use mc_config::{mc_config_dir, resolve_home};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

fn env(vars: &[(&str, &str)]) -> HashMap<String, String> {
    vars.iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_linux_uses_home() {
    let vars = env(&[("HOME", "/home/user")]);
    assert_eq!(resolve_home("linux", &vars), Some(PathBuf::from("/home/user")));
}

#[test]
fn test_macos_uses_home() {
    let vars = env(&[("HOME", "/Users/user")]);
    assert_eq!(resolve_home("macos", &vars), Some(PathBuf::from("/Users/user")));
}

#[test]
fn test_windows_joins_drive_and_path() {
    let vars = env(&[("HOMEDRIVE", "C:"), ("HOMEPATH", "\\Users\\user")]);
    let home = resolve_home("windows", &vars).unwrap();
    assert!(home.to_string_lossy().contains("Users"));
    assert!(home.to_string_lossy().starts_with("C:"));
}

#[test]
fn test_windows_requires_both_variables() {
    let vars = env(&[("HOMEDRIVE", "C:")]);
    assert_eq!(resolve_home("windows", &vars), None);
}

#[test]
fn test_unsupported_platform() {
    let vars = env(&[("HOME", "/home/user")]);
    assert_eq!(resolve_home("solaris", &vars), None);
}

#[test]
fn test_missing_or_blank_home() {
    assert_eq!(resolve_home("linux", &env(&[])), None);
    assert_eq!(resolve_home("linux", &env(&[("HOME", "  ")])), None);
}

#[test]
fn test_home_is_normalized() {
    let vars = env(&[("HOME", "/home/./user/")]);
    assert_eq!(resolve_home("linux", &vars), Some(PathBuf::from("/home/user")));
}

#[test]
fn test_home_parent_components_are_folded() {
    let vars = env(&[("HOME", "/home/admin/../user")]);
    assert_eq!(resolve_home("linux", &vars), Some(PathBuf::from("/home/user")));
}

#[test]
fn test_mc_config_dir() {
    assert_eq!(
        mc_config_dir(Path::new("/home/user")),
        PathBuf::from("/home/user/.config/mc")
    );
}
