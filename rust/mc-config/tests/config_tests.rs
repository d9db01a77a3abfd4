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

//! Tests for driver configuration.

use mc_config::DriverConfig;
use std::path::PathBuf;

fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_defaults() {
    let config = DriverConfig::from_vars(vars(&[])).unwrap();

    assert_eq!(config, DriverConfig::default());
    assert_eq!(config.home, None);
    assert_eq!(config.defaults_dir, PathBuf::from("/etc/mc"));
    assert_eq!(config.skin, "modarin256");
    assert_eq!(config.source_skin, "default");
}

#[test]
fn test_overrides() {
    let config = DriverConfig::from_vars(vars(&[
        ("MC_CONFIG_HOME", "/tmp/home"),
        ("MC_CONFIG_DEFAULTS_DIR", "/usr/share/mc"),
        ("MC_CONFIG_SKIN", "julia256"),
        ("MC_CONFIG_SOURCE_SKIN", "modarin256"),
    ]))
    .unwrap();

    assert_eq!(config.home, Some(PathBuf::from("/tmp/home")));
    assert_eq!(config.defaults_dir, PathBuf::from("/usr/share/mc"));
    assert_eq!(config.skin, "julia256");
    assert_eq!(config.source_skin, "modarin256");
}

#[test]
fn test_blank_values_fall_back_to_defaults() {
    let config = DriverConfig::from_vars(vars(&[("MC_CONFIG_SKIN", " "), ("MC_CONFIG_HOME", "")]))
        .unwrap();

    assert_eq!(config.skin, "modarin256");
    assert_eq!(config.home, None);
}

#[test]
fn test_unrelated_variables_ignored() {
    let config = DriverConfig::from_vars(vars(&[("HOME", "/root"), ("SKIN", "x")])).unwrap();
    assert_eq!(config, DriverConfig::default());
}
