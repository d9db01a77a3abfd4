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

//! Driver configuration loaded from `MC_CONFIG_*` environment variables.

use serde::Deserialize;
use std::path::PathBuf;

use crate::error::Result;
use crate::snippets::{DEFAULT_SKIN, DEFAULT_SOURCE_SKIN};

const ENV_PREFIX: &str = "MC_CONFIG_";
const DEFAULT_DEFAULTS_DIR: &str = "/etc/mc";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    /// Home directory override; resolved from the platform when unset.
    pub home: Option<PathBuf>,
    /// Directory holding the packaged `mc.menu` and `mc.ext` defaults.
    pub defaults_dir: PathBuf,
    /// Skin to switch to.
    pub skin: String,
    /// Skin that gets replaced.
    pub source_skin: String,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    home: Option<String>,
    #[serde(default)]
    defaults_dir: Option<String>,
    #[serde(default)]
    skin: Option<String>,
    #[serde(default)]
    source_skin: Option<String>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            home: None,
            defaults_dir: PathBuf::from(DEFAULT_DEFAULTS_DIR),
            skin: DEFAULT_SKIN.to_string(),
            source_skin: DEFAULT_SOURCE_SKIN.to_string(),
        }
    }
}

impl DriverConfig {
    pub fn from_env() -> Result<Self> {
        let raw: RawConfig = envy::prefixed(ENV_PREFIX).from_env()?;
        Ok(Self::from_raw(raw))
    }

    /// Load from explicit `(name, value)` pairs using the same variable names
    /// as [`DriverConfig::from_env`].
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let raw: RawConfig = envy::prefixed(ENV_PREFIX).from_iter(vars)?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawConfig) -> Self {
        let defaults = Self::default();

        Self {
            home: non_empty(raw.home).map(PathBuf::from),
            defaults_dir: non_empty(raw.defaults_dir)
                .map(PathBuf::from)
                .unwrap_or(defaults.defaults_dir),
            skin: non_empty(raw.skin).unwrap_or(defaults.skin),
            source_skin: non_empty(raw.source_skin).unwrap_or(defaults.source_skin),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
