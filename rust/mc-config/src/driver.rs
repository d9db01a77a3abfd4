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

//! The configuration run: skin, user menu, and extension viewers.

use std::fs;
use std::path::{Path, PathBuf};

use txtfile::{append_text, contains_text, replace_or_append, LINE_SEPARATOR};

use crate::config::DriverConfig;
use crate::error::{DriverError, Result};
use crate::home::{home_dir, mc_config_dir, Environment};
use crate::snippets::{MENU_ITEMS, VIEWER_RULES};

/// Settings file inside the mc config directory.
pub const INI_FILENAME: &str = "ini";
/// User menu file inside the mc config directory.
pub const MENU_FILENAME: &str = "menu";
/// Extension mapping file inside the mc config directory.
pub const EXT_FILENAME: &str = "mc.ext";

/// Packaged default for the user menu.
pub const DEFAULT_MENU_FILENAME: &str = "mc.menu";
/// Packaged default for the extension mapping.
pub const DEFAULT_EXT_FILENAME: &str = "mc.ext";

/// What a run changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Home directory the run operated on.
    pub home: PathBuf,
    /// Whether the skin line was rewritten.
    pub skin_updated: bool,
    /// Default files copied from the packaged defaults directory.
    pub defaults_installed: Vec<PathBuf>,
    /// Names of menu items appended.
    pub menu_items_added: Vec<&'static str>,
    /// Names of viewer rules inserted.
    pub viewers_added: Vec<&'static str>,
}

impl RunReport {
    /// True when the run found everything already in place.
    pub fn is_noop(&self) -> bool {
        !self.skin_updated
            && self.defaults_installed.is_empty()
            && self.menu_items_added.is_empty()
            && self.viewers_added.is_empty()
    }
}

/// Applies the configuration to one user's mc config directory.
pub struct Driver<'a> {
    config: DriverConfig,
    env: &'a dyn Environment,
}

impl<'a> Driver<'a> {
    pub fn new(config: DriverConfig, env: &'a dyn Environment) -> Self {
        Self { config, env }
    }

    /// Run every configuration step in order.
    ///
    /// Viewer insertions anchor on section headers of `mc.ext`, so the
    /// default file is installed before they run.
    pub fn run(&self) -> Result<RunReport> {
        let home = self.resolve_home()?;
        let mc_dir = mc_config_dir(&home);

        tracing::info!(mc_dir = %mc_dir.display(), "configuring Midnight Commander");

        fs::create_dir_all(&mc_dir).map_err(|e| DriverError::Io {
            path: mc_dir.display().to_string(),
            source: e,
        })?;

        let mut report = RunReport {
            home,
            ..RunReport::default()
        };

        report.skin_updated = self.configure_skin(&mc_dir.join(INI_FILENAME))?;

        let menu_path = mc_dir.join(MENU_FILENAME);
        if self.install_default(&menu_path, DEFAULT_MENU_FILENAME)? {
            report.defaults_installed.push(menu_path.clone());
        }
        report.menu_items_added = self.configure_menu(&menu_path)?;

        let ext_path = mc_dir.join(EXT_FILENAME);
        if self.install_default(&ext_path, DEFAULT_EXT_FILENAME)? {
            report.defaults_installed.push(ext_path.clone());
        }
        report.viewers_added = self.configure_viewers(&ext_path)?;

        Ok(report)
    }

    fn resolve_home(&self) -> Result<PathBuf> {
        if let Some(ref home) = self.config.home {
            return Ok(home.clone());
        }

        home_dir(self.env).ok_or_else(|| DriverError::HomeUnresolved {
            os: std::env::consts::OS.to_string(),
        })
    }

    /// Swap the skin line in `ini` if the file exists.
    fn configure_skin(&self, ini_path: &Path) -> Result<bool> {
        if !ini_path.exists() {
            tracing::debug!(path = %ini_path.display(), "no ini file; skin unchanged");
            return Ok(false);
        }

        let search = format!("skin={}", self.config.source_skin);
        let replacement = format!("skin={}", self.config.skin);

        if search == replacement || !contains_text(ini_path, &search)? {
            return Ok(false);
        }

        replace_or_append(ini_path, &search, &replacement, false)?;
        tracing::info!(skin = %self.config.skin, "set skin");
        Ok(true)
    }

    /// Copy a packaged default into place when the target is missing.
    fn install_default(&self, target: &Path, default_name: &str) -> Result<bool> {
        if target.exists() {
            return Ok(false);
        }

        let source = self.config.defaults_dir.join(default_name);
        if !source.exists() {
            tracing::warn!(
                source = %source.display(),
                target = %target.display(),
                "packaged default not found"
            );
            return Ok(false);
        }

        fs::copy(&source, target).map_err(|e| DriverError::Io {
            path: target.display().to_string(),
            source: e,
        })?;
        set_user_rw_others_r(target)?;

        tracing::info!(
            source = %source.display(),
            target = %target.display(),
            "installed packaged default"
        );
        Ok(true)
    }

    fn configure_menu(&self, menu_path: &Path) -> Result<Vec<&'static str>> {
        let mut added = Vec::new();

        for item in MENU_ITEMS {
            if contains_text(menu_path, item.body)? {
                continue;
            }

            append_text(menu_path, item.body)?;
            tracing::info!(item = item.name, "added {} menu entry", item.description);
            added.push(item.name);
        }

        Ok(added)
    }

    fn configure_viewers(&self, ext_path: &Path) -> Result<Vec<&'static str>> {
        let mut added = Vec::new();

        for rule in VIEWER_RULES {
            if contains_text(ext_path, rule.body)? {
                continue;
            }

            let anchored = rule.anchored(LINE_SEPARATOR);
            if replace_or_append(ext_path, rule.signature, &anchored, true)? {
                tracing::info!(viewer = rule.name, "added files viewer");
                added.push(rule.name);
            }
        }

        Ok(added)
    }
}

#[cfg(unix)]
fn set_user_rw_others_r(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o644)).map_err(|e| DriverError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(not(unix))]
#[allow(clippy::permissions_set_readonly_false)]
fn set_user_rw_others_r(path: &Path) -> Result<()> {
    let mut perms = fs::metadata(path)
        .map_err(|e| DriverError::Io {
            path: path.display().to_string(),
            source: e,
        })?
        .permissions();
    perms.set_readonly(false);
    fs::set_permissions(path, perms).map_err(|e| DriverError::Io {
        path: path.display().to_string(),
        source: e,
    })
}
