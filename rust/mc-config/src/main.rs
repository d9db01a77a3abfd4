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

use anyhow::{Context, Result};
use mc_config::{telemetry, Driver, DriverConfig, DriverError, ProcessEnvironment};

fn main() -> Result<()> {
    telemetry::init_tracing();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Midnight Commander configuration started"
    );

    let config = DriverConfig::from_env().context("failed to load MC_CONFIG_* settings")?;

    match Driver::new(config, &ProcessEnvironment).run() {
        Ok(report) => {
            tracing::info!(
                home = %report.home.display(),
                skin_updated = report.skin_updated,
                defaults_installed = report.defaults_installed.len(),
                menu_items_added = report.menu_items_added.len(),
                viewers_added = report.viewers_added.len(),
                "Midnight Commander configuration finished"
            );
            Ok(())
        }
        Err(DriverError::HomeUnresolved { os }) => {
            tracing::warn!(%os, "home directory not available; nothing configured");
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = ?e, "Midnight Commander configuration failed");
            Err(e).context("configuration aborted; earlier edits were kept")
        }
    }
}
