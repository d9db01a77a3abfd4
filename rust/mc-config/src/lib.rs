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

//! Idempotent Midnight Commander configuration.
//!
//! Each run makes sure the user's `~/.config/mc` files contain:
//!
//! - The configured skin in `ini`
//! - A set of user menu entries in `menu`
//! - Viewer rules for common document, log, and image formats in `mc.ext`
//!
//! Missing `menu` and `mc.ext` files are first copied from the packaged
//! defaults directory. Running again changes nothing.
//!
//! # Example
//!
//! ```rust,no_run
//! use mc_config::{Driver, DriverConfig, ProcessEnvironment};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DriverConfig::from_env()?;
//!     let report = Driver::new(config, &ProcessEnvironment).run()?;
//!     println!("Added menu items: {:?}", report.menu_items_added);
//!     Ok(())
//! }
//! ```

mod config;
mod driver;
mod error;
mod home;
pub mod snippets;
pub mod telemetry;

pub use config::DriverConfig;
pub use driver::{
    Driver, RunReport, DEFAULT_EXT_FILENAME, DEFAULT_MENU_FILENAME, EXT_FILENAME, INI_FILENAME,
    MENU_FILENAME,
};
pub use error::{DriverError, Result};
pub use home::{home_dir, mc_config_dir, resolve_home, Environment, ProcessEnvironment};
pub use snippets::{MenuItem, ViewerRule, MENU_ITEMS, VIEWER_RULES};
