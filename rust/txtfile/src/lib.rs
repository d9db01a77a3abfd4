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

//! Idempotent text-file patching primitives.
//!
//! This crate provides the small set of whole-file operations used to patch
//! plain-text configuration files in place:
//!
//! - Load and save whole files
//! - Append with a line separator
//! - Literal substring checks
//! - Find-and-replace with fallback append
//! - Template rendering into a new file
//!
//! # Example
//!
//! ```rust,no_run
//! use txtfile::{append_text, contains_text, replace_or_append};
//!
//! fn main() -> txtfile::Result<()> {
//!     replace_or_append("/home/me/.config/mc/ini", "skin=default", "skin=modarin256", false)?;
//!
//!     let item = "\nH       Task monitor  HTOP\n        htop\n";
//!     if !contains_text("/home/me/.config/mc/menu", item)? {
//!         append_text("/home/me/.config/mc/menu", item)?;
//!     }
//!     Ok(())
//! }
//! ```

mod error;
mod template;
mod text;

pub use error::{Error, Result};
pub use template::{context_from_pairs, render_str, render_template};
pub use text::{
    append_text, append_text_with, contains_text, load_text, read_text, replace_or_append,
    replace_or_append_with, save_text, LINE_SEPARATOR,
};

pub use tera::Context;
