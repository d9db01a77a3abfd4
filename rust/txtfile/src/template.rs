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

//! Text file generation from templates.
//!
//! Templates use the Jinja2-style syntax understood by [`tera`]. Plain
//! variables that the context does not define render as empty strings.

use std::fs;
use std::path::Path;

use tera::{Context, Tera};

use crate::error::Error;
use crate::text::read_text;

/// Build a template context from string key/value pairs.
pub fn context_from_pairs<I, K, V>(pairs: I) -> Context
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: AsRef<str>,
{
    let mut context = Context::new();
    for (key, value) in pairs {
        context.insert(key, value.as_ref());
    }
    context
}

/// Render template `source` against `context`.
///
/// Autoescaping is disabled; the output is plain text.
pub fn render_str(source: &str, context: &Context) -> tera::Result<String> {
    let mut context = context.clone();
    for name in referenced_variables(source) {
        if !context.contains_key(&name) {
            context.insert(name, "");
        }
    }

    Tera::one_off(source, &context, false)
}

/// Render the template at `template_path` into `output_path`.
///
/// A missing or unreadable template yields `false`. A template that fails to
/// parse or render produces an empty output file. The parent directory of the
/// output is created when missing. Returns whether the output file exists
/// afterwards.
pub fn render_template(
    template_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    context: &Context,
) -> bool {
    let template_path = template_path.as_ref();
    let output_path = output_path.as_ref();

    if !template_path.exists() {
        tracing::warn!(path = %template_path.display(), "template file not found");
        return false;
    }

    let source = match read_text(template_path) {
        Ok(source) => source,
        Err(e) => {
            tracing::error!(error = %e, "failed to read template file");
            return false;
        }
    };

    let rendered = match render_str(&source, context) {
        Ok(rendered) => rendered,
        Err(source) => {
            let e = Error::Template {
                path: template_path.display().to_string(),
                source,
            };
            tracing::error!(error = %e, "failed to render template; writing empty output");
            String::new()
        }
    };

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            tracing::info!(path = %parent.display(), "creating output directory");
            if let Err(e) = fs::create_dir_all(parent) {
                let e = Error::from_io(parent, e);
                tracing::error!(error = %e, "failed to create output directory");
                return false;
            }
        }
    }

    if let Err(e) = fs::write(output_path, rendered) {
        let e = Error::from_io(output_path, e);
        tracing::error!(error = %e, "failed to write rendered text file");
        return false;
    }

    output_path.exists()
}

/// Names of plain variables printed by `{{ ... }}` blocks, in first-use order.
///
/// Only bare identifiers, optionally followed by filters, are collected.
/// Attribute and index lookups are left to the engine, and so are variables
/// passed through `default`, which must stay undefined for the filter to apply.
/// Comments and `{% raw %}` blocks are skipped.
fn referenced_variables(source: &str) -> Vec<String> {
    let source = without_literal_regions(source);
    let mut names: Vec<String> = Vec::new();
    let mut defaulted: Vec<&str> = Vec::new();
    let mut rest = source.as_str();

    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            break;
        };

        let expr = after[..end]
            .trim()
            .trim_start_matches('-')
            .trim_end_matches('-')
            .trim();
        let (ident, tail) = expr.split_at(ident_len(expr));
        let tail = tail.trim_start();

        let plain = !ident.is_empty()
            && !ident.starts_with(|c: char| c.is_ascii_digit())
            && !matches!(ident, "true" | "false" | "True" | "False" | "loop" | "not")
            && (tail.is_empty() || tail.starts_with('|'));

        if plain {
            if has_default_filter(tail) {
                defaulted.push(ident);
            } else if !names.iter().any(|n| n == ident) {
                names.push(ident.to_string());
            }
        }

        rest = &after[end + 2..];
    }

    names.retain(|n| !defaulted.contains(&n.as_str()));
    names
}

fn ident_len(s: &str) -> usize {
    s.find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(s.len())
}

/// Whether the filter chain `tail` (starting at the first `|`) opens with
/// `default`. The engine only consults `default` for an undefined value when it
/// is the first filter.
fn has_default_filter(tail: &str) -> bool {
    tail.split('|').nth(1).is_some_and(|filter| {
        let filter = filter.trim_start();
        filter.get(..ident_len(filter)) == Some("default")
    })
}

/// `source` with `{# ... #}` comments, `{% ... %}` tags, and the bodies of
/// `{% raw %}` blocks replaced by a single space each.
fn without_literal_regions(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;
    let mut in_raw = false;

    loop {
        let next = match (rest.find("{#"), rest.find("{%")) {
            (Some(a), Some(b)) => a.min(b),
            (Some(a), None) | (None, Some(a)) => a,
            (None, None) => break,
        };

        if !in_raw {
            out.push_str(&rest[..next]);
            out.push(' ');
        }

        let closer = if rest[next..].starts_with("{#") { "#}" } else { "%}" };
        let after = &rest[next + 2..];
        let Some(end) = after.find(closer) else {
            return out;
        };

        if closer == "%}" {
            let tag = after[..end]
                .trim()
                .trim_start_matches('-')
                .trim_end_matches('-');
            match tag.split_whitespace().next() {
                Some("raw") => in_raw = true,
                Some("endraw") => in_raw = false,
                _ => {}
            }
        }

        rest = &after[end + 2..];
    }

    if !in_raw {
        out.push_str(rest);
    }
    out
}
