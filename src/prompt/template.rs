//! `{variable}` substitution for prompt templates.
//!
//! Values are inserted verbatim and never re-scanned, so braces inside a
//! value cannot open a new placeholder. An unknown variable name is an
//! error rather than a silent empty substitution.
//!
//! # Syntax
//!
//! - `{name}` - substitutes the value bound to `name`
//! - `{{` - renders as a literal `{`
//! - `}` - has no special meaning outside a placeholder

use std::fmt;

/// Error type for template rendering failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// The template referenced a variable with no binding.
    Undefined {
        /// The name of the unbound variable.
        name: String,
    },
    /// A `{` without a closing `}`, or an empty `{}` placeholder.
    Malformed {
        /// Byte offset of the offending `{`.
        position: usize,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::Undefined { name } => {
                write!(f, "undefined template variable '{}'", name)
            }
            TemplateError::Malformed { position } => {
                write!(f, "malformed placeholder at byte {} in template", position)
            }
        }
    }
}

impl std::error::Error for TemplateError {}

/// Render a template by substituting `{name}` placeholders from `vars`.
///
/// Bindings are given as name/value pairs; the first matching name wins.
/// Whitespace around a placeholder name is ignored, so `{ text }` and
/// `{text}` resolve identically.
pub fn render(template: &str, vars: &[(&str, &str)]) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut consumed = 0usize;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        // {{ escapes to a literal brace
        if let Some(stripped) = after.strip_prefix('{') {
            out.push('{');
            consumed += open + 2;
            rest = stripped;
            continue;
        }

        let close = after.find('}').ok_or(TemplateError::Malformed {
            position: consumed + open,
        })?;
        let name = after[..close].trim();
        if name.is_empty() {
            return Err(TemplateError::Malformed {
                position: consumed + open,
            });
        }

        let value = vars
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
            .ok_or_else(|| TemplateError::Undefined {
                name: name.to_string(),
            })?;
        out.push_str(value);

        consumed += open + 1 + close + 1;
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    Ok(out)
}
