//! Template rendering using Tera.
//!
//! User-facing messages are kept in `templates/` and embedded into the
//! binary, so rendering never touches the filesystem at runtime.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use tera::{Context, Tera};

/// Template shown when the CLI cannot be resolved.
pub const CLI_NOT_FOUND: &str = "messages/cli_not_found.tera";

/// Embedded templates as (name, source) pairs.
const EMBEDDED_TEMPLATES: &[(&str, &str)] =
    &[(CLI_NOT_FOUND, include_str!("../templates/messages/cli_not_found.tera"))];

/// Global template engine, built on first use.
static TERA: Lazy<std::result::Result<Tera, String>> = Lazy::new(|| {
    let mut tera = Tera::default();
    tera.add_raw_templates(EMBEDDED_TEMPLATES.iter().copied()).map_err(|e| e.to_string())?;
    Ok(tera)
});

/// Render a template with the given context.
///
/// # Arguments
///
/// * `name` - Template name (e.g., `messages/cli_not_found.tera`)
/// * `context` - Tera context with variables for the template
///
/// # Errors
///
/// Returns an error if the template doesn't exist or rendering fails.
pub fn render(name: &str, context: &Context) -> Result<String> {
    let tera = match &*TERA {
        Ok(tera) => tera,
        Err(e) => return Err(Error::Template(format!("Invalid templates: {e}"))),
    };
    tera.render(name, context)
        .map_err(|e| Error::Template(format!("Failed to render template {name}: {e}")))
}

/// Render a template with a simple key-value context.
///
/// Convenience wrapper around [`render`] for simple cases.
///
/// # Errors
///
/// Returns an error if the template doesn't exist or rendering fails.
pub fn render_with_vars(name: &str, vars: &[(&str, &str)]) -> Result<String> {
    let mut context = Context::new();
    for (key, value) in vars {
        context.insert(*key, value);
    }
    render(name, &context)
}
