//! Embedded scaffolding templates.
//!
//! Templates ship inside the binary and use `${var}` placeholders:
//! `service_name`, `platform`, `port` and `ports` (the Compose `ports:`
//! block, empty when the platform serves nothing).

use include_dir::{include_dir, Dir};

use crate::config::{resolve_string, Variables};
use crate::error::{DockhandError, Result};

use super::Platform;

static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Get the raw text of an embedded template.
pub fn template_source(name: &str) -> Result<&'static str> {
    TEMPLATES_DIR
        .get_file(name)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| DockhandError::TemplateNotFound {
            name: name.to_string(),
        })
}

/// Names of all embedded templates, sorted.
pub fn template_names() -> Vec<String> {
    fn collect(dir: &Dir<'_>, names: &mut Vec<String>) {
        for file in dir.files() {
            names.push(file.path().to_string_lossy().replace('\\', "/"));
        }
        for sub in dir.dirs() {
            collect(sub, names);
        }
    }

    let mut names = Vec::new();
    collect(&TEMPLATES_DIR, &mut names);
    names.sort();
    names
}

/// Build the variables a template is rendered with.
pub fn template_variables(service_name: &str, platform: Platform, port: Option<u16>) -> Variables {
    let mut vars = Variables::new();
    vars.set("service_name", service_name)
        .set("platform", platform.id());

    match port {
        Some(port) => {
            vars.set("port", port.to_string())
                .set("ports", format!("    ports:\n      - {}:{}", port, port));
        }
        None => {
            vars.set("port", "").set("ports", "");
        }
    }

    vars
}

/// Render an embedded template.
pub fn render_template(name: &str, vars: &Variables) -> Result<String> {
    let source = template_source(name)?;
    let rendered = resolve_string(source, vars)?;

    // Drop the blank line an empty block leaves at the end
    let mut out = rendered.trim_end().to_string();
    out.push('\n');
    Ok(out)
}
