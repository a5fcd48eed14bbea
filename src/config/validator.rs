//! Configuration validation rules.
//!
//! Compose command templates may only reference the variables the
//! command builder provides, and a configured port must be usable.

use crate::compose::{COMPOSE_DOWN_VARIABLES, COMPOSE_UP_VARIABLES};
use crate::config::interpolation::extract_variables;
use crate::config::schema::DockhandConfig;
use crate::error::{DockhandError, Result};

/// Validation error with context.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &DockhandConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Some(template) = &config.compose.up_template {
        errors.extend(validate_template("up_template", template, COMPOSE_UP_VARIABLES));
    }
    if let Some(template) = &config.compose.down_template {
        errors.extend(validate_template(
            "down_template",
            template,
            COMPOSE_DOWN_VARIABLES,
        ));
    }

    if config.scaffold.port == Some(0) {
        errors.push(ValidationError {
            rule: "invalid-port".to_string(),
            message: "scaffold.port must be between 1 and 65535".to_string(),
        });
    }

    errors
}

fn validate_template(field: &str, template: &str, known: &[&str]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if template.trim().is_empty() {
        errors.push(ValidationError {
            rule: "empty-template".to_string(),
            message: format!("compose.{} must not be empty", field),
        });
    }

    for var in extract_variables(template) {
        if !known.contains(&var.as_str()) {
            errors.push(ValidationError {
                rule: "unknown-variable".to_string(),
                message: format!(
                    "compose.{} uses unknown variable '${{{}}}' (known: {})",
                    field,
                    var,
                    known.join(", ")
                ),
            });
        }
    }

    errors
}

/// Validate a configuration, failing on the first problem found.
pub fn validate(config: &DockhandConfig) -> Result<()> {
    let errors = validate_config(config);
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Err(DockhandError::ConfigValidationError { message })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(yaml: &str) -> DockhandConfig {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&DockhandConfig::default()).is_ok());
    }

    #[test]
    fn known_variables_pass() {
        let config = config(
            r#"
compose:
  up_template: "docker compose ${configurationFile} up ${detached} ${build}"
  down_template: "docker compose ${configurationFile} down --remove-orphans"
"#,
        );
        assert!(validate_config(&config).is_empty());
    }

    #[test]
    fn unknown_variable_is_reported() {
        let config = config("compose:\n  up_template: \"docker-compose up ${services}\"");

        let errors = validate_config(&config);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "unknown-variable");
        assert!(errors[0].message.contains("${services}"));
    }

    #[test]
    fn down_template_cannot_use_up_variables() {
        let config = config("compose:\n  down_template: \"docker-compose down ${build}\"");

        let errors = validate_config(&config);

        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("down_template"));
    }

    #[test]
    fn port_zero_is_reported() {
        let config = config("scaffold:\n  port: 0");

        let errors = validate_config(&config);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "invalid-port");
        assert!(validate(&config).is_err());
    }

    #[test]
    fn empty_template_is_reported() {
        let config = config("compose:\n  down_template: \"  \"");

        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }
}
