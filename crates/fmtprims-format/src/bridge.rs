//! Plug a [`FormatRegistry`] into the `jsonschema` validation engine.
//!
//! Every format the engine would check on its own, and every name registered
//! at compile time, is installed as a custom format that calls back into the
//! registry. Later `add`/`remove` calls therefore change what already-compiled
//! validators accept for those names, and a name the registry does not hold
//! passes just as [`FormatRegistry::is_format`] says it does.

use std::collections::BTreeSet;
use std::sync::Arc;

use jsonschema::Validator;
use serde_json::Value;

use crate::error::{FormatError, Result};
use crate::registry::FormatRegistry;

/// Format names the `jsonschema` engine validates natively.
pub const ENGINE_FORMATS: &[&str] = &[
    "date",
    "date-time",
    "duration",
    "email",
    "hostname",
    "idn-email",
    "idn-hostname",
    "ipv4",
    "ipv6",
    "iri",
    "iri-reference",
    "json-pointer",
    "regex",
    "relative-json-pointer",
    "time",
    "uri",
    "uri-reference",
    "uri-template",
    "uuid",
];

/// Compiles schemas whose `format` assertions are decided by a registry.
#[derive(Debug, Clone)]
pub struct JsonSchemaBridge {
    registry: Arc<FormatRegistry>,
}

impl JsonSchemaBridge {
    pub fn new(registry: Arc<FormatRegistry>) -> Self {
        Self { registry }
    }

    /// Bridge over the process-wide default registry.
    pub fn with_default_registry() -> Self {
        Self::new(Arc::clone(crate::registry::default_registry()))
    }

    pub fn registry(&self) -> &Arc<FormatRegistry> {
        &self.registry
    }

    /// Compile `schema` with format assertions enabled.
    pub fn compile(&self, schema: &Value) -> Result<Validator> {
        let mut names: BTreeSet<String> = self.registry.names().into_iter().collect();
        names.extend(ENGINE_FORMATS.iter().map(|name| (*name).to_string()));

        let mut options = jsonschema::options().should_validate_formats(true);
        for name in names {
            let registry = Arc::clone(&self.registry);
            let format = name.clone();
            options = options.with_format(name, move |text: &str| {
                registry.is_format(&format, &Value::String(text.to_owned()))
            });
        }

        options
            .build(schema)
            .map_err(|err| FormatError::CompileFailed(err.to_string()))
    }

    /// Compile `schema` and validate `instance` against it.
    ///
    /// The error summarizes the first few violations; use
    /// [`JsonSchemaBridge::errors`] for the complete list.
    pub fn validate(&self, schema: &Value, instance: &Value) -> Result<()> {
        let errors = self.errors(schema, instance)?;
        match errors.split_first() {
            None => Ok(()),
            Some((first, rest)) => {
                let mut message = first.clone();
                for err in rest.iter().take(3) {
                    message.push_str("; ");
                    message.push_str(err);
                }
                Err(FormatError::ValidationFailed(message))
            }
        }
    }

    /// Parse both documents from JSON text, then validate.
    pub fn validate_json(&self, schema_json: &str, instance_json: &str) -> Result<()> {
        let (schema, instance) = parse_documents(schema_json, instance_json)?;
        self.validate(&schema, &instance)
    }

    /// Compile `schema` and collect every violation in `instance`. An empty
    /// list means the instance is valid.
    pub fn errors(&self, schema: &Value, instance: &Value) -> Result<Vec<String>> {
        let validator = self.compile(schema)?;
        Ok(validator
            .iter_errors(instance)
            .map(|err| err.to_string())
            .collect())
    }

    /// Parse both documents from JSON text, then collect violations.
    pub fn errors_json(&self, schema_json: &str, instance_json: &str) -> Result<Vec<String>> {
        let (schema, instance) = parse_documents(schema_json, instance_json)?;
        self.errors(&schema, &instance)
    }
}

fn parse_documents(schema_json: &str, instance_json: &str) -> Result<(Value, Value)> {
    let schema: Value = serde_json::from_str(schema_json)?;
    let instance: Value = serde_json::from_str(instance_json)?;
    Ok((schema, instance))
}
