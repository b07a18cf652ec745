use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use serde_json::Value;

use crate::checker::FormatChecker;
use crate::checkers::BuiltinFormat;
use crate::config::RegistryConfig;
use crate::error::{FormatError, Result};

static DEFAULT_REGISTRY: OnceLock<Arc<FormatRegistry>> = OnceLock::new();

/// Result of checking a value against a named format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatOutcome {
    /// No checker is registered under the name.
    Unknown,
    /// The value conforms to the format.
    Satisfied,
    /// The value does not conform to the format.
    Violated,
}

impl FormatOutcome {
    pub fn is_violated(self) -> bool {
        self == FormatOutcome::Violated
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FormatOutcome::Unknown => "unknown",
            FormatOutcome::Satisfied => "satisfied",
            FormatOutcome::Violated => "violated",
        }
    }
}

impl fmt::Display for FormatOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name-keyed registry of format checkers.
///
/// Lookups take a shared lock and mutations an exclusive one. Each registry
/// owns its lock, so isolated registries never contend with each other or with
/// the process-wide [`default_registry`].
pub struct FormatRegistry {
    checkers: RwLock<HashMap<String, Arc<dyn FormatChecker>>>,
    config: RegistryConfig,
}

impl FormatRegistry {
    /// Create a registry holding every built-in format.
    pub fn with_builtins() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create a registry with no formats at all.
    pub fn empty() -> Self {
        Self::with_config(RegistryConfig {
            builtins: false,
            ..RegistryConfig::default()
        })
    }

    /// Create a registry with explicit config.
    pub fn with_config(config: RegistryConfig) -> Self {
        let mut checkers: HashMap<String, Arc<dyn FormatChecker>> = HashMap::new();
        if config.builtins {
            for format in BuiltinFormat::ALL {
                let checker = format.checker();
                for name in format.names() {
                    checkers.insert((*name).to_string(), Arc::clone(&checker));
                }
            }
        }

        Self {
            checkers: RwLock::new(checkers),
            config,
        }
    }

    /// Register `checker` under `name`, replacing any previous binding.
    ///
    /// Empty names are ignored; use [`FormatRegistry::try_add`] to have them
    /// reported.
    pub fn add(&self, name: impl Into<String>, checker: impl FormatChecker + 'static) -> &Self {
        if let Err(err) = self.try_add(name, checker) {
            tracing::warn!(error = %err, "format checker not registered");
        }
        self
    }

    /// Register `checker` under `name`, failing on an empty name.
    pub fn try_add(
        &self,
        name: impl Into<String>,
        checker: impl FormatChecker + 'static,
    ) -> Result<&Self> {
        self.try_add_shared(name, Arc::new(checker))
    }

    /// Register an already shared checker, e.g. to bind one instance under
    /// several aliases.
    pub fn add_shared(&self, name: impl Into<String>, checker: Arc<dyn FormatChecker>) -> &Self {
        if let Err(err) = self.try_add_shared(name, checker) {
            tracing::warn!(error = %err, "format checker not registered");
        }
        self
    }

    fn try_add_shared(
        &self,
        name: impl Into<String>,
        checker: Arc<dyn FormatChecker>,
    ) -> Result<&Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(FormatError::EmptyName);
        }

        let kind = checker.kind();
        let replaced = self.checkers.write().insert(name.clone(), checker).is_some();
        tracing::debug!(format = %name, kind, replaced, "format checker registered");
        Ok(self)
    }

    /// Remove the binding for `name`. Removing an absent name is a no-op.
    pub fn remove(&self, name: &str) -> &Self {
        let removed = self.checkers.write().remove(name).is_some();
        if removed {
            tracing::debug!(format = name, "format checker removed");
        }
        self
    }

    /// Check if a checker is registered under `name`.
    pub fn has(&self, name: &str) -> bool {
        self.checkers.read().contains_key(name)
    }

    /// Check `input` against the named format.
    ///
    /// Unregistered names pass unless the registry was configured with
    /// `fail_on_unknown_format`.
    pub fn is_format(&self, name: &str, input: &Value) -> bool {
        match self.check(name, input) {
            FormatOutcome::Unknown => !self.config.fail_on_unknown_format,
            outcome => !outcome.is_violated(),
        }
    }

    /// Check `input` against the named format, keeping "unknown" distinct
    /// from "satisfied".
    pub fn check(&self, name: &str, input: &Value) -> FormatOutcome {
        // The checker runs outside the lock.
        let checker = self.checkers.read().get(name).cloned();
        match checker {
            Some(checker) if checker.is_format(input) => FormatOutcome::Satisfied,
            Some(_) => FormatOutcome::Violated,
            None => {
                tracing::trace!(format = name, "unrecognized format");
                FormatOutcome::Unknown
            }
        }
    }

    /// Registered format names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.checkers.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Registered format names with the kind of checker bound to each, sorted
    /// by name.
    pub fn entries(&self) -> Vec<(String, &'static str)> {
        let mut entries: Vec<(String, &'static str)> = self
            .checkers
            .read()
            .iter()
            .map(|(name, checker)| (name.clone(), checker.kind()))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    pub fn len(&self) -> usize {
        self.checkers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkers.read().is_empty()
    }

    /// Get registry configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatRegistry")
            .field("formats", &self.names())
            .field("config", &self.config)
            .finish()
    }
}

/// The process-wide registry, populated with the built-in formats on first use.
pub fn default_registry() -> &'static Arc<FormatRegistry> {
    DEFAULT_REGISTRY.get_or_init(|| Arc::new(FormatRegistry::with_builtins()))
}

/// [`FormatRegistry::is_format`] on the default registry.
pub fn is_format(name: &str, input: &Value) -> bool {
    default_registry().is_format(name, input)
}

/// [`FormatRegistry::add`] on the default registry.
pub fn add(name: impl Into<String>, checker: impl FormatChecker + 'static) {
    default_registry().add(name, checker);
}

/// [`FormatRegistry::remove`] on the default registry.
pub fn remove(name: &str) {
    default_registry().remove(name);
}

/// [`FormatRegistry::has`] on the default registry.
pub fn has(name: &str) -> bool {
    default_registry().has(name)
}
