/// Controls how a [`FormatRegistry`](crate::FormatRegistry) is populated and
/// how it treats format names it does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
    /// When true, the registry starts with every built-in format and alias.
    pub builtins: bool,
    /// When true, `is_format` rejects values for unregistered format names
    /// instead of letting them pass.
    pub fail_on_unknown_format: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            builtins: true,
            fail_on_unknown_format: false,
        }
    }
}
