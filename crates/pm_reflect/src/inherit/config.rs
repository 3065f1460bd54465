/// Tuning of a [`Registry`](super::Registry).
///
/// # Examples
///
/// ```
/// use pm_reflect::inherit::{Registry, RegistryConfig};
///
/// let registry = Registry::with_config(RegistryConfig {
///     max_depth: 8,
///     ..RegistryConfig::default()
/// });
/// assert_eq!(registry.config().max_depth, 8);
/// assert!(registry.config().strict_discriminator);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Maximum number of inheritance levels descended by one resolution.
    ///
    /// Exceeding it fails with [`ResolveError::DepthExceeded`], which guards
    /// against cyclic discriminator chains.
    ///
    /// [`ResolveError::DepthExceeded`]: super::ResolveError::DepthExceeded
    pub max_depth: usize,
    /// Only accept strings and numbers as discriminator values.
    ///
    /// When disabled, booleans are accepted as `"true"` and `"false"`.
    /// Arrays and objects are always rejected.
    pub strict_discriminator: bool,
}

impl RegistryConfig {
    pub const DEFAULT_MAX_DEPTH: usize = 32;
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            strict_discriminator: true,
        }
    }
}
