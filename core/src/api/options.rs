//! Configuration options for the invoice engine.

/// Input-size hardening limits.
///
/// Both limits bound the work done per call, so evaluation always runs in
/// time linear in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum expression length, in characters.
    ///
    /// Default: 5000
    pub max_length: usize,

    /// Maximum number of tokens (numbers and operators).
    ///
    /// Default: 2000
    pub max_tokens: usize,
}

impl Limits {
    pub const DEFAULT_MAX_LENGTH: usize = 5000;
    pub const DEFAULT_MAX_TOKENS: usize = 2000;
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_length: Self::DEFAULT_MAX_LENGTH,
            max_tokens: Self::DEFAULT_MAX_TOKENS,
        }
    }
}

/// Configuration options for the [`Engine`](super::Engine).
///
/// # Example
///
/// ```
/// use invoice_calc_core::api::{EngineOptions, Limits};
///
/// let options = EngineOptions {
///     limits: Limits {
///         max_length: 1000,
///         ..Limits::default()
///     },
/// };
/// assert_eq!(options.limits.max_tokens, 2000);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOptions {
    pub limits: Limits,
}
