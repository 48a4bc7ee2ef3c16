/// Configuration options for the JSON validator.
///
/// # Default
///
/// `max_depth` defaults to [`DEFAULT_MAX_DEPTH`].
#[derive(Debug, Clone, Copy)]
pub struct ValidatorOptions {
    /// Maximum nesting depth of arrays and objects.
    ///
    /// The validator descends recursively into nested containers, so
    /// unbounded nesting in adversarial input would translate into unbounded
    /// call-stack growth. Each `[` or `{` consumes one level; exceeding the
    /// bound fails validation with
    /// [`SyntaxError::DepthLimitExceeded`](crate::SyntaxError::DepthLimitExceeded)
    /// rather than overflowing the stack.
    ///
    /// A document with no arrays or objects is unaffected by this setting.
    ///
    /// # Default
    ///
    /// [`DEFAULT_MAX_DEPTH`] (128 levels).
    pub max_depth: usize,
}

/// Default bound for [`ValidatorOptions::max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
