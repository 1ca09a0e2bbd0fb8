//! Contract violations detected by generators.
//!
//! Nothing in a generator pipeline fails at run time on its own; the only
//! errors are misuses of the wiring protocol. [`Generator::yield_item`]
//! turns them into panics, [`Generator::try_yield_item`] hands them back as
//! values.
//!
//! [`Generator::yield_item`]: super::Generator::yield_item
//! [`Generator::try_yield_item`]: super::Generator::try_yield_item

/// A misuse of a generator's continuation slot.
///
/// # Examples
///
/// ```rust
/// use weir::generator::GeneratorError;
///
/// assert_eq!(
///     GeneratorError::Unwired.to_string(),
///     "generator yielded an item before a continuation was installed; drive it with `drive`"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorError {
    /// An item was yielded while no continuation was installed.
    ///
    /// This happens when `run` is called without going through `drive`.
    Unwired,
    /// An item was yielded into a slot whose continuation is still executing.
    Reentrant,
}

impl std::fmt::Display for GeneratorError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unwired => write!(
                formatter,
                "generator yielded an item before a continuation was installed; drive it with `drive`"
            ),
            Self::Reentrant => write!(
                formatter,
                "generator yielded an item while its continuation was still running"
            ),
        }
    }
}

impl std::error::Error for GeneratorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reentrant_display() {
        assert_eq!(
            format!("{}", GeneratorError::Reentrant),
            "generator yielded an item while its continuation was still running"
        );
    }

    #[test]
    fn test_is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(GeneratorError::Unwired);
        assert!(error.to_string().contains("drive"));
    }
}
