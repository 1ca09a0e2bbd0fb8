//! Loop directives returned by consumers.
//!
//! A consumer answers every item it receives with a [`LoopDirective`],
//! telling the producer whether to hand over the next item or to stop.
//!
//! # Examples
//!
//! ```rust
//! use weir::generator::LoopDirective;
//!
//! let directive = LoopDirective::from_continue(3 < 10);
//! assert!(directive.is_continue());
//! ```

use std::fmt;
use std::ops::ControlFlow;

/// The answer a consumer gives to its producer after each item.
///
/// This is a closed two-value enumeration: a consumer can only ask the
/// producer to stop or to go on.
///
/// # Examples
///
/// ```rust
/// use weir::generator::LoopDirective;
///
/// let stop = LoopDirective::Break;
/// assert!(stop.is_break());
/// assert_eq!(stop.to_string(), "Break");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoopDirective {
    /// Asks the producer to leave its loop.
    Break,
    /// Asks the producer to produce the next item.
    Continue,
}

impl LoopDirective {
    /// Returns `Continue` if `keep_going` is `true`, `Break` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use weir::generator::LoopDirective;
    ///
    /// assert_eq!(LoopDirective::from_continue(true), LoopDirective::Continue);
    /// assert_eq!(LoopDirective::from_continue(false), LoopDirective::Break);
    /// ```
    #[inline]
    pub const fn from_continue(keep_going: bool) -> Self {
        if keep_going {
            Self::Continue
        } else {
            Self::Break
        }
    }

    /// Returns `true` if this is `Break`.
    #[inline]
    pub const fn is_break(self) -> bool {
        matches!(self, Self::Break)
    }

    /// Returns `true` if this is `Continue`.
    #[inline]
    pub const fn is_continue(self) -> bool {
        matches!(self, Self::Continue)
    }
}

impl fmt::Display for LoopDirective {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Break => write!(formatter, "Break"),
            Self::Continue => write!(formatter, "Continue"),
        }
    }
}

impl From<LoopDirective> for ControlFlow<()> {
    fn from(directive: LoopDirective) -> Self {
        match directive {
            LoopDirective::Break => Self::Break(()),
            LoopDirective::Continue => Self::Continue(()),
        }
    }
}

impl<B> From<ControlFlow<B>> for LoopDirective {
    fn from(flow: ControlFlow<B>) -> Self {
        match flow {
            ControlFlow::Break(_) => Self::Break,
            ControlFlow::Continue(()) => Self::Continue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(true, LoopDirective::Continue)]
    #[case(false, LoopDirective::Break)]
    fn test_from_continue(#[case] keep_going: bool, #[case] expected: LoopDirective) {
        assert_eq!(LoopDirective::from_continue(keep_going), expected);
    }

    #[rstest]
    fn test_predicates_are_exclusive() {
        assert!(LoopDirective::Break.is_break());
        assert!(!LoopDirective::Break.is_continue());
        assert!(LoopDirective::Continue.is_continue());
        assert!(!LoopDirective::Continue.is_break());
    }

    #[rstest]
    fn test_control_flow_conversion() {
        let flow: ControlFlow<()> = LoopDirective::Break.into();
        assert_eq!(flow, ControlFlow::Break(()));

        let directive: LoopDirective = ControlFlow::<&str>::Break("stop").into();
        assert_eq!(directive, LoopDirective::Break);

        let directive: LoopDirective = ControlFlow::<()>::Continue(()).into();
        assert_eq!(directive, LoopDirective::Continue);
    }

    #[rstest]
    fn test_display() {
        assert_eq!(format!("{}", LoopDirective::Continue), "Continue");
    }
}
