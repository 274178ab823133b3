//! The error type shared by every exos combinator.
//!
//! Combinators never wrap or translate the errors of the functions they
//! decorate: a failure raised inside a curried or memoized function reaches
//! the caller as the same [`Error`] value.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors produced by exos combinators and by wrapped functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A segment of a dotted path does not exist and no default was given.
    #[error("attribute `{segment}` is missing while resolving `{path}`")]
    AttributeMissing {
        /// The full dotted path being resolved.
        path: String,
        /// The first segment that could not be found.
        segment: String,
    },

    /// The attribute at the end of a path is not of the requested type.
    #[error("attribute at `{path}` is not a `{expected}`")]
    AttributeType {
        /// The full dotted path being resolved.
        path: String,
        /// Name of the requested type.
        expected: &'static str,
    },

    /// A `when` dispatch found no predicate that holds.
    #[error("no pattern matched")]
    NonExhaustivePattern,

    /// A function received fewer positional arguments than it requires.
    #[error("{function}() requires {required} positional arguments but {supplied} were given")]
    MissingArguments {
        /// Name of the function being called.
        function: String,
        /// Number of required positional parameters.
        required: usize,
        /// Number of positional arguments supplied.
        supplied: usize,
    },

    /// A function received more positional arguments than it accepts.
    #[error("{function}() accepts at most {accepted} positional arguments but {supplied} were given")]
    TooManyArguments {
        /// Name of the function being called.
        function: String,
        /// Number of positional parameters accepted.
        accepted: usize,
        /// Number of positional arguments supplied.
        supplied: usize,
    },

    /// A positional argument has the wrong kind of value.
    #[error("positional argument {index} must be {expected}, found {found}")]
    ArgumentType {
        /// Zero-based position of the argument.
        index: usize,
        /// The kind of value expected.
        expected: &'static str,
        /// The kind of value found.
        found: &'static str,
    },

    /// A keyword argument has the wrong kind of value.
    #[error("keyword argument `{name}` must be {expected}, found {found}")]
    KeywordType {
        /// Name of the keyword argument.
        name: String,
        /// The kind of value expected.
        expected: &'static str,
        /// The kind of value found.
        found: &'static str,
    },

    /// The attribute at a path is not a function.
    #[error("attribute at `{path}` is not callable")]
    NotCallable {
        /// The full dotted path that was resolved.
        path: String,
    },

    /// A wrapped function reported a failure of its own.
    #[error("{0}")]
    Failed(String),

    /// The worker pool for a parallel fan-out could not be built.
    #[error("failed to build worker pool: {0}")]
    WorkerPool(String),
}

impl Error {
    /// Creates a [`Error::Failed`] from any displayable message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exos::Error;
    ///
    /// let error = Error::failed("division by zero");
    /// assert_eq!(error.to_string(), "division by zero");
    /// ```
    pub fn failed(message: impl std::fmt::Display) -> Self {
        Self::Failed(message.to_string())
    }
}
