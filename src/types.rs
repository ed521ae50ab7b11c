/// A result type that can contain warnings alongside the successful result.
///
/// This enum allows functions to return successful results while still
/// providing diagnostic information about potential issues encountered
/// during processing (e.g., a gradient stop offset that had to be clamped
/// into the renderable range).
///
/// # Type Parameters
///
/// * `T` - The success result type
/// * `W` - The warning type (typically `String` for warning messages)
///
/// # Examples
///
/// ```rust
/// use breakline::types::WithWarnings;
///
/// let result = WithWarnings::Warning(42.0, vec!["stop offset clamped".to_string()]);
/// assert!(result.is_warning());
/// assert_eq!(result.clone().unwrap(), 42.0);
///
/// let warnings = result.warnings();
/// assert_eq!(warnings.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum WithWarnings<T, W = String> {
    /// Successful result without warnings
    Ok(T),
    /// Successful result with warnings
    Warning(T, Vec<W>),
}

impl<T, W> WithWarnings<T, W> {
    /// Wraps a value, attaching warnings only when some exist.
    pub fn new(value: T, warnings: Vec<W>) -> Self {
        if warnings.is_empty() {
            WithWarnings::Ok(value)
        } else {
            WithWarnings::Warning(value, warnings)
        }
    }

    /// Checks if the result is successful without warnings.
    pub fn is_ok(&self) -> bool {
        matches!(self, WithWarnings::Ok(_))
    }

    /// Checks if the result has warnings.
    pub fn is_warning(&self) -> bool {
        matches!(self, WithWarnings::Warning(_, _))
    }

    /// Extracts the result value, discarding any warnings.
    ///
    /// This consumes the `WithWarnings` and returns the contained value,
    /// regardless of whether there were warnings.
    pub fn unwrap(self) -> T {
        match self {
            WithWarnings::Ok(data) => data,
            WithWarnings::Warning(data, _) => data,
        }
    }

    /// Extracts the warnings, discarding the result value.
    ///
    /// Returns an empty vector if there were no warnings.
    pub fn warnings(self) -> Vec<W> {
        match self {
            WithWarnings::Ok(_) => Vec::new(),
            WithWarnings::Warning(_, warnings) => warnings,
        }
    }

    /// Maps the contained value, preserving warnings.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> WithWarnings<U, W> {
        match self {
            WithWarnings::Ok(data) => WithWarnings::Ok(f(data)),
            WithWarnings::Warning(data, warnings) => WithWarnings::Warning(f(data), warnings),
        }
    }
}

impl<T, W> From<WithWarnings<T, W>> for (T, Vec<W>) {
    /// Converts `WithWarnings` into a tuple of (result, warnings).
    ///
    /// This provides a convenient way to destructure the result and
    /// warnings simultaneously.
    fn from(value: WithWarnings<T, W>) -> Self {
        match value {
            WithWarnings::Ok(data) => (data, Vec::new()),
            WithWarnings::Warning(data, warnings) => (data, warnings),
        }
    }
}

/// Outcome of validating a chart structure.
///
/// Warnings indicate conditions that do not prevent rendering; errors mean
/// the structure must not be handed to the rendering collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult<T = ()> {
    /// The structure is valid.
    Valid(T),
    /// The structure is valid but produced warnings.
    Warnings(T, Vec<String>),
    /// The structure is invalid; warnings collected along the way are kept.
    Invalid(Vec<String>, Vec<String>),
}

impl<T> ValidationResult<T> {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, ValidationResult::Invalid(_, _))
    }
}

/// Structures that can be checked before being handed to the rendering
/// collaborator.
pub trait Validate {
    fn validate(&self) -> ValidationResult;
}
