//! # Error Handling
//!
//! Error types for the icon padding library. Every failure carries an
//! [`ErrorContext`] with the operation being performed, optional free-form
//! context and a recovery suggestion that the CLI can show to the user.
//!
//! ## Error Kinds
//!
//! - `InputNotFound`: the input path does not exist; detected before decoding
//! - `Config`: parameter validation failed
//! - `Decode`: the input could not be read or decoded as an image
//! - `Resize`: resampling failed
//! - `Encode`: the padded canvas could not be encoded or written
//! - `Io`: any other filesystem failure
//!
//! ## Usage
//!
//! ```rust
//! use icon_pad::error::{HasRecoverySuggestion, PadError};
//!
//! let error = PadError::config("target_size", "0", "must be greater than 0")
//!     .with_recovery_suggestion("Pass a positive --target-size, e.g. 824");
//!
//! assert_eq!(error.category(), "config");
//! assert!(error.recovery_suggestion().is_some());
//! ```

use std::{
    error::Error as StdError,
    fmt,
    path::{Path, PathBuf},
    time::SystemTime,
};

use icon_scale::cpu::ScaleError;

/// Severity levels for errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Warnings that may indicate potential issues
    Warning,
    /// Errors that abort the current run
    Error,
    /// Errors caused by the environment rather than the input
    Critical,
}

/// Metadata about when and where an error occurred
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// When the error occurred
    pub timestamp: SystemTime,
    /// The operation being performed when the error occurred
    pub operation: Option<String>,
    /// Additional context about the error
    pub context: Option<String>,
    /// Suggested recovery action
    pub recovery_suggestion: Option<String>,
    /// Error severity level
    pub severity: ErrorSeverity,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            timestamp: SystemTime::now(),
            operation: None,
            context: None,
            recovery_suggestion: None,
            severity: ErrorSeverity::Error,
        }
    }
}

impl ErrorContext {
    /// Create a new error context
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the operation that was being performed
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Add additional context
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Set recovery suggestion
    pub fn with_recovery_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.recovery_suggestion = Some(suggestion.into());
        self
    }

    /// Set severity level
    pub fn with_severity(mut self, severity: ErrorSeverity) -> Self {
        self.severity = severity;
        self
    }
}

/// Base error type for icon padding
#[derive(Debug)]
pub enum PadError {
    /// Input file does not exist
    InputNotFound { path: PathBuf, context: ErrorContext },
    /// Configuration validation errors
    Config {
        field: String,
        value: String,
        reason: String,
        context: ErrorContext,
    },
    /// Input could not be opened or decoded
    Decode {
        path: PathBuf,
        source: image::ImageError,
        context: ErrorContext,
    },
    /// Resampling failures
    Resize {
        source: ScaleError,
        context: ErrorContext,
    },
    /// Output could not be encoded or written
    Encode {
        path: PathBuf,
        source: image::ImageError,
        context: ErrorContext,
    },
    /// I/O errors
    Io {
        operation: String,
        source: std::io::Error,
        context: ErrorContext,
    },
}

impl PadError {
    /// Create an input-not-found error
    pub fn input_not_found(path: impl AsRef<Path>) -> Self {
        Self::InputNotFound {
            path: path.as_ref().to_path_buf(),
            context: ErrorContext::new()
                .with_operation("open_input")
                .with_recovery_suggestion("Check the input path and try again"),
        }
    }

    /// Create a configuration error
    pub fn config(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Config {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
            context: ErrorContext::new().with_operation("validate_config"),
        }
    }

    /// Create a decode error
    pub fn decode(path: impl AsRef<Path>, source: image::ImageError) -> Self {
        Self::Decode {
            path: path.as_ref().to_path_buf(),
            source,
            context: ErrorContext::new()
                .with_operation("decode_input")
                .with_recovery_suggestion("Make sure the input is a supported raster image (PNG, JPEG, ...)"),
        }
    }

    /// Create a resize error
    pub fn resize(source: ScaleError) -> Self {
        Self::Resize {
            source,
            context: ErrorContext::new().with_operation("resize_icon"),
        }
    }

    /// Create an encode error
    pub fn encode(path: impl AsRef<Path>, source: image::ImageError) -> Self {
        Self::Encode {
            path: path.as_ref().to_path_buf(),
            source,
            context: ErrorContext::new()
                .with_operation("save_output")
                .with_severity(ErrorSeverity::Critical)
                .with_recovery_suggestion("Check that the output directory exists and is writable"),
        }
    }

    /// Create an I/O error
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        let operation = operation.into();
        Self::Io {
            context: ErrorContext::new()
                .with_operation(operation.clone())
                .with_severity(ErrorSeverity::Critical),
            operation,
            source,
        }
    }

    /// Add context to the error
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context_mut().context = Some(context.into());
        self
    }

    /// Add operation context
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.context_mut().operation = Some(operation.into());
        self
    }

    /// Add recovery suggestion
    pub fn with_recovery_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.context_mut().recovery_suggestion = Some(suggestion.into());
        self
    }

    /// Set severity
    pub fn with_severity(mut self, severity: ErrorSeverity) -> Self {
        self.context_mut().severity = severity;
        self
    }

    /// Get the error context
    pub fn context(&self) -> &ErrorContext {
        match self {
            Self::InputNotFound { context, .. } => context,
            Self::Config { context, .. } => context,
            Self::Decode { context, .. } => context,
            Self::Resize { context, .. } => context,
            Self::Encode { context, .. } => context,
            Self::Io { context, .. } => context,
        }
    }

    fn context_mut(&mut self) -> &mut ErrorContext {
        match self {
            Self::InputNotFound { context, .. } => context,
            Self::Config { context, .. } => context,
            Self::Decode { context, .. } => context,
            Self::Resize { context, .. } => context,
            Self::Encode { context, .. } => context,
            Self::Io { context, .. } => context,
        }
    }

    /// Get the error category as a string
    pub fn category(&self) -> &'static str {
        match self {
            Self::InputNotFound { .. } => "input_not_found",
            Self::Config { .. } => "config",
            Self::Decode { .. } => "decode",
            Self::Resize { .. } => "resize",
            Self::Encode { .. } => "encode",
            Self::Io { .. } => "io",
        }
    }

    /// True for the missing-input case, which is reported before any processing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::InputNotFound { .. })
    }
}

impl fmt::Display for PadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PadError::InputNotFound { path, .. } => {
                write!(f, "File not found at {}", path.display())
            }
            PadError::Config {
                field,
                value,
                reason,
                ..
            } => {
                write!(
                    f,
                    "Configuration error in '{}': {} (value: {})",
                    field, reason, value
                )
            }
            PadError::Decode { path, source, .. } => {
                write!(f, "Failed to decode {}: {}", path.display(), source)
            }
            PadError::Resize { source, .. } => write!(f, "Resize failed: {}", source),
            PadError::Encode { path, source, .. } => {
                write!(f, "Failed to save {}: {}", path.display(), source)
            }
            PadError::Io {
                operation, source, ..
            } => write!(f, "I/O error during {}: {}", operation, source),
        }
    }
}

impl StdError for PadError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Decode { source, .. } => Some(source),
            Self::Resize { source, .. } => Some(source),
            Self::Encode { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type alias using our custom error type
pub type PadResult<T> = Result<T, PadError>;

/// Trait for errors that expose a severity
pub trait HasSeverity {
    fn severity(&self) -> ErrorSeverity;
}

impl HasSeverity for PadError {
    fn severity(&self) -> ErrorSeverity {
        self.context().severity
    }
}

/// Trait for errors that can suggest a fix to the user
pub trait HasRecoverySuggestion {
    fn recovery_suggestion(&self) -> Option<&str>;
}

impl HasRecoverySuggestion for PadError {
    fn recovery_suggestion(&self) -> Option<&str> {
        self.context().recovery_suggestion.as_deref()
    }
}

impl From<ScaleError> for PadError {
    fn from(err: ScaleError) -> Self {
        Self::resize(err)
    }
}
