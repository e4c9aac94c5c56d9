//! # Errors
//!
//! Structured, transport-agnostic errors for desk-core, shaped like the
//! Feathers error classes:
//! - every error carries a kind with a status code and class name
//! - the original cause (I/O, JSON) rides along as `source`
//! - `to_json()` renders a payload any presentation layer can print
//!
//! All kinds are local, recoverable conditions returned to the caller.

use std::fmt;

use anyhow::Error as AnyError;

/// A convenience result type for desk-core APIs.
pub type DeskResult<T> = std::result::Result<T, DeskError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    SourceUnavailable, // 503
    MalformedPayload,  // 422
    InvalidField,      // 400
    InvalidValue,      // 400
    UnknownService,    // 404
    GeneralError,      // 500
}

impl ErrorKind {
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorKind::SourceUnavailable => 503,
            ErrorKind::MalformedPayload => 422,
            ErrorKind::InvalidField => 400,
            ErrorKind::InvalidValue => 400,
            ErrorKind::UnknownService => 404,
            ErrorKind::GeneralError => 500,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::SourceUnavailable => "SourceUnavailable",
            ErrorKind::MalformedPayload => "MalformedPayload",
            ErrorKind::InvalidField => "InvalidField",
            ErrorKind::InvalidValue => "InvalidValue",
            ErrorKind::UnknownService => "UnknownService",
            ErrorKind::GeneralError => "GeneralError",
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            ErrorKind::SourceUnavailable => "source-unavailable",
            ErrorKind::MalformedPayload => "malformed-payload",
            ErrorKind::InvalidField => "invalid-field",
            ErrorKind::InvalidValue => "invalid-value",
            ErrorKind::UnknownService => "unknown-service",
            ErrorKind::GeneralError => "general-error",
        }
    }
}

/// A structured desk error.
///
/// Mirrors the Feathers-style fields:
/// - name
/// - message
/// - code
/// - class_name
#[derive(Debug)]
pub struct DeskError {
    pub kind: ErrorKind,
    pub message: String,
    pub source: Option<AnyError>,
}

impl DeskError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<AnyError>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn code(&self) -> u16 {
        self.kind.status_code()
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn class_name(&self) -> &'static str {
        self.kind.class_name()
    }

    /// Downcast an `anyhow::Error` to a `DeskError` if possible.
    pub fn from_anyhow(err: &AnyError) -> Option<&DeskError> {
        err.downcast_ref::<DeskError>()
    }

    /// Feathers-ish JSON payload. The `source` chain is left out.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name(),
            "message": self.message,
            "code": self.code(),
            "className": self.class_name(),
        })
    }

    // ---- Constructors ----

    pub fn source_unavailable(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::SourceUnavailable, msg)
    }
    pub fn malformed_payload(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedPayload, msg)
    }
    pub fn invalid_field(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidField, msg)
    }
    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidValue, msg)
    }
    pub fn unknown_service(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownService, msg)
    }
    pub fn general_error(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::GeneralError, msg)
    }
}

impl fmt::Display for DeskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name(), self.code(), self.message)
    }
}

impl std::error::Error for DeskError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Convenience helper for "bail with DeskError".
#[macro_export]
macro_rules! bail_desk {
    ($ctor:ident, $msg:expr) => {
        return Err($crate::errors::DeskError::$ctor($msg));
    };
    ($ctor:ident, $fmt:expr, $($arg:tt)*) => {
        return Err($crate::errors::DeskError::$ctor(format!($fmt, $($arg)*)));
    };
}
