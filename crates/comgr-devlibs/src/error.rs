//! Error and status types for device library assembly.

use comgr_targets::{ArchVersion, TargetError};

use crate::language::Language;

/// Coarse outcome of an entry point, matching the comgr status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Success,
    /// Caller input was rejected.
    InvalidArgument,
    /// The result container could not allocate an object.
    OutOfResources,
}

impl Status {
    /// Classify the outcome of an operation.
    pub fn of<T>(result: &Result<T>) -> Self {
        match result {
            Ok(_) => Status::Success,
            Err(e) => e.status(),
        }
    }
}

/// Errors that can occur while assembling device libraries or headers.
#[derive(Debug, thiserror::Error)]
pub enum DevLibsError {
    /// The target identifier could not be resolved to an architecture version.
    #[error("invalid target: {0}")]
    Target(#[from] TargetError),

    /// The language is not one of the supported OpenCL dialects.
    #[error("unsupported language '{language}'")]
    UnsupportedLanguage { language: Language },

    /// An option token is not recognized.
    #[error("unknown option '{token}'")]
    UnknownOption { token: String },

    /// An option token was given more than once.
    #[error("option '{token}' given more than once")]
    DuplicateOption { token: String },

    /// No ISA version library exists for the architecture version.
    #[error("no device library for architecture version {version}")]
    UnsupportedArchVersion { version: ArchVersion },

    /// A required blob is absent from the embedded table.
    #[error("embedded blob '{name}' not found")]
    MissingBlob { name: String },

    /// The result container refused to allocate more objects.
    #[error("out of resources: {detail}")]
    OutOfResources { detail: String },
}

impl DevLibsError {
    /// The comgr status code this error maps to.
    pub fn status(&self) -> Status {
        match self {
            DevLibsError::OutOfResources { .. } => Status::OutOfResources,
            _ => Status::InvalidArgument,
        }
    }
}

/// Result type alias for device library operations.
pub type Result<T> = std::result::Result<T, DevLibsError>;
