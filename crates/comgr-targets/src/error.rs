//! Error types for target identifier operations.

/// Errors that can occur while resolving a target identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TargetError {
    /// The identifier does not have the `arch-vendor-os-environ-processor` shape.
    #[error("malformed target identifier '{identifier}': {detail}")]
    MalformedIdentifier {
        /// The identifier as supplied by the caller.
        identifier: String,
        /// Description of what is wrong with it.
        detail: String,
    },

    /// The architecture component names something other than `amdgcn`.
    #[error("unsupported target architecture '{arch}'")]
    UnsupportedArch {
        /// The architecture component.
        arch: String,
    },

    /// The processor name does not start with `gfx`.
    #[error("processor '{processor}' does not start with 'gfx'")]
    MissingGfxPrefix {
        /// The processor component.
        processor: String,
    },

    /// The processor suffix after `gfx` is not a decimal integer.
    #[error("processor '{processor}' has no valid architecture version")]
    InvalidArchVersion {
        /// The processor component.
        processor: String,
    },
}

/// Result type for target operations.
pub type Result<T> = std::result::Result<T, TargetError>;
