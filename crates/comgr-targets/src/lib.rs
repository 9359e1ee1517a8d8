//! AMDGPU target identifier parsing for the comgr device library tooling.
//!
//! A target identifier (ISA name) has the shape
//! `arch-vendor-os-environ-processor[+feature...]`, for example
//! `amdgcn-amd-amdhsa--gfx900` or `amdgcn-amd-amdhsa--gfx906+xnack`.
//!
//! - [`identifier`] — splitting an ISA name into its components
//! - [`arch_version`] — extracting the numeric architecture version from the processor

pub mod arch_version;
pub mod error;
pub mod identifier;

pub use arch_version::ArchVersion;
pub use error::TargetError;
pub use identifier::TargetIdentifier;
