//! Device library and precompiled header assembly for AMDGPU kernel compilation.
//!
//! Before an OpenCL kernel is compiled for a GPU target, the compiler needs
//! auxiliary inputs: the device runtime bitcode libraries to link against and
//! the precompiled header for the OpenCL dialect. This crate selects those
//! inputs from a table embedded at build time and adds them to a [`DataSet`].
//!
//! ## Modules
//!
//! - [`action`] — the two entry points and [`DataAction`]
//! - [`options`] — comma-separated option string parsing
//! - [`selector`] — bundle and header selection over the embedded table
//! - [`embedded`] — the build-time blob table
//! - [`data`] — data objects and data sets
//! - [`language`] — source language selector

pub mod action;
pub mod data;
pub mod embedded;
pub mod error;
pub mod language;
pub mod options;
pub mod selector;

pub use action::{add_device_libraries, add_precompiled_header, DataAction};
pub use data::{DataKind, DataObject, DataSet};
pub use embedded::BlobAsset;
pub use error::{DevLibsError, Status};
pub use language::Language;
pub use options::{OptionFlag, OptionFlags};
pub use selector::{DeviceLibraryBundle, select_device_libraries, select_precompiled_header};

pub use comgr_targets::{ArchVersion, TargetIdentifier};
