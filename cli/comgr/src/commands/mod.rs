//! CLI command implementations.

pub mod devlibs;
pub mod init;
pub mod isa;
pub mod output;
pub mod pch;
