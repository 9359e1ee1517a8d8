//! `comgr isa` — supported target listing.

use anyhow::Result;
use comgr_devlibs::embedded::supported_arch_versions;
use comgr_devlibs::TargetIdentifier;

/// ISA names for every architecture version with embedded device libraries.
pub fn supported_isa_names() -> Vec<String> {
    supported_arch_versions()
        .into_iter()
        .map(TargetIdentifier::hsa_isa_name)
        .collect()
}

/// List all supported ISA names.
pub fn list() -> Result<()> {
    println!("Supported ISAs:");
    for name in supported_isa_names() {
        println!("  {name}");
    }
    Ok(())
}
