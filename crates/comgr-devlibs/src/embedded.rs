//! Build-time embedded device libraries and precompiled headers.
//!
//! Every file under `device-libs/` is compiled into the binary through
//! `include_bytes!` and exposed through the read-only [`EMBEDDED`] table.

use comgr_targets::ArchVersion;

use crate::error::{DevLibsError, Result};

/// A named, immutable binary embedded at build time.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct BlobAsset {
    /// File name the blob is registered under (e.g., `ocml_lib.bc`).
    pub name: &'static str,
    pub bytes: &'static [u8],
}

impl BlobAsset {
    /// Size of the blob in bytes.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

macro_rules! embedded_blobs {
    ($($file:literal),* $(,)?) => {
        /// All embedded blobs, sorted by name.
        pub static EMBEDDED: &[BlobAsset] = &[
            $(
                BlobAsset {
                    name: $file,
                    bytes: include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/device-libs/", $file)),
                },
            )*
        ];
    };
}

embedded_blobs![
    "ockl_lib.bc",
    "oclc_correctly_rounded_sqrt_off_lib.bc",
    "oclc_correctly_rounded_sqrt_on_lib.bc",
    "oclc_daz_opt_off_lib.bc",
    "oclc_daz_opt_on_lib.bc",
    "oclc_finite_only_off_lib.bc",
    "oclc_finite_only_on_lib.bc",
    "oclc_isa_version_700_lib.bc",
    "oclc_isa_version_701_lib.bc",
    "oclc_isa_version_702_lib.bc",
    "oclc_isa_version_703_lib.bc",
    "oclc_isa_version_704_lib.bc",
    "oclc_isa_version_801_lib.bc",
    "oclc_isa_version_802_lib.bc",
    "oclc_isa_version_803_lib.bc",
    "oclc_isa_version_810_lib.bc",
    "oclc_isa_version_900_lib.bc",
    "oclc_isa_version_902_lib.bc",
    "oclc_isa_version_904_lib.bc",
    "oclc_isa_version_906_lib.bc",
    "oclc_unsafe_math_off_lib.bc",
    "oclc_unsafe_math_on_lib.bc",
    "ocml_lib.bc",
    "opencl1.2-c.pch",
    "opencl2.0-c.pch",
    "opencl_lib.bc",
];

const ISA_VERSION_PREFIX: &str = "oclc_isa_version_";
const ISA_VERSION_SUFFIX: &str = "_lib.bc";

/// Look up an embedded blob by name.
pub fn find(name: &str) -> Option<&'static BlobAsset> {
    EMBEDDED.iter().find(|b| b.name == name)
}

/// Look up a blob that must exist.
pub fn require(name: &str) -> Result<&'static BlobAsset> {
    find(name).ok_or_else(|| DevLibsError::MissingBlob {
        name: name.to_string(),
    })
}

/// Name of the ISA version library for an architecture version.
pub fn isa_version_blob_name(version: ArchVersion) -> String {
    format!("{ISA_VERSION_PREFIX}{version}{ISA_VERSION_SUFFIX}")
}

/// The ISA version library for an architecture version.
pub fn isa_version_blob(version: ArchVersion) -> Result<&'static BlobAsset> {
    find(&isa_version_blob_name(version)).ok_or(DevLibsError::UnsupportedArchVersion { version })
}

/// Architecture versions with an embedded ISA version library, ascending.
pub fn supported_arch_versions() -> Vec<ArchVersion> {
    let mut versions: Vec<ArchVersion> = EMBEDDED
        .iter()
        .filter_map(|b| {
            b.name
                .strip_prefix(ISA_VERSION_PREFIX)?
                .strip_suffix(ISA_VERSION_SUFFIX)?
                .parse::<u32>()
                .ok()
        })
        .map(ArchVersion)
        .collect();
    versions.sort();
    versions
}
