//! Target identifier (ISA name) parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::arch_version::ArchVersion;
use crate::error::{Result, TargetError};

/// The only architecture this tooling ships device libraries for.
pub const AMDGCN_ARCH: &str = "amdgcn";

/// Number of `-` separated components in an ISA name.
const COMPONENT_COUNT: usize = 5;

/// A parsed target identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TargetIdentifier {
    /// Architecture (always `amdgcn`).
    pub arch: String,
    /// Vendor (e.g., `amd`).
    pub vendor: String,
    /// Operating system / runtime (e.g., `amdhsa`).
    pub os: String,
    /// Environment; usually empty.
    pub environ: String,
    /// Processor name (e.g., `gfx900`).
    pub processor: String,
    /// Target features appended with `+` (e.g., `xnack`).
    pub features: Vec<String>,
}

impl TargetIdentifier {
    /// Parse an ISA name of the form `arch-vendor-os-environ-processor[+feature...]`.
    pub fn parse(isa_name: &str) -> Result<Self> {
        let components: Vec<&str> = isa_name.splitn(COMPONENT_COUNT, '-').collect();
        if components.len() != COMPONENT_COUNT {
            return Err(TargetError::MalformedIdentifier {
                identifier: isa_name.to_string(),
                detail: format!(
                    "expected {COMPONENT_COUNT} '-' separated components, found {}",
                    components.len()
                ),
            });
        }

        let arch = components[0];
        if arch != AMDGCN_ARCH {
            return Err(TargetError::UnsupportedArch {
                arch: arch.to_string(),
            });
        }

        let mut processor_and_features = components[4].split('+');
        let processor = processor_and_features.next().unwrap_or_default();
        if processor.is_empty() {
            return Err(TargetError::MalformedIdentifier {
                identifier: isa_name.to_string(),
                detail: "empty processor name".into(),
            });
        }
        let features: Vec<String> = processor_and_features
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .collect();

        tracing::trace!(isa_name, processor, ?features, "parsed target identifier");

        Ok(Self {
            arch: arch.to_string(),
            vendor: components[1].to_string(),
            os: components[2].to_string(),
            environ: components[3].to_string(),
            processor: processor.to_string(),
            features,
        })
    }

    /// The numeric architecture version of the processor.
    pub fn arch_version(&self) -> Result<ArchVersion> {
        ArchVersion::from_processor(&self.processor)
    }

    /// Whether the identifier carries the named feature.
    pub fn has_feature(&self, name: &str) -> bool {
        self.features.iter().any(|f| f == name)
    }

    /// Canonical HSA ISA name for an architecture version.
    pub fn hsa_isa_name(version: ArchVersion) -> String {
        format!("{AMDGCN_ARCH}-amd-amdhsa--{}", version.processor_name())
    }
}

impl fmt::Display for TargetIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}-{}",
            self.arch, self.vendor, self.os, self.environ, self.processor
        )?;
        for feature in &self.features {
            write!(f, "+{feature}")?;
        }
        Ok(())
    }
}

impl FromStr for TargetIdentifier {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
