//! Numeric GPU architecture version.
//!
//! The version is the decimal suffix of a `gfx` processor name: `gfx900`
//! is version 900, `gfx9` is version 9.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TargetError};

/// Processor-name prefix shared by every graphics IP.
pub const GFX_PREFIX: &str = "gfx";

/// Architecture version parsed from a processor name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArchVersion(pub u32);

impl ArchVersion {
    /// Parse the version out of a processor name such as `gfx906`.
    ///
    /// The `gfx` prefix is required and the remainder must consist solely of
    /// ASCII decimal digits fitting in a `u32`. No trimming is performed.
    pub fn from_processor(processor: &str) -> Result<Self> {
        let digits = processor
            .strip_prefix(GFX_PREFIX)
            .ok_or_else(|| TargetError::MissingGfxPrefix {
                processor: processor.to_string(),
            })?;

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TargetError::InvalidArchVersion {
                processor: processor.to_string(),
            });
        }

        // Overflow is the only remaining failure.
        digits
            .parse::<u32>()
            .map(ArchVersion)
            .map_err(|_| TargetError::InvalidArchVersion {
                processor: processor.to_string(),
            })
    }

    /// The raw version number.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Canonical processor name for this version (`gfx<N>`).
    pub fn processor_name(self) -> String {
        format!("{GFX_PREFIX}{}", self.0)
    }
}

impl fmt::Display for ArchVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ArchVersion {
    fn from(v: u32) -> Self {
        ArchVersion(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_digit_version() {
        assert_eq!(ArchVersion::from_processor("gfx900").unwrap(), ArchVersion(900));
    }

    #[test]
    fn single_digit_version() {
        assert_eq!(ArchVersion::from_processor("gfx9").unwrap(), ArchVersion(9));
    }

    #[test]
    fn leading_zeros_are_digits() {
        assert_eq!(ArchVersion::from_processor("gfx0803").unwrap(), ArchVersion(803));
    }

    #[test]
    fn missing_prefix() {
        let err = ArchVersion::from_processor("sm_70").unwrap_err();
        assert!(matches!(err, TargetError::MissingGfxPrefix { .. }));
        // Case-sensitive.
        assert!(matches!(
            ArchVersion::from_processor("GFX900").unwrap_err(),
            TargetError::MissingGfxPrefix { .. }
        ));
    }

    #[test]
    fn rejects_empty_and_garbage_suffix() {
        for processor in ["gfx", "gfx90a", "gfx 900", "gfx900 ", "gfx+900", "gfx-1"] {
            assert!(
                matches!(
                    ArchVersion::from_processor(processor).unwrap_err(),
                    TargetError::InvalidArchVersion { .. }
                ),
                "{processor} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_overflow() {
        let err = ArchVersion::from_processor("gfx99999999999").unwrap_err();
        assert!(matches!(err, TargetError::InvalidArchVersion { .. }));
    }

    #[test]
    fn display_and_processor_name() {
        let v = ArchVersion(906);
        assert_eq!(v.to_string(), "906");
        assert_eq!(v.processor_name(), "gfx906");
        assert_eq!(v.get(), 906);
    }

    #[test]
    fn serializes_as_plain_integer() {
        let json = serde_json::to_string(&ArchVersion(803)).unwrap();
        assert_eq!(json, "803");
    }
}
