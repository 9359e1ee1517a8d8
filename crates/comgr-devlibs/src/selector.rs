//! Selection of device libraries and precompiled headers.
//!
//! Both selectors are pure functions of their inputs over the embedded
//! table; they never touch a data set.

use comgr_targets::ArchVersion;

use crate::embedded::{self, BlobAsset};
use crate::error::{DevLibsError, Result};
use crate::language::Language;
use crate::options::{OptionFlag, OptionFlags};

/// Number of libraries in a device library bundle.
pub const BUNDLE_LEN: usize = 8;

/// Language-independent runtime, math and kernel libraries, in link order.
const COMMON_LIBRARIES: [&str; 3] = ["opencl_lib.bc", "ocml_lib.bc", "ockl_lib.bc"];

/// Control libraries per option flag: `(flag, enabled variant, disabled variant)`.
const CONTROL_LIBRARIES: [(OptionFlag, &str, &str); 4] = [
    (
        OptionFlag::CorrectlyRoundedSqrt,
        "oclc_correctly_rounded_sqrt_on_lib.bc",
        "oclc_correctly_rounded_sqrt_off_lib.bc",
    ),
    (
        OptionFlag::DazOpt,
        "oclc_daz_opt_on_lib.bc",
        "oclc_daz_opt_off_lib.bc",
    ),
    (
        OptionFlag::FiniteOnly,
        "oclc_finite_only_on_lib.bc",
        "oclc_finite_only_off_lib.bc",
    ),
    (
        OptionFlag::UnsafeMath,
        "oclc_unsafe_math_on_lib.bc",
        "oclc_unsafe_math_off_lib.bc",
    ),
];

/// The ordered libraries to link for one (language, version, options) triple.
///
/// Order is link order: runtime, math, kernel, ISA version, then one
/// control library per flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceLibraryBundle {
    libraries: [&'static BlobAsset; BUNDLE_LEN],
}

impl DeviceLibraryBundle {
    pub fn libraries(&self) -> &[&'static BlobAsset; BUNDLE_LEN] {
        &self.libraries
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static BlobAsset> + '_ {
        self.libraries.iter().copied()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.iter().map(|b| b.name).collect()
    }

    /// Sum of all library sizes in bytes.
    pub fn total_size(&self) -> usize {
        self.iter().map(BlobAsset::size).sum()
    }
}

fn require_opencl(language: Language) -> Result<()> {
    if language.is_opencl() {
        Ok(())
    } else {
        Err(DevLibsError::UnsupportedLanguage { language })
    }
}

/// Select the device libraries for a language, architecture version and option set.
pub fn select_device_libraries(
    language: Language,
    version: ArchVersion,
    flags: &OptionFlags,
) -> Result<DeviceLibraryBundle> {
    require_opencl(language)?;

    let [runtime, math, kernel] = COMMON_LIBRARIES;
    let isa_version = embedded::isa_version_blob(version)?;

    let mut controls = [isa_version; 4];
    for (slot, (flag, on, off)) in controls.iter_mut().zip(CONTROL_LIBRARIES) {
        *slot = embedded::require(if flags.get(flag) { on } else { off })?;
    }
    let [sqrt, daz, finite, unsafe_math] = controls;

    Ok(DeviceLibraryBundle {
        libraries: [
            embedded::require(runtime)?,
            embedded::require(math)?,
            embedded::require(kernel)?,
            isa_version,
            sqrt,
            daz,
            finite,
            unsafe_math,
        ],
    })
}

/// Select the precompiled header for a language.
pub fn select_precompiled_header(language: Language) -> Result<&'static BlobAsset> {
    let name = match language {
        Language::OpenCl12 => "opencl1.2-c.pch",
        Language::OpenCl20 => "opencl2.0-c.pch",
        Language::None | Language::Hc => {
            return Err(DevLibsError::UnsupportedLanguage { language });
        }
    };
    embedded::require(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bundle_order() {
        let bundle =
            select_device_libraries(Language::OpenCl20, ArchVersion(900), &OptionFlags::default())
                .unwrap();
        assert_eq!(
            bundle.names(),
            vec![
                "opencl_lib.bc",
                "ocml_lib.bc",
                "ockl_lib.bc",
                "oclc_isa_version_900_lib.bc",
                "oclc_correctly_rounded_sqrt_off_lib.bc",
                "oclc_daz_opt_off_lib.bc",
                "oclc_finite_only_off_lib.bc",
                "oclc_unsafe_math_off_lib.bc",
            ]
        );
    }

    #[test]
    fn each_flag_selects_its_own_control() {
        for (index, flag) in OptionFlag::ALL.into_iter().enumerate() {
            let flags = OptionFlags::parse(flag.token()).unwrap();
            let bundle =
                select_device_libraries(Language::OpenCl12, ArchVersion(803), &flags).unwrap();
            let names = bundle.names();
            for (i, name) in names[4..].iter().enumerate() {
                let expect_on = i == index;
                assert_eq!(name.ends_with("_on_lib.bc"), expect_on, "{flag}: {name}");
            }
        }
    }

    #[test]
    fn all_flags_on() {
        let flags = OptionFlags::parse("unsafe_math,finite_only,daz_opt,correctly_rounded_sqrt").unwrap();
        let bundle = select_device_libraries(Language::OpenCl20, ArchVersion(906), &flags).unwrap();
        assert_eq!(
            &bundle.names()[3..],
            &[
                "oclc_isa_version_906_lib.bc",
                "oclc_correctly_rounded_sqrt_on_lib.bc",
                "oclc_daz_opt_on_lib.bc",
                "oclc_finite_only_on_lib.bc",
                "oclc_unsafe_math_on_lib.bc",
            ]
        );
    }

    #[test]
    fn selection_is_deterministic() {
        let flags = OptionFlags::parse("daz_opt").unwrap();
        let a = select_device_libraries(Language::OpenCl12, ArchVersion(801), &flags).unwrap();
        let b = select_device_libraries(Language::OpenCl12, ArchVersion(801), &flags).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.libraries().len(), BUNDLE_LEN);
        assert!(a.total_size() > 0);
    }

    #[test]
    fn unsupported_language() {
        for language in [Language::None, Language::Hc] {
            let err = select_device_libraries(language, ArchVersion(900), &OptionFlags::default())
                .unwrap_err();
            assert!(matches!(err, DevLibsError::UnsupportedLanguage { .. }));
            assert!(matches!(
                select_precompiled_header(language).unwrap_err(),
                DevLibsError::UnsupportedLanguage { .. }
            ));
        }
    }

    #[test]
    fn unsupported_version() {
        let err = select_device_libraries(Language::OpenCl20, ArchVersion(12345), &OptionFlags::default())
            .unwrap_err();
        assert!(matches!(err, DevLibsError::UnsupportedArchVersion { .. }));
    }

    #[test]
    fn precompiled_header_per_dialect() {
        assert_eq!(select_precompiled_header(Language::OpenCl12).unwrap().name, "opencl1.2-c.pch");
        assert_eq!(select_precompiled_header(Language::OpenCl20).unwrap().name, "opencl2.0-c.pch");
    }
}
