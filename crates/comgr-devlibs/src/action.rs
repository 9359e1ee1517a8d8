//! Entry points that add device libraries or precompiled headers to a data set.
//!
//! Both operations are transactional: objects are staged locally and
//! committed to the data set only once every one of them has been built and
//! the set has room for all of them. On failure the data set is unchanged.

use comgr_targets::TargetIdentifier;
use serde::{Deserialize, Serialize};

use crate::data::{DataKind, DataObject, DataSet};
use crate::embedded::{self, BlobAsset};
use crate::error::{DevLibsError, Result};
use crate::language::Language;
use crate::options::OptionFlags;
use crate::selector::{self, BUNDLE_LEN};

/// Inputs of a data action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DataAction {
    /// Source language.
    pub language: Language,
    /// Target identifier, e.g. `amdgcn-amd-amdhsa--gfx900`.
    #[serde(default)]
    pub isa_name: String,
    /// Comma-separated option tokens.
    #[serde(default)]
    pub options: String,
}

impl DataAction {
    pub fn new(language: Language, isa_name: impl Into<String>, options: impl Into<String>) -> Self {
        Self {
            language,
            isa_name: isa_name.into(),
            options: options.into(),
        }
    }

    /// Add the precompiled header for this action's language.
    pub fn add_precompiled_header(&self, result_set: &mut DataSet) -> Result<()> {
        add_precompiled_header(self.language, result_set)
    }

    /// Add the device libraries for this action's target, options and language.
    pub fn add_device_libraries(&self, result_set: &mut DataSet) -> Result<()> {
        add_device_libraries(&self.isa_name, &self.options, self.language, result_set)
    }
}

fn stage(kind: DataKind, blob: &BlobAsset) -> Result<DataObject> {
    tracing::debug!(name = blob.name, size = blob.size(), %kind, "staging embedded object");
    DataObject::allocate(kind, blob.name, blob.bytes)
}

/// Add the precompiled header for `language` to `result_set`.
///
/// Adds exactly one `PrecompiledHeader` object on success.
pub fn add_precompiled_header(language: Language, result_set: &mut DataSet) -> Result<()> {
    let header = selector::select_precompiled_header(language)?;
    let object = stage(DataKind::PrecompiledHeader, header)?;
    result_set.commit(vec![object])
}

/// Add the device libraries for a target, option string and language to `result_set`.
///
/// Adds exactly eight `Bc` objects in link order on success. Inputs are
/// validated in order: language, target identifier, architecture version,
/// options.
pub fn add_device_libraries(
    isa_name: &str,
    options: &str,
    language: Language,
    result_set: &mut DataSet,
) -> Result<()> {
    if !language.is_opencl() {
        return Err(DevLibsError::UnsupportedLanguage { language });
    }

    let ident = TargetIdentifier::parse(isa_name)?;
    let version = ident.arch_version()?;
    // Reject unsupported versions before looking at the options.
    embedded::isa_version_blob(version)?;
    let flags = OptionFlags::parse(options)?;

    let bundle = selector::select_device_libraries(language, version, &flags)?;
    tracing::debug!(isa_name, %version, options = %flags, "selected device libraries");

    let mut staged = Vec::with_capacity(BUNDLE_LEN);
    for blob in bundle.iter() {
        staged.push(stage(DataKind::Bc, blob)?);
    }
    result_set.commit(staged)
}
