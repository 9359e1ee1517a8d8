//! `comgr.toml` configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comgr_devlibs::{DataAction, Language};
use serde::{Deserialize, Serialize};

/// File name searched for from the working directory upward.
pub const CONFIG_FILE: &str = "comgr.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComgrConfig {
    /// Default action inputs.
    #[serde(default)]
    pub action: ActionConfig,
}

/// `[action]` section: defaults for the data action inputs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ActionConfig {
    #[serde(default)]
    pub language: Option<Language>,
    #[serde(default)]
    pub isa: Option<String>,
    #[serde(default)]
    pub options: Option<String>,
}

impl ComgrConfig {
    /// Search upward from `start_dir` for a `comgr.toml`, parse and return it
    /// along with the path it was loaded from.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(CONFIG_FILE);
            if candidate.is_file() {
                let config = Self::load(&candidate)?;
                return Ok(Some((config, candidate)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// Merge command-line overrides over the file defaults.
    ///
    /// Missing language defaults to OpenCL 2.0 and missing options to none;
    /// the ISA name has no default.
    pub fn resolve_action(
        &self,
        language: Option<Language>,
        isa: Option<&str>,
        options: Option<&str>,
    ) -> DataAction {
        DataAction::new(
            language
                .or(self.action.language)
                .unwrap_or(Language::OpenCl20),
            isa.map(str::to_string)
                .or_else(|| self.action.isa.clone())
                .unwrap_or_default(),
            options
                .map(str::to_string)
                .or_else(|| self.action.options.clone())
                .unwrap_or_default(),
        )
    }

    /// Template written by `comgr init`.
    pub fn template() -> String {
        r#"[action]
language = "opencl-2.0"
isa = "amdgcn-amd-amdhsa--gfx900"
options = ""
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_parses() {
        let config: ComgrConfig = toml::from_str(&ComgrConfig::template()).unwrap();
        assert_eq!(config.action.language, Some(Language::OpenCl20));
        assert_eq!(config.action.isa.as_deref(), Some("amdgcn-amd-amdhsa--gfx900"));
        assert_eq!(config.action.options.as_deref(), Some(""));
    }

    #[test]
    fn empty_file_is_default() {
        let config: ComgrConfig = toml::from_str("").unwrap();
        assert!(config.action.language.is_none());
        assert!(config.action.isa.is_none());
    }

    #[test]
    fn unknown_language_is_rejected() {
        let result: std::result::Result<ComgrConfig, _> =
            toml::from_str("[action]\nlanguage = \"cuda\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn flags_override_file() {
        let config: ComgrConfig = toml::from_str(
            "[action]\nlanguage = \"opencl-1.2\"\nisa = \"amdgcn-amd-amdhsa--gfx803\"\noptions = \"daz_opt\"\n",
        )
        .unwrap();

        let from_file = config.resolve_action(None, None, None);
        assert_eq!(from_file.language, Language::OpenCl12);
        assert_eq!(from_file.isa_name, "amdgcn-amd-amdhsa--gfx803");
        assert_eq!(from_file.options, "daz_opt");

        let overridden =
            config.resolve_action(Some(Language::OpenCl20), Some("amdgcn-amd-amdhsa--gfx906"), Some(""));
        assert_eq!(overridden.language, Language::OpenCl20);
        assert_eq!(overridden.isa_name, "amdgcn-amd-amdhsa--gfx906");
        assert_eq!(overridden.options, "");
    }

    #[test]
    fn defaults_without_file() {
        let action = ComgrConfig::default().resolve_action(None, None, None);
        assert_eq!(action.language, Language::OpenCl20);
        assert!(action.isa_name.is_empty());
        assert!(action.options.is_empty());
    }

    #[test]
    fn find_and_load_searches_upward() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), ComgrConfig::template()).unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let (config, path) = ComgrConfig::find_and_load(&nested).unwrap().unwrap();
        assert_eq!(path, dir.path().join(CONFIG_FILE));
        assert_eq!(config.action.language, Some(Language::OpenCl20));
    }
}
