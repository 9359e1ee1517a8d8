//! Source language selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Source language of the kernel being compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "opencl-1.2")]
    OpenCl12,
    #[serde(rename = "opencl-2.0")]
    OpenCl20,
    /// Heterogeneous Compute C++.
    #[serde(rename = "hc")]
    Hc,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::None,
        Language::OpenCl12,
        Language::OpenCl20,
        Language::Hc,
    ];

    /// Canonical name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Language::None => "none",
            Language::OpenCl12 => "opencl-1.2",
            Language::OpenCl20 => "opencl-2.0",
            Language::Hc => "hc",
        }
    }

    /// Whether device libraries and precompiled headers exist for this language.
    pub fn is_opencl(&self) -> bool {
        matches!(self, Language::OpenCl12 | Language::OpenCl20)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|l| l.name() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Language::ALL.iter().map(Language::name).collect();
                format!("unknown language '{s}' (expected one of: {})", known.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        for lang in Language::ALL {
            assert_eq!(lang.name().parse::<Language>().unwrap(), lang);
        }
        assert!("OpenCL-2.0".parse::<Language>().is_err());
        assert!("opencl".parse::<Language>().is_err());
    }

    #[test]
    fn only_opencl_is_supported() {
        assert!(Language::OpenCl12.is_opencl());
        assert!(Language::OpenCl20.is_opencl());
        assert!(!Language::None.is_opencl());
        assert!(!Language::Hc.is_opencl());
    }

    #[test]
    fn serde_matches_display() {
        let json = serde_json::to_string(&Language::OpenCl20).unwrap();
        assert_eq!(json, "\"opencl-2.0\"");
        let lang: Language = serde_json::from_str("\"opencl-1.2\"").unwrap();
        assert_eq!(lang, Language::OpenCl12);
    }
}
