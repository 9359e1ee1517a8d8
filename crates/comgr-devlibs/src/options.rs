//! Action option parsing.
//!
//! Options arrive as a single comma-separated string. Each recognized token
//! switches one numerical-behavior flag on; every flag selects one control
//! library when device libraries are assembled.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DevLibsError, Result};

/// One of the recognized option tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionFlag {
    CorrectlyRoundedSqrt,
    DazOpt,
    FiniteOnly,
    UnsafeMath,
}

impl OptionFlag {
    /// Every flag, in control-library link order.
    pub const ALL: [OptionFlag; 4] = [
        OptionFlag::CorrectlyRoundedSqrt,
        OptionFlag::DazOpt,
        OptionFlag::FiniteOnly,
        OptionFlag::UnsafeMath,
    ];

    /// The exact option token for this flag.
    pub fn token(&self) -> &'static str {
        match self {
            OptionFlag::CorrectlyRoundedSqrt => "correctly_rounded_sqrt",
            OptionFlag::DazOpt => "daz_opt",
            OptionFlag::FiniteOnly => "finite_only",
            OptionFlag::UnsafeMath => "unsafe_math",
        }
    }

    /// Look up a token. Matching is exact and case-sensitive.
    pub fn from_token(token: &str) -> Option<Self> {
        OptionFlag::ALL.into_iter().find(|f| f.token() == token)
    }
}

impl fmt::Display for OptionFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// The full set of option flags for one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct OptionFlags {
    pub correctly_rounded_sqrt: bool,
    pub daz_opt: bool,
    pub finite_only: bool,
    pub unsafe_math: bool,
}

impl OptionFlags {
    /// Parse a comma-separated option string.
    ///
    /// Empty tokens are skipped, so `""`, `","` and `"daz_opt,,"` are all
    /// accepted. An unknown token or a repeated token is rejected; the first
    /// offending token is reported.
    pub fn parse(options: &str) -> Result<Self> {
        let mut flags = OptionFlags::default();
        for token in options.split(',').filter(|t| !t.is_empty()) {
            let flag = OptionFlag::from_token(token).ok_or_else(|| DevLibsError::UnknownOption {
                token: token.to_string(),
            })?;
            let slot = flags.slot_mut(flag);
            if *slot {
                return Err(DevLibsError::DuplicateOption {
                    token: token.to_string(),
                });
            }
            *slot = true;
            tracing::trace!(option = token, "option enabled");
        }
        Ok(flags)
    }

    /// Current value of a flag.
    pub fn get(&self, flag: OptionFlag) -> bool {
        match flag {
            OptionFlag::CorrectlyRoundedSqrt => self.correctly_rounded_sqrt,
            OptionFlag::DazOpt => self.daz_opt,
            OptionFlag::FiniteOnly => self.finite_only,
            OptionFlag::UnsafeMath => self.unsafe_math,
        }
    }

    fn slot_mut(&mut self, flag: OptionFlag) -> &mut bool {
        match flag {
            OptionFlag::CorrectlyRoundedSqrt => &mut self.correctly_rounded_sqrt,
            OptionFlag::DazOpt => &mut self.daz_opt,
            OptionFlag::FiniteOnly => &mut self.finite_only,
            OptionFlag::UnsafeMath => &mut self.unsafe_math,
        }
    }

    /// Flags that are switched on, in link order.
    pub fn enabled(&self) -> impl Iterator<Item = OptionFlag> + '_ {
        OptionFlag::ALL.into_iter().filter(|f| self.get(*f))
    }
}

impl fmt::Display for OptionFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens: Vec<&str> = self.enabled().map(|flag| flag.token()).collect();
        f.write_str(&tokens.join(","))
    }
}

impl FromStr for OptionFlags {
    type Err = DevLibsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
