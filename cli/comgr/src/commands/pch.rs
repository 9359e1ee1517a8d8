//! `comgr pch` — precompiled header selection.

use std::path::Path;

use anyhow::{Context, Result};
use comgr_devlibs::{add_precompiled_header, DataSet, Language};

use super::output::{self, Format};

/// Print, and optionally extract, the precompiled header for `language`.
pub fn run(language: Language, out_dir: Option<&Path>, format: Option<&str>) -> Result<()> {
    let format = Format::parse(format)?;
    let mut set = DataSet::new();
    add_precompiled_header(language, &mut set)
        .with_context(|| format!("selecting precompiled header for {language}"))?;

    print!("{}", output::render(&set, format)?);
    if format == Format::Json {
        println!();
    }
    if let Some(dir) = out_dir {
        output::extract(&set, dir)?;
    }
    Ok(())
}
