//! `comgr devlibs` — device library selection.

use std::path::Path;

use anyhow::{bail, Context, Result};
use comgr_devlibs::{DataAction, DataSet};

use super::output::{self, Format};

/// Assemble the device libraries for `action`.
pub fn collect(action: &DataAction) -> Result<DataSet> {
    if action.isa_name.is_empty() {
        bail!("no ISA given (pass --isa or set `isa` in comgr.toml)");
    }
    let mut set = DataSet::new();
    action.add_device_libraries(&mut set).with_context(|| {
        format!(
            "selecting device libraries for {} ({})",
            action.isa_name, action.language
        )
    })?;
    Ok(set)
}

/// Print, and optionally extract, the device libraries for `action`.
pub fn run(action: &DataAction, out_dir: Option<&Path>, format: Option<&str>) -> Result<()> {
    let format = Format::parse(format)?;
    let set = collect(action)?;

    if format == Format::Human {
        println!("Device libraries for {} ({}):", action.isa_name, action.language);
    }
    print!("{}", output::render(&set, format)?);
    if format == Format::Json {
        println!();
    }

    if let Some(dir) = out_dir {
        output::extract(&set, dir)?;
        if format == Format::Human {
            println!("Wrote {} files to {}", set.len(), dir.display());
        }
    }
    Ok(())
}
