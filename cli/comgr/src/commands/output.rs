//! Shared rendering and extraction of data sets.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use comgr_devlibs::DataSet;
use serde::Serialize;

/// Output format for listing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Human,
    Json,
}

impl Format {
    pub fn parse(s: Option<&str>) -> Result<Self> {
        match s {
            None | Some("human") => Ok(Format::Human),
            Some("json") => Ok(Format::Json),
            Some(other) => bail!("unknown format '{other}' (expected human or json)"),
        }
    }
}

#[derive(Serialize)]
struct ObjectEntry<'a> {
    index: usize,
    name: &'a str,
    kind: String,
    size: usize,
}

/// Render the objects of a data set in order.
pub fn render(set: &DataSet, format: Format) -> Result<String> {
    let entries: Vec<ObjectEntry<'_>> = set
        .iter()
        .enumerate()
        .map(|(index, obj)| ObjectEntry {
            index,
            name: &obj.name,
            kind: obj.kind.to_string(),
            size: obj.size(),
        })
        .collect();

    match format {
        Format::Json => serde_json::to_string_pretty(&entries).context("serializing object list"),
        Format::Human => {
            let mut out = String::new();
            for e in &entries {
                out.push_str(&format!(
                    "  {:>2}  {:<42} {:<20} {:>8} bytes\n",
                    e.index, e.name, e.kind, e.size
                ));
            }
            Ok(out)
        }
    }
}

/// Write every object of a data set to `out_dir/<name>`.
pub fn extract(set: &DataSet, out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;
    for obj in set {
        let path = out_dir.join(&obj.name);
        fs::write(&path, &obj.data).with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!(path = %path.display(), size = obj.size(), "wrote object");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use comgr_devlibs::{add_precompiled_header, Language};

    fn header_set() -> DataSet {
        let mut set = DataSet::new();
        add_precompiled_header(Language::OpenCl12, &mut set).unwrap();
        set
    }

    #[test]
    fn format_parse() {
        assert_eq!(Format::parse(None).unwrap(), Format::Human);
        assert_eq!(Format::parse(Some("json")).unwrap(), Format::Json);
        assert!(Format::parse(Some("yaml")).is_err());
    }

    #[test]
    fn render_json() {
        let text = render(&header_set(), Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["name"], "opencl1.2-c.pch");
        assert_eq!(value[0]["kind"], "precompiled-header");
    }

    #[test]
    fn render_human() {
        let text = render(&header_set(), Format::Human).unwrap();
        assert!(text.contains("opencl1.2-c.pch"));
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn extract_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let set = header_set();
        extract(&set, &dir.path().join("out")).unwrap();
        let written = fs::read(dir.path().join("out").join("opencl1.2-c.pch")).unwrap();
        assert_eq!(written, set.get(0).unwrap().data);
    }
}
