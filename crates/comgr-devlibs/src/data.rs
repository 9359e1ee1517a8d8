//! Data objects and the data set they are collected into.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DevLibsError, Result};

/// Kind of a data object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataKind {
    Source,
    Include,
    PrecompiledHeader,
    Diagnostic,
    Log,
    /// LLVM bitcode.
    Bc,
    Relocatable,
    Executable,
    Bytes,
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DataKind::Source => "source",
            DataKind::Include => "include",
            DataKind::PrecompiledHeader => "precompiled-header",
            DataKind::Diagnostic => "diagnostic",
            DataKind::Log => "log",
            DataKind::Bc => "bc",
            DataKind::Relocatable => "relocatable",
            DataKind::Executable => "executable",
            DataKind::Bytes => "bytes",
        };
        f.write_str(s)
    }
}

/// A named blob of data with a kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataObject {
    pub kind: DataKind,
    pub name: String,
    pub data: Vec<u8>,
}

impl DataObject {
    /// Allocate an object holding a copy of `bytes`.
    ///
    /// Fails with `OutOfResources` if the buffer cannot be allocated.
    pub fn allocate(kind: DataKind, name: &str, bytes: &[u8]) -> Result<Self> {
        let mut data: Vec<u8> = Vec::new();
        data.try_reserve_exact(bytes.len())
            .map_err(|e| DevLibsError::OutOfResources {
                detail: format!("allocating {} bytes for '{name}': {e}", bytes.len()),
            })?;
        data.extend_from_slice(bytes);
        Ok(Self {
            kind,
            name: name.to_string(),
            data,
        })
    }

    /// Size of the data in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }
}

/// An ordered collection of data objects.
///
/// An optional object limit caps how many objects the set may hold; going
/// past it is reported as `OutOfResources`.
#[derive(Debug, Clone, Default)]
pub struct DataSet {
    objects: Vec<DataObject>,
    limit: Option<usize>,
}

impl DataSet {
    /// Create an empty, unbounded data set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty data set that holds at most `limit` objects.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            objects: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Make room for `additional` more objects.
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        if let Some(limit) = self.limit {
            let wanted = self.objects.len().saturating_add(additional);
            if wanted > limit {
                return Err(DevLibsError::OutOfResources {
                    detail: format!("data set limit of {limit} objects exceeded ({wanted} requested)"),
                });
            }
        }
        self.objects
            .try_reserve(additional)
            .map_err(|e| DevLibsError::OutOfResources {
                detail: format!("growing data set by {additional} objects: {e}"),
            })
    }

    /// Append a single object.
    pub fn insert(&mut self, object: DataObject) -> Result<()> {
        self.reserve(1)?;
        self.objects.push(object);
        Ok(())
    }

    /// Append all `objects` in order, or none of them.
    pub fn commit(&mut self, objects: Vec<DataObject>) -> Result<()> {
        self.reserve(objects.len())?;
        tracing::debug!(
            count = objects.len(),
            total = self.objects.len() + objects.len(),
            "committing data objects"
        );
        self.objects.extend(objects);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DataObject> {
        self.objects.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DataObject> {
        self.objects.iter()
    }

    /// First object with the given name.
    pub fn find(&self, name: &str) -> Option<&DataObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    /// Number of objects of the given kind.
    pub fn count_kind(&self, kind: DataKind) -> usize {
        self.objects.iter().filter(|o| o.kind == kind).count()
    }

    /// Object names, in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.objects.iter().map(|o| o.name.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a DataSet {
    type Item = &'a DataObject;
    type IntoIter = std::slice::Iter<'a, DataObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}
