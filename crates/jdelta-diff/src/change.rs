//! Change records and the aggregate diff result.

use std::fmt;

use jdelta_types::Value;
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

/// The kind of a reported difference.
///
/// Unchanged nodes are never reported, so there is no variant for them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Removed,
    Modified,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChangeKind::Added => "added",
            ChangeKind::Removed => "removed",
            ChangeKind::Modified => "modified",
        };
        f.write_str(name)
    }
}

/// A single difference between two value trees.
///
/// `path` uses `.key` for object members and `[i]` for array elements; the
/// empty string is the root.
#[derive(Clone, Debug, PartialEq)]
pub enum ChangeRecord {
    /// The location exists only in the new tree.
    Added { path: String, value: Value },
    /// The location exists only in the old tree.
    Removed { path: String, value: Value },
    /// The location exists in both trees with different values, or with
    /// values of different variants.
    Modified {
        path: String,
        old: Value,
        new: Value,
    },
}

impl ChangeRecord {
    /// Location of the change; empty for the root.
    pub fn path(&self) -> &str {
        match self {
            ChangeRecord::Added { path, .. }
            | ChangeRecord::Removed { path, .. }
            | ChangeRecord::Modified { path, .. } => path,
        }
    }

    /// Whether the location was added, removed or modified.
    pub fn kind(&self) -> ChangeKind {
        match self {
            ChangeRecord::Added { .. } => ChangeKind::Added,
            ChangeRecord::Removed { .. } => ChangeKind::Removed,
            ChangeRecord::Modified { .. } => ChangeKind::Modified,
        }
    }

    /// The value before the change; `None` for additions.
    pub fn old_value(&self) -> Option<&Value> {
        match self {
            ChangeRecord::Added { .. } => None,
            ChangeRecord::Removed { value, .. } => Some(value),
            ChangeRecord::Modified { old, .. } => Some(old),
        }
    }

    /// The value after the change; `None` for removals.
    pub fn new_value(&self) -> Option<&Value> {
        match self {
            ChangeRecord::Added { value, .. } => Some(value),
            ChangeRecord::Removed { .. } => None,
            ChangeRecord::Modified { new, .. } => Some(new),
        }
    }
}

/// Serialized as `{"path", "kind", "oldValue"?, "newValue"?}`.
impl Serialize for ChangeRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 2 + usize::from(self.old_value().is_some()) + usize::from(self.new_value().is_some());
        let mut record = serializer.serialize_struct("ChangeRecord", len)?;
        record.serialize_field("path", self.path())?;
        record.serialize_field("kind", &self.kind())?;
        match self.old_value() {
            Some(old) => record.serialize_field("oldValue", old)?,
            None => record.skip_field("oldValue")?,
        }
        match self.new_value() {
            Some(new) => record.serialize_field("newValue", new)?,
            None => record.skip_field("newValue")?,
        }
        record.end()
    }
}

/// The result of comparing two value trees.
///
/// `is_modified` is derived from the change list at construction and the
/// result is not mutable afterwards.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffResult {
    changes: Vec<ChangeRecord>,
    is_modified: bool,
}

impl DiffResult {
    /// An empty result: no changes, not modified.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a change list; the result is modified iff the list is non-empty.
    pub fn from_changes(changes: Vec<ChangeRecord>) -> Self {
        let is_modified = !changes.is_empty();
        Self {
            changes,
            is_modified,
        }
    }

    /// The changes in traversal order.
    pub fn changes(&self) -> &[ChangeRecord] {
        &self.changes
    }

    /// Returns `true` if at least one difference was found.
    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    /// Returns `true` if there are no changes.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Number of changes.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Number of added locations.
    pub fn additions(&self) -> usize {
        self.count(ChangeKind::Added)
    }

    /// Number of removed locations.
    pub fn removals(&self) -> usize {
        self.count(ChangeKind::Removed)
    }

    /// Number of modified locations.
    pub fn modifications(&self) -> usize {
        self.count(ChangeKind::Modified)
    }

    /// Iterate over the changes in traversal order.
    pub fn iter(&self) -> std::slice::Iter<'_, ChangeRecord> {
        self.changes.iter()
    }

    /// Consume the result, returning the change list.
    pub fn into_changes(self) -> Vec<ChangeRecord> {
        self.changes
    }

    fn count(&self, kind: ChangeKind) -> usize {
        self.changes.iter().filter(|c| c.kind() == kind).count()
    }
}

impl<'a> IntoIterator for &'a DiffResult {
    type Item = &'a ChangeRecord;
    type IntoIter = std::slice::Iter<'a, ChangeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
