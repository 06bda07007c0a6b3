//! Recursive structural comparison of two value trees.
//!
//! Both trees are walked depth-first in lock-step and a change is emitted at
//! the first node where they diverge:
//!
//! - a location present on only one side is `Added` or `Removed`;
//! - two values of different variants are one `Modified`, with no descent;
//! - arrays are compared index by index up to the longer length;
//! - objects are compared key by key;
//! - scalars of the same variant are `Modified` when not [`deep_equal`].
//!
//! Object keys are visited in ascending order for the old object first
//! (yielding nested changes or `Removed`), then the keys found only in the
//! new object, again ascending (yielding `Added`).

use std::collections::BTreeMap;

use jdelta_types::{normalize, Input, Value};
use tracing::debug;

use crate::change::{ChangeRecord, DiffResult};
use crate::equality::deep_equal;
use crate::path::{index_path, key_path};

/// Normalize both inputs and compare the resulting trees.
///
/// Text inputs are parsed as JSON documents; text that fails to parse is
/// compared as a plain string.
pub fn normalize_and_compare(old: impl Into<Input>, new: impl Into<Input>) -> DiffResult {
    let old = normalize(old);
    let new = normalize(new);
    let result = compare(&old, &new);
    debug!(
        changes = result.len(),
        added = result.additions(),
        removed = result.removals(),
        modified = result.modifications(),
        "structural diff complete"
    );
    result
}

/// Compare two value trees from the root.
pub fn compare(old: &Value, new: &Value) -> DiffResult {
    DiffResult::from_changes(compare_at(Some(old), Some(new), ""))
}

/// Compare two optional values located at `path`.
///
/// `None` means the location is absent on that side, which is distinct from
/// an explicit `Value::Null`.
pub fn compare_at(old: Option<&Value>, new: Option<&Value>, path: &str) -> Vec<ChangeRecord> {
    let mut changes = Vec::new();
    diff_node(old, new, path, &mut changes);
    changes
}

fn diff_node(old: Option<&Value>, new: Option<&Value>, path: &str, out: &mut Vec<ChangeRecord>) {
    let (old, new) = match (old, new) {
        (None, None) => return,
        (None, Some(new)) => {
            out.push(ChangeRecord::Added {
                path: path.to_owned(),
                value: new.clone(),
            });
            return;
        }
        (Some(old), None) => {
            out.push(ChangeRecord::Removed {
                path: path.to_owned(),
                value: old.clone(),
            });
            return;
        }
        (Some(old), Some(new)) => (old, new),
    };

    if old.kind() != new.kind() {
        out.push(modified(path, old, new));
        return;
    }

    match (old, new) {
        (Value::Array(old_items), Value::Array(new_items)) => {
            diff_arrays(old_items, new_items, path, out);
        }
        (Value::Object(old_map), Value::Object(new_map)) => {
            diff_objects(old_map, new_map, path, out);
        }
        _ => {
            if !deep_equal(old, new) {
                out.push(modified(path, old, new));
            }
        }
    }
}

// Positional: an insertion shifts every later index and reports each as changed.
fn diff_arrays(old: &[Value], new: &[Value], path: &str, out: &mut Vec<ChangeRecord>) {
    let len = old.len().max(new.len());
    for i in 0..len {
        diff_node(old.get(i), new.get(i), &index_path(path, i), out);
    }
}

fn diff_objects(
    old: &BTreeMap<String, Value>,
    new: &BTreeMap<String, Value>,
    path: &str,
    out: &mut Vec<ChangeRecord>,
) {
    // Removed and modified members.
    for (key, old_value) in old {
        diff_node(Some(old_value), new.get(key), &key_path(path, key), out);
    }

    // Added members.
    for (key, new_value) in new {
        if !old.contains_key(key) {
            diff_node(None, Some(new_value), &key_path(path, key), out);
        }
    }
}

fn modified(path: &str, old: &Value, new: &Value) -> ChangeRecord {
    ChangeRecord::Modified {
        path: path.to_owned(),
        old: old.clone(),
        new: new.clone(),
    }
}
