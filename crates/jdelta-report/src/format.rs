//! Text rendering of diff results.
//!
//! A report is either the locale's no-differences message, or a header line
//! with the change count followed by one line per change:
//!
//! ```text
//! Found 3 difference(s):
//! Added "b": → 2
//! Removed "c[0]": ← null
//! Modified "a.x": "old" → "new"
//! ```
//!
//! Values are written in their compact JSON form, so strings stay quoted and
//! containers are minified. Paths are quoted the same way, so a `"` inside a
//! key is escaped.

use jdelta_diff::{ChangeRecord, DiffResult};
use jdelta_types::Value;

use crate::config::ReportConfig;
use crate::labels::Labels;

/// Render a report with the default (English) configuration.
pub fn format(result: &DiffResult) -> String {
    format_with(result, &ReportConfig::default())
}

/// Render a report using `config`.
pub fn format_with(result: &DiffResult, config: &ReportConfig) -> String {
    let labels = config.labels();
    if !result.is_modified() {
        return labels.no_differences.clone();
    }

    let mut out = header(result.len(), &labels);
    for change in result {
        out.push('\n');
        out.push_str(&format_change(change, &labels));
    }
    out
}

/// The header line reporting `count` changes.
pub fn header(count: usize, labels: &Labels) -> String {
    labels.header.replace("{count}", &count.to_string())
}

/// One report line for `change`, without a trailing newline.
pub fn format_change(change: &ChangeRecord, labels: &Labels) -> String {
    let label = labels.kind(change.kind());
    let location = if change.path().is_empty() {
        labels.root_marker.clone()
    } else {
        encode(&Value::String(change.path().to_owned()))
    };
    let payload = match change {
        ChangeRecord::Added { value, .. } => format!("→ {}", encode(value)),
        ChangeRecord::Removed { value, .. } => format!("← {}", encode(value)),
        ChangeRecord::Modified { old, new, .. } => format!("{} → {}", encode(old), encode(new)),
    };
    format!("{label} {location}: {payload}")
}

fn encode(value: &Value) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::Locale;
    use jdelta_diff::{compare, normalize_and_compare};
    use serde_json::json;

    #[test]
    fn no_differences_message() {
        let value = Value::from(json!({"a": [1, 2, {"b": null}]}));
        assert_eq!(format(&compare(&value, &value)), "No differences found.");
        assert_eq!(format(&compare(&Value::Null, &Value::Null)), "No differences found.");
    }

    #[test]
    fn full_report() {
        let result = normalize_and_compare(
            json!({"a": {"x": "old"}, "c": [null]}),
            json!({"a": {"x": "new"}, "b": 2, "c": []}),
        );
        let report = format(&result);
        assert_eq!(
            report,
            "Found 3 difference(s):\n\
             Modified \"a.x\": \"old\" → \"new\"\n\
             Removed \"c[0]\": ← null\n\
             Added \"b\": → 2"
        );
    }

    #[test]
    fn header_count_matches_changes() {
        let result = normalize_and_compare("[1, 2, 3, 4]", "[0, 0, 0]");
        let report = format(&result);
        let first_line = report.lines().next().unwrap();
        assert_eq!(first_line, format!("Found {} difference(s):", result.len()));
        assert_eq!(report.lines().count(), result.len() + 1);
    }

    #[test]
    fn root_change_uses_marker() {
        let result = normalize_and_compare("1", "true");
        assert_eq!(format(&result), "Found 1 difference(s):\nModified (root): 1 → true");
    }

    #[test]
    fn containers_are_minified() {
        let result = normalize_and_compare(json!({}), json!({"k": {"a": [1, 2.5], "b": "s"}}));
        assert_eq!(
            format(&result),
            "Found 1 difference(s):\nAdded \"k\": → {\"a\":[1,2.5],\"b\":\"s\"}"
        );
    }

    #[test]
    fn quotes_in_keys_are_escaped() {
        let result = normalize_and_compare(json!({}), json!({"say \"hi\"": 1}));
        assert_eq!(
            format(&result),
            "Found 1 difference(s):\nAdded \"say \\\"hi\\\"\": → 1"
        );
    }

    #[test]
    fn chinese_report() {
        let config = ReportConfig::with_locale(Locale::Zh);
        let result = normalize_and_compare(json!({"a": 1}), json!({}));
        assert_eq!(
            format_with(&result, &config),
            "共发现 1 处差异：\n删除 \"a\": ← 1"
        );
        assert_eq!(format_with(&DiffResult::new(), &config), "两个数据完全相同。");
    }

    #[test]
    fn custom_root_marker() {
        let config = ReportConfig {
            root_marker: Some("$".into()),
            ..ReportConfig::default()
        };
        let result = normalize_and_compare("\"a\"", "\"b\"");
        assert_eq!(
            format_with(&result, &config),
            "Found 1 difference(s):\nModified $: \"a\" → \"b\""
        );
    }
}
