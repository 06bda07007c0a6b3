//! Localized report text.

use std::fmt;
use std::str::FromStr;

use jdelta_diff::ChangeKind;
use serde::{Deserialize, Serialize};

use crate::error::{ReportError, ReportResult};

/// Language of the report text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => f.write_str("en"),
            Locale::Zh => f.write_str("zh"),
        }
    }
}

impl FromStr for Locale {
    type Err = ReportError;

    fn from_str(s: &str) -> ReportResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "en-us" | "english" => Ok(Locale::En),
            "zh" | "zh-cn" | "chinese" => Ok(Locale::Zh),
            _ => Err(ReportError::UnknownLocale(s.to_owned())),
        }
    }
}

/// The fixed strings a report is built from.
///
/// `header` contains a `{count}` placeholder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Labels {
    pub no_differences: String,
    pub header: String,
    pub added: String,
    pub removed: String,
    pub modified: String,
    pub root_marker: String,
}

impl Labels {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => Self {
                no_differences: "No differences found.".into(),
                header: "Found {count} difference(s):".into(),
                added: "Added".into(),
                removed: "Removed".into(),
                modified: "Modified".into(),
                root_marker: "(root)".into(),
            },
            Locale::Zh => Self {
                no_differences: "两个数据完全相同。".into(),
                header: "共发现 {count} 处差异：".into(),
                added: "新增".into(),
                removed: "删除".into(),
                modified: "修改".into(),
                root_marker: "(根)".into(),
            },
        }
    }

    /// The label for a change kind.
    pub fn kind(&self, kind: ChangeKind) -> &str {
        match kind {
            ChangeKind::Added => self.added.as_str(),
            ChangeKind::Removed => self.removed.as_str(),
            ChangeKind::Modified => self.modified.as_str(),
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}
