use serde::{Deserialize, Serialize};

use crate::labels::{Labels, Locale};

/// Settings for rendering a report.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub locale: Locale,
    /// Replaces the locale's marker for changes at the root path.
    pub root_marker: Option<String>,
}

impl ReportConfig {
    pub fn with_locale(locale: Locale) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }

    /// The label set for this configuration.
    pub fn labels(&self) -> Labels {
        let mut labels = Labels::for_locale(self.locale);
        if let Some(marker) = &self.root_marker {
            labels.root_marker.clone_from(marker);
        }
        labels
    }
}
