use serde::{Deserialize, Serialize};

/// Display limits for rendered reports.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Keys listed per category in text reports.
    pub list_limit: usize,
    /// Characters of a value shown in text reports.
    pub text_value_width: usize,
    /// Characters of each side of a changed value in text reports.
    pub text_changed_width: usize,
    /// Characters of a value shown in HTML reports.
    pub html_value_width: usize,
    /// Characters of each side of a changed value in HTML reports.
    pub html_changed_width: usize,
    /// Untranslated keys listed in the gap analysis.
    pub gap_limit: usize,
    /// Characters of source text shown in the gap analysis.
    pub gap_value_width: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            list_limit: 20,
            text_value_width: 100,
            text_changed_width: 50,
            html_value_width: 500,
            html_changed_width: 250,
            gap_limit: 20,
            gap_value_width: 200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = ReportConfig::default();
        assert_eq!(c.list_limit, 20);
        assert_eq!(c.html_value_width, 500);
        assert_eq!(c.html_changed_width, 250);
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let c: ReportConfig = serde_json::from_str(r#"{"list_limit": 5}"#).unwrap();
        assert_eq!(c.list_limit, 5);
        assert_eq!(c.text_value_width, 100);
    }
}
