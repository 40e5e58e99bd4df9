use serde::Deserialize;

use crate::i18n::Translator;

/// Reporting window selectable on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    #[default]
    Today,
    Week,
}

impl TimeRange {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "today" => Some(TimeRange::Today),
            "week" => Some(TimeRange::Week),
            _ => None,
        }
    }

    /// Value of the `range` query parameter sent to the server.
    pub fn query_value(&self) -> &'static str {
        match self {
            TimeRange::Today => "today",
            TimeRange::Week => "week",
        }
    }

    pub fn title(&self, translator: &Translator) -> String {
        match self {
            TimeRange::Today => translator.get("dashboard.title_today"),
            TimeRange::Week => translator.get("dashboard.title_week"),
        }
    }
}
