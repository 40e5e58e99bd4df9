use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::SiteUsage;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartDataError {
    #[error("durée invalide pour {site}: {seconds}")]
    InvalidDuration { site: String, seconds: f64 },

    #[error("seuil invalide: {seconds}")]
    InvalidThreshold { seconds: f64 },
}

/// One slice of the dashboard chart: either a single site kept as-is, or the
/// synthetic bucket that collects every site below the grouping threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartEntry {
    pub label: String,
    pub total_seconds: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Bar,
    Pie,
}

impl ChartKind {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "bar" => Some(ChartKind::Bar),
            "pie" => Some(ChartKind::Pie),
            _ => None,
        }
    }
}

pub fn others_label(threshold_seconds: f64) -> String {
    format!("Others (less than {}s)", threshold_seconds)
}

/// Turns raw per-site usage into display-ready chart data.
///
/// Sites at or above the threshold are kept as-is; everything below it is
/// folded into a single "Others" entry, appended only when the folded time is
/// positive. The result is sorted by descending duration. Total time is
/// conserved: entries are merged, never dropped.
pub fn build_chart_data(
    records: &[SiteUsage],
    threshold_seconds: f64,
) -> Result<Vec<ChartEntry>, ChartDataError> {
    if !threshold_seconds.is_finite() || threshold_seconds < 0.0 {
        return Err(ChartDataError::InvalidThreshold {
            seconds: threshold_seconds,
        });
    }

    for record in records {
        if !record.total_seconds.is_finite() || record.total_seconds < 0.0 {
            return Err(ChartDataError::InvalidDuration {
                site: record.site.clone(),
                seconds: record.total_seconds,
            });
        }
    }

    let mut entries: Vec<ChartEntry> = Vec::new();
    let mut others_seconds = 0.0;

    for record in records {
        if record.total_seconds < threshold_seconds {
            others_seconds += record.total_seconds;
        } else {
            entries.push(ChartEntry {
                label: record.site.clone(),
                total_seconds: record.total_seconds,
            });
        }
    }

    if others_seconds > 0.0 {
        entries.push(ChartEntry {
            label: others_label(threshold_seconds),
            total_seconds: others_seconds,
        });
    }

    // stable sort: ties keep their input order
    entries.sort_by(|a, b| b.total_seconds.total_cmp(&a.total_seconds));

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_records() -> Vec<SiteUsage> {
        vec![
            SiteUsage::new("a.com", 3.0),
            SiteUsage::new("b.com", 10.0),
            SiteUsage::new("c.com", 2.0),
            SiteUsage::new("d.com", 1.0),
        ]
    }

    #[test]
    fn groups_minor_sites_into_others() {
        let entries = build_chart_data(&create_test_records(), 5.0).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].label, "b.com");
        assert_eq!(entries[0].total_seconds, 10.0);
        assert_eq!(entries[1].label, "Others (less than 5s)");
        assert_eq!(entries[1].total_seconds, 6.0);
    }

    #[test]
    fn keeps_all_sites_when_none_below_threshold() {
        let records = vec![SiteUsage::new("a.com", 10.0), SiteUsage::new("b.com", 20.0)];

        let entries = build_chart_data(&records, 5.0).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].label, "b.com");
        assert_eq!(entries[1].label, "a.com");
        assert!(!entries.iter().any(|entry| entry.label.starts_with("Others")));
    }

    #[test]
    fn folds_everything_into_others_when_all_below_threshold() {
        let records = vec![
            SiteUsage::new("a.com", 1.0),
            SiteUsage::new("b.com", 2.0),
            SiteUsage::new("c.com", 1.5),
        ];

        let entries = build_chart_data(&records, 5.0).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, "Others (less than 5s)");
        assert_eq!(entries[0].total_seconds, 4.5);
    }

    #[test]
    fn empty_input_produces_empty_output() {
        let entries = build_chart_data(&[], 5.0).unwrap();

        assert!(entries.is_empty());
    }

    #[test]
    fn conserves_total_time() {
        let records = create_test_records();
        let input_total: f64 = records.iter().map(|record| record.total_seconds).sum();

        let entries = build_chart_data(&records, 5.0).unwrap();
        let output_total: f64 = entries.iter().map(|entry| entry.total_seconds).sum();

        assert_eq!(input_total, output_total);
    }

    #[test]
    fn sorts_by_descending_duration() {
        let records = vec![
            SiteUsage::new("a.com", 7.0),
            SiteUsage::new("b.com", 42.0),
            SiteUsage::new("c.com", 19.0),
            SiteUsage::new("d.com", 1.0),
        ];

        let entries = build_chart_data(&records, 5.0).unwrap();

        let durations: Vec<f64> = entries.iter().map(|entry| entry.total_seconds).collect();
        assert_eq!(durations, vec![42.0, 19.0, 7.0, 1.0]);
    }

    #[test]
    fn ties_keep_input_order() {
        let records = vec![
            SiteUsage::new("first.com", 10.0),
            SiteUsage::new("second.com", 10.0),
            SiteUsage::new("third.com", 10.0),
        ];

        let entries = build_chart_data(&records, 5.0).unwrap();

        assert_eq!(entries[0].label, "first.com");
        assert_eq!(entries[1].label, "second.com");
        assert_eq!(entries[2].label, "third.com");
    }

    #[test]
    fn skips_others_when_minor_sum_is_zero() {
        let records = vec![
            SiteUsage::new("a.com", 10.0),
            SiteUsage::new("b.com", 0.0),
            SiteUsage::new("c.com", 0.0),
        ];

        let entries = build_chart_data(&records, 5.0).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, "a.com");
    }

    #[test]
    fn zero_threshold_keeps_every_site() {
        let records = vec![SiteUsage::new("a.com", 0.0), SiteUsage::new("b.com", 3.0)];

        let entries = build_chart_data(&records, 0.0).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].label, "b.com");
        assert_eq!(entries[1].label, "a.com");
    }

    #[test]
    fn others_label_reflects_threshold() {
        assert_eq!(others_label(5.0), "Others (less than 5s)");
        assert_eq!(others_label(2.5), "Others (less than 2.5s)");
    }

    #[test]
    fn duplicate_sites_are_kept_separate_above_threshold() {
        let records = vec![
            SiteUsage::new("a.com", 10.0),
            SiteUsage::new("a.com", 8.0),
        ];

        let entries = build_chart_data(&records, 5.0).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].total_seconds, 10.0);
        assert_eq!(entries[1].total_seconds, 8.0);
    }

    #[test]
    fn rejects_negative_duration() {
        let records = vec![SiteUsage::new("a.com", -3.0)];

        let result = build_chart_data(&records, 5.0);

        assert_eq!(
            result,
            Err(ChartDataError::InvalidDuration {
                site: "a.com".to_string(),
                seconds: -3.0,
            })
        );
    }

    #[test]
    fn rejects_non_finite_duration() {
        let records = vec![SiteUsage::new("a.com", f64::NAN)];

        let result = build_chart_data(&records, 5.0);

        assert!(matches!(
            result,
            Err(ChartDataError::InvalidDuration { .. })
        ));
    }

    #[test]
    fn rejects_negative_threshold() {
        let result = build_chart_data(&[], -1.0);

        assert_eq!(
            result,
            Err(ChartDataError::InvalidThreshold { seconds: -1.0 })
        );
    }

    #[test]
    fn chart_kind_from_str_parses_valid_values() {
        assert!(matches!(ChartKind::from_str("bar"), Some(ChartKind::Bar)));
        assert!(matches!(ChartKind::from_str("PIE"), Some(ChartKind::Pie)));
    }

    #[test]
    fn chart_kind_from_str_returns_none_for_invalid() {
        assert!(ChartKind::from_str("doughnut").is_none());
        assert!(ChartKind::from_str("").is_none());
    }
}
