use std::fmt;

use serde::Deserialize;

/// Latest single-point-in-time metrics reading, as served by
/// `/api/metrics/latest`. Read-only on this side; re-fetched per refresh.
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSnapshot {
    pub testing_compliance: f64,
    pub inspection_compliance: f64,
    pub coverage_ratio: f64,
    pub effective_reliability: f64,
    pub fully_covered: u64,
    pub partially_covered: u64,
    pub not_covered: u64,
    pub inspected: u64,
    pub not_inspected: u64,
    pub tested: u64,
    pub not_tested: u64,
}

impl MetricsSnapshot {
    pub fn kpi_value(&self, kpi: Kpi) -> f64 {
        match kpi {
            Kpi::TestingCompliance => self.testing_compliance,
            Kpi::InspectionCompliance => self.inspection_compliance,
            Kpi::CoverageRatio => self.coverage_ratio,
            Kpi::EffectiveReliability => self.effective_reliability,
        }
    }
}

/// Time-bucketed series from `/api/metrics/trend/{period}`. The four value
/// sequences are aligned positionally with `dates`.
#[derive(Debug, Clone, Deserialize)]
pub struct TrendSeries {
    pub dates: Vec<String>,
    pub testing_compliance: Vec<f64>,
    pub inspection_compliance: Vec<f64>,
    pub coverage_ratio: Vec<f64>,
    pub effective_reliability: Vec<f64>,
}

impl TrendSeries {
    /// Checks the alignment invariant. The backend owns it, but a violation
    /// must never reach the renderer.
    pub fn validate(&self) -> Result<(), String> {
        let expected = self.dates.len();
        let lengths = [
            ("testing_compliance", self.testing_compliance.len()),
            ("inspection_compliance", self.inspection_compliance.len()),
            ("coverage_ratio", self.coverage_ratio.len()),
            ("effective_reliability", self.effective_reliability.len()),
        ];

        for (name, len) in lengths {
            if len != expected {
                return Err(format!(
                    "{name} has {len} values for {expected} dates"
                ));
            }
        }

        Ok(())
    }

    pub fn values(&self, kpi: Kpi) -> &[f64] {
        match kpi {
            Kpi::TestingCompliance => &self.testing_compliance,
            Kpi::InspectionCompliance => &self.inspection_compliance,
            Kpi::CoverageRatio => &self.coverage_ratio,
            Kpi::EffectiveReliability => &self.effective_reliability,
        }
    }

    /// Minimum value across all four metric sequences.
    pub fn min_value(&self) -> Option<f64> {
        let min = Kpi::ALL
            .iter()
            .flat_map(|kpi| self.values(*kpi))
            .copied()
            .fold(f64::INFINITY, f64::min);

        min.is_finite().then_some(min)
    }
}

/// One of the four tracked percentage metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kpi {
    TestingCompliance,
    InspectionCompliance,
    CoverageRatio,
    EffectiveReliability,
}

impl Kpi {
    pub const ALL: [Kpi; 4] = [
        Kpi::TestingCompliance,
        Kpi::InspectionCompliance,
        Kpi::CoverageRatio,
        Kpi::EffectiveReliability,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Kpi::TestingCompliance => "Testing Compliance",
            Kpi::InspectionCompliance => "Inspection Compliance",
            Kpi::CoverageRatio => "Coverage Ratio",
            Kpi::EffectiveReliability => "Effective Reliability",
        }
    }

    /// Achievement threshold in percent. Static; never mutated at runtime.
    pub fn threshold(self) -> f64 {
        match self {
            Kpi::TestingCompliance => 90.0,
            Kpi::InspectionCompliance => 95.0,
            Kpi::CoverageRatio => 85.0,
            Kpi::EffectiveReliability => 80.0,
        }
    }

    pub fn is_achieved(self, value: f64) -> bool {
        value >= self.threshold()
    }

    pub fn status_text(self, value: f64) -> &'static str {
        if self.is_achieved(value) {
            "STATUS: ACHIEVED"
        } else {
            "STATUS: IN PROGRESS"
        }
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// Aggregation granularity for the trend chart. Determines the request URL
/// suffix, date-label formatting, and the chart title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    Daily,
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl Period {
    pub const ALL: [Period; 4] = [
        Period::Daily,
        Period::Weekly,
        Period::Monthly,
        Period::Yearly,
    ];

    /// URL path segment.
    pub fn as_str(self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
            Period::Yearly => "yearly",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Period::Daily => "Daily",
            Period::Weekly => "Weekly",
            Period::Monthly => "Monthly",
            Period::Yearly => "Yearly",
        }
    }

    /// X-axis caption for the trend chart.
    pub fn axis_caption(self) -> &'static str {
        match self {
            Period::Daily => "Day",
            Period::Weekly => "Week",
            Period::Monthly => "Month",
            Period::Yearly => "Year",
        }
    }

    pub fn trend_title(self) -> String {
        format!("{} Compliance and Reliability Trends", self.display_name())
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(testing: f64, inspection: f64) -> MetricsSnapshot {
        MetricsSnapshot {
            testing_compliance: testing,
            inspection_compliance: inspection,
            coverage_ratio: 85.0,
            effective_reliability: 80.0,
            fully_covered: 10,
            partially_covered: 4,
            not_covered: 2,
            inspected: 12,
            not_inspected: 4,
            tested: 11,
            not_tested: 5,
        }
    }

    #[test]
    fn status_achieved_at_and_above_threshold() {
        assert_eq!(
            Kpi::TestingCompliance.status_text(92.5),
            "STATUS: ACHIEVED"
        );
        assert_eq!(
            Kpi::TestingCompliance.status_text(90.0),
            "STATUS: ACHIEVED"
        );
        assert_eq!(
            Kpi::TestingCompliance.status_text(89.99),
            "STATUS: IN PROGRESS"
        );
    }

    #[test]
    fn each_kpi_uses_its_own_threshold() {
        let snapshot = snapshot(92.5, 88.0);
        assert!(Kpi::TestingCompliance.is_achieved(snapshot.kpi_value(Kpi::TestingCompliance)));
        assert!(
            !Kpi::InspectionCompliance.is_achieved(snapshot.kpi_value(Kpi::InspectionCompliance))
        );
        assert!(Kpi::CoverageRatio.is_achieved(snapshot.kpi_value(Kpi::CoverageRatio)));
        assert!(
            Kpi::EffectiveReliability.is_achieved(snapshot.kpi_value(Kpi::EffectiveReliability))
        );
    }

    #[test]
    fn percent_formatting_keeps_two_decimals() {
        assert_eq!(format_percent(92.5), "92.50%");
        assert_eq!(format_percent(100.0), "100.00%");
        assert_eq!(format_percent(0.0), "0.00%");
    }

    #[test]
    fn validate_accepts_aligned_series() {
        let series = TrendSeries {
            dates: vec!["2024-01".into(), "2024-02".into()],
            testing_compliance: vec![90.0, 91.0],
            inspection_compliance: vec![95.0, 96.0],
            coverage_ratio: vec![85.0, 86.0],
            effective_reliability: vec![80.0, 81.0],
        };
        assert!(series.validate().is_ok());
    }

    #[test]
    fn validate_rejects_mismatched_series() {
        let series = TrendSeries {
            dates: vec!["2024-01".into(), "2024-02".into()],
            testing_compliance: vec![90.0],
            inspection_compliance: vec![95.0, 96.0],
            coverage_ratio: vec![85.0, 86.0],
            effective_reliability: vec![80.0, 81.0],
        };
        let err = series.validate().unwrap_err();
        assert!(err.contains("testing_compliance"));
    }

    #[test]
    fn min_value_spans_all_series() {
        let series = TrendSeries {
            dates: vec!["2024-01".into()],
            testing_compliance: vec![90.0],
            inspection_compliance: vec![95.0],
            coverage_ratio: vec![62.5],
            effective_reliability: vec![80.0],
        };
        assert_eq!(series.min_value(), Some(62.5));

        let empty = TrendSeries {
            dates: Vec::new(),
            testing_compliance: Vec::new(),
            inspection_compliance: Vec::new(),
            coverage_ratio: Vec::new(),
            effective_reliability: Vec::new(),
        };
        assert_eq!(empty.min_value(), None);
    }

    #[test]
    fn period_url_suffix_and_title() {
        assert_eq!(Period::Weekly.as_str(), "weekly");
        assert_eq!(
            Period::Monthly.trend_title(),
            "Monthly Compliance and Reliability Trends"
        );
        assert_eq!(Period::Yearly.axis_caption(), "Year");
    }
}
