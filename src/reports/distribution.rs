use iced::Color;

use crate::charts::{PieChart, PieSlice};
use crate::metrics::MetricsSnapshot;
use crate::theme::{SLICE_PRIMARY, SLICE_SECONDARY, SLICE_WARNING};

/// One configurable distribution report instantiated three times (coverage,
/// inspection, testing) instead of three hand-copied renderers.
pub struct DistributionReport {
    title: &'static str,
    subtitle: &'static str,
    slices: Vec<PieSlice>,
}

impl DistributionReport {
    pub fn coverage(snapshot: &MetricsSnapshot) -> Self {
        Self::build(
            "Coverage Status",
            "Substations by fire-fighting coverage",
            &[
                ("Fully Covered", snapshot.fully_covered, SLICE_PRIMARY),
                ("Partially Covered", snapshot.partially_covered, SLICE_SECONDARY),
                ("Not Covered", snapshot.not_covered, SLICE_WARNING),
            ],
        )
    }

    pub fn inspection(snapshot: &MetricsSnapshot) -> Self {
        Self::build(
            "Inspection Status",
            "Substations inspected in the current cycle",
            &[
                ("Inspected", snapshot.inspected, SLICE_PRIMARY),
                ("Not Inspected", snapshot.not_inspected, SLICE_WARNING),
            ],
        )
    }

    pub fn testing(snapshot: &MetricsSnapshot) -> Self {
        Self::build(
            "Testing Status",
            "Substations tested in the current cycle",
            &[
                ("Tested", snapshot.tested, SLICE_PRIMARY),
                ("Not Tested", snapshot.not_tested, SLICE_WARNING),
            ],
        )
    }

    fn build(
        title: &'static str,
        subtitle: &'static str,
        entries: &[(&'static str, u64, Color)],
    ) -> Self {
        let slices = entries
            .iter()
            .map(|(label, count, color)| PieSlice::new(*label, *count, *color))
            .collect();

        Self {
            title,
            subtitle,
            slices,
        }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn subtitle(&self) -> &'static str {
        self.subtitle
    }

    pub fn slices(&self) -> &[PieSlice] {
        &self.slices
    }

    pub fn total(&self) -> u64 {
        self.slices.iter().map(|slice| slice.count).sum()
    }

    pub fn chart(&self) -> PieChart {
        PieChart::new(self.slices.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> MetricsSnapshot {
        MetricsSnapshot {
            testing_compliance: 92.5,
            inspection_compliance: 88.0,
            coverage_ratio: 85.0,
            effective_reliability: 80.3,
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
    fn coverage_report_has_three_categories() {
        let report = DistributionReport::coverage(&snapshot());
        let labels: Vec<_> = report.slices().iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["Fully Covered", "Partially Covered", "Not Covered"]);
        assert_eq!(report.total(), 16);
    }

    #[test]
    fn inspection_and_testing_reports_have_two_categories() {
        let inspection = DistributionReport::inspection(&snapshot());
        assert_eq!(inspection.slices().len(), 2);
        assert_eq!(inspection.total(), 16);

        let testing = DistributionReport::testing(&snapshot());
        assert_eq!(testing.slices().len(), 2);
        assert_eq!(testing.total(), 16);
    }

    #[test]
    fn empty_counts_keep_total_at_zero() {
        let mut snapshot = snapshot();
        snapshot.inspected = 0;
        snapshot.not_inspected = 0;

        let report = DistributionReport::inspection(&snapshot);
        assert_eq!(report.total(), 0);
    }
}
