use chrono::{Datelike, NaiveDate};
use iced::Color;

use crate::charts::{LineChart, LineChartConfig, LineSeries, Marker};
use crate::metrics::{Kpi, Period, TrendSeries};
use crate::theme::{SERIES_COVERAGE, SERIES_INSPECTION, SERIES_RELIABILITY, SERIES_TESTING};

const MONTH_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub struct ComplianceTrendReport;

impl ComplianceTrendReport {
    pub fn title(period: Period) -> String {
        period.trend_title()
    }

    pub fn subtitle() -> &'static str {
        "All four reliability metrics over the selected period"
    }

    pub fn series_color(kpi: Kpi) -> Color {
        match kpi {
            Kpi::TestingCompliance => SERIES_TESTING,
            Kpi::InspectionCompliance => SERIES_INSPECTION,
            Kpi::CoverageRatio => SERIES_COVERAGE,
            Kpi::EffectiveReliability => SERIES_RELIABILITY,
        }
    }

    fn series_marker(kpi: Kpi) -> Marker {
        match kpi {
            Kpi::TestingCompliance => Marker::Circle,
            Kpi::InspectionCompliance => Marker::Triangle,
            Kpi::CoverageRatio => Marker::Square,
            Kpi::EffectiveReliability => Marker::Diamond,
        }
    }

    pub fn labels(series: &TrendSeries, period: Period) -> Vec<String> {
        series
            .dates
            .iter()
            .map(|date| format_date_label(date, period))
            .collect()
    }

    /// Lower bound of the y-axis: nearest multiple of 10 below the smallest
    /// value, minus 10 of padding, clamped at zero. The top is fixed at 100.
    pub fn y_axis_min(series: &TrendSeries) -> f64 {
        let Some(min) = series.min_value() else {
            return 0.0;
        };

        ((min / 10.0).floor() * 10.0 - 10.0).max(0.0)
    }

    pub fn chart(series: &TrendSeries, period: Period) -> LineChart {
        let labels = Self::labels(series, period);
        let y_min = Self::y_axis_min(series) as f32;

        let line_series = Kpi::ALL
            .iter()
            .map(|kpi| {
                let points = series
                    .values(*kpi)
                    .iter()
                    .enumerate()
                    .map(|(slot, value)| (slot as f32, *value as f32))
                    .collect();

                let mut line = LineSeries::new(kpi.label(), Self::series_color(*kpi), points)
                    .with_marker(Self::series_marker(*kpi));

                // Effective reliability is the headline series.
                if *kpi == Kpi::EffectiveReliability {
                    line = line.with_stroke_width(3.0).with_fill_area(true);
                }

                line
            })
            .collect();

        LineChart::new(labels, line_series)
            .with_y_range((y_min, 100.0))
            .with_config(LineChartConfig {
                padding: 48.0,
                grid_lines: 6,
                x_caption: Some(period.axis_caption().to_owned()),
                y_caption: Some("Percentage (%)".to_owned()),
            })
    }
}

/// Formats one date bucket for the x-axis. Unparseable input falls back to
/// the raw year prefix rather than failing the render.
pub fn format_date_label(raw: &str, period: Period) -> String {
    match period {
        Period::Daily => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => format!("{} {}", MONTH_ABBR[date.month0() as usize], date.day()),
            Err(_) => year_prefix(raw),
        },
        Period::Weekly => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => format!("Week {}/{}", date.day(), date.month()),
            Err(_) => year_prefix(raw),
        },
        Period::Monthly => {
            // Buckets arrive as "YYYY-MM" keys; tolerate full dates too.
            let key = raw.get(..7).unwrap_or(raw);
            match NaiveDate::parse_from_str(&format!("{key}-01"), "%Y-%m-%d") {
                Ok(date) => format!("{} {}", MONTH_ABBR[date.month0() as usize], date.year()),
                Err(_) => year_prefix(raw),
            }
        }
        Period::Yearly => year_prefix(raw),
    }
}

fn year_prefix(raw: &str) -> String {
    raw.get(..4).unwrap_or(raw).to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: Vec<f64>) -> TrendSeries {
        let dates = (0..values.len())
            .map(|i| format!("2024-{:02}", i + 1))
            .collect();
        TrendSeries {
            dates,
            testing_compliance: values.clone(),
            inspection_compliance: values.clone(),
            coverage_ratio: values.clone(),
            effective_reliability: values,
        }
    }

    #[test]
    fn daily_label_is_month_and_day() {
        assert_eq!(format_date_label("2024-03-15", Period::Daily), "Mar 15");
        assert_eq!(format_date_label("2024-12-01", Period::Daily), "Dec 1");
    }

    #[test]
    fn weekly_label_is_day_slash_month() {
        assert_eq!(format_date_label("2024-03-15", Period::Weekly), "Week 15/3");
    }

    #[test]
    fn monthly_label_from_month_key() {
        assert_eq!(format_date_label("2024-03", Period::Monthly), "Mar 2024");
        assert_eq!(format_date_label("2024-03-15", Period::Monthly), "Mar 2024");
    }

    #[test]
    fn yearly_label_is_bare_year() {
        assert_eq!(format_date_label("2024", Period::Yearly), "2024");
        assert_eq!(format_date_label("2024-06-30", Period::Yearly), "2024");
    }

    #[test]
    fn unparseable_dates_fall_back_to_year_prefix() {
        assert_eq!(format_date_label("2024-garbage", Period::Daily), "2024");
        assert_eq!(format_date_label("??", Period::Monthly), "??");
    }

    #[test]
    fn y_axis_min_rounds_down_with_padding() {
        assert_eq!(ComplianceTrendReport::y_axis_min(&series(vec![72.4, 85.0])), 60.0);
        assert_eq!(ComplianceTrendReport::y_axis_min(&series(vec![70.0])), 60.0);
        assert_eq!(ComplianceTrendReport::y_axis_min(&series(vec![95.0, 99.9])), 80.0);
    }

    #[test]
    fn y_axis_min_never_goes_below_zero() {
        assert_eq!(ComplianceTrendReport::y_axis_min(&series(vec![4.0])), 0.0);
        assert_eq!(ComplianceTrendReport::y_axis_min(&series(vec![12.0])), 0.0);
        assert_eq!(ComplianceTrendReport::y_axis_min(&series(Vec::new())), 0.0);
    }

    #[test]
    fn y_axis_min_is_a_multiple_of_ten() {
        for min in [3.0, 17.5, 42.0, 63.7, 88.8] {
            let value = ComplianceTrendReport::y_axis_min(&series(vec![min, 100.0]));
            assert_eq!(value % 10.0, 0.0, "min {min} gave {value}");
            assert!(value >= 0.0);
            assert!(value <= min);
        }
    }

    #[test]
    fn labels_follow_the_period() {
        let series = series(vec![90.0, 91.0]);
        assert_eq!(
            ComplianceTrendReport::labels(&series, Period::Monthly),
            vec!["Jan 2024", "Feb 2024"]
        );
    }

    #[test]
    fn title_capitalizes_the_period() {
        assert_eq!(
            ComplianceTrendReport::title(Period::Yearly),
            "Yearly Compliance and Reliability Trends"
        );
    }
}
