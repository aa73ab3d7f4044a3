use crate::metrics::{MetricsSnapshot, Period, TrendSeries};

#[derive(Debug, Clone)]
pub enum Message {
    ToggleSidebar,
    Navigate(crate::screens::Page),
    RefreshSnapshot,
    SnapshotLoaded(Result<MetricsSnapshot, String>),
    PeriodSelected(Period),
    TrendLoaded {
        period: Period,
        result: Result<TrendSeries, String>,
    },
    BannerExpired(u64),
}
