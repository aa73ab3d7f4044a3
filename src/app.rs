use std::time::Duration;

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Background, Element, Length, Task, Theme};
use tracing::{error, info};

use crate::api::ApiClient;
use crate::message::Message;
use crate::metrics::{MetricsSnapshot, Period, TrendSeries};
use crate::screens::Page;
use crate::theme::{
    ACCENT, BANNER_BG, BANNER_TEXT, DRAWER_BG, DRAWER_ITEM_BG, DRAWER_TEXT_ACTIVE,
    DRAWER_TEXT_INACTIVE,
};

const BANNER_TTL: Duration = Duration::from_secs(5);

pub struct App {
    theme: Theme,
    api: ApiClient,
    current_page: Page,
    sidebar_collapsed: bool,

    snapshot: Option<MetricsSnapshot>,
    snapshot_loading: bool,
    snapshot_error: Option<String>,

    selected_period: Period,
    trend: Option<(Period, TrendSeries)>,
    trend_loading: bool,
    trend_error: Option<String>,

    banner: Option<String>,
    banner_generation: u64,
}

impl App {
    pub fn new(api: ApiClient) -> (Self, Task<Message>) {
        let app = Self {
            theme: Theme::Dark,
            api,
            current_page: Page::Overview,
            sidebar_collapsed: true,
            snapshot: None,
            snapshot_loading: true,
            snapshot_error: None,
            selected_period: Period::default(),
            trend: None,
            trend_loading: true,
            trend_error: None,
            banner: None,
            banner_generation: 0,
        };

        let startup = Task::batch([app.load_snapshot(), app.load_trend(app.selected_period)]);
        (app, startup)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ToggleSidebar => {
                self.sidebar_collapsed = !self.sidebar_collapsed;
                Task::none()
            }
            Message::Navigate(page) => {
                self.current_page = page;
                Task::none()
            }
            Message::RefreshSnapshot => {
                self.snapshot_loading = true;
                self.load_snapshot()
            }
            Message::SnapshotLoaded(result) => {
                self.snapshot_loading = false;
                match result {
                    Ok(snapshot) => {
                        info!(
                            effective_reliability = snapshot.effective_reliability,
                            "snapshot updated"
                        );
                        self.snapshot_error = None;
                        self.snapshot = Some(snapshot);
                        Task::none()
                    }
                    Err(message) => {
                        // Previously rendered values stay on screen; only the
                        // banner reports the failure.
                        if self.snapshot.is_none() {
                            self.snapshot_error = Some(message.clone());
                        }
                        self.show_banner(format!("Failed to load latest metrics: {message}"))
                    }
                }
            }
            Message::PeriodSelected(period) => {
                self.selected_period = period;
                self.trend_loading = true;
                self.load_trend(period)
            }
            Message::TrendLoaded { period, result } => {
                self.trend_loading = false;
                match result {
                    Ok(series) => {
                        // No cancellation of in-flight fetches; the last
                        // resolved response wins and fully replaces the chart.
                        self.trend_error = None;
                        self.trend = Some((period, series));
                        Task::none()
                    }
                    Err(message) => {
                        if self.trend.is_none() {
                            self.trend_error = Some(message.clone());
                        }
                        self.show_banner(format!("Failed to load trend data: {message}"))
                    }
                }
            }
            Message::BannerExpired(generation) => {
                if generation == self.banner_generation {
                    self.banner = None;
                }
                Task::none()
            }
        }
    }

    pub fn view<'a>(&'a self) -> Element<'a, Message> {
        let body = row![self.sidebar_view(), self.content_view()].height(Length::Fill);

        let mut layout = column![];
        if let Some(message) = &self.banner {
            layout = layout.push(banner_view(message));
        }

        layout.push(body).into()
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn load_snapshot(&self) -> Task<Message> {
        let api = self.api.clone();
        Task::perform(
            async move { api.fetch_snapshot().await.map_err(|err| err.to_string()) },
            Message::SnapshotLoaded,
        )
    }

    fn load_trend(&self, period: Period) -> Task<Message> {
        let api = self.api.clone();
        Task::perform(
            async move { api.fetch_trend(period).await.map_err(|err| err.to_string()) },
            move |result| Message::TrendLoaded { period, result },
        )
    }

    fn show_banner(&mut self, message: String) -> Task<Message> {
        error!(%message, "dashboard fetch failed");
        self.banner_generation += 1;
        let generation = self.banner_generation;
        self.banner = Some(message);

        Task::perform(tokio::time::sleep(BANNER_TTL), move |_| {
            Message::BannerExpired(generation)
        })
    }

    fn sidebar_view<'a>(&'a self) -> Element<'a, Message> {
        let toggle_label = if self.sidebar_collapsed { ">" } else { "<" };

        let toggle = button(text(toggle_label).size(18))
            .on_press(Message::ToggleSidebar)
            .style(|_theme, status| {
                let mut background = ACCENT;
                if matches!(status, button::Status::Hovered) {
                    background.a = 0.85;
                }
                if matches!(status, button::Status::Pressed) {
                    background.a = 0.7;
                }

                button::Style {
                    background: Some(Background::Color(background)),
                    text_color: DRAWER_TEXT_ACTIVE,
                    ..Default::default()
                }
            });

        let pages = [Page::Overview, Page::Trends]
            .into_iter()
            .map(|page| self.sidebar_button(page));

        let content = column![toggle, Space::new().height(Length::Fixed(12.0))]
            .push(column(pages).spacing(6))
            .spacing(12)
            .padding(12)
            .width(if self.sidebar_collapsed {
                Length::Fixed(64.0)
            } else {
                Length::Fixed(220.0)
            })
            .height(Length::Fill);

        container(content)
            .style(|_| iced::widget::container::background(DRAWER_BG))
            .into()
    }

    fn sidebar_button<'a>(&'a self, page: Page) -> Element<'a, Message> {
        let selected = self.current_page == page;
        let label = if self.sidebar_collapsed {
            &page.label()[..1]
        } else {
            page.label()
        };

        let label_text = text(label).style(move |_| iced::widget::text::Style {
            color: Some(if selected {
                DRAWER_TEXT_ACTIVE
            } else {
                DRAWER_TEXT_INACTIVE
            }),
        });

        let row_content = if self.sidebar_collapsed {
            row![
                Space::new().width(Length::Fill),
                label_text,
                Space::new().width(Length::Fill)
            ]
            .align_y(Alignment::Center)
        } else {
            row![label_text].spacing(12).align_y(Alignment::Center)
        };

        button(row_content)
            .on_press(Message::Navigate(page))
            .width(Length::Fill)
            .style(move |_, status| {
                let background = if selected { ACCENT } else { DRAWER_ITEM_BG };

                let mut color = background;
                if matches!(status, button::Status::Hovered) {
                    color.a = 0.85;
                }
                if matches!(status, button::Status::Pressed) {
                    color.a = 0.7;
                }

                button::Style {
                    background: Some(Background::Color(color)),
                    ..Default::default()
                }
            })
            .padding(8)
            .into()
    }

    fn content_view<'a>(&'a self) -> Element<'a, Message> {
        match self.current_page {
            Page::Overview => crate::screens::overview::view(
                self.snapshot.as_ref(),
                self.snapshot_loading,
                self.snapshot_error.as_deref(),
            ),
            Page::Trends => crate::screens::trends::view(
                self.selected_period,
                self.trend.as_ref(),
                self.trend_loading,
                self.trend_error.as_deref(),
            ),
        }
    }
}

fn banner_view<'a>(message: &'a str) -> Element<'a, Message> {
    container(
        text(message)
            .size(14)
            .style(|_| iced::widget::text::Style {
                color: Some(BANNER_TEXT),
            }),
    )
    .padding(12)
    .width(Length::Fill)
    .style(|_| iced::widget::container::background(BANNER_BG))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_snapshot() -> MetricsSnapshot {
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

    fn sample_series(value: f64) -> TrendSeries {
        TrendSeries {
            dates: vec!["2024-01".into()],
            testing_compliance: vec![value],
            inspection_compliance: vec![value],
            coverage_ratio: vec![value],
            effective_reliability: vec![value],
        }
    }

    fn app() -> App {
        App::new(ApiClient::new("http://127.0.0.1:1")).0
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_snapshot() {
        let mut app = app();
        let _ = app.update(Message::SnapshotLoaded(Ok(sample_snapshot())));
        let _ = app.update(Message::SnapshotLoaded(Err("connection refused".into())));

        let snapshot = app.snapshot.as_ref().expect("snapshot should survive");
        assert_eq!(snapshot.testing_compliance, 92.5);
        assert!(app.banner.is_some());
    }

    #[tokio::test]
    async fn snapshot_failure_does_not_touch_trend_state() {
        let mut app = app();
        let _ = app.update(Message::TrendLoaded {
            period: Period::Monthly,
            result: Ok(sample_series(90.0)),
        });
        let _ = app.update(Message::SnapshotLoaded(Err("boom".into())));

        assert!(app.trend.is_some());
        assert!(app.trend_error.is_none());
    }

    #[test]
    fn last_resolved_trend_wins() {
        let mut app = app();
        let _ = app.update(Message::PeriodSelected(Period::Yearly));
        let _ = app.update(Message::TrendLoaded {
            period: Period::Monthly,
            result: Ok(sample_series(90.0)),
        });
        let _ = app.update(Message::TrendLoaded {
            period: Period::Yearly,
            result: Ok(sample_series(91.0)),
        });

        let (period, series) = app.trend.as_ref().expect("trend should be set");
        assert_eq!(*period, Period::Yearly);
        assert_eq!(series.testing_compliance, vec![91.0]);
    }

    #[tokio::test]
    async fn stale_banner_timer_does_not_clear_newer_banner() {
        let mut app = app();
        let _ = app.update(Message::SnapshotLoaded(Err("first".into())));
        let first_generation = app.banner_generation;

        let _ = app.update(Message::TrendLoaded {
            period: Period::Monthly,
            result: Err("second".into()),
        });

        let _ = app.update(Message::BannerExpired(first_generation));
        assert!(app.banner.is_some(), "newer banner must survive stale timer");

        let current = app.banner_generation;
        let _ = app.update(Message::BannerExpired(current));
        assert!(app.banner.is_none());
    }
}
