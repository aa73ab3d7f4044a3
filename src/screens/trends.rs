use iced::widget::canvas::Canvas;
use iced::widget::{column, container, pick_list, row, text, Space};
use iced::{Element, Fill, Length};

use crate::message::Message;
use crate::metrics::{Kpi, Period, TrendSeries};
use crate::reports::ComplianceTrendReport;
use crate::theme::DRAWER_TEXT_INACTIVE;

pub fn view<'a>(
    selected: Period,
    trend: Option<&'a (Period, TrendSeries)>,
    loading: bool,
    error: Option<&'a str>,
) -> Element<'a, Message> {
    // The title reflects the period of the data on screen, not the selector,
    // so labels and heading never disagree while a fetch is in flight.
    let title_period = trend.map(|(period, _)| *period).unwrap_or(selected);

    let header = row![
        text(ComplianceTrendReport::title(title_period)).size(24),
        Space::new().width(Length::Fill),
        text("Period").size(14),
        pick_list(Period::ALL, Some(selected), Message::PeriodSelected),
    ]
    .spacing(12)
    .align_y(iced::Alignment::Center);

    let mut content = column![
        header,
        text(ComplianceTrendReport::subtitle())
            .size(13)
            .style(|_| iced::widget::text::Style {
                color: Some(DRAWER_TEXT_INACTIVE),
            }),
    ]
    .spacing(16);

    match trend {
        Some((period, series)) => {
            let chart = ComplianceTrendReport::chart(series, *period);

            let legend = row(Kpi::ALL.into_iter().map(|kpi| {
                let color = ComplianceTrendReport::series_color(kpi);
                text(format!("\u{25A0} {}", kpi.label()))
                    .size(12)
                    .style(move |_| iced::widget::text::Style { color: Some(color) })
                    .into()
            }))
            .spacing(16);

            let section = column![Canvas::new(chart).width(Fill).height(360), legend].spacing(8);

            content = content.push(
                container(section)
                    .padding(16)
                    .width(Length::Fill)
                    .style(|theme| iced::widget::container::bordered_box(theme)),
            );

            if loading {
                content = content.push(text("Updating trend data...").size(13));
            }
        }
        None if loading => {
            content = content.push(text("Loading trend data...").size(14));
        }
        None => {
            let message = error.unwrap_or("No trend data available yet.");
            content = content.push(text(message).size(14));
        }
    }

    container(content).padding(24).into()
}
