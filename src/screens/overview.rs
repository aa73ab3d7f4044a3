use iced::widget::canvas::Canvas;
use iced::widget::{button, column, container, row, text, Space};
use iced::{Element, Fill, Length};

use crate::message::Message;
use crate::metrics::{format_percent, Kpi, MetricsSnapshot};
use crate::reports::DistributionReport;
use crate::theme::{
    accent_button_style, DRAWER_TEXT_INACTIVE, STATUS_ACHIEVED, STATUS_IN_PROGRESS,
};

pub fn view<'a>(
    snapshot: Option<&'a MetricsSnapshot>,
    loading: bool,
    error: Option<&'a str>,
) -> Element<'a, Message> {
    let header = row![
        text("Reliability Overview").size(28),
        Space::new().width(Length::Fill),
        button("Refresh")
            .style(accent_button_style)
            .on_press(Message::RefreshSnapshot),
    ]
    .align_y(iced::Alignment::Center);

    let mut content = column![header].spacing(24);

    match snapshot {
        Some(snapshot) => {
            let cards = row(Kpi::ALL
                .into_iter()
                .map(|kpi| kpi_card(kpi, snapshot.kpi_value(kpi))))
            .spacing(16);
            content = content.push(cards);

            let charts = row![
                chart_section(DistributionReport::coverage(snapshot)),
                chart_section(DistributionReport::inspection(snapshot)),
                chart_section(DistributionReport::testing(snapshot)),
            ]
            .spacing(16);
            content = content.push(charts);
        }
        None if loading => {
            content = content.push(text("Loading latest metrics...").size(14));
        }
        None => {
            let message = error.unwrap_or("No metrics available yet.");
            content = content.push(text(message).size(14));
        }
    }

    container(content).padding(24).into()
}

fn kpi_card<'a>(kpi: Kpi, value: f64) -> Element<'a, Message> {
    let status_color = if kpi.is_achieved(value) {
        STATUS_ACHIEVED
    } else {
        STATUS_IN_PROGRESS
    };

    let card = column![
        text(kpi.label()).size(14).style(|_| iced::widget::text::Style {
            color: Some(DRAWER_TEXT_INACTIVE),
        }),
        text(format_percent(value)).size(30),
        text(format!("Target: {:.0}%", kpi.threshold()))
            .size(12)
            .style(|_| iced::widget::text::Style {
                color: Some(DRAWER_TEXT_INACTIVE),
            }),
        text(kpi.status_text(value))
            .size(13)
            .style(move |_| iced::widget::text::Style {
                color: Some(status_color),
            }),
    ]
    .spacing(6);

    container(card)
        .padding(16)
        .width(Length::Fill)
        .style(|theme| iced::widget::container::bordered_box(theme))
        .into()
}

fn chart_section<'a>(report: DistributionReport) -> Element<'a, Message> {
    let legend = row(report.slices().iter().map(|slice| {
        let color = slice.color;
        text(format!("\u{25A0} {} ({})", slice.label, slice.count))
            .size(12)
            .style(move |_| iced::widget::text::Style { color: Some(color) })
            .into()
    }))
    .spacing(12);

    let mut section = column![
        text(report.title()).size(18),
        text(report.subtitle()).size(13).style(|_| iced::widget::text::Style {
            color: Some(DRAWER_TEXT_INACTIVE),
        }),
    ]
    .spacing(8);

    let empty = report.total() == 0;
    section = section
        .push(Canvas::new(report.chart()).width(Fill).height(220))
        .push(legend);

    if empty {
        section = section.push(text("No substations recorded yet.").size(13));
    }

    container(section)
        .padding(16)
        .width(Length::Fill)
        .style(|theme| iced::widget::container::bordered_box(theme))
        .into()
}
