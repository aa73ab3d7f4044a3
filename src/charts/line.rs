use iced::mouse;
use iced::widget::canvas::{self, Cache, Frame, Geometry, Path, Stroke, Text};
use iced::{Color, Point, Rectangle, Renderer, Size, Theme};

use super::model::{LineChartConfig, LineSeries, Marker};

/// Multi-series line chart over a categorical x-axis (one slot per date
/// label). The y-range is fixed by the caller; every period switch builds a
/// fresh chart value, so no stale instance survives a re-render.
pub struct LineChart {
    cache: Cache,
    labels: Vec<String>,
    series: Vec<LineSeries>,
    y_range: (f32, f32),
    config: LineChartConfig,
}

impl LineChart {
    pub fn new(labels: Vec<String>, series: Vec<LineSeries>) -> Self {
        Self {
            cache: Cache::new(),
            labels,
            series,
            y_range: (0.0, 100.0),
            config: LineChartConfig::default(),
        }
    }

    pub fn with_y_range(mut self, range: (f32, f32)) -> Self {
        self.y_range = range;
        self
    }

    pub fn with_config(mut self, config: LineChartConfig) -> Self {
        self.config = config;
        self
    }

    fn slot_x(&self, index: usize, left: f32, right: f32) -> f32 {
        let slots = self.labels.len();
        if slots <= 1 {
            return (left + right) / 2.0;
        }
        left + (index as f32 / (slots - 1) as f32) * (right - left)
    }

    fn value_y(&self, value: f32, top: f32, bottom: f32) -> f32 {
        let (y_min, y_max) = self.y_range;
        let span = (y_max - y_min).max(1.0);
        bottom - ((value - y_min) / span) * (bottom - top)
    }
}

impl canvas::Program<crate::message::Message> for LineChart {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &canvas::Event,
        _bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Option<canvas::Action<crate::message::Message>> {
        match event {
            canvas::Event::Mouse(mouse::Event::CursorMoved { .. })
            | canvas::Event::Mouse(mouse::Event::CursorEntered)
            | canvas::Event::Mouse(mouse::Event::CursorLeft) => {
                Some(canvas::Action::request_redraw())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut geometries = Vec::new();
        if self.labels.is_empty() {
            return geometries;
        }

        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            let palette = theme.extended_palette();
            let size = frame.size();
            let padding = self.config.padding;

            if size.width <= padding * 2.0 || size.height <= padding * 2.0 {
                return;
            }

            let left = padding;
            let top = padding;
            let right = size.width - padding;
            let bottom = size.height - padding;

            let x_axis = Path::line(Point::new(left, bottom), Point::new(right, bottom));
            let y_axis = Path::line(Point::new(left, bottom), Point::new(left, top));

            frame.stroke(
                &x_axis,
                Stroke::default()
                    .with_width(1.0)
                    .with_color(palette.background.weak.color),
            );
            frame.stroke(
                &y_axis,
                Stroke::default()
                    .with_width(1.0)
                    .with_color(palette.background.weak.color),
            );

            let (y_min, y_max) = self.y_range;
            let grid_lines = self.config.grid_lines.max(1);
            for i in 0..=grid_lines {
                let t = i as f32 / grid_lines as f32;
                let y = bottom - t * (bottom - top);
                let line = Path::line(Point::new(left, y), Point::new(right, y));
                frame.stroke(
                    &line,
                    Stroke::default()
                        .with_width(1.0)
                        .with_color(palette.background.weak.color),
                );

                let value = y_min + t * (y_max - y_min);
                frame.fill_text(Text {
                    content: format!("{value:.0}"),
                    position: Point::new(left - 8.0, y - 6.0),
                    color: palette.background.base.text,
                    size: 11.0.into(),
                    align_x: iced::alignment::Horizontal::Right.into(),
                    ..Text::default()
                });
            }

            // Subsample x labels so long series stay readable.
            let label_step = (self.labels.len() + 11) / 12;
            for (index, label) in self.labels.iter().enumerate() {
                if index % label_step.max(1) != 0 {
                    continue;
                }

                let x = self.slot_x(index, left, right);
                frame.fill_text(Text {
                    content: label.clone(),
                    position: Point::new(x, bottom + 8.0),
                    color: palette.background.base.text,
                    size: 11.0.into(),
                    align_x: iced::alignment::Horizontal::Center.into(),
                    ..Text::default()
                });
            }

            if let Some(caption) = &self.config.x_caption {
                frame.fill_text(Text {
                    content: caption.clone(),
                    position: Point::new((left + right) / 2.0, bottom + 24.0),
                    color: palette.background.base.text,
                    size: 12.0.into(),
                    align_x: iced::alignment::Horizontal::Center.into(),
                    ..Text::default()
                });
            }

            if let Some(caption) = &self.config.y_caption {
                frame.fill_text(Text {
                    content: caption.clone(),
                    position: Point::new(left - 8.0, top - 24.0),
                    color: palette.background.base.text,
                    size: 12.0.into(),
                    ..Text::default()
                });
            }

            for series in &self.series {
                if series.fill_area && series.points.len() >= 2 {
                    let area = Path::new(|builder| {
                        for (index, (slot, value)) in series.points.iter().enumerate() {
                            let x = self.slot_x(*slot as usize, left, right);
                            let y = self.value_y(*value, top, bottom);
                            if index == 0 {
                                builder.move_to(Point::new(x, bottom));
                            }
                            builder.line_to(Point::new(x, y));
                        }
                        if let Some((slot, _)) = series.points.last() {
                            let x = self.slot_x(*slot as usize, left, right);
                            builder.line_to(Point::new(x, bottom));
                        }
                        builder.close();
                    });

                    frame.fill(
                        &area,
                        Color {
                            a: 0.12,
                            ..series.color
                        },
                    );
                }

                if series.points.len() >= 2 {
                    let path = Path::new(|builder| {
                        for (index, (slot, value)) in series.points.iter().enumerate() {
                            let x = self.slot_x(*slot as usize, left, right);
                            let y = self.value_y(*value, top, bottom);
                            if index == 0 {
                                builder.move_to(Point::new(x, y));
                            } else {
                                builder.line_to(Point::new(x, y));
                            }
                        }
                    });

                    frame.stroke(
                        &path,
                        Stroke::default()
                            .with_width(series.stroke_width)
                            .with_color(series.color),
                    );
                }

                for (slot, value) in &series.points {
                    let x = self.slot_x(*slot as usize, left, right);
                    let y = self.value_y(*value, top, bottom);
                    let marker = marker_path(series.marker, Point::new(x, y), 3.5);
                    frame.fill(&marker, series.color);
                }
            }
        });

        geometries.push(geometry);

        if let Some(cursor_pos) = cursor.position_in(bounds) {
            let padding = self.config.padding;
            let left = padding;
            let top = padding;
            let right = bounds.width - padding;
            let bottom = bounds.height - padding;

            if cursor_pos.x >= left
                && cursor_pos.x <= right
                && cursor_pos.y >= top
                && cursor_pos.y <= bottom
            {
                let mut overlay = Frame::new(renderer, bounds.size());
                let palette = theme.extended_palette();

                let mut nearest: Option<((f32, f32, f32, &str, Color), f32)> = None;
                for series in &self.series {
                    for (slot, value) in &series.points {
                        let screen_x = self.slot_x(*slot as usize, left, right);
                        let screen_y = self.value_y(*value, top, bottom);
                        let dx = screen_x - cursor_pos.x;
                        let dy = screen_y - cursor_pos.y;
                        let distance = dx * dx + dy * dy;

                        if nearest.as_ref().map(|(_, d)| distance < *d).unwrap_or(true) {
                            nearest = Some((
                                (screen_x, screen_y, *value, series.name.as_str(), series.color),
                                distance,
                            ));
                        }
                    }
                }

                if let Some(((sx, sy, value, name, color), _)) = nearest {
                    let v_line = Path::line(Point::new(sx, top), Point::new(sx, bottom));
                    overlay.stroke(
                        &v_line,
                        Stroke::default()
                            .with_width(1.0)
                            .with_color(palette.background.weak.color),
                    );

                    let point = Path::circle(Point::new(sx, sy), 4.0);
                    overlay.fill(&point, color);

                    let label = format!("{name}: {value:.2}%");
                    let tooltip_padding = 6.0;
                    let tooltip_width = label.len() as f32 * 7.0 + tooltip_padding * 2.0;
                    let tooltip_height = 20.0;
                    let mut tooltip_x = sx + 10.0;
                    let mut tooltip_y = sy - tooltip_height - 10.0;

                    if tooltip_x + tooltip_width > right {
                        tooltip_x = sx - tooltip_width - 10.0;
                    }
                    if tooltip_y < top {
                        tooltip_y = sy + 10.0;
                    }

                    let rect = Path::rectangle(
                        Point::new(tooltip_x, tooltip_y),
                        Size::new(tooltip_width, tooltip_height),
                    );
                    overlay.fill(&rect, palette.background.strong.color);
                    overlay.stroke(
                        &rect,
                        Stroke::default()
                            .with_width(1.0)
                            .with_color(palette.background.weak.color),
                    );
                    overlay.fill_text(Text {
                        content: label,
                        position: Point::new(tooltip_x + tooltip_padding, tooltip_y + 4.0),
                        color: palette.background.strong.text,
                        size: 12.0.into(),
                        ..Text::default()
                    });
                }

                geometries.push(overlay.into_geometry());
            }
        }

        geometries
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.position_in(bounds).is_some() {
            mouse::Interaction::Crosshair
        } else {
            mouse::Interaction::default()
        }
    }
}

fn marker_path(marker: Marker, center: Point, radius: f32) -> Path {
    match marker {
        Marker::Circle => Path::circle(center, radius),
        Marker::Square => Path::rectangle(
            Point::new(center.x - radius, center.y - radius),
            Size::new(radius * 2.0, radius * 2.0),
        ),
        Marker::Triangle => Path::new(|builder| {
            builder.move_to(Point::new(center.x, center.y - radius));
            builder.line_to(Point::new(center.x + radius, center.y + radius));
            builder.line_to(Point::new(center.x - radius, center.y + radius));
            builder.close();
        }),
        Marker::Diamond => Path::new(|builder| {
            builder.move_to(Point::new(center.x, center.y - radius));
            builder.line_to(Point::new(center.x + radius, center.y));
            builder.line_to(Point::new(center.x, center.y + radius));
            builder.line_to(Point::new(center.x - radius, center.y));
            builder.close();
        }),
    }
}
