use iced::mouse;
use iced::widget::canvas::{self, Cache, Frame, Geometry, Path, Text};
use iced::{Point, Radians, Rectangle, Renderer, Theme};

use super::model::{slice_percentage, PieSlice};

/// Categorical distribution chart. Rebuilt from scratch on every snapshot;
/// there is no in-place mutation of a live chart.
pub struct PieChart {
    cache: Cache,
    slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn new(slices: Vec<PieSlice>) -> Self {
        Self {
            cache: Cache::new(),
            slices,
        }
    }

    fn total(&self) -> u64 {
        self.slices.iter().map(|slice| slice.count).sum()
    }
}

impl canvas::Program<crate::message::Message> for PieChart {
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
        if self.slices.is_empty() {
            return geometries;
        }

        let total = self.total();

        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            if total == 0 {
                return;
            }

            let size = frame.size();
            let center = Point::new(size.width / 2.0, size.height / 2.0);
            let radius = size.width.min(size.height) * 0.4;

            let mut start = -std::f32::consts::FRAC_PI_2;
            for slice in &self.slices {
                let sweep = (slice.count as f32 / total as f32) * std::f32::consts::TAU;
                let end = start + sweep;

                let path = Path::new(|builder| {
                    builder.move_to(center);
                    builder.arc(canvas::path::Arc {
                        center,
                        radius,
                        start_angle: Radians(start),
                        end_angle: Radians(end),
                    });
                    builder.close();
                });

                frame.fill(&path, slice.color);
                start = end;
            }
        });

        geometries.push(geometry);

        if let Some(cursor_pos) = cursor.position_in(bounds) {
            if let Some(index) = hit_test_slice(&self.slices, total, bounds, cursor_pos) {
                let slice = &self.slices[index];
                let percentage = slice_percentage(slice.count, total);

                let mut overlay = Frame::new(renderer, bounds.size());
                let palette = theme.extended_palette();

                overlay.fill_text(Text {
                    content: format!("{}: {} ({percentage}%)", slice.label, slice.count),
                    position: Point::new(cursor_pos.x + 8.0, cursor_pos.y - 8.0),
                    color: palette.background.base.text,
                    size: 12.0.into(),
                    ..Text::default()
                });

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
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

fn hit_test_slice(
    slices: &[PieSlice],
    total: u64,
    bounds: Rectangle,
    cursor_pos: Point,
) -> Option<usize> {
    if slices.is_empty() || total == 0 {
        return None;
    }

    let size = bounds.size();
    let center = Point::new(size.width / 2.0, size.height / 2.0);
    let radius = size.width.min(size.height) * 0.4;

    let dx = cursor_pos.x - center.x;
    let dy = cursor_pos.y - center.y;
    let distance = (dx * dx + dy * dy).sqrt();
    if distance > radius {
        return None;
    }

    let mut angle = dy.atan2(dx);
    if angle < -std::f32::consts::FRAC_PI_2 {
        angle += std::f32::consts::TAU;
    }

    let mut start = -std::f32::consts::FRAC_PI_2;
    for (index, slice) in slices.iter().enumerate() {
        let sweep = (slice.count as f32 / total as f32) * std::f32::consts::TAU;
        let end = start + sweep;
        if angle >= start && angle <= end {
            return Some(index);
        }
        start = end;
    }

    None
}
