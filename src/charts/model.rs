use iced::Color;

#[derive(Debug, Clone)]
pub struct PieSlice {
    pub label: String,
    pub count: u64,
    pub color: Color,
}

impl PieSlice {
    pub fn new(label: impl Into<String>, count: u64, color: Color) -> Self {
        Self {
            label: label.into(),
            count,
            color,
        }
    }
}

/// Tooltip percentage for one slice. A zero total yields 0 rather than a
/// division by zero.
pub fn slice_percentage(count: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }

    (100.0 * count as f64 / total as f64).round() as u32
}

/// Point marker drawn on each sample of a line series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Triangle,
    Square,
    Diamond,
}

#[derive(Debug, Clone)]
pub struct LineSeries {
    pub name: String,
    pub color: Color,
    pub points: Vec<(f32, f32)>,
    pub stroke_width: f32,
    pub marker: Marker,
    pub fill_area: bool,
}

impl LineSeries {
    pub fn new(name: impl Into<String>, color: Color, points: Vec<(f32, f32)>) -> Self {
        Self {
            name: name.into(),
            color,
            points,
            stroke_width: 2.0,
            marker: Marker::Circle,
            fill_area: false,
        }
    }

    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    pub fn with_fill_area(mut self, fill: bool) -> Self {
        self.fill_area = fill;
        self
    }
}

#[derive(Debug, Clone)]
pub struct LineChartConfig {
    pub padding: f32,
    pub grid_lines: usize,
    pub x_caption: Option<String>,
    pub y_caption: Option<String>,
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            padding: 40.0,
            grid_lines: 5,
            x_caption: None,
            y_caption: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_rounds_to_nearest_integer() {
        assert_eq!(slice_percentage(1, 3), 33);
        assert_eq!(slice_percentage(2, 3), 67);
        assert_eq!(slice_percentage(1, 2), 50);
        assert_eq!(slice_percentage(5, 5), 100);
        assert_eq!(slice_percentage(0, 5), 0);
    }

    #[test]
    fn zero_total_yields_zero_percent() {
        assert_eq!(slice_percentage(0, 0), 0);
    }
}
