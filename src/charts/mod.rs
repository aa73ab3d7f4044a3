pub mod line;
pub mod model;
pub mod pie;

pub use line::LineChart;
pub use model::{LineChartConfig, LineSeries, Marker, PieSlice};
pub use pie::PieChart;
