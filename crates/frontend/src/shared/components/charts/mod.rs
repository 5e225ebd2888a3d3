//! Charts drawn with plain SVG and CSS widths.
//!
//! Components take already shaped records plus a title; anything they do to
//! the data is local (sorting, scaling to the largest value).

pub mod bar_chart;
pub mod donut_chart;
pub mod geometry;
pub mod grouped_bar_chart;
pub mod line_chart;
pub mod stacked_bar_chart;

pub use bar_chart::BarChart;
pub use donut_chart::DonutChart;
pub use grouped_bar_chart::GroupedBarChart;
pub use line_chart::LineChart;
pub use stacked_bar_chart::StackedBarChart;

/// One labelled value.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDatum {
    pub label: String,
    pub value: f64,
}

impl ChartDatum {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// A labelled row split into one value per series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesRow {
    pub label: String,
    pub values: Vec<f64>,
}

impl SeriesRow {
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

/// A named line of a line chart.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub name: String,
    pub values: Vec<f64>,
}

/// Default value label: whole numbers with thousands separators.
pub fn format_count(value: f64) -> String {
    crate::shared::number_format::format_thousands(value.round() as i64)
}
