//! Line chart configuration for the monthly total market value.
//!
//! The core produces the labels, values and styling; the frontend only
//! draws them.

use chrono::NaiveDate;

use crate::config::ChartStyle;
use crate::MonthlyMarketValue;

#[derive(Debug, Clone, PartialEq)]
pub struct LineChartConfig {
    pub title: String,
    pub series_label: String,
    /// One label per point, e.g. "2024-03"
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub border_color: (u8, u8, u8),
    pub background_color: (u8, u8, u8),
    pub fill_opacity: f64,
}

impl LineChartConfig {
    /// Single labeled series, points kept in server order
    pub fn from_points(points: &[MonthlyMarketValue], style: &ChartStyle) -> Self {
        Self {
            title: style.title.clone(),
            series_label: style.series_label.clone(),
            labels: points.iter().map(|p| month_label(&p.month)).collect(),
            values: points.iter().map(|p| p.total_market_value).collect(),
            border_color: style.border_color,
            background_color: style.background_color,
            fill_opacity: style.fill_opacity,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Y-axis range with 10% padding, starting at zero unless values go below
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        let min = self.values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if !min.is_finite() || !max.is_finite() {
            return None;
        }

        let padding = (max - min).max(1.0) * 0.1;
        Some((0.0_f64.min(min - padding), max + padding))
    }
}

/// "2024-03-01" becomes "2024-03"; anything unparsable is shown as sent
pub fn month_label(raw: &str) -> String {
    let date_part = raw.split(['T', ' ']).next().unwrap_or(raw);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%Y-%m").to_string(),
        Err(_) => raw.to_string(),
    }
}
